//! GR-Athena++ code-unit table checked against closed-form unit-system factors
use approx::assert_relative_eq;
use ctor::ctor;
use mc_unit_core::unit_system::{GRAVITATIONAL_CONSTANT, SOLAR_MASS, SPEED_OF_LIGHT};
use mc_unit_core::{CodeConvention, Constant, Quantity, UnitSystems};
use tracing_subscriber::EnvFilter;

#[ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_rho_conversion_matches_closed_form() {
    let systems = UnitSystems::new();
    let gra = CodeConvention::gr_athena(&systems);
    let gs = systems.geometric_solar();
    let cgs = systems.cgs();

    let rho_gra: f64 = 1e-12;
    let rho_cgs = rho_gra * gra["rho [g cm^-3]"];
    assert!(rho_cgs.value().is_finite());
    assert!(rho_cgs.value() > 0.0);
    // f64 * Constant keeps the table's label
    assert_eq!(rho_cgs.unit(), "gra_cu -> g cm^-3");

    let closed_form = (cgs.density().value() / gs.density().value())
        * (cgs.mass().value() / gs.mass().value());
    assert_relative_eq!(rho_cgs.value(), rho_gra * closed_form, max_relative = 1e-14);

    // ~6.18e17 g cm^-3 per code unit
    assert_relative_eq!(gra["rho [g cm^-3]"].value(), 6.176e17, max_relative = 1e-3);
}

#[test]
fn test_entries_agree_with_geometric_solar_lengths() {
    let systems = UnitSystems::new();
    let gra = CodeConvention::gr_athena(&systems);

    let gm_over_c2 = GRAVITATIONAL_CONSTANT * SOLAR_MASS / (SPEED_OF_LIGHT * SPEED_OF_LIGHT);
    assert_relative_eq!(gra["l [km]"].value(), gm_over_c2 * 1e-5, max_relative = 1e-14);
    assert_relative_eq!(
        gra["n [cm^-3]"].value(),
        1.0 / gm_over_c2.powi(3),
        max_relative = 1e-14
    );
    assert_relative_eq!(
        gra["t [ms]"].value(),
        1e3 * gm_over_c2 / SPEED_OF_LIGHT,
        max_relative = 1e-14
    );
}

#[test]
fn test_composite_entries() {
    let systems = UnitSystems::new();
    let gra = CodeConvention::gr_athena(&systems);
    let gs = systems.geometric_solar();
    let cgs = systems.cgs();

    let energy = gs.convert(cgs, Quantity::Energy, 1.0_f64);
    let time = gs.convert(cgs, Quantity::Time, 1.0_f64);
    let length = gs.convert(cgs, Quantity::Length, 1.0_f64);

    // Luminosity unit ~ 3.63e59 erg/s (c^5 / G)
    assert_relative_eq!(gra["L [erg s^-1]"].value(), energy / time, max_relative = 1e-15);
    assert_relative_eq!(gra["L [erg s^-1]"].value(), 3.63e59, max_relative = 1e-2);

    assert_relative_eq!(
        gra["u [erg cm^-3]"].value(),
        energy / (length * length * length),
        max_relative = 1e-14
    );

    // E [MeV]: Msun c^2 in MeV
    let msun_mev = systems.nuclear().msun().value();
    assert_relative_eq!(gra["E [MeV]"].value(), msun_mev, max_relative = 1e-14);

    // B [G] ~ 8.35e19 G
    assert_relative_eq!(gra["B [G]"].value(), 8.35e19, max_relative = 1e-2);
}

#[test]
fn test_table_is_iterable_and_exportable() {
    let gra = CodeConvention::gr_athena(&UnitSystems::new());
    assert_eq!(gra.code(), "GR-Athena++");
    assert_eq!(gra.iter().count(), 11);
    assert!(gra.iter().all(|(_, c)| c.value().is_finite() && c.value() > 0.0));
    assert!(gra.iter().all(|(_, c)| c.unit().starts_with("gra_cu -> ")));

    let json = serde_json::to_value(&gra).unwrap();
    assert_eq!(json["code"], "GR-Athena++");
    assert_eq!(json["table"]["T [MeV]"]["value"], 1.0);
    let constant: Constant = gra["T [MeV]"];
    assert_eq!(json["table"]["T [MeV]"]["unit"], constant.unit());
}

#[test]
fn test_to_physical_on_arrays() {
    let gra = CodeConvention::gr_athena(&UnitSystems::new());
    let t_ms = gra.to_physical("t [ms]", [1.0_f64, 1000.0]).unwrap();
    assert_relative_eq!(t_ms[1], 1000.0 * gra["t [ms]"].value(), max_relative = 1e-15);
    assert!(gra.to_physical("t [s]", 1.0_f64).is_err());
}
