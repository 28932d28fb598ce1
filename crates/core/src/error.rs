//! Error type shared by the conversion API

use crate::core_types::Quantity;

/// Errors raised at the point of misuse of the conversion API.
///
/// Every variant is synchronous and final: nothing here is transient, so callers
/// propagate rather than retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// Quantity name outside the closed quantity set
    UnknownQuantity(String),
    /// Target and quantity were given but there was no value to convert
    MissingValue(Quantity),
    /// Endpoint does not name one of the unit systems
    InvalidEndpoint(String),
    /// Label not present in a code-convention table
    UnknownEntry(String),
}

impl std::fmt::Display for UnitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitError::UnknownQuantity(name) => write!(f, "Unknown quantity '{name}'"),
            UnitError::MissingValue(quantity) => {
                write!(f, "Must provide a value to convert ({quantity})")
            }
            UnitError::InvalidEndpoint(name) => {
                write!(f, "'{name}' is not a unit system")
            }
            UnitError::UnknownEntry(label) => write!(f, "No conversion labelled '{label}'"),
        }
    }
}

impl std::error::Error for UnitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = UnitError::UnknownQuantity("bogus".to_string());
        assert_eq!(err.to_string(), "Unknown quantity 'bogus'");

        let err = UnitError::MissingValue(Quantity::Pressure);
        assert!(err.to_string().contains("pressure"));

        let err = UnitError::InvalidEndpoint("Planck".to_string());
        assert!(err.to_string().contains("Planck"));
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&UnitError::UnknownEntry("x [y]".to_string()));
    }
}
