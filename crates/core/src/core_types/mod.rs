//! Core types and utilities

pub mod constant;
pub mod quantity;
pub mod scalable;
pub mod table;

pub use constant::Constant;
pub use quantity::Quantity;
pub use scalable::Scalable;
pub use table::ConstantTable;
