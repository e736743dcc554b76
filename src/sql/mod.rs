//! SQL statement text for the products table. Values are always bound as parameters.

mod statements;
pub use statements::*;
