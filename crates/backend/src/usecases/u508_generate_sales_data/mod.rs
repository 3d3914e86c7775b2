pub mod catalog;
pub mod error;
pub mod executor;
pub mod sampling;
pub mod targets;
pub mod writer;

pub use error::GenerateError;
pub use executor::{execute, generate, validate, GenerateSalesData};
