pub mod error;
pub mod utils;

pub use error::{AbiError, Result, StarkcallError, ValidationError};
