pub mod error;
pub mod validation;
