pub mod core;

pub use crate::core::arithmetic::{add, divide, multiply, subtract};
pub use crate::core::error::CalcError;
