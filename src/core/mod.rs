//! Core module tree for the calculator library.

pub mod arithmetic;
pub mod error;
