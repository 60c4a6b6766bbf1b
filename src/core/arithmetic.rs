use crate::core::error::CalcError;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    // Exact check; also catches -0.0.
    if b == 0.0 {
        Err(CalcError::DivisionByZero)
    } else {
        Ok(a / b)
    }
}
