use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    DivisionByZero,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::DivisionByZero => write!(f, "Cannot divide by zero"),
        }
    }
}

impl std::error::Error for CalcError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn division_by_zero_message() {
        let err = CalcError::DivisionByZero;
        assert_eq!(format!("{}", err), "Cannot divide by zero");
    }
    #[test] fn division_by_zero_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert_eq!(err.to_string(), "Cannot divide by zero");
    }
}
