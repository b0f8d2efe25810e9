use thiserror::Error;

pub type FdResult<T> = Result<T, FdError>;

#[derive(Error, Debug)]
pub enum FdError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
