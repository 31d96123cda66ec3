use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Unknown command")]
    unknown_command,

    #[error("Unknown variable")]
    unknown_variable,

    #[error("Invalid identifier")]
    invalid_identifier,

    #[error("Invalid assignment")]
    invalid_assignment,

    #[error("Invalid expression")]
    invalid_expression,

    #[error(transparent)]
    io(#[from] std::io::Error),
}

impl CalcError {
    /// Recoverable errors are reported and the session moves on to the next line.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CalcError::io(_))
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

/// Logs why an expression was rejected and hands back the error to return.
pub fn invalid_expression(reason: &str) -> CalcError {
    tracing::debug!("invalid expression: {}", reason);
    CalcError::invalid_expression
}
