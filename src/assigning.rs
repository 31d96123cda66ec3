use crate::error_handling::*;
use crate::scanning::{is_identifier, parse_number};
use crate::variables::Variables;

/// Binds `name = value`, where the value is a number literal or an existing variable.
pub fn assign(line: &str, variables: &mut Variables) -> Result<()> {
    let mut parts = line.split('=');
    let (Some(name), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(CalcError::invalid_assignment);
    };
    let (name, value) = (name.trim(), value.trim());

    if !is_identifier(name) {
        return Err(CalcError::invalid_identifier);
    }

    let value = match parse_number(value) {
        Some(number) => number,
        None if is_identifier(value) => {
            variables.get(value).cloned().ok_or(CalcError::unknown_variable)?
        }
        None => return Err(CalcError::invalid_assignment),
    };

    tracing::debug!("{} = {}", name, value);
    variables.set(name, value);
    Ok(())
}
