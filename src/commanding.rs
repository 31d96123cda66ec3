use crate::error_handling::*;
use crate::variables::Variables;
use std::str::FromStr;

pub const HELP: &str = "\
Smart Calculator Help:

The calculator supports the basic arithmetic operations
add, subtract, multiply, divide and power, written as + - * / ^.
Parentheses group sub-expressions:
  3 + 4 * 12 / (6 - 2) ^ 2

Results are exact decimals. Division that does not terminate is
rounded to a fixed number of fractional digits (see --scale).

Variables hold numbers and are made of letters only:
  a = 5
  b = a
Enter a variable's name to display its value.

Commands:
  /help       display this help screen
  /variables  display defined variables
  /exit       exit the calculator";

pub const FAREWELL: &str = "Bye!";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    exit,
    help,
    variables,
}

impl FromStr for Command {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        use Command::*;
        match s {
            "/exit" => Ok(exit),
            "/help" => Ok(help),
            "/variables" => Ok(variables),
            _ => Err(CalcError::unknown_command),
        }
    }
}

/// One `name = value` line per binding, in assignment order.
pub fn list_variables(variables: &Variables) -> Vec<String> {
    variables
        .iter()
        .map(|(name, value)| format!("{} = {}", name, value.to_plain_string()))
        .collect()
}
