use crate::assigning::assign;
use crate::classifying::*;
use crate::commanding::*;
use crate::config::Config;
use crate::error_handling::*;
use crate::evaluating::evaluate;
use crate::parsing::parse;
use crate::variables::Variables;
use bigdecimal::BigDecimal;
use std::io::{BufRead, Write};

#[derive(Debug, PartialEq)]
pub enum Reply {
    silent,
    value(BigDecimal),
    lines(Vec<String>),
    farewell,
}

/// Holds the variables for one run of the calculator.
pub struct Calculator {
    variables: Variables,
    config: Config,
}

impl Calculator {
    pub fn new(config: Config) -> Self {
        Self { variables: Variables::new(), config }
    }

    pub fn calculate(&self, expression: &str) -> Result<BigDecimal> {
        let postfix = parse(expression, &self.variables)?;
        evaluate(&postfix, self.config.scale)
    }

    fn execute(&self, line: &str) -> Result<Reply> {
        match line.parse::<Command>()? {
            Command::exit => Ok(Reply::farewell),
            Command::help => Ok(Reply::lines(HELP.lines().map(String::from).collect())),
            Command::variables => Ok(Reply::lines(list_variables(&self.variables))),
        }
    }

    pub fn process(&mut self, line: &str) -> Result<Reply> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Reply::silent);
        }

        match classify(line) {
            LineKind::command => self.execute(line),
            LineKind::assignment => assign(line, &mut self.variables).map(|_| Reply::silent),
            LineKind::expression => self.calculate(line).map(Reply::value),
            LineKind::invalid => Err(invalid_expression("no recognizable characters")),
        }
    }
}

/// Reads one line, decoding invalid UTF-8 lossily. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R, buffer: &mut Vec<u8>) -> Result<Option<String>> {
    buffer.clear();
    if input.read_until(b'\n', buffer)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(buffer);
    Ok(Some(line.trim_end_matches(&['\n', '\r'][..]).to_string()))
}

/// Reads lines until `/exit` or end of input, writing one reply or error message per line.
pub fn run<R: BufRead, W: Write>(mut input: R, output: &mut W, calculator: &mut Calculator) -> Result<()> {
    let prompt = calculator.config.prompt.clone();
    let mut buffer = Vec::new();

    loop {
        if !prompt.is_empty() {
            write!(output, "{}", prompt)?;
            output.flush()?;
        }

        let Some(line) = read_line(&mut input, &mut buffer)? else {
            tracing::info!("end of input");
            return Ok(());
        };

        match calculator.process(&line) {
            Ok(Reply::silent) => {}
            Ok(Reply::value(value)) => writeln!(output, "{}", value.to_plain_string())?,
            Ok(Reply::lines(text)) => {
                for line in text {
                    writeln!(output, "{}", line)?;
                }
            }
            Ok(Reply::farewell) => {
                writeln!(output, "{}", FAREWELL)?;
                return Ok(());
            }
            Err(e) if e.is_recoverable() => writeln!(output, "{}", e)?,
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_by_line_kind() {
        let mut calculator = Calculator::new(Config::default());
        assert_eq!(calculator.process("   ").unwrap(), Reply::silent);
        assert_eq!(calculator.process("a = 5").unwrap(), Reply::silent);
        assert_eq!(calculator.process(" a ").unwrap(), Reply::value(BigDecimal::from(5)));
        assert_eq!(calculator.process("/variables").unwrap(), Reply::lines(vec!["a = 5".into()]));
        assert_eq!(calculator.process("/exit").unwrap(), Reply::farewell);
        assert!(matches!(calculator.process("/quit"), Err(CalcError::unknown_command)));
        assert!(matches!(calculator.process("#"), Err(CalcError::invalid_expression)));
    }

    #[test]
    fn help_lists_the_commands() {
        let mut calculator = Calculator::new(Config::default());
        match calculator.process("/help").unwrap() {
            Reply::lines(lines) => assert!(lines.iter().any(|line| line.contains("/variables"))),
            reply => panic!("unexpected reply {:?}", reply),
        }
    }

    #[test]
    fn scale_comes_from_config() {
        let calculator = Calculator::new(Config { scale: 3, ..Config::default() });
        assert_eq!(calculator.calculate("2 / 3").unwrap().to_plain_string(), "0.667");
    }
}
