use crate::error_handling::*;
use bigdecimal::BigDecimal;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    addition,
    subtraction,
    multiplication,
    division,
    exponentiation,
}

impl BinaryOperator {
    fn from_char(character: char) -> Option<Self> {
        use BinaryOperator::*;
        match character {
            '+' => Some(addition),
            '-' => Some(subtraction),
            '*' => Some(multiplication),
            '/' => Some(division),
            '^' => Some(exponentiation),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        use BinaryOperator::*;
        match self {
            addition => '+',
            subtraction => '-',
            multiplication => '*',
            division => '/',
            exponentiation => '^',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Punctuation {
    left_paren,
    right_paren,
}

impl Punctuation {
    fn from_char(character: char) -> Option<Self> {
        match character {
            '(' => Some(Punctuation::left_paren),
            ')' => Some(Punctuation::right_paren),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    number(BigDecimal),
    identifier(String),
    operator(BinaryOperator),
    punctuation(Punctuation),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::number(value) => write!(f, "{}", value.to_plain_string()),
            Token::identifier(name) => write!(f, "{}", name),
            Token::operator(operator) => write!(f, "{}", operator.symbol()),
            Token::punctuation(Punctuation::left_paren) => write!(f, "("),
            Token::punctuation(Punctuation::right_paren) => write!(f, ")"),
        }
    }
}

fn is_operator(character: char) -> bool {
    BinaryOperator::from_char(character).is_some()
}

fn is_punctuation(character: char) -> bool {
    Punctuation::from_char(character).is_some()
}

fn is_word_character(character: char) -> bool {
    !is_operator(character) && !is_punctuation(character)
}

/// Letters only, at least one.
pub fn is_identifier(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_unsigned_number(text: &str) -> bool {
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
    all_digits(whole) && fraction.map_or(true, all_digits)
}

/// An optional sign, optional blanks after it, digits, and an optional `.` followed by digits.
pub fn is_number_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(&['+', '-'][..]).unwrap_or(text);
    is_unsigned_number(unsigned.trim_start())
}

pub fn parse_number(text: &str) -> Option<BigDecimal> {
    if !is_number_literal(text) {
        return None;
    }
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let compact = compact.strip_prefix('+').unwrap_or(&compact);
    BigDecimal::from_str(compact).ok()
}

/// Removes blanks and folds every run of adjacent signs into the sign of their product.
pub fn normalize(input: &str) -> Result<String> {
    let mut infix: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if infix.contains("**") || infix.contains("//") {
        return Err(invalid_expression("doubled '*' or '/'"));
    }

    while ["++", "--", "+-", "-+"].iter().any(|run| infix.contains(run)) {
        infix = infix
            .replace("++", "+")
            .replace("--", "+")
            .replace("-+", "-")
            .replace("+-", "-");
    }
    Ok(infix)
}

pub struct StringScanner {
    string: String,
    index: usize,
}

impl StringScanner {
    pub fn new(string: String) -> Self {
        Self { string, index: 0 }
    }

    fn view(&self) -> &str {
        &self.string[self.index..]
    }

    fn get_word(&self) -> Result<(Token, usize)> {
        let length = self.view().find(|c| !is_word_character(c)).unwrap_or(self.view().len());
        let word = &self.view()[..length];
        let token = if is_unsigned_number(word) {
            parse_number(word)
                .map(Token::number)
                .ok_or_else(|| invalid_expression("unparsable number"))?
        } else if is_identifier(word) {
            Token::identifier(word.into())
        } else {
            return Err(invalid_expression(&format!("malformed token '{}'", word)));
        };
        Ok((token, length))
    }

    fn get_token(&self) -> Option<Result<(Token, usize)>> {
        let character = self.view().chars().next()?;
        if let Some(operator) = BinaryOperator::from_char(character) {
            Some(Ok((Token::operator(operator), 1)))
        } else if let Some(punctuation) = Punctuation::from_char(character) {
            Some(Ok((Token::punctuation(punctuation), 1)))
        } else {
            Some(self.get_word())
        }
    }
}

impl Iterator for StringScanner {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.get_token()? {
            Ok((token, length)) => {
                self.index += length;
                Some(Ok(token))
            }
            Err(e) => {
                self.index = self.string.len();
                Some(Err(e))
            }
        }
    }
}

/// Turns raw expression text into typed tokens.
///
/// A leading `+` is dropped and a leading `-` is folded into the number that follows it.
/// Any other leading `-` is rejected.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let infix = normalize(input)?;
    let mut tokens = StringScanner::new(infix).collect::<Result<Vec<_>>>()?;

    match tokens.first() {
        Some(Token::operator(BinaryOperator::addition)) => {
            tokens.remove(0);
        }
        Some(Token::operator(BinaryOperator::subtraction)) => {
            tokens.remove(0);
            match tokens.first_mut() {
                Some(Token::number(value)) => *value = -value.clone(),
                _ => return Err(invalid_expression("leading '-' not followed by a number")),
            }
        }
        _ => {}
    }

    tracing::debug!("tokens: {}", render(&tokens));
    Ok(tokens)
}

/// Space-joined text form of a token sequence.
pub fn render<T: fmt::Display>(tokens: &[T]) -> String {
    tokens.iter().map(|token| token.to_string()).collect::<Vec<_>>().join(" ")
}
