use crate::error_handling::*;
use crate::scanning::*;
use crate::variables::Lookup;
use bigdecimal::BigDecimal;
use std::fmt;

pub enum StackNode {
    operator(BinaryOperator),
    punctuation(Punctuation),
}

impl StackNode {
    /// `)` ranks lowest and `(` highest, so an open paren is never popped by comparison.
    fn precedence(&self) -> i32 {
        use BinaryOperator::*;
        match self {
            Self::punctuation(Punctuation::right_paren) => 0,
            Self::operator(operator) => match operator {
                addition | subtraction => 1,
                multiplication | division => 2,
                exponentiation => 3,
            },
            Self::punctuation(Punctuation::left_paren) => 4,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprNode {
    number(BigDecimal),
    operator(BinaryOperator),
}

impl fmt::Display for ExprNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprNode::number(value) => write!(f, "{}", value.to_plain_string()),
            ExprNode::operator(operator) => write!(f, "{}", operator.symbol()),
        }
    }
}

pub struct Yard {
    expression: Vec<ExprNode>,
    stack: Vec<StackNode>,
}

impl Yard {
    pub fn new() -> Self {
        Self { expression: Vec::new(), stack: Vec::new() }
    }

    fn add_number(&mut self, value: BigDecimal) {
        self.expression.push(ExprNode::number(value));
    }

    /// Pops the top operator while it binds at least as tightly as `precedence`.
    /// Every operator is left-associative, `^` included.
    fn pop_higher_operator(&mut self, precedence: i32) -> Option<BinaryOperator> {
        let is_higher = self
            .stack
            .last()
            .filter(|node| matches!(node, StackNode::operator(_)) && node.precedence() >= precedence)
            .is_some();
        if !is_higher {
            return None;
        }
        match self.stack.pop() {
            Some(StackNode::operator(operator)) => Some(operator),
            _ => None,
        }
    }

    fn add_operator(&mut self, operator: BinaryOperator) {
        let node = StackNode::operator(operator);
        let precedence = node.precedence();
        while let Some(operator) = self.pop_higher_operator(precedence) {
            self.expression.push(ExprNode::operator(operator));
        }
        self.stack.push(node);
    }

    fn add_left_paren(&mut self) {
        self.stack.push(StackNode::punctuation(Punctuation::left_paren));
    }

    fn add_right_paren(&mut self) -> Result<()> {
        while let Some(stack_node) = self.stack.pop() {
            match stack_node {
                StackNode::punctuation(Punctuation::left_paren) => return Ok(()),
                StackNode::operator(operator) => self.expression.push(ExprNode::operator(operator)),
                StackNode::punctuation(Punctuation::right_paren) => break,
            }
        }
        Err(invalid_expression("could not find matching '('"))
    }

    pub fn finish(mut self) -> Result<Vec<ExprNode>> {
        while let Some(stack_node) = self.stack.pop() {
            match stack_node {
                StackNode::operator(operator) => self.expression.push(ExprNode::operator(operator)),
                StackNode::punctuation(_) => {
                    return Err(invalid_expression("could not find matching ')'"))
                }
            }
        }
        Ok(self.expression)
    }
}

/// Converts infix tokens to postfix, resolving identifiers through `variables`.
pub fn to_postfix<V: Lookup + ?Sized>(tokens: Vec<Token>, variables: &V) -> Result<Vec<ExprNode>> {
    let mut yard = Yard::new();

    for token in tokens {
        match token {
            Token::number(value) => yard.add_number(value),
            Token::identifier(name) => match variables.lookup(&name) {
                Some(value) => yard.add_number(value.clone()),
                None => {
                    tracing::debug!("'{}' is not defined", name);
                    return Err(CalcError::unknown_variable);
                }
            },
            Token::operator(operator) => yard.add_operator(operator),
            Token::punctuation(Punctuation::left_paren) => yard.add_left_paren(),
            Token::punctuation(Punctuation::right_paren) => yard.add_right_paren()?,
        }
    }

    let postfix = yard.finish()?;
    tracing::debug!("postfix: {}", render(&postfix));
    Ok(postfix)
}

pub fn parse<V: Lookup + ?Sized>(expression: &str, variables: &V) -> Result<Vec<ExprNode>> {
    to_postfix(tokenize(expression)?, variables)
}
