use crate::error_handling::*;
use crate::parsing::*;
use crate::scanning::BinaryOperator;
use bigdecimal::{BigDecimal, One, ToPrimitive, Zero};
use num_bigint::BigInt;
use std::cmp::Ordering;

pub const DEFAULT_SCALE: i64 = 20;

pub const MAX_SCALE: i64 = 10_000;

/// Bits of mantissa plus fractional digits, times the exponent.
const MAX_POWER_SIZE: u64 = 1_000_000;

/// Drops trailing fractional zeros without switching to a negative scale.
fn tidy(value: BigDecimal) -> BigDecimal {
    let value = value.normalized();
    if value.as_bigint_and_exponent().1 < 0 {
        value.with_scale(0)
    } else {
        value
    }
}

fn ten_to(power: i64) -> Result<BigInt> {
    let power = u32::try_from(power).map_err(|_| invalid_expression("operand scale out of range"))?;
    Ok(BigInt::from(10u8).pow(power))
}

/// Quotient rounded half-even to `scale` fractional digits, computed in one integer division.
pub fn divide(left: &BigDecimal, right: &BigDecimal, scale: i64) -> Result<BigDecimal> {
    if right.is_zero() {
        return Err(invalid_expression("division by zero"));
    }
    let (left_digits, left_scale) = left.as_bigint_and_exponent();
    let (right_digits, right_scale) = right.as_bigint_and_exponent();

    let shift = scale + right_scale - left_scale;
    let (numerator, denominator) = if shift >= 0 {
        (left_digits * ten_to(shift)?, right_digits)
    } else {
        (left_digits, right_digits * ten_to(-shift)?)
    };

    let mut quotient = &numerator / &denominator;
    let remainder = &numerator % &denominator;
    let round_away = match (remainder.magnitude() * 2u32).cmp(denominator.magnitude()) {
        Ordering::Greater => true,
        Ordering::Equal => !(&quotient % BigInt::from(2)).is_zero(),
        Ordering::Less => false,
    };
    if round_away {
        if numerator.sign() == denominator.sign() {
            quotient += BigInt::from(1);
        } else {
            quotient -= BigInt::from(1);
        }
    }
    Ok(tidy(BigDecimal::new(quotient, scale)))
}

/// Raises `base` to a whole-number `exponent`.
pub fn power(base: &BigDecimal, exponent: &BigDecimal, scale: i64) -> Result<BigDecimal> {
    if !exponent.is_integer() {
        return Err(invalid_expression("exponent is not a whole number"));
    }
    let exponent = exponent
        .to_i64()
        .ok_or_else(|| invalid_expression("exponent too large"))?;

    let (digits, base_scale) = base.as_bigint_and_exponent();
    let size = digits.bits().max(1) + base_scale.unsigned_abs();
    if size.saturating_mul(exponent.unsigned_abs()) > MAX_POWER_SIZE {
        return Err(invalid_expression("power result too large"));
    }

    if exponent < 0 {
        if base.is_zero() {
            return Err(invalid_expression("zero raised to a negative power"));
        }
        return divide(&BigDecimal::one(), &power_by_squaring(base, exponent.unsigned_abs()), scale);
    }
    Ok(power_by_squaring(base, exponent.unsigned_abs()))
}

fn power_by_squaring(base: &BigDecimal, mut exponent: u64) -> BigDecimal {
    let mut result = BigDecimal::one();
    let mut base = base.clone();
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = &result * &base;
        }
        exponent >>= 1;
        if exponent > 0 {
            base = &base * &base;
        }
    }
    result
}

impl BinaryOperator {
    pub fn call(&self, left: &BigDecimal, right: &BigDecimal, scale: i64) -> Result<BigDecimal> {
        use BinaryOperator::*;

        match self {
            addition => Ok(left + right),
            subtraction => Ok(left - right),
            multiplication => Ok(left * right),
            division => divide(left, right, scale),
            exponentiation => power(left, right, scale),
        }
    }
}

/// Runs a postfix sequence on a value stack; exactly one value must remain.
pub fn evaluate(expression: &[ExprNode], scale: i64) -> Result<BigDecimal> {
    let mut slots = Vec::<BigDecimal>::new();
    for node in expression {
        match node {
            ExprNode::number(value) => slots.push(value.clone()),

            ExprNode::operator(operator) => {
                let right = slots.pop().ok_or_else(|| invalid_expression("missing operand"))?;
                let left = slots.pop().ok_or_else(|| invalid_expression("missing operand"))?;
                let result = operator.call(&left, &right, scale)?;
                tracing::trace!("{} {} {} = {}", left, operator.symbol(), right, result);
                slots.push(result);
            }
        }
    }

    match (slots.pop(), slots.is_empty()) {
        (Some(value), true) => Ok(value),
        _ => Err(invalid_expression("postfix did not reduce to a single value")),
    }
}
