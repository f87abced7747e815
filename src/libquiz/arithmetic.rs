//! The four-function evaluator behind the `calculator` binary.
//!
//! Operands are parsed permissively: text that is not a number becomes NaN
//! and flows through the arithmetic unchanged. Only the operator is checked.

use std::fmt;
use std::str::FromStr;

use crate::error::ArithmeticError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl FromStr for Operator {
    type Err = ArithmeticError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            other => Err(ArithmeticError::InvalidOperator(other.to_string())),
        }
    }
}

impl Operator {
    pub fn apply(self, a: f64, b: f64) -> Result<f64, ArithmeticError> {
        match self {
            Operator::Add => Ok(a + b),
            Operator::Subtract => Ok(a - b),
            Operator::Multiply => Ok(a * b),
            Operator::Divide if b == 0.0 => Err(ArithmeticError::DivideByZero),
            Operator::Divide => Ok(a / b),
        }
    }
}

pub fn evaluate(a: f64, operator: &str, b: f64) -> Result<f64, ArithmeticError> {
    operator.parse::<Operator>()?.apply(a, b)
}

/// Converts operand text to a number.
///
/// Surrounding whitespace is ignored and blank text is zero. Accepts decimal
/// and exponent notation, `Infinity` with an optional sign, and unsigned
/// `0x`/`0o`/`0b` integers. Anything else is NaN.
pub fn parse_operand(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(value) = parse_prefixed_integer(text) {
        return value;
    }
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return f64::NAN;
    }
    text.parse().unwrap_or(f64::NAN)
}

fn parse_prefixed_integer(text: &str) -> Option<f64> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
        })
        .or(Some(f64::NAN))
}

/// Prints a number the way the calculator reports it: no trailing `.0` on
/// integral values, `Infinity` for infinities, `0` for negative zero, and
/// exponent notation from `1e21` up and below `1e-6`.
pub struct Number(pub f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            f.write_str("NaN")
        } else if value.is_infinite() {
            f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
        } else if value == 0.0 {
            f.write_str("0")
        } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
            // Exponent form with an explicit sign: `1e+21`, `3.3e-8`.
            let formatted = format!("{:e}", value);
            match formatted.split_once('e') {
                Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                    write!(f, "{mantissa}e+{exponent}")
                }
                _ => f.write_str(&formatted),
            }
        } else {
            write!(f, "{}", value)
        }
    }
}

/// The text after `Result: `. Errors are reported as their message.
pub fn render(outcome: &Result<f64, ArithmeticError>) -> String {
    match outcome {
        Ok(value) => Number(*value).to_string(),
        Err(err) => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(a: &str, operator: &str, b: &str) -> String {
        render(&evaluate(parse_operand(a), operator, parse_operand(b)))
    }

    #[test]
    fn four_functions() {
        assert_eq!(evaluate(7.0, "+", 5.0), Ok(12.0));
        assert_eq!(evaluate(7.0, "-", 5.0), Ok(2.0));
        assert_eq!(evaluate(7.0, "*", 5.0), Ok(35.0));
        assert_eq!(evaluate(7.0, "/", 2.0), Ok(3.5));
    }

    #[test]
    fn division_by_zero_is_reported() {
        assert_eq!(evaluate(10.0, "/", 0.0), Err(ArithmeticError::DivideByZero));
        assert_eq!(evaluate(10.0, "/", -0.0), Err(ArithmeticError::DivideByZero));
        assert_eq!(calc("10", "/", "0"), "Error: Cannot divide by zero!");
    }

    #[test]
    fn unknown_operator_is_reported_before_division() {
        assert_eq!(calc("10", "%", "2"), "Invalid operator!");
        assert_eq!(calc("10", "%", "0"), "Invalid operator!");
        assert_eq!(calc("10", " +", "2"), "Invalid operator!");
    }

    #[test]
    fn results_print_like_plain_numbers() {
        assert_eq!(calc("7", "+", "5"), "12");
        assert_eq!(calc("1", "/", "4"), "0.25");
        assert_eq!(calc("0.1", "+", "0.2"), "0.30000000000000004");
        assert_eq!(calc("-3", "*", "0"), "0");
        assert_eq!(calc("Infinity", "-", "1"), "Infinity");
        assert_eq!(calc("-Infinity", "+", "1"), "-Infinity");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_notation() {
        assert_eq!(render(&evaluate(1e21, "*", 1.0)), "1e+21");
        assert_eq!(render(&evaluate(-1.5e300, "*", 1.0)), "-1.5e+300");
        assert_eq!(render(&evaluate(1.0, "/", 3e7)), "3.3333333333333334e-8");
        assert_eq!(render(&evaluate(-1.0, "/", 1e7)), "-1e-7");
        assert_eq!(render(&evaluate(1e20, "*", 1.0)), "100000000000000000000");
        assert_eq!(render(&evaluate(1.0, "/", 1e6)), "0.000001");
    }

    #[test]
    fn non_numeric_operands_become_nan() {
        assert!(parse_operand("abc").is_nan());
        assert!(parse_operand("inf").is_nan());
        assert!(parse_operand("nan").is_nan());
        assert!(parse_operand("1e").is_nan());
        assert!(parse_operand("0x").is_nan());
        assert!(parse_operand("0xfg").is_nan());
        assert_eq!(calc("ten", "+", "5"), "NaN");
        assert_eq!(calc("ten", "/", "0"), "Error: Cannot divide by zero!");
    }

    #[test]
    fn permissive_operand_forms() {
        assert_eq!(parse_operand("  42  "), 42.0);
        assert_eq!(parse_operand(""), 0.0);
        assert_eq!(parse_operand("   "), 0.0);
        assert_eq!(parse_operand(".5"), 0.5);
        assert_eq!(parse_operand("5."), 5.0);
        assert_eq!(parse_operand("+3"), 3.0);
        assert_eq!(parse_operand("-2.5e2"), -250.0);
        assert_eq!(parse_operand("0x1F"), 31.0);
        assert_eq!(parse_operand("0o17"), 15.0);
        assert_eq!(parse_operand("0b101"), 5.0);
    }

    #[test]
    fn nan_divisor_is_not_zero() {
        assert_eq!(calc("1", "/", "x"), "NaN");
    }
}
