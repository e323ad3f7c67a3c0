//! Arithmetic operation handlers
//!
//! One parameterized handler covers all four operations; they share the
//! parse/validate/log/respond sequence and differ only in the operator
//! and the response message template. Divide adds a zero-divisor check
//! after general validation.

use hyper::StatusCode;

use crate::logger::Logger;
use crate::query::{self, Operands};

/// Response body when one or both parameters are missing or non-numeric.
pub const INVALID_INPUT_MESSAGE: &str =
    "Error: Invalid input. Both parameters must be valid numbers.";

/// Response body when the divisor is zero.
pub const DIVISION_BY_ZERO_MESSAGE: &str = "Error: Division by zero is not allowed.";

/// The four supported arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Map a request path to its operation.
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/add" => Some(Self::Add),
            "/subtract" => Some(Self::Subtract),
            "/multiply" => Some(Self::Multiply),
            "/divide" => Some(Self::Divide),
            _ => None,
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    fn apply(self, num1: f64, num2: f64) -> f64 {
        match self {
            Self::Add => num1 + num2,
            Self::Subtract => num1 - num2,
            Self::Multiply => num1 * num2,
            Self::Divide => num1 / num2,
        }
    }

    fn success_message(self, num1: f64, num2: f64, result: f64) -> String {
        let num1 = format_number(num1);
        let num2 = format_number(num2);
        let result = format_number(result);
        match self {
            Self::Add => format!("Addition request: {num1} + {num2} = {result}."),
            Self::Subtract => format!("Subtraction result: {num1} - {num2} = {result}"),
            Self::Multiply => format!("Multiplication result: {num1} * {num2} = {result}"),
            Self::Divide => format!("Division result: {num1} / {num2} = {result}"),
        }
    }
}

/// Handle one arithmetic request: parse, validate, compute, log, and
/// produce the response status and body.
pub fn execute(op: Operation, query: Option<&str>, logger: &Logger) -> (StatusCode, String) {
    let Operands { num1, num2 } = match query::parse_operands(query) {
        Ok(operands) => operands,
        Err(raw) => {
            logger.error(format!("Invalid input: {raw}"));
            return (StatusCode::BAD_REQUEST, INVALID_INPUT_MESSAGE.to_string());
        }
    };

    if op == Operation::Divide && is_zero(num2) {
        logger.error(format!(
            "Division by zero error: {} / {}",
            format_number(num1),
            format_number(num2)
        ));
        return (StatusCode::BAD_REQUEST, DIVISION_BY_ZERO_MESSAGE.to_string());
    }

    let result = op.apply(num1, num2);
    let symbol = op.symbol();
    logger.info(format!(
        "New {symbol} operation requested: {} {symbol} {} = {}",
        format_number(num1),
        format_number(num2),
        format_number(result)
    ));

    (StatusCode::OK, op.success_message(num1, num2, result))
}

/// Strict equality against zero is intended: -0 and any text that
/// parses to zero (e.g. "0.0", "-0") count as a zero divisor.
#[allow(clippy::float_cmp)]
fn is_zero(n: f64) -> bool {
    n == 0.0
}

/// Render a number for messages and logs: negative zero prints as `0`,
/// and finite magnitudes of 1e21 or more use exponent notation
/// (`1e+21`). Everything else is plain `Display`.
fn format_number(n: f64) -> String {
    if is_zero(n) {
        return "0".to_string();
    }
    if n.is_finite() && n.abs() >= 1e21 {
        // The exponent is always positive here, so `e` gains a sign
        return format!("{n:e}").replace('e', "e+");
    }
    n.to_string()
}
