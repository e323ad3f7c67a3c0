//! Query parameter extraction and validation
//!
//! Turns the raw query string into a typed pair of operands. Invalid
//! input is an explicit `Err` carrying the raw text, so callers branch
//! on the parse result instead of comparing against a NaN sentinel.

use std::fmt;

use url::form_urlencoded;

/// A validated pair of operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    pub num1: f64,
    pub num2: f64,
}

/// The raw `num1`/`num2` text of a request that failed validation.
///
/// `None` means the parameter was absent from the query string. The
/// `Display` form is what the error log echoes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidOperands {
    pub num1: Option<String>,
    pub num2: Option<String>,
}

impl fmt::Display for InvalidOperands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "num1={}, num2={}",
            self.num1.as_deref().unwrap_or(""),
            self.num2.as_deref().unwrap_or("")
        )
    }
}

/// Extract and validate `num1` and `num2` from a raw query string.
///
/// Both parameters must be present and parse as non-NaN floats;
/// otherwise the raw inputs are returned for error reporting.
pub fn parse_operands(query: Option<&str>) -> Result<Operands, InvalidOperands> {
    let (raw1, raw2) = extract_params(query);

    match (parse_number(raw1.as_deref()), parse_number(raw2.as_deref())) {
        (Some(num1), Some(num2)) => Ok(Operands { num1, num2 }),
        _ => Err(InvalidOperands {
            num1: raw1,
            num2: raw2,
        }),
    }
}

/// Pull the `num1`/`num2` values out of the query string.
///
/// Unknown keys are ignored; if a key repeats, the last occurrence wins.
fn extract_params(query: Option<&str>) -> (Option<String>, Option<String>) {
    let mut num1 = None;
    let mut num2 = None;

    if let Some(q) = query {
        for (key, value) in form_urlencoded::parse(q.as_bytes()) {
            match key.as_ref() {
                "num1" => num1 = Some(value.into_owned()),
                "num2" => num2 = Some(value.into_owned()),
                _ => {}
            }
        }
    }

    (num1, num2)
}

/// A parameter is valid when it is present and its leading text forms a
/// float. Parsing takes the longest numeric prefix, so trailing garbage
/// is ignored (`5abc` is 5) while text with no numeric prefix is
/// invalid. Infinity and range are deliberately not checked.
fn parse_number(raw: Option<&str>) -> Option<f64> {
    let text = raw?.trim_start();
    let prefix = float_prefix(text)?;
    prefix.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Longest leading substring that forms a decimal float: optional sign,
/// digits with at most one decimal point, optional exponent. A signed
/// `Infinity` literal is also accepted. `None` when no numeric prefix
/// exists.
fn float_prefix(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    if text[i..].starts_with("Infinity") {
        return Some(&text[..i + "Infinity".len()]);
    }

    let mantissa_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    if !bytes[mantissa_start..i].iter().any(u8::is_ascii_digit) {
        return None;
    }

    // The exponent only counts when at least one digit follows it
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exponent_digits = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exponent_digits {
            i = j;
        }
    }

    Some(&text[..i])
}
