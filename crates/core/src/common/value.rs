//! Parameter values.
//!
//! A dimension's candidate values are opaque to the enumerator; the only thing the
//! rest of the crate needs from them is a stable string rendering. `Value` is a
//! closed tagged type covering the shapes testbench generics take in practice:
//! 1. **Int:** Orders, widths, and mode selectors (`SMPL_ORDER_PY=2`). Unsigned values
//!    above `i64::MAX` are kept exact as `UInt`.
//! 2. **Bool:** Feature switches, rendered `True`/`False`.
//! 3. **Real:** Rare fractional knobs, rendered like Python's `repr` (`1.0`, `1e-05`, `1e+16`).
//! 4. **Text:** Single-character flags and tags (`'0'`, `'1'`), rendered verbatim.
//!
//! Rendering matches what a driving script's `str()` produces for the same value, so
//! a plan file and a `run.py` yield identical run names.
//!
//! Integer `1` and text `"1"` are distinct values that render identically. The
//! encoded identifier cannot tell them apart; that collision is accepted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single candidate value of a sweep dimension.
///
/// Deserializes untagged from JSON, so `0`, `true`, `0.5`, and `"0"` map to
/// `Int`, `Bool`, `Real`, and `Text` respectively. JSON integers beyond the unsigned
/// 64-bit range are parsed as floats by `serde_json`; quote them to keep them exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean switch.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer above `i64::MAX`.
    UInt(u64),
    /// Floating-point value.
    Real(f64),
    /// Free-form text, passed through untouched.
    Text(String),
}

impl Value {
    /// Parses a command-line token into the narrowest matching value.
    ///
    /// `true`/`false` become `Bool`, decimal integers become `Int` (or `UInt`), anything
    /// else that parses as a float becomes `Real`, and the rest is kept as `Text`.
    /// Integer literals too wide for 64 bits stay `Text` so no digit is lost.
    pub fn parse_token(token: &str) -> Self {
        match token {
            "true" | "True" => return Self::Bool(true),
            "false" | "False" => return Self::Bool(false),
            _ => {}
        }
        if let Ok(i) = token.parse::<i64>() {
            return Self::Int(i);
        }
        if let Ok(u) = token.parse::<u64>() {
            return Self::UInt(u);
        }
        if is_integer_literal(token) {
            return Self::Text(token.to_string());
        }
        // `inf`/`nan` spellings stay textual; they are tags, not numbers, on the command line.
        if token.chars().any(|c| c.is_ascii_digit()) {
            if let Ok(r) = token.parse::<f64>() {
                return Self::Real(r);
            }
        }
        Self::Text(token.to_string())
    }

    /// Returns `true` if the value is textual.
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

fn is_integer_literal(token: &str) -> bool {
    let digits = token.strip_prefix(['-', '+']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Int(i) => write!(f, "{i}"),
            Self::UInt(u) => write!(f, "{u}"),
            Self::Real(r) => fmt_real(*r, f),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Renders a real like Python's `repr`: shortest round-trip digits, positional with at
/// least one fractional digit when the decimal exponent is in `-4..16`, otherwise
/// scientific with a signed two-digit exponent.
fn fmt_real(r: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if r.is_nan() {
        return f.write_str("nan");
    }
    if r.is_infinite() {
        return f.write_str(if r.is_sign_positive() { "inf" } else { "-inf" });
    }
    let sci = format!("{r:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return write!(f, "{r}");
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return write!(f, "{r}");
    };
    if (-4..16).contains(&exp) {
        let plain = r.to_string();
        if plain.contains('.') {
            f.write_str(&plain)
        } else {
            write!(f, "{plain}.0")
        }
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exp.unsigned_abs())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        i64::try_from(v).map_or(Self::UInt(v), Self::Int)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}
