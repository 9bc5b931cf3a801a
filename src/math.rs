//! Arithmetic over integer-or-float numbers.
//!
//! Integer operands stay integers until a float joins the operation, at
//! which point the whole operation runs in `f64`. Division and
//! exponentiation always produce `f64`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An integer or floating-point argument.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Widen to `f64`; large integers may lose precision.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(x) => x,
        }
    }

    /// True for integer zero and for both signed float zeros.
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(n) => n == 0,
            Number::Float(x) => x == 0.0,
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Int(n.into())
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Self {
        Number::Float(x)
    }
}

impl FromStr for Number {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Number::Int(n));
        }
        if let Ok(x) = s.parse::<f64>() {
            return Ok(Number::Float(x));
        }
        Err(Error::Usage(format!("`{s}` is not a number")))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(n) => write!(f, "{n}"),
            Number::Float(x) => write_float(f, x),
        }
    }
}

// Exponent form outside [1e-4, 1e16), `.0` on integral values, lowercase
// `nan`/`inf`.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("nan");
    }
    if x.is_infinite() {
        return f.write_str(if x > 0.0 { "inf" } else { "-inf" });
    }
    let magnitude = x.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{x:e}");
        let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;
        let sign = if exp < 0 { '-' } else { '+' };
        return write!(f, "{mantissa}e{sign}{:02}", exp.abs());
    }
    if x.fract() == 0.0 {
        write!(f, "{x:.1}")
    } else {
        write!(f, "{x}")
    }
}

fn combine(
    a: Number,
    b: Number,
    op: &str,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Result<Number> {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => int_op(x, y)
            .map(Number::Int)
            .ok_or_else(|| Error::arithmetic(format!("integer overflow in {op}"))),
        _ => Ok(Number::Float(float_op(a.as_f64(), b.as_f64()))),
    }
}

/// Sum of all arguments; `Int(0)` when empty.
pub fn add(args: &[Number]) -> Result<Number> {
    args.iter().try_fold(Number::Int(0), |acc, &n| {
        combine(acc, n, "add", i64::checked_add, |x, y| x + y)
    })
}

/// Product of all arguments; `Int(1)` when empty.
pub fn multiply(args: &[Number]) -> Result<Number> {
    args.iter().try_fold(Number::Int(1), |acc, &n| {
        combine(acc, n, "multiply", i64::checked_mul, |x, y| x * y)
    })
}

/// `a - b`, integral when both operands are integers.
pub fn subtract(a: Number, b: Number) -> Result<Number> {
    combine(a, b, "subtract", i64::checked_sub, |x, y| x - y)
}

/// True division; a zero denominator is an arithmetic error.
pub fn divide(a: Number, b: Number) -> Result<f64> {
    if b.is_zero() {
        return Err(Error::arithmetic("division by zero"));
    }
    Ok(a.as_f64() / b.as_f64())
}

/// `base` raised to `exponent` in floating point.
///
/// Finite inputs that have no real result, or whose result overflows, are
/// arithmetic errors; NaN and infinite inputs propagate as IEEE values.
pub fn power(base: Number, exponent: Number) -> Result<f64> {
    let (x, y) = (base.as_f64(), exponent.as_f64());
    if x.is_finite() && y.is_finite() {
        if x == 0.0 && y < 0.0 {
            return Err(Error::arithmetic("math domain error"));
        }
        if x < 0.0 && y.fract() != 0.0 {
            return Err(Error::arithmetic("math domain error"));
        }
    }
    let result = x.powf(y);
    if result.is_infinite() && x.is_finite() && y.is_finite() {
        return Err(Error::arithmetic("math range error"));
    }
    Ok(result)
}
