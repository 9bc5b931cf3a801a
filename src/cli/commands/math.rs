use anyhow::Result;

use easykit::{Number, add, divide, multiply, power, subtract};

use super::util::format_float;

pub(crate) fn cmd_add(numbers: &[Number]) -> Result<()> {
    println!("{}", add(numbers)?);
    Ok(())
}

pub(crate) fn cmd_mul(numbers: &[Number]) -> Result<()> {
    println!("{}", multiply(numbers)?);
    Ok(())
}

pub(crate) fn cmd_sub(a: Number, b: Number) -> Result<()> {
    println!("{}", subtract(a, b)?);
    Ok(())
}

pub(crate) fn cmd_div(a: Number, b: Number) -> Result<()> {
    println!("{}", format_float(divide(a, b)?));
    Ok(())
}

pub(crate) fn cmd_pow(base: Number, exponent: Number) -> Result<()> {
    println!("{}", format_float(power(base, exponent)?));
    Ok(())
}
