use anyhow::Result;

use easykit::{count_chars, strip_whitespace, to_lower, to_upper};

pub(crate) fn cmd_upper(text: &str) -> Result<()> {
    println!("{}", to_upper(text));
    Ok(())
}

pub(crate) fn cmd_lower(text: &str) -> Result<()> {
    println!("{}", to_lower(text));
    Ok(())
}

pub(crate) fn cmd_trim(text: &str) -> Result<()> {
    println!("{}", strip_whitespace(text));
    Ok(())
}

pub(crate) fn cmd_count(text: &str, pattern: &str) -> Result<()> {
    println!("{}", count_chars(text, pattern));
    Ok(())
}
