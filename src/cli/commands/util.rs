use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};

use easykit::{Number, read_file};

/// Read a whole input from `path`, or from stdin when no path is given.
pub(crate) fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => Ok(read_file(p)?),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Render a float result the same way `Number::Float` displays.
pub(crate) fn format_float(value: f64) -> String {
    Number::Float(value).to_string()
}

/// Expand `\n`, `\t`, `\r`, `\0` and `\\` in a command-line argument.
pub(crate) fn unescape(raw: &str) -> Result<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some(other) => bail!("unknown escape `\\{other}` in `{raw}`"),
            None => bail!("dangling backslash at end of `{raw}`"),
        }
    }
    Ok(out)
}
