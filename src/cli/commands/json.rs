use std::path::Path;

use anyhow::{Context, Result};

use super::util::read_source;
use easykit::{JsonOptions, JsonValue, from_json, to_json_with};

pub(crate) fn cmd_json(path: Option<&Path>, options: &JsonOptions) -> Result<()> {
    let text = read_source(path)?;
    let value: JsonValue = from_json(&text).with_context(|| match path {
        Some(p) => format!("invalid JSON in {}", p.display()),
        None => "invalid JSON on stdin".to_string(),
    })?;
    println!("{}", to_json_with(&value, options)?);
    Ok(())
}
