use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use easykit::{WriteMode, read_file, write_file};

pub(crate) fn cmd_read(path: &Path) -> Result<()> {
    let content = read_file(path)?;
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .context("failed to write file contents to stdout")?;
    stdout.flush()?;
    Ok(())
}

pub(crate) fn cmd_write(path: &Path, content: &str, append: bool) -> Result<()> {
    let mode = if append {
        WriteMode::Append
    } else {
        WriteMode::Truncate
    };
    write_file(path, content, mode)
        .with_context(|| format!("failed to update {}", path.display()))?;
    Ok(())
}
