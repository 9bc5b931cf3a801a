use std::fmt::Display;

use anyhow::Result;

use super::util::unescape;
use easykit::{PrintOptions, Stream, print_all};

pub(crate) fn cmd_echo(
    args: &[String],
    sep: &str,
    end: &str,
    stderr: bool,
    flush: bool,
) -> Result<()> {
    let options = PrintOptions {
        sep: unescape(sep)?,
        end: unescape(end)?,
        stream: if stderr { Stream::Stderr } else { Stream::Stdout },
        flush,
    };
    let items: Vec<&dyn Display> = args.iter().map(|s| s as &dyn Display).collect();
    print_all(&items, &options)?;
    Ok(())
}
