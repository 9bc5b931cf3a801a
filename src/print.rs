use std::fmt::Display;
use std::io::{self, Write};

use tracing::trace;

use crate::error::Result;

/// Standard stream targeted by `print_all`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

/// Separator, terminator and destination for `print_all`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintOptions {
    pub sep: String,
    pub end: String,
    pub stream: Stream,
    pub flush: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            sep: " ".to_string(),
            end: "\n".to_string(),
            stream: Stream::Stdout,
            flush: false,
        }
    }
}

/// Write every argument's `Display` form to the configured standard stream.
pub fn print_all(args: &[&dyn Display], options: &PrintOptions) -> Result<()> {
    match options.stream {
        Stream::Stdout => print_all_to(&mut io::stdout().lock(), args, options),
        Stream::Stderr => print_all_to(&mut io::stderr().lock(), args, options),
    }
}

/// Write `args` joined by `options.sep` and followed by `options.end`.
pub fn print_all_to<W: Write + ?Sized>(
    writer: &mut W,
    args: &[&dyn Display],
    options: &PrintOptions,
) -> Result<()> {
    for (idx, arg) in args.iter().enumerate() {
        if idx > 0 {
            writer.write_all(options.sep.as_bytes())?;
        }
        write!(writer, "{arg}")?;
    }
    writer.write_all(options.end.as_bytes())?;
    if options.flush {
        writer.flush()?;
    }
    trace!(count = args.len(), stream = ?options.stream, "printed arguments");
    Ok(())
}
