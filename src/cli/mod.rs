mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use easykit::{JsonOptions, Number};

#[derive(Parser)]
#[command(name = "easykit", version, about = "Short-named text, file, JSON and math helpers")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print TEXT in uppercase
    Upper { text: String },
    /// Print TEXT in lowercase
    Lower { text: String },
    /// Print TEXT without leading and trailing whitespace
    Trim { text: String },
    /// Count non-overlapping occurrences of PATTERN in TEXT
    Count { text: String, pattern: String },
    /// Print the contents of a UTF-8 file
    Read { path: PathBuf },
    /// Write CONTENT to PATH, creating parent directories
    Write {
        path: PathBuf,
        content: String,
        /// Append instead of overwriting
        #[arg(long)]
        append: bool,
    },
    /// Append CONTENT to PATH, creating parent directories
    Append { path: PathBuf, content: String },
    /// Re-encode JSON read from PATH (or stdin)
    Json {
        path: Option<PathBuf>,
        /// Spaces per nesting level
        #[arg(long, default_value_t = 4, conflicts_with = "compact")]
        indent: usize,
        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,
        /// Escape non-ASCII characters as \uXXXX
        #[arg(long = "ensure-ascii")]
        ensure_ascii: bool,
    },
    /// Sum of all numbers
    #[command(allow_negative_numbers = true)]
    Add { numbers: Vec<Number> },
    /// Product of all numbers
    #[command(allow_negative_numbers = true)]
    Mul { numbers: Vec<Number> },
    /// A minus B
    #[command(allow_negative_numbers = true)]
    Sub { a: Number, b: Number },
    /// A divided by B
    #[command(allow_negative_numbers = true)]
    Div { a: Number, b: Number },
    /// BASE raised to EXPONENT
    #[command(allow_negative_numbers = true)]
    Pow { base: Number, exponent: Number },
    /// Print all arguments joined by a separator
    Echo {
        args: Vec<String>,
        /// Separator between arguments (backslash escapes allowed)
        #[arg(long, default_value = " ")]
        sep: String,
        /// Terminator after the last argument (backslash escapes allowed)
        #[arg(long, default_value = "\\n")]
        end: String,
        /// Write to stderr instead of stdout
        #[arg(long)]
        stderr: bool,
        /// Flush the stream after writing
        #[arg(long)]
        flush: bool,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .try_init();
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(verbose = cli.verbose, "easykit started");

    match cli.command {
        Command::Upper { text } => commands::cmd_upper(&text),
        Command::Lower { text } => commands::cmd_lower(&text),
        Command::Trim { text } => commands::cmd_trim(&text),
        Command::Count { text, pattern } => commands::cmd_count(&text, &pattern),
        Command::Read { path } => commands::cmd_read(&path),
        Command::Write {
            path,
            content,
            append,
        } => commands::cmd_write(&path, &content, append),
        Command::Append { path, content } => commands::cmd_write(&path, &content, true),
        Command::Json {
            path,
            indent,
            compact,
            ensure_ascii,
        } => {
            let options = JsonOptions {
                indent: (!compact).then_some(indent),
                ensure_ascii,
            };
            commands::cmd_json(path.as_deref(), &options)
        }
        Command::Add { numbers } => commands::cmd_add(&numbers),
        Command::Mul { numbers } => commands::cmd_mul(&numbers),
        Command::Sub { a, b } => commands::cmd_sub(a, b),
        Command::Div { a, b } => commands::cmd_div(a, b),
        Command::Pow { base, exponent } => commands::cmd_pow(base, exponent),
        Command::Echo {
            args,
            sep,
            end,
            stderr,
            flush,
        } => commands::cmd_echo(&args, &sep, &end, stderr, flush),
    }
}
