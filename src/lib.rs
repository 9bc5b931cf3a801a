//! Short-named helpers over std and serde_json: string casing, file I/O,
//! JSON, list folds, arithmetic and printing.

pub mod error;
pub mod fs;
pub mod functional;
pub mod json;
pub mod math;
pub mod print;
pub mod text;
pub mod types;

pub use error::{Error, Result};
pub use fs::{WriteMode, append_file, ensure_parent_dirs, read_file, write_file};
pub use functional::{filter_list, map_list, reduce_list};
pub use json::{JsonOptions, JsonValue, from_json, to_json, to_json_with};
pub use math::{Number, add, divide, multiply, power, subtract};
pub use print::{PrintOptions, Stream, print_all, print_all_to};
pub use text::{EMPTY, NEWLINE, SPACE, TAB, count_chars, strip_whitespace, to_lower, to_upper};
pub use types::{Bool, Dict, Float, Int, List, Set, Str};
