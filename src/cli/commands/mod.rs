mod echo;
mod file;
mod json;
mod math;
mod text;
mod util;

pub(crate) use echo::cmd_echo;
pub(crate) use file::{cmd_read, cmd_write};
pub(crate) use json::cmd_json;
pub(crate) use math::{cmd_add, cmd_div, cmd_mul, cmd_pow, cmd_sub};
pub(crate) use text::{cmd_count, cmd_lower, cmd_trim, cmd_upper};
