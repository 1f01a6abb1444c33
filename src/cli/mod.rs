// cli module — thin argument-parsing and file-handling wrapper around the
// core compress/decompress engine.

pub mod arg_utils;
pub mod args;
pub mod constants;
pub mod help;
pub mod run;

pub use args::{parse_args_from, ParsedArgs};
pub use run::run;
