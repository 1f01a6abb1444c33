//! Command-line argument parsing for `bcpack`.
//!
//! Short options may be aggregated (e.g. `-dv`). Long options are exact
//! spellings only (no `=VALUE` forms — none of this crate's flags take a
//! value). A bare `--` marks the end of options; all subsequent arguments
//! are treated as file paths regardless of a leading `-`.
//!
//! Bad or unrecognised options return an `Err` with a human-readable message.

use anyhow::anyhow;

use crate::cli::constants::set_display_level;

/// Operation selected by `-d`/`--decompress` (default: compress).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMode {
    Compress,
    Decompress,
}

/// Complete set of options and filenames produced by [`parse_args_from`].
#[derive(Debug)]
pub struct ParsedArgs {
    pub op_mode: OpMode,
    /// `-c`/`--stdout`: write result to stdout, keep the source file.
    pub stdout: bool,
    /// `-f`/`--force`: overwrite an existing destination without asking.
    pub force: bool,
    /// `-k`/`--keep`: keep the source file after compressing/decompressing
    /// (always true in this crate; there is no in-place-delete behavior,
    /// but the flag is accepted for familiarity and recorded here).
    pub keep: bool,
    /// Input filenames; empty means read from stdin.
    pub in_file_names: Vec<String>,
    /// Explicit output filename, if given as a second positional argument.
    pub output_filename: Option<String>,
    /// A `--help`/`-h` or `--version`/`-V` flag was processed; the caller
    /// should exit 0 without touching any files.
    pub exit_early: bool,
}

pub fn parse_args_from(exe_name: &str, argv: &[String]) -> anyhow::Result<ParsedArgs> {
    let mut op_mode = OpMode::Compress;
    let mut stdout = false;
    let mut force = false;
    let mut keep = false;
    let mut verbose_level: Option<u32> = None;
    let mut quiet_count = 0u32;
    let mut in_file_names: Vec<String> = Vec::new();
    let mut output_filename: Option<String> = None;
    let mut exit_early = false;
    let mut all_arguments_are_files = false;

    'args: for argument in argv {
        if argument.is_empty() {
            continue;
        }

        if !all_arguments_are_files && argument == "--" {
            all_arguments_are_files = true;
            continue;
        }

        if all_arguments_are_files || !argument.starts_with('-') || argument == "-" {
            if in_file_names.is_empty() {
                in_file_names.push(argument.clone());
            } else if output_filename.is_none() {
                output_filename = Some(argument.clone());
            } else {
                return Err(anyhow!("bad usage: too many filenames given"));
            }
            continue;
        }

        if let Some(long) = argument.strip_prefix("--") {
            match long {
                "stdout" => stdout = true,
                "decompress" => op_mode = OpMode::Decompress,
                "compress" => op_mode = OpMode::Compress,
                "force" => force = true,
                "keep" => keep = true,
                "quiet" => quiet_count += 1,
                "verbose" => verbose_level = Some(verbose_level.unwrap_or(2) + 1),
                "help" => {
                    crate::cli::help::print_long_help(exe_name);
                    exit_early = true;
                    break 'args;
                }
                "version" => {
                    crate::cli::help::print_version();
                    exit_early = true;
                    break 'args;
                }
                _ => return Err(anyhow!("bad usage: unrecognized option '--{}'", long)),
            }
            continue;
        }

        // Aggregated short options, e.g. "-dv".
        for ch in argument[1..].chars() {
            match ch {
                'c' => stdout = true,
                'd' => op_mode = OpMode::Decompress,
                'f' => force = true,
                'k' => keep = true,
                'q' => quiet_count += 1,
                'v' => verbose_level = Some(verbose_level.unwrap_or(2) + 1),
                'h' | 'H' => {
                    crate::cli::help::print_long_help(exe_name);
                    exit_early = true;
                    break 'args;
                }
                'V' => {
                    crate::cli::help::print_version();
                    exit_early = true;
                    break 'args;
                }
                other => {
                    return Err(anyhow!("bad usage: unrecognized option '-{}'", other));
                }
            }
        }
    }

    let level = verbose_level.unwrap_or(2).saturating_sub(quiet_count);
    set_display_level(level);

    Ok(ParsedArgs {
        op_mode,
        stdout,
        force,
        keep,
        in_file_names,
        output_filename,
        exit_early,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> anyhow::Result<ParsedArgs> {
        parse_args_from("bcpack", &v.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn default_mode_is_compress() {
        let a = args(&["in.txt"]).unwrap();
        assert_eq!(a.op_mode, OpMode::Compress);
        assert_eq!(a.in_file_names, vec!["in.txt".to_string()]);
    }

    #[test]
    fn decompress_short_flag() {
        let a = args(&["-d", "in.bc"]).unwrap();
        assert_eq!(a.op_mode, OpMode::Decompress);
    }

    #[test]
    fn aggregated_short_flags() {
        let a = args(&["-dcf", "in.bc"]).unwrap();
        assert_eq!(a.op_mode, OpMode::Decompress);
        assert!(a.stdout);
        assert!(a.force);
    }

    #[test]
    fn long_flags() {
        let a = args(&["--decompress", "--force", "in.bc"]).unwrap();
        assert_eq!(a.op_mode, OpMode::Decompress);
        assert!(a.force);
    }

    #[test]
    fn unrecognized_short_flag_errors() {
        assert!(args(&["-z"]).is_err());
    }

    #[test]
    fn unrecognized_long_flag_errors() {
        assert!(args(&["--bogus"]).is_err());
    }

    #[test]
    fn positional_input_then_output() {
        let a = args(&["in.txt", "out.bc"]).unwrap();
        assert_eq!(a.in_file_names, vec!["in.txt".to_string()]);
        assert_eq!(a.output_filename, Some("out.bc".to_string()));
    }

    #[test]
    fn double_dash_ends_options() {
        let a = args(&["--", "-weird-name"]).unwrap();
        assert_eq!(a.in_file_names, vec!["-weird-name".to_string()]);
    }

    #[test]
    fn help_flag_sets_exit_early() {
        let a = args(&["-h"]).unwrap();
        assert!(a.exit_early);
    }

    #[test]
    fn help_flag_short_circuits_before_a_later_bad_flag() {
        let a = args(&["-h", "--bogus"]).unwrap();
        assert!(a.exit_early);
    }

    #[test]
    fn help_long_flag_short_circuits_before_a_later_bad_flag() {
        let a = args(&["--help", "--bogus"]).unwrap();
        assert!(a.exit_early);
    }

    #[test]
    fn version_flag_short_circuits_before_trailing_filenames() {
        let a = args(&["-V", "in.txt", "out.bc", "extra"]).unwrap();
        assert!(a.exit_early);
    }
}
