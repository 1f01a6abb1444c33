//! Binary entry point for the `bcpack` command-line tool.
//!
//! Argument parsing and file-level dispatch live in [`bcpack::cli`]; this
//! binary only resolves `argv[0]` to an executable name for usage messages
//! and translates the parse result into a process exit code.

use bcpack::cli::{parse_args_from, run};

fn main() {
    let mut argv = std::env::args();
    let exe_path = argv.next().unwrap_or_else(|| "bcpack".to_string());
    let exe_name = bcpack::cli::arg_utils::last_name_from_path(&exe_path).to_string();
    let rest: Vec<String> = argv.collect();

    let args = match parse_args_from(&exe_name, &rest) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{}: {}", exe_name, e);
            bcpack::cli::help::print_bad_usage(&exe_name);
            std::process::exit(1);
        }
    };

    std::process::exit(run(args));
}
