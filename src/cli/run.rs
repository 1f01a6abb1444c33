//! File-level dispatch: read input, call the core engine, write output.
//!
//! Kept deliberately simple relative to the reference CLI's streaming file
//! wrappers — the core engine here works over whole in-memory buffers (see
//! [`crate::io::MemBuffer`]), so there is no streaming frame-reader/writer
//! layer to port; this module's job is purely filenames, suffixes, and the
//! overwrite prompt.

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;

use crate::cli::args::{OpMode, ParsedArgs};
use crate::cli::constants::SUFFIX;
use crate::{displaylevel, end_process};

/// Run one invocation to completion. Returns the process exit code.
pub fn run(args: ParsedArgs) -> i32 {
    if args.exit_early {
        return 0;
    }

    if args.in_file_names.is_empty() {
        return run_one(&args, None, args.output_filename.as_deref());
    }

    let mut code = 0;
    for input in &args.in_file_names {
        let output = args.output_filename.as_deref();
        let result = run_one(&args, Some(input.as_str()), output);
        if result != 0 {
            code = result;
        }
    }
    code
}

fn run_one(args: &ParsedArgs, input_path: Option<&str>, output_path: Option<&str>) -> i32 {
    let input_bytes = match read_input(input_path) {
        Ok(b) => b,
        Err(e) => {
            displaylevel!(1, "{}: {}\n", input_path.unwrap_or("stdin"), e);
            return 1;
        }
    };

    let (result_bytes, default_output) = match args.op_mode {
        OpMode::Compress => (
            crate::compress::compress(&input_bytes),
            input_path.map(|p| format!("{}{}", p, SUFFIX)),
        ),
        OpMode::Decompress => {
            let decoded = match crate::decompress::decompress(&input_bytes) {
                Ok(b) => b,
                Err(e) => {
                    displaylevel!(1, "{}: {}\n", input_path.unwrap_or("stdin"), e);
                    return 1;
                }
            };
            let stripped = input_path.and_then(crate::cli::arg_utils::strip_suffix);
            (decoded, stripped.map(|s| s.to_string()))
        }
    };

    if args.stdout || input_path.is_none() {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if handle.write_all(&result_bytes).is_err() {
            displaylevel!(1, "error writing to stdout\n");
            return 1;
        }
        return 0;
    }

    let out_path = match output_path.map(str::to_string).or(default_output) {
        Some(p) => p,
        None => {
            displaylevel!(1, "unable to determine an output filename\n");
            return 1;
        }
    };

    if !args.force && Path::new(&out_path).exists() && io::stdin().is_terminal() {
        if !confirm_overwrite(&out_path) {
            displaylevel!(2, "{}: skipped\n", out_path);
            return 0;
        }
    }

    match fs::write(&out_path, &result_bytes) {
        Ok(()) => {
            displaylevel!(3, "{} -> {}\n", input_path.unwrap_or("stdin"), out_path);
            0
        }
        Err(e) => {
            end_process!(1, "unable to write {}: {}", out_path, e);
        }
    }
}

fn read_input(path: Option<&str>) -> io::Result<Vec<u8>> {
    match path {
        None | Some("-") => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
        Some(p) => fs::read(p),
    }
}

fn confirm_overwrite(path: &str) -> bool {
    displaylevel!(2, "{} already exists; overwrite (y/N)? ", path);
    let _ = io::stderr().flush();
    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes")
}
