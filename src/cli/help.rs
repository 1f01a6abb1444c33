// cli/help.rs — usage/help text, adapted from the reference CLI's
// usage()/usage_advanced() layout.

use crate::cli::constants::COMPRESSOR_NAME;

pub fn print_usage(program: &str) {
    eprintln!("Usage :");
    eprintln!("      {} [arg] [input] [output]", program);
    eprintln!();
    eprintln!("input   : a filename");
    eprintln!("          with no FILE, or when FILE is -, read standard input");
    eprintln!("Arguments :");
    eprintln!(" -c     : write to standard output, keep original files");
    eprintln!(" -d     : decompression");
    eprintln!(" -f     : overwrite output without prompting");
    eprintln!(" -k     : keep source file (default behaviour already keeps it)");
    eprintln!(" -q     : suppress warnings; repeat for errors too");
    eprintln!(" -v     : verbose mode");
    eprintln!(" -h/-H  : display this help/long help and exit");
    eprintln!(" -V     : display version number and exit");
}

pub fn print_long_help(program: &str) {
    print_usage(program);
    eprintln!();
    eprintln!("Long options (fully spelled out, same meaning as the short form):");
    eprintln!(" --stdout, --decompress, --force, --keep, --quiet, --verbose,");
    eprintln!(" --help, --version");
    eprintln!();
    eprintln!(
        "{} compresses in place by default, appending the {} suffix; decompression strips it.",
        COMPRESSOR_NAME,
        crate::cli::constants::SUFFIX
    );
}

pub fn print_version() {
    eprintln!("{} {}", COMPRESSOR_NAME, env!("CARGO_PKG_VERSION"));
}

pub fn print_bad_usage(program: &str) {
    eprintln!("Incorrect parameters");
    print_usage(program);
}
