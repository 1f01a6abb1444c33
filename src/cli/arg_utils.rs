// cli/arg_utils.rs — small string helpers shared by argument parsing and
// filename handling, adapted from the reference CLI's path/exe-name helpers.

/// Returns the last path component of `path`, handling both `/` and `\`
/// separators.
pub fn last_name_from_path(path: &str) -> &str {
    let after_slash = match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    };
    match after_slash.rfind('\\') {
        Some(pos) => &after_slash[pos + 1..],
        None => after_slash,
    }
}

/// Strip a `.bc` suffix from `name`, if present.
pub fn strip_suffix(name: &str) -> Option<&str> {
    name.strip_suffix(crate::cli::constants::SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_name_from_path_unix() {
        assert_eq!(last_name_from_path("/a/b/c"), "c");
    }

    #[test]
    fn last_name_from_path_windows() {
        assert_eq!(last_name_from_path("a\\b"), "b");
    }

    #[test]
    fn last_name_from_path_no_separator() {
        assert_eq!(last_name_from_path("file.bc"), "file.bc");
    }

    #[test]
    fn strip_suffix_present() {
        assert_eq!(strip_suffix("archive.bc"), Some("archive"));
    }

    #[test]
    fn strip_suffix_absent() {
        assert_eq!(strip_suffix("archive"), None);
    }
}
