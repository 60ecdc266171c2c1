//! Parsers for git `--name-only` output

/// Parse `git ls-tree --name-only -r` output
///
/// Surrounding whitespace is trimmed first, so an empty tree yields no paths
/// and there is no trailing blank entry.
pub fn parse_file_listing(output: &str) -> Vec<String> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('\n').map(|line| line.trim_end_matches('\r').to_string()).collect()
}

/// Parse `git diff-tree --name-only -r` output
///
/// Lines are kept as-is, so the trailing newline produces a final empty
/// entry. Downstream classification treats it as an unmatched path.
pub fn parse_changed_files(output: &str) -> Vec<String> {
    output
        .split('\n')
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect()
}
