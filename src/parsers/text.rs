/// Splits free text into one entry per line.
///
/// Each line is trimmed and blank lines are removed. Used for pasted URL
/// lists and keyword files alike.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
