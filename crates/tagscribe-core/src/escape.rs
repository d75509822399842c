//! Markdown escaping of commit messages.

use std::sync::LazyLock;

use regex::Regex;

/// Characters escaped with a backslash, in substitution order.
pub const MARKDOWN_RESERVED_CHARACTERS: [char; 8] = ['*', '[', ']', '(', ')', '#', '+', '!'];

// A bullet with nothing after it, left behind by blank commit bodies.
static EMPTY_BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-\s*$").expect("invalid regex"));

/// Escapes commit message lines for markdown output.
///
/// Inputs may hold several lines each; the result has one entry per line.
/// Empty bullet lines are dropped before the reserved characters are
/// escaped, so escaping can never change which lines are removed.
pub fn escape_commits<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let kept: Vec<&str> = lines
        .iter()
        .flat_map(|line| line.as_ref().split('\n'))
        .filter(|line| !EMPTY_BULLET_RE.is_match(line))
        .collect();

    if kept.is_empty() {
        return Vec::new();
    }

    let mut text = kept.join("\n");
    for reserved in MARKDOWN_RESERVED_CHARACTERS {
        text = text.replace(reserved, &format!("\\{reserved}"));
    }

    text.split('\n').map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_reserved() {
        let escaped = escape_commits(&["* item [one] (two) #three +four !five"]);
        assert_eq!(
            escaped,
            vec![r"\* item \[one\] \(two\) \#three \+four \!five"]
        );
    }

    #[test]
    fn test_plain_lines_untouched() {
        let lines = ["fix: a", "feat: b - with dash", "under_score {braces}."];
        assert_eq!(escape_commits(&lines), lines);
    }

    #[test]
    fn test_backslash_not_escaped() {
        assert_eq!(escape_commits(&[r"path\to\file"]), vec![r"path\to\file"]);
    }

    #[test]
    fn test_no_double_escape() {
        assert_eq!(escape_commits(&["**bold**"]), vec![r"\*\*bold\*\*"]);
        assert_eq!(escape_commits(&["[]()"]), vec![r"\[\]\(\)"]);
    }

    #[test]
    fn test_drops_empty_bullets() {
        let lines = ["fix: a", "-", "- ", "  -\t", "- real item"];
        assert_eq!(escape_commits(&lines), vec!["fix: a", "- real item"]);
    }

    #[test]
    fn test_keeps_blank_lines() {
        let lines = ["fix: a", "", "body"];
        assert_eq!(escape_commits(&lines), lines);
    }

    #[test]
    fn test_splits_multiline_messages() {
        let messages = ["fix: some patch\n\n- notes in the body\n-", "feat: initial"];
        assert_eq!(
            escape_commits(&messages),
            vec!["fix: some patch", "", "- notes in the body", "feat: initial"]
        );
    }

    #[test]
    fn test_empty_input() {
        let lines: [&str; 0] = [];
        assert!(escape_commits(&lines).is_empty());
    }

    #[test]
    fn test_only_empty_bullets() {
        assert!(escape_commits(&["-", "- "]).is_empty());
    }

    #[test]
    fn test_idempotent_without_reserved_characters() {
        let lines = ["chore: tidy up", "-", "", "refactor: rename things"];
        let once = escape_commits(&lines);
        let twice = escape_commits(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_line_count_only_shrinks_by_empty_bullets() {
        let lines = ["a*", "-", "b#", "-  ", "(c)", "d"];
        let bullets = lines.iter().filter(|l| l.trim() == "-").count();
        assert_eq!(escape_commits(&lines).len(), lines.len() - bullets);
    }

    #[test]
    fn test_accepts_owned_strings() {
        let lines = vec!["fix: #12".to_string()];
        assert_eq!(escape_commits(&lines), vec![r"fix: \#12"]);
    }
}
