//! Tag extraction for model completions.
//!
//! Completions wrap their payload in XML-style tags (`<Instructions>`,
//! `<new_prompt>`). Matching is non-greedy and `.` spans newlines, so the
//! first closing tag ends a match.

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("No <{tag}> tags found in the response")]
    MissingTag { tag: String },

    #[error("<{tag}> tags in the response are empty")]
    Empty { tag: String },

    #[error("Invalid tag pattern: {0}")]
    Pattern(#[from] regex::Error),
}

fn tag_pattern(tag: &str) -> Result<Regex, ExtractError> {
    let tag = regex::escape(tag);
    Ok(Regex::new(&format!("(?s)<{tag}>(.*?)</{tag}>"))?)
}

/// Returns every substring enclosed by `<tag>…</tag>`, in order of appearance.
pub fn extract_between_tags(
    tag: &str,
    text: &str,
    strip: bool,
) -> Result<Vec<String>, ExtractError> {
    let pattern = tag_pattern(tag)?;
    Ok(pattern
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| {
            if strip {
                m.as_str().trim().to_string()
            } else {
                m.as_str().to_string()
            }
        })
        .collect())
}

/// Returns the first substring enclosed by `<tag>…</tag>`, untrimmed.
pub fn first_between_tags<'a>(tag: &str, text: &'a str) -> Result<&'a str, ExtractError> {
    let pattern = tag_pattern(tag)?;
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| ExtractError::MissingTag {
            tag: tag.to_string(),
        })
}

/// Strips empty same-name tag pairs (`<x></x>`) from the end of `text`,
/// trimming trailing whitespace between passes, until none remain.
///
/// Applying it to its own output is a no-op.
pub fn collapse_empty_tags(text: &str) -> &str {
    let mut current = text.trim_end();
    while let Some(rest) = strip_trailing_empty_pair(current) {
        current = rest.trim_end();
    }
    current
}

fn strip_trailing_empty_pair(text: &str) -> Option<&str> {
    let body = text.strip_suffix('>')?;
    let close_start = body.rfind("</")?;
    let name = &body[close_start + 2..];
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    let open = format!("<{name}>");
    text[..close_start].strip_suffix(open.as_str())
}

/// First `<tag>` payload, trimmed, optionally with trailing empty tags
/// collapsed. A missing or empty payload is an error, never a default.
pub fn extract_tagged(text: &str, tag: &str, collapse: bool) -> Result<String, ExtractError> {
    let mut result = first_between_tags(tag, text)?.trim();
    if collapse {
        result = collapse_empty_tags(result);
    }
    if result.is_empty() {
        return Err(ExtractError::Empty {
            tag: tag.to_string(),
        });
    }
    Ok(result.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_instructions_trims_whitespace() {
        let text = "preamble <Instructions>\n  Do the thing.\n</Instructions> trailer";
        let result = extract_tagged(text, "Instructions", true).unwrap();
        assert_eq!(result, "Do the thing.");
    }

    #[test]
    fn test_extract_new_prompt_trimmed() {
        let text = "<new_prompt>  Write a haiku.  </new_prompt>";
        assert_eq!(
            extract_tagged(text, "new_prompt", false).unwrap(),
            "Write a haiku."
        );
    }

    #[test]
    fn test_extract_spans_newlines() {
        let text = "<Instructions>line one\nline two\n\nline three</Instructions>";
        assert_eq!(
            extract_tagged(text, "Instructions", true).unwrap(),
            "line one\nline two\n\nline three"
        );
    }

    #[test]
    fn test_extract_is_non_greedy() {
        let text = "<Instructions>first</Instructions> middle <Instructions>second</Instructions>";
        assert_eq!(extract_tagged(text, "Instructions", true).unwrap(), "first");
    }

    #[test]
    fn test_extract_missing_tag_is_error() {
        let err = extract_tagged("no tags here", "Instructions", true).unwrap_err();
        assert!(matches!(err, ExtractError::MissingTag { ref tag } if tag == "Instructions"));
        assert_eq!(err.to_string(), "No <Instructions> tags found in the response");
    }

    #[test]
    fn test_extract_unclosed_tag_is_error() {
        let err = extract_tagged("<new_prompt>never closed", "new_prompt", false).unwrap_err();
        assert!(matches!(err, ExtractError::MissingTag { .. }));
    }

    #[test]
    fn test_extract_whitespace_only_is_error() {
        let err = extract_tagged("<new_prompt>   \n </new_prompt>", "new_prompt", false).unwrap_err();
        assert!(matches!(err, ExtractError::Empty { .. }));
    }

    #[test]
    fn test_extract_only_empty_tags_is_error() {
        let text = "<Instructions>\n<Task></Task>\n</Instructions>";
        let err = extract_tagged(text, "Instructions", true).unwrap_err();
        assert!(matches!(err, ExtractError::Empty { .. }));
    }

    #[test]
    fn test_extract_collapses_trailing_empty_tags() {
        let text = "<Instructions>\nSummarize {ARTICLE}.\n<Task></Task>\n</Instructions>";
        assert_eq!(
            extract_tagged(text, "Instructions", true).unwrap(),
            "Summarize {ARTICLE}."
        );
    }

    #[test]
    fn test_extract_without_collapse_keeps_empty_tags() {
        let text = "<new_prompt>Rewrite it<x></x></new_prompt>";
        assert_eq!(
            extract_tagged(text, "new_prompt", false).unwrap(),
            "Rewrite it<x></x>"
        );
    }

    #[test]
    fn test_tag_with_space_matches_literally() {
        let text = "<Instructions Structure>plan</Instructions Structure>";
        assert_eq!(
            extract_between_tags("Instructions Structure", text, false).unwrap(),
            vec!["plan".to_string()]
        );
    }

    #[test]
    fn test_extract_between_tags_strip_flag() {
        let text = "<a> one </a><a>two </a>";
        assert_eq!(
            extract_between_tags("a", text, false).unwrap(),
            vec![" one ".to_string(), "two ".to_string()]
        );
        assert_eq!(
            extract_between_tags("a", text, true).unwrap(),
            vec!["one".to_string(), "two".to_string()]
        );
    }

    #[test]
    fn test_extract_between_tags_no_match_is_empty() {
        assert!(extract_between_tags("a", "plain text", true).unwrap().is_empty());
    }

    #[test]
    fn test_collapse_single_pair() {
        assert_eq!(collapse_empty_tags("text<x></x>"), "text");
    }

    #[test]
    fn test_collapse_stacked_pairs_with_whitespace() {
        assert_eq!(collapse_empty_tags("text\n<a></a>\n<b></b>  \n"), "text");
    }

    #[test]
    fn test_collapse_ignores_mismatched_names() {
        assert_eq!(collapse_empty_tags("text<a></b>"), "text<a></b>");
    }

    #[test]
    fn test_collapse_ignores_non_empty_pairs() {
        assert_eq!(collapse_empty_tags("text<a>x</a>"), "text<a>x</a>");
    }

    #[test]
    fn test_collapse_ignores_pairs_not_at_end() {
        assert_eq!(collapse_empty_tags("<a></a> text"), "<a></a> text");
    }

    #[test]
    fn test_collapse_ignores_non_word_names() {
        assert_eq!(collapse_empty_tags("text<a b></a b>"), "text<a b></a b>");
    }

    #[test]
    fn test_collapse_is_idempotent() {
        let inputs = [
            "plain",
            "text<x></x>",
            "text\n<a></a>\n<b></b>\n",
            "<x></x>",
            "keep <a>x</a>",
            "",
        ];
        for input in inputs {
            let once = collapse_empty_tags(input);
            assert_eq!(collapse_empty_tags(once), once, "input: {input:?}");
        }
    }
}
