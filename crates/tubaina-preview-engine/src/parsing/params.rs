use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cursor::Cursor;

/// The grammar rule used to extract one argument of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    /// Remainder of the tag up to its closing bracket, consumed greedily.
    /// Terminates parameter parsing, so only ever the sole or trailing kind.
    FreeText,
    /// A whitespace-delimited token, stripped of a trailing `]`.
    BareToken,
    /// Text enclosed in the first pair of `"` characters found.
    QuotedString,
    /// A `BareToken` whose value is taken after a literal `=` separator;
    /// the prefix itself (e.g. `w=`) is discarded.
    PrefixedToken,
}

/// A recoverable problem met while extracting one paragraph's parameters.
///
/// Never aborts the document; the affected value degrades to an empty
/// string (or is dropped) and rendering continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParamIssue {
    #[error("declared quoted parameter has no matching pair of quotes")]
    UnterminatedQuote,
    #[error("free-text parameter has no closing bracket")]
    MissingCloseBracket,
}

/// Extracts ordered parameter values from a paragraph that opens with a tag.
///
/// `paragraph` must start with `[` (leading whitespace already trimmed by the
/// caller); scanning starts at the first whitespace after the tag token. A
/// paragraph with no whitespace after the tag has no parameters at all, and
/// extraction also stops early once the paragraph is exhausted: missing
/// trailing parameters are absent, not errors.
pub fn extract_params(paragraph: &str, kinds: &[ParamKind]) -> (Vec<String>, Vec<ParamIssue>) {
    let mut values = Vec::new();
    let mut issues = Vec::new();

    let Some(start) = paragraph.find(char::is_whitespace) else {
        return (values, issues);
    };
    let mut cur = Cursor::new(paragraph, start);

    for kind in kinds {
        match kind {
            ParamKind::FreeText => {
                let rest = cur.rest();
                match rest.find(']') {
                    Some(i) => values.push(rest[..i].trim().to_string()),
                    None => {
                        values.push(rest.trim().to_string());
                        issues.push(ParamIssue::MissingCloseBracket);
                    }
                }
                break;
            }
            ParamKind::BareToken | ParamKind::PrefixedToken => {
                cur.skip_whitespace();
                if cur.eof() {
                    break;
                }
                let raw = cur.take_until_whitespace();
                let mut value = raw.trim_end_matches(']');
                if *kind == ParamKind::PrefixedToken
                    && let Some((_, rhs)) = value.split_once('=')
                {
                    value = rhs;
                }
                if value.is_empty() {
                    // Token was only the closing bracket: nothing left.
                    break;
                }
                values.push(value.to_string());
            }
            ParamKind::QuotedString => {
                let leftover = cur.rest().trim().trim_end_matches(']');
                if leftover.trim().is_empty() {
                    break;
                }
                match cur.take_quoted() {
                    Some(v) => values.push(v.to_string()),
                    None => {
                        values.push(String::new());
                        issues.push(ParamIssue::UnterminatedQuote);
                    }
                }
            }
        }
    }

    (values, issues)
}

#[cfg(test)]
mod tests {
    use super::ParamKind::*;
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn values(paragraph: &str, kinds: &[ParamKind]) -> Vec<String> {
        let (values, issues) = extract_params(paragraph, kinds);
        assert_eq!(issues, vec![]);
        values
    }

    #[test]
    fn free_text_runs_to_closing_bracket() {
        assert_eq!(values("[chapter My First Chapter]", &[FreeText]), vec![
            "My First Chapter"
        ]);
    }

    #[test]
    fn free_text_spans_lines() {
        assert_eq!(values("[chapter Two\nLines]", &[FreeText]), vec![
            "Two\nLines"
        ]);
    }

    #[test]
    fn no_whitespace_means_no_parameters() {
        assert_eq!(values("[code]", &[BareToken]), Vec::<String>::new());
        assert_eq!(values("[chapter]", &[FreeText]), Vec::<String>::new());
    }

    #[test]
    fn bare_token_strips_trailing_bracket() {
        assert_eq!(values("[code style.css]", &[BareToken]), vec!["style.css"]);
    }

    #[test]
    fn all_three_img_parameters() {
        assert_eq!(
            values("[img photo.png w=200 \"A caption\"]", &[
                BareToken,
                PrefixedToken,
                QuotedString
            ]),
            vec!["photo.png", "200", "A caption"]
        );
    }

    #[rstest]
    #[case("[img photo.png]", vec!["photo.png"])]
    #[case("[img photo.png w=30%]", vec!["photo.png", "30%"])]
    #[case("[img photo.png w=200 \"Legenda\"]", vec!["photo.png", "200", "Legenda"])]
    fn img_tolerates_missing_trailing_parameters(
        #[case] paragraph: &str,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(
            values(paragraph, &[BareToken, PrefixedToken, QuotedString]),
            expected
        );
    }

    #[test]
    fn prefixed_token_without_separator_is_kept_whole() {
        assert_eq!(values("[img pic.png 200]", &[BareToken, PrefixedToken]), vec![
            "pic.png", "200"
        ]);
    }

    #[test]
    fn quoted_then_free_text() {
        assert_eq!(
            values("[quote \"Simple is better\" Tim Peters]", &[
                QuotedString,
                FreeText
            ]),
            vec!["Simple is better", "Tim Peters"]
        );
    }

    #[test]
    fn unterminated_quote_degrades_to_empty_value() {
        let (values, issues) =
            extract_params("[img pic.png w=10 \"oops]", &[BareToken, PrefixedToken, QuotedString]);
        assert_eq!(values, vec!["pic.png", "10", ""]);
        assert_eq!(issues, vec![ParamIssue::UnterminatedQuote]);
    }

    #[test]
    fn free_text_without_closing_bracket_takes_the_rest() {
        let (values, issues) = extract_params("[chapter No bracket", &[FreeText]);
        assert_eq!(values, vec!["No bracket"]);
        assert_eq!(issues, vec![ParamIssue::MissingCloseBracket]);
    }

    #[test]
    fn absent_quoted_parameter_is_not_an_issue() {
        // Nothing but the closing bracket remains: absent, not malformed.
        let (values, issues) = extract_params("[quote ]", &[QuotedString, FreeText]);
        assert_eq!(values, Vec::<String>::new());
        assert_eq!(issues, vec![]);
    }
}
