//! Failure template rendering
//!
//! Templates carry positional placeholders (`{0}`, `{1}`, ...) and a single
//! `{reason}` slot for the caller's explanation:
//!
//! ```
//! use chronassert_common::template::{because_clause, render};
//!
//! let reason = because_clause(Some("the {0} batch must finish first"), &["nightly".into()]);
//! let message = render(
//!     "Expected the date and time to be before {0}{reason}, but found {1}.",
//!     &["<2020-05-01 00:00:00>".into(), "<2020-05-02 00:00:00>".into()],
//!     &reason,
//! );
//!
//! assert_eq!(
//!     message,
//!     "Expected the date and time to be before <2020-05-01 00:00:00> because the nightly \
//!      batch must finish first, but found <2020-05-02 00:00:00>."
//! );
//! ```

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Matches `{0}`, `{12}` and `{reason}`
static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{(\d+|reason)\}").expect("PLACEHOLDER_REGEX pattern is valid and well-formed")
});

const BECAUSE: &str = "because";

/// Substitute positional arguments and the reason clause into `template`
///
/// Placeholders without a matching argument are left as written. Substituted
/// text is never scanned again, so arguments may contain braces.
pub fn render(template: &str, args: &[String], reason: &str) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures<'_>| {
            let key = &caps[1];
            if key == "reason" {
                return reason.to_string();
            }
            key.parse::<usize>()
                .ok()
                .and_then(|index| args.get(index))
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Build the text that replaces `{reason}`
///
/// Returns an empty string when there is no explanation. Otherwise the
/// explanation's own placeholders are filled from `args` and the result is
/// prefixed with a single space and, unless already present, the word
/// "because".
pub fn because_clause(reason: Option<&str>, args: &[String]) -> String {
    let Some(reason) = reason else {
        return String::new();
    };

    let rendered = render(reason, args, "");
    let trimmed = rendered.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if starts_with_because(trimmed) {
        format!(" {trimmed}")
    } else {
        format!(" {BECAUSE} {trimmed}")
    }
}

fn starts_with_because(text: &str) -> bool {
    text.get(..BECAUSE.len()).is_some_and(|head| head.eq_ignore_ascii_case(BECAUSE))
}

#[cfg(test)]
mod tests {
    //! Unit tests for template.
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    /// Validates positional substitution.
    ///
    /// Assertions:
    /// - Confirms each `{n}` is replaced by the n-th argument.
    /// - Confirms an argument may be used twice.
    #[test]
    fn test_render_positional() {
        let message = render("{0} then {1} then {0}", &args(&["a", "b"]), "");
        assert_eq!(message, "a then b then a");
    }

    /// Validates that unknown placeholders survive rendering.
    #[test]
    fn test_render_keeps_unknown_placeholders() {
        let message = render("{0} {3} {name}", &args(&["a"]), "");
        assert_eq!(message, "a {3} {name}");
    }

    /// Validates that substituted arguments are not rendered again.
    #[test]
    fn test_render_does_not_rescan_arguments() {
        let message = render("{0}{reason}", &args(&["{1}"]), " because {0}");
        assert_eq!(message, "{1} because {0}");
    }

    /// Validates the because clause scenarios.
    ///
    /// Assertions:
    /// - Confirms a missing or blank reason renders nothing.
    /// - Confirms "because" is prefixed exactly once.
    /// - Confirms reason arguments are substituted.
    #[test]
    fn test_because_clause() {
        assert_eq!(because_clause(None, &[]), "");
        assert_eq!(because_clause(Some("   "), &[]), "");
        assert_eq!(because_clause(Some("we said so"), &[]), " because we said so");
        assert_eq!(because_clause(Some("Because we said so"), &[]), " Because we said so");
        assert_eq!(
            because_clause(Some("  the {0} window is {1} "), &args(&["backup", "closed"])),
            " because the backup window is closed"
        );
    }

    /// Validates that a reason shorter than "because" is still prefixed.
    #[test]
    fn test_because_clause_short_reason() {
        assert_eq!(because_clause(Some("why"), &[]), " because why");
        assert_eq!(because_clause(Some("é"), &[]), " because é");
    }
}
