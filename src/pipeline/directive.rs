//! Directive parsing: `<selector> to <target>` into a structured [`Task`]

use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

use super::extension::{normalize, WILDCARD};

/// Keyword separating the source selector from the target extension.
pub const SEPARATOR_KEYWORD: &str = "to";

/// Which input files a directive selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Every extension in the convertible registry.
    All,
    /// An explicit, non-empty set of normalized extensions.
    Extensions(BTreeSet<String>),
}

/// One parsed conversion directive.
///
/// Only [`parse`] constructs a `Task`, so every extension it holds is
/// normalized, the selector is never an empty set, and the target is never
/// empty or the wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    selector: Selector,
    target_extension: String,
}

impl Task {
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// True when the directive used the wildcard selector.
    pub fn match_all(&self) -> bool {
        matches!(self.selector, Selector::All)
    }

    /// Normalized source extensions; empty when [`Task::match_all`] is true.
    pub fn source_extensions(&self) -> Vec<&str> {
        match &self.selector {
            Selector::All => Vec::new(),
            Selector::Extensions(exts) => exts.iter().map(String::as_str).collect(),
        }
    }

    /// Whether a lowercase, dot-prefixed extension is one of the source extensions.
    pub fn accepts_extension(&self, extension: &str) -> bool {
        match &self.selector {
            Selector::All => false,
            Selector::Extensions(exts) => exts.contains(extension),
        }
    }

    pub fn target_extension(&self) -> &str {
        &self.target_extension
    }

    /// Short selector label used in log entries.
    pub fn selector_label(&self) -> &'static str {
        match self.selector {
            Selector::All => WILDCARD,
            Selector::Extensions(_) => "[multi-format]",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.selector {
            Selector::All => write!(f, "{} to {}", WILDCARD, self.target_extension),
            Selector::Extensions(exts) => {
                let list = exts.iter().cloned().collect::<Vec<_>>().join(",");
                write!(f, "{} to {}", list, self.target_extension)
            }
        }
    }
}

/// Reasons a directive is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    #[error("invalid directive '{directive}': missing separator 'to'")]
    MissingSeparator { directive: String },

    #[error("invalid directive '{directive}': empty side around 'to'")]
    EmptySide { directive: String },

    #[error("invalid directive '{directive}': invalid source token '{token}'")]
    InvalidSource { directive: String, token: String },

    #[error("invalid directive '{directive}': invalid target '{target}'")]
    InvalidTarget { directive: String, target: String },
}

impl DirectiveError {
    /// The raw directive text that failed to parse.
    pub fn directive(&self) -> &str {
        match self {
            Self::MissingSeparator { directive }
            | Self::EmptySide { directive }
            | Self::InvalidSource { directive, .. }
            | Self::InvalidTarget { directive, .. } => directive,
        }
    }
}

/// Parse one raw directive.
///
/// The separator is the first occurrence of `to` anywhere in the lowercased
/// directive, without word-boundary checks. A token that itself contains
/// those two letters therefore splits early; such directives are accepted or
/// rejected exactly as that split dictates.
///
/// # Examples
/// ```
/// use gotobe::pipeline::parse;
///
/// let task = parse(".mp3, FLAC to aac").unwrap();
/// assert_eq!(task.source_extensions(), vec![".flac", ".mp3"]);
/// assert_eq!(task.target_extension(), ".aac");
///
/// assert!(parse("all to all").is_err());
/// ```
pub fn parse(raw: &str) -> Result<Task, DirectiveError> {
    let directive = raw.trim();
    let lower = directive.to_lowercase();

    let pos = lower
        .find(SEPARATOR_KEYWORD)
        .ok_or_else(|| DirectiveError::MissingSeparator {
            directive: directive.to_string(),
        })?;

    let left = lower[..pos].trim();
    let right = lower[pos + SEPARATOR_KEYWORD.len()..].trim();

    if left.is_empty() || right.is_empty() {
        return Err(DirectiveError::EmptySide {
            directive: directive.to_string(),
        });
    }

    let selector = if left == WILDCARD {
        Selector::All
    } else {
        let mut extensions = BTreeSet::new();
        for piece in left.split(',') {
            let ext = normalize(piece);
            if ext.is_empty() || ext == WILDCARD {
                return Err(DirectiveError::InvalidSource {
                    directive: directive.to_string(),
                    token: piece.trim().to_string(),
                });
            }
            extensions.insert(ext);
        }
        // split always yields at least one piece, so this only guards the invariant
        if extensions.is_empty() {
            return Err(DirectiveError::InvalidSource {
                directive: directive.to_string(),
                token: left.to_string(),
            });
        }
        Selector::Extensions(extensions)
    };

    let target_extension = normalize(right);
    if target_extension.is_empty() || target_extension == WILDCARD {
        return Err(DirectiveError::InvalidTarget {
            directive: directive.to_string(),
            target: right.to_string(),
        });
    }

    Ok(Task {
        selector,
        target_extension,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_source() {
        let task = parse("mp3 to aac").unwrap();
        assert!(!task.match_all());
        assert_eq!(task.source_extensions(), vec![".mp3"]);
        assert_eq!(task.target_extension(), ".aac");
    }

    #[test]
    fn test_parse_wildcard() {
        let task = parse("all to .wav").unwrap();
        assert!(task.match_all());
        assert!(task.source_extensions().is_empty());
        assert_eq!(task.target_extension(), ".wav");
        assert_eq!(task.selector(), &Selector::All);
    }

    #[test]
    fn test_parse_wildcard_is_case_insensitive() {
        let task = parse("  ALL   TO  FLAC ").unwrap();
        assert!(task.match_all());
        assert_eq!(task.target_extension(), ".flac");
    }

    #[test]
    fn test_parse_source_list() {
        let task = parse(".mp3,.aac to .wav").unwrap();
        assert_eq!(task.source_extensions(), vec![".aac", ".mp3"]);
        assert!(task.accepts_extension(".mp3"));
        assert!(task.accepts_extension(".aac"));
        assert!(!task.accepts_extension(".wav"));
    }

    #[test]
    fn test_parse_duplicate_sources_collapse() {
        let task = parse("mp3, .MP3 ,mp3 to ogg").unwrap();
        assert_eq!(task.source_extensions(), vec![".mp3"]);
    }

    #[test]
    fn test_parse_without_spaces() {
        // The separator is not word-bounded
        let task = parse("mp3to.wav").unwrap();
        assert_eq!(task.source_extensions(), vec![".mp3"]);
        assert_eq!(task.target_extension(), ".wav");
    }

    #[test]
    fn test_parse_missing_separator() {
        let err = parse("mp3 -> wav").unwrap_err();
        assert!(matches!(err, DirectiveError::MissingSeparator { .. }));
        assert_eq!(err.directive(), "mp3 -> wav");
    }

    #[test]
    fn test_parse_empty_sides() {
        assert!(matches!(
            parse("to .wav"),
            Err(DirectiveError::EmptySide { .. })
        ));
        assert!(matches!(
            parse(".mp3 to "),
            Err(DirectiveError::EmptySide { .. })
        ));
        assert!(matches!(parse("to"), Err(DirectiveError::EmptySide { .. })));
    }

    #[test]
    fn test_parse_rejects_wildcard_target() {
        let err = parse("all to all").unwrap_err();
        assert!(matches!(err, DirectiveError::InvalidTarget { .. }));
    }

    #[test]
    fn test_parse_rejects_wildcard_in_list() {
        let err = parse("mp3,all to wav").unwrap_err();
        assert_eq!(
            err,
            DirectiveError::InvalidSource {
                directive: "mp3,all to wav".to_string(),
                token: "all".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_empty_list_piece() {
        assert!(matches!(
            parse("mp3,,wav to flac"),
            Err(DirectiveError::InvalidSource { .. })
        ));
        assert!(matches!(
            parse(", to flac"),
            Err(DirectiveError::InvalidSource { .. })
        ));
    }

    #[test]
    fn test_parse_splits_on_first_occurrence() {
        // "toast" contains the separator, so the directive splits before it
        let err = parse("toast to wav").unwrap_err();
        assert!(matches!(err, DirectiveError::EmptySide { .. }));

        // "ogg to .otto" splits at the first "to" and keeps the rest as target
        let task = parse("ogg to .otto").unwrap();
        assert_eq!(task.target_extension(), ".otto");
    }

    #[test]
    fn test_target_matches_normalized_token() {
        let cases = [
            ("mp3 to AAC", "aac"),
            ("all to .Wav", ".Wav"),
            ("flac,ogg to  m4a ", " m4a "),
        ];
        for (directive, target) in cases {
            let task = parse(directive).unwrap();
            assert_eq!(task.target_extension(), normalize(target));
        }
    }

    #[test]
    fn test_error_display_names_directive() {
        let err = parse("bad").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid directive 'bad': missing separator 'to'"
        );
    }

    #[test]
    fn test_task_display() {
        assert_eq!(parse("all to wav").unwrap().to_string(), "all to .wav");
        assert_eq!(
            parse("wav,mp3 to flac").unwrap().to_string(),
            ".mp3,.wav to .flac"
        );
    }

    #[test]
    fn test_selector_label() {
        assert_eq!(parse("all to wav").unwrap().selector_label(), "all");
        assert_eq!(
            parse("mp3 to wav").unwrap().selector_label(),
            "[multi-format]"
        );
    }
}
