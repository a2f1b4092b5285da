use std::sync::LazyLock;

use regex::Regex;

use crate::form::EntryList;

/// Grammar an acceptable URL must satisfy, kept byte-for-byte from the
/// service this form feeds. The scheme group reads `http?://` (optional `p`),
/// so `https://` does not match. Known quirk, deliberately left as-is.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(http?://)(drive\.google\.com)/([-a-zA-Z0-9()@:%_+.~#?&/=]+)")
        .expect("URL pattern is valid")
});

pub const INVALID_URL_MESSAGE: &str = "Enter a valid URL";

/// Validation outcome for one entry's current text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Blank and never edited. No error is surfaced, but submission stays
    /// blocked.
    Empty,
    Invalid,
    Valid,
}

impl Verdict {
    pub fn message(self) -> Option<&'static str> {
        match self {
            Verdict::Invalid => Some(INVALID_URL_MESSAGE),
            Verdict::Empty | Verdict::Valid => None,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

pub fn verdict(raw: &str, touched: bool) -> Verdict {
    if raw.is_empty() && !touched {
        return Verdict::Empty;
    }
    if URL_PATTERN.is_match(raw) {
        Verdict::Valid
    } else {
        Verdict::Invalid
    }
}

/// Whether `raw` counts toward the submission gate: non-empty and matching
/// the pattern, independent of the touched flag.
pub(crate) fn accepts(raw: &str) -> bool {
    !raw.is_empty() && URL_PATTERN.is_match(raw)
}

pub(crate) fn submission_ready(list: &EntryList) -> bool {
    list.iter().all(|entry| accepts(&entry.url))
}
