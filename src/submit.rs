use serde::Serialize;

use crate::form::EntryList;

/// Prefix the extracted value trails in a well-formed Drive URL.
pub const DRIVE_PREFIX: &str = "http://drive.google.com/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayloadEntry {
    pub url: String,
    /// Substring following [`DRIVE_PREFIX`]. Absent (not `null`) when the
    /// prefix does not occur in the URL; a defined edge case, not an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// What the submit action hands to the transport, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestPayload {
    pub entries: Vec<PayloadEntry>,
}

impl RequestPayload {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Text between the first occurrence of [`DRIVE_PREFIX`] and the next one,
/// if the prefix occurs at all.
pub fn extracted_value(url: &str) -> Option<&str> {
    url.split(DRIVE_PREFIX).nth(1)
}

pub fn build_payload(list: &EntryList) -> RequestPayload {
    RequestPayload {
        entries: list
            .iter()
            .map(|entry| PayloadEntry {
                url: entry.url.clone(),
                value: extracted_value(&entry.url).map(str::to_string),
            })
            .collect(),
    }
}
