//! Transient notifications (toasts) carried across a redirect.
//!
//! A toast is serialized to JSON and hex-encoded so it fits in a cookie value
//! without quoting. It is shown on the next rendered page and then cleared.

use serde::{Deserialize, Serialize};

use crate::services::session::bytes_to_hex;

/// Longest encoded toast accepted back from a browser.
const MAX_ENCODED_LEN: usize = 2048;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

impl Variant {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub variant: Variant,
}

impl Toast {
    #[must_use]
    pub fn success(title: &str, description: &str) -> Self {
        Self { title: title.to_owned(), description: description.to_owned(), variant: Variant::Default }
    }

    #[must_use]
    pub fn error(title: &str, description: &str) -> Self {
        Self { title: title.to_owned(), description: description.to_owned(), variant: Variant::Destructive }
    }

    /// Encode as a cookie-safe string. A description too long for
    /// [`Toast::decode`] to accept is shortened and ends with an ellipsis.
    #[must_use]
    pub fn encode(&self) -> String {
        let encoded = hex_json(self);
        if encoded.len() <= MAX_ENCODED_LEN {
            return encoded;
        }
        let mut toast = self.clone();
        let mut keep = toast.description.chars().count();
        while keep > 0 {
            // Each dropped char saves at least two hex digits.
            let excess_chars = hex_json(&toast).len().saturating_sub(MAX_ENCODED_LEN).div_ceil(2);
            keep = keep.saturating_sub(excess_chars.max(1));
            toast.description = self.description.chars().take(keep).collect::<String>() + "…";
            let encoded = hex_json(&toast);
            if encoded.len() <= MAX_ENCODED_LEN {
                return encoded;
            }
        }
        hex_json(&toast)
    }

    /// Decode a value produced by [`Toast::encode`]. Anything malformed is dropped.
    #[must_use]
    pub fn decode(raw: &str) -> Option<Self> {
        if raw.is_empty() || raw.len() > MAX_ENCODED_LEN {
            return None;
        }
        let bytes = hex_to_bytes(raw)?;
        serde_json::from_slice(&bytes).ok()
    }
}

fn hex_json(toast: &Toast) -> String {
    serde_json::to_vec(toast)
        .map(|bytes| bytes_to_hex(&bytes))
        .unwrap_or_default()
}

fn hex_to_bytes(hex: &str) -> Option<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return None;
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| hex.get(i..i + 2).and_then(|pair| u8::from_str_radix(pair, 16).ok()))
        .collect()
}

#[cfg(test)]
#[path = "notify_test.rs"]
mod tests;
