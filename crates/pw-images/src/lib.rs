//! Base64 image payload handling for the Platewatch dashboard.
//!
//! Snapshot columns in the backend hold either a fully-qualified
//! `data:image/...;base64,` URI or a raw base64 payload assumed to be JPEG.
//! This crate decides how such a payload is rendered: a neutral placeholder
//! when it is absent, an error indicator when it is malformed or fails to
//! decode, or the normalized data URI. It is shared between the native
//! service and the WASM frontend, so it stays free of IO and runtime
//! dependencies.

use std::sync::OnceLock;

use base64::Engine;
use regex::Regex;

/// Prefix check used for normalization, matching any image data URI.
const DATA_URI_MARKER: &str = "data:image";

/// Default wrapper for bare payloads; the backend stores JPEG snapshots.
const JPEG_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Errors from the attempted-decode step
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Invalid base64 data: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Result of classifying an optional image payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    /// No payload was stored; render the "No image" placeholder
    Missing,
    /// The payload failed the syntactic pre-filter; render the
    /// "Invalid image" indicator
    Invalid,
    /// The payload normalized to a displayable data URI
    Valid(String),
}

fn data_uri_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^data:image/[a-z]+;base64,").expect("static regex"))
}

/// Classify an optional payload into exactly one rendering outcome.
///
/// `None` and the empty string are Missing, not Invalid. The format check
/// is a syntactic pre-filter only: a payload passes if it already carries
/// an image data-URI prefix or consists solely of base64 alphabet
/// characters. Any base64-alphabet string passes even if it does not
/// decode to an image; decode failures are handled separately by
/// [`try_decode`] and [`Preview::note_decode_failure`].
pub fn classify(payload: Option<&str>) -> ImageOutcome {
    let Some(payload) = payload else {
        return ImageOutcome::Missing;
    };
    if payload.is_empty() {
        return ImageOutcome::Missing;
    }
    if !is_well_formed(payload) {
        return ImageOutcome::Invalid;
    }
    ImageOutcome::Valid(normalize(payload))
}

/// Syntactic pre-filter: an image data-URI prefix, or pure base64 alphabet
pub fn is_well_formed(payload: &str) -> bool {
    data_uri_re().is_match(payload) || is_base64_alphabet(payload)
}

fn is_base64_alphabet(payload: &str) -> bool {
    !payload.is_empty()
        && payload
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'='))
}

/// Normalize a payload into a displayable source string.
///
/// Payloads that already start with `data:image` are used as-is; bare
/// payloads are wrapped with the JPEG data-URI prefix.
pub fn normalize(payload: &str) -> String {
    if payload.starts_with(DATA_URI_MARKER) {
        payload.to_string()
    } else {
        format!("{}{}", JPEG_DATA_URI_PREFIX, payload)
    }
}

/// Attempted-decode step: strictly decode the base64 portion of a payload.
///
/// Accepts either a data URI (the portion after `;base64,` is decoded) or a
/// bare payload. This is where payloads that pass the loose pre-filter but
/// are not valid base64 get caught.
pub fn try_decode(payload: &str) -> Result<Vec<u8>, ImageError> {
    let encoded = match payload.split_once(";base64,") {
        Some((_, rest)) => rest,
        None => payload,
    };
    Ok(base64::engine::general_purpose::STANDARD.decode(encoded)?)
}

/// Final rendering decision for one preview instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendering {
    /// Neutral "No image" box
    Placeholder,
    /// "Invalid image" box, visually distinct from the placeholder
    Error,
    /// Display the image from the given data URI
    Picture(String),
}

/// Per-instance preview state.
///
/// Classification happens once at construction. A decode failure observed
/// afterwards (from [`try_decode`] or the platform's image-load error
/// event) flips a sticky flag: once flipped, the instance renders the
/// error box for the rest of its lifetime.
#[derive(Debug, Clone)]
pub struct Preview {
    outcome: ImageOutcome,
    decode_failed: bool,
}

impl Preview {
    pub fn new(payload: Option<&str>) -> Self {
        Self {
            outcome: classify(payload),
            decode_failed: false,
        }
    }

    pub fn outcome(&self) -> &ImageOutcome {
        &self.outcome
    }

    /// Record a decode failure. Sticky: never resets.
    pub fn note_decode_failure(&mut self) {
        self.decode_failed = true;
    }

    pub fn rendering(&self) -> Rendering {
        match &self.outcome {
            ImageOutcome::Missing => Rendering::Placeholder,
            ImageOutcome::Invalid => Rendering::Error,
            ImageOutcome::Valid(_) if self.decode_failed => Rendering::Error,
            ImageOutcome::Valid(src) => Rendering::Picture(src.clone()),
        }
    }
}
