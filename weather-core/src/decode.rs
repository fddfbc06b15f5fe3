//! Strict JSON decoding of the weather payload.
//!
//! Decoding is all-or-nothing: either every required field is present with a
//! compatible type and a full [`WeatherResponse`] comes back, or the caller
//! gets a [`DecodeError`] and nothing else.

use serde_json::error::Category;
use thiserror::Error;

use crate::model::WeatherResponse;

/// Broad reason a payload was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// Not well-formed JSON.
    Syntax,
    /// Input ended in the middle of a value.
    Eof,
    /// Well-formed JSON that does not match the expected shape.
    Schema,
}

impl std::fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DecodeErrorKind::Syntax => "malformed json",
            DecodeErrorKind::Eof => "truncated json",
            DecodeErrorKind::Schema => "schema mismatch",
        })
    }
}

#[derive(Debug, Error)]
#[error("failed to decode weather payload ({kind}): {source}")]
pub struct DecodeError {
    kind: DecodeErrorKind,
    #[source]
    source: serde_json::Error,
}

impl DecodeError {
    pub fn kind(&self) -> DecodeErrorKind {
        self.kind
    }

    /// 1-based line where decoding stopped.
    pub fn line(&self) -> usize {
        self.source.line()
    }

    /// 1-based column where decoding stopped.
    pub fn column(&self) -> usize {
        self.source.column()
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(source: serde_json::Error) -> Self {
        let kind = match source.classify() {
            Category::Eof => DecodeErrorKind::Eof,
            Category::Data => DecodeErrorKind::Schema,
            Category::Syntax | Category::Io => DecodeErrorKind::Syntax,
        };
        Self { kind, source }
    }
}

/// Decode a raw payload into a [`WeatherResponse`].
pub fn decode(raw: &str) -> Result<WeatherResponse, DecodeError> {
    let response: WeatherResponse = serde_json::from_str(raw)?;
    log::debug!(
        "decoded payload for {} with {} forecast entries",
        response.city_info.city,
        response.data.forecast.len()
    );
    Ok(response)
}

/// Encode a [`WeatherResponse`] back into the wire shape.
pub fn encode(response: &WeatherResponse) -> serde_json::Result<String> {
    serde_json::to_string(response)
}

/// Pretty-printed variant of [`encode`], used for `--json` output.
pub fn encode_pretty(response: &WeatherResponse) -> serde_json::Result<String> {
    serde_json::to_string_pretty(response)
}
