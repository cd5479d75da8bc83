use std::sync::LazyLock;

use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::KasaneResult;

/// Marker distinguishing injected payloads from real `CHARACTERISTICS`
/// entries, which are reverse-DNS UTIs like
/// `public.accessibility.describes-video`.
pub const SIDECAR_MARKER: &str = "x-kasane-meta.";

static ENGINE: LazyLock<GeneralPurpose> = LazyLock::new(|| {
    GeneralPurpose::new(
        &base64::alphabet::STANDARD,
        GeneralPurposeConfig::new()
            .with_encode_padding(true)
            .with_decode_padding_mode(DecodePaddingMode::Indifferent),
    )
});

/// Per-rendition metadata smuggled through the `CHARACTERISTICS` attribute.
///
/// Field names mirror the rendition attributes they were copied from.
/// Absent fields are omitted from the payload entirely, never encoded as
/// null or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideChannel {
    #[serde(rename = "LANGUAGE", skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(rename = "NAME", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "FORCED", skip_serializing_if = "Option::is_none")]
    pub forced: Option<String>,
    #[serde(rename = "CHANNELS", skip_serializing_if = "Option::is_none")]
    pub channels: Option<String>,
}

impl SideChannel {
    /// Encodes to a text-safe payload: JSON first, then base64 over the
    /// UTF-8 bytes so non-ASCII names survive the ASCII-only carrier. The
    /// result contains no commas, quotes, or control characters and can sit
    /// unescaped inside a comma-delimited attribute value.
    pub fn encode(&self) -> KasaneResult<String> {
        let json = serde_json::to_string(self)?;
        Ok(ENGINE.encode(json.as_bytes()))
    }

    /// Exact inverse of [`SideChannel::encode`]. Any malformed payload
    /// surfaces as an error; callers are expected to ignore the marker
    /// entry and leave the track untouched.
    pub fn decode(payload: &str) -> KasaneResult<Self> {
        let bytes = ENGINE.decode(payload)?;
        let json = String::from_utf8(bytes)?;
        Ok(serde_json::from_str(&json)?)
    }
}
