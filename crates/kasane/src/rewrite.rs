use log::{debug, warn};

use crate::{
    attribute::AttributeList,
    sidecar::{SideChannel, SIDECAR_MARKER},
    suffix::AllocationState,
};

const MEDIA_TAG_PREFIX: &str = "#EXT-X-MEDIA:";

/// Rendition kinds that carry metadata worth smuggling. `CLOSED-CAPTIONS`
/// and `VIDEO` renditions pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Audio,
    Subtitles,
}

impl MediaType {
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "AUDIO" => Some(Self::Audio),
            "SUBTITLES" => Some(Self::Subtitles),
            _ => None,
        }
    }
}

/// Diagnostic counters for one rewrite call. Not part of the text contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    pub lines_modified: usize,
}

/// Rewrites a master playlist so each audio and subtitle rendition carries
/// a sidecar token in `CHARACTERISTICS` and a language tag that is unique
/// within its `(GROUP-ID, LANGUAGE)` collision group.
///
/// Every line the rewriter does not recognize, or fails to process, is
/// passed through byte-for-byte; a problem with one line never corrupts the
/// rest of the document.
pub fn rewrite(manifest: &str) -> String {
    rewrite_with_summary(manifest).0
}

pub fn rewrite_with_summary(manifest: &str) -> (String, RewriteSummary) {
    let mut state = AllocationState::new();
    let mut summary = RewriteSummary::default();

    let lines: Vec<String> = manifest
        .lines()
        .map(|line| match rewrite_line(line, &mut state) {
            Some(rewritten) => {
                summary.lines_modified += 1;
                rewritten
            }
            None => line.to_string(),
        })
        .collect();
    debug!("Rewrote {} rendition lines", summary.lines_modified);

    let mut manifest_out = lines.join("\n");
    if manifest.ends_with('\n') {
        manifest_out.push('\n');
    }
    (manifest_out, summary)
}

/// Rewrites a single line, or returns `None` to pass it through unchanged.
fn rewrite_line(line: &str, state: &mut AllocationState) -> Option<String> {
    let body = line.strip_prefix(MEDIA_TAG_PREFIX)?;
    let mut attributes = AttributeList::parse(body);
    MediaType::from_attr(attributes.get("TYPE")?)?;

    // Copy, never remove: the player still sees the plain attributes, it
    // just cannot see the semantics the sidecar adds back later.
    let channel = SideChannel {
        language: attributes.get("LANGUAGE").map(str::to_string),
        name: attributes.get("NAME").map(str::to_string),
        forced: attributes.get("FORCED").map(str::to_string),
        channels: attributes.get("CHANNELS").map(str::to_string),
    };
    let payload = match channel.encode() {
        Ok(payload) => payload,
        Err(error) => {
            warn!("Leaving rendition line unmodified, sidecar encode failed: {error}");
            return None;
        }
    };

    let token = format!("{SIDECAR_MARKER}{payload}");
    let characteristics = match attributes.get("CHARACTERISTICS") {
        Some(existing) if !existing.is_empty() => format!("{existing},{token}"),
        _ => token,
    };
    attributes.set_quoted("CHARACTERISTICS", characteristics);

    let language = state.allocate(attributes.get("GROUP-ID"), attributes.get("LANGUAGE"));
    attributes.set_quoted("LANGUAGE", language);

    Some(format!("{MEDIA_TAG_PREFIX}{}", attributes.serialize()))
}
