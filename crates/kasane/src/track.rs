use log::debug;

use crate::sidecar::{SideChannel, SIDECAR_MARKER};
use crate::suffix::UNDETERMINED_LANGUAGE;

/// Role appended to tracks whose sidecar payload marks them as forced
/// subtitles.
pub const FORCED_SUBTITLE_ROLE: &str = "forced_subtitle";

/// In-memory track record owned by the host runtime. Fields are mutated in
/// place by [`annotate`]; ownership stays with the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackDescriptor {
    pub language: String,
    pub name: String,
    pub forced: bool,
    pub channel_count: Option<String>,
    pub roles: Option<Vec<String>>,
}

impl TrackDescriptor {
    /// Channel counts arrive as attribute strings like `"6"` or `"16/JOC"`;
    /// this reads the leading count.
    pub fn channel_count_as_u32(&self) -> Option<u32> {
        self.channel_count
            .as_deref()?
            .split('/')
            .next()?
            .trim()
            .parse()
            .ok()
    }
}

/// Recovers the sidecar payload smuggled through a track's roles, applies
/// its fields onto the descriptor, and strips the carrier role.
///
/// Best-effort enrichment: a missing marker or an undecodable payload
/// leaves the descriptor untouched, and once the marker has been consumed
/// further calls are no-ops.
pub fn annotate(track: &mut TrackDescriptor) {
    let Some(roles) = track.roles.as_mut() else {
        return;
    };
    let Some(index) = roles.iter().position(|role| role.starts_with(SIDECAR_MARKER)) else {
        return;
    };

    let payload = &roles[index][SIDECAR_MARKER.len()..];
    let channel = match SideChannel::decode(payload) {
        Ok(channel) => channel,
        Err(error) => {
            debug!("Ignoring undecodable sidecar role: {error}");
            return;
        }
    };
    roles.remove(index);

    if let Some(language) = channel.language {
        track.language = language;
    } else if track.language.starts_with(UNDETERMINED_LANGUAGE) {
        // the rewriter assigned a placeholder; do not show it to the user
        track.language.clear();
    }
    if let Some(name) = channel.name {
        track.name = name;
    }
    if channel.forced.is_some() {
        roles.push(FORCED_SUBTITLE_ROLE.to_string());
        track.forced = true;
    }
    if let Some(channels) = channel.channels {
        track.channel_count = Some(channels);
    }

    if roles.is_empty() {
        track.roles = None;
    }
}
