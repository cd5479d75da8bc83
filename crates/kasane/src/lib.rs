//! Rewrites HLS master playlists in flight so that per-rendition metadata a
//! lossy player cannot represent (original language, name, forced flag,
//! channel count) survives the trip through it.
//!
//! The host runtime wires this crate in at two points:
//!
//! - [`rewrite`] runs over every fetched master playlist body before the
//!   player's own parser sees it. Audio and subtitle rendition lines get a
//!   base64 sidecar token appended to `CHARACTERISTICS` and a `LANGUAGE`
//!   value made unique within its `(GROUP-ID, LANGUAGE)` collision group,
//!   since the player keys tracks by language.
//! - [`annotate`] runs over every track descriptor in every status message
//!   before it reaches the caller. It finds the sidecar token in the
//!   track's roles, restores the original attributes, and strips the token
//!   so it never leaks into user-visible fields.
//!
//! Both passes are synchronous, never perform I/O, and swallow failures at
//! the smallest possible scope: a malformed line or payload degrades that
//! one line or track, never the whole document.

pub mod attribute;
pub mod error;
pub mod rewrite;
pub mod sidecar;
pub mod suffix;
pub mod track;

pub use error::{KasaneError, KasaneResult};
pub use rewrite::{rewrite, rewrite_with_summary, MediaType, RewriteSummary};
pub use sidecar::{SideChannel, SIDECAR_MARKER};
pub use suffix::AllocationState;
pub use track::{annotate, TrackDescriptor, FORCED_SUBTITLE_ROLE};
