use std::collections::HashMap;

/// Placeholder group id for rendition lines carrying no `GROUP-ID`.
pub const DEFAULT_GROUP_ID: &str = "default";

/// ISO 639-2 placeholder for rendition lines carrying no `LANGUAGE`.
pub const UNDETERMINED_LANGUAGE: &str = "und";

/// Duplicate-language counters for a single playlist rewrite.
///
/// The state is owned by exactly one rewrite call and discarded with it;
/// sharing it across playlists would leak suffix allocations between
/// unrelated documents.
#[derive(Debug, Default)]
pub struct AllocationState {
    seen: HashMap<(String, String), u32>,
}

impl AllocationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a language tag that is unique among the renditions of the
    /// same `(group, language)` pair seen so far.
    ///
    /// The first occurrence is returned unchanged. The Nth repeat gets a
    /// two-letter `-XA`..`-XZ` suffix in line order. The suffix space wraps
    /// after 26 duplicates of one key; a clash at that scale is tolerated
    /// rather than failing the rewrite.
    pub fn allocate(&mut self, group_id: Option<&str>, language: Option<&str>) -> String {
        let group_id = group_id.unwrap_or(DEFAULT_GROUP_ID);
        let language = language.unwrap_or(UNDETERMINED_LANGUAGE);

        let count = self
            .seen
            .entry((group_id.to_string(), language.to_string()))
            .or_insert(0);
        *count += 1;

        if *count == 1 {
            language.to_string()
        } else {
            let letter = (b'A' + ((*count - 2) % 26) as u8) as char;
            format!("{language}-X{letter}")
        }
    }
}
