use std::sync::LazyLock;

use regex::Regex;

/// Matches one `KEY=VALUE` pair at the start of the remaining attribute
/// body. Quoted values are tried first, then bare tokens running up to the
/// next comma. The pair must be followed by a comma or the end of the line.
static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^([A-Za-z0-9-]+)=(?:"([^"]*)"|([^",]*))(?:,|$)"#).unwrap()
});

/// An attribute value together with its original quoting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeValue {
    pub value: String,
    pub quoted: bool,
}

/// The ordered attribute list of a single `#EXT-X-MEDIA` line.
///
/// Entries keep the order they were encountered in, so a line that is
/// parsed and serialized without modification comes back byte-for-byte.
/// A duplicate key keeps the position of its first occurrence but the
/// value of its last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeList {
    entries: Vec<(String, AttributeValue)>,
}

impl AttributeList {
    /// Parses the attribute body following the tag prefix.
    ///
    /// Parsing is lenient: on the first run of text that does not match the
    /// grammar, the remainder is silently discarded. A malformed tail never
    /// fails the line.
    pub fn parse(body: &str) -> Self {
        let mut attributes = Self::default();

        let mut rest = body;
        while !rest.is_empty() {
            let Some(captures) = ATTRIBUTE.captures(rest) else {
                break;
            };

            let key = &captures[1];
            let (value, quoted) = match captures.get(2) {
                Some(quoted_value) => (quoted_value.as_str(), true),
                None => (&captures[3], false),
            };
            attributes.insert(key, value, quoted);

            rest = &rest[captures.get(0).unwrap().end()..];
        }

        attributes
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.value.as_str())
    }

    /// Sets `key` to a quoted `value`, overwriting in place if the key is
    /// already present and appending at the end otherwise.
    pub fn set_quoted(&mut self, key: &str, value: impl Into<String>) {
        self.insert(key, &value.into(), true);
    }

    fn insert(&mut self, key: &str, value: &str, quoted: bool) {
        let value = AttributeValue {
            value: value.to_string(),
            quoted,
        };
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    pub fn serialize(&self) -> String {
        self.entries
            .iter()
            .map(|(key, attribute)| {
                if attribute.quoted {
                    format!("{key}=\"{value}\"", value = attribute.value)
                } else {
                    format!("{key}={value}", value = attribute.value)
                }
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}
