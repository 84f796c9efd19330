//! DataItem tag pairs

use serde::{Deserialize, Serialize};

/// A single (name, value) tag carried by a DataItem
///
/// Names are case-sensitive UTF-8; both halves are decoded from the Avro
/// tag region of the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name
    pub name: String,
    /// Tag value
    pub value: String,
}

impl Tag {
    /// Create a tag from anything string-like
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Tag {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names_are_case_sensitive() {
        assert_ne!(Tag::new("App-Name", "x"), Tag::new("app-name", "x"));
    }
}
