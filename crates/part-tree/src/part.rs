//! The payload carried by every node of a part tree

use derive_more::Display;

/// A named item with a part number
///
/// `PartialEq` compares both fields. Name search deliberately ignores the
/// part number: two parts sharing a name are both matches even when their
/// numbers differ. See [`Named`](crate::search::Named).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display(fmt = "Part: {}, PartNumber: {}", name, part_number)]
pub struct Part {
    /// Human-readable name, the search key
    pub name: String,
    /// Catalogue number
    pub part_number: String,
}

impl Part {
    /// Create a new part
    pub fn new(name: impl Into<String>, part_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            part_number: part_number.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let part = Part::new("RootPart", "RootPartNumber");
        assert_eq!(part.to_string(), "Part: RootPart, PartNumber: RootPartNumber");
    }

    #[test]
    fn test_equality_uses_both_fields() {
        assert_eq!(Part::new("A", "1"), Part::new("A", "1"));
        assert_ne!(Part::new("A", "1"), Part::new("A", "2"));
    }
}
