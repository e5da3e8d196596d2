//! Observed effects for one query.

use diagnet_core::types::FxHashSet;

/// Ordered, deduplicated effect names asserted present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvidenceSet {
    names: Vec<String>,
}

impl EvidenceSet {
    /// Parse comma-separated input: entries are trimmed, empties dropped,
    /// and duplicates removed keeping the first occurrence.
    pub fn parse(input: &str) -> Self {
        Self::from_names(input.split(','))
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let names = names
            .into_iter()
            .filter_map(|name| {
                let name = name.as_ref().trim();
                (!name.is_empty() && seen.insert(name.to_string())).then(|| name.to_string())
            })
            .collect();
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_drops_empties_and_dedups() {
        let evidence = EvidenceSet::parse(" fever, cough ,, fever,  , rash");
        assert_eq!(evidence.names(), &["fever", "cough", "rash"]);
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(EvidenceSet::parse("  ,  ").is_empty());
        assert!(EvidenceSet::parse("").is_empty());
    }

    #[test]
    fn from_names_keeps_first_occurrence_order() {
        let evidence = EvidenceSet::from_names(["b", "a", "b"]);
        assert_eq!(evidence.names(), &["b", "a"]);
        assert!(evidence.contains("a"));
        assert!(!evidence.contains("c"));
    }
}
