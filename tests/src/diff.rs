//! Structural difference between two mappings.

use mapmut_core::Mapping;

/// Keys added, removed or changed going from one mapping to another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingDiff {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub changed: Vec<String>,
}

impl MappingDiff {
    /// Compute the difference from `before` to `after`.
    ///
    /// Key lists follow the iteration order of the mapping they come from.
    pub fn between(before: &Mapping, after: &Mapping) -> Self {
        let mut diff = Self::default();
        for (key, old) in before.iter() {
            match after.get(key) {
                None => diff.removed.push(key.to_string()),
                Some(new) if new != old => diff.changed.push(key.to_string()),
                Some(_) => {}
            }
        }
        diff.added = after
            .keys()
            .filter(|k| !before.contains_key(k))
            .map(str::to_string)
            .collect();
        diff
    }

    pub fn added(key: impl Into<String>) -> Self {
        Self {
            added: vec![key.into()],
            ..Self::default()
        }
    }

    pub fn removed(key: impl Into<String>) -> Self {
        Self {
            removed: vec![key.into()],
            ..Self::default()
        }
    }

    pub fn changed(key: impl Into<String>) -> Self {
        Self {
            changed: vec![key.into()],
            ..Self::default()
        }
    }

    /// Returns true if the mappings hold the same entries.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    /// Total number of differing keys.
    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len() + self.changed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapmut_core::mapping;

    #[test]
    fn test_between() {
        // GIVEN
        let before = mapping! { "a" => 1, "b" => 2, "c" => 3 };
        let after = mapping! { "a" => 1, "b" => 20, "d" => 4 };

        // WHEN
        let diff = MappingDiff::between(&before, &after);

        // THEN
        assert_eq!(diff.added, vec!["d"]);
        assert_eq!(diff.removed, vec!["c"]);
        assert_eq!(diff.changed, vec!["b"]);
        assert_eq!(diff.len(), 3);
    }

    #[test]
    fn test_identical_mappings() {
        let m = mapping! { "x" => true };
        assert!(MappingDiff::between(&m, &m.clone()).is_empty());
    }

    #[test]
    fn test_value_type_change_counts_as_changed() {
        let before = mapping! { "n" => 1 };
        let after = mapping! { "n" => 1.0 };
        assert_eq!(MappingDiff::between(&before, &after), MappingDiff::changed("n"));
    }
}
