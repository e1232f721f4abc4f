use crate::data::VersionTag;

/// Fields whose presence depends on the requested API version.
///
/// The table is additive: each field names the first version that carries it
/// and is kept by every later version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionedField {
    /// Accuracy flag used by the first clients
    Accurate,
    /// Accuracy flag from 0.2 on
    IsAccuratePos,
    /// Whether the source is the locally controllable player, from 0.3 on
    CanSync,
}

impl VersionedField {
    /// All versioned fields in output order
    pub const ALL: [VersionedField; 3] = [
        VersionedField::Accurate,
        VersionedField::IsAccuratePos,
        VersionedField::CanSync,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            VersionedField::Accurate => "accurate",
            VersionedField::IsAccuratePos => "IsAccuratePos",
            VersionedField::CanSync => "canSync",
        }
    }

    /// First version that carries this field
    pub fn since(&self) -> VersionTag {
        match self {
            VersionedField::Accurate => VersionTag::new(0, 0),
            VersionedField::IsAccuratePos => VersionTag::new(0, 2),
            VersionedField::CanSync => VersionTag::new(0, 3),
        }
    }

    fn value(&self, facts: &ProjectionFacts) -> bool {
        match self {
            VersionedField::Accurate | VersionedField::IsAccuratePos => facts.is_accurate,
            VersionedField::CanSync => facts.can_sync,
        }
    }
}

/// Internal facts the versioned fields are derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionFacts {
    pub is_accurate: bool,
    pub can_sync: bool,
}

/// Fields visible to a client asking for `version`
pub fn visible_fields(version: VersionTag) -> Vec<VersionedField> {
    VersionedField::ALL
        .iter()
        .copied()
        .filter(|field| version >= field.since())
        .collect()
}

/// Versioned fields and their values, in output order
pub fn project_fields(version: VersionTag, facts: ProjectionFacts) -> Vec<(&'static str, bool)> {
    visible_fields(version)
        .into_iter()
        .map(|field| (field.key(), field.value(&facts)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FACTS: ProjectionFacts = ProjectionFacts { is_accurate: true, can_sync: false };

    #[test]
    fn test_version_0_1() {
        assert_eq!(project_fields(VersionTag::new(0, 1), FACTS), vec![("accurate", true)]);
    }

    #[test]
    fn test_version_0_2() {
        assert_eq!(
            project_fields(VersionTag::new(0, 2), FACTS),
            vec![("accurate", true), ("IsAccuratePos", true)]
        );
    }

    #[test]
    fn test_version_0_3_and_later() {
        let expected = vec![("accurate", true), ("IsAccuratePos", true), ("canSync", false)];
        assert_eq!(project_fields(VersionTag::new(0, 3), FACTS), expected);
        assert_eq!(project_fields(VersionTag::new(1, 0), FACTS), expected);
    }

    #[test]
    fn test_newer_versions_never_lose_fields() {
        let versions = [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (1, 0), (2, 7)];
        for pair in versions.windows(2) {
            let older = visible_fields(VersionTag::new(pair[0].0, pair[0].1));
            let newer = visible_fields(VersionTag::new(pair[1].0, pair[1].1));
            for field in older {
                assert!(newer.contains(&field), "{:?} dropped after {:?}", field, pair[0]);
            }
        }
    }
}
