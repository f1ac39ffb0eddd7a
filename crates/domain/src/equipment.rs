use std::collections::BTreeSet;

use derive_more::{AsRef, Display};

use crate::{ExerciseRecord, Selection, all_records};

/// Characters separating the items of a composite equipment string.
pub const EQUIPMENT_DELIMITERS: [char; 3] = ['+', '/', ','];

/// Equipment a user can declare as owned.
pub const EQUIPMENT_OPTIONS: [&str; 16] = [
    "Barbell",
    "Dumbbells",
    "Bench",
    "Cable Machine",
    "Pull-Up Bar",
    "Treadmill",
    "Stationary Bike",
    "Resistance Bands",
    "Exercise Ball",
    "Bodyweight",
    "StairMaster",
    "Rowing Machine",
    "Jump Rope",
    "Leg Extension Machine",
    "Lat Pulldown Machine",
    "Shoulder Press Machine",
];

#[derive(AsRef, Debug, Display, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct EquipmentTag(String);

impl EquipmentTag {
    pub fn new(name: &str) -> Result<Self, EquipmentTagError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(EquipmentTagError::Empty);
        }

        Ok(EquipmentTag(trimmed_name.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EquipmentTagError {
    #[error("Equipment must not be empty")]
    Empty,
}

/// Splits a composite equipment string into its distinct, trimmed, non-empty items.
#[must_use]
pub fn split_equipment(raw: &str) -> BTreeSet<EquipmentTag> {
    raw.split(EQUIPMENT_DELIMITERS)
        .filter_map(|fragment| EquipmentTag::new(fragment).ok())
        .collect()
}

#[must_use]
pub fn tags_of(record: &ExerciseRecord) -> BTreeSet<EquipmentTag> {
    split_equipment(record.equipment)
}

/// Case-insensitive search over [`EQUIPMENT_OPTIONS`].
#[must_use]
pub fn equipment_options(term: &str) -> Vec<&'static str> {
    let term = term.trim().to_lowercase();
    EQUIPMENT_OPTIONS
        .into_iter()
        .filter(|option| option.to_lowercase().contains(&term))
        .collect()
}

/// Vocabulary of all equipment tags occurring in a set of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentTagIndex {
    tags: BTreeSet<EquipmentTag>,
}

impl EquipmentTagIndex {
    pub fn new<'a>(records: impl IntoIterator<Item = &'a ExerciseRecord>) -> Self {
        Self {
            tags: records.into_iter().flat_map(tags_of).collect(),
        }
    }

    /// Index over the built-in catalog, built on first use.
    #[must_use]
    pub fn catalog() -> &'static EquipmentTagIndex {
        static INDEX: std::sync::LazyLock<EquipmentTagIndex> =
            std::sync::LazyLock::new(|| EquipmentTagIndex::new(all_records()));
        &INDEX
    }

    /// Filter options: `All` followed by every tag in lexicographic order.
    #[must_use]
    pub fn vocabulary(&self) -> Vec<Selection<EquipmentTag>> {
        std::iter::once(Selection::All)
            .chain(self.tags.iter().cloned().map(Selection::Only))
            .collect()
    }

    pub fn tags(&self) -> impl Iterator<Item = &EquipmentTag> {
        self.tags.iter()
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.as_str() == tag)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
