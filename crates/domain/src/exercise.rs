use std::{fmt, slice::Iter};

use crate::{EquipmentTag, ExerciseRecord};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Arms,
    Legs,
    Core,
    Cardio,
    FullBody,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 8] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Arms,
            MuscleGroup::Legs,
            MuscleGroup::Core,
            MuscleGroup::Cardio,
            MuscleGroup::FullBody,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Core => "Core",
            MuscleGroup::Cardio => "Cardio",
            MuscleGroup::FullBody => "Full Body",
        }
    }
}

impl MuscleGroup {
    /// Muscle groups a profile can assign a training priority to.
    pub fn iter_priority() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 7] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Arms,
            MuscleGroup::Legs,
            MuscleGroup::Core,
            MuscleGroup::Cardio,
        ];
        MUSCLE_GROUPS.iter()
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for MuscleGroup {
    type Error = MuscleGroupError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        MuscleGroup::iter()
            .find(|m| m.name() == value || (**m == MuscleGroup::FullBody && value == "FullBody"))
            .copied()
            .ok_or(MuscleGroupError::Invalid)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MuscleGroupError {
    #[error("Invalid muscle group")]
    Invalid,
}

/// A filter choice that is either unrestricted or pinned to one value.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Selection<T> {
    pub fn admits(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(value) => predicate(value),
        }
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Selection::All => write!(f, "All"),
            Selection::Only(value) => write!(f, "{value}"),
        }
    }
}

/// Search over exercise records.
///
/// The three predicates are combined with a logical AND. Each of them matches every record while
/// it is unset, so the default query returns the input unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExerciseQuery {
    pub text: String,
    pub muscle_group: Selection<MuscleGroup>,
    pub equipment: Selection<EquipmentTag>,
}

impl ExerciseQuery {
    /// Lazily yields the matching records in input order.
    pub fn filter<'r, I>(&self, records: I) -> impl Iterator<Item = &'r ExerciseRecord>
    where
        I: IntoIterator<Item = &'r ExerciseRecord>,
    {
        let needle = self.needle();
        records
            .into_iter()
            .filter(move |record| self.matches_needle(&needle, record))
    }

    #[must_use]
    pub fn matches(&self, record: &ExerciseRecord) -> bool {
        self.matches_needle(&self.needle(), record)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.muscle_group.is_all() && self.equipment.is_all()
    }

    #[must_use]
    pub fn muscle_group_list(&self) -> Vec<(Selection<MuscleGroup>, bool)> {
        std::iter::once(Selection::All)
            .chain(MuscleGroup::iter().map(|m| Selection::Only(*m)))
            .map(|s| {
                let selected = s == self.muscle_group;
                (s, selected)
            })
            .collect()
    }

    pub fn clear(&mut self) {
        *self = ExerciseQuery::default();
    }

    fn needle(&self) -> String {
        self.text.trim().to_lowercase()
    }

    fn matches_needle(&self, needle: &str, record: &ExerciseRecord) -> bool {
        matches_text(needle, record)
            && self.muscle_group.admits(|m| *m == record.muscle_group)
            && self
                .equipment
                .admits(|tag| record.equipment.contains(tag.as_str()))
    }
}

fn matches_text(needle: &str, record: &ExerciseRecord) -> bool {
    needle.is_empty()
        || record.name.to_lowercase().contains(needle)
        || record.muscle_group.name().to_lowercase().contains(needle)
        || record.equipment.to_lowercase().contains(needle)
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::all_records;

    const RECORDS: &[ExerciseRecord] = &[
        ExerciseRecord {
            id: "chest-4",
            name: "Push-Up",
            muscle_group: MuscleGroup::Chest,
            equipment: "Bodyweight",
        },
        ExerciseRecord {
            id: "chest-5",
            name: "Cable Chest Fly",
            muscle_group: MuscleGroup::Chest,
            equipment: "Cable Machine",
        },
        ExerciseRecord {
            id: "back-5",
            name: "Barbell Row",
            muscle_group: MuscleGroup::Back,
            equipment: "Barbell",
        },
        ExerciseRecord {
            id: "biceps-1",
            name: "Dumbbell Curl",
            muscle_group: MuscleGroup::Arms,
            equipment: "Dumbbells / Cable",
        },
        ExerciseRecord {
            id: "back-6",
            name: "Seated Cable Row",
            muscle_group: MuscleGroup::Back,
            equipment: "Cable Row Machine",
        },
    ];

    fn ids<'a>(records: impl Iterator<Item = &'a ExerciseRecord>) -> Vec<&'static str> {
        records.map(|r| r.id).collect()
    }

    fn tag(name: &str) -> Selection<EquipmentTag> {
        Selection::Only(EquipmentTag::new(name).unwrap())
    }

    #[test]
    fn test_muscle_group_name() {
        let mut names = HashSet::new();

        for muscle_group in MuscleGroup::iter() {
            let name = muscle_group.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));

            names.insert(name);
        }
    }

    #[test]
    fn test_muscle_group_iter_priority() {
        assert_eq!(MuscleGroup::iter_priority().len(), 7);
        assert!(!MuscleGroup::iter_priority().any(|m| *m == MuscleGroup::FullBody));
    }

    #[rstest]
    #[case("Chest", Ok(MuscleGroup::Chest))]
    #[case("Full Body", Ok(MuscleGroup::FullBody))]
    #[case("FullBody", Ok(MuscleGroup::FullBody))]
    #[case("chest", Err(MuscleGroupError::Invalid))]
    #[case("", Err(MuscleGroupError::Invalid))]
    fn test_muscle_group_try_from_str(
        #[case] value: &str,
        #[case] expected: Result<MuscleGroup, MuscleGroupError>,
    ) {
        assert_eq!(MuscleGroup::try_from(value), expected);
    }

    #[rstest]
    #[case(Selection::All, "All")]
    #[case(Selection::Only(MuscleGroup::FullBody), "Full Body")]
    fn test_selection_display(#[case] selection: Selection<MuscleGroup>, #[case] string: &str) {
        assert_eq!(selection.to_string(), string);
    }

    #[rstest]
    #[case::text_lower_case(
        ExerciseQuery { text: "push".into(), ..ExerciseQuery::default() },
        &["chest-4"]
    )]
    #[case::text_upper_case(
        ExerciseQuery { text: "PUSH".into(), ..ExerciseQuery::default() },
        &["chest-4"]
    )]
    #[case::text_surrounding_whitespace(
        ExerciseQuery { text: "  row ".into(), ..ExerciseQuery::default() },
        &["back-5", "back-6"]
    )]
    #[case::text_muscle_group_label(
        ExerciseQuery { text: "back".into(), ..ExerciseQuery::default() },
        &["back-5", "back-6"]
    )]
    #[case::text_raw_equipment(
        ExerciseQuery { text: "dumbbells / c".into(), ..ExerciseQuery::default() },
        &["biceps-1"]
    )]
    #[case::muscle_group(
        ExerciseQuery { muscle_group: Selection::Only(MuscleGroup::Chest), ..ExerciseQuery::default() },
        &["chest-4", "chest-5"]
    )]
    #[case::muscle_group_without_records(
        ExerciseQuery { muscle_group: Selection::Only(MuscleGroup::Core), ..ExerciseQuery::default() },
        &[]
    )]
    #[case::equipment_substring(
        ExerciseQuery { equipment: tag("Cable"), ..ExerciseQuery::default() },
        &["chest-5", "biceps-1", "back-6"]
    )]
    #[case::equipment_case_sensitive(
        ExerciseQuery { equipment: tag("cable"), ..ExerciseQuery::default() },
        &[]
    )]
    #[case::combined(
        ExerciseQuery {
            text: "row".into(),
            muscle_group: Selection::Only(MuscleGroup::Back),
            equipment: tag("Cable"),
        },
        &["back-6"]
    )]
    fn test_exercise_query_filter(#[case] query: ExerciseQuery, #[case] expected: &[&str]) {
        assert_eq!(ids(query.filter(RECORDS)), expected);
    }

    #[test]
    fn test_exercise_query_filter_default_returns_everything() {
        assert_eq!(
            ExerciseQuery::default()
                .filter(all_records())
                .collect::<Vec<_>>(),
            all_records().iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_exercise_query_filter_idempotent() {
        let queries = [
            ExerciseQuery {
                text: "curl".into(),
                ..ExerciseQuery::default()
            },
            ExerciseQuery {
                muscle_group: Selection::Only(MuscleGroup::Legs),
                equipment: tag("Dumbbells"),
                ..ExerciseQuery::default()
            },
            ExerciseQuery {
                text: "machine".into(),
                equipment: tag("Machine"),
                ..ExerciseQuery::default()
            },
        ];

        for query in queries {
            let once = query.filter(all_records()).collect::<Vec<_>>();
            let twice = query.filter(once.iter().copied()).collect::<Vec<_>>();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_exercise_query_filter_preserves_catalog_order() {
        let query = ExerciseQuery {
            equipment: tag("Bodyweight"),
            ..ExerciseQuery::default()
        };
        let positions = query
            .filter(all_records())
            .map(|r| all_records().iter().position(|c| c.id == r.id).unwrap())
            .collect::<Vec<_>>();
        let mut sorted = positions.clone();
        sorted.sort_unstable();

        assert!(!positions.is_empty());
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_exercise_query_filter_catalog() {
        assert_eq!(
            ids(ExerciseQuery {
                text: "push".into(),
                ..ExerciseQuery::default()
            }
            .filter(all_records())),
            ["chest-4", "triceps-3", "triceps-4"]
        );
        assert_eq!(
            ids(ExerciseQuery {
                equipment: tag("Cable"),
                muscle_group: Selection::Only(MuscleGroup::Back),
                ..ExerciseQuery::default()
            }
            .filter(all_records())),
            ["back-6"]
        );
    }

    #[test]
    fn test_exercise_query_matches() {
        let query = ExerciseQuery {
            equipment: tag("Cable"),
            ..ExerciseQuery::default()
        };

        assert!(query.matches(&RECORDS[1]));
        assert!(query.matches(&RECORDS[3]));
        assert!(!query.matches(&RECORDS[2]));
    }

    #[test]
    fn test_exercise_query_is_empty() {
        let mut query = ExerciseQuery {
            text: " ".into(),
            ..ExerciseQuery::default()
        };

        assert!(query.is_empty());

        query.muscle_group = Selection::Only(MuscleGroup::Arms);

        assert!(!query.is_empty());

        query.clear();

        assert!(query.is_empty());
    }

    #[test]
    fn test_exercise_query_muscle_group_list() {
        let mut query = ExerciseQuery::default();

        assert_eq!(query.muscle_group_list().len(), 9);
        assert_eq!(query.muscle_group_list()[0], (Selection::All, true));

        query.muscle_group = Selection::Only(MuscleGroup::Core);

        assert!(
            query
                .muscle_group_list()
                .contains(&(Selection::Only(MuscleGroup::Core), true))
        );
        assert_eq!(
            query
                .muscle_group_list()
                .iter()
                .filter(|(_, selected)| *selected)
                .count(),
            1
        );
    }
}
