use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    fmt,
    ops::RangeInclusive,
    slice::Iter,
};

use chrono::Weekday;
use derive_more::Deref;
use log::debug;

use crate::{InvalidProfile, MuscleGroup};

pub const HEIGHT_RANGE: RangeInclusive<f64> = 100.0..=250.0;
pub const WEIGHT_RANGE: RangeInclusive<f64> = 30.0..=300.0;
pub const AGE_RANGE: RangeInclusive<u32> = 16..=100;

pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[must_use]
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Fitness intake data of the current user.
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessProfile {
    /// Height in cm
    pub height: f64,
    /// Weight in kg
    pub weight: f64,
    pub age: u32,
    pub gender: Gender,
    pub available_days: HashSet<Weekday>,
    pub muscle_group_priorities: BTreeMap<MuscleGroup, Priority>,
    pub intensity: Intensity,
    pub available_equipment: BTreeSet<String>,
}

impl Default for FitnessProfile {
    fn default() -> Self {
        Self {
            height: 175.0,
            weight: 70.0,
            age: 20,
            gender: Gender::Male,
            available_days: [Weekday::Mon, Weekday::Tue, Weekday::Thu, Weekday::Fri].into(),
            muscle_group_priorities: MuscleGroup::iter_priority()
                .map(|m| (*m, Priority::Unset))
                .collect(),
            intensity: Intensity::default(),
            available_equipment: ["Bodyweight", "Dumbbells", "Bench", "Barbell"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl FitnessProfile {
    /// Checks every field independently and reports all violations at once.
    pub fn validate(&self) -> Result<(), InvalidProfile> {
        let mut field_errors = BTreeMap::new();

        if !HEIGHT_RANGE.contains(&self.height) {
            field_errors.insert(
                ProfileField::Height,
                format!(
                    "Height must be between {} and {} cm",
                    HEIGHT_RANGE.start(),
                    HEIGHT_RANGE.end()
                ),
            );
        }

        if !WEIGHT_RANGE.contains(&self.weight) {
            field_errors.insert(
                ProfileField::Weight,
                format!(
                    "Weight must be between {} and {} kg",
                    WEIGHT_RANGE.start(),
                    WEIGHT_RANGE.end()
                ),
            );
        }

        if !AGE_RANGE.contains(&self.age) {
            field_errors.insert(
                ProfileField::Age,
                format!(
                    "Age must be between {} and {}",
                    AGE_RANGE.start(),
                    AGE_RANGE.end()
                ),
            );
        }

        if self.available_days.is_empty() {
            field_errors.insert(
                ProfileField::AvailableDays,
                "Select at least one day".to_string(),
            );
        }

        if self.available_equipment.is_empty() {
            field_errors.insert(
                ProfileField::AvailableEquipment,
                "Select at least one piece of equipment".to_string(),
            );
        }

        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(InvalidProfile { field_errors })
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn toggle_day(&mut self, day: Weekday) {
        if !self.available_days.remove(&day) {
            self.available_days.insert(day);
        }
    }

    pub fn toggle_equipment(&mut self, equipment: &str) {
        if !self.available_equipment.remove(equipment) {
            self.available_equipment.insert(equipment.to_string());
        }
    }

    pub fn set_priority(&mut self, muscle_group: MuscleGroup, priority: Priority) {
        if MuscleGroup::iter_priority().any(|m| *m == muscle_group) {
            self.muscle_group_priorities.insert(muscle_group, priority);
        } else {
            debug!("ignoring priority for {muscle_group}");
        }
    }

    #[must_use]
    pub fn priority(&self, muscle_group: MuscleGroup) -> Priority {
        self.muscle_group_priorities
            .get(&muscle_group)
            .copied()
            .unwrap_or_default()
    }

    /// Sets every muscle group except cardio to medium priority.
    pub fn set_all_balanced(&mut self) {
        for muscle_group in MuscleGroup::iter_priority() {
            let priority = if *muscle_group == MuscleGroup::Cardio {
                Priority::Unset
            } else {
                Priority::Medium
            };
            self.muscle_group_priorities.insert(*muscle_group, priority);
        }
    }

    /// Available days from Monday to Sunday.
    #[must_use]
    pub fn available_days_in_week_order(&self) -> Vec<Weekday> {
        WEEK.into_iter()
            .filter(|d| self.available_days.contains(d))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum ProfileField {
    Height,
    Weight,
    Age,
    AvailableDays,
    AvailableEquipment,
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ProfileField::Height => "height",
                ProfileField::Weight => "weight",
                ProfileField::Age => "age",
                ProfileField::AvailableDays => "availableDays",
                ProfileField::AvailableEquipment => "availableEquipment",
            }
        )
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Unspecified,
}

impl From<&str> for Gender {
    fn from(value: &str) -> Self {
        match value {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Unspecified,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Gender::Male => "male",
                Gender::Female => "female",
                Gender::Unspecified => "prefer-not-to-say",
            }
        )
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    #[default]
    Unset,
    Low,
    Medium,
    High,
}

impl Priority {
    /// Selectable priorities, highest first.
    pub fn iter() -> Iter<'static, Priority> {
        static PRIORITY: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];
        PRIORITY.iter()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Priority::Unset => "",
                Priority::Low => "Low",
                Priority::Medium => "Medium",
                Priority::High => "High",
            }
        )
    }
}

/// Training intensity on an ordinal scale from 1 to [`Intensity::LEVELS`].
#[derive(Deref, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Intensity(u8);

impl Intensity {
    pub const LEVELS: u8 = 5;

    pub fn new(value: u8) -> Result<Self, IntensityError> {
        if value == 0 || value > Self::LEVELS {
            return Err(IntensityError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn iter() -> impl Iterator<Item = Intensity> {
        (1..=Self::LEVELS).map(Intensity)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Endurance",
            2 => "Light Hypertrophy",
            3 => "Standard Hypertrophy",
            4 => "Strength Hypertrophy",
            _ => "Strength",
        }
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for Intensity {
    type Error = IntensityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Intensity::new(value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum IntensityError {
    #[error("Intensity must be in the range 1 to {max} ({0})", max = Intensity::LEVELS)]
    OutOfRange(u8),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn valid_profile() -> FitnessProfile {
        FitnessProfile {
            height: 175.0,
            weight: 70.0,
            age: 20,
            available_days: [Weekday::Mon].into(),
            available_equipment: ["Bodyweight".to_string()].into(),
            ..FitnessProfile::default()
        }
    }

    #[test]
    fn test_fitness_profile_default() {
        let profile = FitnessProfile::default();

        assert!(profile.is_valid());
        assert_eq!(
            profile.available_days_in_week_order(),
            [Weekday::Mon, Weekday::Tue, Weekday::Thu, Weekday::Fri]
        );
        assert_eq!(profile.muscle_group_priorities.len(), 7);
        assert!(
            profile
                .muscle_group_priorities
                .values()
                .all(|p| *p == Priority::Unset)
        );
        assert_eq!(profile.intensity, Intensity(3));
    }

    #[test]
    fn test_fitness_profile_validate_valid() {
        assert_eq!(valid_profile().validate(), Ok(()));
    }

    #[rstest]
    #[case::height_too_low(FitnessProfile { height: 50.0, ..valid_profile() }, &[ProfileField::Height])]
    #[case::height_too_high(FitnessProfile { height: 250.5, ..valid_profile() }, &[ProfileField::Height])]
    #[case::height_nan(FitnessProfile { height: f64::NAN, ..valid_profile() }, &[ProfileField::Height])]
    #[case::weight_too_low(FitnessProfile { weight: 29.9, ..valid_profile() }, &[ProfileField::Weight])]
    #[case::weight_too_high(FitnessProfile { weight: 301.0, ..valid_profile() }, &[ProfileField::Weight])]
    #[case::age_too_low(FitnessProfile { age: 15, ..valid_profile() }, &[ProfileField::Age])]
    #[case::age_too_high(FitnessProfile { age: 101, ..valid_profile() }, &[ProfileField::Age])]
    #[case::no_days(
        FitnessProfile { available_days: HashSet::new(), ..valid_profile() },
        &[ProfileField::AvailableDays]
    )]
    #[case::no_equipment(
        FitnessProfile { available_equipment: BTreeSet::new(), ..valid_profile() },
        &[ProfileField::AvailableEquipment]
    )]
    #[case::all_fields(
        FitnessProfile {
            height: 0.0,
            weight: 0.0,
            age: 0,
            available_days: HashSet::new(),
            available_equipment: BTreeSet::new(),
            ..valid_profile()
        },
        &[
            ProfileField::Height,
            ProfileField::Weight,
            ProfileField::Age,
            ProfileField::AvailableDays,
            ProfileField::AvailableEquipment,
        ]
    )]
    fn test_fitness_profile_validate_invalid(
        #[case] profile: FitnessProfile,
        #[case] expected_fields: &[ProfileField],
    ) {
        let error = profile.validate().unwrap_err();

        assert_eq!(
            error.field_errors.keys().copied().collect::<Vec<_>>(),
            expected_fields
        );
        assert!(error.field_errors.values().all(|m| !m.is_empty()));
    }

    #[rstest]
    #[case(FitnessProfile { height: 100.0, weight: 30.0, age: 16, ..valid_profile() })]
    #[case(FitnessProfile { height: 250.0, weight: 300.0, age: 100, ..valid_profile() })]
    fn test_fitness_profile_validate_bounds(#[case] profile: FitnessProfile) {
        assert!(profile.is_valid());
    }

    #[test]
    fn test_fitness_profile_validate_message() {
        assert_eq!(
            FitnessProfile {
                height: 50.0,
                ..valid_profile()
            }
            .validate()
            .unwrap_err()
            .field_errors[&ProfileField::Height],
            "Height must be between 100 and 250 cm"
        );
    }

    #[test]
    fn test_fitness_profile_toggle_day() {
        let mut profile = valid_profile();

        profile.toggle_day(Weekday::Sun);

        assert_eq!(
            profile.available_days_in_week_order(),
            [Weekday::Mon, Weekday::Sun]
        );

        profile.toggle_day(Weekday::Mon);
        profile.toggle_day(Weekday::Sun);

        assert!(profile.available_days.is_empty());
    }

    #[test]
    fn test_fitness_profile_toggle_equipment() {
        let mut profile = valid_profile();

        profile.toggle_equipment("Bench");

        assert_eq!(
            profile.available_equipment.iter().collect::<Vec<_>>(),
            ["Bench", "Bodyweight"]
        );

        profile.toggle_equipment("Bodyweight");

        assert_eq!(
            profile.available_equipment.iter().collect::<Vec<_>>(),
            ["Bench"]
        );
    }

    #[test]
    fn test_fitness_profile_set_priority() {
        let mut profile = valid_profile();

        profile.set_priority(MuscleGroup::Back, Priority::High);
        profile.set_priority(MuscleGroup::FullBody, Priority::High);

        assert_eq!(profile.priority(MuscleGroup::Back), Priority::High);
        assert_eq!(profile.priority(MuscleGroup::Chest), Priority::Unset);
        assert!(
            !profile
                .muscle_group_priorities
                .contains_key(&MuscleGroup::FullBody)
        );
    }

    #[test]
    fn test_fitness_profile_set_all_balanced() {
        let mut profile = valid_profile();
        profile.set_priority(MuscleGroup::Cardio, Priority::High);
        profile.set_priority(MuscleGroup::Legs, Priority::Low);

        profile.set_all_balanced();

        for muscle_group in MuscleGroup::iter_priority() {
            assert_eq!(
                profile.priority(*muscle_group),
                if *muscle_group == MuscleGroup::Cardio {
                    Priority::Unset
                } else {
                    Priority::Medium
                }
            );
        }
    }

    #[rstest]
    #[case("male", Gender::Male)]
    #[case("female", Gender::Female)]
    #[case("prefer-not-to-say", Gender::Unspecified)]
    #[case("", Gender::Unspecified)]
    fn test_gender_from_str(#[case] value: &str, #[case] expected: Gender) {
        assert_eq!(Gender::from(value), expected);
        assert_eq!(Gender::from(expected.to_string().as_str()), expected);
    }

    #[rstest]
    #[case(Priority::Unset, "")]
    #[case(Priority::Low, "Low")]
    #[case(Priority::Medium, "Medium")]
    #[case(Priority::High, "High")]
    fn test_priority_display(#[case] priority: Priority, #[case] string: &str) {
        assert_eq!(priority.to_string(), string);
    }

    #[rstest]
    #[case(0, Err(IntensityError::OutOfRange(0)))]
    #[case(1, Ok(Intensity(1)))]
    #[case(5, Ok(Intensity(5)))]
    #[case(6, Err(IntensityError::OutOfRange(6)))]
    fn test_intensity_new(#[case] value: u8, #[case] expected: Result<Intensity, IntensityError>) {
        assert_eq!(Intensity::new(value), expected);
        assert_eq!(Intensity::try_from(value), expected);
    }

    #[test]
    fn test_intensity_labels() {
        let labels = Intensity::iter().map(Intensity::label).collect::<Vec<_>>();

        assert_eq!(labels.len(), usize::from(Intensity::LEVELS));
        assert_eq!(
            labels,
            [
                "Endurance",
                "Light Hypertrophy",
                "Standard Hypertrophy",
                "Strength Hypertrophy",
                "Strength"
            ]
        );
    }

    #[test]
    fn test_intensity_error_display() {
        assert_eq!(
            IntensityError::OutOfRange(7).to_string(),
            "Intensity must be in the range 1 to 5 (7)"
        );
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(
            WEEK.into_iter().map(weekday_name).collect::<Vec<_>>(),
            [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday"
            ]
        );
    }
}
