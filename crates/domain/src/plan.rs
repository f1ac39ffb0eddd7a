use std::collections::BTreeMap;

use chrono::Weekday;

use crate::{
    FitnessProfile, Gender, Intensity, InvalidProfile, MuscleGroup, Priority, Session,
    SubmitError, TransportError, WEEK,
};

#[allow(async_fn_in_trait)]
pub trait PlanService {
    async fn request_plan(
        &self,
        action: Action,
        request: &PlanRequest,
    ) -> Result<PlanResponse, TransportError>;

    /// Submits the profile of the session and applies the response to the session.
    async fn submit(&self, session: &mut Session, action: Action) -> Result<(), SubmitError> {
        let submission = session.begin_submission()?;
        let result = self.request_plan(action, submission.request()).await;
        let error = result.as_ref().err().cloned();
        session.complete_submission(submission.id(), result);
        match error {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait PlanRepository {
    async fn analyze_profile(&self, request: &PlanRequest) -> Result<PlanResponse, TransportError>;
    async fn generate_plan(&self, request: &PlanRequest) -> Result<PlanResponse, TransportError>;
}

/// Operation requested from the recommendation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Body analysis together with a plan
    Analyze,
    Generate,
}

/// Immutable snapshot of a validated profile, ready to be sent to the recommendation service.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    height: f64,
    weight: f64,
    age: u32,
    gender: Gender,
    intensity: Intensity,
    available_days: Vec<Weekday>,
    muscle_group_priorities: BTreeMap<MuscleGroup, Priority>,
    available_equipment: Vec<String>,
}

impl PlanRequest {
    /// Copies the profile without any adjustment.
    ///
    /// The profile must have passed [`FitnessProfile::validate`]. Use `PlanRequest::try_from` to
    /// validate and build in one step.
    #[must_use]
    pub fn build(profile: &FitnessProfile) -> Self {
        debug_assert!(profile.is_valid(), "plan request built from invalid profile");
        Self {
            height: profile.height,
            weight: profile.weight,
            age: profile.age,
            gender: profile.gender,
            intensity: profile.intensity,
            available_days: profile.available_days_in_week_order(),
            muscle_group_priorities: profile.muscle_group_priorities.clone(),
            available_equipment: profile.available_equipment.iter().cloned().collect(),
        }
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[must_use]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    #[must_use]
    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    #[must_use]
    pub fn available_days(&self) -> &[Weekday] {
        &self.available_days
    }

    #[must_use]
    pub fn muscle_group_priorities(&self) -> &BTreeMap<MuscleGroup, Priority> {
        &self.muscle_group_priorities
    }

    #[must_use]
    pub fn available_equipment(&self) -> &[String] {
        &self.available_equipment
    }
}

impl TryFrom<&FitnessProfile> for PlanRequest {
    type Error = InvalidProfile;

    fn try_from(profile: &FitnessProfile) -> Result<Self, Self::Error> {
        profile.validate()?;
        Ok(PlanRequest::build(profile))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    pub bmi: f64,
    pub bmi_status: String,
    pub daily_calories: f64,
    pub weekly_burn: f64,
    pub bmr: f64,
}

/// Result of a successful round trip to the recommendation service.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanResponse {
    pub analysis: Option<Analysis>,
    pub plan: DisplayPlan,
}

/// Display-safe workout plan.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPlan {
    pub id: String,
    pub name: String,
    pub description: String,
    pub weekly_schedule: WeeklySchedule,
    pub weekly_calories: f64,
    pub status: String,
}

impl DisplayPlan {
    pub const DEFAULT_ID: &'static str = "plan-1";
    pub const DEFAULT_NAME: &'static str = "Smart Workout Plan";
    pub const DEFAULT_DESCRIPTION: &'static str = "AI-generated workout plan";
    pub const DEFAULT_STATUS: &'static str = "Generated successfully";

    pub const FALLBACK_ID: &'static str = "plan-fallback";
    pub const FALLBACK_NAME: &'static str = "Workout Plan (Processing Error)";

    /// Plan shown when a response could not be interpreted at all.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            id: Self::FALLBACK_ID.to_string(),
            name: Self::FALLBACK_NAME.to_string(),
            description: "The response of the recommendation service could not be processed"
                .to_string(),
            weekly_schedule: WeeklySchedule::default(),
            weekly_calories: 0.0,
            status: "Processing error".to_string(),
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.id == Self::FALLBACK_ID
    }
}

impl Default for DisplayPlan {
    fn default() -> Self {
        Self {
            id: Self::DEFAULT_ID.to_string(),
            name: Self::DEFAULT_NAME.to_string(),
            description: Self::DEFAULT_DESCRIPTION.to_string(),
            weekly_schedule: WeeklySchedule::default(),
            weekly_calories: 0.0,
            status: Self::DEFAULT_STATUS.to_string(),
        }
    }
}

/// Workouts keyed by day name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklySchedule(BTreeMap<String, WorkoutDay>);

impl WeeklySchedule {
    pub fn insert(&mut self, day: impl Into<String>, workout: WorkoutDay) -> Option<WorkoutDay> {
        self.0.insert(day.into(), workout)
    }

    #[must_use]
    pub fn get(&self, day: &str) -> Option<&WorkoutDay> {
        self.0.get(day)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries for weekdays from Monday to Sunday, followed by all other entries in lexicographic
    /// order.
    #[must_use]
    pub fn in_week_order(&self) -> Vec<(&str, &WorkoutDay)> {
        let mut entries = self
            .0
            .iter()
            .map(|(day, workout)| (day.as_str(), workout))
            .collect::<Vec<_>>();
        entries.sort_by_key(|(day, _)| {
            day.parse::<Weekday>()
                .ok()
                .and_then(|d| WEEK.iter().position(|w| *w == d))
                .unwrap_or(WEEK.len())
        });
        entries
    }
}

impl FromIterator<(String, WorkoutDay)> for WeeklySchedule {
    fn from_iter<T: IntoIterator<Item = (String, WorkoutDay)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutDay {
    pub name: String,
    /// Duration in minutes
    pub duration: Option<f64>,
    pub calories: Option<f64>,
    pub kind: Option<String>,
    pub exercises: Option<String>,
    pub muscles: Option<String>,
}

impl WorkoutDay {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Labelled values of all fields that are present.
    #[must_use]
    pub fn details(&self) -> Vec<(&'static str, String)> {
        [
            ("Type", self.kind.clone()),
            ("Duration", self.duration.map(|d| format!("{d:.0} min"))),
            ("Calories", self.calories.map(|c| format!("{c:.0} kcal"))),
            ("Exercises", self.exercises.clone()),
            ("Muscles", self.muscles.clone()),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }
}
