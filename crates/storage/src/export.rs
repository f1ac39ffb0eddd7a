use deadlift_domain as domain;
use serde::{Serialize, Serializer};

/// JSON document offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub contents: String,
}

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

pub fn export(
    plan: &domain::DisplayPlan,
    analysis: Option<&domain::Analysis>,
) -> Result<Export, ExportError> {
    let document = Document {
        workout_plan: Plan::from(plan),
        analysis: analysis.map(Analysis::from),
    };

    Ok(Export {
        file_name: file_name(&plan.id),
        contents: serde_json::to_string_pretty(&document)?,
    })
}

/// Exports the last plan of the session, if there is one.
pub fn export_session(session: &domain::Session) -> Result<Option<Export>, ExportError> {
    session
        .plan()
        .map(|plan| export(plan, session.analysis()))
        .transpose()
}

fn file_name(plan_id: &str) -> String {
    let id = plan_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '-'
            }
        })
        .collect::<String>();
    format!("workout-plan-{id}.json")
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Document<'a> {
    workout_plan: Plan<'a>,
    analysis: Option<Analysis<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Plan<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    weekly_schedule: Schedule<'a>,
    weekly_calories: f64,
    status: &'a str,
}

impl<'a> From<&'a domain::DisplayPlan> for Plan<'a> {
    fn from(value: &'a domain::DisplayPlan) -> Self {
        Self {
            id: &value.id,
            name: &value.name,
            description: &value.description,
            weekly_schedule: Schedule(&value.weekly_schedule),
            weekly_calories: value.weekly_calories,
            status: &value.status,
        }
    }
}

struct Schedule<'a>(&'a domain::WeeklySchedule);

impl Serialize for Schedule<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.0
                .in_week_order()
                .into_iter()
                .map(|(day, workout)| (day, WorkoutDay::from(workout))),
        )
    }
}

#[derive(Serialize)]
struct WorkoutDay<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    calories: Option<f64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exercises: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    muscles: Option<&'a str>,
}

impl<'a> From<&'a domain::WorkoutDay> for WorkoutDay<'a> {
    fn from(value: &'a domain::WorkoutDay) -> Self {
        Self {
            name: &value.name,
            duration: value.duration,
            calories: value.calories,
            kind: value.kind.as_deref(),
            exercises: value.exercises.as_deref(),
            muscles: value.muscles.as_deref(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Analysis<'a> {
    bmi: f64,
    bmi_status: &'a str,
    daily_calories: f64,
    weekly_burn: f64,
    bmr: f64,
}

impl<'a> From<&'a domain::Analysis> for Analysis<'a> {
    fn from(value: &'a domain::Analysis) -> Self {
        Self {
            bmi: value.bmi,
            bmi_status: &value.bmi_status,
            daily_calories: value.daily_calories,
            weekly_burn: value.weekly_burn,
            bmr: value.bmr,
        }
    }
}
