//! Conversion of untrusted recommendation service payloads into display-safe domain types.
//!
//! Every field is optional on the wire. Absent fields take their defaults silently, present
//! fields of the wrong type take their defaults with a warning.

use deadlift_domain as domain;
use log::warn;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
struct Response {
    analysis: Option<Value>,
    workout_plan: Option<Value>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
struct Plan {
    id: Option<Value>,
    name: Option<Value>,
    description: Option<Value>,
    weekly_schedule: Option<Value>,
    weekly_calories: Option<Value>,
    status: Option<Value>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
struct Analysis {
    bmi: Option<Value>,
    bmi_status: Option<Value>,
    daily_calories: Option<Value>,
    weekly_burn: Option<Value>,
    bmr: Option<Value>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct WorkoutDay {
    name: Option<Value>,
    duration: Option<Value>,
    calories: Option<Value>,
    #[serde(rename = "type")]
    kind: Option<Value>,
    exercises: Option<Value>,
    muscles: Option<Value>,
}

/// Reconciles a complete response body.
///
/// A body without `workoutPlan` yields the fallback plan.
#[must_use]
pub fn reconcile_response(raw: &Value) -> domain::PlanResponse {
    let Some(response) = object::<Response>(raw, "response") else {
        return domain::PlanResponse {
            analysis: None,
            plan: domain::DisplayPlan::fallback(),
        };
    };

    domain::PlanResponse {
        analysis: response.analysis.as_ref().and_then(reconcile_analysis),
        plan: match response.workout_plan {
            Some(ref plan) => reconcile_plan(plan),
            None => {
                warn!("response contains no workout plan");
                domain::DisplayPlan::fallback()
            }
        },
    }
}

/// Reconciles a workout plan, substituting defaults for every missing or malformed field.
#[must_use]
pub fn reconcile_plan(raw: &Value) -> domain::DisplayPlan {
    let Some(plan) = object::<Plan>(raw, "workout plan") else {
        return domain::DisplayPlan::fallback();
    };

    domain::DisplayPlan {
        id: string_or("id", plan.id, domain::DisplayPlan::DEFAULT_ID),
        name: string_or("name", plan.name, domain::DisplayPlan::DEFAULT_NAME),
        description: string_or(
            "description",
            plan.description,
            domain::DisplayPlan::DEFAULT_DESCRIPTION,
        ),
        weekly_schedule: plan
            .weekly_schedule
            .map(reconcile_schedule)
            .unwrap_or_default(),
        weekly_calories: number("weeklyCalories", plan.weekly_calories).unwrap_or_default(),
        status: string_or("status", plan.status, domain::DisplayPlan::DEFAULT_STATUS),
    }
}

/// Reconciles a body analysis.
///
/// Returns `None` if the payload is not an object.
#[must_use]
pub fn reconcile_analysis(raw: &Value) -> Option<domain::Analysis> {
    let analysis = object::<Analysis>(raw, "analysis")?;

    Some(domain::Analysis {
        bmi: number("bmi", analysis.bmi).unwrap_or_default(),
        bmi_status: string_or("bmiStatus", analysis.bmi_status, ""),
        daily_calories: number("dailyCalories", analysis.daily_calories).unwrap_or_default(),
        weekly_burn: number("weeklyBurn", analysis.weekly_burn).unwrap_or_default(),
        bmr: number("bmr", analysis.bmr).unwrap_or_default(),
    })
}

fn reconcile_schedule(raw: Value) -> domain::WeeklySchedule {
    match raw {
        Value::Object(days) => days
            .into_iter()
            .map(|(day, value)| {
                let workout = reconcile_workout_day(&day, &value);
                (day, workout)
            })
            .collect(),
        other => {
            warn!("replacing malformed weekly schedule by empty schedule: {other}");
            domain::WeeklySchedule::default()
        }
    }
}

fn reconcile_workout_day(day: &str, raw: &Value) -> domain::WorkoutDay {
    let Some(workout) = object::<WorkoutDay>(raw, "workout day") else {
        return domain::WorkoutDay::named(day);
    };

    domain::WorkoutDay {
        name: string_or("name", workout.name, day),
        duration: number("duration", workout.duration),
        calories: number("calories", workout.calories),
        kind: string("type", workout.kind),
        exercises: string("exercises", workout.exercises),
        muscles: string("muscles", workout.muscles),
    }
}

fn object<'de, T: Deserialize<'de>>(raw: &'de Value, entity: &str) -> Option<T> {
    if !raw.is_object() {
        warn!("failed to interpret {entity}: expected object, found {raw}");
        return None;
    }

    match T::deserialize(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("failed to interpret {entity}: {err}");
            None
        }
    }
}

fn string(field: &str, value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        other => {
            warn!("ignoring malformed {field}: {other}");
            None
        }
    }
}

fn string_or(field: &str, value: Option<Value>, default: &str) -> String {
    string(field, value).unwrap_or_else(|| default.to_string())
}

fn number(field: &str, value: Option<Value>) -> Option<f64> {
    let value = value?;
    let number = value.as_f64();
    if number.is_none() {
        warn!("ignoring malformed {field}: {value}");
    }
    number
}
