use std::collections::BTreeMap;

use deadlift_domain as domain;
use deadlift_web_app::Settings;
use log::{debug, warn};
use serde_json::Value;
use strum::AsRefStr;

use crate::reconcile;

/// HTTP client used to reach the recommendation service.
#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send(&self, request: Request) -> Result<Response, ConnectionError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub body: String,
}

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    #[strum(serialize = "POST")]
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl Response {
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure before any response was received.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    #[error("service unreachable")]
    Unreachable,
    #[error("{0}")]
    InvalidRequest(String),
}

impl From<ConnectionError> for domain::TransportError {
    fn from(value: ConnectionError) -> Self {
        match value {
            ConnectionError::Unreachable => domain::TransportError::NoConnection,
            ConnectionError::InvalidRequest(message) => {
                domain::TransportError::InvalidRequest(message)
            }
        }
    }
}

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    #[strum(serialize = "api/users/analyze")]
    Analyze,
    #[strum(serialize = "api/workouts/generate")]
    Generate,
}

impl From<domain::Action> for Endpoint {
    fn from(value: domain::Action) -> Self {
        match value {
            domain::Action::Analyze => Endpoint::Analyze,
            domain::Action::Generate => Endpoint::Generate,
        }
    }
}

pub struct REST<S> {
    base_url: String,
    sender: S,
}

impl<S: SendRequest> REST<S> {
    pub fn new(base_url: impl Into<String>, sender: S) -> Self {
        Self {
            base_url: base_url.into(),
            sender,
        }
    }

    pub fn from_settings(settings: &Settings, sender: S) -> Self {
        Self::new(settings.api_url.clone(), sender)
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.as_ref()
        )
    }

    async fn post(
        &self,
        endpoint: Endpoint,
        request: &domain::PlanRequest,
    ) -> Result<domain::PlanResponse, domain::TransportError> {
        let body = serde_json::to_string(&PlanRequest::from(request))
            .map_err(|err| domain::TransportError::InvalidRequest(err.to_string()))?;
        let request = Request {
            method: Method::Post,
            url: self.url(endpoint),
            body,
        };
        debug!("sending {} {}", request.method.as_ref(), request.url);

        let response = self.sender.send(request).await?;

        if !response.ok() {
            return Err(server_error(&response));
        }

        let raw = serde_json::from_str::<Value>(&response.body).unwrap_or_else(|err| {
            warn!("failed to parse response body: {err}");
            Value::Null
        });

        Ok(reconcile::reconcile_response(&raw))
    }
}

impl<S: SendRequest> domain::PlanRepository for REST<S> {
    async fn analyze_profile(
        &self,
        request: &domain::PlanRequest,
    ) -> Result<domain::PlanResponse, domain::TransportError> {
        self.post(Endpoint::Analyze, request).await
    }

    async fn generate_plan(
        &self,
        request: &domain::PlanRequest,
    ) -> Result<domain::PlanResponse, domain::TransportError> {
        self.post(Endpoint::Generate, request).await
    }
}

/// Prefers the `error` text of the response body, then the status text, then the status code.
fn server_error(response: &Response) -> domain::TransportError {
    let message = serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|body| {
            body.get("error")
                .and_then(Value::as_str)
                .filter(|e| !e.is_empty())
                .map(ToString::to_string)
        })
        .or_else(|| {
            Some(response.status_text.clone()).filter(|status_text| !status_text.is_empty())
        })
        .unwrap_or_else(|| response.status.to_string());

    domain::TransportError::Server {
        status: response.status,
        message,
    }
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub height: f64,
    pub weight: f64,
    pub age: u32,
    pub gender: String,
    pub intensity: u8,
    pub available_days: Vec<String>,
    pub muscle_group_priorities: BTreeMap<String, String>,
    pub available_equipment: Vec<String>,
}

impl From<&domain::PlanRequest> for PlanRequest {
    fn from(value: &domain::PlanRequest) -> Self {
        Self {
            height: value.height(),
            weight: value.weight(),
            age: value.age(),
            gender: value.gender().to_string(),
            intensity: *value.intensity(),
            available_days: value
                .available_days()
                .iter()
                .map(|day| domain::weekday_name(*day).to_string())
                .collect(),
            muscle_group_priorities: value
                .muscle_group_priorities()
                .iter()
                .map(|(muscle_group, priority)| {
                    (
                        domain::Property::name(*muscle_group).to_string(),
                        priority.to_string(),
                    )
                })
                .collect(),
            available_equipment: value.available_equipment().to_vec(),
        }
    }
}
