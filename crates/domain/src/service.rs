use log::{debug, error};

use crate::{Action, PlanRepository, PlanRequest, PlanResponse, PlanService, TransportError};

pub struct Service<R> {
    repository: R,
}

impl<R: PlanRepository> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                TransportError::NoConnection => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: PlanRepository> PlanService for Service<R> {
    async fn request_plan(
        &self,
        action: Action,
        request: &PlanRequest,
    ) -> Result<PlanResponse, TransportError> {
        match action {
            Action::Analyze => {
                log_on_error!(self.repository.analyze_profile(request), "analyze", "profile")
            }
            Action::Generate => {
                log_on_error!(self.repository.generate_plan(request), "generate", "plan")
            }
        }
    }
}
