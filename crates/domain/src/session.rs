use log::debug;

use crate::{
    Analysis, DisplayPlan, FitnessProfile, PlanRequest, PlanResponse, SubmitError, TransportError,
};

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubmissionID(u64);

impl From<u64> for SubmissionID {
    fn from(value: u64) -> Self {
        SubmissionID(value)
    }
}

/// Plan request issued by [`Session::begin_submission`].
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    id: SubmissionID,
    request: PlanRequest,
}

impl Submission {
    #[must_use]
    pub fn id(&self) -> SubmissionID {
        self.id
    }

    #[must_use]
    pub fn request(&self) -> &PlanRequest {
        &self.request
    }
}

/// State of one user interacting with the planner.
///
/// Results of submissions are applied in the order the submissions were issued. A result that
/// arrives after the result of a later submission has been applied is dropped.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub profile: FitnessProfile,
    plan: Option<DisplayPlan>,
    analysis: Option<Analysis>,
    error: Option<String>,
    issued: SubmissionID,
    in_flight: Option<SubmissionID>,
    applied: SubmissionID,
}

impl Session {
    #[must_use]
    pub fn new(profile: FitnessProfile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn plan(&self) -> Option<&DisplayPlan> {
        self.plan.as_ref()
    }

    #[must_use]
    pub fn analysis(&self) -> Option<&Analysis> {
        self.analysis.as_ref()
    }

    /// Message of the last failed submission.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Validates the current profile and issues a new submission.
    ///
    /// Nothing is issued if the profile is invalid or another submission is still in flight.
    pub fn begin_submission(&mut self) -> Result<Submission, SubmitError> {
        if self.in_flight.is_some() {
            return Err(SubmitError::InProgress);
        }

        let request = PlanRequest::try_from(&self.profile)?;
        self.issued = SubmissionID(self.issued.0 + 1);
        self.in_flight = Some(self.issued);
        self.error = None;

        Ok(Submission {
            id: self.issued,
            request,
        })
    }

    /// Marks the submission as no longer in flight without applying any result.
    pub fn abandon_submission(&mut self, id: SubmissionID) {
        if self.in_flight == Some(id) {
            self.in_flight = None;
        }
    }

    /// Applies the result of a submission.
    ///
    /// Returns `false` if the result is outdated and was ignored.
    pub fn complete_submission(
        &mut self,
        id: SubmissionID,
        result: Result<PlanResponse, TransportError>,
    ) -> bool {
        if self.in_flight == Some(id) {
            self.in_flight = None;
        }

        if self.applied >= id {
            debug!("ignoring outdated result of submission {}", id.0);
            return false;
        }

        match result {
            Ok(response) => {
                self.plan = Some(response.plan);
                if let Some(analysis) = response.analysis {
                    self.analysis = Some(analysis);
                }
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
        self.applied = id;

        true
    }
}
