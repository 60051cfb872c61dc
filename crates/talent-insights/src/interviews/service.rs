use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use super::commands::{map_to_interview, CommandError, InterviewCreateCommand};
use super::domain::{Interview, InterviewId};
use super::repository::{InterviewRepository, RepositoryError};

/// Source of "now" for audit stamps.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Service composing command mapping with persistence.
pub struct InterviewService<R> {
    repository: Arc<R>,
    clock: Clock,
}

impl<R> InterviewService<R>
where
    R: InterviewRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_clock(repository, Arc::new(Utc::now))
    }

    pub fn with_clock(repository: Arc<R>, clock: Clock) -> Self {
        Self { repository, clock }
    }

    /// Map and persist a new interview on behalf of `actor`.
    ///
    /// Audit fields are stamped here; the interview always starts unpublished.
    pub fn create(
        &self,
        command: InterviewCreateCommand,
        actor: &str,
    ) -> Result<Interview, InterviewServiceError> {
        let mut interview = map_to_interview(command)?;
        let now = (self.clock)();
        interview.created_at = Some(now);
        interview.modified_at = Some(now);
        interview.created_by = Some(actor.to_string());
        interview.modified_by = Some(actor.to_string());
        interview.is_published = false;

        let stored = self.repository.insert(interview)?;
        info!(
            interview_id = %stored.id,
            rounds = stored.rounds.as_ref().map_or(0, Vec::len),
            "interview created"
        );
        Ok(stored)
    }

    pub fn get(&self, id: &InterviewId) -> Result<Interview, InterviewServiceError> {
        let interview = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(interview)
    }
}

/// Error raised by the interview service.
#[derive(Debug, thiserror::Error)]
pub enum InterviewServiceError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
