use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::domain::{Interview, InterviewId};

/// Storage abstraction so the service can be exercised in isolation.
pub trait InterviewRepository: Send + Sync {
    fn insert(&self, interview: Interview) -> Result<Interview, RepositoryError>;
    fn fetch(&self, id: &InterviewId) -> Result<Option<Interview>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("interview already exists")]
    Conflict,
    #[error("interview not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-local repository used by the API service and tests.
#[derive(Debug, Default, Clone)]
pub struct InMemoryInterviewRepository {
    records: Arc<Mutex<HashMap<InterviewId, Interview>>>,
}

#[cfg(test)]
impl InMemoryInterviewRepository {
    pub(crate) fn is_empty(&self) -> bool {
        self.records
            .lock()
            .map(|guard| guard.is_empty())
            .unwrap_or(true)
    }
}

impl InterviewRepository for InMemoryInterviewRepository {
    fn insert(&self, interview: Interview) -> Result<Interview, RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))?;
        if guard.contains_key(&interview.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(interview.id, interview.clone());
        Ok(interview)
    }

    fn fetch(&self, id: &InterviewId) -> Result<Option<Interview>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))?;
        Ok(guard.get(id).cloned())
    }
}
