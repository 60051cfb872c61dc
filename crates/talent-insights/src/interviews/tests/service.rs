use super::common::*;
use crate::interviews::commands::CommandError;
use crate::interviews::domain::InterviewId;
use crate::interviews::repository::{InterviewRepository, RepositoryError};
use crate::interviews::service::InterviewServiceError;
use uuid::Uuid;

#[test]
fn create_stamps_audit_fields_and_stays_unpublished() {
    let (service, repository) = build_service();
    let command = interview_command(vec![round_with(
        1,
        vec![template_with(Some(text_question()), None, None)],
    )]);

    let interview = service.create(command, "recruiter@example.com").expect("created");

    assert_eq!(interview.created_at, Some(fixed_now()));
    assert_eq!(interview.modified_at, Some(fixed_now()));
    assert_eq!(interview.created_by.as_deref(), Some("recruiter@example.com"));
    assert!(!interview.is_published);

    let stored = repository
        .fetch(&interview.id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored, interview);
}

#[test]
fn create_propagates_mapping_errors_without_persisting() {
    let (service, repository) = build_service();
    let command = interview_command(vec![round_with(
        1,
        vec![template_with(None, None, None)],
    )]);

    match service.create(command, "system") {
        Err(InterviewServiceError::Command(CommandError::InvalidArgument { actual, .. })) => {
            assert_eq!(actual, "0")
        }
        other => panic!("expected command error, got {other:?}"),
    }
    assert!(repository.is_empty());
}

#[test]
fn create_rejects_duplicate_ids() {
    let (service, _repository) = build_service();
    service
        .create(interview_command(Vec::new()), "system")
        .expect("first create");

    match service.create(interview_command(Vec::new()), "system") {
        Err(InterviewServiceError::Repository(RepositoryError::Conflict)) => {}
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[test]
fn get_propagates_not_found() {
    let (service, _repository) = build_service();

    match service.get(&InterviewId(Uuid::nil())) {
        Err(InterviewServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found error, got {other:?}"),
    }
}
