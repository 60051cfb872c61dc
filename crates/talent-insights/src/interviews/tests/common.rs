use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::interviews::commands::{
    InterchangeTemplateCreateCommand, InterviewCreateCommand, InterviewRoundCreateCommand,
};
use crate::interviews::domain::{
    ChoiceOption, InterviewContext, InterviewId, InterviewStatus, MultipleChoiceQuestion,
    RangeQuestion, TextQuestion,
};
use crate::interviews::repository::InMemoryInterviewRepository;
use crate::interviews::service::InterviewService;

pub(super) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn text_question() -> TextQuestion {
    TextQuestion {
        text: "Describe a production incident you led.".to_string(),
        description: Some("Focus on your own decisions.".to_string()),
    }
}

pub(super) fn range_question() -> RangeQuestion {
    RangeQuestion {
        text: "How comfortable are you with on-call rotations?".to_string(),
        description: None,
        minimum: 1,
        maximum: 5,
        step: Some(1),
        minimum_label: Some("Not at all".to_string()),
        maximum_label: Some("Very".to_string()),
    }
}

pub(super) fn multiple_choice_question() -> MultipleChoiceQuestion {
    MultipleChoiceQuestion {
        text: "Which shifts can you cover?".to_string(),
        description: None,
        options: vec![
            ChoiceOption {
                key: "day".to_string(),
                label: "Day".to_string(),
            },
            ChoiceOption {
                key: "night".to_string(),
                label: "Night".to_string(),
            },
        ],
        allow_multiple: true,
    }
}

pub(super) fn template_with(
    text: Option<TextQuestion>,
    range: Option<RangeQuestion>,
    choice: Option<MultipleChoiceQuestion>,
) -> InterchangeTemplateCreateCommand {
    InterchangeTemplateCreateCommand {
        sequence_number: 1,
        is_mandatory: true,
        is_description_visible: false,
        text_question: text,
        range_question: range,
        multiple_choice_question: choice,
        ..InterchangeTemplateCreateCommand::default()
    }
}

pub(super) fn round_with(
    sequence_number: i32,
    templates: Vec<InterchangeTemplateCreateCommand>,
) -> InterviewRoundCreateCommand {
    InterviewRoundCreateCommand {
        sequence_number,
        questionnaire: Some(templates.into_iter().map(Some).collect()),
    }
}

pub(super) fn interview_command(rounds: Vec<InterviewRoundCreateCommand>) -> InterviewCreateCommand {
    InterviewCreateCommand {
        id: InterviewId(Uuid::from_u128(0x5eed)),
        code: Some("INT-0042".to_string()),
        title: Some("Site Reliability Engineer screen".to_string()),
        status: InterviewStatus::Scheduled,
        start_time: fixed_now(),
        expiration_time: fixed_now() + chrono::Duration::days(14),
        rounds: Some(rounds),
        context: Some(InterviewContext {
            job_id: Some("job-778".to_string()),
            organization_id: Some("org-12".to_string()),
            ..InterviewContext::default()
        }),
    }
}

pub(super) fn build_service() -> (
    InterviewService<InMemoryInterviewRepository>,
    Arc<InMemoryInterviewRepository>,
) {
    let repository = Arc::new(InMemoryInterviewRepository::default());
    let service = InterviewService::with_clock(repository.clone(), Arc::new(fixed_now));
    (service, repository)
}
