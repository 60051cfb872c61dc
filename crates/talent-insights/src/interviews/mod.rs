//! Interview template intake: create commands, mapping, and persistence.

pub mod commands;
pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use commands::{
    map_to_interchange_template, map_to_interview, map_to_interview_round, CommandError,
    InterchangeTemplateCreateCommand, InterviewCreateCommand, InterviewRoundCreateCommand,
};
pub use domain::{
    AudioAnswerFormat, ChoiceOption, InterchangeTemplate, Interview, InterviewContext,
    InterviewId, InterviewRound, InterviewStatus, MultipleChoiceQuestion, Question,
    RangeQuestion, TextAnswerFormat, TextQuestion, VideoAnswerFormat,
};
pub use repository::{InMemoryInterviewRepository, InterviewRepository, RepositoryError};
pub use router::{interview_router, ACTOR_HEADER};
pub use service::{Clock, InterviewService, InterviewServiceError};
