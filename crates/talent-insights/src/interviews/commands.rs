//! Create-request payloads and their mapping into interview entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{
    AudioAnswerFormat, InterchangeTemplate, Interview, InterviewContext, InterviewId,
    InterviewRound, InterviewStatus, MultipleChoiceQuestion, Question, RangeQuestion,
    TextAnswerFormat, TextQuestion, VideoAnswerFormat,
};

/// Rejected create payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("value cannot be null (parameter '{argument}')")]
    NullArgument { argument: &'static str },
    #[error("invalid value '{actual}' for '{argument}': expected {expected}")]
    InvalidArgument {
        argument: &'static str,
        actual: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterviewCreateCommand {
    pub id: InterviewId,
    pub code: Option<String>,
    pub title: Option<String>,
    pub status: InterviewStatus,
    pub start_time: DateTime<Utc>,
    pub expiration_time: DateTime<Utc>,
    pub rounds: Option<Vec<InterviewRoundCreateCommand>>,
    pub context: Option<InterviewContext>,
}

// TODO: accept interviewer assignments per round once the entity models them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterviewRoundCreateCommand {
    pub sequence_number: i32,
    /// Elements may be `null` in the request; they are rejected during mapping.
    pub questionnaire: Option<Vec<Option<InterchangeTemplateCreateCommand>>>,
}

/// Request shape for one template.
///
/// The answer format fields are accepted for compatibility with existing
/// callers but are not carried onto [`InterchangeTemplate`] yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterchangeTemplateCreateCommand {
    pub sequence_number: i32,
    pub is_mandatory: bool,
    pub is_description_visible: bool,
    pub text_question: Option<TextQuestion>,
    pub range_question: Option<RangeQuestion>,
    pub multiple_choice_question: Option<MultipleChoiceQuestion>,
    pub text_answer_format: Option<TextAnswerFormat>,
    pub audio_answer_format: Option<AudioAnswerFormat>,
    pub video_answer_format: Option<VideoAnswerFormat>,
}

impl InterchangeTemplateCreateCommand {
    pub fn number_of_questions_present(&self) -> usize {
        [
            self.text_question.is_some(),
            self.range_question.is_some(),
            self.multiple_choice_question.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

pub fn map_to_interchange_template(
    command: Option<InterchangeTemplateCreateCommand>,
) -> Result<InterchangeTemplate, CommandError> {
    let command = command.ok_or(CommandError::NullArgument {
        argument: "command",
    })?;

    let number_of_questions_present = command.number_of_questions_present();
    let question = match (
        command.text_question,
        command.range_question,
        command.multiple_choice_question,
    ) {
        (Some(text), None, None) => Question::Text(text),
        (None, Some(range), None) => Question::Range(range),
        (None, None, Some(choice)) => Question::MultipleChoice(choice),
        _ => {
            return Err(CommandError::InvalidArgument {
                argument: "numberOfQuestionsPresent",
                actual: number_of_questions_present.to_string(),
                expected: "Exactly one",
            })
        }
    };

    Ok(InterchangeTemplate {
        sequence_number: command.sequence_number,
        is_mandatory: command.is_mandatory,
        is_description_visible: command.is_description_visible,
        question,
    })
}

pub fn map_to_interview_round(
    command: InterviewRoundCreateCommand,
) -> Result<InterviewRound, CommandError> {
    let questionnaire = match command.questionnaire {
        Some(templates) if !templates.is_empty() => Some(
            templates
                .into_iter()
                .map(map_to_interchange_template)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        _ => None,
    };

    Ok(InterviewRound {
        sequence_number: command.sequence_number,
        questionnaire,
    })
}

/// Maps a create request onto a new, unpublished [`Interview`].
pub fn map_to_interview(command: InterviewCreateCommand) -> Result<Interview, CommandError> {
    let rounds = match command.rounds {
        Some(rounds) if !rounds.is_empty() => Some(
            rounds
                .into_iter()
                .map(map_to_interview_round)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        _ => None,
    };

    Ok(Interview {
        id: command.id,
        code: command.code,
        title: command.title,
        status: command.status,
        start_time: command.start_time,
        expiration_time: command.expiration_time,
        rounds,
        context: command.context,
        // audit fields and the publish flag are owned by the server
        ..Interview::default()
    })
}

impl TryFrom<InterchangeTemplateCreateCommand> for InterchangeTemplate {
    type Error = CommandError;

    fn try_from(command: InterchangeTemplateCreateCommand) -> Result<Self, Self::Error> {
        map_to_interchange_template(Some(command))
    }
}

impl TryFrom<InterviewRoundCreateCommand> for InterviewRound {
    type Error = CommandError;

    fn try_from(command: InterviewRoundCreateCommand) -> Result<Self, Self::Error> {
        map_to_interview_round(command)
    }
}

impl TryFrom<InterviewCreateCommand> for Interview {
    type Error = CommandError;

    fn try_from(command: InterviewCreateCommand) -> Result<Self, Self::Error> {
        map_to_interview(command)
    }
}
