use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier wrapper for interviews.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterviewId(pub Uuid);

impl std::fmt::Display for InterviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterviewStatus {
    #[default]
    Draft,
    Scheduled,
    Open,
    Closed,
    Cancelled,
}

impl InterviewStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InterviewStatus::Draft => "draft",
            InterviewStatus::Scheduled => "scheduled",
            InterviewStatus::Open => "open",
            InterviewStatus::Closed => "closed",
            InterviewStatus::Cancelled => "cancelled",
        }
    }
}

/// Where the interview is used: the job it screens for and who owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterviewContext {
    pub job_id: Option<String>,
    pub organization_id: Option<String>,
    pub attributes: BTreeMap<String, String>,
}

/// A scheduled interview made of ordered rounds.
///
/// Audit fields and `is_published` belong to the server and persistence
/// layer; a freshly mapped interview never has them set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: InterviewId,
    pub code: Option<String>,
    pub title: Option<String>,
    pub status: InterviewStatus,
    pub start_time: DateTime<Utc>,
    pub expiration_time: DateTime<Utc>,
    pub rounds: Option<Vec<InterviewRound>>,
    pub context: Option<InterviewContext>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub modified_by: Option<String>,
    pub is_published: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRound {
    pub sequence_number: i32,
    pub questionnaire: Option<Vec<InterchangeTemplate>>,
}

/// One question slot within a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterchangeTemplate {
    pub sequence_number: i32,
    pub is_mandatory: bool,
    pub is_description_visible: bool,
    pub question: Question,
}

/// The single question carried by an [`InterchangeTemplate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Question {
    Text(TextQuestion),
    Range(RangeQuestion),
    MultipleChoice(MultipleChoiceQuestion),
}

impl Question {
    pub fn text(&self) -> &str {
        match self {
            Question::Text(question) => &question.text,
            Question::Range(question) => &question.text,
            Question::MultipleChoice(question) => &question.text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextQuestion {
    pub text: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RangeQuestion {
    pub text: String,
    pub description: Option<String>,
    pub minimum: i32,
    pub maximum: i32,
    pub step: Option<i32>,
    pub minimum_label: Option<String>,
    pub maximum_label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MultipleChoiceQuestion {
    pub text: String,
    pub description: Option<String>,
    pub options: Vec<ChoiceOption>,
    pub allow_multiple: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChoiceOption {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextAnswerFormat {
    pub max_length: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioAnswerFormat {
    pub max_duration_seconds: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoAnswerFormat {
    pub max_duration_seconds: Option<u32>,
    pub allow_retakes: bool,
}
