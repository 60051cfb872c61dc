use crate::infra::{build_care_client, read_interview_command};
use clap::Args;
use std::path::PathBuf;
use talent_insights::care::{DistributionQuery, ProgressionQuery};
use talent_insights::config::AppConfig;
use talent_insights::error::AppError;
use talent_insights::interviews::{map_to_interview, Interview};

#[derive(Args, Debug)]
pub(crate) struct DistributionArgs {
    /// Job title to profile
    #[arg(long)]
    pub(crate) title: Option<String>,
    /// Alternative spellings of the title (repeatable)
    #[arg(long = "title-synonym")]
    pub(crate) title_synonyms: Vec<String>,
    /// Company filter (repeatable)
    #[arg(long = "company")]
    pub(crate) companies: Vec<String>,
    /// Industry filter (repeatable)
    #[arg(long = "industry")]
    pub(crate) industries: Vec<String>,
    /// Skill filter (repeatable)
    #[arg(long = "skill")]
    pub(crate) skills: Vec<String>,
    /// ISO country code
    #[arg(long)]
    pub(crate) country_code: Option<String>,
    #[arg(long)]
    pub(crate) state: Option<String>,
    #[arg(long)]
    pub(crate) city: Option<String>,
    /// Number of similar titles to return
    #[arg(long, default_value_t = 10)]
    pub(crate) titles_count: u32,
    #[arg(long, default_value_t = 10)]
    pub(crate) companies_count: u32,
    #[arg(long, default_value_t = 10)]
    pub(crate) industries_count: u32,
    #[arg(long, default_value_t = 10)]
    pub(crate) skills_count: u32,
}

impl From<DistributionArgs> for DistributionQuery {
    fn from(args: DistributionArgs) -> Self {
        DistributionQuery {
            title: args.title,
            title_synonyms: args.title_synonyms,
            companies: args.companies,
            industries: args.industries,
            skills: args.skills,
            country_code: args.country_code,
            state: args.state,
            city: args.city,
            titles_count: args.titles_count,
            companies_count: args.companies_count,
            industries_count: args.industries_count,
            skills_count: args.skills_count,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ProgressionArgs {
    /// Current job title
    #[arg(long)]
    pub(crate) title: Option<String>,
    /// Similar titles held (repeatable)
    #[arg(long = "similar-title")]
    pub(crate) similar_titles: Vec<String>,
    /// Skills held (repeatable)
    #[arg(long = "skill")]
    pub(crate) skills: Vec<String>,
}

impl From<ProgressionArgs> for ProgressionQuery {
    fn from(args: ProgressionArgs) -> Self {
        ProgressionQuery {
            title: args.title,
            similar_titles: args.similar_titles,
            skills: args.skills,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// Path to a JSON interview create request
    pub(crate) path: PathBuf,
}

pub(crate) async fn run_distribution_stats(args: DistributionArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let client = build_care_client(&config).await?;
    let stats = client.get_stats(&DistributionQuery::from(args)).await?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

pub(crate) async fn run_progression_stats(args: ProgressionArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let client = build_care_client(&config).await?;
    let stats = client.get_progression(&ProgressionQuery::from(args)).await?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

pub(crate) fn run_interview_validation(args: ValidateArgs) -> Result<(), AppError> {
    let command = read_interview_command(&args.path)?;
    let interview = map_to_interview(command)?;
    render_interview_summary(&interview);
    println!("{}", serde_json::to_string_pretty(&interview)?);
    Ok(())
}

fn render_interview_summary(interview: &Interview) {
    println!(
        "Interview {} ({}) - status {}",
        interview.title.as_deref().unwrap_or("untitled"),
        interview.id,
        interview.status.label()
    );
    match &interview.rounds {
        Some(rounds) => {
            for round in rounds {
                let questionnaire = round.questionnaire.as_deref().unwrap_or_default();
                println!(
                    "  Round {}: {} question(s)",
                    round.sequence_number,
                    questionnaire.len()
                );
                for template in questionnaire {
                    println!(
                        "    {}. {}",
                        template.sequence_number,
                        template.question.text()
                    );
                }
            }
        }
        None => println!("  No rounds defined"),
    }
}
