use crate::commands::{
    run_distribution_stats, run_interview_validation, run_progression_stats, DistributionArgs,
    ProgressionArgs, ValidateArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use talent_insights::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Talent Insights",
    about = "Serve interview intake and CaRe talent insight endpoints, or query them from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Query the CaRe analytics API directly
    Stats {
        #[command(subcommand)]
        command: StatsCommand,
    },
    /// Work with interview create requests
    Interview {
        #[command(subcommand)]
        command: InterviewCommand,
    },
}

#[derive(Subcommand, Debug)]
enum StatsCommand {
    /// Candidate distribution stats for a title and location
    Distribution(DistributionArgs),
    /// Career progression prediction for a title
    Progression(ProgressionArgs),
}

#[derive(Subcommand, Debug)]
enum InterviewCommand {
    /// Map a JSON create request and print the resulting interview
    Validate(ValidateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Stats {
            command: StatsCommand::Distribution(args),
        } => run_distribution_stats(args).await,
        Command::Stats {
            command: StatsCommand::Progression(args),
        } => run_progression_stats(args).await,
        Command::Interview {
            command: InterviewCommand::Validate(args),
        } => run_interview_validation(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_distribution_arguments() {
        let cli = Cli::try_parse_from([
            "talent-insights",
            "stats",
            "distribution",
            "--title",
            "Registered Nurse",
            "--skill",
            "Triage",
            "--skill",
            "IV Therapy",
            "--country-code",
            "US",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Stats {
                command: StatsCommand::Distribution(args),
            }) => {
                assert_eq!(args.title.as_deref(), Some("Registered Nurse"));
                assert_eq!(args.skills, vec!["Triage", "IV Therapy"]);
                assert_eq!(args.country_code.as_deref(), Some("US"));
                assert_eq!(args.skills_count, 10);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::try_parse_from(["talent-insights"]).expect("no arguments parse");
        assert!(cli.command.is_none());
    }
}
