use crate::render::{questions_listing, text_report};
use crate::server;
use clap::{Args, Parser, Subcommand};
use eoi_calculator::config::AppConfig;
use eoi_calculator::error::AppError;
use eoi_calculator::scoring::{questionnaire, AnswerDraft, MissingAnswerPolicy, ScoreCalculator};

#[derive(Parser, Debug)]
#[command(
    name = "AAIP Worker EOI Calculator",
    about = "Score an Alberta Advantage Immigration Program worker Expression of Interest",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP form (default command)
    Serve(ServeArgs),
    /// Score one set of answers and print the breakdown
    Score(ScoreArgs),
    /// List every question with the option keys it accepts
    Questions(QuestionsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override how unanswered questions are scored (reject, first-option, lowest-option)
    #[arg(long)]
    pub(crate) missing_answers: Option<MissingAnswerPolicy>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Highest level of education completed (e.g. masters)
    #[arg(long)]
    pub(crate) education: Option<String>,
    /// Where the highest level of education was completed
    #[arg(long)]
    pub(crate) education_location: Option<String>,
    /// Language track that gives the most points (english or french)
    #[arg(long)]
    pub(crate) language: Option<String>,
    /// Lowest CLB level across all abilities (6, 5, 4, 3, no_test)
    #[arg(long)]
    pub(crate) english_score: Option<String>,
    /// Lowest NCLC level across all abilities (6, 5, 4, 3, no_test)
    #[arg(long)]
    pub(crate) french_score: Option<String>,
    /// CLB/NCLC 4 or higher in both English and French
    #[arg(long)]
    pub(crate) bilingual: bool,
    /// Total work experience in Canada and abroad
    #[arg(long)]
    pub(crate) total_experience: Option<String>,
    /// Work experience in Canada
    #[arg(long)]
    pub(crate) canadian_experience: Option<String>,
    /// Age group
    #[arg(long)]
    pub(crate) age: Option<String>,
    /// Parent, child, or sibling in Alberta who is a PR or citizen over 18
    #[arg(long)]
    pub(crate) family_connection: bool,
    /// Permanent full-time job offer in Alberta
    #[arg(long)]
    pub(crate) job_offer: bool,
    /// Special job offer type (none, rural_renewal, tourism_hospitality, law_enforcement)
    #[arg(long)]
    pub(crate) special_job_offer: Option<String>,
    /// Location of the job in Alberta
    #[arg(long)]
    pub(crate) job_location: Option<String>,
    /// Regulated occupation with valid Alberta certification or licensing
    #[arg(long)]
    pub(crate) regulated_occupation: bool,
    /// How unanswered questions are scored (defaults to APP_MISSING_ANSWERS or reject)
    #[arg(long)]
    pub(crate) missing_answers: Option<MissingAnswerPolicy>,
    /// Print the assessment as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Print the questionnaire as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

impl ScoreArgs {
    fn draft(&self) -> AnswerDraft {
        AnswerDraft {
            education: self.education.clone(),
            education_location: self.education_location.clone(),
            language: self.language.clone(),
            english_score: self.english_score.clone(),
            french_score: self.french_score.clone(),
            bilingual: self.bilingual,
            total_experience: self.total_experience.clone(),
            canadian_experience: self.canadian_experience.clone(),
            age: self.age.clone(),
            family_connection: self.family_connection,
            job_offer: self.job_offer,
            special_job_offer: self.special_job_offer.clone(),
            job_location: self.job_location.clone(),
            regulated_occupation: self.regulated_occupation,
        }
    }
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Questions(args) => {
            print!("{}", questions_output(&args)?);
            Ok(())
        }
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let policy = match args.missing_answers {
        Some(policy) => policy,
        None => AppConfig::load()?.scoring.missing_answers,
    };

    let output = score_output(&args, policy)?;
    print!("{output}");
    Ok(())
}

fn questions_output(args: &QuestionsArgs) -> Result<String, AppError> {
    if args.json {
        let mut rendered = serde_json::to_string_pretty(&questionnaire())?;
        rendered.push('\n');
        Ok(rendered)
    } else {
        Ok(questions_listing())
    }
}

fn score_output(args: &ScoreArgs, policy: MissingAnswerPolicy) -> Result<String, AppError> {
    let assessment = ScoreCalculator::new(policy).assess(&args.draft())?;

    if args.json {
        let mut rendered = serde_json::to_string_pretty(&assessment)?;
        rendered.push('\n');
        Ok(rendered)
    } else {
        Ok(text_report(&assessment))
    }
}
