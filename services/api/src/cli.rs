use crate::commands::{run_climate, run_quiz, run_seasonal, ClimateArgs, QuizArgs, SeasonalArgs};
use crate::server;
use ayurdosha::config::AppConfig;
use ayurdosha::error::AppError;
use ayurdosha::telemetry;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "AyurDosha",
    about = "Assess dosha constitution and seasonal/climate health risk",
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
    /// Score questionnaire answers into a dosha profile
    Quiz(QuizArgs),
    /// List catalog conditions by seasonal risk tier
    Seasonal(SeasonalArgs),
    /// Score current weather into an overall imbalance verdict
    Climate(ClimateArgs),
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
        Command::Quiz(args) => {
            command_config()?;
            run_quiz(args)
        }
        Command::Seasonal(args) => {
            command_config()?;
            run_seasonal(args)
        }
        Command::Climate(args) => run_climate(args, command_config()?.assessment),
    }
}

/// One-shot commands log through the same subscriber as the server.
fn command_config() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config)
}
