use crate::commands::{run_draft, run_guidance, DraftArgs, GuidanceArgs};
use crate::server;
use civic_draft::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Civic Draft",
    about = "Draft RTI applications and grievance letters, or serve the drafting API",
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
    /// Generate a draft from a JSON request and print it
    Draft(DraftArgs),
    /// Print filing guidance for a document type and state
    Guidance(GuidanceArgs),
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
        Command::Draft(args) => run_draft(args).await,
        Command::Guidance(args) => run_guidance(args),
    }
}
