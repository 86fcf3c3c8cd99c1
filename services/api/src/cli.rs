use crate::commands::{run_batch, run_decide, BatchArgs, DecideArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use loan_decision::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Decision Engine",
    about = "Serve loan decisions over HTTP or evaluate requests from the command line",
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
    /// Evaluate loan requests without starting the server
    Loan {
        #[command(subcommand)]
        command: LoanCommand,
    },
}

#[derive(Subcommand, Debug)]
enum LoanCommand {
    /// Decide a single loan request
    Decide(DecideArgs),
    /// Decide every request in a CSV file
    Batch(BatchArgs),
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
        Command::Loan {
            command: LoanCommand::Decide(args),
        } => run_decide(args),
        Command::Loan {
            command: LoanCommand::Batch(args),
        } => run_batch(args),
    }
}
