use crate::demo::{run_benchmark_report, run_demo, BenchmarkReportArgs, DemoArgs};
use crate::server;
use carebench::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Carebench Scoring Service",
    about = "Run the facility evaluation scoring service and benchmark reports from the command line",
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
    /// Compare facility metrics against their benchmark targets
    Benchmarks {
        #[command(subcommand)]
        command: BenchmarkCommand,
    },
    /// Run an end-to-end CLI demo covering assessment intake and scoring
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum BenchmarkCommand {
    /// Render a tolerance-band status report for the tracked metrics
    Report(BenchmarkReportArgs),
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
        Command::Benchmarks {
            command: BenchmarkCommand::Report(args),
        } => run_benchmark_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
