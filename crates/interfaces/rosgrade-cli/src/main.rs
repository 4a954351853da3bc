use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use rosgrade_cli::{commands, exit_code, CliScenario, RunOptions};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about = "Headless ROS 2 submission grader")]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the code check on a zipped package
    Validate {
        path: Utf8PathBuf,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Run the code check, then the simulation if the check passed
    Grade {
        path: Utf8PathBuf,
        #[command(flatten)]
        run: RunArgs,
    },
}

#[derive(Args)]
struct RunArgs {
    #[arg(long, value_enum, default_value_t = CliScenario::Pass, env = "ROSGRADE_SCENARIO")]
    scenario: CliScenario,
    #[arg(long, env = "ROSGRADE_DELAY_MS", help = "Mock latency per call")]
    delay_ms: Option<u64>,
    #[arg(long, help = "Print the outcome as JSON")]
    json: bool,
}

impl From<RunArgs> for RunOptions {
    fn from(a: RunArgs) -> Self {
        RunOptions {
            scenario: a.scenario,
            delay_ms: a.delay_ms,
            json: a.json,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let state = match cli.command {
        Commands::Validate { path, run } => commands::cmd_validate(path, run.into()).await?,
        Commands::Grade { path, run } => commands::cmd_grade(path, run.into()).await?,
    };

    let code = exit_code(&state);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
