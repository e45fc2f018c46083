use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use groundwork::config::Credentials;
use groundwork::logging;
use groundwork::pipeline::{self, RunParams};
use groundwork::preflight;
use groundwork::runner::SystemRunner;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Automate GitHub repo + folder setup + venv + branch", long_about = None)]
struct Cli {
    /// Directory path to create the project in
    #[arg(long)]
    path: String,

    /// GitHub repo name (also becomes root folder)
    #[arg(long)]
    root: String,

    /// GitHub repository description
    #[arg(long, default_value = "")]
    desc: String,

    /// Python executable to use for virtualenv (e.g. python3.10)
    #[arg(long, default_value = "python3")]
    python: String,

    /// Name of the Git branch to create and push to
    #[arg(long, default_value = "task-1")]
    branch: String,
}

fn main() -> ExitCode {
    logging::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => {
            info!("Project setup completed successfully");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    info!("Starting project setup");

    // Credentials are checked before anything touches the network or disk.
    let creds = Credentials::load()?;
    preflight::check_tools(&cli.python)?;

    let params = RunParams {
        base_path: PathBuf::from(shellexpand::tilde(&cli.path).into_owned()),
        repo_name: cli.root,
        description: cli.desc,
        python_exec: cli.python,
        branch: cli.branch,
    };

    pipeline::run(&SystemRunner, &creds, &params)
}
