use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use merchant_loader::cli::{extract::ExtractArgs, issue::IssueArgs};
use merchant_loader::models::LoaderConfig;
use merchant_loader::Result;
use std::env;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "merchant-loader")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract merchant listing details from issue submissions", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Project root holding merchant-loader.toml (default: current directory)
    #[arg(short = 'C', long, global = true)]
    root: Option<PathBuf>,

    /// Fence info string of the details block (overrides config)
    #[arg(long, global = true)]
    tag: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract details from a title and body given on the command line
    Extract(ExtractArgs),

    /// Extract details from a stored issue
    Issue(IssueArgs),

    /// List recognized details block keys
    Keys,

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing(level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{}", format!("Error: Failed to create tokio runtime: {}", e).red());
            std::process::exit(1);
        }
    };

    match runtime.block_on(run_async(cli)) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}", format!("Error: {:#}", e).red());
            std::process::exit(1);
        }
    }
}

async fn run_async(cli: Cli) -> Result<bool> {
    let project_root = match cli.root {
        Some(root) => root,
        None => env::current_dir()?,
    };

    let mut config = LoaderConfig::load(&project_root)?;
    if let Some(tag) = cli.tag {
        config.block_tag = tag;
    }

    init_tracing(&config.log_level, cli.verbose);

    match cli.command {
        Commands::Extract(args) => merchant_loader::cli::extract::run(args, &config.block_tag),

        Commands::Issue(args) => {
            merchant_loader::cli::issue::run(args, &config, &project_root).await
        }

        Commands::Keys => {
            merchant_loader::cli::keys::run(&config.block_tag);
            Ok(true)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "merchant-loader", &mut io::stdout());
            Ok(true)
        }
    }
}
