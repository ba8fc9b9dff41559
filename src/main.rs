//! lazypr - CLI entry point.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lazypr::Config;
use lazypr::create::{CreateOptions, CreateOutcome, prefill, run_create};
use lazypr::github::{GhCli, GhClient, check_gh_installed};
use lazypr::reviewers::ReviewerStore;

/// Create GitHub pull requests with a pre-filled title, body and reviewers.
#[derive(Parser, Debug)]
#[command(name = "lazypr")]
#[command(about = "Create GitHub pull requests pre-filled from commit history")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    create: CreateArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactively create a pull request (default)
    Create(CreateArgs),

    /// Print the pre-filled title and body for a branch range
    Compose {
        /// Base branch
        #[arg(long)]
        base: String,

        /// Head branch
        #[arg(long)]
        head: String,

        /// Repository as owner/name (defaults to the current directory's repository)
        #[arg(long)]
        repo: Option<String>,
    },

    /// Show or change the reviewers remembered for a repository
    Reviewers {
        #[command(subcommand)]
        action: ReviewersAction,
    },
}

#[derive(Args, Debug, Default)]
struct CreateArgs {
    /// Repository as owner/name (defaults to the current directory's repository)
    #[arg(long)]
    repo: Option<String>,

    /// Preselect "draft" in the draft prompt
    #[arg(long)]
    draft: bool,

    /// Show the summary without creating the pull request
    #[arg(long)]
    dry_run: bool,
}

#[derive(Subcommand, Debug)]
enum ReviewersAction {
    /// Print the reviewers saved for a repository, one per line
    Get {
        /// Repository as owner/name
        repo: String,
    },

    /// Replace the reviewers saved for a repository
    Set {
        /// Repository as owner/name
        repo: String,

        /// Reviewer logins
        logins: Vec<String>,
    },
}

impl From<CreateArgs> for CreateOptions {
    fn from(args: CreateArgs) -> Self {
        Self {
            repo: args.repo,
            draft: args.draft,
            dry_run: args.dry_run,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::from_env();

    match cli.command {
        None => create(cli.create, &config).await,
        Some(Command::Create(args)) => create(args, &config).await,
        Some(Command::Compose { base, head, repo }) => {
            compose_range(&base, &head, repo.as_deref(), &config).await
        }
        Some(Command::Reviewers { action }) => reviewers(action, &config),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn gh_client(config: &Config) -> GhClient<GhCli> {
    GhClient::new(GhCli::new(config.gh_timeout))
}

async fn create(args: CreateArgs, config: &Config) -> Result<()> {
    check_gh_installed(config.gh_timeout)
        .await
        .context("GitHub CLI is required")?;

    let store = config
        .reviewer_store()
        .context("Failed to locate the reviewers file")?;

    let outcome = run_create(args.into(), &gh_client(config), &store, &config.linker())
        .await
        .context("Failed to create pull request")?;

    match outcome {
        CreateOutcome::Created(url) => println!("Created {}", url),
        CreateOutcome::DryRun => {
            println!();
            println!("Dry run complete. No pull request created.");
        }
        CreateOutcome::Aborted => println!("Aborted"),
    }

    Ok(())
}

async fn compose_range(base: &str, head: &str, repo: Option<&str>, config: &Config) -> Result<()> {
    check_gh_installed(config.gh_timeout)
        .await
        .context("GitHub CLI is required")?;

    let client = gh_client(config);
    let repo = client
        .repo_info(repo)
        .await
        .context("Failed to load repository information")?;

    let result = prefill(&client, &repo, base, head, &config.linker())
        .await
        .context("Failed to pre-fill pull request")?;

    println!("{}", result.title);
    println!();
    print!("{}", result.body);

    Ok(())
}

fn reviewers(action: ReviewersAction, config: &Config) -> Result<()> {
    let store = config
        .reviewer_store()
        .context("Failed to locate the reviewers file")?;

    match action {
        ReviewersAction::Get { repo } => {
            let saved = store.get(&repo).context("Failed to read saved reviewers")?;
            for login in saved {
                println!("{}", login);
            }
        }
        ReviewersAction::Set { repo, logins } => {
            store
                .set(&repo, &logins)
                .context("Failed to save reviewers")?;
            println!("Saved {} reviewer(s) for {}", logins.len(), repo);
        }
    }

    Ok(())
}
