use chrono::Utc;
use clap::{Parser, Subcommand};
use devfolio::config::{self, Config};
use devfolio::store::PortfolioStore;
use devfolio::types::PortfolioData;
use devfolio::{export, github, output, render, sample, validate};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "devfolio")]
#[command(about = "Developer portfolio generator: JSON record in, themed HTML site out")]
#[command(long_about = "\
Developer portfolio generator: JSON record in, themed HTML site out

A portfolio is one JSON record: profile info, social links, project
entries, and a theme selection. Records live in a store directory, one
file per user, and render to a single self-contained index.html.

Typical flow:

  devfolio sample > me.json        # starting-point record
  $EDITOR me.json                  # make it yours
  devfolio save me.json            # validate + store (keyed by userId)
  devfolio render --user <id>      # → dist/index.html
  devfolio render --user <id> --theme dark

Themes: default (Standard), dark (Minimalist Dark), creative-grid
(Creative Grid). Unknown theme ids fall back to the default theme.

Run 'devfolio gen-config' to generate a documented devfolio.toml.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = "devfolio.toml", global = true)]
    config: PathBuf,

    /// Directory of portfolio records (overrides config)
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,

    /// Output directory (overrides config)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// Which record a command operates on.
#[derive(clap::Args)]
#[group(required = true, multiple = false)]
struct SourceArgs {
    /// A stored record, by user id
    #[arg(long)]
    user: Option<String>,

    /// A record read from a JSON file
    #[arg(long)]
    input: Option<PathBuf>,

    /// The built-in sample record
    #[arg(long)]
    sample: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a record file and store it (upsert by userId)
    Save {
        /// Portfolio record JSON file
        file: PathBuf,
    },
    /// Render a record to <output>/index.html
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Theme override (takes precedence over config and the record)
        #[arg(long)]
        theme: Option<String>,
    },
    /// Validate a record without rendering
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// List stored portfolios
    List,
    /// Fetch name/description/language for a GitHub repository URL
    Prefill {
        /// Repository URL, e.g. https://github.com/user/repo
        repo_url: String,
    },
    /// Print the sample record as JSON
    Sample,
    /// List registered themes
    Themes,
    /// Print a stock devfolio.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?;
    let store_dir = cli
        .store_dir
        .unwrap_or_else(|| PathBuf::from(&config.store_dir));
    let output_dir = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output_dir));

    // The one wall-clock read; everything below takes it as a value.
    let now = Utc::now();

    match cli.command {
        Command::Save { file } => {
            let store = PortfolioStore::open(&store_dir)?;
            let content = std::fs::read_to_string(&file)?;
            let mut data: PortfolioData = serde_json::from_str(&content)?;

            let issues = validate::validate(&data);
            if !issues.is_empty() {
                output::print_lines(&output::format_check_report(&issues));
                return Err("record has validation issues".into());
            }

            data.last_updated_at = now;
            store.save(&data)?;
            println!("Saved {} → {}", data.user_id, store.root().display());
        }
        Command::Render { source, theme } => {
            let store = PortfolioStore::open(&store_dir)?;
            let data = load_source(&store, &source)?;

            // Precedence: --theme flag, then config override, then the record.
            let theme_id = theme
                .as_deref()
                .or(config.render.theme.as_deref())
                .unwrap_or(&data.theme.id);
            let entry = render::theme_for(theme_id);

            let html = entry.render(&data, now);
            let written = export::export_site(&html, &output_dir)?;
            output::print_lines(&output::format_render_summary(&data, entry, &written));
        }
        Command::Check { source } => {
            let store = PortfolioStore::open(&store_dir)?;
            let data = load_source(&store, &source)?;
            let issues = validate::validate(&data);
            output::print_lines(&output::format_check_report(&issues));
            if !issues.is_empty() {
                return Err(format!("{} validation issue(s)", issues.len()).into());
            }
        }
        Command::List => {
            let store = PortfolioStore::open(&store_dir)?;
            output::print_lines(&output::format_store_list(&store.list()?));
        }
        Command::Prefill { repo_url } => {
            let repo = github::parse_repo_url(&repo_url)?;
            let client =
                github::GithubClient::new(&config.github.api_base, &config.github.user_agent)?;
            let summary = client.fetch_repo(&repo)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Command::Sample => {
            println!(
                "{}",
                serde_json::to_string_pretty(&sample::sample_portfolio())?
            );
        }
        Command::Themes => {
            output::print_lines(&output::format_theme_list());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Resolve a [`SourceArgs`] selection into a record.
fn load_source(
    store: &PortfolioStore,
    source: &SourceArgs,
) -> Result<PortfolioData, Box<dyn std::error::Error>> {
    if source.sample {
        return Ok(sample::sample_portfolio());
    }
    if let Some(user) = &source.user {
        return match store.load(user)? {
            Some(data) => Ok(data),
            None => Err(format!("no stored portfolio for user {user:?}").into()),
        };
    }
    if let Some(path) = &source.input {
        let content = std::fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&content)?);
    }
    Err("one of --user, --input, --sample is required".into())
}
