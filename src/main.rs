mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use markpad::app::AppState;
use markpad::storage::get_data_dir;

#[derive(Parser)]
#[command(name = "markpad", version, about = "Markdown editor and prompt workbench")]
struct Cli {
    /// Data directory (overrides MARKPAD_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Plan management
    Plans {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Prompt templates
    Templates {
        #[command(subcommand)]
        command: TemplateCommands,
    },
    /// Send a prompt to a provider
    Ask {
        /// Prompt text, or `-` to read it from stdin
        prompt: String,
        /// groq or openrouter
        #[arg(long, short, default_value = "groq")]
        provider: String,
        /// Model id (defaults to the configured model)
        #[arg(long, short)]
        model: Option<String>,
        /// Don't record the response in the history
        #[arg(long)]
        no_save: bool,
    },
    /// List models a provider offers
    Models {
        /// groq or openrouter (omit for both)
        #[arg(long, short)]
        provider: Option<String>,
    },
    /// Saved responses
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Markdown documents
    Md {
        #[command(subcommand)]
        command: MdCommands,
    },
    /// Settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// List all plans
    List,
    /// Show one plan
    Show { id: String },
    /// Create a plan
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long, default_value_t = 0.0)]
        price: f64,
    },
    /// Change a plan's fields
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        price: Option<f64>,
    },
    /// Delete a plan
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum TemplateCommands {
    /// List templates
    List {
        /// Only this category
        #[arg(long, short)]
        category: Option<String>,
        /// Only favorites
        #[arg(long, short)]
        favorites: bool,
    },
    /// List categories
    Categories,
    /// Show a template and its variables
    Show { id: String },
    /// Fill a template's variables
    Fill {
        id: String,
        /// Variable assignment, `name=value` (repeatable)
        #[arg(long = "var")]
        vars: Vec<String>,
        /// Send the filled prompt to this provider
        #[arg(long)]
        send: Option<String>,
        /// Model for --send
        #[arg(long, short)]
        model: Option<String>,
    },
    /// Toggle a template's favorite flag
    Favorite { id: String },
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List saved responses, newest first
    List {
        #[arg(long, short, default_value_t = 20)]
        limit: usize,
    },
    /// Show a saved response
    Show { id: String },
    /// Delete a saved response
    Delete { id: String },
    /// Delete every saved response
    Clear,
}

#[derive(Subcommand)]
pub enum MdCommands {
    /// Create a document with the welcome content
    New {
        /// File name (defaults to the configured document name)
        #[arg(long)]
        name: Option<String>,
        /// Directory to create it in
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Apply a toolbar action to a byte range of a file
    Format {
        file: PathBuf,
        /// bold, italic, heading1-3, quote, code, codeblock, link, image, list, numbered-list
        action: String,
        /// Selection start (defaults to end of file)
        #[arg(long)]
        start: Option<usize>,
        /// Selection end (defaults to start)
        #[arg(long)]
        end: Option<usize>,
    },
    /// Render a file to HTML
    Preview {
        file: PathBuf,
        /// Write to this file instead of stdout
        #[arg(long, short)]
        out: Option<PathBuf>,
        /// Emit a full HTML page
        #[arg(long)]
        standalone: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective settings
    Show,
    /// Print the data directory
    Path,
    /// Store an API key
    SetKey { provider: String, key: String },
    /// Set a provider's default model
    SetModel { provider: String, model: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // -v wins over RUST_LOG
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => get_data_dir().context("locating data directory")?,
    };
    let mut app = AppState::open(&data_dir);

    match cli.command {
        Commands::Plans { command } => commands::plans(&app, command),
        Commands::Templates { command } => commands::templates(&app, command).await,
        Commands::Ask {
            prompt,
            provider,
            model,
            no_save,
        } => {
            if no_save {
                app.settings.save_responses = false;
            }
            commands::ask(&app, &provider, &prompt, model.as_deref()).await
        }
        Commands::Models { provider } => commands::models(&app, provider.as_deref()).await,
        Commands::History { command } => commands::history(&app, command),
        Commands::Md { command } => commands::markdown(&app, command),
        Commands::Config { command } => commands::config(&mut app, command),
    }
}
