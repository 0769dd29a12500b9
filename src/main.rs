//! CLI entry point for akasha

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use akasha::content::Language;

#[derive(Parser)]
#[command(name = "akasha")]
#[command(version)]
#[command(about = "A bilingual blog content engine with a generative chat terminal", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List site content
    List {
        /// Type of content to list (post, category)
        #[arg(default_value = "post")]
        r#type: String,

        /// Language for titles
        #[arg(short, long)]
        lang: Option<Language>,
    },

    /// Show a single post by id
    Show {
        /// Post id
        id: String,

        /// Language to display
        #[arg(short, long)]
        lang: Option<Language>,
    },

    /// Create a new post document
    New {
        /// Title of the new post
        title: String,
    },

    /// Ask the chat terminal one question
    Chat {
        /// The question to ask
        query: String,

        /// Language of the consultation
        #[arg(short, long)]
        lang: Option<Language>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "akasha=debug,info"
    } else {
        "akasha=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());
    let akasha = akasha::Akasha::new(&base_dir)?;

    // Per-command --lang falls back to the configured site language
    let site_lang = |lang: Option<Language>| -> Result<Language> {
        match lang {
            Some(lang) => Ok(lang),
            None => akasha.config.language.parse(),
        }
    };

    match cli.command {
        Commands::List { r#type, lang } => {
            akasha::commands::list::run(&akasha, &r#type, site_lang(lang)?)?;
        }

        Commands::Show { id, lang } => {
            akasha::commands::show::run(&akasha, &id, site_lang(lang)?)?;
        }

        Commands::New { title } => {
            tracing::info!("Creating new post: {}", title);
            akasha::commands::new::run(&akasha, &title)?;
        }

        Commands::Chat { query, lang } => {
            akasha::commands::chat::run(&akasha, &query, site_lang(lang)?).await?;
        }
    }

    Ok(())
}
