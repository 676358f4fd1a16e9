//! # dgsbot — DGS-Pay API documentation chatbot
//!
//! Rule-based FAQ responder: user text is matched against a static table of
//! keyword patterns and answered with a pre-authored documentation snippet,
//! with a generic fallback when nothing matches. No model, no network.
//!
//! Usage:
//!   dgsbot                      # interactive chat session
//!   dgsbot ask "webhook secret" # one-shot answer
//!   dgsbot topics               # list knowledge base topics

mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dgsbot_core::BotConfig;
use dgsbot_knowledge::KnowledgeBase;
use dgsbot_matcher::Matcher;
use rand::Rng;
use std::io::Write;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dgsbot",
    version,
    about = "💬 dgsbot — DGS-Pay API documentation assistant"
)]
struct Cli {
    /// Config file path (default: ~/.dgsbot/config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// TOML knowledge table overriding the builtin DGS-Pay docs
    #[arg(short, long)]
    knowledge: Option<String>,

    /// Disable the simulated typing delay
    #[arg(long)]
    no_delay: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive chat session (default)
    Chat,
    /// Ask a single question and print the answer
    Ask {
        /// The question to answer
        question: String,
        /// Print the raw payload without terminal styling
        #[arg(long)]
        raw: bool,
    },
    /// List knowledge base topics and entry counts
    Topics,
}

fn expand_path(p: &str) -> String {
    shellexpand::tilde(p).to_string()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "dgsbot=debug" } else { "dgsbot=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let config = match &cli.config {
        Some(path) => BotConfig::load_from(Path::new(&expand_path(path)))?,
        None => BotConfig::load()?,
    };

    // A malformed knowledge base is an operator problem; fail at startup,
    // never per query.
    let kb = load_knowledge(&cli, &config)?;
    tracing::debug!(
        "Knowledge base ready: {} entries across {} topics",
        kb.len(),
        kb.topics().len()
    );
    let matcher = Matcher::new(kb);

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => chat(&matcher, &config, cli.no_delay).await,
        Command::Ask { question, raw } => {
            let reply = matcher.respond(&question);
            if raw {
                println!("{reply}");
            } else {
                println!("{}", render::render(reply));
            }
            Ok(())
        }
        Command::Topics => {
            let kb = matcher.knowledge();
            for topic in kb.topics() {
                let count = kb.entries().iter().filter(|e| e.topic == topic).count();
                println!("  {topic} ({count})");
            }
            println!("📚 {} topics, {} entries", kb.topics().len(), kb.len());
            Ok(())
        }
    }
}

fn load_knowledge(cli: &Cli, config: &BotConfig) -> Result<KnowledgeBase> {
    let path = cli.knowledge.clone().or_else(|| config.knowledge_path.clone());
    match path {
        Some(p) => {
            let expanded = expand_path(&p);
            tracing::info!("Loading knowledge table from {expanded}");
            Ok(KnowledgeBase::load_from(Path::new(&expanded))?)
        }
        None => Ok(KnowledgeBase::load()?),
    }
}

async fn chat(matcher: &Matcher, config: &BotConfig, no_delay: bool) -> Result<()> {
    println!("💬 dgsbot — DGS-Pay API documentation assistant");
    println!("   Ask about authentication, payments, webhooks, or errors.");
    println!("   Type 'exit' to leave.\n");

    let stdin = std::io::stdin();
    loop {
        print!("you › ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if matches!(message, "exit" | "quit") {
            break;
        }

        // Simulated thinking time — presentation only, the matcher itself
        // answers synchronously.
        if config.ui.typing_delay && !no_delay {
            let lo = config.ui.typing_delay_min_ms.min(config.ui.typing_delay_max_ms);
            let hi = config.ui.typing_delay_min_ms.max(config.ui.typing_delay_max_ms);
            let wait = rand::thread_rng().gen_range(lo..=hi);
            tokio::time::sleep(std::time::Duration::from_millis(wait)).await;
        }

        let reply = match matcher.find(message) {
            Some(entry) => {
                tracing::debug!("Matched topic '{}'", entry.topic);
                entry.response.as_str()
            }
            None => matcher.respond(message),
        };
        println!("\n🤖 dgsbot:\n{}", render::render(reply));
    }

    println!("👋 Bye!");
    Ok(())
}
