//! chatshell CLI: Command-line interface for the chatshell assistant

use chatshell_engine::{
    deliver_reply, ChatShell, Config, Effect, Responder, ScriptedResponder, ShellAction,
};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_CONFIG_PATH: &str = ".chatshell/config.json";

/// Personal AI assistant chat shell with TUI
#[derive(Parser)]
#[command(name = "chatshell")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Override the simulated reply delay (milliseconds)
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui,

    /// Send messages without the TUI and print the conversation
    Say {
        /// Messages to send, in order
        #[arg(required = true)]
        texts: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let is_tui = matches!(cli.command, None | Some(Commands::Tui));
    init_logging(cli.log_file.as_deref(), cli.debug, is_tui)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            let config = load_config(&cli.config, cli.delay_ms)?;
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(chatshell_tui::run_tui(&config))?;
        }
        Some(Commands::Say { texts, json }) => {
            let config = load_config(&cli.config, cli.delay_ms)?;
            let rt = tokio::runtime::Runtime::new()?;
            let shell = rt.block_on(run_say(&config, &texts));
            print_transcript(&shell, json)?;
        }
        Some(Commands::Config { json }) => {
            let config = load_config(&cli.config, cli.delay_ms)?;
            cmd_config(&config, json)?;
        }
        Some(Commands::Init { force }) => {
            cmd_init(&cli.config, force)?;
        }
    }

    Ok(())
}

/// Install the tracing subscriber.
///
/// The TUI owns the terminal, so it only logs when a log file is given.
fn init_logging(log_file: Option<&Path>, debug: bool, is_tui: bool) -> Result<(), Box<dyn Error>> {
    let default_filter = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if let Some(path) = log_file {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else if !is_tui {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

fn load_config(path: &Path, delay_ms: Option<u64>) -> Result<Config, Box<dyn Error>> {
    let mut config = Config::load_or_default(path)?;
    if let Some(delay) = delay_ms {
        debug!(delay_ms = delay, "Overriding reply delay");
        config.reply_delay_ms = delay;
    }
    Ok(config)
}

/// Submit each text to the active conversation, waiting for every reply.
async fn run_say(config: &Config, texts: &[String]) -> ChatShell {
    let mut shell = ChatShell::new(config);
    let responder: Arc<dyn Responder> =
        Arc::new(ScriptedResponder::new(config.reply_template.clone()));

    for text in texts {
        match shell.dispatch(ShellAction::Submit(text.clone())) {
            Some(Effect::ScheduleReply(pending)) => {
                let reply =
                    deliver_reply(pending, Arc::clone(&responder), config.reply_delay()).await;
                shell.dispatch(ShellAction::ReplyReady(reply));
            }
            None => warn!("Skipping empty message"),
        }
    }

    shell
}

fn print_transcript(shell: &ChatShell, json: bool) -> Result<(), Box<dyn Error>> {
    let Some(conversation) = shell.active() else {
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(conversation)?);
        return Ok(());
    }

    println!("{}", conversation.title);
    println!();
    for message in &conversation.messages {
        println!(
            "[{}] {}: {}",
            message.timestamp.format("%H:%M"),
            message.role.label(),
            message.content
        );
    }
    Ok(())
}

fn cmd_config(config: &Config, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    println!("Configuration");
    println!("=============");
    println!("  reply_delay_ms:         {}", config.reply_delay_ms);
    println!("  title_max_chars:        {}", config.title_max_chars);
    println!("  reply_template:         {}", config.reply_template);
    println!("  greeting:               {}", config.greeting);
    println!("  new_conversation_title: {}", config.new_conversation_title);
    println!("  seed_conversations:     {}", config.seed_conversations);
    println!("  ui.theme:               {:?}", config.ui.theme);
    println!("  ui.icons:               {:?}", config.ui.icons);
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> Result<(), Box<dyn Error>> {
    if path.exists() && !force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )
        .into());
    }

    Config::default().save(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
