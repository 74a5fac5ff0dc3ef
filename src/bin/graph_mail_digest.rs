use std::io::Write;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};

use graph_mail_digest::config::{load_config, resolve_input};
use graph_mail_digest::process_file;
use graph_mail_digest::report::{render_json, render_text, success_line};
use graph_mail_digest::terminal::run_tui;

#[derive(Parser)]
#[command(name = "graph_mail_digest")]
#[command(about = "Plain-text digest of Microsoft Graph mailbox exports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Process an export and print every message
    Print {
        /// JSON export with a top-level "value" array
        file: PathBuf,

        /// Emit the normalized messages as JSON instead of text blocks
        #[arg(long)]
        json: bool,
    },

    /// Browse an export interactively
    Browse {
        /// Export to open (falls back to default_file from the config)
        file: Option<PathBuf>,
    },
}

fn init_logging(default_filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Print { file, json } => {
            init_logging("warn");
            let messages = process_file(&file);

            let out = if json {
                render_json(&messages)? + "\n"
            } else {
                render_text(&messages)
            };
            std::io::stdout().lock().write_all(out.as_bytes())?;
            eprintln!("{}", success_line(messages.len()));
            Ok(())
        }

        Command::Browse { file } => {
            // log output would tear the alternate screen
            init_logging("off");
            let cfg = load_config().map_err(|e| anyhow!("Configuration error: {e}"))?;
            let initial = resolve_input(&cfg, file);
            run_tui(&cfg, initial.as_deref())
        }
    }
}
