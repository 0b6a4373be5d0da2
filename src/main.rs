use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use fieldpath::{init_logging, session_from_config, CodeSink, Config, SaveSlots, BUILD_DATE, VERSION};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Config file (defaults to the platform config directory)
    #[clap(long, value_parser, global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the program generated for a saved path file
    Generate {
        /// Path file (JSON)
        #[clap(value_parser)]
        path: PathBuf,
        /// Override the canvas size stored in the file
        #[clap(long)]
        canvas_size: Option<f64>,
        /// Mirror the path across the vertical centre line first
        #[clap(long)]
        reflect: bool,
        /// Also copy the program to the system clipboard
        #[clap(long)]
        copy: bool,
    },
    /// List the save slots stored in a slot file
    Slots {
        #[clap(value_parser)]
        file: PathBuf,
    },
    /// Write the current configuration (or the defaults) to the config file
    InitConfig,
}

/// Publishes generated code to the system clipboard.
struct ClipboardSink;

impl CodeSink for ClipboardSink {
    fn publish(&mut self, code: &str) -> anyhow::Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("Clipboard unavailable")?;
        clipboard.set_text(code.to_string())?;
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging()?;
    tracing::debug!("fieldpath {} (built {})", VERSION, BUILD_DATE);

    let config_path = match args.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    match args.command {
        Command::Generate {
            path,
            canvas_size,
            reflect,
            copy,
        } => {
            let mut session = session_from_config(&config)?;
            session.load_from_file(&path)?;
            if let Some(size) = canvas_size {
                session
                    .set_canvas_size(size)
                    .with_context(|| format!("Invalid canvas size {}", size))?;
            }
            if reflect {
                session.reflect_vertically()?;
            }

            println!("{}", session.generated_code());

            if copy {
                session.copy_code(&mut ClipboardSink)?;
            }
            for notification in session.take_notifications() {
                eprintln!("{}", notification.message);
            }
        }
        Command::Slots { file } => {
            let slots = SaveSlots::load_from_file(&file)?;
            if slots.is_empty() {
                println!("No saved paths.");
            }
            for slot in slots.iter() {
                println!(
                    "{}  {:<24} {:>3} waypoints  modified {}",
                    slot.id,
                    slot.name,
                    slot.waypoints.len(),
                    slot.modified.format("%Y-%m-%d %H:%M")
                );
            }
        }
        Command::InitConfig => {
            config.save_to_file(&config_path)?;
            println!("{}", config_path.display());
        }
    }

    Ok(())
}
