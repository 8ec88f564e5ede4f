use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use confdoc::Document;

/// Inspect and edit INI-style settings files.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Path to the settings file.
    path: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the document as it would be saved.
    Dump,
    /// List section names, one per line. The anonymous section prints as `[]`.
    Sections,
    /// Print the value of a setting, or an empty line if it is missing.
    Get {
        /// Section holding the setting; the anonymous section if omitted.
        #[arg(short, long, default_value = "")]
        section: String,
        key: String,
    },
    /// Set a setting and write the file back.
    Set {
        /// Section holding the setting; the anonymous section if omitted.
        #[arg(short, long, default_value = "")]
        section: String,
        key: String,
        value: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut document = Document::open(&args.path)
        .with_context(|| format!("failed to open {}", args.path.display()))?;

    match args.command {
        Command::Dump => {
            for line in document.dump() {
                println!("{line}");
            }
        }
        Command::Sections => {
            for section in document.sections() {
                println!("[{}]", section.name());
            }
        }
        Command::Get { section, key } => println!("{}", document.get_value(&section, &key)),
        Command::Set {
            section,
            key,
            value,
        } => {
            document.set_value(&section, &key, &value);
            document
                .save(&args.path)
                .with_context(|| format!("failed to save {}", args.path.display()))?;
        }
    }

    Ok(())
}
