use std::{path::PathBuf, process};

use clap::Parser;
use scaffold::{Census, ContentStore, taxonomy};
use tracing::instrument;

use super::terminal::{Colorize, is_narrow};

#[derive(Debug, Parser, Default)]
#[command(about = "Show entry completeness against the taxonomy")]
pub struct Status {
    /// Suppress headers and format for scripting
    #[arg(long)]
    quiet: bool,
}

impl Status {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let taxonomy = taxonomy::dsm5();
        let store = ContentStore::new(root);
        let census = store.census(&taxonomy);

        if self.quiet {
            println!(
                "complete={} partial={} missing={} strays={}",
                census.complete.len(),
                census.partial.len(),
                census.missing.len(),
                census.strays.len()
            );
        } else {
            Self::output_table(&census);
        }

        // Partial entries break the downstream two-artifact contract.
        if !census.partial.is_empty() {
            process::exit(2);
        }

        Ok(())
    }

    fn output_table(census: &Census) {
        const MAX_LIST: usize = 10;

        println!("Content status");
        println!("{}", "──────────────".dim());

        if is_narrow() {
            println!("Complete: {}", census.complete.len());
            println!("Partial: {}", census.partial.len());
            println!("Missing: {}", census.missing.len());
            println!("Strays: {}", census.strays.len());
        } else {
            println!("{:<10} {}", "Complete", census.complete.len());
            println!("{:<10} {}", "Partial", census.partial.len());
            println!("{:<10} {}", "Missing", census.missing.len());
            println!("{:<10} {}", "Strays", census.strays.len());
        }

        println!();

        if census.partial.is_empty() {
            println!("Partial entries: {} ✅", "0".success());
        } else {
            println!(
                "Partial entries: {} ⚠️",
                census.partial.len().to_string().warning()
            );
            for slug in census.partial.iter().take(MAX_LIST) {
                println!("  • {slug}");
            }
            if census.partial.len() > MAX_LIST {
                println!("  • ... and {} more", census.partial.len() - MAX_LIST);
            }
            println!(
                "{}",
                "Each entry directory must hold metadata.json and index.mdx.".dim()
            );
        }

        if !census.strays.is_empty() {
            println!();
            println!(
                "Stray directories: {} ⚠️",
                census.strays.len().to_string().warning()
            );
            for name in census.strays.iter().take(MAX_LIST) {
                println!("  • {name}");
            }
            println!("{}", "These match no taxonomy entry.".dim());
        }

        if !census.missing.is_empty() {
            println!();
            println!(
                "{}",
                format!(
                    "Run 'scaffold generate' to create the {} missing entries.",
                    census.missing.len()
                )
                .dim()
            );
        }
    }
}
