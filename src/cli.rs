use std::path::{Path, PathBuf};

mod status;
mod terminal;
mod validate;

use clap::ArgAction;
use scaffold::{Config, ContentStore, Reporter, Slug, Summary, taxonomy};
use status::Status;
use terminal::Colorize;
use tracing::instrument;
use validate::Validate;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the root of the content directory
    #[arg(short, long, default_value = "content/conditions", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::Generate(Generate::default()))
            .run(self.root)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Scaffold metadata and document stubs for every taxonomy entry (default)
    Generate(Generate),

    /// Compare the content directory against the taxonomy
    Status(Status),

    /// Check the taxonomy definition without writing anything
    Validate(Validate),
}

impl Command {
    fn run(self, root: PathBuf) -> anyhow::Result<()> {
        match self {
            Self::Generate(command) => command.run(root)?,
            Self::Status(command) => command.run(root)?,
            Self::Validate(command) => command.run()?,
        }
        Ok(())
    }
}

/// Loads the scaffold configuration from the content root, falling back
/// to defaults when no usable config file is present.
fn load_config(root: &Path) -> Config {
    let path = root.join("scaffold.toml");
    Config::load(&path).unwrap_or_else(|e| {
        tracing::debug!("Failed to load config: {e}");
        Config::default()
    })
}

/// A [`Reporter`] that narrates progress to the console.
#[derive(Debug, Default)]
struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn category_started(&mut self, name: &str, entries: usize) {
        println!();
        println!("Processing category: {name} ({entries} entries)");
    }

    fn entry_created(&mut self, slug: &Slug) {
        println!("  {} {slug}", "✅ Created".success());
    }

    fn entry_skipped(&mut self, slug: &Slug) {
        println!("  ⏭️  Skipped {slug} {}", "(already exists)".dim());
    }
}

#[derive(Debug, Default, clap::Parser)]
pub struct Generate {}

impl Generate {
    #[instrument(level = "debug", skip(self))]
    fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let config = load_config(&root);
        let taxonomy = taxonomy::dsm5();
        let store = ContentStore::new(root);

        let summary = store.scaffold(&taxonomy, &config, &mut ConsoleReporter)?;
        Self::print_summary(&summary);

        Ok(())
    }

    fn print_summary(summary: &Summary) {
        println!();
        println!("{}", "━".repeat(60).dim());
        println!("Scaffold summary");
        println!("{}", "━".repeat(60).dim());
        println!("Total entries in taxonomy: {}", summary.total);
        println!("Created: {}", summary.created.to_string().success());
        println!(
            "Skipped (already exist): {}",
            summary.skipped.to_string().dim()
        );
        println!();

        println!("Category counts:");
        for (name, count) in &summary.categories {
            println!("  {name}: {count}");
        }
    }
}

#[cfg(test)]
mod tests {
    use scaffold::{NullReporter, Taxonomy};
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn generate_run_scaffolds_the_builtin_taxonomy() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().join("conditions");

        Generate::default()
            .run(root.clone())
            .expect("generate should succeed");

        assert!(root.join("panic-disorder").join("metadata.json").exists());
        assert!(root.join("schizophrenia").join("index.mdx").exists());
    }

    #[test]
    fn generate_run_is_idempotent() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().join("conditions");

        Generate::default().run(root.clone()).unwrap();

        let taxonomy = taxonomy::dsm5();
        let store = ContentStore::new(root);
        let summary = store
            .scaffold(&taxonomy, &Config::default(), &mut NullReporter)
            .unwrap();

        assert_eq!(summary.created, 0);
        assert_eq!(summary.skipped, summary.total);
    }

    #[test]
    fn load_config_falls_back_to_defaults() {
        let tmp = tempdir().unwrap();

        assert_eq!(load_config(tmp.path()), Config::default());
    }

    #[test]
    fn load_config_reads_scaffold_toml() {
        let tmp = tempdir().unwrap();
        std::fs::write(
            tmp.path().join("scaffold.toml"),
            "_version = \"1\"\nlocale = \"en-GB\"\n",
        )
        .unwrap();

        assert_eq!(load_config(tmp.path()).locale, "en-GB");
    }

    #[test]
    fn generate_run_respects_pre_existing_entries() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().join("conditions");

        let existing = root.join("panic-disorder");
        std::fs::create_dir_all(&existing).unwrap();
        std::fs::write(existing.join("sentinel.txt"), "hand-authored").unwrap();

        Generate::default().run(root).unwrap();

        assert_eq!(
            std::fs::read_to_string(existing.join("sentinel.txt")).unwrap(),
            "hand-authored"
        );
        assert!(!existing.join("metadata.json").exists());
    }

    #[test]
    fn builtin_taxonomy_is_usable_from_the_cli() {
        let taxonomy: Taxonomy = taxonomy::dsm5();
        assert!(!taxonomy.is_empty());
    }
}
