use std::process;

use clap::Parser;
use scaffold::taxonomy;
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser, Default)]
#[command(about = "Check the taxonomy definition without writing anything")]
pub struct Validate {}

impl Validate {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self) -> anyhow::Result<()> {
        let taxonomy = taxonomy::dsm5();

        println!(
            "Taxonomy: {} entries across {} categories",
            taxonomy.len(),
            taxonomy.categories().len()
        );

        match taxonomy.check_unique_slugs() {
            Ok(()) => {
                println!("{}", "✅ All slugs are unique.".success());
                Ok(())
            }
            Err(duplicate) => {
                println!("{}", format!("⚠️  {duplicate}").warning());
                println!(
                    "{}",
                    "Duplicate slugs would be silently reported as skips by 'generate'.".dim()
                );
                process::exit(2);
            }
        }
    }
}
