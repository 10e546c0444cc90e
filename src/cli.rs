use std::path::PathBuf;

use anyhow::Context;
use specgraph::{SpecFileLoader, storage::dot};
use tracing::{instrument, level_filters::LevelFilter};

/// Generate a DOT file describing the dependencies among RPM spec files.
#[derive(Debug, clap::Parser)]
#[command(about)]
pub struct Cli {
    /// The DOT file to write
    #[arg(short, long, value_name = "FILE", value_parser = parse_output)]
    output: PathBuf,

    /// Spec files to read, in order
    #[arg(value_name = "SPEC_FILE")]
    spec_files: Vec<PathBuf>,
}

fn parse_output(s: &str) -> Result<PathBuf, String> {
    if s.is_empty() {
        return Err("Please provide --output option".to_string());
    }
    Ok(PathBuf::from(s))
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging();
        self.generate()
    }

    #[instrument(skip(self), fields(output = %self.output.display(), inputs = self.spec_files.len()))]
    fn generate(self) -> anyhow::Result<()> {
        let graph = specgraph::build(&SpecFileLoader, &self.spec_files)?;

        dot::save(&self.output, &graph)
            .with_context(|| format!("failed to write DOT file '{}'", self.output.display()))?;

        tracing::debug!(edges = graph.len(), "dependency graph written");
        Ok(())
    }

    fn setup_logging() {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let filter = tracing_subscriber::EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
