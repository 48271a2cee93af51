//! CLI for harjson.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use harjson_core::har::MimeMatch;
use harjson_core::pipeline::ExtractOptions;
use harjson_core::{config, logging};
use std::path::PathBuf;

use commands::{run_batch, run_catalog, run_extract};

/// Top-level CLI for harjson.
#[derive(Debug, Parser)]
#[command(name = "harjson")]
#[command(about = "harjson: extract JSON responses from HAR captures", long_about = None)]
pub struct Cli {
    /// Log to ~/.local/state/harjson/harjson.log instead of stderr.
    #[arg(long, global = true)]
    pub log_file: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Overrides for the config file's extraction settings.
#[derive(Debug, Clone, Default, Args)]
pub struct ExtractArgs {
    /// MIME filter: "exact" matches only application/json, "contains" also admits parameters.
    #[arg(long, value_name = "MODE")]
    pub mime: Option<MimeMatch>,

    /// Spaces per indent level in the output (0 = compact).
    #[arg(long, value_name = "N")]
    pub indent: Option<usize>,
}

impl ExtractArgs {
    pub fn apply(&self, mut opts: ExtractOptions) -> ExtractOptions {
        if let Some(mime) = self.mime {
            opts.mime = mime;
        }
        if let Some(indent) = self.indent {
            opts.indent = indent;
        }
        opts
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Extract JSON responses from one HAR file into a JSON array.
    Extract {
        /// Path to the HAR file.
        input: PathBuf,
        /// Path of the JSON file to write.
        output: PathBuf,
        #[command(flatten)]
        opts: ExtractArgs,
    },

    /// Extract every *.har file in a folder, one JSON file per capture.
    Batch {
        /// Folder containing HAR files.
        input_dir: PathBuf,
        /// Folder for the JSON files (created if missing).
        output_dir: PathBuf,
        #[command(flatten)]
        opts: ExtractArgs,
    },

    /// Extract a product-catalog capture into flat product rows.
    Catalog {
        /// Path to the HAR file.
        input: PathBuf,
        /// Path of the products JSON file to write.
        output: PathBuf,
        #[command(flatten)]
        opts: ExtractArgs,
    },
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        let cfg = config::load_or_init();
        let to_file = cli.log_file || cfg.as_ref().map(|c| c.log_to_file).unwrap_or(false);
        logging::init_logging(to_file);
        let cfg = cfg.unwrap_or_else(|e| {
            tracing::warn!("config unavailable, using defaults: {:#}", e);
            config::HarJsonConfig::default()
        });
        tracing::debug!("loaded config: {:?}", cfg);
        let base = cfg.extract_options();

        match cli.command {
            CliCommand::Extract {
                input,
                output,
                opts,
            } => run_extract(&input, &output, &opts.apply(base)).await?,
            CliCommand::Batch {
                input_dir,
                output_dir,
                opts,
            } => run_batch(&input_dir, &output_dir, &opts.apply(base)).await?,
            CliCommand::Catalog {
                input,
                output,
                opts,
            } => run_catalog(&input, &output, &opts.apply(base)).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
