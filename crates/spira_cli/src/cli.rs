use std::io::Write;

use eyre::{Context, Result};
use spira::VersionInfo;

/// Spira command-line interface
///
/// If no subcommand is specified, then the release version is printed.
#[derive(Debug, clap::Parser)]
#[command(name = "spira", version = spira::version_str())]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Option<Subcommand>,
}

#[derive(clap::Subcommand, Debug, PartialEq, Eq)]
pub(crate) enum Subcommand {
    /// Print the release version.
    Version {
        /// Output format.
        #[arg(short, long, value_enum, env = "SPIRA_VERSION_FORMAT", default_value_t)]
        format: Format,
    },
}
impl Default for Subcommand {
    fn default() -> Self {
        Self::Version {
            format: Format::default(),
        }
    }
}

/// Output format for the `version` subcommand.
#[derive(clap::ValueEnum, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Format {
    /// Canonical dotted string, such as `0.0.13`
    #[default]
    Text,
    /// Major, minor, and patch numbers separated by spaces
    Triple,
    /// JSON object
    Json,
}

pub(crate) fn exec(subcommand: Subcommand) -> Result<()> {
    exec_to(subcommand, &mut std::io::stdout().lock())
}

fn exec_to(subcommand: Subcommand, out: &mut impl Write) -> Result<()> {
    match subcommand {
        Subcommand::Version { format } => {
            log::debug!("printing version as {format:?}");
            let output = render(&spira::VERSION, format)?;
            writeln!(out, "{output}").context("error writing output")?;
            Ok(())
        }
    }
}

fn render(version: &VersionInfo, format: Format) -> Result<String> {
    Ok(match format {
        Format::Text => version.to_string(),
        Format::Triple => {
            let (major, minor, patch) = version.triple();
            format!("{major} {minor} {patch}")
        }
        Format::Json => {
            serde_json::to_string_pretty(version).context("error serializing version")?
        }
    })
}
