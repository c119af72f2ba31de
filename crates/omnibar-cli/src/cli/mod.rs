//! CLI for omnibar input classification.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use omnibar_core::config;

use commands::{
    run_classify, run_completions, run_favicon, run_hostname, run_man, run_normalize,
    run_origin, run_patterns, run_pdf, run_punycode, run_view_source,
};

/// Top-level CLI for omnibar.
#[derive(Debug, Parser)]
#[command(name = "omnibar")]
#[command(about = "Classify and normalize address-bar input into URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Decide whether input is a navigable URL or free text.
    Classify {
        /// Raw address-bar input.
        input: String,
        /// Emit a JSON report instead of a bare verdict.
        #[arg(long)]
        json: bool,
    },

    /// Normalize input into an absolute URL string.
    Normalize {
        /// Raw address-bar input.
        input: String,
    },

    /// Print the wildcard hostname patterns matching a URL's host.
    Patterns {
        /// URL whose host to expand.
        url: String,
        /// Emit a JSON array instead of one pattern per line.
        #[arg(long)]
        json: bool,
    },

    /// Print a URL's host.
    Hostname {
        /// URL to inspect.
        url: String,
        /// Print the hostname without its port.
        #[arg(long)]
        exclude_port: bool,
    },

    /// Print a URL's origin.
    Origin {
        /// URL to inspect.
        url: String,
    },

    /// Convert a URL's hostname to its ASCII (punycode) form.
    Punycode {
        /// URL to convert.
        url: String,
    },

    /// Wrap a URL for source display, or unwrap one.
    ViewSource {
        /// URL to wrap or unwrap.
        url: String,
        /// Strip the view-source: prefix instead of adding it.
        #[arg(long)]
        unwrap: bool,
    },

    /// Rewrite a PDF URL to the viewer extension, or back.
    Pdf {
        /// URL to rewrite.
        url: String,
        /// Recover the original URL from a viewer extension URL.
        #[arg(long)]
        unwrap: bool,
    },

    /// Print the default favicon URL for a URL.
    Favicon {
        /// URL to inspect.
        url: String,
    },

    /// Generate shell completions on stdout.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },

    /// Render the man page on stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Classify { input, json } => run_classify(&input, json)?,
            CliCommand::Normalize { input } => run_normalize(&input),
            CliCommand::Patterns { url, json } => run_patterns(&url, json)?,
            CliCommand::Hostname { url, exclude_port } => run_hostname(&url, exclude_port)?,
            CliCommand::Origin { url } => run_origin(&url)?,
            CliCommand::Punycode { url } => run_punycode(&url),
            CliCommand::ViewSource { url, unwrap } => run_view_source(&url, unwrap)?,
            CliCommand::Pdf { url, unwrap } => run_pdf(&url, unwrap, &cfg),
            CliCommand::Favicon { url } => run_favicon(&url)?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}
