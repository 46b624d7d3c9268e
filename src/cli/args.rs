//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Resolve, validate and render CTA links from the command line
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: search upward for ctalink.toml)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List registered link types by group
    #[command(visible_alias = "t")]
    Types {
        /// Output JSON instead of a table
        #[arg(short, long)]
        json: bool,
    },

    /// Resolve a link and print its text, url and element as JSON
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        link: LinkArgs,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Validate a link value against the field settings
    #[command(visible_alias = "v")]
    Validate {
        #[command(flatten)]
        link: LinkArgs,
    },

    /// Render a link as an anchor tag
    Render {
        #[command(flatten)]
        link: LinkArgs,

        /// Replace the link text
        #[arg(long, conflicts_with = "attrs")]
        text: Option<String>,

        /// Extra attribute (`name=value`, repeatable); `text=...` replaces the link text
        #[arg(short, long = "attr", value_name = "NAME=VALUE", value_parser = parse_attr)]
        attrs: Vec<(String, String)>,
    },

    /// Print the field's input descriptors as JSON
    #[command(visible_alias = "i")]
    Input {
        /// Active link type
        #[arg(requires = "value")]
        link_type: Option<String>,

        /// Active raw value
        value: Option<String>,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

/// A link given on the command line.
#[derive(clap::Args, Debug, Clone)]
pub struct LinkArgs {
    /// Link type key (see `ctalink types`)
    pub link_type: String,

    /// Raw value: text for free text types, an id for resource types
    pub value: String,

    /// Custom link text (needs `allow_custom_text`)
    #[arg(long)]
    pub custom_text: Option<String>,

    /// Link target (needs `allow_target`)
    #[arg(long)]
    pub target: Option<String>,

    /// CSS class (needs `allow_class`)
    #[arg(long)]
    pub class: Option<String>,

    /// Resolve for this site instead of `[site] current`
    #[arg(short, long)]
    pub site: Option<String>,
}

/// Parse `name=value`.
fn parse_attr(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_owned(), value.to_owned()))
        }
        _ => Err(format!("expected NAME=VALUE, got `{s}`")),
    }
}
