//! Command-line interface module.
//!
//! | Command    | Purpose                                          |
//! |------------|--------------------------------------------------|
//! | `types`    | Registered link types by group                   |
//! | `resolve`  | Text, url, target, emptiness and element as JSON |
//! | `validate` | Validation message, non-zero exit when invalid   |
//! | `render`   | Anchor markup                                    |
//! | `input`    | Input descriptors of the configured field        |

mod args;
pub mod common;
pub mod input;
pub mod render;
pub mod resolve;
pub mod types;
pub mod validate;

pub use args::{Cli, Commands, LinkArgs};

use std::io::{Write, stdout};

use anyhow::Result;

use common::Session;

/// Run the parsed command, writing command output to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let session = Session::open(cli)?;
    let mut out = stdout().lock();

    match &cli.command {
        Commands::Types { json } => types::run_types(&session, *json, &mut out)?,
        Commands::Resolve { link, pretty } => {
            resolve::run_resolve(&session, link, *pretty, &mut out)?
        }
        Commands::Validate { link } => validate::run_validate(&session, link)?,
        Commands::Render { link, text, attrs } => {
            render::run_render(&session, link, text.as_deref(), attrs, &mut out)?
        }
        Commands::Input {
            link_type,
            value,
            pretty,
        } => {
            let active = link_type.as_deref().zip(value.as_deref());
            input::run_input(&session, active, *pretty, &mut out)?
        }
    }

    out.flush()?;
    Ok(())
}
