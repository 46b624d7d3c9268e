//! `resolve` command: print what a link resolves to.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use super::args::LinkArgs;
use super::common::Session;
use crate::host::ResourceHandle;

/// Everything a template can ask a link for.
#[derive(Debug, Serialize)]
pub struct Resolution {
    #[serde(rename = "type")]
    pub link_type: String,
    pub text: String,
    pub url: Option<String>,
    pub target: Option<String>,
    pub class: Option<String>,
    pub empty: bool,
    pub element: Option<ResourceHandle>,
}

/// Execute resolve command
pub fn run_resolve(
    session: &Session,
    args: &LinkArgs,
    pretty: bool,
    out: &mut impl Write,
) -> Result<()> {
    session.ensure_known(&args.link_type)?;
    let cx = session.context_for(args);
    let link = session.link(args);

    let resolution = Resolution {
        link_type: link.link_type.clone(),
        text: link.text(&cx),
        url: link.url(&cx),
        target: link.target().map(str::to_owned),
        class: link.class().map(str::to_owned),
        empty: link.is_empty(&cx),
        element: link.element(&cx),
    };

    if pretty {
        serde_json::to_writer_pretty(&mut *out, &resolution)?;
    } else {
        serde_json::to_writer(&mut *out, &resolution)?;
    }
    writeln!(out)?;
    Ok(())
}
