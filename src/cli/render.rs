//! `render` command: print anchor markup.

use std::io::Write;

use anyhow::Result;

use super::args::LinkArgs;
use super::common::Session;
use crate::core::LinkContent;
use crate::host::Attributes;
use crate::log;

/// Execute render command
///
/// An empty link prints nothing. Degraded markup is still printed.
pub fn run_render(
    session: &Session,
    args: &LinkArgs,
    text: Option<&str>,
    attrs: &[(String, String)],
    out: &mut impl Write,
) -> Result<()> {
    session.ensure_known(&args.link_type)?;
    let cx = session.context_for(args);
    let link = session.link(args);

    let content = match text {
        Some(text) => LinkContent::Text(text.to_owned()),
        None if attrs.is_empty() => LinkContent::Default,
        None => LinkContent::Attributes(attrs.iter().cloned().collect::<Attributes>()),
    };

    let Some(markup) = link.render(&cx, content) else {
        log!("warn"; "{} link is empty, nothing to render", args.link_type);
        return Ok(());
    };

    if let Some(failure) = markup.failure() {
        log!("error"; "rendering degraded: {}", failure);
    }
    writeln!(out, "{}", markup.into_string())?;
    Ok(())
}
