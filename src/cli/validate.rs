//! `validate` command: check a link value against the field settings.

use anyhow::{Result, bail};

use super::args::LinkArgs;
use super::common::Session;
use crate::log;

/// Execute validate command
///
/// Fails with the validation message when the value is rejected.
pub fn run_validate(session: &Session, args: &LinkArgs) -> Result<()> {
    session.ensure_known(&args.link_type)?;
    let cx = session.context_for(args);
    let link = session.link(args);

    if let Some(err) = link.validate(&cx, &session.config.field) {
        bail!("{err}");
    }

    if link.is_empty(&cx) {
        log!("valid"; "empty {} link", args.link_type);
    } else {
        log!("valid"; "{}", link.to_url_string(&cx));
    }
    Ok(())
}
