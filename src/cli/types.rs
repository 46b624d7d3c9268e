//! `types` command: list registered link types.

use std::io::Write;

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::common::{Session, plural_count};
use crate::debug;

#[derive(Debug, Serialize)]
struct TypeGroup {
    group: String,
    types: Vec<TypeEntry>,
}

#[derive(Debug, Serialize)]
struct TypeEntry {
    key: String,
    name: String,
    offered: bool,
}

/// Execute types command
pub fn run_types(session: &Session, json: bool, out: &mut impl Write) -> Result<()> {
    let cx = &session.cx;
    let registry = cx.registry().snapshot();
    let offered = session.config.field.allowed_types(&registry);

    let groups: Vec<TypeGroup> = registry
        .groups()
        .into_iter()
        .map(|(group, keys)| TypeGroup {
            group: cx.translate(crate::host::LINK_DOMAIN, group, &[]),
            types: keys
                .into_iter()
                .filter_map(|key| {
                    let link_type = registry.get(key)?;
                    Some(TypeEntry {
                        key: key.to_owned(),
                        name: link_type.display_name(cx),
                        offered: offered.iter().any(|k| k == key),
                    })
                })
                .collect(),
        })
        .collect();

    debug!("types"; "{} registered", plural_count(registry.len(), "link type"));

    if json {
        serde_json::to_writer_pretty(&mut *out, &groups)?;
        writeln!(out)?;
        return Ok(());
    }

    let width = registry.keys().map(str::len).max().unwrap_or(0);
    for group in &groups {
        writeln!(
            out,
            "{}",
            group
                .group
                .if_supports_color(Stream::Stdout, |g| g.bold())
        )?;
        for entry in &group.types {
            let marker = if entry.offered { " " } else { "-" };
            writeln!(out, "{marker} {:<width$}  {}", entry.key, entry.name)?;
        }
    }
    Ok(())
}
