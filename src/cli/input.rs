//! `input` command: print the field's input descriptors.

use std::io::Write;

use anyhow::Result;

use super::args::LinkArgs;
use super::common::Session;
use crate::core::Link;

/// Execute input command
///
/// Without an active link no descriptor is selected and all values are empty.
pub fn run_input(
    session: &Session,
    active: Option<(&str, &str)>,
    pretty: bool,
    out: &mut impl Write,
) -> Result<()> {
    let link = match active {
        Some((link_type, value)) => {
            session.ensure_known(link_type)?;
            session.link(&LinkArgs {
                link_type: link_type.to_owned(),
                value: value.to_owned(),
                custom_text: None,
                target: None,
                class: None,
                site: None,
            })
        }
        None => Link::default(),
    };

    let inputs = session.config.field.input_descriptors(&link, &session.cx);
    if pretty {
        serde_json::to_writer_pretty(&mut *out, &inputs)?;
    } else {
        serde_json::to_writer(&mut *out, &inputs)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::tests_support::session;
    use serde_json::Value;

    fn input(session: &Session, active: Option<(&str, &str)>) -> Value {
        let mut out = Vec::new();
        run_input(session, active, false, &mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_nothing_selected() {
        let (_dir, session) = session("[field]\nhandle = \"cta\"\ntypes = [\"url\", \"entry\"]\n");
        let value = input(&session, None);

        let inputs = value.as_array().unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0]["id"], "cta-url");
        assert_eq!(inputs[0]["name"], "cta[url]");
        assert_eq!(inputs[0]["type"], "url");
        assert!(inputs.iter().all(|i| i["selected"] == false && i["value"] == ""));
    }

    #[test]
    fn test_active_resource_value() {
        let (_dir, session) = session("[field]\ntypes = [\"email\", \"entry\"]\n");
        let value = input(&session, Some(("entry", "42")));

        assert_eq!(value[0]["value"], "");
        assert_eq!(value[0]["placeholder"], "test@example.com");
        assert_eq!(value[1]["value"], "42");
        assert_eq!(value[1]["selected"], true);
        assert!(value[1].get("type").is_none());
    }

    #[test]
    fn test_unknown_active_type_fails() {
        let (_dir, session) = session("");
        let mut out = Vec::new();
        assert!(run_input(&session, Some(("fax", "1")), false, &mut out).is_err());
    }
}
