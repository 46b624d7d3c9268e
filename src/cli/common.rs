//! Shared setup for link commands.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};

use super::args::{Cli, LinkArgs};
use crate::config::{CONFIG_FILE, LinkConfig, find_config_file};
use crate::core::{Link, LinkContext, RawValue};
use crate::link_type::{SharedRegistry, default_registry};
use crate::log;

/// Loaded config plus the context built from it.
pub struct Session {
    pub config: LinkConfig,
    pub cx: LinkContext,
}

impl Session {
    /// Load the config named on the command line, or search for
    /// `ctalink.toml` upward from cwd. No config file means defaults.
    pub fn open(cli: &Cli) -> Result<Self> {
        let registry = Arc::new(SharedRegistry::new(default_registry()));
        let config = load_config(cli.config.as_deref(), &registry)?;
        let cx = config.context(Arc::clone(&registry));

        crate::debug_do! {
            let snapshot = registry.snapshot();
            let offered = config.field.allowed_types(&snapshot);
            crate::debug!(
                "config";
                "{} registered, field `{}` offers {}",
                plural_count(snapshot.len(), "link type"),
                config.field.handle,
                offered.join(", ")
            );
        }

        Ok(Self { config, cx })
    }

    /// Build a link from command-line arguments with the field's flags.
    ///
    /// The raw value is normalized for the link type, so resource ids
    /// given as plain text become references.
    pub fn link(&self, args: &LinkArgs) -> Link {
        let field = &self.config.field;
        let mut link = field.link(&args.link_type, RawValue::text(&args.value));

        if args.custom_text.is_some() && !link.allow_custom_text {
            log!("warn"; "--custom-text ignored, field does not allow custom text");
        }
        if args.target.is_some() && !link.allow_target {
            log!("warn"; "--target ignored, field does not allow a target");
        }
        if args.class.is_some() && !link.allow_class {
            log!("warn"; "--class ignored, field does not allow a class");
        }
        link.custom_text = args.custom_text.clone();
        link.target = args.target.clone();
        link.class = args.class.clone();

        link.normalized(&self.cx)
    }

    /// Context for `args`, honouring `--site`.
    pub fn context_for(&self, args: &LinkArgs) -> LinkContext {
        match &args.site {
            Some(site) => self.cx.clone().with_current_site(site.clone()),
            None => self.cx.clone(),
        }
    }

    /// Reject keys the registry does not know.
    ///
    /// Links of unknown type degrade silently; on the command line that is
    /// almost always a typo.
    pub fn ensure_known(&self, link_type: &str) -> Result<()> {
        if !self.cx.registry().contains(link_type) {
            let known: Vec<String> = self
                .cx
                .registry()
                .snapshot()
                .keys()
                .map(str::to_owned)
                .collect();
            bail!(
                "unknown link type `{link_type}` (registered: {})",
                known.join(", ")
            );
        }
        Ok(())
    }
}

fn load_config(explicit: Option<&Path>, registry: &SharedRegistry) -> Result<LinkConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("config file `{}` not found", path.display());
            }
            path.to_path_buf()
        }
        None => match find_config_file(Path::new(CONFIG_FILE)) {
            Some(path) => path,
            None => {
                crate::debug!("config"; "no {} found, using defaults", CONFIG_FILE);
                return Ok(LinkConfig::default());
            }
        },
    };

    LinkConfig::load(&path, &registry.snapshot())
        .with_context(|| format!("failed to load `{}`", path.display()))
}

/// `count noun`, with a plural `s` unless count is one.
pub fn plural_count(count: usize, noun: &str) -> String {
    let s = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{s}")
}
