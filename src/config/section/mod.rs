//! Configuration section definitions.
//!
//! Each module corresponds to a section in `ctalink.toml`:
//!
//! | Module      | TOML Section      | Purpose                              |
//! |-------------|-------------------|--------------------------------------|
//! | `field`     | `[field]`         | Link field flags, types and settings |
//! | `site`      | `[site]`          | Current site                         |
//! | `resources` | `[[resources]]`   | Static resource table                |

mod field;
mod resources;
mod site;

pub use field::FieldConfig;
pub use resources::ResourceTable;
pub use site::SiteSectionConfig;
