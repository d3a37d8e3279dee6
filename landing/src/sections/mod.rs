// Landing page sections
// MDDVVM (c)2025

use leptos::prelude::*;
use reveal_engine::RevealConfig;

mod about;
mod culture;
mod explore;
mod footer;
mod hero;
mod releases;

pub use about::About;
pub use culture::Culture;
pub use explore::Explore;
pub use footer::Footer;
pub use hero::Hero;
pub use releases::Releases;

/// Page-wide reveal config, falling back to defaults outside `App`.
fn reveal_config() -> RevealConfig {
    use_context::<RevealConfig>().unwrap_or_default()
}
