//! Color palette for revscope's TUI.
//!
//! Colors are grouped into neutrals (base/mantle/crust/surfaces),
//! overlays/subtexts, and accents for highlighting and sentiment tiers.

/// Built-in palette and tier accents.
mod palette;
/// Theme type definitions.
mod types;

pub use palette::{theme, tier_color};
pub use types::Theme;
