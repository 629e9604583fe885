pub mod render;

pub use render::{display_matches, display_plan, format_entry};
