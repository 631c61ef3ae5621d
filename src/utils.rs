pub mod render_chart;
pub mod string_hash;

pub use render_chart::render_chart;
pub use string_hash::{home_slot, string_hash};
