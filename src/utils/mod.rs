pub mod chunking;
pub mod markdown;

pub use chunking::{segment_count, split_segments};
pub use markdown::render_html;
