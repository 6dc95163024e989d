pub mod format;

pub use format::{extract_summary, format_date, strip_html};
