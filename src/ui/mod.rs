pub mod details;
pub mod log_table;

pub use details::render_details;
pub use log_table::{LogTable, TableRow};
