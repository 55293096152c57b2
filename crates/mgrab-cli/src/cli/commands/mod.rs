//! CLI command handlers. Each command is in its own file for clarity.

mod completions;
mod get;
mod list;
mod pick;

pub use completions::run_completions;
pub use get::run_get;
pub use list::run_list;
pub use pick::run_pick;
