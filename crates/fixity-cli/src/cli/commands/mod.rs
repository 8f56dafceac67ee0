//! CLI command handlers. Each command is in its own file.

mod audit;
mod check;
mod completions;
mod digest;
mod man;

pub use audit::run_audit;
pub use check::run_check;
pub use completions::run_completions;
pub use digest::run_digest;
pub use man::run_man;
