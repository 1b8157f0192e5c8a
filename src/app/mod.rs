pub mod session;
pub mod shell;

pub use session::{CitySummary, FilterOptions, Notice, NoticeLevel, RouteForm, RouteSession};
pub use shell::{RouteShell, ShellCommand};
