//! Contains subcommands for the rollnode CLI.

mod status;
pub use status::{Status, StatusCommand};

mod headers;
pub use headers::{HeaderRow, HeadersCommand};

mod mark_submitted;
pub use mark_submitted::MarkSubmittedCommand;

mod header_id;
pub use header_id::HeaderIdCommand;

mod watch;
pub use watch::WatchCommand;
