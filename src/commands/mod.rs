//! Command handlers for the mdlstyle CLI.
//!
//! Each subcommand has its own module with a public handler function
//! that `main()` dispatches to.

pub mod check;
pub mod completions;
pub mod explain;
pub mod export;
pub mod fmt;
pub mod import;
pub mod init;
pub mod resolve;
pub mod rules;
