//! Orienteering CLI - command line front end for terrain maps.
//!
//! The `orienteering` binary loads a map definition and answers commands
//! either from `--command` arguments or from an interactive loop on stdin.

pub mod command;
pub mod config;
pub mod session;

pub use command::Command;
pub use config::Config;
pub use session::{OutputFormat, Session};
