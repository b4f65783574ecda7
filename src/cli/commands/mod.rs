//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads the
//! configuration once into an [`AppContext`] and routes CLI subcommands to
//! their implementations.

pub mod check;
pub mod context;
pub mod dispatcher;
pub mod explain;
pub mod list;
pub mod platform;

pub use context::AppContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
