//! # Veldra Commands - Text-Command Protocol Layer
//!
//! Turns a raw line of player/operator input into a validated, authorized
//! invocation of a registered handler:
//!
//! ```text
//! raw line -> prefix check -> name/args split -> tokenize -> registry lookup
//!          -> access check -> handler invocation -> observer fan-out
//! ```
//!
//! Command semantics are opaque to this crate; handlers are callbacks
//! supplied by other subsystems at registration time. The layer decides
//! whether a handler may run and runs it, nothing more.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use veldra_commands::{CommandDispatcher, CommandInvocation, CommandRegistry};
//! use veldra_core::{AccessLevel, CommandConfig, DispatchNotice, Invoker};
//!
//! struct Session;
//! impl Invoker for Session {
//!     fn name(&self) -> &str { "admin" }
//!     fn access_level(&self) -> AccessLevel { AccessLevel::Administrator }
//!     fn deliver_notice(&self, _notice: DispatchNotice) {}
//! }
//!
//! let registry = Arc::new(CommandRegistry::new());
//! registry.register("shutdown", AccessLevel::Administrator, |_inv: &CommandInvocation<'_>| {
//!     // ... ask the world loop to stop ...
//!     Ok(())
//! });
//!
//! let dispatcher = CommandDispatcher::new(registry, CommandConfig::default());
//! assert!(dispatcher.handle(&Session, None, "[shutdown now"));
//! assert!(!dispatcher.handle(&Session, None, "hello everyone"));
//! ```

pub mod dispatch;
pub mod observer;
pub mod registry;
pub mod tokenize;

pub use dispatch::CommandDispatcher;
pub use observer::CommandObserver;
pub use registry::{CommandEntry, CommandHandler, CommandInvocation, CommandRegistry};
pub use tokenize::tokenize;
