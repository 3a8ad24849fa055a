//! # Veldra Core - Foundation Types
//!
//! Shared foundation for the Veldra command protocol layer: the access-level
//! ladder that gates dispatch, the invoker/target seams the world model plugs
//! into, the unified error type, runtime configuration, and the timed-lock
//! utility offered to command handlers.
//!
//! This crate owns no command semantics. The protocol layer itself lives in
//! `veldra-commands`.

pub mod access;
pub mod actor;
pub mod config;
pub mod errors;
pub mod lock;

pub use access::AccessLevel;
pub use actor::{DispatchNotice, Invoker, Target};
pub use config::CommandConfig;
pub use errors::{Result, VeldraError};
pub use lock::{LockTimeout, TimedLock};
