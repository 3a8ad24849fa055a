//! Actor seams - the interfaces the world model plugs into
//!
//! The command layer never owns mobiles or items; it sees the invoking actor
//! through [`Invoker`] and an optional targeted object through [`Target`].
//! Both are object-safe so sessions can hand in trait objects.

use crate::AccessLevel;

/// Failure categories reported back to an invoker
///
/// The exact wording shown to the user is a presentation concern of the
/// session layer; the dispatcher only picks the category. At most one notice
/// is delivered per failed dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchNotice {
    /// The command exists but the invoker's access level is insufficient
    AccessDenied,
    /// No command is registered under the given name
    UnknownCommand,
}

/// The actor issuing a command line
pub trait Invoker: Send + Sync {
    /// Display name, used for logging and observer records
    fn name(&self) -> &str;

    /// The actor's current privilege rank
    fn access_level(&self) -> AccessLevel;

    /// Deliver a failure notice to the actor's session
    ///
    /// Called at most once per dispatch, and only on the non-silent failure
    /// branches.
    fn deliver_notice(&self, notice: DispatchNotice);
}

/// An optional world object the command acts upon
pub trait Target: Send + Sync {
    /// Human-readable label for logging
    fn label(&self) -> String;
}
