//! Command registry - case-insensitive name to entry mapping
//!
//! The registry is an explicitly owned value (usually behind an `Arc`), not a
//! hidden process-wide static, so tests and embedders construct isolated
//! instances. Keys are case-folded once at the registration and lookup
//! boundaries; the map itself is a plain `HashMap` behind a `RwLock`.
//!
//! Entries live behind `Arc`: re-registration swaps the entry atomically
//! under the lock, and any in-flight invocation holding the old entry
//! completes unaffected.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use veldra_core::{AccessLevel, Invoker, Result, Target};

/// Per-dispatch context handed to the handler and to observers
///
/// Built once per dispatch and passed by reference; `tokens` is always the
/// tokenization of `raw_args`, and `name` never carries the command prefix.
pub struct CommandInvocation<'a> {
    /// The actor issuing the command
    pub invoker: &'a dyn Invoker,
    /// The world object the command acts upon, if any
    pub target: Option<&'a dyn Target>,
    /// Case-folded command name
    pub name: String,
    /// Everything after the command name, verbatim
    pub raw_args: String,
    /// Tokenized form of `raw_args`
    pub tokens: Vec<String>,
}

/// A registered command handler
///
/// Implemented for any `Fn(&CommandInvocation) -> Result<()>` closure; larger
/// subsystems implement the trait directly on their own types.
pub trait CommandHandler: Send + Sync {
    /// Run the command
    ///
    /// An `Err` is contained by the dispatcher and logged as a handler-local
    /// fault; it never unwinds into the caller's input loop.
    fn invoke(&self, invocation: &CommandInvocation<'_>) -> Result<()>;
}

impl<F> CommandHandler for F
where
    F: Fn(&CommandInvocation<'_>) -> Result<()> + Send + Sync,
{
    fn invoke(&self, invocation: &CommandInvocation<'_>) -> Result<()> {
        self(invocation)
    }
}

/// An immutable registration record
pub struct CommandEntry {
    name: String,
    required_level: AccessLevel,
    handler: Option<Arc<dyn CommandHandler>>,
}

impl CommandEntry {
    /// Command name in its original registration casing, for display
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Minimum access level required to run this command
    pub fn required_level(&self) -> AccessLevel {
        self.required_level
    }

    /// The handler, if the registration supplied one
    pub fn handler(&self) -> Option<&Arc<dyn CommandHandler>> {
        self.handler.as_ref()
    }
}

impl std::fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("required_level", &self.required_level)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

/// Mapping from case-insensitive command name to [`CommandEntry`]
///
/// Safe for concurrent registration and lookup from any thread; operations
/// are linearizable per key.
#[derive(Default)]
pub struct CommandRegistry {
    entries: RwLock<HashMap<String, Arc<CommandEntry>>>,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    fn normalize(name: &str) -> String {
        name.to_lowercase()
    }

    /// Insert or replace the entry for `name`
    ///
    /// Duplicate registration is not an error; the last writer wins and all
    /// subsequent lookups see the new entry.
    pub fn register(
        &self,
        name: impl Into<String>,
        required_level: AccessLevel,
        handler: impl CommandHandler + 'static,
    ) {
        self.register_entry(name, required_level, Some(Arc::new(handler)));
    }

    /// Register a name with no handler
    ///
    /// The name participates in lookups and access checks; dispatch skips
    /// invocation but still notifies observers.
    pub fn register_reserved(&self, name: impl Into<String>, required_level: AccessLevel) {
        self.register_entry(name, required_level, None);
    }

    fn register_entry(
        &self,
        name: impl Into<String>,
        required_level: AccessLevel,
        handler: Option<Arc<dyn CommandHandler>>,
    ) {
        let name = name.into();
        let key = Self::normalize(&name);
        let entry = Arc::new(CommandEntry {
            name,
            required_level,
            handler,
        });
        self.entries.write().insert(key, entry);
    }

    /// Remove the entry for `name`, returning whether one existed
    pub fn unregister(&self, name: &str) -> bool {
        self.entries.write().remove(&Self::normalize(name)).is_some()
    }

    /// Case-insensitive lookup
    pub fn lookup(&self, name: &str) -> Option<Arc<CommandEntry>> {
        self.entries.read().get(&Self::normalize(name)).cloned()
    }

    /// True iff `name` is registered and `level` satisfies its requirement
    ///
    /// An unknown command is reported as `false`, deliberately conflated with
    /// an access failure: callers here only want a yes/no capability answer.
    pub fn check_access(&self, name: &str, level: AccessLevel) -> bool {
        match self.lookup(name) {
            Some(entry) => level.satisfies(entry.required_level),
            None => false,
        }
    }

    /// Registered display names, sorted, for help listings
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .entries
            .read()
            .values()
            .map(|entry| entry.name.clone())
            .collect();
        names.sort();
        names
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True iff no commands are registered
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> impl CommandHandler {
        |_: &CommandInvocation<'_>| Ok(())
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = CommandRegistry::new();
        registry.register("Heal", AccessLevel::GameMaster, noop());

        for name in ["heal", "HEAL", "Heal", "hEaL"] {
            let entry = registry.lookup(name).unwrap();
            assert_eq!(entry.name(), "Heal");
            assert_eq!(entry.required_level(), AccessLevel::GameMaster);
        }
    }

    #[test]
    fn test_reregistration_replaces() {
        let registry = CommandRegistry::new();
        registry.register("heal", AccessLevel::GameMaster, noop());
        registry.register("HEAL", AccessLevel::Administrator, noop());

        assert_eq!(registry.len(), 1);
        let entry = registry.lookup("heal").unwrap();
        assert_eq!(entry.required_level(), AccessLevel::Administrator);
    }

    #[test]
    fn test_inflight_entry_survives_replacement() {
        let registry = CommandRegistry::new();
        registry.register("heal", AccessLevel::GameMaster, noop());

        let held = registry.lookup("heal").unwrap();
        registry.register("heal", AccessLevel::Owner, noop());

        // The held entry still reflects the registration it came from.
        assert_eq!(held.required_level(), AccessLevel::GameMaster);
        assert_eq!(
            registry.lookup("heal").unwrap().required_level(),
            AccessLevel::Owner
        );
    }

    #[test]
    fn test_check_access_conflates_unknown() {
        let registry = CommandRegistry::new();
        registry.register("heal", AccessLevel::GameMaster, noop());

        assert!(registry.check_access("heal", AccessLevel::GameMaster));
        assert!(registry.check_access("heal", AccessLevel::Owner));
        assert!(!registry.check_access("heal", AccessLevel::Player));
        assert!(!registry.check_access("nosuch", AccessLevel::Owner));
    }

    #[test]
    fn test_unregister() {
        let registry = CommandRegistry::new();
        registry.register("heal", AccessLevel::GameMaster, noop());

        assert!(registry.unregister("HEAL"));
        assert!(!registry.unregister("heal"));
        assert!(registry.lookup("heal").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_names_sorted() {
        let registry = CommandRegistry::new();
        registry.register("Tele", AccessLevel::GameMaster, noop());
        registry.register("Add", AccessLevel::GameMaster, noop());
        registry.register_reserved("Go", AccessLevel::Counselor);

        assert_eq!(registry.names(), vec!["Add", "Go", "Tele"]);
    }

    #[test]
    fn test_reserved_entry_has_no_handler() {
        let registry = CommandRegistry::new();
        registry.register_reserved("noop", AccessLevel::Player);
        assert!(registry.lookup("noop").unwrap().handler().is_none());
    }
}
