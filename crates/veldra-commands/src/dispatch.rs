//! Command dispatcher - the orchestrator
//!
//! Stateless between calls; the persistent pieces are the injected registry,
//! the runtime settings cell, and the observer list. Dispatch runs
//! synchronously on whatever thread delivers the input line, and no
//! suspension occurs anywhere on the path. Any asynchrony is the handler's
//! own concern.

use crate::observer::{CommandObserver, CommandObservers};
use crate::registry::{CommandInvocation, CommandRegistry};
use crate::tokenize::tokenize;
use parking_lot::RwLock;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use veldra_core::{AccessLevel, CommandConfig, DispatchNotice, Invoker, Target};

/// Turns raw input lines into authorized handler invocations
///
/// See the crate-level docs for the full pipeline. `handle` returns `true`
/// exactly when the line was consumed as a command attempt; `false` means the
/// caller should treat the line as ordinary chat.
pub struct CommandDispatcher {
    registry: Arc<CommandRegistry>,
    config: RwLock<CommandConfig>,
    observers: CommandObservers,
}

impl CommandDispatcher {
    /// Create a dispatcher over an injected registry
    pub fn new(registry: Arc<CommandRegistry>, config: CommandConfig) -> Self {
        Self {
            registry,
            config: RwLock::new(config),
            observers: CommandObservers::default(),
        }
    }

    /// The registry this dispatcher consults
    pub fn registry(&self) -> &Arc<CommandRegistry> {
        &self.registry
    }

    /// Current command prefix
    pub fn prefix(&self) -> String {
        self.config.read().prefix.clone()
    }

    /// Replace the command prefix, effective for subsequent dispatches
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.config.write().prefix = prefix.into();
    }

    /// Current silent-ignore threshold
    pub fn ignore_level(&self) -> AccessLevel {
        self.config.read().ignore_level
    }

    /// Replace the silent-ignore threshold
    pub fn set_ignore_level(&self, level: AccessLevel) {
        self.config.write().ignore_level = level;
    }

    /// Subscribe an observer to every executed command
    pub fn subscribe(&self, observer: Arc<dyn CommandObserver>) {
        self.observers.subscribe(observer);
    }

    /// Dispatch a raw input line
    ///
    /// Returns `true` iff the line was consumed as a command attempt. The
    /// silent-ignore branches return `false` even though the prefix matched,
    /// so an ordinary player's chat that happens to start with the prefix
    /// falls through to normal chat handling instead of drawing a protocol
    /// error.
    ///
    /// A fault inside the handler or an observer is contained here, logged,
    /// and never unwinds into the caller; the line still counts as consumed.
    pub fn handle(
        &self,
        invoker: &dyn Invoker,
        target: Option<&dyn Target>,
        raw_line: &str,
    ) -> bool {
        let (prefix, ignore_level) = {
            let config = self.config.read();
            (config.prefix.clone(), config.ignore_level)
        };

        let Some(remainder) = raw_line.strip_prefix(&prefix) else {
            tracing::trace!(invoker = invoker.name(), "line is not a command attempt");
            return false;
        };

        let (name, raw_args) = match remainder.find(' ') {
            Some(split) => (&remainder[..split], &remainder[split + 1..]),
            None => (remainder, ""),
        };
        let name = name.to_lowercase();
        let tokens = tokenize(raw_args);

        let Some(entry) = self.registry.lookup(&name) else {
            return self.report_failure(invoker, ignore_level, DispatchNotice::UnknownCommand, &name);
        };

        if !invoker.access_level().satisfies(entry.required_level()) {
            return self.report_failure(invoker, ignore_level, DispatchNotice::AccessDenied, &name);
        }

        tracing::debug!(
            invoker = invoker.name(),
            command = %name,
            tokens = tokens.len(),
            "dispatching command"
        );

        let invocation = CommandInvocation {
            invoker,
            target,
            name,
            raw_args: raw_args.to_string(),
            tokens,
        };

        if let Some(handler) = entry.handler() {
            match catch_unwind(AssertUnwindSafe(|| handler.invoke(&invocation))) {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    tracing::warn!(
                        invoker = invoker.name(),
                        command = %invocation.name,
                        error = %err,
                        "command handler failed"
                    );
                }
                Err(_) => {
                    tracing::warn!(
                        invoker = invoker.name(),
                        command = %invocation.name,
                        "command handler panicked"
                    );
                }
            }
        }

        self.observers.notify(&invocation);
        true
    }

    /// Ignore-or-notify branching shared by the unknown and unauthorized
    /// outcomes
    ///
    /// At or below the ignore threshold the attempt is reported as "not a
    /// command" (`false`) with no message; above it, exactly one notice goes
    /// back to the invoker and the line still counts as consumed (`true`).
    fn report_failure(
        &self,
        invoker: &dyn Invoker,
        ignore_level: AccessLevel,
        notice: DispatchNotice,
        name: &str,
    ) -> bool {
        if invoker.access_level() <= ignore_level {
            tracing::trace!(
                invoker = invoker.name(),
                command = %name,
                "failed dispatch silently ignored"
            );
            return false;
        }

        tracing::debug!(
            invoker = invoker.name(),
            command = %name,
            ?notice,
            "failed dispatch"
        );
        invoker.deliver_notice(notice);
        true
    }
}

impl std::fmt::Debug for CommandDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDispatcher")
            .field("registry", &self.registry)
            .field("config", &*self.config.read())
            .finish()
    }
}
