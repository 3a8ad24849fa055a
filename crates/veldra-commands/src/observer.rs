//! Post-execution observer fan-out
//!
//! After every authorized invocation the dispatcher reports the invocation to
//! a set of subscribed observers, letting unrelated subsystems (audit logs,
//! anti-abuse, analytics) react without the dispatcher depending on them.
//! Notification is fire-and-forget: a faulting observer is logged and
//! skipped, never allowed to unwind into the dispatch path.

use crate::registry::CommandInvocation;
use parking_lot::RwLock;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Receives every executed command invocation
pub trait CommandObserver: Send + Sync {
    /// Called once after each authorized invocation, on the dispatching
    /// thread, after the handler has returned
    fn command_executed(&self, invocation: &CommandInvocation<'_>);
}

impl<F> CommandObserver for F
where
    F: Fn(&CommandInvocation<'_>) + Send + Sync,
{
    fn command_executed(&self, invocation: &CommandInvocation<'_>) {
        self(invocation);
    }
}

/// Subscriber list with contained fan-out
#[derive(Default)]
pub(crate) struct CommandObservers {
    subscribers: RwLock<Vec<Arc<dyn CommandObserver>>>,
}

impl CommandObservers {
    pub(crate) fn subscribe(&self, observer: Arc<dyn CommandObserver>) {
        self.subscribers.write().push(observer);
    }

    /// Notify every subscriber, containing faults per subscriber
    pub(crate) fn notify(&self, invocation: &CommandInvocation<'_>) {
        let subscribers = self.subscribers.read().clone();
        for observer in subscribers {
            let outcome = catch_unwind(AssertUnwindSafe(|| {
                observer.command_executed(invocation);
            }));
            if outcome.is_err() {
                tracing::warn!(
                    command = %invocation.name,
                    "command observer panicked; continuing fan-out"
                );
            }
        }
    }
}
