//! Change subscribers for `Path`.
//!
//! Dispatch policy
//! - Handlers run synchronously, in subscription order, after the path state is
//!   consistent again.
//! - A handler only sees `&Path`, so it cannot mutate the path it observes.
//! - Returning `Listen::Unsubscribe` removes the handler once its call returns;
//!   later handlers in the same dispatch still run.
//! - During dispatch, `Path::subscriber_count` reports the count at dispatch
//!   start; removals take effect once the dispatch finishes.

use super::Path;

/// Kind of structural mutation that triggered a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathChange {
    Added,
    Removed { index: usize },
    Replaced,
    Reversed,
    Cleared,
}

/// Handler verdict after a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Listen {
    Keep,
    Unsubscribe,
}

/// Handle returned by `Path::subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

pub(crate) type Handler = Box<dyn FnMut(&Path, PathChange) -> Listen + Send>;

#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Handler)>,
    /// Handler count while they are taken out for dispatch.
    dispatching: Option<usize>,
}

impl Observers {
    pub(crate) fn add(&mut self, handler: Handler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, handler));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(h, _)| *h != id);
        self.handlers.len() != before
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.dispatching.unwrap_or(self.handlers.len())
    }

    /// Move the handlers out so they can borrow the path; pair with `restore`.
    pub(crate) fn take(&mut self) -> Vec<(SubscriptionId, Handler)> {
        self.dispatching = Some(self.handlers.len());
        std::mem::take(&mut self.handlers)
    }

    pub(crate) fn restore(&mut self, handlers: Vec<(SubscriptionId, Handler)>) {
        self.handlers = handlers;
        self.dispatching = None;
    }
}
