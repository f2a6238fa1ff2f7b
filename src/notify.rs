//! Change notifier: fan-out of the knob's rounded value to observers.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::fmt;

/// Handle returned by [`ChangeNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(i64)>;

/// Ordered list of `change` observers.
#[derive(Default)]
pub struct ChangeNotifier {
    next_id: u64,
    observers: Vec<(ObserverId, Observer)>,
}

impl ChangeNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. Observers are called in subscription order.
    pub fn subscribe(&mut self, observer: impl FnMut(i64) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Deliver `value` to every observer.
    pub fn emit(&mut self, value: i64) {
        tracing::trace!(value, observers = self.observers.len(), "knob change");
        for (_, observer) in &mut self.observers {
            observer(value);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier").field("observers", &self.observers.len()).finish()
    }
}
