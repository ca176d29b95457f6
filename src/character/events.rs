/// Opaque handle returned by [`MulticastEvent::attach`].
///
/// Detaching consumes the handle, so a stale handle cannot be reused.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ObserverHandle(u64);

/// An ordered list of observers for a one-shot, many-listener notification.
///
/// Observers are invoked synchronously on the broadcasting thread, in
/// attachment order. They must carry their own context; nothing about the
/// notifying entity is captured implicitly, which keeps the dangling-state
/// hazard of engine-style delegates out of the API.
pub struct MulticastEvent<T: Clone> {
    next_id: u64,
    observers: Vec<(u64, Box<dyn FnMut(T)>)>,
}

impl<T: Clone> MulticastEvent<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            observers: Vec::new(),
        }
    }

    /// Register an observer and return the handle needed to detach it.
    pub fn attach(&mut self, observer: impl FnMut(T) + 'static) -> ObserverHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        ObserverHandle(id)
    }

    /// Remove a previously attached observer.
    ///
    /// Detaching an observer that was already removed is a no-op.
    pub fn detach(&mut self, handle: ObserverHandle) {
        self.observers.retain(|(id, _)| *id != handle.0);
    }

    /// Invoke every attached observer with the payload, in attachment order.
    pub fn broadcast(&mut self, payload: T) {
        for (_, observer) in &mut self.observers {
            observer(payload.clone());
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl<T: Clone> Default for MulticastEvent<T> {
    fn default() -> Self {
        Self::new()
    }
}
