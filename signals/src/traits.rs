use crate::{IntoListener, Subscription};

/// Trait for getting a clone of the current value of a signal
pub trait Get<T> {
    fn get(&self) -> T;
}

/// Trait for accessing the current value of a signal with a closure, without cloning it.
///
/// The closure sees a snapshot taken when `with` is called and runs with no lock
/// held, so it may set the same signal; it keeps seeing the snapshot afterwards.
pub trait With<T> {
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R;
}

/// Trait for registering change listeners.
///
/// Together with [`Get`] this is everything a UI binding needs: read the value
/// on render, subscribe once per binding, and drop (or
/// [`unsubscribe`](Subscription::unsubscribe)) the subscription on teardown.
pub trait Subscribe {
    /// Listener runs with no arguments after every change, on the thread that made it
    fn subscribe<L: IntoListener>(&self, listener: L) -> Subscription;
}
