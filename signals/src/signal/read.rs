use std::sync::Arc;

use super::{Inner, SignalId};
use crate::{Get, IntoListener, Subscribe, Subscription, With};

/// Read-only signal: can be read and subscribed to, never set
pub struct Read<T>(pub(super) Arc<Inner<T>>);

impl<T> Read<T> {
    pub fn id(&self) -> SignalId { self.0.id }
}

impl<T> Clone for Read<T> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T: Clone> Get<T> for Read<T> {
    fn get(&self) -> T { self.0.value.value() }
}

impl<T> With<T> for Read<T> {
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R { self.0.value.with(f) }
}

impl<T> Subscribe for Read<T> {
    fn subscribe<L: IntoListener>(&self, listener: L) -> Subscription { self.0.subscribe(listener.into_listener()) }
}

impl<T: std::fmt::Display> std::fmt::Display for Read<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { self.with(|v| write!(f, "{}", v)) }
}
