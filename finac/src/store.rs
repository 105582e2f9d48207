use fincore::ac::{
    identity::SessionIdentity,
    traits::BearerSource,
};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::observer::{
    Observers,
    Subscription,
};

#[derive(Default)]
struct Inner {
    identity: RwLock<Option<SessionIdentity>>,
    observers: Observers<Option<SessionIdentity>>,
}

/// Holds the identity of the user for a single session.
///
/// Clones are handles to the same store.  Every assignment through
/// `set_current_identity` notifies all subscribers synchronously, so by
/// the time it returns every subscriber has observed the new value.
#[derive(Clone, Default)]
pub struct SessionStore(Arc<Inner>);

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity(identity: Option<SessionIdentity>) -> Self {
        let store = Self::default();
        *store.0.identity.write() = identity;
        store
    }

    pub fn current_identity(&self) -> Option<SessionIdentity> {
        self.0.identity.read().clone()
    }

    pub fn set_current_identity(&self, identity: Option<SessionIdentity>) {
        match &identity {
            Some(identity) => log::trace!("session identity set to {identity}"),
            None => log::trace!("session identity cleared"),
        }
        *self.0.identity.write() = identity.clone();
        let notified = self.0.observers.notify(&identity);
        log::trace!("session identity change delivered to {notified} listener(s)");
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(Option<&SessionIdentity>) + Send + Sync + 'static,
    ) -> Subscription {
        self.0.observers.subscribe(move |identity| listener(identity.as_ref()))
    }

    pub fn listener_count(&self) -> usize {
        self.0.observers.len()
    }
}

impl BearerSource for SessionStore {
    fn bearer_token(&self) -> Option<String> {
        self.0.identity
            .read()
            .as_ref()
            .and_then(SessionIdentity::bearer_token)
            .map(str::to_string)
    }
}
