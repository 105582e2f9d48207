use fincore::ac::{
    identity::SessionIdentity,
    principal::AuthenticationState,
};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::{
    identity::derive_state,
    observer::{
        Observers,
        Subscription,
    },
    store::SessionStore,
};

struct Shared {
    state: RwLock<AuthenticationState>,
    observers: Observers<AuthenticationState>,
}

impl Shared {
    fn update(&self, identity: Option<&SessionIdentity>) -> AuthenticationState {
        let state = derive_state(identity);
        *self.state.write() = state.clone();
        self.observers.notify(&state);
        state
    }
}

/// Presents the identity held by a `SessionStore` as the session's
/// `AuthenticationState`, republishing on every store change.
///
/// The bridge listens to the store only while it is alive; once
/// dropped its listener is removed and any notification racing the
/// teardown is discarded.
pub struct AuthStateBridge {
    store: SessionStore,
    shared: Arc<Shared>,
    _listener: Subscription,
}

impl AuthStateBridge {
    pub fn new(store: SessionStore) -> Self {
        let shared = Arc::new(Shared {
            state: RwLock::new(AuthenticationState::anonymous()),
            observers: Observers::new(),
        });
        let weak = Arc::downgrade(&shared);
        let listener = store.subscribe(move |identity| match weak.upgrade() {
            Some(shared) => {
                shared.update(identity);
            }
            None => log::trace!("auth state bridge released; change ignored"),
        });
        // read after subscribing so no assignment in between is missed
        *shared.state.write() = derive_state(store.current_identity().as_ref());
        Self {
            store,
            shared,
            _listener: listener,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn current_state(&self) -> AuthenticationState {
        self.shared.state.read().clone()
    }

    pub async fn authentication_state(&self) -> AuthenticationState {
        self.current_state()
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(&AuthenticationState) + Send + Sync + 'static,
    ) -> Subscription {
        self.shared.observers.subscribe(listener)
    }

    /// Re-derive the state from the store and push it to subscribers.
    pub fn notify_authentication_state_changed(&self) -> AuthenticationState {
        self.shared.update(self.store.current_identity().as_ref())
    }
}
