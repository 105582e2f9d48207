use fincore::{
    ac::{
        principal::AuthenticationState,
        traits::SessionSlot,
    },
    transport::traits::Transport,
};
use finclient::client::ApiClient;
use std::sync::Arc;

use crate::{
    auth::AuthService,
    bridge::AuthStateBridge,
    error::Error,
    store::SessionStore,
};

/// The per-session wiring: one store, the bridge observing it, and
/// optionally the durable slot the store was restored from.
pub struct SessionContext {
    store: SessionStore,
    bridge: AuthStateBridge,
    slot: Option<Arc<dyn SessionSlot>>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::from_store(SessionStore::new(), None)
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_store(store: SessionStore, slot: Option<Arc<dyn SessionSlot>>) -> Self {
        let bridge = AuthStateBridge::new(store.clone());
        Self { store, bridge, slot }
    }

    /// Start a session with whatever identity the slot holds.
    pub async fn restore(slot: Arc<dyn SessionSlot>) -> Result<Self, Error> {
        let identity = slot.load().await?;
        if let Some(identity) = &identity {
            log::trace!("restored session for {identity}");
        }
        Ok(Self::from_store(SessionStore::with_identity(identity), Some(slot)))
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn bridge(&self) -> &AuthStateBridge {
        &self.bridge
    }

    pub fn authentication_state(&self) -> AuthenticationState {
        self.bridge.current_state()
    }

    /// A client that authorizes requests with this session's token.
    pub fn client(&self, transport: Arc<dyn Transport>) -> ApiClient {
        ApiClient::from_arc(transport).with_bearer(self.store.clone())
    }

    pub fn auth_service(&self, client: ApiClient) -> AuthService {
        let service = AuthService::new(client, self.store.clone());
        match &self.slot {
            Some(slot) => service.with_slot(slot.clone()),
            None => service,
        }
    }
}
