use async_trait::async_trait;

use crate::error::SlotError;
use super::identity::SessionIdentity;

/// Provides the credential attached to outbound API requests.
pub trait BearerSource: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Storage for a session identity that outlives a single request, such
/// as a cookie backed server session.
#[async_trait]
pub trait SessionSlot: Send + Sync {
    async fn load(&self) -> Result<Option<SessionIdentity>, SlotError>;
    async fn save(&self, identity: &SessionIdentity) -> Result<(), SlotError>;
    async fn clear(&self) -> Result<(), SlotError>;
}
