use async_trait::async_trait;
use fincore::{
    ac::{
        identity::SessionIdentity,
        traits::SessionSlot,
    },
    error::SlotError,
};
use parking_lot::Mutex;
use std::sync::{
    Arc,
    atomic::{
        AtomicBool,
        Ordering,
    },
};

pub fn ann() -> SessionIdentity {
    SessionIdentity::new("1", "Ann", "ann@x.com", "ann-token")
}

pub fn bob() -> SessionIdentity {
    SessionIdentity::new("2", "Bob", "bob@x.com", "bob-token")
}

/// A `SessionSlot` held in memory; clones share the same slot, so a
/// test may keep one to inspect what was stored.
#[derive(Clone, Default)]
pub struct MemorySlot {
    value: Arc<Mutex<Option<SessionIdentity>>>,
    failing: Arc<AtomicBool>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity(identity: SessionIdentity) -> Self {
        let slot = Self::default();
        *slot.value.lock() = Some(identity);
        slot
    }

    pub fn stored(&self) -> Option<SessionIdentity> {
        self.value.lock().clone()
    }

    /// Make every subsequent operation fail.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), SlotError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(SlotError::Unavailable("memory slot set to fail".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SessionSlot for MemorySlot {
    async fn load(&self) -> Result<Option<SessionIdentity>, SlotError> {
        self.check()?;
        Ok(self.value.lock().clone())
    }

    async fn save(&self, identity: &SessionIdentity) -> Result<(), SlotError> {
        self.check()?;
        *self.value.lock() = Some(identity.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SlotError> {
        self.check()?;
        *self.value.lock() = None;
        Ok(())
    }
}
