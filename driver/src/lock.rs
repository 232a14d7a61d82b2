use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use kernel::interface::lock::ScooterRowLock;
use kernel::prelude::entity::ScooterId;
use kernel::KernelError;

/// Async mutex registry keyed by scooter id. A lifecycle transition holds
/// the guard for its whole check-then-act sequence, so transitions on the
/// same scooter serialize while distinct scooters proceed in parallel.
#[derive(Debug, Default)]
pub struct ScooterRowLocks {
    locks: Mutex<HashMap<ScooterId, Arc<AsyncMutex<()>>>>,
}

#[async_trait::async_trait]
impl ScooterRowLock for ScooterRowLocks {
    type Guard = OwnedMutexGuard<()>;

    async fn acquire(&self, id: &ScooterId) -> error_stack::Result<Self::Guard, KernelError> {
        let lock = Arc::clone(self.locks.lock().entry(id.clone()).or_default());
        Ok(lock.lock_owned().await)
    }
}
