use crate::entity::ScooterId;
use crate::KernelError;

/// Serializes lifecycle transitions on a single scooter. The guard is held
/// across the whole check-then-act sequence; operations on distinct scooters
/// are free to interleave.
#[async_trait::async_trait]
pub trait ScooterRowLock: 'static + Sync + Send {
    type Guard: Send;
    async fn acquire(&self, id: &ScooterId) -> error_stack::Result<Self::Guard, KernelError>;
}

pub trait DependOnScooterRowLock: 'static + Sync + Send {
    type ScooterRowLock: ScooterRowLock;
    fn scooter_row_lock(&self) -> &Self::ScooterRowLock;
}
