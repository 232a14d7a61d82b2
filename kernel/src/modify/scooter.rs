use crate::database::Transaction;
use crate::entity::{Scooter, ScooterId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait ScooterModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        scooter: &Scooter,
    ) -> error_stack::Result<(), KernelError>;

    async fn update(
        &self,
        con: &mut Connection,
        scooter: &Scooter,
    ) -> error_stack::Result<(), KernelError>;

    async fn delete(
        &self,
        con: &mut Connection,
        id: &ScooterId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnScooterModifier<Connection: Transaction>: 'static + Sync + Send {
    type ScooterModifier: ScooterModifier<Connection>;
    fn scooter_modifier(&self) -> &Self::ScooterModifier;
}
