use crate::database::Transaction;
use crate::entity::{Scooter, ScooterId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait ScooterQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &ScooterId,
    ) -> error_stack::Result<Option<Scooter>, KernelError>;

    async fn find_all(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<Scooter>, KernelError>;
}

pub trait DependOnScooterQuery<Connection: Transaction>: Sync + Send + 'static {
    type ScooterQuery: ScooterQuery<Connection>;
    fn scooter_query(&self) -> &Self::ScooterQuery;
}
