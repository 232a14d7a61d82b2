use crate::database::Transaction;
use crate::entity::{Rental, ScooterId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RentalQuery<Connection: Transaction>: Sync + Send + 'static {
    /// All rentals for the scooter in the store's natural order. Rows are
    /// retained even after the scooter itself has been removed.
    async fn find_by_scooter_id(
        &self,
        con: &mut Connection,
        scooter_id: &ScooterId,
    ) -> error_stack::Result<Vec<Rental>, KernelError>;

    /// The most recent rental by start time, if any.
    async fn find_last_by_scooter_id(
        &self,
        con: &mut Connection,
        scooter_id: &ScooterId,
    ) -> error_stack::Result<Option<Rental>, KernelError>;
}

pub trait DependOnRentalQuery<Connection: Transaction>: Sync + Send + 'static {
    type RentalQuery: RentalQuery<Connection>;
    fn rental_query(&self) -> &Self::RentalQuery;
}
