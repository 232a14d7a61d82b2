use crate::database::Transaction;
use crate::entity::Rental;
use crate::KernelError;

#[async_trait::async_trait]
pub trait RentalModifier<Connection: Transaction>: 'static + Sync + Send {
    /// Inserts the rental and returns it with the store-assigned id. Any id
    /// already present on the argument is ignored.
    async fn create(
        &self,
        con: &mut Connection,
        rental: &Rental,
    ) -> error_stack::Result<Rental, KernelError>;

    /// Updates an existing rental keyed by its assigned id.
    async fn update(
        &self,
        con: &mut Connection,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnRentalModifier<Connection: Transaction>: 'static + Sync + Send {
    type RentalModifier: RentalModifier<Connection>;
    fn rental_modifier(&self) -> &Self::RentalModifier;
}
