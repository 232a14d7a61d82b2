use kernel::interface::query::ScooterQuery;
use kernel::interface::update::ScooterModifier;
use kernel::prelude::entity::{Scooter, ScooterId};
use kernel::KernelError;

use crate::database::memory::InMemoryConnection;

#[derive(Debug, Clone, Default)]
pub struct InMemoryScooterRepository;

#[async_trait::async_trait]
impl ScooterQuery<InMemoryConnection> for InMemoryScooterRepository {
    async fn find_by_id(
        &self,
        con: &mut InMemoryConnection,
        id: &ScooterId,
    ) -> error_stack::Result<Option<Scooter>, KernelError> {
        Ok(con.scooters.lock().get(id).cloned())
    }

    async fn find_all(
        &self,
        con: &mut InMemoryConnection,
    ) -> error_stack::Result<Vec<Scooter>, KernelError> {
        Ok(con.scooters.lock().values().cloned().collect())
    }
}

#[async_trait::async_trait]
impl ScooterModifier<InMemoryConnection> for InMemoryScooterRepository {
    async fn create(
        &self,
        con: &mut InMemoryConnection,
        scooter: &Scooter,
    ) -> error_stack::Result<(), KernelError> {
        con.scooters
            .lock()
            .insert(scooter.id().clone(), scooter.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut InMemoryConnection,
        scooter: &Scooter,
    ) -> error_stack::Result<(), KernelError> {
        con.scooters
            .lock()
            .insert(scooter.id().clone(), scooter.clone());
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut InMemoryConnection,
        id: &ScooterId,
    ) -> error_stack::Result<(), KernelError> {
        con.scooters.lock().remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use rust_decimal_macros::dec;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::ScooterQuery;
    use kernel::interface::update::ScooterModifier;
    use kernel::prelude::entity::{IsRented, PricePerMinute, Scooter, ScooterId};
    use kernel::KernelError;

    use crate::database::memory::{InMemoryDatabase, InMemoryScooterRepository};

    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact().await?;

        let id = ScooterId::new("scooter-1");
        let scooter = Scooter::new(
            id.clone(),
            PricePerMinute::new(dec!(0.2)),
            IsRented::new(false),
        );
        InMemoryScooterRepository.create(&mut con, &scooter).await?;

        let found = InMemoryScooterRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(scooter.clone()));

        let all = InMemoryScooterRepository.find_all(&mut con).await?;
        assert_eq!(all, vec![scooter.clone()]);

        let rented = Scooter::new(
            id.clone(),
            PricePerMinute::new(dec!(0.2)),
            IsRented::new(true),
        );
        InMemoryScooterRepository.update(&mut con, &rented).await?;
        let found = InMemoryScooterRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(rented));

        InMemoryScooterRepository.delete(&mut con, &id).await?;
        let found = InMemoryScooterRepository.find_by_id(&mut con, &id).await?;
        assert!(found.is_none());

        Ok(())
    }
}
