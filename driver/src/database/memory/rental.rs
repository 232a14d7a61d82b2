use error_stack::Report;
use uuid::Uuid;

use kernel::interface::query::RentalQuery;
use kernel::interface::update::RentalModifier;
use kernel::prelude::entity::{Rental, RentalId, ScooterId};
use kernel::KernelError;

use crate::database::memory::InMemoryConnection;

#[derive(Debug, Clone, Default)]
pub struct InMemoryRentalRepository;

#[async_trait::async_trait]
impl RentalQuery<InMemoryConnection> for InMemoryRentalRepository {
    async fn find_by_scooter_id(
        &self,
        con: &mut InMemoryConnection,
        scooter_id: &ScooterId,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        let table = con.rentals.lock();
        Ok(table
            .by_scooter
            .get(scooter_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| table.rows.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_last_by_scooter_id(
        &self,
        con: &mut InMemoryConnection,
        scooter_id: &ScooterId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        let table = con.rentals.lock();
        Ok(table
            .by_scooter
            .get(scooter_id)
            .and_then(|ids| ids.last())
            .and_then(|id| table.rows.get(id).cloned()))
    }
}

#[async_trait::async_trait]
impl RentalModifier<InMemoryConnection> for InMemoryRentalRepository {
    async fn create(
        &self,
        con: &mut InMemoryConnection,
        rental: &Rental,
    ) -> error_stack::Result<Rental, KernelError> {
        let mut table = con.rentals.lock();
        let id = RentalId::new(Uuid::new_v4());
        let stored = Rental::new(
            Some(id.clone()),
            rental.scooter_id().clone(),
            rental.rented_at().clone(),
            rental.returned_at().clone(),
        );
        table
            .by_scooter
            .entry(stored.scooter_id().clone())
            .or_default()
            .push(id.clone());
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(
        &self,
        con: &mut InMemoryConnection,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        let mut table = con.rentals.lock();
        let id = rental.id().clone().ok_or_else(|| {
            Report::new(KernelError::Internal).attach_printable("rental has no store-assigned id")
        })?;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = rental.clone();
                Ok(())
            }
            None => Err(Report::new(KernelError::Internal)
                .attach_printable("rental to update does not exist")),
        }
    }
}

#[cfg(test)]
mod test {
    use time::macros::datetime;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::RentalQuery;
    use kernel::interface::update::RentalModifier;
    use kernel::prelude::entity::{Rental, RentedAt, ReturnedAt, ScooterId};
    use kernel::KernelError;

    use crate::database::memory::{InMemoryDatabase, InMemoryRentalRepository};

    #[tokio::test]
    async fn create_assigns_id_and_keeps_order() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact().await?;

        let id = ScooterId::new("scooter-1");
        let first = Rental::new(
            None,
            id.clone(),
            RentedAt::new(datetime!(2020-01-01 10:00:00 UTC)),
            Some(ReturnedAt::new(datetime!(2020-01-01 10:30:00 UTC))),
        );
        let first = InMemoryRentalRepository.create(&mut con, &first).await?;
        assert!(first.id().is_some());

        let second = Rental::new(
            None,
            id.clone(),
            RentedAt::new(datetime!(2020-01-02 09:00:00 UTC)),
            None,
        );
        let second = InMemoryRentalRepository.create(&mut con, &second).await?;
        assert_ne!(first.id(), second.id());

        let all = InMemoryRentalRepository
            .find_by_scooter_id(&mut con, &id)
            .await?;
        assert_eq!(all, vec![first, second.clone()]);

        let last = InMemoryRentalRepository
            .find_last_by_scooter_id(&mut con, &id)
            .await?;
        assert_eq!(last, Some(second));

        Ok(())
    }

    #[tokio::test]
    async fn update_closes_the_open_rental() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact().await?;

        let id = ScooterId::new("scooter-1");
        let rental = Rental::new(
            None,
            id.clone(),
            RentedAt::new(datetime!(2020-01-01 10:00:00 UTC)),
            None,
        );
        let rental = InMemoryRentalRepository.create(&mut con, &rental).await?;

        let closed = Rental::new(
            rental.id().clone(),
            id.clone(),
            rental.rented_at().clone(),
            Some(ReturnedAt::new(datetime!(2020-01-01 11:00:00 UTC))),
        );
        InMemoryRentalRepository.update(&mut con, &closed).await?;

        let last = InMemoryRentalRepository
            .find_last_by_scooter_id(&mut con, &id)
            .await?;
        assert_eq!(last, Some(closed));

        Ok(())
    }

    #[tokio::test]
    async fn update_without_id_is_rejected() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact().await?;

        let rental = Rental::new(
            None,
            ScooterId::new("scooter-1"),
            RentedAt::new(datetime!(2020-01-01 10:00:00 UTC)),
            None,
        );
        let report = InMemoryRentalRepository
            .update(&mut con, &rental)
            .await
            .expect_err("rental was never inserted");
        assert!(matches!(report.current_context(), KernelError::Internal));

        Ok(())
    }
}
