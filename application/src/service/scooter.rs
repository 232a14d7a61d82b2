use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::lock::{DependOnScooterRowLock, ScooterRowLock};
use kernel::interface::query::{DependOnScooterQuery, ScooterQuery};
use kernel::interface::update::{DependOnScooterModifier, ScooterModifier};
use kernel::prelude::entity::{IsRented, PricePerMinute, Scooter, ScooterId};
use kernel::KernelError;

use crate::transfer::{CreateScooterDto, DeleteScooterDto, GetScooterDto, ScooterDto};

#[async_trait::async_trait]
pub trait CreateScooterService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnScooterQuery<Connection>
    + DependOnScooterModifier<Connection>
{
    async fn add_scooter(
        &self,
        dto: CreateScooterDto,
    ) -> error_stack::Result<ScooterDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = ScooterId::new(dto.id);
        let exists = self.scooter_query().find_by_id(&mut connection, &id).await?;
        if exists.is_some() {
            return Err(Report::new(KernelError::DuplicateScooter { id }));
        }

        let scooter = Scooter::new(
            id,
            PricePerMinute::new(dto.price_per_minute),
            IsRented::new(false),
        );
        self.scooter_modifier()
            .create(&mut connection, &scooter)
            .await?;
        connection.commit().await?;

        Ok(ScooterDto::from(scooter))
    }
}

impl<Connection: Transaction + Send, T> CreateScooterService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnScooterQuery<Connection>
        + DependOnScooterModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait GetScooterService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnScooterQuery<Connection>
{
    async fn get_scooter(
        &self,
        dto: GetScooterDto,
    ) -> error_stack::Result<ScooterDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = ScooterId::new(dto.id);
        let scooter = self
            .scooter_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::ScooterNotFound { id }))?;

        Ok(ScooterDto::from(scooter))
    }

    async fn get_scooters(&self) -> error_stack::Result<Vec<ScooterDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let scooters = self.scooter_query().find_all(&mut connection).await?;

        Ok(scooters.into_iter().map(ScooterDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetScooterService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnScooterQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait DeleteScooterService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnScooterQuery<Connection>
    + DependOnScooterModifier<Connection>
    + DependOnScooterRowLock
{
    async fn remove_scooter(&self, dto: DeleteScooterDto) -> error_stack::Result<(), KernelError> {
        let id = ScooterId::new(dto.id);
        // Removal races with lifecycle transitions on the same scooter.
        let _guard = self.scooter_row_lock().acquire(&id).await?;

        let mut connection = self.database_connection().transact().await?;

        let scooter = self
            .scooter_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::ScooterNotFound { id: id.clone() }))?;
        if *scooter.is_rented().as_ref() {
            return Err(Report::new(KernelError::InvalidOperation { id })
                .attach_printable("scooter is currently rented"));
        }

        self.scooter_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;

        Ok(())
    }
}

impl<Connection: Transaction + Send, T> DeleteScooterService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnScooterQuery<Connection>
        + DependOnScooterModifier<Connection>
        + DependOnScooterRowLock
{
}
