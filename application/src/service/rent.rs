use error_stack::Report;

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::lock::{DependOnScooterRowLock, ScooterRowLock};
use kernel::interface::query::{
    DependOnRentalQuery, DependOnScooterQuery, RentalQuery, ScooterQuery,
};
use kernel::interface::update::{
    DependOnRentalModifier, DependOnScooterModifier, RentalModifier, ScooterModifier,
};
use kernel::prelude::entity::{IsRented, Rental, RentedAt, ReturnedAt, ScooterId};
use kernel::prelude::pricing::DependOnRentalCalculator;
use kernel::KernelError;

use crate::transfer::{EndRentDto, EndedRentDto, GetRentsDto, RentalDto, StartRentDto};

#[async_trait::async_trait]
pub trait StartRentService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnScooterQuery<Connection>
    + DependOnScooterModifier<Connection>
    + DependOnRentalQuery<Connection>
    + DependOnRentalModifier<Connection>
    + DependOnScooterRowLock
    + DependOnClock
{
    async fn start_rent(&self, dto: StartRentDto) -> error_stack::Result<RentalDto, KernelError> {
        let id = ScooterId::new(dto.scooter_id);
        let _guard = self.scooter_row_lock().acquire(&id).await?;

        let mut connection = self.database_connection().transact().await?;

        let scooter = self
            .scooter_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::ScooterNotFound { id: id.clone() }))?;
        if *scooter.is_rented().as_ref() {
            return Err(Report::new(KernelError::InvalidOperation { id })
                .attach_printable("scooter is already rented"));
        }

        // The flag and the rental history must agree that nothing is open.
        let last = self
            .rental_query()
            .find_last_by_scooter_id(&mut connection, &id)
            .await?;
        if last.is_some_and(|rental| rental.returned_at().is_none()) {
            return Err(Report::new(KernelError::InvalidOperation { id })
                .attach_printable("open rental exists for a scooter not flagged as rented"));
        }

        let rental = Rental::new(None, id, RentedAt::new(self.clock().now()), None);
        let rental = self
            .rental_modifier()
            .create(&mut connection, &rental)
            .await?;

        let mut scooter = scooter;
        scooter.substitute(|scooter| {
            *scooter.is_rented = IsRented::new(true);
        });
        self.scooter_modifier()
            .update(&mut connection, &scooter)
            .await?;

        connection.commit().await?;

        Ok(RentalDto::try_from(rental)?)
    }
}

impl<Connection: Transaction + Send, T> StartRentService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnScooterQuery<Connection>
        + DependOnScooterModifier<Connection>
        + DependOnRentalQuery<Connection>
        + DependOnRentalModifier<Connection>
        + DependOnScooterRowLock
        + DependOnClock
{
}

#[async_trait::async_trait]
pub trait EndRentService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnScooterQuery<Connection>
    + DependOnScooterModifier<Connection>
    + DependOnRentalQuery<Connection>
    + DependOnRentalModifier<Connection>
    + DependOnScooterRowLock
    + DependOnClock
    + DependOnRentalCalculator
{
    async fn end_rent(&self, dto: EndRentDto) -> error_stack::Result<EndedRentDto, KernelError> {
        let id = ScooterId::new(dto.scooter_id);
        let _guard = self.scooter_row_lock().acquire(&id).await?;

        let mut connection = self.database_connection().transact().await?;

        let scooter = self
            .scooter_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::ScooterNotFound { id: id.clone() }))?;
        if !*scooter.is_rented().as_ref() {
            return Err(Report::new(KernelError::InvalidOperation { id })
                .attach_printable("scooter is not rented"));
        }

        let rental = self
            .rental_query()
            .find_last_by_scooter_id(&mut connection, &id)
            .await?;
        let rental = match rental {
            Some(rental) if rental.returned_at().is_none() => rental,
            _ => {
                return Err(Report::new(KernelError::InvalidOperation { id })
                    .attach_printable("no open rental exists for the rented scooter"))
            }
        };

        let now = self.clock().now();
        let mut rental = rental;
        rental.substitute(|rental| {
            *rental.returned_at = Some(ReturnedAt::new(now));
        });
        self.rental_modifier()
            .update(&mut connection, &rental)
            .await?;

        let mut scooter = scooter;
        scooter.substitute(|scooter| {
            *scooter.is_rented = IsRented::new(false);
        });
        self.scooter_modifier()
            .update(&mut connection, &scooter)
            .await?;

        connection.commit().await?;

        let price = self.rental_calculator().calculate(
            rental.rented_at(),
            rental.returned_at().as_ref(),
            now,
            scooter.price_per_minute(),
        )?;

        Ok(EndedRentDto {
            rental: RentalDto::try_from(rental)?,
            price: price.into(),
        })
    }
}

impl<Connection: Transaction + Send, T> EndRentService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnScooterQuery<Connection>
        + DependOnScooterModifier<Connection>
        + DependOnRentalQuery<Connection>
        + DependOnRentalModifier<Connection>
        + DependOnScooterRowLock
        + DependOnClock
        + DependOnRentalCalculator
{
}

#[async_trait::async_trait]
pub trait GetRentService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnScooterQuery<Connection>
    + DependOnRentalQuery<Connection>
{
    async fn get_rents(&self, dto: GetRentsDto) -> error_stack::Result<Vec<RentalDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = ScooterId::new(dto.scooter_id);
        self.scooter_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::ScooterNotFound { id: id.clone() }))?;

        let rentals = self
            .rental_query()
            .find_by_scooter_id(&mut connection, &id)
            .await?;

        Ok(rentals
            .into_iter()
            .map(RentalDto::try_from)
            .collect::<Result<Vec<RentalDto>, Report<KernelError>>>()?)
    }
}

impl<Connection: Transaction + Send, T> GetRentService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnScooterQuery<Connection>
        + DependOnRentalQuery<Connection>
{
}
