use rust_decimal::Decimal;

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnRentalQuery, DependOnScooterQuery, RentalQuery, ScooterQuery,
};
use kernel::prelude::pricing::DependOnRentalCalculator;
use kernel::KernelError;

use crate::transfer::CalculateIncomeDto;

#[async_trait::async_trait]
pub trait CalculateIncomeService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnScooterQuery<Connection>
    + DependOnRentalQuery<Connection>
    + DependOnClock
    + DependOnRentalCalculator
{
    /// Sums the price of every matching rental over all registered
    /// scooters. Each rental is priced on its own; open rentals are priced
    /// up to now when included.
    async fn calculate_income(
        &self,
        dto: CalculateIncomeDto,
    ) -> error_stack::Result<Decimal, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let now = self.clock().now();
        let scooters = self.scooter_query().find_all(&mut connection).await?;

        let mut income = Decimal::ZERO;
        for scooter in scooters {
            let rentals = self
                .rental_query()
                .find_by_scooter_id(&mut connection, scooter.id())
                .await?;
            for rental in rentals {
                if !dto.include_open_rentals && rental.returned_at().is_none() {
                    continue;
                }
                // A rental ending in a later year still counts towards the
                // year it started in.
                if let Some(year) = dto.year {
                    if rental.rented_at().as_ref().year() != year {
                        continue;
                    }
                }
                let price = self.rental_calculator().calculate(
                    rental.rented_at(),
                    rental.returned_at().as_ref(),
                    now,
                    scooter.price_per_minute(),
                )?;
                income += *price.as_ref();
            }
        }

        Ok(income)
    }
}

impl<Connection: Transaction + Send, T> CalculateIncomeService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnScooterQuery<Connection>
        + DependOnRentalQuery<Connection>
        + DependOnClock
        + DependOnRentalCalculator
{
}

#[cfg(test)]
mod test {
    use rust_decimal_macros::dec;
    use time::macros::datetime;
    use time::Duration;

    use kernel::interface::clock::DependOnClock;
    use kernel::KernelError;

    use crate::service::tests::TestModule;
    use crate::service::{CalculateIncomeService, CreateScooterService, EndRentService, StartRentService};
    use crate::transfer::{CalculateIncomeDto, CreateScooterDto, EndRentDto, StartRentDto};

    async fn rent_for(
        module: &TestModule,
        scooter_id: &str,
        start: time::OffsetDateTime,
        minutes: i64,
    ) -> error_stack::Result<(), KernelError> {
        module.clock().set(start);
        module
            .start_rent(StartRentDto {
                scooter_id: scooter_id.to_string(),
            })
            .await?;
        module.clock().set(start + Duration::minutes(minutes));
        module
            .end_rent(EndRentDto {
                scooter_id: scooter_id.to_string(),
            })
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn sums_rentals_over_all_scooters() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        module
            .add_scooter(CreateScooterDto {
                id: "s1".to_string(),
                price_per_minute: dec!(1),
            })
            .await?;
        module
            .add_scooter(CreateScooterDto {
                id: "s2".to_string(),
                price_per_minute: dec!(0.5),
            })
            .await?;

        // 10 at rate 1, capped 20 at rate 0.5
        rent_for(&module, "s1", datetime!(2020-01-01 10:00:00 UTC), 10).await?;
        rent_for(&module, "s2", datetime!(2020-01-02 10:00:00 UTC), 60).await?;

        let income = module
            .calculate_income(CalculateIncomeDto {
                year: None,
                include_open_rentals: false,
            })
            .await?;
        assert_eq!(income, dec!(30));

        Ok(())
    }

    #[tokio::test]
    async fn open_rentals_are_excluded_unless_requested() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        module
            .add_scooter(CreateScooterDto {
                id: "s1".to_string(),
                price_per_minute: dec!(1),
            })
            .await?;

        rent_for(&module, "s1", datetime!(2020-01-01 10:00:00 UTC), 10).await?;

        module.clock().set(datetime!(2020-01-03 10:00:00 UTC));
        module
            .start_rent(StartRentDto {
                scooter_id: "s1".to_string(),
            })
            .await?;
        // the open rental has run for 15 minutes "now"
        module.clock().set(datetime!(2020-01-03 10:15:00 UTC));

        let closed_only = module
            .calculate_income(CalculateIncomeDto {
                year: None,
                include_open_rentals: false,
            })
            .await?;
        assert_eq!(closed_only, dec!(10));

        let with_open = module
            .calculate_income(CalculateIncomeDto {
                year: None,
                include_open_rentals: true,
            })
            .await?;
        assert_eq!(with_open, dec!(25));

        Ok(())
    }

    #[tokio::test]
    async fn year_filter_uses_the_start_year() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new();
        module
            .add_scooter(CreateScooterDto {
                id: "s1".to_string(),
                price_per_minute: dec!(1),
            })
            .await?;

        // crosses midnight into 2020: 60 capped + 30 capped
        rent_for(&module, "s1", datetime!(2019-12-31 23:00:00 UTC), 90).await?;
        rent_for(&module, "s1", datetime!(2020-06-01 10:00:00 UTC), 10).await?;

        let of_2019 = module
            .calculate_income(CalculateIncomeDto {
                year: Some(2019),
                include_open_rentals: false,
            })
            .await?;
        assert_eq!(of_2019, dec!(40));

        let of_2020 = module
            .calculate_income(CalculateIncomeDto {
                year: Some(2020),
                include_open_rentals: false,
            })
            .await?;
        assert_eq!(of_2020, dec!(10));

        let of_2021 = module
            .calculate_income(CalculateIncomeDto {
                year: Some(2021),
                include_open_rentals: false,
            })
            .await?;
        assert_eq!(of_2021, dec!(0));

        Ok(())
    }
}
