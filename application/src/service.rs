mod income;
mod rent;
mod scooter;

pub use self::{income::*, rent::*, scooter::*};

#[cfg(test)]
pub(crate) mod tests {
    use rust_decimal_macros::dec;
    use time::macros::datetime;

    use driver::clock::FixedClock;
    use driver::database::{
        InMemoryConnection, InMemoryDatabase, InMemoryRentalRepository, InMemoryScooterRepository,
    };
    use driver::lock::ScooterRowLocks;
    use kernel::interface::clock::DependOnClock;
    use kernel::interface::database::DependOnDatabaseConnection;
    use kernel::interface::lock::DependOnScooterRowLock;
    use kernel::interface::query::{DependOnRentalQuery, DependOnScooterQuery};
    use kernel::interface::update::{DependOnRentalModifier, DependOnScooterModifier};
    use kernel::prelude::pricing::{DailyCap, DependOnRentalCalculator, RentalCalculator};

    /// Wires every service onto the in-memory backend with a pinned clock
    /// and the reference 20-unit daily cap.
    pub(crate) struct TestModule {
        database: InMemoryDatabase,
        scooter_repository: InMemoryScooterRepository,
        rental_repository: InMemoryRentalRepository,
        row_locks: ScooterRowLocks,
        clock: FixedClock,
        rental_calculator: RentalCalculator,
    }

    impl TestModule {
        pub(crate) fn new() -> Self {
            Self {
                database: InMemoryDatabase::new(),
                scooter_repository: InMemoryScooterRepository,
                rental_repository: InMemoryRentalRepository,
                row_locks: ScooterRowLocks::default(),
                clock: FixedClock::new(datetime!(2020-01-01 17:15:15 UTC)),
                rental_calculator: RentalCalculator::new(DailyCap::new(dec!(20))),
            }
        }
    }

    impl DependOnDatabaseConnection<InMemoryConnection> for TestModule {
        type DatabaseConnection = InMemoryDatabase;
        fn database_connection(&self) -> &InMemoryDatabase {
            &self.database
        }
    }

    impl DependOnScooterQuery<InMemoryConnection> for TestModule {
        type ScooterQuery = InMemoryScooterRepository;
        fn scooter_query(&self) -> &InMemoryScooterRepository {
            &self.scooter_repository
        }
    }

    impl DependOnScooterModifier<InMemoryConnection> for TestModule {
        type ScooterModifier = InMemoryScooterRepository;
        fn scooter_modifier(&self) -> &InMemoryScooterRepository {
            &self.scooter_repository
        }
    }

    impl DependOnRentalQuery<InMemoryConnection> for TestModule {
        type RentalQuery = InMemoryRentalRepository;
        fn rental_query(&self) -> &InMemoryRentalRepository {
            &self.rental_repository
        }
    }

    impl DependOnRentalModifier<InMemoryConnection> for TestModule {
        type RentalModifier = InMemoryRentalRepository;
        fn rental_modifier(&self) -> &InMemoryRentalRepository {
            &self.rental_repository
        }
    }

    impl DependOnScooterRowLock for TestModule {
        type ScooterRowLock = ScooterRowLocks;
        fn scooter_row_lock(&self) -> &ScooterRowLocks {
            &self.row_locks
        }
    }

    impl DependOnClock for TestModule {
        type Clock = FixedClock;
        fn clock(&self) -> &FixedClock {
            &self.clock
        }
    }

    impl DependOnRentalCalculator for TestModule {
        fn rental_calculator(&self) -> &RentalCalculator {
            &self.rental_calculator
        }
    }
}
