use std::ops::Deref;
use std::sync::Arc;

use rust_decimal::Decimal;
use vodca::References;

use driver::clock::SystemClock;
use driver::database::{
    PgTransaction, PostgresDatabase, PostgresRentalRepository, PostgresScooterRepository,
};
use driver::lock::ScooterRowLocks;
use kernel::interface::clock::DependOnClock;
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::lock::DependOnScooterRowLock;
use kernel::interface::query::{DependOnRentalQuery, DependOnScooterQuery};
use kernel::interface::update::{DependOnRentalModifier, DependOnScooterModifier};
use kernel::prelude::pricing::{DailyCap, DependOnRentalCalculator, RentalCalculator};
use kernel::KernelError;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init().await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    database: PostgresDatabase,
    scooter_repository: PostgresScooterRepository,
    rental_repository: PostgresRentalRepository,
    row_locks: ScooterRowLocks,
    clock: SystemClock,
    rental_calculator: RentalCalculator,
}

impl Handler {
    pub async fn init() -> error_stack::Result<Self, KernelError> {
        let database = PostgresDatabase::new().await?;

        let daily_cap = std::env::var("DAILY_CAP")
            .ok()
            .and_then(|cap| cap.parse::<Decimal>().ok())
            .unwrap_or_else(|| Decimal::from(20));

        Ok(Self {
            database,
            scooter_repository: PostgresScooterRepository,
            rental_repository: PostgresRentalRepository,
            row_locks: ScooterRowLocks::default(),
            clock: SystemClock,
            rental_calculator: RentalCalculator::new(DailyCap::new(daily_cap)),
        })
    }
}

impl DependOnDatabaseConnection<PgTransaction> for AppModule {
    type DatabaseConnection = PostgresDatabase;
    fn database_connection(&self) -> &PostgresDatabase {
        &self.0.database
    }
}

impl DependOnScooterQuery<PgTransaction> for AppModule {
    type ScooterQuery = PostgresScooterRepository;
    fn scooter_query(&self) -> &PostgresScooterRepository {
        &self.0.scooter_repository
    }
}

impl DependOnScooterModifier<PgTransaction> for AppModule {
    type ScooterModifier = PostgresScooterRepository;
    fn scooter_modifier(&self) -> &PostgresScooterRepository {
        &self.0.scooter_repository
    }
}

impl DependOnRentalQuery<PgTransaction> for AppModule {
    type RentalQuery = PostgresRentalRepository;
    fn rental_query(&self) -> &PostgresRentalRepository {
        &self.0.rental_repository
    }
}

impl DependOnRentalModifier<PgTransaction> for AppModule {
    type RentalModifier = PostgresRentalRepository;
    fn rental_modifier(&self) -> &PostgresRentalRepository {
        &self.0.rental_repository
    }
}

impl DependOnScooterRowLock for AppModule {
    type ScooterRowLock = ScooterRowLocks;
    fn scooter_row_lock(&self) -> &ScooterRowLocks {
        &self.0.row_locks
    }
}

impl DependOnClock for AppModule {
    type Clock = SystemClock;
    fn clock(&self) -> &SystemClock {
        &self.0.clock
    }
}

impl DependOnRentalCalculator for AppModule {
    fn rental_calculator(&self) -> &RentalCalculator {
        &self.0.rental_calculator
    }
}
