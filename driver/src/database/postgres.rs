use error_stack::Report;
use sqlx::{Error, PgPool, Postgres};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{rental::*, scooter::*};

mod rental;
mod scooter;

static POSTGRES_URL: &str = "POSTGRES_URL";

pub struct PostgresDatabase {
    pool: PgPool,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL).convert_error()?;
        tracing::debug!("Connecting to postgres");
        let pool = PgPool::connect(&url).await.convert_error()?;
        Ok(Self { pool })
    }
}

#[async_trait::async_trait]
impl DatabaseConnection<PgTransaction> for PostgresDatabase {
    async fn transact(&self) -> error_stack::Result<PgTransaction, KernelError> {
        let con = self.pool.begin().await.convert_error()?;
        Ok(PgTransaction(con))
    }
}

pub struct PgTransaction(pub(in crate::database) sqlx::Transaction<'static, Postgres>);

#[async_trait::async_trait]
impl Transaction for PgTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match error {
            Error::PoolTimedOut => Report::from(error).change_context(KernelError::Timeout),
            _ => Report::from(error).change_context(KernelError::Internal),
        })
    }
}
