use rust_decimal::Decimal;
use sqlx::PgConnection;

use kernel::interface::query::ScooterQuery;
use kernel::interface::update::ScooterModifier;
use kernel::prelude::entity::{IsRented, PricePerMinute, Scooter, ScooterId};
use kernel::KernelError;

use crate::database::postgres::PgTransaction;
use crate::error::{ConvertError, DriverError};

pub struct PostgresScooterRepository;

#[async_trait::async_trait]
impl ScooterQuery<PgTransaction> for PostgresScooterRepository {
    async fn find_by_id(
        &self,
        con: &mut PgTransaction,
        id: &ScooterId,
    ) -> error_stack::Result<Option<Scooter>, KernelError> {
        PgScooterInternal::find_by_id(&mut con.0, id)
            .await
            .convert_error()
    }

    async fn find_all(
        &self,
        con: &mut PgTransaction,
    ) -> error_stack::Result<Vec<Scooter>, KernelError> {
        PgScooterInternal::find_all(&mut con.0).await.convert_error()
    }
}

#[async_trait::async_trait]
impl ScooterModifier<PgTransaction> for PostgresScooterRepository {
    async fn create(
        &self,
        con: &mut PgTransaction,
        scooter: &Scooter,
    ) -> error_stack::Result<(), KernelError> {
        PgScooterInternal::create(&mut con.0, scooter)
            .await
            .convert_error()
    }

    async fn update(
        &self,
        con: &mut PgTransaction,
        scooter: &Scooter,
    ) -> error_stack::Result<(), KernelError> {
        PgScooterInternal::update(&mut con.0, scooter)
            .await
            .convert_error()
    }

    async fn delete(
        &self,
        con: &mut PgTransaction,
        id: &ScooterId,
    ) -> error_stack::Result<(), KernelError> {
        PgScooterInternal::delete(&mut con.0, id).await.convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct ScooterRow {
    id: String,
    price_per_minute: Decimal,
    is_rented: bool,
}

impl From<ScooterRow> for Scooter {
    fn from(value: ScooterRow) -> Self {
        Scooter::new(
            ScooterId::new(value.id),
            PricePerMinute::new(value.price_per_minute),
            IsRented::new(value.is_rented),
        )
    }
}

pub(in crate::database) struct PgScooterInternal;

impl PgScooterInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &ScooterId,
    ) -> Result<Option<Scooter>, DriverError> {
        let row = sqlx::query_as::<_, ScooterRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                price_per_minute,
                is_rented
            FROM
                scooters
            WHERE
                id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(Scooter::from))
    }

    async fn find_all(con: &mut PgConnection) -> Result<Vec<Scooter>, DriverError> {
        let rows = sqlx::query_as::<_, ScooterRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                price_per_minute,
                is_rented
            FROM
                scooters
            "#,
        )
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(Scooter::from).collect())
    }

    async fn create(con: &mut PgConnection, scooter: &Scooter) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO scooters (id, price_per_minute, is_rented)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(scooter.id().as_ref())
        .bind(scooter.price_per_minute().as_ref())
        .bind(scooter.is_rented().as_ref())
        .execute(con)
        .await?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, scooter: &Scooter) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE scooters
            SET price_per_minute = $2, is_rented = $3
            WHERE id = $1
            "#,
        )
        .bind(scooter.id().as_ref())
        .bind(scooter.price_per_minute().as_ref())
        .bind(scooter.is_rented().as_ref())
        .execute(con)
        .await?;
        Ok(())
    }

    async fn delete(con: &mut PgConnection, id: &ScooterId) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM scooters
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await?;
        Ok(())
    }
}
