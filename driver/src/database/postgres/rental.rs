use error_stack::Report;
use sqlx::PgConnection;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::query::RentalQuery;
use kernel::interface::update::RentalModifier;
use kernel::prelude::entity::{Rental, RentalId, RentedAt, ReturnedAt, ScooterId};
use kernel::KernelError;

use crate::database::postgres::PgTransaction;
use crate::error::{ConvertError, DriverError};

pub struct PostgresRentalRepository;

#[async_trait::async_trait]
impl RentalQuery<PgTransaction> for PostgresRentalRepository {
    async fn find_by_scooter_id(
        &self,
        con: &mut PgTransaction,
        scooter_id: &ScooterId,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        PgRentalInternal::find_by_scooter_id(&mut con.0, scooter_id)
            .await
            .convert_error()
    }

    async fn find_last_by_scooter_id(
        &self,
        con: &mut PgTransaction,
        scooter_id: &ScooterId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        PgRentalInternal::find_last_by_scooter_id(&mut con.0, scooter_id)
            .await
            .convert_error()
    }
}

#[async_trait::async_trait]
impl RentalModifier<PgTransaction> for PostgresRentalRepository {
    async fn create(
        &self,
        con: &mut PgTransaction,
        rental: &Rental,
    ) -> error_stack::Result<Rental, KernelError> {
        PgRentalInternal::create(&mut con.0, rental)
            .await
            .convert_error()
    }

    async fn update(
        &self,
        con: &mut PgTransaction,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        let id = rental.id().clone().ok_or_else(|| {
            Report::new(KernelError::Internal).attach_printable("rental has no store-assigned id")
        })?;
        PgRentalInternal::update(&mut con.0, &id, rental)
            .await
            .convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct RentalRow {
    id: Uuid,
    scooter_id: String,
    rented_at: OffsetDateTime,
    returned_at: Option<OffsetDateTime>,
}

impl From<RentalRow> for Rental {
    fn from(value: RentalRow) -> Self {
        Rental::new(
            Some(RentalId::new(value.id)),
            ScooterId::new(value.scooter_id),
            RentedAt::new(value.rented_at),
            value.returned_at.map(ReturnedAt::new),
        )
    }
}

pub(in crate::database) struct PgRentalInternal;

impl PgRentalInternal {
    async fn find_by_scooter_id(
        con: &mut PgConnection,
        scooter_id: &ScooterId,
    ) -> Result<Vec<Rental>, DriverError> {
        let rows = sqlx::query_as::<_, RentalRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                scooter_id,
                rented_at,
                returned_at
            FROM
                scooter_rentals
            WHERE
                scooter_id = $1
            ORDER BY
                rented_at
            "#,
        )
        .bind(scooter_id.as_ref())
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(Rental::from).collect())
    }

    async fn find_last_by_scooter_id(
        con: &mut PgConnection,
        scooter_id: &ScooterId,
    ) -> Result<Option<Rental>, DriverError> {
        let row = sqlx::query_as::<_, RentalRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                scooter_id,
                rented_at,
                returned_at
            FROM
                scooter_rentals
            WHERE
                scooter_id = $1
            ORDER BY
                rented_at DESC
            LIMIT 1
            "#,
        )
        .bind(scooter_id.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(Rental::from))
    }

    async fn create(con: &mut PgConnection, rental: &Rental) -> Result<Rental, DriverError> {
        let id = Uuid::new_v4();
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO scooter_rentals (id, scooter_id, rented_at, returned_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id)
        .bind(rental.scooter_id().as_ref())
        .bind(rental.rented_at().as_ref())
        .bind(rental.returned_at().as_ref().map(|end| *end.as_ref()))
        .execute(con)
        .await?;
        Ok(Rental::new(
            Some(RentalId::new(id)),
            rental.scooter_id().clone(),
            rental.rented_at().clone(),
            rental.returned_at().clone(),
        ))
    }

    async fn update(
        con: &mut PgConnection,
        id: &RentalId,
        rental: &Rental,
    ) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE scooter_rentals
            SET scooter_id = $2, rented_at = $3, returned_at = $4
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .bind(rental.scooter_id().as_ref())
        .bind(rental.rented_at().as_ref())
        .bind(rental.returned_at().as_ref().map(|end| *end.as_ref()))
        .execute(con)
        .await?;
        Ok(())
    }
}
