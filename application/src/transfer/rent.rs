use error_stack::Report;
use rust_decimal::Decimal;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::{DestructRental, Rental};
use kernel::KernelError;

#[derive(Debug, Clone)]
pub struct RentalDto {
    pub id: Uuid,
    pub scooter_id: String,
    pub rented_at: OffsetDateTime,
    pub returned_at: Option<OffsetDateTime>,
}

impl TryFrom<Rental> for RentalDto {
    type Error = Report<KernelError>;

    fn try_from(value: Rental) -> Result<Self, Self::Error> {
        let DestructRental {
            id,
            scooter_id,
            rented_at,
            returned_at,
        } = value.into_destruct();
        let id = id.ok_or_else(|| {
            Report::new(KernelError::Internal).attach_printable("rental has no store-assigned id")
        })?;
        Ok(Self {
            id: id.into(),
            scooter_id: scooter_id.into(),
            rented_at: rented_at.into(),
            returned_at: returned_at.map(Into::into),
        })
    }
}

pub struct StartRentDto {
    pub scooter_id: String,
}

pub struct EndRentDto {
    pub scooter_id: String,
}

pub struct GetRentsDto {
    pub scooter_id: String,
}

/// The just-closed rental together with the amount charged for it.
#[derive(Debug, Clone)]
pub struct EndedRentDto {
    pub rental: RentalDto,
    pub price: Decimal,
}

pub struct CalculateIncomeDto {
    pub year: Option<i32>,
    pub include_open_rentals: bool,
}
