mod id;
mod rented_at;
mod returned_at;

pub use self::{id::*, rented_at::*, returned_at::*};

use destructure::{Destructure, Mutation};
use vodca::References;

use crate::entity::ScooterId;

/// A single rental period of a scooter. `id` is `None` until the rental
/// store assigns one on first insert. A rental with no `returned_at` is
/// open; a closed rental is never mutated again.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Rental {
    id: Option<RentalId>,
    scooter_id: ScooterId,
    rented_at: RentedAt,
    returned_at: Option<ReturnedAt>,
}

impl Rental {
    pub fn new(
        id: Option<RentalId>,
        scooter_id: ScooterId,
        rented_at: RentedAt,
        returned_at: Option<ReturnedAt>,
    ) -> Self {
        Self {
            id,
            scooter_id,
            rented_at,
            returned_at,
        }
    }
}
