mod id;
mod is_rented;
mod price_per_minute;

pub use self::{id::*, is_rented::*, price_per_minute::*};

use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Scooter {
    id: ScooterId,
    price_per_minute: PricePerMinute,
    is_rented: IsRented,
}

impl Scooter {
    pub fn new(id: ScooterId, price_per_minute: PricePerMinute, is_rented: IsRented) -> Self {
        Self {
            id,
            price_per_minute,
            is_rented,
        }
    }
}
