mod rental;
mod scooter;

pub use self::{rental::*, scooter::*};
