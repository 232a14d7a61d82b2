mod common;
mod rental;
mod scooter;

pub use self::{common::*, rental::*, scooter::*};
