mod rent;
mod scooter;

pub use self::{rent::*, scooter::*};
