mod income;
mod rent;
mod scooter;

pub use self::{income::*, rent::*, scooter::*};
