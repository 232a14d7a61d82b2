mod price;

pub use self::price::*;
