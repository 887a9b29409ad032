pub mod cards;
pub mod training;
pub mod units;
