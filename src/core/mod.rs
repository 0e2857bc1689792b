pub mod backup;
pub mod calendar;
pub mod clock;
pub mod export;
pub mod generator;
pub mod ledger;
pub mod progress;
pub mod random;
pub mod reset;
pub mod session;
pub mod ticker;
