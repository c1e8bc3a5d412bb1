pub mod dashboard;
pub mod health;
pub mod reference;
pub mod timeseries;
