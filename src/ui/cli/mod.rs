pub mod dashboard;
pub mod drivers;
