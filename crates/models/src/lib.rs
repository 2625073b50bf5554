pub mod errors;
pub mod db;
pub mod coerce;
pub mod agent;
pub mod company;
