pub mod observability;
pub mod proxy;
pub mod bootstrap;
