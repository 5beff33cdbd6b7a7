// Library for tests to access modules

pub mod config;
pub mod models;
pub mod routes;
pub mod stats_repo;
pub mod store;
pub mod version;
pub mod worker;
