// Library for tests to access modules

pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod routes;
pub mod snapshot_repo;
