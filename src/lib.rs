// Library for tests to access modules

pub mod config;
pub mod device_profile;
pub mod metrics_repo;
pub mod models;
pub mod routes;
pub mod snapshot;
pub mod version;
