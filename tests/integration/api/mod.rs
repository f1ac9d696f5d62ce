pub mod auth_test;
pub mod geo_test;
pub mod history_test;
