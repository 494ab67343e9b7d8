pub mod config;
pub mod database;
pub mod handlers;
pub mod item;
pub mod routes;
pub mod store;
