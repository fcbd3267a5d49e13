//! Hotel catalog API: hotels, categories and hotel chains over SQLite, with
//! filtered and paginated listing and a GeoJSON location endpoint.

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod handlers;
pub mod models;
pub mod routes;
