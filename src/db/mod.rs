//! Entity store access.
//!
//! Handlers only see [`HotelRepository`]; [`SqliteStore`] is the implementation
//! wired up in `main`.

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::config::Config;
use crate::filters::{OrderBy, Pagination, Predicate};
use crate::models::category::{Category, CreateCategory};
use crate::models::hotel::{CreateHotel, Hotel, HotelDetails};
use crate::models::hotel_chain::{CreateHotelChain, HotelChain};

mod sqlite;

pub use sqlite::SqliteStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A query over hotels, always including the related category and chain.
#[derive(Debug, Clone, Default)]
pub struct HotelQuery {
    pub predicate: Predicate,
    pub order: Option<OrderBy>,
    /// `None` returns every matching row.
    pub window: Option<Pagination>,
}

#[derive(Debug)]
pub struct HotelPage {
    pub records: Vec<HotelDetails>,
    /// Rows matching the predicate, ignoring the window.
    pub total: i64,
}

pub trait HotelRepository {
    fn find_hotels(&self, query: &HotelQuery) -> impl Future<Output = StoreResult<HotelPage>>;

    fn find_hotel(&self, id: i64) -> impl Future<Output = StoreResult<Option<HotelDetails>>>;

    /// `hotel` must already be validated; required fields are `Some`.
    fn create_hotel(&self, hotel: &CreateHotel) -> impl Future<Output = StoreResult<Hotel>>;

    fn create_category(
        &self,
        category: &CreateCategory,
    ) -> impl Future<Output = StoreResult<Category>>;

    fn create_hotel_chain(
        &self,
        chain: &CreateHotelChain,
    ) -> impl Future<Output = StoreResult<HotelChain>>;
}

pub async fn get_db_pool(config: &Config) -> StoreResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> StoreResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
