use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::types::Json;
use sqlx::{FromRow, QueryBuilder, Row, Sqlite, SqlitePool};

use super::{HotelPage, HotelQuery, HotelRepository, StoreResult};
use crate::filters::{Condition, FilterValue, Predicate};
use crate::models::category::{Category, CreateCategory};
use crate::models::hotel::{CreateHotel, Hotel, HotelDetails};
use crate::models::hotel_chain::{CreateHotelChain, HotelChain};

const HOTEL_SELECT: &str = "SELECT h.*, \
    c.name AS category_name, \
    c.created_at AS category_created_at, \
    c.updated_at AS category_updated_at, \
    hc.name AS hotel_chain_name, \
    hc.created_at AS hotel_chain_created_at, \
    hc.updated_at AS hotel_chain_updated_at \
    FROM hotels h \
    JOIN categories c ON c.id = h.category_id \
    JOIN hotel_chains hc ON hc.id = h.hotel_chain_id";

#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl<'r> FromRow<'r, SqliteRow> for HotelDetails {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let hotel = Hotel::from_row(row)?;
        let category = Category {
            id: hotel.category_id,
            name: row.try_get("category_name")?,
            created_at: row.try_get("category_created_at")?,
            updated_at: row.try_get("category_updated_at")?,
        };
        let hotel_chain = HotelChain {
            id: hotel.hotel_chain_id,
            name: row.try_get("hotel_chain_name")?,
            created_at: row.try_get("hotel_chain_created_at")?,
            updated_at: row.try_get("hotel_chain_updated_at")?,
        };

        Ok(Self {
            hotel,
            category,
            hotel_chain,
        })
    }
}

/// Appends `WHERE ... AND ...` for every condition, binding all values.
fn push_predicate(builder: &mut QueryBuilder<'_, Sqlite>, predicate: &Predicate) {
    let mut separator = " WHERE ";
    for condition in predicate.conditions() {
        builder.push(separator);
        separator = " AND ";

        match condition {
            Condition::Contains { field, needle } => {
                let column = field.folded_column().unwrap_or(field.column());
                builder.push(format!("h.{column} LIKE "));
                builder.push_bind(like_pattern(&needle.to_lowercase()));
                builder.push(" ESCAPE '\\'");
            }
            Condition::Equals { field, value } => {
                builder.push(format!("h.{} = ", field.column()));
                match value {
                    FilterValue::Integer(v) => builder.push_bind(*v),
                    FilterValue::Decimal(v) => builder.push_bind(*v),
                };
            }
        }
    }
}

/// Full Unicode lowercasing for the `*_folded` search columns.
fn fold(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::to_lowercase)
}

/// `%needle%` with LIKE wildcards in the needle matched literally.
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

impl HotelRepository for SqliteStore {
    async fn find_hotels(&self, query: &HotelQuery) -> StoreResult<HotelPage> {
        let mut count = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM hotels h");
        push_predicate(&mut count, &query.predicate);
        let total: i64 = count.build_query_scalar().fetch_one(&self.pool).await?;

        let mut select = QueryBuilder::<Sqlite>::new(HOTEL_SELECT);
        push_predicate(&mut select, &query.predicate);

        // Primary key breaks ties and is the order when none was requested.
        select.push(" ORDER BY ");
        if let Some(order) = query.order {
            select.push(format!(
                "h.{} {}, ",
                order.field.column(),
                order.direction.as_sql()
            ));
        }
        select.push("h.id");

        if let Some(window) = query.window {
            select.push(" LIMIT ");
            select.push_bind(window.limit);
            select.push(" OFFSET ");
            select.push_bind(window.offset);
        }

        log::debug!("hotel query: {}", select.sql());

        let records = select
            .build_query_as::<HotelDetails>()
            .fetch_all(&self.pool)
            .await?;

        Ok(HotelPage { records, total })
    }

    async fn find_hotel(&self, id: i64) -> StoreResult<Option<HotelDetails>> {
        let mut select = QueryBuilder::<Sqlite>::new(HOTEL_SELECT);
        select.push(" WHERE h.id = ");
        select.push_bind(id);

        let hotel = select
            .build_query_as::<HotelDetails>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(hotel)
    }

    async fn create_hotel(&self, hotel: &CreateHotel) -> StoreResult<Hotel> {
        let now = Utc::now().naive_utc();

        let created = sqlx::query_as::<_, Hotel>(
            r#"
            INSERT INTO hotels (
                name, stars, latitude, longitude, description, address, district,
                city, state, country, place_id, thumb, images, amenities, pois, reviews,
                category_id, hotel_chain_id, created_at, updated_at,
                name_folded, description_folded, address_folded, district_folded,
                city_folded, state_folded, country_folded, place_id_folded
            )
            VALUES (
                ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?,
                ?, ?, ?, ?, ?, ?, ?, ?
            )
            RETURNING *
            "#,
        )
        .bind(&hotel.name)
        .bind(hotel.stars)
        .bind(hotel.latitude)
        .bind(hotel.longitude)
        .bind(&hotel.description)
        .bind(&hotel.address)
        .bind(&hotel.district)
        .bind(&hotel.city)
        .bind(&hotel.state)
        .bind(&hotel.country)
        .bind(&hotel.place_id)
        .bind(&hotel.thumb)
        .bind(hotel.images.clone().map(Json))
        .bind(hotel.amenities.clone().map(Json))
        .bind(hotel.pois.clone().map(Json))
        .bind(hotel.reviews.clone().map(Json))
        .bind(hotel.category_id)
        .bind(hotel.hotel_chain_id)
        .bind(now)
        .bind(now)
        .bind(fold(&hotel.name))
        .bind(fold(&hotel.description))
        .bind(fold(&hotel.address))
        .bind(fold(&hotel.district))
        .bind(fold(&hotel.city))
        .bind(fold(&hotel.state))
        .bind(fold(&hotel.country))
        .bind(fold(&hotel.place_id))
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn create_category(&self, category: &CreateCategory) -> StoreResult<Category> {
        let now = Utc::now().naive_utc();

        let created = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name, created_at, updated_at) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(&category.name)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn create_hotel_chain(&self, chain: &CreateHotelChain) -> StoreResult<HotelChain> {
        let now = Utc::now().naive_utc();

        let created = sqlx::query_as::<_, HotelChain>(
            "INSERT INTO hotel_chains (name, created_at, updated_at) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(&chain.name)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
