use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use validator::Validate;

use crate::models::category::Category;
use crate::models::hotel_chain::HotelChain;

#[derive(Debug, Serialize, Clone, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub stars: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub description: Option<String>,
    pub address: String,
    pub district: Option<String>,
    pub city: String,
    pub state: String,
    pub country: String,
    pub place_id: String,
    pub thumb: Option<String>,
    pub images: Option<Json<Vec<String>>>,
    pub amenities: Option<Json<Vec<String>>>,
    pub pois: Option<Json<Vec<Value>>>,
    pub reviews: Option<Json<Vec<Value>>>,
    pub category_id: i64,
    pub hotel_chain_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A hotel together with the category and chain it belongs to.
///
/// Serializes as the hotel's own fields plus nested `category` and
/// `hotelChain` objects.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HotelDetails {
    #[serde(flatten)]
    pub hotel: Hotel,
    pub category: Category,
    pub hotel_chain: HotelChain,
}

/// Body of `POST /hotels`.
///
/// Every column the store declares `NOT NULL` is required here, including
/// both foreign keys.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateHotel {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required)]
    pub stars: Option<i64>,
    #[validate(required)]
    pub latitude: Option<f64>,
    #[validate(required)]
    pub longitude: Option<f64>,
    pub description: Option<String>,
    #[validate(required, length(min = 1))]
    pub address: Option<String>,
    pub district: Option<String>,
    #[validate(required, length(min = 1))]
    pub city: Option<String>,
    #[validate(required, length(min = 1))]
    pub state: Option<String>,
    #[validate(required, length(min = 1))]
    pub country: Option<String>,
    #[serde(rename = "placeId")]
    #[validate(required, length(min = 1))]
    pub place_id: Option<String>,
    pub thumb: Option<String>,
    pub images: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
    pub pois: Option<Vec<Value>>,
    pub reviews: Option<Vec<Value>>,
    #[serde(rename = "categoryId")]
    #[validate(required)]
    pub category_id: Option<i64>,
    #[serde(rename = "hotelChainId")]
    #[validate(required)]
    pub hotel_chain_id: Option<i64>,
}
