use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HotelChain {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Body of `POST /hotels/hotelchain`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateHotelChain {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
}
