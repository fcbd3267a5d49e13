use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Body of `POST /hotels/category`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
}
