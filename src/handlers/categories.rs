use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::db::HotelRepository;
use crate::error::ApiError;
use crate::models::category::CreateCategory;

/// `POST /hotels/category`. A duplicate name fails in the store and is
/// reported as an internal error.
pub async fn create_category<R: HotelRepository>(
    store: web::Data<R>,
    body: web::Json<CreateCategory>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    body.validate()?;

    let category = store
        .create_category(&body)
        .await
        .map_err(|err| ApiError::internal("failed to create category", err))?;

    log::info!("created category {} ({})", category.id, category.name);
    Ok(HttpResponse::Created().json(category))
}
