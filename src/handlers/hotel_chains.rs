use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::db::HotelRepository;
use crate::error::ApiError;
use crate::models::hotel_chain::CreateHotelChain;

pub async fn create_hotel_chain<R: HotelRepository>(
    store: web::Data<R>,
    body: web::Json<CreateHotelChain>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    body.validate()?;

    let chain = store
        .create_hotel_chain(&body)
        .await
        .map_err(|err| ApiError::internal("failed to create hotel chain", err))?;

    log::info!("created hotel chain {} ({})", chain.id, chain.name);
    Ok(HttpResponse::Created().json(chain))
}
