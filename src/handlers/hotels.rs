use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::db::{HotelQuery, HotelRepository};
use crate::error::ApiError;
use crate::filters::{Condition, FilterValue, HotelField, HotelFilter, Predicate};
use crate::models::geo::Feature;
use crate::models::hotel::CreateHotel;
use crate::models::page::{ListResponse, PageMeta};

/// `GET /hotels` with filters, pagination and sorting from the query string.
pub async fn get_hotels<R: HotelRepository>(
    store: web::Data<R>,
    params: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    let filter = HotelFilter::new(params.into_inner());

    // Reject bad paging before building anything else.
    let window = filter.build_pagination()?;
    let query = HotelQuery {
        predicate: filter.build_predicate()?,
        order: filter.build_order_by(),
        window: Some(window),
    };

    let page = store
        .find_hotels(&query)
        .await
        .map_err(|err| ApiError::internal("failed to fetch hotels", err))?;

    if page.records.is_empty() {
        return Err(ApiError::not_found("no hotels found"));
    }

    Ok(HttpResponse::Ok().json(ListResponse {
        meta: PageMeta::new(page.total, window),
        data: page.records,
    }))
}

pub async fn get_hotel_by_id<R: HotelRepository>(
    store: web::Data<R>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path, "hotel id")?;

    match store.find_hotel(id).await {
        Ok(Some(hotel)) => Ok(HttpResponse::Ok().json(hotel)),
        Ok(None) => Err(ApiError::not_found("hotel not found")),
        Err(err) => Err(ApiError::internal("failed to fetch hotel", err)),
    }
}

pub async fn get_hotels_by_name<R: HotelRepository>(
    store: web::Data<R>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let name = path.into_inner();
    if name.trim().is_empty() {
        return Err(ApiError::bad_request("hotel name is required"));
    }

    list_matching(
        store.get_ref(),
        Condition::contains(HotelField::Name, name),
        "no hotels found with that name",
    )
    .await
}

pub async fn get_hotels_by_category<R: HotelRepository>(
    store: web::Data<R>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let category_id = parse_id(&path, "category id")?;

    list_matching(
        store.get_ref(),
        Condition::equals(HotelField::CategoryId, FilterValue::Integer(category_id)),
        "no hotels found in that category",
    )
    .await
}

pub async fn get_hotels_by_chain<R: HotelRepository>(
    store: web::Data<R>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let chain_id = parse_id(&path, "hotel chain id")?;

    list_matching(
        store.get_ref(),
        Condition::equals(HotelField::HotelChainId, FilterValue::Integer(chain_id)),
        "no hotels found in that chain",
    )
    .await
}

/// `GET /hotels/nearby/{id}`: the hotel's location as a GeoJSON Feature.
pub async fn get_hotel_geolocation<R: HotelRepository>(
    store: web::Data<R>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path, "hotel id")?;

    match store.find_hotel(id).await {
        Ok(Some(details)) => Ok(HttpResponse::Ok().json(Feature::from(&details.hotel))),
        Ok(None) => Err(ApiError::not_found("hotel not found")),
        Err(err) => Err(ApiError::internal("failed to fetch hotel location", err)),
    }
}

pub async fn create_hotel<R: HotelRepository>(
    store: web::Data<R>,
    body: web::Json<CreateHotel>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    body.validate()?;

    let hotel = store
        .create_hotel(&body)
        .await
        .map_err(|err| ApiError::internal("failed to create hotel", err))?;

    log::info!("created hotel {} ({})", hotel.id, hotel.name);
    Ok(HttpResponse::Created().json(hotel))
}

/// Unpaginated list of every hotel matching one condition, in id order.
async fn list_matching<R: HotelRepository>(
    store: &R,
    condition: Condition,
    not_found: &str,
) -> Result<HttpResponse, ApiError> {
    let query = HotelQuery {
        predicate: Predicate::new(vec![condition]),
        ..Default::default()
    };

    let page = store
        .find_hotels(&query)
        .await
        .map_err(|err| ApiError::internal("failed to fetch hotels", err))?;

    if page.records.is_empty() {
        return Err(ApiError::not_found(not_found));
    }

    Ok(HttpResponse::Ok().json(page.records))
}

fn parse_id(raw: &str, what: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::bad_request(format!("invalid {what}: '{raw}'")))
}
