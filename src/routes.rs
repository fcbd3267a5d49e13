//! Route table for the `/hotels` API.

use actix_web::web;

use crate::db::HotelRepository;
use crate::error::ApiError;
use crate::handlers::{categories, hotel_chains, hotels};

/// Registers every endpoint against the store `R` held in `web::Data<R>`.
pub fn configure<R: HotelRepository + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into()),
    )
    .service(
        web::scope("/hotels")
            .route("", web::get().to(hotels::get_hotels::<R>))
            .route("", web::post().to(hotels::create_hotel::<R>))
            .route("/id/{id}", web::get().to(hotels::get_hotel_by_id::<R>))
            .route("/name/{name}", web::get().to(hotels::get_hotels_by_name::<R>))
            .route(
                "/category/{category}",
                web::get().to(hotels::get_hotels_by_category::<R>),
            )
            .route("/chain/{chain}", web::get().to(hotels::get_hotels_by_chain::<R>))
            .route(
                "/nearby/{id}",
                web::get().to(hotels::get_hotel_geolocation::<R>),
            )
            .route(
                "/category",
                web::post().to(categories::create_category::<R>),
            )
            .route(
                "/hotelchain",
                web::post().to(hotel_chains::create_hotel_chain::<R>),
            ),
    );
}
