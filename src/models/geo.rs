//! GeoJSON output for `GET /hotels/nearby/{id}`.

use serde::Serialize;

use crate::models::hotel::Hotel;

/// A GeoJSON `Feature` with a `Point` geometry.
#[derive(Debug, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub geometry: Point,
    pub properties: FeatureProperties,
}

#[derive(Debug, Serialize)]
pub struct Point {
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// `[longitude, latitude]`, the GeoJSON axis order.
    pub coordinates: [f64; 2],
}

#[derive(Debug, Serialize)]
pub struct FeatureProperties {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub district: Option<String>,
}

impl From<&Hotel> for Feature {
    fn from(hotel: &Hotel) -> Self {
        Self {
            kind: "Feature",
            geometry: Point {
                kind: "Point",
                coordinates: [hotel.longitude, hotel.latitude],
            },
            properties: FeatureProperties {
                id: hotel.id,
                name: hotel.name.clone(),
                address: hotel.address.clone(),
                city: hotel.city.clone(),
                district: hotel.district.clone(),
            },
        }
    }
}
