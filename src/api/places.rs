//! Restaurant Search Client
//!
//! City geocoding via Nominatim and nearby-restaurant lookup via Overpass,
//! plus the pure mapping from raw place elements to display records.

use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
const OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

/// Searches are constrained to one country, as in the hosted demo.
const SEARCH_COUNTRY: &str = "India";

/// Radius around the geocoded city center, in meters.
const SEARCH_RADIUS_M: u32 = 2000;

/// Cap on elements requested from Overpass.
const MAX_PLACES: u32 = 50;

/// Restaurant search failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// City or name filter failed validation; nothing was sent
    #[error("Invalid city or restaurant name! Please try again.")]
    InvalidInput,

    /// The geocoder had no match for the city
    #[error("City \"{0}\" not found in {}", SEARCH_COUNTRY)]
    CityNotFound(String),

    /// Overpass returned zero places around the city center
    #[error("No restaurants found in \"{0}\"")]
    NoResultsFound(String),

    /// The name filter eliminated every result
    #[error("No restaurants named \"{name}\" found in \"{city}\"")]
    NoNamedResultsFound { name: String, city: String },

    /// A mapping service could not be reached or answered garbage
    #[error("Error loading restaurant data. Please try again later.")]
    Unreachable,
}

// ============ Response Types ============

#[derive(Deserialize)]
struct GeoHit {
    lat: String,
    lon: String,
}

#[derive(Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<PlaceElement>,
}

/// Raw Overpass element. Ways and relations carry their coordinate in
/// `center` instead of `lat`/`lon`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PlaceElement {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub center: Option<Center>,
    #[serde(default)]
    pub tags: PlaceTags,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

/// Tags read off a place; everything is optional in OSM data.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PlaceTags {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default, rename = "addr:housenumber")]
    pub housenumber: Option<String>,
    #[serde(default, rename = "addr:street")]
    pub street: Option<String>,
    #[serde(default, rename = "addr:suburb")]
    pub suburb: Option<String>,
    #[serde(default, rename = "addr:city")]
    pub city: Option<String>,
    #[serde(default, rename = "addr:postcode")]
    pub postcode: Option<String>,
}

/// Display model for one restaurant result.
#[derive(Clone, Debug, PartialEq)]
pub struct Restaurant {
    pub name: String,
    pub address: String,
    pub food: String,
    /// 0-5; a placeholder when the source carries no rating data.
    pub rating: f64,
    pub lat: f64,
    pub lon: f64,
}

// ============ Pure Layer ============

fn is_valid_place_query(text: &str) -> bool {
    text.len() >= 2
        && text
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

/// Validate inputs before any network call. The name filter is optional and
/// only constrained when non-empty.
pub fn validate_query(city: &str, name_filter: &str) -> Result<(), SearchError> {
    if !is_valid_place_query(city) {
        return Err(SearchError::InvalidInput);
    }
    if !name_filter.is_empty() && !is_valid_place_query(name_filter) {
        return Err(SearchError::InvalidInput);
    }
    Ok(())
}

/// Map a raw element to its display record. `fallback_rating` stands in for
/// the rating data OSM does not carry; `None` when the element has no
/// coordinate at all.
pub fn display_restaurant(
    element: &PlaceElement,
    searched_city: &str,
    fallback_rating: f64,
) -> Option<Restaurant> {
    let (lat, lon) = match (element.lat, element.lon, element.center) {
        (Some(lat), Some(lon), _) => (lat, lon),
        (_, _, Some(center)) => (center.lat, center.lon),
        _ => return None,
    };

    let tags = &element.tags;
    let parts = [
        tags.housenumber.as_deref(),
        tags.street.as_deref(),
        tags.suburb.as_deref(),
        Some(tags.city.as_deref().unwrap_or(searched_city)),
        tags.postcode.as_deref(),
    ];
    let address = parts
        .iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ");

    Some(Restaurant {
        name: tags
            .name
            .clone()
            .unwrap_or_else(|| "Unnamed Restaurant".to_string()),
        address,
        food: tags
            .cuisine
            .as_deref()
            .map(|cuisine| cuisine.replace('_', " "))
            .unwrap_or_else(|| "Various Cuisines".to_string()),
        rating: (fallback_rating * 10.0).round() / 10.0,
        lat,
        lon,
    })
}

/// Case-insensitive substring filter on the display name.
pub fn filter_by_name(restaurants: Vec<Restaurant>, name_filter: &str) -> Vec<Restaurant> {
    let needle = name_filter.to_lowercase();
    restaurants
        .into_iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .collect()
}

/// Overpass QL for restaurants around a coordinate.
fn overpass_query(lat: f64, lon: f64) -> String {
    format!(
        "[out:json][timeout:25];\
         (node[\"amenity\"=\"restaurant\"](around:{radius},{lat},{lon});\
         way[\"amenity\"=\"restaurant\"](around:{radius},{lat},{lon});\
         relation[\"amenity\"=\"restaurant\"](around:{radius},{lat},{lon}););\
         out center {max};",
        radius = SEARCH_RADIUS_M,
        lat = lat,
        lon = lon,
        max = MAX_PLACES,
    )
}

/// Placeholder rating in [3.5, 5.0]; OSM has no usable rating data.
fn placeholder_rating() -> f64 {
    3.5 + js_sys::Math::random() * 1.5
}

// ============ API Functions ============

async fn geocode_city(city: &str) -> Result<Option<(f64, f64)>, SearchError> {
    let url = format!(
        "{}?city={}&country={}&format=json&limit=1",
        NOMINATIM_URL,
        urlencoding::encode(city),
        urlencoding::encode(SEARCH_COUNTRY),
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|_| SearchError::Unreachable)?;
    if !response.ok() {
        return Err(SearchError::Unreachable);
    }

    let hits: Vec<GeoHit> = response
        .json()
        .await
        .map_err(|_| SearchError::Unreachable)?;
    let best = match hits.first() {
        Some(best) => best,
        None => return Ok(None),
    };
    match (best.lat.parse(), best.lon.parse()) {
        (Ok(lat), Ok(lon)) => Ok(Some((lat, lon))),
        _ => Err(SearchError::Unreachable),
    }
}

async fn nearby_restaurants(lat: f64, lon: f64) -> Result<Vec<PlaceElement>, SearchError> {
    let url = format!(
        "{}?data={}",
        OVERPASS_URL,
        urlencoding::encode(&overpass_query(lat, lon)),
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|_| SearchError::Unreachable)?;
    if !response.ok() {
        return Err(SearchError::Unreachable);
    }

    let body: OverpassResponse = response
        .json()
        .await
        .map_err(|_| SearchError::Unreachable)?;
    Ok(body.elements)
}

/// Full search pipeline: validate, geocode, query nearby places, map to
/// display records, apply the optional name filter. Each step only runs if
/// the previous one produced something to work with.
pub async fn search_restaurants(
    city: &str,
    name_filter: &str,
) -> Result<Vec<Restaurant>, SearchError> {
    validate_query(city, name_filter)?;

    let (lat, lon) = geocode_city(city)
        .await?
        .ok_or_else(|| SearchError::CityNotFound(city.to_string()))?;

    let elements = nearby_restaurants(lat, lon).await?;
    let restaurants: Vec<Restaurant> = elements
        .iter()
        .filter_map(|element| display_restaurant(element, city, placeholder_rating()))
        .collect();
    if restaurants.is_empty() {
        return Err(SearchError::NoResultsFound(city.to_string()));
    }

    if name_filter.is_empty() {
        return Ok(restaurants);
    }
    let named = filter_by_name(restaurants, name_filter);
    if named.is_empty() {
        return Err(SearchError::NoNamedResultsFound {
            name: name_filter.to_string(),
            city: city.to_string(),
        });
    }
    Ok(named)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_fail_validation_before_any_network_call() {
        assert_eq!(
            validate_query("Springfield123", ""),
            Err(SearchError::InvalidInput)
        );
    }

    #[test]
    fn short_or_empty_city_fails_validation() {
        assert_eq!(validate_query("", ""), Err(SearchError::InvalidInput));
        assert_eq!(validate_query("P", ""), Err(SearchError::InvalidInput));
    }

    #[test]
    fn city_with_spaces_passes_validation() {
        assert_eq!(validate_query("New Delhi", ""), Ok(()));
    }

    #[test]
    fn bad_name_filter_fails_even_with_valid_city() {
        assert_eq!(
            validate_query("Mumbai", "Cafe#1"),
            Err(SearchError::InvalidInput)
        );
        assert_eq!(validate_query("Mumbai", "Saravana"), Ok(()));
    }

    #[test]
    fn display_record_fills_defaults_for_missing_tags() {
        let element = PlaceElement {
            lat: Some(12.97),
            lon: Some(77.59),
            ..Default::default()
        };

        let restaurant = display_restaurant(&element, "Bengaluru", 4.23).unwrap();
        assert_eq!(restaurant.name, "Unnamed Restaurant");
        assert_eq!(restaurant.food, "Various Cuisines");
        assert_eq!(restaurant.address, "Bengaluru");
        assert_eq!(restaurant.rating, 4.2);
    }

    #[test]
    fn address_joins_present_parts_and_skips_absent_ones() {
        let element = PlaceElement {
            lat: Some(12.97),
            lon: Some(77.59),
            tags: PlaceTags {
                housenumber: Some("12".to_string()),
                street: Some("MG Road".to_string()),
                postcode: Some("560001".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let restaurant = display_restaurant(&element, "Bengaluru", 4.0).unwrap();
        assert_eq!(restaurant.address, "12, MG Road, Bengaluru, 560001");
    }

    #[test]
    fn cuisine_underscores_become_spaces() {
        let element = PlaceElement {
            lat: Some(12.97),
            lon: Some(77.59),
            tags: PlaceTags {
                cuisine: Some("south_indian".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let restaurant = display_restaurant(&element, "Bengaluru", 4.0).unwrap();
        assert_eq!(restaurant.food, "south indian");
    }

    #[test]
    fn way_elements_use_their_center_coordinate() {
        let element = PlaceElement {
            center: Some(Center {
                lat: 28.61,
                lon: 77.21,
            }),
            ..Default::default()
        };

        let restaurant = display_restaurant(&element, "Delhi", 4.0).unwrap();
        assert_eq!(restaurant.lat, 28.61);
        assert_eq!(restaurant.lon, 77.21);
    }

    #[test]
    fn element_without_any_coordinate_is_dropped() {
        assert_eq!(display_restaurant(&PlaceElement::default(), "Delhi", 4.0), None);
    }

    #[test]
    fn name_filter_is_case_insensitive_substring() {
        let base = display_restaurant(
            &PlaceElement {
                lat: Some(0.0),
                lon: Some(0.0),
                tags: PlaceTags {
                    name: Some("Saravana Bhavan".to_string()),
                    ..Default::default()
                },
                ..Default::default()
            },
            "Chennai",
            4.0,
        )
        .unwrap();

        let kept = filter_by_name(vec![base.clone()], "sarav");
        assert_eq!(kept.len(), 1);
        let dropped = filter_by_name(vec![base], "dosa corner");
        assert!(dropped.is_empty());
    }

    #[test]
    fn overpass_query_covers_all_element_kinds() {
        let query = overpass_query(12.97, 77.59);
        for kind in ["node", "way", "relation"] {
            assert!(query.contains(&format!("{}[\"amenity\"=\"restaurant\"]", kind)));
        }
        assert!(query.contains("around:2000,12.97,77.59"));
        assert!(query.contains("out center 50"));
    }
}
