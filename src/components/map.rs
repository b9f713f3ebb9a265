//! Leaflet Map Bindings
//!
//! Minimal wasm-bindgen bindings to the page-level Leaflet global (`L`),
//! plus a handle owning one live map instance. A container supports only
//! one instance at a time, so the previous one must be removed before the
//! next search renders; `MapView` owns that teardown.

use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::api::places::Restaurant;

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str = "© OpenStreetMap";
const INITIAL_ZOOM: f64 = 13.0;

#[wasm_bindgen]
extern "C" {
    type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn leaflet_map(id: &str) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &Array, zoom: f64);

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap);

    type TileLayer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> Result<TileLayer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &LeafletMap);

    type Marker;

    #[wasm_bindgen(catch, js_namespace = L, js_name = marker)]
    fn marker(coords: &Array) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to_map(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, content: &str);
}

fn lat_lng(lat: f64, lon: f64) -> Array {
    Array::of2(&lat.into(), &lon.into())
}

/// One live Leaflet map instance.
pub struct MapView {
    map: LeafletMap,
}

impl MapView {
    /// Create a map in the container `id`, centered on the first restaurant,
    /// with one popup marker per result.
    pub fn render(id: &str, restaurants: &[Restaurant]) -> Result<MapView, JsValue> {
        let first = restaurants
            .first()
            .ok_or_else(|| JsValue::from_str("no restaurants to plot"))?;

        let map = leaflet_map(id)?;
        map.set_view(&lat_lng(first.lat, first.lon), INITIAL_ZOOM);

        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"attribution".into(), &TILE_ATTRIBUTION.into())?;
        tile_layer(TILE_URL, &options.into())?.add_to(&map);

        for restaurant in restaurants {
            marker(&lat_lng(restaurant.lat, restaurant.lon))?
                .add_to_map(&map)
                .bind_popup(&popup_html(restaurant));
        }

        Ok(MapView { map })
    }

    /// Tear the instance down and release the container.
    pub fn remove(self) {
        self.map.remove();
    }
}

/// Marker popup markup for one restaurant.
fn popup_html(restaurant: &Restaurant) -> String {
    format!(
        "<b>{}</b><br>{}<br>{}<br>⭐ {:.1}",
        restaurant.name, restaurant.address, restaurant.food, restaurant.rating
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_lists_name_address_food_and_rating() {
        let restaurant = Restaurant {
            name: "Saravana Bhavan".to_string(),
            address: "MG Road, Chennai".to_string(),
            food: "south indian".to_string(),
            rating: 4.6,
            lat: 13.08,
            lon: 80.27,
        };

        let html = popup_html(&restaurant);
        assert_eq!(
            html,
            "<b>Saravana Bhavan</b><br>MG Road, Chennai<br>south indian<br>⭐ 4.6"
        );
    }
}
