use js_sys::{Promise, Reflect};
use leptos::window;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::PositionOptions;

use sf_core::geo::{GeoPoint, GeolocationError, GEOLOCATION_MAX_AGE_MS, GEOLOCATION_TIMEOUT_MS};

/// Asks the browser for the current position.
pub async fn current_position() -> Result<GeoPoint, GeolocationError> {
    let geolocation = window()
        .navigator()
        .geolocation()
        .map_err(|_| GeolocationError::Unsupported)?;
    let promise = Promise::new(&mut |resolve, reject| {
        let options = PositionOptions::new();
        options.set_enable_high_accuracy(false);
        options.set_timeout(GEOLOCATION_TIMEOUT_MS);
        options.set_maximum_age(GEOLOCATION_MAX_AGE_MS);
        if let Err(err) = geolocation.get_current_position_with_error_callback_and_options(
            &resolve,
            Some(&reject),
            &options,
        ) {
            _ = reject.call1(&JsValue::NULL, &err);
        }
    });
    let position = JsFuture::from(promise).await.map_err(|err| {
        let code = number(&err, "code").unwrap_or_default();
        log::warn!("Unable to determine the current position (code {code})");
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        GeolocationError::from_code(code as u16)
    })?;
    let coords = Reflect::get(&position, &"coords".into()).map_err(|_| GeolocationError::Unknown)?;
    match (number(&coords, "latitude"), number(&coords, "longitude")) {
        (Some(lat), Some(lng)) => Ok(GeoPoint::new(lat, lng)),
        _ => Err(GeolocationError::PositionUnavailable),
    }
}

fn number(value: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(value, &key.into()).ok()?.as_f64()
}
