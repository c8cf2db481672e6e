//! WASM bindings for the campus map-quiz engine.
//!
//! Exposes the pure session state machine to a browser map host. The host
//! owns the map widget, DOM, timers and storage: it feeds events in through
//! [`handle`] and runs the commands each transition returns.

use log::{error, info};
use mapquiz_core::{catalog, Contains, Event, LatLng, Region, Session};
use wasm_bindgen::prelude::*;
use wasm_bindgen_console_logger::DEFAULT_LOGGER;

/// Initializes the logging system for WASM.
///
/// Sets up console logging and panic hooks for better error reporting in the
/// browser. Should be called once at application startup.
#[wasm_bindgen]
pub fn init_logs() {
    match log::set_logger(&DEFAULT_LOGGER) {
        Ok(_) => info!("Initialized console.logger"),
        Err(e) => error!("failed to set console.logger: {}", e),
    };
    console_error_panic_hook::set_once();
}

/// Updates the log level filter.
///
/// # Arguments
/// * `level` - Log level string: "error", "warn", "info", "debug", or
///   "trace". Defaults to "info" if empty or null.
#[wasm_bindgen]
pub fn update_log_level(level: JsValue) {
    let level: Option<String> = serde_wasm_bindgen::from_value(level).unwrap();
    let level = mapquiz_core::parse_log_level(level.as_deref());
    log::set_max_level(level);
}

/// The built-in campus landmark list.
#[wasm_bindgen]
pub fn builtin_regions() -> JsValue {
    serde_wasm_bindgen::to_value(&catalog::builtin()).unwrap()
}

/// Parses and validates a JSON region list.
///
/// # Arguments
/// * `json` - A JSON array of region objects.
///
/// # Returns
/// The validated region list, or throws with the configuration defect.
#[wasm_bindgen]
pub fn parse_regions(json: String) -> Result<JsValue, JsValue> {
    let regions = catalog::parse(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(serde_wasm_bindgen::to_value(&regions).unwrap())
}

/// Starts a new game.
///
/// # Arguments
/// * `regions` - Region list (e.g. from [`builtin_regions`]).
/// * `high_score` - Stored best time in seconds, if any, for display.
/// * `now` - Host clock reading in whole seconds.
///
/// # Returns
/// A transition `{ session, commands }`: the fresh session plus the display
/// and overlay reset commands to run. Throws if the region list is invalid.
#[wasm_bindgen]
pub fn new_session(regions: JsValue, high_score: Option<u64>, now: u64) -> Result<JsValue, JsValue> {
    let regions: Vec<Region> = serde_wasm_bindgen::from_value(regions).unwrap();
    let transition =
        Session::new(regions, high_score, now).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(serde_wasm_bindgen::to_value(&transition).unwrap())
}

/// Folds one host event through the session.
///
/// # Arguments
/// * `session` - Current session value (from [`new_session`] or a previous
///   [`handle`] call).
/// * `event` - The host event: map ready, view fitted, double-click, tick,
///   advance due, or play again.
///
/// # Returns
/// The next transition `{ session, commands }`.
///
/// # Panics
/// If the session or event value does not deserialize.
#[wasm_bindgen]
pub fn handle(session: JsValue, event: JsValue) -> JsValue {
    let session: Session = serde_wasm_bindgen::from_value(session).unwrap();
    let event: Event = serde_wasm_bindgen::from_value(event).unwrap();
    let transition = session.handle(event);
    serde_wasm_bindgen::to_value(&transition).unwrap()
}

/// Judges a single point against a region.
///
/// # Arguments
/// * `region` - The target region.
/// * `point` - The query point.
///
/// # Returns
/// True iff the point falls inside the region's resolved extent.
#[wasm_bindgen]
pub fn judge(region: JsValue, point: JsValue) -> bool {
    let region: Region = serde_wasm_bindgen::from_value(region).unwrap();
    let point: LatLng = serde_wasm_bindgen::from_value(point).unwrap();
    region.contains(&point)
}

/// Extent-rectangle corners for drawing a region outline.
///
/// # Arguments
/// * `region` - The target region.
///
/// # Returns
/// Four corners (top-left, top-right, bottom-right, bottom-left), rotated
/// about the center when the region carries a rotation.
#[wasm_bindgen]
pub fn region_corners(region: JsValue) -> JsValue {
    let region: Region = serde_wasm_bindgen::from_value(region).unwrap();
    serde_wasm_bindgen::to_value(&region.corners().to_vec()).unwrap()
}
