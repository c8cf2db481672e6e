use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::geometry::latlng::LatLng;

/// A host input, folded through [`super::Session::handle`].
///
/// `now` fields carry the host clock in whole seconds; the session never
/// reads a clock itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(tag = "kind")]
pub enum Event {
    /// The map widget finished loading.
    MapReady,
    /// The host fitted the view and reports the resulting zoom.
    ViewFitted { zoom: f64 },
    /// The player double-clicked an answer.
    DoubleClick { point: LatLng, now: u64 },
    /// One-second display refresh.
    Tick { now: u64 },
    /// A scheduled advance fired.
    AdvanceDue { generation: u64, now: u64 },
    /// The player asked for a fresh game.
    PlayAgain { now: u64 },
}
