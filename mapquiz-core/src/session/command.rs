use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::geometry::bounds::Bounds;
use crate::geometry::latlng::LatLng;

pub const CORRECT_COLOR: &str = "#4CAF50";
pub const INCORRECT_COLOR: &str = "#F44336";
const MARKER_STROKE: &str = "#FFFFFF";

/// A side effect for the host to run: drawing on the map widget, writing a
/// display sink, scheduling the deferred advance, or persisting a finished
/// time. The session never performs these itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(tag = "kind")]
pub enum Command {
    DrawMarker {
        at: LatLng,
        style: MarkerStyle,
    },
    DrawPolygon {
        vertices: Vec<LatLng>,
        style: OverlayStyle,
    },
    DrawRectangle {
        bounds: Bounds,
        style: OverlayStyle,
    },
    ClearOverlays,
    FitView {
        bounds: Bounds,
        padding: f64,
    },
    LockView {
        center: LatLng,
        zoom: f64,
    },
    SetText {
        target: TextTarget,
        text: String,
    },
    ShowPanel {
        panel: Panel,
    },
    HidePanel {
        panel: Panel,
    },
    /// Fire [`super::Event::AdvanceDue`] after the delay; the generation lets
    /// a reset invalidate it.
    ScheduleAdvance {
        after_secs: u64,
        generation: u64,
    },
    /// A completed game's elapsed seconds, for the persistent store.
    RecordTime {
        seconds: u64,
    },
}

/// Opaque display sinks the host maps to its UI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Tsify)]
pub enum TextTarget {
    Score,
    HighScore,
    Timer,
    LocationName,
    Feedback,
    FinalScore,
    FinalTime,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Tsify)]
pub enum Panel {
    Feedback,
    GameOver,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Tsify)]
pub enum MarkerAnimation {
    Drop,
    Bounce,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
pub struct MarkerStyle {
    pub scale: f64,
    pub fill_color: String,
    pub fill_opacity: f64,
    pub stroke_color: String,
    pub stroke_weight: f64,
    pub animation: MarkerAnimation,
}

impl MarkerStyle {
    /// The player's click.
    pub fn answer(correct: bool) -> Self {
        MarkerStyle {
            scale: 10.,
            fill_color: verdict_color(correct).into(),
            fill_opacity: 1.,
            stroke_color: MARKER_STROKE.into(),
            stroke_weight: 2.,
            animation: MarkerAnimation::Drop,
        }
    }

    /// The landmark's true center.
    pub fn target(correct: bool) -> Self {
        MarkerStyle {
            scale: 12.,
            fill_color: verdict_color(correct).into(),
            fill_opacity: 0.6,
            stroke_color: MARKER_STROKE.into(),
            stroke_weight: 3.,
            animation: MarkerAnimation::Bounce,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
pub struct OverlayStyle {
    pub stroke_color: String,
    pub stroke_opacity: f64,
    pub stroke_weight: f64,
    pub fill_color: String,
    pub fill_opacity: f64,
}

impl OverlayStyle {
    pub fn verdict(correct: bool) -> Self {
        let color = verdict_color(correct);
        OverlayStyle {
            stroke_color: color.into(),
            stroke_opacity: 0.8,
            stroke_weight: 2.,
            fill_color: color.into(),
            fill_opacity: 0.35,
        }
    }
}

pub fn verdict_color(correct: bool) -> &'static str {
    if correct {
        CORRECT_COLOR
    } else {
        INCORRECT_COLOR
    }
}
