//! Camera module for pan/zoom transforms.

use kurbo::{Affine, Vec2};
use serde::{Deserialize, Serialize};

/// View tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Minimum allowed zoom level.
    pub min_zoom: f64,
    /// Maximum allowed zoom level.
    pub max_zoom: f64,
    /// Spacing of the background grid in world units.
    pub grid_spacing: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            min_zoom: 0.5,
            max_zoom: 4.0,
            grid_spacing: 50.0,
        }
    }
}

/// View transform reported by the host: pan offset and zoom.
///
/// The zoom also scales the snap tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Current translation offset (pan)
    pub offset: Vec2,
    /// Current zoom level (1.0 = 100%)
    pub zoom: f64,
    /// Minimum allowed zoom level
    pub min_zoom: f64,
    /// Maximum allowed zoom level
    pub max_zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_settings(&ViewSettings::default())
    }
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Camera at the origin with zoom limits from `settings`.
    pub fn from_settings(settings: &ViewSettings) -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0_f64.max(settings.min_zoom).min(settings.max_zoom),
            min_zoom: settings.min_zoom,
            max_zoom: settings.max_zoom,
        }
    }

    /// World-to-screen transform handed to renderers.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    /// Pan the camera by a delta in screen coordinates.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Multiply the zoom by `factor`, staying within the limits.
    pub fn zoom_by(&mut self, factor: f64) {
        if factor <= 0.0 || !factor.is_finite() {
            return;
        }
        self.zoom = self.limit_zoom(self.zoom * factor);
    }

    /// Adopt a view transform reported by the host.
    pub fn set_view(&mut self, offset: Vec2, scale: f64) {
        self.offset = offset;
        if scale > 0.0 && scale.is_finite() {
            self.zoom = self.limit_zoom(scale);
        }
    }

    fn limit_zoom(&self, zoom: f64) -> f64 {
        zoom.max(self.min_zoom).min(self.max_zoom)
    }
}
