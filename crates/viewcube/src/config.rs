use emath::{Pos2, Rect, Vec2};
use enumset::EnumSetType;
use thiserror::Error;

use crate::math::Orientation;

/// Field of view of the gizmo's own perspective camera, in degrees.
pub const GIZMO_FOV_DEG: f64 = 30.0;
/// Near plane distance of the gizmo camera.
pub const GIZMO_NEAR: f64 = 1.0;
/// Far plane distance of the gizmo camera.
pub const GIZMO_FAR: f64 = 10.0;
/// Distance from the gizmo camera eye to the cube center.
pub const GIZMO_EYE_DISTANCE: f64 = 5.0;

/// Default side length of the square gizmo viewport, in pixels.
pub const DEFAULT_GIZMO_SIZE: f32 = 100.0;
/// Default margin between the gizmo viewport and the window corner.
pub const DEFAULT_GIZMO_MARGIN: f32 = 10.0;

/// Default tolerance band around the unit square when classifying face
/// coordinates. Points up to this far outside `[0, 1]` are clamped in.
pub const DEFAULT_TOLERANCE: f64 = 0.05;
/// Default break points along each face axis, producing the 3x3 sub-cell
/// grid. The two interior ratios are tuning values, not derived geometry.
pub const DEFAULT_SUBDIVISION_RATIOS: [f64; 4] = [0.0, 0.1, 0.9, 1.0];

/// Default outer radius of the face disc in the radial-band picking mode,
/// as a fraction of the viewport.
pub const DEFAULT_FACE_RADIUS: f64 = 0.4;
/// Default outer radius of the edge band in the radial-band picking mode.
pub const DEFAULT_EDGE_BAND_RADIUS: f64 = 0.47;
/// Default outer radius of the corner band in the radial-band picking mode.
pub const DEFAULT_CORNER_BAND_RADIUS: f64 = 0.5;
/// Default angular width of one edge sector, in degrees.
pub const DEFAULT_EDGE_SECTOR_DEG: f64 = 30.0;
/// Default angular offset of the edge sectors, so sector boundaries fall
/// between edges rather than on them.
pub const DEFAULT_EDGE_SECTOR_OFFSET_DEG: f64 = 15.0;

/// Rays whose unnormalized length falls below this are rejected as
/// degenerate instead of dividing by a near-zero value.
pub(crate) const RAY_EPSILON: f64 = 1e-8;

/// How precisely pointer positions are mapped to cube regions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PickingFidelity {
    /// Project the pointer through the gizmo camera into the cube's local
    /// frame and classify against the subdivided faces.
    #[default]
    FaceGrid,
    /// Approximate edges and corners with concentric 2d bands around the
    /// viewport center, without unprojecting.
    RadialBands,
}

/// Modifier keys reported with pointer button events.
#[derive(Debug, EnumSetType, Hash)]
pub enum Modifier {
    Shift,
    Ctrl,
    Alt,
}

/// Pointer buttons. Only [`PointerButton::Primary`] drives the gizmo.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Configuration of a view cube.
///
/// Defines where the gizmo viewport sits, the fixed perspective of its
/// camera, and the tuning values of the region classifier.
#[derive(Debug, Copy, Clone)]
pub struct ViewCubeConfig {
    /// Side length of the square gizmo viewport, in pixels.
    pub gizmo_size: f32,
    /// Margin between the gizmo viewport and the top-right window corner.
    pub gizmo_margin: f32,
    /// Vertical field of view of the gizmo camera, in degrees.
    pub fov_deg: f64,
    /// Near plane of the gizmo camera.
    pub near: f64,
    /// Far plane of the gizmo camera.
    pub far: f64,
    /// Distance from the eye to the cube center.
    pub eye_distance: f64,
    /// Tolerance band around the unit square for face classification.
    pub tolerance: f64,
    /// Break points of the 3x3 sub-cell grid along each face axis.
    /// Must start at 0, end at 1 and be non-decreasing.
    pub subdivision_ratios: [f64; 4],
    /// Face disc radius for [`PickingFidelity::RadialBands`].
    pub face_radius: f64,
    /// Edge band outer radius for [`PickingFidelity::RadialBands`].
    pub edge_band_radius: f64,
    /// Corner band outer radius for [`PickingFidelity::RadialBands`].
    pub corner_band_radius: f64,
    /// Angular width of one edge sector, in degrees.
    pub edge_sector_deg: f64,
    /// Angular offset of the edge sectors, in degrees.
    pub edge_sector_offset_deg: f64,
    /// Which picking mode the classifier uses.
    pub fidelity: PickingFidelity,
    /// Modifier that turns a gizmo drag into a roll around the Z axis.
    pub roll_modifier: Modifier,
    /// Orientation both views start in.
    pub initial_orientation: Orientation,
}

impl Default for ViewCubeConfig {
    fn default() -> Self {
        Self {
            gizmo_size: DEFAULT_GIZMO_SIZE,
            gizmo_margin: DEFAULT_GIZMO_MARGIN,
            fov_deg: GIZMO_FOV_DEG,
            near: GIZMO_NEAR,
            far: GIZMO_FAR,
            eye_distance: GIZMO_EYE_DISTANCE,
            tolerance: DEFAULT_TOLERANCE,
            subdivision_ratios: DEFAULT_SUBDIVISION_RATIOS,
            face_radius: DEFAULT_FACE_RADIUS,
            edge_band_radius: DEFAULT_EDGE_BAND_RADIUS,
            corner_band_radius: DEFAULT_CORNER_BAND_RADIUS,
            edge_sector_deg: DEFAULT_EDGE_SECTOR_DEG,
            edge_sector_offset_deg: DEFAULT_EDGE_SECTOR_OFFSET_DEG,
            fidelity: PickingFidelity::default(),
            roll_modifier: Modifier::Shift,
            // The isometric view the gizmo traditionally opens with.
            initial_orientation: Orientation::new(35.264, 45.0, 0.0),
        }
    }
}

impl ViewCubeConfig {
    /// Screen rectangle of the gizmo viewport for the given window size,
    /// in bottom-left-origin coordinates: a square tucked into the
    /// top-right corner with [`Self::gizmo_margin`] pixels of clearance.
    pub fn gizmo_viewport(&self, window: Vec2) -> Rect {
        Rect::from_min_size(
            Pos2::new(
                window.x - self.gizmo_size - self.gizmo_margin,
                window.y - self.gizmo_size - self.gizmo_margin,
            ),
            Vec2::splat(self.gizmo_size),
        )
    }

    /// Checks the configuration for values the geometry routines cannot
    /// handle. The interaction core itself assumes a valid configuration;
    /// embedders should surface these errors at setup time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gizmo_size <= 0.0 {
            return Err(ConfigError::NonPositiveViewport(self.gizmo_size));
        }
        if self.near <= 0.0 || self.far <= self.near || self.eye_distance <= self.near {
            return Err(ConfigError::InvalidCamera);
        }
        if !(self.fov_deg > 0.0 && self.fov_deg < 180.0) {
            return Err(ConfigError::InvalidCamera);
        }
        let r = &self.subdivision_ratios;
        if r[0] < 0.0 || r[3] > 1.0 || r.windows(2).any(|w| w[0] > w[1]) {
            return Err(ConfigError::UnorderedRatios(*r));
        }
        if self.tolerance < 0.0 {
            return Err(ConfigError::NegativeTolerance(self.tolerance));
        }
        if self.face_radius >= self.edge_band_radius
            || self.edge_band_radius >= self.corner_band_radius
        {
            return Err(ConfigError::UnorderedBands);
        }
        Ok(())
    }
}

/// A configuration value the picking geometry cannot work with.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("gizmo viewport size must be positive, got {0}")]
    NonPositiveViewport(f32),
    #[error("camera requires 0 < near < far, near < eye distance and 0 < fov < 180")]
    InvalidCamera,
    #[error("subdivision ratios must be non-decreasing within [0, 1], got {0:?}")]
    UnorderedRatios([f64; 4]),
    #[error("classification tolerance must be non-negative, got {0}")]
    NegativeTolerance(f64),
    #[error("radial bands must satisfy face < edge < corner radius")]
    UnorderedBands,
}
