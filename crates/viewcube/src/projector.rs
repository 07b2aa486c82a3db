use emath::{Pos2, Rect};
use glam::DVec3;

use crate::config::{RAY_EPSILON, ViewCubeConfig};
use crate::math::Orientation;

/// A pointer ray expressed in the cube's local, unrotated frame.
#[derive(Debug, Copy, Clone)]
pub struct LocalRay {
    /// The screen position the ray originated from.
    pub screen_pos: Pos2,
    /// Unit direction of the ray in the local frame.
    pub direction: DVec3,
}

/// Maps screen positions inside the gizmo viewport to rays in the cube's
/// local frame, undoing the gizmo's perspective projection and rotation.
///
/// Purely functional: identical inputs always produce identical rays.
#[derive(Debug, Copy, Clone)]
pub struct CoordinateProjector<'a> {
    config: &'a ViewCubeConfig,
}

impl<'a> CoordinateProjector<'a> {
    pub fn new(config: &'a ViewCubeConfig) -> Self {
        Self { config }
    }

    /// Projects a screen position through the gizmo camera into the local
    /// frame of the cube.
    ///
    /// Returns `None` when the position lies outside the viewport or the
    /// resulting ray is degenerate. `pos` and `viewport` are in
    /// bottom-left-origin render coordinates; `orientation` is the gizmo's
    /// current rotation, which is inverted here so that classification can
    /// work against the unrotated descriptor tables.
    pub fn project(
        &self,
        pos: Pos2,
        viewport: Rect,
        orientation: Orientation,
    ) -> Option<LocalRay> {
        if !viewport.contains(pos) {
            return None;
        }

        // Normalized device coordinates in [-1, 1].
        let ndc_x = f64::from(2.0 * (pos.x - viewport.min.x) / viewport.width() - 1.0);
        let ndc_y = f64::from(2.0 * (pos.y - viewport.min.y) / viewport.height() - 1.0);

        // Point on the near plane, with the eye on the +Z axis looking at
        // the origin. The ray runs from the eye through that point.
        let tan_half_fov = (self.config.fov_deg.to_radians() * 0.5).tan();
        let ray = DVec3::new(
            ndc_x * self.config.near * tan_half_fov,
            ndc_y * self.config.near * tan_half_fov,
            self.config.near - self.config.eye_distance,
        );

        let length = ray.length();
        if length < RAY_EPSILON {
            return None;
        }

        Some(LocalRay {
            screen_pos: pos,
            direction: orientation.rotate_into_local(ray / length),
        })
    }
}
