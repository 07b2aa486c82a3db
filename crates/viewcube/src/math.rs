pub use emath::{Pos2, Rect, Vec2};
pub use glam::{DQuat, DVec2, DVec3};

/// Rotation state of a view: signed angles in degrees about the X, Y and Z
/// axes, composed in a fixed order.
///
/// The forward composition applies Z first, then X, then Y when rotating a
/// vector from the cube's local frame into the view frame. Angles are not
/// wrapped to any range; orbiting accumulates them freely.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Orientation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Orientation {
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Quaternion rotating from the local (unrotated) frame to the view
    /// frame. The matrix product is `Ry * Rx * Rz`, so a vector passed
    /// through it is rotated about Z first and Y last.
    pub fn to_quat(self) -> DQuat {
        DQuat::from_rotation_y(self.y.to_radians())
            * DQuat::from_rotation_x(self.x.to_radians())
            * DQuat::from_rotation_z(self.z.to_radians())
    }

    /// Rotates a view-frame vector back into the local frame, undoing
    /// [`Self::to_quat`]: inverse Y first, then inverse X, then inverse Z.
    pub fn rotate_into_local(self, v: DVec3) -> DVec3 {
        self.to_quat().conjugate() * v
    }

    /// Component-wise arithmetic mean, used for edge and corner snap
    /// targets averaged over the adjacent faces.
    pub(crate) fn average(orientations: &[Self]) -> Self {
        let n = orientations.len() as f64;
        let mut sum = Self::IDENTITY;
        for o in orientations {
            sum.x += o.x;
            sum.y += o.y;
            sum.z += o.z;
        }
        Self::new(sum.x / n, sum.y / n, sum.z / n)
    }
}

impl From<mint::Vector3<f64>> for Orientation {
    fn from(v: mint::Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Orientation> for mint::Vector3<f64> {
    fn from(o: Orientation) -> Self {
        Self {
            x: o.x,
            y: o.y,
            z: o.z,
        }
    }
}

/// Converts a top-left-origin window position to the bottom-up coordinate
/// space used by all geometry in this crate.
///
/// Input events arrive with y growing downwards; every viewport and
/// projection here assumes y growing upwards. This is the single place
/// where the flip happens.
pub fn window_to_render(pos: Pos2, window_height: f32) -> Pos2 {
    Pos2::new(pos.x, window_height - pos.y)
}
