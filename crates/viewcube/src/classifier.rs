use emath::{Pos2, Rect};
use glam::{DVec2, DVec3};

use crate::config::{PickingFidelity, ViewCubeConfig};
use crate::projector::LocalRay;
use crate::region::{CELLS_PER_AXIS, CENTER_CELL, CORNER_COUNT, EDGE_COUNT, FACES, Region};

/// Classifies local-frame rays (or raw viewport positions, in the
/// reduced-fidelity mode) into the fixed region taxonomy: 6 faces of 9
/// sub-cells each, 12 edges and 8 corners.
///
/// Classification is total; everything that misses the cube comes back as
/// [`Region::None`].
#[derive(Debug, Copy, Clone)]
pub struct RegionClassifier<'a> {
    config: &'a ViewCubeConfig,
}

impl<'a> RegionClassifier<'a> {
    pub fn new(config: &'a ViewCubeConfig) -> Self {
        Self { config }
    }

    /// Classifies against the subdivided faces ([`PickingFidelity::FaceGrid`]).
    ///
    /// The camera-facing face is the one whose outward normal is most
    /// directly opposed to the ray; equal dot products resolve to the lower
    /// face index. The ray is then projected onto that face's plane and the
    /// resulting `(u, v)` looked up in the sub-cell grid, with a tolerance
    /// band around the unit square.
    pub fn classify(&self, ray: LocalRay) -> Region {
        let mut candidate: Option<(usize, f64)> = None;
        for (i, face) in FACES.iter().enumerate() {
            let dot = ray.direction.dot(face.normal);
            if dot < 0.0 && candidate.is_none_or(|(_, best)| dot < best) {
                candidate = Some((i, dot));
            }
        }
        // Grazing or degenerate: no face turned towards the camera.
        let Some((face, dot)) = candidate else {
            return Region::None;
        };

        let (u, v) = face_uv(face, ray.direction * (-1.0 / dot));

        let tolerance = self.config.tolerance;
        if u < -tolerance || u > 1.0 + tolerance || v < -tolerance || v > 1.0 + tolerance {
            return Region::None;
        }

        let ratios = &self.config.subdivision_ratios;
        let cell_x = cell_index(u.clamp(0.0, 1.0), ratios);
        let cell_y = cell_index(v.clamp(0.0, 1.0), ratios);

        Region::Face {
            face,
            cell: cell_y * CELLS_PER_AXIS + cell_x,
        }
    }

    /// Classifies a viewport position with the 2d radial-band
    /// approximation ([`PickingFidelity::RadialBands`]).
    ///
    /// Concentric bands around the viewport center stand in for the
    /// projected cube outline: an inner disc maps to the camera-facing
    /// face, a narrow band around the silhouette to edges by angular
    /// sector, and an even narrower outer band to corners by quadrant.
    pub fn classify_coarse(&self, pos: Pos2, viewport: Rect) -> Region {
        if !viewport.contains(pos) {
            return Region::None;
        }

        let offset = DVec2::new(
            f64::from((pos.x - viewport.min.x) / viewport.width()) - 0.5,
            f64::from((pos.y - viewport.min.y) / viewport.height()) - 0.5,
        );
        let dist = offset.length();

        if dist > self.config.corner_band_radius {
            Region::None
        } else if dist > self.config.edge_band_radius {
            Region::Corner(self.corner_sector(offset))
        } else if dist > self.config.face_radius {
            Region::Edge(self.edge_sector(offset))
        } else {
            Region::Face {
                face: facing_face(offset),
                cell: CENTER_CELL,
            }
        }
    }

    /// Which picking mode [`Self::classify`]/[`Self::classify_coarse`]
    /// corresponds to in the active configuration.
    pub fn fidelity(&self) -> PickingFidelity {
        self.config.fidelity
    }

    /// Edge id from the angular sector of the offset around the viewport
    /// center. Sectors are offset by half a width so their boundaries fall
    /// between edges.
    fn edge_sector(&self, offset: DVec2) -> usize {
        let angle = offset.y.atan2(offset.x).to_degrees();
        let sector = (angle + 180.0 + self.config.edge_sector_offset_deg) / self.config.edge_sector_deg;
        sector as usize % EDGE_COUNT
    }

    /// Corner id from the quadrant signs of the offset plus the hemisphere
    /// of the camera-facing face.
    fn corner_sector(&self, offset: DVec2) -> usize {
        let quadrant = usize::from(offset.x > 0.0) | (usize::from(offset.y > 0.0) << 1);
        let hemisphere = facing_face(offset) % 2;
        (quadrant | (hemisphere << 2)) % CORNER_COUNT
    }
}

/// Camera-facing face for the 2d approximation: the offset is lifted to a
/// 3d direction biased towards the viewer and matched against the outward
/// face normals. Ties resolve to the lower face index.
fn facing_face(offset: DVec2) -> usize {
    let dir = DVec3::new(offset.x, offset.y, 0.5).normalize();
    let mut best = (0, f64::MIN);
    for (i, face) in FACES.iter().enumerate() {
        let dot = dir.dot(face.normal);
        if dot > best.1 {
            best = (i, dot);
        }
    }
    best.0
}

/// Face-plane coordinates of the projected ray, in `[0, 1]` across the
/// face. `projected` is the ray direction scaled so that its component
/// along the inward face normal is exactly one, which drops the ray onto
/// the face plane.
///
/// Each face maps a pair of local axes to `(u, v)`, with signs chosen so
/// that every face shares the winding of its descriptor quad (u right,
/// v up, as seen from outside the cube).
fn face_uv(face: usize, projected: DVec3) -> (f64, f64) {
    match face {
        // +X: u along -Z, v along +Y
        0 => (-projected.z + 0.5, projected.y + 0.5),
        // -X: u along +Z, v along +Y
        1 => (projected.z + 0.5, projected.y + 0.5),
        // +Y: u along +X, v along -Z
        2 => (projected.x + 0.5, -projected.z + 0.5),
        // -Y: u along +X, v along +Z
        3 => (projected.x + 0.5, projected.z + 0.5),
        // +Z: u along +X, v along +Y
        4 => (projected.x + 0.5, projected.y + 0.5),
        // -Z: u along -X, v along +Y
        _ => (-projected.x + 0.5, projected.y + 0.5),
    }
}

/// Index of the grid interval containing `t`. A value sitting exactly on a
/// break point belongs to the lower interval.
fn cell_index(t: f64, ratios: &[f64; 4]) -> usize {
    for i in 0..CELLS_PER_AXIS - 1 {
        if t <= ratios[i + 1] {
            return i;
        }
    }
    CELLS_PER_AXIS - 1
}
