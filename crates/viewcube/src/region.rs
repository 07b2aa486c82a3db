use glam::DVec3;

use crate::math::Orientation;

/// Number of faces on the cube.
pub const FACE_COUNT: usize = 6;
/// Number of sub-cells per face.
pub const CELLS_PER_FACE: usize = 9;
/// Number of cells along one face axis.
pub const CELLS_PER_AXIS: usize = 3;
/// Number of highlightable edges.
pub const EDGE_COUNT: usize = 12;
/// Number of highlightable corners.
pub const CORNER_COUNT: usize = 8;
/// Sub-cell id of the center cell of a face.
pub const CENTER_CELL: usize = 4;

/// The classified hit-test target of a pointer position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Region {
    /// Outside the gizmo viewport, or off the cube.
    #[default]
    None,
    /// A sub-cell of a face: `face` in `0..6`, `cell` in `0..9`
    /// (row-major, `cell = v_index * 3 + u_index`).
    Face { face: usize, cell: usize },
    /// One of the 12 cube edges.
    Edge(usize),
    /// One of the 8 cube corners.
    Corner(usize),
}

impl Region {
    /// Whether clicking this region snaps the orientation.
    pub fn is_pickable(self) -> bool {
        !matches!(self, Self::None)
    }

    /// The canonical orientation a click on this region snaps to, or
    /// `None` for the background.
    ///
    /// Faces snap to their table entry; edges and corners snap to the
    /// arithmetic average of their adjacent faces' entries.
    pub fn snap_target(self) -> Option<Orientation> {
        match self {
            Self::None => None,
            Self::Face { face, .. } => Some(FACES[face].snap),
            Self::Edge(edge) => {
                let [a, b] = EDGE_FACES[edge];
                Some(Orientation::average(&[FACES[a].snap, FACES[b].snap]))
            }
            Self::Corner(corner) => {
                let [a, b, c] = CORNER_FACES[corner];
                Some(Orientation::average(&[
                    FACES[a].snap,
                    FACES[b].snap,
                    FACES[c].snap,
                ]))
            }
        }
    }
}

/// One face of the unit cube.
#[derive(Debug, Copy, Clone)]
pub struct FaceDescriptor {
    /// Outward unit normal.
    pub normal: DVec3,
    /// The face quad in the local frame, wound bottom-left, bottom-right,
    /// top-right, top-left as seen from outside.
    pub corners: [DVec3; 4],
    /// Orientation a center click on this face snaps to.
    pub snap: Orientation,
}

impl FaceDescriptor {
    /// Point on the face quad at normalized coordinates `(u, v)`,
    /// bilinearly interpolated between the corner points.
    pub fn point_at(&self, u: f64, v: f64) -> DVec3 {
        let bottom = self.corners[0].lerp(self.corners[1], u);
        let top = self.corners[3].lerp(self.corners[2], u);
        bottom.lerp(top, v)
    }

    /// The quad of one sub-cell, for highlight rendering. `ratios` is the
    /// shared break-point table; `cell` is a row-major id in `0..9`.
    pub fn cell_quad(&self, cell: usize, ratios: &[f64; 4]) -> [DVec3; 4] {
        let cx = cell % CELLS_PER_AXIS;
        let cy = cell / CELLS_PER_AXIS;
        let (u0, u1) = (ratios[cx], ratios[cx + 1]);
        let (v0, v1) = (ratios[cy], ratios[cy + 1]);
        [
            self.point_at(u0, v0),
            self.point_at(u1, v0),
            self.point_at(u1, v1),
            self.point_at(u0, v1),
        ]
    }
}

/// The six faces, ordered +X, -X, +Y, -Y, +Z, -Z.
pub const FACES: [FaceDescriptor; FACE_COUNT] = [
    FaceDescriptor {
        normal: DVec3::new(1.0, 0.0, 0.0),
        corners: [
            DVec3::new(0.5, -0.5, 0.5),
            DVec3::new(0.5, -0.5, -0.5),
            DVec3::new(0.5, 0.5, -0.5),
            DVec3::new(0.5, 0.5, 0.5),
        ],
        snap: Orientation::new(0.0, 90.0, 0.0),
    },
    FaceDescriptor {
        normal: DVec3::new(-1.0, 0.0, 0.0),
        corners: [
            DVec3::new(-0.5, -0.5, -0.5),
            DVec3::new(-0.5, -0.5, 0.5),
            DVec3::new(-0.5, 0.5, 0.5),
            DVec3::new(-0.5, 0.5, -0.5),
        ],
        snap: Orientation::new(0.0, -90.0, 0.0),
    },
    FaceDescriptor {
        normal: DVec3::new(0.0, 1.0, 0.0),
        corners: [
            DVec3::new(-0.5, 0.5, 0.5),
            DVec3::new(0.5, 0.5, 0.5),
            DVec3::new(0.5, 0.5, -0.5),
            DVec3::new(-0.5, 0.5, -0.5),
        ],
        snap: Orientation::new(-90.0, 0.0, 0.0),
    },
    FaceDescriptor {
        normal: DVec3::new(0.0, -1.0, 0.0),
        corners: [
            DVec3::new(-0.5, -0.5, -0.5),
            DVec3::new(0.5, -0.5, -0.5),
            DVec3::new(0.5, -0.5, 0.5),
            DVec3::new(-0.5, -0.5, 0.5),
        ],
        snap: Orientation::new(90.0, 0.0, 0.0),
    },
    FaceDescriptor {
        normal: DVec3::new(0.0, 0.0, 1.0),
        corners: [
            DVec3::new(-0.5, -0.5, 0.5),
            DVec3::new(0.5, -0.5, 0.5),
            DVec3::new(0.5, 0.5, 0.5),
            DVec3::new(-0.5, 0.5, 0.5),
        ],
        snap: Orientation::new(0.0, 0.0, 0.0),
    },
    FaceDescriptor {
        normal: DVec3::new(0.0, 0.0, -1.0),
        corners: [
            DVec3::new(0.5, -0.5, -0.5),
            DVec3::new(-0.5, -0.5, -0.5),
            DVec3::new(-0.5, 0.5, -0.5),
            DVec3::new(0.5, 0.5, -0.5),
        ],
        snap: Orientation::new(0.0, 180.0, 0.0),
    },
];

/// The eight cube vertices: the +Z quad counterclockwise from the bottom
/// left, then the -Z quad in the same order.
pub const CORNERS: [DVec3; CORNER_COUNT] = [
    DVec3::new(-0.5, -0.5, 0.5),
    DVec3::new(0.5, -0.5, 0.5),
    DVec3::new(0.5, 0.5, 0.5),
    DVec3::new(-0.5, 0.5, 0.5),
    DVec3::new(-0.5, -0.5, -0.5),
    DVec3::new(0.5, -0.5, -0.5),
    DVec3::new(0.5, 0.5, -0.5),
    DVec3::new(-0.5, 0.5, -0.5),
];

/// The twelve edges as pairs of indices into [`CORNERS`]: the +Z face
/// ring, the -Z face ring, then the four side edges.
pub const EDGES: [[usize; 2]; EDGE_COUNT] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// The two faces sharing each edge.
pub const EDGE_FACES: [[usize; 2]; EDGE_COUNT] = [
    [3, 4],
    [0, 4],
    [2, 4],
    [1, 4],
    [3, 5],
    [0, 5],
    [2, 5],
    [1, 5],
    [1, 3],
    [0, 3],
    [0, 2],
    [1, 2],
];

/// The three faces meeting at each corner.
pub const CORNER_FACES: [[usize; 3]; CORNER_COUNT] = [
    [1, 3, 4],
    [0, 3, 4],
    [0, 2, 4],
    [1, 2, 4],
    [1, 3, 5],
    [0, 3, 5],
    [0, 2, 5],
    [1, 2, 5],
];

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn corner_on_face(corner: DVec3, face: usize) -> bool {
        // A point lies on a face plane when its coordinate along the
        // outward normal equals the half side length.
        (corner.dot(FACES[face].normal) - 0.5).abs() < 1e-12
    }

    #[test]
    fn face_corners_lie_on_their_plane() {
        for (i, face) in FACES.iter().enumerate() {
            for corner in face.corners {
                assert!(corner_on_face(corner, i), "face {i}");
            }
        }
    }

    #[test]
    fn edge_adjacency_matches_geometry() {
        for (i, (edge, faces)) in EDGES.iter().zip(EDGE_FACES).enumerate() {
            for face in faces {
                assert!(
                    corner_on_face(CORNERS[edge[0]], face)
                        && corner_on_face(CORNERS[edge[1]], face),
                    "edge {i} is not on face {face}"
                );
            }
        }
    }

    #[test]
    fn corner_adjacency_matches_geometry() {
        for (i, faces) in CORNER_FACES.iter().enumerate() {
            for &face in faces {
                assert!(corner_on_face(CORNERS[i], face), "corner {i}, face {face}");
            }
        }
    }

    #[test]
    fn face_snap_targets_are_the_canonical_views() {
        let front = Region::Face { face: 4, cell: 4 }.snap_target().unwrap();
        assert_eq!(front, Orientation::IDENTITY);

        let right = Region::Face { face: 0, cell: 0 }.snap_target().unwrap();
        assert_relative_eq!(right.y, 90.0);
    }

    #[test]
    fn edge_snap_is_the_average_of_its_two_faces() {
        // Edge 0 joins the -Y and +Z faces: (90, 0, 0) and (0, 0, 0).
        let target = Region::Edge(0).snap_target().unwrap();
        assert_relative_eq!(target.x, 45.0);
        assert_relative_eq!(target.y, 0.0);
        assert_relative_eq!(target.z, 0.0);
    }

    #[test]
    fn corner_snap_is_the_average_of_its_three_faces() {
        // Corner 2 joins +X, +Y and +Z: (0, 90), (-90, 0), (0, 0).
        let target = Region::Corner(2).snap_target().unwrap();
        assert_relative_eq!(target.x, -30.0);
        assert_relative_eq!(target.y, 30.0);
        assert_relative_eq!(target.z, 0.0);
    }

    #[test]
    fn background_has_no_snap_target() {
        assert_eq!(Region::None.snap_target(), None);
    }

    #[test]
    fn cell_quad_of_the_center_cell_spans_the_interior_ratios() {
        let ratios = [0.0, 0.1, 0.9, 1.0];
        let quad = FACES[4].cell_quad(CENTER_CELL, &ratios);
        // Front face: u maps to x, v maps to y, z stays on the face plane.
        assert_relative_eq!(quad[0].x, -0.4);
        assert_relative_eq!(quad[0].y, -0.4);
        assert_relative_eq!(quad[2].x, 0.4);
        assert_relative_eq!(quad[2].y, 0.4);
        for p in quad {
            assert_relative_eq!(p.z, 0.5);
        }
    }
}
