pub use crate::classifier::RegionClassifier;
pub use crate::config::{ConfigError, Modifier, PickingFidelity, PointerButton, ViewCubeConfig};
pub use crate::controller::{DragState, OrientationController};
pub use crate::gizmo::{PointerEvent, Response, ViewCube};
pub use crate::hover::HoverStateTracker;
pub use crate::math::{Orientation, window_to_render};
pub use crate::projector::{CoordinateProjector, LocalRay};
pub use crate::region::{CORNERS, EDGES, FACES, FaceDescriptor, Region};

pub use enumset::{EnumSet, enum_set};

pub use mint;

pub use emath::{Pos2, Rect, Vec2};
