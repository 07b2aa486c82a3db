use emath::{Pos2, Rect, Vec2};
use enumset::EnumSet;

use crate::classifier::RegionClassifier;
use crate::config::{Modifier, PickingFidelity, PointerButton, ViewCubeConfig};
use crate::controller::{DragState, OrientationController};
use crate::hover::HoverStateTracker;
use crate::math::{Orientation, window_to_render};
use crate::projector::CoordinateProjector;
use crate::region::Region;

/// A view cube widget: the full interaction state of one orientation
/// gizmo.
///
/// The widget owns both orientations, the drag state machine and the hover
/// state, so several independent instances can coexist. Feed it pointer
/// events through [`ViewCube::handle`]; read the orientations and hovered
/// region back for rendering.
///
/// All event coordinates are top-left-origin window coordinates, as
/// delivered by common windowing libraries; the widget flips them once at
/// this boundary.
#[derive(Debug, Clone)]
pub struct ViewCube {
    config: ViewCubeConfig,
    controller: OrientationController,
    hover: HoverStateTracker,
}

impl Default for ViewCube {
    fn default() -> Self {
        Self::new(ViewCubeConfig::default())
    }
}

impl ViewCube {
    /// Creates a view cube from the given configuration.
    pub fn new(config: ViewCubeConfig) -> Self {
        Self {
            config,
            controller: OrientationController::new(config.initial_orientation),
            hover: HoverStateTracker::new(),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &ViewCubeConfig {
        &self.config
    }

    /// Replaces the configuration. Orientation and interaction state are
    /// kept.
    pub fn update_config(&mut self, config: ViewCubeConfig) {
        self.config = config;
    }

    /// Orientation of the gizmo, for building its view matrix.
    pub fn gizmo_orientation(&self) -> Orientation {
        self.controller.gizmo()
    }

    /// Orientation of the main scene view.
    pub fn main_orientation(&self) -> Orientation {
        self.controller.main()
    }

    /// Sets both orientations, e.g. when restoring a saved view.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.controller.set_orientation(orientation);
    }

    /// The region currently hovered, for highlight rendering.
    pub fn hovered_region(&self) -> Region {
        self.hover.current()
    }

    /// The drag interaction currently in progress, if any.
    pub fn drag_state(&self) -> DragState {
        self.controller.drag_state()
    }

    /// Processes one pointer event. `window` is the current window size in
    /// pixels; the gizmo viewport is recomputed from it on every event.
    pub fn handle(&mut self, event: PointerEvent, window: Vec2) -> Response {
        let viewport = self.config.gizmo_viewport(window);

        match event {
            PointerEvent::Moved { pos } => {
                let pos = window_to_render(pos, window.y);
                let mut redraw = self.hover.update(self.classify_at(pos, viewport));
                if self.controller.drag(pos) {
                    redraw = true;
                }
                Response {
                    redraw,
                    snapped: None,
                }
            }
            PointerEvent::Pressed {
                button,
                pos,
                modifiers,
            } => {
                if button != PointerButton::Primary {
                    return Response::default();
                }
                let pos = window_to_render(pos, window.y);
                // Re-classify on press so a click works even when no move
                // event preceded it.
                let region = self.classify_at(pos, viewport);
                let redraw = self.hover.update(region);
                let snapped = self.controller.press(
                    region,
                    pos,
                    viewport.contains(pos),
                    modifiers.contains(self.config.roll_modifier),
                );
                Response {
                    redraw: redraw || snapped.is_some(),
                    snapped,
                }
            }
            PointerEvent::Released { button, .. } => {
                if button == PointerButton::Primary {
                    self.controller.release();
                }
                Response::default()
            }
        }
    }

    fn classify_at(&self, pos: Pos2, viewport: Rect) -> Region {
        let classifier = RegionClassifier::new(&self.config);
        match self.config.fidelity {
            PickingFidelity::FaceGrid => CoordinateProjector::new(&self.config)
                .project(pos, viewport, self.controller.gizmo())
                .map_or(Region::None, |ray| classifier.classify(ray)),
            PickingFidelity::RadialBands => classifier.classify_coarse(pos, viewport),
        }
    }
}

/// A pointer event in top-left-origin window coordinates.
#[derive(Debug, Copy, Clone)]
pub enum PointerEvent {
    /// The pointer moved, with no button state change.
    Moved { pos: Pos2 },
    /// A button was pressed.
    Pressed {
        button: PointerButton,
        pos: Pos2,
        modifiers: EnumSet<Modifier>,
    },
    /// A button was released. Releasing the primary button always ends any
    /// active drag; there is no partial or rollback semantics.
    Released { button: PointerButton, pos: Pos2 },
}

/// What handling one pointer event asks of the embedder.
#[derive(Debug, Copy, Clone, Default)]
pub struct Response {
    /// The hover or an orientation changed; a redraw is warranted.
    pub redraw: bool,
    /// The press snapped both views to this region's canonical
    /// orientation.
    pub snapped: Option<Region>,
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const WINDOW: Vec2 = Vec2::new(810.0, 610.0);

    fn moved(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Moved {
            pos: Pos2::new(x, y),
        }
    }

    fn pressed(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Pressed {
            button: PointerButton::Primary,
            pos: Pos2::new(x, y),
            modifiers: EnumSet::empty(),
        }
    }

    fn released(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Released {
            button: PointerButton::Primary,
            pos: Pos2::new(x, y),
        }
    }

    fn front_facing_cube() -> ViewCube {
        ViewCube::new(ViewCubeConfig {
            initial_orientation: Orientation::IDENTITY,
            ..Default::default()
        })
    }

    #[test]
    fn hovering_the_viewport_center_highlights_the_front_center_cell() {
        // Window (810, 610) puts the gizmo viewport at (700, 500) with the
        // center at window position (750, 60) before the y flip.
        let mut cube = front_facing_cube();
        let response = cube.handle(moved(750.0, 60.0), WINDOW);
        assert!(response.redraw);
        assert_eq!(cube.hovered_region(), Region::Face { face: 4, cell: 4 });

        // Hovering the same cell again requests no redraw.
        let response = cube.handle(moved(751.0, 61.0), WINDOW);
        assert!(!response.redraw);
    }

    #[test]
    fn clicking_a_face_center_snaps_both_views_to_its_table_entry() {
        let mut cube = front_facing_cube();
        cube.set_orientation(Orientation::new(10.0, 0.0, 0.0));

        // With a small pitch the front face center still projects near the
        // viewport center; classification happens against the live
        // orientation, so the click lands on the front face.
        let response = cube.handle(pressed(750.0, 75.0), WINDOW);
        let Some(Region::Face { face: 4, .. }) = response.snapped else {
            panic!("expected a front face snap, got {:?}", response.snapped);
        };
        assert_eq!(cube.gizmo_orientation(), Orientation::IDENTITY);
        assert_eq!(cube.main_orientation(), Orientation::IDENTITY);
        assert_eq!(cube.drag_state(), DragState::Idle);
    }

    #[test]
    fn dragging_the_gizmo_background_orbits_and_reconverges() {
        // In the default isometric view a press near the viewport corner
        // misses the cube, so it starts a gizmo orbit instead of snapping.
        let mut cube = ViewCube::default();
        let start = cube.gizmo_orientation();

        let press = cube.handle(pressed(702.0, 108.0), WINDOW);
        assert_eq!(press.snapped, None);
        assert_eq!(cube.drag_state(), DragState::OrbitGizmo);

        let response = cube.handle(moved(722.0, 108.0), WINDOW);
        assert!(response.redraw);
        assert_relative_eq!(cube.gizmo_orientation().y, start.y + 20.0);
        assert_relative_eq!(cube.gizmo_orientation().x, start.x);

        cube.handle(released(722.0, 108.0), WINDOW);
        assert_eq!(cube.drag_state(), DragState::Idle);
        assert_eq!(cube.main_orientation(), cube.gizmo_orientation());
    }

    #[test]
    fn dragging_outside_the_gizmo_orbits_the_main_view() {
        let mut cube = front_facing_cube();
        cube.handle(pressed(100.0, 300.0), WINDOW);
        assert_eq!(cube.drag_state(), DragState::OrbitMain);

        // Moving down on screen is a negative vertical delta in render
        // coordinates.
        cube.handle(moved(100.0, 310.0), WINDOW);
        assert_relative_eq!(cube.main_orientation().x, -10.0);
        assert_eq!(cube.main_orientation(), cube.gizmo_orientation());
    }

    #[test]
    fn roll_modifier_drags_only_the_z_angle() {
        let mut cube = ViewCube::default();
        let start = cube.gizmo_orientation();
        cube.handle(
            PointerEvent::Pressed {
                button: PointerButton::Primary,
                pos: Pos2::new(702.0, 108.0),
                modifiers: EnumSet::only(Modifier::Shift),
            },
            WINDOW,
        );
        assert_eq!(cube.drag_state(), DragState::RollGizmo);

        cube.handle(moved(732.0, 108.0), WINDOW);
        assert_relative_eq!(cube.gizmo_orientation().z, start.z + 30.0);
        assert_relative_eq!(cube.gizmo_orientation().x, start.x);
        assert_relative_eq!(cube.gizmo_orientation().y, start.y);
    }

    #[test]
    fn secondary_button_is_ignored() {
        let mut cube = front_facing_cube();
        let response = cube.handle(
            PointerEvent::Pressed {
                button: PointerButton::Secondary,
                pos: Pos2::new(750.0, 60.0),
                modifiers: EnumSet::empty(),
            },
            WINDOW,
        );
        assert!(!response.redraw);
        assert_eq!(cube.drag_state(), DragState::Idle);
    }

    #[test]
    fn radial_band_mode_snaps_on_edge_clicks() {
        let mut cube = ViewCube::new(ViewCubeConfig {
            fidelity: PickingFidelity::RadialBands,
            ..Default::default()
        });

        // 44 pixels right of the viewport center: the edge band, sector 6.
        let response = cube.handle(pressed(794.0, 60.0), WINDOW);
        assert_eq!(response.snapped, Some(Region::Edge(6)));
        assert_eq!(cube.main_orientation(), cube.gizmo_orientation());
    }

    #[test]
    fn orientations_stay_converged_across_a_mixed_session() {
        let mut cube = ViewCube::default();

        cube.handle(pressed(100.0, 100.0), WINDOW);
        cube.handle(moved(160.0, 140.0), WINDOW);
        cube.handle(released(160.0, 140.0), WINDOW);
        assert_eq!(cube.main_orientation(), cube.gizmo_orientation());

        cube.handle(pressed(702.0, 108.0), WINDOW);
        cube.handle(moved(710.0, 120.0), WINDOW);
        cube.handle(released(710.0, 120.0), WINDOW);
        assert_eq!(cube.main_orientation(), cube.gizmo_orientation());
    }
}
