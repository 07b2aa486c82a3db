use emath::Pos2;
use log::debug;

use crate::math::Orientation;
use crate::region::Region;

/// Which drag interaction is currently in progress.
///
/// At most one of the non-idle states is ever active; a click on a
/// pickable region never enters a drag state at all.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Orbiting the main scene; the gizmo follows.
    OrbitMain,
    /// Orbiting via the gizmo; the main view follows.
    OrbitGizmo,
    /// Rolling the gizmo around the view axis; the main view follows.
    RollGizmo,
}

/// Owns the two orientation states and the drag state machine.
///
/// `main` and `gizmo` are equal whenever the state is [`DragState::Idle`];
/// every drag step keeps the passive orientation in lockstep with the
/// active one, and both release and snap leave the two converged.
#[derive(Debug, Copy, Clone)]
pub struct OrientationController {
    main: Orientation,
    gizmo: Orientation,
    state: DragState,
    anchor: Pos2,
}

impl OrientationController {
    pub fn new(initial: Orientation) -> Self {
        Self {
            main: initial,
            gizmo: initial,
            state: DragState::Idle,
            anchor: Pos2::ZERO,
        }
    }

    /// Orientation of the main scene view.
    pub fn main(&self) -> Orientation {
        self.main
    }

    /// Orientation of the gizmo.
    pub fn gizmo(&self) -> Orientation {
        self.gizmo
    }

    pub fn drag_state(&self) -> DragState {
        self.state
    }

    /// Sets both orientations at once, e.g. when the embedder restores a
    /// view programmatically.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.main = orientation;
        self.gizmo = orientation;
    }

    /// Handles a primary-button press.
    ///
    /// A press on a pickable region snaps immediately and stays idle; a
    /// press on the gizmo background starts an orbit (or roll, with the
    /// roll modifier held); a press outside the gizmo viewport orbits the
    /// main scene. Any drag still marked active is terminated first.
    ///
    /// Returns the region snapped to, if the press was a snap.
    pub fn press(
        &mut self,
        region: Region,
        pos: Pos2,
        inside_gizmo: bool,
        roll: bool,
    ) -> Option<Region> {
        if self.state != DragState::Idle {
            self.release();
        }

        if inside_gizmo && self.snap_to(region) {
            return Some(region);
        }

        self.state = if !inside_gizmo {
            DragState::OrbitMain
        } else if roll {
            DragState::RollGizmo
        } else {
            DragState::OrbitGizmo
        };
        self.anchor = pos;
        debug!("drag started: {:?}", self.state);
        None
    }

    /// Snaps both orientations to the region's canonical target.
    /// Returns false (and changes nothing) for [`Region::None`].
    pub fn snap_to(&mut self, region: Region) -> bool {
        let Some(target) = region.snap_target() else {
            return false;
        };
        self.state = DragState::Idle;
        self.gizmo = target;
        self.main = target;
        debug!("snapped to {region:?}: {target:?}");
        true
    }

    /// Applies a pointer move to the active drag, accumulating the
    /// horizontal delta into the Y angle and the vertical delta into the
    /// X angle (or, when rolling, the horizontal delta into Z). Angles
    /// accumulate without wrapping.
    ///
    /// Returns true when an orientation changed.
    pub fn drag(&mut self, pos: Pos2) -> bool {
        let dx = f64::from(pos.x - self.anchor.x);
        let dy = f64::from(pos.y - self.anchor.y);

        match self.state {
            DragState::Idle => return false,
            DragState::OrbitMain => {
                self.main.y += dx;
                self.main.x += dy;
                self.gizmo = self.main;
            }
            DragState::OrbitGizmo => {
                self.gizmo.y += dx;
                self.gizmo.x += dy;
                self.main = self.gizmo;
            }
            DragState::RollGizmo => {
                self.gizmo.z += dx;
                self.main = self.gizmo;
            }
        }

        self.anchor = pos;
        true
    }

    /// Ends the active drag. The orientation reached so far is kept and
    /// copied to the passive view, so both are converged afterwards.
    pub fn release(&mut self) {
        match self.state {
            DragState::Idle => return,
            DragState::OrbitMain => self.gizmo = self.main,
            DragState::OrbitGizmo | DragState::RollGizmo => self.main = self.gizmo,
        }
        debug!("drag ended: {:?}", self.state);
        self.state = DragState::Idle;
    }
}
