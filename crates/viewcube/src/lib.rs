//! Interaction core for a `ViewCube`-style 3d orientation gizmo: a small
//! on-screen cube that mirrors the current camera orientation, snaps the
//! camera to canonical views when its faces, edges or corners are clicked,
//! and orbits both the gizmo and the main scene in lockstep when dragged.
//!
//! This crate contains only the picking and orientation logic. Feed
//! [`ViewCube::handle`] your pointer events and read back the current
//! orientations, the hovered [`Region`] and the redraw signal; rendering the
//! cube, its labels and the highlight is left to the embedding application.
//!
//! Classification is deterministic and total: any pointer position maps to
//! exactly one [`Region`], with positions outside the gizmo viewport or off
//! the cube silhouette mapping to [`Region::None`].

pub mod classifier;
pub mod config;
pub mod controller;
pub mod gizmo;
pub mod hover;
pub mod math;
pub mod projector;
pub mod region;

pub mod prelude;

pub use prelude::*;
