use log::trace;

use crate::region::Region;

/// Remembers the previously hovered region so redraws only happen when the
/// hover actually moves somewhere else.
///
/// Purely a redraw filter; it never influences classification or
/// orientation.
#[derive(Debug, Copy, Clone, Default)]
pub struct HoverStateTracker {
    previous: Region,
    current: Region,
}

impl HoverStateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `region` as the current hover and reports whether it differs
    /// from the region stored before it.
    pub fn update(&mut self, region: Region) -> bool {
        let changed = region != self.current;
        self.previous = self.current;
        self.current = region;
        if changed {
            trace!("hover changed: {:?} -> {:?}", self.previous, self.current);
        }
        changed
    }

    /// The region currently hovered.
    pub fn current(&self) -> Region {
        self.current
    }

    /// The region hovered before the latest update.
    pub fn previous(&self) -> Region {
        self.previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_hover_over_a_region_reports_a_change() {
        let mut hover = HoverStateTracker::new();
        assert!(hover.update(Region::Face { face: 4, cell: 4 }));
        assert_eq!(hover.current(), Region::Face { face: 4, cell: 4 });
        assert_eq!(hover.previous(), Region::None);
    }

    #[test]
    fn repeating_the_same_region_is_not_a_change() {
        let mut hover = HoverStateTracker::new();
        let region = Region::Edge(3);
        assert!(hover.update(region));
        assert!(!hover.update(region));
        assert!(!hover.update(region));
    }

    #[test]
    fn same_variant_with_a_different_id_is_a_change() {
        let mut hover = HoverStateTracker::new();
        hover.update(Region::Corner(1));
        assert!(hover.update(Region::Corner(2)));
        assert!(hover.update(Region::Face { face: 0, cell: 1 }));
        assert!(hover.update(Region::Face { face: 0, cell: 2 }));
    }

    #[test]
    fn leaving_the_cube_reports_a_change_once() {
        let mut hover = HoverStateTracker::new();
        hover.update(Region::Face { face: 2, cell: 0 });
        assert!(hover.update(Region::None));
        assert!(!hover.update(Region::None));
    }
}
