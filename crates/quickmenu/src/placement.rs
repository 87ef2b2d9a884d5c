//! Boundary-aware placement math.
//!
//! Everything here is pure: given a candidate point, a node size, and the
//! container bounds, compute where a menu actually opens. A menu that would
//! clip past the container's right or bottom edge flips to open leftward or
//! upward instead.

use quickmenu_core::{Point, Rect, Size};

/// Minimum space kept between a menu edge and the container edge before the
/// menu flips to the opposite side.
pub const EDGE_MARGIN: f32 = 10.0;

/// Per-axis placement offsets computed against the container bounds.
///
/// An offset is either `0.0` (open rightward/downward as requested) or the
/// negated node extent (flip so the opposite edge sits at the candidate
/// point).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundaryHint {
    /// Horizontal offset to add to the candidate x.
    pub offset_x: f32,
    /// Vertical offset to add to the candidate y.
    pub offset_y: f32,
}

impl BoundaryHint {
    /// Whether the horizontal axis flipped (menu opens leftward).
    pub fn flips_horizontal(&self) -> bool {
        self.offset_x != 0.0
    }

    /// Whether the vertical axis flipped (menu opens upward).
    pub fn flips_vertical(&self) -> bool {
        self.offset_y != 0.0
    }

    /// Apply the offsets to a candidate point.
    pub fn apply(&self, candidate: Point) -> Point {
        candidate.translated(self.offset_x, self.offset_y)
    }
}

/// Compute placement offsets for a node opening at `candidate` inside a
/// container of the given size.
///
/// `candidate` is container-local. For each axis independently: if the space
/// between the candidate and the container's far edge is smaller than the
/// node extent plus [`EDGE_MARGIN`], the offset is the negated extent, else
/// zero.
pub fn boundary_hint(candidate: Point, size: Size, bounds: Size) -> BoundaryHint {
    let offset_x = if bounds.width - candidate.x < size.width + EDGE_MARGIN {
        -size.width
    } else {
        0.0
    };
    let offset_y = if bounds.height - candidate.y < size.height + EDGE_MARGIN {
        -size.height
    } else {
        0.0
    };

    BoundaryHint { offset_x, offset_y }
}

/// Compute where a submenu opens relative to its parent menu.
///
/// The natural position is against the parent layout's right edge, top
/// aligned with the hovered row. When the horizontal axis flips the submenu
/// sits against the parent's left edge instead; when the vertical axis flips
/// its bottom edge aligns with the parent's bottom edge.
///
/// `parent_rect` and `row_top` are container-local; the returned origin is
/// container-local as well.
pub fn submenu_position(parent_rect: Rect, row_top: f32, child_size: Size, bounds: Size) -> Point {
    let candidate = Point::new(parent_rect.right(), row_top);
    let hint = boundary_hint(candidate, child_size, bounds);

    let x = if hint.flips_horizontal() {
        parent_rect.left() - child_size.width
    } else {
        candidate.x
    };
    let y = if hint.flips_vertical() {
        parent_rect.bottom() - child_size.height
    } else {
        candidate.y
    };

    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flip_with_room() {
        let hint = boundary_hint(
            Point::new(100.0, 100.0),
            Size::new(120.0, 80.0),
            Size::new(800.0, 600.0),
        );
        assert_eq!(hint, BoundaryHint::default());
        assert!(!hint.flips_horizontal());
        assert!(!hint.flips_vertical());
    }

    #[test]
    fn test_flip_left_near_right_edge() {
        // Container width 800: any x with 800 - x < width + 10 flips.
        let width = 120.0;
        let x = 700.0; // 800 - 700 = 100 < 130
        let hint = boundary_hint(
            Point::new(x, 100.0),
            Size::new(width, 80.0),
            Size::new(800.0, 600.0),
        );
        assert_eq!(hint.offset_x, -width);
        assert_eq!(hint.offset_y, 0.0);
    }

    #[test]
    fn test_no_flip_just_inside_margin() {
        // 800 - 660 = 140 >= 120 + 10, so no flip.
        let hint = boundary_hint(
            Point::new(660.0, 100.0),
            Size::new(120.0, 80.0),
            Size::new(800.0, 600.0),
        );
        assert_eq!(hint.offset_x, 0.0);
    }

    #[test]
    fn test_flip_up_near_bottom_edge() {
        let height = 90.0;
        let hint = boundary_hint(
            Point::new(100.0, 550.0),
            Size::new(120.0, height),
            Size::new(800.0, 600.0),
        );
        assert_eq!(hint.offset_x, 0.0);
        assert_eq!(hint.offset_y, -height);
    }

    #[test]
    fn test_both_axes_flip_in_corner() {
        let hint = boundary_hint(
            Point::new(790.0, 590.0),
            Size::new(120.0, 90.0),
            Size::new(800.0, 600.0),
        );
        assert_eq!(hint.offset_x, -120.0);
        assert_eq!(hint.offset_y, -90.0);
        assert_eq!(hint.apply(Point::new(790.0, 590.0)), Point::new(670.0, 500.0));
    }

    #[test]
    fn test_submenu_opens_right_of_parent() {
        let parent = Rect::new(50.0, 50.0, 150.0, 120.0);
        let pos = submenu_position(parent, 74.0, Size::new(140.0, 100.0), Size::new(800.0, 600.0));
        assert_eq!(pos, Point::new(200.0, 74.0));
    }

    #[test]
    fn test_submenu_flips_to_parent_left_edge() {
        let parent = Rect::new(600.0, 50.0, 150.0, 120.0);
        let child_width = 140.0;
        let pos = submenu_position(
            parent,
            74.0,
            Size::new(child_width, 100.0),
            Size::new(800.0, 600.0),
        );
        // Against the parent's left edge, not clipped off-screen.
        assert_eq!(pos.x, parent.left() - child_width);
        assert_eq!(pos.y, 74.0);
    }

    #[test]
    fn test_submenu_aligns_to_parent_bottom_on_vertical_flip() {
        let parent = Rect::new(50.0, 450.0, 150.0, 120.0);
        let child_height = 100.0;
        let pos = submenu_position(
            parent,
            560.0,
            Size::new(140.0, child_height),
            Size::new(800.0, 600.0),
        );
        assert_eq!(pos.x, parent.right());
        assert_eq!(pos.y, parent.bottom() - child_height);
    }
}
