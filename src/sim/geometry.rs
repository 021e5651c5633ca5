//! Pure geometry for the wrap-around field
//!
//! Everything here is side-effect free. Distances and speeds are in field
//! units per tick.

use glam::Vec2;

/// Returns true iff two circles strictly overlap.
///
/// Strict inequality: tangent circles do not count. A shot is modeled as a
/// zero-radius circle, so a shot hits an asteroid only when its point lies
/// strictly inside the asteroid's circle.
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    let radii = a_radius + b_radius;
    a_pos.distance_squared(b_pos) < radii * radii
}

/// Normalize an angle into [0, 2π).
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    angle.rem_euclid(std::f32::consts::TAU)
}

/// Wrap a point position across the field edges with no margin.
///
/// A single field-dimension translation is enough: per-tick speeds are far
/// below the field size.
pub fn wrap_point(mut pos: Vec2, width: f32, height: f32) -> Vec2 {
    if pos.x < 0.0 {
        pos.x += width;
    } else if pos.x > width {
        pos.x -= width;
    }
    if pos.y < 0.0 {
        pos.y += height;
    } else if pos.y > height {
        pos.y -= height;
    }
    pos
}

/// Wrap a circle of the given radius, letting it travel one full radius past
/// an edge before re-entering on the opposite side.
///
/// The center re-enters `2 * radius` beyond the far boundary, so a filled
/// circle slides off one edge while sliding onto the other instead of
/// popping across at the halfway point.
pub fn wrap_padded(mut pos: Vec2, radius: f32, width: f32, height: f32) -> Vec2 {
    if pos.x < -radius {
        pos.x += width + 2.0 * radius;
    } else if pos.x > width + radius {
        pos.x -= width + 2.0 * radius;
    }
    if pos.y < -radius {
        pos.y += height + 2.0 * radius;
    } else if pos.y > height + radius {
        pos.y -= height + 2.0 * radius;
    }
    pos
}
