//! Pure segment math for drawing a relation line between two card rectangles.
//! Operates on plain data so it is testable without any rendering surface; the
//! adapter supplies the current on-screen rectangles on every pass.

use std::f32::consts::{
    FRAC_PI_4,
    PI,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    fn center_in(&self, container: &Rect) -> Point {
        Point {
            x: (self.left + self.right()) / 2.0 - container.left,
            y: (self.top + self.bottom()) / 2.0 - container.top,
        }
    }
}

/// Endpoints are container-relative. `angle_degrees` is the line's own angle, for
/// renderers that draw a rotated horizontal bar rather than a raw segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub length: f32,
    pub angle_degrees: f32,
}

/// Boundary points for a line between `rect_a` and `rect_b`: the angle between the
/// two centers picks an exit edge on each rectangle, with the far endpoint computed
/// from its own rectangle's perspective (angle rotated by 180 degrees).
pub fn compute_segment(rect_a: &Rect, rect_b: &Rect, container: &Rect) -> Segment {
    let from = rect_a.center_in(container);
    let to = rect_b.center_in(container);

    let angle = (to.y - from.y).atan2(to.x - from.x);

    let start = boundary_point(rect_a, container, angle);
    let end = boundary_point(rect_b, container, angle - PI);

    let length = ((end.x - start.x).powi(2) + (end.y - start.y).powi(2)).sqrt();
    let angle_degrees = (end.y - start.y).atan2(end.x - start.x).to_degrees();

    Segment { start, end, length, angle_degrees }
}

/// Intersection of a ray from the rectangle's center at `angle` with its boundary.
/// Within 45 degrees of horizontal the ray exits left/right, otherwise top/bottom;
/// if the trigonometric projection overshoots the perpendicular extent, the point
/// is clamped onto the adjacent edge.
fn boundary_point(rect: &Rect, container: &Rect, angle: f32) -> Point {
    let center = rect.center_in(container);

    let half_width = rect.width / 2.0;
    let half_height = rect.height / 2.0;

    let abs_angle = angle.abs();
    let tan_angle = abs_angle.tan();

    let mut x;
    let mut y;

    if abs_angle <= FRAC_PI_4 || abs_angle > 3.0 * FRAC_PI_4 {
        let sign_x = if angle.cos() > 0.0 { 1.0 } else { -1.0 };
        x = center.x + sign_x * half_width;
        y = center.y
            + sign_x * half_width * tan_angle * (if angle.sin() > 0.0 { 1.0 } else { -1.0 });

        if y > center.y + half_height {
            y = center.y + half_height;
            x = center.x + (y - center.y) / tan_angle;
        } else if y < center.y - half_height {
            y = center.y - half_height;
            x = center.x - (y - center.y) / tan_angle;
        }
    } else {
        let sign_y = if angle.sin() > 0.0 { 1.0 } else { -1.0 };
        y = center.y + sign_y * half_height;
        x = center.x
            + sign_y * half_height / tan_angle * (if angle.cos() > 0.0 { 1.0 } else { -1.0 });

        if x > center.x + half_width {
            x = center.x + half_width;
            y = center.y + (x - center.x) * tan_angle;
        } else if x < center.x - half_width {
            x = center.x - half_width;
            y = center.y - (x - center.x) * tan_angle;
        }
    }

    Point { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Rect = Rect { left: 0.0, top: 0.0, width: 800.0, height: 600.0 };

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-3, "expected {} ~= {}", a, b);
    }

    #[test]
    fn horizontal_neighbors_connect_facing_edges() {
        let left = Rect::new(0.0, 0.0, 100.0, 40.0);
        let right = Rect::new(300.0, 0.0, 100.0, 40.0);

        let segment = compute_segment(&left, &right, &CONTAINER);

        assert_close(segment.start.x, 100.0);
        assert_close(segment.start.y, 20.0);
        assert_close(segment.end.x, 300.0);
        assert_close(segment.end.y, 20.0);
        assert_close(segment.length, 200.0);
        assert_close(segment.angle_degrees, 0.0);
    }

    #[test]
    fn vertical_neighbors_connect_facing_edges() {
        let upper = Rect::new(0.0, 0.0, 100.0, 40.0);
        let lower = Rect::new(0.0, 200.0, 100.0, 40.0);

        let segment = compute_segment(&upper, &lower, &CONTAINER);

        assert_close(segment.start.x, 50.0);
        assert_close(segment.start.y, 40.0);
        assert_close(segment.end.x, 50.0);
        assert_close(segment.end.y, 200.0);
        assert_close(segment.angle_degrees, 90.0);
    }

    #[test]
    fn endpoints_are_container_relative() {
        let container = Rect::new(100.0, 50.0, 800.0, 600.0);
        let left = Rect::new(100.0, 50.0, 100.0, 40.0);
        let right = Rect::new(400.0, 50.0, 100.0, 40.0);

        let segment = compute_segment(&left, &right, &container);

        assert_close(segment.start.x, 100.0);
        assert_close(segment.start.y, 20.0);
        assert_close(segment.end.x, 300.0);
    }

    #[test]
    fn diagonal_exit_stays_on_rect_boundary() {
        let a = Rect::new(0.0, 0.0, 100.0, 40.0);
        let b = Rect::new(200.0, 300.0, 100.0, 40.0);

        let segment = compute_segment(&a, &b, &CONTAINER);

        // Steep angle: the ray leaves through the bottom edge of A and enters
        // through the top edge of B.
        assert_close(segment.start.y, 40.0);
        assert!(segment.start.x >= a.left && segment.start.x <= a.right());
        assert_close(segment.end.y, 300.0);
        assert!(segment.end.x >= b.left && segment.end.x <= b.right());
    }

    #[test]
    fn near_horizontal_overshoot_clamps_to_adjacent_edge() {
        // Wide flat rect with a slightly rising target: the left/right branch is
        // taken but the projected y overshoots the half height.
        let a = Rect::new(0.0, 0.0, 400.0, 10.0);
        let b = Rect::new(500.0, 150.0, 40.0, 10.0);

        let segment = compute_segment(&a, &b, &CONTAINER);

        assert!(segment.start.y <= a.bottom() + 1e-3);
        assert!(segment.start.x >= a.left && segment.start.x <= a.right());
    }

    #[test]
    fn horizontal_swap_is_symmetric() {
        let a = Rect::new(0.0, 0.0, 100.0, 40.0);
        let b = Rect::new(300.0, 0.0, 100.0, 40.0);

        let forward = compute_segment(&a, &b, &CONTAINER);
        let backward = compute_segment(&b, &a, &CONTAINER);

        assert_close(forward.start.x, backward.end.x);
        assert_close(forward.start.y, backward.end.y);
        assert_close(forward.end.x, backward.start.x);
        assert_close(forward.length, backward.length);
    }
}
