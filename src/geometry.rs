/// Vector geometry for the rounded "Create" control, plus shared color
/// primitives used by the app and ui modules.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlinePoint {
    pub x: f64,
    pub y: f64,
}

impl OutlinePoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to `0.0..=1.0` for cairo.
    pub fn to_rgb_f64(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    pub fn to_css_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Number of anchor points emitted by [`RoundedRectSpec::outline`]. The
/// smoothing pass relies on this exact sequence: each corner anchor is
/// duplicated at its pre-curve and post-curve position so straight edges
/// stay straight while corners round.
pub const OUTLINE_POINT_COUNT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRectSpec {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    radius: f64,
}

impl RoundedRectSpec {
    /// Builds a spec from two bounding corners in any order. A radius
    /// larger than half the shorter side would self-intersect, so it is
    /// clamped and the clamp is logged.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, radius: f64) -> Self {
        let (left, right) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let (top, bottom) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };

        let max_radius = ((right - left).min(bottom - top) / 2.0).max(0.0);
        let requested = radius.max(0.0);
        let radius = if requested > max_radius {
            tracing::warn!(
                requested,
                clamped = max_radius,
                "corner radius exceeds half the shorter side; clamping"
            );
            max_radius
        } else {
            requested
        };

        Self {
            x1: left,
            y1: top,
            x2: right,
            y2: bottom,
            radius,
        }
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Closed outline walked clockwise from the top edge. Corner anchors
    /// appear twice (pre-curve and post-curve) around the single corner
    /// point, which the quadratic smoothing pass turns into a true
    /// rounded corner instead of a chamfer.
    pub fn outline(&self) -> [OutlinePoint; OUTLINE_POINT_COUNT] {
        let Self {
            x1,
            y1,
            x2,
            y2,
            radius: r,
        } = *self;

        [
            OutlinePoint::new(x1 + r, y1),
            OutlinePoint::new(x1 + r, y1),
            OutlinePoint::new(x2 - r, y1),
            OutlinePoint::new(x2 - r, y1),
            OutlinePoint::new(x2, y1),
            OutlinePoint::new(x2, y1 + r),
            OutlinePoint::new(x2, y1 + r),
            OutlinePoint::new(x2, y2 - r),
            OutlinePoint::new(x2, y2 - r),
            OutlinePoint::new(x2, y2),
            OutlinePoint::new(x2 - r, y2),
            OutlinePoint::new(x2 - r, y2),
            OutlinePoint::new(x1 + r, y2),
            OutlinePoint::new(x1 + r, y2),
            OutlinePoint::new(x1, y2),
            OutlinePoint::new(x1, y2 - r),
            OutlinePoint::new(x1, y2 - r),
            OutlinePoint::new(x1, y1 + r),
            OutlinePoint::new(x1, y1 + r),
            OutlinePoint::new(x1, y1),
        ]
    }
}

/// Quadratic-spline smoothing over a closed polygon: each input vertex
/// becomes the control point of a quadratic segment running between the
/// midpoints of its adjacent edges. Duplicated anchors collapse their
/// midpoint onto the anchor itself, so the curve passes through them
/// exactly and only the single corner points get rounded.
pub fn smooth_closed_outline(
    points: &[OutlinePoint],
    steps_per_segment: usize,
) -> Vec<OutlinePoint> {
    let count = points.len();
    let steps = steps_per_segment.max(1);
    if count < 3 {
        return points.to_vec();
    }

    let mut curve = Vec::with_capacity(count * steps);
    for index in 0..count {
        let previous = points[(index + count - 1) % count];
        let control = points[index];
        let next = points[(index + 1) % count];

        let start = previous.midpoint(control);
        let end = control.midpoint(next);

        // The last sample of each segment is the first of the next.
        for step in 0..steps {
            let t = step as f64 / steps as f64;
            let u = 1.0 - t;
            let x = u * u * start.x + 2.0 * u * t * control.x + t * t * end.x;
            let y = u * u * start.y + 2.0 * u * t * control.y + t * t * end.y;
            curve.push(OutlinePoint::new(x, y));
        }
    }

    curve
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_emits_twenty_points_in_fixed_order() {
        let spec = RoundedRectSpec::new(10.0, 10.0, 190.0, 40.0, 10.0);
        let outline = spec.outline();

        assert_eq!(outline.len(), OUTLINE_POINT_COUNT);
        // Walk starts on the top edge with a duplicated anchor.
        assert_eq!(outline[0], OutlinePoint::new(20.0, 10.0));
        assert_eq!(outline[1], OutlinePoint::new(20.0, 10.0));
        // Single corner points sit between their duplicated anchors.
        assert_eq!(outline[4], OutlinePoint::new(190.0, 10.0));
        assert_eq!(outline[9], OutlinePoint::new(190.0, 40.0));
        assert_eq!(outline[14], OutlinePoint::new(10.0, 40.0));
        assert_eq!(outline[19], OutlinePoint::new(10.0, 10.0));
    }

    #[test]
    fn outline_is_deterministic() {
        let a = RoundedRectSpec::new(10.0, 10.0, 190.0, 40.0, 10.0).outline();
        let b = RoundedRectSpec::new(10.0, 10.0, 190.0, 40.0, 10.0).outline();
        assert_eq!(a, b);
    }

    #[test]
    fn swapped_corners_yield_the_same_closed_outline() {
        let normal = RoundedRectSpec::new(10.0, 10.0, 190.0, 40.0, 10.0).outline();
        let swapped_x = RoundedRectSpec::new(190.0, 10.0, 10.0, 40.0, 10.0).outline();
        let swapped_both = RoundedRectSpec::new(190.0, 40.0, 10.0, 10.0, 10.0).outline();

        assert_eq!(normal, swapped_x);
        assert_eq!(normal, swapped_both);
    }

    #[test]
    fn oversized_radius_clamps_to_half_the_shorter_side() {
        let spec = RoundedRectSpec::new(10.0, 10.0, 190.0, 40.0, 100.0);
        let outline = spec.outline();

        // Shorter side is 30, so the effective radius is 15.
        assert_eq!(outline[0], OutlinePoint::new(25.0, 10.0));
        assert_eq!(outline[5], OutlinePoint::new(190.0, 25.0));
    }

    #[test]
    fn smoothing_passes_through_duplicated_anchors() {
        let spec = RoundedRectSpec::new(10.0, 10.0, 190.0, 40.0, 10.0);
        let outline = spec.outline();
        let curve = smooth_closed_outline(&outline, 8);

        assert_eq!(curve.len(), OUTLINE_POINT_COUNT * 8);
        // Duplicated edge anchors are fixed points of the spline.
        assert!(curve.contains(&OutlinePoint::new(20.0, 10.0)));
        assert!(curve.contains(&OutlinePoint::new(180.0, 10.0)));
        // The raw corner point is not on the curve; it only steers it.
        assert!(!curve.contains(&OutlinePoint::new(190.0, 10.0)));
    }

    #[test]
    fn smoothing_keeps_every_sample_inside_the_bounding_box() {
        let spec = RoundedRectSpec::new(10.0, 10.0, 190.0, 40.0, 10.0);
        let curve = smooth_closed_outline(&spec.outline(), 12);

        for point in curve {
            assert!(point.x >= 10.0 && point.x <= 190.0);
            assert!(point.y >= 10.0 && point.y <= 40.0);
        }
    }

    #[test]
    fn color_conversions_cover_the_trigger_palette() {
        let idle = Color::new(0xF0, 0x6A, 0x85);
        assert_eq!(idle.to_css_hex(), "#F06A85");

        let (r, g, b) = Color::new(255, 0, 128).to_rgb_f64();
        assert!((r - 1.0).abs() < f64::EPSILON);
        assert!(g.abs() < f64::EPSILON);
        assert!((b - 128.0 / 255.0).abs() < 1e-12);
    }
}
