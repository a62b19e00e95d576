//! SVG path data builder.

use crate::tree::Point;

/// Format a coordinate with at most three decimals and no trailing zeros.
pub(crate) fn fmt_num(value: f64) -> String {
    let mut s = format!("{value:.3}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Accumulates the `d` attribute of an SVG `<path>`.
///
/// Every command takes an `absolute` flag choosing between the upper-case
/// (absolute) and lower-case (relative) form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvgPath {
    data: String,
}

impl SvgPath {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all commands.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Whether no command has been written.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The path data, trimmed of the trailing separator.
    pub fn as_str(&self) -> &str {
        self.data.trim_end()
    }

    fn command(&mut self, upper: char, absolute: bool, args: &[String]) {
        let letter = if absolute {
            upper
        } else {
            upper.to_ascii_lowercase()
        };
        self.data.push(letter);
        for arg in args {
            self.data.push(' ');
            self.data.push_str(arg);
        }
        self.data.push(' ');
    }

    fn pair(p: Point) -> String {
        format!("{},{}", fmt_num(p.x), fmt_num(p.y))
    }

    /// Start a new subpath at `p`.
    pub fn move_to(&mut self, p: Point, absolute: bool) {
        self.command('M', absolute, &[fmt_num(p.x), fmt_num(p.y)]);
    }

    /// Straight line to `p`.
    pub fn line_to(&mut self, p: Point, absolute: bool) {
        self.command('L', absolute, &[fmt_num(p.x), fmt_num(p.y)]);
    }

    /// Horizontal line to `x`.
    pub fn line_xto(&mut self, x: f64, absolute: bool) {
        self.command('H', absolute, &[fmt_num(x)]);
    }

    /// Vertical line to `y`.
    pub fn line_yto(&mut self, y: f64, absolute: bool) {
        self.command('V', absolute, &[fmt_num(y)]);
    }

    /// Cubic Bézier to `end` with control points `c1` and `c2`.
    pub fn cubic_curve_to(&mut self, c1: Point, c2: Point, end: Point, absolute: bool) {
        self.command(
            'C',
            absolute,
            &[Self::pair(c1), Self::pair(c2), Self::pair(end)],
        );
    }

    /// Smooth cubic Bézier; the first control point mirrors the previous one.
    pub fn append_cubic_curve_to(&mut self, c: Point, end: Point, absolute: bool) {
        self.command('S', absolute, &[Self::pair(c), Self::pair(end)]);
    }

    /// Quadratic Bézier to `end` with control point `c`.
    pub fn curve_to(&mut self, c: Point, end: Point, absolute: bool) {
        self.command('Q', absolute, &[Self::pair(c), Self::pair(end)]);
    }

    /// Smooth quadratic Bézier; the control point mirrors the previous one.
    pub fn append_curve_to(&mut self, end: Point, absolute: bool) {
        self.command('T', absolute, &[Self::pair(end)]);
    }

    /// Elliptical arc to `end`.
    pub fn arc(
        &mut self,
        radius: Point,
        end: Point,
        axis_rotation: f64,
        large_arc: bool,
        clockwise: bool,
        absolute: bool,
    ) {
        self.command(
            'A',
            absolute,
            &[
                Self::pair(radius),
                fmt_num(axis_rotation),
                format!("{},{}", u8::from(large_arc), u8::from(clockwise)),
                Self::pair(end),
            ],
        );
    }

    /// Close the current subpath.
    pub fn close_path(&mut self) {
        self.data.push_str("z ");
    }

    /// Draw a Catmull-Rom spline through `points` as line segments.
    ///
    /// The chain is padded by repeating its end points so the curve passes
    /// through every point. Each segment is sampled `density + 1` times.
    /// Chains shorter than two points draw nothing.
    pub fn draw_catmull_rom_splines(&mut self, points: &[Point], density: usize) {
        let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
            return;
        };
        let density = density.max(1);

        let mut padded = Vec::with_capacity(points.len() + 2);
        padded.push(first);
        padded.extend_from_slice(points);
        padded.push(last);

        for window in padded.windows(4) {
            for i in 0..=density {
                let t = i as f64 / density as f64;
                let p = interpolate_catmull_rom(window[0], window[1], window[2], window[3], t);
                self.line_to(p, true);
            }
        }
    }
}

impl std::fmt::Display for SvgPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point at `t` ∈ [0, 1] on the Catmull-Rom segment between `p1` and `p2`.
pub fn interpolate_catmull_rom(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;
    let c0 = -t + 2.0 * t2 - t3;
    let c1 = 2.0 - 5.0 * t2 + 3.0 * t3;
    let c2 = t + 4.0 * t2 - 3.0 * t3;
    let c3 = -t2 + t3;
    Point::new(
        0.5 * (c0 * p0.x + c1 * p1.x + c2 * p2.x + c3 * p3.x),
        0.5 * (c0 * p0.y + c1 * p1.y + c2 * p2.y + c3 * p3.y),
    )
}
