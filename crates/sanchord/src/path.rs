use crate::geom::Point;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    QuadTo {
        ctrl: Point,
        to: Point,
    },
    /// Circular arc (equal radii, no rotation) from the current point to `to`.
    Arc {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    Close,
}

/// Renderable path description: an ordered list of segments in the layout plane.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    segments: Vec<PathSegment>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.segments.push(PathSegment::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.segments.push(PathSegment::LineTo(p));
        self
    }

    pub fn quad_to(&mut self, ctrl: Point, to: Point) -> &mut Self {
        self.segments.push(PathSegment::QuadTo { ctrl, to });
        self
    }

    pub fn arc_to(&mut self, radius: f64, large_arc: bool, sweep: bool, to: Point) -> &mut Self {
        self.segments.push(PathSegment::Arc {
            radius,
            large_arc,
            sweep,
            to,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.segments.push(PathSegment::Close);
        self
    }

    /// Appends the segments of `other` (typically another closed subpath).
    pub fn extend(&mut self, other: PathData) {
        self.segments.extend(other.segments);
    }

    /// End points of every segment, in order. Control points are not included.
    pub fn points(&self) -> Vec<Point> {
        self.segments
            .iter()
            .filter_map(|s| match *s {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(p),
                PathSegment::QuadTo { to, .. } | PathSegment::Arc { to, .. } => Some(to),
                PathSegment::Close => None,
            })
            .collect()
    }

    /// SVG path data (`d` attribute).
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        for seg in &self.segments {
            match *seg {
                PathSegment::MoveTo(p) => emit_cmd_pair(&mut out, 'M', p),
                PathSegment::LineTo(p) => emit_cmd_pair(&mut out, 'L', p),
                PathSegment::QuadTo { ctrl, to } => {
                    emit_cmd_pair(&mut out, 'Q', ctrl);
                    out.push(',');
                    emit_pair(&mut out, to);
                }
                PathSegment::Arc {
                    radius,
                    large_arc,
                    sweep,
                    to,
                } => {
                    out.push('A');
                    fmt_path_into(&mut out, radius);
                    out.push(',');
                    fmt_path_into(&mut out, radius);
                    let _ = write!(
                        &mut out,
                        ",0,{},{},",
                        u8::from(large_arc),
                        u8::from(sweep)
                    );
                    emit_pair(&mut out, to);
                }
                PathSegment::Close => out.push('Z'),
            }
        }
        out
    }
}

impl std::fmt::Display for PathData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_svg())
    }
}

fn emit_pair(out: &mut String, p: Point) {
    fmt_path_into(out, p.x);
    out.push(',');
    fmt_path_into(out, p.y);
}

fn emit_cmd_pair(out: &mut String, cmd: char, p: Point) {
    out.push(cmd);
    emit_pair(out, p);
}

/// Path numbers use 3 fractional digits, rounded half-up, trailing zeros trimmed.
pub fn fmt_path_into(out: &mut String, v: f64) {
    if !v.is_finite() || v.abs() < 0.0005 {
        out.push('0');
        return;
    }

    // Thousandths, rounded half-up; `-0.0005` lands on 0 and prints as "0".
    let k = (v * 1000.0 + 0.5).floor() as i64;
    append_fixed_3dp_trimmed(out, k);
}

pub fn fmt_path(v: f64) -> String {
    let mut out = String::new();
    fmt_path_into(&mut out, v);
    out
}

fn append_fixed_3dp_trimmed(out: &mut String, k: i64) {
    let neg = k.is_negative();
    let abs = k.unsigned_abs();
    let int_part = abs / 1000;
    let frac = abs % 1000;

    if neg {
        out.push('-');
    }
    let _ = write!(out, "{int_part}");
    if frac == 0 {
        return;
    }

    let digits = format!("{frac:03}");
    out.push('.');
    out.push_str(digits.trim_end_matches('0'));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::point;

    #[test]
    fn fmt_path_matches_expected() {
        assert_eq!(fmt_path(f64::NAN), "0");
        assert_eq!(fmt_path(f64::INFINITY), "0");
        assert_eq!(fmt_path(-0.0), "0");
        assert_eq!(fmt_path(0.0004), "0");
        assert_eq!(fmt_path(1.0), "1");
        assert_eq!(fmt_path(1.25), "1.25");
        assert_eq!(fmt_path(-1.25), "-1.25");
        assert_eq!(fmt_path(1.0004), "1");
        assert_eq!(fmt_path(0.0125), "0.013");
        assert_eq!(fmt_path(200.1), "200.1");
        assert_eq!(fmt_path(-0.0005), "0");
        assert_eq!(fmt_path(0.0005), "0.001");
    }

    #[test]
    fn svg_output_uses_comma_separated_commands() {
        let mut p = PathData::new();
        p.move_to(point(0.0, -10.0))
            .arc_to(10.0, false, true, point(10.0, 0.0))
            .quad_to(point(0.0, 0.0), point(0.0, 10.0))
            .line_to(point(-1.5, 2.0))
            .close();
        assert_eq!(p.to_svg(), "M0,-10A10,10,0,0,1,10,0Q0,0,0,10L-1.5,2Z");
        assert_eq!(p.to_string(), p.to_svg());
    }

    #[test]
    fn points_skip_close_and_controls() {
        let mut p = PathData::new();
        p.move_to(point(1.0, 1.0))
            .quad_to(point(5.0, 5.0), point(2.0, 2.0))
            .close();
        assert_eq!(p.points(), vec![point(1.0, 1.0), point(2.0, 2.0)]);
    }
}
