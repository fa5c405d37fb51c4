//! Natural cubic spline through an ordered sequence of points.
//!
//! The curve passes through every point, has a continuous second derivative
//! and zero curvature at both ends. Each segment is emitted as a cubic
//! Bézier, which any vector backend can draw directly.

use crate::scene::{PathCommand, Point};

/// Builds the path commands of a natural cubic spline through `points`.
///
/// - no points: empty path
/// - one point: `MoveTo` followed by `Close`, a degenerate path with no visible line
/// - two points: a straight `LineTo`
/// - more: one `CubicTo` per segment
///
/// # Examples
///
/// ```
/// use likeplot_layout::{scene::{PathCommand, Point}, spline::natural_path};
///
/// let points = [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)];
/// let path = natural_path(&points);
/// assert_eq!(path.len(), 3);
/// assert!(matches!(path[2], PathCommand::CubicTo(_, _, end) if end == points[2]));
/// ```
#[must_use]
pub fn natural_path(points: &[Point]) -> Vec<PathCommand> {
    match points {
        [] => vec![],
        [only] => vec![PathCommand::MoveTo(*only), PathCommand::Close],
        [first, second] => vec![PathCommand::MoveTo(*first), PathCommand::LineTo(*second)],
        [first, ..] => {
            let xs = points.iter().map(|p| p.x).collect::<Vec<_>>();
            let ys = points.iter().map(|p| p.y).collect::<Vec<_>>();
            let (x1, x2) = control_points(&xs);
            let (y1, y2) = control_points(&ys);

            let mut commands = Vec::with_capacity(points.len());
            commands.push(PathCommand::MoveTo(*first));
            for (i, end) in points.iter().skip(1).enumerate() {
                commands.push(PathCommand::CubicTo(
                    Point::new(x1[i], y1[i]),
                    Point::new(x2[i], y2[i]),
                    *end,
                ));
            }
            commands
        }
    }
}

/// Solves for the Bézier control points of a natural spline along one axis.
///
/// For `n + 1` knots returns `n` first and `n` second control coordinates.
/// The tridiagonal system is solved with the Thomas algorithm.
fn control_points(knots: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = knots.len() - 1;
    let mut a = vec![0.0; n];
    let mut b = vec![0.0; n];
    let mut r = vec![0.0; n];

    a[0] = 0.0;
    b[0] = 2.0;
    r[0] = knots[0] + 2.0 * knots[1];
    for i in 1..n - 1 {
        a[i] = 1.0;
        b[i] = 4.0;
        r[i] = 4.0 * knots[i] + 2.0 * knots[i + 1];
    }
    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    r[n - 1] = 8.0 * knots[n - 1] + knots[n];

    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m;
        r[i] -= m * r[i - 1];
    }

    // Back substitution: `a` now holds the first control points.
    a[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        a[i] = (r[i] - a[i + 1]) / b[i];
    }

    // Second control points follow from C1 continuity at interior knots.
    b[n - 1] = (knots[n] + a[n - 1]) / 2.0;
    for i in 0..n - 1 {
        b[i] = 2.0 * knots[i + 1] - a[i + 1];
    }
    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn test_empty_and_single_point() {
        assert!(natural_path(&[]).is_empty());
        let p = Point::new(3.0, 4.0);
        assert_eq!(natural_path(&[p]), [PathCommand::MoveTo(p), PathCommand::Close]);
    }

    #[test]
    fn test_two_points_are_straight() {
        let (p, q) = (Point::new(0.0, 0.0), Point::new(10.0, 5.0));
        assert_eq!(
            natural_path(&[p, q]),
            [PathCommand::MoveTo(p), PathCommand::LineTo(q)]
        );
    }

    #[test]
    fn test_passes_through_every_point() {
        let points = [
            Point::new(50.0, 300.0),
            Point::new(121.4, 120.0),
            Point::new(192.8, 210.0),
            Point::new(264.2, 80.0),
            Point::new(335.7, 260.0),
            Point::new(407.1, 190.0),
        ];
        let commands = natural_path(&points);
        assert_eq!(commands.len(), points.len());
        assert_eq!(commands[0], PathCommand::MoveTo(points[0]));
        for (command, point) in commands.iter().skip(1).zip(&points[1..]) {
            let PathCommand::CubicTo(_, _, end) = command else {
                panic!("expected a cubic segment, got {command:?}");
            };
            assert_eq!(end, point);
        }
    }

    #[test]
    fn test_collinear_points_stay_on_the_line() {
        let points = (0..5)
            .map(|i| Point::new(f64::from(i) * 10.0, f64::from(i) * 2.0 + 1.0))
            .collect::<Vec<_>>();
        for command in natural_path(&points) {
            if let PathCommand::CubicTo(c1, c2, _) = command {
                for c in [c1, c2] {
                    assert!((c.y - (c.x / 5.0 + 1.0)).abs() < EPS, "{c:?} off the line");
                }
            }
        }
    }

    #[test]
    fn test_first_derivative_is_continuous() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 3.0),
            Point::new(2.0, 1.0),
            Point::new(3.0, 4.0),
        ];
        let commands = natural_path(&points);
        for i in 1..commands.len() - 1 {
            let (PathCommand::CubicTo(_, incoming, knot), PathCommand::CubicTo(outgoing, _, _)) =
                (commands[i], commands[i + 1])
            else {
                panic!("expected cubic segments");
            };
            // The knot is the midpoint of its neighbouring control points.
            let mid = Point::new(
                (incoming.x + outgoing.x) / 2.0,
                (incoming.y + outgoing.y) / 2.0,
            );
            assert!(close(mid, knot), "{mid:?} != {knot:?}");
        }
    }
}
