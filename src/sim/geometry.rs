use std::f64::consts::TAU;

use crate::sim::entity::{Asteroid, Ship};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// Heading is counter-clockwise on a y-down canvas, hence the negated sine
// terms on y for the ship shapes.

/// Ship triangle: nose, rear left, rear right.
pub fn ship_hull(ship: &Ship) -> [Point; 3] {
    let (sin, cos) = ship.a.sin_cos();
    let r = ship.r;
    [
        Point::new(ship.x + 4.0 / 3.0 * r * cos, ship.y - 4.0 / 3.0 * r * sin),
        Point::new(
            ship.x - r * (2.0 / 3.0 * cos + sin),
            ship.y + r * (2.0 / 3.0 * sin - cos),
        ),
        Point::new(
            ship.x - r * (2.0 / 3.0 * cos - sin),
            ship.y + r * (2.0 / 3.0 * sin + cos),
        ),
    ]
}

/// Thruster flame: rear left flank, tip two radii behind centre, rear right flank.
pub fn thruster_flame(ship: &Ship) -> [Point; 3] {
    let (sin, cos) = ship.a.sin_cos();
    let r = ship.r;
    [
        Point::new(
            ship.x - r * (2.0 / 3.0 * cos + 0.5 * sin),
            ship.y + r * (2.0 / 3.0 * sin - 0.5 * cos),
        ),
        Point::new(ship.x - r * 2.0 * cos, ship.y + r * 2.0 * sin),
        Point::new(
            ship.x - r * (2.0 / 3.0 * cos - 0.5 * sin),
            ship.y + r * (2.0 / 3.0 * sin + 0.5 * cos),
        ),
    ]
}

/// Regular polygon of `vert` points starting at the asteroid's base angle.
pub fn asteroid_outline(roid: &Asteroid) -> Vec<Point> {
    let n = roid.vert as f64;
    (0..roid.vert)
        .map(|j| {
            let angle = roid.a + j as f64 * TAU / n;
            Point::new(roid.x + roid.r * angle.cos(), roid.y + roid.r * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn ship_up() -> Ship {
        Ship::new(100.0, 100.0, 15.0)
    }

    #[test]
    fn nose_points_up_on_screen_at_half_pi() {
        let hull = ship_hull(&ship_up());
        assert_abs_diff_eq!(hull[0].x, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hull[0].y, 80.0, epsilon = 1e-9);
        // Rear corners sit below the centre.
        assert!(hull[1].y > 100.0 && hull[2].y > 100.0);
        assert_abs_diff_eq!(hull[1].x, 85.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hull[2].x, 115.0, epsilon = 1e-9);
    }

    #[test]
    fn flame_tip_is_behind_hull_rear() {
        let ship = ship_up();
        let hull = ship_hull(&ship);
        let flame = thruster_flame(&ship);
        assert_abs_diff_eq!(flame[1].x, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(flame[1].y, 130.0, epsilon = 1e-9);
        assert!(flame[1].y > hull[1].y);
        // Flanks are narrower than the hull.
        assert!((flame[0].x - flame[2].x).abs() < (hull[1].x - hull[2].x).abs());
    }

    #[test]
    fn heading_zero_points_right() {
        let mut ship = ship_up();
        ship.a = 0.0;
        let hull = ship_hull(&ship);
        assert_abs_diff_eq!(hull[0].x, 120.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hull[0].y, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn outline_vertices_lie_on_radius() {
        let roid = Asteroid {
            x: 50.0,
            y: 60.0,
            xv: 0.0,
            yv: 0.0,
            r: 50.0,
            a: FRAC_PI_2,
            vert: 7,
        };
        let pts = asteroid_outline(&roid);
        assert_eq!(pts.len(), 7);
        for p in &pts {
            assert_abs_diff_eq!(((p.x - 50.0).powi(2) + (p.y - 60.0).powi(2)).sqrt(), 50.0, epsilon = 1e-9);
        }
        // First vertex at the base angle; asteroid y is not flipped.
        assert_abs_diff_eq!(pts[0].x, 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pts[0].y, 110.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_vertex_asteroid_has_empty_outline() {
        let roid = Asteroid { x: 0.0, y: 0.0, xv: 0.0, yv: 0.0, r: 1.0, a: 0.0, vert: 0 };
        assert!(asteroid_outline(&roid).is_empty());
    }
}
