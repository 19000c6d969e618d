use std::f64::consts::TAU;

use rand::Rng;

use crate::sim::entity::Asteroid;

/// Shape and speed parameters shared by every asteroid in a field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldParams {
    /// Per-axis speed cap, pixels per tick.
    pub max_speed: f64,
    pub radius: f64,
    pub mean_vertices: u32,
}

/// Scatter `count` asteroids uniformly over a `width` x `height` canvas.
pub fn generate(
    count: usize,
    width: f64,
    height: f64,
    params: &FieldParams,
    rng: &mut impl Rng,
) -> Vec<Asteroid> {
    (0..count)
        .map(|_| {
            let x = (rng.gen::<f64>() * width).floor();
            let y = (rng.gen::<f64>() * height).floor();
            new_asteroid(x, y, params, rng)
        })
        .collect()
}

fn new_asteroid(x: f64, y: f64, params: &FieldParams, rng: &mut impl Rng) -> Asteroid {
    let mean = params.mean_vertices as f64;
    Asteroid {
        x,
        y,
        // Axes are sampled independently, so the speed is not circularly uniform.
        xv: rng.gen::<f64>() * params.max_speed * random_sign(rng),
        yv: rng.gen::<f64>() * params.max_speed * random_sign(rng),
        r: params.radius,
        a: rng.gen::<f64>() * TAU,
        vert: (rng.gen::<f64>() * (mean + 1.0) + mean / 2.0).floor() as u32,
    }
}

fn random_sign(rng: &mut impl Rng) -> f64 {
    if rng.gen::<f64>() < 0.5 {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn params() -> FieldParams {
        FieldParams { max_speed: 50.0 / 30.0, radius: 50.0, mean_vertices: 10 }
    }

    #[test]
    fn returns_requested_count() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate(0, 760.0, 570.0, &params(), &mut rng).len(), 0);
        assert_eq!(generate(3, 760.0, 570.0, &params(), &mut rng).len(), 3);
        assert_eq!(generate(250, 760.0, 570.0, &params(), &mut rng).len(), 250);
    }

    #[test]
    fn every_asteroid_within_bounds_and_constants() {
        let mut rng = StdRng::seed_from_u64(0xA57E);
        let p = params();
        for roid in generate(2000, 760.0, 570.0, &p, &mut rng) {
            assert!(roid.x >= 0.0 && roid.x < 760.0);
            assert!(roid.y >= 0.0 && roid.y < 570.0);
            assert_eq!(roid.x, roid.x.floor());
            assert_eq!(roid.y, roid.y.floor());
            assert_eq!(roid.r, 50.0);
            assert!(roid.a >= 0.0 && roid.a < TAU);
            assert!(roid.xv.abs() < p.max_speed);
            assert!(roid.yv.abs() < p.max_speed);
            assert!((5..=15).contains(&roid.vert), "vert {}", roid.vert);
        }
    }

    #[test]
    fn velocity_signs_are_independent_per_axis() {
        let mut rng = StdRng::seed_from_u64(99);
        let field = generate(4000, 100.0, 100.0, &params(), &mut rng);
        let quadrant = |sx: bool, sy: bool| {
            field.iter().filter(|r| (r.xv > 0.0) == sx && (r.yv > 0.0) == sy).count()
        };
        for (sx, sy) in [(true, true), (true, false), (false, true), (false, false)] {
            let n = quadrant(sx, sy);
            assert!(n > 800 && n < 1200, "quadrant ({sx}, {sy}) had {n}");
        }
    }

    #[test]
    fn vertex_count_skews_low() {
        let mut rng = StdRng::seed_from_u64(3);
        let field = generate(5000, 100.0, 100.0, &params(), &mut rng);
        let min = field.iter().map(|r| r.vert).min().unwrap();
        let max = field.iter().map(|r| r.vert).max().unwrap();
        assert_eq!(min, 5);
        assert_eq!(max, 15);
    }

    #[test]
    fn same_seed_same_field() {
        let a = generate(5, 760.0, 570.0, &params(), &mut StdRng::seed_from_u64(11));
        let b = generate(5, 760.0, 570.0, &params(), &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }
}
