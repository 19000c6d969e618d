use std::f64::consts::FRAC_PI_2;

/// Ship velocity in pixels per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Thrust {
    pub x: f64,
    pub y: f64,
}

impl Thrust {
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    /// Heading in radians, 0 = right, counter-clockwise.
    pub a: f64,
    /// Radians added to `a` each tick.
    pub rot: f64,
    pub thrusting: bool,
    pub thrust: Thrust,
}

impl Ship {
    /// A resting ship pointing up.
    pub fn new(x: f64, y: f64, r: f64) -> Self {
        Self {
            x,
            y,
            r,
            a: FRAC_PI_2,
            rot: 0.0,
            thrusting: false,
            thrust: Thrust::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Asteroid {
    pub x: f64,
    pub y: f64,
    // Generated but not yet applied to position.
    #[allow(dead_code)]
    pub xv: f64,
    #[allow(dead_code)]
    pub yv: f64,
    pub r: f64,
    /// Angle of the first vertex.
    pub a: f64,
    pub vert: u32,
}
