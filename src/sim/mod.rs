pub mod entity;
pub mod field;
pub mod geometry;
pub mod input;

use rand::Rng;

use crate::config::Config;
use crate::sim::entity::{Asteroid, Ship};
use crate::sim::field::FieldParams;
use crate::surface::{Rgb, Surface};

/// Physics constants resolved from [`Config`] once at startup.
#[derive(Clone, Copy, Debug)]
pub struct Physics {
    pub fps: f64,
    pub ship_size: f64,
    pub ship_thrust: f64,
    pub friction: f64,
}

impl From<&Config> for Physics {
    fn from(config: &Config) -> Self {
        Self {
            fps: f64::from(config.fps),
            ship_size: config.ship_size,
            ship_thrust: config.ship_thrust,
            friction: config.friction,
        }
    }
}

/// Everything that changes from tick to tick.
pub struct Simulation {
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub width: f64,
    pub height: f64,
    pub ticks: u64,
    physics: Physics,
    field: FieldParams,
    roids_num: usize,
}

impl Simulation {
    pub fn new(config: &Config, rng: &mut impl Rng) -> Self {
        let mut sim = Self {
            ship: Ship::new(0.0, 0.0, 0.0),
            asteroids: Vec::new(),
            width: config.canvas_width,
            height: config.canvas_height,
            ticks: 0,
            physics: Physics::from(config),
            field: config.field_params(),
            roids_num: config.roids_num,
        };
        sim.reset(rng);
        sim
    }

    /// Fresh ship at the centre and a new asteroid belt.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.ship = Ship::new(self.width / 2.0, self.height / 2.0, self.physics.ship_size / 2.0);
        self.asteroids = field::generate(self.roids_num, self.width, self.height, &self.field, rng);
        self.ticks = 0;
        log::info!(
            "new belt of {} asteroids on a {}x{} canvas",
            self.asteroids.len(),
            self.width,
            self.height
        );
    }

    /// Advance one fixed step and draw the frame.
    pub fn tick(&mut self, surface: &mut impl Surface) {
        let Physics { fps, ship_size, ship_thrust, friction } = self.physics;

        surface.set_fill_color(Rgb::BLACK);
        surface.fill_rect(0.0, 0.0, self.width, self.height);

        let ship = &mut self.ship;
        if ship.thrusting {
            ship.thrust.x += ship_thrust * ship.a.cos() / fps;
            // Canvas y grows downward.
            ship.thrust.y -= ship_thrust * ship.a.sin() / fps;

            surface.set_fill_color(Rgb::RED);
            surface.set_stroke_color(Rgb::YELLOW);
            surface.set_line_width(ship_size / 10.0);
            let flame = geometry::thruster_flame(ship);
            surface.fill_path(&flame);
            surface.stroke_path(&flame);
        } else {
            // Applied once per tick, so drag strength depends on fps.
            ship.thrust.x -= friction * ship.thrust.x / fps;
            ship.thrust.y -= friction * ship.thrust.y / fps;
        }

        surface.set_stroke_color(Rgb::WHITE);
        surface.set_line_width(ship_size / 20.0);
        surface.stroke_path(&geometry::ship_hull(ship));

        surface.set_stroke_color(Rgb::SLATE_GREY);
        surface.set_line_width(ship_size / 20.0);
        for roid in &self.asteroids {
            surface.stroke_path(&geometry::asteroid_outline(roid));
        }

        ship.a += ship.rot;
        ship.x += ship.thrust.x;
        ship.y += ship.thrust.y;

        wrap_ship(ship, self.width, self.height);

        surface.set_fill_color(Rgb::RED);
        surface.fill_rect(ship.x - 1.0, ship.y - 1.0, 2.0, 2.0);

        self.ticks += 1;
    }
}

/// Moves the ship to the opposite edge once it is fully off-screen.
///
/// Only the first violated edge is corrected, in the order left, right, top,
/// bottom, so a diagonal exit takes two ticks to resolve.
fn wrap_ship(ship: &mut Ship, width: f64, height: f64) {
    let r = ship.r;
    if ship.x < -r {
        ship.x = width + r;
    } else if ship.x > width + r {
        ship.x = -r;
    } else if ship.y < -r {
        ship.y = height + r;
    } else if ship.y > height + r {
        ship.y = -r;
    } else {
        return;
    }
    log::debug!("ship wrapped to ({:.1}, {:.1})", ship.x, ship.y);
}
