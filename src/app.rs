use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::ThreadRng;

use crate::config::Config;
use crate::sim::input::{InputTracker, KeyBindings};
use crate::sim::Simulation;
use crate::ui::braille::BrailleCanvas;

pub struct App {
    pub should_quit: bool,
    pub sim: Simulation,
    pub canvas: BrailleCanvas,
    pub fps: u32,
    /// False when the terminal cannot report key releases.
    pub key_release: bool,
    input: InputTracker,
    rng: ThreadRng,
}

impl App {
    pub fn new(config: &Config, key_release: bool) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            should_quit: false,
            sim: Simulation::new(config, &mut rng),
            canvas: BrailleCanvas::new(config.canvas_width, config.canvas_height),
            fps: config.fps,
            key_release,
            input: InputTracker::new(KeyBindings::default(), config.turn_speed_per_tick()),
            rng,
        }
    }

    pub fn on_tick(&mut self) {
        self.sim.tick(&mut self.canvas);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if key.kind == KeyEventKind::Press {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    log::info!("restarting");
                    self.sim.reset(&mut self.rng);
                    return;
                }
                _ => {}
            }
        }

        self.input.handle(key, &mut self.sim.ship);
    }
}
