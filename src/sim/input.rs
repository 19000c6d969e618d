//! Keyboard to ship-control mapping.
//!
//! Raw key codes stop here: the rest of the simulation only sees the ship's
//! `rot` and `thrusting` fields.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::sim::entity::Ship;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    TurnLeft,
    TurnRight,
    ThrustForward,
    /// Recognised but has no effect yet.
    ThrustBackward,
}

#[derive(Clone, Debug)]
pub struct KeyBindings {
    bindings: Vec<(KeyCode, Action)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: vec![
                (KeyCode::Left, Action::TurnLeft),
                (KeyCode::Char('a'), Action::TurnLeft),
                (KeyCode::Right, Action::TurnRight),
                (KeyCode::Char('d'), Action::TurnRight),
                (KeyCode::Up, Action::ThrustForward),
                (KeyCode::Char('w'), Action::ThrustForward),
                (KeyCode::Down, Action::ThrustBackward),
                (KeyCode::Char('s'), Action::ThrustBackward),
            ],
        }
    }
}

impl KeyBindings {
    pub fn action(&self, code: KeyCode) -> Option<Action> {
        let code = match code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        self.bindings
            .iter()
            .find(|(k, _)| *k == code)
            .map(|&(_, action)| action)
    }
}

pub struct InputTracker {
    bindings: KeyBindings,
    /// Radians per tick.
    turn_speed: f64,
}

impl InputTracker {
    pub fn new(bindings: KeyBindings, turn_speed: f64) -> Self {
        Self { bindings, turn_speed }
    }

    pub fn handle(&self, key: KeyEvent, ship: &mut Ship) {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(key.code, ship),
            KeyEventKind::Release => self.release(key.code, ship),
        }
    }

    pub fn press(&self, code: KeyCode, ship: &mut Ship) {
        let Some(action) = self.lookup(code) else { return };
        match action {
            Action::TurnLeft => ship.rot = self.turn_speed,
            Action::TurnRight => ship.rot = -self.turn_speed,
            Action::ThrustForward => ship.thrusting = true,
            Action::ThrustBackward => {}
        }
    }

    /// Releasing either turn key stops all rotation, even if the other is
    /// still held.
    pub fn release(&self, code: KeyCode, ship: &mut Ship) {
        let Some(action) = self.lookup(code) else { return };
        match action {
            Action::TurnLeft | Action::TurnRight => ship.rot = 0.0,
            Action::ThrustForward => ship.thrusting = false,
            Action::ThrustBackward => {}
        }
    }

    fn lookup(&self, code: KeyCode) -> Option<Action> {
        let action = self.bindings.action(code);
        if action.is_none() {
            log::trace!("ignoring unmapped key {:?}", code);
        }
        action
    }
}
