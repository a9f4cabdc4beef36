use macroquad::prelude::*;

use crate::application::Simulation;

/// Escape or Q ends the frame loop
pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q)
}

/// Process keyboard input functionally
pub fn process_keyboard_input(simulation: Simulation) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 3] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::R, Simulation::reseed),
        (KeyCode::N, Simulation::advance),
    ];

    actions.iter().fold(simulation, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}
