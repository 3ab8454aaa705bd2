//! Event pump handling: quit detection and keyboard state updates.

use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use speccy::bus::Bus;

/// Polls SDL events and feeds key changes to the bus keyboard state.
/// Returns `true` if the quit event was received.
pub fn handle_input(event_pump: &mut EventPump, bus: &mut Bus) -> bool {
    for event in event_pump.poll_iter() {
        match event {
            Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } => {
                return true;
            }
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                bus.keyboard.key_down(key);
            }
            Event::KeyUp {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                bus.keyboard.key_up(key);
            }
            _ => {}
        }
    }
    false
}

/// Blocks until the window is closed; used by `--pause`.
pub fn wait_for_quit(event_pump: &mut EventPump) {
    loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return,
                _ => {}
            }
        }
        std::thread::sleep(std::time::Duration::from_millis(10));
    }
}
