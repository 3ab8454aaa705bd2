//! The ULA: a counter-driven 50 Hz frame scheduler.
//!
//! Every tick advances a T-state counter through one frame. The interrupt
//! line is raised at the top of the frame and held for a short burst; at the
//! end of the frame the caller is told to repaint and the scheduler sleeps
//! off whatever remains of the 20 ms budget.

use std::thread;
use std::time::{Duration, Instant};

use crate::cpu::Z80;

/// T-states per 50 Hz frame at 3.5 MHz.
const FRAME_TICKS: u64 = 70000;
/// How long the interrupt line is held high.
const INT_RELEASE_TICK: u64 = 32;
const FRAME_DURATION: Duration = Duration::from_millis(20);

/// What the front-end should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    None,
    /// The frame ended; repaint the screen from the bus.
    Redraw,
}

pub struct Ula {
    counter: u64,
    next_frame_deadline: Option<Instant>,
    fast_mode: bool,
}

impl Ula {
    pub fn new(fast_mode: bool) -> Self {
        Ula {
            counter: 0,
            next_frame_deadline: None,
            fast_mode,
        }
    }

    /// Advances the frame counter by one T-state.
    pub fn clock(&mut self, state: &mut Z80) -> FrameEvent {
        let mut event = FrameEvent::None;

        match self.counter {
            0 => {
                // Top of frame: raise the maskable interrupt line and note
                // when this frame should end in wall-clock terms.
                state.int_pending = true;
                self.next_frame_deadline = Some(Instant::now() + FRAME_DURATION);
            }
            INT_RELEASE_TICK => {
                state.int_pending = false;
            }
            FRAME_TICKS => {
                event = FrameEvent::Redraw;

                if !self.fast_mode {
                    if let Some(deadline) = self.next_frame_deadline {
                        let now = Instant::now();
                        if now < deadline {
                            thread::sleep(deadline - now);
                        }
                    }
                }

                // Wraps to zero on the increment below.
                self.counter = u64::MAX;
            }
            _ => {}
        }

        self.counter = self.counter.wrapping_add(1);
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupt_line_pulses_at_frame_start() {
        let mut ula = Ula::new(true);
        let mut state = Z80::new(true);

        assert_eq!(ula.clock(&mut state), FrameEvent::None);
        assert!(state.int_pending);

        for _ in 1..INT_RELEASE_TICK {
            ula.clock(&mut state);
            assert!(state.int_pending);
        }
        ula.clock(&mut state);
        assert!(!state.int_pending);
    }

    #[test]
    fn frame_wraps_and_signals_redraw() {
        let mut ula = Ula::new(true);
        let mut state = Z80::new(true);

        let mut redraws = 0;
        for _ in 0..=FRAME_TICKS {
            if ula.clock(&mut state) == FrameEvent::Redraw {
                redraws += 1;
            }
        }
        assert_eq!(redraws, 1);

        // The counter restarted: the next tick raises the interrupt again.
        state.int_pending = false;
        ula.clock(&mut state);
        assert!(state.int_pending);
    }
}
