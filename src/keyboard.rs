//! Spectrum keyboard matrix state.
//!
//! Eight half-rows of five keys each. The app's event loop feeds key up/down
//! events in; the ULA port read samples whichever half-rows the port address
//! selects. Result bits are active-low.

use sdl2::keyboard::Keycode;

#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    /// Pressed-key bitmaps per half-row, active-high internally.
    rows: [u8; 8],
}

/// Maps a host key to its (half-row, key bit) position in the matrix.
fn matrix_position(key: Keycode) -> Option<(usize, u8)> {
    let pos = match key {
        // half-row 0 : caps shift - v
        Keycode::LShift => (0, 0x01),
        Keycode::Z => (0, 0x02),
        Keycode::X => (0, 0x04),
        Keycode::C => (0, 0x08),
        Keycode::V => (0, 0x10),
        // half-row 1 : a - g
        Keycode::A => (1, 0x01),
        Keycode::S => (1, 0x02),
        Keycode::D => (1, 0x04),
        Keycode::F => (1, 0x08),
        Keycode::G => (1, 0x10),
        // half-row 2 : q - t
        Keycode::Q => (2, 0x01),
        Keycode::W => (2, 0x02),
        Keycode::E => (2, 0x04),
        Keycode::R => (2, 0x08),
        Keycode::T => (2, 0x10),
        // half-row 3 : 1 - 5
        Keycode::Num1 => (3, 0x01),
        Keycode::Num2 => (3, 0x02),
        Keycode::Num3 => (3, 0x04),
        Keycode::Num4 => (3, 0x08),
        Keycode::Num5 => (3, 0x10),
        // half-row 4 : 6 - 0
        Keycode::Num0 => (4, 0x01),
        Keycode::Num9 => (4, 0x02),
        Keycode::Num8 => (4, 0x04),
        Keycode::Num7 => (4, 0x08),
        Keycode::Num6 => (4, 0x10),
        // half-row 5 : y - p
        Keycode::P => (5, 0x01),
        Keycode::O => (5, 0x02),
        Keycode::I => (5, 0x04),
        Keycode::U => (5, 0x08),
        Keycode::Y => (5, 0x10),
        // half-row 6 : h - enter
        Keycode::Return => (6, 0x01),
        Keycode::L => (6, 0x02),
        Keycode::K => (6, 0x04),
        Keycode::J => (6, 0x08),
        Keycode::H => (6, 0x10),
        // half-row 7 : b - space
        Keycode::Space => (7, 0x01),
        Keycode::RShift => (7, 0x02),
        Keycode::M => (7, 0x04),
        Keycode::N => (7, 0x08),
        Keycode::B => (7, 0x10),
        _ => return None,
    };
    Some(pos)
}

impl Keyboard {
    pub fn new() -> Self {
        Keyboard::default()
    }

    pub fn key_down(&mut self, key: Keycode) {
        if let Some((row, bit)) = matrix_position(key) {
            self.rows[row] |= bit;
        }
    }

    pub fn key_up(&mut self, key: Keycode) {
        if let Some((row, bit)) = matrix_position(key) {
            self.rows[row] &= !bit;
        }
    }

    /// Samples the half-rows whose select bit is low in `half_rows` and
    /// composes the active-low result the ULA returns.
    pub fn sample(&self, half_rows: u8) -> u8 {
        let mut keys = 0u8;

        for (row, bits) in self.rows.iter().enumerate() {
            if half_rows & (1 << row) == 0 {
                keys |= bits;
            }
        }

        !keys & 0x1f
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_matrix_reads_all_high() {
        let kb = Keyboard::new();
        assert_eq!(kb.sample(0x00), 0x1f);
        assert_eq!(kb.sample(0xfe), 0x1f);
    }

    #[test]
    fn pressed_key_pulls_its_bit_low_in_its_row_only() {
        let mut kb = Keyboard::new();
        kb.key_down(Keycode::Q);

        // Half-row 2 selected (bit 2 low).
        assert_eq!(kb.sample(!0x04), 0x1e);
        // Other half-rows unaffected.
        assert_eq!(kb.sample(!0x01), 0x1f);

        kb.key_up(Keycode::Q);
        assert_eq!(kb.sample(!0x04), 0x1f);
    }

    #[test]
    fn multiple_rows_combine_when_selected_together() {
        let mut kb = Keyboard::new();
        kb.key_down(Keycode::A);
        kb.key_down(Keycode::Space);

        // Both half-rows selected at once.
        assert_eq!(kb.sample(0x00), 0x1e);
        // Only the A row.
        assert_eq!(kb.sample(!0x02), 0x1e);
    }
}
