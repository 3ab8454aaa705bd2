//! Screen repaint: the 256x192 monochrome bitmap at 0x4000, drawn with the
//! ZX display row swizzle.

use sdl2::pixels::Color;
use sdl2::rect::Point;
use sdl2::render::Canvas;
use sdl2::video::Window;

use speccy::bus::Bus;

use crate::constants;

const DISPLAY_FILE: u16 = 0x4000;
const DISPLAY_BYTES: usize = (256 / 8) * 192;

/// The standard Spectrum palette, bright variants ignored; index by the
/// 3-bit border colour.
const BORDER_PALETTE: [Color; 8] = [
    Color::RGB(0x00, 0x00, 0x00),
    Color::RGB(0x00, 0x00, 0xd7),
    Color::RGB(0xd7, 0x00, 0x00),
    Color::RGB(0xd7, 0x00, 0xd7),
    Color::RGB(0x00, 0xd7, 0x00),
    Color::RGB(0x00, 0xd7, 0xd7),
    Color::RGB(0xd7, 0xd7, 0x00),
    Color::RGB(0xd7, 0xd7, 0xd7),
];

fn get_bit(byte: u8, pos: u8) -> bool {
    byte & (1 << pos) != 0
}

/// Paints the whole frame: border colour background, white paper, black ink.
pub fn draw_screen(canvas: &mut Canvas<Window>, bus: &Bus) -> Result<(), String> {
    canvas.set_draw_color(BORDER_PALETTE[bus.border_colour() as usize]);
    canvas.clear();

    let border = constants::BORDER as i32;

    canvas.set_draw_color(Color::RGB(0xff, 0xff, 0xff));
    canvas.fill_rect(sdl2::rect::Rect::new(
        border,
        border,
        constants::SCREEN_WIDTH,
        constants::SCREEN_HEIGHT,
    ))?;

    canvas.set_draw_color(Color::RGB(0x00, 0x00, 0x00));

    let data = bus.slice(DISPLAY_FILE, DISPLAY_BYTES);
    let mut index = 0usize;
    for y in 0..192i32 {
        // The display file interleaves rows: bits 6-7 select the third of
        // the screen, bits 0-2 the scan line within a character row.
        let new_y = (0xc0 & y) | ((y & 0x07) << 3) | ((y >> 3) & 0x07);
        for x in (0..256i32).step_by(8) {
            let byte = data[index];
            for p in 0..8i32 {
                if get_bit(byte, (7 - p) as u8) {
                    canvas.draw_point(Point::new(x + p + border, new_y + border))?;
                }
            }
            index += 1;
        }
    }

    canvas.present();
    Ok(())
}
