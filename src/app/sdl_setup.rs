//! SDL2 context setup for the emulator window.

use sdl2::Sdl;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::constants;

pub struct SdlContext {
    pub sdl: Sdl,
    pub canvas: Canvas<Window>,
    pub event_pump: sdl2::EventPump,
}

pub fn init_sdl(window_title: &str) -> Result<SdlContext, String> {
    let sdl = sdl2::init()?;
    let video_subsystem = sdl.video()?;

    let window = video_subsystem
        .window(
            window_title,
            constants::WINDOW_WIDTH,
            constants::WINDOW_HEIGHT,
        )
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window
        .into_canvas()
        .accelerated()
        .build()
        .map_err(|e| e.to_string())?;
    canvas
        .set_scale(constants::SCALE_FACTOR as f32, constants::SCALE_FACTOR as f32)
        .map_err(|e| e.to_string())?;

    let event_pump = sdl.event_pump()?;

    Ok(SdlContext {
        sdl,
        canvas,
        event_pump,
    })
}
