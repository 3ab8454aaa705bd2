//! SDL2 front-end: window, event loop and the top-level clock loop wiring
//! the CPU, bus, ULA and debugger together.

use std::env;
use std::path::Path;
use std::process;

use speccy::bus::Bus;
use speccy::cpu::Z80;
use speccy::debugger::Debugger;
use speccy::formats;
use speccy::ula::{FrameEvent, Ula};

mod constants;
mod drawing;
mod input;
mod options;
mod sdl_setup;

use options::Options;

fn main() {
    let args: Vec<String> = env::args().collect();
    let options = match Options::parse(&args[0], &args[1..]) {
        Ok(Some(options)) => options,
        Ok(None) => return,
        Err(message) => {
            eprintln!("{}", message);
            options::print_help(&args[0]);
            process::exit(1);
        }
    };

    if let Err(message) = run(options) {
        eprintln!("{}", message);
        process::exit(1);
    }
}

fn run(options: Options) -> Result<(), String> {
    println!("Running speccy...");

    let mut sdl_context = sdl_setup::init_sdl("speccy")?;

    let mut bus = Bus::new(0x10000);
    let mut state = Z80::new(options.fast_mode);
    let mut ula = Ula::new(options.fast_mode);
    let mut debugger = Debugger::new();

    if let Some(rom_file) = &options.rom_file {
        bus.load_rom(Path::new(rom_file))?;
    }
    if let Some(sna_file) = &options.sna_file {
        formats::load_sna(&mut bus, &mut state, Path::new(sna_file))?;
    }
    if let Some(z80_file) = &options.z80_file {
        formats::load_z80(&mut bus, &mut state, Path::new(z80_file))?;
    }

    debugger.set_dout(options.debug_mode);
    if let Some(break_addr) = options.break_addr {
        debugger.set_break(true, break_addr);
    }

    'main_loop: loop {
        if !debugger.clock(&mut state, &bus) {
            break;
        }

        // While broken into the debugger, each clock call runs one whole
        // instruction regardless of its cycle cost.
        if !state.clock(&mut bus, debugger.is_break_enabled()) {
            break;
        }

        if ula.clock(&mut state) == FrameEvent::Redraw {
            drawing::draw_screen(&mut sdl_context.canvas, &bus)?;
            if input::handle_input(&mut sdl_context.event_pump, &mut bus) {
                break 'main_loop;
            }
        }
    }

    println!("Closing speccy.");

    if options.pause_on_quit {
        println!("Emulation stopped. Close window to exit.");
        input::wait_for_quit(&mut sdl_context.event_pump);
    }

    Ok(())
}
