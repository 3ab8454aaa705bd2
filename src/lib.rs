//! ZX Spectrum 48K emulator core: a Z80 execution engine, the 64 KiB
//! memory/port bus, the decoder tables and the ULA frame scheduler. The SDL
//! front-end lives in the `speccy_app` binary.

pub mod bus;
pub mod cpu;
pub mod debugger;
pub mod decoder;
pub mod formats;
pub mod instruction;
pub mod keyboard;
pub mod registers;
pub mod storage;
pub mod ula;
