//! SNA snapshot loader: a fixed 27-byte register header followed by the
//! 48 KiB of RAM. The saved PC lives on the stack; loading finishes by
//! executing a RETN to pop it.

use std::fs;
use std::path::Path;

use super::Reader;
use crate::bus::Bus;
use crate::cpu::Z80;
use crate::instruction::{InstType, Instruction, Operand};

const SNA_FILE_SIZE: usize = 49179;
const SNA_RAM_SIZE: usize = 49152;

pub fn load_sna(bus: &mut Bus, state: &mut Z80, sna_file: &Path) -> Result<(), String> {
    let data = fs::read(sna_file)
        .map_err(|e| format!("failed to read SNA '{}': {}", sna_file.display(), e))?;

    if data.len() != SNA_FILE_SIZE {
        log::warn!(
            "SNA file size is {} bytes, expected {}",
            data.len(),
            SNA_FILE_SIZE
        );
    }

    let mut r = Reader::new(&data);

    // 0x00 - I
    state.ir.set_hi(r.next_byte()?);

    // 0x01..0x07 - the shadow set: loaded into the primary word, then
    // swapped away.
    let hl_shadow = r.next_word()?;
    let de_shadow = r.next_word()?;
    let bc_shadow = r.next_word()?;
    let af_shadow = r.next_word()?;
    state.hl.set(hl_shadow);
    state.hl.swap();
    state.de.set(de_shadow);
    state.de.swap();
    state.bc.set(bc_shadow);
    state.bc.swap();
    state.af.set(af_shadow);
    state.af.swap();

    // 0x09 - HL, DE, BC, IY, IX
    let hl = r.next_word()?;
    let de = r.next_word()?;
    let bc = r.next_word()?;
    let iy = r.next_word()?;
    let ix = r.next_word()?;
    state.hl.set(hl);
    state.de.set(de);
    state.bc.set(bc);
    state.iy.set(iy);
    state.ix.set(ix);

    // 0x13 - IFF2 in bit 2
    state.iff2 = r.next_byte()? & 0x04 != 0;

    // 0x14 - R
    state.ir.set_lo(r.next_byte()?);

    // 0x15 - AF, SP
    let af = r.next_word()?;
    let sp = r.next_word()?;
    state.af.set(af);
    state.sp.set(sp);
    state.top_of_stack = sp;

    // 0x19 - interrupt mode
    let int_mode = r.next_byte()?;
    if int_mode > 2 {
        return Err(format!("SNA interrupt mode {} is invalid", int_mode));
    }
    state.int_mode = int_mode;

    // 0x1a - border colour in bits 0..2
    bus.port_254 = (bus.port_254 & 0xf8) | (r.next_byte()? & 0x07);

    // 0x1b - the 48K of RAM
    bus.load_block(0x4000, r.take(SNA_RAM_SIZE)?);

    // The stack holds the return address; a RETN recovers PC and IFF1.
    let retn = Instruction::new(InstType::Retn, "retn", 2, 14).dst(Operand::PC);
    state.update_r_reg(&retn, 0xed45);
    retn.execute(state, bus);

    log::info!("SNA loaded, PC set to {:#06x}", state.pc.get());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_image() -> Vec<u8> {
        let mut data = vec![0u8; SNA_FILE_SIZE];
        data[0x00] = 0x3f; // I
        data[0x01] = 0xad; // HL' lo
        data[0x02] = 0xde; // HL' hi
        data[0x09] = 0x34; // HL lo
        data[0x0a] = 0x12; // HL hi
        data[0x13] = 0x04; // IFF2 set
        data[0x14] = 0x55; // R
        data[0x15] = 0x99; // F
        data[0x16] = 0x42; // A
        data[0x17] = 0xf0; // SP lo
        data[0x18] = 0xff; // SP hi
        data[0x19] = 0x01; // IM 1
        data[0x1a] = 0x05; // border

        // Return address 0x8042 at the stack top (RAM offset of 0xfff0).
        data[0x1b + (0xfff0 - 0x4000)] = 0x42;
        data[0x1b + (0xfff1 - 0x4000)] = 0x80;
        data
    }

    #[test]
    fn loads_registers_ram_and_pops_pc() {
        let dir = std::env::temp_dir();
        let path = dir.join("speccy_sna_test.sna");
        fs::write(&path, build_image()).unwrap();

        let mut bus = Bus::new(0x10000);
        let mut state = Z80::new(true);
        load_sna(&mut bus, &mut state, &path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(state.ir.hi(), 0x3f);
        assert_eq!(state.hl.get(), 0x1234);
        state.hl.swap();
        assert_eq!(state.hl.get(), 0xdead);
        assert_eq!(state.af.get(), 0x4299);
        assert_eq!(state.int_mode, 1);
        assert_eq!(bus.border_colour(), 0x05);

        // RETN popped the return address and bumped SP past it.
        assert_eq!(state.pc.get(), 0x8042);
        assert_eq!(state.sp.get(), 0xfff2);
        assert!(state.iff1);
    }

    #[test]
    fn rejects_bad_interrupt_mode() {
        let dir = std::env::temp_dir();
        let path = dir.join("speccy_sna_badim.sna");
        let mut data = build_image();
        data[0x19] = 0x07;
        fs::write(&path, data).unwrap();

        let mut bus = Bus::new(0x10000);
        let mut state = Z80::new(true);
        assert!(load_sna(&mut bus, &mut state, &path).is_err());
        fs::remove_file(&path).ok();
    }
}
