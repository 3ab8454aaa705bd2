//! .Z80 snapshot loader: version 1, 2 and 3 headers, run-length compressed
//! memory blocks, 48K hardware only.

use std::fs;
use std::path::Path;

use super::Reader;
use crate::bus::Bus;
use crate::cpu::Z80;

pub fn load_z80(bus: &mut Bus, state: &mut Z80, z80_file: &Path) -> Result<(), String> {
    let data = fs::read(z80_file)
        .map_err(|e| format!("failed to read Z80 '{}': {}", z80_file.display(), e))?;

    let mut r = Reader::new(&data);

    let (mut version, compression_on) = read_header_1(&mut r, state, bus)?;

    if version != 1 {
        version = read_header_2(&mut r, state)?;
        log::info!("Z80 version {} format detected", version);

        // The rest of the file is a sequence of (length, page) blocks.
        while !r.at_end() {
            let (size, is_compressed, page) = read_block_header(&mut r)?;
            let addr_start = addr_start_from_page(page)?;
            read_data_block(version, bus, &mut r, is_compressed, addr_start, size)?;
        }
    } else {
        log::info!("Z80 version 1 format detected");
        // Version 1 stores the whole 48K as one block after the header.
        read_data_block(version, bus, &mut r, compression_on, 0x4000, 49152)?;
    }

    Ok(())
}

/// The 30-byte version 1 header, common to all versions. Returns the
/// detected version (1, or 0 meaning "extended header follows") and whether
/// version 1 compression is on.
fn read_header_1(r: &mut Reader, state: &mut Z80, bus: &mut Bus) -> Result<(u32, bool), String> {
    let mut version = 0;

    // 0x00 - AF (F is stored first, A second)
    let f = r.next_byte()?;
    let a = r.next_byte()?;
    state.af.set_flags(f);
    state.af.set_accum(a);

    // 0x02 - BC, HL
    let bc = r.next_word()?;
    let hl = r.next_word()?;
    state.bc.set(bc);
    state.hl.set(hl);

    // 0x06 - PC; zero here means a version 2/3 extended header follows.
    let pc = r.next_word()?;
    state.pc.set(pc);
    if pc != 0x0000 {
        version = 1;
    }

    // 0x08 - SP
    let sp = r.next_word()?;
    state.sp.set(sp);
    state.top_of_stack = sp;

    // 0x0a - I; 0x0b - R with its top bit held in byte 12.
    state.ir.set_hi(r.next_byte()?);
    state.ir.set_lo(r.next_byte()? & 0x7f);

    let byte_12 = r.next_byte()?;
    state.ir.set_lo(state.ir.lo() | ((byte_12 & 0x01) << 7));
    let border_colour = (byte_12 >> 1) & 0x07;
    let compression_on = (byte_12 >> 5) & 0x01 != 0;
    // A header of all-ones is a quirk of some version 1 writers.
    if byte_12 == 0xff {
        version = 1;
    }

    bus.port_254 = (bus.port_254 & 0xf8) | border_colour;

    // 0x0d - DE
    let de = r.next_word()?;
    state.de.set(de);

    // 0x0f - the shadow set
    let bc_shadow = r.next_word()?;
    let de_shadow = r.next_word()?;
    let hl_shadow = r.next_word()?;
    let af_shadow_f = r.next_byte()?;
    let af_shadow_a = r.next_byte()?;
    state.bc.swap();
    state.bc.set(bc_shadow);
    state.bc.swap();
    state.de.swap();
    state.de.set(de_shadow);
    state.de.swap();
    state.hl.swap();
    state.hl.set(hl_shadow);
    state.hl.swap();
    state.af.swap();
    state.af.set_flags(af_shadow_f);
    state.af.set_accum(af_shadow_a);
    state.af.swap();

    // 0x17 - IY, IX
    let iy = r.next_word()?;
    let ix = r.next_word()?;
    state.iy.set(iy);
    state.ix.set(ix);

    // 0x1b - interrupt flip-flop: 0 = DI, otherwise EI
    if r.next_byte()? != 0 {
        state.iff1 = true;
        state.iff2 = true;
    }

    // 0x1c - IFF2 (unused here)
    let _ = r.next_byte()?;

    // 0x1d - interrupt mode in bits 0..1; the rest is joystick/video trim.
    let byte_29 = r.next_byte()?;
    state.int_mode = byte_29 & 0x03;

    Ok((version, compression_on))
}

/// The version 2/3 extended header. Returns the version.
fn read_header_2(r: &mut Reader, state: &mut Z80) -> Result<u32, String> {
    // 0x1e - extended header length decides the version.
    let length = r.next_word()?;
    let version = match length {
        23 => 2,
        54 | 55 => 3,
        _ => {
            return Err(format!(
                "unknown version of Z80 file (extended header length {})",
                length
            ))
        }
    };

    // 0x20 - the real PC
    let pc = r.next_word()?;
    state.pc.set(pc);

    // 0x22 - hardware mode; only 48K hardware is supported.
    let hardware_mode = r.next_byte()?;
    if hardware_mode != 0 {
        return Err(format!(
            "only 48k hardware mode is supported with Z80 files (mode {:#x})",
            hardware_mode
        ));
    }

    // 0x23 - 128K OUT state, interface 1 paging, emulation bits, AY state:
    // all ignored on 48K hardware.
    r.skip(4);
    r.skip(16); // sound chip register contents

    if version == 2 {
        return Ok(version);
    }

    // Version 3 trailer: T-state counters, QL/MGT/multiface flags, keyboard
    // mapping tables.
    r.skip(3);
    r.skip(2);
    let multiface_rom_paged = r.next_byte()?;
    if multiface_rom_paged != 0 {
        log::warn!("multiface ROM paged not marked as zero in Z80 file");
    }
    let bank_0_is_rom = r.next_byte()?;
    if bank_0_is_rom != 0xff {
        log::warn!("memory 0x0000..0x1fff is not marked as ROM");
    }
    let bank_1_is_rom = r.next_byte()?;
    if bank_1_is_rom != 0xff {
        log::warn!("memory 0x2000..0x3fff is not marked as ROM");
    }
    r.skip(10); // keyboard mappings
    r.skip(10); // ascii words for the mappings
    r.skip(3); // MGT type, Disciple inhibit button/flag

    if length == 55 {
        r.skip(1); // last out to port 0x1ffd
    }

    Ok(version)
}

/// A memory block header: length 0xffff means 16384 uncompressed bytes.
fn read_block_header(r: &mut Reader) -> Result<(u16, bool, u8), String> {
    let length = r.next_word()?;
    let (length, is_compressed) = if length == 0xffff {
        (16384, false)
    } else {
        (length, true)
    };
    let page = r.next_byte()?;
    Ok((length, is_compressed, page))
}

/// Maps a 48K page number to its load address; everything else is 128K-only
/// or a peripheral ROM.
fn addr_start_from_page(page: u8) -> Result<u16, String> {
    match page {
        0 => Ok(0x0000),
        4 => Ok(0x8000),
        5 => Ok(0xc000),
        8 => Ok(0x4000),
        1 => Err("interface 1 ROM is not supported".to_string()),
        11 => Err("multiface ROM is not supported".to_string()),
        2 | 3 | 6 | 7 | 9 | 10 => Err(format!("page {} is 128k-only and not supported", page)),
        _ => Err(format!("unknown page {}", page)),
    }
}

/// Copies one block into memory, expanding the `ED ED count byte` run-length
/// escape when the block is compressed.
fn read_data_block(
    version: u32,
    bus: &mut Bus,
    r: &mut Reader,
    compressed: bool,
    addr_start: u16,
    size: u16,
) -> Result<(), String> {
    let mut mem_pos = addr_start;

    if !compressed {
        let block = r.take(size as usize)?;
        bus.load_block(mem_pos, block);
        return Ok(());
    }

    let mut pos = 0u32;
    while pos < size as u32 {
        if r.at_end() {
            log::warn!(
                "unexpected end of file at {} of block size {}",
                pos,
                size
            );
            break;
        }

        let this_byte = r.next_byte()?;
        pos += 1;

        if this_byte == 0xed && r.peek() == Some(0xed) {
            // A run: ED ED <count> <byte>.
            r.next_byte()?;
            let count = r.next_byte()?;
            let fill = r.next_byte()?;
            if count == 0 {
                return Err("zero-length run in compressed Z80 block".to_string());
            }
            for _ in 0..count {
                bus.load_byte(mem_pos, fill);
                mem_pos = mem_pos.wrapping_add(1);
            }
            pos += 3;
        } else if version == 1 && this_byte == 0x00 && r.peek() == Some(0xed) {
            // Version 1 marks the end of memory with 00 ED ED 00.
            let byte_2 = r.next_byte()?;
            let byte_3 = r.next_byte()?;
            let byte_4 = r.next_byte()?;
            if byte_3 == 0xed && byte_4 == 0x00 {
                log::info!("Z80 block end found at {:#06x}", mem_pos.wrapping_sub(1));
                break;
            }
            // Not the end marker after all; write the byte and replay the
            // three we consumed.
            bus.load_byte(mem_pos, this_byte);
            mem_pos = mem_pos.wrapping_add(1);
            r.pos -= 3;
            let _ = byte_2;
        } else {
            bus.load_byte(mem_pos, this_byte);
            mem_pos = mem_pos.wrapping_add(1);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 30-byte version 1 header with a nonzero PC.
    fn v1_header() -> Vec<u8> {
        let mut h = vec![0u8; 30];
        h[0] = 0x44; // F
        h[1] = 0x11; // A
        h[6] = 0x00; // PC lo
        h[7] = 0x80; // PC hi
        h[12] = 0x20 | (0x03 << 1); // compression on, border 3
        h[27] = 0x01; // EI
        h[29] = 0x02; // IM 2
        h
    }

    #[test]
    fn version_1_compressed_block_expands_runs() {
        let mut data = v1_header();
        // Three literal bytes, a run of five 0xaa, then the end marker.
        data.extend_from_slice(&[0x01, 0x02, 0x03]);
        data.extend_from_slice(&[0xed, 0xed, 0x05, 0xaa]);
        data.extend_from_slice(&[0x00, 0xed, 0xed, 0x00]);

        let dir = std::env::temp_dir();
        let path = dir.join("speccy_z80_v1.z80");
        fs::write(&path, data).unwrap();

        let mut bus = Bus::new(0x10000);
        let mut state = Z80::new(true);
        load_z80(&mut bus, &mut state, &path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(state.pc.get(), 0x8000);
        assert_eq!(state.af.accum(), 0x11);
        assert_eq!(state.af.flags(), 0x44);
        assert_eq!(state.int_mode, 2);
        assert!(state.iff1);
        assert_eq!(bus.border_colour(), 0x03);

        assert_eq!(bus.read_data(0x4000), 0x01);
        assert_eq!(bus.read_data(0x4002), 0x03);
        for i in 0..5 {
            assert_eq!(bus.read_data(0x4003 + i), 0xaa);
        }
    }

    #[test]
    fn version_2_pages_land_at_their_addresses() {
        let mut data = v1_header();
        data[6] = 0;
        data[7] = 0; // PC == 0 -> extended header
        data[12] &= !0x20;

        // 23-byte extended header: PC = 0x9000, 48K hardware.
        let mut ext = vec![0u8; 23];
        data.extend_from_slice(&[23, 0]);
        ext[0] = 0x00;
        ext[1] = 0x90;
        data.extend_from_slice(&ext);

        // One compressed block for page 8 (0x4000): two literals.
        data.extend_from_slice(&[0x02, 0x00, 0x08, 0x5a, 0xa5]);

        let dir = std::env::temp_dir();
        let path = dir.join("speccy_z80_v2.z80");
        fs::write(&path, data).unwrap();

        let mut bus = Bus::new(0x10000);
        let mut state = Z80::new(true);
        load_z80(&mut bus, &mut state, &path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(state.pc.get(), 0x9000);
        assert_eq!(bus.read_data(0x4000), 0x5a);
        assert_eq!(bus.read_data(0x4001), 0xa5);
    }

    #[test]
    fn rejects_128k_hardware() {
        let mut data = v1_header();
        data[6] = 0;
        data[7] = 0;

        let mut ext = vec![0u8; 23];
        ext[2] = 0x03; // 128K hardware mode
        data.extend_from_slice(&[23, 0]);
        data.extend_from_slice(&ext);

        let dir = std::env::temp_dir();
        let path = dir.join("speccy_z80_128k.z80");
        fs::write(&path, data).unwrap();

        let mut bus = Bus::new(0x10000);
        let mut state = Z80::new(true);
        assert!(load_z80(&mut bus, &mut state, &path).is_err());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn rejects_128k_only_pages() {
        assert!(addr_start_from_page(4).is_ok());
        assert!(addr_start_from_page(3).is_err());
        assert!(addr_start_from_page(11).is_err());
    }
}
