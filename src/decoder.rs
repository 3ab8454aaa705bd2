//! Process-wide opcode and ROM label tables.
//!
//! Both tables are read-only maps initialised once on first access. Opcodes
//! are sparse 8/16/24-bit integers (prefix bytes folded in by the bus), so a
//! map keyed by the folded value replaces the flat 256-entry arrays a single
//! byte opcode space would allow. Lookup hands back a reference to the table
//! entry, or to the INVALID sentinel for anything undecodable.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::instruction::{Condition, InstType, Instruction, Operand};

static INVALID: Instruction = Instruction::new(InstType::Inv, "INVALID", 0, 0);

/// Decodes a folded opcode to its table entry.
pub fn decode_opcode(opcode: u32) -> &'static Instruction {
    INSTRUCTIONS.get(&opcode).unwrap_or(&INVALID)
}

pub fn has_rom_label(addr: u16) -> bool {
    ROM_LABELS.contains_key(&addr)
}

/// Well-known 48K ROM routine name for an address, for the debugger trace.
pub fn rom_label(addr: u16) -> Option<&'static str> {
    ROM_LABELS.get(&addr).copied()
}

lazy_static! {
    static ref INSTRUCTIONS: HashMap<u32, Instruction> = {
        let mut m = HashMap::new();

        m.insert(0x00, Instruction::new(InstType::Nop, "nop", 1, 4));
        m.insert(0x01, Instruction::new(InstType::Ld, "ld bc,**", 3, 10).dst(Operand::BC).src(Operand::NN));
        m.insert(0x02, Instruction::new(InstType::Ld, "ld (bc),a", 1, 7).dst(Operand::IndBC).src(Operand::A));
        m.insert(0x03, Instruction::new(InstType::Inc, "inc bc", 1, 6).dst(Operand::BC).src(Operand::One));
        m.insert(0x04, Instruction::new(InstType::Inc, "inc b", 1, 4).dst(Operand::B).src(Operand::One));
        m.insert(0x05, Instruction::new(InstType::Dec, "dec b", 1, 4).dst(Operand::B).src(Operand::One));
        m.insert(0x06, Instruction::new(InstType::Ld, "ld b,*", 2, 7).dst(Operand::B).src(Operand::N));
        m.insert(0x07, Instruction::new(InstType::Rlca, "rlca", 1, 4).dst(Operand::A));
        m.insert(0x08, Instruction::new(InstType::Ex, "ex af,af'", 1, 4).dst(Operand::AF));
        m.insert(0x09, Instruction::new(InstType::Add, "add hl,bc", 1, 11).dst(Operand::HL).src(Operand::BC));
        m.insert(0x0a, Instruction::new(InstType::Ld, "ld a,(bc)", 1, 7).dst(Operand::A).src(Operand::IndBC));
        m.insert(0x0b, Instruction::new(InstType::Dec, "dec bc", 1, 6).dst(Operand::BC).src(Operand::One));
        m.insert(0x0c, Instruction::new(InstType::Inc, "inc c", 1, 4).dst(Operand::C).src(Operand::One));
        m.insert(0x0d, Instruction::new(InstType::Dec, "dec c", 1, 4).dst(Operand::C).src(Operand::One));
        m.insert(0x0e, Instruction::new(InstType::Ld, "ld c,*", 2, 7).dst(Operand::C).src(Operand::N));
        m.insert(0x0f, Instruction::new(InstType::Rrca, "rrca", 1, 4).dst(Operand::A));
        m.insert(0x10, Instruction::new(InstType::Djnz, "djnz *", 2, 13).not_taken(8).cond(Condition::NZ).dst(Operand::PC).src(Operand::N));
        m.insert(0x11, Instruction::new(InstType::Ld, "ld de,**", 3, 10).dst(Operand::DE).src(Operand::NN));
        m.insert(0x12, Instruction::new(InstType::Ld, "ld (de),a", 1, 7).dst(Operand::IndDE).src(Operand::A));
        m.insert(0x13, Instruction::new(InstType::Inc, "inc de", 1, 6).dst(Operand::DE).src(Operand::One));
        m.insert(0x14, Instruction::new(InstType::Inc, "inc d", 1, 4).dst(Operand::D).src(Operand::One));
        m.insert(0x15, Instruction::new(InstType::Dec, "dec d", 1, 4).dst(Operand::D).src(Operand::One));
        m.insert(0x16, Instruction::new(InstType::Ld, "ld d,*", 2, 7).dst(Operand::D).src(Operand::N));
        m.insert(0x17, Instruction::new(InstType::Rla, "rla", 1, 4).dst(Operand::A));
        m.insert(0x18, Instruction::new(InstType::Jr, "jr *", 2, 12).cond(Condition::Always).dst(Operand::PC).src(Operand::N));
        m.insert(0x19, Instruction::new(InstType::Add, "add hl,de", 1, 11).dst(Operand::HL).src(Operand::DE));
        m.insert(0x1a, Instruction::new(InstType::Ld, "ld a,(de)", 1, 7).dst(Operand::A).src(Operand::IndDE));
        m.insert(0x1b, Instruction::new(InstType::Dec, "dec de", 1, 6).dst(Operand::DE).src(Operand::One));
        m.insert(0x1c, Instruction::new(InstType::Inc, "inc e", 1, 4).dst(Operand::E).src(Operand::One));
        m.insert(0x1d, Instruction::new(InstType::Dec, "dec e", 1, 4).dst(Operand::E).src(Operand::One));
        m.insert(0x1e, Instruction::new(InstType::Ld, "ld e,*", 2, 7).dst(Operand::E).src(Operand::N));
        m.insert(0x1f, Instruction::new(InstType::Rra, "rra", 1, 4).dst(Operand::A));
        m.insert(0x20, Instruction::new(InstType::Jr, "jr nz,*", 2, 12).not_taken(7).cond(Condition::NZ).dst(Operand::PC).src(Operand::N));
        m.insert(0x21, Instruction::new(InstType::Ld, "ld hl,**", 3, 10).dst(Operand::HL).src(Operand::NN));
        m.insert(0x22, Instruction::new(InstType::Ld, "ld (**),hl", 3, 16).dst(Operand::IndNN).src(Operand::HL));
        m.insert(0x23, Instruction::new(InstType::Inc, "inc hl", 1, 6).dst(Operand::HL).src(Operand::One));
        m.insert(0x24, Instruction::new(InstType::Inc, "inc h", 1, 4).dst(Operand::H).src(Operand::One));
        m.insert(0x25, Instruction::new(InstType::Dec, "dec h", 1, 4).dst(Operand::H).src(Operand::One));
        m.insert(0x26, Instruction::new(InstType::Ld, "ld h,*", 2, 7).dst(Operand::H).src(Operand::N));
        m.insert(0x27, Instruction::new(InstType::Daa, "daa", 1, 4).dst(Operand::A).src(Operand::A));
        m.insert(0x28, Instruction::new(InstType::Jr, "jr z,*", 2, 12).not_taken(7).cond(Condition::Z).dst(Operand::PC).src(Operand::N));
        m.insert(0x29, Instruction::new(InstType::Add, "add hl,hl", 1, 11).dst(Operand::HL).src(Operand::HL));
        m.insert(0x2a, Instruction::new(InstType::Ld, "ld hl,(**)", 3, 16).dst(Operand::HL).src(Operand::IndNN));
        m.insert(0x2b, Instruction::new(InstType::Dec, "dec hl", 1, 6).dst(Operand::HL).src(Operand::One));
        m.insert(0x2c, Instruction::new(InstType::Inc, "inc l", 1, 4).dst(Operand::L).src(Operand::One));
        m.insert(0x2d, Instruction::new(InstType::Dec, "dec l", 1, 4).dst(Operand::L).src(Operand::One));
        m.insert(0x2e, Instruction::new(InstType::Ld, "ld l,*", 2, 7).dst(Operand::L).src(Operand::N));
        m.insert(0x2f, Instruction::new(InstType::Cpl, "cpl", 1, 4));
        m.insert(0x30, Instruction::new(InstType::Jr, "jr nc,*", 2, 12).not_taken(7).cond(Condition::NC).dst(Operand::PC).src(Operand::N));
        m.insert(0x31, Instruction::new(InstType::Ld, "ld sp,**", 3, 10).dst(Operand::SP).src(Operand::NN));
        m.insert(0x32, Instruction::new(InstType::Ld, "ld (**),a", 3, 12).dst(Operand::IndN).src(Operand::A));
        m.insert(0x33, Instruction::new(InstType::Inc, "inc sp", 1, 6).dst(Operand::SP).src(Operand::One));
        m.insert(0x34, Instruction::new(InstType::Inc, "inc (hl)", 1, 11).dst(Operand::IndHL).src(Operand::One));
        m.insert(0x35, Instruction::new(InstType::Dec, "dec (hl)", 1, 11).dst(Operand::IndHL).src(Operand::One));
        m.insert(0x36, Instruction::new(InstType::Ld, "ld (hl),*", 2, 10).dst(Operand::IndHL).src(Operand::N));
        m.insert(0x37, Instruction::new(InstType::Scf, "scf", 1, 4));
        m.insert(0x38, Instruction::new(InstType::Jr, "jr c,*", 2, 12).not_taken(7).cond(Condition::C).dst(Operand::PC).src(Operand::N));
        m.insert(0x39, Instruction::new(InstType::Add, "add hl,sp", 1, 11).dst(Operand::HL).src(Operand::SP));
        m.insert(0x3a, Instruction::new(InstType::Ld, "ld a,(**)", 3, 13).dst(Operand::A).src(Operand::IndN));
        m.insert(0x3b, Instruction::new(InstType::Dec, "dec sp", 1, 6).dst(Operand::SP).src(Operand::One));
        m.insert(0x3c, Instruction::new(InstType::Inc, "inc a", 1, 4).dst(Operand::A).src(Operand::One));
        m.insert(0x3d, Instruction::new(InstType::Dec, "dec a", 1, 4).dst(Operand::A).src(Operand::One));
        m.insert(0x3e, Instruction::new(InstType::Ld, "ld a,*", 2, 7).dst(Operand::A).src(Operand::N));
        m.insert(0x3f, Instruction::new(InstType::Ccf, "ccf", 1, 4));
        m.insert(0x40, Instruction::new(InstType::Ld, "ld b,b", 1, 4).dst(Operand::B).src(Operand::B));
        m.insert(0x41, Instruction::new(InstType::Ld, "ld b,c", 1, 4).dst(Operand::B).src(Operand::C));
        m.insert(0x42, Instruction::new(InstType::Ld, "ld b,d", 1, 4).dst(Operand::B).src(Operand::D));
        m.insert(0x43, Instruction::new(InstType::Ld, "ld b,e", 1, 4).dst(Operand::B).src(Operand::E));
        m.insert(0x44, Instruction::new(InstType::Ld, "ld b,h", 1, 4).dst(Operand::B).src(Operand::H));
        m.insert(0x45, Instruction::new(InstType::Ld, "ld b,l", 1, 4).dst(Operand::B).src(Operand::L));
        m.insert(0x46, Instruction::new(InstType::Ld, "ld b,(hl)", 1, 7).dst(Operand::B).src(Operand::IndHL));
        m.insert(0x47, Instruction::new(InstType::Ld, "ld b,a", 1, 4).dst(Operand::B).src(Operand::A));
        m.insert(0x48, Instruction::new(InstType::Ld, "ld c,b", 1, 4).dst(Operand::C).src(Operand::B));
        m.insert(0x49, Instruction::new(InstType::Ld, "ld c,c", 1, 4).dst(Operand::C).src(Operand::C));
        m.insert(0x4a, Instruction::new(InstType::Ld, "ld c,d", 1, 4).dst(Operand::C).src(Operand::D));
        m.insert(0x4b, Instruction::new(InstType::Ld, "ld c,e", 1, 4).dst(Operand::C).src(Operand::E));
        m.insert(0x4c, Instruction::new(InstType::Ld, "ld c,h", 1, 4).dst(Operand::C).src(Operand::H));
        m.insert(0x4d, Instruction::new(InstType::Ld, "ld c,l", 1, 4).dst(Operand::C).src(Operand::L));
        m.insert(0x4e, Instruction::new(InstType::Ld, "ld c,(hl)", 1, 7).dst(Operand::C).src(Operand::IndHL));
        m.insert(0x4f, Instruction::new(InstType::Ld, "ld c,a", 1, 4).dst(Operand::C).src(Operand::A));
        m.insert(0x50, Instruction::new(InstType::Ld, "ld d,b", 1, 4).dst(Operand::D).src(Operand::B));
        m.insert(0x51, Instruction::new(InstType::Ld, "ld d,c", 1, 4).dst(Operand::D).src(Operand::C));
        m.insert(0x52, Instruction::new(InstType::Ld, "ld d,d", 1, 4).dst(Operand::D).src(Operand::D));
        m.insert(0x53, Instruction::new(InstType::Ld, "ld d,e", 1, 4).dst(Operand::D).src(Operand::E));
        m.insert(0x54, Instruction::new(InstType::Ld, "ld d,h", 1, 4).dst(Operand::D).src(Operand::H));
        m.insert(0x55, Instruction::new(InstType::Ld, "ld d,l", 1, 4).dst(Operand::D).src(Operand::L));
        m.insert(0x56, Instruction::new(InstType::Ld, "ld d,(hl)", 1, 7).dst(Operand::D).src(Operand::IndHL));
        m.insert(0x57, Instruction::new(InstType::Ld, "ld d,a", 1, 4).dst(Operand::D).src(Operand::A));
        m.insert(0x58, Instruction::new(InstType::Ld, "ld e,b", 1, 4).dst(Operand::E).src(Operand::B));
        m.insert(0x59, Instruction::new(InstType::Ld, "ld e,c", 1, 4).dst(Operand::E).src(Operand::C));
        m.insert(0x5a, Instruction::new(InstType::Ld, "ld e,d", 1, 4).dst(Operand::E).src(Operand::D));
        m.insert(0x5b, Instruction::new(InstType::Ld, "ld e,e", 1, 4).dst(Operand::E).src(Operand::E));
        m.insert(0x5c, Instruction::new(InstType::Ld, "ld e,h", 1, 4).dst(Operand::E).src(Operand::H));
        m.insert(0x5d, Instruction::new(InstType::Ld, "ld e,l", 1, 4).dst(Operand::E).src(Operand::L));
        m.insert(0x5e, Instruction::new(InstType::Ld, "ld e,(hl)", 1, 7).dst(Operand::E).src(Operand::IndHL));
        m.insert(0x5f, Instruction::new(InstType::Ld, "ld e,a", 1, 4).dst(Operand::E).src(Operand::A));
        m.insert(0x60, Instruction::new(InstType::Ld, "ld h,b", 1, 4).dst(Operand::H).src(Operand::B));
        m.insert(0x61, Instruction::new(InstType::Ld, "ld h,c", 1, 4).dst(Operand::H).src(Operand::C));
        m.insert(0x62, Instruction::new(InstType::Ld, "ld h,d", 1, 4).dst(Operand::H).src(Operand::D));
        m.insert(0x63, Instruction::new(InstType::Ld, "ld h,e", 1, 4).dst(Operand::H).src(Operand::E));
        m.insert(0x64, Instruction::new(InstType::Ld, "ld h,h", 1, 4).dst(Operand::H).src(Operand::H));
        m.insert(0x65, Instruction::new(InstType::Ld, "ld h,l", 1, 4).dst(Operand::H).src(Operand::L));
        m.insert(0x66, Instruction::new(InstType::Ld, "ld h,(hl)", 1, 7).dst(Operand::H).src(Operand::IndHL));
        m.insert(0x67, Instruction::new(InstType::Ld, "ld h,a", 1, 4).dst(Operand::H).src(Operand::A));
        m.insert(0x68, Instruction::new(InstType::Ld, "ld l,b", 1, 4).dst(Operand::L).src(Operand::B));
        m.insert(0x69, Instruction::new(InstType::Ld, "ld l,c", 1, 4).dst(Operand::L).src(Operand::C));
        m.insert(0x6a, Instruction::new(InstType::Ld, "ld l,d", 1, 4).dst(Operand::L).src(Operand::D));
        m.insert(0x6b, Instruction::new(InstType::Ld, "ld l,e", 1, 4).dst(Operand::L).src(Operand::E));
        m.insert(0x6c, Instruction::new(InstType::Ld, "ld l,h", 1, 4).dst(Operand::L).src(Operand::H));
        m.insert(0x6d, Instruction::new(InstType::Ld, "ld l,l", 1, 4).dst(Operand::L).src(Operand::L));
        m.insert(0x6e, Instruction::new(InstType::Ld, "ld l,(hl)", 1, 7).dst(Operand::L).src(Operand::IndHL));
        m.insert(0x6f, Instruction::new(InstType::Ld, "ld l,a", 1, 4).dst(Operand::L).src(Operand::A));
        m.insert(0x70, Instruction::new(InstType::Ld, "ld (hl),b", 1, 7).dst(Operand::IndHL).src(Operand::B));
        m.insert(0x71, Instruction::new(InstType::Ld, "ld (hl),c", 1, 7).dst(Operand::IndHL).src(Operand::C));
        m.insert(0x72, Instruction::new(InstType::Ld, "ld (hl),d", 1, 7).dst(Operand::IndHL).src(Operand::D));
        m.insert(0x73, Instruction::new(InstType::Ld, "ld (hl),e", 1, 7).dst(Operand::IndHL).src(Operand::E));
        m.insert(0x74, Instruction::new(InstType::Ld, "ld (hl),h", 1, 7).dst(Operand::IndHL).src(Operand::H));
        m.insert(0x75, Instruction::new(InstType::Ld, "ld (hl),l", 1, 7).dst(Operand::IndHL).src(Operand::L));
        m.insert(0x76, Instruction::new(InstType::Halt, "halt", 1, 4));
        m.insert(0x77, Instruction::new(InstType::Ld, "ld (hl),a", 1, 7).dst(Operand::IndHL).src(Operand::A));
        m.insert(0x78, Instruction::new(InstType::Ld, "ld a,b", 1, 4).dst(Operand::A).src(Operand::B));
        m.insert(0x79, Instruction::new(InstType::Ld, "ld a,c", 1, 4).dst(Operand::A).src(Operand::C));
        m.insert(0x7a, Instruction::new(InstType::Ld, "ld a,d", 1, 4).dst(Operand::A).src(Operand::D));
        m.insert(0x7b, Instruction::new(InstType::Ld, "ld a,e", 1, 4).dst(Operand::A).src(Operand::E));
        m.insert(0x7c, Instruction::new(InstType::Ld, "ld a,h", 1, 4).dst(Operand::A).src(Operand::H));
        m.insert(0x7d, Instruction::new(InstType::Ld, "ld a,l", 1, 4).dst(Operand::A).src(Operand::L));
        m.insert(0x7e, Instruction::new(InstType::Ld, "ld a,(hl)", 1, 7).dst(Operand::A).src(Operand::IndHL));
        m.insert(0x7f, Instruction::new(InstType::Ld, "ld a,a", 1, 4).dst(Operand::A).src(Operand::A));
        m.insert(0x80, Instruction::new(InstType::Add, "add b", 1, 4).dst(Operand::A).src(Operand::B));
        m.insert(0x81, Instruction::new(InstType::Add, "add c", 1, 4).dst(Operand::A).src(Operand::C));
        m.insert(0x82, Instruction::new(InstType::Add, "add d", 1, 4).dst(Operand::A).src(Operand::D));
        m.insert(0x83, Instruction::new(InstType::Add, "add e", 1, 4).dst(Operand::A).src(Operand::E));
        m.insert(0x84, Instruction::new(InstType::Add, "add h", 1, 4).dst(Operand::A).src(Operand::H));
        m.insert(0x85, Instruction::new(InstType::Add, "add l", 1, 4).dst(Operand::A).src(Operand::L));
        m.insert(0x86, Instruction::new(InstType::Add, "add (hl)", 1, 7).dst(Operand::A).src(Operand::IndHL));
        m.insert(0x87, Instruction::new(InstType::Add, "add a", 1, 4).dst(Operand::A).src(Operand::A));
        m.insert(0x88, Instruction::new(InstType::Adc, "adc a,b", 1, 4).dst(Operand::A).src(Operand::B));
        m.insert(0x89, Instruction::new(InstType::Adc, "adc a,c", 1, 4).dst(Operand::A).src(Operand::C));
        m.insert(0x8a, Instruction::new(InstType::Adc, "adc a,d", 1, 4).dst(Operand::A).src(Operand::D));
        m.insert(0x8b, Instruction::new(InstType::Adc, "adc a,e", 1, 4).dst(Operand::A).src(Operand::E));
        m.insert(0x8c, Instruction::new(InstType::Adc, "adc a,h", 1, 4).dst(Operand::A).src(Operand::H));
        m.insert(0x8d, Instruction::new(InstType::Adc, "adc a,l", 1, 4).dst(Operand::A).src(Operand::L));
        m.insert(0x8e, Instruction::new(InstType::Adc, "adc a,(hl)", 1, 7).dst(Operand::A).src(Operand::IndHL));
        m.insert(0x8f, Instruction::new(InstType::Adc, "adc a,a", 1, 4).dst(Operand::A).src(Operand::A));
        m.insert(0x90, Instruction::new(InstType::Sub, "sub b", 1, 4).dst(Operand::A).src(Operand::B));
        m.insert(0x91, Instruction::new(InstType::Sub, "sub c", 1, 4).dst(Operand::A).src(Operand::C));
        m.insert(0x92, Instruction::new(InstType::Sub, "sub d", 1, 4).dst(Operand::A).src(Operand::D));
        m.insert(0x93, Instruction::new(InstType::Sub, "sub e", 1, 4).dst(Operand::A).src(Operand::E));
        m.insert(0x94, Instruction::new(InstType::Sub, "sub h", 1, 4).dst(Operand::A).src(Operand::H));
        m.insert(0x95, Instruction::new(InstType::Sub, "sub l", 1, 4).dst(Operand::A).src(Operand::L));
        m.insert(0x96, Instruction::new(InstType::Sub, "sub (hl)", 1, 7).dst(Operand::A).src(Operand::IndHL));
        m.insert(0x97, Instruction::new(InstType::Sub, "sub a", 1, 4).dst(Operand::A).src(Operand::A));
        m.insert(0x98, Instruction::new(InstType::Sbc, "sbc a,b", 1, 4).dst(Operand::A).src(Operand::B));
        m.insert(0x99, Instruction::new(InstType::Sbc, "sbc a,c", 1, 4).dst(Operand::A).src(Operand::C));
        m.insert(0x9a, Instruction::new(InstType::Sbc, "sbc a,d", 1, 4).dst(Operand::A).src(Operand::D));
        m.insert(0x9b, Instruction::new(InstType::Sbc, "sbc a,e", 1, 4).dst(Operand::A).src(Operand::E));
        m.insert(0x9c, Instruction::new(InstType::Sbc, "sbc a,h", 1, 4).dst(Operand::A).src(Operand::H));
        m.insert(0x9d, Instruction::new(InstType::Sbc, "sbc a,l", 1, 4).dst(Operand::A).src(Operand::L));
        m.insert(0x9e, Instruction::new(InstType::Sbc, "sbc a,(hl)", 1, 7).dst(Operand::A).src(Operand::IndHL));
        m.insert(0x9f, Instruction::new(InstType::Sbc, "sbc a,a", 1, 4).dst(Operand::A).src(Operand::A));
        m.insert(0xa0, Instruction::new(InstType::And, "and b", 1, 4).dst(Operand::A).src(Operand::B));
        m.insert(0xa1, Instruction::new(InstType::And, "and c", 1, 4).dst(Operand::A).src(Operand::C));
        m.insert(0xa2, Instruction::new(InstType::And, "and d", 1, 4).dst(Operand::A).src(Operand::D));
        m.insert(0xa3, Instruction::new(InstType::And, "and e", 1, 4).dst(Operand::A).src(Operand::E));
        m.insert(0xa4, Instruction::new(InstType::And, "and h", 1, 4).dst(Operand::A).src(Operand::H));
        m.insert(0xa5, Instruction::new(InstType::And, "and l", 1, 4).dst(Operand::A).src(Operand::L));
        m.insert(0xa6, Instruction::new(InstType::And, "and (hl)", 1, 7).dst(Operand::A).src(Operand::IndHL));
        m.insert(0xa7, Instruction::new(InstType::And, "and a", 1, 4).dst(Operand::A).src(Operand::A));
        m.insert(0xa8, Instruction::new(InstType::Xor, "xor b", 1, 4).dst(Operand::A).src(Operand::B));
        m.insert(0xa9, Instruction::new(InstType::Xor, "xor c", 1, 4).dst(Operand::A).src(Operand::C));
        m.insert(0xaa, Instruction::new(InstType::Xor, "xor d", 1, 4).dst(Operand::A).src(Operand::D));
        m.insert(0xab, Instruction::new(InstType::Xor, "xor e", 1, 4).dst(Operand::A).src(Operand::E));
        m.insert(0xac, Instruction::new(InstType::Xor, "xor h", 1, 4).dst(Operand::A).src(Operand::H));
        m.insert(0xad, Instruction::new(InstType::Xor, "xor l", 1, 4).dst(Operand::A).src(Operand::L));
        m.insert(0xae, Instruction::new(InstType::Xor, "xor (hl)", 1, 7).dst(Operand::A).src(Operand::IndHL));
        m.insert(0xaf, Instruction::new(InstType::Xor, "xor a", 1, 4).dst(Operand::A).src(Operand::A));
        m.insert(0xb0, Instruction::new(InstType::Or, "or b", 1, 4).dst(Operand::A).src(Operand::B));
        m.insert(0xb1, Instruction::new(InstType::Or, "or c", 1, 4).dst(Operand::A).src(Operand::C));
        m.insert(0xb2, Instruction::new(InstType::Or, "or d", 1, 4).dst(Operand::A).src(Operand::D));
        m.insert(0xb3, Instruction::new(InstType::Or, "or e", 1, 4).dst(Operand::A).src(Operand::E));
        m.insert(0xb4, Instruction::new(InstType::Or, "or h", 1, 4).dst(Operand::A).src(Operand::H));
        m.insert(0xb5, Instruction::new(InstType::Or, "or l", 1, 4).dst(Operand::A).src(Operand::L));
        m.insert(0xb6, Instruction::new(InstType::Or, "or (hl)", 1, 7).dst(Operand::A).src(Operand::IndHL));
        m.insert(0xb7, Instruction::new(InstType::Or, "or a", 1, 4).dst(Operand::A).src(Operand::A));
        m.insert(0xb8, Instruction::new(InstType::Cp, "cp b", 1, 4).dst(Operand::A).src(Operand::B));
        m.insert(0xb9, Instruction::new(InstType::Cp, "cp c", 1, 4).dst(Operand::A).src(Operand::C));
        m.insert(0xba, Instruction::new(InstType::Cp, "cp d", 1, 4).dst(Operand::A).src(Operand::D));
        m.insert(0xbb, Instruction::new(InstType::Cp, "cp e", 1, 4).dst(Operand::A).src(Operand::E));
        m.insert(0xbc, Instruction::new(InstType::Cp, "cp h", 1, 4).dst(Operand::A).src(Operand::H));
        m.insert(0xbd, Instruction::new(InstType::Cp, "cp l", 1, 4).dst(Operand::A).src(Operand::L));
        m.insert(0xbe, Instruction::new(InstType::Cp, "cp (hl)", 1, 7).dst(Operand::A).src(Operand::IndHL));
        m.insert(0xbf, Instruction::new(InstType::Cp, "cp a", 1, 4).dst(Operand::A).src(Operand::A));
        m.insert(0xc0, Instruction::new(InstType::Ret, "ret nz", 1, 11).not_taken(5).cond(Condition::NZ).dst(Operand::PC));
        m.insert(0xc1, Instruction::new(InstType::Pop, "pop bc", 1, 10).dst(Operand::BC));
        m.insert(0xc2, Instruction::new(InstType::Jp, "jp nz,**", 3, 10).cond(Condition::NZ).dst(Operand::PC).src(Operand::NN));
        m.insert(0xc3, Instruction::new(InstType::Jp, "jp **", 3, 10).cond(Condition::Always).dst(Operand::PC).src(Operand::NN));
        m.insert(0xc4, Instruction::new(InstType::Call, "call nz,**", 3, 17).not_taken(10).cond(Condition::NZ).dst(Operand::PC).src(Operand::NN));
        m.insert(0xc5, Instruction::new(InstType::Push, "push bc", 1, 11).src(Operand::BC));
        m.insert(0xc6, Instruction::new(InstType::Add, "add a,*", 2, 7).dst(Operand::A).src(Operand::N));
        m.insert(0xc7, Instruction::new(InstType::Rst, "rst 00h", 1, 11).dst(Operand::PC).src(Operand::Hex0000));
        m.insert(0xc8, Instruction::new(InstType::Ret, "ret z", 1, 11).not_taken(5).cond(Condition::Z).dst(Operand::PC));
        m.insert(0xc9, Instruction::new(InstType::Ret, "ret", 1, 10).cond(Condition::Always).dst(Operand::PC));
        m.insert(0xca, Instruction::new(InstType::Jp, "jp z,**", 3, 10).cond(Condition::Z).dst(Operand::PC).src(Operand::NN));
        m.insert(0xcc, Instruction::new(InstType::Call, "call z,**", 3, 17).not_taken(10).cond(Condition::Z).dst(Operand::PC).src(Operand::NN));
        m.insert(0xcd, Instruction::new(InstType::Call, "call **", 3, 17).cond(Condition::Always).dst(Operand::PC).src(Operand::NN));
        m.insert(0xce, Instruction::new(InstType::Adc, "adc a,*", 2, 7).dst(Operand::A).src(Operand::N));
        m.insert(0xcf, Instruction::new(InstType::Rst, "rst 08h", 1, 11).dst(Operand::PC).src(Operand::Hex0008));
        m.insert(0xd0, Instruction::new(InstType::Ret, "ret nc", 1, 11).not_taken(5).cond(Condition::NC).dst(Operand::PC));
        m.insert(0xd1, Instruction::new(InstType::Pop, "pop de", 1, 10).dst(Operand::DE));
        m.insert(0xd2, Instruction::new(InstType::Jp, "jp nc,**", 3, 10).cond(Condition::NC).dst(Operand::PC).src(Operand::NN));
        m.insert(0xd3, Instruction::new(InstType::Out, "out (*),a", 2, 11).dst(Operand::PortN).src(Operand::A));
        m.insert(0xd4, Instruction::new(InstType::Call, "call nc,**", 3, 17).not_taken(10).cond(Condition::NC).dst(Operand::PC).src(Operand::NN));
        m.insert(0xd5, Instruction::new(InstType::Push, "push de", 1, 11).src(Operand::DE));
        m.insert(0xd6, Instruction::new(InstType::Sub, "sub *", 2, 7).dst(Operand::A).src(Operand::N));
        m.insert(0xd7, Instruction::new(InstType::Rst, "rst 10h", 1, 11).dst(Operand::PC).src(Operand::Hex0010));
        m.insert(0xd8, Instruction::new(InstType::Ret, "ret c", 1, 11).not_taken(5).cond(Condition::C).dst(Operand::PC));
        m.insert(0xd9, Instruction::new(InstType::Ex, "exx", 1, 4));
        m.insert(0xda, Instruction::new(InstType::Jp, "jp c,**", 3, 10).cond(Condition::C).dst(Operand::PC).src(Operand::NN));
        m.insert(0xdb, Instruction::new(InstType::In, "in a,(*)", 2, 11).dst(Operand::A).src(Operand::PortN));
        m.insert(0xdc, Instruction::new(InstType::Call, "call c,**", 3, 17).not_taken(10).cond(Condition::C).dst(Operand::PC).src(Operand::NN));
        m.insert(0xde, Instruction::new(InstType::Sbc, "sbc a,*", 2, 7).dst(Operand::A).src(Operand::N));
        m.insert(0xdf, Instruction::new(InstType::Rst, "rst 18h", 1, 11).dst(Operand::PC).src(Operand::Hex0018));
        m.insert(0xe0, Instruction::new(InstType::Ret, "ret po", 1, 11).not_taken(5).cond(Condition::PO).dst(Operand::PC));
        m.insert(0xe1, Instruction::new(InstType::Pop, "pop hl", 1, 10).dst(Operand::HL));
        m.insert(0xe2, Instruction::new(InstType::Jp, "jp po,**", 3, 10).cond(Condition::PO).dst(Operand::PC).src(Operand::NN));
        m.insert(0xe3, Instruction::new(InstType::Ex, "ex (sp),hl", 1, 19).dst(Operand::IndSP).src(Operand::HL));
        m.insert(0xe4, Instruction::new(InstType::Call, "call po,**", 3, 17).not_taken(10).cond(Condition::PO).dst(Operand::PC).src(Operand::NN));
        m.insert(0xe5, Instruction::new(InstType::Push, "push hl", 1, 11).src(Operand::HL));
        m.insert(0xe6, Instruction::new(InstType::And, "and *", 2, 7).dst(Operand::A).src(Operand::N));
        m.insert(0xe7, Instruction::new(InstType::Rst, "rst 20h", 1, 11).dst(Operand::PC).src(Operand::Hex0020));
        m.insert(0xe8, Instruction::new(InstType::Ret, "ret pe", 1, 11).not_taken(5).cond(Condition::PE).dst(Operand::PC));
        m.insert(0xe9, Instruction::new(InstType::Jp, "jp (hl)", 1, 4).cond(Condition::Always).dst(Operand::PC).src(Operand::HL));
        m.insert(0xea, Instruction::new(InstType::Jp, "jp pe,**", 3, 10).cond(Condition::PE).dst(Operand::PC).src(Operand::NN));
        m.insert(0xeb, Instruction::new(InstType::Ex, "ex de,hl", 1, 4).dst(Operand::DE).src(Operand::HL));
        m.insert(0xec, Instruction::new(InstType::Call, "call pe,**", 3, 17).not_taken(10).cond(Condition::PE).dst(Operand::PC).src(Operand::NN));
        m.insert(0xee, Instruction::new(InstType::Xor, "xor *", 2, 7).dst(Operand::A).src(Operand::N));
        m.insert(0xef, Instruction::new(InstType::Rst, "rst 28h", 1, 11).dst(Operand::PC).src(Operand::Hex0028));
        m.insert(0xf0, Instruction::new(InstType::Ret, "ret p", 1, 11).not_taken(5).cond(Condition::P).dst(Operand::PC));
        m.insert(0xf1, Instruction::new(InstType::Pop, "pop af", 1, 10).dst(Operand::AF));
        m.insert(0xf2, Instruction::new(InstType::Jp, "jp p,**", 3, 10).cond(Condition::P).dst(Operand::PC).src(Operand::NN));
        m.insert(0xf3, Instruction::new(InstType::Di, "di", 1, 4));
        m.insert(0xf4, Instruction::new(InstType::Call, "call p,**", 3, 17).not_taken(10).cond(Condition::P).dst(Operand::PC).src(Operand::NN));
        m.insert(0xf5, Instruction::new(InstType::Push, "push af", 1, 11).src(Operand::AF));
        m.insert(0xf6, Instruction::new(InstType::Or, "or *", 2, 7).dst(Operand::A).src(Operand::N));
        m.insert(0xf7, Instruction::new(InstType::Rst, "rst 30h", 1, 11).dst(Operand::PC).src(Operand::Hex0030));
        m.insert(0xf8, Instruction::new(InstType::Ret, "ret m", 1, 11).not_taken(5).cond(Condition::M).dst(Operand::PC));
        m.insert(0xf9, Instruction::new(InstType::Ld, "ld sp,hl", 1, 6).dst(Operand::SP).src(Operand::HL));
        m.insert(0xfa, Instruction::new(InstType::Jp, "jp m,**", 3, 10).cond(Condition::M).dst(Operand::PC).src(Operand::NN));
        m.insert(0xfb, Instruction::new(InstType::Ei, "ei", 1, 4));
        m.insert(0xfc, Instruction::new(InstType::Call, "call m,**", 3, 17).not_taken(10).cond(Condition::M).dst(Operand::PC).src(Operand::NN));
        m.insert(0xfe, Instruction::new(InstType::Cp, "cp *", 2, 7).dst(Operand::A).src(Operand::N));
        m.insert(0xff, Instruction::new(InstType::Rst, "rst 38h", 1, 11).dst(Operand::PC).src(Operand::Hex0038));

        m.insert(0xcb00, Instruction::new(InstType::Rlc, "rlc b", 2, 8).dst(Operand::B));
        m.insert(0xcb01, Instruction::new(InstType::Rlc, "rlc c", 2, 8).dst(Operand::C));
        m.insert(0xcb02, Instruction::new(InstType::Rlc, "rlc d", 2, 8).dst(Operand::D));
        m.insert(0xcb03, Instruction::new(InstType::Rlc, "rlc e", 2, 8).dst(Operand::E));
        m.insert(0xcb04, Instruction::new(InstType::Rlc, "rlc h", 2, 8).dst(Operand::H));
        m.insert(0xcb05, Instruction::new(InstType::Rlc, "rlc l", 2, 8).dst(Operand::L));
        m.insert(0xcb06, Instruction::new(InstType::Rlc, "rlc (hl)", 2, 15).dst(Operand::IndHL));
        m.insert(0xcb07, Instruction::new(InstType::Rlc, "rlc a", 2, 8).dst(Operand::A));
        m.insert(0xcb08, Instruction::new(InstType::Rrc, "rrc b", 2, 8).dst(Operand::B));
        m.insert(0xcb09, Instruction::new(InstType::Rrc, "rrc c", 2, 8).dst(Operand::C));
        m.insert(0xcb0a, Instruction::new(InstType::Rrc, "rrc d", 2, 8).dst(Operand::D));
        m.insert(0xcb0b, Instruction::new(InstType::Rrc, "rrc e", 2, 8).dst(Operand::E));
        m.insert(0xcb0c, Instruction::new(InstType::Rrc, "rrc h", 2, 8).dst(Operand::H));
        m.insert(0xcb0d, Instruction::new(InstType::Rrc, "rrc l", 2, 8).dst(Operand::L));
        m.insert(0xcb0e, Instruction::new(InstType::Rrc, "rrc (hl)", 2, 15).dst(Operand::IndHL));
        m.insert(0xcb0f, Instruction::new(InstType::Rrc, "rrc a", 2, 8).dst(Operand::A));
        m.insert(0xcb10, Instruction::new(InstType::Rl, "rl b", 2, 8).dst(Operand::B));
        m.insert(0xcb11, Instruction::new(InstType::Rl, "rl c", 2, 8).dst(Operand::C));
        m.insert(0xcb12, Instruction::new(InstType::Rl, "rl d", 2, 8).dst(Operand::D));
        m.insert(0xcb13, Instruction::new(InstType::Rl, "rl e", 2, 8).dst(Operand::E));
        m.insert(0xcb14, Instruction::new(InstType::Rl, "rl h", 2, 8).dst(Operand::H));
        m.insert(0xcb15, Instruction::new(InstType::Rl, "rl l", 2, 8).dst(Operand::L));
        m.insert(0xcb16, Instruction::new(InstType::Rl, "rl (hl)", 2, 15).dst(Operand::IndHL));
        m.insert(0xcb17, Instruction::new(InstType::Rl, "rl a", 2, 8).dst(Operand::A));
        m.insert(0xcb18, Instruction::new(InstType::Rr, "rr b", 2, 8).dst(Operand::B));
        m.insert(0xcb19, Instruction::new(InstType::Rr, "rr c", 2, 8).dst(Operand::C));
        m.insert(0xcb1a, Instruction::new(InstType::Rr, "rr d", 2, 8).dst(Operand::D));
        m.insert(0xcb1b, Instruction::new(InstType::Rr, "rr e", 2, 8).dst(Operand::E));
        m.insert(0xcb1c, Instruction::new(InstType::Rr, "rr h", 2, 8).dst(Operand::H));
        m.insert(0xcb1d, Instruction::new(InstType::Rr, "rr l", 2, 8).dst(Operand::L));
        m.insert(0xcb1e, Instruction::new(InstType::Rr, "rr (hl)", 2, 15).dst(Operand::IndHL));
        m.insert(0xcb1f, Instruction::new(InstType::Rr, "rr a", 2, 8).dst(Operand::A));
        m.insert(0xcb20, Instruction::new(InstType::Sla, "sla b", 2, 8).dst(Operand::B));
        m.insert(0xcb21, Instruction::new(InstType::Sla, "sla c", 2, 8).dst(Operand::C));
        m.insert(0xcb22, Instruction::new(InstType::Sla, "sla d", 2, 8).dst(Operand::D));
        m.insert(0xcb23, Instruction::new(InstType::Sla, "sla e", 2, 8).dst(Operand::E));
        m.insert(0xcb24, Instruction::new(InstType::Sla, "sla h", 2, 8).dst(Operand::H));
        m.insert(0xcb25, Instruction::new(InstType::Sla, "sla l", 2, 8).dst(Operand::L));
        m.insert(0xcb26, Instruction::new(InstType::Sla, "sla (hl)", 2, 15).dst(Operand::IndHL));
        m.insert(0xcb27, Instruction::new(InstType::Sla, "sla a", 2, 8).dst(Operand::A));
        m.insert(0xcb28, Instruction::new(InstType::Sra, "sra b", 2, 8).dst(Operand::B));
        m.insert(0xcb29, Instruction::new(InstType::Sra, "sra c", 2, 8).dst(Operand::C));
        m.insert(0xcb2a, Instruction::new(InstType::Sra, "sra d", 2, 8).dst(Operand::D));
        m.insert(0xcb2b, Instruction::new(InstType::Sra, "sra e", 2, 8).dst(Operand::E));
        m.insert(0xcb2c, Instruction::new(InstType::Sra, "sra h", 2, 8).dst(Operand::H));
        m.insert(0xcb2d, Instruction::new(InstType::Sra, "sra l", 2, 8).dst(Operand::L));
        m.insert(0xcb2e, Instruction::new(InstType::Sra, "sra (hl)", 2, 15).dst(Operand::IndHL));
        m.insert(0xcb2f, Instruction::new(InstType::Sra, "sra a", 2, 8).dst(Operand::A));
        m.insert(0xcb30, Instruction::new(InstType::Sll, "sll b", 2, 8).dst(Operand::B));
        m.insert(0xcb31, Instruction::new(InstType::Sll, "sll c", 2, 8).dst(Operand::C));
        m.insert(0xcb32, Instruction::new(InstType::Sll, "sll d", 2, 8).dst(Operand::D));
        m.insert(0xcb33, Instruction::new(InstType::Sll, "sll e", 2, 8).dst(Operand::E));
        m.insert(0xcb34, Instruction::new(InstType::Sll, "sll h", 2, 8).dst(Operand::H));
        m.insert(0xcb35, Instruction::new(InstType::Sll, "sll l", 2, 8).dst(Operand::L));
        m.insert(0xcb36, Instruction::new(InstType::Sll, "sll (hl)", 2, 15).dst(Operand::IndHL));
        m.insert(0xcb37, Instruction::new(InstType::Sll, "sll a", 2, 8).dst(Operand::A));
        m.insert(0xcb38, Instruction::new(InstType::Srl, "srl b", 2, 8).dst(Operand::B));
        m.insert(0xcb39, Instruction::new(InstType::Srl, "srl c", 2, 8).dst(Operand::C));
        m.insert(0xcb3a, Instruction::new(InstType::Srl, "srl d", 2, 8).dst(Operand::D));
        m.insert(0xcb3b, Instruction::new(InstType::Srl, "srl e", 2, 8).dst(Operand::E));
        m.insert(0xcb3c, Instruction::new(InstType::Srl, "srl h", 2, 8).dst(Operand::H));
        m.insert(0xcb3d, Instruction::new(InstType::Srl, "srl l", 2, 8).dst(Operand::L));
        m.insert(0xcb3e, Instruction::new(InstType::Srl, "srl (hl)", 2, 15).dst(Operand::IndHL));
        m.insert(0xcb3f, Instruction::new(InstType::Srl, "srl a", 2, 8).dst(Operand::A));
        m.insert(0xcb40, Instruction::new(InstType::Bit, "bit 0,b", 2, 8).dst(Operand::B).src(Operand::Zero));
        m.insert(0xcb41, Instruction::new(InstType::Bit, "bit 0,c", 2, 8).dst(Operand::C).src(Operand::Zero));
        m.insert(0xcb42, Instruction::new(InstType::Bit, "bit 0,d", 2, 8).dst(Operand::D).src(Operand::Zero));
        m.insert(0xcb43, Instruction::new(InstType::Bit, "bit 0,e", 2, 8).dst(Operand::E).src(Operand::Zero));
        m.insert(0xcb44, Instruction::new(InstType::Bit, "bit 0,h", 2, 8).dst(Operand::H).src(Operand::Zero));
        m.insert(0xcb45, Instruction::new(InstType::Bit, "bit 0,l", 2, 8).dst(Operand::L).src(Operand::Zero));
        m.insert(0xcb46, Instruction::new(InstType::Bit, "bit 0,(hl)", 2, 12).dst(Operand::IndHL).src(Operand::Zero));
        m.insert(0xcb47, Instruction::new(InstType::Bit, "bit 0,a", 2, 8).dst(Operand::A).src(Operand::Zero));
        m.insert(0xcb48, Instruction::new(InstType::Bit, "bit 1,b", 2, 8).dst(Operand::B).src(Operand::One));
        m.insert(0xcb49, Instruction::new(InstType::Bit, "bit 1,c", 2, 8).dst(Operand::C).src(Operand::One));
        m.insert(0xcb4a, Instruction::new(InstType::Bit, "bit 1,d", 2, 8).dst(Operand::D).src(Operand::One));
        m.insert(0xcb4b, Instruction::new(InstType::Bit, "bit 1,e", 2, 8).dst(Operand::E).src(Operand::One));
        m.insert(0xcb4c, Instruction::new(InstType::Bit, "bit 1,h", 2, 8).dst(Operand::H).src(Operand::One));
        m.insert(0xcb4d, Instruction::new(InstType::Bit, "bit 1,l", 2, 8).dst(Operand::L).src(Operand::One));
        m.insert(0xcb4e, Instruction::new(InstType::Bit, "bit 1,(hl)", 2, 12).dst(Operand::IndHL).src(Operand::One));
        m.insert(0xcb4f, Instruction::new(InstType::Bit, "bit 1,a", 2, 8).dst(Operand::A).src(Operand::One));
        m.insert(0xcb50, Instruction::new(InstType::Bit, "bit 2,b", 2, 8).dst(Operand::B).src(Operand::Two));
        m.insert(0xcb51, Instruction::new(InstType::Bit, "bit 2,c", 2, 8).dst(Operand::C).src(Operand::Two));
        m.insert(0xcb52, Instruction::new(InstType::Bit, "bit 2,d", 2, 8).dst(Operand::D).src(Operand::Two));
        m.insert(0xcb53, Instruction::new(InstType::Bit, "bit 2,e", 2, 8).dst(Operand::E).src(Operand::Two));
        m.insert(0xcb54, Instruction::new(InstType::Bit, "bit 2,h", 2, 8).dst(Operand::H).src(Operand::Two));
        m.insert(0xcb55, Instruction::new(InstType::Bit, "bit 2,l", 2, 8).dst(Operand::L).src(Operand::Two));
        m.insert(0xcb56, Instruction::new(InstType::Bit, "bit 2,(hl)", 2, 12).dst(Operand::IndHL).src(Operand::Two));
        m.insert(0xcb57, Instruction::new(InstType::Bit, "bit 2,a", 2, 8).dst(Operand::A).src(Operand::Two));
        m.insert(0xcb58, Instruction::new(InstType::Bit, "bit 3,b", 2, 8).dst(Operand::B).src(Operand::Three));
        m.insert(0xcb59, Instruction::new(InstType::Bit, "bit 3,c", 2, 8).dst(Operand::C).src(Operand::Three));
        m.insert(0xcb5a, Instruction::new(InstType::Bit, "bit 3,d", 2, 8).dst(Operand::D).src(Operand::Three));
        m.insert(0xcb5b, Instruction::new(InstType::Bit, "bit 3,e", 2, 8).dst(Operand::E).src(Operand::Three));
        m.insert(0xcb5c, Instruction::new(InstType::Bit, "bit 3,h", 2, 8).dst(Operand::H).src(Operand::Three));
        m.insert(0xcb5d, Instruction::new(InstType::Bit, "bit 3,l", 2, 8).dst(Operand::L).src(Operand::Three));
        m.insert(0xcb5e, Instruction::new(InstType::Bit, "bit 3,(hl)", 2, 12).dst(Operand::IndHL).src(Operand::Three));
        m.insert(0xcb5f, Instruction::new(InstType::Bit, "bit 3,a", 2, 8).dst(Operand::A).src(Operand::Three));
        m.insert(0xcb60, Instruction::new(InstType::Bit, "bit 4,b", 2, 8).dst(Operand::B).src(Operand::Four));
        m.insert(0xcb61, Instruction::new(InstType::Bit, "bit 4,c", 2, 8).dst(Operand::C).src(Operand::Four));
        m.insert(0xcb62, Instruction::new(InstType::Bit, "bit 4,d", 2, 8).dst(Operand::D).src(Operand::Four));
        m.insert(0xcb63, Instruction::new(InstType::Bit, "bit 4,e", 2, 8).dst(Operand::E).src(Operand::Four));
        m.insert(0xcb64, Instruction::new(InstType::Bit, "bit 4,h", 2, 8).dst(Operand::H).src(Operand::Four));
        m.insert(0xcb65, Instruction::new(InstType::Bit, "bit 4,l", 2, 8).dst(Operand::L).src(Operand::Four));
        m.insert(0xcb66, Instruction::new(InstType::Bit, "bit 4,(hl)", 2, 12).dst(Operand::IndHL).src(Operand::Four));
        m.insert(0xcb67, Instruction::new(InstType::Bit, "bit 4,a", 2, 8).dst(Operand::A).src(Operand::Four));
        m.insert(0xcb68, Instruction::new(InstType::Bit, "bit 5,b", 2, 8).dst(Operand::B).src(Operand::Five));
        m.insert(0xcb69, Instruction::new(InstType::Bit, "bit 5,c", 2, 8).dst(Operand::C).src(Operand::Five));
        m.insert(0xcb6a, Instruction::new(InstType::Bit, "bit 5,d", 2, 8).dst(Operand::D).src(Operand::Five));
        m.insert(0xcb6b, Instruction::new(InstType::Bit, "bit 5,e", 2, 8).dst(Operand::E).src(Operand::Five));
        m.insert(0xcb6c, Instruction::new(InstType::Bit, "bit 5,h", 2, 8).dst(Operand::H).src(Operand::Five));
        m.insert(0xcb6d, Instruction::new(InstType::Bit, "bit 5,l", 2, 8).dst(Operand::L).src(Operand::Five));
        m.insert(0xcb6e, Instruction::new(InstType::Bit, "bit 5,(hl)", 2, 12).dst(Operand::IndHL).src(Operand::Five));
        m.insert(0xcb6f, Instruction::new(InstType::Bit, "bit 5,a", 2, 8).dst(Operand::A).src(Operand::Five));
        m.insert(0xcb70, Instruction::new(InstType::Bit, "bit 6,b", 2, 8).dst(Operand::B).src(Operand::Six));
        m.insert(0xcb71, Instruction::new(InstType::Bit, "bit 6,c", 2, 8).dst(Operand::C).src(Operand::Six));
        m.insert(0xcb72, Instruction::new(InstType::Bit, "bit 6,d", 2, 8).dst(Operand::D).src(Operand::Six));
        m.insert(0xcb73, Instruction::new(InstType::Bit, "bit 6,e", 2, 8).dst(Operand::E).src(Operand::Six));
        m.insert(0xcb74, Instruction::new(InstType::Bit, "bit 6,h", 2, 8).dst(Operand::H).src(Operand::Six));
        m.insert(0xcb75, Instruction::new(InstType::Bit, "bit 6,l", 2, 8).dst(Operand::L).src(Operand::Six));
        m.insert(0xcb76, Instruction::new(InstType::Bit, "bit 6,(hl)", 2, 12).dst(Operand::IndHL).src(Operand::Six));
        m.insert(0xcb77, Instruction::new(InstType::Bit, "bit 6,a", 2, 8).dst(Operand::A).src(Operand::Six));
        m.insert(0xcb78, Instruction::new(InstType::Bit, "bit 7,b", 2, 8).dst(Operand::B).src(Operand::Seven));
        m.insert(0xcb79, Instruction::new(InstType::Bit, "bit 7,c", 2, 8).dst(Operand::C).src(Operand::Seven));
        m.insert(0xcb7a, Instruction::new(InstType::Bit, "bit 7,d", 2, 8).dst(Operand::D).src(Operand::Seven));
        m.insert(0xcb7b, Instruction::new(InstType::Bit, "bit 7,e", 2, 8).dst(Operand::E).src(Operand::Seven));
        m.insert(0xcb7c, Instruction::new(InstType::Bit, "bit 7,h", 2, 8).dst(Operand::H).src(Operand::Seven));
        m.insert(0xcb7d, Instruction::new(InstType::Bit, "bit 7,l", 2, 8).dst(Operand::L).src(Operand::Seven));
        m.insert(0xcb7e, Instruction::new(InstType::Bit, "bit 7,(hl)", 2, 12).dst(Operand::IndHL).src(Operand::Seven));
        m.insert(0xcb7f, Instruction::new(InstType::Bit, "bit 7,a", 2, 8).dst(Operand::A).src(Operand::Seven));
        m.insert(0xcb80, Instruction::new(InstType::Res, "res 0,b", 2, 8).dst(Operand::B).src(Operand::Zero));
        m.insert(0xcb81, Instruction::new(InstType::Res, "res 0,c", 2, 8).dst(Operand::C).src(Operand::Zero));
        m.insert(0xcb82, Instruction::new(InstType::Res, "res 0,d", 2, 8).dst(Operand::D).src(Operand::Zero));
        m.insert(0xcb83, Instruction::new(InstType::Res, "res 0,e", 2, 8).dst(Operand::E).src(Operand::Zero));
        m.insert(0xcb84, Instruction::new(InstType::Res, "res 0,h", 2, 8).dst(Operand::H).src(Operand::Zero));
        m.insert(0xcb85, Instruction::new(InstType::Res, "res 0,l", 2, 8).dst(Operand::L).src(Operand::Zero));
        m.insert(0xcb86, Instruction::new(InstType::Res, "res 0,(hl)", 2, 15).dst(Operand::IndHL).src(Operand::Zero));
        m.insert(0xcb87, Instruction::new(InstType::Res, "res 0,a", 2, 8).dst(Operand::A).src(Operand::Zero));
        m.insert(0xcb88, Instruction::new(InstType::Res, "res 1,b", 2, 8).dst(Operand::B).src(Operand::One));
        m.insert(0xcb89, Instruction::new(InstType::Res, "res 1,c", 2, 8).dst(Operand::C).src(Operand::One));
        m.insert(0xcb8a, Instruction::new(InstType::Res, "res 1,d", 2, 8).dst(Operand::D).src(Operand::One));
        m.insert(0xcb8b, Instruction::new(InstType::Res, "res 1,e", 2, 8).dst(Operand::E).src(Operand::One));
        m.insert(0xcb8c, Instruction::new(InstType::Res, "res 1,h", 2, 8).dst(Operand::H).src(Operand::One));
        m.insert(0xcb8d, Instruction::new(InstType::Res, "res 1,l", 2, 8).dst(Operand::L).src(Operand::One));
        m.insert(0xcb8e, Instruction::new(InstType::Res, "res 1,(hl)", 2, 15).dst(Operand::IndHL).src(Operand::One));
        m.insert(0xcb8f, Instruction::new(InstType::Res, "res 1,a", 2, 8).dst(Operand::A).src(Operand::One));
        m.insert(0xcb90, Instruction::new(InstType::Res, "res 2,b", 2, 8).dst(Operand::B).src(Operand::Two));
        m.insert(0xcb91, Instruction::new(InstType::Res, "res 2,c", 2, 8).dst(Operand::C).src(Operand::Two));
        m.insert(0xcb92, Instruction::new(InstType::Res, "res 2,d", 2, 8).dst(Operand::D).src(Operand::Two));
        m.insert(0xcb93, Instruction::new(InstType::Res, "res 2,e", 2, 8).dst(Operand::E).src(Operand::Two));
        m.insert(0xcb94, Instruction::new(InstType::Res, "res 2,h", 2, 8).dst(Operand::H).src(Operand::Two));
        m.insert(0xcb95, Instruction::new(InstType::Res, "res 2,l", 2, 8).dst(Operand::L).src(Operand::Two));
        m.insert(0xcb96, Instruction::new(InstType::Res, "res 2,(hl)", 2, 15).dst(Operand::IndHL).src(Operand::Two));
        m.insert(0xcb97, Instruction::new(InstType::Res, "res 2,a", 2, 8).dst(Operand::A).src(Operand::Two));
        m.insert(0xcb98, Instruction::new(InstType::Res, "res 3,b", 2, 8).dst(Operand::B).src(Operand::Three));
        m.insert(0xcb99, Instruction::new(InstType::Res, "res 3,c", 2, 8).dst(Operand::C).src(Operand::Three));
        m.insert(0xcb9a, Instruction::new(InstType::Res, "res 3,d", 2, 8).dst(Operand::D).src(Operand::Three));
        m.insert(0xcb9b, Instruction::new(InstType::Res, "res 3,e", 2, 8).dst(Operand::E).src(Operand::Three));
        m.insert(0xcb9c, Instruction::new(InstType::Res, "res 3,h", 2, 8).dst(Operand::H).src(Operand::Three));
        m.insert(0xcb9d, Instruction::new(InstType::Res, "res 3,l", 2, 8).dst(Operand::L).src(Operand::Three));
        m.insert(0xcb9e, Instruction::new(InstType::Res, "res 3,(hl)", 2, 15).dst(Operand::IndHL).src(Operand::Three));
        m.insert(0xcb9f, Instruction::new(InstType::Res, "res 3,a", 2, 8).dst(Operand::A).src(Operand::Three));
        m.insert(0xcba0, Instruction::new(InstType::Res, "res 4,b", 2, 8).dst(Operand::B).src(Operand::Four));
        m.insert(0xcba1, Instruction::new(InstType::Res, "res 4,c", 2, 8).dst(Operand::C).src(Operand::Four));
        m.insert(0xcba2, Instruction::new(InstType::Res, "res 4,d", 2, 8).dst(Operand::D).src(Operand::Four));
        m.insert(0xcba3, Instruction::new(InstType::Res, "res 4,e", 2, 8).dst(Operand::E).src(Operand::Four));
        m.insert(0xcba4, Instruction::new(InstType::Res, "res 4,h", 2, 8).dst(Operand::H).src(Operand::Four));
        m.insert(0xcba5, Instruction::new(InstType::Res, "res 4,l", 2, 8).dst(Operand::L).src(Operand::Four));
        m.insert(0xcba6, Instruction::new(InstType::Res, "res 4,(hl)", 2, 15).dst(Operand::IndHL).src(Operand::Four));
        m.insert(0xcba7, Instruction::new(InstType::Res, "res 4,a", 2, 8).dst(Operand::A).src(Operand::Four));
        m.insert(0xcba8, Instruction::new(InstType::Res, "res 5,b", 2, 8).dst(Operand::B).src(Operand::Five));
        m.insert(0xcba9, Instruction::new(InstType::Res, "res 5,c", 2, 8).dst(Operand::C).src(Operand::Five));
        m.insert(0xcbaa, Instruction::new(InstType::Res, "res 5,d", 2, 8).dst(Operand::D).src(Operand::Five));
        m.insert(0xcbab, Instruction::new(InstType::Res, "res 5,e", 2, 8).dst(Operand::E).src(Operand::Five));
        m.insert(0xcbac, Instruction::new(InstType::Res, "res 5,h", 2, 8).dst(Operand::H).src(Operand::Five));
        m.insert(0xcbad, Instruction::new(InstType::Res, "res 5,l", 2, 8).dst(Operand::L).src(Operand::Five));
        m.insert(0xcbae, Instruction::new(InstType::Res, "res 5,(hl)", 2, 15).dst(Operand::IndHL).src(Operand::Five));
        m.insert(0xcbaf, Instruction::new(InstType::Res, "res 5,a", 2, 8).dst(Operand::A).src(Operand::Five));
        m.insert(0xcbb0, Instruction::new(InstType::Res, "res 6,b", 2, 8).dst(Operand::B).src(Operand::Six));
        m.insert(0xcbb1, Instruction::new(InstType::Res, "res 6,c", 2, 8).dst(Operand::C).src(Operand::Six));
        m.insert(0xcbb2, Instruction::new(InstType::Res, "res 6,d", 2, 8).dst(Operand::D).src(Operand::Six));
        m.insert(0xcbb3, Instruction::new(InstType::Res, "res 6,e", 2, 8).dst(Operand::E).src(Operand::Six));
        m.insert(0xcbb4, Instruction::new(InstType::Res, "res 6,h", 2, 8).dst(Operand::H).src(Operand::Six));
        m.insert(0xcbb5, Instruction::new(InstType::Res, "res 6,l", 2, 8).dst(Operand::L).src(Operand::Six));
        m.insert(0xcbb6, Instruction::new(InstType::Res, "res 6,(hl)", 2, 15).dst(Operand::IndHL).src(Operand::Six));
        m.insert(0xcbb7, Instruction::new(InstType::Res, "res 6,a", 2, 8).dst(Operand::A).src(Operand::Six));
        m.insert(0xcbb8, Instruction::new(InstType::Res, "res 7,b", 2, 8).dst(Operand::B).src(Operand::Seven));
        m.insert(0xcbb9, Instruction::new(InstType::Res, "res 7,c", 2, 8).dst(Operand::C).src(Operand::Seven));
        m.insert(0xcbba, Instruction::new(InstType::Res, "res 7,d", 2, 8).dst(Operand::D).src(Operand::Seven));
        m.insert(0xcbbb, Instruction::new(InstType::Res, "res 7,e", 2, 8).dst(Operand::E).src(Operand::Seven));
        m.insert(0xcbbc, Instruction::new(InstType::Res, "res 7,h", 2, 8).dst(Operand::H).src(Operand::Seven));
        m.insert(0xcbbd, Instruction::new(InstType::Res, "res 7,l", 2, 8).dst(Operand::L).src(Operand::Seven));
        m.insert(0xcbbe, Instruction::new(InstType::Res, "res 7,(hl)", 2, 15).dst(Operand::IndHL).src(Operand::Seven));
        m.insert(0xcbbf, Instruction::new(InstType::Res, "res 7,a", 2, 8).dst(Operand::A).src(Operand::Seven));
        m.insert(0xcbc0, Instruction::new(InstType::Set, "set 0,b", 2, 8).dst(Operand::B).src(Operand::Zero));
        m.insert(0xcbc1, Instruction::new(InstType::Set, "set 0,c", 2, 8).dst(Operand::C).src(Operand::Zero));
        m.insert(0xcbc2, Instruction::new(InstType::Set, "set 0,d", 2, 8).dst(Operand::D).src(Operand::Zero));
        m.insert(0xcbc3, Instruction::new(InstType::Set, "set 0,e", 2, 8).dst(Operand::E).src(Operand::Zero));
        m.insert(0xcbc4, Instruction::new(InstType::Set, "set 0,h", 2, 8).dst(Operand::H).src(Operand::Zero));
        m.insert(0xcbc5, Instruction::new(InstType::Set, "set 0,l", 2, 8).dst(Operand::L).src(Operand::Zero));
        m.insert(0xcbc6, Instruction::new(InstType::Set, "set 0,(hl)", 2, 15).dst(Operand::IndHL).src(Operand::Zero));
        m.insert(0xcbc7, Instruction::new(InstType::Set, "set 0,a", 2, 8).dst(Operand::A).src(Operand::Zero));
        m.insert(0xcbc8, Instruction::new(InstType::Set, "set 1,b", 2, 8).dst(Operand::B).src(Operand::One));
        m.insert(0xcbc9, Instruction::new(InstType::Set, "set 1,c", 2, 8).dst(Operand::C).src(Operand::One));
        m.insert(0xcbca, Instruction::new(InstType::Set, "set 1,d", 2, 8).dst(Operand::D).src(Operand::One));
        m.insert(0xcbcb, Instruction::new(InstType::Set, "set 1,e", 2, 8).dst(Operand::E).src(Operand::One));
        m.insert(0xcbcc, Instruction::new(InstType::Set, "set 1,h", 2, 8).dst(Operand::H).src(Operand::One));
        m.insert(0xcbcd, Instruction::new(InstType::Set, "set 1,l", 2, 8).dst(Operand::L).src(Operand::One));
        m.insert(0xcbce, Instruction::new(InstType::Set, "set 1,(hl)", 2, 15).dst(Operand::IndHL).src(Operand::One));
        m.insert(0xcbcf, Instruction::new(InstType::Set, "set 1,a", 2, 8).dst(Operand::A).src(Operand::One));
        m.insert(0xcbd0, Instruction::new(InstType::Set, "set 2,b", 2, 8).dst(Operand::B).src(Operand::Two));
        m.insert(0xcbd1, Instruction::new(InstType::Set, "set 2,c", 2, 8).dst(Operand::C).src(Operand::Two));
        m.insert(0xcbd2, Instruction::new(InstType::Set, "set 2,d", 2, 8).dst(Operand::D).src(Operand::Two));
        m.insert(0xcbd3, Instruction::new(InstType::Set, "set 2,e", 2, 8).dst(Operand::E).src(Operand::Two));
        m.insert(0xcbd4, Instruction::new(InstType::Set, "set 2,h", 2, 8).dst(Operand::H).src(Operand::Two));
        m.insert(0xcbd5, Instruction::new(InstType::Set, "set 2,l", 2, 8).dst(Operand::L).src(Operand::Two));
        m.insert(0xcbd6, Instruction::new(InstType::Set, "set 2,(hl)", 2, 15).dst(Operand::IndHL).src(Operand::Two));
        m.insert(0xcbd7, Instruction::new(InstType::Set, "set 2,a", 2, 8).dst(Operand::A).src(Operand::Two));
        m.insert(0xcbd8, Instruction::new(InstType::Set, "set 3,b", 2, 8).dst(Operand::B).src(Operand::Three));
        m.insert(0xcbd9, Instruction::new(InstType::Set, "set 3,c", 2, 8).dst(Operand::C).src(Operand::Three));
        m.insert(0xcbda, Instruction::new(InstType::Set, "set 3,d", 2, 8).dst(Operand::D).src(Operand::Three));
        m.insert(0xcbdb, Instruction::new(InstType::Set, "set 3,e", 2, 8).dst(Operand::E).src(Operand::Three));
        m.insert(0xcbdc, Instruction::new(InstType::Set, "set 3,h", 2, 8).dst(Operand::H).src(Operand::Three));
        m.insert(0xcbdd, Instruction::new(InstType::Set, "set 3,l", 2, 8).dst(Operand::L).src(Operand::Three));
        m.insert(0xcbde, Instruction::new(InstType::Set, "set 3,(hl)", 2, 15).dst(Operand::IndHL).src(Operand::Three));
        m.insert(0xcbdf, Instruction::new(InstType::Set, "set 3,a", 2, 8).dst(Operand::A).src(Operand::Three));
        m.insert(0xcbe0, Instruction::new(InstType::Set, "set 4,b", 2, 8).dst(Operand::B).src(Operand::Four));
        m.insert(0xcbe1, Instruction::new(InstType::Set, "set 4,c", 2, 8).dst(Operand::C).src(Operand::Four));
        m.insert(0xcbe2, Instruction::new(InstType::Set, "set 4,d", 2, 8).dst(Operand::D).src(Operand::Four));
        m.insert(0xcbe3, Instruction::new(InstType::Set, "set 4,e", 2, 8).dst(Operand::E).src(Operand::Four));
        m.insert(0xcbe4, Instruction::new(InstType::Set, "set 4,h", 2, 8).dst(Operand::H).src(Operand::Four));
        m.insert(0xcbe5, Instruction::new(InstType::Set, "set 4,l", 2, 8).dst(Operand::L).src(Operand::Four));
        m.insert(0xcbe6, Instruction::new(InstType::Set, "set 4,(hl)", 2, 15).dst(Operand::IndHL).src(Operand::Four));
        m.insert(0xcbe7, Instruction::new(InstType::Set, "set 4,a", 2, 8).dst(Operand::A).src(Operand::Four));
        m.insert(0xcbe8, Instruction::new(InstType::Set, "set 5,b", 2, 8).dst(Operand::B).src(Operand::Five));
        m.insert(0xcbe9, Instruction::new(InstType::Set, "set 5,c", 2, 8).dst(Operand::C).src(Operand::Five));
        m.insert(0xcbea, Instruction::new(InstType::Set, "set 5,d", 2, 8).dst(Operand::D).src(Operand::Five));
        m.insert(0xcbeb, Instruction::new(InstType::Set, "set 5,e", 2, 8).dst(Operand::E).src(Operand::Five));
        m.insert(0xcbec, Instruction::new(InstType::Set, "set 5,h", 2, 8).dst(Operand::H).src(Operand::Five));
        m.insert(0xcbed, Instruction::new(InstType::Set, "set 5,l", 2, 8).dst(Operand::L).src(Operand::Five));
        m.insert(0xcbee, Instruction::new(InstType::Set, "set 5,(hl)", 2, 15).dst(Operand::IndHL).src(Operand::Five));
        m.insert(0xcbef, Instruction::new(InstType::Set, "set 5,a", 2, 8).dst(Operand::A).src(Operand::Five));
        m.insert(0xcbf0, Instruction::new(InstType::Set, "set 6,b", 2, 8).dst(Operand::B).src(Operand::Six));
        m.insert(0xcbf1, Instruction::new(InstType::Set, "set 6,c", 2, 8).dst(Operand::C).src(Operand::Six));
        m.insert(0xcbf2, Instruction::new(InstType::Set, "set 6,d", 2, 8).dst(Operand::D).src(Operand::Six));
        m.insert(0xcbf3, Instruction::new(InstType::Set, "set 6,e", 2, 8).dst(Operand::E).src(Operand::Six));
        m.insert(0xcbf4, Instruction::new(InstType::Set, "set 6,h", 2, 8).dst(Operand::H).src(Operand::Six));
        m.insert(0xcbf5, Instruction::new(InstType::Set, "set 6,l", 2, 8).dst(Operand::L).src(Operand::Six));
        m.insert(0xcbf6, Instruction::new(InstType::Set, "set 6,(hl)", 2, 15).dst(Operand::IndHL).src(Operand::Six));
        m.insert(0xcbf7, Instruction::new(InstType::Set, "set 6,a", 2, 8).dst(Operand::A).src(Operand::Six));
        m.insert(0xcbf8, Instruction::new(InstType::Set, "set 7,b", 2, 8).dst(Operand::B).src(Operand::Seven));
        m.insert(0xcbf9, Instruction::new(InstType::Set, "set 7,c", 2, 8).dst(Operand::C).src(Operand::Seven));
        m.insert(0xcbfa, Instruction::new(InstType::Set, "set 7,d", 2, 8).dst(Operand::D).src(Operand::Seven));
        m.insert(0xcbfb, Instruction::new(InstType::Set, "set 7,e", 2, 8).dst(Operand::E).src(Operand::Seven));
        m.insert(0xcbfc, Instruction::new(InstType::Set, "set 7,h", 2, 8).dst(Operand::H).src(Operand::Seven));
        m.insert(0xcbfd, Instruction::new(InstType::Set, "set 7,l", 2, 8).dst(Operand::L).src(Operand::Seven));
        m.insert(0xcbfe, Instruction::new(InstType::Set, "set 7,(hl)", 2, 15).dst(Operand::IndHL).src(Operand::Seven));
        m.insert(0xcbff, Instruction::new(InstType::Set, "set 7,a", 2, 8).dst(Operand::A).src(Operand::Seven));

        m.insert(0xed40, Instruction::new(InstType::In, "in b,(c)", 2, 12).dst(Operand::B).src(Operand::PortC));
        m.insert(0xed41, Instruction::new(InstType::Out, "out (c),b", 2, 12).dst(Operand::PortC).src(Operand::B));
        m.insert(0xed42, Instruction::new(InstType::Sbc, "sbc hl,bc", 2, 15).dst(Operand::HL).src(Operand::BC));
        m.insert(0xed43, Instruction::new(InstType::Ld, "ld (**),bc", 4, 20).dst(Operand::IndNN).src(Operand::BC));
        m.insert(0xed44, Instruction::new(InstType::Neg, "neg", 2, 8).dst(Operand::A).src(Operand::A));
        m.insert(0xed45, Instruction::new(InstType::Retn, "retn", 2, 14).dst(Operand::PC));
        m.insert(0xed46, Instruction::new(InstType::Im, "im 0", 2, 8).dst(Operand::IntMode).src(Operand::Zero));
        m.insert(0xed47, Instruction::new(InstType::Ld, "ld i,a", 2, 9).dst(Operand::I).src(Operand::A));
        m.insert(0xed48, Instruction::new(InstType::In, "in c,(c)", 2, 12).dst(Operand::C).src(Operand::PortC));
        m.insert(0xed49, Instruction::new(InstType::Out, "out (c),c", 2, 12).dst(Operand::PortC).src(Operand::C));
        m.insert(0xed4a, Instruction::new(InstType::Adc, "adc hl,bc", 2, 15).dst(Operand::HL).src(Operand::BC));
        m.insert(0xed4b, Instruction::new(InstType::Ld, "ld bc,(**)", 4, 20).dst(Operand::BC).src(Operand::IndNN));
        m.insert(0xed4c, Instruction::new(InstType::Neg, "neg", 2, 8).dst(Operand::A).src(Operand::A));
        m.insert(0xed4d, Instruction::new(InstType::Reti, "reti", 2, 14).dst(Operand::PC));
        m.insert(0xed4f, Instruction::new(InstType::Ld, "ld r,a", 2, 9).dst(Operand::R).src(Operand::A));
        m.insert(0xed50, Instruction::new(InstType::In, "in d,(c)", 2, 12).dst(Operand::D).src(Operand::PortC));
        m.insert(0xed51, Instruction::new(InstType::Out, "out (c),d", 2, 12).dst(Operand::PortC).src(Operand::D));
        m.insert(0xed52, Instruction::new(InstType::Sbc, "sbc hl,de", 2, 15).dst(Operand::HL).src(Operand::DE));
        m.insert(0xed53, Instruction::new(InstType::Ld, "ld (**),de", 4, 20).dst(Operand::IndNN).src(Operand::DE));
        m.insert(0xed54, Instruction::new(InstType::Neg, "neg", 2, 8).dst(Operand::A).src(Operand::A));
        m.insert(0xed55, Instruction::new(InstType::Retn, "retn", 2, 14).dst(Operand::PC));
        m.insert(0xed56, Instruction::new(InstType::Im, "im 1", 2, 8).dst(Operand::IntMode).src(Operand::One));
        m.insert(0xed57, Instruction::new(InstType::Ld, "ld a,i", 2, 9).dst(Operand::A).src(Operand::I));
        m.insert(0xed58, Instruction::new(InstType::In, "in e,(c)", 2, 12).dst(Operand::E).src(Operand::PortC));
        m.insert(0xed59, Instruction::new(InstType::Out, "out (c),e", 2, 12).dst(Operand::PortC).src(Operand::E));
        m.insert(0xed5a, Instruction::new(InstType::Adc, "adc hl,de", 2, 15).dst(Operand::HL).src(Operand::DE));
        m.insert(0xed5b, Instruction::new(InstType::Ld, "ld de,(**)", 4, 20).dst(Operand::DE).src(Operand::IndNN));
        m.insert(0xed5c, Instruction::new(InstType::Neg, "neg", 2, 8).dst(Operand::A).src(Operand::A));
        m.insert(0xed5d, Instruction::new(InstType::Retn, "retn", 2, 14).dst(Operand::PC));
        m.insert(0xed5e, Instruction::new(InstType::Im, "im 2", 2, 8).dst(Operand::IntMode).src(Operand::Two));
        m.insert(0xed5f, Instruction::new(InstType::Ld, "ld a,r", 2, 9).dst(Operand::A).src(Operand::R));
        m.insert(0xed60, Instruction::new(InstType::In, "in h,(c)", 2, 12).dst(Operand::H).src(Operand::PortC));
        m.insert(0xed61, Instruction::new(InstType::Out, "out (c),h", 2, 12).dst(Operand::PortC).src(Operand::H));
        m.insert(0xed62, Instruction::new(InstType::Sbc, "sbc hl,hl", 2, 15).dst(Operand::HL).src(Operand::HL));
        m.insert(0xed64, Instruction::new(InstType::Neg, "neg", 2, 8).dst(Operand::A).src(Operand::A));
        m.insert(0xed65, Instruction::new(InstType::Retn, "retn", 2, 14).dst(Operand::PC));
        m.insert(0xed66, Instruction::new(InstType::Im, "im 0", 2, 8).dst(Operand::IntMode).src(Operand::Zero));
        m.insert(0xed68, Instruction::new(InstType::In, "in l,(c)", 2, 12).dst(Operand::L).src(Operand::PortC));
        m.insert(0xed69, Instruction::new(InstType::Out, "out (c),l", 2, 12).dst(Operand::PortC).src(Operand::L));
        m.insert(0xed6a, Instruction::new(InstType::Adc, "adc hl,hl", 2, 15).dst(Operand::HL).src(Operand::HL));
        m.insert(0xed6c, Instruction::new(InstType::Neg, "neg", 2, 8).dst(Operand::A).src(Operand::A));
        m.insert(0xed6d, Instruction::new(InstType::Retn, "retn", 2, 14).dst(Operand::PC));
        m.insert(0xed6f, Instruction::new(InstType::Rld, "rld", 2, 18));
        m.insert(0xed70, Instruction::new(InstType::In, "in (c)", 2, 12).dst(Operand::Zero).src(Operand::PortC));
        m.insert(0xed71, Instruction::new(InstType::Out, "out (c),0", 2, 12).dst(Operand::PortC).src(Operand::Zero));
        m.insert(0xed72, Instruction::new(InstType::Sbc, "sbc hl,sp", 2, 15).dst(Operand::HL).src(Operand::SP));
        m.insert(0xed73, Instruction::new(InstType::Ld, "ld (**),sp", 4, 20).dst(Operand::IndNN).src(Operand::SP));
        m.insert(0xed74, Instruction::new(InstType::Neg, "neg", 2, 8).dst(Operand::A).src(Operand::A));
        m.insert(0xed75, Instruction::new(InstType::Retn, "retn", 2, 14).dst(Operand::PC));
        m.insert(0xed76, Instruction::new(InstType::Im, "im 1", 2, 8).dst(Operand::IntMode).src(Operand::One));
        m.insert(0xed78, Instruction::new(InstType::In, "in a,(c)", 2, 12).dst(Operand::A).src(Operand::PortC));
        m.insert(0xed79, Instruction::new(InstType::Out, "out (c),a", 2, 13).dst(Operand::PortC).src(Operand::A));
        m.insert(0xed7a, Instruction::new(InstType::Adc, "adc hl,sp", 2, 15).dst(Operand::HL).src(Operand::SP));
        m.insert(0xed7b, Instruction::new(InstType::Ld, "ld sp,(**)", 4, 20).dst(Operand::SP).src(Operand::IndNN));
        m.insert(0xed7c, Instruction::new(InstType::Neg, "neg", 2, 8).dst(Operand::A).src(Operand::A));
        m.insert(0xed7d, Instruction::new(InstType::Retn, "retn", 2, 14).dst(Operand::PC));
        m.insert(0xed7e, Instruction::new(InstType::Im, "im 2", 2, 8).dst(Operand::IntMode).src(Operand::Two));
        m.insert(0xeda0, Instruction::new(InstType::Ldi, "ldi", 2, 16).dst(Operand::IndDE).src(Operand::IndHL));
        m.insert(0xeda1, Instruction::new(InstType::Cpi, "cpi", 2, 16).not_taken(16));
        m.insert(0xeda8, Instruction::new(InstType::Ldd, "ldd", 2, 16).dst(Operand::IndDE).src(Operand::IndHL));
        m.insert(0xeda9, Instruction::new(InstType::Cpd, "cpd", 2, 16).not_taken(16));
        m.insert(0xedb0, Instruction::new(InstType::Ldir, "ldir", 2, 21).not_taken(16).dst(Operand::IndDE).src(Operand::IndHL));
        m.insert(0xedb1, Instruction::new(InstType::Cpir, "cpir", 2, 21).not_taken(16));
        m.insert(0xedb8, Instruction::new(InstType::Lddr, "lddr", 2, 21).not_taken(16).dst(Operand::IndDE).src(Operand::IndHL));
        m.insert(0xedb9, Instruction::new(InstType::Cpdr, "cpdr", 2, 21).not_taken(16));

        m.insert(0xdd09, Instruction::new(InstType::Add, "add ix,bc", 2, 15).dst(Operand::IX).src(Operand::BC));
        m.insert(0xdd19, Instruction::new(InstType::Add, "add ix,de", 2, 15).dst(Operand::IX).src(Operand::DE));
        m.insert(0xdd21, Instruction::new(InstType::Ld, "ld ix,**", 4, 14).dst(Operand::IX).src(Operand::NN));
        m.insert(0xdd22, Instruction::new(InstType::Ld, "ld (**),ix", 4, 20).dst(Operand::IndNN).src(Operand::IX));
        m.insert(0xdd23, Instruction::new(InstType::Inc, "inc ix", 2, 10).dst(Operand::IX).src(Operand::One));
        m.insert(0xdd26, Instruction::new(InstType::Ld, "ld ixh,*", 3, 11).dst(Operand::IXH).src(Operand::N));
        m.insert(0xdd29, Instruction::new(InstType::Add, "add ix,ix", 2, 15).dst(Operand::IX).src(Operand::IX));
        m.insert(0xdd2a, Instruction::new(InstType::Ld, "ld ix,(**)", 4, 20).dst(Operand::IX).src(Operand::IndNN));
        m.insert(0xdd2b, Instruction::new(InstType::Dec, "dec ix", 2, 10).dst(Operand::IX).src(Operand::One));
        m.insert(0xdd34, Instruction::new(InstType::Inc, "inc (ix+*)", 3, 23).dst(Operand::IndIXd).src(Operand::One));
        m.insert(0xdd35, Instruction::new(InstType::Dec, "dec (ix+*)", 3, 23).dst(Operand::IndIXd).src(Operand::One));
        m.insert(0xdd36, Instruction::new(InstType::Ld, "ld (ix+*),*", 4, 19).dst(Operand::IndIXd).src(Operand::N));
        m.insert(0xdd39, Instruction::new(InstType::Add, "add ix,sp", 2, 15).dst(Operand::IX).src(Operand::SP));
        m.insert(0xdd46, Instruction::new(InstType::Ld, "ld b,(ix+*)", 3, 19).dst(Operand::B).src(Operand::IndIXd));
        m.insert(0xdd4e, Instruction::new(InstType::Ld, "ld c,(ix+*)", 3, 19).dst(Operand::C).src(Operand::IndIXd));
        m.insert(0xdd56, Instruction::new(InstType::Ld, "ld d,(ix+*)", 3, 19).dst(Operand::D).src(Operand::IndIXd));
        m.insert(0xdd5e, Instruction::new(InstType::Ld, "ld e,(ix+*)", 3, 19).dst(Operand::E).src(Operand::IndIXd));
        m.insert(0xdd66, Instruction::new(InstType::Ld, "ld h,(ix+*)", 3, 19).dst(Operand::H).src(Operand::IndIXd));
        m.insert(0xdd6e, Instruction::new(InstType::Ld, "ld l,(ix+*)", 3, 19).dst(Operand::L).src(Operand::IndIXd));
        m.insert(0xdd6f, Instruction::new(InstType::Ld, "ld ixl,a", 2, 8).dst(Operand::IXL).src(Operand::A));
        m.insert(0xdd70, Instruction::new(InstType::Ld, "ld (ix+*),b", 3, 19).dst(Operand::IndIXd).src(Operand::B));
        m.insert(0xdd71, Instruction::new(InstType::Ld, "ld (ix+*),c", 3, 19).dst(Operand::IndIXd).src(Operand::C));
        m.insert(0xdd72, Instruction::new(InstType::Ld, "ld (ix+*),d", 3, 19).dst(Operand::IndIXd).src(Operand::D));
        m.insert(0xdd73, Instruction::new(InstType::Ld, "ld (ix+*),e", 3, 19).dst(Operand::IndIXd).src(Operand::E));
        m.insert(0xdd74, Instruction::new(InstType::Ld, "ld (ix+*),h", 3, 19).dst(Operand::IndIXd).src(Operand::H));
        m.insert(0xdd75, Instruction::new(InstType::Ld, "ld (ix+*),l", 3, 19).dst(Operand::IndIXd).src(Operand::L));
        m.insert(0xdd77, Instruction::new(InstType::Ld, "ld (ix+*),a", 3, 19).dst(Operand::IndIXd).src(Operand::A));
        m.insert(0xdd7e, Instruction::new(InstType::Ld, "ld a,(ix+*)", 3, 19).dst(Operand::A).src(Operand::IndIXd));
        m.insert(0xdd84, Instruction::new(InstType::Add, "add a,ixh", 2, 8).dst(Operand::A).src(Operand::IXH));
        m.insert(0xdd85, Instruction::new(InstType::Add, "add a,ixl", 2, 8).dst(Operand::A).src(Operand::IXL));
        m.insert(0xdd86, Instruction::new(InstType::Add, "add a,(ix+*)", 3, 19).dst(Operand::A).src(Operand::IndIXd));
        m.insert(0xdd8c, Instruction::new(InstType::Adc, "adc a,ixh", 2, 8).dst(Operand::A).src(Operand::IXH));
        m.insert(0xdd8d, Instruction::new(InstType::Adc, "adc a,ixl", 2, 8).dst(Operand::A).src(Operand::IXL));
        m.insert(0xdd8e, Instruction::new(InstType::Adc, "adc a,(ix+*)", 3, 19).dst(Operand::A).src(Operand::IndIXd));
        m.insert(0xdd94, Instruction::new(InstType::Sub, "sub a,ixh", 2, 8).dst(Operand::A).src(Operand::IXH));
        m.insert(0xdd95, Instruction::new(InstType::Sub, "sub a,ixl", 2, 8).dst(Operand::A).src(Operand::IXL));
        m.insert(0xdd96, Instruction::new(InstType::Sub, "sub (ix+*)", 3, 19).dst(Operand::A).src(Operand::IndIXd));
        m.insert(0xdd9c, Instruction::new(InstType::Sbc, "sbc a,ixh", 2, 8).dst(Operand::A).src(Operand::IXH));
        m.insert(0xdd9d, Instruction::new(InstType::Sbc, "sbc a,ixl", 2, 8).dst(Operand::A).src(Operand::IXL));
        m.insert(0xdd9e, Instruction::new(InstType::Sbc, "sbc a,(ix+*)", 3, 19).dst(Operand::A).src(Operand::IndIXd));
        m.insert(0xdda4, Instruction::new(InstType::And, "and ixh", 2, 8).dst(Operand::A).src(Operand::IXH));
        m.insert(0xdda5, Instruction::new(InstType::And, "and ixl", 2, 8).dst(Operand::A).src(Operand::IXL));
        m.insert(0xdda6, Instruction::new(InstType::And, "and (ix+*)", 3, 19).dst(Operand::A).src(Operand::IndIXd));
        m.insert(0xddac, Instruction::new(InstType::Xor, "xor ixh", 2, 8).dst(Operand::A).src(Operand::IXH));
        m.insert(0xddad, Instruction::new(InstType::Xor, "xor ixl", 2, 8).dst(Operand::A).src(Operand::IXL));
        m.insert(0xddae, Instruction::new(InstType::Xor, "xor (ix+*)", 3, 19).dst(Operand::A).src(Operand::IndIXd));
        m.insert(0xddb4, Instruction::new(InstType::Or, "or ixh", 2, 8).dst(Operand::A).src(Operand::IXH));
        m.insert(0xddb5, Instruction::new(InstType::Or, "or ixl", 2, 8).dst(Operand::A).src(Operand::IXL));
        m.insert(0xddb6, Instruction::new(InstType::Or, "or (ix+*)", 3, 19).dst(Operand::A).src(Operand::IndIXd));
        m.insert(0xddbc, Instruction::new(InstType::Cp, "cp ixh", 2, 8).dst(Operand::A).src(Operand::IXH));
        m.insert(0xddbd, Instruction::new(InstType::Cp, "cp ixl", 2, 8).dst(Operand::A).src(Operand::IXL));
        m.insert(0xddbe, Instruction::new(InstType::Cp, "cp (ix+*)", 3, 19).dst(Operand::A).src(Operand::IndIXd));
        m.insert(0xdde1, Instruction::new(InstType::Pop, "pop ix", 2, 14).dst(Operand::IX));
        m.insert(0xdde3, Instruction::new(InstType::Ex, "ex (sp),ix", 2, 23).dst(Operand::IndSP).src(Operand::IX));
        m.insert(0xdde5, Instruction::new(InstType::Push, "push ix", 2, 15).src(Operand::IX));
        m.insert(0xdde9, Instruction::new(InstType::Jp, "jp (ix)", 2, 8).cond(Condition::Always).dst(Operand::PC).src(Operand::IX));
        m.insert(0xddf9, Instruction::new(InstType::Ld, "ld sp,ix", 2, 10).dst(Operand::SP).src(Operand::IX));

        m.insert(0xddcb46, Instruction::new(InstType::Bit, "bit 0,(ix+*)", 4, 20).dst(Operand::IndIXd).src(Operand::Zero));
        m.insert(0xddcb4e, Instruction::new(InstType::Bit, "bit 1,(ix+*)", 4, 20).dst(Operand::IndIXd).src(Operand::One));
        m.insert(0xddcb56, Instruction::new(InstType::Bit, "bit 2,(ix+*)", 4, 20).dst(Operand::IndIXd).src(Operand::Two));
        m.insert(0xddcb5e, Instruction::new(InstType::Bit, "bit 3,(ix+*)", 4, 20).dst(Operand::IndIXd).src(Operand::Three));
        m.insert(0xddcb66, Instruction::new(InstType::Bit, "bit 4,(ix+*)", 4, 20).dst(Operand::IndIXd).src(Operand::Four));
        m.insert(0xddcb6e, Instruction::new(InstType::Bit, "bit 5,(ix+*)", 4, 20).dst(Operand::IndIXd).src(Operand::Five));
        m.insert(0xddcb76, Instruction::new(InstType::Bit, "bit 6,(ix+*)", 4, 20).dst(Operand::IndIXd).src(Operand::Six));
        m.insert(0xddcb7e, Instruction::new(InstType::Bit, "bit 7,(ix+*)", 4, 20).dst(Operand::IndIXd).src(Operand::Seven));
        m.insert(0xddcb86, Instruction::new(InstType::Res, "res 0,(ix+*)", 4, 23).dst(Operand::IndIXd).src(Operand::Zero));
        m.insert(0xddcb8e, Instruction::new(InstType::Res, "res 1,(ix+*)", 4, 23).dst(Operand::IndIXd).src(Operand::One));
        m.insert(0xddcb96, Instruction::new(InstType::Res, "res 2,(ix+*)", 4, 23).dst(Operand::IndIXd).src(Operand::Two));
        m.insert(0xddcb9e, Instruction::new(InstType::Res, "res 3,(ix+*)", 4, 23).dst(Operand::IndIXd).src(Operand::Three));
        m.insert(0xddcba6, Instruction::new(InstType::Res, "res 4,(ix+*)", 4, 23).dst(Operand::IndIXd).src(Operand::Four));
        m.insert(0xddcbae, Instruction::new(InstType::Res, "res 5,(ix+*)", 4, 23).dst(Operand::IndIXd).src(Operand::Five));
        m.insert(0xddcbb6, Instruction::new(InstType::Res, "res 6,(ix+*)", 4, 23).dst(Operand::IndIXd).src(Operand::Six));
        m.insert(0xddcbbe, Instruction::new(InstType::Res, "res 7,(ix+*)", 4, 23).dst(Operand::IndIXd).src(Operand::Seven));
        m.insert(0xddcbc6, Instruction::new(InstType::Set, "set 0,(ix+*)", 4, 23).dst(Operand::IndIXd).src(Operand::Zero));
        m.insert(0xddcbce, Instruction::new(InstType::Set, "set 1,(ix+*)", 4, 23).dst(Operand::IndIXd).src(Operand::One));
        m.insert(0xddcbd6, Instruction::new(InstType::Set, "set 2,(ix+*)", 4, 23).dst(Operand::IndIXd).src(Operand::Two));
        m.insert(0xddcbde, Instruction::new(InstType::Set, "set 3,(ix+*)", 4, 23).dst(Operand::IndIXd).src(Operand::Three));
        m.insert(0xddcbe6, Instruction::new(InstType::Set, "set 4,(ix+*)", 4, 23).dst(Operand::IndIXd).src(Operand::Four));
        m.insert(0xddcbee, Instruction::new(InstType::Set, "set 5,(ix+*)", 4, 23).dst(Operand::IndIXd).src(Operand::Five));
        m.insert(0xddcbf6, Instruction::new(InstType::Set, "set 6,(ix+*)", 4, 23).dst(Operand::IndIXd).src(Operand::Six));
        m.insert(0xddcbfe, Instruction::new(InstType::Set, "set 7,(ix+*)", 4, 23).dst(Operand::IndIXd).src(Operand::Seven));

        m.insert(0xfd09, Instruction::new(InstType::Add, "add iy,bc", 2, 15).dst(Operand::IY).src(Operand::BC));
        m.insert(0xfd19, Instruction::new(InstType::Add, "add iy,de", 2, 15).dst(Operand::IY).src(Operand::DE));
        m.insert(0xfd21, Instruction::new(InstType::Ld, "ld iy,**", 4, 14).dst(Operand::IY).src(Operand::NN));
        m.insert(0xfd22, Instruction::new(InstType::Ld, "ld (**),iy", 4, 20).dst(Operand::IndNN).src(Operand::IY));
        m.insert(0xfd23, Instruction::new(InstType::Inc, "inc iy", 2, 10).dst(Operand::IY).src(Operand::One));
        m.insert(0xfd26, Instruction::new(InstType::Ld, "ld iyh,*", 3, 11).dst(Operand::IYH).src(Operand::N));
        m.insert(0xfd29, Instruction::new(InstType::Add, "add iy,iy", 2, 15).dst(Operand::IY).src(Operand::IY));
        m.insert(0xfd2a, Instruction::new(InstType::Ld, "ld iy,(**)", 4, 20).dst(Operand::IY).src(Operand::IndNN));
        m.insert(0xfd2b, Instruction::new(InstType::Dec, "dec iy", 2, 10).dst(Operand::IY).src(Operand::One));
        m.insert(0xfd34, Instruction::new(InstType::Inc, "inc (iy+*)", 3, 23).dst(Operand::IndIYd).src(Operand::One));
        m.insert(0xfd35, Instruction::new(InstType::Dec, "dec (iy+*)", 3, 23).dst(Operand::IndIYd).src(Operand::One));
        m.insert(0xfd36, Instruction::new(InstType::Ld, "ld (iy+*),*", 4, 19).dst(Operand::IndIYd).src(Operand::N));
        m.insert(0xfd39, Instruction::new(InstType::Add, "add iy,sp", 2, 15).dst(Operand::IY).src(Operand::SP));
        m.insert(0xfd46, Instruction::new(InstType::Ld, "ld b,(iy+*)", 3, 19).dst(Operand::B).src(Operand::IndIYd));
        m.insert(0xfd4e, Instruction::new(InstType::Ld, "ld c,(iy+*)", 3, 19).dst(Operand::C).src(Operand::IndIYd));
        m.insert(0xfd56, Instruction::new(InstType::Ld, "ld d,(iy+*)", 3, 19).dst(Operand::D).src(Operand::IndIYd));
        m.insert(0xfd5e, Instruction::new(InstType::Ld, "ld e,(iy+*)", 3, 19).dst(Operand::E).src(Operand::IndIYd));
        m.insert(0xfd66, Instruction::new(InstType::Ld, "ld h,(iy+*)", 3, 19).dst(Operand::H).src(Operand::IndIYd));
        m.insert(0xfd6e, Instruction::new(InstType::Ld, "ld j,(iy+*)", 3, 19).dst(Operand::L).src(Operand::IndIYd));
        m.insert(0xfd6f, Instruction::new(InstType::Ld, "ld iyl,a", 2, 8).dst(Operand::IYL).src(Operand::A));
        m.insert(0xfd70, Instruction::new(InstType::Ld, "ld (iy+*),b", 3, 19).dst(Operand::IndIYd).src(Operand::B));
        m.insert(0xfd71, Instruction::new(InstType::Ld, "ld (iy+*),c", 3, 19).dst(Operand::IndIYd).src(Operand::C));
        m.insert(0xfd72, Instruction::new(InstType::Ld, "ld (iy+*),d", 3, 19).dst(Operand::IndIYd).src(Operand::D));
        m.insert(0xfd73, Instruction::new(InstType::Ld, "ld (iy+*),e", 3, 19).dst(Operand::IndIYd).src(Operand::E));
        m.insert(0xfd74, Instruction::new(InstType::Ld, "ld (iy+*),h", 3, 19).dst(Operand::IndIYd).src(Operand::H));
        m.insert(0xfd75, Instruction::new(InstType::Ld, "ld (iy+*),l", 3, 19).dst(Operand::IndIYd).src(Operand::L));
        m.insert(0xfd77, Instruction::new(InstType::Ld, "ld (iy+*),a", 3, 19).dst(Operand::IndIYd).src(Operand::A));
        m.insert(0xfd7e, Instruction::new(InstType::Ld, "ld a,(iy+*)", 3, 19).dst(Operand::A).src(Operand::IndIYd));
        m.insert(0xfd84, Instruction::new(InstType::Add, "add a,iyh", 2, 8).dst(Operand::A).src(Operand::IYH));
        m.insert(0xfd85, Instruction::new(InstType::Add, "add a,iyl", 2, 8).dst(Operand::A).src(Operand::IYL));
        m.insert(0xfd86, Instruction::new(InstType::Add, "add a,(iy+*)", 3, 19).dst(Operand::A).src(Operand::IndIYd));
        m.insert(0xfd8c, Instruction::new(InstType::Adc, "adc a,iyh", 2, 8).dst(Operand::A).src(Operand::IYH));
        m.insert(0xfd8d, Instruction::new(InstType::Adc, "adc a,iyl", 2, 8).dst(Operand::A).src(Operand::IYL));
        m.insert(0xfd8e, Instruction::new(InstType::Adc, "adc a,(iy+*)", 3, 19).dst(Operand::A).src(Operand::IndIYd));
        m.insert(0xfd94, Instruction::new(InstType::Sub, "sub a,iyh", 2, 8).dst(Operand::A).src(Operand::IYH));
        m.insert(0xfd95, Instruction::new(InstType::Sub, "sub a,iyl", 2, 8).dst(Operand::A).src(Operand::IYL));
        m.insert(0xfd96, Instruction::new(InstType::Sub, "sub (iy+*)", 3, 19).dst(Operand::A).src(Operand::IndIYd));
        m.insert(0xfd9c, Instruction::new(InstType::Sbc, "sbc a,iyh", 2, 8).dst(Operand::A).src(Operand::IYH));
        m.insert(0xfd9d, Instruction::new(InstType::Sbc, "sbc a,iyl", 2, 8).dst(Operand::A).src(Operand::IYL));
        m.insert(0xfd9e, Instruction::new(InstType::Sbc, "sbc a,(iy+*)", 3, 19).dst(Operand::A).src(Operand::IndIYd));
        m.insert(0xfda4, Instruction::new(InstType::And, "and iyh", 2, 8).dst(Operand::A).src(Operand::IYH));
        m.insert(0xfda5, Instruction::new(InstType::And, "and iyl", 2, 8).dst(Operand::A).src(Operand::IYL));
        m.insert(0xfda6, Instruction::new(InstType::And, "and (iy+*)", 3, 19).dst(Operand::A).src(Operand::IndIYd));
        m.insert(0xfdac, Instruction::new(InstType::Xor, "xor iyh", 2, 8).dst(Operand::A).src(Operand::IYH));
        m.insert(0xfdad, Instruction::new(InstType::Xor, "xor iyl", 2, 8).dst(Operand::A).src(Operand::IYL));
        m.insert(0xfdae, Instruction::new(InstType::Xor, "xor (iy+*)", 3, 19).dst(Operand::A).src(Operand::IndIYd));
        m.insert(0xfdb4, Instruction::new(InstType::Or, "or iyh", 2, 8).dst(Operand::A).src(Operand::IYH));
        m.insert(0xfdb5, Instruction::new(InstType::Or, "or iyl", 2, 8).dst(Operand::A).src(Operand::IYL));
        m.insert(0xfdb6, Instruction::new(InstType::Or, "or (iy+*)", 3, 19).dst(Operand::A).src(Operand::IndIYd));
        m.insert(0xfdbc, Instruction::new(InstType::Cp, "cp iyh", 2, 8).dst(Operand::A).src(Operand::IYH));
        m.insert(0xfdbd, Instruction::new(InstType::Cp, "cp iyl", 2, 8).dst(Operand::A).src(Operand::IYL));
        m.insert(0xfdbe, Instruction::new(InstType::Cp, "cp (iy+*)", 3, 19).dst(Operand::A).src(Operand::IndIYd));
        m.insert(0xfde1, Instruction::new(InstType::Pop, "pop iy", 2, 14).dst(Operand::IY));
        m.insert(0xfde3, Instruction::new(InstType::Ex, "ex (sp),iy", 2, 23).dst(Operand::IndSP).src(Operand::IY));
        m.insert(0xfde5, Instruction::new(InstType::Push, "push iy", 2, 15).src(Operand::IY));
        m.insert(0xfde9, Instruction::new(InstType::Jp, "jp (iy)", 2, 8).cond(Condition::Always).dst(Operand::PC).src(Operand::IY));
        m.insert(0xfdf9, Instruction::new(InstType::Ld, "ld sp,iy", 2, 10).dst(Operand::SP).src(Operand::IY));

        m.insert(0xfdcb46, Instruction::new(InstType::Bit, "bit 0,(iy+*)", 4, 20).dst(Operand::IndIYd).src(Operand::Zero));
        m.insert(0xfdcb4e, Instruction::new(InstType::Bit, "bit 1,(iy+*)", 4, 20).dst(Operand::IndIYd).src(Operand::One));
        m.insert(0xfdcb56, Instruction::new(InstType::Bit, "bit 2,(iy+*)", 4, 20).dst(Operand::IndIYd).src(Operand::Two));
        m.insert(0xfdcb5e, Instruction::new(InstType::Bit, "bit 3,(iy+*)", 4, 20).dst(Operand::IndIYd).src(Operand::Three));
        m.insert(0xfdcb66, Instruction::new(InstType::Bit, "bit 4,(iy+*)", 4, 20).dst(Operand::IndIYd).src(Operand::Four));
        m.insert(0xfdcb6e, Instruction::new(InstType::Bit, "bit 5,(iy+*)", 4, 20).dst(Operand::IndIYd).src(Operand::Five));
        m.insert(0xfdcb76, Instruction::new(InstType::Bit, "bit 6,(iy+*)", 4, 20).dst(Operand::IndIYd).src(Operand::Six));
        m.insert(0xfdcb7e, Instruction::new(InstType::Bit, "bit 7,(iy+*)", 4, 20).dst(Operand::IndIYd).src(Operand::Seven));
        m.insert(0xfdcb86, Instruction::new(InstType::Res, "res 0,(iy+*)", 4, 23).dst(Operand::IndIYd).src(Operand::Zero));
        m.insert(0xfdcb8e, Instruction::new(InstType::Res, "res 1,(iy+*)", 4, 23).dst(Operand::IndIYd).src(Operand::One));
        m.insert(0xfdcb96, Instruction::new(InstType::Res, "res 2,(iy+*)", 4, 23).dst(Operand::IndIYd).src(Operand::Two));
        m.insert(0xfdcb9e, Instruction::new(InstType::Res, "res 3,(iy+*)", 4, 23).dst(Operand::IndIYd).src(Operand::Three));
        m.insert(0xfdcba6, Instruction::new(InstType::Res, "res 4,(iy+*)", 4, 23).dst(Operand::IndIYd).src(Operand::Four));
        m.insert(0xfdcbae, Instruction::new(InstType::Res, "res 5,(iy+*)", 4, 23).dst(Operand::IndIYd).src(Operand::Five));
        m.insert(0xfdcbb6, Instruction::new(InstType::Res, "res 6,(iy+*)", 4, 23).dst(Operand::IndIYd).src(Operand::Six));
        m.insert(0xfdcbbe, Instruction::new(InstType::Res, "res 7,(iy+*)", 4, 23).dst(Operand::IndIYd).src(Operand::Seven));
        m.insert(0xfdcbc6, Instruction::new(InstType::Set, "set 0,(iy+*)", 4, 23).dst(Operand::IndIYd).src(Operand::Zero));
        m.insert(0xfdcbce, Instruction::new(InstType::Set, "set 1,(iy+*)", 4, 23).dst(Operand::IndIYd).src(Operand::One));
        m.insert(0xfdcbd6, Instruction::new(InstType::Set, "set 2,(iy+*)", 4, 23).dst(Operand::IndIYd).src(Operand::Two));
        m.insert(0xfdcbde, Instruction::new(InstType::Set, "set 3,(iy+*)", 4, 23).dst(Operand::IndIYd).src(Operand::Three));
        m.insert(0xfdcbe6, Instruction::new(InstType::Set, "set 4,(iy+*)", 4, 23).dst(Operand::IndIYd).src(Operand::Four));
        m.insert(0xfdcbee, Instruction::new(InstType::Set, "set 5,(iy+*)", 4, 23).dst(Operand::IndIYd).src(Operand::Five));
        m.insert(0xfdcbf6, Instruction::new(InstType::Set, "set 6,(iy+*)", 4, 23).dst(Operand::IndIYd).src(Operand::Six));
        m.insert(0xfdcbfe, Instruction::new(InstType::Set, "set 7,(iy+*)", 4, 23).dst(Operand::IndIYd).src(Operand::Seven));

        m
    };

    /// Entry points of the stock 48K ROM, keyed by address.
    static ref ROM_LABELS: HashMap<u16, &'static str> = {
        let mut m = HashMap::new();

        m.insert(0x0000, "START");
        m.insert(0x0008, "ERROR-1");
        m.insert(0x0010, "PRINT-A-1");
        m.insert(0x0018, "GET-CHAR");
        m.insert(0x001c, "TEST-CHAR");
        m.insert(0x0020, "NEXT-CHAR");
        m.insert(0x0028, "FP-CALC");
        m.insert(0x0030, "BC-SPACES");
        m.insert(0x0038, "MASK-INT");
        m.insert(0x0048, "KEY-INT");
        m.insert(0x0053, "ERROR-2");
        m.insert(0x0055, "ERROR-3");
        m.insert(0x0066, "RESET");
        m.insert(0x0070, "NO-RESET");
        m.insert(0x0074, "CH-ADD+1");
        m.insert(0x0077, "TEMP-PTR1");
        m.insert(0x0078, "TEMP-PTR2");
        m.insert(0x007d, "SKIP-OVER");
        m.insert(0x0090, "SKIPS");
        m.insert(0x0283, "KEY-SCAN");
        m.insert(0x0296, "KEY-LINE");
        m.insert(0x029f, "KEY-3KEYS");
        m.insert(0x02a1, "KEY-BITS");
        m.insert(0x02ab, "KEY-DONE");
        m.insert(0x02bf, "KEYBOARD");
        m.insert(0x02c6, "K-ST-LOOP");
        m.insert(0x02d1, "K-CH-SET");
        m.insert(0x02f1, "K-NEW");
        m.insert(0x0308, "K-END");
        m.insert(0x0310, "K-REPEAT");
        m.insert(0x031e, "K-TEST");
        m.insert(0x032c, "K-MAIN");
        m.insert(0x0333, "K-DECODE");
        m.insert(0x0341, "K-E-LET");
        m.insert(0x034a, "K-LOOK-UP");
        m.insert(0x034f, "K-KLC-LET");
        m.insert(0x0364, "K-TOKENS");
        m.insert(0x0367, "K-DIGIT");
        m.insert(0x0382, "K-8-&-9");
        m.insert(0x0389, "K-GRA-DGT");
        m.insert(0x039d, "K-KLC-DGT");
        m.insert(0x03b2, "K-@-CHAR");
        m.insert(0x03b5, "BEEPER");
        m.insert(0x03d1, "BE-IX+3");
        m.insert(0x03d2, "BE-IX+2");
        m.insert(0x03d3, "BE-IX+1");
        m.insert(0x03d4, "BE-IX+0");
        m.insert(0x03d6, "BE-H&L-LP");
        m.insert(0x03f2, "BE-AGAIN");
        m.insert(0x03f6, "BE-END");
        m.insert(0x03f8, "BEEP");
        m.insert(0x0425, "BE-I-OK");
        m.insert(0x0427, "BE-OCTAVE");
        m.insert(0x046c, "REPORT-B");
        m.insert(0x04c2, "SA-BYTES");
        m.insert(0x04d0, "SA-FLAG");
        m.insert(0x04d8, "SA-LEADER");
        m.insert(0x04ea, "SA-SYNC-1");
        m.insert(0x04f2, "SA-SYNC-2");
        m.insert(0x04fe, "SA-LOOP");
        m.insert(0x0505, "SA-LOOP-P");
        m.insert(0x0507, "SA-START");
        m.insert(0x050e, "SA-PARITY");
        m.insert(0x0511, "SA-BIT-2");
        m.insert(0x0514, "SA-BIT-1");
        m.insert(0x051a, "SA-SET");
        m.insert(0x051c, "SA-OUT");
        m.insert(0x0525, "SA-8-BITS");
        m.insert(0x053c, "SA-DELAY");
        m.insert(0x053f, "SA/LD-RET");
        m.insert(0x0552, "REPORT-D");
        m.insert(0x0554, "SA/LD-END");
        m.insert(0x0556, "LD-BYTES");
        m.insert(0x056b, "LD-BREAK");
        m.insert(0x056c, "LD-START");
        m.insert(0x0574, "LD-WAIT");
        m.insert(0x0580, "LD-LEADER");
        m.insert(0x058f, "LD-SYNC");
        m.insert(0x05a9, "LD-LOOP");
        m.insert(0x05b3, "LD-FLAG");
        m.insert(0x05bd, "LD-VERIFY");
        m.insert(0x05c2, "LD-NEXT");
        m.insert(0x05c4, "LD-DEC");
        m.insert(0x05c8, "LD-MARKER");
        m.insert(0x05ca, "LD-8-BITS");
        m.insert(0x05e3, "LD-EDGE-2");
        m.insert(0x05e7, "LD-EDGE-1");
        m.insert(0x05e9, "LD-DELAY");
        m.insert(0x05ed, "LD-SAMPLE");
        m.insert(0x0605, "SAVE-ETC");
        m.insert(0x0621, "SA-SPACE");
        m.insert(0x0629, "SA-BLANK");
        m.insert(0x0642, "REPORT-F");
        m.insert(0x0644, "SA-NULL");
        m.insert(0x064b, "SA-NAME");
        m.insert(0x0652, "SA-DATA");
        m.insert(0x0670, "REPORT-2");
        m.insert(0x0672, "SA-V-OLD");
        m.insert(0x0685, "SA-V-NEW");
        m.insert(0x068f, "SA-V-TYPE");
        m.insert(0x0692, "SA-DATA-1");
        m.insert(0x06a0, "SA-SCR$");
        m.insert(0x06c3, "SA-CODE");
        m.insert(0x06e1, "SA-CODE-1");
        m.insert(0x06f0, "SA-CODE-2");
        m.insert(0x06f5, "SA-CODE-3");
        m.insert(0x06f9, "SA-CODE-4");
        m.insert(0x0710, "SA-TYPE-3");
        m.insert(0x0716, "SA-LINE");
        m.insert(0x0723, "SA-LINE-1");
        m.insert(0x073a, "SA-TYPE-0");
        m.insert(0x075a, "SA-ALL");
        m.insert(0x0767, "LD-LOOK-H");
        m.insert(0x078a, "LD-TYPE");
        m.insert(0x07ad, "LD-CH-PR");
        m.insert(0x07cb, "VR-CONTRL");
        m.insert(0x07e9, "VR-CONT-1");
        m.insert(0x07f4, "VR-CONT-2");
        m.insert(0x0800, "VR-CONT-3");
        m.insert(0x0802, "LD-BLOCK");
        m.insert(0x0806, "REPORT-R");
        m.insert(0x0808, "LD-CONTRL");
        m.insert(0x0819, "LD-CONT-1");
        m.insert(0x0825, "LD-CONT-2");
        m.insert(0x082e, "LD-DATA");
        m.insert(0x084c, "LD-DATA-1");
        m.insert(0x0873, "LD-PROG");
        m.insert(0x08ad, "LD-PROG-1");
        m.insert(0x08b6, "ME-CONTRL");
        m.insert(0x08d2, "ME-NEW-LP");
        m.insert(0x08d7, "ME-OLD-LP");
        m.insert(0x08df, "ME-OLD-L1");
        m.insert(0x08eb, "ME-NEW-L2");
        m.insert(0x08f0, "ME-VAR-LP");
        m.insert(0x08f9, "ME-OLD-VP");
        m.insert(0x0901, "ME-OLD-V1");
        m.insert(0x0909, "ME-OLD-V2");
        m.insert(0x0912, "ME-OLD-V3");
        m.insert(0x091e, "ME-OLD-V4");
        m.insert(0x0921, "ME-VAR-L1");
        m.insert(0x0923, "ME-VAR-L2");
        m.insert(0x092c, "ME-ENTER");
        m.insert(0x093e, "ME-ENT-1");
        m.insert(0x0955, "ME-ENT-2");
        m.insert(0x0958, "ME-ENT-3");
        m.insert(0x0970, "SA-CONTROL");
        m.insert(0x0991, "SA-1-SEC");
        m.insert(0x09f4, "PRINT-OUT");
        m.insert(0x0a23, "PO-BACK-1");
        m.insert(0x0a38, "PO-BACK-2");
        m.insert(0x0a3a, "PO-BACK-3");
        m.insert(0x0a3d, "PO-RIGHT");
        m.insert(0x0a4f, "PO-ENTER");
        m.insert(0x0a5f, "PO-COMMA");
        m.insert(0x0a69, "PO-QUEST");
        m.insert(0x0a6d, "PO-TV-2");
        m.insert(0x0a75, "PO-2-OPER");
        m.insert(0x0a7a, "PO-1-OPER");
        m.insert(0x0a7d, "PO-TV-1");
        m.insert(0x0a80, "PO-CHANGE");
        m.insert(0x0a87, "PO-CONT");
        m.insert(0x0aac, "PO-AT-ERR");
        m.insert(0x0abf, "PO-AT-SET");
        m.insert(0x0ac2, "PO-TAB");
        m.insert(0x0ac3, "PO-FILL");
        m.insert(0x0ad0, "PO-SPACE");
        m.insert(0x0ad9, "PO-ABLE");
        m.insert(0x0adc, "PO-STORE");
        m.insert(0x0af0, "PO-ST-E");
        m.insert(0x0afc, "PO-ST-PR");
        m.insert(0x0b03, "PO-FETCH");
        m.insert(0x0b1d, "PO-F-PR");
        m.insert(0x0b24, "PO-ANY");
        m.insert(0x0b38, "PO-GR-1");
        m.insert(0x0b3e, "PO-GR-2");
        m.insert(0x0b4c, "PO-GR-3");
        m.insert(0x0b52, "PO-T&UDG");
        m.insert(0x0b5f, "PO-T");
        m.insert(0x0b65, "PO-CHAR");
        m.insert(0x0b6a, "PO-CHAR-2");
        m.insert(0x0b76, "PO-CHAR-3");
        m.insert(0x0b7f, "PR-ALL");
        m.insert(0x0b93, "PR-ALL-1");
        m.insert(0x0ba4, "PR-ALL-2");
        m.insert(0x0bb6, "PR-ALL-3");
        m.insert(0x0b97, "PR-ALL-4");
        m.insert(0x0bc1, "PR-ALL-5");
        m.insert(0x0bd3, "PR-ALL-6");
        m.insert(0x0bdb, "PO-ATTR");
        m.insert(0x0bfa, "PO-ATTR-1");
        m.insert(0x0c08, "PO-ATTR-2");
        m.insert(0x0c0a, "PO-MSG");
        m.insert(0x0c10, "PO-TOKENS");
        m.insert(0x0c14, "PO-TABLE");
        m.insert(0x0c22, "PO-EACH");
        m.insert(0x0c35, "PO-TR-SP");
        m.insert(0x0c3b, "PO-SAVE");
        m.insert(0x0c41, "PO-SEARCH");
        m.insert(0x0c44, "PO-STEP");
        m.insert(0x0c55, "PO-SCR");
        m.insert(0x0c86, "REPORT-5");
        m.insert(0x0c88, "PO-SCR-2");
        m.insert(0x0cd2, "PO-SCR-3");
        m.insert(0x0cf0, "PO-SCR-3A");
        m.insert(0x0d00, "REPORT-D");
        m.insert(0x0d02, "PO-SCR-4");
        m.insert(0x0d1c, "PO-SCR-4A");
        m.insert(0x0d2d, "PO-SCR-4B");
        m.insert(0x0d4d, "TEMPS");
        m.insert(0x0d5b, "TEMPS-1");
        m.insert(0x0d65, "TEMPS-2");
        m.insert(0x0d6b, "CLS");
        m.insert(0x0d6e, "CLS-LOWER");
        m.insert(0x0d87, "CLS-1");
        m.insert(0x0d89, "CLS-2");
        m.insert(0x0d8e, "CLS-3");
        m.insert(0x0d94, "CL-CHAN");
        m.insert(0x0da0, "CL-CHAN-A");
        m.insert(0x0daf, "CL-ALL");
        m.insert(0x0dd9, "CL-SET");
        m.insert(0x0dee, "CL-SET-1");
        m.insert(0x0df4, "CL-SET-2");
        m.insert(0x0dfe, "CL-SC-ALL");
        m.insert(0x0e00, "CL-SCROLL");
        m.insert(0x0e05, "CL-SCR-1");
        m.insert(0x0e0d, "CL-SCR-2");
        m.insert(0x0e19, "CL-SCR-3");
        m.insert(0x0e44, "CL-LINE");
        m.insert(0x0e4a, "CL-LINE-1");
        m.insert(0x0e4d, "CL-LINE-2");
        m.insert(0x0e80, "CL-LINE-3");
        m.insert(0x0e88, "CL-ATTR");
        m.insert(0x0e9b, "CL-ADDR");
        m.insert(0x0eac, "COPY");
        m.insert(0x0eb2, "COPY-1");
        m.insert(0x0ec9, "COPY-2");
        m.insert(0x0ecd, "COPY-BUFF");
        m.insert(0x0ed3, "COPY-3");
        m.insert(0x0eda, "COPY-END");
        m.insert(0x0edf, "CLEAR-PRB");
        m.insert(0x0ee7, "PRB-BYTES");
        m.insert(0x0ef4, "COPY-LINE");
        m.insert(0x0efd, "COPY-L-1");
        m.insert(0x0f0c, "COPY-L-2");
        m.insert(0x0f14, "COPY-L-3");
        m.insert(0x0f18, "COPY-L-4");
        m.insert(0x0f1e, "COPY-L-5");
        m.insert(0x0f2c, "EDITOR");
        m.insert(0x0f30, "ED-AGAIN");
        m.insert(0x0f38, "ED-LOOP");
        m.insert(0x0f6c, "ED-CONTR");
        m.insert(0x0f81, "ADD-CHAR");
        m.insert(0x0f8b, "ADD-CH-1");
        m.insert(0x0f92, "ED-KEYS");
        m.insert(0x0fa9, "ED-EDIT");
        m.insert(0x0ff3, "ED-DOWN");
        m.insert(0x1001, "ED-STOP");
        m.insert(0x1007, "ED-LEFT");
        m.insert(0x100c, "ED-RIGHT");
        m.insert(0x1011, "ED-CUR");
        m.insert(0x1015, "ED-DELETE");
        m.insert(0x101e, "ED-IGNORE");
        m.insert(0x1024, "ED-ENTER");
        m.insert(0x1026, "ED-END");
        m.insert(0x1031, "ED-EDGE");
        m.insert(0x103e, "ED-EDGE-1");
        m.insert(0x1051, "ED-EDGE-2");
        m.insert(0x1059, "ED-UP");
        m.insert(0x106e, "ED-LIST");
        m.insert(0x1076, "ED-SYMBOL");
        m.insert(0x107c, "ED-GRAPH");
        m.insert(0x107f, "ED-ERROR");
        m.insert(0x1097, "CLEAR-SP");
        m.insert(0x10a8, "KEY-INPUT");
        m.insert(0x10db, "KEY-M&CL");
        m.insert(0x10e6, "KEY-MODE");
        m.insert(0x10f4, "KEY-FLAG");
        m.insert(0x10fa, "KEY-CONTR");
        m.insert(0x1105, "KEY-DATA");
        m.insert(0x110d, "KEY-NEXT");
        m.insert(0x1113, "KEY-CHAN");
        m.insert(0x111b, "KEY-DONE");
        m.insert(0x111d, "ED-COPY");
        m.insert(0x1150, "ED-BLANK");
        m.insert(0x115e, "ED-SPACES");
        m.insert(0x1167, "ED-FULL");
        m.insert(0x117c, "ED-C-DONE");
        m.insert(0x117e, "ED-C-END");
        m.insert(0x1190, "SET-HL");
        m.insert(0x1195, "SET-DE");
        m.insert(0x11a7, "REMOVE-FP");
        m.insert(0x11b7, "NEW");
        m.insert(0x11cb, "START/NEW");
        m.insert(0x11da, "RAM-CHECK");
        m.insert(0x11dc, "RAM-FILL");
        m.insert(0x11e2, "RAM-READ");
        m.insert(0x11ef, "RAM-DONE");
        m.insert(0x1219, "RAM-SET");
        m.insert(0x12a2, "MAIN-EXEC");
        m.insert(0x12a9, "MAIN-1");
        m.insert(0x12ac, "MAIN-2");
        m.insert(0x12cf, "MAIN-3");
        m.insert(0x1303, "MAIN-4");
        m.insert(0x1313, "MAIN-G");
        m.insert(0x133c, "MAIN-5");
        m.insert(0x1373, "MAIN-6");
        m.insert(0x1376, "MAIN-7");
        m.insert(0x1384, "MAIN-8");
        m.insert(0x1386, "MAIN-9");
        m.insert(0x155d, "MAIN-ADD");
        m.insert(0x157d, "MAIN-ADD1");
        m.insert(0x15ab, "MAIN-ADD2");
        m.insert(0x15d4, "WAIT-KEY");
        m.insert(0x15de, "WAIT-KEY1");
        m.insert(0x15e4, "REPORT-8");
        m.insert(0x15e6, "INPUT-AD");
        m.insert(0x15ef, "OUT-CODE");
        m.insert(0x15f2, "PRINT-A-2");
        m.insert(0x15f7, "CALL-SUB");
        m.insert(0x1601, "CHAN-OPEN");
        m.insert(0x160e, "REPORT-O");
        m.insert(0x1610, "CHAN-OP-1");
        m.insert(0x1615, "CHAN-FLAG");
        m.insert(0x162c, "CALL-JUMP");
        m.insert(0x1634, "CHAN-K");
        m.insert(0x1642, "CHAN-S");
        m.insert(0x1646, "CHAN-S-1");
        m.insert(0x164d, "CHAN-P");
        m.insert(0x1652, "ONE-SPACE");
        m.insert(0x1655, "MAKE-ROOM");
        m.insert(0x1664, "POINTERS");
        m.insert(0x166b, "PTR-NEXT");
        m.insert(0x167f, "PTR-DONE");
        m.insert(0x168f, "LINE-ZERO");
        m.insert(0x1691, "LINE-NO-A");
        m.insert(0x1695, "LINE-NO");
        m.insert(0x169e, "RESERVE");
        m.insert(0x16b0, "SET-MIN");
        m.insert(0x16bf, "SET-WORK");
        m.insert(0x16c5, "SET-STK");
        m.insert(0x16d4, "REC-EDIT");
        m.insert(0x16db, "INDEXER-1");
        m.insert(0x16dc, "INDEXER");
        m.insert(0x16e5, "CLOSE");
        m.insert(0x16fc, "CLOSE-1");
        m.insert(0x1701, "CLOSE-2");
        m.insert(0x171c, "CLOSE-STR");
        m.insert(0x171e, "STR-DATA");
        m.insert(0x1725, "REPORT-O");
        m.insert(0x1727, "STR-DATA1");
        m.insert(0x1736, "OPEN");
        m.insert(0x1756, "OPEN-1");
        m.insert(0x175d, "OPEN-2");
        m.insert(0x1765, "REPORT-F");
        m.insert(0x1767, "OPEN-3");
        m.insert(0x1781, "OPEN-K");
        m.insert(0x1785, "OPEN-S");
        m.insert(0x1789, "OPEN-P");
        m.insert(0x178b, "OPEN-END");
        m.insert(0x1793, "CAT-ETC.");
        m.insert(0x1795, "AUTO-LIST");
        m.insert(0x17ce, "AUTO-L-1");
        m.insert(0x17e1, "AUTO-L-2");
        m.insert(0x17e4, "AUTO-L-3");
        m.insert(0x17ed, "AUTO-L-4");
        m.insert(0x17f5, "LLIST");
        m.insert(0x17f9, "LIST");
        m.insert(0x17fb, "LIST-1");
        m.insert(0x1814, "LIST-2");
        m.insert(0x181a, "LIST-3");
        m.insert(0x181f, "LIST-4");
        m.insert(0x1822, "LIST-5");
        m.insert(0x1833, "LIST-ALL");
        m.insert(0x1835, "LIST-ALL-1");
        m.insert(0x1855, "OUT-LINE");
        m.insert(0x1865, "OUT-LINE1");
        m.insert(0x187d, "OUT-LINE2");
        m.insert(0x1881, "OUT-LINE3");
        m.insert(0x1894, "OUT-LINE4");
        m.insert(0x18a1, "OUT-LINE5");
        m.insert(0x18b4, "OUT-LINE6");
        m.insert(0x18b6, "NUMBER");
        m.insert(0x18c1, "OUT-FLASH");
        m.insert(0x18e1, "OUT-CURS");
        m.insert(0x18f3, "OUT-C-1");
        m.insert(0x1909, "OUT-C-2");
        m.insert(0x190f, "LN-FETCH");
        m.insert(0x191c, "LN-STORE");
        m.insert(0x1925, "OUT-SP-2");
        m.insert(0x192a, "OUT-SP-NO");
        m.insert(0x192b, "OUT-SP-1");
        m.insert(0x1937, "OUT-CHAR");
        m.insert(0x195a, "OUT-CH-1");
        m.insert(0x1968, "OUT-CH-2");
        m.insert(0x196c, "OUT-CH-3");
        m.insert(0x196e, "LINE-ADDR");
        m.insert(0x1974, "LINE-AD-1");
        m.insert(0x1980, "CP-LINES");
        m.insert(0x198b, "EACH-STMT");
        m.insert(0x1990, "EACH-S-1");
        m.insert(0x1998, "EACH-S-2");
        m.insert(0x199a, "EACH-S-3");
        m.insert(0x19a5, "EACH-S-4");
        m.insert(0x19ad, "EACH-S-5");
        m.insert(0x19b1, "EACH-S-6");
        m.insert(0x19b8, "NEXT-ONE");
        m.insert(0x19c7, "NEXT-O-1");
        m.insert(0x19ce, "NEXT-O-2");
        m.insert(0x19d5, "NEXT-O-3");
        m.insert(0x19d6, "NEXT-O-4");
        m.insert(0x19db, "NEXT-O-5");
        m.insert(0x19dd, "DIFFER");
        m.insert(0x19e5, "RECLAIM-1");
        m.insert(0x19e8, "RECLAIM-2");
        m.insert(0x19fb, "E-LINE-NO");
        m.insert(0x1a15, "E-L-1");
        m.insert(0x1a1b, "OUT-NUM-1");
        m.insert(0x1a28, "OUT-NUM-2");
        m.insert(0x1a30, "OUT-NUM-3");
        m.insert(0x1a42, "OUT-NUM-4");
        m.insert(0x1a7a, "P-LET");
        m.insert(0x1a7d, "P-GO-TO");
        m.insert(0x1a81, "P-IF");
        m.insert(0x1a86, "P-GO-SUB");
        m.insert(0x1a8a, "P-STOP");
        m.insert(0x1a8d, "P-RETURN");
        m.insert(0x1a90, "P-FOR");
        m.insert(0x1a98, "P-NEXT");
        m.insert(0x1a9c, "P-PRINT");
        m.insert(0x1a9f, "P-INPUT");
        m.insert(0x1aa2, "P-DIM");
        m.insert(0x1aa5, "P-REM");
        m.insert(0x1aa8, "P-NEW");
        m.insert(0x1aab, "P-RUN");
        m.insert(0x1aae, "P-LIST");
        m.insert(0x1ab1, "P-POKE");
        m.insert(0x1ab5, "P-RANDOM");
        m.insert(0x1ab8, "P-CONT");
        m.insert(0x1abb, "P-CLEAR");
        m.insert(0x1abe, "P-CLS");
        m.insert(0x1ac1, "P-PLOT");
        m.insert(0x1ac5, "P-PAUSE");
        m.insert(0x1ac9, "P-READ");
        m.insert(0x1acc, "P-DATA");
        m.insert(0x1acf, "P-RESTORE");
        m.insert(0x1ad2, "P-DRAW");
        m.insert(0x1ad6, "P-COPY");
        m.insert(0x1ad9, "P-LPRINT");
        m.insert(0x1adc, "P-LLIST");
        m.insert(0x1adf, "P-SAVE");
        m.insert(0x1ae0, "P-LOAD");
        m.insert(0x1ae1, "P-VERIFY");
        m.insert(0x1ae2, "P-MERGE");
        m.insert(0x1ae3, "P-BEEP");
        m.insert(0x1ae7, "P-CIRCLE");
        m.insert(0x1aeb, "P-INK");
        m.insert(0x1aec, "P-PAPER");
        m.insert(0x1aed, "P-FLASH");
        m.insert(0x1aee, "P-BRIGHT");
        m.insert(0x1aef, "P-INVERSE");
        m.insert(0x1af0, "P-OVER");
        m.insert(0x1af1, "P-OUT");
        m.insert(0x1af5, "P-BORDER");
        m.insert(0x1af9, "P-DEF-FN");
        m.insert(0x1afc, "P-OPEN");
        m.insert(0x1b02, "P-CLOSE");
        m.insert(0x1b06, "P-FORMAT");
        m.insert(0x1b0a, "P-MOVE");
        m.insert(0x1b10, "P-ERASE");
        m.insert(0x1b14, "P-CAT");
        m.insert(0x1b17, "LINE-SCAN");
        m.insert(0x1b28, "STMT-LOOP");
        m.insert(0x1b29, "STMT-L-1");
        m.insert(0x1b52, "SCAN-LOOP");
        m.insert(0x1b55, "GET-PARAM");
        m.insert(0x1b6f, "SEPARATOR");
        m.insert(0x1b76, "STMT-RET");
        m.insert(0x1b7b, "REPORT-L");
        m.insert(0x1b7d, "STMT-R-1");
        m.insert(0x1b8a, "LINE-RUN");
        m.insert(0x1b9e, "LINE-NEW");
        m.insert(0x1bb0, "REPORT-0");
        m.insert(0x1bb2, "REM");
        m.insert(0x1bb3, "LINE-END");
        m.insert(0x1bbf, "LINE-USE");
        m.insert(0x1bd1, "NEXT-LINE");
        m.insert(0x1bec, "REPORT-N");
        m.insert(0x1bee, "CHECK-END");
        m.insert(0x1bf4, "STMT-NEXT");
        m.insert(0x1c0d, "CLASS-03");
        m.insert(0x1c10, "CLASS-00");
        m.insert(0x1c11, "CLASS-05");
        m.insert(0x1c16, "JUMP-C-R");
        m.insert(0x1c1f, "CLASS-01");
        m.insert(0x1c22, "VAR-A-1");
        m.insert(0x1c2e, "REPORT-2");
        m.insert(0x1c30, "VAR-A-2");
        m.insert(0x1c46, "VAR-A-3");
        m.insert(0x1c4e, "CLASS-02");
        m.insert(0x1c56, "VAL-FET-1");
        m.insert(0x1c59, "VAL-FET-2");
        m.insert(0x1c6c, "CLASS-04");
        m.insert(0x1c79, "NEXT-2NUM");
        m.insert(0x1c7a, "EXPT-2NUM");
        m.insert(0x1c82, "EXPT-1NUM");
        m.insert(0x1c8a, "REPORT-C");
        m.insert(0x1c8c, "EXPT-EXP");
        m.insert(0x1c96, "PERMS");
        m.insert(0x1cbe, "CLASS-09");
        m.insert(0x1cd6, "CL-09-1");
        m.insert(0x1cdb, "CLASS-0B");
        m.insert(0x1cde, "FETCH-NUM");
        m.insert(0x1ce6, "USE-ZERO");
        m.insert(0x1cee, "STOP");
        m.insert(0x1cf0, "IF");
        m.insert(0x1d00, "IF-1");
        m.insert(0x1d03, "FOR");
        m.insert(0x1d10, "F-USE-1");
        m.insert(0x1d16, "F-REORDER");
        m.insert(0x1d34, "F-L&S");
        m.insert(0x1d64, "F-LOOP");
        m.insert(0x1d7c, "F-FOUND");
        m.insert(0x1d84, "REPORT-I");
        m.insert(0x1d8b, "LOOK-P-1");
        m.insert(0x1da3, "LOOK-P-2");
        m.insert(0x1dab, "NEXT");
        m.insert(0x1dd8, "REPORT-1");
        m.insert(0x1dda, "NEXT-LOOP");
        m.insert(0x1de2, "NEXT-1");
        m.insert(0x1de9, "NEXT-2");
        m.insert(0x1dec, "READ-3");
        m.insert(0x1ded, "READ");
        m.insert(0x1e08, "REPORT-E");
        m.insert(0x1e0a, "READ-1");
        m.insert(0x1e1e, "READ-2");
        m.insert(0x1e2c, "DATA-1");
        m.insert(0x1e37, "DATA-2");
        m.insert(0x1e39, "PASS-BY");
        m.insert(0x1e42, "RESTORE");
        m.insert(0x1e45, "REST-RUN");
        m.insert(0x1e4f, "RANDOMIZE");
        m.insert(0x1e5a, "RAND-1");
        m.insert(0x1e5f, "CONTINUE");
        m.insert(0x1e67, "GO-TO");
        m.insert(0x1e73, "GO-TO-2");
        m.insert(0x1e7a, "OUT");
        m.insert(0x1e80, "POKE");
        m.insert(0x1e85, "TWO-PARAM");
        m.insert(0x1e8e, "TWO-P-1");
        m.insert(0x1e94, "FIND-INT1");
        m.insert(0x1e99, "FIND-INT2");
        m.insert(0x1e9c, "FIND-I-1");
        m.insert(0x1e9f, "REPORT-B");
        m.insert(0x1ea1, "RUN");
        m.insert(0x1eaf, "CLEAR-RUN");
        m.insert(0x1eb7, "CLEAR-1");
        m.insert(0x1eda, "REPORT-M");
        m.insert(0x1edc, "CLEAR-2");
        m.insert(0x1eed, "GO-SUB");
        m.insert(0x1f05, "TEST-ROOM");
        m.insert(0x1f15, "REPORT-4");
        m.insert(0x1f1a, "FREE-MEM");
        m.insert(0x1f23, "RETURN");
        m.insert(0x1f36, "REPORT-7");
        m.insert(0x1f3a, "PAUSE");
        m.insert(0x1f3d, "PAUSE-1");
        m.insert(0x1f49, "PAUSE-2");
        m.insert(0x1f4f, "PAUSE-END");
        m.insert(0x1f54, "BREAK-KEY");
        m.insert(0x1f6a, "DEF-FN-1");
        m.insert(0x1f7d, "DEF-FN-2");
        m.insert(0x1f86, "DEF-FN-3");
        m.insert(0x1f89, "DEF-FN-4");
        m.insert(0x1f94, "DEF-FN-5");
        m.insert(0x1fa6, "DEF-FN-6");
        m.insert(0x1fbd, "DEF-FN-7");
        m.insert(0x1fc3, "UNSTACK-Z");
        m.insert(0x1fc9, "LPRINT");
        m.insert(0x1fcd, "PRINT");
        m.insert(0x1fcf, "PRINT-1");
        m.insert(0x1fdf, "PRINT-2");
        m.insert(0x1fe5, "PRINT-3");
        m.insert(0x1ff2, "PRINT-4");
        m.insert(0x1ff5, "PRINT-CR");
        m.insert(0x1ffc, "PR-ITEM-1");
        m.insert(0x200e, "PR-ITEM-2");
        m.insert(0x201e, "PR-AT-TAB");
        m.insert(0x2024, "PR-ITEM-3");
        m.insert(0x203c, "PR-STRING");
        m.insert(0x2045, "PR-END-Z");
        m.insert(0x2048, "PR-ST-END");
        m.insert(0x204e, "PR-POSN-1");
        m.insert(0x2061, "PR-POSN-2");
        m.insert(0x2067, "PR-POSN-3");
        m.insert(0x206e, "PR-POSN-4");
        m.insert(0x2070, "STR-ALTER");
        m.insert(0x2089, "INPUT");
        m.insert(0x2096, "INPUT-1");
        m.insert(0x20ad, "INPUT-2");
        m.insert(0x20c1, "IN-ITEM-1");
        m.insert(0x20d8, "IN-ITEM-2");
        m.insert(0x20ed, "IN-ITEM-3");
        m.insert(0x20fa, "IN-PROMPT");
        m.insert(0x211a, "IN-PR-1");
        m.insert(0x211c, "IN-PR-2");
        m.insert(0x2129, "IN-PR-3");
        m.insert(0x213a, "IN-VAR-1");
        m.insert(0x2148, "IN-VAR-2");
        m.insert(0x215e, "IN-VAR-3");
        m.insert(0x2161, "IN-VAR-4");
        m.insert(0x2174, "IN-VAR-5");
        m.insert(0x219b, "IN-VAR-6");
        m.insert(0x21af, "IN-NEXT-1");
        m.insert(0x21b2, "IN-NEXT-2");
        m.insert(0x21b9, "IN-ASSIGN");
        m.insert(0x21ce, "REPORT-C");
        m.insert(0x21d0, "IN-STOP");
        m.insert(0x21d4, "REPORT-H");
        m.insert(0x21d6, "IN-CHAN-K");
        m.insert(0x21e1, "CO-TEMP-1");
        m.insert(0x21e2, "CO-TEMP-2");
        m.insert(0x21f2, "CO-TEMP-3");
        m.insert(0x21fc, "CO-TEMP-4");
        m.insert(0x2211, "CO-TEMP-5");
        m.insert(0x2228, "CO-TEMP-6");
        m.insert(0x2234, "CO-TEMP-7");
        m.insert(0x223e, "CO-TEMP-8");
        m.insert(0x2244, "REPORT-K");
        m.insert(0x2246, "CO-TEMP-9");
        m.insert(0x2257, "CO-TEMP-A");
        m.insert(0x2258, "CO-TEMP-B");
        m.insert(0x226c, "CO-CHANGE");
        m.insert(0x2273, "CO-TEMP-C");
        m.insert(0x227d, "CO-TEMP-D");
        m.insert(0x2287, "CO-TEMP-E");
        m.insert(0x2294, "BORDER");
        m.insert(0x22a6, "BORDER-1");
        m.insert(0x22aa, "PIXEL-ADD");
        m.insert(0x22cb, "POINT-SUB");
        m.insert(0x22d4, "POINT-LP");
        m.insert(0x22dc, "PLOT");
        m.insert(0x22e5, "PLOT-SUB");
        m.insert(0x22f0, "PLOT-LOOP");
        m.insert(0x22fd, "PL-TST-IN");
        m.insert(0x2303, "PLOT-END");
        m.insert(0x2307, "STK-TO-BC");
        m.insert(0x2314, "STK-TO-A");
        m.insert(0x2320, "CIRCLE");
        m.insert(0x233b, "C-R-GRE-1");
        m.insert(0x235a, "C-ARC-GE1");
        m.insert(0x2382, "DRAW");
        m.insert(0x238d, "DR-3-PRMS");
        m.insert(0x23a3, "DR-SIN-NZ");
        m.insert(0x23c1, "DR-PRMS");
        m.insert(0x2420, "DRW-STEPS");
        m.insert(0x2425, "ARC-LOOP");
        m.insert(0x2439, "ARC-START");
        m.insert(0x245f, "ARC-END");
        m.insert(0x2477, "LINE-DRAW");
        m.insert(0x247d, "CD-PRMS1");
        m.insert(0x2495, "USE-252");
        m.insert(0x2497, "DRAW-SAVE");
        m.insert(0x24b7, "DRAW-LINE");
        m.insert(0x24c4, "DL-X-GE-Y");
        m.insert(0x24cb, "DL-LARGER");
        m.insert(0x24ce, "D-L-LOOP");
        m.insert(0x24d4, "D-L-DIAG");
        m.insert(0x24db, "D-L-HR-VT");
        m.insert(0x24df, "D-L-STEP");
        m.insert(0x24ec, "D-L-PLOT");
        m.insert(0x24f7, "D-L-RANGE");
        m.insert(0x24f9, "REPORT-B");
        m.insert(0x24fb, "SCANNING");
        m.insert(0x24ff, "S-LOOP-1");
        m.insert(0x250f, "S-QUOTE-S");
        m.insert(0x2522, "S-2-COORD");
        m.insert(0x252d, "S-RPORT-C");
        m.insert(0x2530, "SYNTAX-Z");
        m.insert(0x2535, "S-SCRN$-S");
        m.insert(0x254f, "S-SCRN-LP");
        m.insert(0x255a, "S-SC-MTCH");
        m.insert(0x255d, "S-SC-ROWS");
        m.insert(0x2573, "S-SCR-NXT");
        m.insert(0x257d, "S-SCR-STO");
        m.insert(0x2580, "S-ATTR-S");
        m.insert(0x25af, "S-U-PLUS");
        m.insert(0x25b3, "S-QUOTE");
        m.insert(0x25be, "S-Q-AGAIN");
        m.insert(0x25cb, "S-Q-COPY");
        m.insert(0x25d9, "S-Q-PRMS");
        m.insert(0x25db, "S-STRING");
        m.insert(0x25e8, "S-BRACKET");
        m.insert(0x25f5, "S-FN");
        m.insert(0x25f8, "S-RND");
        m.insert(0x2625, "S-RND-END");
        m.insert(0x2627, "S-PI");
        m.insert(0x2630, "S-PI-END");
        m.insert(0x2634, "S-INKEY$");
        m.insert(0x2660, "S-IK$-STK");
        m.insert(0x2665, "S-INK$-EN");
        m.insert(0x2668, "S-SCREEN$");
        m.insert(0x2672, "S-ATTR");
        m.insert(0x267b, "S-POINT");
        m.insert(0x26b4, "S-ALPHNUM");
        m.insert(0x268d, "S-DECIMAL");
        m.insert(0x26b5, "S-STK-DEC");
        m.insert(0x26b6, "S-SD-SKIP");
        m.insert(0x26c3, "S-NUMERIC");
        m.insert(0x26c9, "S-LETTER");
        m.insert(0x26dd, "S-CONT1");
        m.insert(0x26df, "S-NEGATE");
        m.insert(0x2707, "S-NO-TO-S");
        m.insert(0x270d, "S-PUSH-PO");
        m.insert(0x2712, "S-CONT-2");
        m.insert(0x2713, "S-CONT-3");
        m.insert(0x2723, "S-OPERTR");
        m.insert(0x2734, "S-LOOP");
        m.insert(0x274c, "S-STK-LST");
        m.insert(0x275b, "S-SYNTEST");
        m.insert(0x2761, "S-RPORT-C");
        m.insert(0x2764, "S-RUNTEST");
        m.insert(0x2770, "S-LOOPEND");
        m.insert(0x2773, "S-TIGHTER");
        m.insert(0x2788, "S-NOT-AND");
        m.insert(0x2790, "S-NEXT");
        m.insert(0x27bd, "S-FN-SBRN");
        m.insert(0x27d0, "SF-BRKT-1");
        m.insert(0x27d9, "SF-ARGMTS");
        m.insert(0x27e4, "SF-BRKT-2");
        m.insert(0x27e6, "SF-RPRT-C");
        m.insert(0x27e9, "SF-FLAG-6");
        m.insert(0x27f4, "SF-SYN-EN");
        m.insert(0x27f7, "SF-RUN");
        m.insert(0x2802, "SF-ARGMT1");
        m.insert(0x2808, "SF-FND-DF");
        m.insert(0x2812, "REPORT-P");
        m.insert(0x2814, "SF-CP-DEF");
        m.insert(0x2825, "SF-NOT-FD");
        m.insert(0x2831, "SF-VALUES");
        m.insert(0x2843, "SF-ARG-LP");
        m.insert(0x2852, "SF-ARG-VL");
        m.insert(0x2885, "SF-R-BR-2");
        m.insert(0x288b, "REPORT-Q");
        m.insert(0x288d, "SF-VALUE");
        m.insert(0x28ab, "FN-SKPOVR");
        m.insert(0x28b2, "LOOK-VARS");
        m.insert(0x28d4, "V-CHAR");
        m.insert(0x28de, "V-STR-VAR");
        m.insert(0x28e3, "V-TEST-FN");
        m.insert(0x28ef, "V-RUN/SYN");
        m.insert(0x28fd, "V-RUN");
        m.insert(0x2900, "V-EACH");
        m.insert(0x2912, "V-MATCHES");
        m.insert(0x2913, "V-SPACES");
        m.insert(0x2929, "V-GET-PTR");
        m.insert(0x292a, "V-NEXT");
        m.insert(0x2932, "V-80-BYTE");
        m.insert(0x2934, "V-SYNTAX");
        m.insert(0x293e, "V-FOUND-1");
        m.insert(0x293f, "V-FOUND-2");
        m.insert(0x2943, "V-PASS");
        m.insert(0x294b, "V-END");
        m.insert(0x2951, "STK-F-ARG");
        m.insert(0x295a, "SFA-LOOP");
        m.insert(0x296b, "SFA-CP-VR");
        m.insert(0x2981, "SFA-MATCH");
        m.insert(0x2991, "SFA-END");
        m.insert(0x2996, "STK-VAR");
        m.insert(0x29a1, "SV-SIMPLE$");
        m.insert(0x29ae, "SV-ARRAYS");
        m.insert(0x29c0, "SV-PTR");
        m.insert(0x29c3, "SV-COMMA");
        m.insert(0x29d8, "SV-CLOSE");
        m.insert(0x29e0, "SV-CH-ADD");
        m.insert(0x29e7, "SV-COUNT");
        m.insert(0x29ea, "SV-LOOP");
        m.insert(0x29fb, "SV-MULT");
        m.insert(0x2a12, "SV-RPT-C");
        m.insert(0x2a20, "REPORT-3");
        m.insert(0x2a22, "SV-NUMBER");
        m.insert(0x2a2c, "SV-ELEM$");
        m.insert(0x2a45, "SV-SLICE");
        m.insert(0x2a48, "SV-DIM");
        m.insert(0x2a49, "SV-SLICE?");
        m.insert(0x2a52, "SLICING");
        m.insert(0x2a7a, "SL-RPT-C");
        m.insert(0x2a81, "SL-SECOND");
        m.insert(0x2a94, "SL-DEFINE");
        m.insert(0x2aa8, "SL-OVER");
        m.insert(0x2aad, "SL-STORE");
        m.insert(0x2ab1, "STK-ST-0");
        m.insert(0x2ab2, "STK-STO-$");
        m.insert(0x2ab6, "STK-STORE");
        m.insert(0x2acc, "INT-EXP1");
        m.insert(0x2acd, "INT-EXP2");
        m.insert(0x2ae8, "I-CARRY");
        m.insert(0x2aeb, "I-RESTORE");
        m.insert(0x2aee, "DE,(DE+1)");
        m.insert(0x2af4, "GET-HL*DE");
        m.insert(0x2aff, "LET");
        m.insert(0x2b0b, "L-EACH-CH");
        m.insert(0x2b0c, "L-NO-SP");
        m.insert(0x2b1f, "L-TEST-CH");
        m.insert(0x2b29, "L-SPACES");
        m.insert(0x2b3e, "L-CHAR");
        m.insert(0x2b4f, "L-SINGLE");
        m.insert(0x2b59, "L-NUMERIC");
        m.insert(0x2b66, "L-EXISTS");
        m.insert(0x2b72, "L-DELETE$");
        m.insert(0x2b9b, "L-LENGTH");
        m.insert(0x2ba3, "L-IN-W/S");
        m.insert(0x2ba6, "L-ENTER");
        m.insert(0x2baf, "L-ADD$");
        m.insert(0x2bc0, "L-NEW$");
        m.insert(0x2bc6, "L-STRING");
        m.insert(0x2bea, "L-FIRST");
        m.insert(0x2bf1, "STK-FETCH");
        m.insert(0x2c02, "DIM");
        m.insert(0x2c05, "D-RPORT-C");
        m.insert(0x2c15, "D-RUN");
        m.insert(0x2c1f, "D-LETTER");
        m.insert(0x2c2d, "D-SIZE");
        m.insert(0x2c2e, "D-NO-LOOP");
        m.insert(0x2c7c, "DIM-CLEAR");
        m.insert(0x2c7f, "DIM-SIZES");
        m.insert(0x2c88, "ALPHANUM");
        m.insert(0x2c8d, "ALPHA");
        m.insert(0x2c9b, "DEC-TO-FP");
        m.insert(0x2ca2, "BIN-DIGIT");
        m.insert(0x2cb3, "BIN-END");
        m.insert(0x2cb8, "NOT-BIN");
        m.insert(0x2ccb, "DECIMAL");
        m.insert(0x2ccf, "DEC-RPT-C");
        m.insert(0x2cd5, "DEC-STO-1");
        m.insert(0x2cda, "NXT-DGT-1");
        m.insert(0x2ceb, "E-FORMAT");
        m.insert(0x2cf2, "SIGN-FLAG");
        m.insert(0x2cfe, "SIGN-DONE");
        m.insert(0x2cff, "ST-E-PART");
        m.insert(0x2d18, "E-FP-JUMP");
        m.insert(0x2d1b, "NUMERIC");
        m.insert(0x2d22, "STK-DIGIT");
        m.insert(0x2d28, "STACK-A");
        m.insert(0x2d2b, "STACK-BC");
        m.insert(0x2d3b, "INT-TO-FP");
        m.insert(0x2d40, "NXT-DGT-2");
        m.insert(0x2d4f, "E-TO-FP");
        m.insert(0x2d55, "E-SAVE");
        m.insert(0x2d60, "E-LOOP");
        m.insert(0x2d6d, "E-DIVSN");
        m.insert(0x2d6e, "E-FETCH");
        m.insert(0x2d71, "E-TST-END");
        m.insert(0x2d7b, "E-END");
        m.insert(0x2d7f, "INT-FETCH");
        m.insert(0x2d8c, "P-INT-STO");
        m.insert(0x2d8e, "INT-STORE");
        m.insert(0x2da2, "FP-TO-BC");
        m.insert(0x2dad, "FP-DELETE");
        m.insert(0x2dc1, "LOG(2^A)");
        m.insert(0x2dd5, "FP-TO-A");
        m.insert(0x2de1, "FP-A-END");
        m.insert(0x2de3, "PRINT-FP");
        m.insert(0x2df2, "PF-NEGTVE");
        m.insert(0x2df8, "PF-POSTVE");
        m.insert(0x2e01, "PF-LOOP");
        m.insert(0x2e1e, "PF-SAVE");
        m.insert(0x2e56, "PF-LARGE");
        m.insert(0x2e6f, "PF-MEDIUM");
        m.insert(0x2e7b, "PF-BITS");
        m.insert(0x2e8a, "PF-BYTES");
        m.insert(0x2ea1, "PF-DIGITS");
        m.insert(0x2ea9, "PF-INSERT");
        m.insert(0x2eb3, "PF-TEST-2");
        m.insert(0x2eb8, "PF-ALL-9");
        m.insert(0x2ecb, "PF-MORE");
        m.insert(0x2ecf, "PF-FRACTN");
        m.insert(0x2edf, "PF-FRN-LP");
        m.insert(0x2eec, "PF-FR-DGT");
        m.insert(0x2eef, "PF-FR-EXX");
        m.insert(0x2f0c, "PF-ROUND");
        m.insert(0x2f18, "PF-END-LP");
        m.insert(0x2f25, "PF-R-BACK");
        m.insert(0x2f2d, "PF-COUNT");
        m.insert(0x2f46, "PF-NOT-E");
        m.insert(0x2f4a, "PF-E-SBRN");
        m.insert(0x2f52, "PF-OUT-LP");
        m.insert(0x2f59, "PF-OUT-DT");
        m.insert(0x2f5e, "PF-DC-OUT");
        m.insert(0x2f64, "PF-DEC-0S");
        m.insert(0x2f6c, "PF-E-FRMT");
        m.insert(0x2f83, "PF-E-POS");
        m.insert(0x2f85, "PF-E-SIGN");
        m.insert(0x2f8b, "CA=10*A+C");
        m.insert(0x2f9b, "PREP-ADD");
        m.insert(0x2faf, "NEG-BYTE");
        m.insert(0x2fba, "FETCH-TWO");
        m.insert(0x2fdd, "SHIFT-FP");
        m.insert(0x2fe5, "ONE-SHIFT");
        m.insert(0x2ff9, "ADDEND-0");
        m.insert(0x2ffb, "ZEROS-4/5");
        m.insert(0x3004, "ADD-BACK");
        m.insert(0x300d, "ALL-ADDED");
        m.insert(0x300f, "SUBTRACT");
        m.insert(0x3014, "ADDITION");
        m.insert(0x303c, "ADDN-OFLW");
        m.insert(0x303e, "FULL-ADDN");
        m.insert(0x3055, "SHIFT-LEN");
        m.insert(0x307c, "TEST-NEG");
        m.insert(0x309f, "ADD-REP-6");
        m.insert(0x30a3, "END-COMPL");
        m.insert(0x30a5, "GO-NC-MLT");
        m.insert(0x30a9, "HL=HL*DE");
        m.insert(0x30b1, "HL-LOOP");
        m.insert(0x30bc, "HL-AGAIN");
        m.insert(0x30be, "HL-END");
        m.insert(0x30c0, "PREP-M/D");
        m.insert(0x30ca, "MULTIPLY");
        m.insert(0x30ea, "MULT-RSLT");
        m.insert(0x30ef, "MULT-OFLW");
        m.insert(0x30f0, "MULT-LONG");
        m.insert(0x3114, "MLT-LOOP");
        m.insert(0x311b, "NO-ADD");
        m.insert(0x3125, "STRT-MLT");
        m.insert(0x313b, "MAKE-EXPT");
        m.insert(0x313d, "DIVN-EXPT");
        m.insert(0x3146, "OFLW1-CLR");
        m.insert(0x3151, "OFLW2-CLR");
        m.insert(0x3155, "TEST-NORM");
        m.insert(0x3159, "NEAR-ZERO");
        m.insert(0x315d, "ZERO-RSLT");
        m.insert(0x315e, "SKIP-ZERO");
        m.insert(0x316c, "NORMALISE");
        m.insert(0x316e, "SHIFT-ONE");
        m.insert(0x3186, "NORML-NOW");
        m.insert(0x3195, "OFLOW-CLR");
        m.insert(0x31ad, "REPORT-6");
        m.insert(0x31af, "DIVISION");
        m.insert(0x31d2, "DIV-LOOP");
        m.insert(0x31d8, "DIV-34TH");
        m.insert(0x31e2, "DIV-START");
        m.insert(0x31f2, "SUBN-ONLY");
        m.insert(0x31f9, "NO-RSTORE");
        m.insert(0x31fa, "COUNT-ONE");
        m.insert(0x3214, "TRUNCATE");
        m.insert(0x3221, "T-GR-ZERO");
        m.insert(0x3233, "T-FIRST");
        m.insert(0x323f, "T-SMALL");
        m.insert(0x3252, "T-NUMERIC");
        m.insert(0x325e, "T-TEST");
        m.insert(0x3261, "T-SHIFT");
        m.insert(0x3267, "T-STORE");
        m.insert(0x326c, "T-EXPNENT");
        m.insert(0x326d, "X-LARGE");
        m.insert(0x3272, "NIL-BYTES");
        m.insert(0x327e, "BYTE-ZERO");
        m.insert(0x3283, "BITS-ZERO");
        m.insert(0x328a, "LESS-MASK");
        m.insert(0x3290, "IX-END");
        m.insert(0x3293, "RE-ST-TWO");
        m.insert(0x3296, "RESTK-SUB");
        m.insert(0x32b1, "RS-NRMLSE");
        m.insert(0x32b2, "RSTK-LOOP");
        m.insert(0x32bd, "RS-STORE");
        m.insert(0x335b, "CALCULATE");
        m.insert(0x335e, "GEN-ENT-1");
        m.insert(0x3362, "GEN-ENT-2");
        m.insert(0x3365, "RE-ENTRY");
        m.insert(0x336c, "SCAN-ENT");
        m.insert(0x3380, "FIRST-3D");
        m.insert(0x338c, "DOUBLE-A");
        m.insert(0x338e, "ENT-TABLE");
        m.insert(0x33a1, "DELETE");
        m.insert(0x33a2, "FP-CALC-2");
        m.insert(0x33b4, "STACK-NUM");
        m.insert(0x33c0, "MOVE-FP");
        m.insert(0x33c6, "STK-DATA");
        m.insert(0x33c8, "STK-CONST");
        m.insert(0x33de, "FORM-EXP");
        m.insert(0x33f1, "STK-ZEROS");
        m.insert(0x33f7, "SKIP-CONS");
        m.insert(0x33f8, "SKIP-NEXT");
        m.insert(0x3406, "LOC-MEM");
        m.insert(0x340f, "GET-MEM-0, ETC.");
        m.insert(0x341b, "STK-ZERO, ETC.");
        m.insert(0x342d, "ST-MEM-0, ETC.");
        m.insert(0x343c, "EXCHANGE");
        m.insert(0x343e, "SWAP-BYTE");
        m.insert(0x3449, "SERIES-06, ETC.");
        m.insert(0x3453, "G-LOOP");
        m.insert(0x346a, "ABS");
        m.insert(0x346e, "NEGATE");
        m.insert(0x3474, "NEG-TEST");
        m.insert(0x3483, "INT-CASE");
        m.insert(0x3492, "SGN");
        m.insert(0x34a5, "IN");
        m.insert(0x34ac, "PEEK");
        m.insert(0x34b3, "USR-NO");
        m.insert(0x34bc, "USR-$");
        m.insert(0x34d3, "USR-RANGE");
        m.insert(0x34e4, "USR-STACK");
        m.insert(0x34e7, "REPORT-A");
        m.insert(0x34e9, "TEST-ZERO");
        m.insert(0x34f9, "GREATER-0");
        m.insert(0x3501, "NOT");
        m.insert(0x3506, "LESS-0");
        m.insert(0x3507, "SIGN-TO-C");
        m.insert(0x350b, "FP-0/1");
        m.insert(0x351b, "OR");
        m.insert(0x3524, "NO-&-NO");
        m.insert(0x352d, "STR-&-NO");
        m.insert(0x353b, "NO-L-EQL, ETC.");
        m.insert(0x3543, "EX-OR-NOT");
        m.insert(0x354e, "NU-OR-STR");
        m.insert(0x3559, "STRINGS");
        m.insert(0x3564, "BYTE-COMP");
        m.insert(0x356b, "SECND-LOW");
        m.insert(0x3572, "BOTH-NULL");
        m.insert(0x3575, "SEC-PLUS");
        m.insert(0x3585, "FRST-LESS");
        m.insert(0x3588, "STR-TEST");
        m.insert(0x358c, "END-TESTS");
        m.insert(0x359c, "STRS-ADD");
        m.insert(0x35b7, "OTHER-STR");
        m.insert(0x35bf, "STK-PNTRS");
        m.insert(0x35c9, "CHRS");
        m.insert(0x35dc, "REPORT-B");
        m.insert(0x35de, "VAL (ALSO VAL$)");
        m.insert(0x360c, "V-RPORT-C");
        m.insert(0x361f, "STR$");
        m.insert(0x3645, "READ-IN");
        m.insert(0x365f, "R-I-STORE");
        m.insert(0x3669, "CODE");
        m.insert(0x3671, "STK-CODE");
        m.insert(0x3674, "LEN");
        m.insert(0x367a, "DEC-JR-NZ");
        m.insert(0x3686, "JUMP");
        m.insert(0x3687, "JUMP-2");
        m.insert(0x368f, "JUMP-TRUE");
        m.insert(0x369b, "END-CALC");
        m.insert(0x36a0, "N-MOD-M");
        m.insert(0x36af, "INT");
        m.insert(0x36b7, "X-NEG");
        m.insert(0x36c2, "EXIT");
        m.insert(0x36c4, "EXP");
        m.insert(0x3703, "REPORT-6");
        m.insert(0x3705, "N-NEGTV");
        m.insert(0x370c, "RESULT-OK");
        m.insert(0x370e, "RSLT-ZERO");
        m.insert(0x371a, "REPORT-A");
        m.insert(0x371c, "VALID");
        m.insert(0x373d, "GRE.8");
        m.insert(0x3783, "GET-ARGT");
        m.insert(0x37a1, "ZPLUS");
        m.insert(0x37a8, "YNEG");
        m.insert(0x37aa, "COS");
        m.insert(0x37b5, "SIN");
        m.insert(0x37b7, "C-ENT");
        m.insert(0x37da, "TAN");
        m.insert(0x37e2, "ATN");
        m.insert(0x37f8, "SMALL");
        m.insert(0x37fa, "CASES");
        m.insert(0x3833, "ASN");
        m.insert(0x3843, "ACS");
        m.insert(0x384a, "SQR");
        m.insert(0x3851, "TO-POWER");
        m.insert(0x385d, "XIS0");
        m.insert(0x386a, "ONE");
        m.insert(0x386c, "LAST");

        m
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_single_byte_opcodes() {
        let inst = decode_opcode(0x00);
        assert_eq!(inst.inst, InstType::Nop);
        assert_eq!(inst.size, 1);
        assert_eq!(inst.cycles, 4);

        let inst = decode_opcode(0xc3);
        assert_eq!(inst.inst, InstType::Jp);
        assert_eq!(inst.dst, Operand::PC);
        assert_eq!(inst.src, Operand::NN);
        assert_eq!(inst.cond, Condition::Always);
    }

    #[test]
    fn decodes_prefixed_opcodes() {
        let inst = decode_opcode(0xcb00);
        assert_eq!(inst.inst, InstType::Rlc);
        assert_eq!(inst.dst, Operand::B);

        let inst = decode_opcode(0xedb0);
        assert_eq!(inst.inst, InstType::Ldir);
        assert_eq!(inst.cycles, 21);
        assert_eq!(inst.cycles_not_cond, 16);

        let inst = decode_opcode(0xdd21);
        assert_eq!(inst.inst, InstType::Ld);
        assert_eq!(inst.dst, Operand::IX);
    }

    #[test]
    fn decodes_compound_prefixed_opcodes() {
        let inst = decode_opcode(0xddcb46);
        assert_eq!(inst.inst, InstType::Bit);
        assert_eq!(inst.dst, Operand::IndIXd);
        assert_eq!(inst.src, Operand::Zero);
        assert_eq!(inst.size, 4);

        let inst = decode_opcode(0xfdcbfe);
        assert_eq!(inst.inst, InstType::Set);
        assert_eq!(inst.dst, Operand::IndIYd);
        assert_eq!(inst.src, Operand::Seven);
    }

    #[test]
    fn base_page_is_fully_populated() {
        for opcode in 0x00..=0xffu32 {
            // The four prefix bytes never reach the decoder on their own.
            if matches!(opcode, 0xcb | 0xed | 0xdd | 0xfd) {
                continue;
            }
            assert_ne!(
                decode_opcode(opcode).inst,
                InstType::Inv,
                "opcode {:#04x} missing",
                opcode
            );
        }
        for opcode in 0xcb00..=0xcbffu32 {
            assert_ne!(decode_opcode(opcode).inst, InstType::Inv);
        }
    }

    #[test]
    fn unknown_opcodes_fall_back_to_the_sentinel() {
        let inst = decode_opcode(0xed00);
        assert_eq!(inst.inst, InstType::Inv);
        assert_eq!(inst.size, 0);
    }

    #[test]
    fn conditional_entries_carry_both_cycle_counts() {
        let inst = decode_opcode(0x10); // djnz
        assert_eq!(inst.inst, InstType::Djnz);
        assert_eq!(inst.cycles, 13);
        assert_eq!(inst.cycles_not_cond, 8);
        assert_eq!(inst.cond, Condition::NZ);

        let inst = decode_opcode(0xc4); // call nz,**
        assert_eq!(inst.cycles, 17);
        assert_eq!(inst.cycles_not_cond, 10);
    }

    #[test]
    fn rom_labels_resolve() {
        assert!(has_rom_label(0x0000));
        assert_eq!(rom_label(0x0000), Some("START"));
        assert_eq!(rom_label(0x0038), Some("MASK-INT"));
        assert_eq!(rom_label(0x4000), None);
    }
}
