//! Z80 CPU tests: whole instructions executed through the fetch/decode/
//! execute loop, interrupt acceptance, and the refresh register rule.

use super::*;
use crate::bus::Bus;
use crate::registers::Flag;

fn fixture() -> (Z80, Bus) {
    // Fast mode: one instruction per clock call.
    (Z80::new(true), Bus::new(0x10000))
}

/// Runs the single instruction at PC.
fn step(state: &mut Z80, bus: &mut Bus) {
    assert!(state.clock(bus, true), "instruction did not decode");
}

#[test]
fn boot_state() {
    let state = Z80::new(false);
    assert_eq!(state.pc.get(), 0x0000);
    assert_eq!(state.af.get(), 0xffff);
    assert_eq!(state.sp.get(), 0xffff);
    assert!(!state.iff1);
    assert!(!state.iff2);
    assert_eq!(state.int_mode, 0);
}

#[test]
fn ld_immediate_and_register_moves() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    bus.load_block(0x8000, &[0x3e, 0x42]); // ld a,*
    step(&mut state, &mut bus);
    assert_eq!(state.af.accum(), 0x42);
    assert_eq!(state.pc.get(), 0x8002);

    bus.load_block(0x8002, &[0x47]); // ld b,a
    step(&mut state, &mut bus);
    assert_eq!(state.bc.hi(), 0x42);

    bus.load_block(0x8003, &[0x01, 0x34, 0x12]); // ld bc,**
    step(&mut state, &mut bus);
    assert_eq!(state.bc.get(), 0x1234);
}

#[test]
fn ld_sp_records_top_of_stack() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    bus.load_block(0x8000, &[0x31, 0x00, 0xff]); // ld sp,**
    step(&mut state, &mut bus);
    assert_eq!(state.sp.get(), 0xff00);
    assert_eq!(state.top_of_stack, 0xff00);
}

#[test]
fn adc_signed_overflow() {
    // A=0x7f plus 1 overflows into the sign bit.
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    state.af.set_accum(0x7f);
    state.af.set_flag(Flag::Carry, false);
    bus.load_block(0x8000, &[0xce, 0x01]); // adc a,*

    step(&mut state, &mut bus);

    assert_eq!(state.af.accum(), 0x80);
    assert!(state.af.flag(Flag::Sign));
    assert!(!state.af.flag(Flag::Zero));
    assert!(state.af.flag(Flag::HalfCarry));
    assert!(state.af.flag(Flag::ParityOverflow));
    assert!(!state.af.flag(Flag::AddSubtract));
    assert!(!state.af.flag(Flag::Carry));
}

#[test]
fn sbc_16bit_borrow() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    state.hl.set(0x3fff);
    state.de.set(0xffff);
    state.af.set_flag(Flag::Carry, false);
    bus.load_block(0x8000, &[0xed, 0x52]); // sbc hl,de

    step(&mut state, &mut bus);

    assert_eq!(state.hl.get(), 0x4000);
    assert!(state.af.flag(Flag::AddSubtract));
    assert!(state.af.flag(Flag::Carry));
    assert!(!state.af.flag(Flag::ParityOverflow));
}

#[test]
fn add_16bit_leaves_zero_and_sign_alone() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    state.hl.set(0xf000);
    state.bc.set(0x2000);
    state.af.set_flag(Flag::Zero, true);
    state.af.set_flag(Flag::Sign, true);
    bus.load_block(0x8000, &[0x09]); // add hl,bc

    step(&mut state, &mut bus);

    assert_eq!(state.hl.get(), 0x1000);
    assert!(state.af.flag(Flag::Carry));
    assert!(!state.af.flag(Flag::AddSubtract));
    // Z and S survive a 16-bit ADD.
    assert!(state.af.flag(Flag::Zero));
    assert!(state.af.flag(Flag::Sign));
}

#[test]
fn inc_leaves_carry_alone() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    state.af.set_accum(0xff);
    state.af.set_flag(Flag::Carry, false);
    bus.load_block(0x8000, &[0x3c]); // inc a

    step(&mut state, &mut bus);

    assert_eq!(state.af.accum(), 0x00);
    assert!(state.af.flag(Flag::Zero));
    assert!(state.af.flag(Flag::HalfCarry));
    // Carry is never updated by INC.
    assert!(!state.af.flag(Flag::Carry));
}

#[test]
fn inc_16bit_updates_no_flags() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    state.bc.set(0xffff);
    let flags_before = state.af.flags();
    bus.load_block(0x8000, &[0x03]); // inc bc

    step(&mut state, &mut bus);

    assert_eq!(state.bc.get(), 0x0000);
    assert_eq!(state.af.flags(), flags_before);
}

#[test]
fn neg_flags() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    state.af.set_accum(0x28);
    bus.load_block(0x8000, &[0xed, 0x44]); // neg

    step(&mut state, &mut bus);

    assert_eq!(state.af.accum(), 0xd8);
    assert!(state.af.flag(Flag::AddSubtract));
    assert!(state.af.flag(Flag::Carry));
    assert!(state.af.flag(Flag::HalfCarry));
    assert!(!state.af.flag(Flag::ParityOverflow));
    assert!(state.af.flag(Flag::Sign));
    assert!(!state.af.flag(Flag::Zero));

    // The two special cases: 0x80 overflows, 0x00 clears carry.
    state.pc.set(0x8000);
    state.af.set_accum(0x80);
    step(&mut state, &mut bus);
    assert_eq!(state.af.accum(), 0x80);
    assert!(state.af.flag(Flag::ParityOverflow));
    assert!(state.af.flag(Flag::Carry));

    state.pc.set(0x8000);
    state.af.set_accum(0x00);
    step(&mut state, &mut bus);
    assert_eq!(state.af.accum(), 0x00);
    assert!(!state.af.flag(Flag::Carry));
    assert!(state.af.flag(Flag::Zero));
}

#[test]
fn logical_ops_set_parity_from_popcount() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    state.af.set_accum(0b1100_0101);
    bus.load_block(0x8000, &[0xe6, 0b1010_0101]); // and *

    step(&mut state, &mut bus);

    assert_eq!(state.af.accum(), 0b1000_0101);
    assert!(!state.af.flag(Flag::ParityOverflow)); // 3 bits set
    assert!(state.af.flag(Flag::HalfCarry));
    assert!(!state.af.flag(Flag::Carry));

    state.pc.set(0x8000);
    bus.load_block(0x8000, &[0xee, 0b0000_0100]); // xor *
    step(&mut state, &mut bus);
    assert_eq!(state.af.accum(), 0b1000_0001);
    assert!(state.af.flag(Flag::ParityOverflow)); // 2 bits set
    assert!(!state.af.flag(Flag::HalfCarry));

    state.pc.set(0x8000);
    bus.load_block(0x8000, &[0xaf]); // xor a
    step(&mut state, &mut bus);
    assert_eq!(state.af.accum(), 0x00);
    assert!(state.af.flag(Flag::Zero));
    assert!(state.af.flag(Flag::ParityOverflow));
}

#[test]
fn ldir_copies_and_rewinds_pc() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x6000);
    state.hl.set(0x4000);
    state.de.set(0x5000);
    state.bc.set(3);
    bus.load_block(0x4000, &[0xaa, 0xbb, 0xcc]);
    bus.load_block(0x6000, &[0xed, 0xb0]); // ldir

    // One iteration per fetch; PC rewinds while BC is nonzero.
    step(&mut state, &mut bus);
    assert_eq!(state.pc.get(), 0x6000);
    assert_eq!(bus.read_data(0x5000), 0xaa);
    assert_eq!(state.bc.get(), 2);

    step(&mut state, &mut bus);
    step(&mut state, &mut bus);

    assert_eq!(state.pc.get(), 0x6002);
    assert_eq!(bus.read_data(0x5000), 0xaa);
    assert_eq!(bus.read_data(0x5001), 0xbb);
    assert_eq!(bus.read_data(0x5002), 0xcc);
    assert_eq!(state.bc.get(), 0);
    assert_eq!(state.hl.get(), 0x4003);
    assert_eq!(state.de.get(), 0x5003);
    assert!(!state.af.flag(Flag::ParityOverflow));
    assert!(!state.af.flag(Flag::AddSubtract));
    assert!(!state.af.flag(Flag::HalfCarry));
}

#[test]
fn lddr_walks_downwards() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x6000);
    state.hl.set(0x4001);
    state.de.set(0x5001);
    state.bc.set(2);
    bus.load_block(0x4000, &[0x11, 0x22]);
    bus.load_block(0x6000, &[0xed, 0xb8]); // lddr

    step(&mut state, &mut bus);
    step(&mut state, &mut bus);

    assert_eq!(bus.read_data(0x5000), 0x11);
    assert_eq!(bus.read_data(0x5001), 0x22);
    assert_eq!(state.hl.get(), 0x3fff);
    assert_eq!(state.de.get(), 0x4fff);
    assert_eq!(state.pc.get(), 0x6002);
}

#[test]
fn cpir_stops_on_match() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x6000);
    state.hl.set(0x4000);
    state.bc.set(5);
    state.af.set_accum(0xbb);
    bus.load_block(0x4000, &[0xaa, 0xbb, 0xcc]);
    bus.load_block(0x6000, &[0xed, 0xb1]); // cpir

    step(&mut state, &mut bus);
    assert_eq!(state.pc.get(), 0x6000); // no match yet
    assert!(!state.af.flag(Flag::Zero));

    step(&mut state, &mut bus);
    assert_eq!(state.pc.get(), 0x6002); // matched, loop over
    assert!(state.af.flag(Flag::Zero));
    assert!(state.af.flag(Flag::AddSubtract));
    assert_eq!(state.hl.get(), 0x4002);
    assert_eq!(state.bc.get(), 3);
    assert!(state.af.flag(Flag::ParityOverflow));
    // A is never written by the compare.
    assert_eq!(state.af.accum(), 0xbb);
}

#[test]
fn call_and_ret_with_z_condition() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    state.sp.set(0xfff0);
    state.top_of_stack = 0xfff0;
    state.af.set_flag(Flag::Zero, true);
    bus.load_block(0x8000, &[0xcc, 0x00, 0x90]); // call z,0x9000

    step(&mut state, &mut bus);

    assert_eq!(state.sp.get(), 0xffee);
    assert_eq!(state.pc.get(), 0x9000);
    // Little-endian return address on the stack.
    assert_eq!(bus.read_data(0xffee), 0x03);
    assert_eq!(bus.read_data(0xffef), 0x80);

    bus.load_block(0x9000, &[0xc9]); // ret
    step(&mut state, &mut bus);
    assert_eq!(state.sp.get(), 0xfff0);
    assert_eq!(state.pc.get(), 0x8003);
}

#[test]
fn call_not_taken_charges_the_short_count() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    state.sp.set(0xfff0);
    state.af.set_flag(Flag::Zero, false);
    bus.load_block(0x8000, &[0xcc, 0x00, 0x90]); // call z,0x9000

    state.clock(&mut bus, false);

    assert_eq!(state.pc.get(), 0x8003);
    assert_eq!(state.sp.get(), 0xfff0);
    // The short count is charged when the condition fails.
    assert_eq!(state.cycles_left, 10);
}

#[test]
fn jr_takes_signed_displacements() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    bus.load_block(0x8000, &[0x18, 0xfe]); // jr -2: tight loop to itself

    step(&mut state, &mut bus);
    assert_eq!(state.pc.get(), 0x8000);

    state.af.set_flag(Flag::Zero, false);
    bus.load_block(0x8000, &[0x20, 0x10]); // jr nz,+16
    step(&mut state, &mut bus);
    assert_eq!(state.pc.get(), 0x8012);

    state.af.set_flag(Flag::Zero, true);
    state.pc.set(0x8000);
    step(&mut state, &mut bus);
    assert_eq!(state.pc.get(), 0x8002); // not taken
}

#[test]
fn djnz_loops_until_b_reaches_zero() {
    let (mut state, mut bus) = fixture();
    state.bc.set_hi(3);
    bus.load_block(0x8000, &[0x10, 0xfe]); // djnz -2

    state.pc.set(0x8000);
    step(&mut state, &mut bus);
    assert_eq!(state.bc.hi(), 2);
    assert_eq!(state.pc.get(), 0x8000); // jumped back

    step(&mut state, &mut bus);
    assert_eq!(state.bc.hi(), 1);
    assert_eq!(state.pc.get(), 0x8000);

    step(&mut state, &mut bus);
    assert_eq!(state.bc.hi(), 0);
    assert_eq!(state.pc.get(), 0x8002); // fell through
}

#[test]
fn push_pop_round_trip_through_the_stack() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    state.sp.set(0xfff0);
    state.hl.set(0xcafe);
    bus.load_block(0x8000, &[0xe5, 0xd1]); // push hl; pop de

    step(&mut state, &mut bus);
    assert_eq!(state.sp.get(), 0xffee);

    step(&mut state, &mut bus);
    assert_eq!(state.sp.get(), 0xfff0);
    assert_eq!(state.de.get(), 0xcafe);
}

#[test]
fn exchange_family() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    state.de.set(0x1111);
    state.hl.set(0x2222);
    bus.load_block(0x8000, &[0xeb]); // ex de,hl
    step(&mut state, &mut bus);
    assert_eq!(state.de.get(), 0x2222);
    assert_eq!(state.hl.get(), 0x1111);

    // ex (sp),hl swaps with the top of the stack.
    state.sp.set(0x9000);
    bus.write_addr_to_mem(0x9000, 0xbeef);
    bus.load_block(0x8001, &[0xe3]);
    step(&mut state, &mut bus);
    assert_eq!(state.hl.get(), 0xbeef);
    assert_eq!(bus.read_addr_from_mem(0x9000), 0x1111);

    // exx swaps the BC/DE/HL shadow set but not AF.
    state.af.set(0x5a5a);
    bus.load_block(0x8002, &[0xd9]);
    step(&mut state, &mut bus);
    assert_eq!(state.af.get(), 0x5a5a);
    state.hl.swap();
    assert_eq!(state.hl.get(), 0xbeef);
}

#[test]
fn indexed_loads_and_bit_ops() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    state.ix.set(0x9000);
    bus.write_data(0x9005, 0x12);
    bus.load_block(0x8000, &[0xdd, 0x7e, 0x05]); // ld a,(ix+5)
    step(&mut state, &mut bus);
    assert_eq!(state.af.accum(), 0x12);
    assert_eq!(state.pc.get(), 0x8003);

    // set 6,(ix+5): compound prefix, displacement before the opcode byte.
    bus.load_block(0x8003, &[0xdd, 0xcb, 0x05, 0xf6]);
    step(&mut state, &mut bus);
    assert_eq!(bus.read_data(0x9005), 0x52);
    assert_eq!(state.pc.get(), 0x8007);

    // bit 6,(ix+5) finds the bit set.
    bus.load_block(0x8007, &[0xdd, 0xcb, 0x05, 0x76]);
    step(&mut state, &mut bus);
    assert!(!state.af.flag(Flag::Zero));
    assert!(state.af.flag(Flag::HalfCarry));
}

#[test]
fn halt_burns_nops_until_interrupt() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    bus.load_block(0x8000, &[0x76]); // halt

    step(&mut state, &mut bus);
    assert!(state.halted);
    assert_eq!(state.pc.get(), 0x8001);

    // Clocking while halted consumes time but does not advance PC.
    step(&mut state, &mut bus);
    assert!(state.halted);
    assert_eq!(state.pc.get(), 0x8001);

    // A maskable interrupt wakes it up.
    state.iff1 = true;
    state.int_pending = true;
    state.int_mode = 1;
    state.sp.set(0xfff0);
    step(&mut state, &mut bus);
    assert!(!state.halted);
    assert_eq!(state.pc.get(), 0x0038);
}

#[test]
fn im1_interrupt_acceptance() {
    let (mut state, mut bus) = fixture();
    state.iff1 = true;
    state.int_mode = 1;
    state.pc.set(0x1234);
    state.sp.set(0xfff0);
    state.int_pending = true;

    state.clock(&mut bus, true);

    assert_eq!(state.sp.get(), 0xffee);
    assert_eq!(state.pc.get(), 0x0038);
    assert_eq!(bus.read_data(0xffee), 0x34);
    assert_eq!(bus.read_data(0xffef), 0x12);
    assert!(!state.iff1);
    assert!(!state.int_pending);
}

#[test]
fn im2_interrupt_jumps_through_the_vector_table() {
    let (mut state, mut bus) = fixture();
    state.iff1 = true;
    state.int_mode = 2;
    state.ir.set_hi(0x80);
    state.pc.set(0x1234);
    state.sp.set(0xfff0);
    state.int_pending = true;
    bus.write_addr_to_mem(0x8000, 0x9abc);

    state.clock(&mut bus, true);

    assert_eq!(state.pc.get(), 0x9abc);
    assert_eq!(state.sp.get(), 0xffee);
}

#[test]
fn masked_interrupt_is_ignored() {
    let (mut state, mut bus) = fixture();
    state.iff1 = false;
    state.int_mode = 1;
    state.pc.set(0x8000);
    state.int_pending = true;
    bus.load_block(0x8000, &[0x00]); // nop

    state.clock(&mut bus, true);

    assert_eq!(state.pc.get(), 0x8001);
    assert!(state.int_pending); // the line stays up until the ULA drops it
}

#[test]
fn nmi_beats_maskable_interrupt_and_parks_iff1() {
    let (mut state, mut bus) = fixture();
    state.iff1 = true;
    state.iff2 = true;
    state.int_mode = 1;
    state.pc.set(0x1234);
    state.sp.set(0xfff0);
    state.nmi_pending = true;
    state.int_pending = true;

    state.clock(&mut bus, true);

    // NMI first: PC goes to 0x66, IFF1 parked in IFF2 then cleared.
    assert_eq!(state.pc.get(), 0x0066);
    assert!(state.iff2);
    assert!(!state.iff1);
    assert!(!state.nmi_pending);
    assert!(state.int_pending);

    // RETN restores IFF1 from IFF2, after which the maskable line is
    // serviced.
    bus.load_block(0x0066, &[0xed, 0x45]); // retn
    state.clock(&mut bus, true);
    assert_eq!(state.pc.get(), 0x1234);
    assert!(state.iff1);

    state.clock(&mut bus, true);
    assert_eq!(state.pc.get(), 0x0038);
}

#[test]
fn retn_is_decoded_from_rom() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    state.sp.set(0xfff0);
    state.iff2 = true;
    state.iff1 = false;
    bus.write_addr_to_mem(0xfff0, 0x4242);
    bus.load_block(0x8000, &[0xed, 0x45]); // retn

    step(&mut state, &mut bus);

    assert_eq!(state.pc.get(), 0x4242);
    assert!(state.iff1);
}

#[test]
fn refresh_register_increments_modulo_128() {
    let (mut state, mut bus) = fixture();
    state.ir.set_lo(0xfe); // bit 7 set, counter at 0x7e
    state.pc.set(0x8000);
    bus.load_block(0x8000, &[0x00, 0x00, 0x00]); // nops

    step(&mut state, &mut bus);
    assert_eq!(state.ir.lo(), 0xff);
    step(&mut state, &mut bus);
    // Counter wraps within the low 7 bits; bit 7 survives.
    assert_eq!(state.ir.lo(), 0x80);
    step(&mut state, &mut bus);
    assert_eq!(state.ir.lo(), 0x81);
}

#[test]
fn prefixed_fetches_bump_r_twice() {
    let (mut state, mut bus) = fixture();
    state.ir.set_lo(0x00);
    state.pc.set(0x8000);
    bus.load_block(0x8000, &[0xcb, 0x27]); // sla a

    step(&mut state, &mut bus);
    assert_eq!(state.ir.lo(), 0x02);
}

#[test]
fn cycle_pacing_spreads_an_instruction_over_ticks() {
    let mut bus = Bus::new(0x10000);
    let mut state = Z80::new(false);
    state.pc.set(0x8000);
    bus.load_block(0x8000, &[0x01, 0x34, 0x12]); // ld bc,** : 10 T-states

    assert!(state.clock(&mut bus, false));
    assert_eq!(state.pc.get(), 0x8003);
    assert_eq!(state.cycles_left, 10);

    // Ten more ticks drain the charge before the next fetch.
    for _ in 0..10 {
        assert!(state.clock(&mut bus, false));
    }
    assert_eq!(state.cycles_left, 0);
}

#[test]
fn unknown_opcode_reports_and_stops() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    bus.load_block(0x8000, &[0xed, 0x00]); // undecodable

    assert!(!state.clock(&mut bus, true));
    // PC is left alone.
    assert_eq!(state.pc.get(), 0x8000);
}

#[test]
fn daa_adjusts_after_bcd_add() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    // 0x15 + 0x27 = 0x3c, DAA folds it to BCD 42.
    state.af.set_accum(0x15);
    bus.load_block(0x8000, &[0xc6, 0x27, 0x27]); // add a,* ; daa

    step(&mut state, &mut bus);
    assert_eq!(state.af.accum(), 0x3c);

    step(&mut state, &mut bus);
    assert_eq!(state.af.accum(), 0x42);
    assert!(!state.af.flag(Flag::Carry));
}

#[test]
fn rlca_keeps_sign_zero_parity() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    state.af.set_accum(0x81);
    state.af.set_flag(Flag::Zero, true);
    bus.load_block(0x8000, &[0x07]); // rlca

    step(&mut state, &mut bus);

    assert_eq!(state.af.accum(), 0x03);
    assert!(state.af.flag(Flag::Carry));
    assert!(state.af.flag(Flag::Zero)); // untouched

    // The CB-prefixed form updates the full set.
    state.af.set_accum(0x81);
    bus.load_block(0x8001, &[0xcb, 0x07]); // rlc a
    step(&mut state, &mut bus);
    assert_eq!(state.af.accum(), 0x03);
    assert!(!state.af.flag(Flag::Zero));
    assert!(state.af.flag(Flag::ParityOverflow));
}

#[test]
fn in_from_port_c_reads_the_keyboard_idle_pattern() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    state.bc.set(0xfefe); // ULA port, top half-row
    bus.load_block(0x8000, &[0xed, 0x78]); // in a,(c)

    step(&mut state, &mut bus);

    assert_eq!(state.af.accum() & 0x1f, 0x1f);
    assert!(!state.af.flag(Flag::Zero));
    assert!(!state.af.flag(Flag::AddSubtract));
}

#[test]
fn out_to_ula_latches_border() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    state.af.set_accum(0x02);
    bus.load_block(0x8000, &[0xd3, 0xfe]); // out (*),a

    step(&mut state, &mut bus);

    assert_eq!(bus.border_colour(), 0x02);
}

#[test]
fn rst_pushes_and_jumps_to_fixed_entry() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    state.sp.set(0xfff0);
    bus.load_block(0x8000, &[0xdf]); // rst 18h

    step(&mut state, &mut bus);

    assert_eq!(state.pc.get(), 0x0018);
    assert_eq!(state.sp.get(), 0xffee);
    assert_eq!(bus.read_addr_from_mem(0xffee), 0x8001);
}

#[test]
fn scf_ccf_record_carry_history() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    state.af.set_flags(0);
    bus.load_block(0x8000, &[0x37, 0x3f]); // scf ; ccf

    step(&mut state, &mut bus);
    assert!(state.af.flag(Flag::Carry));
    assert!(!state.af.flag(Flag::HalfCarry));

    step(&mut state, &mut bus);
    assert!(!state.af.flag(Flag::Carry));
    // CCF parks the old carry in H.
    assert!(state.af.flag(Flag::HalfCarry));
}

#[test]
fn ld_through_memory_is_rom_guarded() {
    let (mut state, mut bus) = fixture();
    state.pc.set(0x8000);
    state.af.set_accum(0x99);
    bus.load_block(0x8000, &[0x32, 0x00, 0x10]); // ld (0x1000),a

    step(&mut state, &mut bus);

    // The write landed in ROM space and was dropped.
    assert_eq!(bus.read_data(0x1000), 0x00);
}
