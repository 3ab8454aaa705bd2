//! Instruction descriptors and the execution engine.
//!
//! A descriptor is an immutable table entry: instruction type, mnemonic,
//! size, cycle budgets, condition code and the two operand tags. Execution
//! materialises both operands as storage elements and dispatches one handler
//! per instruction type; every handler returns the number of T-states to
//! charge.

use crate::bus::Bus;
use crate::cpu::Z80;
use crate::registers::Flag;
use crate::storage::StorageElement;

/// Operand tags resolved by the storage element factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    AF,
    BC,
    DE,
    HL,
    SP,
    PC,
    IX,
    IY,
    A,
    B,
    C,
    D,
    E,
    H,
    L,
    I,
    R,
    IXH,
    IXL,
    IYH,
    IYL,
    N,
    NN,
    PortC,
    PortN,
    IndBC,
    IndDE,
    IndHL,
    IndSP,
    IndN,
    IndNN,
    IndIXd,
    IndIYd,
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Hex0000,
    Hex0008,
    Hex0010,
    Hex0018,
    Hex0020,
    Hex0028,
    Hex0030,
    Hex0038,
    IntMode,
    Unused,
}

/// Condition codes for conditional transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    Z,
    NZ,
    C,
    NC,
    M,
    P,
    PE,
    PO,
    Unused,
}

/// Instruction type tags, one per handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstType {
    Nop,
    Ld,
    Ldd,
    Lddr,
    Ldi,
    Ldir,
    Cpi,
    Cpir,
    Cpd,
    Cpdr,
    Xor,
    And,
    Or,
    Jp,
    Jr,
    Djnz,
    Call,
    Ret,
    Retn,
    Reti,
    Push,
    Pop,
    Ex,
    Bit,
    Set,
    Res,
    Add,
    Adc,
    Sub,
    Sbc,
    Inc,
    Dec,
    Cp,
    Im,
    Di,
    Ei,
    In,
    Out,
    Rlc,
    Rl,
    Rrc,
    Rr,
    Sla,
    Sll,
    Sra,
    Srl,
    Rlca,
    Rla,
    Rrca,
    Rra,
    Rld,
    Scf,
    Ccf,
    Cpl,
    Rst,
    Halt,
    Daa,
    Neg,
    Inv,
}

/// An immutable instruction table entry.
#[derive(Debug, Clone)]
pub struct Instruction {
    pub inst: InstType,
    pub name: &'static str,
    pub size: u16,
    pub cycles: u32,
    /// Cycle count charged when a conditional transfer or block repeat is
    /// not taken; zero means "same as `cycles`".
    pub cycles_not_cond: u32,
    pub cond: Condition,
    pub dst: Operand,
    pub src: Operand,
}

impl Instruction {
    pub const fn new(inst: InstType, name: &'static str, size: u16, cycles: u32) -> Self {
        Instruction {
            inst,
            name,
            size,
            cycles,
            cycles_not_cond: 0,
            cond: Condition::Unused,
            dst: Operand::Unused,
            src: Operand::Unused,
        }
    }

    pub const fn dst(mut self, dst: Operand) -> Self {
        self.dst = dst;
        self
    }

    pub const fn src(mut self, src: Operand) -> Self {
        self.src = src;
        self
    }

    pub const fn cond(mut self, cond: Condition) -> Self {
        self.cond = cond;
        self
    }

    pub const fn not_taken(mut self, cycles: u32) -> Self {
        self.cycles_not_cond = cycles;
        self
    }

    fn cycles_when_not_taken(&self) -> u32 {
        if self.cycles_not_cond != 0 {
            self.cycles_not_cond
        } else {
            self.cycles
        }
    }

    /// Executes the instruction against the CPU state. Returns the T-states
    /// consumed. PC has already been advanced past the instruction; only the
    /// block-repeat handlers rewind it.
    pub fn execute(&self, state: &mut Z80, bus: &mut Bus) -> u32 {
        let mut dst_elem = StorageElement::from_operand(state, bus, self.dst);
        let mut src_elem = StorageElement::from_operand(state, bus, self.src);

        match self.inst {
            InstType::Nop => self.cycles,
            InstType::Ld => self.do_ld(state, bus, &mut dst_elem, &src_elem),
            InstType::Ldd => self.impl_ld_block(state, bus, &mut dst_elem, &src_elem, false, false),
            InstType::Lddr => self.impl_ld_block(state, bus, &mut dst_elem, &src_elem, false, true),
            InstType::Ldi => self.impl_ld_block(state, bus, &mut dst_elem, &src_elem, true, false),
            InstType::Ldir => self.impl_ld_block(state, bus, &mut dst_elem, &src_elem, true, true),
            InstType::Cpi => self.impl_cp_block(state, bus, true, false),
            InstType::Cpir => self.impl_cp_block(state, bus, true, true),
            InstType::Cpd => self.impl_cp_block(state, bus, false, false),
            InstType::Cpdr => self.impl_cp_block(state, bus, false, true),
            InstType::Xor => self.do_xor(state, bus, &mut dst_elem, &src_elem),
            InstType::And => self.do_and(state, bus, &mut dst_elem, &src_elem),
            InstType::Or => self.do_or(state, bus, &mut dst_elem, &src_elem),
            InstType::Jp => self.do_jp(state, bus, &mut dst_elem, &src_elem),
            InstType::Jr => self.do_jr(state, bus, &mut dst_elem, &src_elem),
            InstType::Djnz => self.do_djnz(state, bus, &mut dst_elem, &src_elem),
            InstType::Call => self.do_call(state, bus, &mut dst_elem, &src_elem),
            InstType::Ret => self.do_ret(state, bus, &mut dst_elem),
            InstType::Retn => self.do_retn(state, bus, &mut dst_elem),
            InstType::Reti => self.impl_ret(state, bus, &mut dst_elem),
            InstType::Push => self.do_push(state, bus, &src_elem),
            InstType::Pop => self.do_pop(state, bus, &mut dst_elem),
            InstType::Ex => self.do_ex(state, bus, &mut dst_elem, &mut src_elem),
            InstType::Bit => self.do_bit(state, bus, &dst_elem, &src_elem),
            InstType::Set => self.impl_set_bit(state, bus, &mut dst_elem, &src_elem, true),
            InstType::Res => self.impl_set_bit(state, bus, &mut dst_elem, &src_elem, false),
            InstType::Add => self.impl_add(state, bus, &mut dst_elem, &src_elem, false),
            InstType::Adc => self.impl_adc(state, bus, &mut dst_elem, &src_elem),
            InstType::Sub => self.impl_sub(state, bus, &mut dst_elem, &src_elem, true, false),
            InstType::Sbc => self.impl_sbc(state, bus, &mut dst_elem, &src_elem),
            InstType::Inc => self.impl_add(state, bus, &mut dst_elem, &src_elem, true),
            InstType::Dec => self.impl_sub(state, bus, &mut dst_elem, &src_elem, true, true),
            InstType::Cp => self.impl_sub(state, bus, &mut dst_elem, &src_elem, false, false),
            InstType::Im => self.do_im(state, bus, &mut dst_elem, &src_elem),
            InstType::Di => self.do_di(state),
            InstType::Ei => self.do_ei(state),
            InstType::In => self.do_in(state, bus, &mut dst_elem, &src_elem),
            InstType::Out => self.do_out(state, bus, &dst_elem, &src_elem),
            InstType::Rlc => self.impl_rotate_left(state, bus, &mut dst_elem, true, false),
            InstType::Rl => self.impl_rotate_left(state, bus, &mut dst_elem, true, true),
            InstType::Rrc => self.impl_rotate_right(state, bus, &mut dst_elem, true, false),
            InstType::Rr => self.impl_rotate_right(state, bus, &mut dst_elem, true, true),
            InstType::Rlca => self.impl_rotate_left(state, bus, &mut dst_elem, false, false),
            InstType::Rla => self.impl_rotate_left(state, bus, &mut dst_elem, false, true),
            InstType::Rrca => self.impl_rotate_right(state, bus, &mut dst_elem, false, false),
            InstType::Rra => self.impl_rotate_right(state, bus, &mut dst_elem, false, true),
            InstType::Sla => self.impl_shift_left(state, bus, &mut dst_elem, false),
            InstType::Sll => self.impl_shift_left(state, bus, &mut dst_elem, true),
            InstType::Sra => self.impl_shift_right(state, bus, &mut dst_elem, false),
            InstType::Srl => self.impl_shift_right(state, bus, &mut dst_elem, true),
            InstType::Rld => self.do_rld(state, bus),
            InstType::Scf => self.do_scf(state),
            InstType::Ccf => self.do_ccf(state),
            InstType::Cpl => self.do_cpl(state),
            InstType::Rst => self.do_rst(state, bus, &mut dst_elem, &src_elem),
            InstType::Halt => self.do_halt(state),
            InstType::Daa => self.do_daa(state, bus, &mut dst_elem, &src_elem),
            InstType::Neg => self.do_neg(state, bus, &mut dst_elem, &src_elem),
            InstType::Inv => {
                // The clock loop refuses to execute INVALID entries; getting
                // here is a decoder bug.
                panic!("attempted to execute INVALID instruction")
            }
        }
    }

    fn do_ld(&self, state: &mut Z80, bus: &mut Bus, dst: &mut StorageElement, src: &StorageElement) -> u32 {
        if self.dst == Operand::SP {
            // Track the expected top of stack for the debugger's stack dump.
            state.top_of_stack = src.to_u32(state, bus) as u16;
        }
        dst.store_from(state, bus, src);

        self.cycles
    }

    fn impl_ld_block(
        &self,
        state: &mut Z80,
        bus: &mut Bus,
        dst: &mut StorageElement,
        src: &StorageElement,
        inc: bool,
        repeat: bool,
    ) -> u32 {
        dst.store_from(state, bus, src);

        let adjust = if inc { 1u16 } else { 0xffff };
        state.de.set(state.de.get().wrapping_add(adjust));
        state.hl.set(state.hl.get().wrapping_add(adjust));
        state.bc.set(state.bc.get().wrapping_sub(1));

        state.af.set_flag(Flag::AddSubtract, false);
        state.af.set_flag(Flag::ParityOverflow, state.bc.get() != 0);
        state.af.set_flag(Flag::HalfCarry, false);

        if repeat && state.bc.get() != 0 {
            state.pc.set(state.pc.get().wrapping_sub(self.size));
            return self.cycles;
        }

        self.cycles_when_not_taken()
    }

    fn impl_cp_block(&self, state: &mut Z80, bus: &mut Bus, inc: bool, repeat: bool) -> u32 {
        let reg_a = StorageElement::from_operand(state, bus, Operand::A);
        let ind_hl = StorageElement::from_operand(state, bus, Operand::IndHL);

        // CP (HL): flags only, A is not stored.
        let result = reg_a.sub(&ind_hl, state, bus);
        let set_z = result.is_zero(state, bus);

        let adjust = if inc { 1u16 } else { 0xffff };
        state.hl.set(state.hl.get().wrapping_add(adjust));
        state.bc.set(state.bc.get().wrapping_sub(1));

        // Z reflects the comparison made before HL moved.
        state.af.set_flag(Flag::Sign, result.is_neg(state, bus));
        state.af.set_flag(Flag::Zero, set_z);
        state.af.set_flag(Flag::HalfCarry, result.is_half());
        state.af.set_flag(Flag::AddSubtract, true);
        state.af.set_flag(Flag::ParityOverflow, state.bc.get() != 0);

        if repeat && state.bc.get() != 0 && !set_z {
            state.pc.set(state.pc.get().wrapping_sub(self.size));
            return self.cycles;
        }

        self.cycles_when_not_taken()
    }

    fn do_xor(&self, state: &mut Z80, bus: &mut Bus, dst: &mut StorageElement, src: &StorageElement) -> u32 {
        dst.xor_with(src, state, bus);

        state.af.set_flag(Flag::Carry, false);
        state.af.set_flag(Flag::AddSubtract, false);
        state.af.set_flag(Flag::ParityOverflow, dst.is_even_parity(state, bus));
        state.af.set_flag(Flag::HalfCarry, false);
        state.af.set_flag(Flag::Zero, dst.is_zero(state, bus));
        state.af.set_flag(Flag::Sign, dst.is_neg(state, bus));

        self.cycles
    }

    fn do_and(&self, state: &mut Z80, bus: &mut Bus, dst: &mut StorageElement, src: &StorageElement) -> u32 {
        dst.and_with(src, state, bus);

        state.af.set_flag(Flag::Carry, false);
        state.af.set_flag(Flag::AddSubtract, false);
        state.af.set_flag(Flag::ParityOverflow, dst.is_even_parity(state, bus));
        state.af.set_flag(Flag::HalfCarry, true);
        state.af.set_flag(Flag::Zero, dst.is_zero(state, bus));
        state.af.set_flag(Flag::Sign, dst.is_neg(state, bus));

        self.cycles
    }

    fn do_or(&self, state: &mut Z80, bus: &mut Bus, dst: &mut StorageElement, src: &StorageElement) -> u32 {
        dst.or_with(src, state, bus);

        state.af.set_flag(Flag::Carry, false);
        state.af.set_flag(Flag::AddSubtract, false);
        state.af.set_flag(Flag::ParityOverflow, dst.is_even_parity(state, bus));
        state.af.set_flag(Flag::HalfCarry, false);
        state.af.set_flag(Flag::Zero, dst.is_zero(state, bus));
        state.af.set_flag(Flag::Sign, dst.is_neg(state, bus));

        self.cycles
    }

    fn do_jp(&self, state: &mut Z80, bus: &mut Bus, dst: &mut StorageElement, src: &StorageElement) -> u32 {
        assert_eq!(self.dst, Operand::PC, "jp must target PC");

        if self.is_cond_set(state) {
            dst.store_from(state, bus, src);
            return self.cycles;
        }

        self.cycles_when_not_taken()
    }

    fn do_jr(&self, state: &mut Z80, bus: &mut Bus, dst: &mut StorageElement, src: &StorageElement) -> u32 {
        assert_eq!(self.dst, Operand::PC, "jr must target PC");

        if self.is_cond_set(state) {
            let target = dst.add(src, state, bus);
            dst.store_from(state, bus, &target);
            return self.cycles;
        }

        self.cycles_when_not_taken()
    }

    fn do_djnz(&self, state: &mut Z80, bus: &mut Bus, dst: &mut StorageElement, src: &StorageElement) -> u32 {
        assert_eq!(self.dst, Operand::PC, "djnz must target PC");
        assert_eq!(self.cond, Condition::NZ, "djnz is always conditional on NZ");

        // Decrement B; jump while it has not reached zero.
        state.bc.set_hi(state.bc.hi().wrapping_sub(1));
        if state.bc.hi() != 0 {
            let target = dst.add(src, state, bus);
            dst.store_from(state, bus, &target);
            return self.cycles;
        }

        self.cycles_when_not_taken()
    }

    fn do_call(&self, state: &mut Z80, bus: &mut Bus, dst: &mut StorageElement, src: &StorageElement) -> u32 {
        assert_eq!(self.dst, Operand::PC, "call must target PC");

        if self.is_cond_set(state) {
            let new_sp = dst.push(state, bus, state.sp.get());
            state.sp.set(new_sp);
            dst.store_from(state, bus, src);
            return self.cycles;
        }

        self.cycles_when_not_taken()
    }

    fn do_ret(&self, state: &mut Z80, bus: &mut Bus, dst: &mut StorageElement) -> u32 {
        assert_eq!(self.dst, Operand::PC, "ret must target PC");

        if self.is_cond_set(state) {
            return self.impl_ret(state, bus, dst);
        }

        self.cycles_when_not_taken()
    }

    fn do_retn(&self, state: &mut Z80, bus: &mut Bus, dst: &mut StorageElement) -> u32 {
        state.iff1 = state.iff2;
        self.impl_ret(state, bus, dst)
    }

    fn impl_ret(&self, state: &mut Z80, bus: &mut Bus, pc: &mut StorageElement) -> u32 {
        let new_sp = pc.pop(state, bus, state.sp.get());
        state.sp.set(new_sp);

        self.cycles
    }

    fn do_push(&self, state: &mut Z80, bus: &mut Bus, src: &StorageElement) -> u32 {
        let new_sp = src.push(state, bus, state.sp.get());
        state.sp.set(new_sp);

        self.cycles
    }

    fn do_pop(&self, state: &mut Z80, bus: &mut Bus, dst: &mut StorageElement) -> u32 {
        let new_sp = dst.pop(state, bus, state.sp.get());
        state.sp.set(new_sp);

        self.cycles
    }

    fn do_ex(&self, state: &mut Z80, bus: &mut Bus, dst: &mut StorageElement, src: &mut StorageElement) -> u32 {
        if self.dst == Operand::Unused && self.src == Operand::Unused {
            // EXX swaps the BC/DE/HL shadow set.
            state.hl.swap();
            state.bc.swap();
            state.de.swap();
        } else if self.dst == Operand::AF && self.src == Operand::Unused {
            // EX AF,AF' swaps only the AF pair.
            state.af.swap();
        } else {
            dst.swap_with(src, state, bus);
        }

        self.cycles
    }

    fn do_bit(&self, state: &mut Z80, bus: &mut Bus, dst: &StorageElement, src: &StorageElement) -> u32 {
        let is_set = dst.get_bit(src, state, bus);
        state.af.set_flag(Flag::AddSubtract, false);
        state.af.set_flag(Flag::HalfCarry, true);
        state.af.set_flag(Flag::Zero, !is_set);

        self.cycles
    }

    fn impl_set_bit(
        &self,
        state: &mut Z80,
        bus: &mut Bus,
        dst: &mut StorageElement,
        src: &StorageElement,
        set: bool,
    ) -> u32 {
        if set {
            dst.set_bit(src, state, bus);
        } else {
            dst.reset_bit(src, state, bus);
        }

        self.cycles
    }

    /// ADD and INC share this path; INC never touches the carry flag and the
    /// 16-bit forms update a reduced flag set (none at all for INC).
    fn impl_add(
        &self,
        state: &mut Z80,
        bus: &mut Bus,
        dst: &mut StorageElement,
        src: &StorageElement,
        is_inc: bool,
    ) -> u32 {
        let result = dst.add(src, state, bus);

        let reduced_flags = dst.is_16bit();
        if !(is_inc && reduced_flags) {
            if !is_inc {
                state.af.set_flag(Flag::Carry, result.is_carry());
            }
            state.af.set_flag(Flag::AddSubtract, false);
            state.af.set_flag(Flag::HalfCarry, result.is_half());
            if !reduced_flags {
                state.af.set_flag(Flag::ParityOverflow, result.is_overflow());
                state.af.set_flag(Flag::Zero, result.is_zero(state, bus));
                state.af.set_flag(Flag::Sign, result.is_neg(state, bus));
            }
        }

        dst.store_from(state, bus, &result);

        self.cycles
    }

    fn impl_adc(&self, state: &mut Z80, bus: &mut Bus, dst: &mut StorageElement, src: &StorageElement) -> u32 {
        let carry = state.af.flag(Flag::Carry);
        let result = dst.add_carry(src, carry, state, bus);

        state.af.set_flag(Flag::Carry, result.is_carry());
        state.af.set_flag(Flag::AddSubtract, false);
        state.af.set_flag(Flag::HalfCarry, result.is_half());
        state.af.set_flag(Flag::ParityOverflow, result.is_overflow());
        state.af.set_flag(Flag::Zero, result.is_zero(state, bus));
        state.af.set_flag(Flag::Sign, result.is_neg(state, bus));

        dst.store_from(state, bus, &result);

        self.cycles
    }

    /// SUB, CP and DEC share this path; CP discards the result, DEC keeps
    /// the carry flag and drops all flag updates for 16-bit operands.
    fn impl_sub(
        &self,
        state: &mut Z80,
        bus: &mut Bus,
        dst: &mut StorageElement,
        src: &StorageElement,
        store: bool,
        is_dec: bool,
    ) -> u32 {
        let result = dst.sub(src, state, bus);

        let reduced_flags = dst.is_16bit();
        if !(is_dec && reduced_flags) {
            if !is_dec {
                state.af.set_flag(Flag::Carry, result.is_carry());
            }
            state.af.set_flag(Flag::AddSubtract, true);
            state.af.set_flag(Flag::HalfCarry, result.is_half());
            state.af.set_flag(Flag::ParityOverflow, result.is_overflow());
            state.af.set_flag(Flag::Zero, result.is_zero(state, bus));
            state.af.set_flag(Flag::Sign, result.is_neg(state, bus));
        }

        if store {
            dst.store_from(state, bus, &result);
        }

        self.cycles
    }

    fn impl_sbc(&self, state: &mut Z80, bus: &mut Bus, dst: &mut StorageElement, src: &StorageElement) -> u32 {
        let carry = state.af.flag(Flag::Carry);
        let result = dst.sub_carry(src, carry, state, bus);

        state.af.set_flag(Flag::Carry, result.is_carry());
        state.af.set_flag(Flag::AddSubtract, true);
        state.af.set_flag(Flag::HalfCarry, result.is_half());
        state.af.set_flag(Flag::ParityOverflow, result.is_overflow());
        state.af.set_flag(Flag::Zero, result.is_zero(state, bus));
        state.af.set_flag(Flag::Sign, result.is_neg(state, bus));

        dst.store_from(state, bus, &result);

        self.cycles
    }

    fn do_im(&self, state: &mut Z80, bus: &mut Bus, dst: &mut StorageElement, src: &StorageElement) -> u32 {
        dst.store_from(state, bus, src);

        self.cycles
    }

    fn do_di(&self, state: &mut Z80) -> u32 {
        state.iff1 = false;
        state.iff2 = false;

        self.cycles
    }

    fn do_ei(&self, state: &mut Z80) -> u32 {
        state.iff1 = true;
        state.iff2 = true;

        self.cycles
    }

    fn do_in(&self, state: &mut Z80, bus: &mut Bus, dst: &mut StorageElement, src: &StorageElement) -> u32 {
        // A load with a port as the source; the source element is the
        // read-only composed 16-bit port address ({C,B} or {N,A}).
        assert!(
            self.src == Operand::PortC || self.src == Operand::PortN,
            "in needs a port source"
        );
        assert!(src.is_16bit());

        let port = src.to_u32(state, bus) as u16;
        let byte = StorageElement::inline_u8(bus.read_port(port));
        dst.store_from(state, bus, &byte);

        if self.src == Operand::PortC {
            // Only 'in r,(c)' updates the status flags.
            state.af.set_flag(Flag::AddSubtract, false);
            state.af.set_flag(Flag::ParityOverflow, dst.is_even_parity(state, bus));
            state.af.set_flag(Flag::HalfCarry, false);
            state.af.set_flag(Flag::Zero, dst.is_zero(state, bus));
            state.af.set_flag(Flag::Sign, dst.is_neg(state, bus));
        }

        self.cycles
    }

    fn do_out(&self, state: &mut Z80, bus: &mut Bus, dst: &StorageElement, src: &StorageElement) -> u32 {
        assert!(
            self.dst == Operand::PortC || self.dst == Operand::PortN,
            "out needs a port destination"
        );
        assert!(dst.is_16bit());
        assert!(src.is_8bit());

        let port = dst.to_u32(state, bus) as u16;
        let byte = src.to_u32(state, bus) as u8;
        bus.write_port(port, byte);

        self.cycles
    }

    fn impl_rotate_left(
        &self,
        state: &mut Z80,
        bus: &mut Bus,
        elem: &mut StorageElement,
        full_flags: bool,
        through_carry: bool,
    ) -> u32 {
        let carry_in = state.af.flag(Flag::Carry);
        elem.rotate_left(through_carry, carry_in, state, bus);

        state.af.set_flag(Flag::Carry, elem.is_carry());
        state.af.set_flag(Flag::AddSubtract, false);
        state.af.set_flag(Flag::HalfCarry, false);

        // The accumulator shorthands (RLCA/RLA) leave S/Z/PV alone.
        if full_flags {
            state.af.set_flag(Flag::ParityOverflow, elem.is_even_parity(state, bus));
            state.af.set_flag(Flag::Zero, elem.is_zero(state, bus));
            state.af.set_flag(Flag::Sign, elem.is_neg(state, bus));
        }

        self.cycles
    }

    fn impl_rotate_right(
        &self,
        state: &mut Z80,
        bus: &mut Bus,
        elem: &mut StorageElement,
        full_flags: bool,
        through_carry: bool,
    ) -> u32 {
        let carry_in = state.af.flag(Flag::Carry);
        elem.rotate_right(through_carry, carry_in, state, bus);

        state.af.set_flag(Flag::Carry, elem.is_carry());
        state.af.set_flag(Flag::AddSubtract, false);
        state.af.set_flag(Flag::HalfCarry, false);

        if full_flags {
            state.af.set_flag(Flag::ParityOverflow, elem.is_even_parity(state, bus));
            state.af.set_flag(Flag::Zero, elem.is_zero(state, bus));
            state.af.set_flag(Flag::Sign, elem.is_neg(state, bus));
        }

        self.cycles
    }

    fn impl_shift_left(&self, state: &mut Z80, bus: &mut Bus, elem: &mut StorageElement, logical: bool) -> u32 {
        elem.shift_left(logical, state, bus);

        state.af.set_flag(Flag::Carry, elem.is_carry());
        state.af.set_flag(Flag::AddSubtract, false);
        state.af.set_flag(Flag::HalfCarry, false);
        state.af.set_flag(Flag::ParityOverflow, elem.is_even_parity(state, bus));
        state.af.set_flag(Flag::Zero, elem.is_zero(state, bus));
        state.af.set_flag(Flag::Sign, elem.is_neg(state, bus));

        self.cycles
    }

    fn impl_shift_right(&self, state: &mut Z80, bus: &mut Bus, elem: &mut StorageElement, logical: bool) -> u32 {
        elem.shift_right(logical, state, bus);

        state.af.set_flag(Flag::Carry, elem.is_carry());
        state.af.set_flag(Flag::AddSubtract, false);
        state.af.set_flag(Flag::HalfCarry, false);
        state.af.set_flag(Flag::ParityOverflow, elem.is_even_parity(state, bus));
        state.af.set_flag(Flag::Zero, elem.is_zero(state, bus));
        state.af.set_flag(Flag::Sign, elem.is_neg(state, bus));

        self.cycles
    }

    /// RLD rotates the low nibble of A through the two nibbles of (HL).
    fn do_rld(&self, state: &mut Z80, bus: &mut Bus) -> u32 {
        let mut reg_a = StorageElement::from_operand(state, bus, Operand::A);
        let mut ind_hl = StorageElement::from_operand(state, bus, Operand::IndHL);

        let a = reg_a.to_u32(state, bus);
        let m = ind_hl.to_u32(state, bus);

        let new_a = (a & 0xf0) | ((m >> 4) & 0x0f);
        let new_m = ((m << 4) & 0xf0) | (a & 0x0f);

        reg_a.from_u32(state, bus, new_a);
        ind_hl.from_u32(state, bus, new_m);

        state.af.set_flag(Flag::AddSubtract, false);
        state.af.set_flag(Flag::HalfCarry, false);
        state.af.set_flag(Flag::ParityOverflow, reg_a.is_even_parity(state, bus));
        state.af.set_flag(Flag::Zero, reg_a.is_zero(state, bus));
        state.af.set_flag(Flag::Sign, reg_a.is_neg(state, bus));

        self.cycles
    }

    fn do_scf(&self, state: &mut Z80) -> u32 {
        state.af.set_flag(Flag::Carry, true);
        state.af.set_flag(Flag::AddSubtract, false);
        state.af.set_flag(Flag::HalfCarry, false);

        self.cycles
    }

    fn do_ccf(&self, state: &mut Z80) -> u32 {
        // The previous carry is recorded in H.
        let old_carry = state.af.flag(Flag::Carry);

        state.af.inv_flag(Flag::Carry);
        state.af.set_flag(Flag::AddSubtract, false);
        state.af.set_flag(Flag::HalfCarry, old_carry);

        self.cycles
    }

    fn do_cpl(&self, state: &mut Z80) -> u32 {
        let accum = state.af.accum();
        state.af.set_accum(!accum);

        state.af.set_flag(Flag::AddSubtract, true);
        state.af.set_flag(Flag::HalfCarry, true);

        self.cycles
    }

    fn do_rst(&self, state: &mut Z80, bus: &mut Bus, dst: &mut StorageElement, src: &StorageElement) -> u32 {
        assert_eq!(self.dst, Operand::PC, "rst must target PC");

        let new_sp = dst.push(state, bus, state.sp.get());
        state.sp.set(new_sp);
        dst.store_from(state, bus, src);

        self.cycles
    }

    fn do_halt(&self, state: &mut Z80) -> u32 {
        state.halted = true;

        self.cycles
    }

    fn do_daa(&self, state: &mut Z80, bus: &mut Bus, dst: &mut StorageElement, src: &StorageElement) -> u32 {
        assert_eq!(self.dst, Operand::A, "daa works on the accumulator");

        let val = src.to_u32(state, bus) as u8;
        let mut new_carry = state.af.flag(Flag::Carry);

        let mut sum = 0u8;
        if state.af.flag(Flag::HalfCarry) || (val & 0x0f) > 9 {
            sum = 0x06;
        }
        if state.af.flag(Flag::Carry) || val > 0x99 {
            sum |= 0x60;
            new_carry = true;
        }

        let adjust = StorageElement::inline_u8(sum);
        let result = if state.af.flag(Flag::AddSubtract) {
            src.sub(&adjust, state, bus)
        } else {
            src.add(&adjust, state, bus)
        };
        dst.store_from(state, bus, &result);

        state.af.set_flag(Flag::Carry, new_carry);
        state.af.set_flag(Flag::HalfCarry, result.is_half());
        state.af.set_flag(Flag::ParityOverflow, dst.is_even_parity(state, bus));
        state.af.set_flag(Flag::Zero, dst.is_zero(state, bus));
        state.af.set_flag(Flag::Sign, dst.is_neg(state, bus));

        self.cycles
    }

    fn do_neg(&self, state: &mut Z80, bus: &mut Bus, dst: &mut StorageElement, src: &StorageElement) -> u32 {
        assert_eq!(self.dst, Operand::A, "neg works on the accumulator");

        let value = src.to_u32(state, bus);
        let zero = StorageElement::inline_u8(0);
        let result = zero.sub(src, state, bus);
        dst.store_from(state, bus, &result);

        state.af.set_flag(Flag::AddSubtract, true);
        state.af.set_flag(Flag::Carry, value != 0x00);
        state.af.set_flag(Flag::HalfCarry, result.is_half());
        state.af.set_flag(Flag::ParityOverflow, value == 0x80);
        state.af.set_flag(Flag::Zero, dst.is_zero(state, bus));
        state.af.set_flag(Flag::Sign, dst.is_neg(state, bus));

        self.cycles
    }

    fn is_cond_set(&self, state: &Z80) -> bool {
        match self.cond {
            Condition::Always => true,
            Condition::Z => state.af.flag(Flag::Zero),
            Condition::NZ => !state.af.flag(Flag::Zero),
            Condition::C => state.af.flag(Flag::Carry),
            Condition::NC => !state.af.flag(Flag::Carry),
            Condition::M => state.af.flag(Flag::Sign),
            Condition::P => !state.af.flag(Flag::Sign),
            Condition::PE => state.af.flag(Flag::ParityOverflow),
            Condition::PO => !state.af.flag(Flag::ParityOverflow),
            Condition::Unused => panic!("unhandled condition on {}", self.name),
        }
    }
}
