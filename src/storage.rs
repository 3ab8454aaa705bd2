//! The storage element: a uniform operand handle over register halves,
//! register pairs, memory cells, immediates and synthetic literals.
//!
//! Every instruction handler works against two of these without caring what
//! backs them. An element is a tagged write-back location plus a byte count
//! (1 or 2) and three scratch flags left behind by its own arithmetic, so the
//! CPU flag update is a single read afterwards.

use crate::bus::Bus;
use crate::cpu::Z80;
use crate::instruction::Operand;

/// Register pair selector used by element locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegSel {
    AF,
    BC,
    DE,
    HL,
    IX,
    IY,
    SP,
    PC,
    IR,
}

#[derive(Debug, Clone, Copy)]
enum Location {
    /// Whole 16-bit register pair.
    Pair(RegSel),
    /// High byte of a pair.
    Hi(RegSel),
    /// Low byte of a pair.
    Lo(RegSel),
    /// Absolute bus address (width given by the element count).
    Mem(u16),
    /// The interrupt mode latch.
    IntMode,
    /// Read-only inline buffer: immediates, literals, composed port
    /// addresses and arithmetic results.
    Inline([u8; 2]),
    /// Placeholder for instructions that take no operand. Must never be
    /// read or written.
    Unused,
}

#[derive(Debug, Clone, Copy)]
pub struct StorageElement {
    loc: Location,
    count: usize,
    flag_carry: bool,
    flag_half_carry: bool,
    flag_overflow: bool,
}

fn sign_extend(d: u8) -> u16 {
    d as i8 as i16 as u16
}

impl StorageElement {
    fn new(loc: Location, count: usize) -> Self {
        StorageElement {
            loc,
            count,
            flag_carry: false,
            flag_half_carry: false,
            flag_overflow: false,
        }
    }

    fn unused() -> Self {
        Self::new(Location::Unused, 0)
    }

    /// Read-only 8-bit inline element.
    pub fn inline_u8(v: u8) -> Self {
        Self::new(Location::Inline([v, 0]), 1)
    }

    /// Read-only 16-bit inline element from low/high bytes.
    pub fn inline_u16(lo: u8, hi: u8) -> Self {
        Self::new(Location::Inline([lo, hi]), 2)
    }

    /// Inline element of the given width from a raw value.
    fn inline(v: u32, count: usize) -> Self {
        assert!(count == 1 || count == 2, "bad element width {}", count);
        Self::new(Location::Inline([(v & 0xff) as u8, ((v >> 8) & 0xff) as u8]), count)
    }

    /// Binds an element to the source named by `operand`. This is the only
    /// place the operand stream pointer (`curr_operand_pc`) advances.
    pub fn from_operand(state: &mut Z80, bus: &Bus, operand: Operand) -> Self {
        match operand {
            Operand::AF => Self::new(Location::Pair(RegSel::AF), 2),
            Operand::BC => Self::new(Location::Pair(RegSel::BC), 2),
            Operand::DE => Self::new(Location::Pair(RegSel::DE), 2),
            Operand::HL => Self::new(Location::Pair(RegSel::HL), 2),
            Operand::SP => Self::new(Location::Pair(RegSel::SP), 2),
            Operand::PC => Self::new(Location::Pair(RegSel::PC), 2),
            Operand::IX => Self::new(Location::Pair(RegSel::IX), 2),
            Operand::IY => Self::new(Location::Pair(RegSel::IY), 2),
            Operand::A => Self::new(Location::Hi(RegSel::AF), 1),
            Operand::B => Self::new(Location::Hi(RegSel::BC), 1),
            Operand::C => Self::new(Location::Lo(RegSel::BC), 1),
            Operand::D => Self::new(Location::Hi(RegSel::DE), 1),
            Operand::E => Self::new(Location::Lo(RegSel::DE), 1),
            Operand::H => Self::new(Location::Hi(RegSel::HL), 1),
            Operand::L => Self::new(Location::Lo(RegSel::HL), 1),
            Operand::I => Self::new(Location::Hi(RegSel::IR), 1),
            Operand::R => Self::new(Location::Lo(RegSel::IR), 1),
            Operand::IXH => Self::new(Location::Hi(RegSel::IX), 1),
            Operand::IXL => Self::new(Location::Lo(RegSel::IX), 1),
            Operand::IYH => Self::new(Location::Hi(RegSel::IY), 1),
            Operand::IYL => Self::new(Location::Lo(RegSel::IY), 1),
            Operand::N => {
                let byte = bus.read_data(state.curr_operand_pc);
                state.curr_operand_pc = state.curr_operand_pc.wrapping_add(1);
                Self::inline_u8(byte)
            }
            Operand::NN => {
                let lo = bus.read_data(state.curr_operand_pc);
                let hi = bus.read_data(state.curr_operand_pc.wrapping_add(1));
                state.curr_operand_pc = state.curr_operand_pc.wrapping_add(2);
                Self::inline_u16(lo, hi)
            }
            Operand::PortC => Self::inline_u16(state.bc.lo(), state.bc.hi()),
            Operand::PortN => {
                let byte = bus.read_data(state.curr_operand_pc);
                state.curr_operand_pc = state.curr_operand_pc.wrapping_add(1);
                Self::inline_u16(byte, state.af.accum())
            }
            Operand::IndBC => Self::new(Location::Mem(state.bc.get()), 1),
            Operand::IndDE => Self::new(Location::Mem(state.de.get()), 1),
            Operand::IndHL => Self::new(Location::Mem(state.hl.get()), 1),
            Operand::IndSP => Self::new(Location::Mem(state.sp.get()), 2),
            Operand::IndN => {
                let addr = bus.read_addr_from_mem(state.curr_operand_pc);
                Self::new(Location::Mem(addr), 1)
            }
            Operand::IndNN => {
                let addr = bus.read_addr_from_mem(state.curr_operand_pc);
                Self::new(Location::Mem(addr), 2)
            }
            Operand::IndIXd => {
                let offset = sign_extend(bus.read_data(state.curr_operand_pc));
                state.curr_operand_pc = state.curr_operand_pc.wrapping_add(1);
                Self::new(Location::Mem(state.ix.get().wrapping_add(offset)), 1)
            }
            Operand::IndIYd => {
                let offset = sign_extend(bus.read_data(state.curr_operand_pc));
                state.curr_operand_pc = state.curr_operand_pc.wrapping_add(1);
                Self::new(Location::Mem(state.iy.get().wrapping_add(offset)), 1)
            }
            Operand::Zero => Self::inline_u8(0x00),
            Operand::One => Self::inline_u8(0x01),
            Operand::Two => Self::inline_u8(0x02),
            Operand::Three => Self::inline_u8(0x03),
            Operand::Four => Self::inline_u8(0x04),
            Operand::Five => Self::inline_u8(0x05),
            Operand::Six => Self::inline_u8(0x06),
            Operand::Seven => Self::inline_u8(0x07),
            Operand::Hex0000 => Self::inline_u16(0x00, 0x00),
            Operand::Hex0008 => Self::inline_u16(0x08, 0x00),
            Operand::Hex0010 => Self::inline_u16(0x10, 0x00),
            Operand::Hex0018 => Self::inline_u16(0x18, 0x00),
            Operand::Hex0020 => Self::inline_u16(0x20, 0x00),
            Operand::Hex0028 => Self::inline_u16(0x28, 0x00),
            Operand::Hex0030 => Self::inline_u16(0x30, 0x00),
            Operand::Hex0038 => Self::inline_u16(0x38, 0x00),
            Operand::IntMode => Self::new(Location::IntMode, 1),
            Operand::Unused => Self::unused(),
        }
    }

    /// Unsigned view of the element.
    pub fn to_u32(&self, state: &Z80, bus: &Bus) -> u32 {
        match self.loc {
            Location::Pair(sel) => state.reg_word(sel) as u32,
            Location::Hi(sel) => state.reg_hi(sel) as u32,
            Location::Lo(sel) => state.reg_lo(sel) as u32,
            Location::Mem(addr) => match self.count {
                1 => bus.read_data(addr) as u32,
                2 => bus.read_addr_from_mem(addr) as u32,
                _ => panic!("unexpected element width {}", self.count),
            },
            Location::IntMode => state.int_mode as u32,
            Location::Inline(buf) => match self.count {
                1 => buf[0] as u32,
                2 => (buf[0] as u32) | ((buf[1] as u32) << 8),
                _ => panic!("unexpected element width {}", self.count),
            },
            Location::Unused => panic!("read from unused storage element"),
        }
    }

    /// Signed view at the element's width.
    pub fn to_s32(&self, state: &Z80, bus: &Bus) -> i32 {
        let v = self.to_u32(state, bus);
        match self.count {
            1 => v as u8 as i8 as i32,
            2 => v as u16 as i16 as i32,
            _ => panic!("unexpected element width {}", self.count),
        }
    }

    /// Unsigned view truncated to half the element width (low nibble of an
    /// 8-bit element, low byte of a 16-bit one).
    fn to_u32_half(&self, state: &Z80, bus: &Bus) -> u32 {
        let v = self.to_u32(state, bus);
        match self.count {
            1 => v & 0x0f,
            2 => v & 0xff,
            _ => panic!("unexpected element width {}", self.count),
        }
    }

    /// Writes a raw value through to the backing location. Inline buffers
    /// are mutated locally; in-place operators rely on this.
    pub fn from_u32(&mut self, state: &mut Z80, bus: &mut Bus, v: u32) {
        match self.loc {
            Location::Pair(sel) => state.set_reg_word(sel, v as u16),
            Location::Hi(sel) => state.set_reg_hi(sel, v as u8),
            Location::Lo(sel) => state.set_reg_lo(sel, v as u8),
            Location::Mem(addr) => match self.count {
                1 => bus.write_data(addr, v as u8),
                2 => bus.write_addr_to_mem(addr, v as u16),
                _ => panic!("unexpected element width {}", self.count),
            },
            Location::IntMode => state.int_mode = v as u8,
            Location::Inline(ref mut buf) => {
                buf[0] = (v & 0xff) as u8;
                buf[1] = ((v >> 8) & 0xff) as u8;
            }
            Location::Unused => panic!("write to unused storage element"),
        }
    }

    fn is_readonly(&self) -> bool {
        matches!(self.loc, Location::Inline(_))
    }

    /// Copy-assignment from another element: value and scratch flags. A
    /// no-op when the destination is a read-only inline buffer.
    pub fn store_from(&mut self, state: &mut Z80, bus: &mut Bus, rhs: &StorageElement) {
        assert_eq!(self.count, rhs.count, "element width mismatch in copy");
        if !self.is_readonly() {
            let v = rhs.to_u32(state, bus);
            self.from_u32(state, bus, v);
        }
        self.flag_carry = rhs.flag_carry;
        self.flag_half_carry = rhs.flag_half_carry;
        self.flag_overflow = rhs.flag_overflow;
    }

    fn significant_bit(v: u32, count: usize, is_half: bool) -> bool {
        let div = if is_half { 2 } else { 1 };
        let mask = 1u32 << ((8 * count / div) - 1);
        (v & mask) != 0
    }

    /// Carry heuristic for addition: both significant bits set, or exactly
    /// one set while the result's is clear.
    fn update_carry(&mut self, op1: u32, op2: u32, state: &Z80, bus: &Bus, is_half: bool) {
        let res_bit = Self::significant_bit(self.to_u32(state, bus), self.count, is_half);
        let op1_bit = Self::significant_bit(op1, self.count, is_half);
        let op2_bit = Self::significant_bit(op2, self.count, is_half);

        let v = (op1_bit && op2_bit) || ((op1_bit ^ op2_bit) && !res_bit);

        if is_half {
            self.flag_half_carry = v;
        } else {
            self.flag_carry = v;
        }
    }

    /// Borrow test for subtraction: `op1 < op2 + carry_in` at full or half
    /// width.
    fn update_borrow(&mut self, op1_half: u32, op2_half: u32, op1: u32, op2: u32, carry: u32) {
        self.flag_half_carry = op1_half < op2_half + carry;
        self.flag_carry = op1 < op2 + carry;
    }

    /// Signed overflow on the operand and result sign bits; the second
    /// operand's sign is flipped in the addition form of the test.
    fn update_overflow(&mut self, op1: u32, op2: u32, state: &Z80, bus: &Bus, is_sub: bool) {
        let res_bit = Self::significant_bit(self.to_u32(state, bus), self.count, false);
        let op1_bit = Self::significant_bit(op1, self.count, false);
        let mut op2_bit = Self::significant_bit(op2, self.count, false);

        if !is_sub {
            op2_bit = !op2_bit;
        }

        self.flag_overflow = (op1_bit ^ res_bit) & (op1_bit ^ op2_bit);
    }

    /// `self + rhs` as a new inline element carrying carry/half/overflow.
    pub fn add(&self, rhs: &StorageElement, state: &Z80, bus: &Bus) -> StorageElement {
        let mut result = Self::inline(
            (self.to_s32(state, bus) + rhs.to_s32(state, bus)) as u32,
            self.count,
        );
        let (op1, op2) = (self.to_u32(state, bus), rhs.to_u32(state, bus));
        result.update_carry(op1, op2, state, bus, false);
        result.update_carry(op1, op2, state, bus, true);
        result.update_overflow(op1, op2, state, bus, false);
        result
    }

    /// `self + rhs + carry` as a new inline element.
    pub fn add_carry(&self, rhs: &StorageElement, carry: bool, state: &Z80, bus: &Bus) -> StorageElement {
        let c = carry as u32;
        let mut result = Self::inline(
            self.to_u32(state, bus).wrapping_add(rhs.to_u32(state, bus)).wrapping_add(c),
            self.count,
        );
        let (op1, op2) = (self.to_u32(state, bus), rhs.to_u32(state, bus));
        result.update_carry(op1, op2, state, bus, false);
        result.update_carry(op1, op2, state, bus, true);
        result.update_overflow(op1, op2, state, bus, false);
        result
    }

    /// `self - rhs` as a new inline element.
    pub fn sub(&self, rhs: &StorageElement, state: &Z80, bus: &Bus) -> StorageElement {
        let mut result = Self::inline(
            (self.to_s32(state, bus) - rhs.to_s32(state, bus)) as u32,
            self.count,
        );
        result.update_borrow(
            self.to_u32_half(state, bus),
            rhs.to_u32_half(state, bus),
            self.to_u32(state, bus),
            rhs.to_u32(state, bus),
            0,
        );
        result.update_overflow(self.to_u32(state, bus), rhs.to_u32(state, bus), state, bus, true);
        result
    }

    /// `self - rhs - carry` as a new inline element.
    pub fn sub_carry(&self, rhs: &StorageElement, carry: bool, state: &Z80, bus: &Bus) -> StorageElement {
        let c = carry as u32;
        let mut result = Self::inline(
            (self.to_s32(state, bus) - rhs.to_s32(state, bus) - c as i32) as u32,
            self.count,
        );
        result.update_borrow(
            self.to_u32_half(state, bus),
            rhs.to_u32_half(state, bus),
            self.to_u32(state, bus),
            rhs.to_u32(state, bus),
            c,
        );
        result.update_overflow(self.to_u32(state, bus), rhs.to_u32(state, bus), state, bus, true);
        result
    }

    pub fn xor_with(&mut self, rhs: &StorageElement, state: &mut Z80, bus: &mut Bus) {
        let v = self.to_u32(state, bus) ^ rhs.to_u32(state, bus);
        self.from_u32(state, bus, v);
    }

    pub fn and_with(&mut self, rhs: &StorageElement, state: &mut Z80, bus: &mut Bus) {
        let v = self.to_u32(state, bus) & rhs.to_u32(state, bus);
        self.from_u32(state, bus, v);
    }

    pub fn or_with(&mut self, rhs: &StorageElement, state: &mut Z80, bus: &mut Bus) {
        let v = self.to_u32(state, bus) | rhs.to_u32(state, bus);
        self.from_u32(state, bus, v);
    }

    /// Exchange the backing bytes of two elements of equal width.
    pub fn swap_with(&mut self, rhs: &mut StorageElement, state: &mut Z80, bus: &mut Bus) {
        assert_eq!(self.count, rhs.count, "element width mismatch in swap");
        let a = self.to_u32(state, bus);
        let b = rhs.to_u32(state, bus);
        self.from_u32(state, bus, b);
        rhs.from_u32(state, bus, a);
    }

    pub fn get_bit(&self, bit: &StorageElement, state: &Z80, bus: &Bus) -> bool {
        let mask = 1 << bit.to_u32(state, bus);
        (self.to_u32(state, bus) & mask) != 0
    }

    pub fn set_bit(&mut self, bit: &StorageElement, state: &mut Z80, bus: &mut Bus) {
        let v = self.to_u32(state, bus) | (1 << bit.to_u32(state, bus));
        self.from_u32(state, bus, v);
    }

    pub fn reset_bit(&mut self, bit: &StorageElement, state: &mut Z80, bus: &mut Bus) {
        let v = self.to_u32(state, bus) & !(1 << bit.to_u32(state, bus)) & 0xff;
        self.from_u32(state, bus, v);
    }

    /// Push the 16-bit element: high byte at `addr - 1`, low at `addr - 2`.
    /// Returns the new stack pointer.
    pub fn push(&self, state: &Z80, bus: &mut Bus, addr: u16) -> u16 {
        assert!(self.is_16bit(), "push needs a 16-bit element");
        let v = self.to_u32(state, bus);
        bus.write_data(addr.wrapping_sub(1), ((v >> 8) & 0xff) as u8);
        bus.write_data(addr.wrapping_sub(2), (v & 0xff) as u8);
        addr.wrapping_sub(2)
    }

    /// Pop into the 16-bit element: low byte from `addr`, high from
    /// `addr + 1`. Returns the new stack pointer.
    pub fn pop(&mut self, state: &mut Z80, bus: &mut Bus, addr: u16) -> u16 {
        assert!(self.is_16bit(), "pop needs a 16-bit element");
        let lo = bus.read_data(addr) as u32;
        let hi = bus.read_data(addr.wrapping_add(1)) as u32;
        self.from_u32(state, bus, (hi << 8) | lo);
        addr.wrapping_add(2)
    }

    /// Single-bit left rotate. `through_carry` feeds the old carry flag in
    /// at bit 0, otherwise the bit rotated out comes back around. The bit
    /// shifted out lands in the element's carry flag.
    pub fn rotate_left(&mut self, through_carry: bool, carry_in: bool, state: &mut Z80, bus: &mut Bus) {
        assert!(self.is_8bit(), "rotate needs an 8-bit element");
        let val = self.to_u32(state, bus);
        let msb = val & 0x80;

        self.flag_carry = msb != 0;

        let mut v = (val << 1) & 0xfe;
        if through_carry {
            v |= carry_in as u32;
        } else {
            v |= (msb != 0) as u32;
        }
        self.from_u32(state, bus, v & 0xff);
    }

    /// Single-bit right rotate; see [`StorageElement::rotate_left`].
    pub fn rotate_right(&mut self, through_carry: bool, carry_in: bool, state: &mut Z80, bus: &mut Bus) {
        assert!(self.is_8bit(), "rotate needs an 8-bit element");
        let val = self.to_u32(state, bus);
        let lsb = val & 0x01;

        self.flag_carry = lsb != 0;

        let mut v = (val >> 1) & 0x7f;
        if through_carry {
            v |= (carry_in as u32) << 7;
        } else {
            v |= ((lsb != 0) as u32) << 7;
        }
        self.from_u32(state, bus, v & 0xff);
    }

    /// Single-bit left shift. The `logical` form (SLL) shifts a 1 into bit
    /// 0; the arithmetic form (SLA) shifts in 0.
    pub fn shift_left(&mut self, logical: bool, state: &mut Z80, bus: &mut Bus) {
        assert!(self.is_8bit(), "shift needs an 8-bit element");
        let val = self.to_u32(state, bus);
        let msb = val & 0x80;

        self.flag_carry = msb != 0;

        let mut v = val << 1;
        if logical {
            v |= 0x01;
        } else {
            v &= 0xfe;
        }
        self.from_u32(state, bus, v & 0xff);
    }

    /// Single-bit right shift. The `logical` form (SRL) clears bit 7; the
    /// arithmetic form (SRA) keeps the sign bit.
    pub fn shift_right(&mut self, logical: bool, state: &mut Z80, bus: &mut Bus) {
        assert!(self.is_8bit(), "shift needs an 8-bit element");
        let val = self.to_u32(state, bus);
        let msb = val & 0x80;
        let lsb = val & 0x01;

        self.flag_carry = lsb != 0;

        let mut v = (val >> 1) & 0x7f;
        if !logical {
            v |= msb;
        }
        self.from_u32(state, bus, v & 0xff);
    }

    pub fn is_zero(&self, state: &Z80, bus: &Bus) -> bool {
        self.to_u32(state, bus) == 0
    }

    pub fn is_neg(&self, state: &Z80, bus: &Bus) -> bool {
        self.to_s32(state, bus) < 0
    }

    pub fn is_even_parity(&self, state: &Z80, bus: &Bus) -> bool {
        self.to_u32(state, bus).count_ones() % 2 == 0
    }

    pub fn is_carry(&self) -> bool {
        self.flag_carry
    }

    pub fn is_half(&self) -> bool {
        self.flag_half_carry
    }

    pub fn is_overflow(&self) -> bool {
        self.flag_overflow
    }

    pub fn is_8bit(&self) -> bool {
        self.count == 1
    }

    pub fn is_16bit(&self) -> bool {
        self.count == 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::Bus;
    use crate::cpu::Z80;

    fn fixture() -> (Z80, Bus) {
        (Z80::new(true), Bus::new(0x10000))
    }

    struct AdcCase {
        op1: u8,
        op2: u8,
        carry_in: u8,
        result: u8,
        carry_out: u8,
        overflow: u8,
    }

    macro_rules! adc_case {
        ($op1:expr, $op2:expr, $cin:expr, $res:expr, $cout:expr, $ovf:expr) => {
            AdcCase {
                op1: $op1,
                op2: $op2,
                carry_in: $cin,
                result: $res,
                carry_out: $cout,
                overflow: $ovf,
            }
        };
    }

    #[test]
    fn add_with_carry_result_and_flags() {
        let (state, bus) = fixture();

        // Boundary grid over 0/1/127/128/129/255 with and without carry-in.
        let cases = [
            adc_case!(0, 0, 0, 0, 0, 0),
            adc_case!(0, 255, 0, 255, 0, 0),
            adc_case!(1, 127, 0, 128, 0, 1),
            adc_case!(1, 255, 0, 0, 1, 0),
            adc_case!(127, 1, 0, 128, 0, 1),
            adc_case!(127, 127, 0, 254, 0, 1),
            adc_case!(127, 129, 0, 0, 1, 0),
            adc_case!(127, 255, 0, 126, 1, 0),
            adc_case!(128, 127, 0, 255, 0, 0),
            adc_case!(128, 128, 0, 0, 1, 1),
            adc_case!(128, 255, 0, 127, 1, 1),
            adc_case!(129, 127, 0, 0, 1, 0),
            adc_case!(129, 128, 0, 1, 1, 1),
            adc_case!(255, 1, 0, 0, 1, 0),
            adc_case!(255, 128, 0, 127, 1, 1),
            adc_case!(255, 255, 0, 254, 1, 0),
            adc_case!(0, 127, 1, 128, 0, 1),
            adc_case!(0, 255, 1, 0, 1, 0),
            adc_case!(1, 127, 1, 129, 0, 1),
            adc_case!(127, 0, 1, 128, 0, 1),
            adc_case!(127, 127, 1, 255, 0, 1),
            adc_case!(127, 128, 1, 0, 1, 0),
            adc_case!(128, 127, 1, 0, 1, 0),
            adc_case!(128, 128, 1, 1, 1, 1),
            adc_case!(255, 0, 1, 0, 1, 0),
            adc_case!(255, 127, 1, 127, 1, 0),
            adc_case!(255, 255, 1, 255, 1, 0),
        ];

        for (i, case) in cases.iter().enumerate() {
            let dst = StorageElement::inline_u8(case.op1);
            let src = StorageElement::inline_u8(case.op2);
            let result = dst.add_carry(&src, case.carry_in != 0, &state, &bus);

            assert_eq!(
                result.to_u32(&state, &bus),
                case.result as u32,
                "case {}: {} + {} + {}",
                i,
                case.op1,
                case.op2,
                case.carry_in
            );
            assert_eq!(result.is_carry(), case.carry_out != 0, "case {} carry", i);
            assert_eq!(result.is_overflow(), case.overflow != 0, "case {} overflow", i);
        }
    }

    #[test]
    fn add_with_carry_16bit() {
        let (state, bus) = fixture();

        let cases: [(u16, u16, u16, u8, u8); 10] = [
            (0, 0, 0, 0, 0),
            (1, 32767, 32768, 0, 1),
            (1, 65535, 0, 1, 0),
            (32767, 1, 32768, 0, 1),
            (32767, 32769, 0, 1, 0),
            (32768, 32768, 0, 1, 1),
            (32768, 65535, 32767, 1, 1),
            (65535, 1, 0, 1, 0),
            (65535, 32768, 32767, 1, 1),
            (65535, 65535, 65534, 1, 0),
        ];

        for (i, &(op1, op2, expect, carry, overflow)) in cases.iter().enumerate() {
            let dst = StorageElement::inline_u16((op1 & 0xff) as u8, (op1 >> 8) as u8);
            let src = StorageElement::inline_u16((op2 & 0xff) as u8, (op2 >> 8) as u8);
            let result = dst.add_carry(&src, false, &state, &bus);

            assert_eq!(result.to_u32(&state, &bus), expect as u32, "case {}", i);
            assert_eq!(result.is_carry(), carry != 0, "case {} carry", i);
            assert_eq!(result.is_overflow(), overflow != 0, "case {} overflow", i);
        }
    }

    #[test]
    fn sub_with_carry_result_and_flags() {
        let (state, bus) = fixture();

        let cases = [
            adc_case!(0, 0, 0, 0, 0, 0),
            adc_case!(0, 1, 0, 255, 1, 0),
            adc_case!(0, 128, 0, 128, 1, 1),
            adc_case!(1, 128, 0, 129, 1, 1),
            adc_case!(1, 129, 0, 128, 1, 1),
            adc_case!(127, 128, 0, 255, 1, 1),
            adc_case!(127, 255, 0, 128, 1, 1),
            adc_case!(128, 1, 0, 127, 0, 1),
            adc_case!(128, 127, 0, 1, 0, 1),
            adc_case!(128, 129, 0, 255, 1, 0),
            adc_case!(129, 127, 0, 2, 0, 1),
            adc_case!(255, 127, 0, 128, 0, 0),
            adc_case!(255, 255, 0, 0, 0, 0),
            adc_case!(0, 0, 1, 255, 1, 0),
            adc_case!(1, 0, 1, 0, 0, 0),
            adc_case!(1, 1, 1, 255, 1, 0),
            adc_case!(127, 127, 1, 255, 1, 0),
            adc_case!(127, 128, 1, 254, 1, 1),
            adc_case!(128, 0, 1, 127, 0, 1),
            adc_case!(128, 127, 1, 0, 0, 1),
            adc_case!(128, 128, 1, 255, 1, 0),
            adc_case!(129, 1, 1, 127, 0, 1),
            adc_case!(255, 127, 1, 127, 0, 1),
            adc_case!(255, 255, 1, 255, 1, 0),
        ];

        for (i, case) in cases.iter().enumerate() {
            let dst = StorageElement::inline_u8(case.op1);
            let src = StorageElement::inline_u8(case.op2);
            let result = dst.sub_carry(&src, case.carry_in != 0, &state, &bus);

            assert_eq!(
                result.to_u32(&state, &bus),
                case.result as u32,
                "case {}: {} - {} - {}",
                i,
                case.op1,
                case.op2,
                case.carry_in
            );
            assert_eq!(result.is_carry(), case.carry_out != 0, "case {} carry", i);
            assert_eq!(result.is_overflow(), case.overflow != 0, "case {} overflow", i);
        }
    }

    #[test]
    fn sub_with_carry_16bit() {
        let (state, bus) = fixture();

        let cases: [(u16, u16, u16, u8, u8); 8] = [
            (0, 1, 65535, 1, 0),
            (0, 32768, 32768, 1, 1),
            (16383, 65535, 16384, 1, 0),
            (32767, 32768, 65535, 1, 1),
            (32768, 1, 32767, 0, 1),
            (32768, 32769, 65535, 1, 0),
            (65535, 32767, 32768, 0, 0),
            (65535, 65535, 0, 0, 0),
        ];

        for (i, &(op1, op2, expect, carry, overflow)) in cases.iter().enumerate() {
            let dst = StorageElement::inline_u16((op1 & 0xff) as u8, (op1 >> 8) as u8);
            let src = StorageElement::inline_u16((op2 & 0xff) as u8, (op2 >> 8) as u8);
            let result = dst.sub_carry(&src, false, &state, &bus);

            assert_eq!(result.to_u32(&state, &bus), expect as u32, "case {}", i);
            assert_eq!(result.is_carry(), carry != 0, "case {} carry", i);
            assert_eq!(result.is_overflow(), overflow != 0, "case {} overflow", i);
        }
    }

    #[test]
    fn half_carry_tracks_low_nibble() {
        let (state, bus) = fixture();

        let a = StorageElement::inline_u8(0x7f);
        let one = StorageElement::inline_u8(0x01);
        let result = a.add_carry(&one, false, &state, &bus);
        assert!(result.is_half());

        let b = StorageElement::inline_u8(0x10);
        let result = b.sub(&one, &state, &bus);
        assert!(result.is_half());

        let c = StorageElement::inline_u8(0x18);
        let result = c.sub(&one, &state, &bus);
        assert!(!result.is_half());
    }

    #[test]
    fn push_pop_round_trip() {
        let (mut state, mut bus) = fixture();
        state.hl.set(0xbeef);

        let hl = StorageElement::from_operand(&mut state, &bus, Operand::HL);
        let sp = hl.push(&state, &mut bus, 0x8000);
        assert_eq!(sp, 0x7ffe);
        assert_eq!(bus.read_data(0x7fff), 0xbe);
        assert_eq!(bus.read_data(0x7ffe), 0xef);

        let mut de = StorageElement::from_operand(&mut state, &bus, Operand::DE);
        let sp = de.pop(&mut state, &mut bus, sp);
        assert_eq!(sp, 0x8000);
        assert_eq!(state.de.get(), 0xbeef);
    }

    #[test]
    fn rotates_and_shifts() {
        let (mut state, mut bus) = fixture();
        state.af.set_accum(0b1000_0001);

        let mut a = StorageElement::from_operand(&mut state, &bus, Operand::A);
        a.rotate_left(false, false, &mut state, &mut bus);
        assert_eq!(state.af.accum(), 0b0000_0011);
        assert!(a.is_carry());

        state.af.set_accum(0b1000_0000);
        let mut a = StorageElement::from_operand(&mut state, &bus, Operand::A);
        a.rotate_left(true, false, &mut state, &mut bus);
        assert_eq!(state.af.accum(), 0b0000_0000);
        assert!(a.is_carry());

        state.af.set_accum(0b1000_0001);
        let mut a = StorageElement::from_operand(&mut state, &bus, Operand::A);
        a.shift_right(false, &mut state, &mut bus);
        assert_eq!(state.af.accum(), 0b1100_0000);
        assert!(a.is_carry());

        state.af.set_accum(0b1000_0001);
        let mut a = StorageElement::from_operand(&mut state, &bus, Operand::A);
        a.shift_right(true, &mut state, &mut bus);
        assert_eq!(state.af.accum(), 0b0100_0000);
        assert!(a.is_carry());
    }

    #[test]
    fn indexed_operand_applies_signed_displacement() {
        let (mut state, mut bus) = fixture();
        state.ix.set(0x8000);
        state.curr_operand_pc = 0x6000;
        bus.write_data(0x6000, 0xfe); // -2
        bus.write_data(0x7ffe, 0x42);

        let elem = StorageElement::from_operand(&mut state, &bus, Operand::IndIXd);
        assert_eq!(state.curr_operand_pc, 0x6001);
        assert_eq!(elem.to_u32(&state, &bus), 0x42);
    }

    #[test]
    fn immediate_operands_advance_the_stream() {
        let (mut state, mut bus) = fixture();
        state.curr_operand_pc = 0x5000;
        bus.write_data(0x5000, 0x34);
        bus.write_data(0x5001, 0x12);

        let nn = StorageElement::from_operand(&mut state, &bus, Operand::NN);
        assert_eq!(state.curr_operand_pc, 0x5002);
        assert_eq!(nn.to_u32(&state, &bus), 0x1234);
    }

    #[test]
    fn parity_query_counts_bits() {
        let (state, bus) = fixture();
        assert!(StorageElement::inline_u8(0x00).is_even_parity(&state, &bus));
        assert!(StorageElement::inline_u8(0x03).is_even_parity(&state, &bus));
        assert!(!StorageElement::inline_u8(0x01).is_even_parity(&state, &bus));
        assert!(StorageElement::inline_u8(0xff).is_even_parity(&state, &bus));
    }
}
