//! CPU state, bus primitives, addressing-mode resolution, and the
//! fetch/decode/execute step driver.

use bitflags::bitflags;
use phf::phf_map;

use crate::bus::{Bus, CpuSnapshot};

bitflags! {
    /// Bit layout of the 6502 status register.
    ///
    /// More info: <https://www.nesdev.org/obelisk-6502-guide/registers.html>
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StatusFlags: u8 {
        const CARRY             = 1 << 0;
        const ZERO              = 1 << 1;
        const INTERRUPT_DISABLE = 1 << 2;
        const DECIMAL           = 1 << 3;
        const BREAK             = 1 << 4;
        const UNUSED            = 1 << 5;
        const OVERFLOW          = 1 << 6;
        const NEGATIVE          = 1 << 7;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    IndirectX,
    IndirectY,
}

/// The registers and tick counter of an emulated 6502, plus the bus it is
/// wired to.
#[derive(Debug)]
pub struct Cpu {
    /// Program counter: address of the next opcode byte.
    pub pc: u16,
    /// Stack pointer; the effective stack address is `0x0100 + sp`.
    pub sp: u8,
    /// Accumulator.
    pub a: u8,
    /// Index register X.
    pub x: u8,
    /// Index register Y.
    pub y: u8,
    /// Status register.
    pub p: StatusFlags,
    /// Monotonic bus-cycle counter. Never decreases; untouched by `reset`.
    pub ticks: u64,
    pub bus: Bus,
}

/// One entry in the opcode dispatch table.
#[derive(Clone, Copy)]
pub(crate) struct OpcodeEntry {
    pub mnemonic: &'static str,
    pub base_ticks: u8,
    pub addressing_mode: AddressingMode,
    pub handler: fn(&mut Cpu, Option<u8>, Option<u16>),
}

impl Cpu {
    pub(crate) const STACK_BASE: u16 = 0x0100;
    /// Fixed post-reset PC. A real 6502 reads the reset vector at
    /// 0xFFFC/0xFFFD instead; this core always lands here.
    const RESET_PC: u16 = 0xFCE2;
    const RESET_SP: u8 = 0xFD;

    pub fn new(bus: Bus) -> Self {
        Self {
            pc: 0,
            sp: 0,
            a: 0,
            x: 0,
            y: 0,
            p: StatusFlags::empty(),
            ticks: 0,
            bus,
        }
    }

    fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot { a: self.a, x: self.x, y: self.y, pc: self.pc, sp: self.sp, p: self.p.bits(), ticks: self.ticks }
    }

    pub(crate) fn read_byte(&mut self, addr: u16) -> u8 {
        self.ticks += 1;
        let snapshot = self.snapshot();
        self.bus.read(snapshot, addr)
    }

    pub(crate) fn write_byte(&mut self, addr: u16, value: u8) {
        self.ticks += 1;
        let snapshot = self.snapshot();
        self.bus.write(snapshot, addr, value);
    }

    pub(crate) fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.read_byte(addr);
        let hi = self.read_byte(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    pub(crate) fn write_word(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write_byte(addr, lo);
        self.write_byte(addr.wrapping_add(1), hi);
    }

    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let byte = self.read_byte(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte();
        let hi = self.fetch_byte();
        u16::from_le_bytes([lo, hi])
    }

    pub(crate) fn push_u8(&mut self, value: u8) {
        let addr = Self::STACK_BASE + self.sp as u16;
        self.write_byte(addr, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn push_u16(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push_u8(hi);
        self.push_u8(lo);
    }

    pub(crate) fn pop_u8(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        let addr = Self::STACK_BASE + self.sp as u16;
        self.read_byte(addr)
    }

    pub(crate) fn pop_u16(&mut self) -> u16 {
        let lo = self.pop_u8();
        let hi = self.pop_u8();
        u16::from_le_bytes([lo, hi])
    }

    /// Sets N and Z from `result`. Never touches C or V; opcodes that need
    /// those set them explicitly.
    pub(crate) fn evaluate_flags(&mut self, result: u8) {
        self.p.set(StatusFlags::ZERO, result == 0);
        self.p.set(StatusFlags::NEGATIVE, result & 0x80 != 0);
    }

    /// Writes an ALU result back to memory if an effective address was
    /// resolved, or to the accumulator for accumulator-mode opcodes.
    pub(crate) fn store_result(&mut self, address: Option<u16>, value: u8) {
        match address {
            Some(addr) => self.write_byte(addr, value),
            None => self.a = value,
        }
    }

    fn resolve_operand(&mut self, mode: AddressingMode) -> (Option<u8>, Option<u16>) {
        match mode {
            AddressingMode::Implied => (None, None),
            AddressingMode::Accumulator => (Some(self.a), None),
            AddressingMode::Immediate => (Some(self.fetch_byte()), None),
            AddressingMode::ZeroPage => {
                let addr = self.fetch_byte() as u16;
                (Some(self.read_byte(addr)), Some(addr))
            }
            AddressingMode::ZeroPageX => {
                let base = self.fetch_byte();
                let addr = base.wrapping_add(self.x) as u16;
                (Some(self.read_byte(addr)), Some(addr))
            }
            AddressingMode::ZeroPageY => {
                let base = self.fetch_byte();
                let addr = base.wrapping_add(self.y) as u16;
                (Some(self.read_byte(addr)), Some(addr))
            }
            AddressingMode::Absolute => {
                let addr = self.fetch_word();
                (Some(self.read_byte(addr)), Some(addr))
            }
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                let addr = base.wrapping_add(self.x as u16);
                (Some(self.read_byte(addr)), Some(addr))
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                let addr = base.wrapping_add(self.y as u16);
                (Some(self.read_byte(addr)), Some(addr))
            }
            AddressingMode::IndirectX => {
                let base = self.fetch_byte();
                let ptr = base.wrapping_add(self.x);
                let lo = self.read_byte(ptr as u16);
                let hi = self.read_byte(ptr.wrapping_add(1) as u16);
                let addr = u16::from_le_bytes([lo, hi]);
                (Some(self.read_byte(addr)), Some(addr))
            }
            AddressingMode::IndirectY => {
                let base = self.fetch_byte();
                let lo = self.read_byte(base as u16);
                let hi = self.read_byte(base.wrapping_add(1) as u16);
                let addr = u16::from_le_bytes([lo, hi]).wrapping_add(self.y as u16);
                (Some(self.read_byte(addr)), Some(addr))
            }
        }
    }

    /// Sets PC to the fixed post-reset entry point and clears SP to 0xFD;
    /// sets I and B, clears D. Does not touch A/X/Y/C/V/N/Z or `ticks`.
    pub fn reset(&mut self) {
        self.pc = Self::RESET_PC;
        self.sp = Self::RESET_SP;
        self.p.insert(StatusFlags::INTERRUPT_DISABLE);
        self.p.insert(StatusFlags::BREAK);
        self.p.remove(StatusFlags::DECIMAL);
    }

    /// Returns the mnemonic of the opcode at `addr` without executing it,
    /// for host-side tracing. `None` for unmapped opcodes.
    pub fn mnemonic_at(&self, addr: u16) -> Option<&'static str> {
        OPCODES.get(&self.bus.peek(addr)).map(|entry| entry.mnemonic)
    }

    /// Executes exactly one instruction: fetch the opcode byte, look it up,
    /// and (if mapped) resolve its operand and invoke its handler. Unmapped
    /// opcodes are silent no-ops: the opcode byte is still consumed from PC,
    /// but no ticks are charged and nothing else happens.
    pub fn step(&mut self) {
        let opcode = self.fetch_byte();
        let Some(entry) = OPCODES.get(&opcode).copied() else {
            return;
        };
        self.ticks += entry.base_ticks as u64;
        let (value, address) = self.resolve_operand(entry.addressing_mode);
        (entry.handler)(self, value, address);
    }
}

use AddressingMode::*;

macro_rules! op {
    ($opcode:expr, $mnemonic:expr, $handler:expr, $mode:expr, $base_ticks:expr) => {
        OpcodeEntry {
            mnemonic: $mnemonic,
            base_ticks: $base_ticks,
            addressing_mode: $mode,
            handler: $handler,
        }
    };
}

/// The full set of opcodes this core implements, keyed by opcode byte.
/// Bytes absent from this map (control transfer, illegal opcodes) resolve
/// to a silent no-op in `step`.
pub(crate) static OPCODES: phf::Map<u8, OpcodeEntry> = phf_map! {
    // ADC
    0x69u8 => op!(0x69, "ADC", Cpu::handle_adc, Immediate, 2),
    0x65u8 => op!(0x65, "ADC", Cpu::handle_adc, ZeroPage, 3),
    0x75u8 => op!(0x75, "ADC", Cpu::handle_adc, ZeroPageX, 4),
    0x6Du8 => op!(0x6D, "ADC", Cpu::handle_adc, Absolute, 4),
    0x7Du8 => op!(0x7D, "ADC", Cpu::handle_adc, AbsoluteX, 4),
    0x79u8 => op!(0x79, "ADC", Cpu::handle_adc, AbsoluteY, 4),
    0x61u8 => op!(0x61, "ADC", Cpu::handle_adc, IndirectX, 6),
    0x71u8 => op!(0x71, "ADC", Cpu::handle_adc, IndirectY, 5),

    // SBC
    0xE9u8 => op!(0xE9, "SBC", Cpu::handle_sbc, Immediate, 2),
    0xE5u8 => op!(0xE5, "SBC", Cpu::handle_sbc, ZeroPage, 3),
    0xF5u8 => op!(0xF5, "SBC", Cpu::handle_sbc, ZeroPageX, 4),
    0xEDu8 => op!(0xED, "SBC", Cpu::handle_sbc, Absolute, 4),
    0xFDu8 => op!(0xFD, "SBC", Cpu::handle_sbc, AbsoluteX, 4),
    0xF9u8 => op!(0xF9, "SBC", Cpu::handle_sbc, AbsoluteY, 4),
    0xE1u8 => op!(0xE1, "SBC", Cpu::handle_sbc, IndirectX, 6),
    0xF1u8 => op!(0xF1, "SBC", Cpu::handle_sbc, IndirectY, 5),

    // AND
    0x29u8 => op!(0x29, "AND", Cpu::handle_and, Immediate, 2),
    0x25u8 => op!(0x25, "AND", Cpu::handle_and, ZeroPage, 3),
    0x35u8 => op!(0x35, "AND", Cpu::handle_and, ZeroPageX, 4),
    0x2Du8 => op!(0x2D, "AND", Cpu::handle_and, Absolute, 4),
    0x3Du8 => op!(0x3D, "AND", Cpu::handle_and, AbsoluteX, 4),
    0x39u8 => op!(0x39, "AND", Cpu::handle_and, AbsoluteY, 4),
    0x21u8 => op!(0x21, "AND", Cpu::handle_and, IndirectX, 6),
    0x31u8 => op!(0x31, "AND", Cpu::handle_and, IndirectY, 5),

    // ORA
    0x09u8 => op!(0x09, "ORA", Cpu::handle_ora, Immediate, 2),
    0x05u8 => op!(0x05, "ORA", Cpu::handle_ora, ZeroPage, 3),
    0x15u8 => op!(0x15, "ORA", Cpu::handle_ora, ZeroPageX, 4),
    0x0Du8 => op!(0x0D, "ORA", Cpu::handle_ora, Absolute, 4),
    0x1Du8 => op!(0x1D, "ORA", Cpu::handle_ora, AbsoluteX, 4),
    0x19u8 => op!(0x19, "ORA", Cpu::handle_ora, AbsoluteY, 4),
    0x01u8 => op!(0x01, "ORA", Cpu::handle_ora, IndirectX, 6),
    0x11u8 => op!(0x11, "ORA", Cpu::handle_ora, IndirectY, 5),

    // EOR
    0x49u8 => op!(0x49, "EOR", Cpu::handle_eor, Immediate, 2),
    0x45u8 => op!(0x45, "EOR", Cpu::handle_eor, ZeroPage, 3),
    0x55u8 => op!(0x55, "EOR", Cpu::handle_eor, ZeroPageX, 4),
    0x4Du8 => op!(0x4D, "EOR", Cpu::handle_eor, Absolute, 4),
    0x5Du8 => op!(0x5D, "EOR", Cpu::handle_eor, AbsoluteX, 4),
    0x59u8 => op!(0x59, "EOR", Cpu::handle_eor, AbsoluteY, 4),
    0x41u8 => op!(0x41, "EOR", Cpu::handle_eor, IndirectX, 6),
    0x51u8 => op!(0x51, "EOR", Cpu::handle_eor, IndirectY, 5),

    // CMP
    0xC9u8 => op!(0xC9, "CMP", Cpu::handle_cmp, Immediate, 2),
    0xC5u8 => op!(0xC5, "CMP", Cpu::handle_cmp, ZeroPage, 3),
    0xD5u8 => op!(0xD5, "CMP", Cpu::handle_cmp, ZeroPageX, 4),
    0xCDu8 => op!(0xCD, "CMP", Cpu::handle_cmp, Absolute, 4),
    0xDDu8 => op!(0xDD, "CMP", Cpu::handle_cmp, AbsoluteX, 4),
    0xD9u8 => op!(0xD9, "CMP", Cpu::handle_cmp, AbsoluteY, 4),
    0xC1u8 => op!(0xC1, "CMP", Cpu::handle_cmp, IndirectX, 6),
    0xD1u8 => op!(0xD1, "CMP", Cpu::handle_cmp, IndirectY, 5),

    // CPX
    0xE0u8 => op!(0xE0, "CPX", Cpu::handle_cpx, Immediate, 2),
    0xE4u8 => op!(0xE4, "CPX", Cpu::handle_cpx, ZeroPage, 3),
    0xECu8 => op!(0xEC, "CPX", Cpu::handle_cpx, Absolute, 4),

    // CPY
    0xC0u8 => op!(0xC0, "CPY", Cpu::handle_cpy, Immediate, 2),
    0xC4u8 => op!(0xC4, "CPY", Cpu::handle_cpy, ZeroPage, 3),
    0xCCu8 => op!(0xCC, "CPY", Cpu::handle_cpy, Absolute, 4),

    // BIT
    0x24u8 => op!(0x24, "BIT", Cpu::handle_bit, ZeroPage, 3),
    0x2Cu8 => op!(0x2C, "BIT", Cpu::handle_bit, Absolute, 4),

    // INC / INX / INY
    0xE6u8 => op!(0xE6, "INC", Cpu::handle_inc, ZeroPage, 5),
    0xF6u8 => op!(0xF6, "INC", Cpu::handle_inc, ZeroPageX, 6),
    0xEEu8 => op!(0xEE, "INC", Cpu::handle_inc, Absolute, 6),
    0xFEu8 => op!(0xFE, "INC", Cpu::handle_inc, AbsoluteX, 7),
    0xE8u8 => op!(0xE8, "INX", Cpu::handle_inx, Implied, 2),
    0xC8u8 => op!(0xC8, "INY", Cpu::handle_iny, Implied, 2),

    // DEC / DEX / DEY
    0xC6u8 => op!(0xC6, "DEC", Cpu::handle_dec, ZeroPage, 5),
    0xD6u8 => op!(0xD6, "DEC", Cpu::handle_dec, ZeroPageX, 6),
    0xCEu8 => op!(0xCE, "DEC", Cpu::handle_dec, Absolute, 6),
    0xDEu8 => op!(0xDE, "DEC", Cpu::handle_dec, AbsoluteX, 7),
    0xCAu8 => op!(0xCA, "DEX", Cpu::handle_dex, Implied, 2),
    0x88u8 => op!(0x88, "DEY", Cpu::handle_dey, Implied, 2),

    // ASL
    0x0Au8 => op!(0x0A, "ASL", Cpu::handle_asl, Accumulator, 2),
    0x06u8 => op!(0x06, "ASL", Cpu::handle_asl, ZeroPage, 5),
    0x16u8 => op!(0x16, "ASL", Cpu::handle_asl, ZeroPageX, 6),
    0x0Eu8 => op!(0x0E, "ASL", Cpu::handle_asl, Absolute, 6),
    0x1Eu8 => op!(0x1E, "ASL", Cpu::handle_asl, AbsoluteX, 7),

    // LSR
    0x4Au8 => op!(0x4A, "LSR", Cpu::handle_lsr, Accumulator, 2),
    0x46u8 => op!(0x46, "LSR", Cpu::handle_lsr, ZeroPage, 5),
    0x56u8 => op!(0x56, "LSR", Cpu::handle_lsr, ZeroPageX, 6),
    0x4Eu8 => op!(0x4E, "LSR", Cpu::handle_lsr, Absolute, 6),
    0x5Eu8 => op!(0x5E, "LSR", Cpu::handle_lsr, AbsoluteX, 7),

    // ROL
    0x2Au8 => op!(0x2A, "ROL", Cpu::handle_rol, Accumulator, 2),
    0x26u8 => op!(0x26, "ROL", Cpu::handle_rol, ZeroPage, 5),
    0x36u8 => op!(0x36, "ROL", Cpu::handle_rol, ZeroPageX, 6),
    0x2Eu8 => op!(0x2E, "ROL", Cpu::handle_rol, Absolute, 6),
    0x3Eu8 => op!(0x3E, "ROL", Cpu::handle_rol, AbsoluteX, 7),

    // ROR
    0x6Au8 => op!(0x6A, "ROR", Cpu::handle_ror, Accumulator, 2),
    0x66u8 => op!(0x66, "ROR", Cpu::handle_ror, ZeroPage, 5),
    0x76u8 => op!(0x76, "ROR", Cpu::handle_ror, ZeroPageX, 6),
    0x6Eu8 => op!(0x6E, "ROR", Cpu::handle_ror, Absolute, 6),
    0x7Eu8 => op!(0x7E, "ROR", Cpu::handle_ror, AbsoluteX, 7),

    // LDA / LDX / LDY
    0xA9u8 => op!(0xA9, "LDA", Cpu::handle_lda, Immediate, 2),
    0xA5u8 => op!(0xA5, "LDA", Cpu::handle_lda, ZeroPage, 3),
    0xB5u8 => op!(0xB5, "LDA", Cpu::handle_lda, ZeroPageX, 4),
    0xADu8 => op!(0xAD, "LDA", Cpu::handle_lda, Absolute, 4),
    0xBDu8 => op!(0xBD, "LDA", Cpu::handle_lda, AbsoluteX, 4),
    0xB9u8 => op!(0xB9, "LDA", Cpu::handle_lda, AbsoluteY, 4),
    0xA1u8 => op!(0xA1, "LDA", Cpu::handle_lda, IndirectX, 6),
    0xB1u8 => op!(0xB1, "LDA", Cpu::handle_lda, IndirectY, 5),

    0xA2u8 => op!(0xA2, "LDX", Cpu::handle_ldx, Immediate, 2),
    0xA6u8 => op!(0xA6, "LDX", Cpu::handle_ldx, ZeroPage, 3),
    0xB6u8 => op!(0xB6, "LDX", Cpu::handle_ldx, ZeroPageY, 4),
    0xAEu8 => op!(0xAE, "LDX", Cpu::handle_ldx, Absolute, 4),
    0xBEu8 => op!(0xBE, "LDX", Cpu::handle_ldx, AbsoluteY, 4),

    0xA0u8 => op!(0xA0, "LDY", Cpu::handle_ldy, Immediate, 2),
    0xA4u8 => op!(0xA4, "LDY", Cpu::handle_ldy, ZeroPage, 3),
    0xB4u8 => op!(0xB4, "LDY", Cpu::handle_ldy, ZeroPageX, 4),
    0xACu8 => op!(0xAC, "LDY", Cpu::handle_ldy, Absolute, 4),
    0xBCu8 => op!(0xBC, "LDY", Cpu::handle_ldy, AbsoluteX, 4),

    // STA / STX / STY
    0x85u8 => op!(0x85, "STA", Cpu::handle_sta, ZeroPage, 3),
    0x95u8 => op!(0x95, "STA", Cpu::handle_sta, ZeroPageX, 4),
    0x8Du8 => op!(0x8D, "STA", Cpu::handle_sta, Absolute, 4),
    0x9Du8 => op!(0x9D, "STA", Cpu::handle_sta, AbsoluteX, 5),
    0x99u8 => op!(0x99, "STA", Cpu::handle_sta, AbsoluteY, 5),
    0x81u8 => op!(0x81, "STA", Cpu::handle_sta, IndirectX, 6),
    0x91u8 => op!(0x91, "STA", Cpu::handle_sta, IndirectY, 6),

    0x86u8 => op!(0x86, "STX", Cpu::handle_stx, ZeroPage, 3),
    0x96u8 => op!(0x96, "STX", Cpu::handle_stx, ZeroPageY, 4),
    0x8Eu8 => op!(0x8E, "STX", Cpu::handle_stx, Absolute, 4),

    0x84u8 => op!(0x84, "STY", Cpu::handle_sty, ZeroPage, 3),
    0x94u8 => op!(0x94, "STY", Cpu::handle_sty, ZeroPageX, 4),
    0x8Cu8 => op!(0x8C, "STY", Cpu::handle_sty, Absolute, 4),

    // Register transfers
    0xAAu8 => op!(0xAA, "TAX", Cpu::handle_tax, Implied, 2),
    0xA8u8 => op!(0xA8, "TAY", Cpu::handle_tay, Implied, 2),
    0xBAu8 => op!(0xBA, "TSX", Cpu::handle_tsx, Implied, 2),
    0x8Au8 => op!(0x8A, "TXA", Cpu::handle_txa, Implied, 2),
    0x9Au8 => op!(0x9A, "TXS", Cpu::handle_txs, Implied, 2),
    0x98u8 => op!(0x98, "TYA", Cpu::handle_tya, Implied, 2),

    // Stack
    0x48u8 => op!(0x48, "PHA", Cpu::handle_pha, Implied, 3),
    0x08u8 => op!(0x08, "PHP", Cpu::handle_php, Implied, 3),
    0x68u8 => op!(0x68, "PLA", Cpu::handle_pla, Implied, 4),
    0x28u8 => op!(0x28, "PLP", Cpu::handle_plp, Implied, 4),

    // Flags
    0x18u8 => op!(0x18, "CLC", Cpu::handle_clc, Implied, 2),
    0xD8u8 => op!(0xD8, "CLD", Cpu::handle_cld, Implied, 2),
    0x58u8 => op!(0x58, "CLI", Cpu::handle_cli, Implied, 2),
    0xB8u8 => op!(0xB8, "CLV", Cpu::handle_clv, Implied, 2),
    0x38u8 => op!(0x38, "SEC", Cpu::handle_sec, Implied, 2),
    0xF8u8 => op!(0xF8, "SED", Cpu::handle_sed, Implied, 2),
    0x78u8 => op!(0x78, "SEI", Cpu::handle_sei, Implied, 2),

    // NOP
    0xEAu8 => op!(0xEA, "NOP", Cpu::handle_nop, Implied, 2),
};

#[cfg(test)]
mod tests {
    use super::*;

    fn cpu() -> Cpu {
        Cpu::new(Bus::new([0; 0x10000]))
    }

    #[test]
    fn new_cpu_starts_zeroed() {
        let cpu = cpu();
        assert_eq!(cpu.pc, 0);
        assert_eq!(cpu.sp, 0);
        assert_eq!(cpu.a, 0);
        assert_eq!(cpu.x, 0);
        assert_eq!(cpu.y, 0);
        assert_eq!(cpu.p, StatusFlags::empty());
        assert_eq!(cpu.ticks, 0);
    }

    #[test]
    fn reset_hardcodes_pc_and_sp_and_sets_i_and_b_clears_d() {
        let mut cpu = cpu();
        cpu.p.insert(StatusFlags::DECIMAL);
        cpu.ticks = 42;
        cpu.reset();
        assert_eq!(cpu.pc, 0xFCE2);
        assert_eq!(cpu.sp, 0xFD);
        assert!(cpu.p.contains(StatusFlags::INTERRUPT_DISABLE));
        assert!(cpu.p.contains(StatusFlags::BREAK));
        assert!(!cpu.p.contains(StatusFlags::DECIMAL));
        assert_eq!(cpu.ticks, 42, "reset must not touch the tick counter");
    }

    #[test]
    fn read_write_word_are_little_endian() {
        let mut cpu = cpu();
        cpu.write_word(0x0200, 0x1234);
        assert_eq!(cpu.bus.peek(0x0200), 0x34);
        assert_eq!(cpu.bus.peek(0x0201), 0x12);
        assert_eq!(cpu.read_word(0x0200), 0x1234);
    }

    #[test]
    fn fetch_byte_advances_pc_and_charges_one_tick() {
        let mut cpu = cpu();
        cpu.bus.poke(0x10, 0xAB);
        cpu.pc = 0x10;
        let ticks_before = cpu.ticks;
        assert_eq!(cpu.fetch_byte(), 0xAB);
        assert_eq!(cpu.pc, 0x11);
        assert_eq!(cpu.ticks, ticks_before + 1);
    }

    #[test]
    fn fetch_word_advances_pc_by_two() {
        let mut cpu = cpu();
        cpu.write_word(0x10, 0xBEEF);
        cpu.pc = 0x10;
        assert_eq!(cpu.fetch_word(), 0xBEEF);
        assert_eq!(cpu.pc, 0x12);
    }

    #[test]
    fn stack_push_pop_u8_roundtrips_and_wraps_sp() {
        let mut cpu = cpu();
        cpu.sp = 0xFF;
        cpu.push_u8(0xAB);
        assert_eq!(cpu.sp, 0xFE);
        assert_eq!(cpu.bus.peek(0x01FF), 0xAB);
        assert_eq!(cpu.pop_u8(), 0xAB);
        assert_eq!(cpu.sp, 0xFF);
    }

    #[test]
    fn stack_push_pop_u16_roundtrips() {
        let mut cpu = cpu();
        cpu.sp = 0xFF;
        cpu.push_u16(0x1234);
        assert_eq!(cpu.sp, 0xFD);
        assert_eq!(cpu.pop_u16(), 0x1234);
        assert_eq!(cpu.sp, 0xFF);
    }

    #[test]
    fn zero_page_indexed_wraps_within_page_zero() {
        let mut cpu = cpu();
        cpu.x = 0xFF;
        cpu.bus.poke(0x10, 0x80); // operand byte for ZeroPageX
        cpu.pc = 0x10;
        let (_, addr) = cpu.resolve_operand(AddressingMode::ZeroPageX);
        assert_eq!(addr, Some(0x7F), "(0x80 + 0xFF) & 0xFF == 0x7F");
    }

    #[test]
    fn absolute_indexed_wraps_mod_2_16() {
        let mut cpu = cpu();
        cpu.y = 0x10;
        cpu.write_word(0x10, 0xFFF8);
        cpu.pc = 0x10;
        let (_, addr) = cpu.resolve_operand(AddressingMode::AbsoluteY);
        assert_eq!(addr, Some(0x08), "0xFFF8 + 0x10 wraps to 0x0008");
    }

    #[test]
    fn indirect_x_reads_pointer_from_wrapped_zero_page() {
        let mut cpu = cpu();
        cpu.x = 0x04;
        cpu.bus.poke(0x10, 0x20); // zero-page base operand
        cpu.bus.poke(0x24, 0x34); // pointer low byte at (0x20 + 4)
        cpu.bus.poke(0x25, 0x56); // pointer high byte
        cpu.bus.poke(0x5634, 0x99);
        cpu.pc = 0x10;
        let (value, addr) = cpu.resolve_operand(AddressingMode::IndirectX);
        assert_eq!(addr, Some(0x5634));
        assert_eq!(value, Some(0x99));
    }

    #[test]
    fn indirect_y_adds_y_after_dereferencing() {
        let mut cpu = cpu();
        cpu.y = 0x10;
        cpu.bus.poke(0x10, 0x20);
        cpu.bus.poke(0x20, 0x34);
        cpu.bus.poke(0x21, 0x56);
        cpu.bus.poke(0x5644, 0x77);
        cpu.pc = 0x10;
        let (value, addr) = cpu.resolve_operand(AddressingMode::IndirectY);
        assert_eq!(addr, Some(0x5644));
        assert_eq!(value, Some(0x77));
    }

    #[test]
    fn step_on_unmapped_opcode_consumes_the_byte_and_charges_no_ticks() {
        let mut cpu = cpu();
        cpu.reset();
        cpu.bus.poke(cpu.pc, 0xFF); // 0xFF is not in the dispatch table
        let ticks_before = cpu.ticks;
        let pc_before = cpu.pc;
        cpu.step();
        assert_eq!(cpu.pc, pc_before.wrapping_add(1));
        assert_eq!(cpu.ticks, ticks_before + 1, "only the opcode fetch itself ticks");
    }

    #[test]
    fn step_on_known_opcode_charges_base_ticks_and_dispatches() {
        let mut cpu = cpu();
        cpu.reset();
        let pc = cpu.pc;
        cpu.bus.poke(pc, 0xA9); // LDA #$42
        cpu.bus.poke(pc + 1, 0x42);
        cpu.step();
        assert_eq!(cpu.a, 0x42);
        assert_eq!(cpu.pc, pc + 2);
    }
}
