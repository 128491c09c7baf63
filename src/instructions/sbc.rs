use crate::cpu::{Cpu, StatusFlags};

impl Cpu {
    pub(crate) fn handle_sbc(&mut self, opt_value: Option<u8>, _opt_address: Option<u16>) {
        let value = opt_value.expect("SBC always resolves an operand byte");
        let carry_in: u16 = if self.p.contains(StatusFlags::CARRY) { 1 } else { 0 };

        // Carry acts directly as "no borrow": tmp underflows into bit 8 when
        // a borrow is needed.
        let tmp: u16 = (self.a as u16)
            .wrapping_sub(value as u16)
            .wrapping_sub(1 - carry_in);
        let result8 = tmp as u8;

        self.p.set(StatusFlags::ZERO, result8 == 0);
        self.p.set(StatusFlags::NEGATIVE, result8 & 0x80 != 0);
        let overflow = (self.a ^ value) & 0x80 != 0 && (self.a ^ result8) & 0x80 != 0;
        self.p.set(StatusFlags::OVERFLOW, overflow);

        if !self.p.contains(StatusFlags::DECIMAL) {
            self.p.set(StatusFlags::CARRY, tmp < 0x100);
            self.a = result8;
            return;
        }

        // Decimal mode: nibble-wise BCD borrow correction.
        let borrow_in: i16 = 1 - carry_in as i16;
        let mut low = (self.a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow_in;
        let mut high = (self.a >> 4) as i16 - (value >> 4) as i16;
        if low < 0 {
            low += 10;
            high -= 1;
        }
        if high < 0 {
            high += 10;
        }
        self.p.set(StatusFlags::CARRY, tmp < 0x100);
        self.a = (((high << 4) & 0xF0) as u8) | (low as u8 & 0x0F);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::Bus;

    fn cpu() -> Cpu {
        Cpu::new(Bus::new([0; 0x10000]))
    }

    #[test]
    fn subtracts_without_borrow_when_carry_set() {
        let mut cpu = cpu();
        cpu.a = 0x10;
        cpu.p.insert(StatusFlags::CARRY);
        cpu.handle_sbc(Some(0x05), None);
        assert_eq!(cpu.a, 0x0B);
        assert!(cpu.p.contains(StatusFlags::CARRY));
    }

    #[test]
    fn clear_carry_subtracts_an_extra_one() {
        let mut cpu = cpu();
        cpu.a = 0x10;
        cpu.handle_sbc(Some(0x05), None);
        assert_eq!(cpu.a, 0x0A);
        assert!(cpu.p.contains(StatusFlags::CARRY));
    }

    #[test]
    fn borrow_clears_carry() {
        let mut cpu = cpu();
        cpu.a = 0x05;
        cpu.p.insert(StatusFlags::CARRY);
        cpu.handle_sbc(Some(0x06), None);
        assert_eq!(cpu.a, 0xFF);
        assert!(!cpu.p.contains(StatusFlags::CARRY));
        assert!(cpu.p.contains(StatusFlags::NEGATIVE));
    }

    #[test]
    fn signed_overflow_sets_overflow_flag() {
        let mut cpu = cpu();
        cpu.a = 0x80;
        cpu.p.insert(StatusFlags::CARRY);
        cpu.handle_sbc(Some(0x01), None);
        assert_eq!(cpu.a, 0x7F);
        assert!(cpu.p.contains(StatusFlags::OVERFLOW));
    }

    #[test]
    fn decimal_mode_subtracts_as_bcd() {
        let mut cpu = cpu();
        cpu.p.insert(StatusFlags::DECIMAL);
        cpu.p.insert(StatusFlags::CARRY);
        cpu.a = 0x42; // 42
        cpu.handle_sbc(Some(0x15), None); // - 15 = 27
        assert_eq!(cpu.a, 0x27);
        assert!(cpu.p.contains(StatusFlags::CARRY));
    }

    #[test]
    fn decimal_mode_borrow_wraps_around_a_hundred() {
        let mut cpu = cpu();
        cpu.p.insert(StatusFlags::DECIMAL);
        cpu.p.insert(StatusFlags::CARRY);
        cpu.a = 0x12; // 12
        cpu.handle_sbc(Some(0x15), None); // - 15 = -3 -> 97
        assert_eq!(cpu.a, 0x97);
        assert!(!cpu.p.contains(StatusFlags::CARRY));
    }
}
