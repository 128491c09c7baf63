use crate::cpu::Cpu;

impl Cpu {
    pub(crate) fn handle_dec(&mut self, opt_value: Option<u8>, opt_address: Option<u16>) {
        let value = opt_value.expect("DEC always resolves an operand byte");
        let address = opt_address.expect("DEC always resolves an effective address");
        let result = value.wrapping_sub(1);
        self.write_byte(address, result);
        self.evaluate_flags(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::Bus;
    use crate::cpu::StatusFlags;

    fn cpu() -> Cpu {
        Cpu::new(Bus::new([0; 0x10000]))
    }

    #[test]
    fn decrements_the_byte_at_the_address() {
        let mut cpu = cpu();
        cpu.handle_dec(Some(0x02), Some(0x2000));
        assert_eq!(cpu.bus.peek(0x2000), 0x01);
        assert!(!cpu.p.contains(StatusFlags::ZERO));

        cpu.handle_dec(Some(0x01), Some(0x2000));
        assert_eq!(cpu.bus.peek(0x2000), 0x00);
        assert!(cpu.p.contains(StatusFlags::ZERO));

        cpu.handle_dec(Some(0x00), Some(0x2000));
        assert_eq!(cpu.bus.peek(0x2000), 0xFF);
        assert!(cpu.p.contains(StatusFlags::NEGATIVE));
    }
}
