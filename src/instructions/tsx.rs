use crate::cpu::Cpu;

impl Cpu {
    pub(crate) fn handle_tsx(&mut self, _opt_value: Option<u8>, _opt_address: Option<u16>) {
        self.x = self.sp;
        self.evaluate_flags(self.x);
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
    fn transfers_stack_pointer_into_x() {
        let mut cpu = cpu();
        cpu.sp = 0x42;
        cpu.handle_tsx(None, None);
        assert_eq!(cpu.x, 0x42);
        assert!(!cpu.p.contains(StatusFlags::ZERO));
        assert!(!cpu.p.contains(StatusFlags::NEGATIVE));
    }

    #[test]
    fn sets_zero_flag() {
        let mut cpu = cpu();
        cpu.sp = 0x00;
        cpu.handle_tsx(None, None);
        assert!(cpu.p.contains(StatusFlags::ZERO));
    }

    #[test]
    fn sets_negative_flag() {
        let mut cpu = cpu();
        cpu.sp = 0x80;
        cpu.handle_tsx(None, None);
        assert!(cpu.p.contains(StatusFlags::NEGATIVE));
    }
}
