use crate::cpu::{Cpu, StatusFlags};

impl Cpu {
    pub(crate) fn handle_clv(&mut self, _opt_value: Option<u8>, _opt_address: Option<u16>) {
        self.p.remove(StatusFlags::OVERFLOW);
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
    fn clears_the_overflow_flag() {
        let mut cpu = cpu();
        cpu.p.insert(StatusFlags::OVERFLOW);
        cpu.handle_clv(None, None);
        assert!(!cpu.p.contains(StatusFlags::OVERFLOW));
    }

    #[test]
    fn does_not_affect_other_flags() {
        let mut cpu = cpu();
        cpu.p.insert(StatusFlags::OVERFLOW);
        cpu.p.insert(StatusFlags::CARRY);
        cpu.handle_clv(None, None);
        assert!(cpu.p.contains(StatusFlags::CARRY));
    }
}
