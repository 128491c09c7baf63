use crate::cpu::{Cpu, StatusFlags};

impl Cpu {
    pub(crate) fn handle_cpx(&mut self, opt_value: Option<u8>, _opt_address: Option<u16>) {
        let value = opt_value.expect("CPX always resolves an operand byte");
        let tmp: i32 = self.x as i32 - value as i32;
        self.p.set(StatusFlags::ZERO, tmp as u8 == 0);
        self.p.set(StatusFlags::NEGATIVE, tmp as u8 & 0x80 != 0);
        self.p.set(StatusFlags::CARRY, tmp >= 0);
    }
}
