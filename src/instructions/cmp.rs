use crate::cpu::{Cpu, StatusFlags};

impl Cpu {
    pub(crate) fn handle_cmp(&mut self, opt_value: Option<u8>, _opt_address: Option<u16>) {
        let value = opt_value.expect("CMP always resolves an operand byte");
        let tmp: i32 = self.a as i32 - value as i32;
        self.p.set(StatusFlags::ZERO, tmp as u8 == 0);
        self.p.set(StatusFlags::NEGATIVE, tmp as u8 & 0x80 != 0);
        self.p.set(StatusFlags::CARRY, tmp >= 0);
    }
}
