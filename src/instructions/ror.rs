use crate::cpu::{Cpu, StatusFlags};

impl Cpu {
    pub(crate) fn handle_ror(&mut self, opt_value: Option<u8>, opt_address: Option<u16>) {
        let value = opt_value.expect("ROR always resolves an operand byte");
        let old_carry = if self.p.contains(StatusFlags::CARRY) { 1 } else { 0 };

        self.p.set(StatusFlags::CARRY, value & 0x01 != 0);
        let result = (value >> 1) | (old_carry << 7);
        self.evaluate_flags(result);
        self.store_result(opt_address, result);
    }
}
