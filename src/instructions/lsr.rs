use crate::cpu::Cpu;

impl Cpu {
    pub(crate) fn handle_lsr(&mut self, opt_value: Option<u8>, opt_address: Option<u16>) {
        let value = opt_value.expect("LSR always resolves an operand byte");
        let result = value >> 1;

        self.p.set(crate::cpu::StatusFlags::CARRY, value & 0x01 != 0);
        self.evaluate_flags(result);
        self.store_result(opt_address, result);
    }
}
