use crate::cpu::Cpu;

impl Cpu {
    pub(crate) fn handle_inc(&mut self, opt_value: Option<u8>, opt_address: Option<u16>) {
        let value = opt_value.expect("INC always resolves an operand byte");
        let address = opt_address.expect("INC always resolves an effective address");
        let result = value.wrapping_add(1);
        self.write_byte(address, result);
        self.evaluate_flags(result);
    }
}
