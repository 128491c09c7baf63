use crate::cpu::Cpu;

impl Cpu {
    pub(crate) fn handle_ldx(&mut self, opt_value: Option<u8>, _opt_address: Option<u16>) {
        let value = opt_value.expect("LDX always resolves an operand byte");
        self.x = value;
        self.evaluate_flags(self.x);
    }
}
