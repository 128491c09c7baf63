use crate::cpu::Cpu;

impl Cpu {
    pub(crate) fn handle_ldy(&mut self, opt_value: Option<u8>, _opt_address: Option<u16>) {
        let value = opt_value.expect("LDY always resolves an operand byte");
        self.y = value;
        self.evaluate_flags(self.y);
    }
}
