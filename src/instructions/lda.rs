use crate::cpu::Cpu;

impl Cpu {
    pub(crate) fn handle_lda(&mut self, opt_value: Option<u8>, _opt_address: Option<u16>) {
        let value = opt_value.expect("LDA always resolves an operand byte");
        self.a = value;
        self.evaluate_flags(self.a);
    }
}
