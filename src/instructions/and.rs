use crate::cpu::Cpu;

impl Cpu {
    pub(crate) fn handle_and(&mut self, opt_value: Option<u8>, _opt_address: Option<u16>) {
        let value = opt_value.expect("AND always resolves an operand byte");
        let result = self.a & value;
        self.evaluate_flags(result);
        self.a = result;
    }
}
