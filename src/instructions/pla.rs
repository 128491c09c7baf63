use crate::cpu::Cpu;

impl Cpu {
    pub(crate) fn handle_pla(&mut self, _opt_value: Option<u8>, _opt_address: Option<u16>) {
        self.a = self.pop_u8();
        self.evaluate_flags(self.a);
    }
}
