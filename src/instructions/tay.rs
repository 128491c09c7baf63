use crate::cpu::Cpu;

impl Cpu {
    pub(crate) fn handle_tay(&mut self, _opt_value: Option<u8>, _opt_address: Option<u16>) {
        self.y = self.a;
        self.evaluate_flags(self.y);
    }
}
