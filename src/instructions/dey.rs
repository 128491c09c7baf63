use crate::cpu::Cpu;

impl Cpu {
    pub(crate) fn handle_dey(&mut self, _opt_value: Option<u8>, _opt_address: Option<u16>) {
        self.y = self.y.wrapping_sub(1);
        self.evaluate_flags(self.y);
    }
}
