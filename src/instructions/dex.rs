use crate::cpu::Cpu;

impl Cpu {
    pub(crate) fn handle_dex(&mut self, _opt_value: Option<u8>, _opt_address: Option<u16>) {
        self.x = self.x.wrapping_sub(1);
        self.evaluate_flags(self.x);
    }
}
