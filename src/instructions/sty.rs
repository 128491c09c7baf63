use crate::cpu::Cpu;

impl Cpu {
    pub(crate) fn handle_sty(&mut self, _opt_value: Option<u8>, opt_address: Option<u16>) {
        let address = opt_address.expect("STY always resolves an effective address");
        self.write_byte(address, self.y);
    }
}
