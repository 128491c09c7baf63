use crate::cpu::{Cpu, StatusFlags};

impl Cpu {
    pub(crate) fn handle_cld(&mut self, _opt_value: Option<u8>, _opt_address: Option<u16>) {
        self.p.remove(StatusFlags::DECIMAL);
    }
}
