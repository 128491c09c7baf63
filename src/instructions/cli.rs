use crate::cpu::{Cpu, StatusFlags};

impl Cpu {
    pub(crate) fn handle_cli(&mut self, _opt_value: Option<u8>, _opt_address: Option<u16>) {
        self.p.remove(StatusFlags::INTERRUPT_DISABLE);
    }
}
