use crate::cpu::{Cpu, StatusFlags};

impl Cpu {
    pub(crate) fn handle_sei(&mut self, _opt_value: Option<u8>, _opt_address: Option<u16>) {
        self.p.insert(StatusFlags::INTERRUPT_DISABLE);
    }
}
