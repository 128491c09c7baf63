use crate::cpu::{Cpu, StatusFlags};

impl Cpu {
    /// PHP always pushes the status byte with B and the unused bit forced to 1,
    /// regardless of their current value in `self.p`.
    pub(crate) fn handle_php(&mut self, _opt_value: Option<u8>, _opt_address: Option<u16>) {
        let status = (self.p | StatusFlags::BREAK | StatusFlags::UNUSED).bits();
        self.push_u8(status);
    }
}
