use crate::cpu::{Cpu, StatusFlags};

impl Cpu {
    /// PLP ignores whatever B/unused bits were on the stack and keeps the
    /// CPU's current ones.
    pub(crate) fn handle_plp(&mut self, _opt_value: Option<u8>, _opt_address: Option<u16>) {
        let popped = StatusFlags::from_bits_truncate(self.pop_u8());
        let preserved = self.p & (StatusFlags::BREAK | StatusFlags::UNUSED);
        self.p = (popped & !(StatusFlags::BREAK | StatusFlags::UNUSED)) | preserved;
    }
}
