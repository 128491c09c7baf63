//! The 64 KiB address space the CPU is driven against.
//!
//! A [`Bus`] owns the raw byte buffer the host supplies and, optionally, a
//! pair of hooks that intercept individual reads and writes before they
//! reach the buffer. Absent a hook, every access goes straight through to
//! the raw array.

use std::fmt;

/// Register-file snapshot handed to a hook in lieu of a live `&mut Cpu`.
///
/// A hook cannot borrow the `Cpu` that owns its `Bus` without aliasing
/// trouble, so it is instead given a cheap copy of the state at the moment
/// of the access. This is enough for a hook to make address-dependent
/// decisions without needing shared ownership machinery like
/// `Rc<RefCell<_>>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuSnapshot {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub pc: u16,
    pub sp: u8,
    pub p: u8,
    pub ticks: u64,
}

/// A host-installed read interceptor. Given the CPU's state, the address
/// being read, and the raw buffer, it returns the byte observed at that
/// address.
pub type ReadHook = Box<dyn FnMut(CpuSnapshot, u16, &[u8; 0x10000]) -> u8>;

/// A host-installed write interceptor. Given the CPU's state, the target
/// address, the byte being written, and the raw buffer, it decides whether
/// (and how) the buffer is updated.
pub type WriteHook = Box<dyn FnMut(CpuSnapshot, u16, u8, &mut [u8; 0x10000])>;

/// Errors that can arise while constructing a [`Bus`] from a program image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// `load_addr + program.len()` would run past the end of the 64 KiB space.
    ProgramTooLarge { load_addr: u16, program_len: usize },
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusError::ProgramTooLarge { load_addr, program_len } => write!(
                f,
                "program of {program_len} bytes loaded at {load_addr:#06x} would exceed the 64 KiB address space"
            ),
        }
    }
}

impl std::error::Error for BusError {}

pub struct Bus {
    memory: Box<[u8; 0x10000]>,
    read_hook: Option<ReadHook>,
    write_hook: Option<WriteHook>,
}

impl fmt::Debug for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bus")
            .field("read_hook_installed", &self.read_hook.is_some())
            .field("write_hook_installed", &self.write_hook.is_some())
            .finish_non_exhaustive()
    }
}

impl Bus {
    /// Takes ownership of a host-supplied 64 KiB buffer.
    pub fn new(memory: [u8; 0x10000]) -> Self {
        Self {
            memory: Box::new(memory),
            read_hook: None,
            write_hook: None,
        }
    }

    /// Convenience constructor: a zero-filled buffer with `program` copied
    /// in at `load_addr`.
    pub fn with_program(program: &[u8], load_addr: u16) -> Result<Self, BusError> {
        let start = load_addr as usize;
        let end = start + program.len();
        if end > 0x10000 {
            return Err(BusError::ProgramTooLarge {
                load_addr,
                program_len: program.len(),
            });
        }
        let mut memory = [0u8; 0x10000];
        memory[start..end].copy_from_slice(program);
        Ok(Self::new(memory))
    }

    pub fn set_read_hook(&mut self, hook: Option<ReadHook>) {
        self.read_hook = hook;
    }

    pub fn set_write_hook(&mut self, hook: Option<WriteHook>) {
        self.write_hook = hook;
    }

    pub(crate) fn read(&mut self, snapshot: CpuSnapshot, addr: u16) -> u8 {
        match self.read_hook.as_mut() {
            Some(hook) => hook(snapshot, addr, &self.memory),
            None => self.memory[addr as usize],
        }
    }

    pub(crate) fn write(&mut self, snapshot: CpuSnapshot, addr: u16, value: u8) {
        let Bus { memory, write_hook, .. } = self;
        match write_hook {
            Some(hook) => hook(snapshot, addr, value, memory),
            None => memory[addr as usize] = value,
        }
    }

    /// Direct, un-hooked access for host-side inspection (loading a program,
    /// peeking at output memory, dumping state for a debugger).
    pub fn peek(&self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    pub fn poke(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }
}
