//! A cycle-counting interpreter core for the MOS 6502.
//!
//! The host owns the address space ([`Bus`]) and drives execution one
//! instruction at a time via [`Cpu::step`]. Memory access hooks let the host
//! observe or intercept individual reads and writes without the CPU knowing
//! anything about what's mapped where.
//!
//! # Examples
//!
//! ```
//! use mos6502::{Bus, Cpu};
//!
//! let bus = Bus::with_program(&[0xA9, 0x42, 0xAA], 0x0600).unwrap();
//! let mut cpu = Cpu::new(bus);
//! cpu.pc = 0x0600;
//!
//! cpu.step(); // LDA #$42
//! assert_eq!(cpu.a, 0x42);
//! cpu.step(); // TAX
//! assert_eq!(cpu.x, 0x42);
//! ```

pub mod bus;
pub mod cpu;
mod instructions;

pub use bus::{Bus, BusError, CpuSnapshot, ReadHook, WriteHook};
pub use cpu::{Cpu, StatusFlags};
