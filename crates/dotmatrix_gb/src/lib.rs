pub mod cpu;
pub mod machine;

pub use cpu::{Bus, Cpu, ExecState, Interrupt};
pub use machine::GameBoy;
