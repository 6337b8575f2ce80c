//! Cycle-counter reads for elapsed-time reporting.

/// Returns the current hardware cycle count, or `0` on platforms without an
/// accessible counter. Monotonic where the hardware supports it; only the
/// delta between two reads is meaningful.
pub fn read() -> u64 {
    imp::read()
}

#[cfg(target_arch = "riscv64")]
mod imp {
    pub fn read() -> u64 {
        let cycles: u64;
        unsafe { core::arch::asm!("rdcycle {}", out(reg) cycles) };
        cycles
    }
}

#[cfg(target_arch = "x86_64")]
mod imp {
    pub fn read() -> u64 {
        unsafe { core::arch::x86_64::_rdtsc() }
    }
}

#[cfg(not(any(target_arch = "riscv64", target_arch = "x86_64")))]
mod imp {
    pub fn read() -> u64 {
        0
    }
}
