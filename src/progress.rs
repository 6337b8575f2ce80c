use std::io::{self, Write};

/// One dot per this many insertion passes.
const DOT_INTERVAL: u64 = 65_536;
const DOTS_PER_LINE: u64 = 20;

/// Receives one notification per insertion-sort pass during a sort.
pub trait ProgressSink {
    fn insertion_pass(&mut self);
}

/// Swallows all notifications; the default for library and test callers.
pub struct Silent;

impl ProgressSink for Silent {
    fn insertion_pass(&mut self) {}
}

/// Prints a dot to stdout every [`DOT_INTERVAL`] insertion passes and clears
/// the line after every [`DOTS_PER_LINE`] dots so long runs stay on one line.
#[derive(Default)]
pub struct DotProgress {
    ins_count: u64,
    print_count: u64,
}

impl DotProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressSink for DotProgress {
    fn insertion_pass(&mut self) {
        self.ins_count += 1;
        if self.ins_count % DOT_INTERVAL != 0 {
            return;
        }
        self.print_count += 1;

        let mut out = io::stdout().lock();
        if self.print_count % DOTS_PER_LINE == 0 {
            let _ = out.write_all(b"\x1b[2K\r");
        }
        let _ = out.write_all(b".");
        let _ = out.flush();
    }
}
