pub mod cycles;
pub mod data;
pub mod progress;
pub mod qsort;
pub mod verify;
