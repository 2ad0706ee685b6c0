mod scanner;

pub use scanner::{Extraction, ScanState, Step, extract, step};
