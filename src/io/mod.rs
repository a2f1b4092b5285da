mod output;

pub use output::{DocumentFormat, OutputDestination, OutputOptions, emit};
