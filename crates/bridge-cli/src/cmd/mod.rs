pub mod preview;
pub mod serve;
