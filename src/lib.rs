pub mod consts;
pub mod prom;
pub mod report;
pub mod timing;

pub use prom::{Prom, PromError};
pub use timing::{transitions, Signal, Simulator, Transition};
