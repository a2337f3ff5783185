pub mod account;
pub mod patient_flow;

pub use account::*;
pub use patient_flow::*;
