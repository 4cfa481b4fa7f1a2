// Declare the main modules of the crate
pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod ops;
pub mod utils;
pub mod value;

// Re-export the node handle so it is reachable as `picograd_core::Value`
pub use value::Value;
// Re-export traits required by public functions/structs
pub use num_traits;

pub use error::PicoGradError;
