pub mod bce;
pub mod mse;

pub use bce::binary_cross_entropy;
pub use mse::mse_loss;
