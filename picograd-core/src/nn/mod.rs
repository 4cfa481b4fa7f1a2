// Network components built entirely on the core's public node surface.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod neuron;

pub use module::Module;
pub use neuron::Neuron;
