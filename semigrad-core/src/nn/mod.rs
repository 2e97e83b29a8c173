// src/nn/mod.rs
// Neural network building blocks on top of scalar nodes.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module

// Re-export common items
pub use init::{Init, ParamSampler};
pub use layers::{Layer, Neuron};
pub use losses::{mse_loss, MseLoss, Reduction};
pub use module::Module;
