pub mod mlp;
pub mod train;

pub use mlp::Mlp;
pub use train::{EpochReport, TrainConfig};
