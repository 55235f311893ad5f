mod bgra;
mod gray;
mod obs;

pub use bgra::BgraRef;
pub use gray::{GrayOwned, GrayRef};
pub use obs::Observation;
