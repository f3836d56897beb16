pub mod config;
pub mod constants;
pub mod creature;
pub mod crowd;
pub mod draw;
pub mod error;
pub mod overlay;
pub mod ripple;
pub mod sound;
pub mod touch;

pub use config::*;
pub use creature::*;
pub use crowd::*;
pub use draw::*;
pub use error::CrowdError;
pub use ripple::*;
pub use sound::*;
pub use touch::*;
