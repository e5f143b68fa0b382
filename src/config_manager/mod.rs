pub mod backend;
pub mod main;
pub mod system;
pub mod utils;

pub use backend::{BackendConfig, ModelConfig};
pub use main::Config;
pub use system::SystemConfig;
