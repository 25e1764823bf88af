pub mod client;
pub mod config;
pub mod errors;
pub mod types;

pub use config::Config;
pub use errors::{IncapApiError, IncapResult};
pub use types::sub_account::*;
