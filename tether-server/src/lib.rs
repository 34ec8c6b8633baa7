mod app;
mod config;
mod error;
mod http;
mod room;
mod signaling;

pub use app::*;
pub use config::*;
pub use error::*;
pub use http::*;
pub use room::*;
pub use signaling::*;
