pub mod client;
pub mod controller;
pub mod errors;
pub mod models;
pub mod parser;
pub mod prompt;
pub mod session;

pub use client::*;
pub use controller::*;
pub use errors::*;
pub use models::*;
pub use parser::*;
pub use prompt::*;
pub use session::*;
