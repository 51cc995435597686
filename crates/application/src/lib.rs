//! Application layer - Use cases and orchestration
//!
//! Contains the weather command handling, the chat markup renderer and the
//! port definitions implemented by the infrastructure layer.

pub mod command_parser;
pub mod error;
pub mod markup;
pub mod ports;
pub mod services;

pub use command_parser::CommandParser;
pub use error::ApplicationError;
pub use markup::{Blob, CommandReply};
pub use ports::*;
pub use services::*;
