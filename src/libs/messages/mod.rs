//! User-facing message catalogue and output macros.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
