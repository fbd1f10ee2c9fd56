//! Cross-cutting helpers shared by the server crate and the binary:
//! response types, tracing setup and shutdown signalling.

pub mod types;
pub mod utils;
pub mod signal;
