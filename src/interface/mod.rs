//! High-level interface: execution context and edit sessions.

mod context;
mod session;

pub use context::Context;
pub use session::{EnumSession, SavePlan, SaveReport};
