//! # Async Tasks
//!
//! Background tasks spawned on the shared runtime, reporting back over the
//! app event channel.

pub(crate) mod market;
pub(crate) mod slippage;
