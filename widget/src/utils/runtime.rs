//! Global Tokio runtime for async HTTP operations
//!
//! egui drives a synchronous frame loop, but reqwest requires a tokio
//! runtime. This static runtime bridges the two: background tasks spawn here
//! and report back to the frame loop over the app event channel.

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});
