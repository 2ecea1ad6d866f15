//! Middleware modules.

pub mod error;
pub mod panic;
pub mod timeout;

pub use panic::CatchPanicMiddleware;
pub use timeout::TimeoutMiddleware;
