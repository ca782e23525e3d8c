pub mod capture;
pub mod layer;
pub mod logging;

pub use capture::CapturedBody;
pub use layer::{ExchangeLogging, ExchangeLoggingLayer};
pub use logging::{logging_middleware, ExchangeLogger};
