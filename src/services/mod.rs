//! Services layer.
//!
//! Services translate method calls into executor requests:
//!
//! ```text
//!   Caller
//!     |
//!     v
//! EmailService  <-- builds Request from Options
//!     |
//!     v
//! RequestExecutor (WhmExecutor, or any custom transport)
//! ```

mod email_service;

pub use email_service::EmailService;
