//! Request executors.
//!
//! - [`RequestExecutor`] - the trait the email facade calls through
//! - [`WhmExecutor`] - cPanel JSON API over a WHM server

mod traits;
mod whm;

pub use traits::{CpanelError, CpanelResult, RequestExecutor};
pub use whm::WhmExecutor;
