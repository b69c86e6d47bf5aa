//! Request-building types shared by the facade and executors.

mod options;
mod request;
mod style;

pub use options::Options;
pub use request::{Request, EMAIL_MODULE};
pub use style::{AccountListStyle, FilterListStyle};
