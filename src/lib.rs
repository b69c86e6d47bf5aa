//! cpanel-mail - client library for cPanel's email administration API.
//!
//! [`services::EmailService`] exposes one method per function of the cPanel
//! `Email` module. Calls are executed through a [`providers::RequestExecutor`];
//! [`providers::WhmExecutor`] talks to a WHM server over HTTP.
//!
//! # Example
//!
//! ```rust,no_run
//! use cpanel_mail::config::{ServerSettings, Settings};
//! use cpanel_mail::domain::Options;
//! use cpanel_mail::providers::WhmExecutor;
//! use cpanel_mail::services::EmailService;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::new(
//!     ServerSettings::default()
//!         .with_host("cpanel.example.com")
//!         .with_hash("remote-access-hash"),
//!     "alice",
//! );
//! let email = EmailService::new(WhmExecutor::new(settings)?);
//!
//! let accounts = email
//!     .accounts(Options::new().with("domain", "example.com").with("style", "without_disk"))
//!     .await?;
//! println!("{}", accounts);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod providers;
pub mod services;

pub use domain::Options;
pub use providers::{CpanelError, CpanelResult, RequestExecutor, WhmExecutor};
pub use services::EmailService;
