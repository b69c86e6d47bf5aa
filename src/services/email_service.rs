//! Email administration service.
//!
//! The [`EmailService`] maps each cPanel `Email` module function to a method.
//! Every method builds one [`Request`] from the caller's [`Options`] and hands
//! it to the executor; the executor's response is returned unchanged.

use serde_json::Value;

use crate::domain::{AccountListStyle, FilterListStyle, Options, Request};
use crate::providers::{CpanelResult, RequestExecutor};

/// Facade over the cPanel `Email` module.
///
/// Holds no state besides the executor, so one instance can serve any number
/// of concurrent callers.
pub struct EmailService<E> {
    executor: E,
}

impl<E: RequestExecutor> EmailService<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    async fn perform(&self, request: Request) -> CpanelResult<Value> {
        tracing::debug!(function = request.function(), "performing email request");
        self.executor.perform_request(request).await
    }

    /// How the main account handles undeliverable mail.
    ///
    /// Takes no parameters; any options are ignored.
    pub async fn main_discard(&self, _options: Options) -> CpanelResult<Value> {
        self.perform(Request::new("checkmaindiscard")).await
    }

    /// Adds a forwarder.
    ///
    /// Options: `domain`, `email` (local part), `fwdopt` (`fwd`, `pipe`,
    /// `system`, `blackhole` or `fail`), `fwdemail`, and depending on
    /// `fwdopt` one of `fwdsystem`, `failmsgs` or `pipefwd`.
    pub async fn add_forwarder(&self, options: Options) -> CpanelResult<Value> {
        self.perform(Request::new("addforward").merge(options)).await
    }

    /// Lists forwarders, optionally filtered by `domain` and `regex`.
    pub async fn forwarders(&self, options: Options) -> CpanelResult<Value> {
        self.perform(Request::new("listforwards").merge(options))
            .await
    }

    /// Domains that use aliases or custom catch-all addresses.
    ///
    /// Takes no parameters; any options are ignored.
    pub async fn domains_with_aliases(&self, _options: Options) -> CpanelResult<Value> {
        self.perform(Request::new("listaliasbackups")).await
    }

    /// Creates a Mailman mailing list from `list`, `password` and `domain`.
    ///
    /// API 2 has no equivalent, so this goes through API 1 with positional
    /// arguments. Only the three named options are used; a missing one is
    /// sent as `null`.
    pub async fn add_mailing_list(&self, mut options: Options) -> CpanelResult<Value> {
        let list = options.take("list").unwrap_or(Value::Null);
        let password = options.take("password").unwrap_or(Value::Null);
        let domain = options.take("domain").unwrap_or(Value::Null);

        let request = Request::new("addlist")
            .with_version(1)
            .param("arg-0", list)
            .param("arg-1", password)
            .param("arg-2", domain);

        self.perform(request).await
    }

    /// Lists Mailman mailing lists, optionally filtered by `domain` and `regex`.
    pub async fn mailing_lists(&self, options: Options) -> CpanelResult<Value> {
        self.perform(Request::new("listlists").merge(options)).await
    }

    /// Domains that can send and receive mail. Pass `skipmain: "1"` to leave
    /// out the main domain.
    pub async fn domains(&self, options: Options) -> CpanelResult<Value> {
        self.perform(Request::new("listmaildomains").merge(options))
            .await
    }

    /// Mail exchanger information for `domain`.
    pub async fn mx(&self, options: Options) -> CpanelResult<Value> {
        self.perform(Request::new("listmxs").merge(options)).await
    }

    /// Sets how mail for `domain` is delivered.
    ///
    /// `delivery` is one of `auto`, `local`, `secondary` or `remote`, and is
    /// also sent as `mxcheck`. Caller options are merged last, so an explicit
    /// `mxcheck` replaces the value derived from `delivery`.
    pub async fn set_mail_delivery(&self, options: Options) -> CpanelResult<Value> {
        let mxcheck = options.get("delivery").cloned().unwrap_or(Value::Null);
        let request = Request::new("setalwaysaccept")
            .param("mxcheck", mxcheck)
            .merge(options);

        self.perform(request).await
    }

    /// Reads the local delivery setting from cPanel's configuration (not DNS).
    /// Without `domain`, every domain is reported.
    pub async fn check_local_delivery(&self, options: Options) -> CpanelResult<Value> {
        self.perform(Request::new("getalwaysaccept").merge(options))
            .await
    }

    /// Creates or renames a filter.
    ///
    /// Options: `account` (empty for account-level filters), `filtername`,
    /// `oldfiltername` to rename, and numbered rule keys `part1`, `match1`,
    /// `val1`, `opt1`, `action1`, `dest1`, ...
    pub async fn add_filter(&self, options: Options) -> CpanelResult<Value> {
        self.perform(Request::new("storefilter").merge(options))
            .await
    }

    /// Lists filters for `account`, or account-level filters when omitted.
    ///
    /// A truthy `old_style` selects the deprecated `listfilters` function;
    /// the flag itself is not forwarded.
    pub async fn filters(&self, mut options: Options) -> CpanelResult<Value> {
        let style = FilterListStyle::from_option(options.take("old_style").as_ref());
        self.perform(Request::new(style.api_function()).merge(options))
            .await
    }

    /// Adds a POP account from `domain`, `email`, `password` and `quota` (MB,
    /// 0 for unlimited).
    pub async fn add_account(&self, options: Options) -> CpanelResult<Value> {
        self.perform(Request::new("addpop").merge(options)).await
    }

    /// Lists email accounts.
    ///
    /// `style` picks the listing function (`with_disk`, `without_disk`,
    /// `with_image` or `single`); absent or unknown values use `with_disk`.
    /// The selector is not forwarded. Other useful options: `domain`, `regex`,
    /// `nearquotaonly`, `no_validate`.
    pub async fn accounts(&self, mut options: Options) -> CpanelResult<Value> {
        let style = AccountListStyle::from_option(options.take("style").as_ref());
        self.perform(Request::new(style.api_function()).merge(options))
            .await
    }

    /// Default address for `domain`.
    pub async fn default_address(&self, options: Options) -> CpanelResult<Value> {
        self.perform(Request::new("listdefaultaddresses").merge(options))
            .await
    }

    /// Disk usage of the account `login`@`domain`.
    pub async fn disk_usage(&self, options: Options) -> CpanelResult<Value> {
        self.perform(Request::new("getdiskusage").merge(options))
            .await
    }

    /// Absolute path of mail folder `dir` (default `mail`) for `account`.
    pub async fn mail_dir(&self, options: Options) -> CpanelResult<Value> {
        self.perform(Request::new("getabsbrowsedir").merge(options))
            .await
    }

    /// Lists mail directories. `dir` of `default` or `mail` lists all of
    /// them; a domain lists that domain's. `showdotfiles` includes hidden ones.
    pub async fn mail_dirs(&self, options: Options) -> CpanelResult<Value> {
        self.perform(Request::new("browseboxes").merge(options))
            .await
    }
}
