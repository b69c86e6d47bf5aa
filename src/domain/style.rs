//! Function-name tables for operations with several remote variants.

use serde_json::Value;

/// Which cPanel function lists email accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountListStyle {
    /// Accounts with disk usage (`listpopswithdisk`).
    #[default]
    WithDisk,
    /// Bare account list (`listpops`).
    WithoutDisk,
    /// Accounts with image data (`listpopswithimage`).
    WithImage,
    /// Single-line account list (`listpopssingle`).
    Single,
}

impl AccountListStyle {
    /// Resolves a `style` option value; absent or unrecognized values fall
    /// back to [`AccountListStyle::WithDisk`].
    pub fn from_option(value: Option<&Value>) -> Self {
        value
            .and_then(Value::as_str)
            .and_then(Self::from_name)
            .unwrap_or_default()
    }

    /// Looks up a style by its option name (`with_disk`, `without_disk`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim_start_matches(':') {
            "with_disk" => Some(Self::WithDisk),
            "without_disk" => Some(Self::WithoutDisk),
            "with_image" => Some(Self::WithImage),
            "single" => Some(Self::Single),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::WithDisk => "with_disk",
            Self::WithoutDisk => "without_disk",
            Self::WithImage => "with_image",
            Self::Single => "single",
        }
    }

    pub fn api_function(self) -> &'static str {
        match self {
            Self::WithDisk => "listpopswithdisk",
            Self::WithoutDisk => "listpops",
            Self::WithImage => "listpopswithimage",
            Self::Single => "listpopssingle",
        }
    }
}

/// Which cPanel function lists email filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterListStyle {
    /// Current `filterlist` function.
    #[default]
    Current,
    /// Deprecated `listfilters` function.
    Legacy,
}

impl FilterListStyle {
    /// Legacy when the `old_style` option is truthy.
    pub fn from_option(value: Option<&Value>) -> Self {
        if super::options::is_truthy(value) {
            Self::Legacy
        } else {
            Self::Current
        }
    }

    pub fn api_function(self) -> &'static str {
        match self {
            Self::Current => "filterlist",
            Self::Legacy => "listfilters",
        }
    }
}
