//! Request descriptors handed to a [`RequestExecutor`](crate::providers::RequestExecutor).

use serde_json::{Map, Value};

use super::options::Options;

/// cPanel module every email operation belongs to.
pub const EMAIL_MODULE: &str = "Email";

/// Option keys the executor interprets instead of forwarding.
const API_FUNCTION_KEY: &str = "api_function";
const API_VERSION_KEY: &str = "api_version";
const API_MODULE_KEY: &str = "api_module";
const API_USERNAME_KEY: &str = "api_username";

/// A single remote call: which function to run and with what parameters.
///
/// Built fresh for every facade call and consumed by the executor.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    function: String,
    version: Option<u32>,
    module: String,
    username: Option<String>,
    params: Map<String, Value>,
}

impl Request {
    /// Creates a request for `function` in the Email module with no parameters.
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            version: None,
            module: EMAIL_MODULE.to_string(),
            username: None,
            params: Map::new(),
        }
    }

    /// Pins the cPanel API version for this call.
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    /// Sets a single parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Merges caller options over the current parameters.
    ///
    /// Later values win, so anything the caller passes replaces a derived
    /// default. The reserved keys `api_function`, `api_version`, `api_module`
    /// and `api_username` retarget the request rather than becoming parameters.
    pub fn merge(mut self, options: Options) -> Self {
        for (key, value) in options {
            match key.as_str() {
                API_FUNCTION_KEY => match value {
                    Value::String(function) => self.function = function,
                    other => self.function = other.to_string(),
                },
                API_VERSION_KEY => {
                    if let Some(version) = parse_version(&value) {
                        self.version = Some(version);
                    }
                }
                API_MODULE_KEY => {
                    if let Value::String(module) = value {
                        self.module = module;
                    }
                }
                API_USERNAME_KEY => {
                    if let Value::String(username) = value {
                        self.username = Some(username);
                    }
                }
                _ => {
                    self.params.insert(key, value);
                }
            }
        }
        self
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn version(&self) -> Option<u32> {
        self.version
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    /// cPanel account override; the executor's configured user applies when unset.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }

    /// Renders the request as a flat mapping: `api_function`, `api_version`
    /// when pinned, then every parameter.
    pub fn descriptor(&self) -> Map<String, Value> {
        let mut descriptor = Map::new();
        descriptor.insert(
            API_FUNCTION_KEY.to_string(),
            Value::String(self.function.clone()),
        );
        if let Some(version) = self.version {
            descriptor.insert(API_VERSION_KEY.to_string(), Value::from(version));
        }
        for (key, value) in &self.params {
            descriptor.insert(key.clone(), value.clone());
        }
        descriptor
    }
}

fn parse_version(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
