//! Invocation envelope handed to the bridge transport.

use crate::method::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sledlink_core::constants::PLUGIN_IDENTIFIER;
use std::fmt;

/// One marshalled call: plugin identifier, method name, positional arguments.
///
/// The facade builds exactly one invocation per operation and never reorders,
/// transforms, or drops arguments. Argument values are primitives (strings,
/// booleans, integers) except for the flat key-value maps used by device and
/// battery info payloads, so [`serde_json::Value`] covers the documented
/// shapes.
///
/// # Examples
///
/// ```
/// use sledlink_bridge::{Invocation, Method};
/// use serde_json::json;
///
/// let inv = Invocation::new(Method::SetAutoOffWhenIdle, vec![json!(5400), json!(30)]);
/// assert_eq!(inv.plugin(), "InfineaSDKCordova");
/// assert_eq!(inv.method().as_str(), "setAutoOffWhenIdle");
/// assert_eq!(inv.args().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invocation {
    method: Method,
    args: Vec<Value>,
}

impl Invocation {
    /// Build an invocation for the fixed plugin.
    #[must_use]
    pub fn new(method: Method, args: Vec<Value>) -> Self {
        Self { method, args }
    }

    /// The fixed plugin identifier carried by every invocation.
    #[must_use]
    pub fn plugin(&self) -> &'static str {
        PLUGIN_IDENTIFIER
    }

    /// The target method.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// The positional argument list, in caller order.
    #[must_use]
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Consume the invocation, yielding the argument list.
    #[must_use]
    pub fn into_args(self) -> Vec<Value> {
        self.args
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}({} args)",
            self.plugin(),
            self.method,
            self.args.len()
        )
    }
}
