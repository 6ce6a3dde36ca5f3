//! Registration options with fluent configuration.

use crate::error::SetupError;
use crate::flags::{Flags, StaticFlags};
use crate::program::ProgramPorts;
use serde_json::Value;
use std::rc::Rc;

/// Context handed to `on_setup_error`.
///
/// Carries the computed flags when setup failed after flag mapping, and is
/// empty when the failure happened before flags existed.
#[derive(Debug, Clone, Default)]
pub struct SetupContext {
    /// The flags value, if flag mapping completed before the failure.
    pub flags: Option<Flags>,
}

/// Consumer configuration for one tag registration.
///
/// All fields have the do-nothing defaults; override only what the program
/// needs.
///
/// # Example
///
/// ```rust,ignore
/// let options = BridgeOptions::new()
///     .static_flag("mode", json!("embedded"))
///     .setup_ports(|ports| wire_app_ports(ports))
///     .on_detached(|| tracing::info!("widget detached"))
///     .use_shadow_dom(true);
///
/// register(&registry, "my-widget", program, options)?;
/// ```
pub struct BridgeOptions {
    /// Invoked with the port pair right after a successful `init`.
    pub(crate) setup_ports: Rc<dyn Fn(&ProgramPorts)>,

    /// Flags merged over extracted attributes (static wins on collision).
    pub(crate) static_flags: StaticFlags,

    /// Invoked on every disconnect notification.
    pub(crate) on_detached: Rc<dyn Fn()>,

    /// Transform from merged properties to the program's flags shape.
    pub(crate) map_flags: Rc<dyn Fn(Flags) -> Result<Flags, SetupError>>,

    /// Setup-failure handler; when absent the default diagnostic is logged.
    pub(crate) on_setup_error: Option<Rc<dyn Fn(&SetupError, &SetupContext)>>,

    /// Mount the program behind an isolation boundary.
    pub(crate) use_shadow_dom: bool,
}

impl BridgeOptions {
    /// Options with all defaults: noop callbacks, empty static flags,
    /// identity flag mapper, no error handler, no isolation boundary.
    pub fn new() -> Self {
        Self {
            setup_ports: Rc::new(|_| {}),
            static_flags: StaticFlags::new(),
            on_detached: Rc::new(|| {}),
            map_flags: Rc::new(|flags| Ok(flags)),
            on_setup_error: None,
            use_shadow_dom: false,
        }
    }

    /// Set the port-setup callback, invoked once per successful connection.
    pub fn setup_ports(mut self, callback: impl Fn(&ProgramPorts) + 'static) -> Self {
        self.setup_ports = Rc::new(callback);
        self
    }

    /// Replace the static flags wholesale.
    pub fn static_flags(mut self, flags: StaticFlags) -> Self {
        self.static_flags = flags;
        self
    }

    /// Add a single static flag.
    pub fn static_flag(mut self, key: impl Into<String>, value: Value) -> Self {
        self.static_flags.insert(key.into(), value);
        self
    }

    /// Set the detach callback, invoked on every disconnect notification.
    pub fn on_detached(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_detached = Rc::new(callback);
        self
    }

    /// Set the flag mapper. A mapper failure surfaces as a setup error.
    pub fn map_flags(
        mut self,
        mapper: impl Fn(Flags) -> Result<Flags, SetupError> + 'static,
    ) -> Self {
        self.map_flags = Rc::new(mapper);
        self
    }

    /// Set the setup-error handler, replacing the default diagnostic.
    pub fn on_setup_error(
        mut self,
        handler: impl Fn(&SetupError, &SetupContext) + 'static,
    ) -> Self {
        self.on_setup_error = Some(Rc::new(handler));
        self
    }

    /// Mount the program behind an isolation boundary.
    pub fn use_shadow_dom(mut self, enabled: bool) -> Self {
        self.use_shadow_dom = enabled;
        self
    }
}

impl Default for BridgeOptions {
    fn default() -> Self {
        Self::new()
    }
}
