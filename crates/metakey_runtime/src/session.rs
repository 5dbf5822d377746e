//! Editor session and customization-module lifecycle.
//!
//! The session owns the configuration and the customization modules the
//! host editor registered. Any configuration edit tears down and restarts
//! every module, so stale customizations are never shown. Everything runs
//! synchronously on the caller's thread.

use std::collections::HashSet;

use metakey_engine::{AttachDecision, AttachmentValidator, QueryEngine};
use metakey_foundation::{ClassId, Error, MetaValue, PropertyDescriptor, Result};
use metakey_registry::MetaDataKey;

use crate::config::EditorConfig;
use crate::widget;

/// A UI customization hooked into the session lifecycle.
///
/// `start` is called with the live configuration when the session starts and
/// again after every configuration edit; `stop` is called before each
/// restart and at shutdown.
pub trait CustomizationModule {
    /// Brings the customization up against the given configuration.
    fn start(&mut self, config: &EditorConfig);

    /// Tears the customization down.
    fn stop(&mut self);
}

/// An editor session owning the configuration and its dependent modules.
pub struct EditorSession {
    /// The live configuration.
    config: EditorConfig,
    /// Registered customization modules, started in registration order.
    modules: Vec<Box<dyn CustomizationModule>>,
    /// Whether modules are currently started.
    started: bool,
}

impl EditorSession {
    /// Creates a session around an existing configuration.
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            modules: Vec::new(),
            started: false,
        }
    }

    /// Creates a session with the built-in catalog.
    #[must_use]
    pub fn with_default_catalog() -> Self {
        Self::new(EditorConfig::with_default_catalog())
    }

    /// The live configuration.
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Registers a customization module.
    ///
    /// If the session is already started the module starts immediately.
    pub fn register_module(&mut self, mut module: Box<dyn CustomizationModule>) {
        if self.started {
            module.start(&self.config);
        }
        self.modules.push(module);
    }

    /// Starts all registered modules.
    pub fn startup(&mut self) {
        if self.started {
            return;
        }
        for module in &mut self.modules {
            module.start(&self.config);
        }
        self.started = true;
    }

    /// Stops all registered modules.
    pub fn shutdown(&mut self) {
        if !self.started {
            return;
        }
        for module in &mut self.modules {
            module.stop();
        }
        self.started = false;
    }

    /// Applies an edit to the configuration.
    ///
    /// If the edit changed the configuration generation, every module is
    /// stopped and restarted against the new state.
    pub fn edit_config(&mut self, edit: impl FnOnce(&mut EditorConfig)) {
        let before = self.config.generation();
        edit(&mut self.config);
        if self.config.generation() != before {
            self.restart_modules();
        }
    }

    /// Replaces the configuration wholesale (e.g. after loading a snapshot)
    /// and restarts all modules.
    pub fn replace_config(&mut self, config: EditorConfig) {
        self.config = config;
        self.restart_modules();
    }

    /// Keys applicable to a variable of the given shape in the given
    /// blueprint class.
    pub fn variable_keys<'a>(
        &'a self,
        class: ClassId,
        property: &'a PropertyDescriptor,
    ) -> impl Iterator<Item = &'a MetaDataKey> {
        QueryEngine::variable_keys(self.config.registry(), self.config.classes(), class, property)
    }

    /// Keys applicable to a function in the given blueprint class.
    pub fn function_keys(&self, class: ClassId) -> impl Iterator<Item = &MetaDataKey> {
        QueryEngine::function_keys(self.config.registry(), self.config.classes(), class)
    }

    /// All key names with the sentinel "none" entry first.
    #[must_use]
    pub fn key_names(&self) -> Vec<String> {
        QueryEngine::key_names(self.config.registry())
    }

    /// Checks whether a key may be attached given the already-attached
    /// names.
    ///
    /// # Errors
    /// Returns [`ErrorKind::UnknownKey`] if the name does not resolve
    /// against the registry.
    ///
    /// [`ErrorKind::UnknownKey`]: metakey_foundation::ErrorKind::UnknownKey
    pub fn check_attach(
        &self,
        key_name: &str,
        attached: &HashSet<String>,
    ) -> Result<AttachDecision> {
        let registry = self.config.registry();
        let candidate = registry
            .get(key_name)
            .ok_or_else(|| Error::unknown_key(key_name))?;
        Ok(AttachmentValidator::check(registry, candidate, attached))
    }

    /// Validates a raw annotation string for a key before committing it.
    ///
    /// # Errors
    /// Returns [`ErrorKind::UnknownKey`] for unresolved names, or the
    /// widget layer's parse/bounds errors.
    ///
    /// [`ErrorKind::UnknownKey`]: metakey_foundation::ErrorKind::UnknownKey
    pub fn validate_value(&self, key_name: &str, raw: &str) -> Result<MetaValue> {
        let candidate = self
            .config
            .registry()
            .get(key_name)
            .ok_or_else(|| Error::unknown_key(key_name))?;
        widget::validate_raw(candidate, raw)
    }

    fn restart_modules(&mut self) {
        if !self.started {
            return;
        }
        for module in &mut self.modules {
            module.stop();
        }
        for module in &mut self.modules {
            module.start(&self.config);
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::with_default_catalog()
    }
}
