//! Construction of consent modules from a class name and credentials bag.

use crate::error::{ModuleError, ModuleResult};
use crate::module::ConsentAdapter;
use crate::types::ModuleCredentials;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Builds a consent module from the credentials Core was configured with.
pub type ModuleConstructor =
    Box<dyn Fn(&ModuleCredentials) -> Arc<dyn ConsentAdapter> + Send + Sync>;

/// Registry of module constructors keyed by class name.
///
/// Core configuration names modules by class name; the factory resolves that
/// name to a constructor and hands it the module's credentials unchanged.
#[derive(Default)]
pub struct ModuleFactory {
    constructors: HashMap<String, ModuleConstructor>,
}

impl ModuleFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a constructor under `class_name`.
    pub fn register<F>(&mut self, class_name: impl Into<String>, constructor: F) -> ModuleResult<()>
    where
        F: Fn(&ModuleCredentials) -> Arc<dyn ConsentAdapter> + Send + Sync + 'static,
    {
        let class_name = class_name.into();
        if self.constructors.contains_key(&class_name) {
            return Err(ModuleError::AlreadyRegistered(class_name));
        }

        debug!(class_name = %class_name, "Module constructor registered");
        self.constructors.insert(class_name, Box::new(constructor));
        Ok(())
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.constructors.contains_key(class_name)
    }

    pub fn class_names(&self) -> Vec<&str> {
        self.constructors.keys().map(String::as_str).collect()
    }

    /// Constructs the module registered under `class_name`.
    pub fn make(
        &self,
        class_name: &str,
        credentials: &ModuleCredentials,
    ) -> ModuleResult<Arc<dyn ConsentAdapter>> {
        let constructor = self
            .constructors
            .get(class_name)
            .ok_or_else(|| ModuleError::UnknownModule(class_name.to_string()))?;

        let module = constructor(credentials);
        info!(
            class_name = %class_name,
            module_id = %module.module_id(),
            "Module constructed from credentials"
        );
        Ok(module)
    }
}
