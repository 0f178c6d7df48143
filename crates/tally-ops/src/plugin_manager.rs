use std::collections::HashMap;

use crate::built_in::{
    add::AddOperation, divide::DivideOperation, multiply::MultiplyOperation,
    power::PowerOperation, root::RootOperation, subtract::SubtractOperation,
};
use crate::plugin::OperationPlugin;

/// Registry of operation strategies keyed by command name.
pub struct PluginManager {
    plugins: HashMap<String, Box<dyn OperationPlugin>>,
}

impl Default for PluginManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginManager {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { plugins: HashMap::new() }
    }

    /// Creates a registry pre-populated with every built-in operation.
    pub fn with_built_ins() -> Self {
        let mut manager = Self::new();
        manager.register(Box::new(AddOperation));
        manager.register(Box::new(SubtractOperation));
        manager.register(Box::new(MultiplyOperation));
        manager.register(Box::new(DivideOperation));
        manager.register(Box::new(PowerOperation));
        manager.register(Box::new(RootOperation));
        manager
    }

    /// Registers a strategy under its command name, replacing any previous
    /// registration with the same name.
    pub fn register(&mut self, plugin: Box<dyn OperationPlugin>) {
        self.plugins.insert(plugin.name().to_string(), plugin);
    }

    /// Looks up a strategy by command name.
    pub fn get(&self, name: &str) -> Option<&dyn OperationPlugin> {
        self.plugins.get(name).map(|p| p.as_ref())
    }

    /// Command names of every registered strategy, sorted for stable output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.plugins.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
