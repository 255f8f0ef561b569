// src/commands/registry.rs
use std::collections::HashMap;

use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<&'static str, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().copied().collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatCommand;
use super::cp::CpCommand;
use super::info::InfoCommand;
use super::insert::InsertCommand;
use super::mkdir::MkdirCommand;
use super::mkfile::MkfileCommand;
use super::rm::RmCommand;
use super::rmdir::RmdirCommand;

/// Registry holding every file operation the shell dispatches. The `exit`
/// keyword never reaches the registry; the shell loop terminates on it.
pub fn create_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(Box::new(InfoCommand));
    registry.register(Box::new(MkfileCommand));
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(RmCommand));
    registry.register(Box::new(RmdirCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(InsertCommand));
    registry.register(Box::new(CpCommand));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_all_keywords() {
        let registry = create_registry();
        for name in ["info", "mkfile", "mkdir", "rm", "rmdir", "cat", "insert", "cp"] {
            assert!(registry.contains(name), "missing command: {}", name);
        }
        assert_eq!(registry.names().len(), 8);
        assert!(!registry.contains("exit"));
    }

    #[test]
    fn test_lookup_miss() {
        let registry = create_registry();
        assert!(registry.get("bogus").is_none());
    }
}
