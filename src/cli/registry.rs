use std::collections::HashMap;

use crate::cli::core::CommandResult;
use crate::cli::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// Who may run a command. Store commands stand in for the navbar, which only
/// exists once someone has signed in; the account forms only exist before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Anyone,
    Guest,
    SignedIn,
}

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub access: Access,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            access: Access::Anyone,
            handler,
        }
    }

    pub const fn signed_in(mut self) -> Self {
        self.access = Access::SignedIn;
        self
    }

    pub const fn guest_only(mut self) -> Self {
        self.access = Access::Guest;
        self
    }

    pub fn available(&self, logged_in: bool) -> bool {
        match self.access {
            Access::Anyone => true,
            Access::Guest => !logged_in,
            Access::SignedIn => logged_in,
        }
    }
}

pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandEntry>,
    order: Vec<&'static str>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn register(&mut self, entry: CommandEntry) {
        let name = entry.name;
        if self.commands.insert(name, entry).is_none() {
            self.order.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(name)
    }

    pub fn list(&self) -> Vec<&CommandEntry> {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name))
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
        Ok(())
    }

    #[test]
    fn registration_keeps_first_insertion_order() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandEntry::new("login", "Sign in", "login", noop));
        registry.register(CommandEntry::new("cart", "Cart", "cart", noop).signed_in());
        registry.register(CommandEntry::new("login", "Sign in again", "login", noop));

        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["login", "cart"]);
        assert_eq!(registry.get("login").map(|e| e.description), Some("Sign in again"));
    }

    #[test]
    fn signed_in_entries_are_hidden_from_guests() {
        let entry = CommandEntry::new("cart", "Cart", "cart", noop).signed_in();
        assert!(!entry.available(false));
        assert!(entry.available(true));
        assert!(CommandEntry::new("help", "Help", "help", noop).available(false));
    }

    #[test]
    fn guest_entries_disappear_after_sign_in() {
        let entry = CommandEntry::new("login", "Sign in", "login", noop).guest_only();
        assert!(entry.available(false));
        assert!(!entry.available(true));
    }
}
