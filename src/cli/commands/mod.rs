pub mod account;
pub mod catalog;
pub mod config;
pub mod lists;
pub mod navigation;
pub mod profile;
pub mod system;

use gift_domain::GiftId;

use crate::cli::core::CommandError;
use crate::cli::registry::{CommandEntry, CommandRegistry};

const ROOT_COMMAND_ORDER: &[&str] = &[
    "register",
    "login",
    "logout",
    "nav",
    "show",
    "gifts",
    "search",
    "sort",
    "max-price",
    "categories",
    "cart",
    "wishlist",
    "checkout",
    "profile",
    "config",
    "help",
    "version",
    "exit",
];

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(account::definitions());
    commands.extend(navigation::definitions());
    commands.extend(catalog::definitions());
    commands.extend(lists::definitions());
    commands.extend(profile::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let mut entries = all_entries();
    entries.sort_by_key(|entry| {
        ROOT_COMMAND_ORDER
            .iter()
            .position(|name| entry.name.eq_ignore_ascii_case(name))
            .unwrap_or(ROOT_COMMAND_ORDER.len())
    });
    for entry in entries {
        registry.register(entry);
    }
}

pub(crate) fn parse_gift_id(raw: &str) -> Result<GiftId, CommandError> {
    GiftId::parse(raw)
        .ok_or_else(|| CommandError::InvalidArguments(format!("`{raw}` is not a gift id.")))
}
