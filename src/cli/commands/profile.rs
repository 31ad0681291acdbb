use gift_core::Action;
use gift_domain::Page;

use super::navigation::open_page;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::registry::CommandEntry;

const PROFILE_USAGE: &str = "profile [show | save <display name> [new password]]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "profile",
        "Show or update your profile",
        PROFILE_USAGE,
        cmd_profile,
    )
    .signed_in()]
}

fn cmd_profile(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|value| value.to_lowercase()).as_deref() {
        None | Some("show") => open_page(context, Page::Profile),
        Some("save") => save_profile(context, &args[1..]),
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "Unknown action `{other}`. usage: {PROFILE_USAGE}"
        ))),
    }
}

/// An empty or missing password keeps the current one.
fn save_profile(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let current = context.session.display_name().unwrap_or_default().to_string();
    let display_name = match args.first() {
        Some(name) => (*name).to_string(),
        None if context.is_interactive() => {
            cli_io::prompt_text_with_default(&context.theme, "Display name", &current)?
        }
        None => current,
    };
    let password = match args.get(1) {
        Some(secret) => Some((*secret).to_string()),
        None if context.is_interactive() => Some(cli_io::prompt_password(
            &context.theme,
            "New password (Enter to keep)",
            true,
        )?),
        None => None,
    }
    .filter(|secret| !secret.is_empty());

    context.apply(Action::SaveProfile {
        display_name,
        password,
    })?;
    if context.session.page == Page::Profile {
        context.render_page();
    }
    Ok(())
}
