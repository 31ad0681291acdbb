use gift_core::Action;

use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::registry::CommandEntry;

const REGISTER_USAGE: &str = "register <username> <password> [display name]";
const LOGIN_USAGE: &str = "login <username> <password>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("register", "Create an account", REGISTER_USAGE, cmd_register)
            .guest_only(),
        CommandEntry::new("login", "Sign in", LOGIN_USAGE, cmd_login).guest_only(),
        CommandEntry::new("logout", "Sign out and return to login", "logout", cmd_logout)
            .signed_in(),
    ]
}

fn cmd_register(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let username = context.arg_or_prompt(args, 0, "Username", REGISTER_USAGE)?;
    let password = context.secret_or_prompt(args, 1, "Password", REGISTER_USAGE)?;
    let display_name = if args.len() > 2 {
        args[2..].join(" ")
    } else if context.is_interactive() {
        cli_io::prompt_text_with_default(&context.theme, "Display name", &username)?
    } else {
        username.clone()
    };

    context.apply(Action::Register {
        username,
        password,
        display_name,
    })?;
    context.print_hint("Use `login` to sign in.");
    Ok(())
}

fn cmd_login(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let username = context.arg_or_prompt(args, 0, "Username", LOGIN_USAGE)?;
    let password = context.secret_or_prompt(args, 1, "Password", LOGIN_USAGE)?;
    context.apply(Action::Login { username, password })?;
    Ok(())
}

fn cmd_logout(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.apply(Action::Logout)?;
    Ok(())
}
