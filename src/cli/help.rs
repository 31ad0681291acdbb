use crate::cli::registry::{Access, CommandEntry, CommandRegistry};
use crate::cli::ui::formatting::Formatter;

/// Lists the commands usable right now, then the ones that unlock on sign-in.
pub fn print_overview(registry: &CommandRegistry, logged_in: bool) {
    let formatter = Formatter::new();
    formatter.print_header("Available commands");

    let (open, locked): (Vec<&CommandEntry>, Vec<&CommandEntry>) = registry
        .list()
        .into_iter()
        .partition(|entry| entry.available(logged_in));

    let rows: Vec<(&str, &str)> = open
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect();
    formatter.print_two_column(&rows);

    if !locked.is_empty() {
        let names: Vec<&str> = locked.iter().map(|entry| entry.name).collect();
        let when = if logged_in {
            "After logging out"
        } else {
            "After signing in"
        };
        formatter.print_detail(format!("{when}: {}", names.join(", ")));
    }
    formatter.print_detail("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    let formatter = Formatter::new();
    formatter.print_header(format!("Help: {}", entry.name));
    let access = match entry.access {
        Access::Anyone => "anyone",
        Access::Guest => "signed-out visitors",
        Access::SignedIn => "signed-in users",
    };
    formatter.print_two_column(&[
        ("description", entry.description),
        ("usage", entry.usage),
        ("available to", access),
    ]);
}
