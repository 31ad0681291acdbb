use gift_core::{Action, Router};
use gift_domain::Page;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "nav",
            "Follow a link from the current page",
            "nav <page>",
            cmd_nav,
        ),
        CommandEntry::new("show", "Redraw the current page", "show", cmd_show),
    ]
}

fn cmd_nav(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let logged_in = context.session.is_logged_in();
    let links = Router::links(context.session.page, logged_in);
    let offered = links
        .iter()
        .map(|page| page.token())
        .collect::<Vec<_>>()
        .join(", ");

    let Some(raw) = args.first() else {
        context.print_hint(&format!("Links from here: {offered}"));
        return Ok(());
    };
    let target = Page::parse(raw)
        .ok_or_else(|| CommandError::InvalidArguments(format!("Unknown page `{raw}`.")))?;
    if !Router::can_follow(context.session.page, logged_in, target) {
        return Err(CommandError::InvalidArguments(format!(
            "There is no link to `{}` from here. Links: {offered}",
            target.token()
        )));
    }

    open_page(context, target)
}

fn cmd_show(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.render_page();
    Ok(())
}

/// Moves to `page`, or redraws it when the session is already there.
pub(crate) fn open_page(context: &mut ShellContext, page: Page) -> CommandResult {
    if context.session.page == page {
        context.render_page();
    } else {
        context.apply(Action::Navigate(page))?;
    }
    Ok(())
}
