use std::collections::BTreeSet;

use gift_core::{Action, CatalogService};
use gift_domain::{Category, Page, SortOrder};

use super::navigation::open_page;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::formatting::Formatter;

const SORT_USAGE: &str = "sort <name|price-asc|price-desc>";
const MAX_PRICE_USAGE: &str = "max-price <amount>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("gifts", "Show the gift listing", "gifts", cmd_gifts).signed_in(),
        CommandEntry::new(
            "search",
            "Filter gifts by name (no text clears it)",
            "search [text]",
            cmd_search,
        )
        .signed_in(),
        CommandEntry::new("sort", "Change the listing order", SORT_USAGE, cmd_sort).signed_in(),
        CommandEntry::new(
            "max-price",
            "Hide gifts above a price",
            MAX_PRICE_USAGE,
            cmd_max_price,
        )
        .signed_in(),
        CommandEntry::new(
            "categories",
            "Show or choose category filters",
            "categories [all | <category>...]",
            cmd_categories,
        )
        .signed_in(),
    ]
}

fn cmd_gifts(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    open_page(context, Page::Home)
}

fn cmd_search(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let text = args.join(" ");
    context.apply(Action::UpdateSearch(text))?;
    open_page(context, Page::Home)
}

fn cmd_sort(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let sort_by = match args.first() {
        Some(raw) => SortOrder::parse(raw).ok_or_else(|| {
            CommandError::InvalidArguments(format!("Unknown sort `{raw}`. usage: {SORT_USAGE}"))
        })?,
        None if context.is_interactive() => {
            let current = SortOrder::ALL
                .iter()
                .position(|order| *order == context.session.sort_by)
                .unwrap_or(0);
            let index =
                cli_io::select_option(&context.theme, "Sort by", &SortOrder::ALL, current)?;
            SortOrder::ALL[index]
        }
        None => return Err(CommandError::InvalidArguments(format!("usage: {SORT_USAGE}"))),
    };
    context.apply(Action::UpdateSort(sort_by))?;
    open_page(context, Page::Home)
}

fn cmd_max_price(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = context.arg_or_prompt(args, 0, "Maximum price", MAX_PRICE_USAGE)?;
    let amount = parse_slider_amount(context, &raw)?;
    context.apply(Action::UpdateMaxPrice(amount))?;
    open_page(context, Page::Home)
}

/// Accepts only values the price slider could produce.
fn parse_slider_amount(context: &ShellContext, raw: &str) -> Result<u32, CommandError> {
    let config = &context.config;
    let out_of_range = || {
        CommandError::InvalidArguments(format!(
            "Max price must be between {} and {} in steps of {}.",
            config.format_price(config.price_floor),
            config.format_price(config.price_ceiling),
            config.format_price(config.price_step)
        ))
    };

    let amount: u32 = raw
        .trim()
        .trim_start_matches(config.currency_symbol.as_str())
        .parse()
        .map_err(|_| out_of_range())?;
    if !config.price_on_slider(amount) {
        return Err(out_of_range());
    }
    Ok(amount)
}

fn cmd_categories(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let offered = CatalogService::categories(&context.session.catalog);

    if args.is_empty() {
        print_category_choices(context, &offered);
        return Ok(());
    }

    let selected = if args.len() == 1 && args[0].eq_ignore_ascii_case("all") {
        BTreeSet::new()
    } else {
        args.iter()
            .map(|raw| {
                Category::parse(raw)
                    .filter(|category| offered.contains(category))
                    .ok_or_else(|| {
                        let names: Vec<&str> =
                            offered.iter().map(|category| category.label()).collect();
                        CommandError::InvalidArguments(format!(
                            "Unknown category `{raw}`. Choose from: {}",
                            names.join(", ")
                        ))
                    })
            })
            .collect::<Result<BTreeSet<Category>, CommandError>>()?
    };

    context.apply(Action::UpdateCategories(selected))?;
    open_page(context, Page::Home)
}

fn print_category_choices(context: &ShellContext, offered: &[Category]) {
    let formatter = Formatter::new();
    formatter.print_header("Categories");
    let selected = &context.session.filter_category;
    for category in offered {
        let mark = if selected.contains(category) { "[x]" } else { "[ ]" };
        formatter.print_detail(format!("  {mark} {category}"));
    }
    if selected.is_empty() {
        formatter.print_detail("No filter: all categories are listed.");
    }
}
