use gift_config::Config;
use gift_core::Action;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::formatting::Formatter;

const CONFIG_USAGE: &str = "config [show | set <key> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change saved preferences",
        CONFIG_USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|value| value.to_lowercase()).as_deref() {
        None | Some("show") => {
            show_config(context);
            Ok(())
        }
        Some("set") => set_config(context, &args[1..]),
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "Unknown action `{other}`. usage: {CONFIG_USAGE}"
        ))),
    }
}

fn show_config(context: &ShellContext) {
    let formatter = Formatter::new();
    formatter.print_header("Preferences");
    let rows = config_rows(&context.config);
    let borrowed: Vec<(&str, &str)> = rows
        .iter()
        .map(|(key, value)| (*key, value.as_str()))
        .collect();
    formatter.print_two_column(&borrowed);
    formatter.print_detail(format!(
        "Saved to {}",
        context.config_manager.config_path().display()
    ));
}

fn config_rows(config: &Config) -> Vec<(&'static str, String)> {
    let flag = |value: bool| if value { "on" } else { "off" }.to_string();
    Config::KEYS
        .iter()
        .map(|key| {
            let value = match *key {
                "locale" => config.locale.clone(),
                "currency_symbol" => config.currency_symbol.clone(),
                "theme" => config.theme.to_string(),
                "plain_output" => flag(config.accessibility.plain_output),
                "high_contrast" => flag(config.accessibility.high_contrast),
                "ui_color_enabled" => flag(config.ui_color_enabled),
                "default_sort" => config.default_sort.token().to_string(),
                "default_max_price" => config.default_max_price.to_string(),
                "price_floor" => config.price_floor.to_string(),
                "price_ceiling" => config.price_ceiling.to_string(),
                "price_step" => config.price_step.to_string(),
                _ => String::new(),
            };
            (*key, value)
        })
        .collect()
}

fn set_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (Some(key), Some(_)) = (args.first(), args.get(1)) else {
        return Err(CommandError::InvalidArguments(format!(
            "usage: {CONFIG_USAGE}. Keys: {}",
            Config::KEYS.join(", ")
        )));
    };
    let value = args[1..].join(" ");

    context.config.set(key, &value)?;
    context.persist_config()?;
    cli_io::apply_config(&context.config);
    tracing::info!(key = %key, "preference updated");
    cli_io::print_success(format!("Saved `{key}`."));
    keep_filter_on_slider(context)
}

/// Pulls the live price filter back inside slider bounds changed by `config set`.
fn keep_filter_on_slider(context: &mut ShellContext) -> CommandResult {
    let current = context.session.filter_price;
    let clamped = current.clamp(context.config.price_floor, context.config.price_ceiling);
    if clamped != current {
        context.apply(Action::UpdateMaxPrice(clamped))?;
        cli_io::print_info(format!(
            "Max price is now {}.",
            context.config.format_price(clamped)
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_cover_every_key() {
        let rows = config_rows(&Config::default());

        assert_eq!(rows.len(), Config::KEYS.len());
        assert!(rows.iter().all(|(_, value)| !value.is_empty()));
        assert!(rows.contains(&("default_sort", "name".to_string())));
        assert!(rows.contains(&("price_step", "100".to_string())));
    }
}
