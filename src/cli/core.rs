//! Dispatch, error reporting, and session plumbing for the shell.

use std::io;

use dialoguer::theme::ColorfulTheme;
use gift_config::{ConfigError, ConfigManager};
use gift_core::{reduce, Action, CoreError, Notice, Session};
use strsim::levenshtein;
use thiserror::Error;

use super::commands;
use super::io as cli_io;
use super::registry::{CommandEntry, CommandRegistry};
pub use super::shell_context::{CliMode, ShellContext};
use super::ui::banner::Banner;
use super::ui::views;
pub use crate::errors::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_config_manager(mode, ConfigManager::from_env()?)
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config = config_manager.load()?;
        cli_io::apply_config(&config);
        let session = Session::with_preferences(config.default_sort, config.default_max_price);
        tracing::info!(session = %session.id, ?mode, "shell started");

        Ok(ShellContext {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            session,
            config_manager,
            config,
            last_command: None,
            running: true,
        })
    }

    pub(crate) fn is_interactive(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub(crate) fn prompt(&self) -> String {
        Banner::text(&self.session)
    }

    pub(crate) fn command_usages(&self) -> Vec<(&'static str, &'static str)> {
        self.registry
            .list()
            .into_iter()
            .map(|entry| (entry.name, entry.usage))
            .collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    /// Runs `action` through the reducer, prints its notice, and redraws the
    /// page when the action moved the session somewhere else.
    pub(crate) fn apply(&mut self, action: Action) -> Result<Notice, CommandError> {
        let before = self.session.page;
        let notice = reduce(&mut self.session, action)?;
        announce(&notice);
        if self.session.page != before {
            self.render_page();
        }
        Ok(notice)
    }

    pub(crate) fn render_page(&self) {
        views::render(&self.session, &self.config);
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    /// Positional argument `index`, prompting for it interactively when absent.
    pub(crate) fn arg_or_prompt(
        &self,
        args: &[&str],
        index: usize,
        prompt: &str,
        usage: &str,
    ) -> Result<String, CommandError> {
        if let Some(value) = args.get(index) {
            return Ok((*value).to_string());
        }
        if self.is_interactive() {
            return cli_io::prompt_text(&self.theme, prompt);
        }
        Err(CommandError::InvalidArguments(format!("usage: {usage}")))
    }

    /// Like [`Self::arg_or_prompt`] but with masked input.
    pub(crate) fn secret_or_prompt(
        &self,
        args: &[&str],
        index: usize,
        prompt: &str,
        usage: &str,
    ) -> Result<String, CommandError> {
        if let Some(value) = args.get(index) {
            return Ok((*value).to_string());
        }
        if self.is_interactive() {
            return cli_io::prompt_password(&self.theme, prompt, false);
        }
        Err(CommandError::InvalidArguments(format!("usage: {usage}")))
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let logged_in = self.session.is_logged_in();
        let Some((handler, allowed)) = self
            .registry
            .get(command)
            .map(|entry| (entry.handler, entry.available(logged_in)))
        else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };

        if !allowed {
            let command = command.to_string();
            return Err(if logged_in {
                CommandError::SignOutRequired(command)
            } else {
                CommandError::SignInRequired(command)
            });
        }

        tracing::debug!(session = %self.session.id, command, "dispatching");
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                self.print_warning(&err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let command = tokens[0].to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.dispatch(&command, &tokens[0], &args)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let logged_in = self.session.is_logged_in();
        let needle = input.to_lowercase();
        let best = self
            .registry
            .list()
            .into_iter()
            .filter(|entry| entry.available(logged_in))
            .map(|entry| (levenshtein(entry.name, &needle), entry.name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(cli_io::confirm_action(&self.theme, "Exit Gift Galaxy?", false)?)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        tracing::debug!(command = ?self.last_command, error = %err, "command failed");
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                self.print_hint("Use `help <command>` for usage details.");
            }
            CommandError::SignInRequired(_) => {
                self.print_error(&err.to_string());
                self.print_hint("Use `login` or `register` first.");
            }
            CommandError::SignOutRequired(_) => {
                self.print_error(&err.to_string());
                self.print_hint("Use `logout` first.");
            }
            CommandError::Core(CoreError::DuplicateUsername(_)) => {
                self.print_error(&err.to_string());
                self.print_hint("Pick another username or `nav login`.");
            }
            other => self.print_error(&other.to_string()),
        }
        Ok(())
    }

    pub(crate) fn print_error(&self, message: &str) {
        cli_io::print_error(message);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }

    pub(crate) fn print_hint(&self, message: &str) {
        cli_io::print_hint(message);
    }
}

fn announce(notice: &Notice) {
    match notice {
        Notice::Navigated { .. } | Notice::FiltersUpdated | Notice::Unchanged => {}
        other if other.is_success() => cli_io::print_success(other),
        other => cli_io::print_info(other),
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("`{0}` is available after you log in.")]
    SignInRequired(String),
    #[error("`{0}` is not available while signed in.")]
    SignOutRequired(String),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

#[cfg(test)]
pub(crate) fn process_script(
    lines: &[&str],
    config_manager: ConfigManager,
) -> Result<ShellContext, CliError> {
    let mut app = ShellContext::with_config_manager(CliMode::Script, config_manager)?;
    for line in lines {
        match app.process_line(line)? {
            LoopControl::Continue => {}
            LoopControl::Exit => break,
        }
    }
    Ok(app)
}

#[cfg(test)]
mod tests {
    use gift_domain::{Category, GiftId, Page, SortOrder};
    use tempfile::{tempdir, TempDir};

    use super::*;

    fn manager() -> (TempDir, ConfigManager) {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        (dir, manager)
    }

    fn run(lines: &[&str]) -> ShellContext {
        let (_dir, manager) = manager();
        process_script(lines, manager).unwrap()
    }

    fn signed_in() -> (TempDir, ShellContext) {
        let (dir, manager) = manager();
        let context =
            process_script(&["register asha secret \"Asha K\"", "login asha secret"], manager)
                .unwrap();
        (dir, context)
    }

    #[test]
    fn parse_line_handles_quotes() {
        let tokens =
            crate::cli::shell::parse_command_line("register asha pw \"Asha K\"").unwrap();
        assert_eq!(tokens, vec!["register", "asha", "pw", "Asha K"]);
    }

    #[test]
    fn script_registers_and_logs_in() {
        let (_dir, context) = signed_in();

        assert_eq!(context.session.logged_in_user.as_deref(), Some("asha"));
        assert_eq!(context.session.display_name(), Some("Asha K"));
        assert_eq!(context.session.page, Page::Home);
    }

    #[test]
    fn store_commands_need_a_signed_in_user() {
        let mut context = run(&[]);

        let err = context.process_line("cart add 3").unwrap_err();
        assert!(matches!(err, CommandError::SignInRequired(ref name) if name == "cart"));
        assert!(context.session.cart.is_empty());
        assert!(context.process_line("help").is_ok());
    }

    #[test]
    fn wrong_password_keeps_login_page() {
        let mut context = run(&["register bob pw"]);

        let err = context.process_line("login bob nope").unwrap_err();

        assert!(matches!(err, CommandError::Core(CoreError::InvalidCredentials)));
        assert_eq!(context.session.page, Page::Login);
        assert_eq!(context.session.users["bob"].display_name, "bob");
    }

    #[test]
    fn duplicate_registration_is_reported() {
        let mut context = run(&["register bob pw Bob"]);

        let err = context.process_line("register bob other Robert").unwrap_err();

        assert!(matches!(
            err,
            CommandError::Core(CoreError::DuplicateUsername(ref name)) if name == "bob"
        ));
        assert_eq!(context.session.users["bob"].display_name, "Bob");
    }

    #[test]
    fn missing_arguments_in_script_mode_are_invalid() {
        let mut context = run(&[]);
        assert!(matches!(
            context.process_line("login asha"),
            Err(CommandError::InvalidArguments(_))
        ));
    }

    #[test]
    fn unknown_command_keeps_running() {
        let mut context = run(&[]);
        assert_eq!(context.process_line("lgoin").unwrap(), LoopControl::Continue);
        assert_eq!(context.process_line("exit").unwrap(), LoopControl::Exit);
    }

    #[test]
    fn cart_and_wishlist_commands_update_lists() {
        let (_dir, mut context) = signed_in();
        for line in [
            "cart add 3",
            "cart add 3",
            "cart add 99",
            "wishlist add 7",
            "cart remove 3",
            "cart add 5",
        ] {
            context.process_line(line).unwrap();
        }

        let cart: Vec<GiftId> = context.session.cart.iter().map(|gift| gift.id).collect();
        assert_eq!(cart, vec![GiftId(5)]);
        assert_eq!(context.session.wishlist.len(), 1);
        assert!(matches!(
            context.process_line("cart add seven"),
            Err(CommandError::InvalidArguments(_))
        ));
    }

    #[test]
    fn filter_commands_shape_the_listing() {
        let (_dir, mut context) = signed_in();
        for line in [
            "search gift 2",
            "sort price-desc",
            "max-price 1600",
            "categories toys gourmet",
        ] {
            context.process_line(line).unwrap();
        }

        let ids: Vec<u32> = context
            .session
            .visible_gifts()
            .iter()
            .map(|gift| gift.id.0)
            .collect();
        assert_eq!(ids, vec![20, 2]);
        assert_eq!(context.session.sort_by, SortOrder::PriceDesc);

        context.process_line("categories all").unwrap();
        context.process_line("search").unwrap();
        assert!(context.session.filter_category.is_empty());
        assert!(context.session.search_query.is_empty());
    }

    #[test]
    fn max_price_stays_on_the_slider() {
        let (_dir, mut context) = signed_in();

        for bad in ["max-price 100", "max-price 3100", "max-price 1550", "max-price lots"] {
            assert!(matches!(
                context.process_line(bad),
                Err(CommandError::InvalidArguments(_))
            ));
        }
        assert_eq!(context.session.filter_price, 3000);

        context.process_line("max-price 500").unwrap();
        assert_eq!(context.session.filter_price, 500);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let (_dir, mut context) = signed_in();

        assert!(context.process_line("categories sports").is_err());
        context.process_line("categories \"home decor\"").unwrap();
        assert!(context.session.filter_category.contains(&Category::HomeDecor));
    }

    #[test]
    fn nav_only_follows_offered_links() {
        let mut context = run(&["nav register"]);
        assert_eq!(context.session.page, Page::Register);

        assert!(context.process_line("nav cart").is_err());
        assert_eq!(context.session.page, Page::Register);

        let (_dir, mut context) = signed_in();
        context.process_line("nav profile").unwrap();
        assert_eq!(context.session.page, Page::Profile);
        context.process_line("cart").unwrap();
        assert_eq!(context.session.page, Page::Cart);
    }

    #[test]
    fn profile_save_updates_display_name_and_password() {
        let (_dir, mut context) = signed_in();

        context.process_line("profile save \"Asha R\"").unwrap();
        assert_eq!(context.session.display_name(), Some("Asha R"));
        assert_eq!(context.session.users["asha"].password, "secret");

        context.process_line("profile save Asha hunter2").unwrap();
        context.process_line("logout").unwrap();
        assert_eq!(context.session.page, Page::Login);
        context.process_line("login asha hunter2").unwrap();
        assert_eq!(context.session.display_name(), Some("Asha"));
    }

    #[test]
    fn logout_hides_store_commands_again() {
        let (_dir, mut context) = signed_in();
        context.process_line("cart add 1").unwrap();
        context.process_line("logout").unwrap();

        assert!(matches!(
            context.process_line("wishlist"),
            Err(CommandError::SignInRequired(_))
        ));
        assert_eq!(context.session.cart.len(), 1);
    }

    #[test]
    fn account_forms_close_once_signed_in() {
        let (_dir, mut context) = signed_in();

        assert!(matches!(
            context.process_line("register eve pw"),
            Err(CommandError::SignOutRequired(_))
        ));
        assert!(!context.session.users.contains_key("eve"));
    }

    #[test]
    fn slider_changes_keep_price_filter_reachable() {
        let (_dir, mut context) = signed_in();

        context.process_line("config set price_floor 550").unwrap();
        context.process_line("max-price 3000").unwrap();
        assert_eq!(context.session.filter_price, 3000);
        assert!(context.process_line("max-price 600").is_err());
        context.process_line("max-price 650").unwrap();

        context.process_line("max-price 3000").unwrap();
        context.process_line("config set price_ceiling 2000").unwrap();
        assert_eq!(context.session.filter_price, 2000);

        context.process_line("config set price_step 50").unwrap();
        context.process_line("max-price 600").unwrap();
        assert_eq!(context.session.filter_price, 600);
    }

    #[test]
    fn config_set_persists_and_seeds_next_session() {
        let (dir, manager) = manager();
        process_script(&["config set default_sort price-asc", "exit"], manager).unwrap();

        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let context = process_script(&[], manager).unwrap();

        assert_eq!(context.config.default_sort, SortOrder::PriceAsc);
        assert_eq!(context.session.sort_by, SortOrder::PriceAsc);
    }
}
