use std::{
    fmt,
    io::{self, BufRead},
};

use gift_config::Config;
use gift_domain::{Category, Page, SortOrder};
use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    hint::Hinter,
    history::DefaultHistory,
    Cmd, Context as ReadlineContext, Editor, Helper, Highlighter, KeyEvent, Validator,
};
use shell_words::split;

use crate::cli::core::{CliError, CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::io as cli_io;

/// Setting this variable reads commands from stdin without a line editor.
pub const SCRIPT_ENV: &str = "GIFT_GALAXY_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    context.render_page();

    let outcome = match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    };
    tracing::info!(session = %context.session.id, "shell closed");
    outcome
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    let helper = CommandHelper::new(context.command_usages());
    editor.set_helper(Some(helper));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);
    context.print_hint("Type `help` for commands, `?` to complete.");

    while context.running {
        let prompt = context.prompt();
        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
                continue;
            }
            Err(ReadlineError::Eof) => {
                cli_io::print_info("Goodbye!");
                break;
            }
            Err(err) => return Err(err.into()),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !carries_credentials(trimmed) {
            editor.add_history_entry(trimmed).ok();
        }
        if step(context, trimmed)? == LoopControl::Exit {
            break;
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !context.running || step(context, &line)? == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

/// Runs one line; command failures are reported and the shell carries on.
fn step(context: &mut ShellContext, line: &str) -> Result<LoopControl, CliError> {
    match handle_line(context, line) {
        Ok(control) => Ok(control),
        Err(err) => {
            context.report_error(err)?;
            Ok(LoopControl::Continue)
        }
    }
}

/// Lines that can hold a password stay out of the editor history.
fn carries_credentials(line: &str) -> bool {
    let mut words = line.split_whitespace().map(str::to_ascii_lowercase);
    match (words.next().as_deref(), words.next().as_deref()) {
        (Some("login" | "register"), Some(_)) => true,
        (Some("profile"), Some("save")) => true,
        _ => false,
    }
}

fn handle_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CommandError> {
    let tokens = match parse_command_line(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            context.print_warning(&err.message);
            return Ok(LoopControl::Continue);
        }
    };

    let Some(raw) = tokens.first() else {
        return Ok(LoopControl::Continue);
    };
    let command = raw.to_lowercase();
    let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

    // Credentials can appear on the line, so only the command word is kept.
    context.last_command = Some(command.clone());

    match context.dispatch(&command, raw, &args) {
        Ok(LoopControl::Exit) => {
            context.running = false;
            Ok(LoopControl::Exit)
        }
        other => other,
    }
}

/// Completes command names, then the words each storefront command accepts,
/// and hints the remaining usage once a command word is typed.
#[derive(Helper, Highlighter, Validator)]
struct CommandHelper {
    usages: Vec<(&'static str, &'static str)>,
}

impl CommandHelper {
    fn new(usages: Vec<(&'static str, &'static str)>) -> Self {
        Self { usages }
    }

    fn candidates(&self, words: &[&str], needle: &str) -> Vec<Pair> {
        let offered: Vec<String> = match words {
            [] => self.usages.iter().map(|(name, _)| name.to_string()).collect(),
            [command, rest @ ..] => argument_words(&command.to_ascii_lowercase(), rest),
        };
        offered
            .into_iter()
            .filter(|word| word.starts_with(needle))
            .map(|word| Pair {
                display: word.clone(),
                replacement: word,
            })
            .collect()
    }

    fn usage_hint(&self, line: &str) -> Option<String> {
        let command = line.trim_start().to_ascii_lowercase();
        let (_, usage) = self.usages.iter().find(|(name, _)| *name == command)?;
        let rest = usage.strip_prefix(command.as_str())?.trim_start();
        (!rest.is_empty()).then(|| format!(" {rest}"))
    }
}

/// Words accepted after `command`, given the arguments already typed.
fn argument_words(command: &str, typed: &[&str]) -> Vec<String> {
    match (command, typed) {
        ("nav", []) => Page::ALL.iter().map(|page| page.token().to_string()).collect(),
        ("sort", []) => SortOrder::ALL
            .iter()
            .map(|order| order.token().to_string())
            .collect(),
        ("categories", _) => std::iter::once("all".to_string())
            .chain(
                Category::ALL
                    .iter()
                    .map(|category| category.label().to_ascii_lowercase().replace(' ', "-")),
            )
            .collect(),
        ("cart" | "wishlist", []) => owned(&["list", "add", "remove"]),
        ("profile", []) => owned(&["show", "save"]),
        ("config", []) => owned(&["show", "set"]),
        ("config", ["set"]) => owned(&Config::KEYS),
        _ => Vec::new(),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let words: Vec<&str> = prefix[..start].split_whitespace().collect();
        let needle = prefix[start..].to_ascii_lowercase();
        Ok((start, self.candidates(&words, &needle)))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &ReadlineContext<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        self.usage_hint(line)
    }
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    split(input).map_err(|err| ParseError {
        message: err.to_string(),
    })
}

#[derive(Debug)]
pub(crate) struct ParseError {
    message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
