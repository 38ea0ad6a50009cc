//! Line commands for the interactive front end.
//!
//! Each line the user types parses into a [`Command`], which [`execute`]
//! applies to a [`Session`]. Mutating commands answer with the refreshed
//! output field, so the link on screen always matches the latest input.

use std::str::FromStr;

use snafu::prelude::*;

use crate::{
    catalog::Catalog,
    clipboard::Clipboard,
    request::{RequestField, UnknownFieldError},
    selection::SelectionSet,
    session::{Session, SessionError},
};

/// Refers to a catalog entry by position or to a scope by identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeRef {
    /// A 1-based position in the catalog listing.
    Index(usize),
    /// A scope identifier.
    Id(String),
}

impl ScopeRef {
    /// Reads a command argument: digits are a position, anything else an
    /// identifier.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg.parse::<usize>() {
            Ok(index) => ScopeRef::Index(index),
            Err(_) => ScopeRef::Id(arg.to_string()),
        }
    }
}

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the catalog with selection markers.
    List,
    /// Toggle one or more scopes.
    Toggle(Vec<ScopeRef>),
    /// Set a form field.
    Set(RequestField, String),
    /// Empty a form field.
    Unset(RequestField),
    /// Deselect every scope.
    Clear,
    /// Show the output field.
    Show,
    /// Show the form fields.
    Fields,
    /// Copy the output field to the clipboard.
    Copy,
    /// Show the command summary.
    Help,
    /// Leave the session.
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(name, rest)| (name, rest.trim()));

        let command = match name.to_ascii_lowercase().as_str() {
            "" => return EmptySnafu.fail(),
            "list" | "ls" => Command::List,
            "toggle" | "t" => {
                ensure!(
                    !rest.is_empty(),
                    MissingArgumentSnafu {
                        command: "toggle",
                        argument: "scope",
                    }
                );
                Command::Toggle(rest.split_whitespace().map(ScopeRef::from_arg).collect())
            }
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                ensure!(
                    !field.is_empty(),
                    MissingArgumentSnafu {
                        command: "set",
                        argument: "field",
                    }
                );
                Command::Set(field.parse().context(UnknownFieldSnafu)?, value.to_string())
            }
            "unset" => {
                ensure!(
                    !rest.is_empty(),
                    MissingArgumentSnafu {
                        command: "unset",
                        argument: "field",
                    }
                );
                Command::Unset(rest.parse().context(UnknownFieldSnafu)?)
            }
            "clear" => Command::Clear,
            "show" => Command::Show,
            "fields" => Command::Fields,
            "copy" => Command::Copy,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => {
                return UnknownCommandSnafu { name }.fail();
            }
        };
        Ok(command)
    }
}

/// What the front end should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and keep reading commands.
    Continue(String),
    /// Stop reading commands.
    Quit,
}

/// Applies `command` to `session`.
///
/// A failed copy is not an error here: the failure notice is returned as the
/// text to show and the session carries on.
///
/// # Errors
///
/// Returns an error if a toggle names a position outside the catalog. Scopes
/// listed before the bad position stay toggled.
pub fn execute<C: Clipboard>(
    session: &mut Session,
    command: Command,
    clipboard: C,
) -> Result<Outcome, CommandError> {
    let text = match command {
        Command::List => render_catalog(session.catalog(), session.selection()),
        Command::Toggle(scopes) => {
            for scope in scopes {
                match scope {
                    ScopeRef::Index(index) => {
                        session.toggle_entry(index).context(SessionSnafu)?;
                    }
                    ScopeRef::Id(id) => {
                        session.toggle_scope(&id);
                    }
                }
            }
            session.display().to_string()
        }
        Command::Set(field, value) => {
            session.set_field(field, value);
            session.display().to_string()
        }
        Command::Unset(field) => {
            session.clear_field(field);
            session.display().to_string()
        }
        Command::Clear => {
            session.clear_selection();
            session.display().to_string()
        }
        Command::Show => session.display().to_string(),
        Command::Fields => render_fields(session),
        Command::Copy => match session.copy_link(clipboard) {
            Ok(feedback) => feedback.to_string(),
            Err(e) => e.to_string(),
        },
        Command::Help => HELP.to_string(),
        Command::Quit => return Ok(Outcome::Quit),
    };
    Ok(Outcome::Continue(text))
}

/// The command summary shown by `help`.
pub const HELP: &str = "\
Commands:
  list                     show the scope catalog
  toggle <n|scope>...      select or deselect scopes by number or identifier
  set <field> <value>      set a form field
  unset <field>            empty a form field
  clear                    deselect every scope
  fields                   show the form fields
  show                     show the generated link
  copy                     copy the generated link to the clipboard
  help                     show this summary
  quit                     leave

Fields: client_id, redirect_uri, response_type, access_type, state,
        include_granted_scopes, login_hint, prompt";

/// Renders the catalog, numbering entries and marking selected ones.
#[must_use]
pub fn render_catalog(catalog: &Catalog, selection: &SelectionSet) -> String {
    let mut position = 0;
    catalog
        .categories()
        .iter()
        .map(|category| {
            let entries = category
                .entries()
                .iter()
                .map(|entry| {
                    position += 1;
                    let marker = if selection.contains(entry.id()) {
                        'x'
                    } else {
                        ' '
                    };
                    format!(
                        "  [{marker}] {position:>2}. {} ({})\n",
                        entry.description(),
                        entry.id()
                    )
                })
                .collect::<String>();
            format!("{}\n{entries}", category.name())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_fields(session: &Session) -> String {
    RequestField::ALL
        .into_iter()
        .map(|field| format!("{:<24} {}\n", field.as_str(), session.params().get(field)))
        .collect()
}

/// Errors from parsing or executing a command.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum CommandError {
    /// The line was blank.
    #[snafu(display("Empty command"))]
    Empty,
    /// The command name was not recognized.
    #[snafu(display("Unknown command '{name}', try 'help'"))]
    UnknownCommand {
        /// The unrecognized name.
        name: String,
    },
    /// A required argument was not given.
    #[snafu(display("'{command}' needs a {argument}"))]
    MissingArgument {
        /// The command missing an argument.
        command: &'static str,
        /// The kind of argument expected.
        argument: &'static str,
    },
    /// The field name was not recognized.
    #[snafu(display("{source}"))]
    UnknownField {
        /// The parse error.
        source: UnknownFieldError,
    },
    /// The session rejected the command.
    #[snafu(display("{source}"))]
    Session {
        /// The session error.
        source: SessionError,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{clipboard::tests::MockClipboard, link::MISSING_REQUIRED_PLACEHOLDER};

    fn run(session: &mut Session, line: &str) -> Result<Outcome, CommandError> {
        let command = line.parse::<Command>()?;
        execute(session, command, MockClipboard::default())
    }

    fn text(outcome: Outcome) -> String {
        let Outcome::Continue(text) = outcome else {
            unreachable!("unexpected quit");
        };
        text
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("list".parse::<Command>(), Ok(Command::List));
        assert_eq!(
            "toggle 1 openid".parse::<Command>(),
            Ok(Command::Toggle(vec![
                ScopeRef::Index(1),
                ScopeRef::Id("openid".to_string())
            ]))
        );
        assert_eq!(
            "set state  some value ".parse::<Command>(),
            Ok(Command::Set(RequestField::State, " some value".to_string()))
        );
        assert_eq!(
            "set prompt".parse::<Command>(),
            Ok(Command::Set(RequestField::Prompt, String::new()))
        );
        assert_eq!(
            "UNSET login_hint".parse::<Command>(),
            Ok(Command::Unset(RequestField::LoginHint))
        );
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
        assert!(matches!(
            "frobnicate".parse::<Command>(),
            Err(CommandError::UnknownCommand { name }) if name == "frobnicate"
        ));
        assert!(matches!(
            "toggle".parse::<Command>(),
            Err(CommandError::MissingArgument { command: "toggle", .. })
        ));
        assert!(matches!(
            "set scope email".parse::<Command>(),
            Err(CommandError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_interactive_flow() {
        let mut session = Session::default();
        assert_eq!(
            text(run(&mut session, "set client_id abc").unwrap()),
            MISSING_REQUIRED_PLACEHOLDER
        );
        run(&mut session, "set redirect_uri https://x.test/cb").unwrap();
        run(&mut session, "set response_type code").unwrap();
        assert_eq!(
            text(run(&mut session, "toggle email openid").unwrap()),
            "https://accounts.google.com/o/oauth2/v2/auth?client_id=abc&redirect_uri=https%3A%2F%2Fx.test%2Fcb&response_type=code&scope=email%20openid"
        );
        assert_eq!(text(run(&mut session, "show").unwrap()), session.display());
        assert_eq!(run(&mut session, "quit").unwrap(), Outcome::Quit);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut session = Session::default();
        let err = run(&mut session, "toggle 1 40").unwrap_err();
        assert_eq!(
            err,
            CommandError::Session {
                source: SessionError::EntryOutOfRange { index: 40, len: 17 }
            }
        );
        assert!(session.selection().contains("email"));
    }

    #[test]
    fn test_copy_reports_failure_as_text() {
        let mut session = Session::default();
        let failing = MockClipboard {
            fail: true,
            ..MockClipboard::default()
        };
        let outcome = execute(&mut session, Command::Copy, failing).unwrap();
        assert_eq!(text(outcome), crate::clipboard::COPY_FAILED_NOTICE);

        let mut working = MockClipboard::default();
        let outcome = execute(&mut session, Command::Copy, &mut working).unwrap();
        assert_eq!(text(outcome), crate::clipboard::COPIED_FEEDBACK);
        assert_eq!(
            working.contents.as_deref(),
            Some(MISSING_REQUIRED_PLACEHOLDER)
        );
    }

    #[test]
    fn test_render_catalog_marks_selection() {
        let catalog = Catalog::builtin();
        let selection = SelectionSet::from_iter(["profile"]);
        let rendered = render_catalog(&catalog, &selection);
        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some("User Information"));
        assert_eq!(
            lines.next(),
            Some("  [ ]  1. View your email address (email)")
        );
        assert_eq!(
            lines.next(),
            Some("  [x]  2. View your basic profile info (profile)")
        );
        assert!(rendered.contains("  [ ] 17. Manage your data in Cloud Storage"));
    }

    #[test]
    fn test_render_fields() {
        let mut session = Session::default();
        session.set_field(RequestField::State, "xyz");
        let rendered = text(run(&mut session, "fields").unwrap());
        assert!(rendered.contains("state                    xyz\n"));
        assert_eq!(rendered.lines().count(), 8);
    }
}
