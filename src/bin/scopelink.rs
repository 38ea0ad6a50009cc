//! Terminal front end for building authorization links.

use std::{
    io::{self, BufRead as _, Write as _},
    path::PathBuf,
};

use clap::Parser;
use scopelink::{
    Config, RequestField, Session,
    clipboard::SystemClipboard,
    command::{self, Command, Outcome, ScopeRef},
};
use snafu::prelude::*;
use tracing::debug;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Pick authorization scopes from a catalog and assemble an authorization link.
///
/// Without `--print`, `--copy` or `--list` an interactive session starts;
/// type `help` there for the available commands.
#[derive(Debug, Parser)]
#[command(name = "scopelink", version, about)]
struct Cli {
    /// Configuration file with a catalog, endpoint and default field values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// OAuth client identifier.
    #[arg(long)]
    client_id: Option<String>,
    /// Redirect URI registered for the client.
    #[arg(long)]
    redirect_uri: Option<String>,
    /// Response type, for example `code`.
    #[arg(long)]
    response_type: Option<String>,
    /// Access type, `online` or `offline`.
    #[arg(long)]
    access_type: Option<String>,
    /// Opaque state value.
    #[arg(long)]
    state: Option<String>,
    /// Whether to include previously granted scopes.
    #[arg(long)]
    include_granted_scopes: Option<String>,
    /// Account hint.
    #[arg(long)]
    login_hint: Option<String>,
    /// Prompt behavior, for example `consent`.
    #[arg(long)]
    prompt: Option<String>,

    /// Scope to toggle, by catalog number or identifier. May be repeated.
    #[arg(short, long = "scope", value_name = "SCOPE")]
    scopes: Vec<String>,

    /// Print the link once and exit.
    #[arg(short, long)]
    print: bool,
    /// Copy the link to the clipboard and exit.
    #[arg(long)]
    copy: bool,
    /// Print the scope catalog and exit.
    #[arg(short, long)]
    list: bool,

    /// Increase logging verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn field_values(&self) -> [(RequestField, Option<&String>); 8] {
        [
            (RequestField::ClientId, self.client_id.as_ref()),
            (RequestField::RedirectUri, self.redirect_uri.as_ref()),
            (RequestField::ResponseType, self.response_type.as_ref()),
            (RequestField::AccessType, self.access_type.as_ref()),
            (RequestField::State, self.state.as_ref()),
            (
                RequestField::IncludeGrantedScopes,
                self.include_granted_scopes.as_ref(),
            ),
            (RequestField::LoginHint, self.login_hint.as_ref()),
            (RequestField::Prompt, self.prompt.as_ref()),
        ]
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[snafu::report]
fn main() -> Result<(), snafu::Whatever> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load(path).whatever_context("Failed to load configuration")?,
        None => Config::default(),
    };
    let mut session = config.into_session();

    for (field, value) in cli.field_values() {
        if let Some(value) = value {
            session.set_field(field, value.as_str());
        }
    }
    for scope in &cli.scopes {
        match ScopeRef::from_arg(scope) {
            ScopeRef::Index(index) => {
                session
                    .toggle_entry(index)
                    .whatever_context("Invalid --scope")?;
            }
            ScopeRef::Id(id) => {
                session.toggle_scope(&id);
            }
        }
    }

    if cli.list {
        print!(
            "{}",
            command::render_catalog(session.catalog(), session.selection())
        );
        return Ok(());
    }

    if cli.print || cli.copy {
        println!("{}", session.display());
        if cli.copy {
            // The process exits right after, so the text must be handed to
            // another clipboard owner first.
            match session.copy_link(SystemClipboard::handing_off()) {
                Ok(feedback) => eprintln!("{feedback}"),
                Err(e) => eprintln!("{e}"),
            }
        }
        return Ok(());
    }

    let mut clipboard = SystemClipboard::new();
    run_interactive(&mut session, &mut clipboard).whatever_context("Terminal IO failed")
}

fn run_interactive(session: &mut Session, clipboard: &mut SystemClipboard) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(
        stdout,
        "{}",
        command::render_catalog(session.catalog(), session.selection())
    )?;
    writeln!(stdout, "{}", session.display())?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }

        let result = line
            .parse::<Command>()
            .and_then(|command| command::execute(session, command, &mut *clipboard));
        match result {
            Ok(Outcome::Continue(text)) => writeln!(stdout, "{}", text.trim_end())?,
            Ok(Outcome::Quit) => return Ok(()),
            Err(command::CommandError::Empty) => {}
            Err(e) => {
                debug!(error = %e, "command rejected");
                writeln!(stdout, "{e}")?;
            }
        }
    }
}
