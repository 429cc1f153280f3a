//! The interactive shell: reads one command per line, dispatches it to the matching [`Portal`]
//! handler, and re-renders the screen after every event.

use std::{
    io::Write,
    str::FromStr,
};

use anyhow::anyhow;
use colored::Colorize;
use gif_portal_client::{
    eprint_kv,
    portal::{
        Portal,
        PortalAlert,
        Screen,
    },
    print_kv,
    render::render,
    runtime::RemoteRuntime,
    wallet::WalletProvider,
    LogColor,
};
use strum::IntoEnumIterator;
use strum_macros::{
    Display,
    EnumIter,
    EnumString,
};
use tokio::io::{
    AsyncBufRead,
    AsyncBufReadExt,
    Lines,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Verb {
    Connect,
    Init,
    Input,
    Submit,
    Refresh,
    Help,
    Quit,
}

impl Verb {
    fn usage(&self) -> &'static str {
        match self {
            Verb::Connect => "connect",
            Verb::Init => "init",
            Verb::Input => "input <link>",
            Verb::Submit => "submit [<link>]",
            Verb::Refresh => "refresh",
            Verb::Help => "help",
            Verb::Quit => "quit | exit",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Verb::Connect => "Connect the wallet",
            Verb::Init => "Create the list's base account (once)",
            Verb::Input => "Set the link input",
            Verb::Submit => "Submit the link input, optionally setting it first",
            Verb::Refresh => "Fetch the list again",
            Verb::Help => "Show this help",
            Verb::Quit => "Leave the portal",
        }
    }

    /// Whether the verb's affordance exists on `screen`.
    fn is_available(&self, screen: &Screen<'_>) -> bool {
        match self {
            Verb::Connect => matches!(screen, Screen::Disconnected),
            Verb::Init => matches!(screen, Screen::Uninitialized { .. }),
            Verb::Input | Verb::Submit => matches!(screen, Screen::Loaded { .. }),
            Verb::Refresh => !matches!(screen, Screen::Disconnected),
            Verb::Help | Verb::Quit => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Connect,
    Init,
    Input(String),
    Submit(Option<String>),
    Refresh,
    Help,
    Quit,
}

impl Command {
    /// Parses a shell line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> anyhow::Result<Option<Command>> {
        let line = line.trim_start();
        if line.trim_end().is_empty() {
            return Ok(None);
        }

        // Everything after the single separator is the argument, spaces included.
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        let verb = match verb {
            "exit" => Verb::Quit,
            verb => Verb::from_str(verb).map_err(|_| anyhow!("`{verb}`. Type `help`"))?,
        };

        Ok(Some(match verb {
            Verb::Connect => Command::Connect,
            Verb::Init => Command::Init,
            Verb::Input => Command::Input(rest.to_string()),
            Verb::Submit => Command::Submit((!rest.is_empty()).then(|| rest.to_string())),
            Verb::Refresh => Command::Refresh,
            Verb::Help => Command::Help,
            Verb::Quit => Command::Quit,
        }))
    }

    pub fn verb(&self) -> Verb {
        match self {
            Command::Connect => Verb::Connect,
            Command::Init => Verb::Init,
            Command::Input(_) => Verb::Input,
            Command::Submit(_) => Verb::Submit,
            Command::Refresh => Verb::Refresh,
            Command::Help => Verb::Help,
            Command::Quit => Verb::Quit,
        }
    }
}

pub fn fmt_help() -> String {
    Verb::iter()
        .map(|verb| format!("  {:<18}{}\n", verb.usage(), verb.description()))
        .collect()
}

/// Runs the shell until `quit` or the end of `input`.
///
/// Starts by silently reconnecting a previously trusted wallet, then handles one command per line.
pub async fn run_shell<W, R, I>(
    portal: &mut Portal<W, R>,
    input: I,
    columns: usize,
) -> anyhow::Result<()>
where
    W: WalletProvider,
    R: RemoteRuntime,
    I: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    portal.probe_existing_connection().await;
    print!("{}", render(&portal.screen(), columns));
    prompt()?;

    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => {
                prompt()?;
                continue;
            }
            Err(e) => {
                eprint_kv!("Unknown command", e);
                prompt()?;
                continue;
            }
        };

        let verb = command.verb();
        if !verb.is_available(&portal.screen()) {
            print_kv!(verb, "Not available right now", LogColor::Warning);
            prompt()?;
            continue;
        }

        match command {
            Command::Quit => break,
            Command::Help => print!("{}", fmt_help()),
            Command::Connect => {
                if let Err(alert) = portal.connect().await {
                    show_alert(&alert, &mut lines).await?;
                }
            }
            Command::Init => portal.initialize_account().await,
            Command::Input(text) => portal.set_input(text),
            Command::Submit(text) => {
                if let Some(text) = text {
                    portal.set_input(text);
                }
                portal.submit().await;
            }
            Command::Refresh => portal.refresh().await,
        }

        print!("{}", render(&portal.screen(), columns));
        prompt()?;
    }

    Ok(())
}

/// Shows `alert` and blocks until the user acknowledges it with a line of input.
async fn show_alert<I>(alert: &PortalAlert, lines: &mut Lines<I>) -> anyhow::Result<()>
where
    I: AsyncBufRead + Unpin,
{
    eprintln!("{}", format!("ALERT: {alert}").color(LogColor::Error).bold());
    print!("Press Enter to continue ");
    std::io::stdout().flush()?;
    lines.next_line().await?;
    Ok(())
}

fn prompt() -> anyhow::Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}
