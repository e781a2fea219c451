use anyhow::{Context, Result};
use chatcmd_config::Config;
use chatcmd_engine::{Command, Message};
use clap::Parser;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Parse bot commands out of chat messages.
#[derive(Debug, Parser)]
#[command(name = "chatcmd", version, about)]
struct Cli {
    /// Message to parse. Reads one message per line from stdin when omitted.
    message: Vec<String>,

    /// Prefix command names must start with (overrides the config file).
    #[arg(long, conflicts_with = "no_trigger")]
    trigger: Option<String>,

    /// Treat the first word of every message as the command name.
    #[arg(long)]
    no_trigger: bool,

    /// Treat messages as fixed-width (monospace) text.
    #[arg(long)]
    fixed_width: bool,

    /// Do not split the content into arguments.
    #[arg(long)]
    no_args: bool,

    /// Config file to use instead of ~/.config/chatcmd/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a config file with the default settings and exit.
    #[arg(long, conflicts_with = "message")]
    init_config: bool,

    /// Print one JSON object per message.
    #[arg(long)]
    json: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

/// Effective settings after merging the config file with CLI flags.
#[derive(Debug, PartialEq, Eq)]
struct Settings {
    trigger: Option<String>,
    tokenize_args: bool,
    fixed_width: bool,
    json: bool,
}

impl Settings {
    fn resolve(cli: &Cli, config: &Config) -> Self {
        let trigger = if cli.no_trigger {
            None
        } else if let Some(trigger) = &cli.trigger {
            Some(trigger.clone()).filter(|t| !t.is_empty())
        } else {
            config.trigger().map(str::to_string)
        };

        Self {
            trigger,
            tokenize_args: config.tokenize_args && !cli.no_args,
            fixed_width: cli.fixed_width,
            json: cli.json,
        }
    }
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    message: &'a Message,
    command: Option<CommandReport>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
struct CommandReport {
    command_name: String,
    content: String,
    markdown: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    args: Option<Vec<String>>,
}

impl CommandReport {
    fn from_command(command: &Command<&Message>, tokenize_args: bool) -> Self {
        Self {
            command_name: command.command_name().to_string(),
            content: command.content().to_string(),
            markdown: command.content_markdown(),
            args: tokenize_args.then(|| command.content_as_args()),
        }
    }
}

fn report(message: &Message, settings: &Settings) -> Option<CommandReport> {
    let command = Command::from_message(message, settings.trigger.as_deref())?;
    Some(CommandReport::from_command(&command, settings.tokenize_args))
}

fn write_report(out: &mut impl Write, message: &Message, settings: &Settings) -> Result<()> {
    let command = report(message, settings);

    if settings.json {
        let report = Report { message, command };
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    match command {
        Some(command) => {
            writeln!(out, "command:  {}", command.command_name)?;
            writeln!(out, "content:  {}", command.content)?;
            writeln!(out, "markdown: {}", command.markdown)?;
            if let Some(args) = &command.args {
                writeln!(out, "args:     {args:?}")?;
            }
        }
        None => writeln!(out, "not a command")?,
    }
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file not found: {}", path.display()))?,
        None => Config::load()?.unwrap_or_default(),
    };
    Ok(config)
}

/// Writes the default config to `path`, or the default location, without
/// overwriting an existing file.
fn init_config(path: Option<&PathBuf>) -> Result<PathBuf> {
    let path = path.cloned().unwrap_or_else(Config::config_path);
    if path.exists() {
        anyhow::bail!("Config file already exists: {}", path.display());
    }
    Config::default()
        .save_to_path(&path)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    Ok(path)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if cli.init_config {
        let path = init_config(cli.config.as_ref())?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = load_config(cli.config.as_ref())?;
    let settings = Settings::resolve(&cli, &config);
    log::debug!("Using settings: {settings:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.message.is_empty() {
        let message =
            Message::new(cli.message.join(" ")).with_fixed_width_font(settings.fixed_width);
        return write_report(&mut out, &message, &settings);
    }

    for (index, line) in io::stdin().lock().lines().enumerate() {
        let line = line.context("Failed to read message from stdin")?;
        let message = Message::new(line)
            .with_id(index as u64 + 1)
            .with_fixed_width_font(settings.fixed_width);
        write_report(&mut out, &message, &settings)?;
    }

    Ok(())
}
