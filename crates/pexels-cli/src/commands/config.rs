//! Settings subcommands.

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};

use pexels_asset_source::LABEL;

use crate::output;
use crate::settings::{self, Overrides};

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Display the effective configuration
    Show,

    /// Store the API key in the settings file
    SetKey(SetKeyArgs),
}

#[derive(Args, Debug)]
pub struct SetKeyArgs {
    /// Pexels API key
    pub key: String,
}

pub fn handle(cmd: ConfigCommand, overrides: &Overrides) -> Result<()> {
    match cmd.command {
        ConfigSubcommand::Show => show(overrides),
        ConfigSubcommand::SetKey(args) => set_key(args),
    }
}

fn show(overrides: &Overrides) -> Result<()> {
    let path = settings::settings_path()?;
    let options = settings::load()
        .context("Failed to load settings")?
        .resolve(overrides);

    let api_key = if options.access_key.is_empty() {
        "(not set)".to_string()
    } else {
        settings::mask(&options.access_key)
    };

    output::field("Source", LABEL);
    output::field("Settings file", &path.display().to_string());
    output::field("API key", &api_key);
    output::field("Proxy", options.proxy.as_deref().unwrap_or("(none)"));
    output::field(
        "Default search term",
        match options.default_search_term.as_str() {
            "" => "(curated)",
            term => term,
        },
    );

    Ok(())
}

fn set_key(args: SetKeyArgs) -> Result<()> {
    let key = args.key.trim();
    if key.is_empty() {
        bail!("API key must not be empty");
    }

    let mut stored = settings::load().context("Failed to load settings")?;
    stored.api_key = Some(key.to_string());
    let path = settings::save(&stored).context("Failed to save settings")?;

    output::success("API key saved");
    output::field("Settings file", &path.display().to_string());

    Ok(())
}
