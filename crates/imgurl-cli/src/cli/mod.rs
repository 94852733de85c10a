//! CLI for imgurl.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use imgurl_core::config::{self, ConfigOverrides};
use imgurl_core::Markup;

use commands::{run_actions, run_build, run_click, run_config_path, run_url};

/// Top-level CLI for imgurl.
#[derive(Debug, Parser)]
#[command(name = "imgurl")]
#[command(about = "imgurl: build CDN image transformation URLs", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Overrides for values normally read from config.toml.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// CDN account (cloud) name.
    #[arg(long, global = true, value_name = "NAME")]
    pub cloud_name: Option<String>,

    /// Public id of the image.
    #[arg(long, global = true, value_name = "ID")]
    pub public_id: Option<String>,

    /// CDN delivery host.
    #[arg(long, global = true, value_name = "HOST")]
    pub host: Option<String>,
}

impl From<GlobalArgs> for ConfigOverrides {
    fn from(args: GlobalArgs) -> Self {
        Self {
            host: args.host,
            cloud_name: args.cloud_name,
            public_id: args.public_id,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the delivery URL for an action.
    Url {
        /// Action name (see `imgurl actions`).
        action: String,
    },

    /// Build a URL from a raw transformation string.
    Build {
        /// Transformation parameters, already percent-encoded where needed.
        #[arg(long, short = 't')]
        transform: Option<String>,
        /// Identifier to use instead of the configured public id.
        #[arg(long)]
        id: Option<String>,
    },

    /// List configured actions in order.
    Actions {
        /// Print the table as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Load the page, click the given actions in order, and show the result.
    /// Unknown actions are ignored.
    Click {
        /// Actions to click.
        #[arg(required = true, num_args = 1..)]
        actions: Vec<String>,
        /// Emphasize the transformation with `<b>` instead of brackets.
        #[arg(long)]
        html: bool,
    },

    /// Print the path of the config file.
    ConfigPath,
}

impl CliCommand {
    /// False for commands that must work even when config.toml is broken.
    pub fn reads_config(&self) -> bool {
        !matches!(self, CliCommand::ConfigPath)
    }

    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if !cli.command.reads_config() {
            return run_config_path();
        }

        let settings = config::load_settings(cli.global.into())?;

        match cli.command {
            CliCommand::Url { action } => run_url(&settings, &action)?,
            CliCommand::Build { transform, id } => {
                run_build(&settings, transform.as_deref(), id.as_deref())
            }
            CliCommand::Actions { json } => run_actions(&settings.table, json)?,
            CliCommand::Click { actions, html } => {
                let markup = if html { Markup::Html } else { Markup::Brackets };
                run_click(&settings.with_markup(markup), &actions);
            }
            CliCommand::ConfigPath => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
