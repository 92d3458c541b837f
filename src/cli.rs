#![allow(missing_docs)]

use std::io::IsTerminal;

use clap::{Parser, Subcommand, ValueEnum};

use crate::generate;

#[derive(Parser, Debug)]
#[command(rename_all = "kebab-case", version, infer_subcommands = true)]
pub struct Opts {
    #[command(flatten)]
    pub root: RootOpts,

    #[command(subcommand)]
    pub sub_command: SubCommand,
}

impl Opts {
    pub fn get_matches() -> Result<Self, clap::Error> {
        Opts::try_parse()
    }

    /// Logging stays quiet by default so stdout carries only the document.
    pub const fn log_level(&self) -> &'static str {
        let (quiet_level, verbose_level) = if self.root.verbose == 0 {
            (self.root.quiet.saturating_add(1), self.root.verbose)
        } else {
            (self.root.quiet, self.root.verbose - 1)
        };
        match quiet_level {
            0 => match verbose_level {
                0 => "info",
                1 => "debug",
                2..=255 => "trace",
            },
            1 => "warn",
            2 => "error",
            3..=255 => "off",
        }
    }
}

#[derive(Parser, Debug)]
#[command(rename_all = "kebab-case")]
pub struct RootOpts {
    /// Enable more detailed internal logging. Repeat to increase level. Overridden by `--quiet`.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce detail of internal logging. Repeat to reduce further. Overrides `--verbose`.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Set the logging format
    #[arg(long, default_value = "text", env = "VECTOR_OUTPUT_GEN_LOG_FORMAT", global = true)]
    pub log_format: LogFormat,

    /// Control when ANSI terminal formatting is used.
    ///
    /// By default logs are colored when `stderr` is a terminal. `--color always`
    /// forces ANSI formatting on and `--color never` turns it off.
    #[arg(long, default_value = "auto", env = "VECTOR_OUTPUT_GEN_COLOR", global = true)]
    pub color: Color,
}

impl RootOpts {
    pub fn use_color(&self) -> bool {
        match self.color {
            Color::Auto => std::io::stderr().is_terminal(),
            Color::Always => true,
            Color::Never => false,
        }
    }

    pub fn json_logs(&self) -> bool {
        self.log_format == LogFormat::Json
    }
}

#[derive(Subcommand, Debug)]
#[command(rename_all = "kebab-case")]
pub enum SubCommand {
    /// Generate the Vector configuration for the outputs of a forwarder spec.
    Generate(generate::Opts),
}

impl SubCommand {
    pub fn execute(&self) -> exitcode::ExitCode {
        match self {
            SubCommand::Generate(opts) => generate::cmd(opts),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Auto,
    Always,
    Never,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}
