use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use padkeys_gamepad::ProfileKind;

pub(crate) const DEFAULT_DEVICE: &str = "/dev/input/event0";

/// Controller layouts known to the daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum ProfileArg {
    /// Four button NES pad
    #[default]
    Nes,
    /// Eight button SNES pad
    Snes,
}

impl From<ProfileArg> for ProfileKind {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Nes => ProfileKind::Nes,
            ProfileArg::Snes => ProfileKind::Snes,
        }
    }
}

#[derive(Debug, Subcommand, PartialEq)]
pub(crate) enum Command {
    /// Translate controller input into key presses in the foreground.
    Run {
        /// The controller's evdev node
        #[clap(short, long, default_value = DEFAULT_DEVICE)]
        device: PathBuf,
        /// The controller layout
        #[clap(short, long, value_enum, default_value_t)]
        profile: ProfileArg,
        /// Forget the held d-pad direction once it has been released
        #[clap(long)]
        reset_on_release: bool,
    },
    /// Print the button table of a profile.
    Show {
        /// The controller layout
        #[clap(short, long, value_enum, default_value_t)]
        profile: ProfileArg,
    },
}

/// Drive a keyboard menu with a USB game pad.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Turn debugging information on
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// The command to run
    #[clap(subcommand)]
    pub command: Command,
}
