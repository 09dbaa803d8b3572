mod cli;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use padkeys_control::Performer;
use padkeys_gamepad::{Axis, Button, ControllerProfile, GamepadDevice, ProfileKind};
use padkeysd::app::{Padkeys, ReleasePolicy};
use padkeysd::{logging, print_debug, print_error, print_info, print_warning, run_loop, Error};

use crate::cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup(cli.verbose, cli.no_color);

    let result = match cli.command {
        Command::Run {
            device,
            profile,
            reset_on_release,
        } => {
            let policy = if reset_on_release {
                ReleasePolicy::Reset
            } else {
                ReleasePolicy::Latch
            };
            run(&device, profile.into(), policy)
        }
        Command::Show { profile } => {
            show(profile.into());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path, kind: ProfileKind, policy: ReleasePolicy) -> Result<(), Error> {
    let mut gamepad = GamepadDevice::open(path)?;
    let info = gamepad.info();
    print_info!(
        "device {} - {} phys={} vid=0x{:04x} pid=0x{:04x}",
        info.path.display(),
        info.name,
        info.phys.as_deref().unwrap_or("-"),
        info.vendor_id,
        info.product_id
    );
    print_debug!("device buttons - {:?}", info.buttons);
    print_debug!("device axes - {:?}", info.axes);

    let profile = ControllerProfile::new(kind);
    let unknown = profile.unknown_codes(info.buttons.iter().copied());
    if !unknown.is_empty() {
        print_warning!(
            "buttons {unknown:?} are not in the {kind} profile, pressing them will stop the daemon"
        );
    }

    // Dropping the keyboard releases any key still held when run returns.
    // Ctrl+C kills the process without running Drop; the kernel then
    // destroys the uinput device, which releases its keys.
    let mut keyboard = Performer::new()?;
    let mut app = Padkeys::new(profile, policy);
    print_info!("padkeysd started with the {kind} profile. Listening for controller events.");
    let result = run_loop(&mut app, &mut gamepad, &mut keyboard);

    let held: Vec<_> = keyboard.held().collect();
    if !held.is_empty() {
        print_debug!("releasing held keys - {held:?}");
    }
    result
}

fn show(kind: ProfileKind) {
    let app = Padkeys::new(ControllerProfile::new(kind), ReleasePolicy::default());
    print_info!("{kind} profile");
    for (code, button) in app.profile().entries() {
        print_info!("  button {code:>4} {}", describe(&app, button));
    }
    for axis in [Axis::Horizontal, Axis::Vertical] {
        let code = axis.code();
        print_info!("  axis   {code:>4} {}", describe(&app, axis.low()));
        print_info!("  axis   {code:>4} {}", describe(&app, axis.high()));
    }
}

fn describe(app: &Padkeys, button: Button) -> String {
    match app.keymap().keystroke(button) {
        Some(keystroke) => format!("{button:<14} -> {keystroke} ({})", keystroke.key()),
        None => format!("{button:<14} -> none"),
    }
}
