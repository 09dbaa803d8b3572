use codspeed_criterion_compat::{black_box, criterion_group, criterion_main, Criterion};
use padkeys_gamepad::{ControllerProfile, ProfileKind, RawEvent};
use padkeysd::app::{Action, Padkeys, ReleasePolicy};

pub fn bench_button_path(c: &mut Criterion) {
    let mut app = Padkeys::new(ControllerProfile::new(ProfileKind::Nes), ReleasePolicy::Latch);
    let press = RawEvent::button(304, 1);
    let release = RawEvent::button(304, 0);

    c.bench_function("buttons_press_release_single", |b| {
        b.iter(|| {
            let mut sink_count = 0usize;
            for event in [press, release] {
                if let Ok(Some(Action::KeyPress(_) | Action::KeyRelease(_))) =
                    app.on_event(black_box(event))
                {
                    sink_count += 1;
                }
            }
            black_box(sink_count)
        })
    });
}

pub fn bench_dpad_path(c: &mut Criterion) {
    let mut app = Padkeys::new(ControllerProfile::new(ProfileKind::Snes), ReleasePolicy::Latch);
    let events = [
        RawEvent::axis(1, 0),
        RawEvent::axis(0, 255),
        RawEvent::axis(1, 128),
        RawEvent::axis(0, 127),
    ];

    c.bench_function("dpad_both_axes_round_trip", |b| {
        b.iter(|| {
            let mut sink_count = 0usize;
            for event in events {
                if let Ok(Some(action)) = app.on_event(black_box(event)) {
                    black_box(action.key());
                    sink_count += 1;
                }
            }
            black_box(sink_count)
        })
    });
}

criterion_group!(benches, bench_button_path, bench_dpad_path);
criterion_main!(benches);
