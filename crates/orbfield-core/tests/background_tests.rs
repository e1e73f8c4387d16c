// Host-side tests driving a mounted background through a manual scheduler.

use glam::DVec2;
use orbfield_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

struct FakeListener {
    event: &'static str,
    log: Rc<RefCell<Vec<String>>>,
}

impl Subscription for FakeListener {
    fn event(&self) -> &str {
        self.event
    }
}

impl Drop for FakeListener {
    fn drop(&mut self) {
        self.log.borrow_mut().push(format!("remove {}", self.event));
    }
}

type TestBackground = Background<RecordingSurface, ManualScheduler>;

fn mount(seed: u64) -> TestBackground {
    Background::mount(
        &FieldConfig::default(),
        &mut StdRng::seed_from_u64(seed),
        RecordingSurface::default(),
        Viewport::new(800, 600),
        ManualScheduler::new(),
    )
    .unwrap()
}

/// Fire pending frames the way the browser would, up to `n` of them.
fn run_frames(bg: &mut TestBackground, n: usize) -> usize {
    let mut ran = 0;
    while ran < n && bg.scheduler_mut().fire() {
        bg.on_frame();
        ran += 1;
    }
    ran
}

#[test]
fn mount_starts_running_with_first_frame_pending() {
    let bg = mount(1);
    assert!(bg.is_running());
    assert!(bg.scheduler().is_pending());
    assert_eq!(bg.frame(), 0);
    assert_eq!(bg.input().pointer(), DVec2::ZERO);
    assert_eq!(bg.surface().viewport(), Viewport::new(800, 600));
}

#[test]
fn mount_rejects_invalid_config() {
    let cfg = FieldConfig {
        alpha: Range::new(0.07, 0.03),
        ..FieldConfig::default()
    };
    let result = Background::mount(
        &cfg,
        &mut StdRng::seed_from_u64(1),
        RecordingSurface::default(),
        Viewport::new(800, 600),
        ManualScheduler::new(),
    );
    assert!(matches!(result, Err(ConfigError::BadRange { name: "alpha", .. })));
}

#[test]
fn each_tick_clears_then_paints_every_orb() {
    let mut bg = mount(2);
    assert_eq!(run_frames(&mut bg, 1), 1);
    let cmds = &bg.surface().surface().commands;
    // SetSize from mount, then one clear followed by eight glows.
    assert!(matches!(cmds[0], DrawCommand::SetSize { .. }));
    assert_eq!(
        cmds[1],
        DrawCommand::Clear {
            width: 800.0,
            height: 600.0
        }
    );
    assert_eq!(cmds.len(), 2 + 8);
    assert!(cmds[2..]
        .iter()
        .all(|c| matches!(c, DrawCommand::Glow { .. })));
    assert!(bg.scheduler().is_pending(), "tick must reschedule itself");
}

#[test]
fn field_size_never_changes() {
    let mut bg = mount(3);
    for i in 0..500 {
        bg.on_pointer_move((i * 7 % 900) as f64, (i * 3 % 700) as f64);
        assert_eq!(run_frames(&mut bg, 1), 1);
        assert_eq!(bg.field().len(), 8);
    }
    assert_eq!(bg.frame(), 500);
    assert_eq!(bg.surface().surface().clears(), 500);
    assert_eq!(bg.surface().surface().glows().count(), 500 * 8);
}

#[test]
fn pulsation_stays_within_amplitude() {
    let mut bg = mount(4);
    for _ in 0..2_000 {
        run_frames(&mut bg, 1);
        for orb in bg.field().orbs() {
            assert!(
                (orb.radius - orb.base_radius).abs() <= PULSE_AMPLITUDE_TOLERANCE,
                "radius {} base {}",
                orb.radius,
                orb.base_radius
            );
        }
    }
}

const PULSE_AMPLITUDE_TOLERANCE: f64 = orbfield_core::constants::PULSE_AMPLITUDE + 1e-9;

#[test]
fn orbs_stay_within_wrap_margin() {
    let mut bg = mount(5);
    let motion = *bg.field().motion();
    // Worst-case attraction step is the interaction radius times the coefficient.
    let slack = motion.interaction_radius * motion.attraction + 1e-9;
    for i in 0..3_000 {
        if i % 97 == 0 {
            bg.on_pointer_move(400.0, 300.0);
        }
        let before: Vec<f64> = bg.field().orbs().iter().map(|o| o.radius).collect();
        run_frames(&mut bg, 1);
        let b = bg.surface().bounds();
        for (orb, r) in bg.field().orbs().iter().zip(before) {
            assert!(orb.position.x >= -r - slack && orb.position.x <= b.width + r + slack);
            assert!(orb.position.y >= -r - slack && orb.position.y <= b.height + r + slack);
        }
    }
}

#[test]
fn wrap_containment_is_exact_without_pulse_or_pointer() {
    let orbs = (0..4)
        .map(|i| Orb {
            position: DVec2::new(i as f64 * 200.0, 100.0),
            velocity: DVec2::new(0.15 * (i as f64 - 1.5), -0.15),
            base_radius: 50.0,
            radius: 50.0,
            color: Hsla {
                hue: 40.0,
                saturation: 80.0,
                lightness: 60.0,
                alpha: 0.05,
            },
            pulse_speed: 0.0,
            pulse_phase: 0.0,
        })
        .collect();
    let mut field = OrbField::from_orbs(orbs, Motion::default());
    let bounds = Bounds::new(800.0, 600.0);
    let far = DVec2::new(1e6, 1e6);
    for t in 1..20_000 {
        field.advance(t, bounds, far);
        for orb in field.orbs() {
            assert!(orb.position.x >= -orb.radius && orb.position.x <= bounds.width + orb.radius);
            assert!(orb.position.y >= -orb.radius && orb.position.y <= bounds.height + orb.radius);
        }
    }
}

#[test]
fn far_pointer_leaves_only_drift() {
    let mut bg = mount(6);
    // Park the pointer well outside every orb's reach, including after drift.
    bg.on_pointer_move(-5_000.0, -5_000.0);
    let before: Vec<Orb> = bg.field().orbs().to_vec();
    run_frames(&mut bg, 1);
    for (prev, orb) in before.iter().zip(bg.field().orbs()) {
        let moved = orb.position - prev.position;
        // Either pure drift or a wrap; no attraction term either way.
        let wrapped = (moved - prev.velocity).length() > 1.0;
        if !wrapped {
            assert!((moved - prev.velocity).length() < 1e-9);
        }
    }
}

#[test]
fn pointer_move_is_visible_to_next_tick() {
    let orb = Orb {
        position: DVec2::new(100.0, 100.0),
        velocity: DVec2::ZERO,
        base_radius: 100.0,
        radius: 100.0,
        color: Hsla {
            hue: 40.0,
            saturation: 80.0,
            lightness: 60.0,
            alpha: 0.05,
        },
        pulse_speed: 0.0,
        pulse_phase: 0.0,
    };
    let mut field = OrbField::from_orbs(vec![orb], Motion::default());
    let mut bridge = InputBridge::new();
    bridge.pointer_moved(5_000.0, 5_000.0);
    bridge.pointer_moved(300.0, 100.0);
    field.advance(1, Bounds::new(800.0, 600.0), bridge.pointer());
    assert!((field.orbs()[0].position.x - 100.2).abs() < 1e-9);
}

#[test]
fn initial_pointer_at_origin_attracts_nearby_orbs() {
    let orb = Orb {
        position: DVec2::new(30.0, 40.0),
        velocity: DVec2::ZERO,
        base_radius: 100.0,
        radius: 100.0,
        color: Hsla {
            hue: 40.0,
            saturation: 80.0,
            lightness: 60.0,
            alpha: 0.05,
        },
        pulse_speed: 0.0,
        pulse_phase: 0.0,
    };
    let mut field = OrbField::from_orbs(vec![orb], Motion::default());
    let bridge = InputBridge::new();
    field.advance(1, Bounds::new(800.0, 600.0), bridge.pointer());
    let p = field.orbs()[0].position;
    assert!((p.x - 29.97).abs() < 1e-9);
    assert!((p.y - 39.96).abs() < 1e-9);
}

#[test]
fn resize_is_visible_to_next_tick() {
    let mut bg = mount(7);
    run_frames(&mut bg, 1);
    bg.on_resize(Viewport::new(320, 240));
    run_frames(&mut bg, 1);
    let cmds = &bg.surface().surface().commands;
    assert!(cmds.contains(&DrawCommand::SetSize {
        width: 320,
        height: 240
    }));
    let last_clear = cmds
        .iter()
        .rev()
        .find(|c| matches!(c, DrawCommand::Clear { .. }))
        .cloned();
    assert_eq!(
        last_clear,
        Some(DrawCommand::Clear {
            width: 320.0,
            height: 240.0
        })
    );
}

#[test]
fn teardown_releases_listeners_in_order_then_cancels() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut bg = mount(8);
    bg.attach(Box::new(FakeListener {
        event: "resize",
        log: log.clone(),
    }));
    bg.attach(Box::new(FakeListener {
        event: "pointermove",
        log: log.clone(),
    }));
    run_frames(&mut bg, 3);
    assert_eq!(bg.listener_count(), 2);

    assert!(bg.teardown());
    assert_eq!(*log.borrow(), vec!["remove resize", "remove pointermove"]);
    assert_eq!(bg.listener_count(), 0);
    assert!(!bg.is_running());
    assert!(!bg.scheduler().is_pending());
    assert_eq!(bg.scheduler().cancels(), 1);

    // Second teardown is a no-op.
    assert!(!bg.teardown());
    assert_eq!(log.borrow().len(), 2);
    assert_eq!(bg.scheduler().cancels(), 1);
}

#[test]
fn no_surface_mutation_after_teardown() {
    let mut bg = mount(9);
    run_frames(&mut bg, 2);
    bg.teardown();
    let before = bg.surface().surface().commands.len();
    let frame = bg.frame();
    // A stray callback that slipped through must not paint.
    bg.on_frame();
    assert_eq!(bg.surface().surface().commands.len(), before);
    assert_eq!(bg.frame(), frame);
    assert_eq!(run_frames(&mut bg, 10), 0);
}

#[test]
fn dropping_background_releases_listeners() {
    let log = Rc::new(RefCell::new(Vec::new()));
    {
        let mut bg = mount(10);
        bg.attach(Box::new(FakeListener {
            event: "resize",
            log: log.clone(),
        }));
    }
    assert_eq!(*log.borrow(), vec!["remove resize"]);
}

#[test]
fn pointer_at_reach_before_drift_leaves_only_drift() {
    let orb = Orb {
        position: DVec2::new(100.0, 100.0),
        velocity: DVec2::new(0.15, 0.0),
        base_radius: 100.0,
        radius: 100.0,
        color: Hsla {
            hue: 40.0,
            saturation: 80.0,
            lightness: 60.0,
            alpha: 0.05,
        },
        pulse_speed: 0.0,
        pulse_phase: 0.0,
    };
    let mut field = OrbField::from_orbs(vec![orb], Motion::default());
    let mut bridge = InputBridge::new();
    bridge.pointer_moved(400.0, 100.0);
    field.advance(1, Bounds::new(800.0, 600.0), bridge.pointer());
    let p = field.orbs()[0].position;
    assert!((p.x - 100.15).abs() < 1e-9, "x after advance = {}", p.x);
    assert_eq!(p.y, 100.0);
}

#[test]
fn teardown_after_partial_wiring_releases_what_was_attached() {
    // Only the first listener registered before wiring failed.
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut bg = mount(11);
    bg.attach(Box::new(FakeListener {
        event: "resize",
        log: log.clone(),
    }));
    assert!(bg.teardown());
    assert_eq!(*log.borrow(), vec!["remove resize"]);
    assert!(!bg.scheduler().is_pending());
    assert!(!bg.is_running());
}
