//! Headless demo: frames a small assembly, replays a scripted drag, pan,
//! and scroll session through the rig, and logs the settled pose and the
//! annotation markers. Pass a TOML options file as the first argument to
//! override the defaults.

use std::path::Path;

use glam::{Vec2, Vec3};
use orbit_rig::annotation::{layout_overlay, AnnotationSet, NoOcclusion};
use orbit_rig::bounds::{subject_bounds, Aabb};
use orbit_rig::camera::{OrbitRig, TickOutcome};
use orbit_rig::error::RigError;
use orbit_rig::input::{InputEvent, InputState, MouseButton};
use orbit_rig::options::Options;

const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);
const DT: f32 = 1.0 / 60.0;

/// One scripted step of the demo session.
enum Step {
    Events(Vec<InputEvent>),
    Idle(usize),
    LoseSubject(usize),
}

fn drag(button: MouseButton, from: Vec2, to: Vec2, frames: usize) -> Vec<Step> {
    let mut steps = vec![Step::Events(vec![
        InputEvent::CursorMoved { x: from.x, y: from.y },
        InputEvent::MouseButton {
            button,
            pressed: true,
        },
    ])];
    for i in 1..=frames {
        let p = from.lerp(to, i as f32 / frames as f32);
        steps.push(Step::Events(vec![InputEvent::CursorMoved {
            x: p.x,
            y: p.y,
        }]));
    }
    steps.push(Step::Events(vec![InputEvent::MouseButton {
        button,
        pressed: false,
    }]));
    steps
}

fn script() -> Vec<Step> {
    let mut steps = Vec::new();
    steps.extend(drag(
        MouseButton::Left,
        Vec2::new(640.0, 360.0),
        Vec2::new(760.0, 330.0),
        20,
    ));
    steps.push(Step::Idle(30));
    steps.extend(drag(
        MouseButton::Right,
        Vec2::new(760.0, 330.0),
        Vec2::new(700.0, 330.0),
        10,
    ));
    steps.push(Step::Events(vec![InputEvent::Scroll { delta: 2.0 }]));
    steps.push(Step::LoseSubject(5));
    steps.push(Step::Idle(60));
    steps
}

fn run(options: &Options) -> Result<(), RigError> {
    // A small assembly: two parts offset from the subject origin.
    let subject = subject_bounds(
        Vec3::ZERO,
        [
            Aabb::new(Vec3::new(0.0, 0.5, 0.0), Vec3::new(1.0, 0.5, 1.0)),
            Aabb::new(Vec3::new(0.0, 1.5, 0.0), Vec3::splat(0.25)),
        ],
    );
    let mut rig = OrbitRig::new(&subject, options.rig.clone())?;
    let projection = options.projection.projection(VIEWPORT.x, VIEWPORT.y);

    let mut annotations = AnnotationSet::new();
    let _ = annotations.add_with_text(
        Vec3::new(0.0, 1.75, 0.0),
        "Cap",
        "Top of the assembly",
    );
    let _ = annotations.add_with_text(
        Vec3::new(1.0, 0.0, 1.0),
        "Foot",
        "Front-right corner",
    );
    let _ = annotations.toggle_selected(0);

    let mut input = InputState::new();
    let mut frame = 0usize;
    let mut tick = |input: &mut InputState, present: bool, frame: &mut usize| {
        let bounds = present.then_some(subject);
        let outcome = rig.update(input, &bounds, DT);
        *frame += 1;
        if let TickOutcome::Moved(pose) = outcome {
            log::debug!(
                "frame {frame}: position {} forward {}",
                pose.position,
                pose.forward()
            );
        }
        outcome
    };

    for step in script() {
        match step {
            Step::Events(events) => {
                for event in events {
                    input.handle_event(event);
                }
                let _ = tick(&mut input, true, &mut frame);
            }
            Step::Idle(frames) => {
                for _ in 0..frames {
                    let _ = tick(&mut input, true, &mut frame);
                }
            }
            Step::LoseSubject(frames) => {
                for _ in 0..frames {
                    let _ = tick(&mut input, false, &mut frame);
                }
            }
        }
    }

    let pose = tick(&mut input, true, &mut frame).pose();
    log::info!(
        "settled after {frame} frames at {} looking along {}",
        pose.position,
        pose.forward()
    );

    let camera = rig.camera(&projection);
    for layout in layout_overlay(
        &annotations,
        &camera,
        VIEWPORT,
        &options.annotations,
        &NoOcclusion,
        input.pointer(),
    ) {
        log::info!(
            "marker {} at ({:.0}, {:.0}){}",
            layout.label,
            layout.marker.center().x,
            layout.marker.center().y,
            if layout.description.is_some() { " [open]" } else { "" }
        );
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("Failed to load options from '{path}': {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = run(&options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
