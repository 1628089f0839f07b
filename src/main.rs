//! Command-line driver for the `rondel` circle widget.
//!
//! Loads options, runs a slider-driven radius transition to completion, and
//! logs the resulting readouts.

use std::time::Instant;

use rondel::options::Options;
use rondel::render::{RenderSurface, Scene};
use rondel::runtime::EventLoop;
use rondel::widget::{CircleWidget, RondelCommand};

/// Surface that reports redraw requests through the log.
struct LogSurface;

impl RenderSurface for LogSurface {
    fn redraw(&mut self, scene: &Scene) {
        log::debug!(
            "redraw: circle r={:.3} at ({:.2}, {:.2}), wedge theta2={:.1}, \
             bounds x=[{:.2}, {:.2}]",
            scene.circle.radius,
            scene.circle.center.x,
            scene.circle.center.y,
            scene.wedge.theta2,
            scene.bounds.x_min,
            scene.bounds.x_max,
        );
    }
}

fn log_readouts(widget: &CircleWidget<EventLoop, LogSurface>) {
    let readouts = &widget.panel().readouts;
    log::info!(
        "radius {} | diameter {} | circumference {} | pi ratio {}",
        readouts.radius,
        readouts.diameter,
        readouts.circumference,
        readouts.pi_ratio,
    );
}

fn main() {
    env_logger::init();

    let target: f64 = match std::env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(value) => value,
            Err(_) => {
                log::error!("Usage: rondel [TARGET_RADIUS] [OPTIONS_TOML]");
                std::process::exit(1);
            }
        },
        None => 50.0,
    };

    let options = match std::env::args().nth(2) {
        Some(path) => match Options::load(std::path::Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let mut widget = CircleWidget::new(EventLoop::new(), LogSurface, options);
    log_readouts(&widget);

    log::info!("sliding radius to {target}");
    let start = Instant::now();
    widget.execute(RondelCommand::SetRadiusFromSlider { value: target });

    // Pump the cooperative loop until the transition settles.
    while let Some(due) = widget.scheduler().next_due() {
        let now = Instant::now();
        let wait = due.saturating_duration_since(now);
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        if widget.scheduler_mut().pop_due(Instant::now()).is_some() {
            widget.on_tick();
        }
    }

    log::info!(
        "settled at display radius {} in {:.0} ms",
        widget.state().display_radius(),
        start.elapsed().as_secs_f64() * 1000.0,
    );
    log_readouts(&widget);
}
