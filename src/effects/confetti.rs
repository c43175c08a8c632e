//! One-shot canvas confetti burst for the CTA buttons. Purely decorative:
//! any DOM failure aborts the effect without a trace.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use crate::config;

const PARTICLE_COUNT: usize = 70;
const SPREAD_DEGREES: f64 = 55.0;
const TICKS: u32 = 180;
const SCALAR: f64 = 0.9;
const FRAME_MS: u32 = 16;
const GRAVITY: f64 = 0.11;
const DRAG: f64 = 0.985;

const COLORS: [&str; 4] = [config::NEON, config::ORANGE, "#EAEAEA", "#FFD700"];

struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    size: f64,
    tilt: f64,
    tilt_speed: f64,
    color: &'static str,
}

impl Particle {
    fn launch(x: f64, y: f64) -> Self {
        // Upward cone: straight up plus a random slice of the spread.
        let angle = -std::f64::consts::FRAC_PI_2
            + (js_sys::Math::random() - 0.5) * SPREAD_DEGREES.to_radians();
        let speed = (4.0 + js_sys::Math::random() * 4.0) * SCALAR;
        let color_index = (js_sys::Math::random() * COLORS.len() as f64) as usize;
        Self {
            x,
            y,
            vx: angle.cos() * speed,
            vy: angle.sin() * speed,
            size: (4.0 + js_sys::Math::random() * 4.0) * SCALAR,
            tilt: js_sys::Math::random() * std::f64::consts::TAU,
            tilt_speed: 0.1 + js_sys::Math::random() * 0.2,
            color: COLORS[color_index % COLORS.len()],
        }
    }

    fn step(&mut self) {
        self.vy += GRAVITY;
        self.vx *= DRAG;
        self.vy *= DRAG;
        self.x += self.vx;
        self.y += self.vy;
        self.tilt += self.tilt_speed;
    }
}

/// Fires a confetti burst from the center of `element`.
pub fn burst_from(element: &Element) {
    let rect = element.get_bounding_client_rect();
    let origin_x = rect.left() + rect.width() / 2.0;
    let origin_y = rect.top() + rect.height() / 2.0;
    if burst_at(origin_x, origin_y).is_none() {
        gloo_console::debug!("confetti burst skipped");
    }
}

fn burst_at(origin_x: f64, origin_y: f64) -> Option<()> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let body = document.body()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;

    let canvas: HtmlCanvasElement = document.create_element("canvas").ok()?.dyn_into().ok()?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    canvas
        .set_attribute(
            "style",
            "position: fixed; top: 0; left: 0; pointer-events: none; z-index: 9999;",
        )
        .ok()?;
    body.append_child(&canvas).ok()?;

    let context = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;

    let mut particles: Vec<Particle> = (0..PARTICLE_COUNT)
        .map(|_| Particle::launch(origin_x, origin_y))
        .collect();

    let tick = Rc::new(Cell::new(0u32));
    let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let interval = {
        let interval_handle = interval_handle.clone();
        let canvas = canvas.clone();
        Interval::new(FRAME_MS, move || {
            let frame = tick.get();
            tick.set(frame + 1);
            if frame >= TICKS {
                canvas.remove();
                if let Some(interval) = interval_handle.borrow_mut().take() {
                    drop(interval);
                }
                return;
            }

            let fade = 1.0 - frame as f64 / TICKS as f64;
            context.clear_rect(0.0, 0.0, width, height);
            context.set_global_alpha(fade);
            for particle in particles.iter_mut() {
                particle.step();
                context.save();
                let _ = context.translate(particle.x, particle.y);
                let _ = context.rotate(particle.tilt);
                context.set_fill_style_str(particle.color);
                context.fill_rect(
                    -particle.size / 2.0,
                    -particle.size / 2.0,
                    particle.size,
                    particle.size * 0.6,
                );
                context.restore();
            }
        })
    };
    *interval_handle.borrow_mut() = Some(interval);
    Some(())
}
