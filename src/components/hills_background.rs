use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::background::{ridge_points, HILL_LAYERS, SKY_BOTTOM, SKY_TOP};
use crate::error::AppError;

const RIDGE_STEP: f64 = 24.0;

/// Paints the hills into a canvas every frame until detached.
struct HillsPainter {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    frame: RefCell<Option<AnimationFrame>>,
    resize: RefCell<Option<EventListener>>,
    started_at: Cell<Option<f64>>,
    attached: Cell<bool>,
}

impl HillsPainter {
    fn attach(canvas: HtmlCanvasElement) -> Result<Rc<Self>, AppError> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| AppError::dom("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::dom("unexpected canvas context type"))?;

        let painter = Rc::new(Self {
            canvas,
            context,
            frame: RefCell::new(None),
            resize: RefCell::new(None),
            started_at: Cell::new(None),
            attached: Cell::new(true),
        });
        painter.fit_to_viewport();

        let window = window().ok_or_else(|| AppError::dom("window is unavailable"))?;
        let weak = Rc::downgrade(&painter);
        *painter.resize.borrow_mut() = Some(EventListener::new(&window, "resize", move |_| {
            if let Some(painter) = weak.upgrade() {
                painter.fit_to_viewport();
            }
        }));

        painter.schedule_frame();
        Ok(painter)
    }

    fn fit_to_viewport(&self) {
        let Some(window) = window() else { return };
        let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    fn schedule_frame(self: &Rc<Self>) {
        if !self.attached.get() {
            return;
        }
        let weak = Rc::downgrade(self);
        let handle = request_animation_frame(move |timestamp| {
            if let Some(painter) = weak.upgrade() {
                painter.render(timestamp);
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn render(self: &Rc<Self>, timestamp: f64) {
        self.frame.borrow_mut().take();
        if !self.attached.get() {
            return;
        }
        let started_at = match self.started_at.get() {
            Some(started_at) => started_at,
            None => {
                self.started_at.set(Some(timestamp));
                timestamp
            }
        };
        let seconds = (timestamp - started_at) / 1_000.0;

        if let Err(e) = self.paint(seconds) {
            log::error!("Failed to paint background: {}", e);
            return;
        }
        self.schedule_frame();
    }

    fn paint(&self, seconds: f64) -> Result<(), AppError> {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        let ctx = &self.context;

        let sky = ctx.create_linear_gradient(0.0, 0.0, 0.0, height);
        sky.add_color_stop(0.0, SKY_TOP)?;
        sky.add_color_stop(1.0, SKY_BOTTOM)?;
        ctx.set_fill_style(&sky);
        ctx.fill_rect(0.0, 0.0, width, height);

        for layer in HILL_LAYERS.iter() {
            let points = ridge_points(layer, width, height, seconds, RIDGE_STEP);
            let Some(first) = points.first() else { continue };
            ctx.begin_path();
            ctx.move_to(0.0, height);
            ctx.line_to(first.x, first.y);
            for point in &points[1..] {
                ctx.line_to(point.x, point.y);
            }
            ctx.line_to(width, height);
            ctx.close_path();
            ctx.set_fill_style(&JsValue::from_str(layer.color));
            ctx.fill();
        }
        Ok(())
    }

    fn detach(&self) {
        self.attached.set(false);
        self.frame.borrow_mut().take();
        self.resize.borrow_mut().take();
    }
}

/// Full-viewport animated hills. Ignores pointer events.
#[function_component]
pub fn HillsBackground() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let painter = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .ok_or_else(|| AppError::dom("background canvas is not mounted"))
                    .and_then(HillsPainter::attach);
                let painter = match painter {
                    Ok(painter) => Some(painter),
                    Err(e) => {
                        log::warn!("Animated background disabled: {}", e);
                        None
                    }
                };
                move || {
                    if let Some(painter) = painter {
                        painter.detach();
                    }
                }
            },
            (),
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            class="hills-background"
            style="position: absolute; inset: 0; width: 100%; height: 100%; display: block; pointer-events: none;"
        />
    }
}
