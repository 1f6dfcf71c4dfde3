use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{window, Event, HtmlElement};
use yew::prelude::*;

use crate::config;
use crate::data::TrailItem;
use crate::error::AppError;
use crate::trail::{TileStyle, TrailConfig, TrailSession};
use crate::utils::dom::{apply_tile_style, element_size, local_pointer};

const TRAIL_CSS: &str = r#"
    .trail {
        position: relative;
        width: 100%;
        height: 100%;
        overflow: hidden;
        touch-action: pan-y;
    }
    .trail__tile {
        position: absolute;
        top: 0;
        left: 0;
        width: clamp(140px, 16vw, 220px);
        aspect-ratio: 1 / 1.2;
        border-radius: 14px;
        overflow: hidden;
        opacity: 0;
        pointer-events: none;
        will-change: transform, opacity;
        box-shadow: 0 18px 40px rgba(79, 70, 229, 0.25);
    }
    .trail__tile-inner {
        position: absolute;
        inset: 0;
        background-size: cover;
        background-position: 50% 50%;
    }
    .trail__tile-overlay {
        position: absolute;
        inset: auto 0 0 0;
        padding: 0.6rem 0.8rem;
        background: linear-gradient(to top, rgba(17, 12, 46, 0.75), transparent);
    }
    .trail__tile-label {
        color: #fff;
        font-size: 0.8rem;
        font-weight: 600;
        letter-spacing: 0.18em;
        text-transform: uppercase;
    }
"#;

/// Binds a `TrailSession` to the rendered tiles of one container.
///
/// Listener and frame closures only hold weak references; the owning effect
/// keeps the controller alive and calls `detach` on teardown.
struct TrailController {
    container: HtmlElement,
    tiles: Vec<HtmlElement>,
    session: RefCell<TrailSession>,
    frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
    attached: Cell<bool>,
}

impl TrailController {
    fn attach(container: HtmlElement, config: TrailConfig) -> Result<Rc<Self>, AppError> {
        let nodes = container.query_selector_all(".trail__tile")?;
        let mut tiles = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else { continue };
            let tile = node
                .dyn_into::<HtmlElement>()
                .map_err(|_| AppError::dom("trail tile is not an HTML element"))?;
            tiles.push(tile);
        }

        let controller = Rc::new(Self {
            container,
            session: RefCell::new(TrailSession::new(tiles.len(), config)),
            tiles,
            frame: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
            attached: Cell::new(true),
        });
        controller.measure_tiles();
        controller.install_listeners()?;
        log::debug!("Image trail attached with {} tiles", controller.tiles.len());
        Ok(controller)
    }

    fn measure_tiles(&self) {
        let mut session = self.session.borrow_mut();
        for (index, tile) in self.tiles.iter().enumerate() {
            if let Err(e) = apply_tile_style(tile, &TileStyle::HIDDEN) {
                log::error!("Failed to reset trail tile {}: {}", index, e);
            }
            session.measure(index, element_size(tile));
        }
    }

    fn install_listeners(self: &Rc<Self>) -> Result<(), AppError> {
        let window = window().ok_or_else(|| AppError::dom("window is unavailable"))?;
        let mut listeners = Vec::with_capacity(3);

        for event_type in ["mousemove", "touchmove"] {
            let controller = Rc::downgrade(self);
            listeners.push(EventListener::new(&self.container, event_type, move |event| {
                if let Some(controller) = controller.upgrade() {
                    controller.on_pointer(event);
                }
            }));
        }

        let controller = Rc::downgrade(self);
        listeners.push(EventListener::new(&window, "resize", move |_| {
            if let Some(controller) = controller.upgrade() {
                controller.measure_tiles();
            }
        }));

        *self.listeners.borrow_mut() = listeners;
        Ok(())
    }

    fn on_pointer(self: &Rc<Self>, event: &Event) {
        let Some(point) = local_pointer(event, &self.container) else {
            return;
        };
        let first_sample = self.session.borrow_mut().pointer_moved(point);
        if first_sample {
            log::debug!("Image trail started at ({:.0}, {:.0})", point.x, point.y);
            self.schedule_frame();
        }
    }

    fn schedule_frame(self: &Rc<Self>) {
        if !self.attached.get() {
            return;
        }
        let controller = Rc::downgrade(self);
        let handle = request_animation_frame(move |timestamp| {
            if let Some(controller) = controller.upgrade() {
                controller.render(timestamp);
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn render(self: &Rc<Self>, timestamp: f64) {
        self.frame.borrow_mut().take();
        if !self.attached.get() {
            return;
        }

        let report = self.session.borrow_mut().frame(timestamp);
        {
            let session = self.session.borrow();
            for &index in &report.dirty {
                let (Some(tile), Some(element)) = (session.tile(index), self.tiles.get(index)) else {
                    continue;
                };
                if let Err(e) = apply_tile_style(element, &tile.style()) {
                    log::error!("Failed to paint trail tile {}: {}", index, e);
                }
            }
        }

        self.schedule_frame();
    }

    /// Stops the frame loop and drops every listener. Tiles keep whatever
    /// style they last received.
    fn detach(&self) {
        self.attached.set(false);
        self.frame.borrow_mut().take();
        self.listeners.borrow_mut().clear();
        log::debug!("Image trail detached");
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ImageTrailProps {
    #[prop_or_default]
    pub items: Vec<TrailItem>,
}

#[function_component]
pub fn ImageTrail(props: &ImageTrailProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        use_effect_with_deps(
            move |_| {
                let attached = container_ref
                    .cast::<HtmlElement>()
                    .ok_or_else(|| AppError::dom("trail container is not mounted"))
                    .and_then(|container| TrailController::attach(container, config::trail_config()));
                let controller = match attached {
                    Ok(controller) => Some(controller),
                    Err(e) => {
                        log::error!("Failed to attach image trail: {}", e);
                        None
                    }
                };
                move || {
                    if let Some(controller) = controller {
                        controller.detach();
                    }
                }
            },
            props.items.clone(),
        );
    }

    html! {
        <div class="trail" ref={container_ref}>
            <style>{TRAIL_CSS}</style>
            {
                props.items.iter().enumerate().map(|(index, item)| {
                    html! {
                        <div class="trail__tile" key={index}>
                            <div
                                class="trail__tile-inner"
                                style={format!("background-image: url({});", item.url)}
                            />
                            {
                                if let Some(label) = &item.label {
                                    html! {
                                        <div class="trail__tile-overlay">
                                            <span class="trail__tile-label">{label}</span>
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
