use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{EventTarget, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use crate::input::{CanvasGeometry, backing_ratio, cell_at, pixel_ratio};
use crate::render;
use crate::session::{Session, SessionAction};
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct BoardCanvasProps {
    pub session: UseReducerHandle<Session>,
}

/// Mouse listener removed from its target when dropped.
struct CanvasListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(MouseEvent)>,
}

impl CanvasListener {
    fn new(target: &EventTarget, event: &'static str, f: impl FnMut(MouseEvent) + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(MouseEvent)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| clog(&format!("could not listen for {}: {:?}", event, e)))
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for CanvasListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

#[function_component(BoardCanvas)]
pub fn board_canvas(props: &BoardCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let dims = props.session.field.as_ref().map(|f| (f.height(), f.width()));

    // Mount: size the canvas for this field and hook up the mouse.
    {
        let canvas_ref = canvas_ref.clone();
        let dispatcher = props.session.dispatcher();
        use_effect_with((), move |_| {
            let mut listeners: Vec<CanvasListener> = Vec::new();
            if let (Some(canvas), Some((rows, cols))) = (canvas_ref.cast::<HtmlCanvasElement>(), dims) {
                let (w, h) = render::canvas_css_size(cols, rows);
                if let Err(e) = render::apply_hidpi(&canvas, w, h, pixel_ratio()) {
                    clog(&format!("canvas setup failed: {:?}", e));
                }

                let reveal = {
                    let canvas = canvas.clone();
                    let dispatcher = dispatcher.clone();
                    move |e: MouseEvent| {
                        let (row, col) = event_cell(&canvas, &e, rows, cols, w);
                        dispatcher.dispatch(SessionAction::Reveal { row, col });
                    }
                };
                let flag = {
                    let canvas = canvas.clone();
                    let dispatcher = dispatcher.clone();
                    move |e: MouseEvent| {
                        e.prevent_default();
                        let (row, col) = event_cell(&canvas, &e, rows, cols, w);
                        dispatcher.dispatch(SessionAction::ToggleFlag { row, col });
                    }
                };
                listeners.extend(CanvasListener::new(&canvas, "click", reveal));
                listeners.extend(CanvasListener::new(&canvas, "contextmenu", flag));
            }
            move || drop(listeners)
        });
    }

    // Redraw whenever the session moves on.
    {
        let canvas_ref = canvas_ref.clone();
        let session = props.session.clone();
        use_effect_with(props.session.version, move |_| {
            if let (Some(canvas), Some(field)) = (canvas_ref.cast::<HtmlCanvasElement>(), session.field.as_ref()) {
                let (css_w, _) = render::canvas_css_size(field.width(), field.height());
                let ratio = backing_ratio(canvas.width() as f64, css_w);
                if let Err(e) = render::draw(&canvas, field, ratio) {
                    clog(&format!("draw failed: {:?}", e));
                }
            }
            || ()
        });
    }

    html! { <canvas ref={canvas_ref} id="game-canvas"></canvas> }
}

fn event_cell(canvas: &HtmlCanvasElement, e: &MouseEvent, rows: u32, cols: u32, css_w: f64) -> (u32, u32) {
    let geometry = CanvasGeometry::from_canvas(canvas, css_w);
    cell_at(e.client_x() as f64, e.client_y() as f64, &geometry, rows, cols)
}
