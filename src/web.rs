// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Browser front end (`web` feature)
//!
//! Draws into the page's `#content` element: every outline gets its own
//! absolutely positioned `<svg>` layer, and the knife line and crossing
//! marks live in two more layers on top. Pointer listeners are attached to
//! the document, so a cut released outside `#content` still splits. A drag
//! is only cancelled when the pointer leaves the page itself.

use crate::config::Config;
use crate::editing::{MouseDelegate, MouseEvent};
use crate::error::Error;
use crate::render::{Renderer, check_outline, hit_marker};
use crate::theme;
use crate::tools::KnifeTool;
use kurbo::Point;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Renderer that builds SVG elements in the DOM
pub struct DomRenderer {
    document: Document,
    content: Element,
    width: f64,
    height: f64,
    knife_color: String,
    marker_color: String,
    knife: Option<Element>,
    markers: Option<Element>,
}

impl DomRenderer {
    pub fn new(document: Document, content: Element, config: &Config) -> Self {
        Self {
            document,
            content,
            width: config.canvas.width,
            height: config.canvas.height,
            knife_color: config.colors.knife.clone(),
            marker_color: config.colors.marker.clone(),
            knife: None,
            markers: None,
        }
    }

    /// A fresh full-size `<svg>` layer appended to `#content`
    fn add_layer(&self) -> Result<Element, JsValue> {
        let svg = self.document.create_element_ns(Some(SVG_NS), "svg")?;
        svg.set_attribute("width", &self.width.to_string())?;
        svg.set_attribute("height", &self.height.to_string())?;
        svg.set_attribute("style", "position: absolute;")?;
        svg.set_attribute("fill", "transparent")?;
        self.content.append_child(&svg)?;
        Ok(svg)
    }

    fn add_outline(&self, points: &[Point], color: &str) -> Result<(), JsValue> {
        let svg = self.add_layer()?;
        let path = self.document.create_element_ns(Some(SVG_NS), "path")?;
        path.set_attribute("d", &crate::model::polygon::closed_outline(points).to_svg())?;
        path.set_attribute("stroke", color)?;
        svg.append_child(&path)?;
        Ok(())
    }

    fn update_knife(&mut self, start: Point, end: Point) -> Result<(), JsValue> {
        let line = match &self.knife {
            Some(line) => line.clone(),
            None => {
                let svg = self.add_layer()?;
                let line = self.document.create_element_ns(Some(SVG_NS), "line")?;
                line.set_attribute("stroke", &self.knife_color)?;
                svg.append_child(&line)?;
                self.knife = Some(line.clone());
                line
            }
        };
        line.set_attribute("x1", &start.x.to_string())?;
        line.set_attribute("y1", &start.y.to_string())?;
        line.set_attribute("x2", &end.x.to_string())?;
        line.set_attribute("y2", &end.y.to_string())?;
        Ok(())
    }

    fn update_markers(&mut self, points: &[Point]) -> Result<(), JsValue> {
        let layer = match &self.markers {
            Some(layer) => layer.clone(),
            None => {
                let layer = self.add_layer()?;
                self.markers = Some(layer.clone());
                layer
            }
        };
        layer.set_inner_html("");
        for &at in points {
            let mark = self.document.create_element_ns(Some(SVG_NS), "path")?;
            mark.set_attribute("d", &hit_marker(at).to_svg())?;
            mark.set_attribute("stroke", &self.marker_color)?;
            mark.set_attribute("stroke-width", &theme::knife::MARKER_WIDTH.to_string())?;
            layer.append_child(&mark)?;
        }
        Ok(())
    }
}

/// Outline failures are returned as `Error::Surface`. Knife line and
/// crossing mark failures are only logged.
impl Renderer for DomRenderer {
    fn render_polygon(&mut self, points: &[Point], color: &str) -> crate::error::Result<()> {
        check_outline(points)?;
        self.add_outline(points, color)
            .map_err(|e| Error::Surface(format!("{:?}", e)))
    }

    fn clear_scene(&mut self) {
        while let Some(child) = self.content.first_child() {
            if self.content.remove_child(&child).is_err() {
                break;
            }
        }
        self.knife = None;
        self.markers = None;
    }

    fn render_feedback_line(&mut self, start: Point, end: Point) {
        if let Err(e) = self.update_knife(start, end) {
            tracing::error!("Failed to draw knife line: {:?}", e);
        }
    }

    fn render_hit_markers(&mut self, points: &[Point]) {
        if let Err(e) = self.update_markers(points) {
            tracing::error!("Failed to draw crossing marks: {:?}", e);
        }
    }
}

/// The tool and the surface it draws on, shared by the event listeners
struct App {
    tool: KnifeTool,
    renderer: DomRenderer,
}

fn to_mouse_event(event: &web_sys::MouseEvent) -> MouseEvent {
    let pos = Point::new(event.offset_x() as f64, event.offset_y() as f64);
    let mut mouse = MouseEvent::new(pos);
    if event.shift_key() {
        mouse = mouse.with_shift();
    }
    mouse
}

fn listen<F>(
    target: &EventTarget,
    kind: &str,
    app: &Rc<RefCell<App>>,
    handler: F,
) -> Result<(), JsValue>
where
    F: Fn(&mut App, MouseEvent) + 'static,
{
    let app = Rc::clone(app);
    let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |event: web_sys::MouseEvent| {
        let mut app = app.borrow_mut();
        handler(&mut app, to_mouse_event(&event));
    });
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let content = document
        .get_element_by_id("content")
        .ok_or_else(|| JsValue::from_str("missing #content element"))?;

    let config = Config::default();
    let mut renderer = DomRenderer::new(document.clone(), content.clone(), &config);
    let mut tool = KnifeTool::from_config(&config);
    tool.setup(&mut renderer);

    let app = Rc::new(RefCell::new(App { tool, renderer }));
    listen(&document, "mousedown", &app, |app, event| {
        app.tool.left_down(event, &mut app.renderer)
    })?;
    listen(&document, "mousemove", &app, |app, event| {
        app.tool.mouse_moved(event, &mut app.renderer)
    })?;
    listen(&document, "mouseup", &app, |app, event| {
        app.tool.left_up(event, &mut app.renderer)
    })?;
    let page = document
        .document_element()
        .ok_or_else(|| JsValue::from_str("no document element"))?;
    listen(&page, "mouseleave", &app, |app, _event| {
        app.tool.cancel(&mut app.renderer)
    })?;

    Ok(())
}
