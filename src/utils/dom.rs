use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, Event, HtmlElement, MouseEvent, TouchEvent};

use crate::error::AppError;
use crate::trail::{Point, Size, TileStyle};

pub fn document() -> Result<Document, AppError> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::dom("document is unavailable"))
}

/// Sets the tab title and the `<meta name="description">` tag, creating the
/// tag when the host page lacks one.
pub fn apply_metadata(title: &str, description: &str) -> Result<(), AppError> {
    let document = document()?;
    document.set_title(title);

    let meta = match document.query_selector("meta[name=\"description\"]")? {
        Some(meta) => meta,
        None => {
            let meta = document.create_element("meta")?;
            meta.set_attribute("name", "description")?;
            let head = document
                .head()
                .ok_or_else(|| AppError::dom("document has no <head>"))?;
            head.append_child(&meta)?;
            meta
        }
    };
    meta.set_attribute("content", description)?;
    Ok(())
}

pub fn element_size(element: &Element) -> Size {
    let rect = element.get_bounding_client_rect();
    Size::new(rect.width(), rect.height())
}

/// Pointer position relative to `container`, from either a mouse or a touch
/// event. Touch uses the first active touch point.
pub fn local_pointer(event: &Event, container: &Element) -> Option<Point> {
    let rect = container.get_bounding_client_rect();
    let (client_x, client_y) = if let Some(touch_event) = event.dyn_ref::<TouchEvent>() {
        let touch = touch_event.touches().get(0)?;
        (touch.client_x(), touch.client_y())
    } else {
        let mouse = event.dyn_ref::<MouseEvent>()?;
        (mouse.client_x(), mouse.client_y())
    };
    Some(Point::new(
        client_x as f64 - rect.left(),
        client_y as f64 - rect.top(),
    ))
}

pub fn apply_tile_style(element: &HtmlElement, style: &TileStyle) -> Result<(), AppError> {
    let css = element.style();
    css.set_property("transform", &style.transform())?;
    css.set_property("opacity", &format!("{:.4}", style.opacity))?;
    css.set_property("z-index", &style.z_index.to_string())?;
    Ok(())
}
