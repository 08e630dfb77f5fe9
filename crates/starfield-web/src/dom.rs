use crate::constants::{backing_px, clamp_device_pixel_ratio, CANVAS_ELEMENT_ID};
use starfield_core::{Bounds, StarfieldError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn find_canvas(document: &web::Document) -> Result<web::HtmlCanvasElement, StarfieldError> {
    document
        .get_element_by_id(CANVAS_ELEMENT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        .ok_or(StarfieldError::MissingCanvas)
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| clamp_device_pixel_ratio(w.device_pixel_ratio()))
        .unwrap_or(1.0)
}

/// High-resolution time origin of the page, used to turn relative event
/// timestamps into epoch milliseconds.
#[inline]
pub fn time_origin_ms() -> Option<f64> {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.time_origin())
}

/// Matches the canvas backing store to its CSS box times the pixel ratio and
/// returns the box in CSS pixels, which is the space the simulation runs in.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Bounds {
    let dpr = device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    canvas.set_width(backing_px(rect.width(), dpr));
    canvas.set_height(backing_px(rect.height(), dpr));
    Bounds::new(rect.width() as f32, rect.height() as f32)
}

/// Attaches a listener for the page lifetime.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref::<js_sys::Function>())
    {
        log::warn!("[dom] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}
