#![cfg(target_arch = "wasm32")]
mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod storage;

use canvas::CanvasSurface;
use constants::STORAGE_KEY;
use frame::FrameContext;
use instant::Instant;
use starfield_core::{SettingKey, Starfield, StarfieldError};
use std::cell::RefCell;
use std::rc::Rc;
use storage::LocalStorage;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

thread_local! {
    // set once init has wired the canvas; the exported hooks are no-ops before
    static FIELD: RefCell<Option<Rc<RefCell<Starfield>>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starfield-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // No canvas is a supported page layout, not a failure: stay idle.
    let (canvas, surface) = match dom::find_canvas(&document)
        .and_then(|c| CanvasSurface::from_canvas(&c).map(|s| (c, s)))
    {
        Ok(found) => found,
        Err(StarfieldError::MissingCanvas) => {
            log::warn!("[init] no drawable #{} canvas; starfield disabled", constants::CANVAS_ELEMENT_ID);
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("{}", e)),
    };

    let bounds = dom::sync_canvas_backing_size(&canvas);
    let storage = Rc::new(RefCell::new(LocalStorage::open()));
    let field = Starfield::boot(bounds, &*storage.borrow(), STORAGE_KEY, rand::random::<u64>());
    let field = Rc::new(RefCell::new(field));
    FIELD.with(|slot| *slot.borrow_mut() = Some(field.clone()));

    events::wire_resize(&window, &canvas, &field);
    events::wire_pointer(&window, &canvas, &field);
    events::wire_keyboard(&window, &field);
    events::wire_persistence(&window, &document, &field, &storage);

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        field,
        surface,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    log::info!("[init] {}x{} starfield running", bounds.width, bounds.height);
    Ok(())
}

fn with_field(f: impl FnOnce(&mut Starfield)) -> bool {
    FIELD.with(|slot| match slot.borrow().as_ref() {
        Some(field) => {
            f(&mut field.borrow_mut());
            true
        }
        None => false,
    })
}

/// Pauses or resumes physics; rendering continues. Used by the page around
/// route transitions.
#[wasm_bindgen]
pub fn set_starfield_frozen(frozen: bool) {
    with_field(|field| field.set_frozen(frozen));
}

/// Updates one slider by name. Returns false for unknown names or before the
/// field exists.
#[wasm_bindgen]
pub fn set_starfield_setting(name: &str, value: f32) -> bool {
    let Some(key) = SettingKey::from_name(name) else {
        log::warn!("[settings] unknown setting {:?}", name);
        return false;
    };
    with_field(|field| field.set_setting(key, value))
}
