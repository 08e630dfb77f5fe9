use crate::constants::STORAGE_KEY;
use crate::dom;
use crate::storage::LocalStorage;
use starfield_core::Starfield;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_resize(window: &web::Window, canvas: &web::HtmlCanvasElement, field: &Rc<RefCell<Starfield>>) {
    let field = field.clone();
    let canvas = canvas.clone();
    dom::listen(window, "resize", move |_: web::Event| {
        let bounds = dom::sync_canvas_backing_size(&canvas);
        field.borrow_mut().resize(bounds);
    });
}

/// Saves the field whenever the page may be going away: hidden tab, bfcache
/// navigation or unload.
pub fn wire_persistence(
    window: &web::Window,
    document: &web::Document,
    field: &Rc<RefCell<Starfield>>,
    storage: &Rc<RefCell<LocalStorage>>,
) {
    let save = {
        let field = field.clone();
        let storage = storage.clone();
        move || field.borrow().save(&mut *storage.borrow_mut(), STORAGE_KEY)
    };

    {
        let save = save.clone();
        let doc = document.clone();
        dom::listen(document, "visibilitychange", move |_: web::Event| {
            if doc.visibility_state() == web::VisibilityState::Hidden {
                save();
            }
        });
    }
    {
        let save = save.clone();
        dom::listen(window, "pagehide", move |_: web::Event| save());
    }
    dom::listen(window, "beforeunload", move |_: web::Event| save());
}
