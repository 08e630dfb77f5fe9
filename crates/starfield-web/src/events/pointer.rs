use crate::dom;
use crate::input::pointer_canvas_css;
use starfield_core::Starfield;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Pointer events are read on the window so the field reacts even when the
/// canvas sits behind page content.
pub fn wire_pointer(window: &web::Window, canvas: &web::HtmlCanvasElement, field: &Rc<RefCell<Starfield>>) {
    let time_origin = dom::time_origin_ms();

    {
        let field = field.clone();
        let canvas = canvas.clone();
        dom::listen(window, "pointermove", move |ev: web::PointerEvent| {
            let pos = pointer_canvas_css(&ev, &canvas);
            field
                .borrow_mut()
                .pointer_moved(pos, ev.time_stamp(), time_origin);
        });
    }

    {
        let field = field.clone();
        let canvas = canvas.clone();
        dom::listen(window, "pointerdown", move |ev: web::PointerEvent| {
            let pos = pointer_canvas_css(&ev, &canvas);
            field
                .borrow_mut()
                .pointer_tapped(pos, ev.time_stamp(), time_origin);
        });
    }

    {
        let field = field.clone();
        dom::listen(window, "pointerout", move |ev: web::PointerEvent| {
            // a null related target means the pointer left the page
            if ev.related_target().is_none() {
                field.borrow_mut().pointer_left();
            }
        });
    }

    {
        let field = field.clone();
        dom::listen(window, "blur", move |_: web::Event| {
            field.borrow_mut().pointer_left();
        });
    }
}
