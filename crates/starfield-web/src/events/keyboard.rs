use crate::constants::suppresses_scroll;
use crate::dom;
use crate::input::has_command_modifier;
use starfield_core::{command_for_key, Starfield};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, field: &Rc<RefCell<Starfield>>) {
    if has_command_modifier(ev) {
        return;
    }
    let key = ev.key();
    let Some(command) = command_for_key(&key) else {
        return;
    };
    if suppresses_scroll(&key) {
        ev.prevent_default();
    }
    log::debug!("[keys] {:?} -> {:?}", key, command);
    field.borrow_mut().handle_key(command);
}

pub fn wire_keyboard(window: &web::Window, field: &Rc<RefCell<Starfield>>) {
    let field = field.clone();
    dom::listen(window, "keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &field);
    });
}
