//! Browser interop: alerts, window listeners, layout reads and the
//! form-backed implementation of [`RegistrationView`].

use crate::components::ConfirmationOverlay;
use crate::config::EXIT_TRANSITION_MS;
use gloo_timers::callback::Timeout;
use gloo_utils::{document, window};
use log::warn;
use table_tennis_site::flow::{ConfirmationSurface, RegistrationView};
use table_tennis_site::{Field, RegistrationSubmission};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, FormData, HtmlElement, HtmlFormElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::functional::UseStateSetter;
use yew::{Callback, NodeRef};

pub fn alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        warn!("alert failed: {:?}", e);
    }
}

/// Smooth-scroll to the element an in-page `#id` link points at.
/// Missing targets are ignored.
pub fn scroll_to_anchor(href: &str) -> Result<(), JsValue> {
    if !href.starts_with('#') {
        return Ok(());
    }
    if let Some(target) = document().query_selector(href)? {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
    Ok(())
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

pub fn viewport_size() -> (f64, f64) {
    let w = window();
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

/// `(id, offsetTop, offsetHeight)` for every `<section id=..>` in the page.
pub fn section_layout() -> Result<Vec<(String, f64, f64)>, JsValue> {
    let nodes = document().query_selector_all("section[id]")?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|el| (el.id(), el.offset_top() as f64, el.offset_height() as f64))
        .collect())
}

/// Viewport-relative `(left, top, width, height)` of a mounted node.
pub fn client_rect(node: &NodeRef) -> Option<(f64, f64, f64, f64)> {
    let el = node.cast::<Element>()?;
    let rect = el.get_bounding_client_rect();
    Some((rect.left(), rect.top(), rect.width(), rect.height()))
}

/// A window event listener that unregisters itself when dropped.
pub struct WindowListener {
    event: &'static str,
    closure: Closure<dyn Fn(Event)>,
}

impl WindowListener {
    pub fn new(event: &'static str, callback: Callback<Event>) -> Result<Self, JsValue> {
        let closure = Closure::<dyn Fn(Event)>::new(move |e: Event| callback.emit(e));
        window().add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self { event, closure })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = window()
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// [`RegistrationView`] over the mounted `<form>` and the overlay state.
pub struct FormView {
    form: NodeRef,
    overlay: UseStateSetter<Option<ConfirmationOverlay>>,
    shown: Option<ConfirmationSurface>,
}

impl FormView {
    pub fn new(form: NodeRef, overlay: UseStateSetter<Option<ConfirmationOverlay>>) -> Self {
        Self {
            form,
            overlay,
            shown: None,
        }
    }
}

impl RegistrationView for FormView {
    fn read_fields(&self) -> RegistrationSubmission {
        let Some(form) = self.form.cast::<HtmlFormElement>() else {
            warn!("Registration form is not mounted");
            return RegistrationSubmission::new();
        };
        let data = match FormData::new_with_form(&form) {
            Ok(data) => data,
            Err(e) => {
                warn!("Could not read registration form: {:?}", e);
                return RegistrationSubmission::new();
            }
        };
        let mut submission = RegistrationSubmission::new();
        for field in Field::ALL {
            if let Some(value) = data.get(field.name()).as_string() {
                submission.set(field.name(), value);
            }
        }
        submission
    }

    fn alert(&mut self, message: &str) {
        alert(message);
    }

    fn show_confirmation(&mut self, surface: &ConfirmationSurface) {
        self.shown = Some(surface.clone());
        self.overlay.set(Some(ConfirmationOverlay {
            surface: surface.clone(),
            closing: false,
        }));
    }

    fn clear_fields(&mut self) {
        match self.form.cast::<HtmlFormElement>() {
            Some(form) => form.reset(),
            None => warn!("Registration form is not mounted; nothing to reset"),
        }
    }

    fn dismiss_confirmation(&mut self) {
        let Some(surface) = self.shown.take() else {
            return;
        };
        self.overlay.set(Some(ConfirmationOverlay {
            surface,
            closing: true,
        }));
        let overlay = self.overlay.clone();
        Timeout::new(EXIT_TRANSITION_MS, move || overlay.set(None)).forget();
    }
}
