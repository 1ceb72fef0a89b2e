use crate::components::ConfirmationOverlay;
use crate::config::*;
use crate::dom::{self, FormView, WindowListener};
use log::{debug, warn};
use std::rc::Rc;
use table_tennis_site::effects::{
    active_section, parallax_offset, should_reveal, translate_css, SectionBounds,
};
use table_tennis_site::flow::{FlowEvent, RegistrationFlow};
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent};
use yew::prelude::*;

/// Attach a window listener, logging instead of failing when the browser refuses.
fn listen(event: &'static str, callback: Callback<Event>) -> Option<WindowListener> {
    match WindowListener::new(event, callback) {
        Ok(listener) => Some(listener),
        Err(e) => {
            warn!("Could not listen for '{}': {:?}", event, e);
            None
        }
    }
}

/// State and entry point of the registration flow for one mounted form.
pub struct RegistrationHandle {
    /// The confirmation dialog to render, if any.
    pub overlay: Option<ConfirmationOverlay>,
    /// Feeds UI events into the flow.
    pub dispatch: Callback<FlowEvent>,
}

/// Custom hook owning a [`RegistrationFlow`] bound to `form`.
///
/// The flow is created once and kept across renders. Rejections are already
/// shown to the user by the flow, so the dispatcher only logs them.
#[hook]
pub fn use_registration_flow(form: NodeRef) -> RegistrationHandle {
    let overlay = use_state(|| None::<ConfirmationOverlay>);
    let flow = {
        let setter = overlay.setter();
        use_mut_ref(move || RegistrationFlow::new(FormView::new(form, setter)))
    };

    let dispatch = Callback::from(move |event: FlowEvent| {
        if let Err(e) = flow.borrow_mut().handle_event(event) {
            debug!("Submission rejected: {}", e);
        }
    });

    RegistrationHandle {
        overlay: (*overlay).clone(),
        dispatch,
    }
}

/// Id of the section currently scrolled into view.
///
/// Keeps the previous value while the reader is between sections.
#[hook]
pub fn use_active_section() -> Option<String> {
    let active = use_state_eq(|| None::<String>);
    {
        let active = active.clone();
        use_effect_with((), move |_| {
            let on_scroll = Callback::from(move |_: Event| {
                let layout = match dom::section_layout() {
                    Ok(layout) => layout,
                    Err(e) => {
                        warn!("Could not measure sections: {:?}", e);
                        return;
                    }
                };
                let bounds: Vec<SectionBounds> = layout
                    .iter()
                    .map(|(id, top, height)| SectionBounds {
                        id: id.as_str(),
                        offset_top: *top,
                        height: *height,
                    })
                    .collect();
                if let Some(id) = active_section(dom::scroll_y(), &bounds, SECTION_OFFSET_PX) {
                    active.set(Some(id.to_string()));
                }
            });
            let listener = listen("scroll", on_scroll);
            move || drop(listener)
        });
    }
    (*active).clone()
}

/// CSS transforms for `count` parallax balls following the pointer.
#[hook]
pub fn use_pointer_parallax(count: usize) -> Rc<Vec<String>> {
    let transforms = use_state(|| Rc::new(vec![String::new(); count]));
    {
        let transforms = transforms.clone();
        use_effect_with(count, move |&count| {
            let on_move = Callback::from(move |e: Event| {
                let Some(e) = e.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let pointer = (e.client_x() as f64, e.client_y() as f64);
                let viewport = dom::viewport_size();
                let styles = (0..count)
                    .map(|i| {
                        translate_css(parallax_offset(i, pointer, viewport, PARALLAX_SPEED_STEP_PX))
                    })
                    .collect();
                transforms.set(Rc::new(styles));
            });
            let listener = listen("mousemove", on_move);
            move || drop(listener)
        });
    }
    (*transforms).clone()
}

/// Whether the element behind `node` has scrolled into view.
///
/// Re-measured on every event in [`REVEAL_EVENTS`], so cards brought into
/// view by a resize are revealed too. Once true it stays true and the
/// listeners are released.
#[hook]
pub fn use_scroll_reveal(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);
    {
        let revealed = revealed.clone();
        let done = *revealed;
        use_effect_with(done, move |&done| {
            let listeners: Vec<WindowListener> = if done {
                Vec::new()
            } else {
                let check = Rc::new(move || {
                    let Some((_, top, _, height)) = dom::client_rect(&node) else {
                        return;
                    };
                    let (_, viewport_height) = dom::viewport_size();
                    if should_reveal(
                        top,
                        height,
                        viewport_height,
                        REVEAL_THRESHOLD,
                        REVEAL_BOTTOM_MARGIN_PX,
                    ) {
                        revealed.set(true);
                    }
                });
                check();
                REVEAL_EVENTS
                    .iter()
                    .filter_map(|&event| {
                        let check = check.clone();
                        listen(event, Callback::from(move |_: Event| check()))
                    })
                    .collect()
            };
            move || drop(listeners)
        });
    }
    *revealed
}
