//! Yew view components for the tournament page.

use crate::config::*;
use crate::dom;
use crate::hooks::{use_pointer_parallax, use_scroll_reveal};
use log::warn;
use table_tennis_site::effects::Tilt;
use table_tennis_site::flow::{ConfirmationSurface, FlowEvent};
use table_tennis_site::Field;
use wasm_bindgen::JsValue;
use yew::prelude::*;

/// The confirmation dialog as currently rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationOverlay {
    pub surface: ConfirmationSurface,
    /// Exit transition is playing; the overlay is detached when it ends.
    pub closing: bool,
}

fn anchor_click(href: &'static str, after: Option<Callback<()>>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(after) = &after {
            after.emit(());
        }
        if let Err(e) = dom::scroll_to_anchor(href) {
            warn!("Could not scroll to {}: {:?}", href, e);
        }
    })
}

fn reveal_style(revealed: bool) -> String {
    if revealed {
        format!("animation: {};", REVEAL_ANIMATION)
    } else {
        "opacity: 0;".to_string()
    }
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active: Option<String>,
}

/// Top navigation with the mobile menu toggle.
#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    html! {
        <nav class="navbar">
            <a class="logo" href="#home" onclick={anchor_click("#home", None)}>{ "🏓 Пинг-понг турнири" }</a>
            <button class="mobile-menu-toggle" id="mobileMenuToggle" onclick={toggle}>
                { "☰" }
            </button>
            <ul class={classes!("nav-menu", (*menu_open).then_some("active"))} id="navMenu">
                { NAV_LINKS.iter().map(|&(href, text)| {
                    let active = href.strip_prefix('#').is_some_and(|id| props.active.as_deref() == Some(id));
                    html! {
                        <li>
                            <a class={classes!("nav-link", active.then_some("active"))}
                                href={href}
                                onclick={anchor_click(href, Some(close_menu.clone()))}
                            >
                                { text }
                            </a>
                        </li>
                    }
                }).collect::<Html>() }
            </ul>
        </nav>
    }
}

/// Landing section with pointer-following balls.
#[function_component(Hero)]
pub fn hero() -> Html {
    let transforms = use_pointer_parallax(HERO_BALL_COUNT);

    html! {
        <section id="home" class="hero">
            <div class="hero-balls">
                { transforms.iter().map(|t| html! {
                    <div class="ball" style={format!("transform: {};", t)}></div>
                }).collect::<Html>() }
            </div>
            <h1>{ "Турнири по тенис на маса" }</h1>
            <p>{ "Състезавай се с най-добрите играчи в страната." }</p>
            <a class="btn-primary" href="#registration" onclick={anchor_click("#registration", None)}>
                { "Регистрирай се" }
            </a>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct TournamentCardProps {
    pub name: &'static str,
    pub date: &'static str,
    pub venue: &'static str,
    pub category: &'static str,
}

/// Tournament card with scroll reveal and pointer tilt.
#[function_component(TournamentCard)]
pub fn tournament_card(props: &TournamentCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_scroll_reveal(node.clone());
    let tilt = use_state(String::new);

    let onmousemove = {
        let node = node.clone();
        let tilt = tilt.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some((left, top, width, height)) = dom::client_rect(&node) {
                let x = e.client_x() as f64 - left;
                let y = e.client_y() as f64 - top;
                let tilt_css = Tilt::from_pointer(x, y, width, height, TILT_DIVISOR)
                    .to_css(TILT_PERSPECTIVE_PX, TILT_LIFT_PX);
                tilt.set(tilt_css);
            }
        })
    };
    let onmouseleave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set(String::new()))
    };

    let mut style = reveal_style(revealed);
    if !tilt.is_empty() {
        style.push_str(&format!(" transform: {};", *tilt));
    }

    html! {
        <div class="tournament-card" ref={node} style={style} onmousemove={onmousemove} onmouseleave={onmouseleave}>
            <span class="badge">{ props.category }</span>
            <h3>{ props.name }</h3>
            <p class="date">{ props.date }</p>
            <p class="venue">{ props.venue }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealCardProps {
    pub class: &'static str,
    pub children: Html,
}

/// Card that fades in the first time it scrolls into view.
#[function_component(RevealCard)]
pub fn reveal_card(props: &RevealCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_scroll_reveal(node.clone());

    html! {
        <div class={props.class} ref={node} style={reveal_style(revealed)}>
            { props.children.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RegistrationFormProps {
    pub form_ref: NodeRef,
    pub onsubmit: Callback<SubmitEvent>,
}

fn text_input(field: Field, input_type: &'static str) -> Html {
    html! {
        <div class="form-group">
            <label for={field.name()}>{ field.label() }</label>
            <input type={input_type} id={field.name()} name={field.name()} />
        </div>
    }
}

fn select_input(field: Field, options: &[&'static str]) -> Html {
    html! {
        <div class="form-group">
            <label for={field.name()}>{ field.label() }</label>
            <select id={field.name()} name={field.name()}>
                <option value="">{ "Изберете..." }</option>
                { options.iter().map(|&o| html! {
                    <option value={o}>{ o }</option>
                }).collect::<Html>() }
            </select>
        </div>
    }
}

/// Uncontrolled registration form; values are read at submit time.
#[function_component(RegistrationForm)]
pub fn registration_form(props: &RegistrationFormProps) -> Html {
    let tournaments: Vec<&'static str> = TOURNAMENTS.iter().map(|t| t.name).collect();

    html! {
        <form id="registrationForm" class="registration-form" ref={props.form_ref.clone()}
            onsubmit={props.onsubmit.clone()} novalidate={true}
        >
            <div class="form-row">
                { text_input(Field::FirstName, "text") }
                { text_input(Field::LastName, "text") }
            </div>
            <div class="form-row">
                { text_input(Field::Email, "email") }
                { text_input(Field::Phone, "tel") }
            </div>
            { text_input(Field::City, "text") }
            <div class="form-row">
                { select_input(Field::Tournament, &tournaments) }
                { select_input(Field::Experience, EXPERIENCE_LEVELS) }
            </div>
            <button type="submit" class="btn-primary">{ "Изпрати регистрация" }</button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfirmationDialogProps {
    pub overlay: ConfirmationOverlay,
    pub on_event: Callback<FlowEvent>,
}

/// Modal acknowledgment; closes on its button or a click on the backdrop.
#[function_component(ConfirmationDialog)]
pub fn confirmation_dialog(props: &ConfirmationDialogProps) -> Html {
    let backdrop = use_node_ref();
    let surface = &props.overlay.surface;

    let on_backdrop_click = {
        let backdrop = backdrop.clone();
        let on_event = props.on_event.clone();
        Callback::from(move |e: MouseEvent| {
            let on_backdrop = e.target().map(JsValue::from) == backdrop.get().map(JsValue::from);
            on_event.emit(FlowEvent::BackdropClicked { on_backdrop });
        })
    };
    let on_close = {
        let on_event = props.on_event.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_event.emit(FlowEvent::CloseClicked);
        })
    };

    html! {
        <div class={classes!("success-overlay", props.overlay.closing.then_some("closing"))}
            ref={backdrop}
            onclick={on_backdrop_click}
        >
            <div class="success-box">
                <div class="success-icon">{ surface.icon }</div>
                <h2>{ surface.heading }</h2>
                <p>{ surface.body }</p>
                <button id="closeSuccess" onclick={on_close}>{ surface.dismiss_label }</button>
            </div>
        </div>
    }
}
