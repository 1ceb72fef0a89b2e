//! Entry point for the tournament site using Yew.
//! Renders the page and wires the registration flow and page effects.

use log::info;
use table_tennis_site::flow::FlowEvent;
use yew::prelude::*;

mod components;
mod config;
mod dom;
mod hooks;

use components::{
    ConfirmationDialog, Hero, NavBar, RegistrationForm, RevealCard, TournamentCard,
};
use config::*;
use hooks::{use_active_section, use_registration_flow};

const LOG_LEVEL: log::Level = if cfg!(debug_assertions) {
    log::Level::Debug
} else {
    log::Level::Info
};

/// Page component: navigation, content sections and the registration flow.
#[function_component]
pub fn App() -> Html {
    let form_ref = use_node_ref();
    let registration = use_registration_flow(form_ref.clone());
    let active = use_active_section();

    let onsubmit = {
        let dispatch = registration.dispatch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatch.emit(FlowEvent::Submit);
        })
    };

    html! {
        <>
            <NavBar {active} />
            <main>
                <Hero />

                <section id="tournaments" class="tournaments">
                    <h2 class="section-title">{ "Предстоящи турнири" }</h2>
                    <div class="tournament-grid">
                        { TOURNAMENTS.iter().map(|t| html! {
                            <TournamentCard name={t.name} date={t.date} venue={t.venue} category={t.category} />
                        }).collect::<Html>() }
                    </div>
                </section>

                <section id="results" class="results">
                    <h2 class="section-title">{ "Последни резултати" }</h2>
                    <div class="results-grid">
                        { RESULTS.iter().map(|&(event, winner, score)| html! {
                            <RevealCard class="result-card">
                                <h3>{ event }</h3>
                                <p class="winner">{ winner }</p>
                                <p class="score">{ score }</p>
                            </RevealCard>
                        }).collect::<Html>() }
                    </div>
                </section>

                <section id="info" class="info">
                    <h2 class="section-title">{ "Информация" }</h2>
                    <div class="info-grid">
                        { INFO_CARDS.iter().map(|&(title, text)| html! {
                            <RevealCard class="info-card">
                                <h3>{ title }</h3>
                                <p>{ text }</p>
                            </RevealCard>
                        }).collect::<Html>() }
                    </div>
                </section>

                <section id="registration" class="registration">
                    <h2 class="section-title">{ "Регистрация" }</h2>
                    <RegistrationForm form_ref={form_ref} {onsubmit} />
                </section>
            </main>

            if let Some(overlay) = registration.overlay {
                <ConfirmationDialog {overlay} on_event={registration.dispatch.clone()} />
            }
        </>
    }
}

/// Entry point: installs logging and renders the page.
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));
    yew::Renderer::<App>::new().render();
    info!("{}", LOADED_MESSAGE);
}
