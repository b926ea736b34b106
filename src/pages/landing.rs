use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::prelude::*;

use crate::components::countdown::Countdown;
use crate::components::modal::Modal;
use crate::components::newsletter::NewsletterForm;
use crate::components::phone_carousel::{wrap_index, PhonePreview, SCREENS};
use crate::components::pricing::PremiumOffers;
use crate::components::reviews::ReviewsCarousel;
use crate::components::scroll_reveal;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ActiveModal {
    Newsletter,
    Premium,
}

struct FeatureCard {
    title: &'static str,
    text: &'static str,
    slide_to: usize,
}

const FEATURE_CARDS: &[FeatureCard] = &[
    FeatureCard {
        title: "Tout au même endroit",
        text: "Votre journée résumée sur un seul écran d'accueil.",
        slide_to: 0,
    },
    FeatureCard {
        title: "Alertes utiles",
        text: "Seules les notifications qui comptent vous parviennent.",
        slide_to: 1,
    },
    FeatureCard {
        title: "Vos progrès en clair",
        text: "Des statistiques lisibles, semaine après semaine.",
        slide_to: 2,
    },
    FeatureCard {
        title: "À votre image",
        text: "Un profil et des réglages qui s'adaptent à vous.",
        slide_to: 3,
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let wrapper_ref = use_node_ref();
    let active_modal = use_state(|| None::<ActiveModal>);
    let last_focused = use_mut_ref(|| None::<HtmlElement>);
    let screen_index = use_state(|| 0usize);

    // Interactive gradient background, only on devices with a mouse.
    {
        let wrapper_ref = wrapper_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut cleanup: Option<Box<dyn FnOnce()>> = None;

                let pointer_fine = window()
                    .and_then(|w| w.match_media("(pointer: fine)").ok().flatten())
                    .map(|query| query.matches())
                    .unwrap_or(false);
                if pointer_fine {
                    if let (Some(window), Some(wrapper)) =
                        (window(), wrapper_ref.cast::<HtmlElement>())
                    {
                        if let Some(document) = window.document() {
                            let on_mouse_move = Closure::wrap(Box::new(move |e: MouseEvent| {
                                let width =
                                    window.inner_width().ok().and_then(|v| v.as_f64());
                                let height =
                                    window.inner_height().ok().and_then(|v| v.as_f64());
                                if let (Some(width), Some(height)) = (width, height) {
                                    if width <= 0.0 || height <= 0.0 {
                                        return;
                                    }
                                    let x = f64::from(e.client_x()) / width * 100.0;
                                    let y = f64::from(e.client_y()) / height * 100.0;
                                    let style = wrapper.style();
                                    let _ = style.set_property("--mouse-x", &x.to_string());
                                    let _ = style.set_property("--mouse-y", &y.to_string());
                                }
                            })
                                as Box<dyn FnMut(MouseEvent)>);

                            document
                                .add_event_listener_with_callback(
                                    "mousemove",
                                    on_mouse_move.as_ref().unchecked_ref(),
                                )
                                .unwrap();

                            cleanup = Some(Box::new(move || {
                                let _ = document.remove_event_listener_with_callback(
                                    "mousemove",
                                    on_mouse_move.as_ref().unchecked_ref(),
                                );
                            }));
                        }
                    }
                }

                move || {
                    if let Some(detach) = cleanup {
                        detach();
                    }
                }
            },
            (),
        );
    }

    // One-shot reveal animations, wired after the first render.
    {
        use_effect_with_deps(
            move |_| {
                let observer = window()
                    .and_then(|w| w.document())
                    .and_then(|document| scroll_reveal::observe_reveals(&document));
                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    let open_modal = {
        let active_modal = active_modal.clone();
        let last_focused = last_focused.clone();
        Callback::from(move |modal: ActiveModal| {
            if let Some(document) = window().and_then(|w| w.document()) {
                // A replace keeps the element recorded by the first open.
                if active_modal.is_none() {
                    *last_focused.borrow_mut() = document
                        .active_element()
                        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
                }
                if let Some(body) = document.body() {
                    let _ = body.style().set_property("overflow", "hidden");
                }
            }
            active_modal.set(Some(modal));
        })
    };

    let close_modal = {
        let active_modal = active_modal.clone();
        let last_focused = last_focused.clone();
        Callback::from(move |_: ()| {
            if let Some(document) = window().and_then(|w| w.document()) {
                if let Some(body) = document.body() {
                    let _ = body.style().remove_property("overflow");
                }
            }
            if let Some(el) = last_focused.borrow_mut().take() {
                if el.is_connected() {
                    let _ = el.focus();
                }
            }
            active_modal.set(None);
        })
    };

    // Escape closes whichever dialog is open; no listener otherwise.
    {
        let close_modal = close_modal.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let mut cleanup: Option<Box<dyn FnOnce()>> = None;

                if *open {
                    if let Some(document) = window().and_then(|w| w.document()) {
                        let on_keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                            if e.key() == "Escape" {
                                close_modal.emit(());
                            }
                        })
                            as Box<dyn FnMut(KeyboardEvent)>);

                        document
                            .add_event_listener_with_callback(
                                "keydown",
                                on_keydown.as_ref().unchecked_ref(),
                            )
                            .unwrap();

                        cleanup = Some(Box::new(move || {
                            let _ = document.remove_event_listener_with_callback(
                                "keydown",
                                on_keydown.as_ref().unchecked_ref(),
                            );
                        }));
                    }
                }

                move || {
                    if let Some(detach) = cleanup {
                        detach();
                    }
                }
            },
            active_modal.is_some(),
        );
    }

    let show_screen = {
        let screen_index = screen_index.clone();
        Callback::from(move |step: isize| {
            screen_index.set(wrap_index(step, SCREENS.len()));
        })
    };

    let open_newsletter = {
        let open_modal = open_modal.clone();
        Callback::from(move |_: MouseEvent| open_modal.emit(ActiveModal::Newsletter))
    };
    let open_premium = {
        let open_modal = open_modal.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open_modal.emit(ActiveModal::Premium);
        })
    };
    let close_on_click = {
        let close_modal = close_modal.clone();
        Callback::from(move |_: MouseEvent| close_modal.emit(()))
    };

    html! {
        <div class="page-wrapper" ref={wrapper_ref}>
            <header class="hero fade-in">
                <div class="hero-layout">
                    <div class="hero-copy">
                        <h1>{"Votre prochaine application arrive"}</h1>
                        <p class="hero-subtitle">
                            {"L'essentiel de votre journée, sans le superflu. Inscrivez-vous pour être prévenu du lancement."}
                        </p>
                        <Countdown />
                        <button id="newsletter-btn" class="hero-cta" onclick={open_newsletter}>
                            {"Rejoindre la liste d'attente"}
                        </button>
                    </div>
                    <div class="hero-cards">
                        { for FEATURE_CARDS.iter().map(|card| {
                            let show_screen = show_screen.clone();
                            let target = card.slide_to;
                            let onclick =
                                Callback::from(move |_: MouseEvent| show_screen.emit(target as isize));
                            html! {
                                <div
                                    class={classes!(
                                        "card",
                                        (card.slide_to == *screen_index).then(|| "active-card")
                                    )}
                                    data-slide-to={card.slide_to.to_string()}
                                    {onclick}
                                >
                                    <h3>{ card.title }</h3>
                                    <p>{ card.text }</p>
                                </div>
                            }
                        }) }
                    </div>
                    <PhonePreview index={*screen_index} on_show={show_screen.clone()} />
                </div>
            </header>

            <section id="premium" class="premium fade-in">
                <h2>{"Passez Premium"}</h2>
                <p>{"Débloquez toutes les fonctionnalités dès le premier jour."}</p>
                <a href="#" class="cta" onclick={open_premium}>{"Découvrir les offres"}</a>
            </section>

            <section class="reviews-section fade-in">
                <h2>{"Ils en parlent déjà"}</h2>
                <ReviewsCarousel />
            </section>

            <div
                id="modal-overlay"
                class={classes!("modal-overlay", active_modal.is_some().then(|| "active"))}
                onclick={close_on_click}
            ></div>
            <Modal
                id="modal-newsletter"
                active={*active_modal == Some(ActiveModal::Newsletter)}
                on_close={close_modal.clone()}
            >
                <h2>{"Restez informé"}</h2>
                <p>{"Recevez la date de lancement et les offres de la liste d'attente."}</p>
                <NewsletterForm on_close={close_modal.clone()} />
            </Modal>
            <Modal
                id="modal-premium"
                active={*active_modal == Some(ActiveModal::Premium)}
                on_close={close_modal.clone()}
            >
                <h2>{"Choisissez votre offre"}</h2>
                <PremiumOffers on_close={close_modal} />
            </Modal>
        </div>
    }
}
