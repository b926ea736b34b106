use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

const SCROLL_STEP: f64 = 340.0;
const AUTO_ADVANCE_MS: u32 = 5_000;
const DRAG_SENSITIVITY: f64 = 1.5;

struct Review {
    author: &'static str,
    text: &'static str,
    rating: u8,
}

const REVIEWS: &[Review] = &[
    Review {
        author: "Camille",
        text: "Je l'attendais depuis des mois, la liste d'attente valait le coup.",
        rating: 5,
    },
    Review {
        author: "Théo",
        text: "L'aperçu des écrans donne vraiment envie. Vivement le lancement !",
        rating: 5,
    },
    Review {
        author: "Inès",
        text: "Simple, clair, sans fioritures. Exactement ce qu'il me fallait.",
        rating: 4,
    },
    Review {
        author: "Marc",
        text: "Testé en avant-première, quelques réglages à peaufiner mais très prometteur.",
        rating: 4,
    },
    Review {
        author: "Sofia",
        text: "L'offre à vie est imbattable, je me suis inscrite direct.",
        rating: 5,
    },
];

/// The rendered track holds the list twice so the forward auto-scroll
/// always has content ahead of it. Not a true ring: a long enough scroll
/// still reaches the duplicated end.
fn doubled_reviews() -> impl Iterator<Item = &'static Review> {
    REVIEWS.iter().chain(REVIEWS.iter())
}

/// Scroll position a drag maps to: horizontal pointer delta, amplified.
fn drag_scroll_position(origin: f64, start_x: f64, x: f64) -> f64 {
    origin - (x - start_x) * DRAG_SENSITIVITY
}

#[derive(Default)]
struct DragState {
    is_down: bool,
    start_x: f64,
    scroll_left: f64,
}

fn scroll_track(track: &HtmlElement, offset: f64) {
    let options = ScrollToOptions::new();
    options.set_left(offset);
    options.set_behavior(ScrollBehavior::Smooth);
    track.scroll_by_with_scroll_to_options(&options);
}

fn restart_auto_advance(track_ref: &NodeRef, handle: &Rc<RefCell<Option<Interval>>>) {
    let track_ref = track_ref.clone();
    *handle.borrow_mut() = Some(Interval::new(AUTO_ADVANCE_MS, move || {
        if let Some(track) = track_ref.cast::<HtmlElement>() {
            scroll_track(&track, SCROLL_STEP);
        }
    }));
}

fn render_review(review: &Review) -> Html {
    html! {
        <article class="review">
            <div class="rev-stars" data-rating={review.rating.to_string()}></div>
            <p class="rev-text">{ review.text }</p>
            <span class="rev-author">{ review.author }</span>
        </article>
    }
}

#[function_component(ReviewsCarousel)]
pub fn reviews_carousel() -> Html {
    let track_ref = use_node_ref();
    let auto_handle = use_mut_ref(|| None::<Interval>);
    let drag = use_mut_ref(DragState::default);

    // Auto-advance runs from mount and dies with the component.
    {
        let track_ref = track_ref.clone();
        let auto_handle = auto_handle.clone();
        use_effect_with_deps(
            move |_| {
                restart_auto_advance(&track_ref, &auto_handle);
                move || {
                    auto_handle.borrow_mut().take();
                }
            },
            (),
        );
    }

    let pause_auto = {
        let auto_handle = auto_handle.clone();
        Callback::from(move |_: MouseEvent| {
            auto_handle.borrow_mut().take();
        })
    };
    let resume_auto = {
        let track_ref = track_ref.clone();
        let auto_handle = auto_handle.clone();
        Callback::from(move |_: MouseEvent| {
            restart_auto_advance(&track_ref, &auto_handle);
        })
    };

    let page = |direction: f64| {
        let track_ref = track_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(track) = track_ref.cast::<HtmlElement>() {
                scroll_track(&track, direction * SCROLL_STEP);
            }
        })
    };

    let on_mouse_down = {
        let drag = drag.clone();
        let track_ref = track_ref.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(track) = track_ref.cast::<HtmlElement>() {
                let mut state = drag.borrow_mut();
                state.is_down = true;
                state.start_x = f64::from(e.page_x()) - f64::from(track.offset_left());
                state.scroll_left = f64::from(track.scroll_left());
                let _ = track.style().set_property("cursor", "grabbing");
            }
        })
    };
    let on_mouse_move = {
        let drag = drag.clone();
        let track_ref = track_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let state = drag.borrow();
            if !state.is_down {
                return;
            }
            if let Some(track) = track_ref.cast::<HtmlElement>() {
                e.prevent_default();
                let x = f64::from(e.page_x()) - f64::from(track.offset_left());
                track.set_scroll_left(
                    drag_scroll_position(state.scroll_left, state.start_x, x) as i32
                );
            }
        })
    };
    let end_drag = {
        let drag = drag.clone();
        let track_ref = track_ref.clone();
        move || {
            drag.borrow_mut().is_down = false;
            if let Some(track) = track_ref.cast::<HtmlElement>() {
                let _ = track.style().set_property("cursor", "grab");
            }
        }
    };
    let on_mouse_up = {
        let end_drag = end_drag.clone();
        Callback::from(move |_: MouseEvent| end_drag())
    };
    // Leaving the track both drops an active drag and restarts the idle
    // auto-advance countdown.
    let on_track_leave = {
        let track_ref = track_ref.clone();
        let auto_handle = auto_handle.clone();
        Callback::from(move |_: MouseEvent| {
            end_drag();
            restart_auto_advance(&track_ref, &auto_handle);
        })
    };

    html! {
        <div class="reviews-carousel">
            <button
                class="rev-arrow left"
                aria-label="Avis précédents"
                onclick={page(-1.0)}
                onmouseenter={pause_auto.clone()}
                onmouseleave={resume_auto.clone()}
            >{"‹"}</button>
            <div
                id="reviews-track"
                class="reviews-track"
                ref={track_ref.clone()}
                onmousedown={on_mouse_down}
                onmousemove={on_mouse_move}
                onmouseup={on_mouse_up}
                onmouseenter={pause_auto.clone()}
                onmouseleave={on_track_leave}
            >
                { for doubled_reviews().map(render_review) }
            </div>
            <button
                class="rev-arrow right"
                aria-label="Avis suivants"
                onclick={page(1.0)}
                onmouseenter={pause_auto}
                onmouseleave={resume_auto}
            >{"›"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_track_renders_every_review_twice() {
        assert_eq!(doubled_reviews().count(), 2 * REVIEWS.len());
        let authors: Vec<_> = doubled_reviews().map(|r| r.author).collect();
        assert_eq!(authors[0], authors[REVIEWS.len()]);
    }

    #[test]
    fn dragging_amplifies_the_pointer_delta() {
        // 100px of pointer travel moves the track 150px.
        assert_eq!(drag_scroll_position(500.0, 40.0, 140.0), 350.0);
        // Dragging left scrolls forward.
        assert_eq!(drag_scroll_position(500.0, 140.0, 40.0), 650.0);
        // No travel, no movement.
        assert_eq!(drag_scroll_position(500.0, 40.0, 40.0), 500.0);
    }
}
