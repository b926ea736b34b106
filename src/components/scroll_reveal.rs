use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

const REVEAL_SELECTOR: &str = ".fade-in, .review";
const STARS_SELECTOR: &str = ".rev-stars[data-rating]";
const REVEAL_THRESHOLD: f64 = 0.2;
const MAX_STARS: u8 = 5;
const STAR_DELAY_STEP_S: f64 = 0.05;

/// data-rating boundary parse: non-numeric is a skip, excess clamps.
pub fn parse_rating(raw: &str) -> Option<u8> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .map(|rating| rating.clamp(0, i64::from(MAX_STARS)) as u8)
}

/// Five star glyphs, `rating` of them filled, each one fading in 0.05s
/// after the previous.
pub fn star_markup(rating: u8) -> String {
    (0..MAX_STARS)
        .map(|i| {
            let class = if i < rating { "" } else { "star-empty" };
            format!(
                "<span class=\"{}\" style=\"transition-delay: {:.2}s;\">★</span>",
                class,
                f64::from(i) * STAR_DELAY_STEP_S
            )
        })
        .collect()
}

fn reveal_stars(target: &Element) {
    if let Some(stars) = target.query_selector(STARS_SELECTOR).ok().flatten() {
        if stars.class_list().contains("animated") {
            return;
        }
        if let Some(rating) = stars
            .get_attribute("data-rating")
            .and_then(|raw| parse_rating(&raw))
        {
            let _ = stars.class_list().add_1("animated");
            stars.set_inner_html(&star_markup(rating));
        }
    }
}

/// Watches every reveal target and applies the one-shot `visible` class on
/// first viewport entry, synthesizing the star row the first time a rating
/// widget shows up. Each element is unobserved right after it reveals.
/// Returns the observer so the caller can disconnect on teardown.
pub fn observe_reveals(document: &Document) -> Option<IntersectionObserver> {
    let on_intersect = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1("visible");
                reveal_stars(&target);
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
            .ok()?;
    on_intersect.forget();

    if let Ok(targets) = document.query_selector_all(REVEAL_SELECTOR) {
        for i in 0..targets.length() {
            if let Some(el) = targets.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                observer.observe(&el);
            }
        }
    }
    Some(observer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_filled_two_empty_with_cascading_delays() {
        let markup = star_markup(3);
        assert_eq!(markup.matches('★').count(), 5);
        assert_eq!(markup.matches("star-empty").count(), 2);
        for delay in ["0.00s", "0.05s", "0.10s", "0.15s", "0.20s"] {
            assert!(markup.contains(delay), "missing delay {delay}");
        }
    }

    #[test]
    fn the_extremes_render_all_or_nothing() {
        assert_eq!(star_markup(0).matches("star-empty").count(), 5);
        assert_eq!(star_markup(5).matches("star-empty").count(), 0);
    }

    #[test]
    fn ratings_are_clamped_at_the_boundary() {
        assert_eq!(parse_rating("3"), Some(3));
        assert_eq!(parse_rating(" 4 "), Some(4));
        assert_eq!(parse_rating("9"), Some(5));
        assert_eq!(parse_rating("-2"), Some(0));
        assert_eq!(parse_rating("quatre"), None);
        assert_eq!(parse_rating(""), None);
    }
}
