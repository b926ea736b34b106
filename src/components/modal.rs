use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};
use yew::prelude::*;

/// Tab stops eligible for the focus trap.
pub const FOCUSABLE_SELECTOR: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

/// Where a Tab press should land when the trap has to wrap.
///
/// `current` is the position of the focused element among the dialog's tab
/// stops, `None` when focus sits outside the list. Returns the index to
/// force-focus, or `None` to let the browser move focus on its own.
pub fn trap_wrap_target(shift: bool, current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match (shift, current) {
        (false, Some(i)) if i == len - 1 => Some(0),
        (true, Some(0)) => Some(len - 1),
        _ => None,
    }
}

fn focusable_elements(dialog: &HtmlElement) -> Vec<HtmlElement> {
    let mut found = Vec::new();
    if let Ok(list) = dialog.query_selector_all(FOCUSABLE_SELECTOR) {
        for i in 0..list.length() {
            if let Some(node) = list.get(i) {
                if let Ok(el) = node.dyn_into::<HtmlElement>() {
                    found.push(el);
                }
            }
        }
    }
    found
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub id: AttrValue,
    pub active: bool,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Overlay dialog shell. While active it moves focus to its first tab stop
/// and keeps Tab/Shift+Tab cycling among its own focusable descendants.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |active: &bool| {
                let mut cleanup: Option<Box<dyn FnOnce()>> = None;

                if *active {
                    if let Some(dialog) = node.cast::<HtmlElement>() {
                        if let Some(first) = focusable_elements(&dialog).first() {
                            let _ = first.focus();
                        }

                        let trap_dialog = dialog.clone();
                        let trap = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                            if e.key() != "Tab" {
                                return;
                            }
                            let stops = focusable_elements(&trap_dialog);
                            let current = web_sys::window()
                                .and_then(|w| w.document())
                                .and_then(|d| d.active_element())
                                .and_then(|focused| {
                                    stops
                                        .iter()
                                        .position(|s| s.is_same_node(Some(focused.as_ref())))
                                });
                            if let Some(target) =
                                trap_wrap_target(e.shift_key(), current, stops.len())
                            {
                                e.prevent_default();
                                let _ = stops[target].focus();
                            }
                        })
                            as Box<dyn FnMut(KeyboardEvent)>);

                        dialog
                            .add_event_listener_with_callback(
                                "keydown",
                                trap.as_ref().unchecked_ref(),
                            )
                            .unwrap();

                        cleanup = Some(Box::new(move || {
                            let _ = dialog.remove_event_listener_with_callback(
                                "keydown",
                                trap.as_ref().unchecked_ref(),
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
            props.active,
        );
    }

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            id={props.id.clone()}
            ref={node}
            class={classes!("modal", props.active.then(|| "active"))}
            role="dialog"
            aria-modal="true"
        >
            <button class="close-modal" aria-label="Fermer" onclick={on_close}>{"✕"}</button>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_on_the_last_stop_wraps_to_the_first() {
        assert_eq!(trap_wrap_target(false, Some(3), 4), Some(0));
    }

    #[test]
    fn shift_tab_on_the_first_stop_wraps_to_the_last() {
        assert_eq!(trap_wrap_target(true, Some(0), 4), Some(3));
    }

    #[test]
    fn interior_stops_are_left_to_the_browser() {
        assert_eq!(trap_wrap_target(false, Some(1), 4), None);
        assert_eq!(trap_wrap_target(true, Some(2), 4), None);
    }

    #[test]
    fn focus_outside_the_list_is_left_alone() {
        assert_eq!(trap_wrap_target(false, None, 4), None);
        assert_eq!(trap_wrap_target(true, None, 4), None);
    }

    #[test]
    fn an_empty_dialog_never_redirects_focus() {
        assert_eq!(trap_wrap_target(false, Some(0), 0), None);
        assert_eq!(trap_wrap_target(true, None, 0), None);
    }

    #[test]
    fn a_single_stop_cycles_onto_itself() {
        assert_eq!(trap_wrap_target(false, Some(0), 1), Some(0));
        assert_eq!(trap_wrap_target(true, Some(0), 1), Some(0));
    }
}
