use yew::prelude::*;

pub struct Screen {
    pub label: &'static str,
    pub image: &'static str,
}

pub const SCREENS: &[Screen] = &[
    Screen {
        label: "Accueil",
        image: "/assets/screen-accueil.png",
    },
    Screen {
        label: "Alertes",
        image: "/assets/screen-alertes.png",
    },
    Screen {
        label: "Statistiques",
        image: "/assets/screen-stats.png",
    },
    Screen {
        label: "Profil",
        image: "/assets/screen-profil.png",
    },
];

/// Modulo wrap that tolerates negative steps, so "previous" from the
/// first screen lands on the last one.
pub fn wrap_index(index: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let count = count as isize;
    (((index % count) + count) % count) as usize
}

#[derive(Properties, PartialEq)]
pub struct PhonePreviewProps {
    pub index: usize,
    pub on_show: Callback<isize>,
}

/// The phone frame, its arrows and its dot indicators. The current index
/// lives with the caller; every trigger goes back through `on_show` so
/// screens, dots and the hero cards always agree.
#[function_component(PhonePreview)]
pub fn phone_preview(props: &PhonePreviewProps) -> Html {
    let step = |offset: isize| {
        let on_show = props.on_show.clone();
        let index = props.index as isize;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_show.emit(index + offset);
        })
    };

    html! {
        <div id="phone-preview" class="phone-preview">
            <button class="phone-arrow prev" aria-label="Écran précédent" onclick={step(-1)}>
                {"‹"}
            </button>
            <div class="phone-frame">
                { for SCREENS.iter().enumerate().map(|(i, screen)| html! {
                    <div class={classes!("phone-screen", (i == props.index).then(|| "active"))}>
                        <img src={screen.image} alt={screen.label} loading="lazy" />
                    </div>
                }) }
            </div>
            <button class="phone-arrow next" aria-label="Écran suivant" onclick={step(1)}>
                {"›"}
            </button>
            <div class="phone-dots">
                { for (0..SCREENS.len()).map(|i| {
                    let on_show = props.on_show.clone();
                    let onclick = Callback::from(move |e: MouseEvent| {
                        e.stop_propagation();
                        on_show.emit(i as isize);
                    });
                    html! {
                        <button
                            class={classes!("dot", (i == props.index).then(|| "active"))}
                            aria-label={format!("Écran {}", i + 1)}
                            {onclick}
                        />
                    }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_from_the_first_screen_wraps_to_the_last() {
        assert_eq!(wrap_index(-1, 4), 3);
    }

    #[test]
    fn next_past_the_last_screen_wraps_to_the_first() {
        assert_eq!(wrap_index(4, 4), 0);
        assert_eq!(wrap_index(5, 4), 1);
    }

    #[test]
    fn interior_indices_pass_through() {
        assert_eq!(wrap_index(0, 4), 0);
        assert_eq!(wrap_index(2, 4), 2);
    }

    #[test]
    fn deep_negative_and_overflowing_steps_stay_in_range() {
        assert_eq!(wrap_index(-7, 3), 2);
        assert_eq!(wrap_index(-3, 3), 0);
        assert_eq!(wrap_index(10, 3), 1);
    }

    #[test]
    fn an_empty_screen_set_pins_the_index_to_zero() {
        assert_eq!(wrap_index(5, 0), 0);
        assert_eq!(wrap_index(-5, 0), 0);
    }
}
