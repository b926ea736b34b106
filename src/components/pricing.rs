use web_sys::window;
use yew::prelude::*;

const MONTHLY_MESSAGE: &str =
    "Super choix ! L'abonnement mensuel à 0,99€/mois sera disponible au lancement. 🎉";
const LIFETIME_MESSAGE: &str =
    "Excellent ! L'offre à vie à 4,99€ sera disponible dès le lancement. 🚀";

#[derive(Properties, PartialEq)]
pub struct PremiumOffersProps {
    pub on_close: Callback<()>,
}

/// The two plan buttons of the premium dialog. Each acknowledges the
/// choice and dismisses the dialog.
#[function_component(PremiumOffers)]
pub fn premium_offers(props: &PremiumOffersProps) -> Html {
    let acknowledge = |message: &'static str| {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(window) = window() {
                let _ = window.alert_with_message(message);
            }
            on_close.emit(());
        })
    };

    html! {
        <div class="premium-offers">
            <button id="premium-month" class="premium-offer" onclick={acknowledge(MONTHLY_MESSAGE)}>
                <span class="offer-name">{"Mensuel"}</span>
                <span class="offer-price">{"0,99 €/mois"}</span>
            </button>
            <button id="premium-life" class="premium-offer" onclick={acknowledge(LIFETIME_MESSAGE)}>
                <span class="offer-name">{"À vie"}</span>
                <span class="offer-price">{"4,99 €"}</span>
            </button>
        </div>
    }
}
