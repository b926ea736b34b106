use gloo_console::error;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;

const SUBMIT_LABEL: &str = "S'inscrire";
const SUBMITTING_LABEL: &str = "Inscription en cours...";
const CONSENT_ERROR: &str = "❌ Veuillez accepter de recevoir des emails.";
const GENERIC_ERROR: &str = "❌ Une erreur est survenue. Réessayez.";
const SUCCESS_MESSAGE: &str = "✅ Merci pour votre inscription !";
const CLOSE_DELAY_MS: u32 = 2_000;

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct SubscribeRequest {
    pub email: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Why a submission never left the page.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitRejection {
    ConsentRequired,
}

/// Gate run before any network traffic: a request body only exists once
/// the consent box is ticked.
pub fn prepare_subscription(
    consent: bool,
    email: &str,
    first_name: &str,
) -> Result<SubscribeRequest, SubmitRejection> {
    if !consent {
        return Err(SubmitRejection::ConsentRequired);
    }
    Ok(SubscribeRequest {
        email: email.trim().to_string(),
        first_name: first_name.trim().to_string(),
    })
}

async fn send_subscription(request: &SubscribeRequest) -> Result<(), String> {
    let response = Request::post(&config::get_subscribe_url())
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.ok() {
        return Ok(());
    }
    match response.json::<ErrorResponse>().await {
        Ok(body) => Err(body.error),
        Err(_) => Err(format!("Erreur serveur ({})", response.status())),
    }
}

#[derive(Clone, PartialEq)]
enum FormStatus {
    Hidden,
    Error(&'static str),
    Success(&'static str),
}

#[derive(Properties, PartialEq)]
pub struct NewsletterFormProps {
    pub on_close: Callback<()>,
}

#[function_component(NewsletterForm)]
pub fn newsletter_form(props: &NewsletterFormProps) -> Html {
    let email = use_state(String::new);
    let first_name = use_state(String::new);
    let consent = use_state(|| false);
    let status = use_state(|| FormStatus::Hidden);
    let submitting = use_state(|| false);

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_first_name_change = {
        let first_name = first_name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            first_name.set(input.value());
        })
    };
    let on_consent_change = {
        let consent = consent.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            consent.set(input.checked());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let first_name = first_name.clone();
        let consent = consent.clone();
        let status = status.clone();
        let submitting = submitting.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = match prepare_subscription(*consent, &email, &first_name) {
                Ok(request) => request,
                Err(SubmitRejection::ConsentRequired) => {
                    status.set(FormStatus::Error(CONSENT_ERROR));
                    return;
                }
            };

            submitting.set(true);
            status.set(FormStatus::Hidden);

            let email = email.clone();
            let first_name = first_name.clone();
            let consent = consent.clone();
            let status = status.clone();
            let submitting = submitting.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                match send_subscription(&request).await {
                    Ok(()) => {
                        status.set(FormStatus::Success(SUCCESS_MESSAGE));
                        email.set(String::new());
                        first_name.set(String::new());
                        consent.set(false);

                        let status = status.clone();
                        let on_close = on_close.clone();
                        Timeout::new(CLOSE_DELAY_MS, move || {
                            on_close.emit(());
                            status.set(FormStatus::Hidden);
                        })
                        .forget();
                    }
                    Err(reason) => {
                        error!("Subscription failed:", reason);
                        status.set(FormStatus::Error(GENERIC_ERROR));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <form id="newsletter-form" onsubmit={onsubmit}>
            <input
                type="text"
                name="prenom"
                placeholder="Votre prénom"
                value={(*first_name).clone()}
                onchange={on_first_name_change}
            />
            <input
                type="email"
                name="email"
                placeholder="Votre email"
                required=true
                value={(*email).clone()}
                onchange={on_email_change}
            />
            <label class="consent-label">
                <input
                    id="newsletter-consent"
                    type="checkbox"
                    checked={*consent}
                    onchange={on_consent_change}
                />
                {" J'accepte de recevoir des emails."}
            </label>
            {
                match &*status {
                    FormStatus::Hidden => html! {},
                    FormStatus::Error(message) => html! {
                        <div id="newsletter-status" class="status error">{ *message }</div>
                    },
                    FormStatus::Success(message) => html! {
                        <div id="newsletter-status" class="status success">{ *message }</div>
                    },
                }
            }
            <button id="newsletter-submit" type="submit" disabled={*submitting}>
                { if *submitting { SUBMITTING_LABEL } else { SUBMIT_LABEL } }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_consent_means_no_request_body() {
        assert_eq!(
            prepare_subscription(false, "jean@example.fr", "Jean"),
            Err(SubmitRejection::ConsentRequired)
        );
    }

    #[test]
    fn consent_produces_a_trimmed_body() {
        let request = prepare_subscription(true, " jean@example.fr ", " Jean ").unwrap();
        assert_eq!(request.email, "jean@example.fr");
        assert_eq!(request.first_name, "Jean");
    }

    #[test]
    fn wire_body_uses_the_subscription_field_names() {
        let request = prepare_subscription(true, "jean@example.fr", "Jean").unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["email"], "jean@example.fr");
        assert_eq!(body["firstName"], "Jean");
        assert_eq!(body.as_object().unwrap().len(), 2);
    }
}
