use yew::prelude::*;
use log::{info, Level};

mod config;
mod components {
    pub mod countdown;
    pub mod modal;
    pub mod newsletter;
    pub mod phone_carousel;
    pub mod pricing;
    pub mod reviews;
    pub mod scroll_reveal;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
