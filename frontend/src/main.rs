use yew::prelude::*;
use log::{info, Level};

use crate::api::BackendHandle;
use crate::components::{
    contact_form::Contact,
    cursor::CursorFx,
    footer::Footer,
    hero::Hero,
    navbar::Navbar,
    services::Services,
    work_grid::WorkGrid,
};

mod api;
mod config;
mod contact;
mod error;
mod gallery;
mod models;
mod effects {
    pub mod cursor;
    pub mod dom;
    pub mod events;
    pub mod frame;
    pub mod parallax;
    pub mod pointer;
    #[cfg(test)]
    pub mod testing;
}
mod components {
    pub mod contact_form;
    pub mod cursor;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod services;
    pub mod work_grid;
}
#[cfg(test)]
mod testing;


#[function_component]
fn App() -> Html {
    let backend = use_state(BackendHandle::from_config);

    html! {
        <ContextProvider<BackendHandle> context={(*backend).clone()}>
            <div class="page">
                <CursorFx />
                <Navbar />
                <Hero />
                <WorkGrid />
                <Services />
                <Contact />
                <Footer />
            </div>
        </ContextProvider<BackendHandle>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application against {}", config::get_backend_url());
    yew::Renderer::<App>::new().render();
}
