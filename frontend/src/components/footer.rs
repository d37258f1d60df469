use chrono::Datelike;
use yew::prelude::*;

use crate::components::navbar::NAV_LINKS;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-content">
                <div>{ format!("© {} NFX Creations", year) }</div>
                <div class="footer-links">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a key={*href} href={*href} class="cursor-hover">{ *label }</a>
                    }) }
                </div>
            </div>
        </footer>
    }
}
