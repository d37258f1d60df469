use yew::prelude::*;

pub const NAV_LINKS: [(&str, &str); 3] = [
    ("#work", "Work"),
    ("#services", "Services"),
    ("#contact", "Contact"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <header class="site-nav">
            <style>
                {r#"
                    .site-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        backdrop-filter: blur(8px);
                        background: rgba(0, 0, 0, 0.5);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        color: white;
                    }

                    .nav-content {
                        height: 4rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .brand {
                        font-weight: 900;
                        letter-spacing: 0.2em;
                        font-size: 1.25rem;
                    }

                    .nav-links {
                        display: none;
                        gap: 2rem;
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                    }

                    .nav-links a:hover {
                        color: rgb(103, 232, 249);
                    }

                    .burger-menu {
                        background: none;
                        border: 0;
                        color: white;
                    }

                    .mobile-menu {
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 1rem 1.5rem;
                        display: grid;
                        gap: 0.75rem;
                    }

                    @media (min-width: 768px) {
                        .nav-links {
                            display: flex;
                        }
                        .burger-menu, .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
            <div class="container nav-content">
                <a href="#" class="brand">{"NFX CREATIONS"}</a>
                <nav class="nav-links">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a key={*href} href={*href} class="cursor-hover">{ *label }</a>
                    }) }
                </nav>
                <button class="burger-menu" onclick={toggle_menu}>{"Menu"}</button>
            </div>
            if *menu_open {
                <nav class="mobile-menu">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a key={*href} href={*href} class="cursor-hover" onclick={close_menu.clone()}>{ *label }</a>
                    }) }
                </nav>
            }
        </header>
    }
}
