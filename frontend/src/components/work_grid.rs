use std::rc::Rc;

use log::error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::api::BackendHandle;
use crate::effects::dom::set_style;
use crate::effects::events::{EventKind, EventSource, PageEvent, Subscription, WindowEvents};
use crate::effects::parallax::CardReveal;
use crate::error::Result;
use crate::gallery::{
    load_projects, CategoryFilter, Gallery, GalleryContent, CATEGORIES, EMPTY_TEXT, LOADING_TEXT,
};
use crate::models::Project;

fn reveal_cards(grid: &NodeRef) {
    let Some(grid) = grid.cast::<Element>() else {
        return;
    };
    let Some(viewport_height) = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
    else {
        return;
    };
    let Ok(cards) = grid.query_selector_all("[data-card]") else {
        return;
    };
    for index in 0..cards.length() {
        if let Some(card) = cards.item(index).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            let reveal = CardReveal::new(card.get_bounding_client_rect().top(), viewport_height);
            set_style(&card, "transform", &reveal.transform());
            set_style(&card, "opacity", &reveal.opacity().to_string());
        }
    }
}

fn mount_reveal(grid: NodeRef) -> Result<Subscription> {
    let events: Rc<dyn EventSource> = Rc::new(WindowEvents::new()?);
    reveal_cards(&grid);
    Subscription::new(&events, EventKind::Scroll, Rc::new(move |_: PageEvent| reveal_cards(&grid)))
}

fn project_card(project: &Project) -> Html {
    html! {
        <a key={project.id.clone()} data-card="" href={project.link().to_string()} target="_blank" rel="noreferrer" class="card cursor-hover">
            <img src={project.thumbnail_url.clone()} alt={project.title.clone()} />
            <div class="card-shade" />
            <div class="card-caption">
                <div>
                    <div class="card-category">{ &project.category }</div>
                    <div class="card-title">{ &project.title }</div>
                </div>
                <div class="card-tags">
                    { for project.badge_tags().iter().map(|tag| html! { <span key={tag.clone()}>{ tag }</span> }) }
                </div>
            </div>
        </a>
    }
}

#[function_component(WorkGrid)]
pub fn work_grid() -> Html {
    let backend = use_context::<BackendHandle>().unwrap_or_else(BackendHandle::from_config);
    let filter = use_state(CategoryFilter::default);
    let gallery = use_state(|| Gallery::Loading);
    let generation = use_mut_ref(|| 0u64);
    let grid = use_node_ref();

    {
        let gallery = gallery.clone();
        let generation = generation.clone();
        use_effect_with_deps(
            move |filter: &CategoryFilter| {
                let filter = filter.clone();
                let ticket = {
                    let mut current = generation.borrow_mut();
                    *current += 1;
                    *current
                };
                spawn_local(async move {
                    let projects = load_projects(backend.0.as_ref(), &filter).await;
                    // A newer filter already has its own request in flight.
                    if *generation.borrow() == ticket {
                        gallery.set(Gallery::Ready(projects));
                    }
                });
                || ()
            },
            (*filter).clone(),
        );
    }

    {
        let grid = grid.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = mount_reveal(grid)
                    .map_err(|e| error!("Card reveal disabled: {}", e))
                    .ok();
                move || drop(subscription)
            },
            (*gallery).clone(),
        );
    }

    let chips = CATEGORIES.iter().map(|chip| {
        let onclick = {
            let filter = filter.clone();
            let chip = *chip;
            Callback::from(move |_: MouseEvent| filter.set(CategoryFilter::from_chip(chip)))
        };
        html! {
            <button key={*chip} class={classes!("chip", "cursor-hover", filter.is_active(chip).then(|| "active"))} {onclick}>
                { *chip }
            </button>
        }
    });

    let body = match gallery.content() {
        GalleryContent::Loading => html! { <p class="muted gallery-status">{ LOADING_TEXT }</p> },
        GalleryContent::Empty => html! {
            <div ref={grid} class="grid">
                <div class="muted placeholder">{ EMPTY_TEXT }</div>
            </div>
        },
        GalleryContent::Cards(projects) => html! {
            <div ref={grid} class="grid">
                { for projects.iter().map(project_card) }
            </div>
        },
    };

    html! {
        <section id="work" class="work-section">
            <style>
                {r#"
                    .work-section {
                        position: relative;
                        background: #0b0e13;
                        color: white;
                        padding: 5rem 0;
                    }

                    .work-header {
                        display: flex;
                        align-items: flex-end;
                        justify-content: space-between;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }

                    .chips {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                    }

                    .chip {
                        padding: 0.375rem 0.75rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: transparent;
                        color: rgba(255, 255, 255, 0.8);
                    }

                    .chip.active {
                        border-color: rgb(103, 232, 249);
                        background: rgb(103, 232, 249);
                        color: black;
                    }

                    .gallery-status {
                        margin-top: 3rem;
                    }

                    .grid {
                        margin-top: 2.5rem;
                        display: grid;
                        gap: 1.5rem;
                        grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
                    }

                    .placeholder {
                        grid-column: 1 / -1;
                    }

                    .card {
                        position: relative;
                        display: block;
                        overflow: hidden;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.05);
                        will-change: transform;
                        transition: transform 300ms;
                    }

                    .card img {
                        height: 13rem;
                        width: 100%;
                        object-fit: cover;
                        transition: transform 300ms;
                    }

                    .card:hover img {
                        transform: scale(1.05);
                    }

                    .card-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.7), rgba(0, 0, 0, 0.1), transparent);
                        opacity: 0;
                        transition: opacity 300ms;
                    }

                    .card:hover .card-shade {
                        opacity: 1;
                    }

                    .card-caption {
                        position: absolute;
                        bottom: 0.75rem;
                        left: 0.75rem;
                        right: 0.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .card-category {
                        font-size: 0.875rem;
                        color: rgba(103, 232, 249, 0.9);
                    }

                    .card-title {
                        font-weight: 600;
                    }

                    .card-tags {
                        display: flex;
                        gap: 0.25rem;
                        font-size: 10px;
                        color: rgba(255, 255, 255, 0.7);
                    }

                    .card-tags span {
                        padding: 0.125rem 0.5rem;
                        border-radius: 9999px;
                        background: rgba(0, 0, 0, 0.5);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                "#}
            </style>
            <div class="container">
                <div class="work-header">
                    <h2>{"Selected Work"}</h2>
                    <div class="chips">{ for chips }</div>
                </div>
                { body }
            </div>
        </section>
    }
}
