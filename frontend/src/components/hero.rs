use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{error, warn};
use yew::prelude::*;

use crate::effects::dom::set_node_style;
use crate::effects::events::{EventKind, EventSource, PageEvent, Subscription, WindowEvents};
use crate::effects::parallax::{scroll_translate, HeroTilt};
use crate::error::Result;

const SCENE_URL: &str = "https://my.spline.design/untitled-9a8a3f26a0aa1a4fe8b6a386830a1b31/";
const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1558980664-10ea8d8bde53?q=80&w=1400&auto=format&fit=crop";
const SCENE_TIMEOUT_MS: u32 = 6_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneStatus {
    #[default]
    Loading,
    Loaded,
    Failed,
}

pub enum SceneEvent {
    Loaded,
    TimedOut,
}

impl SceneStatus {
    pub fn next(self, event: SceneEvent) -> Self {
        match (self, event) {
            (SceneStatus::Failed, _) => SceneStatus::Failed,
            (_, SceneEvent::Loaded) => SceneStatus::Loaded,
            (SceneStatus::Loading, SceneEvent::TimedOut) => SceneStatus::Failed,
            (status, SceneEvent::TimedOut) => status,
        }
    }

    pub fn shows_scene(self) -> bool {
        self != SceneStatus::Failed
    }

    pub fn shows_spinner(self) -> bool {
        self == SceneStatus::Loading
    }
}

impl Reducible for SceneStatus {
    type Action = SceneEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.next(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn mount_parallax(layer: NodeRef, left_glow: NodeRef, right_glow: NodeRef) -> Result<Vec<Subscription>> {
    let events: Rc<dyn EventSource> = Rc::new(WindowEvents::new()?);

    let tilt = Subscription::new(&events, EventKind::PointerMove, {
        let layer = layer.clone();
        Rc::new(move |event: PageEvent| {
            if let PageEvent::PointerMove { position, viewport } = event {
                let tilt = HeroTilt::from_pointer(position, viewport);
                set_node_style(&layer, "transform", &tilt.layer);
                set_node_style(&left_glow, "transform", &tilt.left_glow);
                set_node_style(&right_glow, "transform", &tilt.right_glow);
            }
        })
    })?;

    let drift = Subscription::new(
        &events,
        EventKind::Scroll,
        Rc::new(move |event: PageEvent| {
            if let PageEvent::Scroll { offset } = event {
                set_node_style(&layer, "translate", &scroll_translate(offset));
            }
        }),
    )?;

    Ok(vec![tilt, drift])
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let scene = use_reducer(SceneStatus::default);
    let layer = use_node_ref();
    let left_glow = use_node_ref();
    let right_glow = use_node_ref();

    {
        let scene = scene.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(SCENE_TIMEOUT_MS, move || {
                    warn!("3D scene did not load in {} ms, showing fallback", SCENE_TIMEOUT_MS);
                    scene.dispatch(SceneEvent::TimedOut);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    {
        let layer = layer.clone();
        let left_glow = left_glow.clone();
        let right_glow = right_glow.clone();
        use_effect_with_deps(
            move |_| {
                let subscriptions = mount_parallax(layer, left_glow, right_glow).unwrap_or_else(|e| {
                    error!("Hero parallax disabled: {}", e);
                    Vec::new()
                });
                move || drop(subscriptions)
            },
            (),
        );
    }

    let on_scene_load = {
        let scene = scene.clone();
        Callback::from(move |_: Event| scene.dispatch(SceneEvent::Loaded))
    };

    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 88vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #0b0e13;
                        overflow: hidden;
                        padding-top: 4rem;
                    }

                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        background:
                            radial-gradient(circle at 20% 20%, rgba(0, 255, 255, 0.08), transparent 40%),
                            radial-gradient(circle at 80% 30%, rgba(168, 85, 247, 0.12), transparent 35%),
                            radial-gradient(circle at 50% 80%, rgba(59, 130, 246, 0.10), transparent 40%);
                    }

                    .glow {
                        position: absolute;
                        border-radius: 9999px;
                        filter: blur(64px);
                    }

                    .glow-left {
                        top: -10rem;
                        left: -10rem;
                        height: 480px;
                        width: 480px;
                        background: rgba(6, 182, 212, 0.2);
                    }

                    .glow-right {
                        bottom: -10rem;
                        right: -10rem;
                        height: 520px;
                        width: 520px;
                        background: rgba(217, 70, 239, 0.2);
                    }

                    .hero-layer {
                        position: relative;
                        z-index: 10;
                        width: 100%;
                        max-width: 80rem;
                        padding: 0 1.5rem;
                        display: grid;
                        gap: 2.5rem;
                        align-items: center;
                        will-change: transform;
                        transition: transform 200ms;
                    }

                    @media (min-width: 1024px) {
                        .hero-layer {
                            grid-template-columns: 1fr 1fr;
                        }
                    }

                    .eyebrow {
                        font-size: 0.75rem;
                        font-weight: 600;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: rgba(103, 232, 249, 0.8);
                    }

                    .hero h1 {
                        font-size: clamp(2.25rem, 5vw, 3.75rem);
                        font-weight: 900;
                        line-height: 1.1;
                    }

                    .hero-copy {
                        margin-top: 1.25rem;
                        color: rgba(255, 255, 255, 0.7);
                        max-width: 65ch;
                    }

                    .hero-actions {
                        margin-top: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                    }

                    .scene {
                        position: relative;
                        aspect-ratio: 16 / 9;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(0, 0, 0, 0.4);
                    }

                    .scene iframe {
                        width: 100%;
                        height: 100%;
                        border: 0;
                    }

                    .scene-overlay {
                        position: absolute;
                        inset: 0;
                        display: grid;
                        place-items: center;
                        text-align: center;
                        background: linear-gradient(to top right, #0b0e13, #000);
                    }

                    .spinner {
                        margin: 0 auto 1rem;
                        height: 3.5rem;
                        width: 3.5rem;
                        border-radius: 9999px;
                        border: 2px solid rgba(255, 255, 255, 0.2);
                        border-top-color: rgb(34, 211, 238);
                        animation: spin 1s linear infinite;
                    }

                    .scene-fallback {
                        position: absolute;
                        inset: 0;
                    }

                    .scene-fallback img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.8;
                    }

                    .scene-fallback p {
                        position: absolute;
                        bottom: 1rem;
                        left: 1rem;
                        right: 1rem;
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.8);
                    }
                "#}
            </style>
            <div class="hero-backdrop" />
            <div ref={left_glow} class="glow glow-left" />
            <div ref={right_glow} class="glow glow-right" />

            <div ref={layer} class="hero-layer">
                <div>
                    <p class="eyebrow">{"Futuristic • Cinematic • AI"}</p>
                    <h1>{"Story-Driven AI Advertisements and Visual Worlds"}</h1>
                    <p class="hero-copy">
                        {"We craft cinematic AI ads, music visuals, and product films that feel alive. From concept to cut, our pipeline blends human taste with generative power."}
                    </p>
                    <div class="hero-actions">
                        <a href="#work" class="button-primary cursor-hover">{"See Work"}</a>
                        <a href="#contact" class="button-outline cursor-hover">{"Start a Project"}</a>
                    </div>
                </div>
                <div class="scene">
                    if scene.shows_scene() {
                        <iframe
                            src={SCENE_URL}
                            title="Spline scene"
                            loading="lazy"
                            allow="autoplay; fullscreen; xr-spatial-tracking"
                            onload={on_scene_load}
                        />
                    }
                    if scene.shows_spinner() {
                        <div class="scene-overlay">
                            <div>
                                <div class="spinner" />
                                <p>{"Loading interactive scene…"}</p>
                                <p class="muted">{"If this takes too long, we'll show a fallback."}</p>
                            </div>
                        </div>
                    }
                    if *scene == SceneStatus::Failed {
                        <div class="scene-fallback">
                            <img src={FALLBACK_IMAGE} alt="Cyberpunk city" />
                            <p>{"Interactive 3D unavailable on this device/network. Showing a cinematic fallback."}</p>
                        </div>
                    }
                </div>
            </div>
        </section>
    }
}
