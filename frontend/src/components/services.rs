use yew::prelude::*;

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
}

pub const SERVICES: [Service; 4] = [
    Service {
        title: "AI Commercials",
        description: "End-to-end story, boards, voice, shoot, and gen-AI comp for cinematic ads.",
        accent: "linear-gradient(to bottom right, #22d3ee, #d946ef)",
    },
    Service {
        title: "Music Visuals",
        description: "Concept-driven visualizers and videos blending motion design and AI style.",
        accent: "linear-gradient(to bottom right, #818cf8, #22d3ee)",
    },
    Service {
        title: "Product Films",
        description: "Launch films and hero loops for websites, UGC, and performance ads.",
        accent: "linear-gradient(to bottom right, #fb7185, #fcd34d)",
    },
    Service {
        title: "Model Shoots",
        description: "Fashion-forward campaigns and look-books with bold lighting and color.",
        accent: "linear-gradient(to bottom right, #34d399, #5eead4)",
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="services-section">
            <style>
                {r#"
                    .services-section {
                        background: #0b0e13;
                        color: white;
                        padding: 5rem 0;
                    }

                    .service-grid {
                        margin-top: 2.5rem;
                        display: grid;
                        gap: 1.5rem;
                        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                    }

                    .service {
                        position: relative;
                        overflow: hidden;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.05);
                        padding: 1.5rem;
                        transition: transform 300ms;
                    }

                    .service:hover {
                        transform: translateY(-0.25rem);
                    }

                    .service .accent {
                        position: absolute;
                        top: -2.5rem;
                        right: -2.5rem;
                        height: 8rem;
                        width: 8rem;
                        border-radius: 9999px;
                        opacity: 0.4;
                        filter: blur(40px);
                    }

                    .service h3 {
                        font-weight: 600;
                        font-size: 1.125rem;
                    }

                    .service p {
                        margin-top: 0.5rem;
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.7);
                    }
                "#}
            </style>
            <div class="container">
                <h2>{"Services"}</h2>
                <div class="service-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div key={service.title} class="service cursor-hover">
                            <div class="accent" style={format!("background: {};", service.accent)} />
                            <h3>{ service.title }</h3>
                            <p>{ service.description }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
