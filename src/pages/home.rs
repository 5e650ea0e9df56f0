use yew::prelude::*;

use crate::components::contact::{BasicContactForm, ContactForm};
use crate::components::reveal::Reveal;
use crate::components::stats::{HeroStats, Stat};

#[function_component(Home)]
pub fn home() -> Html {
    let stats = vec![
        Stat {
            value: AttrValue::from("2.5B"),
            label: AttrValue::from("Events indexed"),
        },
        Stat {
            value: AttrValue::from("85%"),
            label: AttrValue::from("Market coverage"),
        },
        Stat {
            value: AttrValue::from("120 ms"),
            label: AttrValue::from("Median latency"),
        },
    ];

    html! {
        <>
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        text-align: center;
                        padding: 8rem 2rem 4rem;
                        background: linear-gradient(180deg, #0d1117 0%, #161b22 100%);
                        color: #fff;
                    }
                    .hero h1 {
                        font-size: 3.5rem;
                        margin-bottom: 1rem;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #8b949e;
                        max-width: 640px;
                    }
                    .hero-stats {
                        display: flex;
                        gap: 4rem;
                        margin-top: 4rem;
                        flex-wrap: wrap;
                        justify-content: center;
                    }
                    .stat-item {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }
                    .market-number {
                        font-size: 2.5rem;
                        font-weight: 700;
                        color: #1e90ff;
                    }
                    .market-label {
                        margin-top: 0.5rem;
                        color: #8b949e;
                    }
                    section {
                        padding: 6rem 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .card-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                        margin-top: 3rem;
                    }
                    .feature-card, .gallery-item, .app-card {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                        background: #161b22;
                        border: 1px solid rgba(30, 144, 255, 0.15);
                        border-radius: 12px;
                        padding: 2rem;
                        color: #c9d1d9;
                    }
                    .feature-card.animated, .gallery-item.animated, .app-card.animated {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        max-width: 480px;
                        margin: 2rem auto 0;
                    }
                    .contact-form input, .contact-form textarea {
                        padding: 0.75rem 1rem;
                        border-radius: 8px;
                        border: 1px solid rgba(30, 144, 255, 0.3);
                        background: #0d1117;
                        color: #fff;
                    }
                    .contact-form button {
                        padding: 0.75rem 1rem;
                        border-radius: 8px;
                        border: none;
                        background: #1e90ff;
                        color: #fff;
                        cursor: pointer;
                    }
                    .contact-form button:disabled {
                        opacity: 0.6;
                        cursor: wait;
                    }
                    footer {
                        padding: 4rem 2rem;
                        background: #0d1117;
                        color: #8b949e;
                        text-align: center;
                    }
                "#}
            </style>

            <header class="hero">
                <h1>{"Heimdahl"}</h1>
                <p class="hero-subtitle">
                    {"Real-time visibility into on-chain markets. One stream, every venue, \
                      decoded before the next block lands."}
                </p>
                <HeroStats stats={stats} />
            </header>

            <section id="features">
                <h2>{"Why Heimdahl"}</h2>
                <div class="card-grid">
                    <Reveal class="feature-card">
                        <h3>{"Unified stream"}</h3>
                        <p>{"Swaps, transfers and liquidity events from every tracked chain, \
                             normalized into one feed."}</p>
                    </Reveal>
                    <Reveal class="feature-card">
                        <h3>{"Decoded, not raw"}</h3>
                        <p>{"Contract calls arrive as structured records, no ABI wrangling on \
                             your side."}</p>
                    </Reveal>
                    <Reveal class="feature-card">
                        <h3>{"Built for backtests"}</h3>
                        <p>{"Replay any window of history at full fidelity, then point the same \
                             code at the live stream."}</p>
                    </Reveal>
                </div>
            </section>

            <section id="gallery">
                <h2>{"In the wild"}</h2>
                <div class="card-grid">
                    <Reveal class="gallery-item">
                        <img src="/assets/dashboard.png" alt="Live dashboard" />
                    </Reveal>
                    <Reveal class="gallery-item">
                        <img src="/assets/terminal.png" alt="CLI stream" />
                    </Reveal>
                    <Reveal class="gallery-item">
                        <img src="/assets/alerts.png" alt="Alert feed" />
                    </Reveal>
                </div>
            </section>

            <section id="apps">
                <h2>{"Works where you work"}</h2>
                <div class="card-grid">
                    <Reveal class="app-card">
                        <h3>{"WebSocket API"}</h3>
                        <p>{"Subscribe to filtered event streams from any language."}</p>
                    </Reveal>
                    <Reveal class="app-card">
                        <h3>{"CLI"}</h3>
                        <p>{"Pipe the chain straight into your terminal tooling."}</p>
                    </Reveal>
                </div>
            </section>

            <section id="contact">
                <h2>{"Talk to us"}</h2>
                <ContactForm />
            </section>

            <footer>
                <p>{"Something quick instead?"}</p>
                <BasicContactForm />
                <p>{"© 2026 Heimdahl"}</p>
            </footer>
        </>
    }
}
