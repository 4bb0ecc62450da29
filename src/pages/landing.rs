use yew::prelude::*;

use crate::components::lead_form::LeadForm;
use crate::components::reveal::RevealOnScroll;
use crate::components::route_map::RouteMap;
use crate::content::{BRANDS, INVESTORS, PLATFORM_LAYERS, PROBLEMS, STEPS};

/// Step cards stagger 200ms apart as they reveal.
const STEP_REVEAL_STAGGER_MS: u32 = 200;
/// Vision cards stagger 100ms apart.
const VISION_REVEAL_STAGGER_MS: u32 = 100;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>

            <header class="hero">
                <div class="hero-inner">
                    <div class="hero-copy">
                        <h1>{"The Operating System for African Logistics"}</h1>
                        <p class="hero-subtitle">
                            {"Avara is the asset-light platform that gives you total visibility, AI-powered route optimization, and actionable intelligence for your fleet. Stop burning fuel. Start building efficiency."}
                        </p>
                        <div class="hero-cta-group">
                            <button class="hero-cta primary">{"Request a Demo"}</button>
                            <button class="hero-cta ghost">
                                {"See Our 30% Savings Case Study "}
                                <i class="fas fa-arrow-right"></i>
                            </button>
                        </div>
                    </div>
                    <RouteMap />
                </div>
            </header>

            <section class="brand-bar">
                <p class="bar-label">{"TRUSTED BY AFRICA'S LEADING BRANDS"}</p>
                <div class="bar-list">
                    { for BRANDS.iter().map(|brand| html! {
                        <span class="brand-name">{*brand}</span>
                    }) }
                </div>
            </section>

            <section class="problem-solution">
                <div class="section-intro">
                    <h2>{"Stop Managing Chaos. Start Commanding Efficiency."}</h2>
                    <p>{"The old way of managing logistics in Africa is broken. It's a constant battle against rising costs, inefficient routes, and a lack of real-time visibility."}</p>
                </div>
                <h3 class="problem-heading">{"Is this you?"}</h3>
                <div class="problem-grid">
                    { for PROBLEMS.iter().map(|problem| html! {
                        <div class="problem-card">
                            <i class={problem.icon}></i>
                            <div>
                                <h4>{problem.title}</h4>
                                <p>{problem.description}</p>
                            </div>
                        </div>
                    }) }
                </div>
                <div class="solution-banner">
                    <p>{"Avara is the solution. We provide the digital brain that orchestrates your entire fleet."}</p>
                </div>
            </section>

            <section class="how-it-works">
                <div class="section-intro">
                    <h2>{"From Chaos to Control in 3 Steps"}</h2>
                </div>
                <div class="step-grid">
                    { for STEPS.iter().enumerate().map(|(index, step)| html! {
                        <RevealOnScroll class={classes!("step-reveal")} delay_ms={index as u32 * STEP_REVEAL_STAGGER_MS}>
                            <div class="step-card">
                                <div class="step-number">{step.number}</div>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </div>
                        </RevealOnScroll>
                    }) }
                </div>
            </section>

            <section class="testimonial">
                <div class="testimonial-card">
                    <div class="quote-badge">
                        <i class="fas fa-quote-left"></i>
                    </div>
                    <blockquote>
                        {"\"Avara transformed our delivery operations. We're not just saving on fuel; we're delivering hotter food to happier customers. The system has paid for itself many times over. It's become an indispensable part of our business.\""}
                    </blockquote>
                    <div class="testimonial-author">
                        <img src="https://placehold.co/64x64/374151/FFFFFF?text=DS" alt="David Simiyu, Head of Logistics at Simbisa Brands" loading="lazy" />
                        <div>
                            <p class="author-title">{"Head of Logistics, Simbisa Brands"}</p>
                            <p class="author-note">{"(Pizza Inn, Chicken Inn)"}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="platform-vision">
                <div class="section-intro">
                    <h2>{"More Than an OS. A Nervous System for Trade."}</h2>
                    <p>{"Logistics is just the beginning. Avara is building the data infrastructure for African commerce."}</p>
                </div>
                <div class="vision-grid">
                    { for PLATFORM_LAYERS.iter().enumerate().map(|(index, vision)| html! {
                        <RevealOnScroll class={classes!("vision-reveal")} delay_ms={index as u32 * VISION_REVEAL_STAGGER_MS}>
                            <div class="vision-card">
                                <div class="vision-layer">{vision.layer}</div>
                                <h3>{vision.title}</h3>
                                <p>{vision.description}</p>
                            </div>
                        </RevealOnScroll>
                    }) }
                </div>
                <p class="vision-closing">{"We are building the future of how goods move across a continent."}</p>
            </section>

            <section class="investor-bar">
                <p class="bar-label">{"Proudly backed by investors who understand the African opportunity."}</p>
                <div class="bar-list">
                    { for INVESTORS.iter().map(|investor| html! {
                        <span class="investor-name">{*investor}</span>
                    }) }
                </div>
            </section>

            <section class="final-cta">
                <div class="section-intro">
                    <h2>{"Ready to See Your ROI?"}</h2>
                    <p>{"Stop guessing. Start knowing. Schedule a 15-minute demo and we'll show you exactly how much Avara can save your business."}</p>
                </div>
                <div class="lead-form-panel">
                    <LeadForm />
                </div>
            </section>

            <footer class="site-footer">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <h3>{"Avara"}</h3>
                        <p>{"The Operating System for African Logistics"}</p>
                    </div>
                    <div class="footer-column">
                        <h4>{"Company"}</h4>
                        <ul>
                            <li><a href="#">{"About"}</a></li>
                            <li><a href="#">{"Careers"}</a></li>
                            <li><a href="#">{"Contact Us"}</a></li>
                            <li><a href="#">{"Privacy Policy"}</a></li>
                        </ul>
                    </div>
                    <div class="footer-column">
                        <h4>{"Contact"}</h4>
                        <ul>
                            <li><i class="fas fa-envelope"></i>{" info@avara.africa"}</li>
                            <li><i class="fas fa-phone"></i>{" +254-795391626"}</li>
                            <li><i class="fas fa-location-dot"></i>{" Nairobi, Kenya"}</li>
                        </ul>
                    </div>
                    <div class="footer-column">
                        <h4>{"Connect"}</h4>
                        <ul>
                            <li><a href="#">{"LinkedIn"}</a></li>
                            <li><a href="#">{"Twitter"}</a></li>
                            <li><a href="#">{"Facebook"}</a></li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{"© 2025 Avara. All rights reserved."}</p>
                </div>
            </footer>

            <style>
                {r#"
    .landing-page {
        min-height: 100vh;
        background: #fff;
        color: #111827;
        font-family: system-ui, -apple-system, 'Segoe UI', Roboto, Arial, sans-serif;
    }
    .landing-page h1, .landing-page h2, .landing-page h3, .landing-page h4 {
        margin: 0;
    }
    .section-intro {
        text-align: center;
        max-width: 48rem;
        margin: 0 auto 4rem;
    }
    .section-intro h2 {
        font-size: 2.25rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
    }
    .section-intro p {
        font-size: 1.25rem;
        color: #4B5563;
    }

    .hero {
        position: relative;
        background: linear-gradient(to bottom right, #EA580C, #9A3412);
        color: #fff;
        overflow: hidden;
    }
    .hero::before {
        content: '';
        position: absolute;
        inset: 0;
        background: rgba(0, 0, 0, 0.2);
    }
    .hero-inner {
        position: relative;
        max-width: 80rem;
        margin: 0 auto;
        padding: 6rem 2rem;
        display: grid;
        grid-template-columns: 1fr;
        gap: 3rem;
        align-items: center;
    }
    .hero-copy {
        text-align: center;
    }
    .hero-copy h1 {
        font-size: 3rem;
        font-weight: 700;
        line-height: 1.15;
        margin-bottom: 1.5rem;
    }
    .hero-subtitle {
        font-size: 1.35rem;
        color: #FFEDD5;
        line-height: 1.6;
        max-width: 40rem;
        margin: 0 auto 2rem;
    }
    .hero-cta-group {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1rem;
    }
    .hero-cta {
        font-size: 1.1rem;
        font-weight: 700;
        padding: 1rem 2rem;
        border-radius: 0.5rem;
        cursor: pointer;
        transition: all 0.3s ease;
        white-space: nowrap;
    }
    .hero-cta.primary {
        background: #fff;
        color: #C2410C;
        border: none;
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
    }
    .hero-cta.primary:hover {
        background: #FFF7ED;
        transform: scale(1.05);
    }
    .hero-cta.ghost {
        background: transparent;
        border: 2px solid #fff;
        color: #fff;
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .hero-cta.ghost:hover {
        background: #fff;
        color: #C2410C;
    }

    .brand-bar, .investor-bar {
        background: #F3F4F6;
        border-top: 1px solid #E5E7EB;
        border-bottom: 1px solid #E5E7EB;
        padding: 2rem 1rem;
    }
    .investor-bar {
        background: #fff;
        border: none;
        padding: 3rem 1rem;
    }
    .bar-label {
        text-align: center;
        color: #4B5563;
        font-weight: 500;
        margin: 0 0 1.5rem;
    }
    .bar-list {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        align-items: center;
        gap: 2rem 3rem;
        max-width: 80rem;
        margin: 0 auto;
    }
    .brand-name {
        color: #374151;
        font-weight: 600;
        font-size: 1.1rem;
        opacity: 0.8;
        transition: opacity 0.3s ease;
    }
    .brand-name:hover {
        opacity: 1;
    }
    .investor-name {
        color: #374151;
        font-weight: 500;
        font-size: 1.1rem;
        opacity: 0.8;
    }

    .problem-solution {
        padding: 5rem 2rem;
        background: #fff;
    }
    .problem-heading {
        text-align: center;
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 2rem;
    }
    .problem-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
        max-width: 56rem;
        margin: 0 auto 3rem;
    }
    .problem-card {
        display: flex;
        align-items: flex-start;
        gap: 1rem;
    }
    .problem-card i {
        color: #EA580C;
        font-size: 1.5rem;
        margin-top: 0.25rem;
        flex-shrink: 0;
    }
    .problem-card h4 {
        font-weight: 600;
        margin-bottom: 0.5rem;
    }
    .problem-card p {
        color: #4B5563;
        margin: 0;
    }
    .solution-banner {
        background: #FFF7ED;
        border-radius: 1rem;
        padding: 2rem;
        max-width: 56rem;
        margin: 0 auto;
    }
    .solution-banner p {
        text-align: center;
        font-size: 1.25rem;
        font-weight: 600;
        margin: 0;
    }

    .how-it-works {
        padding: 5rem 2rem;
        background: #F9FAFB;
    }
    .step-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
        max-width: 80rem;
        margin: 0 auto;
    }
    .step-card {
        background: #fff;
        border-radius: 1rem;
        padding: 2rem;
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
        transition: box-shadow 0.3s ease;
        height: 100%;
    }
    .step-card:hover {
        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
    }
    .step-number {
        width: 4rem;
        height: 4rem;
        background: #EA580C;
        color: #fff;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.5rem;
        font-weight: 700;
        margin: 0 auto 1.5rem;
    }
    .step-card h3 {
        font-size: 1.25rem;
        font-weight: 700;
        text-align: center;
        margin-bottom: 1rem;
    }
    .step-card p {
        color: #4B5563;
        text-align: center;
        margin: 0;
    }

    .reveal-card {
        opacity: 0;
        transition: opacity 0.6s ease, transform 0.6s ease;
    }
    .reveal-card.step-reveal {
        transform: translateY(30px);
    }
    .reveal-card.vision-reveal {
        transform: translateY(20px);
        transition-duration: 0.5s;
    }
    .reveal-card.revealed {
        opacity: 1;
        transform: translateY(0);
    }

    .testimonial {
        padding: 5rem 2rem;
        background: #fff;
    }
    .testimonial-card {
        position: relative;
        background: #F9FAFB;
        border-radius: 1.5rem;
        padding: 3rem;
        max-width: 56rem;
        margin: 0 auto;
    }
    .quote-badge {
        position: absolute;
        top: -1.5rem;
        left: 2rem;
        width: 3rem;
        height: 3rem;
        background: #EA580C;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .quote-badge i {
        color: #fff;
        font-size: 1.25rem;
    }
    .testimonial-card blockquote {
        font-size: 1.4rem;
        margin: 0 0 2rem;
    }
    .testimonial-author {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .testimonial-author img {
        width: 4rem;
        height: 4rem;
        border-radius: 50%;
        object-fit: cover;
        border: 2px solid #fff;
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    }
    .author-title {
        font-weight: 600;
        margin: 0;
    }
    .author-note {
        color: #4B5563;
        margin: 0;
    }

    .platform-vision {
        padding: 5rem 2rem;
        background: linear-gradient(to right, #111827, #000);
        color: #fff;
    }
    .platform-vision .section-intro p {
        color: #D1D5DB;
    }
    .vision-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
        max-width: 56rem;
        margin: 0 auto;
    }
    .vision-card {
        background: rgba(31, 41, 55, 0.5);
        border-radius: 1rem;
        padding: 1.5rem;
        text-align: center;
        height: 100%;
    }
    .vision-layer {
        color: #FB923C;
        font-weight: 700;
        margin-bottom: 0.5rem;
    }
    .vision-card h3 {
        font-size: 1.25rem;
        font-weight: 700;
        margin-bottom: 0.75rem;
    }
    .vision-card p {
        color: #9CA3AF;
        margin: 0;
    }
    .vision-closing {
        text-align: center;
        font-size: 1.5rem;
        font-weight: 600;
        margin: 4rem 0 0;
    }

    .final-cta {
        padding: 5rem 2rem;
        background: #EA580C;
        color: #fff;
    }
    .final-cta .section-intro {
        margin-bottom: 3rem;
    }
    .final-cta .section-intro p {
        color: #FFEDD5;
    }
    .lead-form-panel {
        background: rgba(255, 255, 255, 0.1);
        border-radius: 1rem;
        padding: 2rem;
        max-width: 56rem;
        margin: 0 auto;
    }
    .lead-form {
        display: grid;
        grid-template-columns: 1fr;
        gap: 1.5rem;
    }
    .lead-field label {
        display: block;
        font-size: 0.9rem;
        font-weight: 500;
        margin-bottom: 0.5rem;
    }
    .lead-field input {
        width: 100%;
        padding: 0.75rem 1rem;
        border-radius: 0.5rem;
        background: rgba(255, 255, 255, 0.2);
        border: 1px solid rgba(255, 255, 255, 0.3);
        color: #fff;
        box-sizing: border-box;
    }
    .lead-field input::placeholder {
        color: rgba(255, 255, 255, 0.7);
    }
    .lead-field input:focus {
        outline: none;
        box-shadow: 0 0 0 2px #fff;
    }
    .lead-submit button {
        width: 100%;
        background: #fff;
        color: #C2410C;
        font-size: 1.1rem;
        font-weight: 700;
        padding: 1rem 2rem;
        border: none;
        border-radius: 0.5rem;
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .lead-submit button:hover {
        background: #FFF7ED;
        transform: scale(1.05);
    }

    .site-footer {
        background: #111827;
        color: #fff;
        padding: 3rem 2rem;
    }
    .footer-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
        max-width: 80rem;
        margin: 0 auto;
    }
    .footer-brand h3 {
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 1rem;
    }
    .footer-brand p {
        color: #9CA3AF;
        margin: 0;
    }
    .footer-column h4 {
        font-weight: 600;
        margin-bottom: 1rem;
    }
    .footer-column ul {
        list-style: none;
        margin: 0;
        padding: 0;
        color: #9CA3AF;
    }
    .footer-column li {
        margin-bottom: 0.5rem;
        display: flex;
        align-items: center;
    }
    .footer-column li i {
        margin-right: 0.5rem;
        font-size: 0.9rem;
    }
    .footer-column a {
        color: #9CA3AF;
        text-decoration: none;
        transition: color 0.3s ease;
    }
    .footer-column a:hover {
        color: #fff;
    }
    .footer-bottom {
        max-width: 80rem;
        margin: 2rem auto 0;
        padding-top: 2rem;
        border-top: 1px solid #1F2937;
        text-align: center;
        color: #9CA3AF;
    }
    .footer-bottom p {
        margin: 0;
    }

    @media (min-width: 768px) {
        .problem-grid {
            grid-template-columns: 1fr 1fr;
        }
        .step-grid, .vision-grid {
            grid-template-columns: repeat(3, 1fr);
        }
        .lead-form {
            grid-template-columns: 1fr 1fr;
        }
        .lead-submit {
            grid-column: 1 / -1;
        }
        .hero-cta-group {
            flex-direction: row;
            align-items: flex-start;
        }
        .footer-grid {
            grid-template-columns: repeat(4, 1fr);
        }
    }
    @media (min-width: 1024px) {
        .hero-inner {
            grid-template-columns: 1fr 1fr;
            padding: 8rem 2rem;
        }
        .hero-copy {
            text-align: left;
        }
        .hero-subtitle {
            margin-left: 0;
        }
        .hero-cta-group {
            justify-content: flex-start;
        }
        .hero-copy h1 {
            font-size: 3.75rem;
        }
    }
    @media (max-width: 767px) {
        .hero-copy h1 {
            font-size: 2.25rem;
        }
        .section-intro h2 {
            font-size: 1.9rem;
        }
        .testimonial-card {
            padding: 2rem;
        }
        .testimonial-card blockquote {
            font-size: 1.15rem;
        }
    }
                "#}
            </style>
        </div>
    }
}
