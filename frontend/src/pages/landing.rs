use chrono::Datelike;
use log::error;
use yew::prelude::*;

use crate::components::contact_card::ContactCard;
use crate::components::evasive_cta::EvasiveCta;
use crate::components::nav::FloatingNav;
use crate::components::process_carousel::ProcessCarousel;
use crate::components::sticky_cta::StickyContactCta;
use crate::components::surfaces::{MagneticLink, MicrocopyBadge, SpotlightSurface, TiltCard};
use crate::config::{self, InteractionConfig};
use crate::content::{self, GridItem, Offering, SiteContent};

#[function_component(Landing)]
pub fn landing() -> Html {
    let content = use_memo(
        |_| {
            content::load().map_err(|err| {
                error!("Failed to load site content: {}", err);
                err
            })
        },
        (),
    );
    let tuning = config::interaction();

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    match &*content {
        Ok(content) => html! {
            <main class="landing-page">
                <style>{LANDING_CSS}</style>
                <FloatingNav items={content.nav_items.clone()} />
                { hero() }
                { about(content, &tuning) }
                { services(content, &tuning) }
                { projects(content) }
                { testimonials(content) }
                { contact_cta(&tuning) }
                { footer(content) }
                <StickyContactCta />
            </main>
        },
        Err(_) => html! {
            <main class="landing-page">
                <style>{LANDING_CSS}</style>
                { hero() }
                <p class="fallback-note">
                    {"Reach us at "}
                    <a href={config::contact_mailto("Project inquiry")}>{config::CONTACT_EMAIL}</a>
                </p>
            </main>
        },
    }
}

fn hero() -> Html {
    html! {
        <header class="hero">
            <p class="eyebrow">{"Dynamic web magic with Code Compas"}</p>
            <h1>{"Transforming concepts into seamless user experiences"}</h1>
            <p class="hero-subtitle">
                {"Websites, apps, and automations for businesses of every size. Bilingual, fairly priced, and built to last."}
            </p>
            <a href="#services" class="hero-cta">{"See our packages"}</a>
        </header>
    }
}

fn about(content: &SiteContent, tuning: &InteractionConfig) -> Html {
    html! {
        <section id="about" class="about-section">
            <div class="about-intro">
                <p class="eyebrow">{"We are Code Compas 🤠"}</p>
                <h2>{"We build custom apps, websites, and automations. Let us create a digital solution that works for you!"}</h2>
                <p>{"Built in Los Angeles, CA and ready for the World 🌎"}</p>
                <p>{"We speak English and Spanish. Helping you win jobs, earn trust, and grow your business."}</p>
            </div>
            <div class="bento-grid">
                { for content.grid_items.iter().map(|item| bento_item(item, tuning)) }
            </div>
        </section>
    }
}

fn bento_item(item: &GridItem, tuning: &InteractionConfig) -> Html {
    let class = classes!("bento-item", item.class_name.clone());
    if item.is_contact() {
        return html! {
            <SpotlightSurface key={item.id} class={class} config={tuning.card_spotlight}>
                <ContactCard
                    title={item.title.clone()}
                    email={config::CONTACT_EMAIL}
                    config={tuning.copy_feedback}
                />
            </SpotlightSurface>
        };
    }
    html! {
        <SpotlightSurface key={item.id} class={class} config={tuning.card_spotlight}>
            if let Some(img) = &item.img {
                <img class="bento-img" src={img.clone()} alt="" loading="lazy" />
            }
            if let Some(spare) = &item.spare_img {
                <img class="bento-spare-img" src={spare.clone()} alt="" loading="lazy" />
            }
            <div class="bento-copy">
                if !item.description.is_empty() {
                    <div class="bento-description">{&item.description}</div>
                }
                <div class="bento-title">{&item.title}</div>
            </div>
        </SpotlightSurface>
    }
}

fn services(content: &SiteContent, tuning: &InteractionConfig) -> Html {
    html! {
        <section id="services">
            <SpotlightSurface class="services-surface" config={tuning.section_spotlight}>
                <div class="section-heading">
                    <p class="eyebrow">{"Code Compas 🤠"}</p>
                    <h2>{"Services & Signature Packages"}</h2>
                </div>
                <ProcessCarousel slides={content.process_slides.clone()} config={tuning.slideshow} />
                <div class="offerings">
                    { for content.offerings.iter().map(offering_card) }
                </div>
                <div class="add-ons">
                    <p class="eyebrow">{"Add-ons to layer in"}</p>
                    <p>
                        {"Elevate any package with creative extras: branding, content, marketing ops, on-site collateral, and more. Ask about bundle pricing when we scope your project."}
                    </p>
                    <div class="add-on-list">
                        { for content.add_ons.iter().map(|item| html! {
                            <span class="add-on">{"＋ "}{item}</span>
                        }) }
                    </div>
                </div>
                <TiltCard class="services-tilt">
                    <MicrocopyBadge messages={content.microcopy.clone()} />
                    <h3>{"Ready to take your digital presence to the next level?"}</h3>
                    <p>
                        {"All services are bilingual, tailored to your business, and kick off with a quick discovery chat. Tell us what you need and we'll reply in under a day with next steps."}
                    </p>
                    <MagneticLink href="#contact">{"Talk to us about your project 🤠"}</MagneticLink>
                </TiltCard>
            </SpotlightSurface>
        </section>
    }
}

fn offering_card(offering: &Offering) -> Html {
    html! {
        <article class="offering" key={offering.title.clone()}>
            <div class="offering-header">
                <span class="offering-icon">{&offering.icon}</span>
                <div>
                    <h3>{&offering.title}</h3>
                    <p class="offering-badge">{&offering.badge}</p>
                </div>
                <span class="offering-timeline">{&offering.timeline}</span>
            </div>
            <p>{&offering.description}</p>
            <div class="offering-price">
                <p class="offering-price-caption">{&offering.price_caption}</p>
                <p class="offering-price-value">{&offering.price}</p>
            </div>
            <ul>
                { for offering.highlights.iter().map(|item| html! { <li>{"✦ "}{item}</li> }) }
            </ul>
            <a href="#contact" class="offering-cta">{&offering.cta_label}{" →"}</a>
        </article>
    }
}

fn projects(content: &SiteContent) -> Html {
    html! {
        <section id="projects" class="projects-section">
            <h2>{"A small selection of "}<span class="accent">{"recent projects"}</span></h2>
            <div class="project-list">
                { for content.projects.iter().map(|project| html! {
                    <a class="project" key={project.id} href={project.link.clone()} target="_blank" rel="noopener noreferrer">
                        <img src={project.img.clone()} alt={project.title.clone()} loading="lazy" />
                        <h3>{&project.title}</h3>
                        <p>{&project.des}</p>
                        <div class="project-stack">
                            { for project.icon_lists.iter().map(|icon| html! {
                                <img src={icon.clone()} alt="" loading="lazy" />
                            }) }
                        </div>
                    </a>
                }) }
            </div>
        </section>
    }
}

fn testimonials(content: &SiteContent) -> Html {
    html! {
        <section id="testimonials" class="testimonials-section">
            <h2>{"Kind words from "}<span class="accent">{"satisfied clients"}</span></h2>
            <div class="testimonial-list">
                { for content.testimonials.iter().map(|testimonial| html! {
                    <blockquote class="testimonial">
                        <p>{&testimonial.quote}</p>
                        <footer>
                            <strong>{&testimonial.name}</strong>
                            <span>{&testimonial.title}</span>
                        </footer>
                    </blockquote>
                }) }
            </div>
            <div class="company-list">
                { for content.companies.iter().map(|company| html! {
                    <div class="company" key={company.id}>
                        <img src={company.img.clone()} alt={company.name.clone()} loading="lazy" />
                        <img src={company.name_img.clone()} alt="" loading="lazy" />
                    </div>
                }) }
            </div>
        </section>
    }
}

fn contact_cta(tuning: &InteractionConfig) -> Html {
    html! {
        <section class="contact-cta">
            <h2>{"Ready to take "}<span class="accent">{"your"}</span>{" digital presence to the next level?"}</h2>
            <p>
                {"Reach out when you are ready to build. Catch the button and our email lands on your clipboard."}
            </p>
            <EvasiveCta
                label="Start a project conversation"
                captured_label="Email copied! 🎉"
                copy_text={AttrValue::from(config::CONTACT_EMAIL)}
                config={tuning.evasive}
            />
        </section>
    }
}

fn footer(content: &SiteContent) -> Html {
    let year = chrono::Utc::now().year();
    html! {
        <footer id="contact" class="site-footer">
            <div class="contact-panel">
                <div class="contact-copy">
                    <p class="eyebrow">{"Contact"}</p>
                    <h2>{"Share your project vision and we'll reply within 48 hours."}</h2>
                    <p>
                        {"Reach out at "}
                        <a href={config::contact_mailto("Project inquiry")}>{config::CONTACT_EMAIL}</a>
                        {" or fill out the form. Tell us about your website, app, POS, or automation idea and we'll confirm next steps, timeline, and deposit details."}
                    </p>
                </div>
                <form
                    class="contact-form"
                    action={format!("mailto:{}", config::CONTACT_EMAIL)}
                    method="POST"
                    enctype="text/plain"
                >
                    <label>
                        {"Email"}
                        <input type="email" name="email" required=true placeholder="you@example.com" />
                    </label>
                    <label>
                        {"Subject"}
                        <input type="text" name="subject" required=true placeholder="Tell us what you need" />
                    </label>
                    <label>
                        {"Message"}
                        <textarea name="message" required=true rows="4" placeholder="Share details about your project, timeline, and goals" />
                    </label>
                    <button type="submit" class="contact-submit">{"Contact Us for a Quote →"}</button>
                </form>
            </div>
            <div class="footer-bottom">
                <p>
                    {format!("Copyright © {} ", year)}
                    <a href={config::get_site_url()}>{"Code Compas"}</a>
                    {". All rights reserved."}
                </p>
                <div class="social-links">
                    { for content.social_media.iter().map(|social| html! {
                        <div class="social-link" key={social.id}>
                            <img src={social.img.clone()} alt="social icon" width="20" height="20" />
                        </div>
                    }) }
                </div>
            </div>
        </footer>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        position: relative;
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.25rem;
        color: #fff;
        background: #000319;
        overflow: hidden;
    }
    .eyebrow {
        text-transform: uppercase;
        letter-spacing: 0.32em;
        font-size: 0.75rem;
        color: rgba(255, 255, 255, 0.6);
    }
    .accent { color: #cbacf9; }
    .spotlight-surface {
        position: relative;
        overflow: hidden;
        border-radius: 1.5rem;
    }
    .spotlight-glow {
        pointer-events: none;
        position: absolute;
        inset: 0;
        mix-blend-mode: screen;
    }
    .bento-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
        gap: 1.5rem;
    }
    .bento-item {
        border: 1px solid rgba(255, 255, 255, 0.08);
        background: #080c1a;
        min-height: 14rem;
    }
    .tilt-card {
        position: relative;
        max-width: 42rem;
        margin: 4rem auto 0;
        padding: 2.5rem 2rem;
        border-radius: 2rem;
        background: rgba(255, 255, 255, 0.1);
        transition: transform 200ms ease-out;
        will-change: transform;
    }
    .tilt-card-glow {
        pointer-events: none;
        position: absolute;
        inset: 0;
        border-radius: 2rem;
        opacity: 0.8;
    }
    .magnetic-link {
        position: relative;
        display: inline-flex;
        padding: 0.75rem 2rem;
        border-radius: 9999px;
        background: linear-gradient(90deg, rgba(168, 85, 247, 0.8), rgba(217, 70, 239, 0.7));
        transition: transform 150ms ease-out;
    }
    .magnetic-link-glow {
        pointer-events: none;
        position: absolute;
        inset: 0;
        border-radius: 9999px;
        background: radial-gradient(120px circle at var(--x, 50%) var(--y, 50%), rgba(255, 255, 255, 0.35), transparent 60%);
    }
    .process-carousel {
        position: relative;
        max-width: 37.5rem;
        margin: 1.5rem auto 0;
    }
    .process-carousel-track {
        position: relative;
        min-height: 14rem;
        overflow: hidden;
    }
    .process-slide {
        position: absolute;
        inset: 0;
        text-align: center;
        transition: transform 540ms cubic-bezier(0.22, 1, 0.36, 1), opacity 360ms ease-out;
    }
    .process-dot {
        width: 0.625rem;
        height: 0.625rem;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.18);
    }
    .process-dot.active { background: rgba(138, 96, 255, 0.9); }
    .contact-card-stage, .evasive-arena {
        position: relative;
        display: flex;
        align-items: center;
        justify-content: center;
        height: 12rem;
        overflow: hidden;
        border-radius: 1rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
    }
    .evasive-arena { height: 12.5rem; max-width: 40rem; margin: 2rem auto 0; }
    .evasive-target {
        padding: 0.75rem 1.5rem;
        border-radius: 9999px;
        transition: transform 120ms ease-out;
    }
    .evasive-arena.attract .evasive-target { transition: transform 60ms linear; }
    .evasive-hint {
        position: absolute;
        bottom: 0.5rem;
        font-size: 0.75rem;
        color: rgba(255, 255, 255, 0.6);
    }
    .copy-toast {
        pointer-events: none;
        position: absolute;
        bottom: 1rem;
        left: 50%;
        transform: translateX(-50%);
        padding: 0.75rem 1rem;
        border-radius: 1rem;
        background: rgba(255, 255, 255, 0.1);
        font-size: 0.75rem;
    }
    .sticky-cta {
        position: fixed;
        left: 1rem;
        right: 1rem;
        bottom: 1rem;
        z-index: 50;
    }
    .sticky-cta-button { width: 100%; padding: 1rem; border-radius: 9999px; }
    .sticky-cta-button.rippling { animation: ripple 400ms ease-out; }
    @keyframes ripple {
        from { box-shadow: 0 0 0 0 rgba(138, 96, 255, 0.6); }
        to { box-shadow: 0 0 0 18px rgba(138, 96, 255, 0); }
    }
    .sr-only {
        position: absolute;
        width: 1px;
        height: 1px;
        overflow: hidden;
        clip: rect(0, 0, 0, 0);
    }
"#;
