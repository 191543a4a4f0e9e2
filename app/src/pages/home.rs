use leptos::prelude::*;

use crate::components::{Icon, Reveal, ServiceCard};
use crate::config::SiteConfig;
use crate::content::{CaseStudy, Testimonial, HOME};
use crate::seo::{home_metadata, PageHead};

/// Stagger between cards of a grid, in seconds.
const STAGGER: f32 = 0.1;

#[component]
pub fn Index() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    view! {
        <PageHead metadata=home_metadata(&config)/>
        <main class="home">
            <section class="hero">
                <Reveal translate_y=4>
                    <h1 class="display">{HOME.headline}</h1>
                </Reveal>
                <Reveal translate_y=8 delay=0.2>
                    <p class="subline">{HOME.subline}</p>
                </Reveal>
                <Reveal translate_y=12 delay=0.4>
                    <a id="consultation" class="button button-primary" href=HOME.cta.href>
                        {HOME.cta.label}
                        <Icon name="arrowRight"/>
                    </a>
                </Reveal>
            </section>

            <Reveal translate_y=16 delay=0.6>
                <section class="usp surface">
                    <h2>"Enterprise-grade web solutions for growth"</h2>
                </section>
            </Reveal>

            <section class="services">
                <h2>"Our Services"</h2>
                <div class="grid grid-2">
                    {HOME
                        .services
                        .iter()
                        .enumerate()
                        .map(|(index, service)| view! {
                            <Reveal delay={0.2 + index as f32 * STAGGER}>
                                <ServiceCard service=*service/>
                            </Reveal>
                        })
                        .collect_view()}
                </div>
            </section>

            {(!HOME.case_studies.is_empty()).then(|| view! {
                <section class="case-studies">
                    <h2>"Featured Case Studies"</h2>
                    <div class="grid grid-2">
                        {HOME
                            .case_studies
                            .iter()
                            .enumerate()
                            .map(|(index, case_study)| view! {
                                <Reveal delay={0.2 + index as f32 * STAGGER}>
                                    <CaseStudyCard case_study=*case_study/>
                                </Reveal>
                            })
                            .collect_view()}
                    </div>
                </section>
            })}

            {(!HOME.clients.is_empty()).then(|| view! {
                <section class="clients">
                    <h2>"Trusted By"</h2>
                    <Reveal delay=0.2>
                        <ul class="client-logos surface">
                            {HOME
                                .clients
                                .iter()
                                .map(|client| view! {
                                    <li>
                                        {match client.logo {
                                            Some(logo) => view! { <img src=logo alt=client.name/> }.into_any(),
                                            None => view! { <strong>{client.name}</strong> }.into_any(),
                                        }}
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </Reveal>
                </section>
            })}

            {(!HOME.testimonials.is_empty()).then(|| view! {
                <section class="testimonials">
                    <h2>"Client Testimonials"</h2>
                    <Reveal delay=0.2>
                        <div class="scroller">
                            {HOME
                                .testimonials
                                .iter()
                                .map(|testimonial| view! { <TestimonialCard testimonial=*testimonial/> })
                                .collect_view()}
                        </div>
                    </Reveal>
                </section>
            })}
        </main>
    }
}

#[component]
fn CaseStudyCard(case_study: CaseStudy) -> impl IntoView {
    view! {
        <a class="card case-study" href=case_study.link>
            {case_study.image.map(|image| view! {
                <div class="cover" style=format!("background-image: url({})", image)></div>
            })}
            <div class="card-body">
                <h3>{case_study.title}</h3>
                <span class="label">{case_study.client}</span>
                <p>{case_study.description}</p>
            </div>
        </a>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <figure class="card testimonial">
            <blockquote>"\u{201c}"{testimonial.quote}"\u{201d}"</blockquote>
            <figcaption>
                <img class="avatar" src=testimonial.image alt=testimonial.author/>
                <span>
                    <strong>{testimonial.author}</strong>
                    <small>{testimonial.position}", "{testimonial.company}</small>
                </span>
            </figcaption>
        </figure>
    }
}
