use leptos::prelude::*;

use crate::components::{Badge, Icon, Reveal, SocialLinks, TableOfContents};
use crate::config::SiteConfig;
use crate::content::{Skill, ABOUT, SOCIAL};
use crate::seo::{about_metadata, PageHead};

#[component]
pub fn Index() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    view! {
        <PageHead metadata=about_metadata(&config)/>
        <div class="about">
            <TableOfContents structure=ABOUT.structure() options=ABOUT.table_of_content/>
            <main>
                <section class="hero">
                    <Reveal>
                        <h1 class="display">"About Web1.LK"</h1>
                    </Reveal>
                    <Reveal delay=0.1>
                        <p class="subline">"Your trusted partner in enterprise web development since 2015"</p>
                    </Reveal>
                    {(!SOCIAL.is_empty()).then(|| view! {
                        <Reveal delay=0.2>
                            <SocialLinks/>
                        </Reveal>
                    })}
                </section>

                <Introduction/>
                <Journey/>
                <Partners/>
                <Expertise/>

                <Reveal translate_y=12 delay=0.4>
                    <section class="card cta">
                        <h2>"Let's Discuss Your Project"</h2>
                        <p>
                            "Schedule a free consultation with our team and discover how we can help \
                            transform your business with our enterprise-grade web solutions."
                        </p>
                        {ABOUT.calendar.display.then(|| view! {
                            <a class="button button-primary" href=ABOUT.calendar.link>
                                "Book Consultation"
                                <Icon name="arrowRight"/>
                            </a>
                        })}
                    </section>
                </Reveal>
            </main>
        </div>
    }
}

#[component]
fn Introduction() -> impl IntoView {
    let intro = ABOUT.intro;
    intro.display.then(|| view! {
        <Reveal delay=0.1>
            <section class="intro">
                <h2 id=intro.title class="display">{intro.title}</h2>
                {intro.paragraphs.iter().map(|paragraph| view! { <p>{*paragraph}</p> }).collect_view()}
                <div class="grid grid-2">
                    <div class="card">
                        <h3>"Our Mission"</h3>
                        <p>{intro.mission}</p>
                    </div>
                    <div class="card">
                        <h3>"Our Vision"</h3>
                        <p>{intro.vision}</p>
                    </div>
                </div>
                {(!intro.values.is_empty()).then(|| view! {
                    <h3>"Core Values"</h3>
                    <ul class="values">
                        {intro
                            .values
                            .iter()
                            .map(|value| view! {
                                <li>
                                    <strong>{value.title}</strong>
                                    <p>{value.description}</p>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                })}
            </section>
        </Reveal>
    })
}

#[component]
fn Journey() -> impl IntoView {
    let work = ABOUT.work;
    work.display.then(|| view! {
        <Reveal translate_y=12 delay=0.2>
            <section class="journey">
                <h2 id=work.title class="display">{work.title}</h2>
                <p>{work.description}</p>
                <ol class="timeline">
                    {work
                        .milestones
                        .iter()
                        .enumerate()
                        .map(|(index, milestone)| view! {
                            <li id=milestone.title>
                                <Reveal delay={0.1 * index as f32}>
                                    <Badge variant="primary">{milestone.year}</Badge>
                                    <h3>{milestone.title}</h3>
                                    <p>{milestone.description}</p>
                                </Reveal>
                            </li>
                        })
                        .collect_view()}
                </ol>
            </section>
        </Reveal>
    })
}

#[component]
fn Partners() -> impl IntoView {
    let studies = ABOUT.studies;
    studies.display.then(|| view! {
        <Reveal translate_y=12 delay=0.3>
            <section class="studies">
                <h2 id=studies.title class="display">{studies.title}</h2>
                {studies
                    .institutions
                    .iter()
                    .map(|institution| view! {
                        <div id=institution.name class="institution">
                            <h3>{institution.name}</h3>
                            <p>{institution.description}</p>
                        </div>
                    })
                    .collect_view()}
            </section>
        </Reveal>
    })
}

#[component]
fn Expertise() -> impl IntoView {
    let technical = ABOUT.technical;
    technical.display.then(|| view! {
        <Reveal translate_y=12 delay=0.3>
            <section class="technical">
                <h2 id=technical.title class="display">{technical.title}</h2>
                {technical.subtitle.map(|subtitle| view! { <p class="subline">{subtitle}</p> })}
                <div class="grid grid-2">
                    {technical
                        .skills
                        .iter()
                        .enumerate()
                        .map(|(index, skill)| view! {
                            <Reveal delay={0.1 * index as f32}>
                                <SkillCard skill=*skill/>
                            </Reveal>
                        })
                        .collect_view()}
                </div>
            </section>
        </Reveal>
    })
}

#[component]
fn SkillCard(skill: Skill) -> impl IntoView {
    view! {
        <div id=skill.title class="card skill">
            <h3>{skill.title}</h3>
            <p>{skill.description}</p>
            {(!skill.technologies.is_empty()).then(|| view! {
                <div class="technologies">
                    {skill
                        .technologies
                        .iter()
                        .map(|technology| view! { <Badge>{*technology}</Badge> })
                        .collect_view()}
                </div>
            })}
        </div>
    }
}
