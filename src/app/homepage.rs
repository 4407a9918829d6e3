use leptos::{either::Either, ev::KeyboardEvent, prelude::*};
use leptos_meta::Title;

use super::wrapper::SectionWrapper;
use crate::{
    content::{self, Navigation, Project, SocialLink},
    section::SectionKind,
};

fn open(nav: Navigation) {
    if let Err(e) = window().open_with_url_and_target(nav.url, nav.target.attr()) {
        log::warn!("couldn't open {}: {e:?}", nav.url);
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Projects />
        <Contact />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let github = content::SOCIAL_LINKS[0].navigation();
    view! {
        <SectionWrapper kind=SectionKind::Hero>
            <h1 class="hero-title">{content::HERO_TITLE}</h1>
            <p class="hero-subtitle">{content::HERO_SUBTITLE}</p>
            <div class="hero-icons">
                {content::SOCIAL_LINKS
                    .into_iter()
                    .map(|link| view! { <IconLink link /> })
                    .collect_view()}
            </div>
            <a
                href=github.url
                target=github.target.attr()
                rel=github.target.rel()
                class="button-link"
            >
                <span class="button">{content::HERO_CTA}</span>
            </a>
        </SectionWrapper>
    }
}

#[component]
fn IconLink(link: SocialLink) -> impl IntoView {
    let nav = link.navigation();
    view! {
        <a href=nav.url target=nav.target.attr() rel=nav.target.rel() aria-label=link.label>
            {match link.icon.devicon() {
                Some(class) => Either::Left(view! { <i class=class></i> }),
                None => Either::Right(view! { <EnvelopeIcon /> }),
            }}
        </a>
    }
}

#[component]
fn EnvelopeIcon() -> impl IntoView {
    view! {
        <svg
            class="icon-envelope"
            viewBox="0 0 24 24"
            width="1em"
            height="1em"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            aria-hidden="true"
        >
            <rect x="2" y="4" width="20" height="16" rx="2" />
            <path d="M2 6l10 7 10-7" />
        </svg>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <SectionWrapper kind=SectionKind::About>
            <h2 class="section-title">{content::ABOUT_TITLE}</h2>
            <p class="section-description">{content::ABOUT_TEXT}</p>
        </SectionWrapper>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <SectionWrapper kind=SectionKind::Projects>
            <h2 class="section-title">{content::PROJECTS_TITLE}</h2>
            <div class="projects-grid">
                {content::PROJECTS
                    .into_iter()
                    .map(|project| view! { <ProjectCard project /> })
                    .collect_view()}
            </div>
        </SectionWrapper>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let on_key = move |ev: KeyboardEvent| {
        if matches!(ev.key().as_str(), "Enter" | " ") {
            ev.prevent_default();
            open(project.activate());
        }
    };
    view! {
        <div
            class="project-card"
            role="link"
            tabindex="0"
            on:click=move |_| open(project.activate())
            on:keydown=on_key
        >
            <h3 class="project-title">{project.title}</h3>
            <p class="project-description">{project.description}</p>
        </div>
    }
}

#[component]
fn Contact() -> impl IntoView {
    let nav = content::contact_action();
    view! {
        <SectionWrapper kind=SectionKind::Contact>
            <h2 class="section-title">{content::CONTACT_TITLE}</h2>
            <p class="section-description">{content::CONTACT_TEXT}</p>
            <a href=nav.url target=nav.target.attr() rel=nav.target.rel() class="contact-button">
                {content::CONTACT_CTA}
            </a>
        </SectionWrapper>
    }
}
