//! Presentation sections: hero, about, skills, projects, experience.

use leptos::prelude::*;

use crate::content::{EXPERIENCE, ExperienceKind, PROJECTS, SkillCategory, SkillFilter, visible_skills};

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section id="home" class="section hero">
            <h1 class="hero__title">"WebCraft Studio"</h1>
            <p class="hero__tagline">"Immersive 3D web experiences, built to load fast and feel alive."</p>
            <div class="hero__actions">
                <a class="btn btn--primary" href="#projects">"View Work"</a>
                <a class="btn" href="#contact">"Get in Touch"</a>
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <h2>"About"</h2>
            <p>
                "We are a small studio of web developers who care about motion, depth and "
                "performance. We design and build interactive sites, dashboards and product "
                "visualizations from first sketch to production."
            </p>
        </section>
    }
}

/// Skill grid with a category filter.
#[component]
pub fn SkillsSection() -> impl IntoView {
    let filter = RwSignal::new(SkillFilter::All);

    let filter_button = move |target: SkillFilter, label: &'static str| {
        view! {
            <button
                class="skills__filter"
                class=("skills__filter--active", move || filter.get() == target)
                on:click=move |_| filter.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <section id="skills" class="section skills">
            <h2>"Skills"</h2>
            <div class="skills__filters">
                {filter_button(SkillFilter::All, "All")}
                {SkillCategory::ALL
                    .into_iter()
                    .map(|category| filter_button(SkillFilter::Only(category), category.label()))
                    .collect_view()}
            </div>
            <div class="skills__grid">
                {move || {
                    visible_skills(filter.get())
                        .map(|skill| {
                            view! {
                                <div class="skill-card">
                                    <div class="skill-card__header">
                                        <span class="skill-card__name">{skill.name}</span>
                                        <span class="skill-card__level">{format!("{}%", skill.level)}</span>
                                    </div>
                                    <div class="skill-card__bar">
                                        <div class="skill-card__fill" style=format!("width: {}%", skill.level)></div>
                                    </div>
                                    <p class="skill-card__description">{skill.description}</p>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="section projects">
            <h2>"Projects"</h2>
            <div class="projects__grid">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <article class="project-card">
                                <h3>{project.title}</h3>
                                <p>{project.description}</p>
                                <ul class="project-card__tags">
                                    {project.tags.iter().map(|tag| view! { <li>{*tag}</li> }).collect_view()}
                                </ul>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

fn experience_badge(kind: ExperienceKind) -> &'static str {
    match kind {
        ExperienceKind::Work => "Work",
        ExperienceKind::Education => "Education",
        ExperienceKind::Certification => "Certification",
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="section experience">
            <h2>"Experience"</h2>
            <ol class="timeline">
                {EXPERIENCE
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="timeline__item">
                                <span class="timeline__badge">{experience_badge(item.kind)}</span>
                                <h3>{item.title}</h3>
                                <p class="timeline__meta">{item.organization} " · " {item.period}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
