use leptos::{either::Either, prelude::*};

use crate::{
    content::{profile, Project},
    display::{palette_class, slug, PROJECT_GRADIENTS, TECH_PALETTE},
    scroll::{ScrollLock, Section},
    selection::ProjectSelection,
};

use super::{
    hooks::{use_page_scroll, PageScroll},
    reveal::Reveal,
};

#[component]
pub fn Projects() -> impl IntoView {
    let (selection, set_selection) = signal(ProjectSelection::default());
    let dismiss = Callback::new(move |_: ()| set_selection.update(ProjectSelection::dismiss));

    view! {
        <section id=Section::Projects.id() class="py-20 px-6 bg-charcoal/30">
            <div class="max-w-6xl mx-auto">
                <Reveal>
                    <h2 class="text-4xl font-bold text-center mb-16">
                        "Featured " <span class="text-gradient">"Projects"</span>
                    </h2>
                </Reveal>
                <div class="grid md:grid-cols-2 gap-8">
                    {profile()
                        .projects
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            let delay = i as u32 * 100;
                            view! {
                                <Reveal delay_ms=delay>
                                    <ProjectCard
                                        project=project
                                        index=i
                                        on_select=Callback::new(move |p: Project| {
                                            set_selection.update(|s| s.select(p))
                                        })
                                    />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            {move || {
                selection
                    .with(|s| s.project().cloned())
                    .map(|project| view! { <ProjectModal project on_close=dismiss /> })
            }}
        </section>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    index: usize,
    on_select: Callback<Project>,
) -> impl IntoView {
    let banner = match &project.image {
        Some(src) => Either::Left(view! {
            <img
                src=src.clone()
                alt=project.title.clone()
                class="w-full h-48 object-cover"
                loading="lazy"
            />
        }),
        None => {
            let gradient = format!(
                "h-48 bg-gradient-to-br {} flex items-center justify-center",
                palette_class(&PROJECT_GRADIENTS, index),
            );
            Either::Right(view! {
                <div class=gradient>
                    <i class="extra-code text-5xl text-electric/60" />
                </div>
            })
        }
    };

    view! {
        <div
            class="project-card bg-charcoal rounded-xl border border-gray-800 overflow-hidden cursor-pointer hover:border-electric transition-colors duration-200"
            on:click=move |_| on_select.run(project.clone())
            data-testid=format!("project-{}", slug(&project.title))
        >
            {banner}
            <div class="p-6">
                <div class="flex items-start justify-between mb-3">
                    <h3 class="text-xl font-bold">{project.title.clone()}</h3>
                    <div class="flex space-x-3">
                        {project
                            .github()
                            .map(|href| {
                                view! {
                                    <a
                                        href=href.to_string()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label="Source code"
                                        class="text-gray-400 hover:text-electric"
                                        on:click=|ev| ev.stop_propagation()
                                    >
                                        <i class="devicon-github-plain" />
                                    </a>
                                }
                            })}
                        {project
                            .other_links()
                            .map(|(name, href)| {
                                view! {
                                    <a
                                        href=href.to_string()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=name.to_string()
                                        class="text-gray-400 hover:text-electric"
                                        on:click=|ev| ev.stop_propagation()
                                    >
                                        <i class="extra-external-link" />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <p class="text-gray-300 mb-4">{project.summary.clone()}</p>
                <TechChips tech=project.tech.as_slice() />
                <div class="flex flex-wrap gap-2 mt-3">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! { <span class="text-xs font-mono text-gray-500">"#"{tag.clone()}</span> }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn TechChips(tech: &'static [String]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {tech
                .iter()
                .enumerate()
                .map(|(i, t)| {
                    let chip = format!(
                        "px-3 py-1 rounded-full text-sm {}",
                        palette_class(&TECH_PALETTE, i),
                    );
                    view! { <span class=chip>{t.clone()}</span> }
                })
                .collect_view()}
        </div>
    }
}

/// Detail overlay. Clicking the backdrop or the close button dismisses it;
/// clicks inside the panel don't reach the backdrop.
#[component]
fn ProjectModal(project: Project, on_close: Callback<()>) -> impl IntoView {
    // held for as long as the modal is mounted
    let page = use_page_scroll();
    let lock = StoredValue::new(None::<ScrollLock<PageScroll>>);
    Effect::new(move |_| {
        lock.try_update_value(|slot| *slot = Some(ScrollLock::acquire(page)));
    });

    let Project {
        title,
        summary,
        description,
        features,
        challenges,
        solution,
        tech,
        ..
    } = project;

    view! {
        <div
            class="modal-overlay fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/70 backdrop-blur-sm"
            on:click=move |_| on_close.run(())
            data-testid="project-modal-overlay"
        >
            <div
                class="bg-charcoal rounded-2xl border border-gray-800 max-w-3xl w-full max-h-[90vh] overflow-y-auto p-8 relative"
                on:click=|ev| ev.stop_propagation()
                data-testid="project-modal"
            >
                <button
                    class="absolute top-4 right-4 text-gray-400 hover:text-white"
                    on:click=move |_| on_close.run(())
                    aria-label="Close"
                    data-testid="project-modal-close"
                >
                    <i class="extra-close text-2xl" />
                </button>
                <h3 class="text-3xl font-bold mb-4 text-gradient">{title}</h3>
                <p class="text-gray-300 mb-6">{description.unwrap_or(summary)}</p>
                {(!features.as_deref().unwrap_or_default().is_empty())
                    .then(|| {
                        view! {
                            <div class="mb-6">
                                <h4 class="text-xl font-semibold mb-3 text-electric">"Key Features"</h4>
                                <ul class="list-disc list-inside text-gray-300 space-y-1">
                                    {features
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(|f| view! { <li>{f}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })}
                <div class="mb-6">
                    <h4 class="text-xl font-semibold mb-3 text-electric">"Technologies"</h4>
                    <div class="flex flex-wrap gap-2">
                        {tech
                            .into_iter()
                            .enumerate()
                            .map(|(i, t)| {
                                let chip = format!(
                                    "px-3 py-1 rounded-full text-sm {}",
                                    palette_class(&TECH_PALETTE, i),
                                );
                                view! { <span class=chip>{t}</span> }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="grid md:grid-cols-2 gap-6">
                    {challenges
                        .map(|c| {
                            view! {
                                <div>
                                    <h4 class="text-lg font-semibold mb-2 text-neon">"Challenges"</h4>
                                    <p class="text-gray-300">{c}</p>
                                </div>
                            }
                        })}
                    {solution
                        .map(|s| {
                            view! {
                                <div>
                                    <h4 class="text-lg font-semibold mb-2 text-neon">"Solution"</h4>
                                    <p class="text-gray-300">{s}</p>
                                </div>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
