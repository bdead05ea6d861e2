use leptos::prelude::*;

use crate::{content::profile, scroll::Section};

use super::{hooks::use_smooth_scroll, reveal::Reveal};

#[component]
pub fn Hero() -> impl IntoView {
    let profile = profile();
    let scroller = use_smooth_scroll();
    let (first, rest) = profile
        .name
        .split_once(' ')
        .unwrap_or((profile.name.as_str(), ""));

    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center relative overflow-hidden"
        >
            <div class="hero-glow absolute inset-0 pointer-events-none" />
            <div class="max-w-4xl mx-auto px-6 text-center relative z-20">
                <Reveal>
                    <p class="font-mono text-electric mb-4" data-testid="hero-greeting">
                        "Hi, my name is"
                    </p>
                    <h1 class="text-5xl md:text-7xl font-bold mb-6" data-testid="hero-name">
                        <span class="text-white">{first.to_string()}</span>
                        " "
                        <span class="text-gradient">{rest.to_string()}</span>
                    </h1>
                </Reveal>
                <Reveal delay_ms=200>
                    <h2 class="text-2xl md:text-3xl text-gray-300 mb-6" data-testid="hero-role">
                        {profile.role.clone()}
                    </h2>
                    <p class="text-lg text-gray-400 max-w-2xl mx-auto mb-10">
                        {profile.tagline.clone()}
                    </p>
                </Reveal>
                <Reveal delay_ms=400 class="flex flex-col sm:flex-row gap-4 justify-center mb-12">
                    <button
                        class="px-8 py-3 bg-electric text-space font-semibold rounded-lg hover:bg-neon transition-colors duration-200"
                        on:click=move |_| {
                            scroller.to_section(Section::Projects);
                        }
                        data-testid="button-view-work"
                    >
                        "View My Work"
                    </button>
                    {profile
                        .resume
                        .clone()
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    download=""
                                    class="px-8 py-3 border border-electric text-electric rounded-lg hover:bg-electric/10 transition-colors duration-200"
                                    data-testid="button-download-cv"
                                >
                                    "Download CV"
                                </a>
                            }
                        })}
                </Reveal>
                <Reveal delay_ms=600 class="flex justify-center space-x-6">
                    {profile
                        .socials
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.url.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=social.label.clone()
                                    class="text-gray-400 hover:text-electric transition-colors duration-200"
                                    data-testid=format!("hero-social-{}", social.label.to_lowercase())
                                >
                                    <i class=format!("{} text-2xl", social.kind().icon_class()) />
                                </a>
                            }
                        })
                        .collect_view()}
                </Reveal>
            </div>
            <button
                class="absolute bottom-8 left-1/2 -translate-x-1/2 text-gray-400 hover:text-electric animate-bounce"
                on:click=move |_| {
                    scroller.to_section(Section::About);
                }
                aria-label="Scroll to about"
                data-testid="scroll-indicator"
            >
                <i class="extra-chevron-down text-2xl" />
            </button>
        </section>
    }
}
