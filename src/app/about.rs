use leptos::prelude::*;

use crate::{content::profile, scroll::Section};

use super::reveal::Reveal;

#[component]
pub fn About() -> impl IntoView {
    let profile = profile();

    view! {
        <section id=Section::About.id() class="py-20 px-6">
            <div class="max-w-6xl mx-auto">
                <Reveal>
                    <h2 class="text-4xl font-bold text-center mb-16">
                        "About " <span class="text-gradient">"Me"</span>
                    </h2>
                </Reveal>
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <Reveal class="space-y-6">
                        {profile
                            .about
                            .iter()
                            .map(|para| {
                                view! {
                                    <p class="text-lg text-gray-300 leading-relaxed">{para.clone()}</p>
                                }
                            })
                            .collect_view()}
                    </Reveal>
                    <div class="grid grid-cols-2 gap-6">
                        {profile
                            .stats
                            .iter()
                            .enumerate()
                            .map(|(i, stat)| {
                                let delay = i as u32 * 100;
                                view! {
                                    <Reveal
                                        delay_ms=delay
                                        class="bg-charcoal p-6 rounded-xl border border-gray-800 text-center"
                                    >
                                        <div class="text-3xl font-bold text-electric mb-2">
                                            {stat.value.clone()}
                                        </div>
                                        <div class="text-gray-400">{stat.label.clone()}</div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
