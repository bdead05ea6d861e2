use leptos::prelude::*;

use crate::{
    content::profile,
    display::{format_period, palette_class, period_status, PRESENT, TIMELINE_PALETTE},
    scroll::Section,
};

use super::reveal::Reveal;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id=Section::Experience.id() class="py-20 px-6">
            <div class="max-w-4xl mx-auto">
                <Reveal>
                    <h2 class="text-4xl font-bold text-center mb-16">
                        "Work " <span class="text-gradient">"Experience"</span>
                    </h2>
                </Reveal>
                <div class="relative border-l-2 border-electric/30 ml-4 space-y-12">
                    {profile()
                        .experience
                        .iter()
                        .enumerate()
                        .map(|(i, exp)| {
                            let delay = i as u32 * 150;
                            let dot = if exp.end == PRESENT {
                                "absolute -left-[9px] top-2 w-4 h-4 rounded-full bg-neon"
                            } else {
                                "absolute -left-[9px] top-2 w-4 h-4 rounded-full bg-electric"
                            };
                            view! {
                                <Reveal delay_ms=delay class="relative pl-8">
                                    <span class=dot />
                                    <div class="bg-charcoal p-6 rounded-xl border border-gray-800">
                                        <div class="flex flex-col md:flex-row md:items-center md:justify-between mb-4">
                                            <div>
                                                <h3 class="text-xl font-bold">{exp.role.clone()}</h3>
                                                <p class="text-electric">{exp.company.clone()}</p>
                                            </div>
                                            <div class="text-sm text-gray-400 mt-2 md:mt-0 md:text-right">
                                                <p class="font-mono">{format_period(&exp.start, &exp.end)}</p>
                                                <p>{period_status(&exp.end)}</p>
                                            </div>
                                        </div>
                                        <ul class="list-disc list-inside text-gray-300 space-y-2 mb-4">
                                            {exp
                                                .bullets
                                                .iter()
                                                .map(|bullet| view! { <li>{bullet.clone()}</li> })
                                                .collect_view()}
                                        </ul>
                                        <div class="flex flex-wrap gap-2">
                                            {exp
                                                .tech
                                                .iter()
                                                .enumerate()
                                                .map(|(j, tech)| {
                                                    let chip = format!(
                                                        "px-3 py-1 rounded-full text-sm {}",
                                                        palette_class(&TIMELINE_PALETTE, j),
                                                    );
                                                    view! { <span class=chip>{tech.clone()}</span> }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
