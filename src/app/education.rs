use leptos::prelude::*;

use crate::{
    content::profile,
    display::{format_period, period_status, PRESENT},
    scroll::Section,
};

use super::reveal::Reveal;

#[component]
pub fn Education() -> impl IntoView {
    let profile = profile();

    view! {
        <section id=Section::Education.id() class="py-20 px-6">
            <div class="max-w-6xl mx-auto">
                <Reveal>
                    <h2 class="text-4xl font-bold text-center mb-16">
                        "Education & " <span class="text-gradient">"Certifications"</span>
                    </h2>
                </Reveal>
                <div class="grid lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-2 space-y-6">
                        {profile
                            .education
                            .iter()
                            .enumerate()
                            .map(|(i, edu)| {
                                let delay = i as u32 * 100;
                                let badge = if edu.end == PRESENT {
                                    "px-3 py-1 rounded-full text-xs bg-neon/20 text-neon"
                                } else {
                                    "px-3 py-1 rounded-full text-xs bg-electric/20 text-electric"
                                };
                                view! {
                                    <Reveal
                                        delay_ms=delay
                                        class="bg-charcoal p-6 rounded-xl border border-gray-800"
                                    >
                                        <div class="flex items-start justify-between gap-4">
                                            <div>
                                                <h3 class="text-xl font-bold">{edu.degree.clone()}</h3>
                                                <p class="text-electric">{edu.institution.clone()}</p>
                                                <p class="text-sm text-gray-400 font-mono mt-2">
                                                    {format_period(&edu.start, &edu.end)}
                                                </p>
                                            </div>
                                            <span class=badge>{period_status(&edu.end)}</span>
                                        </div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                        <Reveal class="bg-charcoal p-6 rounded-xl border border-gray-800">
                            <h3 class="text-xl font-bold mb-4">"Languages"</h3>
                            <div class="space-y-3">
                                {profile
                                    .languages
                                    .iter()
                                    .map(|lang| {
                                        let badge = format!(
                                            "px-3 py-1 rounded-full text-xs {}",
                                            lang.badge_class(),
                                        );
                                        view! {
                                            <div class="flex items-center justify-between">
                                                <span>{lang.name.clone()}</span>
                                                <span class=badge>{lang.level.clone()}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Reveal>
                    </div>
                    <div class="space-y-6">
                        {profile
                            .certifications
                            .iter()
                            .enumerate()
                            .map(|(i, cert)| {
                                let delay = i as u32 * 100;
                                view! {
                                    <Reveal
                                        delay_ms=delay
                                        class="bg-charcoal p-6 rounded-xl border border-gray-800"
                                    >
                                        <h3 class="font-bold mb-1">{cert.title.clone()}</h3>
                                        <p class="text-sm text-electric mb-2">{cert.issuer.clone()}</p>
                                        {cert
                                            .description
                                            .clone()
                                            .map(|d| view! { <p class="text-sm text-gray-400 mb-2">{d}</p> })}
                                        {cert
                                            .url
                                            .clone()
                                            .map(|href| {
                                                view! {
                                                    <a
                                                        href=href
                                                        target="_blank"
                                                        rel="noopener noreferrer"
                                                        class="text-sm text-neon hover:underline"
                                                    >
                                                        "View Certificate"
                                                    </a>
                                                }
                                            })}
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
