use leptos::prelude::*;

use crate::{
    content::profile,
    display::slug,
    filter::{filter_skills, SkillFilter},
    scroll::Section,
};

use super::reveal::Reveal;

#[component]
pub fn Skills() -> impl IntoView {
    let skills = &profile().skills;
    let (active, set_active) = signal(SkillFilter::default());
    let visible = Memo::new(move |_| filter_skills(skills, active.get()));

    view! {
        <section id=Section::Skills.id() class="py-20 px-6 bg-charcoal/30">
            <div class="max-w-6xl mx-auto">
                <Reveal>
                    <h2 class="text-4xl font-bold text-center mb-12">
                        "Technical " <span class="text-gradient">"Skills"</span>
                    </h2>
                </Reveal>
                <div class="flex flex-wrap justify-center gap-3 mb-12">
                    {SkillFilter::options()
                        .map(|filter| {
                            view! {
                                <button
                                    class=move || {
                                        if active.get() == filter {
                                            "px-5 py-2 rounded-full bg-electric text-space font-semibold transition-colors duration-200"
                                        } else {
                                            "px-5 py-2 rounded-full bg-charcoal text-gray-300 hover:text-electric transition-colors duration-200"
                                        }
                                    }
                                    on:click=move |_| set_active.set(filter)
                                    data-testid=format!("filter-{}", filter.key())
                                >
                                    {filter.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid grid-cols-2 md:grid-cols-4 lg:grid-cols-6 gap-6">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(i, skill)| {
                                let delay = i as u32 * 50;
                                let card = format!(
                                    "skill-card bg-charcoal p-6 rounded-xl border border-gray-800 text-center transition-colors duration-200 {}",
                                    skill.accent(),
                                );
                                let icon = format!("{} text-4xl mb-4 block", skill.icon_classes());
                                let testid = format!("skill-{}", slug(&skill.name));
                                view! {
                                    <Reveal delay_ms=delay class=card>
                                        <div data-testid=testid>
                                            <i class=icon />
                                            <h3 class="font-semibold">{skill.name}</h3>
                                        </div>
                                    </Reveal>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}
