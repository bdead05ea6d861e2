use leptos::prelude::*;

use crate::{content::profile, display::initials};

use super::hooks::use_smooth_scroll;

#[component]
pub fn Footer() -> impl IntoView {
    let profile = profile();
    let scroller = use_smooth_scroll();
    // BUILD_TIME is RFC 3339, set by build.rs
    let year = env!("BUILD_TIME").get(..4).unwrap_or_default();

    view! {
        <footer class="py-12 px-6 border-t border-gray-800">
            <div class="max-w-6xl mx-auto flex flex-col md:flex-row items-center justify-between gap-6">
                <div class="text-center md:text-left">
                    <p class="font-mono text-electric font-bold text-xl">{initials(&profile.name)}</p>
                    <p class="text-gray-400 text-sm" data-testid="footer-copyright">
                        {format!("© {year} {}. All rights reserved.", profile.name)}
                    </p>
                </div>
                <div class="flex space-x-6">
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
                                >
                                    <i class=format!("{} text-xl", social.kind().icon_class()) />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="text-gray-400 hover:text-electric transition-colors duration-200"
                    on:click=move |_| scroller.to_top()
                    data-testid="button-back-to-top"
                >
                    "Back to top " <i class="extra-arrow-up" />
                </button>
            </div>
        </footer>
    }
}
