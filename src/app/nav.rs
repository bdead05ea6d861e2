use leptos::{either::Either, prelude::*};

use crate::{
    content::profile,
    display::initials,
    scroll::{ScrollLock, Section},
};

use super::hooks::{use_page_scroll, use_scroll_progress, use_smooth_scroll, PageScroll};

#[component]
pub fn Navigation() -> impl IntoView {
    let progress = use_scroll_progress();
    let scroller = use_smooth_scroll();
    let page = use_page_scroll();
    let (is_open, set_is_open) = signal(false);

    // the page can't scroll behind the open mobile menu; dropping the lock,
    // including on unmount, restores it
    let lock = StoredValue::new(None::<ScrollLock<PageScroll>>);
    Effect::new(move |_| {
        let open = is_open.get();
        lock.try_update_value(|slot| match (open, slot.is_some()) {
            (true, false) => *slot = Some(ScrollLock::acquire(page)),
            (false, true) => *slot = None,
            _ => {}
        });
    });

    let go = move |section: Section| {
        if scroller.to_section(section) {
            set_is_open.set(false);
        }
    };

    view! {
        <nav class="fixed top-0 w-full z-50 bg-space/80 backdrop-blur-md border-b border-gray-800">
            <div
                class="scroll-progress fixed top-0 left-0 h-1 z-50"
                style=move || format!("width: {}%", progress.get())
                data-testid="scroll-progress"
            />
            <div class="max-w-7xl mx-auto px-6 py-4 h-16 flex items-center">
                <div class="flex items-center justify-between w-full">
                    <button
                        class="font-mono text-electric font-bold text-xl"
                        on:click=move |_| scroller.to_top()
                        data-testid="logo"
                    >
                        {initials(&profile().name)}
                    </button>
                    <div class="hidden md:flex space-x-8 h-10 items-center">
                        {Section::NAV
                            .into_iter()
                            .map(move |section| {
                                view! {
                                    <button
                                        class="text-gray-300 hover:text-electric transition-colors duration-200"
                                        on:click=move |_| go(section)
                                        data-testid=format!("nav-{}", section.id())
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="md:hidden p-2"
                        on:click=move |_| set_is_open.update(|open| *open = !*open)
                        aria-label="Toggle mobile menu"
                        data-testid="mobile-menu-toggle"
                    >
                        {move || {
                            if is_open.get() {
                                Either::Left(view! { <i class="extra-close text-2xl" /> })
                            } else {
                                Either::Right(view! { <i class="extra-menu text-2xl" /> })
                            }
                        }}
                    </button>
                </div>
            </div>
            <div class=move || {
                format!(
                    "fixed inset-0 z-40 bg-space/95 backdrop-blur-md md:hidden {}",
                    if is_open.get() { "block" } else { "hidden" },
                )
            }>
                <div class="flex flex-col items-center justify-center h-full space-y-8">
                    {Section::NAV
                        .into_iter()
                        .map(move |section| {
                            view! {
                                <button
                                    class="text-2xl text-gray-300 hover:text-electric transition-colors duration-200"
                                    on:click=move |_| go(section)
                                    data-testid=format!("mobile-nav-{}", section.id())
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
