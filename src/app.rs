mod about;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
pub mod hooks;
mod nav;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::profile;

use about::About;
use contact::Contact;
use education::Education;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use hooks::use_inertia_scroll;
use nav::Navigation;
use projects::Projects;
use skills::Skills;

pub use contact::SendMessage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta name="description" content=profile().tagline.clone() />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-space text-white font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let name = &profile().name;

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

#[component]
fn Portfolio() -> impl IntoView {
    provide_context(use_inertia_scroll());

    view! {
        <Title text=profile().role.clone() />
        <div class="min-h-screen bg-space text-white overflow-x-hidden">
            <div class="fixed inset-0 grain-overlay pointer-events-none z-10 opacity-20" />
            <Navigation />
            <main class="fade-in">
                <Hero />
                <About />
                <Skills />
                <Experience />
                <Projects />
                <Education />
                <Contact />
                <Footer />
            </main>
        </div>
    }
}
