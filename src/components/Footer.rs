use crate::content::FOOTER_SECTIONS;
use crate::icons::{Icon, MAIL};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="contact" class="relative border-t border-edge/10 bg-background/80 backdrop-blur-lg overflow-hidden">
            // Top border with gradient
            <div class="absolute top-0 left-0 right-0 h-[1px] bg-gradient-to-r from-transparent via-primary/30 to-transparent"></div>

            <div class="max-w-7xl mx-auto px-6 py-16">
                <div class="grid grid-cols-1 gap-12 md:grid-cols-2 lg:grid-cols-4">
                    // Brand block
                    <div class="space-y-4">
                        <a href="/" class="flex items-center space-x-2">
                            <span class="text-2xl font-bold tracking-tighter bg-clip-text text-transparent bg-gradient-to-r from-primary to-accent">
                                "ADmyBRAND"
                            </span>
                            <span class="px-2 py-1 text-xs font-medium rounded-full bg-primary/10 text-primary">
                                "AI Suite"
                            </span>
                        </a>
                        <p class="text-sm text-muted">
                            "The most powerful AI marketing suite for modern businesses."
                        </p>
                        <SocialLinks/>
                    </div>

                    // Link columns
                    {FOOTER_SECTIONS
                        .iter()
                        .map(|section| {
                            view! {
                                <div class="space-y-4">
                                    <h3 class="text-sm font-semibold tracking-wider uppercase text-foreground/80">
                                        {section.title}
                                    </h3>
                                    <ul class="space-y-2">
                                        {section
                                            .links
                                            .iter()
                                            .copied()
                                            .map(|(name, href)| {
                                                view! {
                                                    <li>
                                                        <a
                                                            href=href
                                                            class="text-sm text-muted hover:text-primary transition-colors"
                                                        >
                                                            {name}
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <NewsletterForm/>

                // Bottom bar
                <div class="pt-12 mt-12 border-t border-edge/10">
                    <div class="flex flex-col items-center justify-between md:flex-row">
                        <p class="text-sm text-center text-muted md:text-left">
                            "Copyright 2025 ADmyBRAND AI Suite. All rights reserved."
                        </p>
                        <div class="flex gap-4 mt-4 md:mt-0">
                            <a href="#" class="text-sm text-muted hover:text-primary transition-colors">
                                "Privacy Policy"
                            </a>
                            <a href="#" class="text-sm text-muted hover:text-primary transition-colors">
                                "Terms of Service"
                            </a>
                            <a href="#" class="text-sm text-muted hover:text-primary transition-colors">
                                "Cookies"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn SocialLinks() -> impl IntoView {
    view! {
        <div class="flex space-x-4">
            <a
                href="mailto:hello@admybrand.ai"
                class="text-muted hover:text-primary transition-colors"
                aria-label="Email us"
            >
                <Icon path=MAIL class="w-5 h-5"/>
            </a>
            <a
                href="https://www.linkedin.com/company/admybrand"
                class="text-muted hover:text-primary transition-colors"
                aria-label="LinkedIn"
            >
                <svg class="w-5 h-5" fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                    <path d="M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433a2.062 2.062 0 01-2.063-2.065 2.064 2.064 0 112.063 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.225 0z"></path>
                </svg>
            </a>
            <a
                href="https://github.com/admybrand"
                class="text-muted hover:text-primary transition-colors"
                aria-label="GitHub"
            >
                <svg class="w-5 h-5" fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                    <path
                        fill-rule="evenodd"
                        d="M12 2C6.477 2 2 6.484 2 12.017c0 4.425 2.865 8.18 6.839 9.504.5.092.682-.217.682-.483 0-.237-.008-.868-.013-1.703-2.782.605-3.369-1.343-3.369-1.343-.454-1.158-1.11-1.466-1.11-1.466-.908-.62.069-.608.069-.608 1.003.07 1.531 1.032 1.531 1.032.892 1.53 2.341 1.088 2.91.832.092-.647.35-1.088.636-1.338-2.22-.253-4.555-1.113-4.555-4.951 0-1.093.39-1.988 1.029-2.688-.103-.253-.446-1.272.098-2.65 0 0 .84-.27 2.75 1.026A9.564 9.564 0 0112 6.844c.85.004 1.705.115 2.504.337 1.909-1.296 2.747-1.027 2.747-1.027.546 1.379.202 2.398.1 2.651.64.7 1.028 1.595 1.028 2.688 0 3.848-2.339 4.695-4.566 4.943.359.309.678.92.678 1.855 0 1.338-.012 2.419-.012 2.747 0 .268.18.58.688.482A10.019 10.019 0 0022 12.017C22 6.484 17.522 2 12 2z"
                        clip-rule="evenodd"
                    ></path>
                </svg>
            </a>
        </div>
    }
}

/// Presentational email capture. There is no backend contract; submitting
/// acknowledges locally and logs.
#[component]
pub fn NewsletterForm() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let subscribed = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log::info!("newsletter signup acknowledged");
        subscribed.set(true);
        email.set(String::new());
    };

    view! {
        <div class="mt-12 max-w-md">
            <h3 class="text-sm font-semibold tracking-wider uppercase text-foreground/80 mb-3">
                "Newsletter"
            </h3>
            <p class="text-sm text-muted mb-4">
                "Subscribe to our newsletter for the latest updates."
            </p>
            <form class="flex flex-col sm:flex-row gap-3" on:submit=on_submit>
                <input
                    type="email"
                    placeholder="Your email"
                    class="flex-grow px-4 py-2 text-sm border rounded-lg border-edge/20 bg-background/50 focus:ring-2 focus:ring-primary/50 focus:outline-none"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="px-6 py-2 text-sm font-semibold text-white rounded-lg bg-gradient-to-r from-primary to-accent hover:from-primary/90 hover:to-accent/90 transition-all"
                >
                    "Subscribe"
                </button>
            </form>
            <Show when=move || subscribed.get()>
                <p class="text-xs text-primary mt-3">"Thanks for subscribing!"</p>
            </Show>
        </div>
    }
}
