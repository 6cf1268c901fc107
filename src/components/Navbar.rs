/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use crate::content::NAV_LINKS;
use leptos::ev;
use leptos::prelude::*;

/// Fixed navigation bar. Transparent over the hero, gains a translucent
/// backdrop once the page scrolls past 10px.
#[component]
pub fn Navbar() -> impl IntoView {
    let scrolled = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    Effect::new(move |_| {
        let handle = window_event_listener(ev::scroll, move |_| {
            let y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            scrolled.set(y > 10.0);
        });
        on_cleanup(move || handle.remove());
    });

    view! {
        <header class=move || {
            format!(
                "fixed top-0 z-50 w-full transition-all duration-300 {}",
                if scrolled.get() {
                    "bg-background/80 backdrop-blur-lg border-b border-edge/10 shadow-sm"
                } else {
                    "bg-transparent"
                },
            )
        }>
            <div class="max-w-7xl mx-auto flex items-center justify-between h-20 px-4 sm:px-6">
                // Brand
                <a href="/" class="flex items-center space-x-2 transition-opacity hover:opacity-80">
                    <span class="text-2xl font-bold tracking-tighter bg-clip-text text-transparent bg-gradient-to-r from-primary to-accent">
                        "ADmyBRAND"
                    </span>
                    <span class="px-3 py-1 text-xs font-medium rounded-full bg-primary/10 text-primary">
                        "AI Suite"
                    </span>
                </a>

                // Desktop Navigation
                <nav class="hidden md:flex items-center space-x-1">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(name, href)| {
                            view! { <NavLink href=href text=name/> }
                        })
                        .collect_view()}
                </nav>

                // Right side actions
                <div class="flex items-center gap-4">
                    <a
                        href="#contact"
                        class="hidden md:inline-flex px-6 py-2.5 text-sm font-semibold text-white rounded-lg bg-gradient-to-r from-primary to-accent hover:from-primary/90 hover:to-accent/90 transition-all"
                    >
                        "Get Started"
                    </a>
                    <MobileMenuButton menu_open=menu_open/>
                </div>
            </div>

            <MobileMenu menu_open=menu_open/>
        </header>
    }
}

#[component]
fn NavLink(href: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            class="px-4 py-2 text-sm font-medium rounded-lg text-muted hover:text-primary hover:bg-primary/5 transition-colors duration-200"
        >
            {text}
        </a>
    }
}

#[component]
fn MobileMenuButton(menu_open: RwSignal<bool>) -> impl IntoView {
    view! {
        <button
            class="md:hidden p-2 text-muted hover:text-foreground transition-colors"
            on:click=move |_| menu_open.update(|open| *open = !*open)
            aria-label="Toggle navigation menu"
        >
            <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                <path
                    class=move || if menu_open.get() { "hidden" } else { "" }
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d="M4 6h16M4 12h16M4 18h16"
                ></path>
                <path
                    class=move || if menu_open.get() { "" } else { "hidden" }
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d="M6 18L18 6M6 6l12 12"
                ></path>
            </svg>
        </button>
    }
}

#[component]
fn MobileMenu(menu_open: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class=move || {
            format!(
                "md:hidden absolute top-full left-0 right-0 bg-background/95 backdrop-blur-lg border-b border-edge/20 transition-all duration-300 ease-out {}",
                if menu_open.get() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 -translate-y-2 pointer-events-none"
                },
            )
        }>
            <div class="px-4 py-6 space-y-3">
                {NAV_LINKS
                    .into_iter()
                    .map(|(name, href)| {
                        view! {
                            <a
                                href=href
                                class="block px-4 py-3 text-base font-medium rounded-lg hover:bg-primary/5 transition-colors"
                                on:click=move |_| menu_open.set(false)
                            >
                                {name}
                            </a>
                        }
                    })
                    .collect_view()}
                <a
                    href="#contact"
                    class="block px-4 py-3 text-base font-semibold text-center text-white rounded-lg bg-gradient-to-r from-primary to-accent"
                    on:click=move |_| menu_open.set(false)
                >
                    "Get Started"
                </a>
            </div>
        </div>
    }
}
