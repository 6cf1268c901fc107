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

use crate::accordion::{FaqFilter, OpenSet};
use crate::components::CTAButton::{ButtonVariant, CTAButton};
use crate::content::{FaqCategory, FaqEntry, FAQS};
use crate::icons::{Icon, BOLT, CHEVRON_DOWN, CIRCLE_STACK, CREDIT_CARD, HELP, SHIELD_CHECK};
use leptos::prelude::*;

static FILTERS: [(FaqFilter, &str); 5] = [
    (FaqFilter::All, HELP),
    (FaqFilter::Category(FaqCategory::General), HELP),
    (FaqFilter::Category(FaqCategory::Features), BOLT),
    (FaqFilter::Category(FaqCategory::Pricing), CREDIT_CARD),
    (FaqFilter::Category(FaqCategory::Technical), CIRCLE_STACK),
];

/// The first question starts expanded.
const DEFAULT_OPEN_ID: u32 = 1;

#[component]
pub fn FaqSection() -> impl IntoView {
    let filter = RwSignal::new(FaqFilter::All);
    // Open state is keyed by id, so switching filters never forgets which
    // hidden items were expanded.
    let open = RwSignal::new(OpenSet::with_open(DEFAULT_OPEN_ID));

    view! {
        <section class="relative py-24 lg:py-32 overflow-hidden">
            <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
                <div class="absolute top-1/4 left-1/4 w-96 h-96 rounded-full bg-primary/5 blur-3xl float-slow"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 rounded-full bg-accent/5 blur-3xl float-slower"></div>
            </div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="text-center mb-16 reveal">
                    <h2 class="text-4xl md:text-5xl font-bold tracking-tight mb-4">
                        <span class="gradient-heading">"Frequently Asked Questions"</span>
                    </h2>
                    <p class="text-xl text-muted max-w-3xl mx-auto">
                        "Get instant answers to common questions about ADmyBRAND AI Suite"
                    </p>
                </div>

                // Category filter
                <div class="flex flex-wrap justify-center gap-3 mb-12 reveal">
                    {FILTERS
                        .iter()
                        .copied()
                        .map(|(choice, icon)| {
                            view! {
                                <button
                                    class=move || {
                                        if filter.get() == choice {
                                            "inline-flex items-center px-4 py-2 rounded-lg text-sm font-medium bg-primary text-white shadow-md transition-all duration-300"
                                        } else {
                                            "inline-flex items-center px-4 py-2 rounded-lg text-sm font-medium bg-background/80 border border-edge/20 backdrop-blur-sm hover:bg-primary/10 hover:border-primary/40 transition-all duration-300"
                                        }
                                    }
                                    on:click=move |_| filter.set(choice)
                                >
                                    <Icon path=icon class="w-4 h-4 mr-2"/>
                                    {choice.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                // Accordion
                <div class="max-w-4xl mx-auto space-y-4">
                    {move || {
                        FAQS.iter()
                            .filter(|faq| filter.get().matches(faq.category))
                            .map(|faq| faq_item(faq, open))
                            .collect_view()
                    }}
                </div>

                <SupportCta/>
            </div>
        </section>
    }
}

type OpenSetSignal = RwSignal<OpenSet>;

fn faq_item(faq: &'static FaqEntry, open: OpenSetSignal) -> impl IntoView {
    let id = faq.id;
    let is_open = move || open.with(|set| set.is_open(id));

    view! {
        <div class=move || {
            format!(
                "bg-background/80 border border-edge/20 rounded-xl overflow-hidden backdrop-blur-sm hover:shadow-lg transition-all duration-300 {}",
                if is_open() { "shadow-md" } else { "" },
            )
        }>
            <button
                class="w-full px-6 py-5 text-left flex items-center justify-between hover:bg-primary/5 transition-colors duration-200"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| open.update(|set| set.toggle(id))
            >
                <h3 class="text-lg font-semibold pr-4">{faq.question}</h3>
                <div
                    class="w-5 h-5 text-primary flex-shrink-0 transition-transform duration-300"
                    class=("rotate-180", is_open)
                >
                    <Icon path=CHEVRON_DOWN class="w-5 h-5"/>
                </div>
            </button>

            <div class=move || {
                format!(
                    "transition-all duration-300 ease-in-out overflow-hidden {}",
                    if is_open() { "max-h-96 opacity-100" } else { "max-h-0 opacity-0" },
                )
            }>
                <div class="px-6 pb-5 border-t border-edge/20">
                    <p class="text-muted pt-4 leading-relaxed">{faq.answer}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SupportCta() -> impl IntoView {
    view! {
        <div class="text-center mt-16 reveal">
            <div class="card-panel p-8 max-w-2xl mx-auto shadow-xl">
                <h3 class="text-2xl font-bold mb-4">"Still have questions?"</h3>
                <p class="text-muted mb-6">
                    "Our support team is here to help you get the most out of ADmyBRAND AI Suite"
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <CTAButton href=Some("#contact".to_string())>"Contact Support"</CTAButton>
                    <CTAButton variant=ButtonVariant::Secondary href=Some("#contact".to_string())>
                        "Schedule a Demo"
                    </CTAButton>
                </div>
            </div>

            // Trust badges
            <div class="flex flex-wrap justify-center gap-6 mt-12 pt-8 border-t border-edge/20">
                <div class="flex items-center gap-2 text-muted">
                    <Icon path=SHIELD_CHECK class="h-5 w-5 text-primary"/>
                    <span>"Enterprise-grade Security"</span>
                </div>
                <div class="flex items-center gap-2 text-muted">
                    <Icon path=BOLT class="h-5 w-5 text-primary"/>
                    <span>"24/7 Support"</span>
                </div>
                <div class="flex items-center gap-2 text-muted">
                    <Icon path=CIRCLE_STACK class="h-5 w-5 text-primary"/>
                    <span>"99.9% Uptime"</span>
                </div>
            </div>
        </div>
    }
}
