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

use crate::components::CTAButton::{ButtonSize, CTAButton};
use crate::content::{FeatureCard, FEATURES};
use crate::icons::{feature_icon, Icon, ARROW_RIGHT};
use leptos::prelude::*;

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="relative py-24 lg:py-32 overflow-hidden">
            <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
                <div class="absolute top-1/4 left-1/4 w-64 h-64 rounded-full bg-primary/5 blur-3xl float-slow"></div>
                <div class="absolute bottom-1/4 right-1/4 w-64 h-64 rounded-full bg-accent/5 blur-3xl float-slower"></div>
            </div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="text-center mb-16 reveal">
                    <h2 class="text-4xl md:text-5xl font-bold tracking-tight mb-4">
                        <span class="gradient-heading">"Powerful Features"</span>
                    </h2>
                    <p class="text-xl text-muted max-w-3xl mx-auto">
                        "Everything you need to transform your marketing with AI-powered precision."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {FEATURES.iter().map(feature_card).collect_view()}
                </div>

                <div class="text-center mt-16 reveal">
                    <CTAButton size=ButtonSize::Large href=Some("#pricing".to_string())>
                        "Explore Features"
                    </CTAButton>
                </div>
            </div>
        </section>
    }
}

fn feature_card(card: &'static FeatureCard) -> impl IntoView {
    let icon_class = if card.highlight {
        "p-3 rounded-lg mt-1 bg-primary/10 text-primary"
    } else {
        "p-3 rounded-lg mt-1 bg-surface text-foreground"
    };
    let card_class = if card.highlight {
        "card-panel h-full group hover:-translate-y-1 shadow-md"
    } else {
        "card-panel h-full group hover:-translate-y-1 shadow-sm"
    };

    view! {
        <div class=format!("{card_class} reveal")>
            <div class="absolute inset-0 bg-gradient-to-br from-primary/5 to-accent/5 opacity-0 group-hover:opacity-100 transition-opacity duration-300 rounded-xl"></div>
            <div class="relative z-10">
                <div class="flex items-start gap-4 pb-3">
                    <div class=icon_class>
                        <Icon path=feature_icon(card.icon) class="h-6 w-6"/>
                    </div>
                    <h3 class="text-lg font-semibold pt-3">{card.title}</h3>
                </div>
                <p class="text-muted text-left">{card.description}</p>
                <a
                    href="#pricing"
                    class="inline-flex items-center mt-4 text-sm font-medium text-primary hover:text-primary/80 transition-colors"
                >
                    "Learn more"
                    <Icon path=ARROW_RIGHT class="ml-1 h-4 w-4"/>
                </a>
            </div>
        </div>
    }
}
