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

use crate::components::CTAButton::{ButtonSize, ButtonVariant, CTAButton};
use crate::content::HERO_FEATURES;
use crate::icons::{feature_icon, Icon};
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative py-32 lg:py-48 overflow-hidden">
            // Decorative background blobs
            <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
                <div class="absolute top-1/4 -left-20 w-96 h-96 rounded-full bg-primary/5 blur-3xl float-slow"></div>
                <div class="absolute bottom-1/3 -right-20 w-96 h-96 rounded-full bg-accent/5 blur-3xl float-slower"></div>
            </div>

            <div class="max-w-6xl mx-auto text-center relative z-10 px-4 sm:px-6 lg:px-8">
                <div class="mb-16 reveal">
                    <h1 class="text-5xl sm:text-6xl md:text-7xl font-bold tracking-tight leading-tight">
                        <span class="bg-clip-text text-transparent bg-gradient-to-r from-foreground via-primary to-accent">
                            "Transform Your Marketing"
                        </span>
                        <br/>
                        <span class="text-primary">"With AI Power"</span>
                    </h1>
                    <div class="mt-8 h-1 bg-gradient-to-r from-transparent via-primary/80 to-transparent opacity-50 mx-auto max-w-xl"></div>
                </div>

                // Feature chips
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-4 mb-20 reveal">
                    {HERO_FEATURES
                        .into_iter()
                        .map(|(icon, label)| {
                            view! {
                                <div class="p-6 bg-background/80 border border-edge/20 rounded-xl backdrop-blur-sm hover:border-primary/40 hover:-translate-y-2 transition-all group">
                                    <div class="flex flex-col items-center gap-3">
                                        <Icon path=feature_icon(icon) class="h-8 w-8 text-primary"/>
                                        <span class="text-sm font-medium">{label}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                // CTA block
                <div class="flex flex-col items-center reveal">
                    <p class="text-xl text-muted max-w-2xl mx-auto mb-10 leading-relaxed">
                        "ADmyBRAND AI Suite delivers "
                        <span class="text-primary font-medium">"data-driven marketing solutions"</span>
                        " that increase conversions and ROI through intelligent automation and predictive analytics."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <CTAButton size=ButtonSize::Large href=Some("#pricing".to_string())>
                            "Get Started Free"
                        </CTAButton>
                        <CTAButton
                            variant=ButtonVariant::Secondary
                            size=ButtonSize::Large
                            href=Some("#blog".to_string())
                        >
                            "See Live Demo"
                        </CTAButton>
                    </div>

                    <p class="mt-6 text-sm text-muted">
                        "No credit card required. 14-day free trial."
                    </p>
                </div>
            </div>
        </section>
    }
}
