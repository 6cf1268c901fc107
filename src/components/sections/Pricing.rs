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
use crate::icons::{Icon, StarIcon, ARROW_RIGHT, BADGE_CHECK, CHECK_CIRCLE};
use crate::pricing::{
    custom_price, format_dollars, format_thousands, recommend, BillingPeriod, PlanCard, Tier,
    UsageInput, AI_WORDS_MAX, AI_WORDS_MIN, AI_WORDS_STEP, PLANS, USER_SEATS_MAX, USER_SEATS_MIN,
};
use leptos::prelude::*;

#[component]
pub fn PricingSection() -> impl IntoView {
    let period = RwSignal::new(BillingPeriod::Annual);
    let ai_words = RwSignal::new(50_000u32);
    let user_seats = RwSignal::new(5u32);

    // Inputs come from range controls, but re-clamp anyway so the functions
    // downstream stay total.
    let usage = Memo::new(move |_| UsageInput::new(ai_words.get(), user_seats.get()));
    let recommended = Memo::new(move |_| recommend(usage.get()));

    view! {
        <section class="relative py-24 lg:py-32 overflow-hidden">
            <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
                <div class="absolute top-1/3 left-1/4 w-80 h-80 rounded-full bg-primary/5 blur-3xl float-slow"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 rounded-full bg-accent/5 blur-3xl float-slower"></div>
            </div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="text-center mb-16 reveal">
                    <h2 class="text-4xl md:text-5xl font-bold tracking-tight mb-4">
                        <span class="gradient-heading">"Pricing That Scales With You"</span>
                    </h2>
                    <p class="text-xl text-muted max-w-3xl mx-auto">
                        "Choose the perfect plan for your business needs. Cancel anytime."
                    </p>

                    <BillingToggle period=period/>
                </div>

                <PricingCalculator
                    period=period
                    ai_words=ai_words
                    user_seats=user_seats
                    usage=usage
                    recommended=recommended
                />

                // Plan cards
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6 max-w-6xl mx-auto">
                    {PLANS
                        .iter()
                        .map(|plan| view! { <PlanCardView plan=plan period=period recommended=recommended/> })
                        .collect_view()}
                </div>

                <EnterpriseCta/>
            </div>
        </section>
    }
}

#[component]
fn BillingToggle(period: RwSignal<BillingPeriod>) -> impl IntoView {
    let monthly = move || period.get() == BillingPeriod::Monthly;
    view! {
        <div class="flex items-center justify-center gap-4 mt-8">
            <span class="text-lg font-medium">"Annual"</span>
            <button
                role="switch"
                aria-checked=move || monthly().to_string()
                aria-label="Toggle monthly billing"
                class=move || {
                    format!(
                        "relative inline-flex h-6 w-11 items-center rounded-full transition-colors {}",
                        if monthly() { "bg-primary" } else { "bg-edge/40" },
                    )
                }
                on:click=move |_| {
                    period
                        .update(|p| {
                            *p = match p {
                                BillingPeriod::Annual => BillingPeriod::Monthly,
                                BillingPeriod::Monthly => BillingPeriod::Annual,
                            }
                        })
                }
            >
                <span class=move || {
                    format!(
                        "inline-block h-4 w-4 transform rounded-full bg-white transition-transform {}",
                        if monthly() { "translate-x-6" } else { "translate-x-1" },
                    )
                }></span>
            </button>
            <span class="text-lg font-medium">"Monthly"</span>
            <Show when=move || !monthly()>
                <span class="px-3 py-1 text-sm font-medium rounded-full bg-success/10 text-success flex items-center">
                    <StarIcon class="h-3 w-3 mr-1"/>
                    "Save up to 20%"
                </span>
            </Show>
        </div>
    }
}

#[component]
fn PricingCalculator(
    period: RwSignal<BillingPeriod>,
    ai_words: RwSignal<u32>,
    user_seats: RwSignal<u32>,
    usage: Memo<UsageInput>,
    recommended: Memo<Tier>,
) -> impl IntoView {
    let annual = move || period.get() == BillingPeriod::Annual;

    view! {
        <div class="card-panel p-8 mb-16 reveal">
            <h3 class="text-2xl font-bold mb-6 flex items-center gap-2">
                <Icon path=BADGE_CHECK class="h-6 w-6 text-primary"/>
                <span>"Custom Pricing Calculator"</span>
            </h3>

            <div class="grid md:grid-cols-2 gap-8">
                <div>
                    <div class="mb-6">
                        <div class="flex justify-between items-center mb-2">
                            <span class="text-base font-medium">"AI Words Per Month"</span>
                            <span class="text-primary font-medium">
                                {move || format_thousands(usage.get().ai_words)}
                            </span>
                        </div>
                        <input
                            id="ai-words"
                            type="range"
                            aria-label="AI words per month"
                            class="slider w-full"
                            min=AI_WORDS_MIN.to_string()
                            max=AI_WORDS_MAX.to_string()
                            step=AI_WORDS_STEP.to_string()
                            prop:value=move || ai_words.get().to_string()
                            on:input=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                    ai_words.set(value);
                                }
                            }
                        />
                        <div class="flex justify-between text-sm text-muted mt-1">
                            <span>"10K"</span>
                            <span>"500K+"</span>
                        </div>
                    </div>

                    <div class="mb-6">
                        <div class="flex justify-between items-center mb-2">
                            <span class="text-base font-medium">"User Seats"</span>
                            <span class="text-primary font-medium">
                                {move || usage.get().user_seats}
                            </span>
                        </div>
                        <input
                            id="user-seats"
                            type="range"
                            aria-label="User seats"
                            class="slider w-full"
                            min=USER_SEATS_MIN.to_string()
                            max=USER_SEATS_MAX.to_string()
                            step="1"
                            prop:value=move || user_seats.get().to_string()
                            on:input=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                    user_seats.set(value);
                                }
                            }
                        />
                        <div class="flex justify-between text-sm text-muted mt-1">
                            <span>"1"</span>
                            <span>"50+"</span>
                        </div>
                    </div>
                </div>

                <div class="bg-surface/60 rounded-lg p-6 flex flex-col justify-between">
                    <div>
                        <h4 class="font-semibold text-lg mb-2">"Recommended Plan"</h4>
                        <div class="flex items-center gap-2 mb-4">
                            <div class=move || {
                                format!(
                                    "px-3 py-1 rounded-full text-sm font-medium {}",
                                    match recommended.get() {
                                        Tier::Enterprise => "bg-accent/10 text-accent",
                                        Tier::Professional => "bg-primary/10 text-primary",
                                        Tier::Starter => "bg-success/10 text-success",
                                    },
                                )
                            }>{move || recommended.get().name()}</div>
                            <Show when=move || {
                                annual() && recommended.get().annual_savings().is_some()
                            }>
                                <div class="text-sm text-muted">
                                    {move || {
                                        recommended
                                            .get()
                                            .annual_savings()
                                            .map(|saved| format!("Save ${saved} annually"))
                                    }}
                                </div>
                            </Show>
                        </div>

                        {move || match recommended.get().monthly_price(period.get()) {
                            None => {
                                view! {
                                    <p class="text-muted">
                                        "Your usage requires custom enterprise pricing with unlimited scaling options."
                                    </p>
                                }
                                    .into_any()
                            }
                            Some(price) => {
                                let tier = recommended.get();
                                view! {
                                    <div>
                                        <div class="flex items-end gap-2 mb-2">
                                            <span class="text-3xl font-bold">{format!("${price}")}</span>
                                            <span class="text-muted">{period.get().caption()}</span>
                                        </div>
                                        <p class="text-muted text-sm">
                                            {tier
                                                .included()
                                                .map(|(words, seats)| {
                                                    format!(
                                                        "Includes {} AI words and {seats} users",
                                                        format_thousands(words),
                                                    )
                                                })}
                                        </p>
                                    </div>
                                }
                                    .into_any()
                            }
                        }}

                        <p class="text-sm text-muted mt-4">
                            "Usage-based estimate: "
                            <span class="text-foreground font-medium">
                                {move || format_dollars(custom_price(usage.get()))}
                            </span>
                            "/mo on a pay-as-you-go basis."
                        </p>
                    </div>

                    <CTAButton
                        size=ButtonSize::Large
                        class="w-full mt-6 justify-center"
                        href=Some("#contact".to_string())
                    >
                        {move || {
                            if recommended.get() == Tier::Enterprise {
                                "Contact Sales"
                            } else {
                                "Get Started"
                            }
                        }}
                        <Icon path=ARROW_RIGHT class="ml-2 h-4 w-4"/>
                    </CTAButton>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PlanCardView(
    plan: &'static PlanCard,
    period: RwSignal<BillingPeriod>,
    recommended: Memo<Tier>,
) -> impl IntoView {
    let tier = plan.tier;
    let is_recommended = move || recommended.get() == tier;
    let annual = move || period.get() == BillingPeriod::Annual;

    let border_class = if plan.popular {
        "border-primary/30"
    } else if plan.featured {
        "border-accent/30"
    } else {
        "border-edge/20"
    };

    let button_variant = if plan.popular {
        ButtonVariant::Primary
    } else if plan.featured {
        ButtonVariant::Featured
    } else {
        ButtonVariant::Secondary
    };

    view! {
        <div class="relative reveal">
            <Show when=is_recommended>
                <div class="absolute -top-3 left-1/2 -translate-x-1/2 bg-success text-white px-4 py-1 rounded-full text-sm font-medium flex items-center z-20">
                    <StarIcon class="h-3 w-3 mr-1"/>
                    "Recommended"
                </div>
            </Show>

            <div class=move || {
                format!(
                    "h-full border-2 rounded-xl bg-background/80 backdrop-blur-sm relative overflow-hidden group transition-all hover:shadow-xl hover:scale-[1.02] shadow-lg {border_class} {}",
                    if is_recommended() { "ring-2 ring-success/30" } else { "" },
                )
            }>
                {plan
                    .popular
                    .then(|| {
                        view! {
                            <div class="absolute top-4 right-4 bg-primary text-white px-3 py-1 rounded-full text-xs font-medium z-10">
                                "Most Popular"
                            </div>
                        }
                    })}
                {plan
                    .featured
                    .then(|| {
                        view! {
                            <div class="absolute top-4 right-4 bg-accent text-white px-3 py-1 rounded-full text-xs font-medium z-10">
                                "Premium"
                            </div>
                        }
                    })}

                <div class="absolute inset-0 bg-gradient-to-br from-primary/5 to-accent/5 opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>

                <div class="pt-12 pb-6 px-6 border-b border-edge/20 relative z-10">
                    <h3 class="text-2xl font-bold">{tier.name()}</h3>

                    <div class="flex items-end gap-2 mt-2">
                        <span class="text-4xl font-bold">
                            {move || match tier.monthly_price(period.get()) {
                                Some(price) => format!("${price}"),
                                None => "Custom".to_string(),
                            }}
                        </span>
                        <Show when=move || tier.monthly_price(period.get()).is_some()>
                            <span class="text-muted text-sm mb-1">
                                {move || period.get().caption()}
                            </span>
                        </Show>
                    </div>

                    <Show when=move || annual() && tier.annual_savings().is_some()>
                        <div class="text-sm text-success mt-1">
                            {move || {
                                tier.annual_savings().map(|saved| format!("Save ${saved} annually"))
                            }}
                        </div>
                    </Show>

                    <p class="text-base text-muted mt-2">{plan.description}</p>
                </div>

                <div class="py-6 px-6 relative z-10">
                    <ul class="space-y-3">
                        {plan
                            .features
                            .iter()
                            .copied()
                            .map(|feature| {
                                view! {
                                    <li class="flex items-start gap-3">
                                        <Icon
                                            path=CHECK_CIRCLE
                                            class="h-5 w-5 text-success mt-0.5 flex-shrink-0"
                                        />
                                        <span class="text-foreground/90">{feature}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="px-6 pb-6 relative z-10">
                    <CTAButton
                        variant=button_variant
                        size=ButtonSize::Medium
                        class="w-full justify-center"
                        href=Some("#contact".to_string())
                    >
                        {plan.cta}
                    </CTAButton>
                </div>
            </div>
        </div>
    }
}

#[component]
fn EnterpriseCta() -> impl IntoView {
    view! {
        <div class="text-center mt-16 reveal">
            <div class="card-panel p-8 max-w-3xl mx-auto">
                <h3 class="text-2xl font-bold mb-2">"Need custom enterprise solutions?"</h3>
                <p class="text-muted mb-6 max-w-2xl mx-auto">
                    "Our team will create a tailored package with premium support, custom AI models, and dedicated infrastructure."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <CTAButton
                        variant=ButtonVariant::Featured
                        size=ButtonSize::Large
                        href=Some("#contact".to_string())
                    >
                        "Request Enterprise Demo"
                    </CTAButton>
                    <CTAButton
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Large
                        href=Some("#contact".to_string())
                    >
                        "Contact Sales"
                    </CTAButton>
                </div>
            </div>

            // Trust badges
            <div class="flex flex-wrap justify-center gap-6 mt-12">
                <div class="flex items-center gap-2 text-muted">
                    <Icon path=CHECK_CIRCLE class="h-4 w-4 text-success"/>
                    <span>"30-day money-back guarantee"</span>
                </div>
                <div class="flex items-center gap-2 text-muted">
                    <Icon path=CHECK_CIRCLE class="h-4 w-4 text-success"/>
                    <span>"No hidden fees"</span>
                </div>
                <div class="flex items-center gap-2 text-muted">
                    <Icon path=CHECK_CIRCLE class="h-4 w-4 text-success"/>
                    <span>"Cancel anytime"</span>
                </div>
            </div>
        </div>
    }
}
