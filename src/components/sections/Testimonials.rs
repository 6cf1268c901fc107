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

use crate::carousel::{Carousel, AUTO_ADVANCE_MS};
use crate::content::{Testimonial, TESTIMONIALS};
use crate::icons::{Icon, StarIcon, BADGE_CHECK, CHEVRON_LEFT, CHEVRON_RIGHT};
use crate::visibility::{observe_visibility, VisibilityObserver};
use gloo_timers::callback::Interval;
use leptos::html::Section;
use leptos::prelude::*;

/// How much of the section must be visible before the rotation timer runs.
const IN_VIEW_THRESHOLD: f64 = 0.3;

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(TESTIMONIALS.len()));
    // Visible by default so the timer still runs if observation fails.
    let in_view = RwSignal::new(true);
    let section_ref = NodeRef::<Section>::new();

    // Suspend the rotation while the section is scrolled out of view.
    Effect::new(move |prev: Option<Option<VisibilityObserver>>| {
        drop(prev);
        section_ref
            .get()
            .and_then(|el| observe_visibility(&el, IN_VIEW_THRESHOLD, move |visible| in_view.set(visible)))
    });

    // The interval exists only while auto-advance is wanted and the section
    // is on screen; dropping it cancels the scheduled callback.
    let auto = Memo::new(move |_| carousel.with(|c| c.auto_advance()));
    Effect::new(move |prev: Option<Option<Interval>>| {
        if let Some(Some(interval)) = prev {
            interval.cancel();
        }
        if auto.get() && in_view.get() {
            Some(Interval::new(AUTO_ADVANCE_MS, move || {
                carousel.update(|c| c.next());
            }))
        } else {
            None
        }
    });

    let current = move || &TESTIMONIALS[carousel.with(|c| c.index())];

    view! {
        <section node_ref=section_ref class="relative py-24 lg:py-32 overflow-hidden">
            <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
                <div class="absolute top-1/4 left-1/4 w-96 h-96 rounded-full bg-primary/5 blur-3xl float-slow"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 rounded-full bg-accent/5 blur-3xl float-slower"></div>
            </div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="text-center mb-16 reveal">
                    <h2 class="text-4xl md:text-5xl font-bold tracking-tight mb-4">
                        <span class="gradient-heading">"Trusted by Marketing Leaders"</span>
                    </h2>
                    <p class="text-xl text-muted max-w-3xl mx-auto">
                        "Join thousands of marketing professionals who've transformed their campaigns with our AI-powered suite"
                    </p>
                </div>

                // Carousel region: hovering suspends auto-advance
                <div
                    class="relative max-w-4xl mx-auto"
                    on:mouseenter=move |_| carousel.update(|c| c.pause())
                    on:mouseleave=move |_| carousel.update(|c| c.resume())
                >
                    <div class="card-panel p-8 md:p-12 shadow-xl reveal">
                        <div class="absolute inset-0 bg-gradient-to-br from-primary/5 to-accent/5 rounded-xl"></div>

                        <div class="relative z-10">
                            // Quote flourish
                            <div class="text-6xl leading-none text-primary/30 font-serif mb-4" aria-hidden="true">
                                "\u{275d}"
                            </div>

                            {move || {
                                let testimonial = current();
                                view! {
                                    <div class="flex justify-center mb-6">
                                        {(0..testimonial.rating)
                                            .map(|_| view! { <StarIcon class="h-6 w-6 text-primary"/> })
                                            .collect_view()}
                                    </div>

                                    <blockquote class="text-xl md:text-2xl text-center mb-8 leading-relaxed">
                                        {format!("\u{201c}{}\u{201d}", testimonial.quote)}
                                    </blockquote>

                                    <div class="flex items-center justify-center gap-4">
                                        <img
                                            src=testimonial.image
                                            alt=testimonial.name
                                            class="w-16 h-16 rounded-full object-cover ring-2 ring-primary/20"
                                        />
                                        <div class="text-center">
                                            <h4 class="font-semibold text-lg">{testimonial.name}</h4>
                                            <p class="text-muted">
                                                {format!("{} at {}", testimonial.role, testimonial.company)}
                                            </p>
                                        </div>
                                    </div>
                                }
                            }}
                        </div>
                    </div>

                    <button
                        class="carousel-arrow left-0 top-1/2 -translate-x-1/2 -translate-y-1/2"
                        aria-label="Previous testimonial"
                        on:click=move |_| carousel.update(|c| c.previous())
                    >
                        <Icon path=CHEVRON_LEFT class="w-5 h-5"/>
                    </button>
                    <button
                        class="carousel-arrow right-0 top-1/2 translate-x-1/2 -translate-y-1/2"
                        aria-label="Next testimonial"
                        on:click=move |_| carousel.update(|c| c.next())
                    >
                        <Icon path=CHEVRON_RIGHT class="w-5 h-5"/>
                    </button>
                </div>

                // Dot indicators
                <div class="flex justify-center gap-3 mt-8">
                    {(0..TESTIMONIALS.len())
                        .map(|slide| {
                            view! {
                                <button
                                    aria-label=format!("Go to slide {}", slide + 1)
                                    class=move || {
                                        if carousel.with(|c| c.index()) == slide {
                                            "w-6 h-3 rounded-full bg-primary transition-all duration-300"
                                        } else {
                                            "w-3 h-3 rounded-full bg-edge/50 hover:bg-edge/70 transition-all duration-300"
                                        }
                                    }
                                    on:click=move |_| carousel.update(|c| c.jump(slide))
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>

                // Overview grid, clicking a card jumps to its slide
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-16">
                    {TESTIMONIALS[..3]
                        .iter()
                        .enumerate()
                        .map(|(slide, testimonial)| overview_card(slide, testimonial, carousel))
                        .collect_view()}
                </div>

                // Trust badges
                <div class="flex flex-wrap justify-center gap-6 mt-16 pt-8 border-t border-edge/20 reveal">
                    <div class="flex items-center gap-2 text-muted">
                        <Icon path=BADGE_CHECK class="h-5 w-5 text-primary"/>
                        <span>"5,000+ Marketing Teams"</span>
                    </div>
                    <div class="flex items-center gap-2 text-muted">
                        <Icon path=BADGE_CHECK class="h-5 w-5 text-primary"/>
                        <span>"92% Customer Satisfaction"</span>
                    </div>
                    <div class="flex items-center gap-2 text-muted">
                        <Icon path=BADGE_CHECK class="h-5 w-5 text-primary"/>
                        <span>"4.9/5 Average Rating"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn overview_card(
    slide: usize,
    testimonial: &'static Testimonial,
    carousel: RwSignal<Carousel>,
) -> impl IntoView {
    view! {
        <div
            class="card-panel p-6 hover:shadow-lg hover:-translate-y-1 transition-all duration-300 cursor-pointer reveal"
            on:click=move |_| carousel.update(|c| c.jump(slide))
        >
            <div class="flex items-center gap-3 mb-4">
                <img
                    src=testimonial.image
                    alt=testimonial.name
                    class="w-12 h-12 rounded-full object-cover ring-2 ring-primary/20"
                />
                <div>
                    <h5 class="font-semibold">{testimonial.name}</h5>
                    <p class="text-sm text-muted">{testimonial.company}</p>
                </div>
            </div>
            <p class="text-sm text-muted line-clamp-3 mb-3">{testimonial.quote}</p>
            <div class="flex">
                {(0..testimonial.rating)
                    .map(|_| view! { <StarIcon class="w-4 h-4 text-primary"/> })
                    .collect_view()}
            </div>
        </div>
    }
}
