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
use crate::content::{Resource, FEATURED_VIDEO_POSTER, FEATURED_VIDEO_URL, RESOURCES};
use crate::icons::{Icon, ARROW_RIGHT, CALENDAR, CHAT, CLOCK, PAUSE, PLAY, USER};
use crate::visibility::{observe_visibility, VisibilityObserver};
use leptos::html::Video;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

/// The promo video starts once half of it is on screen.
const PLAYBACK_THRESHOLD: f64 = 0.5;

#[component]
pub fn BlogResourcesSection() -> impl IntoView {
    view! {
        <section class="relative py-24 lg:py-32 overflow-hidden">
            <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
                <div class="absolute top-1/4 right-1/4 w-96 h-96 rounded-full bg-primary/5 blur-3xl float-slow"></div>
                <div class="absolute bottom-1/3 left-1/4 w-80 h-80 rounded-full bg-accent/5 blur-3xl float-slower"></div>
            </div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="text-center mb-16 reveal">
                    <h2 class="text-4xl md:text-5xl font-bold tracking-tight mb-4">
                        <span class="gradient-heading">"Resources & Insights"</span>
                    </h2>
                    <p class="text-xl text-muted max-w-3xl mx-auto">
                        "Discover the latest trends, strategies, and best practices in AI-powered marketing."
                    </p>
                </div>

                <FeaturedPost/>

                // Article grid
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 mt-16">
                    {RESOURCES[1..].iter().map(article_card).collect_view()}
                </div>

                <NewsletterCta/>
            </div>
        </section>
    }
}

/// Featured article with the promotional video. Playback follows viewport
/// visibility; a rejected `play()` falls back silently to the paused state.
#[component]
fn FeaturedPost() -> impl IntoView {
    let featured = &RESOURCES[0];
    let video_ref = NodeRef::<Video>::new();
    let playing = RwSignal::new(false);

    let try_play = move || {
        let Some(video) = video_ref.get() else {
            return;
        };
        match video.play() {
            Ok(promise) => {
                playing.set(true);
                spawn_local(async move {
                    if JsFuture::from(promise).await.is_err() {
                        // Autoplay blocked by the runtime: stay paused, no
                        // user-visible error.
                        log::debug!("video autoplay blocked, staying paused");
                        playing.set(false);
                    }
                });
            }
            Err(_) => playing.set(false),
        }
    };

    let pause_playback = move || {
        if let Some(video) = video_ref.get() {
            let _ = video.pause();
        }
        playing.set(false);
    };

    Effect::new(move |prev: Option<Option<VisibilityObserver>>| {
        drop(prev);
        video_ref.get().and_then(|el| {
            // `loop`/`muted`/`playsinline` are set here rather than in the
            // markup; muted playback is what keeps autoplay allowed at all.
            el.set_loop(true);
            el.set_muted(true);
            let _ = el.set_attribute("playsinline", "true");
            observe_visibility(&el, PLAYBACK_THRESHOLD, move |visible| {
                if visible {
                    try_play();
                } else {
                    pause_playback();
                }
            })
        })
    });

    view! {
        <div class="reveal">
            <div class="group relative overflow-hidden rounded-xl border-2 border-primary/30 shadow-2xl bg-background/80">
                <div class="absolute inset-0 bg-gradient-to-br from-primary/5 to-accent/5 opacity-0 group-hover:opacity-100 transition-opacity duration-300 z-10"></div>

                <div class="grid md:grid-cols-2 gap-0">
                    <div class="p-8 md:p-12 flex flex-col justify-center relative z-20">
                        <span class="mb-4 w-fit px-3 py-1 text-xs font-medium rounded-full bg-primary/10 text-primary">
                            "Featured Post"
                        </span>
                        <h3 class="text-3xl lg:text-4xl font-bold mb-4">{featured.title}</h3>
                        <p class="text-lg text-muted mb-6">{featured.excerpt}</p>
                        <div class="flex flex-wrap gap-4 mb-6 text-muted">
                            <div class="flex items-center gap-2">
                                <Icon path=USER class="h-4 w-4"/>
                                <span>{featured.author}</span>
                            </div>
                            <div class="flex items-center gap-2">
                                <Icon path=CALENDAR class="h-4 w-4"/>
                                <span>{featured.date}</span>
                            </div>
                            <div class="flex items-center gap-2">
                                <Icon path=CLOCK class="h-4 w-4"/>
                                <span>{featured.read_time}</span>
                            </div>
                            <div class="flex items-center gap-2">
                                <Icon path=CHAT class="h-4 w-4"/>
                                <span>{format!("{} comments", featured.comments)}</span>
                            </div>
                        </div>
                        <CTAButton size=ButtonSize::Large class="w-fit" href=Some("#blog".to_string())>
                            "Read Article"
                            <Icon path=ARROW_RIGHT class="ml-2 h-4 w-4"/>
                        </CTAButton>
                    </div>

                    <div class="relative h-full min-h-[400px]">
                        <button
                            class="absolute z-20 top-4 right-4 p-3 rounded-full bg-background/80 backdrop-blur-sm border border-edge/20 hover:bg-background transition-all"
                            aria-label=move || if playing.get() { "Pause video" } else { "Play video" }
                            on:click=move |_| {
                                if playing.get() {
                                    pause_playback();
                                } else {
                                    try_play();
                                }
                            }
                        >
                            <Show
                                when=move || playing.get()
                                fallback=|| view! { <Icon path=PLAY class="h-5 w-5"/> }
                            >
                                <Icon path=PAUSE class="h-5 w-5"/>
                            </Show>
                        </button>

                        <video
                            node_ref=video_ref
                            class="absolute inset-0 w-full h-full object-cover"
                            preload="auto"
                            poster=FEATURED_VIDEO_POSTER
                        >
                            <source src=FEATURED_VIDEO_URL type="video/mp4"/>
                        </video>

                        <div class="absolute inset-0 bg-gradient-to-t from-background via-background/30 to-transparent z-10 md:bg-gradient-to-r md:via-background/0"></div>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn article_card(resource: &'static Resource) -> impl IntoView {
    view! {
        <div class="card-panel group h-full flex flex-col hover:border-primary/40 hover:shadow-lg hover:-translate-y-1 transition-all reveal">
            <div class="absolute inset-0 bg-gradient-to-br from-primary/5 to-accent/5 opacity-0 group-hover:opacity-100 transition-opacity duration-300 rounded-xl"></div>

            <div class="relative z-10 flex flex-col flex-grow">
                <div class="flex justify-end">
                    <span class="px-3 py-1 text-xs font-medium rounded-full bg-surface text-foreground shadow-sm">
                        {resource.category}
                    </span>
                </div>
                <h3 class="mt-4 text-xl font-bold group-hover:text-primary transition-colors">
                    {resource.title}
                </h3>
                <p class="text-base text-muted mt-3 flex-grow">{resource.excerpt}</p>

                <div class="flex flex-wrap gap-4 text-sm text-muted mt-6 mb-4">
                    <div class="flex items-center gap-2">
                        <Icon path=USER class="h-4 w-4"/>
                        <span>{resource.author}</span>
                    </div>
                    <div class="flex items-center gap-2">
                        <Icon path=CALENDAR class="h-4 w-4"/>
                        <span>{resource.date}</span>
                    </div>
                </div>

                <CTAButton
                    variant=ButtonVariant::Secondary
                    class="w-full justify-center group-hover:border-primary/40 group-hover:text-primary"
                    href=Some("#blog".to_string())
                >
                    "Read More"
                    <Icon path=ARROW_RIGHT class="ml-2 h-4 w-4"/>
                </CTAButton>
            </div>
        </div>
    }
}

/// Email capture under the article grid. Purely presentational, like the
/// footer form.
#[component]
fn NewsletterCta() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let subscribed = RwSignal::new(false);

    view! {
        <div class="text-center mt-16 reveal">
            <div class="card-panel p-8 max-w-4xl mx-auto relative overflow-hidden">
                <div class="absolute -top-20 -right-20 w-40 h-40 rounded-full bg-primary/10 blur-3xl"></div>
                <div class="absolute -bottom-20 -left-20 w-40 h-40 rounded-full bg-accent/10 blur-3xl"></div>

                <div class="relative z-10">
                    <h3 class="text-2xl md:text-3xl font-bold mb-2">
                        "Want more marketing insights?"
                    </h3>
                    <p class="text-muted mb-6 max-w-2xl mx-auto">
                        "Subscribe to our newsletter for weekly articles, case studies, and exclusive content."
                    </p>
                    <form
                        class="flex flex-col sm:flex-row gap-4 justify-center max-w-md mx-auto"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            log::info!("newsletter signup acknowledged");
                            subscribed.set(true);
                            email.set(String::new());
                        }
                    >
                        <input
                            type="email"
                            placeholder="Enter your email"
                            class="flex-grow px-4 py-3 rounded-lg border border-edge/30 focus:border-primary/50 focus:ring-1 focus:ring-primary/30 outline-none bg-background/50 transition-all"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <button
                            type="submit"
                            class="px-6 py-3 font-semibold text-white rounded-lg bg-gradient-to-r from-primary to-accent hover:shadow-lg hover:-translate-y-0.5 transition-all"
                        >
                            "Subscribe"
                        </button>
                    </form>
                    <p class="text-xs text-muted mt-4">
                        <Show
                            when=move || subscribed.get()
                            fallback=|| "We respect your privacy. Unsubscribe at any time."
                        >
                            "Thanks for subscribing!"
                        </Show>
                    </p>
                </div>
            </div>
        </div>
    }
}
