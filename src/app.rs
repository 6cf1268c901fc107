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

use crate::error_template::ErrorTemplate;
use crate::errors::SiteError;
use crate::pages::Home::*;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let json_ld = serde_json::json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": "ADmyBRAND AI Suite",
        "operatingSystem": "Any",
        "applicationCategory": "BusinessApplication",
        "offers": {
            "@type": "Offer",
            "price": "29",
            "priceCurrency": "USD"
        },
        "description": "AI-powered marketing platform that automates campaigns, analyzes customer data, and optimizes ad performance across channels.",
        "aggregateRating": {
            "@type": "AggregateRating",
            "ratingValue": "4.9",
            "ratingCount": "5000"
        }
    })
    .to_string();

    view! {
        <Stylesheet id="leptos" href="/pkg/admybrand_website.css"/>
        <Title formatter=|text| format!("{text} - ADmyBRAND AI Suite")/>
        <Meta
            name="description"
            content="ADmyBRAND AI Suite delivers data-driven marketing solutions that increase conversions and ROI through intelligent automation and predictive analytics."
        />
        <Meta
            name="keywords"
            content="ai marketing, marketing automation, ai content generation, predictive analytics, campaign management, admybrand"
        />

        // Open Graph / Facebook
        <Meta property="og:type" content="website"/>
        <Meta property="og:site_name" content="ADmyBRAND AI Suite"/>
        <Meta property="og:url" content="https://admybrand.ai/"/>
        <Meta property="og:title" content="ADmyBRAND AI Suite - Transform Your Marketing With AI Power"/>
        <Meta property="og:description" content="AI-powered marketing platform for modern businesses. Automate campaigns, analyze data, and optimize performance."/>

        // Twitter
        <Meta property="twitter:card" content="summary_large_image"/>
        <Meta property="twitter:site" content="@admybrand"/>
        <Meta property="twitter:title" content="ADmyBRAND AI Suite - Transform Your Marketing With AI Power"/>
        <Meta property="twitter:description" content="AI-powered marketing platform for modern businesses. Automate campaigns, analyze data, and optimize performance."/>

        <Router>
            <Routes fallback=|| {
                let mut outside_errors = Errors::default();
                outside_errors.insert_with_default_key(SiteError::NotFound);
                view! { <ErrorTemplate outside_errors/> }
            }>
                <Route path=StaticSegment("") view=Home/>
            </Routes>
        </Router>

        <script type="application/ld+json">{json_ld}</script>
    }
}
