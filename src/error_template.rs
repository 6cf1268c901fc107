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

use crate::errors::SiteError;
use leptos::prelude::*;

/// Renders collected errors as a bare page. Under `ssr` the response status
/// is taken from the first error.
#[component]
pub fn ErrorTemplate(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match outside_errors {
        Some(e) => RwSignal::new(e),
        None => match errors {
            Some(e) => e,
            None => panic!("No Errors found and we expected errors!"),
        },
    };
    let errors = errors.get_untracked();

    let errors: Vec<SiteError> = errors
        .into_iter()
        .filter_map(|(_k, v)| v.downcast_ref::<SiteError>().cloned())
        .collect();

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let Some(response) = use_context::<ResponseOptions>() {
            if let Some(error) = errors.first() {
                response.set_status(error.status_code());
            }
        }
    }

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-background text-foreground px-6">
            <h1 class="text-4xl font-bold mb-6">
                {if errors.len() > 1 { "Errors" } else { "Error" }}
            </h1>
            {errors
                .into_iter()
                .map(|error| {
                    let code = error.status_code();
                    view! {
                        <div class="text-center mb-4">
                            <h2 class="text-2xl font-semibold">{code.to_string()}</h2>
                            <p class="text-muted">{error.to_string()}</p>
                        </div>
                    }
                })
                .collect_view()}
            <a href="/" class="btn-primary mt-4">
                "Back to the homepage"
            </a>
        </div>
    }
}
