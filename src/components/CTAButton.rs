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

use leptos::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Tertiary,
    Featured,
}

#[derive(Clone, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

/// Call-to-action button. Renders an anchor when `href` is given, a button
/// otherwise.
#[component]
pub fn CTAButton(
    children: Children,
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Medium)] size: ButtonSize,
    #[prop(default = String::new(), into)] class: String,
    #[prop(default = None)] href: Option<String>,
    #[prop(default = false)] disabled: bool,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center font-semibold transition-all duration-200 ease-out focus:outline-none focus:ring-2 focus:ring-primary/30 disabled:opacity-50 disabled:cursor-not-allowed";

    let variant_classes = match variant {
        ButtonVariant::Primary => {
            "bg-gradient-to-r from-primary to-accent text-white hover:from-primary/90 hover:to-accent/90 shadow-sm hover:shadow-md"
        }
        ButtonVariant::Secondary => {
            "bg-surface text-foreground border border-edge hover:border-primary/40 hover:text-primary"
        }
        ButtonVariant::Tertiary => "text-primary hover:text-primary/80 hover:bg-primary/5",
        ButtonVariant::Featured => "bg-accent text-white hover:bg-accent/90 shadow-sm",
    };

    let size_classes = match size {
        ButtonSize::Small => "px-4 py-2 text-sm rounded-md",
        ButtonSize::Medium => "px-6 py-3 text-base rounded-lg",
        ButtonSize::Large => "px-8 py-4 text-lg rounded-xl",
    };

    let combined_class = format!("{base_classes} {variant_classes} {size_classes} {class}");

    let content = children();

    match href {
        Some(href) => view! {
            <a href=href class=combined_class class:pointer-events-none=disabled>
                {content}
            </a>
        }
        .into_any(),
        None => view! {
            <button class=combined_class disabled=disabled>
                {content}
            </button>
        }
        .into_any(),
    }
}
