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

#![allow(non_snake_case)]
#![recursion_limit = "512"]

use cfg_if::cfg_if;
pub mod accordion;
pub mod app;
pub mod carousel;
pub mod components;
pub mod content;
pub mod error_template;
pub mod errors;
pub mod icons;
pub mod pages;
pub mod pricing;
pub mod visibility;

cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Debug);
            leptos::mount::hydrate_body(crate::app::App);
        }
    }
}
