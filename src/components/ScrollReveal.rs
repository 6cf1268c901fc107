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

/// Marks `.reveal` elements with a `visible` class as they scroll into the
/// viewport. The entrance transition itself is CSS; nothing here holds
/// state, so sections opt in by class name alone.
#[component]
pub fn ScrollRevealScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initReveal() {
                    if (!('IntersectionObserver' in window)) {
                        document.querySelectorAll('.reveal').forEach(function(el) {
                            el.classList.add('visible');
                        });
                        return;
                    }
                    var observer = new IntersectionObserver(function(entries) {
                        entries.forEach(function(entry) {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                            }
                        });
                    }, { threshold: 0.1, rootMargin: '0px 0px -50px 0px' });
                    document.querySelectorAll('.reveal').forEach(function(el) {
                        observer.observe(el);
                    });
                }
                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initReveal);
                } else {
                    initReveal();
                }
            })();
            "#
        </script>
    }
}
