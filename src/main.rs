#![recursion_limit = "512"]

use cfg_if::cfg_if;

// boilerplate to run in different modes
cfg_if! {
    if #[cfg(feature = "ssr")] {
        use admybrand_website::app::{shell, App};
        use axum::Router;
        use leptos::prelude::*;
        use leptos_axum::{generate_route_list, LeptosRoutes};
        use tower_http::compression::CompressionLayer;

        #[tokio::main]
        async fn main() {
            simple_logger::init_with_level(log::Level::Info).expect("couldn't initialize logging");
            let conf = get_configuration(None).expect("couldn't read leptos configuration");
            let addr = conf.leptos_options.site_addr;
            let leptos_options = conf.leptos_options;
            let routes = generate_route_list(App);

            // build our application with a route
            let app = Router::new()
                .leptos_routes(&leptos_options, routes, {
                    let leptos_options = leptos_options.clone();
                    move || shell(leptos_options.clone())
                })
                .fallback(leptos_axum::file_and_error_handler(shell))
                .layer(CompressionLayer::new())
                .with_state(leptos_options);

            log::info!("listening on http://{}", &addr);
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .expect("couldn't bind site address");
            axum::serve(listener, app.into_make_service())
                .await
                .expect("server error");
        }
    } else {
        pub fn main() {
            // the binary only exists for the ssr server; the wasm entry
            // point is `hydrate()` and cargo-leptos drives that build
        }
    }
}
