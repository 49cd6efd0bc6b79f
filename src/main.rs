//! The LanguageClub website: server-side rendering, server functions and the hydration bundle

#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::sync::Arc;

    use axum::Router;
    use langclub::app::*;
    use langclub_server::{config::Config, signal_handler::shutdown_signal};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::trace::TraceLayer;
    use tracing::{debug, info};
    use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

    // the gateway client is built while reading the config
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let config = match Config::try_create() {
        Ok(x) => x,
        Err(e) => {
            panic!("Error reading config: {e}.");
        }
    };
    let config_arc = Arc::new(config);

    let my_crate_filter = EnvFilter::new("langclub,tower_http");
    let subscriber = tracing_subscriber::registry().with(my_crate_filter).with(
        tracing_subscriber::fmt::layer()
            .compact()
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
            .with_line_number(true)
            .with_filter(config_arc.log_level),
    );
    tracing::subscriber::set_global_default(subscriber).expect("static tracing config");
    debug!("Tracing enabled.");

    let app_env = &config_arc.app;
    info!(
        "Serving app {} (client config: {}, initial auth token {}).",
        app_env.id,
        app_env.client_config,
        if app_env.initial_auth_token.is_some() {
            "set"
        } else {
            "unset"
        }
    );

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // server functions get the config from context, just like the pages do
    let config_capsule = config_arc.clone();
    let app = Router::new()
        .leptos_routes_with_context(
            &config_arc.leptos_options,
            routes,
            move || {
                provide_context::<Arc<Config>>(config_capsule.clone());
            },
            {
                let leptos_options = config_arc.leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(config_arc.leptos_options.clone());

    info!(
        "listening on http://{}",
        &config_arc.leptos_options.site_addr
    );
    let listener = tokio::net::TcpListener::bind(&config_arc.leptos_options.site_addr)
        .await
        .expect("Should be able to bind to site_addr");
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server should run until shut down");
    info!("Shutdown complete.");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
