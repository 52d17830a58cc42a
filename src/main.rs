mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config, service::token::TokenService, startup, state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let tokens = TokenService::from_config(&config);

        tracing::info!("Starting server in {} mode", config.app_env);

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router(&config).with_state(AppState::new(db, tokens));
        router = router.merge(server_routes);

        Ok(router)
    })
}
