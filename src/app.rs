use dioxus::prelude::*;
use folio_core::{load_posts, BlogFeed, InputRouter, MobileDrawer, ModalController, NavigationController};

use crate::browser::{self, GlooFetcher};
use crate::context::Viewport;
use crate::pages::Portfolio;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// The whole site is one page; sections are panels inside it, addressed
/// by anchor rather than by route.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Portfolio {},
}

/// Root application component.
///
/// Provides global styles, the shared page state, and routing.
#[component]
pub fn App() -> Element {
    let config = crate::site_config();

    let nav: Signal<NavigationController> = use_signal(|| NavigationController::new(&config.navigation));
    let router: Signal<InputRouter> = use_signal(|| InputRouter::new(config));
    let viewport: Signal<Viewport> = use_signal(|| Viewport {
        width: browser::viewport_width(),
    });
    let mut feed: Signal<BlogFeed> = use_signal(|| BlogFeed::new(config.content.excerpt_limit));
    let modal: Signal<ModalController> = use_signal(ModalController::new);
    let drawer: Signal<MobileDrawer> = use_signal(MobileDrawer::new);

    use_context_provider(|| config.clone());
    use_context_provider(|| nav);
    use_context_provider(|| router);
    use_context_provider(|| viewport);
    use_context_provider(|| feed);
    use_context_provider(|| modal);
    use_context_provider(|| drawer);

    // Posts load in the background; navigation works before they arrive
    use_effect(move || {
        spawn(async move {
            let loaded = load_posts(&GlooFetcher, &config.content.posts_endpoint).await;
            let origin = loaded.origin;
            if feed.write().apply(loaded) {
                tracing::info!(origin = origin.as_str(), "blog feed ready");
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
