use api::{BackendClient, BackendConfig};
use dioxus::logger::tracing::error;
use dioxus::prelude::*;

/// Backend handle shared through the context. `None` when the client could
/// not be built from the configuration.
#[derive(Clone, Debug)]
pub struct Backend(Option<BackendClient>);

impl Backend {
    pub fn client(&self) -> Option<&BackendClient> {
        self.0.as_ref()
    }
}

/// Builds the backend client once and provides it to everything below.
#[component]
pub fn BackendProvider(children: Element) -> Element {
    use_context_provider(|| match BackendClient::from_config(BackendConfig::load()) {
        Ok(client) => Backend(Some(client)),
        Err(e) => {
            error!("Backend client unavailable: {}", e);
            Backend(None)
        }
    });

    rsx! {
        {children}
    }
}

pub fn use_backend() -> Option<BackendClient> {
    use_context::<Backend>().0
}
