use std::sync::Arc;

use crate::auth::gate::AdminGate;
use crate::content::models::{BlogPost, ContactLead, Service};
use crate::db::repository::{CollectionRepository, MongoCollectionRepository, BLOGS, CONTACT_LEADS, SERVICES};
use crate::storage::client::StorageClient;

/// Shared application state, cloned into every handler and server function.
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<dyn CollectionRepository<Service>>,
    pub blogs: Arc<dyn CollectionRepository<BlogPost>>,
    pub leads: Arc<dyn CollectionRepository<ContactLead>>,
    pub storage: Arc<dyn StorageClient>,
    pub gate: Arc<AdminGate>,
    pub leptos_options: leptos::prelude::LeptosOptions,
}

impl axum::extract::FromRef<AppState> for leptos::prelude::LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}

impl AppState {
    /// Wire the three content collections of `db` into a state.
    pub fn with_database(
        db: &mongodb::Database,
        storage: Arc<dyn StorageClient>,
        gate: AdminGate,
        leptos_options: leptos::prelude::LeptosOptions,
    ) -> Self {
        Self {
            services: Arc::new(MongoCollectionRepository::<Service>::new(db, SERVICES)),
            blogs: Arc::new(MongoCollectionRepository::<BlogPost>::new(db, BLOGS)),
            leads: Arc::new(MongoCollectionRepository::<ContactLead>::new(db, CONTACT_LEADS)),
            storage,
            gate: Arc::new(gate),
            leptos_options,
        }
    }
}

/// Fetch the state inside a server function.
pub fn app_state() -> Result<AppState, leptos::prelude::ServerFnError> {
    leptos::prelude::use_context::<AppState>()
        .ok_or_else(|| leptos::prelude::ServerFnError::new("Application state is not available"))
}
