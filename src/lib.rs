pub mod app;
pub mod error;
pub mod demo_seeder;
pub mod components {
    pub mod cards;
    pub mod footer;
    pub mod hero;
    pub mod image_upload;
    pub mod list_editor;
    pub mod nav;
    pub mod not_found;
    pub mod search_bar;
    pub mod seo;
}
pub mod pages {
    pub mod about;
    pub mod admin;
    pub mod blog;
    pub mod contact;
    pub mod home;
    pub mod legal;
    pub mod services;
}
pub mod content {
    pub mod catalog;
    pub mod drafts;
    pub mod fallback;
    pub mod leads;
    pub mod models;
    pub mod related;
    pub mod search;
    pub mod seed;
}
pub mod db {
    pub mod repository;
}
pub mod rendering {
    pub mod markdown;
}
pub mod storage {
    pub mod client;
    pub mod images;
}
pub mod api {
    pub mod errors;
    #[cfg(feature = "ssr")]
    pub mod admin;
    #[cfg(feature = "ssr")]
    pub mod public;
    #[cfg(feature = "ssr")]
    pub mod routes;
    #[cfg(feature = "ssr")]
    pub mod upload;
}
#[cfg(feature = "ssr")]
pub mod auth;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod sitemap;
#[cfg(feature = "ssr")]
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
