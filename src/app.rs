use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::components::*;
use leptos_router::path;

use crate::components::not_found::NotFound;
use crate::components::seo::{full_title, provide_site_origin};
use crate::pages::about::AboutPage;
use crate::pages::admin::blogs::AdminBlogsPage;
use crate::pages::admin::dashboard::DashboardPage;
use crate::pages::admin::leads::AdminLeadsPage;
use crate::pages::admin::login::LoginPage;
use crate::pages::admin::services::AdminServicesPage;
use crate::pages::blog::{BlogDetailPage, BlogIndexPage};
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::legal::{PrivacyPage, TermsPage};
use crate::pages::services::{ServiceDetailPage, ServicesPage};

/// HTML document wrapper used for server rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_site_origin();

    view! {
        <Stylesheet id="leptos" href="/pkg/lexfolio.css"/>
        <Title formatter=|text: String| full_title(&text)/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/about") view=AboutPage/>
                <Route path=path!("/services") view=ServicesPage/>
                <Route path=path!("/services/:id") view=ServiceDetailPage/>
                <Route path=path!("/contact") view=ContactPage/>
                <Route path=path!("/blog") view=BlogIndexPage/>
                <Route path=path!("/blog/:id") view=BlogDetailPage/>
                <Route path=path!("/privacy") view=PrivacyPage/>
                <Route path=path!("/terms") view=TermsPage/>

                <Route path=path!("/admin/login") view=LoginPage/>
                <Route path=path!("/admin/dashboard") view=DashboardPage/>
                <Route path=path!("/admin/services") view=AdminServicesPage/>
                <Route path=path!("/admin/blogs") view=AdminBlogsPage/>
                <Route path=path!("/admin/contact-leads") view=AdminLeadsPage/>
            </Routes>
        </Router>
    }
}

/// Public chrome: navigation above, footer below.
#[component]
pub fn SiteLayout(children: Children) -> impl IntoView {
    view! {
        <crate::components::nav::Nav/>
        <main class="site-main">{children()}</main>
        <crate::components::footer::Footer/>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <SiteLayout>
            <Title text="Page not found"/>
            <NotFound
                heading="Page not found"
                message="The page you are looking for does not exist or has moved."
                back_href="/"
                back_label="Back to home"
            />
        </SiteLayout>
    }
}
