use leptos::prelude::*;

use crate::app::SiteLayout;
use crate::components::cards::{BlogCard, ServiceCard};
use crate::components::hero::Hero;
use crate::components::seo::Seo;
use crate::pages::blog::get_blog_index;
use crate::pages::services::get_services;

const LATEST_POSTS: usize = 3;

const REASONS: &[(&str, &str)] = &[
    ("Clear advice", "Your options explained in plain language, with the risks of each spelled out."),
    ("Focused practice", "Depth in contracts, financial disputes, insolvency and technology law."),
    ("Responsive", "Queries answered promptly, and you always know where your matter stands."),
    ("Transparent fees", "Fees agreed upfront, with no surprises at the end of a matter."),
];

const TESTIMONIALS: &[(&str, &str)] = &[
    (
        "The contract review caught two clauses that would have cost us dearly. Precise and practical.",
        "Founder, fintech start-up",
    ),
    (
        "Guided us through an insolvency claim with patience and a clear strategy at every step.",
        "Operational creditor",
    ),
    (
        "Explained the data protection rules for our AI product in a way the whole team understood.",
        "Product lead, SaaS company",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let services = Resource::new(|| (), |_| get_services());
    let posts = Resource::new(|| (), |_| get_blog_index(String::new(), None));

    view! {
        <SiteLayout>
            <Seo title="" path="/"/>
            <Hero
                title="Decode the law. Protect what matters."
                subtitle="Advocate practising in contracts, fintech and banking disputes, insolvency and technology law."
            >
                <a href="/contact" class="btn btn-primary">"Book a consultation"</a>
                <a href="/services" class="btn btn-ghost">"Explore services"</a>
            </Hero>

            <section class="container">
                <h2>"Practice Areas"</h2>
                <Suspense fallback=|| view! { <p>"Loading..."</p> }>
                    {move || services.get().map(|result| match result {
                        Ok(listing) => view! {
                            <div class="card-grid">
                                {listing
                                    .entries
                                    .into_iter()
                                    .map(|entry| view! { <ServiceCard entry=entry/> })
                                    .collect_view()}
                            </div>
                        }
                        .into_any(),
                        Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                    })}
                </Suspense>
            </section>

            <section class="container why-choose">
                <h2>"Why work with me"</h2>
                <div class="card-grid">
                    {REASONS
                        .iter()
                        .map(|(title, text)| view! {
                            <div class="card">
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="container testimonials">
                <h2>"What clients say"</h2>
                <div class="card-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|(quote, who)| view! {
                            <blockquote class="card">
                                <p>{*quote}</p>
                                <cite>{*who}</cite>
                            </blockquote>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="container">
                <h2>"Latest insights"</h2>
                <Suspense fallback=|| view! { <p>"Loading..."</p> }>
                    {move || posts.get().map(|result| match result {
                        Ok(index) => view! {
                            <div class="card-grid">
                                {index
                                    .entries
                                    .into_iter()
                                    .take(LATEST_POSTS)
                                    .map(|entry| view! { <BlogCard entry=entry/> })
                                    .collect_view()}
                            </div>
                            <a href="/blog" class="btn btn-ghost">"All articles"</a>
                        }
                        .into_any(),
                        Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                    })}
                </Suspense>
            </section>
        </SiteLayout>
    }
}
