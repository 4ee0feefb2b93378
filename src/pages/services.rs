use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::app::SiteLayout;
use crate::components::cards::{SeedNotice, ServiceCard};
use crate::components::hero::Hero;
use crate::components::not_found::NotFound;
use crate::components::search_bar::SearchBar;
use crate::components::seo::Seo;
use crate::content::catalog::ServiceDetail;
use crate::content::fallback::{Listing, LookupSource};
use crate::content::models::Service;
use crate::content::search::filter_services;

/// All practice areas, alphabetical, or the built-in ones if the store has none.
#[server]
pub async fn get_services() -> Result<Listing<Service>, ServerFnError> {
    let state = crate::state::app_state()?;
    Ok(crate::content::catalog::service_listing(state.services.as_ref()).await)
}

/// One practice area; `None` when neither the store nor the built-in list has it.
#[server]
pub async fn get_service_detail(id: String) -> Result<Option<ServiceDetail>, ServerFnError> {
    let state = crate::state::app_state()?;
    Ok(crate::content::catalog::service_detail(state.services.as_ref(), &id).await)
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    let services = Resource::new(|| (), |_| get_services());
    let query = RwSignal::new(String::new());

    view! {
        <SiteLayout>
            <Seo title="Services" path="/services" description="Practice areas: contract drafting, fintech and banking, IBC and insolvency, AI and technology law."/>
            <Hero
                title="Practice Areas"
                subtitle="Focused advice on contracts, financial disputes, insolvency and technology law."
            />
            <section class="container">
                <SearchBar query=query placeholder="Search services..."/>
                <Suspense fallback=|| view! { <p>"Loading..."</p> }>
                    {move || services.get().map(|result| match result {
                        Ok(listing) => {
                            let source = listing.source;
                            view! {
                                <SeedNotice source=source/>
                                {move || {
                                    let matches = filter_services(&listing.entries, &query.get());
                                    if matches.is_empty() {
                                        view! { <p class="empty">"No services match your search."</p> }.into_any()
                                    } else {
                                        view! {
                                            <div class="card-grid">
                                                {matches
                                                    .into_iter()
                                                    .map(|entry| view! { <ServiceCard entry=entry/> })
                                                    .collect_view()}
                                            </div>
                                        }
                                        .into_any()
                                    }
                                }}
                            }
                            .into_any()
                        }
                        Err(e) => view! { <p class="error">"Error loading services: " {e.to_string()}</p> }.into_any(),
                    })}
                </Suspense>
            </section>
        </SiteLayout>
    }
}

#[component]
pub fn ServiceDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let detail = Resource::new(move || id.get(), get_service_detail);

    view! {
        <SiteLayout>
            <Suspense fallback=|| view! { <p>"Loading..."</p> }>
                {move || detail.get().map(|result| match result {
                    Ok(Some(detail)) => view! { <ServiceDetailView detail=detail/> }.into_any(),
                    Ok(None) => view! {
                        <Title text="Service not found"/>
                        <NotFound
                            heading="Service not found"
                            message="This practice area does not exist or is no longer offered."
                            back_href="/services"
                            back_label="Back to services"
                        />
                    }
                    .into_any(),
                    Err(e) => view! { <p class="error">"Error loading service: " {e.to_string()}</p> }.into_any(),
                })}
            </Suspense>
        </SiteLayout>
    }
}

#[component]
fn ServiceDetailView(detail: ServiceDetail) -> impl IntoView {
    let path = format!("/services/{}", detail.entry.id);
    let service = detail.entry.record;
    let from_seed = detail.source == LookupSource::Seed;

    view! {
        <Seo
            title=service.title.clone()
            path=path
            description=service.card_text().to_string()
            image=service.image_url.clone()
        />
        <article class="container service-detail">
            <a href="/services" class="back-link">"← All services"</a>
            <header>
                {service.icon.clone().map(|icon| view! { <span class="service-icon" aria-hidden="true">{icon}</span> })}
                <h1>{service.title.clone()}</h1>
                <p class="lead">{service.description.clone()}</p>
            </header>
            {service.image_url.clone().map(|url| view! { <img class="detail-image" src=url alt=service.title.clone()/> })}
            {detail
                .long_description_html
                .map(|html| view! { <div class="prose" inner_html=html></div> })}
            {(!service.features.is_empty()).then(|| view! {
                <section>
                    <h2>"What this covers"</h2>
                    <ul class="feature-list">
                        {service.features.iter().map(|f| view! { <li>{f.clone()}</li> }).collect_view()}
                    </ul>
                </section>
            })}
            {service.pricing.clone().map(|pricing| view! {
                <section class="pricing">
                    <h2>"Fees"</h2>
                    <p>{pricing}</p>
                </section>
            })}
            {from_seed.then(|| view! { <p class="muted">"Sample practice area."</p> })}
            <a href="/contact" class="btn btn-primary">"Discuss your matter"</a>
        </article>
    }
}
