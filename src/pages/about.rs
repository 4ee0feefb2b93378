use leptos::prelude::*;

use crate::app::SiteLayout;
use crate::components::hero::Hero;
use crate::components::seo::Seo;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <SiteLayout>
            <Seo title="About" path="/about" description="Advocate Gauri Saraswat: practice areas, approach and professional background."/>
            <Hero
                title="About Gauri"
                subtitle="Advocate, enrolled with the Bar Council of Delhi."
            />
            <section class="container prose">
                <p>
                    "Gauri advises individuals, founders and growing businesses on the legal questions "
                    "that shape everyday decisions: what a contract really commits you to, how to recover "
                    "money owed, and how new technology fits within existing regulation."
                </p>
                <h2>"Areas of focus"</h2>
                <ul>
                    <li>"Drafting and reviewing commercial contracts"</li>
                    <li>"Fintech, banking and payment disputes"</li>
                    <li>"Insolvency and Bankruptcy Code proceedings and fraud resolution"</li>
                    <li>"Data protection, AI governance and technology law"</li>
                </ul>
                <h2>"Approach"</h2>
                <p>
                    "Every matter starts with listening. Advice is given in plain language, options are laid "
                    "out with their costs and risks, and clients are kept informed at every stage."
                </p>
                <a href="/contact" class="btn btn-primary">"Get in touch"</a>
            </section>
        </SiteLayout>
    }
}
