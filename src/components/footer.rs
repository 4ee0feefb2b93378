use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer class="footer">
            <div class="footer-columns">
                <section>
                    <h3>"Decode Law with Gauri"</h3>
                    <p>
                        "Practical legal counsel on contracts, fintech and banking disputes, "
                        "insolvency and technology law."
                    </p>
                </section>
                <section>
                    <h3>"Explore"</h3>
                    <ul>
                        {crate::components::nav::NAV_LINKS
                            .iter()
                            .map(|(href, label)| view! { <li><a href=*href>{*label}</a></li> })
                            .collect_view()}
                    </ul>
                </section>
                <section>
                    <h3>"Contact"</h3>
                    <p>"New Delhi, India"</p>
                    <p><a href="mailto:contact@decodelawwithgauri.com">"contact@decodelawwithgauri.com"</a></p>
                </section>
            </div>
            <div class="footer-bottom">
                <span>"© " {year} " Decode Law with Gauri. All rights reserved."</span>
                <span>
                    <a href="/privacy">"Privacy Policy"</a>
                    " · "
                    <a href="/terms">"Terms of Service"</a>
                </span>
            </div>
            <p class="footer-disclaimer">
                "As per the rules of the Bar Council of India, advocates may not solicit work or advertise. "
                "This site is for information only and does not create an advocate-client relationship."
            </p>
        </footer>
    }
}
