use leptos::prelude::*;

use crate::app::SiteLayout;
use crate::components::seo::Seo;

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <SiteLayout>
            <Seo title="Privacy Policy" path="/privacy"/>
            <article class="container prose">
                <h1>"Privacy Policy"</h1>
                <h2>"Information we collect"</h2>
                <p>
                    "When you use the contact form we receive your name, email address, optional phone "
                    "number, the subject you choose and your message."
                </p>
                <h2>"How it is used"</h2>
                <p>
                    "Your details are used only to respond to your enquiry. They are not sold or shared "
                    "with third parties for marketing."
                </p>
                <h2>"Retention"</h2>
                <p>"Enquiries are deleted once they are no longer needed to handle your request."</p>
                <h2>"Your rights"</h2>
                <p>
                    "You may ask to see, correct or delete the information you sent us by writing to "
                    <a href="mailto:contact@decodelawwithgauri.com">"contact@decodelawwithgauri.com"</a>
                    "."
                </p>
            </article>
        </SiteLayout>
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <SiteLayout>
            <Seo title="Terms of Service" path="/terms"/>
            <article class="container prose">
                <h1>"Terms of Service"</h1>
                <h2>"No legal advice"</h2>
                <p>
                    "Articles and service descriptions on this site are general information. They are not "
                    "legal advice and should not be relied on for a specific matter."
                </p>
                <h2>"No advocate-client relationship"</h2>
                <p>
                    "Sending a message through the contact form does not create an advocate-client "
                    "relationship. One exists only after a written engagement has been agreed."
                </p>
                <h2>"Bar Council of India rules"</h2>
                <p>
                    "This site complies with the rules of the Bar Council of India and is not intended to "
                    "solicit work or advertise."
                </p>
                <h2>"Content"</h2>
                <p>"All content is provided as-is and may be updated without notice."</p>
            </article>
        </SiteLayout>
    }
}
