use std::rc::Rc;

use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::kpi_band::KpiBand;
use crate::components::reveal::Reveal;
use crate::config::thresholds;
use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    html! {
        <main id="main-content" class="landing">
            <style>{LANDING_CSS}</style>
            <KpiBand content={props.content.kpis.clone()} />
            <Reveal id="contact" labelled_by="contact-title" amount={thresholds::CONTACT} class={classes!("contact-section")}>
                <ContactForm content={props.content.contact.clone()} />
            </Reveal>
        </main>
    }
}

const LANDING_CSS: &str = r#"
    body {
        margin: 0;
        background: #0b0f14;
        color: #e6edf3;
        font-family: 'Inter', system-ui, sans-serif;
    }
    .landing {
        min-height: 100vh;
    }
    .reveal {
        outline: none;
    }
    .reveal-hidden {
        opacity: 0;
        transform: translateY(32px);
    }
    .reveal-shown {
        opacity: 1;
        transform: translateY(0);
        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
    }
    .reveal-static {
        opacity: 1;
        transform: none;
        transition: none;
    }
    .contact-section {
        padding: 6rem 0;
    }
"#;
