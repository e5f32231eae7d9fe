use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

mod config;
mod content;
mod counter;
mod motion;
mod scheduler;
mod validators;
mod visibility;
mod components {
    pub mod contact_form;
    pub mod kpi_band;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use content::SiteContent;
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <Landing content={props.content.clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting FluxRate site");
    match SiteContent::embedded() {
        Ok(content) => {
            info!("Loaded {} KPIs", content.kpis.items.len());
            yew::Renderer::<App>::with_props(AppProps {
                content: Rc::new(content),
            })
            .render();
        }
        Err(err) => error!("Site content is invalid: {}", err),
    }
}
