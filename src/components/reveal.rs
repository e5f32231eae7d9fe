use yew::prelude::*;

use crate::motion::use_motion_preference;
use crate::visibility::{use_in_view, InView};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub labelled_by: Option<AttrValue>,
    /// Visible fraction that triggers the reveal.
    #[prop_or(0.2)]
    pub amount: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A section that fades and slides into place the first time it scrolls
/// into view. With reduced motion it is simply there.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), props.amount);
    let motion = use_motion_preference();

    let state = match (motion.allows_animation(), in_view) {
        (false, _) | (_, InView::Unobservable) => "reveal-static",
        (true, InView::Visible) => "reveal-shown",
        (true, InView::Pending) => "reveal-hidden",
    };

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            aria-labelledby={props.labelled_by.clone()}
            tabindex="-1"
            class={classes!("reveal", state, props.class.clone())}
        >
            { for props.children.iter() }
        </section>
    }
}
