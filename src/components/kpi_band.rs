use log::debug;
use yew::prelude::*;

use crate::config::thresholds;
use crate::content::KpiContent;
use crate::counter::{CountUp, CountUpRun};
use crate::motion::{use_motion_preference, MotionPreference};
use crate::scheduler::IntervalScheduler;
use crate::visibility::{use_in_view, InView};

#[derive(Properties, PartialEq)]
pub struct KpiBandProps {
    pub content: KpiContent,
}

#[function_component(KpiBand)]
pub fn kpi_band(props: &KpiBandProps) -> Html {
    let motion = use_motion_preference();

    html! {
        <section class="kpi-band" aria-label="Key performance indicators" tabindex="-1">
            <style>{KPI_CSS}</style>
            <div class="kpi-band-inner">
                { for props.content.items.iter().map(|item| html! {
                    <ValueCard
                        key={item.label.clone()}
                        label={item.label.clone()}
                        value={item.value.clone()}
                        motion={motion}
                    />
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ValueCardProps {
    pub label: String,
    pub value: String,
    pub motion: MotionPreference,
}

#[function_component(ValueCard)]
pub fn value_card(props: &ValueCardProps) -> Html {
    let card_ref = use_node_ref();
    let in_view = use_in_view(card_ref.clone(), thresholds::KPI_CARD);
    let count_up = use_mut_ref(|| CountUp::new(props.value.clone()));
    let display = use_state(|| props.value.clone());

    // The previous run is dropped by this effect's teardown before the new
    // text is applied, so its frames stop before another run can start. A
    // card that unmounts mid-animation stops the same way.
    {
        let count_up = count_up.clone();
        let display = display.setter();
        use_effect_with_deps(
            move |(in_view, value, motion): &(InView, String, MotionPreference)| {
                if count_up.borrow_mut().set_raw(value.clone()) {
                    debug!("KPI value changed to {:?}", value);
                    display.set(value.clone());
                }
                let run = in_view.is_visible().then(|| {
                    CountUpRun::start(
                        count_up,
                        *motion,
                        &IntervalScheduler::default(),
                        move |text| display.set(text),
                    )
                });
                move || drop(run)
            },
            (in_view, props.value.clone(), props.motion),
        );
    }

    let animated = props.motion.allows_animation();

    html! {
        <div
            ref={card_ref}
            class={classes!(
                "kpi-card",
                (!in_view.is_pending() || !animated).then_some("in-view"),
                (!animated).then_some("no-motion")
            )}
        >
            <div class="kpi-value">{(*display).clone()}</div>
            <p class="kpi-label">{&props.label}</p>
        </div>
    }
}

const KPI_CSS: &str = r#"
    .kpi-band {
        padding: 3.5rem 0;
        background: rgba(11, 15, 20, 0.95);
    }
    .kpi-band-inner {
        max-width: 64rem;
        margin: 0 auto;
        padding: 2rem 1.5rem;
        display: flex;
        gap: 1.5rem;
        justify-content: space-between;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 1.5rem;
        background: rgba(20, 26, 34, 0.8);
        backdrop-filter: blur(10px);
    }
    .kpi-card {
        flex: 1;
        opacity: 0;
        transform: translateY(12px);
        transition: opacity 0.4s ease-out, transform 0.4s ease-out;
    }
    .kpi-card.in-view {
        opacity: 1;
        transform: translateY(0);
    }
    .kpi-card.no-motion {
        transition: none;
    }
    .kpi-value {
        font-size: 2.25rem;
        font-weight: 600;
        color: #e6edf3;
        font-variant-numeric: tabular-nums;
    }
    .kpi-label {
        margin-top: 0.5rem;
        font-size: 0.875rem;
        color: #8b98a5;
    }
    @media (max-width: 768px) {
        .kpi-band-inner {
            flex-direction: column;
            text-align: center;
        }
    }
"#;
