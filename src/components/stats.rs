use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::counters::{CounterAnimation, CounterSpec, TICK_MS};

#[derive(Clone, PartialEq)]
pub struct Stat {
    pub value: AttrValue,
    pub label: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct HeroStatsProps {
    pub stats: Vec<Stat>,
}

/// Statistics strip in the hero. The count-up starts the first time the
/// section is at least half visible, and only that once: the observer is
/// disconnected inside its first activation, so scrolling away and back
/// never restarts the animation.
#[function_component(HeroStats)]
pub fn hero_stats(props: &HeroStatsProps) -> Html {
    let started = use_state(|| false);
    let section_ref = use_node_ref();

    {
        let started = started.clone();
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let callback = Closure::wrap(Box::new(
                    move |entries: js_sys::Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let entry: IntersectionObserverEntry = entry.unchecked_into();
                            if entry.is_intersecting() {
                                started.set(true);
                                observer.disconnect();
                            }
                        }
                    },
                )
                    as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                let mut options = IntersectionObserverInit::new();
                options.threshold(&JsValue::from(0.5));
                let observer =
                    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                        .unwrap();
                if let Some(element) = section_ref.cast::<Element>() {
                    observer.observe(&element);
                }

                move || {
                    observer.disconnect();
                    drop(callback);
                }
            },
            (),
        );
    }

    html! {
        <div class="hero-stats" ref={section_ref}>
            { for props.stats.iter().map(|stat| html! {
                <StatCounter value={stat.value.clone()} label={stat.label.clone()} started={*started} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    /// Target display text, e.g. "2.5B" or "85%". Shown as-is until the
    /// animation starts, and left as-is forever if it holds no number.
    pub value: AttrValue,
    pub label: AttrValue,
    pub started: bool,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let display = use_state(|| props.value.to_string());

    {
        let display = display.clone();
        let value = props.value.to_string();
        use_effect_with_deps(
            move |started: &bool| {
                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

                if *started {
                    if let Some(spec) = CounterSpec::parse(&value) {
                        let mut animation = CounterAnimation::new(spec);
                        let handle = interval_handle.clone();
                        let interval = Interval::new(TICK_MS, move || {
                            display.set(animation.tick());
                            if animation.is_done() {
                                // Self-cancelling: the timer drops itself on
                                // the tick that reaches the target.
                                if let Some(interval) = handle.borrow_mut().take() {
                                    drop(interval);
                                }
                            }
                        });
                        *interval_handle.borrow_mut() = Some(interval);
                    }
                }

                move || {
                    if let Some(interval) = interval_handle.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            props.started,
        );
    }

    html! {
        <div class="stat-item">
            <span class="market-number">{ (*display).clone() }</span>
            <span class="market-label">{ props.label.clone() }</span>
        </div>
    }
}
