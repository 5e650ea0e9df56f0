use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Wrapper that picks up the `animated` class once 10% of it has scrolled
/// into view. The CSS transition does the visual work; this only flips the
/// class and stops watching.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let visible = use_state(|| false);
    let node_ref = use_node_ref();

    {
        let visible = visible.clone();
        let node_ref = node_ref.clone();
        use_effect_with_deps(
            move |_| {
                let callback = Closure::wrap(Box::new(
                    move |entries: js_sys::Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let entry: IntersectionObserverEntry = entry.unchecked_into();
                            if entry.is_intersecting() {
                                visible.set(true);
                                observer.disconnect();
                            }
                        }
                    },
                )
                    as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                let mut options = IntersectionObserverInit::new();
                options.threshold(&JsValue::from(0.1));
                let observer =
                    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                        .unwrap();
                if let Some(element) = node_ref.cast::<Element>() {
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
        <div ref={node_ref} class={classes!(props.class.clone(), (*visible).then(|| "animated"))}>
            { for props.children.iter() }
        </div>
    }
}
