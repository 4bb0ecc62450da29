use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of the element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// One-shot latch: the first trigger wins, everything after is ignored.
#[derive(Default, Debug)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    pub fn trigger(&mut self) -> bool {
        if self.fired {
            false
        } else {
            self.fired = true;
            true
        }
    }

    pub fn fired(&self) -> bool {
        self.fired
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealOnScrollProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Extra transition delay once the card becomes visible, for staggering
    /// siblings.
    #[prop_or_default]
    pub delay_ms: u32,
}

/// Wrapper that keeps its children hidden until they first enter the viewport,
/// then reveals them once and stops watching.
#[function_component(RevealOnScroll)]
pub fn reveal_on_scroll(props: &RevealOnScrollProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let mut watching: Option<IntersectionObserver> = None;
                if let Some(element) = node.cast::<Element>() {
                    let mut latch = OneShot::default();
                    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new({
                        let revealed = revealed.clone();
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if entry.is_intersecting() && latch.trigger() {
                                    revealed.set(true);
                                    observer.disconnect();
                                }
                            }
                        }
                    });
                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(observer) => {
                            observer.observe(&element);
                            watching = Some(observer);
                            callback.forget();
                        }
                        Err(err) => {
                            gloo_console::error!("could not watch element for reveal", err);
                            revealed.set(true);
                        }
                    }
                } else {
                    // Nothing to observe, show the content outright.
                    revealed.set(true);
                }
                move || {
                    if let Some(observer) = watching {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    let class = classes!(
        "reveal-card",
        props.class.clone(),
        (*revealed).then_some("revealed")
    );
    html! {
        <div ref={node} class={class} style={format!("transition-delay: {}ms;", props.delay_ms)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_exactly_once() {
        let mut latch = OneShot::default();
        assert!(!latch.fired());
        assert!(latch.trigger());
        assert!(latch.fired());
        assert!(!latch.trigger());
        assert!(!latch.trigger());
        assert!(latch.fired());
    }
}
