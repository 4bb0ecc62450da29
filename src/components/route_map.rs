use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::timeline::{
    entrance_timeline, TimelineState, CHAOS_PATHS, LOGO_SPIN_MS, MARKERS, MARKER_POP_MS, ROUTES,
    ROUTE_DRAW_MS,
};

fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// The hero illustration: a tangle of gray routes with the optimized Avara
/// routes drawing in over them, one marker per depot, logo badge last. Plays
/// once per mount; with reduced motion it renders the end state directly.
#[function_component(RouteMap)]
pub fn route_map() -> Html {
    let state = use_state(TimelineState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                if web_sys::window().is_none() || prefers_reduced_motion() {
                    // Degraded path: skip the motion, show the end state.
                    state.set(TimelineState::completed());
                } else {
                    spawn_local(async move {
                        let mut elapsed = 0u32;
                        let mut playing = TimelineState::default();
                        for event in entrance_timeline() {
                            if event.start_ms > elapsed {
                                TimeoutFuture::new(event.start_ms - elapsed).await;
                                elapsed = event.start_ms;
                            }
                            playing.apply(&event.target);
                            state.set(playing);
                        }
                        log::debug!("hero entrance timeline finished");
                    });
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="route-map">
            <div class="route-map-backdrop"></div>
            <svg viewBox="0 0 400 400" class="route-map-canvas">
                { for CHAOS_PATHS.iter().map(|d| html! {
                    <path d={*d} class="chaos-path" />
                }) }
                { for ROUTES.iter().enumerate().map(|(index, route)| {
                    let offset = if state.routes[index] { 0.0 } else { route.length };
                    html! {
                        <path
                            d={route.d}
                            class="route-line"
                            style={format!(
                                "stroke-dasharray: {len}; stroke-dashoffset: {offset}; transition: stroke-dashoffset {dur}ms ease-in-out;",
                                len = route.length,
                                offset = offset,
                                dur = ROUTE_DRAW_MS,
                            )}
                        />
                    }
                }) }
                { for MARKERS.iter().enumerate().map(|(index, marker)| {
                    let class = classes!("map-marker", state.markers[index].then_some("popped"));
                    html! {
                        <circle
                            cx={marker.x.to_string()}
                            cy={marker.y.to_string()}
                            r="4"
                            class={class}
                            style={format!("transition: transform {}ms ease-out;", MARKER_POP_MS)}
                        />
                    }
                }) }
            </svg>
            <div class="route-map-logo-wrap">
                <div
                    class={classes!("route-map-logo", state.logo.then_some("shown"))}
                    style={format!(
                        "transition: transform {}ms cubic-bezier(0.34, 1.56, 0.64, 1);",
                        LOGO_SPIN_MS,
                    )}
                >
                    {"A"}
                </div>
            </div>
            <style>
                {r#"
                .route-map {
                    position: relative;
                    aspect-ratio: 1 / 1;
                    max-width: 28rem;
                    margin: 0 auto;
                }
                .route-map-backdrop {
                    position: absolute;
                    inset: 0;
                    background: #111827;
                    border-radius: 1rem;
                    opacity: 0.3;
                }
                .route-map-canvas {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    border-radius: 1rem;
                    overflow: hidden;
                }
                .chaos-path {
                    stroke: #9CA3AF;
                    stroke-width: 1;
                    fill: none;
                    opacity: 0.6;
                }
                .route-line {
                    stroke: #F97316;
                    stroke-width: 3;
                    fill: none;
                    filter: drop-shadow(0 0 12px rgba(249, 115, 22, 0.7));
                }
                .map-marker {
                    fill: #F97316;
                    filter: drop-shadow(0 0 12px rgba(249, 115, 22, 0.8));
                    transform: scale(0);
                    transform-box: fill-box;
                    transform-origin: center;
                }
                .map-marker.popped {
                    transform: scale(1);
                }
                .route-map-logo-wrap {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .route-map-logo {
                    width: 4rem;
                    height: 4rem;
                    background: #fff;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #C2410C;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    transform: scale(0) rotate(-180deg);
                }
                .route-map-logo.shown {
                    transform: scale(1) rotate(0deg);
                }
                "#}
            </style>
        </div>
    }
}
