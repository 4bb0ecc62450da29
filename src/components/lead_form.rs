use web_sys::SubmitEvent;
use yew::prelude::*;

/// Demo-request form. There is no booking backend yet, so the submit handler
/// is an intentional no-op: it swallows the event and logs that the entry was
/// discarded. Nothing is validated, stored, or sent anywhere.
#[function_component(LeadForm)]
pub fn lead_form() -> Html {
    let discard_submission = Callback::from(|event: SubmitEvent| {
        event.prevent_default();
        log::info!("demo request submitted; no booking backend is wired up, discarding");
    });

    html! {
        <form class="lead-form" onsubmit={discard_submission}>
            <div class="lead-field">
                <label for="lead-name">{"Name"}</label>
                <input id="lead-name" type="text" placeholder="Your name" />
            </div>
            <div class="lead-field">
                <label for="lead-email">{"Work Email"}</label>
                <input id="lead-email" type="email" placeholder="your.email@company.com" />
            </div>
            <div class="lead-field">
                <label for="lead-company">{"Company Name"}</label>
                <input id="lead-company" type="text" placeholder="Your company" />
            </div>
            <div class="lead-field">
                <label for="lead-phone">{"Phone Number"}</label>
                <input id="lead-phone" type="tel" placeholder="+254 795 391 626" />
            </div>
            <div class="lead-submit">
                <button type="submit">{"Schedule My Demo"}</button>
            </div>
        </form>
    }
}
