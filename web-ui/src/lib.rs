// Web UI library for Looker Export
//
// This crate provides the Yew components for the export form
// and the App component that owns the form state.

use chrono::NaiveDate;
use yew::prelude::*;

pub mod components;
pub mod model;

// Re-export components
pub use components::*;
pub use model::FormModel;

/// Current local date in the browser
fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Origin of the page, which also serves the relay endpoint
fn relay_base_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_else(looker_export_api_client::get_api_base_url)
}

/// Main application component (form state and event handling)
#[function_component(App)]
pub fn app() -> Html {
    use looker_export_api_client::submit_export;
    use looker_export_core::{ExploreView, ExportForm, FormAction};
    use wasm_bindgen_futures::spawn_local;

    let form = use_reducer(|| FormModel::new(ExportForm::new(today())));

    let on_view_change = {
        let form = form.clone();
        Callback::from(move |view: ExploreView| form.dispatch(FormAction::SelectView(view)))
    };

    let on_start_change = {
        let form = form.clone();
        Callback::from(move |date: Option<NaiveDate>| form.dispatch(FormAction::SetStartDate(date)))
    };

    let on_end_change = {
        let form = form.clone();
        Callback::from(move |date: Option<NaiveDate>| form.dispatch(FormAction::SetEndDate(date)))
    };

    let on_no_end_date_change = {
        let form = form.clone();
        Callback::from(move |on: bool| form.dispatch(FormAction::SetNoEndDate(on)))
    };

    let on_limit_input = {
        let form = form.clone();
        Callback::from(move |input: String| form.dispatch(FormAction::SetLimitInput(input)))
    };

    let on_no_limit_change = {
        let form = form.clone();
        Callback::from(move |on: bool| form.dispatch(FormAction::SetNoLimit(on)))
    };

    let on_submit = {
        let form = form.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.can_submit() {
                return;
            }

            let request = form.build_request(today());
            form.dispatch(FormAction::SubmissionStarted);

            let form = form.clone();
            spawn_local(async move {
                let result = submit_export(&relay_base_url(), &request).await;
                form.dispatch(FormAction::SubmissionCompleted(result));
            });
        })
    };

    html! {
        <div class="page">
            <div class="card">
                <div class="card-header">
                    <h3>{ "Looker Data Export" }</h3>
                    <p class="card-subtitle">{ "Export data from Looker views and send to Zapier" }</p>
                </div>

                <form class="export-form" onsubmit={on_submit}>
                    <ViewSelector value={form.view} on_change={on_view_change} />
                    <DateRange
                        start_date={form.start_date}
                        end_date={form.end_date}
                        no_end_date={form.no_end_date}
                        on_start_change={on_start_change}
                        on_end_change={on_end_change}
                        on_no_end_date_change={on_no_end_date_change}
                    />
                    <LimitControl
                        limit={form.limit}
                        no_limit={form.no_limit}
                        on_limit_input={on_limit_input}
                        on_no_limit_change={on_no_limit_change}
                    />
                    <SubmitButton loading={form.loading} />
                </form>

                if let Some(result) = form.result.clone() {
                    <ResultPanel result={result} />
                }
            </div>
        </div>
    }
}
