// Record limit input with an unlimited toggle

use looker_export_core::{MAX_LIMIT, MIN_LIMIT};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LimitControlProps {
    pub limit: u32,
    pub no_limit: bool,
    /// Raw input text; coercion happens in the form model
    pub on_limit_input: Callback<String>,
    pub on_no_limit_change: Callback<bool>,
}

#[function_component(LimitControl)]
pub fn limit_control(props: &LimitControlProps) -> Html {
    let on_input = {
        let on_limit_input = props.on_limit_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_limit_input.emit(input.value());
        })
    };

    let on_toggle = {
        let on_no_limit_change = props.on_no_limit_change.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_no_limit_change.emit(input.checked());
        })
    };

    html! {
        <div class="field-group">
            <div class="checkbox-row">
                <input
                    id="noLimit"
                    name="noLimit"
                    type="checkbox"
                    checked={props.no_limit}
                    onchange={on_toggle}
                />
                <label for="noLimit">{ "No record limit" }</label>
            </div>

            if !props.no_limit {
                <div class="field">
                    <label for="limit" class="field-label">{ "Record Limit" }</label>
                    <input
                        type="number"
                        id="limit"
                        name="limit"
                        class="field-input"
                        min={MIN_LIMIT.to_string()}
                        max={MAX_LIMIT.to_string()}
                        value={props.limit.to_string()}
                        oninput={on_input}
                    />
                </div>
            }
        </div>
    }
}
