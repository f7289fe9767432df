// Date range component with an open-ended toggle

use chrono::NaiveDate;
use looker_export_core::{format_iso_date, parse_iso_date};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DateRangeProps {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub no_end_date: bool,
    pub on_start_change: Callback<Option<NaiveDate>>,
    pub on_end_change: Callback<Option<NaiveDate>>,
    pub on_no_end_date_change: Callback<bool>,
}

fn date_input_callback(callback: Callback<Option<NaiveDate>>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        callback.emit(parse_iso_date(&input.value()));
    })
}

#[function_component(DateRange)]
pub fn date_range(props: &DateRangeProps) -> Html {
    let on_start_input = date_input_callback(props.on_start_change.clone());
    let on_end_input = date_input_callback(props.on_end_change.clone());

    let on_toggle = {
        let on_no_end_date_change = props.on_no_end_date_change.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_no_end_date_change.emit(input.checked());
        })
    };

    let start_value = props.start_date.map(format_iso_date).unwrap_or_default();
    let end_value = props.end_date.map(format_iso_date).unwrap_or_default();

    html! {
        <div class="field-group">
            <div class="field">
                <label for="startDate" class="field-label">{ "Start Date" }</label>
                <input
                    type="date"
                    id="startDate"
                    name="startDate"
                    class="field-input"
                    value={start_value}
                    oninput={on_start_input}
                />
            </div>

            <div class="checkbox-row">
                <input
                    id="noEndDate"
                    name="noEndDate"
                    type="checkbox"
                    checked={props.no_end_date}
                    onchange={on_toggle}
                />
                <label for="noEndDate">{ "No end date" }</label>
            </div>

            if !props.no_end_date {
                <div class="field">
                    <label for="endDate" class="field-label">{ "End Date" }</label>
                    <input
                        type="date"
                        id="endDate"
                        name="endDate"
                        class="field-input"
                        value={end_value}
                        oninput={on_end_input}
                    />
                </div>
            }
        </div>
    }
}
