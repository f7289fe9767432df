// Submit button, disabled while an export is running

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub loading: bool,
}

#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    html! {
        <div class="form-actions">
            <button type="submit" class="submit-btn" disabled={props.loading}>
                if props.loading {
                    <>
                        <span class="spinner" />
                        { "Processing..." }
                    </>
                } else {
                    <>
                        { "Export Data" }
                        <span class="arrow">{ "→" }</span>
                    </>
                }
            </button>
        </div>
    }
}
