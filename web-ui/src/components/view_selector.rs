// View selector component

use looker_export_core::ExploreView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ViewSelectorProps {
    pub value: ExploreView,
    pub on_change: Callback<ExploreView>,
}

#[function_component(ViewSelector)]
pub fn view_selector(props: &ViewSelectorProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Ok(view) = select.value().parse::<ExploreView>() {
                on_change.emit(view);
            }
        })
    };

    html! {
        <div class="field">
            <label for="view" class="field-label">{ "Select View" }</label>
            <select id="view" name="view" class="field-select" {onchange}>
                { for ExploreView::ALL.iter().map(|view| html! {
                    <option
                        key={view.value()}
                        value={view.value()}
                        selected={*view == props.value}
                    >
                        { view.label() }
                    </option>
                }) }
            </select>
        </div>
    }
}
