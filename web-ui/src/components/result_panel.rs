// Result panel for the last export

use looker_export_core::{ExportOutcome, ExportResult};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub result: ExportResult,
}

#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    let body = match props.result.outcome() {
        ExportOutcome::Failure { error } => html! {
            <div class="result error">
                <h3 class="result-title">{ "Error" }</h3>
                <p>{ error.to_string() }</p>
            </div>
        },
        ExportOutcome::Success {
            message,
            records_exported,
            filename,
            sheet_url,
        } => html! {
            <div class="result success">
                <h3 class="result-title">{ "Success" }</h3>
                if let Some(message) = message {
                    <p>{ message.to_string() }</p>
                }
                if let Some(count) = records_exported {
                    <p>{ format!("Records exported: {}", count) }</p>
                }
                if let Some(filename) = filename {
                    <p>{ format!("File name: {}", filename) }</p>
                }
                if let Some(url) = sheet_url {
                    <p>
                        { "Sheet: " }
                        <a href={url.to_string()} target="_blank" rel="noopener noreferrer">{ url.to_string() }</a>
                    </p>
                }
            </div>
        },
    };

    html! {
        <div class="result-area">{ body }</div>
    }
}
