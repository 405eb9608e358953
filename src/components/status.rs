use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
}

/// Loading spinner or error message shown in place of a chart without data.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    if props.loading {
        html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading data..."}</p>
            </div>
        }
    } else if let Some(msg) = &props.error {
        html! {
            <div class="status error">
                <p>{"Failed to load: "}{msg}</p>
            </div>
        }
    } else {
        html! {}
    }
}
