use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusLineProps {
    pub text: AttrValue,
    /// Bombs left to flag, shown while a game is running.
    pub flags_remaining: Option<(i64, u32)>,
}

#[function_component(StatusLine)]
pub fn status_line(props: &StatusLineProps) -> Html {
    html! {<div style="text-align:center; margin:8px 0;">
        <p id="info" style="margin:4px 0;">{ props.text.clone() }</p>
        {
            match props.flags_remaining {
                Some((left, total)) => html! { <p id="flags" style="margin:4px 0; font-size:13px; opacity:0.8;">{ format!("Mines left: {} / {}", left, total) }</p> },
                None => html! {},
            }
        }
    </div>}
}
