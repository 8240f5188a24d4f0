use yew::prelude::*;

use crate::config::{Preferences, Preset};

#[derive(Properties, PartialEq, Clone)]
pub struct MenuPanelProps {
    pub show: bool,
    pub preferences: Preferences,
    pub on_select: Callback<Preset>,
}

#[function_component(MenuPanel)]
pub fn menu_panel(props: &MenuPanelProps) -> Html {
    let display = if props.show { "flex" } else { "none" };
    let buttons = Preset::ALL.iter().copied().map(|preset| {
        let onclick = {
            let cb = props.on_select.clone();
            Callback::from(move |_| cb.emit(preset))
        };
        let rec = props.preferences.record(preset);
        let border = if props.preferences.last_preset == Some(preset) {
            "2px solid #3e53aa"
        } else {
            "1px solid #30363d"
        };
        html! {
            <div key={preset.button_id()} style="display:flex; flex-direction:column; align-items:center; gap:4px;">
                <button id={preset.button_id()} onclick={onclick} style={format!("padding:8px 14px; border:{};", border)}>
                    { preset.label() }
                </button>
                <span style="font-size:11px; opacity:0.7;">{ format!("{} won / {} lost", rec.wins, rec.losses) }</span>
            </div>
        }
    });
    html! {
        <div id="menu" style={format!("display:{}; gap:16px; justify-content:center; margin:12px 0;", display)}>
            { for buttons }
        </div>
    }
}
