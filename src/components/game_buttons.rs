use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameButtonsProps {
    pub show: bool,
    pub restart: Callback<()>,
    pub to_menu: Callback<()>,
}

#[function_component]
pub fn GameButtons(props: &GameButtonsProps) -> Html {
    let restart_btn = {
        let cb = props.restart.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let menu_btn = {
        let cb = props.to_menu.clone();
        Callback::from(move |_| cb.emit(()))
    };
    // Hidden rather than removed so the page does not jump when a game ends.
    let visibility = if props.show { "visible" } else { "hidden" };
    html! {
        <div id="game-buttons" style={format!("visibility:{}; display:flex; gap:12px; justify-content:center; margin-top:12px;", visibility)}>
            <button id="btn-restart" onclick={restart_btn}>{"Restart"}</button>
            <button id="btn-menu" onclick={menu_btn}>{"Menu"}</button>
        </div>
    }
}
