use super::{board_canvas::BoardCanvas, game_buttons::GameButtons, menu_panel::MenuPanel, status_line::StatusLine};
use crate::config::{Preferences, Preset};
use crate::session::{Screen, Session, SessionAction, Status};
use crate::util::{clog, new_seed};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let session = use_reducer(Session::default);
    let preferences = use_state(Preferences::default);

    // Load persisted preferences
    {
        let preferences = preferences.clone();
        use_effect_with((), move |_| {
            if let Some(p) = Preferences::load() {
                preferences.set(p);
            }
            || ()
        });
    }
    // Tally each game once it ends
    {
        let preferences = preferences.clone();
        let preset = session.preset;
        use_effect_with((session.game_id, session.status), move |&(game_id, status)| {
            let won = match status {
                Status::Won => Some(true),
                Status::Lost => Some(false),
                _ => None,
            };
            if let (Some(won), Some(preset)) = (won, preset) {
                clog(&format!("game {} on {} {}", game_id, preset.label(), if won { "won" } else { "lost" }));
                let mut p = (*preferences).clone();
                p.record_result(preset, won);
                p.save();
                preferences.set(p);
            }
            || ()
        });
    }

    let start = {
        let session = session.clone();
        let preferences = preferences.clone();
        Callback::from(move |preset: Preset| {
            session.dispatch(SessionAction::NewGame { preset, seed: new_seed() });
            let mut p = (*preferences).clone();
            p.last_preset = Some(preset);
            p.save();
            preferences.set(p);
        })
    };
    let restart = {
        let session = session.clone();
        Callback::from(move |()| session.dispatch(SessionAction::Restart { seed: new_seed() }))
    };
    let to_menu = {
        let session = session.clone();
        Callback::from(move |()| session.dispatch(SessionAction::BackToMenu))
    };

    let flags_remaining = match (session.status, session.field.as_ref()) {
        (Status::Playing, Some(field)) => Some((field.flags_remaining(), field.num_bombs())),
        _ => None,
    };
    let on_game = session.screen == Screen::Game;

    html! {
        <div id="root" style="display:flex; flex-direction:column; align-items:center; font-family:sans-serif;">
            <h1 style="margin:12px 0 4px 0;">{"Minesweeper"}</h1>
            <StatusLine text={session.status_text()} flags_remaining={flags_remaining} />
            if on_game {
                <BoardCanvas key={session.game_id.to_string()} session={session.clone()} />
            }
            <GameButtons show={session.game_buttons_visible()} restart={restart} to_menu={to_menu} />
            <MenuPanel show={!on_game} preferences={(*preferences).clone()} on_select={start} />
        </div>
    }
}
