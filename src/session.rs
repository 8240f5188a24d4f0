//! Game session reducer: which screen is up, the current minefield and
//! how the game stands.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::rc::Rc;
use yew::Reducible;

use crate::config::Preset;
use crate::model::{Minefield, MinefieldError};
use crate::util::clog;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Game,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Idle,
    Playing,
    Won,
    Lost,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub screen: Screen,
    /// Preset of the current (or last) game, reused by Restart.
    pub preset: Option<Preset>,
    pub field: Option<Minefield>,
    pub status: Status,
    /// Bumped on every state change; the board redraws when it moves.
    pub version: u64,
    /// Bumped on every new game so the board canvas is rebuilt.
    pub game_id: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            screen: Screen::Menu,
            preset: None,
            field: None,
            status: Status::Idle,
            version: 0,
            game_id: 0,
        }
    }
}

impl Session {
    fn start(&mut self, preset: Preset, seed: u64) -> Result<(), MinefieldError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let field = Minefield::new(preset.rows(), preset.cols(), preset.bombs(), &mut rng)?;
        self.field = Some(field);
        self.preset = Some(preset);
        self.screen = Screen::Game;
        self.status = Status::Playing;
        self.game_id += 1;
        Ok(())
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, Status::Won | Status::Lost)
    }

    pub fn status_text(&self) -> &'static str {
        match (self.screen, self.status) {
            (Screen::Game, Status::Playing) => "left click: reveal tile - right click: flag mine",
            (Screen::Game, Status::Won) => "You've won!",
            (Screen::Game, Status::Lost) => "You've lost!",
            _ => "Choose a grid size to start",
        }
    }

    pub fn game_buttons_visible(&self) -> bool {
        self.screen == Screen::Game && self.is_finished()
    }
}

#[derive(Clone, Debug)]
pub enum SessionAction {
    NewGame { preset: Preset, seed: u64 },
    Restart { seed: u64 },
    Reveal { row: u32, col: u32 },
    ToggleFlag { row: u32, col: u32 },
    BackToMenu,
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use SessionAction::*;
        let mut new = (*self).clone();
        match action {
            NewGame { preset, seed } => {
                if let Err(e) = new.start(preset, seed) {
                    clog(&format!("new game failed: {}", e));
                    return self;
                }
            }
            Restart { seed } => {
                let Some(preset) = new.preset else { return self };
                if let Err(e) = new.start(preset, seed) {
                    clog(&format!("restart failed: {}", e));
                    return self;
                }
            }
            Reveal { row, col } => {
                if new.status != Status::Playing {
                    return self;
                }
                let Some(field) = new.field.as_mut() else { return self };
                let Some(tile) = field.tile(row, col).copied() else { return self };
                if tile.flagged || tile.visible {
                    return self;
                }
                field.set_visible(row, col);
                if tile.bomb {
                    field.reveal_all();
                    new.status = Status::Lost;
                    clog(&format!("bomb at ({}, {})", row, col));
                } else if field.check_victory() {
                    new.status = Status::Won;
                }
            }
            ToggleFlag { row, col } => {
                if new.status != Status::Playing {
                    return self;
                }
                let Some(field) = new.field.as_mut() else { return self };
                match field.tile(row, col) {
                    Some(t) if !t.visible => {}
                    _ => return self,
                }
                field.toggle_flag(row, col);
                if field.check_victory() {
                    new.status = Status::Won;
                }
            }
            BackToMenu => {
                new.screen = Screen::Menu;
                new.field = None;
                new.status = Status::Idle;
            }
        }
        new.version = new.version.wrapping_add(1);
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(preset: Preset, seed: u64) -> Rc<Session> {
        Rc::new(Session::default()).reduce(SessionAction::NewGame { preset, seed })
    }

    fn find(session: &Session, bomb: bool) -> (u32, u32) {
        let field = session.field.as_ref().unwrap();
        let idx = field.tiles().iter().position(|t| t.bomb == bomb).unwrap();
        field.coordinates(idx)
    }

    #[test]
    fn new_game_leaves_the_menu() {
        let s = started(Preset::Medium, 11);
        assert_eq!(s.screen, Screen::Game);
        assert_eq!(s.status, Status::Playing);
        assert_eq!(s.game_id, 1);
        let field = s.field.as_ref().unwrap();
        assert_eq!((field.height(), field.width()), (10, 10));
        assert_eq!(s.status_text(), "left click: reveal tile - right click: flag mine");
        assert!(!s.game_buttons_visible());
    }

    #[test]
    fn revealing_a_bomb_loses_and_opens_the_board() {
        let s = started(Preset::Small, 5);
        let (row, col) = find(&s, true);
        let s = s.reduce(SessionAction::Reveal { row, col });
        assert_eq!(s.status, Status::Lost);
        assert!(s.field.as_ref().unwrap().tiles().iter().all(|t| t.visible));
        assert_eq!(s.status_text(), "You've lost!");
        assert!(s.game_buttons_visible());
    }

    #[test]
    fn flagged_tiles_cannot_be_revealed() {
        let s = started(Preset::Small, 8);
        let (row, col) = find(&s, true);
        let s = s.reduce(SessionAction::ToggleFlag { row, col });
        let version = s.version;
        let s = s.reduce(SessionAction::Reveal { row, col });
        assert_eq!(s.status, Status::Playing);
        assert_eq!(s.version, version);
        assert!(!s.field.as_ref().unwrap().tile(row, col).unwrap().visible);
    }

    #[test]
    fn flagging_every_bomb_after_clearing_wins() {
        let mut s = started(Preset::Small, 21);
        let field = s.field.clone().unwrap();
        for (idx, tile) in field.tiles().iter().enumerate() {
            let (row, col) = field.coordinates(idx);
            if !tile.bomb {
                s = s.reduce(SessionAction::Reveal { row, col });
            }
        }
        assert_eq!(s.status, Status::Playing);
        for (idx, tile) in field.tiles().iter().enumerate() {
            let (row, col) = field.coordinates(idx);
            if tile.bomb {
                s = s.reduce(SessionAction::ToggleFlag { row, col });
            }
        }
        assert_eq!(s.status, Status::Won);
        assert_eq!(s.status_text(), "You've won!");
    }

    #[test]
    fn finished_games_ignore_clicks() {
        let s = started(Preset::Small, 2);
        let (row, col) = find(&s, true);
        let lost = s.reduce(SessionAction::Reveal { row, col });
        let (safe_row, safe_col) = find(&lost, false);
        let after = lost.clone().reduce(SessionAction::ToggleFlag {
            row: safe_row,
            col: safe_col,
        });
        assert!(Rc::ptr_eq(&lost, &after));
    }

    #[test]
    fn revealing_an_open_tile_changes_nothing() {
        let s = started(Preset::Medium, 13);
        let (row, col) = find(&s, false);
        let opened = s.reduce(SessionAction::Reveal { row, col });
        assert!(opened.field.as_ref().unwrap().tile(row, col).unwrap().visible);
        let again = opened.clone().reduce(SessionAction::Reveal { row, col });
        assert!(Rc::ptr_eq(&opened, &again));
        assert_eq!(again.version, opened.version);
    }

    #[test]
    fn open_tiles_cannot_be_flagged() {
        let s = started(Preset::Medium, 17);
        let (row, col) = find(&s, false);
        let opened = s.reduce(SessionAction::Reveal { row, col });
        let after = opened.clone().reduce(SessionAction::ToggleFlag { row, col });
        assert!(Rc::ptr_eq(&opened, &after));
        assert_eq!(after.version, opened.version);
        assert!(!after.field.as_ref().unwrap().tile(row, col).unwrap().flagged);
    }

    #[test]
    fn restart_keeps_the_preset() {
        let s = started(Preset::Large, 4);
        let s = s.reduce(SessionAction::Restart { seed: 9 });
        assert_eq!(s.preset, Some(Preset::Large));
        assert_eq!(s.game_id, 2);
        assert_eq!(s.status, Status::Playing);
        assert_eq!(s.field.as_ref().unwrap().width(), 15);
    }

    #[test]
    fn restart_without_a_game_is_a_no_op() {
        let s = Rc::new(Session::default());
        let after = s.clone().reduce(SessionAction::Restart { seed: 1 });
        assert!(Rc::ptr_eq(&s, &after));
    }

    #[test]
    fn back_to_menu_drops_the_field() {
        let s = started(Preset::Small, 3);
        let s = s.reduce(SessionAction::BackToMenu);
        assert_eq!(s.screen, Screen::Menu);
        assert!(s.field.is_none());
        assert_eq!(s.status, Status::Idle);
        assert_eq!(s.status_text(), "Choose a grid size to start");
        assert!(!s.game_buttons_visible());
    }

    #[test]
    fn out_of_range_clicks_change_nothing() {
        let s = started(Preset::Small, 6);
        let after = s.clone().reduce(SessionAction::Reveal { row: 6, col: 0 });
        assert!(Rc::ptr_eq(&s, &after));
    }
}
