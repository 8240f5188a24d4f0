//! Grid presets offered by the menu and the preferences kept in localStorage.

use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "ms_preferences";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    Small,
    Medium,
    Large,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Small, Preset::Medium, Preset::Large];

    pub fn rows(self) -> u32 {
        match self {
            Preset::Small => 6,
            Preset::Medium => 10,
            Preset::Large => 15,
        }
    }

    pub fn cols(self) -> u32 {
        self.rows()
    }

    pub fn bombs(self) -> u32 {
        match self {
            Preset::Small => 5,
            Preset::Medium => 16,
            Preset::Large => 30,
        }
    }

    pub fn label(self) -> String {
        format!("{} x {}", self.rows(), self.cols())
    }

    /// DOM id of the menu button starting this preset.
    pub fn button_id(self) -> String {
        format!("btn-{}-by-{}", self.rows(), self.cols())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub preset: Preset,
    pub wins: u32,
    pub losses: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub last_preset: Option<Preset>,
    pub records: Vec<Record>,
}

impl Preferences {
    pub fn record(&self, preset: Preset) -> Record {
        self.records
            .iter()
            .copied()
            .find(|r| r.preset == preset)
            .unwrap_or(Record {
                preset,
                wins: 0,
                losses: 0,
            })
    }

    pub fn record_result(&mut self, preset: Preset, won: bool) {
        let idx = match self.records.iter().position(|r| r.preset == preset) {
            Some(i) => i,
            None => {
                let fresh = self.record(preset);
                self.records.push(fresh);
                self.records.len() - 1
            }
        };
        let rec = &mut self.records[idx];
        if won {
            rec.wins = rec.wins.saturating_add(1);
        } else {
            rec.losses = rec.losses.saturating_add(1);
        }
    }

    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    pub fn load() -> Option<Self> {
        let store = web_sys::window()?.local_storage().ok()??;
        let raw = store.get_item(STORAGE_KEY).ok()??;
        Self::from_json(&raw)
    }

    pub fn save(&self) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Some(s) = self.to_json() {
                    let _ = store.set_item(STORAGE_KEY, &s);
                }
            }
        }
    }
}
