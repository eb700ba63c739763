use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::camera::MoveIntent;
use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions and movement intents to
/// key codes (`KeyboardEvent.code` strings such as `"KeyW"`).
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ResetCamera` → `"KeyR"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Maps fly movement intent → key string (e.g. `Forward` → `"KeyW"`).
    pub movement: HashMap<MoveIntent, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
    /// Reverse lookup cache (key string → intent). Rebuilt on load.
    #[serde(skip)]
    key_to_intent: HashMap<String, MoveIntent>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::OrbitMode, "Digit1".into()),
            (KeyAction::FlyMode, "Digit2".into()),
            (KeyAction::ResetCamera, "KeyR".into()),
            (KeyAction::ToggleFullscreen, "KeyF".into()),
            (KeyAction::ToggleShadows, "KeyS".into()),
            (KeyAction::Screenshot, "KeyP".into()),
            (KeyAction::CloseInfoPanel, "Escape".into()),
        ]);
        let movement = HashMap::from([
            (MoveIntent::Forward, "KeyW".into()),
            (MoveIntent::Backward, "KeyS".into()),
            (MoveIntent::Left, "KeyA".into()),
            (MoveIntent::Right, "KeyD".into()),
            (MoveIntent::Up, "Space".into()),
            (MoveIntent::Down, "ShiftLeft".into()),
        ]);

        let mut opts = Self {
            bindings,
            movement,
            key_to_action: HashMap::new(),
            key_to_intent: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup maps (key string → action / intent).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
        self.key_to_intent.clear();
        for (intent, key) in &self.movement {
            let _ = self.key_to_intent.insert(key.clone(), *intent);
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }

    /// Look up the movement intent for a key string.
    #[must_use]
    pub fn lookup_movement(&self, key: &str) -> Option<MoveIntent> {
        self.key_to_intent.get(key).copied()
    }
}
