//! Keyboard mapping
//!
//! Key events arrive between frames. Unknown keys map to nothing and are
//! dropped silently.

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Jump,
    /// Start a fresh session after game over
    Restart,
}

/// Map a `KeyboardEvent.code` to an in-game action
pub fn action_for_key(code: &str) -> Option<InputAction> {
    match code {
        "Space" | "ArrowUp" | "KeyW" => Some(InputAction::Jump),
        "Enter" | "NumpadEnter" | "KeyR" => Some(InputAction::Restart),
        _ => None,
    }
}

/// Alt+F12 launches the hidden game, once per page
#[derive(Debug, Clone, Default)]
pub struct SecretTrigger {
    triggered: bool,
}

impl SecretTrigger {
    pub fn new() -> Self {
        Self { triggered: false }
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// True exactly once, on the first Alt+F12
    pub fn check(&mut self, code: &str, alt: bool) -> bool {
        if self.triggered || !alt || code != "F12" {
            return false;
        }
        self.triggered = true;
        log::info!("[SECRET] Combo detected: Alt + F12");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_keys() {
        assert_eq!(action_for_key("Space"), Some(InputAction::Jump));
        assert_eq!(action_for_key("ArrowUp"), Some(InputAction::Jump));
        assert_eq!(action_for_key("Enter"), Some(InputAction::Restart));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        assert_eq!(action_for_key(""), None);
        assert_eq!(action_for_key("space"), None);
        assert_eq!(action_for_key("Unidentified"), None);
    }

    #[test]
    fn test_secret_fires_once() {
        let mut trigger = SecretTrigger::new();
        assert!(!trigger.check("F12", false));
        assert!(!trigger.check("F11", true));
        assert!(trigger.check("F12", true));
        assert!(trigger.is_triggered());
        assert!(!trigger.check("F12", true));
    }
}
