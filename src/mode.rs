//! Game mode selection.

/// Game mode - who is the opponent?
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display, strum::EnumIter,
)]
#[display("{}", self.name())]
pub enum GameMode {
    /// Two humans sharing the keyboard.
    #[default]
    HumanVsHuman,
    /// Human vs an AI choosing uniformly among empty cells.
    HumanVsRandom,
    /// Human vs a remote generative model.
    HumanVsGenerative,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Player vs Player",
            GameMode::HumanVsRandom => "Player vs Random AI",
            GameMode::HumanVsGenerative => "Player vs Generative AI",
        }
    }

    /// Command-line name of the mode.
    pub fn command(&self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "pvp",
            GameMode::HumanVsRandom => "random",
            GameMode::HumanVsGenerative => "ai",
        }
    }

    /// Whether O is played by the computer.
    pub fn has_ai(&self) -> bool {
        !matches!(self, GameMode::HumanVsHuman)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display_matches_name() {
        for mode in GameMode::iter() {
            assert_eq!(mode.to_string(), mode.name());
        }
        assert_eq!(GameMode::HumanVsGenerative.to_string(), "Player vs Generative AI");
    }

    #[test]
    fn test_only_pvp_has_no_ai() {
        let with_ai: Vec<_> = GameMode::iter().filter(GameMode::has_ai).collect();
        assert_eq!(with_ai, vec![GameMode::HumanVsRandom, GameMode::HumanVsGenerative]);
    }
}
