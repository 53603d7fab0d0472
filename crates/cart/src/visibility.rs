use serde::{Deserialize, Serialize};

/// Whether the shopping cart panel is displayed.
///
/// Starts `Hidden`; toggles between the two states for the whole session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CartVisibility {
    #[default]
    Hidden,
    Shown,
}

impl CartVisibility {
    pub fn toggled(self) -> Self {
        match self {
            CartVisibility::Hidden => CartVisibility::Shown,
            CartVisibility::Shown => CartVisibility::Hidden,
        }
    }

    pub fn is_shown(self) -> bool {
        self == CartVisibility::Shown
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CartVisibility::Hidden => "hidden",
            CartVisibility::Shown => "shown",
        }
    }
}
