//! Story themes and call-time theme selection.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Genre labels offered when the caller supplies none.
pub const DEFAULT_THEMES: [&str; 7] = [
    "Science fiction",
    "Fantasy",
    "Thriller",
    "Romance",
    "Horror",
    "Novel",
    "Drama",
];

/// A short label seeding the story's genre or setting.
///
/// # Examples
///
/// ```
/// use taleweaver_core::Theme;
///
/// let theme = Theme::from("Fantasy");
/// assert_eq!(theme.as_str(), "Fantasy");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
pub struct Theme(String);

impl Theme {
    /// Create a theme from any label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Theme {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Theme {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// Fresh copy of the built-in theme set.
pub fn default_themes() -> Vec<Theme> {
    DEFAULT_THEMES.iter().map(|label| Theme::from(*label)).collect()
}

/// Pick one theme uniformly at random.
///
/// An empty slice falls back to [`DEFAULT_THEMES`]. Selection happens on
/// every call, so no choice is ever cached between requests.
pub fn pick_theme(themes: &[Theme]) -> Theme {
    pick_theme_with(themes, &mut rand::thread_rng())
}

/// [`pick_theme`] with a caller-supplied random source.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use taleweaver_core::{Theme, pick_theme_with};
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let only = [Theme::from("Noir")];
/// assert_eq!(pick_theme_with(&only, &mut rng).as_str(), "Noir");
/// ```
pub fn pick_theme_with<R: Rng + ?Sized>(themes: &[Theme], rng: &mut R) -> Theme {
    match themes.choose(rng) {
        Some(theme) => theme.clone(),
        None => {
            let index = rng.gen_range(0..DEFAULT_THEMES.len());
            Theme::from(DEFAULT_THEMES[index])
        }
    }
}
