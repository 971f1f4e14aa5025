//! Light/dark theme resolution and propagation.
//!
//! The site has exactly two display modes. Which one is active is decided once,
//! when the page composition creates its [`ThemeScope`]:
//!
//! 1. If system preference detection is disabled, use the explicit default, or
//!    light when there is none.
//! 2. Otherwise read the ambient preference (see [`AmbientPreference`]). An
//!    explicit default still wins; without one the system preference is used.
//!
//! After that the mode only changes through [`ThemeScope::set_theme`] and
//! [`ThemeScope::toggle_theme`]. Each change is mirrored onto the document root
//! (see [`crate::document`]) and broadcast to subscribers.
//!
//! ## Detection in tests
//!
//! Never call the OS from tests. Inject [`FixedPreference`] or
//! [`NoPreference`] instead:
//!
//! ```rust
//! use beacon_render::theme::{NoPreference, ThemeOptions, ThemeScope};
//! use beacon_render::{ColorMode, ThemeMirror};
//!
//! let scope = ThemeScope::initialize(ThemeOptions::default(), &NoPreference, ThemeMirror::detached());
//! assert_eq!(scope.mode(), ColorMode::Light);
//! ```

mod ambient;
mod mode;
mod scope;

pub use ambient::{
    get_system_preference, AmbientPreference, FixedPreference, NoPreference, OsPreference,
};
pub use mode::{ColorMode, ParseColorModeError};
pub use scope::{Subscription, ThemeOptions, ThemeScope, ThemeState};
