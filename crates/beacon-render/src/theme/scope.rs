//! The theme scope: resolves the initial mode and shares it with consumers.
//!
//! A [`ThemeScope`] is created once at the root of a page composition and
//! passed down explicitly. Cloning the scope hands out another view onto the
//! same state; there is never a second writable copy. Every write goes through
//! [`set_theme`](ThemeScope::set_theme) or
//! [`toggle_theme`](ThemeScope::toggle_theme), which mirror the new mode onto
//! the document and notify subscribers.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::document::ThemeMirror;

use super::ambient::{get_system_preference, AmbientPreference};
use super::mode::ColorMode;

/// How the initial mode is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeOptions {
    /// Explicit default; wins over the system preference when set.
    pub default_mode: Option<ColorMode>,
    /// Skip reading the ambient preference altogether.
    pub disable_system_preference: bool,
}

impl ThemeOptions {
    pub fn with_default(mut self, mode: ColorMode) -> Self {
        self.default_mode = Some(mode);
        self
    }

    pub fn without_system_preference(mut self) -> Self {
        self.disable_system_preference = true;
        self
    }
}

/// Point-in-time view of the scope's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    pub current_mode: ColorMode,
    /// `None` when system preference detection is disabled.
    pub system_preference: Option<ColorMode>,
}

impl ThemeState {
    /// Computes the initial state.
    pub fn resolve(options: ThemeOptions, ambient: &dyn AmbientPreference) -> Self {
        if options.disable_system_preference {
            return Self {
                current_mode: options.default_mode.unwrap_or(ColorMode::Light),
                system_preference: None,
            };
        }

        let system = get_system_preference(ambient);
        Self {
            current_mode: options.default_mode.unwrap_or(system),
            system_preference: Some(system),
        }
    }
}

/// Handle returned by [`ThemeScope::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener = Arc<dyn Fn(ColorMode) + Send + Sync>;

struct ScopeInner {
    state: ThemeState,
    mirror: ThemeMirror,
    listeners: Vec<(Subscription, Listener)>,
    next_id: u64,
}

/// Shared theme state for one page composition.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use beacon_render::theme::{FixedPreference, ThemeOptions, ThemeScope};
/// use beacon_render::{ColorMode, Document, ThemeMirror, DARK_CLASS};
///
/// let document = Arc::new(Document::new());
/// let scope = ThemeScope::initialize(
///     ThemeOptions::default(),
///     &FixedPreference(ColorMode::Dark),
///     ThemeMirror::attached(Arc::clone(&document)),
/// );
/// assert_eq!(scope.mode(), ColorMode::Dark);
/// assert!(document.has_class(DARK_CLASS));
///
/// scope.set_theme(ColorMode::Light);
/// assert!(!document.has_class(DARK_CLASS));
///
/// scope.toggle_theme();
/// assert_eq!(scope.mode(), ColorMode::Dark);
/// ```
#[derive(Clone)]
pub struct ThemeScope {
    inner: Arc<Mutex<ScopeInner>>,
}

impl ThemeScope {
    /// Resolves the initial mode and applies it to the mirror once.
    pub fn initialize(
        options: ThemeOptions,
        ambient: &dyn AmbientPreference,
        mirror: ThemeMirror,
    ) -> Self {
        let state = ThemeState::resolve(options, ambient);
        mirror.apply_theme(state.current_mode);
        tracing::debug!(
            mode = %state.current_mode,
            system = ?state.system_preference,
            explicit_default = ?options.default_mode,
            "theme scope initialized"
        );

        Self {
            inner: Arc::new(Mutex::new(ScopeInner {
                state,
                mirror,
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    pub fn state(&self) -> ThemeState {
        self.lock().state
    }

    pub fn mode(&self) -> ColorMode {
        self.lock().state.current_mode
    }

    pub fn system_preference(&self) -> Option<ColorMode> {
        self.lock().state.system_preference
    }

    /// Overwrites the current mode.
    pub fn set_theme(&self, mode: ColorMode) {
        self.transition(|_| mode);
    }

    /// Switches to the other mode.
    pub fn toggle_theme(&self) {
        self.transition(ColorMode::toggled);
    }

    /// Registers a listener called with the new mode after each change.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(ColorMode) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let id = Subscription(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut inner = self.lock();
        let before = inner.listeners.len();
        inner.listeners.retain(|(id, _)| *id != subscription);
        inner.listeners.len() != before
    }

    fn transition(&self, next: impl FnOnce(ColorMode) -> ColorMode) {
        // Listeners run after the lock is released so they may read the scope.
        let (mode, listeners) = {
            let mut inner = self.lock();
            let previous = inner.state.current_mode;
            let mode = next(previous);
            inner.state.current_mode = mode;
            inner.mirror.apply_theme(mode);

            if mode == previous {
                return;
            }
            tracing::debug!(from = %previous, to = %mode, "theme changed");
            let listeners: Vec<Listener> = inner
                .listeners
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect();
            (mode, listeners)
        };

        for listener in listeners {
            listener(mode);
        }
    }

    fn lock(&self) -> MutexGuard<'_, ScopeInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for ThemeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("ThemeScope")
            .field("state", &inner.state)
            .field("listeners", &inner.listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, DARK_CLASS};
    use crate::theme::ambient::{FixedPreference, NoPreference};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn scope_with_document(
        options: ThemeOptions,
        ambient: &dyn AmbientPreference,
    ) -> (ThemeScope, Arc<Document>) {
        let document = Arc::new(Document::new());
        let scope = ThemeScope::initialize(
            options,
            ambient,
            ThemeMirror::attached(Arc::clone(&document)),
        );
        (scope, document)
    }

    #[test]
    fn system_preference_seeds_mode_without_default() {
        let dark = ThemeState::resolve(ThemeOptions::default(), &FixedPreference(ColorMode::Dark));
        assert_eq!(dark.current_mode, ColorMode::Dark);
        assert_eq!(dark.system_preference, Some(ColorMode::Dark));

        let light =
            ThemeState::resolve(ThemeOptions::default(), &FixedPreference(ColorMode::Light));
        assert_eq!(light.current_mode, ColorMode::Light);
        assert_eq!(light.system_preference, Some(ColorMode::Light));
    }

    #[test]
    fn explicit_default_wins_over_system() {
        let state = ThemeState::resolve(
            ThemeOptions::default().with_default(ColorMode::Light),
            &FixedPreference(ColorMode::Dark),
        );
        assert_eq!(state.current_mode, ColorMode::Light);
        assert_eq!(state.system_preference, Some(ColorMode::Dark));
    }

    #[test]
    fn disabled_detection_ignores_signal() {
        let state = ThemeState::resolve(
            ThemeOptions::default().without_system_preference(),
            &FixedPreference(ColorMode::Dark),
        );
        assert_eq!(state.current_mode, ColorMode::Light);
        assert_eq!(state.system_preference, None);

        let state = ThemeState::resolve(
            ThemeOptions::default()
                .with_default(ColorMode::Dark)
                .without_system_preference(),
            &FixedPreference(ColorMode::Light),
        );
        assert_eq!(state.current_mode, ColorMode::Dark);
        assert_eq!(state.system_preference, None);
    }

    #[test]
    fn unavailable_signal_resolves_light() {
        let state = ThemeState::resolve(ThemeOptions::default(), &NoPreference);
        assert_eq!(state.current_mode, ColorMode::Light);
        assert_eq!(state.system_preference, Some(ColorMode::Light));
    }

    #[test]
    fn initialize_applies_marker() {
        let (_scope, document) =
            scope_with_document(ThemeOptions::default(), &FixedPreference(ColorMode::Dark));
        assert!(document.has_class(DARK_CLASS));
    }

    #[test]
    fn set_and_toggle_walk_the_state_machine() {
        let (scope, document) =
            scope_with_document(ThemeOptions::default(), &FixedPreference(ColorMode::Dark));

        scope.set_theme(ColorMode::Light);
        assert_eq!(scope.mode(), ColorMode::Light);
        assert!(!document.has_class(DARK_CLASS));

        scope.toggle_theme();
        assert_eq!(scope.mode(), ColorMode::Dark);
        assert!(document.has_class(DARK_CLASS));
    }

    #[test]
    fn clones_share_state() {
        let (scope, _document) = scope_with_document(ThemeOptions::default(), &NoPreference);
        let consumer = scope.clone();

        consumer.toggle_theme();
        assert_eq!(scope.mode(), ColorMode::Dark);
    }

    #[test]
    fn listeners_fire_on_change_only() {
        let (scope, _document) = scope_with_document(ThemeOptions::default(), &NoPreference);
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        scope.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        scope.set_theme(ColorMode::Light);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        scope.set_theme(ColorMode::Dark);
        scope.toggle_theme();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn listener_may_read_scope() {
        let (scope, _document) = scope_with_document(ThemeOptions::default(), &NoPreference);
        let observed = Arc::new(Mutex::new(Vec::new()));
        let reader = scope.clone();
        let sink = Arc::clone(&observed);
        scope.subscribe(move |mode| {
            sink.lock().unwrap().push((mode, reader.mode()));
        });

        scope.toggle_theme();
        assert_eq!(
            *observed.lock().unwrap(),
            vec![(ColorMode::Dark, ColorMode::Dark)]
        );
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let (scope, _document) = scope_with_document(ThemeOptions::default(), &NoPreference);
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let id = scope.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        scope.toggle_theme();
        assert!(scope.unsubscribe(id));
        assert!(!scope.unsubscribe(id));
        scope.toggle_theme();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn detached_scope_still_tracks_mode() {
        let scope = ThemeScope::initialize(
            ThemeOptions::default().with_default(ColorMode::Dark),
            &NoPreference,
            ThemeMirror::detached(),
        );
        scope.toggle_theme();
        assert_eq!(scope.mode(), ColorMode::Light);
    }
}
