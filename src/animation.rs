//! Process-wide reveal animation settings.
//!
//! Set once by the client entrypoint with [`init`]; everything else only reads
//! them through [`config`].

use std::sync::OnceLock;
use thiserror::Error;

static ANIMATION: OnceLock<AnimationConfig> = OnceLock::new();

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    #[error("animation settings were already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    FadeUp,
    FadeIn,
    ZoomIn,
}

impl Effect {
    pub const ALL: [Effect; 3] = [Effect::FadeUp, Effect::FadeIn, Effect::ZoomIn];

    pub fn as_str(self) -> &'static str {
        match self {
            Effect::FadeUp => "fade-up",
            Effect::FadeIn => "fade-in",
            Effect::ZoomIn => "zoom-in",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationConfig {
    pub duration_ms: u32,
    pub easing: &'static str,
    pub offset_px: u32,
    /// Keep a section revealed after the first time it scrolls into view.
    pub once: bool,
    pub effect: Effect,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            easing: "ease",
            offset_px: 120,
            once: false,
            effect: Effect::FadeUp,
        }
    }
}

impl AnimationConfig {
    /// Inline custom properties consumed by `style/main.css`.
    pub fn style(&self) -> String {
        format!(
            "--reveal-duration: {}ms; --reveal-easing: {}; --reveal-offset: {}px",
            self.duration_ms, self.easing, self.offset_px
        )
    }
}

pub fn init(config: AnimationConfig) -> Result<(), AnimationError> {
    ANIMATION
        .set(config)
        .map_err(|_| AnimationError::AlreadyInitialized)
}

/// The settings passed to [`init`], or the defaults when it never ran (SSR).
pub fn config() -> &'static AnimationConfig {
    static FALLBACK: OnceLock<AnimationConfig> = OnceLock::new();
    ANIMATION
        .get()
        .unwrap_or_else(|| FALLBACK.get_or_init(AnimationConfig::default))
}
