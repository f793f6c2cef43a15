//! Platform detection for platform-specific behavior.
//!
//! The modifier that means "open in new tab" is Meta on Apple platforms and
//! Ctrl everywhere else, so intent checks need to know which one we're on.

use std::sync::OnceLock;

/// Cached platform detection results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Platform {
    pub ios: bool,
    pub mac: bool,
}

impl Platform {
    /// Classify from raw navigator values.
    ///
    /// `user_agent` and `platform` are matched case-insensitively.
    /// `max_touch_points` distinguishes iPadOS (which reports a Mac platform)
    /// from desktop macOS.
    pub fn from_navigator(user_agent: &str, platform: &str, max_touch_points: i32) -> Self {
        let user_agent = user_agent.to_lowercase();
        let platform = platform.to_lowercase();

        // iPhone/iPad/iPod in UA, or Mac platform with touch
        let ios = user_agent.contains("iphone")
            || user_agent.contains("ipad")
            || user_agent.contains("ipod")
            || (platform.contains("mac") && max_touch_points > 0);

        let mac = platform.contains("mac") && !ios;

        Platform { ios, mac }
    }

    /// Apple-class platform (macOS or iOS/iPadOS).
    pub fn is_apple(&self) -> bool {
        self.mac || self.ios
    }
}

static PLATFORM: OnceLock<Platform> = OnceLock::new();

/// Get cached platform info. Detection runs once on first call.
pub fn platform() -> &'static Platform {
    PLATFORM.get_or_init(detect_platform)
}

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
fn detect_platform() -> Platform {
    let Some(window) = web_sys::window() else {
        tracing::warn!("platform detection without a window, assuming defaults");
        return Platform::default();
    };

    let navigator = window.navigator();
    let user_agent = navigator.user_agent().unwrap_or_default();
    let platform_str = navigator.platform().unwrap_or_default();

    Platform::from_navigator(&user_agent, &platform_str, navigator.max_touch_points())
}

#[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
fn detect_platform() -> Platform {
    Platform::default()
}
