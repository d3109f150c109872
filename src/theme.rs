// Design tokens for the settings panels.
// Theme colors come from gpui-component's active theme (`cx.theme().background`, ...).
// This file only holds sizes and the few colors without a theme equivalent.

// =============================================================================
// Custom Colors (theme-aware)
// =============================================================================

pub mod colors {
    use gpui::{App, Hsla};
    use gpui_component::ActiveTheme as _;

    // Download ring around the logo
    pub fn progress_ring(cx: &App) -> Hsla {
        cx.theme().green
    }

    // Version tag background (cyan with alpha)
    pub fn bg_version_tag(cx: &App) -> Hsla {
        let mut c = cx.theme().cyan;
        c.a = 0.12;
        c
    }

    pub fn border_version_tag(cx: &App) -> Hsla {
        let mut c = cx.theme().cyan;
        c.a = 0.4;
        c
    }
}

// =============================================================================
// Spacing
// =============================================================================

pub mod spacing {
    use gpui::{Pixels, px};

    pub fn sm() -> Pixels {
        px(8.0)
    }
    pub fn md() -> Pixels {
        px(12.0)
    }
    pub fn lg() -> Pixels {
        px(16.0)
    }
}

// =============================================================================
// Sizing
// =============================================================================

pub mod sizing {
    use gpui::{Pixels, px};

    pub fn header_height() -> Pixels {
        px(36.0)
    }

    pub fn logo() -> Pixels {
        px(80.0)
    }
    pub fn progress_ring() -> Pixels {
        px(88.0)
    } // logo plus a 4px ring on each side
    pub fn progress_ring_stroke() -> Pixels {
        px(3.0)
    }

    pub fn progress_bar_height() -> Pixels {
        px(4.0)
    }
}

// =============================================================================
// Borders
// =============================================================================

pub mod borders {
    use gpui::{Pixels, px};

    pub fn radius_sm() -> Pixels {
        px(3.0)
    }
}
