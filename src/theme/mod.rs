mod colors;

use ratatui::style::Color;

use colors::{PaperColors, SlateColors};

use crate::metrics::ScoreTier;

/// Resolved colour set used by the renderer. Cycled at runtime with `c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub name: &'static str,

    pub bg: Color,
    pub surface: Color,
    pub border: Color,

    pub accent: Color,
    pub accent_soft: Color,

    pub tier_good: Color,
    pub tier_warning: Color,
    pub tier_bad: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_faint: Color,

    pub bar_bg: Color,
    pub text_on_bar: Color,
}

impl Theme {
    pub fn slate() -> Self {
        Self {
            name: "Slate",
            bg: SlateColors::BG,
            surface: SlateColors::SURFACE,
            border: SlateColors::BORDER,
            accent: SlateColors::BLUE,
            accent_soft: SlateColors::LIGHT_BLUE,
            tier_good: SlateColors::EMERALD,
            tier_warning: SlateColors::AMBER,
            tier_bad: SlateColors::ROSE,
            text_primary: SlateColors::TEXT_PRIMARY,
            text_secondary: SlateColors::TEXT_SECONDARY,
            text_faint: SlateColors::TEXT_FAINT,
            bar_bg: SlateColors::SURFACE,
            text_on_bar: SlateColors::TEXT_PRIMARY,
        }
    }

    pub fn paper() -> Self {
        Self {
            name: "Paper",
            bg: PaperColors::BG,
            surface: PaperColors::SURFACE,
            border: PaperColors::BORDER,
            accent: PaperColors::BLUE,
            accent_soft: PaperColors::LIGHT_BLUE,
            tier_good: PaperColors::EMERALD,
            tier_warning: PaperColors::AMBER,
            tier_bad: PaperColors::ROSE,
            text_primary: PaperColors::TEXT_PRIMARY,
            text_secondary: PaperColors::TEXT_SECONDARY,
            text_faint: PaperColors::TEXT_FAINT,
            bar_bg: PaperColors::TEXT_PRIMARY,
            text_on_bar: PaperColors::SURFACE,
        }
    }

    pub fn next(self) -> Self {
        match self.name {
            "Slate" => Self::paper(),
            _ => Self::slate(),
        }
    }

    /// Visual token for a score tier.
    pub fn tier_color(&self, tier: ScoreTier) -> Color {
        match tier {
            ScoreTier::Good => self.tier_good,
            ScoreTier::Warning => self.tier_warning,
            ScoreTier::Bad => self.tier_bad,
        }
    }
}
