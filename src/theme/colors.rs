//! Colour palettes as ratatui Color::Rgb constants.
//!
//! Slate mirrors the dark UI of the original dashboard (Tailwind slate
//! surfaces, emerald/amber/rose tier colours).

use ratatui::style::Color;

pub struct SlateColors;

#[allow(dead_code)]
impl SlateColors {
    // Surfaces
    pub const BG: Color = Color::Rgb(15, 23, 42); // #0F172A slate-900
    pub const SURFACE: Color = Color::Rgb(30, 41, 59); // #1E293B slate-800
    pub const BORDER: Color = Color::Rgb(51, 65, 85); // #334155 slate-700

    // Accents
    pub const BLUE: Color = Color::Rgb(59, 130, 246); // #3B82F6
    pub const LIGHT_BLUE: Color = Color::Rgb(147, 197, 253); // #93C5FD

    // Tier colours
    pub const EMERALD: Color = Color::Rgb(16, 185, 129); // #10B981
    pub const AMBER: Color = Color::Rgb(251, 191, 36); // #FBBF24
    pub const ROSE: Color = Color::Rgb(244, 63, 94); // #F43F5E

    // Text
    pub const TEXT_PRIMARY: Color = Color::Rgb(241, 245, 249); // #F1F5F9
    pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184); // #94A3B8
    pub const TEXT_FAINT: Color = Color::Rgb(100, 116, 139); // #64748B
}

pub struct PaperColors;

#[allow(dead_code)]
impl PaperColors {
    pub const BG: Color = Color::Rgb(250, 250, 249); // #FAFAF9
    pub const SURFACE: Color = Color::Rgb(255, 255, 255); // #FFFFFF
    pub const BORDER: Color = Color::Rgb(214, 211, 209); // #D6D3D1

    pub const BLUE: Color = Color::Rgb(37, 99, 235); // #2563EB
    pub const LIGHT_BLUE: Color = Color::Rgb(96, 165, 250); // #60A5FA

    pub const EMERALD: Color = Color::Rgb(5, 150, 105); // #059669
    pub const AMBER: Color = Color::Rgb(217, 119, 6); // #D97706
    pub const ROSE: Color = Color::Rgb(225, 29, 72); // #E11D48

    pub const TEXT_PRIMARY: Color = Color::Rgb(28, 25, 23); // #1C1917
    pub const TEXT_SECONDARY: Color = Color::Rgb(87, 83, 78); // #57534E
    pub const TEXT_FAINT: Color = Color::Rgb(168, 162, 158); // #A8A29E
}
