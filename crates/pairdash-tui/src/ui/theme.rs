// Centralized theme for the console look. All colors live here.

use ratatui::style::Color;

/// App background - pure black, terminal style
pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Panel background - subtle lift from black
pub const BG_PANEL: Color = Color::Rgb(14, 14, 16);

/// Primary text - off-white
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);

/// Secondary/muted text
pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);

/// Dimmed text for hints and separators
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

/// Prompt/accent - muted terminal green
pub const ACCENT: Color = Color::Rgb(106, 205, 100);

/// Live badge when a backend is connected
pub const BADGE_LIVE: Color = Color::Rgb(106, 205, 100);

/// Badge when running purely on embedded data
pub const BADGE_ACTIVE: Color = Color::Rgb(200, 160, 60);

/// Milestone marker in the log
pub const MILESTONE: Color = Color::Rgb(224, 175, 104);

/// Lines-added / positive deltas
pub const ADDED: Color = Color::Rgb(106, 153, 85);

/// Lines-removed / negative deltas
pub const REMOVED: Color = Color::Rgb(204, 102, 102);

/// Language/model bar palette, cycled in display order
pub const BAR_PALETTE: [Color; 5] = [
    Color::Rgb(86, 156, 214),
    Color::Rgb(78, 201, 176),
    Color::Rgb(220, 170, 100),
    Color::Rgb(197, 134, 192),
    Color::Rgb(140, 140, 150),
];

/// Heatmap cell colors, one per intensity tier (0 = empty .. 4 = max)
pub const HEATMAP_TIERS: [Color; 5] = [
    Color::Rgb(28, 30, 34),
    Color::Rgb(14, 68, 41),
    Color::Rgb(0, 109, 50),
    Color::Rgb(38, 166, 65),
    Color::Rgb(57, 211, 83),
];
