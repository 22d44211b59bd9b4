//! GUI theme: the product palette over a light surface.
//!
//! Color constants for the rostr GUI. Brand colors follow the company
//! palette (deep blue primary, orange secondary).

use eframe::egui::Color32;

// ═══════════════════════════════════════════════════════════════════════════
// BACKGROUNDS
// ═══════════════════════════════════════════════════════════════════════════

/// Window background
pub const BG_PRIMARY: Color32 = Color32::from_rgb(245, 247, 250);
/// Cards and panels
pub const BG_CARD: Color32 = Color32::from_rgb(255, 255, 255);
/// Hovered/selected surfaces
pub const BG_HIGHLIGHT: Color32 = Color32::from_rgb(232, 238, 248);
/// Inset wells (progress tracks, chips)
pub const BG_INSET: Color32 = Color32::from_rgb(234, 236, 240);

// ═══════════════════════════════════════════════════════════════════════════
// TEXT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(33, 37, 41);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(108, 117, 125);
pub const TEXT_ON_BRAND: Color32 = Color32::from_rgb(255, 255, 255);

// ═══════════════════════════════════════════════════════════════════════════
// BRAND COLORS
// ═══════════════════════════════════════════════════════════════════════════

/// Primary: deep corporate blue
pub const BRAND_BLUE: Color32 = Color32::from_rgb(5, 54, 135);
/// Secondary: call-to-action orange
pub const BRAND_ORANGE: Color32 = Color32::from_rgb(249, 121, 5);

// ═══════════════════════════════════════════════════════════════════════════
// STATUS COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const ACCENT_GREEN: Color32 = Color32::from_rgb(39, 174, 96);
pub const ACCENT_AMBER: Color32 = Color32::from_rgb(243, 156, 18);
pub const ACCENT_RED: Color32 = Color32::from_rgb(231, 76, 60);
pub const ACCENT_BLUE: Color32 = Color32::from_rgb(52, 152, 219);
