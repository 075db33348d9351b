//! Dark and light palettes for the TUI.
//!
//! Widgets ask for styles by role name (`"post_title"`, `"page_current"`)
//! through [`StyleMap`], so switching theme only swaps the map.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

use crate::catalog::Category;

// ============================================================================
// Theme Variant
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

impl ThemeVariant {
    /// Cycle order for the theme key.
    pub const ALL: [ThemeVariant; 2] = [ThemeVariant::Dark, ThemeVariant::Light];

    /// Case-insensitive lookup by [`name`](Self::name).
    pub fn from_str_name(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(s.trim()))
    }

    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|v| *v == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Category colours
// ============================================================================

/// Parse a `#rrggbb` hex string into a terminal colour.
pub fn color_from_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Chip style for a category badge: the category colour as background.
pub fn category_chip(category: Category) -> Style {
    let bg = color_from_hex(category.color_hex()).unwrap_or(Color::Cyan);
    Style::default()
        .bg(bg)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

// ============================================================================
// Color Palette: semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Post cards --
    pub post_title: Style,
    pub post_selected: Style,
    pub post_excerpt: Style,
    pub post_meta: Style,
    pub post_featured_mark: Style,

    // -- Filter bar --
    pub filter_label: Style,
    pub filter_value: Style,
    pub filter_active: Style,
    pub search_input: Style,
    pub search_input_active: Style,

    // -- Pagination --
    pub page_number: Style,
    pub page_current: Style,
    pub page_disabled: Style,
    pub page_range: Style,

    // -- Empty state --
    pub empty_title: Style,
    pub empty_hint: Style,

    // -- Chrome --
    pub header_title: Style,
    pub status_bar: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            post_title: Style::default().add_modifier(Modifier::BOLD),
            post_selected: Style::default().bg(Color::DarkGray).fg(Color::White),
            post_excerpt: Style::default().fg(Color::Gray),
            post_meta: Style::default().fg(Color::DarkGray),
            post_featured_mark: Style::default().fg(Color::Yellow),

            filter_label: Style::default().fg(Color::DarkGray),
            filter_value: Style::default(),
            filter_active: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            search_input: Style::default(),
            search_input_active: Style::default().fg(Color::Yellow),

            page_number: Style::default(),
            page_current: Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            page_disabled: Style::default().fg(Color::DarkGray),
            page_range: Style::default().fg(Color::Gray),

            empty_title: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            empty_hint: Style::default().fg(Color::Gray),

            header_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::Cyan),
        }
    }

    fn light() -> Self {
        Self {
            post_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            post_selected: Style::default().bg(Color::Blue).fg(Color::White),
            post_excerpt: Style::default().fg(Color::DarkGray),
            post_meta: Style::default().fg(Color::DarkGray),
            post_featured_mark: Style::default().fg(Color::Magenta),

            filter_label: Style::default().fg(Color::DarkGray),
            filter_value: Style::default().fg(Color::Black),
            filter_active: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            search_input: Style::default().fg(Color::Black),
            search_input_active: Style::default().fg(Color::Magenta),

            page_number: Style::default().fg(Color::Black),
            page_current: Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            page_disabled: Style::default().fg(Color::Gray),
            page_range: Style::default().fg(Color::DarkGray),

            empty_title: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            empty_hint: Style::default().fg(Color::DarkGray),

            header_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Blue),
        }
    }
}

impl ColorPalette {
    /// Every role paired with its style.
    fn roles(&self) -> [(&'static str, Style); 20] {
        [
            ("post_title", self.post_title),
            ("post_selected", self.post_selected),
            ("post_excerpt", self.post_excerpt),
            ("post_meta", self.post_meta),
            ("post_featured_mark", self.post_featured_mark),
            ("filter_label", self.filter_label),
            ("filter_value", self.filter_value),
            ("filter_active", self.filter_active),
            ("search_input", self.search_input),
            ("search_input_active", self.search_input_active),
            ("page_number", self.page_number),
            ("page_current", self.page_current),
            ("page_disabled", self.page_disabled),
            ("page_range", self.page_range),
            ("empty_title", self.empty_title),
            ("empty_hint", self.empty_hint),
            ("header_title", self.header_title),
            ("status_bar", self.status_bar),
            ("panel_border", self.panel_border),
            ("panel_border_focused", self.panel_border_focused),
        ]
    }
}

// ============================================================================
// Style Map
// ============================================================================

/// Role name to style lookup for the active palette.
#[derive(Debug, Clone)]
pub struct StyleMap {
    styles: HashMap<&'static str, Style>,
}

impl StyleMap {
    pub fn from_palette(palette: &ColorPalette) -> Self {
        Self {
            styles: palette.roles().into_iter().collect(),
        }
    }

    /// Style for `role`; unknown roles get the terminal default.
    pub fn resolve(&self, role: &str) -> Style {
        self.styles.get(role).copied().unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_parse() {
        assert_eq!(color_from_hex("#4ab098"), Some(Color::Rgb(0x4a, 0xb0, 0x98)));
        assert_eq!(color_from_hex("#464d79"), Some(Color::Rgb(0x46, 0x4d, 0x79)));
        assert_eq!(color_from_hex("4ab098"), None);
        assert_eq!(color_from_hex("#4ab09"), None);
        assert_eq!(color_from_hex("#zzzzzz"), None);
        assert_eq!(color_from_hex("#ééé"), None);
    }

    #[test]
    fn category_chips_follow_category_colors() {
        assert_eq!(
            category_chip(Category::Doctor).bg,
            Some(Color::Rgb(0x4a, 0xb0, 0x98))
        );
        assert_eq!(
            category_chip(Category::Education).bg,
            Some(Color::Rgb(0x46, 0x4d, 0x79))
        );
        assert_eq!(category_chip(Category::Hospital), category_chip(Category::Doctor));
    }

    #[test]
    fn palettes_differ_on_highlight_roles() {
        let dark = ThemeVariant::Dark.palette();
        let light = ThemeVariant::Light.palette();
        assert_ne!(dark.post_selected, light.post_selected);
        assert_ne!(dark.page_current, light.page_current);
    }

    #[test]
    fn variant_lookup_and_cycle() {
        assert_eq!(ThemeVariant::from_str_name("light"), Some(ThemeVariant::Light));
        assert_eq!(ThemeVariant::from_str_name(" DARK "), Some(ThemeVariant::Dark));
        assert_eq!(ThemeVariant::from_str_name("solarized"), None);

        assert_eq!(ThemeVariant::default().next(), ThemeVariant::Light);
        assert_eq!(ThemeVariant::Light.next(), ThemeVariant::Dark);
    }

    #[test]
    fn style_map_covers_every_role() {
        let palette = ThemeVariant::Light.palette();
        let map = StyleMap::from_palette(&palette);
        assert_eq!(map.styles.len(), palette.roles().len());
        for (role, style) in palette.roles() {
            assert_eq!(map.resolve(role), style, "{role}");
        }
        assert_eq!(map.resolve("reader_body"), Style::default());
    }
}
