//! Style catalog for the resume document.
//!
//! `StyleConfig` holds the adjustable knobs, all defaulted. `StyleSet::new`
//! derives every role style and decoration rule from the knobs exactly once;
//! the resolved set is immutable for its lifetime and safe to share
//! read-only across concurrent builds. Construction cannot fail.

// ────────────────────────────────────────────────────────────────────────────
// Primitives
// ────────────────────────────────────────────────────────────────────────────

/// Font weight/slant of a role. The concrete font family is the render
/// driver's concern; roles only pick the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const GRAY: Rgb = Rgb {
    r: 128,
    g: 128,
    b: 128,
};

/// The named presentation roles used by the content builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Name,
    Title,
    ContactInfo,
    SectionHeader,
    ItemTitle,
    ItemSubtitle,
    Normal,
    BulletPoint,
}

// ────────────────────────────────────────────────────────────────────────────
// Configuration
// ────────────────────────────────────────────────────────────────────────────

/// Style knobs. Every field has a default, so a `StyleSet` can always be
/// built from `StyleConfig::default()`.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    pub primary_color: Rgb,
    pub secondary_color: Rgb,
    pub base_font_size_pt: u8,
    pub use_bullet_points: bool,
    pub bullet_glyph: String,
    pub separator_color: Rgb,
    pub separator_thickness_pt: f64,
    pub separator_space_before_pt: f64,
    pub separator_space_after_pt: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            primary_color: BLACK,
            secondary_color: GRAY,
            base_font_size_pt: 10,
            use_bullet_points: true,
            bullet_glyph: "\u{2022}".to_string(),
            separator_color: BLACK,
            separator_thickness_pt: 0.75,
            separator_space_before_pt: 8.0,
            separator_space_after_pt: 12.0,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resolved styles
// ────────────────────────────────────────────────────────────────────────────

/// A fully resolved style descriptor for one role.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleStyle {
    pub weight: FontWeight,
    pub size_pt: u8,
    pub alignment: Alignment,
    pub space_before_pt: f64,
    pub space_after_pt: f64,
    pub left_indent_pt: f64,
    pub color: Rgb,
}

impl RoleStyle {
    fn base(weight: FontWeight, size_pt: u8, alignment: Alignment, color: Rgb) -> Self {
        RoleStyle {
            weight,
            size_pt,
            alignment,
            space_before_pt: 0.0,
            space_after_pt: 0.0,
            left_indent_pt: 0.0,
            color,
        }
    }
}

/// Decoration rule for the horizontal line under section headers.
#[derive(Debug, Clone, PartialEq)]
pub struct SeparatorRule {
    pub thickness_pt: f64,
    pub space_before_pt: f64,
    pub space_after_pt: f64,
    pub color: Rgb,
}

/// Decoration rule for two-column rows (title/date, degree/year).
/// The 8/5 weights give the left column a 4" / 2.5" split on letter paper.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoColumnRule {
    pub left_weight: usize,
    pub right_weight: usize,
    pub top_padding_pt: f64,
    pub bottom_padding_pt: f64,
}

/// The fixed catalog of role styles and decoration rules.
///
/// Derived once in [`StyleSet::new`]; no field changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSet {
    config: StyleConfig,
    name: RoleStyle,
    title: RoleStyle,
    contact_info: RoleStyle,
    section_header: RoleStyle,
    item_title: RoleStyle,
    item_subtitle: RoleStyle,
    normal: RoleStyle,
    bullet_point: RoleStyle,
    separator: SeparatorRule,
    two_column: TwoColumnRule,
}

impl StyleSet {
    pub fn new(config: StyleConfig) -> Self {
        let primary = config.primary_color;

        // Large and centered.
        let mut name = RoleStyle::base(FontWeight::Bold, 22, Alignment::Center, primary);
        name.space_after_pt = 14.0;

        // Below the name, smaller and centered.
        let mut title = RoleStyle::base(FontWeight::Regular, 11, Alignment::Center, primary);
        title.space_after_pt = 6.0;

        let mut contact_info = RoleStyle::base(FontWeight::Regular, 9, Alignment::Center, primary);
        contact_info.space_after_pt = 20.0;

        let normal = RoleStyle::base(
            FontWeight::Regular,
            config.base_font_size_pt,
            Alignment::Left,
            primary,
        );

        let mut section_header = RoleStyle::base(FontWeight::Bold, 12, Alignment::Left, primary);
        section_header.space_before_pt = 20.0;
        section_header.space_after_pt = 6.0;

        // Experience/education entry title (bold) and right-aligned subtitle.
        let mut item_title = RoleStyle::base(FontWeight::Bold, 10, Alignment::Left, primary);
        item_title.space_before_pt = 8.0;

        let item_subtitle = RoleStyle::base(
            FontWeight::Italic,
            10,
            Alignment::Right,
            config.secondary_color,
        );

        let mut bullet_point = RoleStyle::base(FontWeight::Regular, 10, Alignment::Left, primary);
        bullet_point.left_indent_pt = 20.0;
        bullet_point.space_before_pt = 2.0;
        bullet_point.space_after_pt = 2.0;

        let separator = SeparatorRule {
            thickness_pt: config.separator_thickness_pt,
            space_before_pt: config.separator_space_before_pt,
            space_after_pt: config.separator_space_after_pt,
            color: config.separator_color,
        };

        let two_column = TwoColumnRule {
            left_weight: 8,
            right_weight: 5,
            top_padding_pt: 6.0,
            bottom_padding_pt: 2.0,
        };

        StyleSet {
            config,
            name,
            title,
            contact_info,
            section_header,
            item_title,
            item_subtitle,
            normal,
            bullet_point,
            separator,
            two_column,
        }
    }

    /// The resolved style descriptor for a role.
    pub fn role(&self, role: Role) -> &RoleStyle {
        match role {
            Role::Name => &self.name,
            Role::Title => &self.title,
            Role::ContactInfo => &self.contact_info,
            Role::SectionHeader => &self.section_header,
            Role::ItemTitle => &self.item_title,
            Role::ItemSubtitle => &self.item_subtitle,
            Role::Normal => &self.normal,
            Role::BulletPoint => &self.bullet_point,
        }
    }

    pub fn separator(&self) -> &SeparatorRule {
        &self.separator
    }

    pub fn two_column(&self) -> &TwoColumnRule {
        &self.two_column
    }

    /// The configured bullet glyph, or the empty string when bullets are
    /// disabled.
    pub fn bullet_glyph(&self) -> &str {
        if self.config.use_bullet_points {
            &self.config.bullet_glyph
        } else {
            ""
        }
    }
}

impl Default for StyleSet {
    fn default() -> Self {
        StyleSet::new(StyleConfig::default())
    }
}
