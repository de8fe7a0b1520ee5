//! Theme Resolver — turns the theme's accent hex string into RGB components.
//!
//! Accepts `#rrggbb`, `rrggbb`, and the `#rgb` shorthand (each digit doubled).
//! Parsing never fails loudly: an unparseable value yields `None` and the
//! sidebar background degrades to an invalid CSS expression.

/// Alpha applied to the accent color for the sidebar background.
pub const SIDEBAR_TINT_ALPHA: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Parses a hex color string into its components.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };

    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Builds the translucent `rgba(..)` background used behind the sidebar.
///
/// Missing components are left blank, producing a value the host ignores.
pub fn tinted_background(rgb: Option<Rgb>) -> String {
    match rgb {
        Some(Rgb { r, g, b }) => format!("rgba({r}, {g}, {b}, {SIDEBAR_TINT_ALPHA})"),
        None => format!("rgba(, , , {SIDEBAR_TINT_ALPHA})"),
    }
}
