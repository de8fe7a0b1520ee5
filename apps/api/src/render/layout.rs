//! Layout Composer — assembles the two-region Glalie page.
//!
//! Sidebar (4 of 12 columns, accent-tinted): identity, contact, then
//! `SIDEBAR_SECTIONS`. Main (8 of 12 columns): `MAIN_SECTIONS`. Region
//! membership and order are fixed by the template, never by the data.

use tracing::{debug, warn};

use crate::render::markup::MarkupRenderer;
use crate::render::model::{RenderState, ResumeData, Theme};
use crate::render::node::{escape_html, Element, Node};
use crate::render::sections::{
    contact_block, identity_block, RenderContext, SectionDescriptor, MAIN_SECTIONS,
    SIDEBAR_SECTIONS,
};
use crate::render::theme::{hex_to_rgb, tinted_background};

/// A4 height, so the tinted sidebar always fills the printed page.
const PAGE_MIN_HEIGHT: &str = "29.7cm";

fn region(
    descriptors: &[SectionDescriptor],
    data: &ResumeData,
    ctx: &RenderContext<'_>,
) -> Vec<Node> {
    descriptors
        .iter()
        .filter_map(|d| d.render(data, ctx))
        .collect()
}

/// Renders the full document tree for one `(data, theme)` pair.
///
/// Pure: identical inputs produce identical trees and nothing is mutated.
pub fn render_document(data: &ResumeData, theme: &Theme, markup: &dyn MarkupRenderer) -> Node {
    let ctx = RenderContext::new(theme, markup);

    let rgb = hex_to_rgb(&theme.colors.accent);
    if rgb.is_none() {
        warn!(
            accent = %theme.colors.accent,
            "Accent color is not a hex value; sidebar tint will be ignored"
        );
    }

    let sidebar_sections = region(&SIDEBAR_SECTIONS, data, &ctx);
    let main_sections = region(&MAIN_SECTIONS, data, &ctx);
    debug!(
        sidebar = sidebar_sections.len(),
        main = main_sections.len(),
        "Rendered Glalie sections"
    );

    let sidebar = Element::new("div")
        .class("h-full col-span-4 p-8 grid grid-cols-1 gap-y-4 text-center")
        .attr("data-region", "sidebar")
        .style("background-color", tinted_background(rgb))
        .style("min-height", PAGE_MIN_HEIGHT)
        .child(identity_block(&data.profile))
        .child(contact_block(&data.profile, &ctx))
        .children(sidebar_sections);

    let main = Element::new("div")
        .class("col-span-8 p-8 grid grid-cols-1 gap-y-4")
        .attr("data-region", "main")
        .children(main_sections);

    Element::new("div")
        .style("font-family", &theme.font.family)
        .style("background-color", &theme.colors.background)
        .style("color", &theme.colors.primary)
        .child(
            Element::new("div")
                .class("grid grid-cols-12")
                .child(sidebar)
                .child(main),
        )
        .into()
}

/// Wraps the rendered document in a standalone HTML5 page for printing.
pub fn render_html_page(state: &RenderState, markup: &dyn MarkupRenderer) -> String {
    let document = render_document(&state.data, &state.theme, markup);
    let profile = &state.data.profile;
    let title = format!("{} {}", profile.first_name, profile.last_name);

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title.trim()),
        document.to_html()
    )
}
