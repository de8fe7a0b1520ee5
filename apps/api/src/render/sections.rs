//! Section and item renderers for the Glalie template.
//!
//! Every optional section is described by a `SectionDescriptor` (which section,
//! how items are filtered, what container wraps them). The layout iterates the
//! fixed `SIDEBAR_SECTIONS` and `MAIN_SECTIONS` tables instead of hand-enumerating
//! branches. Profile and contact blocks have no enable flag and always render.

use crate::render::markup::MarkupRenderer;
use crate::render::model::{
    AwardItem, CertificationItem, EducationItem, ExtraItem, HobbyItem, LanguageItem, Profile,
    ReferenceItem, ResumeData, Section, SkillItem, Theme, WorkItem,
};
use crate::render::node::{Element, Node};

/// Memory guard on rating icons drawn for a single language; far above any
/// real rating, so ordinary ratings draw exactly that many icons.
pub const MAX_RATING_ICONS: usize = 1_000;

// ────────────────────────────────────────────────────────────────────────────
// Render context
// ────────────────────────────────────────────────────────────────────────────

/// Everything a renderer may read. Passed explicitly; there is no ambient state.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub theme: &'a Theme,
    pub markup: &'a dyn MarkupRenderer,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, markup: &'a dyn MarkupRenderer) -> Self {
        Self { theme, markup }
    }

    pub fn accent(&self) -> &'a str {
        &self.theme.colors.accent
    }

    /// Wraps a rich-text field in a block holding the renderer's output.
    fn rich_text(&self, classes: &str, source: &str) -> Node {
        Element::new("div")
            .class(classes)
            .child(Node::markup(self.markup.render(source)))
            .into()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section descriptors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Objective,
    Work,
    Education,
    Skills,
    Awards,
    Certifications,
    Hobbies,
    Languages,
    References,
    Extras,
}

impl SectionKind {
    #[cfg(test)]
    pub const ALL: [SectionKind; 10] = [
        SectionKind::Objective,
        SectionKind::Work,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Awards,
        SectionKind::Certifications,
        SectionKind::Hobbies,
        SectionKind::Languages,
        SectionKind::References,
        SectionKind::Extras,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Objective => "objective",
            SectionKind::Work => "work",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Awards => "awards",
            SectionKind::Certifications => "certifications",
            SectionKind::Hobbies => "hobbies",
            SectionKind::Languages => "languages",
            SectionKind::References => "references",
            SectionKind::Extras => "extras",
        }
    }

    /// True only when the section is present and its `enable` flag is set.
    pub fn is_enabled(&self, data: &ResumeData) -> bool {
        match self {
            SectionKind::Objective => data.objective.as_ref().is_some_and(|o| o.enable),
            SectionKind::Work => enabled(&data.work),
            SectionKind::Education => enabled(&data.education),
            SectionKind::Skills => enabled(&data.skills),
            SectionKind::Awards => enabled(&data.awards),
            SectionKind::Certifications => enabled(&data.certifications),
            SectionKind::Hobbies => enabled(&data.hobbies),
            SectionKind::Languages => enabled(&data.languages),
            SectionKind::References => enabled(&data.references),
            SectionKind::Extras => enabled(&data.extras),
        }
    }

    pub fn heading<'d>(&self, data: &'d ResumeData) -> Option<&'d str> {
        match self {
            SectionKind::Objective => data.objective.as_ref().map(|o| o.heading.as_str()),
            SectionKind::Work => heading(&data.work),
            SectionKind::Education => heading(&data.education),
            SectionKind::Skills => heading(&data.skills),
            SectionKind::Awards => heading(&data.awards),
            SectionKind::Certifications => heading(&data.certifications),
            SectionKind::Hobbies => heading(&data.hobbies),
            SectionKind::Languages => heading(&data.languages),
            SectionKind::References => heading(&data.references),
            SectionKind::Extras => heading(&data.extras),
        }
    }
}

fn enabled<T>(section: &Option<Section<T>>) -> bool {
    section.as_ref().is_some_and(Section::is_enabled)
}

fn heading<T>(section: &Option<Section<T>>) -> Option<&str> {
    section.as_ref().map(|s| s.heading.as_str())
}

/// Which items of an enabled section make it into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFilter {
    /// Keep items whose own `enable` flag is set.
    EnabledOnly,
    /// Keep every item; the item flag is ignored.
    All,
}

/// The block that holds a section's rendered items, below the heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemContainer {
    /// Items follow the heading directly.
    Inline,
    Block {
        tag: &'static str,
        classes: &'static str,
    },
    /// A table whose body holds one row per item.
    Table { classes: &'static str },
}

impl ItemContainer {
    fn wrap(&self, items: Vec<Node>) -> Vec<Node> {
        match self {
            ItemContainer::Inline => items,
            ItemContainer::Block { tag, classes } => {
                vec![Node::from(Element::new(tag).class(classes).children(items))]
            }
            ItemContainer::Table { classes } => vec![Node::from(
                Element::new("table")
                    .class(classes)
                    .child(Element::new("tbody").children(items)),
            )],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub kind: SectionKind,
    pub filter: ItemFilter,
    pub container: ItemContainer,
}

impl SectionDescriptor {
    /// Renders the section, or `None` when it is absent or disabled.
    pub fn render(&self, data: &ResumeData, ctx: &RenderContext<'_>) -> Option<Node> {
        if !self.kind.is_enabled(data) {
            return None;
        }
        let title = self.kind.heading(data).unwrap_or_default();

        let body: Vec<Node> = match self.kind {
            SectionKind::Objective => data
                .objective
                .iter()
                .map(|o| ctx.rich_text("text-sm text-justify", &o.body))
                .collect(),
            SectionKind::Work => self.items(data.work.as_ref(), ctx),
            SectionKind::Education => self.items(data.education.as_ref(), ctx),
            SectionKind::Skills => self.items(data.skills.as_ref(), ctx),
            SectionKind::Awards => self.items(data.awards.as_ref(), ctx),
            SectionKind::Certifications => self.items(data.certifications.as_ref(), ctx),
            SectionKind::Hobbies => self.items(data.hobbies.as_ref(), ctx),
            SectionKind::Languages => self.items(data.languages.as_ref(), ctx),
            SectionKind::References => self.items(data.references.as_ref(), ctx),
            SectionKind::Extras => self.items(data.extras.as_ref(), ctx),
        };

        Some(section_block(self.kind, title, body, ctx))
    }

    fn items<T: SectionItem>(
        &self,
        section: Option<&Section<T>>,
        ctx: &RenderContext<'_>,
    ) -> Vec<Node> {
        let items: Vec<Node> = section
            .map(|s| s.items.as_slice())
            .unwrap_or_default()
            .iter()
            .filter(|item| self.filter == ItemFilter::All || item.is_enabled())
            .map(|item| item.render(ctx))
            .collect();
        self.container.wrap(items)
    }
}

/// Sidebar sections, in render order, after the identity and contact blocks.
pub const SIDEBAR_SECTIONS: [SectionDescriptor; 4] = [
    SectionDescriptor {
        kind: SectionKind::Objective,
        filter: ItemFilter::All,
        container: ItemContainer::Inline,
    },
    SectionDescriptor {
        kind: SectionKind::Hobbies,
        filter: ItemFilter::All,
        container: ItemContainer::Block {
            tag: "ul",
            classes: "pt-2 grid grid-cols-2 gap-y-3 text-left",
        },
    },
    SectionDescriptor {
        kind: SectionKind::Languages,
        filter: ItemFilter::EnabledOnly,
        container: ItemContainer::Block {
            tag: "div",
            classes: "w-3/4",
        },
    },
    SectionDescriptor {
        kind: SectionKind::Certifications,
        filter: ItemFilter::EnabledOnly,
        container: ItemContainer::Inline,
    },
];

/// Main-region sections, in render order.
pub const MAIN_SECTIONS: [SectionDescriptor; 6] = [
    SectionDescriptor {
        kind: SectionKind::Work,
        filter: ItemFilter::EnabledOnly,
        container: ItemContainer::Inline,
    },
    SectionDescriptor {
        kind: SectionKind::Education,
        filter: ItemFilter::EnabledOnly,
        container: ItemContainer::Block {
            tag: "div",
            classes: "grid grid-cols-2 gap-4",
        },
    },
    SectionDescriptor {
        kind: SectionKind::Skills,
        filter: ItemFilter::All,
        container: ItemContainer::Block {
            tag: "ul",
            classes: "pt-2 grid grid-cols-2 gap-3",
        },
    },
    SectionDescriptor {
        kind: SectionKind::Awards,
        filter: ItemFilter::EnabledOnly,
        container: ItemContainer::Inline,
    },
    SectionDescriptor {
        kind: SectionKind::References,
        filter: ItemFilter::EnabledOnly,
        container: ItemContainer::Block {
            tag: "div",
            classes: "grid grid-cols-3 gap-8",
        },
    },
    SectionDescriptor {
        kind: SectionKind::Extras,
        filter: ItemFilter::EnabledOnly,
        container: ItemContainer::Table {
            classes: "mt-4 w-2/3 table-auto",
        },
    },
];

/// Accent-colored section heading.
pub fn heading_node(title: &str, ctx: &RenderContext<'_>) -> Node {
    Element::new("h6")
        .class("text-sm font-semibold uppercase pb-1 mb-2 border-b")
        .style("border-color", ctx.accent())
        .style("color", ctx.accent())
        .text(title)
        .into()
}

fn section_block(
    kind: SectionKind,
    title: &str,
    body: Vec<Node>,
    ctx: &RenderContext<'_>,
) -> Node {
    Element::new("div")
        .attr("data-section", kind.as_str())
        .child(heading_node(title, ctx))
        .children(body)
        .into()
}

// ────────────────────────────────────────────────────────────────────────────
// Item renderers
// ────────────────────────────────────────────────────────────────────────────

/// One record inside a section.
pub trait SectionItem {
    fn is_enabled(&self) -> bool;
    fn render(&self, ctx: &RenderContext<'_>) -> Node;
}

fn keyed(tag: &str, id: &str) -> Element {
    Element::new(tag).attr("data-id", id)
}

impl SectionItem for WorkItem {
    fn is_enabled(&self) -> bool {
        self.enable
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        let summary = Element::new("div")
            .child(Element::new("h6").class("font-semibold text-sm").text(&self.title))
            .child(
                Element::new("p")
                    .class("text-xs opacity-75 font-medium")
                    .text(format!("{} / {} - {}", self.role, self.start, self.end)),
            );
        keyed("div", &self.id)
            .class("mt-3")
            .child(Element::new("div").class("flex justify-between").child(summary))
            .child(ctx.rich_text("mt-2 text-sm", &self.description))
            .into()
    }
}

impl SectionItem for EducationItem {
    fn is_enabled(&self) -> bool {
        self.enable
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        let summary = Element::new("div")
            .child(Element::new("h6").class("font-semibold text-xs").text(&self.name))
            .child(Element::new("p").class("text-xs opacity-75").text(&self.major))
            .child(
                Element::new("p")
                    .class("text-xs opacity-75")
                    .text(format!("{} - {}", self.start, self.end)),
            );
        keyed("div", &self.id)
            .class("mt-3")
            .child(summary)
            .child(ctx.rich_text("mt-2 text-sm", &self.description))
            .into()
    }
}

/// Awards and certifications share one layout.
fn titled_entry(
    id: &str,
    title: &str,
    subtitle: &str,
    description: &str,
    ctx: &RenderContext<'_>,
) -> Node {
    keyed("div", id)
        .class("mt-3 text-left")
        .child(Element::new("h6").class("font-semibold").text(title))
        .child(Element::new("p").class("text-xs").text(subtitle))
        .child(ctx.rich_text("mt-2 text-sm", description))
        .into()
}

impl SectionItem for AwardItem {
    fn is_enabled(&self) -> bool {
        self.enable
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        titled_entry(&self.id, &self.title, &self.subtitle, &self.description, ctx)
    }
}

impl SectionItem for CertificationItem {
    fn is_enabled(&self) -> bool {
        self.enable
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        titled_entry(&self.id, &self.title, &self.subtitle, &self.description, ctx)
    }
}

impl SectionItem for SkillItem {
    fn is_enabled(&self) -> bool {
        self.enable
    }

    fn render(&self, _ctx: &RenderContext<'_>) -> Node {
        keyed("li", &self.id)
            .class("text-xs font-medium")
            .text(&self.skill)
            .into()
    }
}

impl SectionItem for HobbyItem {
    fn is_enabled(&self) -> bool {
        self.enable
    }

    fn render(&self, _ctx: &RenderContext<'_>) -> Node {
        keyed("li", &self.id)
            .class("text-xs font-medium")
            .text(&self.hobby)
            .into()
    }
}

/// Number of rating icons drawn for a language rating.
///
/// Non-finite and non-positive ratings draw nothing and fractions truncate.
/// Whole ratings draw exactly that many icons, up to the `MAX_RATING_ICONS` guard.
pub fn rating_icon_count(rating: f64) -> usize {
    if !rating.is_finite() || rating <= 0.0 {
        return 0;
    }
    (rating.trunc() as usize).min(MAX_RATING_ICONS)
}

impl SectionItem for LanguageItem {
    fn is_enabled(&self) -> bool {
        self.enable
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        let mut proficiency = Element::new("div").class("flex");
        if !self.level.is_empty() {
            proficiency = proficiency.child(
                Element::new("div")
                    .class("font-bold text-sm mr-2")
                    .text(&self.level),
            );
        }

        let count = rating_icon_count(self.rating);
        if count > 0 {
            let stars = (0..count).map(|_| icon("star", ctx));
            proficiency = proficiency.child(Element::new("div").class("flex").children(stars));
        }

        keyed("div", &self.id)
            .class("grid grid-cols-2 items-center py-2")
            .child(
                Element::new("h6")
                    .class("text-xs font-medium text-left")
                    .text(&self.key),
            )
            .child(proficiency)
            .into()
    }
}

impl SectionItem for ReferenceItem {
    fn is_enabled(&self) -> bool {
        self.enable
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        keyed("div", &self.id)
            .class("flex flex-col")
            .child(Element::new("h6").class("text-sm font-medium").text(&self.name))
            .child(Element::new("span").class("text-xs").text(&self.position))
            .child(Element::new("span").class("text-xs").text(&self.phone))
            .child(Element::new("span").class("text-xs").text(&self.email))
            .child(ctx.rich_text("mt-2 text-sm", &self.description))
            .into()
    }
}

impl SectionItem for ExtraItem {
    fn is_enabled(&self) -> bool {
        self.enable
    }

    fn render(&self, _ctx: &RenderContext<'_>) -> Node {
        keyed("tr", &self.id)
            .child(
                Element::new("td")
                    .class("border font-medium px-4 py-2 text-xs")
                    .text(&self.key),
            )
            .child(Element::new("td").class("border px-4 py-2 text-xs").text(&self.value))
            .into()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Profile and contact
// ────────────────────────────────────────────────────────────────────────────

/// Accent-colored material icon.
fn icon(name: &str, ctx: &RenderContext<'_>) -> Node {
    Element::new("i")
        .class("material-icons text-lg")
        .style("color", ctx.accent())
        .text(name)
        .into()
}

/// Photo, full name, and subtitle.
pub fn identity_block(profile: &Profile) -> Node {
    let mut block = Element::new("div").class("grid grid-cols-1 gap-2");
    if !profile.photo.is_empty() {
        block = block.child(
            Element::new("img")
                .class("w-40 h-40 rounded-full mx-auto")
                .attr("src", &profile.photo)
                .attr("alt", "Resume Photograph"),
        );
    }
    block
        .child(
            Element::new("div")
                .class("text-4xl font-bold leading-none")
                .child(Element::new("h1").text(&profile.first_name))
                .child(Element::new("h1").text(&profile.last_name)),
        )
        .child(
            Element::new("div")
                .class("tracking-wide text-xs uppercase font-medium")
                .text(&profile.subtitle),
        )
        .into()
}

fn contact_item(title: &str, value: &str, ctx: &RenderContext<'_>) -> Option<Node> {
    if value.is_empty() {
        return None;
    }
    Some(
        Element::new("div")
            .class("flex flex-col")
            .child(
                Element::new("h6")
                    .class("text-xs font-bold")
                    .style("color", ctx.accent())
                    .text(title),
            )
            .child(Element::new("p").class("text-sm").text(value))
            .into(),
    )
}

/// Bordered contact box. Always rendered; empty phone/email/website are skipped.
pub fn contact_block(profile: &Profile, ctx: &RenderContext<'_>) -> Node {
    let badge = Element::new("div")
        .class("inline-block relative px-4")
        .style("top", "-.75em")
        .style("color", ctx.accent())
        .child(
            Element::new("h2")
                .class("flex")
                .child(Element::new("i").class("material-icons").text("flare")),
        );

    let entries = [
        ("Phone Number", profile.phone.as_str()),
        ("Email Address", profile.email.as_str()),
        ("Website", profile.website.as_str()),
    ]
    .into_iter()
    .filter_map(|(title, value)| contact_item(title, value, ctx));

    let address = &profile.address;
    let address_block = Element::new("div")
        .class("flex flex-col")
        .child(icon("home", ctx))
        .children(
            [&address.line1, &address.line2, &address.line3]
                .into_iter()
                .map(|line| Node::from(Element::new("p").class("text-sm").text(line))),
        );

    Element::new("div")
        .class("w-full border-2 pl-4 pr-4 mb-6")
        .attr("data-section", "contact")
        .style("border-color", ctx.accent())
        .child(badge)
        .child(
            Element::new("div")
                .class("grid grid-cols-1 gap-y-4")
                .children(entries)
                .child(address_block),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::model::{Colors, Font, Objective, RenderState};
    use serde_json::json;

    struct EchoMarkup;

    impl MarkupRenderer for EchoMarkup {
        fn render(&self, source: &str) -> String {
            format!("<p>{source}</p>")
        }
    }

    fn theme() -> Theme {
        Theme {
            font: Font {
                family: "Lato".to_string(),
            },
            colors: Colors {
                accent: "#336699".to_string(),
                primary: "#212121".to_string(),
                background: "#ffffff".to_string(),
            },
        }
    }

    fn empty_data() -> ResumeData {
        ResumeData {
            profile: Profile::default(),
            objective: None,
            work: None,
            education: None,
            skills: None,
            awards: None,
            certifications: None,
            hobbies: None,
            languages: None,
            references: None,
            extras: None,
        }
    }

    fn section<T>(enable: bool, heading: &str, items: Vec<T>) -> Option<Section<T>> {
        Some(Section {
            enable,
            heading: heading.to_string(),
            items,
        })
    }

    fn descriptor(kind: SectionKind) -> SectionDescriptor {
        SIDEBAR_SECTIONS
            .iter()
            .chain(MAIN_SECTIONS.iter())
            .copied()
            .find(|d| d.kind == kind)
            .unwrap()
    }

    fn language(level: &str, rating: f64) -> LanguageItem {
        LanguageItem {
            id: "l1".to_string(),
            enable: true,
            key: "French".to_string(),
            level: level.to_string(),
            rating,
        }
    }

    // ── descriptor tables ───────────────────────────────────────────────────

    #[test]
    fn test_every_section_kind_has_exactly_one_descriptor() {
        for kind in SectionKind::ALL {
            let count = SIDEBAR_SECTIONS
                .iter()
                .chain(MAIN_SECTIONS.iter())
                .filter(|d| d.kind == kind)
                .count();
            assert_eq!(count, 1, "{kind:?}");
        }
    }

    #[test]
    fn test_only_skills_and_hobbies_ignore_item_flags() {
        for d in SIDEBAR_SECTIONS.iter().chain(MAIN_SECTIONS.iter()) {
            let expect_all = matches!(
                d.kind,
                SectionKind::Skills | SectionKind::Hobbies | SectionKind::Objective
            );
            assert_eq!(d.filter == ItemFilter::All, expect_all, "{:?}", d.kind);
        }
    }

    // ── visibility ──────────────────────────────────────────────────────────

    #[test]
    fn test_absent_and_disabled_sections_render_nothing() {
        let theme = theme();
        let ctx = RenderContext::new(&theme, &EchoMarkup);
        let mut data = empty_data();
        for kind in SectionKind::ALL {
            assert!(descriptor(kind).render(&data, &ctx).is_none(), "{kind:?}");
            assert!(!kind.is_enabled(&data));
        }

        data.work = section(false, "Experience", vec![WorkItem::default()]);
        data.objective = Some(Objective {
            enable: false,
            heading: "Objective".to_string(),
            body: "x".to_string(),
        });
        assert!(descriptor(SectionKind::Work).render(&data, &ctx).is_none());
        assert!(descriptor(SectionKind::Objective).render(&data, &ctx).is_none());
        assert_eq!(SectionKind::Work.heading(&data), Some("Experience"));
    }

    #[test]
    fn test_enabled_empty_section_renders_heading_only() {
        let theme = theme();
        let ctx = RenderContext::new(&theme, &EchoMarkup);
        let mut data = empty_data();
        data.work = section(true, "Experience", vec![]);

        let node = descriptor(SectionKind::Work).render(&data, &ctx).unwrap();
        let el = node.as_element().unwrap();
        assert_eq!(el.children.len(), 1);
        assert_eq!(node.text_content(), "Experience");
        let heading = &node.find_all("h6")[0];
        assert!(heading.style.contains(&("color".to_string(), "#336699".to_string())));
    }

    #[test]
    fn test_work_items_filtered_in_input_order() {
        let theme = theme();
        let ctx = RenderContext::new(&theme, &EchoMarkup);
        let job = |id: &str, enable: bool| WorkItem {
            id: id.to_string(),
            enable,
            title: format!("Job {id}"),
            ..Default::default()
        };
        let mut data = empty_data();
        data.work = section(
            true,
            "Experience",
            vec![job("c", true), job("a", false), job("b", true)],
        );

        let node = descriptor(SectionKind::Work).render(&data, &ctx).unwrap();
        let ids: Vec<&str> = node
            .find_all("div")
            .into_iter()
            .filter_map(|el| el.attrs.iter().find(|(k, _)| k == "data-id"))
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(ids, vec!["c", "b"]);
        assert!(!node.text_content().contains("Job a"));
    }

    #[test]
    fn test_every_filtering_section_drops_disabled_items() {
        let theme = theme();
        let ctx = RenderContext::new(&theme, &EchoMarkup);
        let cases = [
            (SectionKind::Work, "work", "title"),
            (SectionKind::Education, "education", "name"),
            (SectionKind::Awards, "awards", "title"),
            (SectionKind::Certifications, "certifications", "title"),
            (SectionKind::Languages, "languages", "key"),
            (SectionKind::References, "references", "name"),
            (SectionKind::Extras, "extras", "key"),
        ];

        for (kind, key, field) in cases {
            assert_eq!(descriptor(kind).filter, ItemFilter::EnabledOnly, "{kind:?}");
            let mut value = json!({
                "data": { "profile": {} },
                "theme": { "font": {}, "colors": { "accent": "#336699" } }
            });
            value["data"][key] = json!({
                "enable": true,
                "heading": "Heading",
                "items": [
                    { "id": "1", "enable": true, field: "First shown" },
                    { "id": "2", "enable": false, field: "Hidden entry" },
                    { "id": "3", "enable": true, field: "Second shown" }
                ]
            });
            let state = RenderState::from_json(value).unwrap();

            let node = descriptor(kind).render(&state.data, &ctx).unwrap();
            let text = node.text_content();
            assert!(!text.contains("Hidden entry"), "{kind:?}");
            let first = text.find("First shown").expect("first item rendered");
            let second = text.find("Second shown").expect("second item rendered");
            assert!(first < second, "{kind:?} keeps input order");
        }
    }

    #[test]
    fn test_skills_and_hobbies_ignore_item_enable() {
        let theme = theme();
        let ctx = RenderContext::new(&theme, &EchoMarkup);
        let mut data = empty_data();
        data.skills = section(
            true,
            "Skills",
            vec![
                SkillItem {
                    id: "1".to_string(),
                    enable: false,
                    skill: "Rust".to_string(),
                },
                SkillItem {
                    id: "2".to_string(),
                    enable: true,
                    skill: "Go".to_string(),
                },
            ],
        );
        data.hobbies = section(
            true,
            "Hobbies",
            vec![HobbyItem {
                id: "h".to_string(),
                enable: false,
                hobby: "Chess".to_string(),
            }],
        );

        let skills = descriptor(SectionKind::Skills).render(&data, &ctx).unwrap();
        assert_eq!(skills.find_all("li").len(), 2);
        let hobbies = descriptor(SectionKind::Hobbies).render(&data, &ctx).unwrap();
        assert_eq!(hobbies.find_all("li").len(), 1);
        assert!(hobbies.text_content().contains("Chess"));
    }

    #[test]
    fn test_extras_render_as_table_rows() {
        let theme = theme();
        let ctx = RenderContext::new(&theme, &EchoMarkup);
        let mut data = empty_data();
        data.extras = section(
            true,
            "Personal",
            vec![
                ExtraItem {
                    id: "1".to_string(),
                    enable: true,
                    key: "DOB".to_string(),
                    value: "1990".to_string(),
                },
                ExtraItem {
                    id: "2".to_string(),
                    enable: false,
                    key: "Hidden".to_string(),
                    value: "x".to_string(),
                },
            ],
        );

        let node = descriptor(SectionKind::Extras).render(&data, &ctx).unwrap();
        assert_eq!(node.find_all("table").len(), 1);
        assert_eq!(node.find_all("tr").len(), 1);
        assert_eq!(node.find_all("td").len(), 2);
    }

    #[test]
    fn test_rich_text_goes_through_markup_renderer() {
        let theme = theme();
        let ctx = RenderContext::new(&theme, &EchoMarkup);
        let item = ReferenceItem {
            id: "r".to_string(),
            enable: true,
            name: "Grace".to_string(),
            description: "Great colleague".to_string(),
            ..Default::default()
        };
        let html = item.render(&ctx).to_html();
        assert!(html.contains("<div class=\"mt-2 text-sm\"><p>Great colleague</p></div>"));
    }

    // ── languages ───────────────────────────────────────────────────────────

    #[test]
    fn test_language_level_and_three_stars() {
        let theme = theme();
        let ctx = RenderContext::new(&theme, &EchoMarkup);
        let node = language("Fluent", 3.0).render(&ctx);
        assert!(node.text_content().contains("Fluent"));
        let stars: Vec<_> = node
            .find_all("i")
            .into_iter()
            .filter(|i| i.children == vec![Node::text("star")])
            .collect();
        assert_eq!(stars.len(), 3);
        assert!(stars[0].style.contains(&("color".to_string(), "#336699".to_string())));
    }

    #[test]
    fn test_language_rating_above_five_draws_exact_count() {
        let theme = theme();
        let ctx = RenderContext::new(&theme, &EchoMarkup);
        let node = language("Native", 12.0).render(&ctx);
        let stars = node
            .find_all("i")
            .into_iter()
            .filter(|i| i.children == vec![Node::text("star")])
            .count();
        assert_eq!(stars, 12);
    }

    #[test]
    fn test_language_zero_rating_has_no_icon_row() {
        let theme = theme();
        let ctx = RenderContext::new(&theme, &EchoMarkup);
        let node = language("Fluent", 0.0).render(&ctx);
        assert!(node.find_all("i").is_empty());
        // key heading + proficiency wrapper holding only the level label
        let proficiency = &node.as_element().unwrap().children[1];
        assert_eq!(proficiency.as_element().unwrap().children.len(), 1);
    }

    #[test]
    fn test_language_without_level_omits_label() {
        let theme = theme();
        let ctx = RenderContext::new(&theme, &EchoMarkup);
        let node = language("", 2.0).render(&ctx);
        assert!(node.find_all("div").iter().all(|d| !d.has_class("font-bold")));
        assert_eq!(node.find_all("i").len(), 2);
    }

    #[test]
    fn test_rating_icon_count_clamps() {
        assert_eq!(rating_icon_count(3.0), 3);
        assert_eq!(rating_icon_count(12.0), 12);
        assert_eq!(rating_icon_count(1_000.0), 1_000);
        assert_eq!(rating_icon_count(0.0), 0);
        assert_eq!(rating_icon_count(-2.0), 0);
        assert_eq!(rating_icon_count(2.9), 2);
        assert_eq!(rating_icon_count(f64::NAN), 0);
        assert_eq!(rating_icon_count(f64::INFINITY), 0);
        assert_eq!(rating_icon_count(1e9), MAX_RATING_ICONS);
    }

    // ── profile and contact ─────────────────────────────────────────────────

    #[test]
    fn test_photo_only_when_non_empty() {
        let mut profile = Profile::default();
        assert!(identity_block(&profile).find_all("img").is_empty());

        profile.photo = "https://example.com/me.jpg".to_string();
        let node = identity_block(&profile);
        let imgs = node.find_all("img");
        assert_eq!(imgs.len(), 1);
        assert!(imgs[0]
            .attrs
            .contains(&("src".to_string(), "https://example.com/me.jpg".to_string())));
    }

    #[test]
    fn test_contact_skips_empty_values_but_keeps_address() {
        let theme = theme();
        let ctx = RenderContext::new(&theme, &EchoMarkup);
        let mut profile = Profile::default();
        profile.email = "ada@example.com".to_string();
        profile.address.line1 = "12 Analytical St".to_string();

        let node = contact_block(&profile, &ctx);
        let text = node.text_content();
        assert!(text.contains("Email Address"));
        assert!(text.contains("ada@example.com"));
        assert!(!text.contains("Phone Number"));
        assert!(!text.contains("Website"));
        assert!(text.contains("12 Analytical St"));
        assert_eq!(node.find_all("p").len(), 4, "email value + three address lines");
    }
}
