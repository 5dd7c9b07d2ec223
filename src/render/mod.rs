//! Section rendering.
//!
//! Renderers turn a [`RenderContext`] into [`RenderedSection`] values: plain
//! data with every string already resolved for the context language. The
//! HTML writer in [`html`] is one consumer; the `preview` binary prints the
//! same values as JSON.

mod collection;
mod context;
pub mod html;
mod sections;

pub use collection::{render_collection, LocalizedEntry};
pub use context::RenderContext;
pub use html::{page_to_html, section_to_html};
pub use sections::{
    render_awards, render_chatbot, render_contact, render_footer, render_header, render_intro,
    render_page, render_photos, render_reviews, render_section, render_services,
};

use serde::Serialize;

/// Page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Header,
    Intro,
    Services,
    Reviews,
    Photos,
    Awards,
    Contact,
    Footer,
    Chatbot,
}

impl SectionId {
    pub const PAGE_ORDER: [SectionId; 9] = [
        SectionId::Header,
        SectionId::Intro,
        SectionId::Services,
        SectionId::Reviews,
        SectionId::Photos,
        SectionId::Awards,
        SectionId::Contact,
        SectionId::Footer,
        SectionId::Chatbot,
    ];

    /// In-page anchor (`#intro`, `#services`, ...).
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Header => "top",
            SectionId::Intro => "intro",
            SectionId::Services => "services",
            SectionId::Reviews => "reviews",
            SectionId::Photos => "photos",
            SectionId::Awards => "awards",
            SectionId::Contact => "contact",
            SectionId::Footer => "footer",
            SectionId::Chatbot => "chatbot",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::PAGE_ORDER
            .into_iter()
            .find(|id| id.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            SectionId::Header => "header",
            SectionId::Footer => "footer",
            other => other.anchor(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// In-page anchor
    Nav,
    LanguageToggle,
    External,
    Social,
    Phone,
    Email,
    WhatsApp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub kind: LinkKind,
    pub href: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
}

impl Link {
    pub fn new(kind: LinkKind, href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind,
            href: href.into(),
            label: label.into(),
            aria_label: None,
        }
    }

    /// Links that leave the site open in a new tab.
    pub fn opens_new_tab(&self) -> bool {
        matches!(
            self.kind,
            LinkKind::External | LinkKind::Social | LinkKind::WhatsApp
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

/// One entry of a collection section (a service, a photo, a review, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectionItem {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byline: Option<String>,
    /// Short marker shown next to the byline (reviewer initials)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    /// Whole stars, 0 to 5
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

/// Labels of the static contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub title: String,
    pub name_label: String,
    pub email_label: String,
    pub phone_label: String,
    pub message_label: String,
    pub submit_label: String,
    pub success_message: String,
}

/// A fully localized section, ready to be written out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSection {
    pub id: SectionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub paragraphs: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<SectionItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    /// Heading shown above the links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// Map iframe source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<ContactForm>,
}

impl RenderedSection {
    /// A section with no content. Writers emit nothing for it.
    pub fn empty(id: SectionId) -> Self {
        Self {
            id,
            brand: None,
            heading: None,
            subtitle: None,
            paragraphs: Vec::new(),
            items: Vec::new(),
            links: Vec::new(),
            links_label: None,
            image: None,
            embed_url: None,
            form: None,
        }
    }

    pub fn with_heading(id: SectionId, heading: &str, subtitle: Option<&str>) -> Self {
        Self {
            heading: Some(heading.to_string()),
            subtitle: subtitle.map(str::to_string),
            ..Self::empty(id)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.brand.is_none()
            && self.heading.is_none()
            && self.subtitle.is_none()
            && self.paragraphs.is_empty()
            && self.items.is_empty()
            && self.links.is_empty()
            && self.links_label.is_none()
            && self.image.is_none()
            && self.embed_url.is_none()
            && self.form.is_none()
    }

    /// Links of one kind, in order.
    pub fn links_of(&self, kind: LinkKind) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(move |link| link.kind == kind)
    }
}
