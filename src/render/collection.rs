use crate::render::{RenderContext, RenderedSection, SectionId, SectionItem};
use crate::site::{Award, ChatbotQuestion, Photo, Review, Service};

/// A collection entry that can be shown as one [`SectionItem`].
pub trait LocalizedEntry {
    fn to_item(&self, ctx: &RenderContext<'_>) -> SectionItem;
}

/// Render a localized collection under a titled section.
///
/// Items keep the stored order. An empty collection renders as an empty
/// section, heading included.
pub fn render_collection<T: LocalizedEntry>(
    ctx: &RenderContext<'_>,
    id: SectionId,
    title_key: &str,
    subtitle_key: &str,
    entries: &[T],
) -> RenderedSection {
    if entries.is_empty() {
        return RenderedSection::empty(id);
    }

    let mut section =
        RenderedSection::with_heading(id, ctx.t(title_key), Some(ctx.t(subtitle_key)));
    section.items = entries.iter().map(|entry| entry.to_item(ctx)).collect();
    section
}

fn icon(name: &str) -> Option<String> {
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

impl LocalizedEntry for Service {
    fn to_item(&self, ctx: &RenderContext<'_>) -> SectionItem {
        SectionItem {
            title: ctx.localize(self.title.as_ref()).to_string(),
            description: ctx.localize(self.description.as_ref()).to_string(),
            icon: icon(&self.icon),
            ..SectionItem::default()
        }
    }
}

impl LocalizedEntry for Award {
    fn to_item(&self, ctx: &RenderContext<'_>) -> SectionItem {
        SectionItem {
            title: ctx.localize(self.title.as_ref()).to_string(),
            description: ctx.localize(self.description.as_ref()).to_string(),
            icon: icon(&self.icon),
            ..SectionItem::default()
        }
    }
}

impl LocalizedEntry for Photo {
    fn to_item(&self, ctx: &RenderContext<'_>) -> SectionItem {
        SectionItem {
            title: ctx.localize(self.caption.as_ref()).to_string(),
            image_url: Some(self.url.clone()),
            ..SectionItem::default()
        }
    }
}

impl LocalizedEntry for Review {
    fn to_item(&self, ctx: &RenderContext<'_>) -> SectionItem {
        let date = ctx.localize(self.date.as_ref());

        SectionItem {
            description: ctx.localize(self.quote.as_ref()).to_string(),
            byline: Some(self.name.clone()),
            badge: Some(self.initials.clone()).filter(|i| !i.is_empty()),
            meta: Some(date.to_string()).filter(|d| !d.is_empty()),
            rating: Some(stars(self.rating)),
            ..SectionItem::default()
        }
    }
}

impl LocalizedEntry for ChatbotQuestion {
    fn to_item(&self, ctx: &RenderContext<'_>) -> SectionItem {
        SectionItem {
            title: ctx.localize(self.question.as_ref()).to_string(),
            description: ctx.localize(self.answer.as_ref()).to_string(),
            ..SectionItem::default()
        }
    }
}

/// Whole stars for a rating; fractions round up, out-of-range values clamp.
fn stars(rating: f64) -> u8 {
    if rating.is_nan() {
        return 0;
    }
    rating.ceil().clamp(0.0, 5.0) as u8
}
