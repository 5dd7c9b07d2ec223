//! HTML output for rendered sections.
//!
//! Every text node and attribute value goes through `html-escape`. The only
//! raw markup written is the site's own analytics snippet.

use crate::render::{render_page, Link, RenderContext, RenderedSection, SectionId, SectionItem};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

pub const STYLESHEET_PATH: &str = "/style.css";

/// One section as HTML. Empty sections produce an empty string.
pub fn section_to_html(section: &RenderedSection) -> String {
    if section.is_empty() {
        return String::new();
    }

    let tag = match section.id {
        SectionId::Header => "header",
        SectionId::Footer => "footer",
        SectionId::Chatbot => "aside",
        _ => "section",
    };

    let mut html = format!(
        "<{} id=\"{}\" class=\"section section-{}\">\n",
        tag,
        section.id.anchor(),
        section.id.name()
    );

    if let Some(brand) = &section.brand {
        html.push_str(&format!("<div class=\"brand\">{}</div>\n", text(brand)));
    }
    if let Some(image) = &section.image {
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">\n",
            attr(&image.src),
            attr(&image.alt)
        ));
    }

    let heading_tag = if section.id == SectionId::Header { "h1" } else { "h2" };
    if let Some(heading) = &section.heading {
        html.push_str(&format!("<{0}>{1}</{0}>\n", heading_tag, text(heading)));
    }
    if let Some(subtitle) = &section.subtitle {
        html.push_str(&format!("<p class=\"lead\">{}</p>\n", text(subtitle)));
    }
    for paragraph in &section.paragraphs {
        html.push_str(&format!("<p>{}</p>\n", text(paragraph)));
    }

    if !section.items.is_empty() {
        html.push_str("<div class=\"items\">\n");
        for item in &section.items {
            html.push_str(&item_to_html(item));
        }
        html.push_str("</div>\n");
    }

    if !section.links.is_empty() {
        match &section.links_label {
            Some(label) => {
                html.push_str(&format!("<nav class=\"links\" aria-label=\"{}\">\n", attr(label)));
                html.push_str(&format!("<h3>{}</h3>\n", text(label)));
            }
            None => html.push_str("<nav class=\"links\">\n"),
        }
        for link in &section.links {
            html.push_str(&link_to_html(link));
        }
        html.push_str("</nav>\n");
    }

    if let Some(url) = &section.embed_url {
        html.push_str(&format!(
            "<iframe class=\"map\" src=\"{}\" loading=\"lazy\" allowfullscreen></iframe>\n",
            attr(url)
        ));
    }

    if let Some(form) = &section.form {
        html.push_str(&format!(
            concat!(
                "<form class=\"contact-form\" data-success=\"{success}\">\n",
                "<h3>{title}</h3>\n",
                "<label for=\"name\">{name}</label>",
                "<input id=\"name\" name=\"name\" type=\"text\" required>\n",
                "<label for=\"email\">{email}</label>",
                "<input id=\"email\" name=\"email\" type=\"email\" required>\n",
                "<label for=\"phone\">{phone}</label>",
                "<input id=\"phone\" name=\"phone\" type=\"tel\">\n",
                "<label for=\"message\">{message}</label>",
                "<textarea id=\"message\" name=\"message\" required></textarea>\n",
                "<button type=\"submit\">{submit}</button>\n",
                "</form>\n"
            ),
            success = attr(&form.success_message),
            title = text(&form.title),
            name = text(&form.name_label),
            email = text(&form.email_label),
            phone = text(&form.phone_label),
            message = text(&form.message_label),
            submit = text(&form.submit_label),
        ));
    }

    html.push_str(&format!("</{}>\n", tag));
    html
}

fn item_to_html(item: &SectionItem) -> String {
    let mut html = String::from("<article class=\"item\">\n");

    if let Some(icon) = &item.icon {
        html.push_str(&format!("<i class=\"fas fa-{}\"></i>\n", attr(icon)));
    }
    if let Some(url) = &item.image_url {
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">\n",
            attr(url),
            attr(&item.title)
        ));
    }
    if let Some(rating) = item.rating {
        let stars: String = (0..5).map(|i| if i < rating { '★' } else { '☆' }).collect();
        html.push_str(&format!(
            "<div class=\"rating\" aria-label=\"{}/5\">{}</div>\n",
            rating, stars
        ));
    }
    if !item.title.is_empty() {
        html.push_str(&format!("<h3>{}</h3>\n", text(&item.title)));
    }
    if !item.description.is_empty() {
        html.push_str(&format!("<p>{}</p>\n", text(&item.description)));
    }
    if item.byline.is_some() || item.badge.is_some() {
        html.push_str("<footer>");
        if let Some(badge) = &item.badge {
            html.push_str(&format!("<span class=\"badge\">{}</span>", text(badge)));
        }
        if let Some(byline) = &item.byline {
            html.push_str(&format!("<cite>{}</cite>", text(byline)));
        }
        html.push_str("</footer>\n");
    }
    if let Some(meta) = &item.meta {
        html.push_str(&format!("<small>{}</small>\n", text(meta)));
    }

    html.push_str("</article>\n");
    html
}

fn link_to_html(link: &Link) -> String {
    let mut attributes = format!(
        "class=\"link link-{}\" href=\"{}\"",
        link_class(link),
        attr(&link.href)
    );
    if let Some(aria) = &link.aria_label {
        attributes.push_str(&format!(" aria-label=\"{}\"", attr(aria)));
    }
    if link.opens_new_tab() {
        attributes.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
    }

    format!("<a {}>{}</a>\n", attributes, text(&link.label))
}

fn link_class(link: &Link) -> &'static str {
    use crate::render::LinkKind;

    match link.kind {
        LinkKind::Nav => "nav",
        LinkKind::LanguageToggle => "language-toggle",
        LinkKind::External => "external",
        LinkKind::Social => "social",
        LinkKind::Phone => "phone",
        LinkKind::Email => "email",
        LinkKind::WhatsApp => "whatsapp",
    }
}

/// Full HTML document for one site in one language.
pub fn page_to_html(ctx: &RenderContext<'_>) -> String {
    let config = ctx.config();
    let title = if config.name.trim().is_empty() {
        "WebSitioPro"
    } else {
        config.name.as_str()
    };

    let mut html = format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"{lang}\">\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
            "<title>{title}</title>\n",
            "<link rel=\"stylesheet\" href=\"{css}\">\n",
            "</head>\n",
            "<body>\n"
        ),
        lang = ctx.language().code(),
        title = text(title),
        css = STYLESHEET_PATH,
    );

    for section in render_page(ctx) {
        html.push_str(&section_to_html(&section));
    }

    if let Some(analytics) = config.analytics_code.as_deref().filter(|a| !a.trim().is_empty()) {
        html.push_str(analytics);
        html.push('\n');
    }

    html.push_str("</body>\n</html>\n");
    html
}
