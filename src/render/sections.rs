use crate::render::{
    render_collection, ContactForm, Image, Link, LinkKind, LocalizedEntry, RenderContext,
    RenderedSection, SectionId, SectionItem,
};
use crate::whatsapp::whatsapp_url;

const WHY_WEBSITE_URL: &str = "https://websitiopro.com/why-you-need-a-website";
const DOMAIN_CHECKER_URL: &str = "https://websitiopro.com/domain-checker";
const POWERED_BY_URL: &str = "https://websitiopro.com";

/// Sections linked from the navigation bar, with their label keys.
const NAV: [(SectionId, &str); 6] = [
    (SectionId::Intro, "nav.intro"),
    (SectionId::Services, "nav.services"),
    (SectionId::Reviews, "nav.reviews"),
    (SectionId::Photos, "nav.photos"),
    (SectionId::Awards, "nav.awards"),
    (SectionId::Contact, "nav.contact"),
];

const FOOTER_LINKS: [(SectionId, &str); 4] = [
    (SectionId::Intro, "footerLinkIntro"),
    (SectionId::Services, "footerLinkServices"),
    (SectionId::Reviews, "footerLinkReviews"),
    (SectionId::Contact, "footerLinkContact"),
];

fn anchor_link(id: SectionId, label: &str) -> Link {
    Link::new(LinkKind::Nav, format!("#{}", id.anchor()), label)
}

fn facebook_link(ctx: &RenderContext<'_>, label: &str) -> Option<Link> {
    ctx.config()
        .facebook_url()
        .map(|url| Link::new(LinkKind::Social, url, label))
}

/// Navigation bar, language toggle and hero.
pub fn render_header(ctx: &RenderContext<'_>) -> RenderedSection {
    let config = ctx.config();
    let mut section = RenderedSection::with_heading(
        SectionId::Header,
        ctx.t("tagline"),
        Some(ctx.t("subtitle")),
    );

    section.brand = Some(config.name.clone());
    section.image = config.logo().map(|logo| Image {
        src: logo.to_string(),
        alt: config.name.clone(),
    });

    section.links = NAV
        .iter()
        .map(|(id, key)| anchor_link(*id, ctx.t(key)))
        .collect();

    let target = ctx.language().other();
    section.links.push(Link {
        aria_label: Some(format!("Switch to {}", target.name())),
        ..Link::new(
            LinkKind::LanguageToggle,
            ctx.page_path(target),
            target.native_name(),
        )
    });

    if config.show_why_website_button {
        section
            .links
            .push(Link::new(LinkKind::External, WHY_WEBSITE_URL, ctx.t("whyWebsite")));
    }
    if config.show_domain_button {
        section
            .links
            .push(Link::new(LinkKind::External, DOMAIN_CHECKER_URL, ctx.t("findDomain")));
    }

    section
}

pub fn render_intro(ctx: &RenderContext<'_>) -> RenderedSection {
    let config = ctx.config();
    let mut section = RenderedSection::with_heading(SectionId::Intro, ctx.t("introTitle"), None);

    section.paragraphs = vec![ctx.t("bio").to_string(), ctx.t("bioExtra").to_string()];
    section.image = config.logo().map(|logo| Image {
        src: logo.to_string(),
        alt: config.name.clone(),
    });
    section.links.extend(facebook_link(ctx, ctx.t("followFacebook")));

    section
}

pub fn render_services(ctx: &RenderContext<'_>) -> RenderedSection {
    render_collection(
        ctx,
        SectionId::Services,
        "servicesTitle",
        "servicesSubtitle",
        &ctx.config().services,
    )
}

pub fn render_reviews(ctx: &RenderContext<'_>) -> RenderedSection {
    render_collection(
        ctx,
        SectionId::Reviews,
        "reviewsTitle",
        "reviewsSubtitle",
        &ctx.config().reviews,
    )
}

pub fn render_photos(ctx: &RenderContext<'_>) -> RenderedSection {
    render_collection(
        ctx,
        SectionId::Photos,
        "photosTitle",
        "photosSubtitle",
        &ctx.config().photos,
    )
}

pub fn render_awards(ctx: &RenderContext<'_>) -> RenderedSection {
    render_collection(
        ctx,
        SectionId::Awards,
        "awardsTitle",
        "awardsSubtitle",
        &ctx.config().awards,
    )
}

/// Contact details, WhatsApp button, map and the contact form.
///
/// Each detail appears only when the site has a value for it.
pub fn render_contact(ctx: &RenderContext<'_>) -> RenderedSection {
    let config = ctx.config();
    let mut section = RenderedSection::with_heading(
        SectionId::Contact,
        ctx.t("contactTitle"),
        Some(ctx.t("contactSubtitle")),
    );

    if let Some(address) = config.address() {
        section.items.push(contact_item(ctx, "addressLabel", address, "map-marker-alt"));
    }
    if let Some(phone) = config.phone() {
        section.items.push(contact_item(ctx, "phoneLabel", phone, "phone"));
        section
            .links
            .push(Link::new(LinkKind::Phone, format!("tel:{}", phone), phone));
    }
    if let Some(email) = config.email() {
        section.items.push(contact_item(ctx, "emailLabel", email, "envelope"));
        section
            .links
            .push(Link::new(LinkKind::Email, format!("mailto:{}", email), email));
    }
    if let Some(hours) = &config.office_hours {
        let weekdays = non_empty_or(&hours.monday_to_friday, ctx.t("hoursMF"));
        let saturday = non_empty_or(&hours.saturday, ctx.t("hoursSat"));
        section.items.push(SectionItem {
            meta: Some(saturday.to_string()),
            ..contact_item(ctx, "hoursLabel", weekdays, "clock")
        });
    }

    if let Some(number) = config.whatsapp_number() {
        let url = whatsapp_url(number, config.whatsapp_message().unwrap_or(""));
        section
            .links
            .push(Link::new(LinkKind::WhatsApp, url, ctx.t("whatsappBtn")));
    }

    section.embed_url = config.google_maps_embed().map(str::to_string);
    section.form = Some(ContactForm {
        title: ctx.t("contactForm").to_string(),
        name_label: ctx.t("formName").to_string(),
        email_label: ctx.t("formEmail").to_string(),
        phone_label: ctx.t("formPhone").to_string(),
        message_label: ctx.t("formMessage").to_string(),
        submit_label: ctx.t("formSubmit").to_string(),
        success_message: ctx.t("formSuccess").to_string(),
    });

    section
}

fn contact_item(ctx: &RenderContext<'_>, label_key: &str, value: &str, icon: &str) -> SectionItem {
    SectionItem {
        title: ctx.t(label_key).to_string(),
        description: value.to_string(),
        icon: Some(icon.to_string()),
        ..SectionItem::default()
    }
}

fn non_empty_or<'v>(value: &'v str, fallback: &'v str) -> &'v str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

pub fn render_footer(ctx: &RenderContext<'_>) -> RenderedSection {
    let config = ctx.config();
    let mut section = RenderedSection::with_heading(SectionId::Footer, ctx.t("footerAbout"), None);

    section.brand = Some(config.name.clone());
    section.paragraphs.push(ctx.t("footerAboutText").to_string());
    section.paragraphs.push(ctx.t("footerCopyright").to_string());

    if config.address().is_some() || config.phone().is_some() || config.email().is_some() {
        section.items.push(SectionItem {
            title: ctx.t("footerContact").to_string(),
            description: config.address().unwrap_or_default().to_string(),
            icon: config.address().map(|_| "map-marker-alt".to_string()),
            ..SectionItem::default()
        });
    }

    section.links_label = Some(ctx.t("footerQuickLinks").to_string());
    section.links.extend(facebook_link(ctx, "Facebook"));
    section.links.extend(
        FOOTER_LINKS
            .iter()
            .map(|(id, key)| anchor_link(*id, ctx.t(key))),
    );
    if let Some(phone) = config.phone() {
        section
            .links
            .push(Link::new(LinkKind::Phone, format!("tel:{}", phone), phone));
    }
    if let Some(email) = config.email() {
        section
            .links
            .push(Link::new(LinkKind::Email, format!("mailto:{}", email), email));
    }
    section.links.push(Link::new(
        LinkKind::External,
        POWERED_BY_URL,
        format!("{} WebSitioPro.com", ctx.t("footerPoweredBy")),
    ));

    section
}

/// Chat widget: title, welcome line and the site's canned questions.
pub fn render_chatbot(ctx: &RenderContext<'_>) -> RenderedSection {
    let config = ctx.config();
    if !config.show_chatbot {
        return RenderedSection::empty(SectionId::Chatbot);
    }

    let mut section =
        RenderedSection::with_heading(SectionId::Chatbot, ctx.t("chatbotTitle"), None);
    section.paragraphs.push(ctx.t("chatbotWelcome").to_string());
    section.items = config
        .chatbot_questions
        .iter()
        .map(|question| question.to_item(ctx))
        .collect();

    section
}

/// Render one section by id.
pub fn render_section(ctx: &RenderContext<'_>, id: SectionId) -> RenderedSection {
    match id {
        SectionId::Header => render_header(ctx),
        SectionId::Intro => render_intro(ctx),
        SectionId::Services => render_services(ctx),
        SectionId::Reviews => render_reviews(ctx),
        SectionId::Photos => render_photos(ctx),
        SectionId::Awards => render_awards(ctx),
        SectionId::Contact => render_contact(ctx),
        SectionId::Footer => render_footer(ctx),
        SectionId::Chatbot => render_chatbot(ctx),
    }
}

/// Every section, in page order.
pub fn render_page(ctx: &RenderContext<'_>) -> Vec<RenderedSection> {
    SectionId::PAGE_ORDER
        .into_iter()
        .map(|id| render_section(ctx, id))
        .collect()
}
