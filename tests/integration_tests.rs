//! Integration tests for the WebSitioPro site renderer
//!
//! These tests drive the public API the way the binaries do: load a site
//! configuration, hold the language state, render sections and pages, and
//! write the static site.

use serde_json::json;
use std::fs;
use tempfile::TempDir;

use websitio::chatbot::chatbot_reply;
use websitio::generator::generate_static_site;
use websitio::i18n::{ConfigValidator, Language, LanguageState};
use websitio::notification::ClientApproval;
use websitio::render::{
    page_to_html, render_intro, render_page, render_photos, render_services, LinkKind, SectionId,
};
use websitio::site::WebsiteConfig;

// ==================== Test Helpers ====================

/// A realistic dental clinic configuration
fn clinic_config() -> WebsiteConfig {
    serde_json::from_value(json!({
        "id": 1,
        "name": "Clínica Dental Sonrisa",
        "defaultLanguage": "es",
        "showWhyWebsiteButton": true,
        "showDomainButton": false,
        "showChatbot": true,
        "whatsappNumber": "+52 983 123 4567",
        "whatsappMessage": "Hola, quiero una cita",
        "facebookUrl": "https://facebook.com/clinicasonrisa",
        "address": "Av. Héroes 123, Chetumal",
        "phone": "+52 983 123 4567",
        "email": "citas@clinicasonrisa.mx",
        "officeHours": {"mondayToFriday": "9:00 - 18:00", "saturday": "10:00 - 14:00"},
        "primaryColor": "#00A859",
        "translations": {
            "en": {"tagline": "Your Family Dentist"},
            "es": {"tagline": "Tu Dentista Familiar"}
        },
        "services": [
            {
                "icon": "briefcase",
                "title": {"en": "Consulting", "es": "Consultoría"},
                "description": {"en": "A", "es": "B"}
            },
            {
                "icon": "tooth",
                "title": {"en": "Cleaning", "es": "Limpieza"},
                "description": {"en": "Deep cleaning", "es": "Limpieza profunda"}
            }
        ],
        "reviews": [
            {
                "name": "Ana López",
                "initials": "AL",
                "rating": 5,
                "date": {"en": "March 2024", "es": "Marzo 2024"},
                "quote": {"en": "Excellent care", "es": "Excelente atención"}
            }
        ],
        "photos": [
            {
                "url": "https://cdn.example.com/1.jpg",
                "caption": {"en": "Lobby", "es": "Recepción"}
            },
            {
                "url": "https://cdn.example.com/2.jpg",
                "caption": {"en": "Office", "es": "Consultorio"}
            },
            {"url": "https://cdn.example.com/3.jpg", "caption": {"en": "Chair", "es": "Sillón"}}
        ],
        "awards": [],
        "chatbotQuestions": [
            {
                "key": "hours",
                "question": {"en": "What are your hours?", "es": "¿Cuál es su horario?"},
                "answer": {"en": "9 to 6", "es": "De 9 a 6"}
            }
        ]
    }))
    .expect("Clinic config should parse")
}

// ==================== Language State Tests ====================

#[test]
fn test_initial_language_from_config() {
    let site = clinic_config();
    let state = LanguageState::new(&site);
    assert_eq!(state.language(), Language::Spanish);
}

#[test]
fn test_toggle_round_trip_changes_rendering() {
    let site = clinic_config();
    let mut state = LanguageState::with_language(Language::English);

    state.toggle_language();
    let spanish = render_services(&state.context(&site));
    assert_eq!(spanish.items[0].title, "Consultoría");

    state.toggle_language();
    assert_eq!(state.language(), Language::English);
    let english = render_services(&state.context(&site));
    assert_eq!(english.items[0].title, "Consulting");
}

// ==================== Rendering Tests ====================

#[test]
fn test_services_scenario_in_spanish() {
    let site = clinic_config();
    let ctx = LanguageState::new(&site).context(&site);

    let services = render_services(&ctx);
    assert_eq!(services.items[0].title, "Consultoría");
    assert_eq!(services.items[0].description, "B");
    assert_eq!(services.items[0].icon.as_deref(), Some("briefcase"));
}

#[test]
fn test_photos_render_all_in_order() {
    let site = clinic_config();
    let ctx = LanguageState::new(&site).context(&site);

    let captions: Vec<_> = render_photos(&ctx)
        .items
        .into_iter()
        .map(|item| item.title)
        .collect();
    assert_eq!(captions, vec!["Recepción", "Consultorio", "Sillón"]);
}

#[test]
fn test_intro_facebook_link_depends_on_config() {
    let mut site = clinic_config();
    let ctx = LanguageState::new(&site).context(&site);
    assert_eq!(render_intro(&ctx).links_of(LinkKind::Social).count(), 1);

    site.facebook_url = None;
    let ctx = LanguageState::new(&site).context(&site);
    assert_eq!(render_intro(&ctx).links_of(LinkKind::Social).count(), 0);
}

#[test]
fn test_override_and_default_strings_on_page() {
    let site = clinic_config();
    let ctx = LanguageState::new(&site).context(&site);

    let page = render_page(&ctx);
    let header = page.iter().find(|s| s.id == SectionId::Header).unwrap();
    assert_eq!(header.heading.as_deref(), Some("Tu Dentista Familiar"));
    assert_eq!(
        header.subtitle.as_deref(),
        Some("Brindando servicio de calidad por más de 20 años")
    );
}

#[test]
fn test_empty_awards_section_is_omitted_from_html() {
    let site = clinic_config();
    let html = page_to_html(&LanguageState::new(&site).context(&site));

    assert!(!html.contains("id=\"awards\""));
    assert!(html.contains("id=\"services\""));
    assert!(html.contains("https://wa.me/529831234567?text=Hola%2C%20quiero%20una%20cita"));
}

#[test]
fn test_broken_collections_still_render_page() {
    let site = WebsiteConfig::from_json(
        r#"{"name": "Taller", "services": {"not": "a list"}, "photos": [1, 2, {"url": "ok.jpg"}]}"#,
    )
    .unwrap();
    let ctx = LanguageState::new(&site).context(&site);

    assert!(render_services(&ctx).is_empty());
    assert_eq!(render_photos(&ctx).items.len(), 1);
    assert!(page_to_html(&ctx).contains("<title>Taller</title>"));
}

#[test]
fn test_malformed_optional_values_still_render_page() {
    let site = WebsiteConfig::from_json(
        r#"{
            "name": "Taller",
            "officeHours": "9-5",
            "primaryColor": "red;} body{display:none",
            "translations": {"en": {"tagline": null, "contactTitle": "Reach Us"}}
        }"#,
    )
    .unwrap();
    let ctx = LanguageState::with_language(Language::English).context(&site);

    let html = page_to_html(&ctx);
    assert!(html.contains("Experienced Professional"));
    assert!(html.contains("Reach Us"));
    assert!(html.contains("id=\"contact\""));
    assert!(!html.contains("9-5"));
    assert_eq!(site.theme().primary, "#00A859");
}

// ==================== Chatbot Tests ====================

#[test]
fn test_chatbot_follows_language_state() {
    let site = clinic_config();
    let mut state = LanguageState::new(&site);

    assert_eq!(chatbot_reply(&state.context(&site), "¿cuál es su horario?"), "De 9 a 6");

    state.toggle_language();
    assert_eq!(chatbot_reply(&state.context(&site), "What are your hours?"), "9 to 6");
}

// ==================== Static Generation Tests ====================

#[test]
fn test_generate_static_site() {
    let temp_dir = TempDir::new().unwrap();
    let site = clinic_config();

    let generated = generate_static_site(&site, temp_dir.path()).unwrap();

    let home = fs::read_to_string(temp_dir.path().join("index.html")).unwrap();
    let english = fs::read_to_string(temp_dir.path().join("en").join("index.html")).unwrap();
    let css = fs::read_to_string(&generated.stylesheet).unwrap();

    assert!(home.contains("<html lang=\"es\">"));
    assert!(home.contains("Consultoría"));
    assert!(home.contains("href=\"/en/\""));
    assert!(english.contains("<html lang=\"en\">"));
    assert!(english.contains("Consulting"));
    assert!(english.contains("href=\"/\""));
    assert!(css.contains("--primary: #00A859;"));
}

#[test]
fn test_generate_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("site.json");
    fs::write(&config_path, serde_json::to_string(&clinic_config()).unwrap()).unwrap();

    let site = WebsiteConfig::from_path(&config_path).unwrap();
    let output = temp_dir.path().join("dist");
    let generated = generate_static_site(&site, &output).unwrap();

    assert_eq!(generated.pages.len(), 2);
    assert!(output.join("style.css").exists());
}

// ==================== Validation Tests ====================

#[test]
fn test_clinic_config_validates_clean() {
    let report = ConfigValidator::validate(&clinic_config());
    assert!(report.is_clean(), "unexpected findings: {:?}", report);
}

// ==================== Notification Tests ====================

#[test]
fn test_approval_notification_for_site() {
    let site = clinic_config();
    let approval: ClientApproval = serde_json::from_value(json!({
        "notificationEmail": "agency@websitiopro.com",
        "clientName": "Dra. Pérez",
        "clientEmail": site.email.clone().unwrap(),
        "businessName": site.name.clone(),
        "templateType": "professionals",
        "approvedSections": ["services", "photos"],
        "pendingEdits": [],
        "generalInstructions": "None",
        "submissionDate": "2024-03-15T14:30:00Z"
    }))
    .unwrap();

    let email = approval.to_email();
    assert_eq!(email.subject, "Client Approval Form Submitted - Clínica Dental Sonrisa");
    assert!(email.text.contains("- Services\n- Photos\n"));
    assert!(!email.text.contains("Sections Needing Edits"));
    assert!(!email.text.contains("General Instructions"));
}
