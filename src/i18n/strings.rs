use crate::i18n::Language;
use std::collections::HashMap;
use std::sync::OnceLock;

/// One built-in UI string in both languages.
#[derive(Debug, Clone, Copy)]
pub struct TranslationEntry {
    pub key: &'static str,
    pub en: &'static str,
    pub es: &'static str,
}

impl TranslationEntry {
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.en,
            Language::Spanish => self.es,
        }
    }
}

const fn entry(key: &'static str, en: &'static str, es: &'static str) -> TranslationEntry {
    TranslationEntry { key, en, es }
}

/// Built-in UI strings used when a site does not override a key.
pub const DEFAULT_TRANSLATIONS: &[TranslationEntry] = &[
    // ==================== Hero ====================
    entry("tagline", "Experienced Professional", "Profesional con Experiencia"),
    entry(
        "subtitle",
        "Providing quality service for over 20 years",
        "Brindando servicio de calidad por más de 20 años",
    ),
    entry("whyWebsite", "Why You Need a Website", "Por qué necesitas un sitio web"),
    entry("findDomain", "Find Your Domain Name", "Encuentra tu nombre de dominio"),
    // ==================== Intro ====================
    entry("introTitle", "About Us", "Sobre Nosotros"),
    entry(
        "bio",
        "Professional with years of experience in the field.",
        "Profesional con años de experiencia en el campo.",
    ),
    entry(
        "bioExtra",
        "Committed to providing the best service to all clients.",
        "Comprometidos a brindar el mejor servicio a todos los clientes.",
    ),
    entry("followFacebook", "Follow on Facebook", "Síguenos en Facebook"),
    // ==================== Collections ====================
    entry("servicesTitle", "Our Services", "Nuestros Servicios"),
    entry(
        "servicesSubtitle",
        "Professional care for all your needs",
        "Atención profesional para todas tus necesidades",
    ),
    entry("reviewsTitle", "Client Reviews", "Opiniones de Clientes"),
    entry(
        "reviewsSubtitle",
        "What our clients say about us",
        "Lo que nuestros clientes dicen sobre nosotros",
    ),
    entry("photosTitle", "Our Office", "Nuestra Oficina"),
    entry(
        "photosSubtitle",
        "Take a look around our modern facility",
        "Conoce nuestras instalaciones modernas",
    ),
    entry("awardsTitle", "Certifications & Awards", "Certificaciones y Premios"),
    entry(
        "awardsSubtitle",
        "Recognition for excellence in our field",
        "Reconocimiento por excelencia en nuestro campo",
    ),
    // ==================== Contact ====================
    entry("contactTitle", "Contact Us", "Contáctanos"),
    entry("contactSubtitle", "Schedule your appointment today", "Programa tu cita hoy"),
    entry("contactInfo", "Contact Information", "Información de Contacto"),
    entry("addressLabel", "Address", "Dirección"),
    entry("phoneLabel", "Phone", "Teléfono"),
    entry("emailLabel", "Email", "Correo Electrónico"),
    entry("hoursLabel", "Office Hours", "Horario de Oficina"),
    entry(
        "hoursMF",
        "Monday - Friday: 9:00 AM - 6:00 PM",
        "Lunes - Viernes: 9:00 AM - 6:00 PM",
    ),
    entry("hoursSat", "Saturday: 10:00 AM - 2:00 PM", "Sábado: 10:00 AM - 2:00 PM"),
    entry("whatsappBtn", "Contact via WhatsApp", "Contactar por WhatsApp"),
    entry("contactForm", "Send us a Message", "Envíanos un Mensaje"),
    entry("formName", "Full Name", "Nombre Completo"),
    entry("formEmail", "Email Address", "Correo Electrónico"),
    entry("formPhone", "Phone Number", "Número de Teléfono"),
    entry("formMessage", "Your Message", "Tu Mensaje"),
    entry("formSubmit", "Send Message", "Enviar Mensaje"),
    entry(
        "formSuccess",
        "Thank you for your message! We'll get back to you as soon as possible.",
        "¡Gracias por tu mensaje! Nos pondremos en contacto contigo lo antes posible.",
    ),
    // ==================== Footer ====================
    entry("footerAbout", "About Us", "Sobre Nosotros"),
    entry(
        "footerAboutText",
        concat!(
            "Providing exceptional service for over two decades. ",
            "Our mission is to help every client with the highest quality of service."
        ),
        concat!(
            "Brindando servicio excepcional por más de dos décadas. ",
            "Nuestra misión es ayudar a cada cliente con la más alta calidad de servicio."
        ),
    ),
    entry("footerQuickLinks", "Quick Links", "Enlaces Rápidos"),
    entry("footerLinkIntro", "About Us", "Sobre Nosotros"),
    entry("footerLinkServices", "Our Services", "Nuestros Servicios"),
    entry("footerLinkReviews", "Client Reviews", "Opiniones de Clientes"),
    entry("footerLinkContact", "Contact Us", "Contáctanos"),
    entry("footerContact", "Contact", "Contacto"),
    entry("footerNewsletter", "Stay Updated", "Mantente Actualizado"),
    entry(
        "footerNewsletterText",
        "Subscribe to our newsletter for tips and updates.",
        "Suscríbete a nuestro boletín para consejos y actualizaciones.",
    ),
    entry("footerEmailPlaceholder", "Your Email", "Tu Correo Electrónico"),
    entry("footerSubscribe", "Join", "Unirse"),
    entry(
        "footerCopyright",
        "© 2023 Professional Practice. All rights reserved.",
        "© 2023 Consultorio Profesional. Todos los derechos reservados.",
    ),
    entry("footerPoweredBy", "Powered by", "Desarrollado por"),
    // ==================== Chatbot ====================
    entry("chatbotTitle", "Chat with Us", "Chatea con nosotros"),
    entry(
        "chatbotWelcome",
        "Welcome! How can I help you today?",
        "¡Bienvenido! ¿Cómo puedo ayudarte hoy?",
    ),
    entry(
        "chatbotInputPlaceholder",
        "Type your question...",
        "Escribe tu pregunta...",
    ),
    entry(
        "chatbotDefaultReply",
        "Thank you for your message. One of our staff members will respond shortly.",
        "Gracias por su mensaje. Uno de nuestros miembros del personal responderá en breve.",
    ),
    // ==================== Navigation ====================
    entry("nav.intro", "Intro", "Introducción"),
    entry("nav.services", "Services", "Servicios"),
    entry("nav.reviews", "Reviews", "Reseñas"),
    entry("nav.photos", "Photos", "Fotos"),
    entry("nav.awards", "Awards", "Premios"),
    entry("nav.contact", "Contact", "Contacto"),
];

static TABLE: OnceLock<HashMap<&'static str, &'static TranslationEntry>> = OnceLock::new();

/// Look up a built-in UI string.
pub fn default_translation(language: Language, key: &str) -> Option<&'static str> {
    let table = TABLE.get_or_init(|| {
        DEFAULT_TRANSLATIONS
            .iter()
            .map(|entry| (entry.key, entry))
            .collect()
    });

    table.get(key).map(|entry| entry.get(language))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let mut seen = HashSet::new();
        for entry in DEFAULT_TRANSLATIONS {
            assert!(seen.insert(entry.key), "duplicate key {}", entry.key);
        }
    }

    #[test]
    fn test_every_entry_is_bilingual() {
        for entry in DEFAULT_TRANSLATIONS {
            assert!(!entry.en.is_empty(), "{} has no English text", entry.key);
            assert!(!entry.es.is_empty(), "{} has no Spanish text", entry.key);
        }
    }

    #[test]
    fn test_default_translation_lookup() {
        assert_eq!(
            default_translation(Language::English, "servicesTitle"),
            Some("Our Services")
        );
        assert_eq!(
            default_translation(Language::Spanish, "servicesTitle"),
            Some("Nuestros Servicios")
        );
    }

    #[test]
    fn test_dotted_nav_keys() {
        assert_eq!(default_translation(Language::Spanish, "nav.reviews"), Some("Reseñas"));
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(default_translation(Language::English, "noSuchKey"), None);
    }
}
