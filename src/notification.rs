//! Client approval notification.
//!
//! When a client reviews a draft site they approve some sections and ask for
//! edits on others. This module composes the email that tells the agency.
//! Delivery belongs to whatever mail transport the host uses.

use chrono::{DateTime, Utc};
use html_escape::encode_text;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const NOTIFICATION_SENDER: &str = "noreply@websitiopro.com";

const NEXT_STEPS: &str =
    "Review the client feedback and make any necessary updates to the website template.";
const SIGNATURE: &str =
    "This notification was sent automatically by WebSitioPro Client Approval System";

/// A submitted client approval form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientApproval {
    pub notification_email: String,
    pub client_name: String,
    pub client_email: String,
    pub business_name: String,
    pub template_type: String,
    #[serde(default)]
    pub approved_sections: Vec<String>,
    #[serde(default)]
    pub pending_edits: Vec<String>,
    #[serde(default)]
    pub general_instructions: Option<String>,
    pub submission_date: DateTime<Utc>,
}

/// A composed email, ready for any transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

impl ClientApproval {
    /// Instructions worth showing. Blank text and the form's "None"
    /// placeholder count as no instructions.
    fn instructions(&self) -> Option<&str> {
        self.general_instructions
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty() && *text != "None")
    }

    fn submitted_at(&self) -> String {
        self.submission_date.format("%Y-%m-%d %H:%M UTC").to_string()
    }

    /// Compose the agency notification for this submission.
    pub fn to_email(&self) -> EmailMessage {
        debug!(
            business = %self.business_name,
            approved = self.approved_sections.len(),
            pending = self.pending_edits.len(),
            "Composing client approval notification"
        );

        EmailMessage {
            to: self.notification_email.clone(),
            from: NOTIFICATION_SENDER.to_string(),
            subject: format!("Client Approval Form Submitted - {}", self.business_name),
            html: self.html_body(),
            text: self.text_body(),
        }
    }

    fn html_body(&self) -> String {
        let mut html = String::from(
            "<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;\">\n\
             <h2 style=\"color: #C8102E;\">Client Approval Form Submission</h2>\n",
        );

        html.push_str(&format!(
            "<div class=\"business\">\n<h3>Business Information</h3>\n\
             <p><strong>Business Name:</strong> {}</p>\n\
             <p><strong>Template Type:</strong> {}</p>\n\
             <p><strong>Submission Date:</strong> {}</p>\n</div>\n",
            encode_text(&self.business_name),
            encode_text(&capitalize(&self.template_type)),
            self.submitted_at()
        ));

        html.push_str(&format!(
            "<div class=\"client\">\n<h3>Client Information</h3>\n\
             <p><strong>Name:</strong> {}</p>\n\
             <p><strong>Email:</strong> {}</p>\n</div>\n",
            encode_text(&self.client_name),
            encode_text(&self.client_email)
        ));

        if !self.approved_sections.is_empty() {
            html.push_str("<div class=\"approved\">\n<h3>✅ Approved Sections</h3>\n");
            html.push_str(&html_list(&self.approved_sections));
            html.push_str("</div>\n");
        }

        if !self.pending_edits.is_empty() {
            html.push_str("<div class=\"pending\">\n<h3>⏳ Sections Needing Edits</h3>\n");
            html.push_str(&html_list(&self.pending_edits));
            html.push_str("</div>\n");
        }

        if let Some(instructions) = self.instructions() {
            html.push_str(&format!(
                "<div class=\"instructions\">\n<h3>📝 General Instructions</h3>\n\
                 <p style=\"font-style: italic;\">\"{}\"</p>\n</div>\n",
                encode_text(instructions)
            ));
        }

        html.push_str(&format!(
            "<div class=\"next-steps\">\n<h3>Next Steps</h3>\n<p>{}</p>\n</div>\n\
             <p style=\"color: #666; font-size: 12px;\">{}</p>\n</div>\n",
            NEXT_STEPS, SIGNATURE
        ));

        html
    }

    fn text_body(&self) -> String {
        let mut text = format!(
            "Client Approval Form Submission\n\n\
             Business Information:\n\
             - Business Name: {}\n\
             - Template Type: {}\n\
             - Submission Date: {}\n\n\
             Client Information:\n\
             - Name: {}\n\
             - Email: {}\n",
            self.business_name,
            capitalize(&self.template_type),
            self.submitted_at(),
            self.client_name,
            self.client_email
        );

        if !self.approved_sections.is_empty() {
            text.push_str("\nApproved Sections:\n");
            text.push_str(&text_list(&self.approved_sections));
        }

        if !self.pending_edits.is_empty() {
            text.push_str("\nSections Needing Edits:\n");
            text.push_str(&text_list(&self.pending_edits));
        }

        if let Some(instructions) = self.instructions() {
            text.push_str(&format!("\nGeneral Instructions:\n\"{}\"\n", instructions));
        }

        text.push_str(&format!("\nNext Steps:\n{}\n\n---\n{}\n", NEXT_STEPS, SIGNATURE));
        text
    }
}

fn html_list(sections: &[String]) -> String {
    let items: String = sections
        .iter()
        .map(|section| format!("<li>{}</li>", encode_text(&capitalize(section))))
        .collect();
    format!("<ul>{}</ul>\n", items)
}

fn text_list(sections: &[String]) -> String {
    sections
        .iter()
        .map(|section| format!("- {}\n", capitalize(section)))
        .collect()
}

/// Uppercase the first character, leave the rest untouched.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
