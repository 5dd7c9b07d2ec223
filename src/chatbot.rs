use crate::render::RenderContext;
use tracing::debug;

/// Answer a visitor's chat message.
///
/// The first configured question whose text (in the context language)
/// appears anywhere in the message, ignoring case, supplies the answer.
/// Anything else gets the standard "we'll get back to you" reply. A blank
/// message gets no reply at all.
pub fn chatbot_reply(ctx: &RenderContext<'_>, input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    let input = input.to_lowercase();

    let matched = ctx.config().chatbot_questions.iter().find(|q| {
        let question = ctx.localize(q.question.as_ref()).trim();
        !question.is_empty() && input.contains(&question.to_lowercase())
    });

    match matched {
        Some(question) => {
            debug!(key = %question.key, "Chatbot question matched");
            ctx.localize(question.answer.as_ref()).to_string()
        }
        None => ctx.t("chatbotDefaultReply").to_string(),
    }
}
