use super::rewrite_types::RewriteType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPrompt {
    pub prompt: String,
    pub system_instruction: String,
}

pub struct RewritePrompt;

impl RewritePrompt {
    pub fn build(
        rewrite_type: RewriteType,
        language: &str,
        tone: &str,
        text: &str,
        comment: Option<&str>,
    ) -> BuiltPrompt {
        BuiltPrompt {
            prompt: Self::get_prompt(rewrite_type, language, tone, text, comment),
            system_instruction: Self::get_system_instruction(rewrite_type).to_string(),
        }
    }

    pub fn get_system_instruction(rewrite_type: RewriteType) -> &'static str {
        match rewrite_type {
            RewriteType::Message => {
                "You are a writing assistant that rewrites messages. Respond with exactly one rewritten version of the message. Do not add explanations, alternatives, notes, or surrounding quotation marks."
            }
            RewriteType::Email => {
                "You are an email writing assistant. Respond with exactly one complete email that starts with a subject line. Do not add explanations, alternatives, or notes."
            }
            RewriteType::Comment => {
                "You are an assistant that writes replies to comments. Respond with exactly one reply. Do not add explanations, alternatives, or notes."
            }
            RewriteType::Prompt => {
                "You are a prompt engineering assistant. Respond with exactly one improved prompt. Do not answer the prompt and do not add explanations, alternatives, or notes."
            }
        }
    }

    pub fn get_prompt(
        rewrite_type: RewriteType,
        language: &str,
        tone: &str,
        text: &str,
        comment: Option<&str>,
    ) -> String {
        match rewrite_type {
            RewriteType::Email => format!(
                r#"Write a professional email in {language} with a {tone} tone. Include a clear subject line.

Important: The ENTIRE email (including subject, greetings, and closing) MUST be in {language}. Keep it natural and culturally appropriate. Write exactly one version of the email.

Content to convert:
{text}"#
            ),
            RewriteType::Comment => {
                let comment = comment.unwrap_or_default();
                format!(
                    r#"Write a brief {tone} reply in {language} to the comment below. Be concise and maintain context. Write exactly one reply.

Comment: {comment}
Your message: {text}"#
                )
            }
            RewriteType::Prompt => format!(
                r#"Rewrite the following AI prompt in {language} with a {tone} tone so that it is clear, specific, and well-structured. Keep the original intent and do not answer the prompt. Write exactly one improved version.

Prompt:
{text}"#
            ),
            RewriteType::Message => format!(
                r#"Improve this message in {language} with a {tone} tone. Be concise and clear, keep the original meaning, and write exactly one rewritten version.

Message:
{text}"#
            ),
        }
    }
}
