//! Subjects and HTML bodies of the notification emails.

use html_escape::encode_double_quoted_attribute as escape_html;
use shared::{domain::Decision, protocol::DecisionPayload};

pub const OWNER_CONFIRMED_SUBJECT: &str = "💕 Ela confirmou! O encontro está marcado!";
pub const OWNER_DECLINED_SUBJECT: &str = "💔 Ela declinou o convite";
pub const INVITEE_SUBJECT: &str = "💕 Nosso Encontro Especial - Confirmado!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

pub fn owner_email(payload: &DecisionPayload) -> RenderedEmail {
    let who = escape_html(&payload.user_email);
    match payload.decision {
        Decision::Confirmed => RenderedEmail {
            subject: OWNER_CONFIRMED_SUBJECT.into(),
            html: wrap(&format!(
                r#"<h1 style="color: #8b2252; text-align: center;">💕 Boa notícia!</h1>
<p style="font-size: 18px; text-align: center;"><strong>{who}</strong> confirmou presença para o encontro!</p>
{details}
<p style="text-align: center; color: #666;">Aproveitem cada momento juntos! ❤️</p>"#,
                details = details_block("Detalhes do Encontro", payload, false),
            )),
        },
        Decision::Declined => RenderedEmail {
            subject: OWNER_DECLINED_SUBJECT.into(),
            html: wrap(&format!(
                r#"<h1 style="color: #666; text-align: center;">💔 Notificação</h1>
<p style="font-size: 18px; text-align: center;"><strong>{who}</strong> declinou o convite para o encontro.</p>
<p style="text-align: center; color: #666;">Talvez seja apenas um momento... o amor sempre encontra um caminho.</p>"#
            )),
        },
    }
}

pub fn invitee_email(payload: &DecisionPayload) -> RenderedEmail {
    RenderedEmail {
        subject: INVITEE_SUBJECT.into(),
        html: wrap(&format!(
            r#"<h1 style="color: #8b2252; text-align: center;">💕 Encontro Confirmado!</h1>
<p style="font-size: 18px; text-align: center;">Mal posso esperar para te ver!</p>
{details}
<p style="text-align: center; color: #8b2252; font-size: 20px;">Te amo! ❤️</p>"#,
            details = details_block("Detalhes do Nosso Encontro", payload, true),
        )),
    }
}

fn details_block(title: &str, payload: &DecisionPayload, with_icons: bool) -> String {
    let icon = |s: &'static str| if with_icons { s } else { "" };
    format!(
        r#"<div style="background: #fdf2f4; padding: 20px; border-radius: 10px;">
<h2 style="color: #8b2252; margin-top: 0;">{title}</h2>
<p><strong>{}Local:</strong> {}</p>
<p><strong>{}Endereço:</strong> {}, {}</p>
<p><strong>{}Data:</strong> {}</p>
<p><strong>{}Horário:</strong> {}</p>
</div>"#,
        icon("📍 "),
        escape_html(&payload.venue.name),
        icon("🏠 "),
        escape_html(&payload.venue.address),
        escape_html(&payload.venue.city),
        icon("📅 "),
        escape_html(&payload.date),
        icon("🕐 "),
        escape_html(&payload.time),
    )
}

fn wrap(inner: &str) -> String {
    format!(
        r#"<div style="font-family: Georgia, serif; max-width: 600px; margin: 0 auto; padding: 20px;">
{inner}
</div>"#
    )
}

#[cfg(test)]
#[path = "tests/templates_tests.rs"]
mod tests;
