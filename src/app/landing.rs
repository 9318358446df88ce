use crate::app::i18n::{Language, FOOTER};
use serde::Serialize;

pub const DEFAULT_CHAT_URL: &str = "https://cdn.botpress.cloud/webchat/v3.3/shareable.html?configUrl=https://files.bpcontent.cloud/2025/11/28/12/20251128123759-Z8MZR84U.json";

/// Entry screen: greeting, the chat action and the food action.
#[derive(Debug, Clone, Serialize)]
pub struct LandingPage {
    pub language: Language,
    pub welcome: &'static str,
    pub subtitle: &'static str,
    pub chat_label: &'static str,
    pub chat_url: String,
    pub order_label: &'static str,
    pub footer: &'static str,
}

impl LandingPage {
    pub fn new(language: Language, chat_url: &str) -> Self {
        let text = language.landing();
        Self {
            language,
            welcome: text.welcome,
            subtitle: text.subtitle,
            chat_label: text.talk,
            chat_url: chat_url.to_string(),
            order_label: text.order,
            footer: FOOTER,
        }
    }

    pub fn render(&self) -> String {
        format!(
            "{}\n{}\n\n  [1] {}\n      {}\n  [2] {}\n      ali food --lang {}\n\n{}",
            self.welcome,
            self.subtitle,
            self.chat_label,
            self.chat_url,
            self.order_label,
            self.language,
            self.footer
        )
    }
}
