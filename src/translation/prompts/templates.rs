/*!
 * Prompt templates for chat-model translation.
 *
 * The Urdu templates carry banking vocabulary and identifier formats.
 * Every template asks for the bare translation with nothing around it.
 */

use crate::language_utils::{DEFAULT_LANGUAGE, URDU};

/// Which template a language pair uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationDirection {
    /// Roman or Arabic-script Urdu into English
    UrduToEnglish,
    /// English into Arabic-script Urdu
    EnglishToUrdu,
    /// Any other pair
    Generic,
}

impl TranslationDirection {
    /// Pick the direction for a source/target pair
    pub fn for_pair(source_language: &str, target_language: &str) -> Self {
        match (source_language, target_language) {
            (URDU, DEFAULT_LANGUAGE) => Self::UrduToEnglish,
            (DEFAULT_LANGUAGE, URDU) => Self::EnglishToUrdu,
            _ => Self::Generic,
        }
    }
}

/// Translation prompt template.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// Roman Urdu to English, with a glossary of common phrases.
    pub const URDU_TO_ENGLISH: &'static str = r#"You are an expert Roman Urdu to English translator. Translate this text accurately while preserving all numbers, names, and banking terms.

Text to translate: "{text}"

Translation Rules:
1. Keep ALL numbers EXACTLY as they are (8 stays 8, never change to 3 or any other number)
2. Keep banking terms in English: transactions, balance, account, transfer, etc.
3. Keep proper nouns and names unchanged
4. Preserve CNIC format: 12345-1234567-1 stays exactly the same
5. Common Roman Urdu translations:
- "mera/meri" = "my"
- "pichli/pichle/akhri" = "last/previous"
- "batao/dikhao" = "tell me/show me"
- "kya hai" = "what is"
- "kitna" = "how much"
- "karo" = "do"
- "check" = "check" (keep as is)

Examples:
- "meri pichli 8 transactions batao" → "tell me my last 8 transactions"
- "balance check karo" → "check my balance"
- "account me kitna paisa hai" → "how much money is in my account"
- "42501-5440926-9" → "42501-5440926-9"

Return ONLY the English translation, nothing else."#;

    /// English to Arabic-script Urdu, keeping common English loanwords.
    pub const ENGLISH_TO_URDU: &'static str = r#"You are an expert English to Urdu translator. Translate this COMPLETE English text to natural Urdu while preserving all numbers and technical terms. TRANSLATE THE ENTIRE TEXT - DO NOT TRUNCATE.

Text to translate: "{text}"

Translation Rules:
1. Keep ALL numbers EXACTLY as they are
2. Keep banking terms in English when commonly used: balance, account, transaction, grocery store, Amazon, Uber, etc.
3. Use natural Urdu grammar and vocabulary
4. Preserve proper nouns and CNIC formats
5. Use Arabic script for Urdu
6. TRANSLATE THE COMPLETE TEXT - translate every single sentence and detail

Examples:
- "tell me my last 8 transactions" → "میری آخری 8 transactions بتائیں"
- "check my balance" → "میرا balance check کریں"
- "On June 29, you spent $77.23" → "جون 29 کو، آپ نے $77.23 خرچ کیا"

IMPORTANT: Translate the ENTIRE text completely. Do not stop in the middle. Include all transactions, all details, all sentences.

Return ONLY the complete Urdu translation, nothing else."#;

    /// Any other language pair.
    pub const GENERIC: &'static str = r#"Translate this COMPLETE text from {source_language} to {target_language}. Keep all numbers, names, and technical terms exactly as they are. TRANSLATE THE ENTIRE TEXT.

Text: "{text}"

Return only the complete translation."#;

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Create the template for a direction.
    pub fn for_direction(direction: TranslationDirection) -> Self {
        match direction {
            TranslationDirection::UrduToEnglish => Self::new(Self::URDU_TO_ENGLISH),
            TranslationDirection::EnglishToUrdu => Self::new(Self::ENGLISH_TO_URDU),
            TranslationDirection::Generic => Self::new(Self::GENERIC),
        }
    }

    /// Create the template for a source/target pair.
    pub fn for_pair(source_language: &str, target_language: &str) -> Self {
        Self::for_direction(TranslationDirection::for_pair(source_language, target_language))
    }

    /// Render the template with the given variables.
    ///
    /// The text is substituted last so placeholders inside user text are
    /// left alone.
    pub fn render(&self, text: &str, source_language: &str, target_language: &str) -> String {
        self.template
            .replace("{source_language}", source_language)
            .replace("{target_language}", target_language)
            .replace("{text}", text)
    }
}
