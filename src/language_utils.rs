use std::collections::BTreeMap;

use isolang::Language;
use once_cell::sync::Lazy;

/// Language utilities for the codes understood by the service
///
/// The supported table mirrors the languages accepted by the fallback
/// translation endpoint. Urdu is special: `ur` covers both Arabic-script
/// and Roman Urdu and is always accepted, even by code paths that only
/// look at the LLM answer.
/// Code every undetectable or unsupported input falls back to
pub const DEFAULT_LANGUAGE: &str = "en";

/// Code used for Urdu in both scripts
pub const URDU: &str = "ur";

/// Display name returned for `ur`
pub const URDU_DISPLAY_NAME: &str = "Urdu/Roman Urdu";

/// Codes and display names accepted by the fallback translation endpoint
const SUPPORTED_LANGUAGE_TABLE: &[(&str, &str)] = &[
    ("af", "afrikaans"),
    ("sq", "albanian"),
    ("am", "amharic"),
    ("ar", "arabic"),
    ("hy", "armenian"),
    ("az", "azerbaijani"),
    ("eu", "basque"),
    ("be", "belarusian"),
    ("bn", "bengali"),
    ("bs", "bosnian"),
    ("bg", "bulgarian"),
    ("ca", "catalan"),
    ("ceb", "cebuano"),
    ("ny", "chichewa"),
    ("zh-cn", "chinese (simplified)"),
    ("zh-tw", "chinese (traditional)"),
    ("co", "corsican"),
    ("hr", "croatian"),
    ("cs", "czech"),
    ("da", "danish"),
    ("nl", "dutch"),
    ("en", "english"),
    ("eo", "esperanto"),
    ("et", "estonian"),
    ("tl", "filipino"),
    ("fi", "finnish"),
    ("fr", "french"),
    ("fy", "frisian"),
    ("gl", "galician"),
    ("ka", "georgian"),
    ("de", "german"),
    ("el", "greek"),
    ("gu", "gujarati"),
    ("ht", "haitian creole"),
    ("ha", "hausa"),
    ("haw", "hawaiian"),
    ("iw", "hebrew"),
    ("he", "hebrew"),
    ("hi", "hindi"),
    ("hmn", "hmong"),
    ("hu", "hungarian"),
    ("is", "icelandic"),
    ("ig", "igbo"),
    ("id", "indonesian"),
    ("ga", "irish"),
    ("it", "italian"),
    ("ja", "japanese"),
    ("jw", "javanese"),
    ("kn", "kannada"),
    ("kk", "kazakh"),
    ("km", "khmer"),
    ("ko", "korean"),
    ("ku", "kurdish (kurmanji)"),
    ("ky", "kyrgyz"),
    ("lo", "lao"),
    ("la", "latin"),
    ("lv", "latvian"),
    ("lt", "lithuanian"),
    ("lb", "luxembourgish"),
    ("mk", "macedonian"),
    ("mg", "malagasy"),
    ("ms", "malay"),
    ("ml", "malayalam"),
    ("mt", "maltese"),
    ("mi", "maori"),
    ("mr", "marathi"),
    ("mn", "mongolian"),
    ("my", "myanmar (burmese)"),
    ("ne", "nepali"),
    ("no", "norwegian"),
    ("or", "odia"),
    ("ps", "pashto"),
    ("fa", "persian"),
    ("pl", "polish"),
    ("pt", "portuguese"),
    ("pa", "punjabi"),
    ("ro", "romanian"),
    ("ru", "russian"),
    ("sm", "samoan"),
    ("gd", "scots gaelic"),
    ("sr", "serbian"),
    ("st", "sesotho"),
    ("sn", "shona"),
    ("sd", "sindhi"),
    ("si", "sinhala"),
    ("sk", "slovak"),
    ("sl", "slovenian"),
    ("so", "somali"),
    ("es", "spanish"),
    ("su", "sundanese"),
    ("sw", "swahili"),
    ("sv", "swedish"),
    ("tg", "tajik"),
    ("ta", "tamil"),
    ("te", "telugu"),
    ("th", "thai"),
    ("tr", "turkish"),
    ("uk", "ukrainian"),
    ("ur", "urdu"),
    ("ug", "uyghur"),
    ("uz", "uzbek"),
    ("vi", "vietnamese"),
    ("cy", "welsh"),
    ("xh", "xhosa"),
    ("yi", "yiddish"),
    ("yo", "yoruba"),
    ("zu", "zulu"),
];

static SUPPORTED_LANGUAGES: Lazy<BTreeMap<&'static str, &'static str>> =
    Lazy::new(|| SUPPORTED_LANGUAGE_TABLE.iter().copied().collect());

/// All supported codes with their display names
pub fn supported_languages() -> &'static BTreeMap<&'static str, &'static str> {
    &SUPPORTED_LANGUAGES
}

/// Check if a code is in the supported table
pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LANGUAGES.contains_key(code)
}

/// Check if a code may be returned by a detector (supported table or `ur`)
pub fn is_valid_detection(code: &str) -> bool {
    code == URDU || is_supported(code)
}

/// Get the display name for a code
///
/// Unknown codes are title-cased as-is, so this never fails.
pub fn get_language_name(code: &str) -> String {
    if code == URDU {
        return URDU_DISPLAY_NAME.to_string();
    }

    match SUPPORTED_LANGUAGES.get(code) {
        Some(name) => name.to_string(),
        None => title_case(code),
    }
}

/// Convert an ISO 639-3 code into the code used by the supported table
pub fn from_iso639_3(code: &str) -> Option<String> {
    let normalized_code = code.trim().to_lowercase();

    // The translation endpoint predates a few ISO assignments
    match normalized_code.as_str() {
        "cmn" | "zho" => return Some("zh-cn".to_string()),
        "jav" => return Some("jw".to_string()),
        "pes" | "fas" => return Some("fa".to_string()),
        "nob" | "nno" | "nor" => return Some("no".to_string()),
        "ceb" | "haw" | "hmn" => return Some(normalized_code),
        _ => {}
    }

    Language::from_639_3(&normalized_code)
        .and_then(|lang| lang.to_639_1())
        .map(|code| code.to_string())
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = true;
        }
    }

    result
}
