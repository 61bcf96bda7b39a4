use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_WORD: Regex = Regex::new(r"\b\w+\b").unwrap();
    static ref RE_SENTENCE_PUNCT: Regex = Regex::new(r#"[.,!?;:'"()\[\]{}]"#).unwrap();
}

/// Replace transliteration diacritics with their plain latin letter.
/// "Qur'ān" and scholarly romanizations use macrons and underdots which
/// would otherwise defeat the alias lookups.
pub fn latinize(text: &str) -> String {
    let accents = ["ā", "ī", "ū", "ḥ", "ṣ", "ḍ", "ṭ", "ẓ", "ʿ", "ʾ"];
    let latin = ["a", "i", "u", "h", "s", "d", "t", "z", "", ""];
    let mut s = text.to_lowercase();
    for (a, l) in accents.iter().zip(latin.iter()) {
        s = s.replace(a, l);
    }
    s
}

/// Fold typographic apostrophe variants to the plain ASCII apostrophe.
pub fn normalize_apostrophes(text: &str) -> String {
    text.replace(['’', 'ʻ', 'ʼ', '`'], "'")
}

/// Approximate token count for a text: word count plus a share for
/// punctuation. Callers with a real tokenizer should supply their own
/// counts; this is only a fallback for previews.
pub fn count_tokens(text: &str) -> i64 {
    if text.trim().is_empty() {
        return 0;
    }

    let words = RE_WORD.find_iter(text).count() as i64;
    let punctuation = RE_SENTENCE_PUNCT.find_iter(text).count() as i64;

    words + punctuation / 2
}
