//! Whole-number decomposition into base-1000 groups.

use tracing::trace;

use crate::types::Language;

use super::group::spell_group;
use super::lexicon::lexicon;

/// Renders a whole number, most significant group first.
///
/// ## Algorithm
/// ```text
///   n = 2_005_040
///
///   tier 0:  n % 1000 = 40   ──► "forty"
///   tier 1:  n % 1000 = 5    ──► "five thousand"
///   tier 2:  n % 1000 = 2    ──► "two million"
///
///   result:  "two million five thousand forty"
/// ```
///
/// Zero groups contribute neither words nor a scale word. Tiers above
/// trillion (n ≥ 10^15) have no scale word; their group is emitted bare.
/// This never panics, but such phrases are ambiguous, which is why
/// [`super::words_for`] refuses amounts in that range.
pub fn spell_whole(n: u64, language: Language) -> String {
    let lex = lexicon(language);
    let mut groups: Vec<String> = Vec::new();
    let mut rest = n;
    let mut tier = 0usize;

    while rest > 0 {
        let group = (rest % 1000) as u16;
        if group != 0 {
            let mut phrase = spell_group(group, language);
            if tier > 0 {
                match lex.scales.get(tier) {
                    Some(scale) => {
                        phrase.push(' ');
                        phrase.push_str(scale);
                    }
                    None => trace!(tier, n, "no scale word for tier"),
                }
            }
            groups.push(phrase);
        }
        rest /= 1000;
        tier += 1;
    }

    groups.reverse();
    groups.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_scale_word(token: &str, language: Language) -> bool {
        lexicon(language).scales[1..].iter().any(|scale| *scale == token)
    }

    #[test]
    fn test_zero_is_empty() {
        assert_eq!(spell_whole(0, Language::En), "");
    }

    #[test]
    fn test_scale_words() {
        assert_eq!(spell_whole(1_000, Language::En), "one thousand");
        assert_eq!(spell_whole(1_000_000, Language::Az), "bir milyon");
        assert_eq!(spell_whole(3_000_000_000, Language::Ru), "три миллиард");
        assert_eq!(spell_whole(4_000_000_000_000, Language::En), "four trillion");
    }

    #[test]
    fn test_zero_groups_are_skipped() {
        assert_eq!(spell_whole(1_000_001, Language::En), "one million one");
        assert_eq!(
            spell_whole(2_005_040, Language::En),
            "two million five thousand forty"
        );
        assert_eq!(spell_whole(7_000_000_000_015, Language::Az), "yeddi trilyon on beş");
    }

    #[test]
    fn test_mixed_groups() {
        assert_eq!(
            spell_whole(123_456, Language::En),
            "one hundred twenty three thousand four hundred fifty six"
        );
        assert_eq!(
            spell_whole(2_512, Language::Ru),
            "два тысяча пять сто двенадцать"
        );
    }

    #[test]
    fn test_largest_named_tier() {
        assert_eq!(
            spell_whole(999_999_999_999_999, Language::En),
            "nine hundred ninety nine trillion \
             nine hundred ninety nine billion \
             nine hundred ninety nine million \
             nine hundred ninety nine thousand \
             nine hundred ninety nine"
        );
    }

    #[test]
    fn test_tier_past_trillion_has_no_scale_word() {
        assert_eq!(spell_whole(1_000_000_000_000_000, Language::En), "one");
        assert_eq!(
            spell_whole(2_000_000_000_000_003, Language::En),
            "two three"
        );
        // u64::MAX must not panic
        assert!(!spell_whole(u64::MAX, Language::Ru).is_empty());
    }

    #[test]
    fn test_scale_words_never_repeat_or_stand_alone() {
        for language in Language::ALL {
            let samples = (0..1_000_000u64)
                .step_by(37)
                .chain([999, 1_000, 1_001, 10_000, 100_000, 999_999]);

            for n in samples {
                let words = spell_whole(n, language);
                let tokens: Vec<&str> = words.split(' ').filter(|t| !t.is_empty()).collect();

                for pair in tokens.windows(2) {
                    assert!(
                        !(is_scale_word(pair[0], language) && is_scale_word(pair[1], language)),
                        "consecutive scale words in {:?} for {}",
                        words,
                        n
                    );
                }

                if let Some(first) = tokens.first() {
                    assert!(!is_scale_word(first, language), "{:?} starts with a scale word", words);
                }

                let has_scale = tokens.iter().any(|t| is_scale_word(t, language));
                assert_eq!(has_scale, n >= 1_000, "scale word mismatch for {}: {:?}", n, words);
            }
        }
    }
}
