//! Three-digit group renderer.

use crate::types::Language;

use super::lexicon::lexicon;

/// Renders the lowest three digits of `n` (0-999) without any scale word.
///
/// ```text
///   n = 215 ──► hundreds 2 ──► ones[2] + hundred     "two hundred"
///               remainder 15 ─┬─ teens table?  yes ─► teens[5]
///                             └─ no ─► tens[1], ones[5]
/// ```
///
/// The hundreds digit is always spelled as the ones word followed by the
/// language's hundred word. A zero group yields an empty string.
///
/// ## Example
/// ```rust
/// use hesab_core::words::spell_group;
/// use hesab_core::Language;
///
/// assert_eq!(spell_group(342, Language::En), "three hundred forty two");
/// assert_eq!(spell_group(15, Language::Ru), "пятнадцать");
/// assert_eq!(spell_group(0, Language::Az), "");
/// ```
pub fn spell_group(n: u16, language: Language) -> String {
    let lex = lexicon(language);
    let n = usize::from(n % 1000);
    let mut words: Vec<&str> = Vec::with_capacity(4);

    let hundreds = n / 100;
    if hundreds > 0 {
        words.push(lex.ones[hundreds]);
        words.push(lex.hundred);
    }

    let remainder = n % 100;
    match lex.teens {
        Some(teens) if (10..20).contains(&remainder) => words.push(teens[remainder - 10]),
        _ => {
            let tens = remainder / 10;
            let ones = remainder % 10;
            if tens > 0 {
                words.push(lex.tens[tens]);
            }
            if ones > 0 {
                words.push(lex.ones[ones]);
            }
        }
    }

    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_group_is_empty() {
        for language in Language::ALL {
            assert_eq!(spell_group(0, language), "");
        }
    }

    #[test]
    fn test_hundreds_only() {
        assert_eq!(spell_group(100, Language::Az), "bir yüz");
        assert_eq!(spell_group(300, Language::Ru), "три сто");
        assert_eq!(spell_group(900, Language::En), "nine hundred");
    }

    #[test]
    fn test_teens_use_table_where_present() {
        assert_eq!(spell_group(15, Language::Ru), "пятнадцать");
        assert_eq!(spell_group(10, Language::Ru), "десять");
        assert_eq!(spell_group(19, Language::Az), "on doqquz");
        assert_eq!(spell_group(11, Language::Az), "on bir");
    }

    #[test]
    fn test_english_teens_are_composed() {
        assert_eq!(spell_group(10, Language::En), "ten");
        assert_eq!(spell_group(15, Language::En), "ten five");
    }

    #[test]
    fn test_tens_and_ones() {
        assert_eq!(spell_group(21, Language::En), "twenty one");
        assert_eq!(spell_group(40, Language::Az), "qırx");
        assert_eq!(spell_group(7, Language::Ru), "семь");
        assert_eq!(spell_group(99, Language::Ru), "девяносто девять");
    }

    #[test]
    fn test_full_group() {
        assert_eq!(spell_group(215, Language::Az), "iki yüz on beş");
        assert_eq!(spell_group(999, Language::En), "nine hundred ninety nine");
        assert_eq!(spell_group(105, Language::Ru), "один сто пять");
    }

    #[test]
    fn test_no_stray_whitespace() {
        for language in Language::ALL {
            for n in 0..1000u16 {
                let words = spell_group(n, language);
                assert_eq!(words.trim(), words);
                assert!(!words.contains("  "), "double space in {:?}", words);
            }
        }
    }

    #[test]
    fn test_only_lowest_three_digits_are_read() {
        assert_eq!(spell_group(1021, Language::En), spell_group(21, Language::En));
    }
}
