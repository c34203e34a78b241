//! Per-language word tables.
//!
//! ```text
//! ┌──────────┬──────────────────────┬──────────────────────┬──────────────────────┐
//! │          │ az                   │ ru                   │ en                   │
//! ├──────────┼──────────────────────┼──────────────────────┼──────────────────────┤
//! │ ones[3]  │ üç                   │ три                  │ three                │
//! │ teens[5] │ on beş               │ пятнадцать           │ (none: ten five)     │
//! │ tens[4]  │ qırx                 │ сорок                │ forty                │
//! │ hundred  │ yüz                  │ сто                  │ hundred              │
//! │ scale[2] │ milyon               │ миллион              │ million              │
//! └──────────┴──────────────────────┴──────────────────────┴──────────────────────┘
//! ```
//!
//! Index 0 of `ones` and `tens` is the empty string: it marks a digit that
//! produces no word, it is never read as "zero".

use crate::types::{CurrencyCode, Language};

/// Word tables for one language.
#[derive(Debug)]
pub struct Lexicon {
    /// Standalone word for an amount of exactly zero.
    pub zero: &'static str,
    /// Digit words, index 0 unused.
    pub ones: [&'static str; 10],
    /// Irregular words for 10-19. `None` means teens are composed from
    /// `tens[1]` and `ones`.
    pub teens: Option<[&'static str; 10]>,
    /// Multiples of ten, index 0 unused.
    pub tens: [&'static str; 10],
    /// Word placed after the hundreds digit.
    pub hundred: &'static str,
    /// Scale word per base-1000 tier: unit, thousand, million, billion, trillion.
    pub scales: [&'static str; 5],
    /// Name of the hundredths subunit.
    pub minor_unit: &'static str,
}

static AZ: Lexicon = Lexicon {
    zero: "sıfır",
    ones: ["", "bir", "iki", "üç", "dörd", "beş", "altı", "yeddi", "səkkiz", "doqquz"],
    teens: Some([
        "on",
        "on bir",
        "on iki",
        "on üç",
        "on dörd",
        "on beş",
        "on altı",
        "on yeddi",
        "on səkkiz",
        "on doqquz",
    ]),
    tens: ["", "on", "iyirmi", "otuz", "qırx", "əlli", "altmış", "yetmiş", "səksən", "doxsan"],
    hundred: "yüz",
    scales: ["", "min", "milyon", "milyard", "trilyon"],
    minor_unit: "qəpik",
};

static RU: Lexicon = Lexicon {
    zero: "ноль",
    ones: ["", "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять"],
    teens: Some([
        "десять",
        "одиннадцать",
        "двенадцать",
        "тринадцать",
        "четырнадцать",
        "пятнадцать",
        "шестнадцать",
        "семнадцать",
        "восемнадцать",
        "девятнадцать",
    ]),
    tens: [
        "",
        "десять",
        "двадцать",
        "тридцать",
        "сорок",
        "пятьдесят",
        "шестьдесят",
        "семьдесят",
        "восемьдесят",
        "девяносто",
    ],
    hundred: "сто",
    scales: ["", "тысяча", "миллион", "миллиард", "триллион"],
    minor_unit: "копеек",
};

static EN: Lexicon = Lexicon {
    zero: "zero",
    ones: ["", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine"],
    teens: None,
    tens: ["", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety"],
    hundred: "hundred",
    scales: ["", "thousand", "million", "billion", "trillion"],
    minor_unit: "cents",
};

/// Returns the word tables for `language`.
pub fn lexicon(language: Language) -> &'static Lexicon {
    match language {
        Language::Az => &AZ,
        Language::Ru => &RU,
        Language::En => &EN,
    }
}

/// Name of the major unit of `currency` in `language`.
pub fn major_unit(currency: CurrencyCode, language: Language) -> &'static str {
    match (currency, language) {
        (CurrencyCode::Azn, Language::Az) => "manat",
        (CurrencyCode::Azn, Language::Ru) => "манат",
        (CurrencyCode::Azn, Language::En) => "manat",
        (CurrencyCode::Usd, Language::Az) => "dollar",
        (CurrencyCode::Usd, Language::Ru) => "долларов",
        (CurrencyCode::Usd, Language::En) => "dollars",
        (CurrencyCode::Eur, Language::Az) => "avro",
        (CurrencyCode::Eur, Language::Ru) => "евро",
        (CurrencyCode::Eur, Language::En) => "euros",
        (CurrencyCode::Rub, Language::Az) => "rubl",
        (CurrencyCode::Rub, Language::Ru) => "рублей",
        (CurrencyCode::Rub, Language::En) => "rubles",
    }
}
