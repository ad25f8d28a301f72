use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Languages for localized names in metadata responses.
///
/// Formats as the locale code sent in the `language` query parameter.
#[derive(Default, Debug, Deserialize, Serialize, Display, EnumString, EnumIter, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Language {
    #[strum(serialize = "ar_sa")]
    Arabic,
    #[strum(serialize = "bg_bg")]
    Bulgarian,
    #[strum(serialize = "zh_cn")]
    ChineseSimplified,
    #[strum(serialize = "zh_tw")]
    ChineseTraditional,
    #[strum(serialize = "cs_cz")]
    Czech,
    #[strum(serialize = "da_dk")]
    Danish,
    #[strum(serialize = "nl_nl")]
    Dutch,
    /// This is the default language.
    #[default]
    #[strum(serialize = "en_us")]
    English,
    #[strum(serialize = "fi_fi")]
    Finnish,
    #[strum(serialize = "fr_fr")]
    French,
    #[strum(serialize = "de_de")]
    German,
    #[strum(serialize = "el_gr")]
    Greek,
    #[strum(serialize = "hu_hu")]
    Hungarian,
    #[strum(serialize = "it_it")]
    Italian,
    #[strum(serialize = "ja_jp")]
    Japanese,
    #[strum(serialize = "ko_kr")]
    Korean,
    #[strum(serialize = "no_no")]
    Norwegian,
    #[strum(serialize = "pl_pl")]
    Polish,
    #[strum(serialize = "pt_pt")]
    Portuguese,
    #[strum(serialize = "pt_br")]
    PortugueseBrazil,
    #[strum(serialize = "ro_ro")]
    Romanian,
    #[strum(serialize = "ru_ru")]
    Russian,
    #[strum(serialize = "es_es")]
    SpanishSpain,
    #[strum(serialize = "es_419")]
    SpanishLatinAmerica,
    #[strum(serialize = "sv_se")]
    Swedish,
    #[strum(serialize = "th_th")]
    Thai,
    #[strum(serialize = "tr_tr")]
    Turkish,
    #[strum(serialize = "uk_ua")]
    Ukrainian,
    #[strum(serialize = "vi_vn")]
    Vietnamese,
}
