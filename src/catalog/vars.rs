// src/catalog/vars.rs

use super::Variable;

/// Language spoken at home, collapsed categories (C16001).
pub(super) static LANGUAGE: &[Variable] = &[
    Variable::new("C16001_001E", "total speakers"),
    Variable::new("C16001_005E", "spanish speakers"),
    Variable::new("C16001_020E", "korean speakers"),
    Variable::new("C16001_026E", "vietnamese speakers"),
    Variable::new("C16001_035E", "arabic speakers"),
    Variable::new("C16001_023E", "chinese (incl. mandarin, cantonese) speakers"),
    Variable::new("C16001_008E", "french, haitian, or cajun speakers"),
    Variable::new("C16001_011E", "german or other west germanic languages speakers"),
    Variable::new("C16001_014E", "russian, polish, or other slavic languages speakers"),
    Variable::new("C16001_017E", "other indo-european languages speakers"),
    Variable::new("C16001_029E", "tagalog (incl. filipino) speakers"),
    Variable::new("C16001_032E", "other asian and pacific island languages speakers"),
    Variable::new("C16001_038E", "other and unspecified languages speakers"),
];

/// Language spoken at home, detailed categories (B16001).
pub(super) static DETAILED_LANGUAGE: &[Variable] = &[
    Variable::new("B16001_001E", "total speakers"),
    Variable::new("B16001_005E", "spanish speakers"),
    Variable::new("B16001_008E", "french (incl. cajun) speakers"),
    Variable::new("B16001_011E", "haitian speakers"),
    Variable::new("B16001_014E", "italian speakers"),
    Variable::new("B16001_017E", "portuguese speakers"),
    Variable::new("B16001_020E", "german speakers"),
    Variable::new("B16001_023E", "yiddish, pennsylvania dutch or other west germanic languages speakers"),
    Variable::new("B16001_026E", "greek speakers"),
    Variable::new("B16001_029E", "russian speakers"),
    Variable::new("B16001_032E", "polish speakers"),
    Variable::new("B16001_035E", "serbo-croatian speakers"),
    Variable::new("B16001_038E", "ukrainian or other slavic languages speakers"),
    Variable::new("B16001_041E", "armenian speakers"),
    Variable::new("B16001_044E", "persian (incl. farsi, dari) speakers"),
    Variable::new("B16001_047E", "gujarati speakers"),
    Variable::new("B16001_050E", "hindi speakers"),
    Variable::new("B16001_053E", "urdu speakers"),
    Variable::new("B16001_056E", "punjabi speakers"),
    Variable::new("B16001_059E", "bengali speakers"),
    Variable::new("B16001_062E", "nepali, marathi, or other indic languages speakers"),
    Variable::new("B16001_065E", "other indo-european languages speakers"),
    Variable::new("B16001_068E", "telugu speakers"),
    Variable::new("B16001_071E", "tamil speakers"),
    Variable::new("B16001_074E", "malayalam, kannada, or other dravidian languages speakers"),
    Variable::new("B16001_077E", "chinese (incl. mandarin, cantonese) speakers"),
    Variable::new("B16001_080E", "japanese speakers"),
    Variable::new("B16001_083E", "korean speakers"),
    Variable::new("B16001_086E", "hmong speakers"),
    Variable::new("B16001_089E", "vietnamese speakers"),
    Variable::new("B16001_092E", "khmer speakers"),
    Variable::new("B16001_095E", "thai, lao, or other tai-kadai languages speakers"),
    Variable::new("B16001_098E", "other languages of asia speakers"),
    Variable::new("B16001_101E", "tagalog (incl. filipino) speakers"),
    Variable::new("B16001_104E", "ilocano, samoan, hawaiian, or other austronesian languages speakers"),
    Variable::new("B16001_107E", "arabic speakers"),
    Variable::new("B16001_110E", "hebrew speakers"),
    Variable::new("B16001_113E", "amharic, somali, or other afro-asiatic languages speakers"),
    Variable::new("B16001_116E", "yoruba, twi, igbo, or other languages of western africa speakers"),
    Variable::new("B16001_119E", "swahili or other languages of central, eastern, and southern africa speakers"),
    Variable::new("B16001_122E", "navajo speakers"),
    Variable::new("B16001_125E", "other native languages of north america speakers"),
    Variable::new("B16001_128E", "other and unspecified languages speakers"),
];

/// Public assistance income or food stamps/SNAP (B19058).
pub(super) static PUBLIC_ASSISTANCE: &[Variable] = &[
    Variable::new("B19058_001E", "total public assistance population"),
    Variable::new("B19058_002E", "received public assistance"),
];

/// Ratio of income to poverty level, buckets below 1.85 (B17026).
pub(super) static POVERTY_LEVEL: &[Variable] = &[
    Variable::new("B17026_001E", "total poverty"),
    Variable::new("B17026_002E", "under 0.5"),
    Variable::new("B17026_003E", "0.5 to 0.74"),
    Variable::new("B17026_004E", "0.75 to 0.99"),
    Variable::new("B17026_005E", "1.00 to 1.24"),
    Variable::new("B17026_006E", "1.25 to 1.49"),
    Variable::new("B17026_007E", "1.50 to 1.74"),
    Variable::new("B17026_008E", "1.75 to 1.84"),
];

/// Total population (B01003).
pub(super) static TOTAL_POPULATION: &[Variable] = &[
    Variable::new("B01003_001E", "total population"),
];
