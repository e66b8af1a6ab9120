/*!
 * Tests for language utility functions
 */

use bisplit::language_utils::{
    get_language_name, language_codes_match, normalize_to_part1_or_part2t, normalize_to_part2t,
};

/// Test normalization of language codes to ISO 639-2/T format
#[test]
fn test_normalizeToPart2t_withValidCodes_shouldNormalizeCorrectly() {
    assert_eq!(normalize_to_part2t("en").unwrap(), "eng");
    assert_eq!(normalize_to_part2t("fr").unwrap(), "fra");
    assert_eq!(normalize_to_part2t("zh").unwrap(), "zho");
    assert_eq!(normalize_to_part2t("eng").unwrap(), "eng");
    assert_eq!(normalize_to_part2t("fra").unwrap(), "fra");

    // ISO 639-2/B codes map to their /T equivalents
    assert_eq!(normalize_to_part2t("fre").unwrap(), "fra");
    assert_eq!(normalize_to_part2t("ger").unwrap(), "deu");
    assert_eq!(normalize_to_part2t("chi").unwrap(), "zho");

    // Case insensitivity and whitespace
    assert_eq!(normalize_to_part2t("EN").unwrap(), "eng");
    assert_eq!(normalize_to_part2t("FRE").unwrap(), "fra");
    assert_eq!(normalize_to_part2t(" en ").unwrap(), "eng");
}

/// Test that invalid codes fail normalization
#[test]
fn test_normalizeToPart2t_withInvalidCodes_shouldFail() {
    assert!(normalize_to_part2t("xyz").is_err());
    assert!(normalize_to_part2t("123").is_err());
    assert!(normalize_to_part2t("e").is_err());
    assert!(normalize_to_part2t("").is_err());
}

/// Test normalization to the short form used for output file naming
#[test]
fn test_normalizeToPart1OrPart2t_withValidCodes_shouldPreferPart1() {
    assert_eq!(normalize_to_part1_or_part2t("eng").unwrap(), "en");
    assert_eq!(normalize_to_part1_or_part2t("zho").unwrap(), "zh");
    assert_eq!(normalize_to_part1_or_part2t("en").unwrap(), "en");
    assert_eq!(normalize_to_part1_or_part2t("fre").unwrap(), "fr");
}

/// Test matching of different language code formats
#[test]
fn test_languageCodesMatch_withMatchingCodes_shouldReturnTrue() {
    assert!(language_codes_match("en", "eng"));
    assert!(language_codes_match("eng", "en"));
    assert!(language_codes_match("zh", "zho"));
    assert!(language_codes_match("zh", "chi"));
    assert!(language_codes_match("fra", "fre"));

    // Case insensitivity and whitespace
    assert!(language_codes_match("EN", "eng"));
    assert!(language_codes_match(" en ", "eng"));

    // Non-matches
    assert!(!language_codes_match("en", "fra"));
    assert!(!language_codes_match("eng", "fre"));
    assert!(!language_codes_match("en", "xyz"));
}

/// Test retrieval of language names from codes
#[test]
fn test_getLanguageName_withValidCodes_shouldReturnCorrectName() {
    assert_eq!(get_language_name("en").unwrap(), "English");
    assert_eq!(get_language_name("eng").unwrap(), "English");
    assert_eq!(get_language_name("fr").unwrap(), "French");
    assert_eq!(get_language_name("zh").unwrap(), "Chinese");

    assert!(get_language_name("xyz").is_err());
}
