// crates/wallet-pass-core/src/tests/labels.rs
// ============================================================================
// Module: Label Catalog Unit Tests
// Description: Unit tests for locale parsing and label catalogs.
// ============================================================================

//! ## Overview
//! Ensures every label resolves to non-empty text in every locale and that
//! locale tags parse leniently.

use std::collections::BTreeSet;

use crate::core::labels::Label;
use crate::core::labels::PassLocale;

#[test]
fn every_label_has_text_in_every_locale() {
    for locale in PassLocale::ALL {
        let texts: BTreeSet<&str> = Label::ALL.iter().map(|label| locale.label(*label)).collect();
        assert!(texts.iter().all(|text| !text.trim().is_empty()), "blank label in {locale}");
    }
}

#[test]
fn spanish_is_default() {
    assert_eq!(PassLocale::default(), PassLocale::Es);
    assert_eq!(PassLocale::Es.label(Label::PersonalCard), "Tarjeta Personal");
    assert_eq!(PassLocale::En.label(Label::PersonalCard), "Personal Card");
}

#[test]
fn locale_tags_parse_case_insensitively() {
    assert_eq!(PassLocale::parse("es_PE"), Some(PassLocale::Es));
    assert_eq!(PassLocale::parse("EN-us"), Some(PassLocale::En));
    assert_eq!(PassLocale::parse(" en "), Some(PassLocale::En));
    assert_eq!(PassLocale::parse("fr"), None);
    assert_eq!(PassLocale::parse(""), None);
}

#[test]
fn description_templates_carry_name_placeholder() {
    for locale in PassLocale::ALL {
        assert!(locale.business_card_description_template().contains("{name}"));
    }
}

#[test]
fn description_templates_carry_brand_suffix() {
    for locale in PassLocale::ALL {
        assert!(locale.business_card_description_template().ends_with("{name} - YaVendió"));
    }
}
