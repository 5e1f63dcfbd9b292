use tui_helpers::utils::strings::{
    bytes_to_str, capitalize, eq_ignore_case, format_bool, format_money, replace_all,
};

#[test]
fn capitalize_uppercases_each_word() {
    assert_eq!(capitalize("hello world"), "Hello World");
    assert_eq!(capitalize("already Caps"), "Already Caps");
    assert_eq!(capitalize("a"), "A");
    assert_eq!(capitalize(""), "");
    assert_eq!(capitalize("mixedCase words here"), "MixedCase Words Here");
}

#[test]
fn bytes_to_str_picks_decimal_units() {
    assert_eq!(bytes_to_str(0), "0 KB");
    assert_eq!(bytes_to_str(500), "0.5 KB");
    assert_eq!(bytes_to_str(1_512), "1.51 KB");
    assert_eq!(bytes_to_str(999_999), "999 KB");
    assert_eq!(bytes_to_str(1_000_000), "1 MB");
    assert_eq!(bytes_to_str(112_341_234), "112 MB");
    assert_eq!(bytes_to_str(1_500_000_000), "1.5 GB");
    assert_eq!(bytes_to_str(2_000_000_000), "2 GB");
}

#[test]
fn format_money_groups_thousands() {
    assert_eq!(format_money(1234.1234), "$1,234.12");
    assert_eq!(format_money(0.5), "$0.50");
    assert_eq!(format_money(-1234.5), "-$1,234.50");
    assert_eq!(format_money(1_000_000.0), "$1,000,000.00");
    assert_eq!(format_money(999.999), "$1,000.00");
}

#[test]
fn format_bool_spells_out_the_value() {
    assert_eq!(format_bool(true), "True");
    assert_eq!(format_bool(false), "False");
}

#[test]
fn eq_ignore_case_trims_and_lowercases() {
    assert!(eq_ignore_case("  Hello ", "hello"));
    assert!(eq_ignore_case("ABC", "abc"));
    assert!(!eq_ignore_case("abc", "abd"));
}

#[test]
fn replace_all_replaces_every_match() {
    assert_eq!(replace_all("a-b-c", "-", "+").unwrap(), "a+b+c");
    assert_eq!(replace_all("x1y22z", r"\d+", "#").unwrap(), "x#y#z");
    assert!(replace_all("anything", "(unclosed", "x").is_err());
}
