use super::*;

#[test]
fn rating_label_rounds_to_one_decimal() {
    assert_eq!(rating_label(4.9), "4.9");
    assert_eq!(rating_label(5.0), "5.0");
    assert_eq!(rating_label(4.75), "4.8");
}

#[test]
fn review_count_label_pluralizes() {
    assert_eq!(review_count_label(127), "(127 reviews)");
    assert_eq!(review_count_label(1), "(1 review)");
    assert_eq!(review_count_label(0), "(0 reviews)");
}

#[test]
fn star_row_repeats_and_caps_at_five() {
    assert_eq!(star_row(5), "★★★★★");
    assert_eq!(star_row(3), "★★★");
    assert_eq!(star_row(0), "");
    assert_eq!(star_row(9), "★★★★★");
}
