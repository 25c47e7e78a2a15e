use super::*;

fn blank_surface() -> RenderedSurface {
    RenderedSurface {
        width: 4,
        height: 4,
        data: vec![0; 4 * 4 * 4],
    }
}

#[test]
fn short_titles_pass_through_unchanged() {
    assert_eq!(truncate_title("Hello", 100), "Hello");
    let exact: String = "a".repeat(100);
    assert_eq!(truncate_title(&exact, 100), exact);
}

#[test]
fn long_titles_truncate_to_exactly_max_len() {
    let long: String = "x".repeat(120);
    let cut = truncate_title(&long, 100);
    assert_eq!(cut.chars().count(), 100);
    assert!(cut.ends_with("..."));
    assert_eq!(&cut[..97], &long[..97]);
}

#[test]
fn truncation_counts_characters_not_bytes() {
    let long: String = "ä".repeat(101);
    let cut = truncate_title(&long, 100);
    assert_eq!(cut.chars().count(), 100);
    assert!(cut.ends_with("..."));
}

#[test]
fn empty_title_shows_placeholder() {
    let card = mirror_to_preview(&blank_surface(), "", "My Channel");
    assert_eq!(card.display_title, TITLE_PLACEHOLDER);
    assert_eq!(card.char_count, 0);
    assert!(!card.over_length);
}

#[test]
fn over_length_flag_and_label() {
    let long: String = "y".repeat(120);
    let card = mirror_to_preview(&blank_surface(), &long, "My Channel");
    assert_eq!(card.char_count, 120);
    assert!(card.over_length);
    assert_eq!(card.length_label(), "(Too long) 120/100 characters");
    assert_eq!(card.display_title.chars().count(), 100);
}

#[test]
fn within_limit_label() {
    let card = mirror_to_preview(&blank_surface(), "Launch Day", "My Channel");
    assert!(!card.over_length);
    assert_eq!(card.length_label(), "10/100 characters");
    assert_eq!(card.display_title, "Launch Day");
}

#[test]
fn mirror_copies_the_surface() {
    let surface = blank_surface();
    let card = mirror_to_preview(&surface, "Title", "My Channel");
    assert_eq!(card.surface, surface);
}

#[test]
fn channel_chip_uppercases_the_initial() {
    let chip = ChannelChip::new("my channel");
    assert_eq!(chip.initial, "M");
    assert_eq!(chip.name, "my channel");
    assert_eq!(chip.posted_label, "Just now");
    assert_eq!(ChannelChip::new("").initial, "");
}
