//! Conformance tests: realistic topic streams decoded and listed as
//! inline insta snapshots.
//!
//! Each fixture is a paragraph sub-stream shaped like what the help
//! compiler writes for a common kind of topic. The decoded
//! [`ParagraphItems`](hlp_decoder::ParagraphItems) is rendered with its
//! `Display` listing and compared against the snapshot next to it. A diff
//! signals either a deliberate format change (accept via
//! `cargo insta review`) or an accidental regression.

use hlp_decoder::{DecoderConfig, ParagraphDecoder};
use hlp_tests::{StreamBuilder, hex_fixture, init_logging};
use hlp_types::{BitmapAlignment, Justification, ParagraphSetup, TextFraming};
use insta::assert_snapshot;

// ── Title topic ───────────────────────────────────────────────────────────────

/// Centered, boxed heading as written for a topic's non-scrolling region.
const TITLE_TOPIC: &[&str] = &[
    "00 00 02 09",                                        // space_before|has_border|center_justify
    "01 21 51",                                           // border: boxed|thick
    "80 0000",                                            // font 0
    "01 47 65 74 74 69 6E 67 20 53 74 61 72 74 65 64 00", // "Getting Started"
    "82",                                                 // paragraph
];

#[test]
fn title_topic() {
    init_logging();
    let decoded = ParagraphDecoder::decode(&hex_fixture(&TITLE_TOPIC.join(" "))).unwrap();
    assert_eq!(decoded.settings.setup().justification(), Justification::Center);
    assert_snapshot!(decoded.to_string(), @r#"
    setup: space_before|has_border|center_justify
    border: boxed|thick
    items: 3
      font 0
      text "Getting Started"
      paragraph
    "#);
}

// ── Procedure topic ───────────────────────────────────────────────────────────

fn procedure_topic() -> Vec<u8> {
    StreamBuilder::new(ParagraphSetup::LEFT_MARGIN_INDENT | ParagraphSetup::HAS_TAB_SETTINGS)
        .font(1)
        .text("To open a file:")
        .new_line()
        .text("1.")
        .tab()
        .text("Click ")
        .bitmap(BitmapAlignment::Current, 7)
        .text(" on the toolbar.")
        .new_paragraph()
        .bitmap(BitmapAlignment::Right, 2)
        .build()
}

#[test]
fn procedure_topic_listing() {
    let decoded = ParagraphDecoder::decode(&procedure_topic()).unwrap();
    assert_snapshot!(decoded.to_string(), @r#"
    setup: left_margin_indent|has_tab_settings
    items: 10
      font 1
      text "To open a file:"
      newline
      text "1."
      tab
      text "Click "
      bitmap current #7
      text " on the toolbar."
      paragraph
      bitmap right #2
    "#);
}

#[test]
fn procedure_topic_views() {
    let decoded = ParagraphDecoder::decode(&procedure_topic()).unwrap();
    assert_eq!(
        decoded.plain_text(),
        "To open a file:\n1.\tClick  on the toolbar.\n"
    );
    assert_eq!(decoded.font_descriptors(), vec![1]);
    assert_eq!(decoded.bitmap_numbers(), vec![7, 2]);

    let paragraphs = decoded.paragraphs();
    assert_eq!(paragraphs.len(), 2);
    assert_eq!(paragraphs[1].len(), 1);
}

// ── Odd but valid streams ─────────────────────────────────────────────────────

#[test]
fn unknown_setup_bits_are_kept() {
    let decoded = ParagraphDecoder::decode(&hex_fixture("01 00 00 10")).unwrap();
    assert!(decoded.settings.setup().no_wrap());
    assert_snapshot!(decoded.to_string(), @r"
    setup: no_wrap|0x00000001
    items: 0
    ");
}

#[test]
fn right_justified_length_prefixed_footer() {
    let bytes = StreamBuilder::new(ParagraphSetup::RIGHT_JUSTIFY)
        .font(4)
        .text_prefixed("Page 1")
        .build();
    let config = DecoderConfig::default().with_text_framing(TextFraming::LengthPrefixed);
    let decoded = ParagraphDecoder::decode_with_config(&bytes, &config).unwrap();
    assert_eq!(decoded.settings.setup().justification(), Justification::Right);
    assert_snapshot!(decoded.to_string(), @r#"
    setup: right_justify
    items: 2
      font 4
      text "Page 1"
    "#);
}
