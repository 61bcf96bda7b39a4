use tahqiq_backend::footnotes::{
    detect_footnote_markers, detect_footnotes, extract_footnote_content, link_footnotes,
};

#[test]
fn test_marker_detection_formats() {
    let cases: Vec<(&str, Vec<&str>)> = vec![
        ("The Prophet said¹ that peace", vec!["1"]),
        ("The text² mentions this³", vec!["2", "3"]),
        ("Quote here¹²³", vec!["123"]), // adjacent superscripts are one marker
        ("The verse [1] states", vec!["1"]),
        ("See reference [2] and [3]", vec!["2", "3"]),
        ("Note [12] is important", vec!["12"]),
        ("As mentioned (1)", vec!["1"]),
        ("Reference (2) and (3)", vec!["2", "3"]),
        ("Important point*", vec!["*"]),
        ("First* and second**", vec!["*", "**"]),
        ("Note here†", vec!["†"]),
        ("See also‡", vec!["‡"]),
    ];

    for (text, expected) in cases {
        let markers = detect_footnote_markers(text);
        assert_eq!(markers.len(), expected.len(), "marker count mismatch in: {}", text);
        for want in expected {
            assert!(
                markers.iter().any(|m| m.marker == want),
                "marker {} not found in: {}",
                want,
                text
            );
        }
    }
}

#[test]
fn test_markers_sorted_by_position() {
    let markers = detect_footnote_markers("first¹ then [2] then (3)");
    assert_eq!(markers.len(), 3);
    assert!(markers[0].position < markers[1].position);
    assert!(markers[1].position < markers[2].position);
}

#[test]
fn test_no_markers() {
    assert!(detect_footnote_markers("Plain text without markers").is_empty());
    assert!(detect_footnote_markers("").is_empty());
}

#[test]
fn test_footnote_definition_formats() {
    let cases: Vec<(&str, usize)> = vec![
        ("1. Sahih Bukhari 1234", 1),
        ("1. First note\n2. Second note", 2),
        ("1. Note one\n2. Note two\n3. Note three", 3),
        ("¹ Quran 2:255", 1),
        ("¹ First\n² Second", 2),
        ("[1] Reference here", 1),
        ("[1] First ref\n[2] Second ref", 2),
    ];

    for (text, expected) in cases {
        let footnotes = detect_footnotes(text);
        assert_eq!(footnotes.len(), expected, "definition count mismatch in: {:?}", text);
    }
}

#[test]
fn test_footnote_definition_fields() {
    let footnotes = detect_footnotes("1. Sahih Bukhari 1234");
    assert_eq!(footnotes.len(), 1);
    assert_eq!(footnotes[0].number, "1");
    assert!(footnotes[0].content.contains("Bukhari"));
}

#[test]
fn test_no_footnote_definitions() {
    assert!(detect_footnotes("Regular paragraph text").is_empty());
    assert!(detect_footnotes("").is_empty());
}

#[test]
fn test_extract_footnote_content() {
    assert_eq!(extract_footnote_content("1. Bukhari 123"), "Bukhari 123");
    assert_eq!(extract_footnote_content("2) Quran 2:255"), "Quran 2:255");
    assert_eq!(extract_footnote_content("[3] A reference"), "A reference");
    assert_eq!(extract_footnote_content("¹ Superscript note"), "Superscript note");
    assert_eq!(extract_footnote_content(""), "");
}

#[test]
fn test_link_markers_to_list_entries() {
    let footnotes = vec![
        "1. Sahih Bukhari 1234".to_string(),
        "2. Quran 2:255".to_string(),
    ];
    let links = link_footnotes("The Prophet said¹ about peace² in context", &footnotes);

    assert_eq!(links.len(), 2);
    assert_eq!(links[0].marker, "1");
    assert_eq!(links[0].definition_text, "1. Sahih Bukhari 1234");
    assert_eq!(links[0].definition_index, 0);
    assert_eq!(links[1].marker, "2");
    assert_eq!(links[1].definition_text, "2. Quran 2:255");
    assert_eq!(links[1].definition_index, 1);
    assert!(links[0].position < links[1].position);
}

#[test]
fn test_out_of_range_marker_is_skipped() {
    let footnotes = vec!["1. Only note".to_string()];
    let links = link_footnotes("text¹ and more⁵", &footnotes);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].marker, "1");
}

#[test]
fn test_non_numeric_marker_is_skipped() {
    let footnotes = vec!["1. Only note".to_string()];
    let links = link_footnotes("a point* and a note¹", &footnotes);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].marker, "1");
}

#[test]
fn test_empty_inputs_yield_no_links() {
    assert!(link_footnotes("", &["1. note".to_string()]).is_empty());
    assert!(link_footnotes("text with marker¹", &[]).is_empty());
    assert!(link_footnotes("no markers here", &["1. note".to_string()]).is_empty());
}
