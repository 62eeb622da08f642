//! 片段提取 / 替换的端到端测试

use super::test_support::{build_idml, build_idml_raw};
use super::*;

const STORY_1: &str = "Stories/Story_1.xml";
const STORY_2: &str = "Stories/Story_2.xml";

fn triples(segments: &[Segment]) -> Vec<(&str, usize, &str)> {
    segments
        .iter()
        .map(|s| (s.story_path.as_str(), s.index, s.original_text.as_str()))
        .collect()
}

fn texts(segments: &[Segment]) -> Vec<&str> {
    segments.iter().map(|s| s.original_text.as_str()).collect()
}

fn entry_data(bytes: &[u8], name: &str) -> Vec<u8> {
    Package::from_bytes(bytes)
        .unwrap()
        .entry(name)
        .unwrap()
        .data()
        .to_vec()
}

fn story_string(bytes: &[u8], name: &str) -> String {
    String::from_utf8(entry_data(bytes, name)).unwrap()
}

#[test]
fn test_lists_non_empty_content_in_story_order() {
    let idml = build_idml(&[
        ("Story_2", &[Some("B1"), Some(" "), Some(""), Some("B2")]),
        ("Story_1", &[Some("A1"), None, Some("A2")]),
    ]);

    let segments = list_segments(&idml).unwrap();
    assert_eq!(
        triples(&segments),
        vec![
            (STORY_1, 0, "A1"),
            (STORY_1, 1, "A2"),
            (STORY_2, 0, "B1"),
            (STORY_2, 1, "B2"),
        ]
    );
}

#[test]
fn test_two_story_scenario() {
    let idml = build_idml(&[
        ("Story_1", &[Some("Hello"), Some("World")]),
        ("Story_2", &[Some("B1"), Some(" "), Some(""), Some("B2")]),
    ]);

    let segments = list_segments(&idml).unwrap();
    assert_eq!(
        triples(&segments),
        vec![
            (STORY_1, 0, "Hello"),
            (STORY_1, 1, "World"),
            (STORY_2, 0, "B1"),
            (STORY_2, 1, "B2"),
        ]
    );
}

#[test]
fn test_story_order_is_bytewise_not_numeric() {
    let idml = build_idml(&[
        ("Story_2", &[Some("two")]),
        ("Story_10", &[Some("ten")]),
        ("Story_1", &[Some("one")]),
    ]);

    let segments = list_segments(&idml).unwrap();
    assert_eq!(texts(&segments), vec!["one", "ten", "two"]);
}

#[test]
fn test_whitespace_only_content_is_skipped() {
    let idml = build_idml(&[("Story_1", &[Some("A"), Some("   "), Some("\n"), Some("B")])]);
    let segments = list_segments(&idml).unwrap();
    assert_eq!(texts(&segments), vec!["A", "B"]);
    assert_eq!(segments[1].index, 1);
}

#[test]
fn test_original_text_is_not_trimmed() {
    let idml = build_idml_raw(&[(
        STORY_1,
        "<Story><Content>  padded </Content><Content>a &amp; b</Content></Story>",
    )]);
    let segments = list_segments(&idml).unwrap();
    assert_eq!(texts(&segments), vec!["  padded ", "a & b"]);
}

#[test]
fn test_nested_content_in_document_order() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<idPkg:Story xmlns:idPkg="http://ns.adobe.com/AdobeInDesign/idml/1.0/packaging" DOMVersion="8.0">
  <Story Self="u1a">
    <ParagraphStyleRange AppliedParagraphStyle="ParagraphStyle/Heading">
      <CharacterStyleRange AppliedCharacterStyle="CharacterStyle/$ID/[No character style]">
        <Content>Title</Content>
        <Br/>
      </CharacterStyleRange>
    </ParagraphStyleRange>
    <ParagraphStyleRange AppliedParagraphStyle="ParagraphStyle/Body">
      <CharacterStyleRange AppliedCharacterStyle="CharacterStyle/Bold">
        <Content>Bold </Content>
      </CharacterStyleRange>
      <CharacterStyleRange AppliedCharacterStyle="CharacterStyle/$ID/[No character style]">
        <Content>body text.</Content>
      </CharacterStyleRange>
    </ParagraphStyleRange>
  </Story>
</idPkg:Story>"#;
    let idml = build_idml_raw(&[("Stories/Story_u1a.xml", xml)]);

    let segments = list_segments(&idml).unwrap();
    assert_eq!(texts(&segments), vec!["Title", "Bold ", "body text."]);
}

#[test]
fn test_replace_then_extract() {
    let idml = build_idml(&[("Story_1", &[Some("Hello"), Some("World")])]);
    assert_eq!(list_segments(&idml).unwrap().len(), 2);

    let out = replace_segments(
        &idml,
        &[
            Replacement::new(STORY_1, 0, "Witaj"),
            Replacement::new(STORY_1, 1, "Świecie"),
        ],
    )
    .unwrap();

    let segments = list_segments(&out).unwrap();
    assert_eq!(texts(&segments), vec!["Witaj", "Świecie"]);
    assert_eq!(entry_data(&out, "designmap.xml"), entry_data(&idml, "designmap.xml"));
    assert_eq!(
        entry_data(&out, "Resources/Styles.xml"),
        entry_data(&idml, "Resources/Styles.xml")
    );
    assert_eq!(entry_data(&out, "mimetype"), entry_data(&idml, "mimetype"));
}

#[test]
fn test_round_trip_every_segment() {
    let idml = build_idml(&[
        ("Story_1", &[Some("one"), Some(" "), Some("two"), Some("three")]),
        ("Story_2", &[Some("alpha"), None, Some("beta")]),
    ]);
    let segments = list_segments(&idml).unwrap();

    let replacements: Vec<Replacement> = segments
        .iter()
        .map(|s| {
            Replacement::new(
                s.story_path.clone(),
                s.index,
                format!("<{}> & \"{}\" {}", s.index, s.original_text, s.story_path),
            )
        })
        .collect();

    let out = replace_segments(&idml, &replacements).unwrap();
    let after = list_segments(&out).unwrap();

    assert_eq!(after.len(), replacements.len());
    for (segment, replacement) in after.iter().zip(&replacements) {
        assert_eq!(segment.story_path, replacement.story_path);
        assert_eq!(segment.index, replacement.index);
        assert_eq!(segment.original_text, replacement.translated_text);
    }
}

#[test]
fn test_unmatched_replacements_are_ignored() {
    let idml = build_idml(&[
        ("Story_1", &[Some("A")]),
        ("Story_2", &[Some("B")]),
    ]);

    let out = replace_segments(
        &idml,
        &[
            Replacement::new(STORY_1, 5, "X"),
            Replacement::new("Stories/Story_9.xml", 0, "Y"),
            Replacement::new("Story_2.xml", 0, "Z"),
        ],
    )
    .unwrap();

    assert_eq!(list_segments(&out).unwrap(), list_segments(&idml).unwrap());
    assert_eq!(entry_data(&out, STORY_1), entry_data(&idml, STORY_1));
    assert_eq!(entry_data(&out, STORY_2), entry_data(&idml, STORY_2));
}

#[test]
fn test_untargeted_story_is_byte_identical() {
    let idml = build_idml(&[
        ("Story_1", &[Some("A"), Some("B")]),
        ("Story_2", &[Some("C"), Some("D")]),
    ]);

    let out = replace_segments(&idml, &[Replacement::new(STORY_1, 1, "b")]).unwrap();

    assert_eq!(entry_data(&out, STORY_2), entry_data(&idml, STORY_2));
    assert_eq!(
        texts(&list_segments(&out).unwrap()),
        vec!["A", "b", "C", "D"]
    );
}

#[test]
fn test_markup_characters_are_escaped() {
    let idml = build_idml(&[("Story_1", &[Some("plain")])]);
    let translated = "a < b && c > d";

    let out = replace_segments(&idml, &[Replacement::new(STORY_1, 0, translated)]).unwrap();

    let xml = story_string(&out, STORY_1);
    assert!(xml.contains("a &lt; b &amp;&amp; c &gt; d"));
    assert!(StrictXmlValidator.is_well_formed(&xml));
    assert_eq!(list_segments(&out).unwrap()[0].original_text, translated);
}

#[test]
fn test_cdata_fallback_round_trips_terminator() {
    let idml = build_idml(&[("Story_1", &[Some("first"), Some("second")])]);
    let translated = "if (a[b[0]]> 1) { x < y & z }";
    let rejects_entities = |xml: &str| {
        !xml.contains("&lt;") && !xml.contains("&amp;") && StrictXmlValidator.is_well_formed(xml)
    };

    let out = replace_segments_with(
        &idml,
        &[
            Replacement::new(STORY_1, 0, translated),
            Replacement::new(STORY_1, 1, "safe"),
        ],
        &rejects_entities,
    )
    .unwrap();

    let xml = story_string(&out, STORY_1);
    assert!(xml.contains("<![CDATA["));
    assert!(StrictXmlValidator.is_well_formed(&xml));
    assert_eq!(
        texts(&list_segments(&out).unwrap()),
        vec![translated, "safe"]
    );
}

#[test]
fn test_cdata_terminator_literal() {
    let idml = build_idml(&[("Story_1", &[Some("x")])]);
    let translated = "end]]>more]]>";
    let no_gt_entity = |xml: &str| !xml.contains("&gt;") && StrictXmlValidator.is_well_formed(xml);

    let out =
        replace_segments_with(&idml, &[Replacement::new(STORY_1, 0, translated)], &no_gt_entity)
            .unwrap();

    assert_eq!(list_segments(&out).unwrap()[0].original_text, translated);
}

#[test]
fn test_unsafe_segment_is_left_unchanged() {
    let idml = build_idml(&[("Story_1", &[Some("keep"), Some("swap")])]);

    let out = replace_segments(
        &idml,
        &[
            Replacement::new(STORY_1, 0, "control \u{1} char"),
            Replacement::new(STORY_1, 1, "swapped"),
        ],
    )
    .unwrap();

    assert_eq!(
        texts(&list_segments(&out).unwrap()),
        vec!["keep", "swapped"]
    );
}

#[test]
fn test_all_segments_unsafe_leaves_story_identical() {
    let idml = build_idml(&[("Story_1", &[Some("keep")])]);
    let out = replace_segments(&idml, &[Replacement::new(STORY_1, 0, "\u{0}")]).unwrap();
    assert_eq!(entry_data(&out, STORY_1), entry_data(&idml, STORY_1));
}

#[test]
fn test_unicode_round_trip() {
    let original = "Zażółć 🧪 گ";
    let idml = build_idml(&[("Story_1", &[Some(original)])]);
    assert_eq!(list_segments(&idml).unwrap()[0].original_text, original);

    let translated = "e\u{301}te\u{301} 👩‍👩‍👧 مرحبا بالعالم";
    let out = replace_segments(&idml, &[Replacement::new(STORY_1, 0, translated)]).unwrap();
    let extracted = list_segments(&out).unwrap();
    assert_eq!(extracted[0].original_text.as_bytes(), translated.as_bytes());
}

#[test]
fn test_envelope_and_attributes_are_preserved() {
    let xml = r#"<Story><CharacterStyleRange AppliedCharacterStyle="CharacterStyle/Bold"><Content Foo="1">  Hi  </Content></CharacterStyleRange></Story>"#;
    let idml = build_idml_raw(&[(STORY_1, xml)]);

    let out = replace_segments(&idml, &[Replacement::new(STORY_1, 0, "Hola")]).unwrap();

    assert_eq!(
        story_string(&out, STORY_1),
        r#"<Story><CharacterStyleRange AppliedCharacterStyle="CharacterStyle/Bold"><Content Foo="1">  Hola  </Content> </CharacterStyleRange></Story>"#
    );
    assert_eq!(list_segments(&out).unwrap()[0].original_text, "  Hola  ");
}

#[test]
fn test_spacer_before_adjacent_text() {
    let xml = "<Story><Content>Hello</Content>world</Story>";
    let idml = build_idml_raw(&[(STORY_1, xml)]);

    let out = replace_segments(&idml, &[Replacement::new(STORY_1, 0, "Hola")]).unwrap();

    assert_eq!(
        story_string(&out, STORY_1),
        "<Story><Content>Hola </Content> world</Story>"
    );
}

#[test]
fn test_indices_agree_on_encoded_whitespace() {
    let xml = "<Story><Content>&#x20;</Content><Content><![CDATA[ ]]></Content><Content>Target</Content><Content/></Story>";
    let idml = build_idml_raw(&[(STORY_1, xml)]);

    let segments = list_segments(&idml).unwrap();
    assert_eq!(triples(&segments), vec![(STORY_1, 0, "Target")]);

    let out = replace_segments(&idml, &[Replacement::new(STORY_1, 0, "Cel")]).unwrap();
    assert_eq!(texts(&list_segments(&out).unwrap()), vec!["Cel"]);
}

#[test]
fn test_source_cdata_is_replaced() {
    let xml = "<Story><Content><![CDATA[<b>bold</b>]]></Content></Story>";
    let idml = build_idml_raw(&[(STORY_1, xml)]);
    assert_eq!(list_segments(&idml).unwrap()[0].original_text, "<b>bold</b>");

    let out = replace_segments(&idml, &[Replacement::new(STORY_1, 0, "<i>pogrubione</i>")]).unwrap();
    assert_eq!(
        list_segments(&out).unwrap()[0].original_text,
        "<i>pogrubione</i>"
    );
}

#[test]
fn test_commented_out_content_does_not_shift_indices() {
    let xml = "<Story><!-- <Content>old</Content> --><Content>First</Content><Content>Second</Content></Story>";
    let idml = build_idml_raw(&[(STORY_1, xml)]);
    assert_eq!(texts(&list_segments(&idml).unwrap()), vec!["First", "Second"]);

    let out = replace_segments(&idml, &[Replacement::new(STORY_1, 0, "Erste")]).unwrap();

    let story = story_string(&out, STORY_1);
    assert!(story.starts_with("<Story><!-- <Content>old</Content> -->"));
    assert_eq!(texts(&list_segments(&out).unwrap()), vec!["Erste", "Second"]);
}

#[test]
fn test_carriage_returns_round_trip() {
    let idml = build_idml(&[("Story_1", &[Some("Hello"), Some("World")])]);

    let out = replace_segments(
        &idml,
        &[
            Replacement::new(STORY_1, 0, "a\rb"),
            Replacement::new(STORY_1, 1, "a\r\nb"),
        ],
    )
    .unwrap();

    assert!(story_string(&out, STORY_1).contains("a&#13;b"));
    assert_eq!(
        texts(&list_segments(&out).unwrap()),
        vec!["a\rb", "a\r\nb"]
    );
}

#[test]
fn test_processing_instructions_survive_replacement() {
    let xml = "<Story><Content>Page <?ACE 18?></Content></Story>";
    let idml = build_idml_raw(&[(STORY_1, xml)]);
    assert_eq!(texts(&list_segments(&idml).unwrap()), vec!["Page "]);

    let out = replace_segments(&idml, &[Replacement::new(STORY_1, 0, "Strona ")]).unwrap();

    assert_eq!(
        story_string(&out, STORY_1),
        "<Story><Content>Strona <?ACE 18?></Content> </Story>"
    );
    assert_eq!(texts(&list_segments(&out).unwrap()), vec!["Strona "]);
}

#[test]
fn test_malformed_zip_is_invalid_input() {
    let broken = b"not-a-zip";
    assert!(matches!(list_segments(broken), Err(IdmlError::InvalidInput(_))));
    assert!(matches!(
        replace_segments(broken, &[Replacement::new(STORY_1, 0, "x")]),
        Err(IdmlError::InvalidInput(_))
    ));
}

#[test]
fn test_zip_without_manifest_or_stories_is_invalid_input() {
    let empty = super::test_support::build_zip(&[]);
    assert!(matches!(list_segments(&empty), Err(IdmlError::InvalidInput(_))));

    let only_manifest = super::test_support::build_zip(&[("designmap.xml", b"<Document/>".to_vec())]);
    let err = list_segments(&only_manifest).unwrap_err();
    assert!(err.to_string().contains("missing designmap.xml/Stories"));
    assert!(matches!(
        replace_segments(&only_manifest, &[]),
        Err(IdmlError::InvalidInput(_))
    ));
}

#[test]
fn test_malformed_story_fails_whole_extraction() {
    let idml = build_idml_raw(&[
        (STORY_1, "<Story><Content>fine</Content></Story>"),
        (STORY_2, "<Story><Content>broken</Story>"),
    ]);
    assert!(matches!(list_segments(&idml), Err(IdmlError::InvalidInput(_))));
}

#[test]
fn test_embedded_packages_flow() {
    let first = build_idml(&[("Story_1", &[Some("one")])]);
    let second = build_idml(&[("Story_1", &[Some("two")])]);
    let container = super::test_support::build_zip(&[
        ("a/first.idml", first),
        ("second.idml", second),
    ]);

    let packages = enumerate_packages(&container, None, true).unwrap();
    let extracted: Vec<String> = packages
        .iter()
        .flat_map(|p| list_segments(&p.bytes).unwrap())
        .map(|s| s.original_text)
        .collect();
    assert_eq!(extracted, vec!["one", "two"]);
}
