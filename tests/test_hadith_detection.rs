use tahqiq_backend::hadith_detector::detect_hadith_refs;
use tahqiq_backend::canon::normalize_collection_name;
use tahqiq_backend::types::HadithCollection;

#[test]
fn test_bukhari_formats() {
    let cases = [
        "Sahih Bukhari 1234",
        "Sahih al-Bukhari 1234",
        "Bukhari 1234",
        "Bukhari, 1234",
        "Bukhari no. 1234",
        "Bukhari #1234",
        "Bukhari: 1234",
        "bukhari 1234",
        "BUKHARI 1234",
    ];

    for text in cases {
        let refs = detect_hadith_refs(text);
        assert_eq!(refs.len(), 1, "expected one reference in: {}", text);
        assert_eq!(refs[0].collection, HadithCollection::Bukhari, "collection mismatch in: {}", text);
        assert_eq!(refs[0].hadith_number, 1234, "number mismatch in: {}", text);
    }
}

#[test]
fn test_muslim_formats() {
    for text in ["Sahih Muslim 567", "Muslim 567", "Muslim, 567", "Muslim no. 567"] {
        let refs = detect_hadith_refs(text);
        assert_eq!(refs.len(), 1, "expected one reference in: {}", text);
        assert_eq!(refs[0].collection, HadithCollection::Muslim);
        assert_eq!(refs[0].hadith_number, 567);
    }
}

#[test]
fn test_other_collections() {
    let cases: Vec<(&str, HadithCollection)> = vec![
        ("Sunan Abu Dawud 123", HadithCollection::AbuDawud),
        ("Abu Dawud 123", HadithCollection::AbuDawud),
        ("Abu Dawood 123", HadithCollection::AbuDawud),
        ("Tirmidhi 456", HadithCollection::Tirmidhi),
        ("Jami at-Tirmidhi 456", HadithCollection::Tirmidhi),
        ("Sunan at-Tirmidhi 456", HadithCollection::Tirmidhi),
        ("Tirmizi 456", HadithCollection::Tirmidhi),
        ("Ibn Majah 789", HadithCollection::IbnMajah),
        ("Sunan Ibn Majah 789", HadithCollection::IbnMajah),
        ("Ibn Maja 789", HadithCollection::IbnMajah),
        ("Nasai 321", HadithCollection::Nasai),
        ("Sunan an-Nasai 321", HadithCollection::Nasai),
        ("An-Nasai 321", HadithCollection::Nasai),
        ("Muwatta Malik 111", HadithCollection::Muwatta),
        ("Muwatta 111", HadithCollection::Muwatta),
        ("Malik's Muwatta 111", HadithCollection::Muwatta),
        ("Musnad Ahmad 12345", HadithCollection::Ahmad),
        ("Ahmad 12345", HadithCollection::Ahmad),
        ("Musnad Ahmed 12345", HadithCollection::Ahmad),
        ("Darimi 999", HadithCollection::Darimi),
        ("Sunan ad-Darimi 999", HadithCollection::Darimi),
        ("Bayhaqi 888", HadithCollection::Bayhaqi),
    ];

    for (text, collection) in cases {
        let refs = detect_hadith_refs(text);
        assert_eq!(refs.len(), 1, "expected one reference in: {}", text);
        assert_eq!(refs[0].collection, collection, "collection mismatch in: {}", text);
    }
}

#[test]
fn test_book_chapter_format() {
    let cases: Vec<(&str, HadithCollection, u32, u32)> = vec![
        ("Bukhari, Book 1, Hadith 1", HadithCollection::Bukhari, 1, 1),
        ("Muslim Book 5 Hadith 23", HadithCollection::Muslim, 5, 23),
        ("Tirmidhi Vol. 3, No. 456", HadithCollection::Tirmidhi, 3, 456),
    ];

    for (text, collection, book, number) in cases {
        let refs = detect_hadith_refs(text);
        assert_eq!(refs.len(), 1, "expected one reference in: {}", text);
        assert_eq!(refs[0].collection, collection);
        assert_eq!(refs[0].book_number, Some(book), "book mismatch in: {}", text);
        assert_eq!(refs[0].hadith_number, number, "number mismatch in: {}", text);
    }
}

#[test]
fn test_multiple_references() {
    let cases = [
        ("Bukhari 1234 and Muslim 567", 2),
        ("See Bukhari 123, Bukhari 456, Bukhari 789", 3),
        ("Tirmidhi 100, Abu Dawud 200, Ibn Majah 300", 3),
        ("As narrated in Bukhari 1 and also Muslim 2", 2),
    ];

    for (text, expected) in cases {
        let refs = detect_hadith_refs(text);
        assert_eq!(refs.len(), expected, "count mismatch in: {}", text);
    }
}

#[test]
fn test_references_ordered_by_position() {
    let refs = detect_hadith_refs("Bukhari 1234 and Muslim 567");
    assert_eq!(refs[0].collection, HadithCollection::Bukhari);
    assert_eq!(refs[1].collection, HadithCollection::Muslim);
    assert!(refs[0].position < refs[1].position);
}

#[test]
fn test_no_match_cases() {
    let cases = [
        "",
        "   ",
        "No references here",
        "John Smith 1234",
        "The Muslim community",
        "Chapter 123",
    ];

    for text in cases {
        assert!(detect_hadith_refs(text).is_empty(), "expected no references in: {}", text);
    }
}

#[test]
fn test_reference_metadata() {
    let refs = detect_hadith_refs("The Prophet said (Bukhari 1234)");
    assert_eq!(refs.len(), 1);
    assert!(refs[0].raw_text.contains("Bukhari"));
    assert!(refs[0].raw_text.contains("1234"));
    assert_eq!(refs[0].collection_name, "Sahih al-Bukhari");
}

#[test]
fn test_normalize_collection_name() {
    assert_eq!(normalize_collection_name("Sahih al-Bukhari"), Some(HadithCollection::Bukhari));
    assert_eq!(normalize_collection_name("Tirmizi"), Some(HadithCollection::Tirmidhi));
    assert_eq!(normalize_collection_name("NotACollection"), None);
}
