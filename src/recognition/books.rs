use super::types::BookReference;

/// One canon entry: canonical English name and its USFM short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Book {
    pub name: &'static str,
    pub code: &'static str,
}

/// The 66-book Protestant canon the backend is instructed to draw from.
pub const CANON: [Book; 66] = [
    Book { name: "Genesis", code: "GEN" },
    Book { name: "Exodus", code: "EXO" },
    Book { name: "Leviticus", code: "LEV" },
    Book { name: "Numbers", code: "NUM" },
    Book { name: "Deuteronomy", code: "DEU" },
    Book { name: "Joshua", code: "JOS" },
    Book { name: "Judges", code: "JDG" },
    Book { name: "Ruth", code: "RUT" },
    Book { name: "1 Samuel", code: "1SA" },
    Book { name: "2 Samuel", code: "2SA" },
    Book { name: "1 Kings", code: "1KI" },
    Book { name: "2 Kings", code: "2KI" },
    Book { name: "1 Chronicles", code: "1CH" },
    Book { name: "2 Chronicles", code: "2CH" },
    Book { name: "Ezra", code: "EZR" },
    Book { name: "Nehemiah", code: "NEH" },
    Book { name: "Esther", code: "EST" },
    Book { name: "Job", code: "JOB" },
    Book { name: "Psalms", code: "PSA" },
    Book { name: "Proverbs", code: "PRO" },
    Book { name: "Ecclesiastes", code: "ECC" },
    Book { name: "Song of Solomon", code: "SNG" },
    Book { name: "Isaiah", code: "ISA" },
    Book { name: "Jeremiah", code: "JER" },
    Book { name: "Lamentations", code: "LAM" },
    Book { name: "Ezekiel", code: "EZK" },
    Book { name: "Daniel", code: "DAN" },
    Book { name: "Hosea", code: "HOS" },
    Book { name: "Joel", code: "JOL" },
    Book { name: "Amos", code: "AMO" },
    Book { name: "Obadiah", code: "OBA" },
    Book { name: "Jonah", code: "JON" },
    Book { name: "Micah", code: "MIC" },
    Book { name: "Nahum", code: "NAM" },
    Book { name: "Habakkuk", code: "HAB" },
    Book { name: "Zephaniah", code: "ZEP" },
    Book { name: "Haggai", code: "HAG" },
    Book { name: "Zechariah", code: "ZEC" },
    Book { name: "Malachi", code: "MAL" },
    Book { name: "Matthew", code: "MAT" },
    Book { name: "Mark", code: "MRK" },
    Book { name: "Luke", code: "LUK" },
    Book { name: "John", code: "JHN" },
    Book { name: "Acts", code: "ACT" },
    Book { name: "Romans", code: "ROM" },
    Book { name: "1 Corinthians", code: "1CO" },
    Book { name: "2 Corinthians", code: "2CO" },
    Book { name: "Galatians", code: "GAL" },
    Book { name: "Ephesians", code: "EPH" },
    Book { name: "Philippians", code: "PHP" },
    Book { name: "Colossians", code: "COL" },
    Book { name: "1 Thessalonians", code: "1TH" },
    Book { name: "2 Thessalonians", code: "2TH" },
    Book { name: "1 Timothy", code: "1TI" },
    Book { name: "2 Timothy", code: "2TI" },
    Book { name: "Titus", code: "TIT" },
    Book { name: "Philemon", code: "PHM" },
    Book { name: "Hebrews", code: "HEB" },
    Book { name: "James", code: "JAS" },
    Book { name: "1 Peter", code: "1PE" },
    Book { name: "2 Peter", code: "2PE" },
    Book { name: "1 John", code: "1JN" },
    Book { name: "2 John", code: "2JN" },
    Book { name: "3 John", code: "3JN" },
    Book { name: "Jude", code: "JUD" },
    Book { name: "Revelation", code: "REV" },
];

/// Case-insensitive lookup by canonical name or USFM code.
pub fn resolve(name: &str) -> Option<BookReference> {
    let wanted = name.trim();
    CANON
        .iter()
        .find(|b| b.name.eq_ignore_ascii_case(wanted) || b.code.eq_ignore_ascii_case(wanted))
        .map(|b| BookReference {
            name: b.name.to_string(),
            short_name: b.code.to_string(),
        })
}
