//! # Slug generation — transliterated, URL-safe note identifiers
//!
//! Notes are addressed by slug (`/note/nazvanie-zametki/`). When the author leaves
//! the slug field empty, one is derived from the title with [`slugify`]:
//!
//! 1. lowercase the title,
//! 2. spell out `&` (and the `&amp;` entity) as ` and `,
//! 3. collapse every run of whitespace and hyphens into a single `-`,
//! 4. transliterate Cyrillic letters to ASCII via [`transliterate`],
//! 5. keep ASCII letters, digits, `-` and `_`, dropping everything else,
//! 6. collapse the hyphen runs left behind by dropped symbols (`"a ! b"` gives `a-b`),
//! 7. trim hyphens from both ends.
//!
//! The result is a pure function of the title, so the same title always yields
//! the same slug. [`resolve_slug`] applies the "explicit slug wins, otherwise
//! derive from title" rule shared by the create and edit paths.

/// Maximum slug length in characters; matches the `notes.slug` column.
pub const SLUG_MAX_LEN: usize = 100;

/// Derive a URL-safe slug from arbitrary title text.
///
/// ```
/// assert_eq!(store::slugify("Название заметки"), "nazvanie-zametki");
/// assert_eq!(store::slugify("Tom & Jerry"), "tom-and-jerry");
/// ```
#[must_use]
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase().replace("&amp;", " and ").replace('&', " and ");

    let mut slug = String::with_capacity(lowered.len());
    let mut in_gap = false;
    for ch in lowered.chars() {
        if ch == '-' || ch.is_whitespace() {
            if !in_gap {
                slug.push('-');
                in_gap = true;
            }
            continue;
        }
        in_gap = false;
        if ch.is_ascii_alphanumeric() || ch == '_' {
            slug.push(ch);
        } else if let Some(latin) = transliterate(ch) {
            slug.push_str(latin);
        }
    }

    let mut collapsed = String::with_capacity(slug.len());
    for ch in slug.chars() {
        if ch == '-' && collapsed.ends_with('-') {
            continue;
        }
        collapsed.push(ch);
    }
    collapsed.trim_matches('-').to_string()
}

/// ASCII spelling of a lowercase Cyrillic letter.
///
/// Hard and soft signs map to the empty string; characters outside the table
/// return `None` and are dropped by [`slugify`].
pub fn transliterate(ch: char) -> Option<&'static str> {
    let latin = match ch {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "yo",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "j",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' | 'ь' => "",
        'ы' => "yi",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        // Ukrainian
        'є' => "ye",
        'і' => "i",
        'ї' => "yi",
        'ґ' => "g",
        _ => return None,
    };
    Some(latin)
}

/// Pick the slug a note is stored under.
///
/// A non-blank `explicit` slug is used as-is (trimmed). Otherwise the slug is
/// generated from `title` and cut to [`SLUG_MAX_LEN`] characters.
pub fn resolve_slug(explicit: Option<&str>, title: &str) -> String {
    match explicit.map(str::trim) {
        Some(slug) if !slug.is_empty() => slug.to_string(),
        _ => slugify(title).chars().take(SLUG_MAX_LEN).collect(),
    }
}
