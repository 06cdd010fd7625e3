//! Naming inflections used to derive tag names.
//!
//! Entity type names arrive in upper-camel form (`ProjectTask`), field names
//! in underscore form (`first_name`). Collection tags use the tableized form
//! of the type name (`project_tasks`), error fields use lower-camel
//! (`firstName`), and error messages use the humanized label (`First name`).
//!
//! Pluralization only inflects the last underscore-separated word, so
//! `sales_person` becomes `sales_people`.

use heck::{ToSnakeCase, ToUpperCamelCase};

/// Words that have no distinct plural form.
const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "fish",
    "information",
    "jeans",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "species",
];

/// Irregular `(singular, plural)` pairs.
const IRREGULAR: &[(&str, &str)] = &[
    ("child", "children"),
    ("index", "indices"),
    ("man", "men"),
    ("matrix", "matrices"),
    ("mouse", "mice"),
    ("move", "moves"),
    ("movie", "movies"),
    ("octopus", "octopi"),
    ("ox", "oxen"),
    ("person", "people"),
    ("quiz", "quizzes"),
    ("vertex", "vertices"),
    ("virus", "viri"),
    ("woman", "women"),
];

/// Stems whose `-sis` singular pluralizes to `-ses`.
const SIS_STEMS: &[&str] = &[
    "analy", "ba", "diagno", "parenthe", "progno", "synop", "the",
];

/// Uppercase the first character, leaving the rest untouched.
///
/// ```
/// use fxml_core::inflect::capitalize_without_downcasing;
///
/// assert_eq!(capitalize_without_downcasing("firstName"), "FirstName");
/// ```
#[must_use]
pub fn capitalize_without_downcasing(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character, leaving the rest untouched.
#[must_use]
pub fn downcase_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Underscore a type name: `ProjectTask` -> `project_task`.
#[must_use]
pub fn underscore(type_name: &str) -> String {
    type_name.to_snake_case()
}

/// Lower-camel form of an underscore name: `first_name` -> `firstName`.
#[must_use]
pub fn camelize_lower(name: &str) -> String {
    downcase_first_letter(&name.to_upper_camel_case())
}

/// Human-readable label for a field: `first_name` -> `First name`,
/// `owner_id` -> `Owner`.
#[must_use]
pub fn humanize(field: &str) -> String {
    let base = field.strip_suffix("_id").unwrap_or(field);
    capitalize_without_downcasing(&base.replace('_', " ").to_lowercase())
}

/// Tableized name of a type: `ProjectTask` -> `project_tasks`.
///
/// ```
/// use fxml_core::inflect::tableize;
///
/// assert_eq!(tableize("Project"), "projects");
/// assert_eq!(tableize("Category"), "categories");
/// ```
#[must_use]
pub fn tableize(type_name: &str) -> String {
    pluralize(&underscore(type_name))
}

/// Plural form of an underscore-separated word.
#[must_use]
pub fn pluralize(word: &str) -> String {
    inflect_last_word(word, pluralize_word)
}

/// Singular form of an underscore-separated word.
#[must_use]
pub fn singularize(word: &str) -> String {
    inflect_last_word(word, singularize_word)
}

fn inflect_last_word(word: &str, inflect: fn(&str) -> String) -> String {
    match word.rfind('_') {
        Some(idx) => format!("{}{}", &word[..=idx], inflect(&word[idx + 1..])),
        None => inflect(word),
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Restore a leading capital when the input word had one.
fn match_case(original: &str, inflected: &str) -> String {
    if original.chars().next().is_some_and(char::is_uppercase) {
        capitalize_without_downcasing(inflected)
    } else {
        inflected.to_owned()
    }
}

fn pluralize_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.is_empty() || UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_owned();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(s, _)| *s == lower) {
        return match_case(word, plural);
    }
    if IRREGULAR.iter().any(|(_, p)| *p == lower) {
        return word.to_owned();
    }

    let plural = if let Some(stem) = lower.strip_suffix("sis") {
        format!("{stem}ses")
    } else if lower.ends_with("fe") && !lower.ends_with("ffe") {
        format!("{}ves", &lower[..lower.len() - 2])
    } else if lower.ends_with("lf") || lower.ends_with("rf") {
        format!("{}ves", &lower[..lower.len() - 1])
    } else if ["x", "ch", "ss", "sh"].iter().any(|s| lower.ends_with(s)) {
        format!("{lower}es")
    } else if lower.ends_with("quy") || consonant_before_y(&lower) {
        format!("{}ies", &lower[..lower.len() - 1])
    } else if ["alias", "status", "bus"].iter().any(|s| lower.ends_with(s)) {
        format!("{lower}es")
    } else if lower.ends_with("buffalo") || lower.ends_with("tomato") {
        format!("{lower}es")
    } else if lower.ends_with('s') {
        lower
    } else {
        format!("{lower}s")
    };
    match_case(word, &plural)
}

fn consonant_before_y(lower: &str) -> bool {
    let mut rev = lower.chars().rev();
    rev.next() == Some('y') && rev.next().is_some_and(|c| !is_vowel(c) && c != 'y')
}

fn singularize_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.is_empty() || UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_owned();
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(_, p)| *p == lower) {
        return match_case(word, singular);
    }
    if IRREGULAR.iter().any(|(s, _)| *s == lower) {
        return word.to_owned();
    }

    let singular = if let Some(stem) = lower.strip_suffix("ves") {
        if stem.ends_with('l') || stem.ends_with('r') {
            format!("{stem}f")
        } else {
            format!("{stem}fe")
        }
    } else if let Some(stem) = lower.strip_suffix("ses").filter(|stem| {
        SIS_STEMS
            .iter()
            .any(|s| *stem == *s || (s.len() > 3 && stem.ends_with(s)))
    }) {
        format!("{stem}sis")
    } else if let Some(stem) = lower.strip_suffix("es").filter(|stem| {
        ["x", "ch", "ss", "sh", "alias", "status", "bus", "buffalo", "tomato"]
            .iter()
            .any(|s| stem.ends_with(s))
    }) {
        stem.to_owned()
    } else if let Some(stem) = lower.strip_suffix("ies") {
        format!("{stem}y")
    } else if ["ss", "us", "is"].iter().any(|s| lower.ends_with(s)) {
        lower
    } else if let Some(stem) = lower.strip_suffix('s') {
        stem.to_owned()
    } else {
        lower
    };
    match_case(word, &singular)
}
