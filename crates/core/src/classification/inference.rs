//! Built-in pattern inference
//!
//! Fallback classifier used when no user rule matches: a fixed, ordered
//! table mapping well-known app and site signatures to stock category names.
//! The first table entry with a matching pattern and a configured category
//! wins; entries whose category the user has deleted do not stop the scan.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use timevault_domain::types::{ActivitySample, Category};

/// One table entry: a stock category name and the signatures that imply it.
struct PatternGroup {
    category_name: &'static str,
    patterns: Vec<Regex>,
}

/// Compile a pattern list case-insensitively.
///
/// A pattern that fails to compile is skipped, the same silent policy the
/// matcher applies to user regexes.
fn group(category_name: &'static str, patterns: &[&str]) -> PatternGroup {
    PatternGroup {
        category_name,
        patterns: patterns
            .iter()
            .filter_map(|p| RegexBuilder::new(p).case_insensitive(true).build().ok())
            .collect(),
    }
}

lazy_static! {
    /// Signature table for common productivity domains, checked in order.
    ///
    /// Ordering is load-bearing twice over: earlier entries win overlapping
    /// matches, and Learning precedes Social Media so that
    /// `linkedin.com/learning` resolves before the bare `linkedin.com`
    /// signature.
    static ref BUILTIN_PATTERNS: Vec<PatternGroup> = vec![
        group(
            "Coding",
            &[
                r"vscode",
                r"visual studio",
                r"sublime",
                r"atom",
                r"intellij",
                r"webstorm",
                r"pycharm",
                r"xcode",
                r"android studio",
                r"github\.com",
                r"gitlab\.com",
                r"bitbucket",
                r"stackoverflow\.com",
                r"codepen",
                r"codesandbox",
                r"replit",
            ],
        ),
        group(
            "Design",
            &[
                r"figma",
                r"sketch",
                r"adobe",
                r"photoshop",
                r"illustrator",
                r"canva",
                r"invision",
                r"dribbble",
                r"behance",
            ],
        ),
        group(
            "Writing",
            &[
                r"docs\.google",
                r"notion\.so",
                r"word",
                r"pages",
                r"medium\.com",
                r"wordpress",
                r"ghost",
                r"grammarly",
                r"hemingway",
            ],
        ),
        group(
            "Communication",
            &[
                r"slack",
                r"discord",
                r"teams",
                r"zoom",
                r"meet\.google",
                r"skype",
                r"webex",
                r"mail\.google",
                r"outlook",
                r"messages",
                r"telegram",
                r"whatsapp",
            ],
        ),
        group(
            "Reference",
            &[
                r"wikipedia",
                r"documentation",
                r"docs\.",
                r"developer\.mozilla",
                r"w3schools",
                r"devdocs",
                r"man page",
            ],
        ),
        group(
            "Learning",
            &[
                r"udemy",
                r"coursera",
                r"edx",
                r"pluralsight",
                r"linkedin learning",
                r"linkedin\.com/learning",
                r"skillshare",
                r"khan academy",
                r"codecademy",
                r"freecodecamp",
                r"egghead",
                r"frontendmasters",
            ],
        ),
        group(
            "Planning",
            &[
                r"calendar",
                r"trello",
                r"asana",
                r"jira",
                r"monday\.com",
                r"todoist",
                r"notion",
                r"airtable",
                r"clickup",
                r"basecamp",
            ],
        ),
        group(
            "Social Media",
            &[
                r"twitter\.com",
                r"x\.com",
                r"facebook\.com",
                r"instagram\.com",
                r"tiktok\.com",
                r"reddit\.com",
                r"linkedin\.com",
                r"snapchat",
                r"pinterest",
                r"tumblr",
            ],
        ),
        group(
            "Entertainment",
            &[
                r"youtube\.com",
                r"netflix",
                r"hulu",
                r"disney\+",
                r"twitch",
                r"spotify",
                r"apple music",
                r"soundcloud",
                r"hbo",
                r"prime video",
                r"gaming",
                r"steam",
            ],
        ),
        group(
            "Shopping",
            &[
                r"amazon\.com",
                r"ebay",
                r"walmart",
                r"target",
                r"etsy",
                r"aliexpress",
                r"shopping",
                r"cart",
                r"checkout",
            ],
        ),
    ];
}

/// Infer a category for a sample from the built-in signature table.
///
/// Returns `None` only after the whole table is exhausted without an entry
/// that both matches and resolves to a configured category.
pub fn infer_category<'a>(
    sample: &ActivitySample,
    categories: &'a [Category],
) -> Option<&'a Category> {
    let search_text =
        format!("{} {} {}", sample.app_name, sample.window_title, sample.url_or_empty());

    for entry in BUILTIN_PATTERNS.iter() {
        if entry.patterns.iter().any(|pattern| pattern.is_match(&search_text)) {
            if let Some(category) = categories.iter().find(|c| c.name == entry.category_name) {
                return Some(category);
            }
            // Signature matched but the user deleted the stock category;
            // later entries may still resolve.
        }
    }

    None
}
