use std::collections::{HashMap, HashSet};

/// Strip question prompt markup down to inline formatting.
///
/// Prompts are authored as HTML fragments (`<code>`, `<strong>`, line breaks);
/// anything else is removed before it reaches the page.
#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "span", "br", "em", "strong", "b", "i", "code", "pre", "sub", "sup", "a",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}
