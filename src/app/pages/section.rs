use dioxus::prelude::*;

/// Heading for a section page: the last path segment in title case.
pub fn page_title(segments: &[String]) -> String {
    let Some(last) = segments.iter().rev().find(|s| !s.is_empty()) else {
        return "Zypp".to_string();
    };
    last.split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Any page other than the landing page.
#[component]
pub fn Section(segments: Vec<String>) -> Element {
    let title = page_title(&segments);
    rsx! {
        section { class: "page-section",
            h1 { "{title}" }
            p { "More about {title} is coming soon." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(path: &str) -> Vec<String> {
        path.split('/').map(str::to_string).collect()
    }

    #[test]
    fn test_title_from_last_segment() {
        assert_eq!(page_title(&segs("about/who-we-are")), "Who We Are");
        assert_eq!(page_title(&segs("franchise")), "Franchise");
    }

    #[test]
    fn test_title_ignores_trailing_slash() {
        assert_eq!(page_title(&segs("about/esg/")), "Esg");
    }

    #[test]
    fn test_title_for_empty_path() {
        assert_eq!(page_title(&[]), "Zypp");
    }
}
