use wikicite::config::ArticleSelectionConfig;
use wikicite::picker::ArticlePicker;
use wikicite::wiki::{PageInfo, Protection};

use super::wiki_harness::InMemoryWiki;

const STUB: &str = "{{Infobox settlement|name=Millbrook}}\n\
'''Millbrook''' is a village.\n\
It lies on the river.\n\
\n\
== References ==\n\
{{reflist}}\n\
\n\
[[Category:Villages]]";

fn info(title: &str) -> PageInfo {
    PageInfo {
        title: title.to_string(),
        exists: true,
        ..PageInfo::default()
    }
}

fn populated() -> std::sync::Arc<InMemoryWiki> {
    let wiki = InMemoryWiki::new();
    wiki.add_page_with(
        "Old Name",
        "#REDIRECT [[Millbrook]]",
        1,
        PageInfo {
            is_redirect: true,
            ..info("Old Name")
        },
    );
    wiki.add_page_with(
        "Guarded",
        STUB,
        1,
        PageInfo {
            protection: vec![Protection {
                kind: "edit".into(),
                level: "sysop".into(),
            }],
            ..info("Guarded")
        },
    );
    wiki.add_page_with(
        "Jane Example",
        "Jane Example is a painter.",
        1,
        PageInfo {
            categories: vec!["Living people".into()],
            ..info("Jane Example")
        },
    );
    let long: String = (1..=12).map(|i| format!("Sentence number {i}.\n")).collect();
    wiki.add_page("Long Town", &long, 1);
    wiki.add_page("Millbrook", STUB, 3);
    wiki.add_page("Riverton", "Riverton is a hamlet.", 5);
    wiki
}

#[tokio::test]
async fn only_short_unprotected_non_blp_pages_qualify() {
    let picker = ArticlePicker::new(populated(), ArticleSelectionConfig::default());
    let candidates = picker.fetch_candidates(10).await.unwrap();

    let titles: Vec<&str> = candidates.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Millbrook", "Riverton"]);

    let millbrook = &candidates[0];
    assert_eq!(millbrook.body_line_count, 2);
    assert_eq!(millbrook.revision_id, "3");
    assert!(millbrook.has_infobox);
    assert!(!millbrook.is_blp);
    assert_eq!(millbrook.url, "https://en.wikipedia.org/wiki/Millbrook");
}

#[tokio::test]
async fn limit_stops_the_scan() {
    let picker = ArticlePicker::new(populated(), ArticleSelectionConfig::default());
    let candidates = picker.fetch_candidates(1).await.unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].title, "Millbrook");
}

#[tokio::test]
async fn relaxed_filters_admit_blp_and_protected_pages() {
    let config = ArticleSelectionConfig {
        exclude_blp: false,
        exclude_protected: false,
        ..ArticleSelectionConfig::default()
    };
    let picker = ArticlePicker::new(populated(), config);
    let titles: Vec<String> = picker
        .fetch_candidates(10)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.title)
        .collect();
    assert_eq!(titles, vec!["Guarded", "Jane Example", "Millbrook", "Riverton"]);
}
