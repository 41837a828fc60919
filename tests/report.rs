use wtf::{Pronounce, Report};

#[test]
fn title_only_report_renders_header_block() {
    let report = Report {
        title: "hello".to_string(),
        ..Report::default()
    };

    assert_eq!(
        report.to_string(),
        "-----------------------\nhello\n-----------------------\n"
    );
}

#[test]
fn renders_sections_in_order() {
    let report = Report {
        title: "hello".to_string(),
        pronunciations: vec![
            Pronounce {
                name: "英".to_string(),
                phonetic: "[həˈləʊ]".to_string(),
            },
            Pronounce {
                name: "美".to_string(),
                phonetic: "[həˈloʊ]".to_string(),
            },
        ],
        translations: vec!["int. 喂；哈罗".to_string()],
        web_translations: vec!["你好\n    hello\n".to_string(), "喂\n    hey\n".to_string()],
        web_phrases: vec!["hi       你好".to_string()],
        origin: "https://www.youdao.com/w/hello".to_string(),
    };

    let expected = "\
-----------------------
hello
-----------------------
英 [həˈləʊ]
美 [həˈloʊ]
-----------------------
int. 喂；哈罗
-----------------------
Web Translations
----
你好
    hello
喂
    hey
-----------------------
Web Phrases
----
hi       你好
-----------------------
https://www.youdao.com/w/hello
-----------------------";
    assert_eq!(report.to_string(), expected);
}

#[test]
fn empty_facets_add_no_delimiters() {
    let report = Report {
        title: "hello world".to_string(),
        web_phrases: vec!["hello world 你好世界".to_string()],
        origin: "https://www.youdao.com/w/hello%20world".to_string(),
        ..Report::default()
    };

    let expected = "\
-----------------------
hello world
-----------------------
Web Phrases
----
hello world 你好世界
-----------------------
https://www.youdao.com/w/hello%20world
-----------------------";
    assert_eq!(report.to_string(), expected);
}
