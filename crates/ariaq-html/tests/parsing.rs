//! Parsing tests for ariaq-html
//!
//! Checks the arena tree produced from real-world and malformed markup.

use ariaq_html::{HtmlParser, parse_html};

#[test]
fn test_parse_minimal_html() {
    let doc = HtmlParser::new().parse("");
    assert!(doc.tree().len() >= 1, "Even empty HTML should have root");
    assert!(doc.body().is_some());
}

#[test]
fn test_parse_nested_structure() {
    let html = r#"
        <html>
            <head>
                <title>Test Page</title>
                <meta charset="utf-8">
            </head>
            <body>
                <div id="container">
                    <h1>Welcome</h1>
                    <p class="intro">This is a test.</p>
                    <ul>
                        <li>Item 1</li>
                        <li>Item 2</li>
                    </ul>
                </div>
            </body>
        </html>
    "#;

    let doc = parse_html(html);
    let tags: Vec<&str> = doc.elements().filter_map(|n| n.tag()).collect();
    assert_eq!(
        tags,
        vec!["html", "head", "title", "meta", "body", "div", "h1", "p", "ul", "li", "li"]
    );

    let container = doc.get_element_by_id("container").unwrap();
    assert_eq!(container.text_content().split_whitespace().collect::<Vec<_>>(), [
        "Welcome", "This", "is", "a", "test.", "Item", "1", "Item", "2"
    ]);
}

#[test]
fn test_parse_malformed_html() {
    // The tree builder closes the stray tags instead of failing
    let html = r#"
        <div>
            <p>Unclosed paragraph
            <span>Unclosed span
        </div>
        <p>Another paragraph without closing
    "#;

    let doc = parse_html(html);
    let paragraphs = doc.elements().filter(|n| n.tag() == Some("p")).count();
    assert_eq!(paragraphs, 2);
}

#[test]
fn test_whitespace_text_kept_for_deep_text() {
    let doc = parse_html("<p><span>Hello</span> <span>World</span></p>");
    let p = doc.find_element(|n| n.tag() == Some("p")).unwrap();
    assert_eq!(p.text(), "Hello World");
}

#[test]
fn test_textarea_and_select_text() {
    let doc = parse_html(
        r#"<textarea id="bio">  User biography text </textarea>
           <select id="pets"><option>Dog</option><option>Cat</option></select>"#,
    );
    assert_eq!(doc.get_element_by_id("bio").unwrap().text(), "User biography text");
    assert_eq!(doc.get_element_by_id("pets").unwrap().text(), "DogCat");
}

#[test]
fn test_table_fixup_inserts_tbody() {
    let doc = parse_html("<table role=grid><tr><td>cell</td></tr></table>");
    let td = doc.find_element(|n| n.tag() == Some("td")).unwrap();
    let table = td.closest_ancestor("table").unwrap();
    assert_eq!(table.attr("role"), Some("grid"));
    assert!(td.closest_ancestor("tbody").is_some());
}

#[test]
fn test_document_shared_across_threads() {
    let doc = parse_html(r#"<button id="a">One</button><button id="b">Two</button>"#);

    std::thread::scope(|s| {
        let first = s.spawn(|| doc.get_element_by_id("a").map(|n| n.text()));
        let second = s.spawn(|| doc.get_element_by_id("b").map(|n| n.text()));
        assert_eq!(first.join().unwrap().as_deref(), Some("One"));
        assert_eq!(second.join().unwrap().as_deref(), Some("Two"));
    });
}
