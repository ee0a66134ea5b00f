//! Screen and Config tests

mod common;

use ariaq::{Config, QueryError, RoleQuery, Screen, parse_html};

#[test]
fn test_default_config_is_exact() -> anyhow::Result<()> {
    common::init_tracing();
    let doc = parse_html(r#"<label for="q">Search term</label><input id="q"><p>Results</p>"#);
    let screen = Screen::new(&doc);

    assert!(screen.config().exact);
    assert_eq!(screen.get_by_label_text("Search term")?.tag(), "input");
    assert!(screen.query_by_label_text("search")?.is_none());
    assert!(screen.query_by_text("results")?.is_none());
    Ok(())
}

#[test]
fn test_substring_config() -> anyhow::Result<()> {
    let doc = parse_html(r#"<label for="q">Search term</label><input id="q"><p>Results</p>"#);
    let screen = Screen::with_config(&doc, Config { exact: false });

    assert_eq!(screen.get_by_label_text("search")?.attribute("id"), Some("q"));
    assert_eq!(screen.get_by_text("RESULT")?.tag(), "p");
    Ok(())
}

#[test]
fn test_role_methods() -> anyhow::Result<()> {
    let doc = parse_html(r#"<nav><a href="/" aria-current="page">Home</a><a href="/x">X</a></nav>"#);
    let screen = Screen::new(&doc);

    assert_eq!(screen.get_by_role("navigation")?.tag(), "nav");
    assert_eq!(screen.get_by_role(RoleQuery::new("link").current("page"))?.text(), "Home");
    assert!(screen.query_by_role("button")?.is_none());
    assert_eq!(screen.query_all_by_role("link").len(), 2);
    assert_eq!(screen.get_all_by_role("link")?.len(), 2);
    assert!(matches!(
        screen.get_all_by_role("button"),
        Err(QueryError::NoElementsFound { .. })
    ));
    assert!(matches!(
        screen.get_by_role("link"),
        Err(QueryError::MultipleElementsFound { count: 2, .. })
    ));
    Ok(())
}

#[test]
fn test_config_serde() -> anyhow::Result<()> {
    let config: Config = serde_json::from_str("{}")?;
    assert_eq!(config, Config::default());

    let config: Config = serde_json::from_str(r#"{"exact": false}"#)?;
    assert!(!config.exact);
    assert_eq!(serde_json::to_string(&config)?, r#"{"exact":false}"#);
    Ok(())
}
