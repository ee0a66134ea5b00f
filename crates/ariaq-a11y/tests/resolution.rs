//! Role, name and description resolution over parsed markup

use ariaq_a11y::{AriaRole, accessible_description, accessible_name, implicit_role};
use ariaq_html::parse_html;

#[test]
fn test_signup_form() {
    let doc = parse_html(
        r#"<form aria-labelledby="form-title">
             <h2 id="form-title">Create account</h2>
             <fieldset>
               <legend>Credentials</legend>
               <label for="user">Username</label>
               <input id="user" type="text" aria-describedby="user-hint">
               <span id="user-hint">Letters and digits only</span>
               <label>Password <input id="pass" type="password"></label>
             </fieldset>
             <input id="terms" type="checkbox" title="Accept terms">
             <button id="go">Sign up</button>
           </form>"#,
    );
    let node = |id: &str| doc.get_element_by_id(id).unwrap();
    let form = doc.find_element(|n| n.tag() == Some("form")).unwrap();
    let fieldset = doc.find_element(|n| n.tag() == Some("fieldset")).unwrap();

    assert_eq!(implicit_role(form), Some(AriaRole::Form));
    assert_eq!(accessible_name(form).as_deref(), Some("Create account"));

    assert_eq!(implicit_role(fieldset), Some(AriaRole::Group));
    assert_eq!(accessible_name(fieldset).as_deref(), Some("Credentials"));

    assert_eq!(implicit_role(node("user")), Some(AriaRole::TextBox));
    assert_eq!(accessible_name(node("user")).as_deref(), Some("Username"));
    assert_eq!(
        accessible_description(node("user")).as_deref(),
        Some("Letters and digits only")
    );

    // nested labels do not name controls
    assert_eq!(implicit_role(node("pass")), Some(AriaRole::TextBox));
    assert_eq!(accessible_name(node("pass")), None);

    assert_eq!(implicit_role(node("terms")), Some(AriaRole::Checkbox));
    assert_eq!(accessible_name(node("terms")).as_deref(), Some("Accept terms"));

    assert_eq!(implicit_role(node("go")), Some(AriaRole::Button));
    assert_eq!(accessible_name(node("go")).as_deref(), Some("Sign up"));
}

#[test]
fn test_page_landmarks() {
    let doc = parse_html(
        r#"<header id="top">Logo</header>
           <nav id="menu"><a id="home" href="/">Home</a><a id="stub">Soon</a></nav>
           <main id="content">
             <article id="post"><footer id="byline">By Ana</footer></article>
           </main>
           <footer id="site">Copyright</footer>"#,
    );
    let role = |id: &str| implicit_role(doc.get_element_by_id(id).unwrap());

    assert_eq!(role("top"), Some(AriaRole::Banner));
    assert_eq!(role("menu"), Some(AriaRole::Navigation));
    assert_eq!(role("home"), Some(AriaRole::Link));
    assert_eq!(role("stub"), Some(AriaRole::Generic));
    assert_eq!(role("content"), Some(AriaRole::Main));
    assert_eq!(role("post"), Some(AriaRole::Article));
    assert_eq!(role("byline"), Some(AriaRole::Generic));
    assert_eq!(role("site"), Some(AriaRole::ContentInfo));
}

#[test]
fn test_lone_cell_has_no_role() {
    // html5ever drops a stray <td> outside a table, so build the case by hand
    let mut tree = ariaq_dom::DomTree::new();
    let td = tree.create_element("td");
    tree.append_child(tree.root(), td);
    let doc = ariaq_dom::Document::from_tree(tree);

    let td = doc.find_element(|n| n.tag() == Some("td")).unwrap();
    assert_eq!(implicit_role(td), None);
}
