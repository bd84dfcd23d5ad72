//! Notebook categories, pages and element storage.

use notus::geometry::Rect;
use notus::host::{ElementStore, IdAllocator};
use notus::notebook::{Category, Notebook};
use notus::types::{Element, ElementId};

#[test]
fn test_new_notebook_has_one_page_per_category() {
    let mut notebook = Notebook::new();
    for category in Category::ALL {
        notebook.set_active_category(category);
        assert_eq!(notebook.available_pages(), vec!["Page1"]);
        assert!(notebook.elements().is_empty());
    }
}

#[test]
fn test_sample_pages_layout() {
    let mut notebook = Notebook::with_sample_pages();
    assert_eq!(notebook.current_path(), "/work/Page1...");
    assert_eq!(notebook.available_pages(), vec!["Page1", "Page2"]);

    notebook.set_active_category(Category::School);
    let heading = &notebook.elements()[0];
    assert_eq!(heading.id, ElementId(1));
    assert_eq!(heading.text_content(), Some("School Notes - Page 1"));
}

#[test]
fn test_set_elements_writes_only_active_page() {
    let mut notebook = Notebook::with_sample_pages();
    let id = notebook.next_element_id();
    let mut elements = notebook.elements().to_vec();
    elements.push(Element::text(id, "Added", Rect::new(0.0, 0.0, 100.0, 100.0)));
    notebook.set_elements(elements);

    assert_eq!(notebook.elements().len(), 2);
    let page2 = notebook.page(Category::Work, "Page2").unwrap();
    assert_eq!(page2.elements.len(), 1);
}

#[test]
fn test_add_page_after_gap_uses_highest_number() {
    let mut notebook = Notebook::new();
    notebook.add_page();
    notebook.add_page();
    assert!(notebook.delete_page("Page2"));
    assert_eq!(notebook.add_page(), "Page4");
    assert_eq!(notebook.available_pages(), vec!["Page1", "Page3", "Page4"]);
}

#[test]
fn test_delete_inactive_page_keeps_active() {
    let mut notebook = Notebook::new();
    notebook.add_page();
    assert_eq!(notebook.active_page(), "Page2");
    assert!(notebook.delete_page("Page1"));
    assert_eq!(notebook.active_page(), "Page2");
    assert!(!notebook.delete_page("Page2"));
}

#[test]
fn test_unknown_page_is_rejected() {
    let mut notebook = Notebook::new();
    assert!(!notebook.set_active_page("Page9"));
    notebook.add_page();
    assert!(!notebook.delete_page("Page9"));
    assert_eq!(notebook.active_page(), "Page2");
}

#[test]
fn test_notebook_serializes_pages() {
    let notebook = Notebook::with_sample_pages();
    let json = serde_json::to_string(&notebook).unwrap();
    let restored: Notebook = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, notebook);
}
