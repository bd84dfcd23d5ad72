//! In-memory notebook: categories hold named pages, pages hold elements.
//!
//! The notebook is the [`ElementStore`] a canvas usually runs on. It exposes
//! the element list of the active page only, and hands out ids from a
//! counter shared by every page so ids never collide across a page switch.

use crate::geometry::Rect;
use crate::host::{ElementStore, IdAllocator};
use crate::types::{Element, ElementId};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const PAGE_PREFIX: &str = "Page";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    School,
    Work,
    Todos,
    Dump,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::School,
        Category::Work,
        Category::Todos,
        Category::Dump,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Category::School => "school",
            Category::Work => "work",
            Category::Todos => "todos",
            Category::Dump => "dump",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub name: String,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Page {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
        }
    }

    /// The `N` of a `PageN` name.
    fn number(&self) -> Option<u32> {
        self.name.strip_prefix(PAGE_PREFIX)?.parse().ok()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct CategoryPages {
    category: Category,
    pages: Vec<Page>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    categories: Vec<CategoryPages>,
    active_category: Category,
    active_page: String,
    next_element_id: u64,
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new()
    }
}

impl Notebook {
    /// Every category with a single empty `Page1`, `work` active.
    pub fn new() -> Self {
        Self {
            categories: Category::ALL
                .into_iter()
                .map(|category| CategoryPages {
                    category,
                    pages: vec![Page::new(format!("{PAGE_PREFIX}1"))],
                })
                .collect(),
            active_category: Category::Work,
            active_page: format!("{PAGE_PREFIX}1"),
            next_element_id: 1,
        }
    }

    /// Notebook with a heading on each starter page.
    pub fn with_sample_pages() -> Self {
        let mut notebook = Self::new();
        let samples: [(Category, &str, &str, Rect); 6] = [
            (Category::School, "Page1", "School Notes - Page 1", Rect::new(100.0, 100.0, 300.0, 60.0)),
            (Category::School, "Page2", "School Notes - Page 2", Rect::new(150.0, 150.0, 300.0, 60.0)),
            (Category::Work, "Page1", "Work Notes - Page 1", Rect::new(100.0, 100.0, 450.0, 80.0)),
            (Category::Work, "Page2", "Work Notes - Page 2", Rect::new(200.0, 200.0, 350.0, 60.0)),
            (Category::Todos, "Page1", "Todo List - Page 1", Rect::new(100.0, 100.0, 300.0, 60.0)),
            (Category::Dump, "Page1", "Random Ideas - Page 1", Rect::new(100.0, 100.0, 300.0, 60.0)),
        ];

        for (category, page_name, content, rect) in samples {
            let id = notebook.next_element_id();
            let pages = notebook.pages_mut(category);
            let index = match pages.iter().position(|p| p.name == page_name) {
                Some(index) => index,
                None => {
                    pages.push(Page::new(page_name));
                    pages.len() - 1
                }
            };
            pages[index].elements.push(Element::text(id, content, rect));
        }
        notebook
    }

    pub fn active_category(&self) -> Category {
        self.active_category
    }

    pub fn active_page(&self) -> &str {
        &self.active_page
    }

    /// Display path of the active page, e.g. `/work/Page1...`.
    pub fn current_path(&self) -> String {
        format!("/{}/{}...", self.active_category.id(), self.active_page)
    }

    /// Page names of the active category, in creation order.
    pub fn available_pages(&self) -> Vec<&str> {
        self.pages(self.active_category)
            .iter()
            .map(|p| p.name.as_str())
            .collect()
    }

    pub fn page(&self, category: Category, name: &str) -> Option<&Page> {
        self.pages(category).iter().find(|p| p.name == name)
    }

    /// Switch category and open its first page.
    pub fn set_active_category(&mut self, category: Category) {
        self.active_category = category;
        if let Some(first) = self.pages(category).first() {
            self.active_page = first.name.clone();
        }
        debug!(category = category.id(), page = %self.active_page, "Switched category");
    }

    /// Open a page of the active category. Returns `false` if it does not exist.
    pub fn set_active_page(&mut self, name: &str) -> bool {
        if self.page(self.active_category, name).is_none() {
            return false;
        }
        self.active_page = name.to_string();
        true
    }

    /// Append `PageN` (one past the highest existing number) to the active
    /// category and open it.
    pub fn add_page(&mut self) -> String {
        let next = self
            .pages(self.active_category)
            .iter()
            .filter_map(Page::number)
            .max()
            .unwrap_or(0)
            + 1;
        let name = format!("{PAGE_PREFIX}{next}");
        self.pages_mut(self.active_category).push(Page::new(name.clone()));
        self.active_page = name.clone();
        debug!(category = self.active_category.id(), page = %name, "Added page");
        name
    }

    /// Remove a page of the active category.
    ///
    /// The last page of a category is never removed. If the active page is
    /// deleted, the first remaining page becomes active.
    pub fn delete_page(&mut self, name: &str) -> bool {
        let category = self.active_category;
        let pages = self.pages_mut(category);
        if pages.len() <= 1 {
            debug!(page = name, "Refusing to delete the last page");
            return false;
        }
        let Some(index) = pages.iter().position(|p| p.name == name) else {
            return false;
        };
        pages.remove(index);
        let first = pages.first().map(|p| p.name.clone());

        if self.active_page == name {
            if let Some(first) = first {
                self.active_page = first;
            }
        }
        debug!(category = category.id(), page = name, "Deleted page");
        true
    }

    fn pages(&self, category: Category) -> &[Page] {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.pages.as_slice())
            .unwrap_or(&[])
    }

    fn pages_mut(&mut self, category: Category) -> &mut Vec<Page> {
        let index = match self.categories.iter().position(|c| c.category == category) {
            Some(index) => index,
            None => {
                self.categories.push(CategoryPages {
                    category,
                    pages: Vec::new(),
                });
                self.categories.len() - 1
            }
        };
        &mut self.categories[index].pages
    }

    fn active_page_mut(&mut self) -> Option<&mut Page> {
        let name = self.active_page.clone();
        self.pages_mut(self.active_category)
            .iter_mut()
            .find(|p| p.name == name)
    }
}

impl ElementStore for Notebook {
    fn elements(&self) -> &[Element] {
        self.page(self.active_category, &self.active_page)
            .map(|p| p.elements.as_slice())
            .unwrap_or(&[])
    }

    fn set_elements(&mut self, elements: Vec<Element>) {
        match self.active_page_mut() {
            Some(page) => page.elements = elements,
            None => warn!(page = %self.active_page, "No active page to write elements to"),
        }
    }
}

impl IdAllocator for Notebook {
    fn next_element_id(&mut self) -> ElementId {
        let id = ElementId(self.next_element_id);
        self.next_element_id += 1;
        id
    }
}
