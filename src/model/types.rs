//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! fundamental domain concepts.

/// Which screen is showing
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Route {
    /// Catalog home with the testimonial carousel
    #[default]
    Home,
    /// Detail view for one theme (by slug)
    Theme(String),
    /// Static site page (about, blog, ...)
    Page(String),
}

impl Route {
    /// Path-style label for the header bar
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Theme(slug) | Route::Page(slug) => format!("/{}", slug),
        }
    }
}

/// Heading a palette entry is listed under
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteGroup {
    Themes,
    Pages,
    Pro,
}

impl PaletteGroup {
    pub fn as_str(&self) -> &str {
        match self {
            PaletteGroup::Themes => "Themes",
            PaletteGroup::Pages => "Pages",
            PaletteGroup::Pro => "Dracula PRO",
        }
    }
}

/// One selectable command palette row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    pub group: PaletteGroup,
    pub title: String,
    pub route: Route,
}

impl PaletteEntry {
    /// Entry navigating to a theme's detail view
    pub fn theme(slug: &str, title: &str) -> Self {
        Self {
            group: PaletteGroup::Themes,
            title: title.to_string(),
            route: Route::Theme(slug.to_string()),
        }
    }

    /// Entry navigating to a fixed route
    pub fn page(group: PaletteGroup, title: &str, route: Route) -> Self {
        Self {
            group,
            title: title.to_string(),
            route,
        }
    }
}

/// Site pages listed under "Pages" and "Dracula PRO", in display order
pub fn static_entries() -> Vec<PaletteEntry> {
    let page = |slug: &str| Route::Page(slug.to_string());

    vec![
        PaletteEntry::page(PaletteGroup::Pages, "Browse themes", Route::Home),
        PaletteEntry::page(PaletteGroup::Pages, "About", page("about")),
        PaletteEntry::page(PaletteGroup::Pages, "Blog", page("blog")),
        PaletteEntry::page(PaletteGroup::Pages, "Contribute", page("contribute")),
        PaletteEntry::page(PaletteGroup::Pages, "Shop", page("shop")),
        PaletteEntry::page(PaletteGroup::Pages, "Open", page("open")),
        PaletteEntry::page(PaletteGroup::Pro, "Dracula PRO", page("pro")),
        PaletteEntry::page(PaletteGroup::Pro, "Changelog", page("pro/changelog")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_path() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Theme("vim".to_string()).path(), "/vim");
        assert_eq!(Route::Page("pro/changelog".to_string()).path(), "/pro/changelog");
    }

    #[test]
    fn test_static_entries_have_no_themes() {
        assert!(static_entries()
            .iter()
            .all(|e| e.group != PaletteGroup::Themes));
    }
}
