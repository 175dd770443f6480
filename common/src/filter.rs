use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use api::catalog::{Category, Project, Tech};

// tech tags that never filter by tag membership
//
// nothing in the catalog tags itself html or css, so those two select the web
// categories instead; git is on every project and only exists to be highlighted
const BRIDGE_TO_WEB: [&str; 2] = ["html", "css"];
const HIGHLIGHT_ONLY: &str = "git";

const WEB_CATEGORIES: [Category; 2] = [Category::Webapps, Category::Websites];

// the two filter dimensions shown above the carousel
//
// categories and a tech selection are mutually exclusive, except that html/css
// select the web categories alongside themselves
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FilterSelection {
    categories: BTreeSet<Category>,
    tech: Option<String>,
}

// what a selection change asks of the page
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FilterChange {
    pub scroll_to_catalog: bool,
}

impl FilterSelection {
    pub fn categories(&self) -> &BTreeSet<Category> {
        &self.categories
    }

    pub fn tech(&self) -> Option<&str> {
        self.tech.as_deref()
    }

    pub fn is_active(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.tech.is_none()
    }

    // a manual category click always drops the tech filter, bridging or not
    pub fn toggle_category(&mut self, category: Category) -> FilterChange {
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }

        if let Some(tech) = self.tech.take() {
            debug!(tech = %tech, category = %category, "category toggle cleared tech filter");
        }

        FilterChange::default()
    }

    // selecting the tech that is already selected turns it off
    pub fn set_tech_filter(&mut self, tech_id: Option<&str>) -> FilterChange {
        let previous = self.tech.clone();

        match tech_id {
            None => {
                self.tech = None;
            }
            Some(id) if previous.as_deref() == Some(id) => {
                self.tech = None;

                if BRIDGE_TO_WEB.contains(&id) {
                    self.categories.clear();
                }
            }
            Some(id) => {
                self.tech = Some(id.to_owned());

                self.categories.clear();

                if BRIDGE_TO_WEB.contains(&id) {
                    self.categories.extend(WEB_CATEGORIES);
                }
            }
        }

        FilterChange {
            scroll_to_catalog: self.tech.is_some() && self.tech != previous,
        }
    }

    // the tech id that actually narrows the catalog by tag, if any
    fn tag_filter(&self) -> Option<&str> {
        self.tech
            .as_deref()
            .filter(|id| !BRIDGE_TO_WEB.contains(id) && *id != HIGHLIGHT_ONLY)
    }
}

// derive the visible project list
//
// catalog order is kept and a project id appears at most once, whatever the catalog
// itself contains
pub fn filter_projects(catalog: &[Project], selection: &FilterSelection) -> Vec<Project> {
    let categories: Vec<Category> = selection.categories.iter().copied().collect();
    let tag = selection.tag_filter();

    let mut seen = HashSet::new();

    catalog
        .iter()
        .filter(|project| match tag {
            Some(tech) => project.has_tech(tech),
            None if categories.is_empty() => true,
            None => project.in_any(&categories),
        })
        .filter(|project| seen.insert(project.id))
        .cloned()
        .collect()
}

// the tech dropdown: case-insensitive substring match on the name or the id, sorted
// by display name
pub fn search_tech<'a>(stack: &'a [Tech], query: &str) -> Vec<&'a Tech> {
    let query = query.trim().to_lowercase();

    let mut matches: Vec<&Tech> = stack
        .iter()
        .filter(|tech| {
            query.is_empty()
                || tech.name.to_lowercase().contains(&query)
                || tech.id.to_lowercase().contains(&query)
        })
        .collect();

    matches.sort_by_key(|tech| tech.name.to_lowercase());
    matches
}
