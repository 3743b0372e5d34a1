//! Faceted filtering of the nature list shown on a category page.
//!
//! Within one facet group the selected options OR together; across groups
//! they AND. Matching rules come from the group's [`FacetKind`], never from
//! its title.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::category::{FacetGroup, FacetKind};
use crate::domain::nature::Nature;

/// Selected options keyed by facet group title.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FacetSelection {
    selected: BTreeMap<String, Vec<String>>,
}

impl FacetSelection {
    /// Parses repeated `title:option` query values, keeping only options the
    /// configured groups offer.
    pub fn parse<'a>(raw: impl IntoIterator<Item = &'a str>, groups: &[FacetGroup]) -> Self {
        let mut selection = Self::default();
        for value in raw {
            let Some((title, option)) = value.split_once(':') else {
                continue;
            };
            let Some(group) = groups.iter().find(|group| group.title == title.trim()) else {
                continue;
            };
            if let Some(option) = group.options.iter().find(|o| o.as_str() == option.trim()) {
                selection.toggle(&group.title, option);
            }
        }
        selection
    }

    /// Adds the option when absent, removes it when present.
    pub fn toggle(&mut self, title: &str, option: &str) {
        let options = self.selected.entry(title.to_string()).or_default();
        if let Some(position) = options.iter().position(|o| o == option) {
            options.remove(position);
        } else {
            options.push(option.to_string());
        }
        if options.is_empty() {
            self.selected.remove(title);
        }
    }

    pub fn is_selected(&self, title: &str, option: &str) -> bool {
        self.selected
            .get(title)
            .is_some_and(|options| options.iter().any(|o| o == option))
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Copy of this selection with one option toggled.
    pub fn toggled(&self, title: &str, option: &str) -> Self {
        let mut selection = self.clone();
        selection.toggle(title, option);
        selection
    }

    /// Encodes the selection as repeated `facet=title:option` pairs.
    pub fn to_query(&self) -> String {
        let pairs: Vec<(&str, String)> = self
            .selected
            .iter()
            .flat_map(|(title, options)| {
                options
                    .iter()
                    .map(move |option| ("facet", format!("{title}:{option}")))
            })
            .collect();
        serde_html_form::to_string(&pairs).unwrap_or_default()
    }

    fn matches(&self, nature: &Nature, groups: &[FacetGroup]) -> bool {
        self.selected.iter().all(|(title, options)| {
            let Some(group) = groups.iter().find(|group| &group.title == title) else {
                return true;
            };
            match group.kind {
                FacetKind::Name => options
                    .iter()
                    .any(|option| option.eq_ignore_ascii_case(nature.name.trim())),
                FacetKind::Application => options.iter().any(|option| {
                    nature
                        .applications
                        .iter()
                        .any(|application| application.trim().eq_ignore_ascii_case(option))
                }),
                FacetKind::Label => true,
            }
        })
    }

    /// Natures that satisfy every selected group, in their original order.
    pub fn apply<'a>(&self, natures: &'a [Nature], groups: &[FacetGroup]) -> Vec<&'a Nature> {
        natures
            .iter()
            .filter(|nature| self.matches(nature, groups))
            .collect()
    }
}
