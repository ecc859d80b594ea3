//! Navigation tree data model.
//!
//! A tree is exactly two levels deep: root items are either links or
//! dropdowns, and a dropdown's children are always links. The loose wire form
//! (`{id, label, href?, type?, children?}`) is validated into the typed form
//! once, at construction time, so nothing downstream ever has to branch on a
//! malformed item.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifier of a navigation item (active/open-state key).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavId(String);

impl NavId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NavId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NavId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl PartialEq<str> for NavId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NavId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Configuration errors in a navigation tree. Raised while building a
/// [`NavTree`], never at click time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("navigation item has an empty id")]
    EmptyId,
    #[error("navigation item `{0}` has an empty label")]
    EmptyLabel(String),
    #[error("navigation id `{0}` is used more than once")]
    DuplicateId(String),
    #[error("navigation item `{0}` has neither href nor children")]
    MissingTarget(String),
    #[error("dropdown `{0}` must not have an href")]
    DropdownWithHref(String),
    #[error("dropdown `{0}` has no children")]
    EmptyDropdown(String),
    #[error("link `{0}` must not have children")]
    LinkWithChildren(String),
    #[error("link `{0}` has an empty href")]
    EmptyHref(String),
    #[error("child `{0}` cannot have children of its own")]
    TooDeep(String),
    #[error("invalid navigation JSON: {0}")]
    Json(String),
}

/// A leaf destination. Dropdown children are always links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub id: NavId,
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(id: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            id: NavId::new(id),
            label: label.into(),
            href: href.into(),
        }
    }
}

/// What a root item does when activated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavKind {
    Link { href: String },
    Dropdown { children: Vec<NavLink> },
}

/// Root navigation item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub id: NavId,
    pub label: String,
    pub kind: NavKind,
}

impl NavItem {
    pub fn link(id: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            id: NavId::new(id),
            label: label.into(),
            kind: NavKind::Link { href: href.into() },
        }
    }

    pub fn dropdown(
        id: impl Into<String>,
        label: impl Into<String>,
        children: Vec<NavLink>,
    ) -> Self {
        Self {
            id: NavId::new(id),
            label: label.into(),
            kind: NavKind::Dropdown { children },
        }
    }

    pub fn is_dropdown(&self) -> bool {
        matches!(self.kind, NavKind::Dropdown { .. })
    }

    pub fn href(&self) -> Option<&str> {
        match &self.kind {
            NavKind::Link { href } => Some(href),
            NavKind::Dropdown { .. } => None,
        }
    }

    /// Children in declaration order (empty for links).
    pub fn children(&self) -> &[NavLink] {
        match &self.kind {
            NavKind::Link { .. } => &[],
            NavKind::Dropdown { children } => children,
        }
    }
}

// =============================================================================
// Wire form
// =============================================================================

/// Declared item type in the wire form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavItemType {
    Link,
    Dropdown,
}

/// Loose, serializable form of a navigation item as it appears in config
/// files and on `/api/nav`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItemSpec {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<NavItemType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavItemSpec>>,
}

impl NavItemSpec {
    /// Resolve the declared type; without one, children imply a dropdown.
    fn resolved_type(&self) -> Result<NavItemType, NavError> {
        if let Some(t) = self.item_type {
            return Ok(t);
        }
        match (&self.href, &self.children) {
            (None, None) => Err(NavError::MissingTarget(self.id.clone())),
            (_, Some(_)) => Ok(NavItemType::Dropdown),
            (Some(_), None) => Ok(NavItemType::Link),
        }
    }

    fn into_link(self) -> Result<NavLink, NavError> {
        check_labelled(&self.id, &self.label)?;
        if self.children.is_some() {
            return Err(match self.item_type {
                Some(NavItemType::Link) => NavError::LinkWithChildren(self.id),
                _ => NavError::TooDeep(self.id),
            });
        }
        if self.item_type == Some(NavItemType::Dropdown) {
            return Err(NavError::TooDeep(self.id));
        }
        let href = self.href.ok_or_else(|| NavError::MissingTarget(self.id.clone()))?;
        if href.trim().is_empty() {
            return Err(NavError::EmptyHref(self.id));
        }
        Ok(NavLink {
            id: NavId(self.id),
            label: self.label,
            href,
        })
    }

    fn into_item(self) -> Result<NavItem, NavError> {
        check_labelled(&self.id, &self.label)?;
        match self.resolved_type()? {
            NavItemType::Link => {
                if self.children.is_some() {
                    return Err(NavError::LinkWithChildren(self.id));
                }
                let href = self.href.ok_or_else(|| NavError::MissingTarget(self.id.clone()))?;
                if href.trim().is_empty() {
                    return Err(NavError::EmptyHref(self.id));
                }
                Ok(NavItem {
                    id: NavId(self.id),
                    label: self.label,
                    kind: NavKind::Link { href },
                })
            }
            NavItemType::Dropdown => {
                if self.href.is_some() {
                    return Err(NavError::DropdownWithHref(self.id));
                }
                let children = match self.children {
                    Some(children) if !children.is_empty() => children,
                    _ => return Err(NavError::EmptyDropdown(self.id)),
                };
                let children = children
                    .into_iter()
                    .map(NavItemSpec::into_link)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(NavItem {
                    id: NavId(self.id),
                    label: self.label,
                    kind: NavKind::Dropdown { children },
                })
            }
        }
    }
}

fn check_labelled(id: &str, label: &str) -> Result<(), NavError> {
    if id.trim().is_empty() {
        return Err(NavError::EmptyId);
    }
    if label.trim().is_empty() {
        return Err(NavError::EmptyLabel(id.to_string()));
    }
    Ok(())
}

impl From<&NavLink> for NavItemSpec {
    fn from(link: &NavLink) -> Self {
        Self {
            id: link.id.to_string(),
            label: link.label.clone(),
            href: Some(link.href.clone()),
            item_type: Some(NavItemType::Link),
            children: None,
        }
    }
}

impl From<&NavItem> for NavItemSpec {
    fn from(item: &NavItem) -> Self {
        match &item.kind {
            NavKind::Link { href } => Self {
                id: item.id.to_string(),
                label: item.label.clone(),
                href: Some(href.clone()),
                item_type: Some(NavItemType::Link),
                children: None,
            },
            NavKind::Dropdown { children } => Self {
                id: item.id.to_string(),
                label: item.label.clone(),
                href: None,
                item_type: Some(NavItemType::Dropdown),
                children: Some(children.iter().map(NavItemSpec::from).collect()),
            },
        }
    }
}

// =============================================================================
// NavTree
// =============================================================================

/// A validated, ordered navigation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavTree {
    items: Vec<NavItem>,
}

impl NavTree {
    /// Validate typed items: non-empty fields and globally unique ids.
    pub fn new(items: Vec<NavItem>) -> Result<Self, NavError> {
        let mut seen = HashSet::new();
        for item in &items {
            check_labelled(item.id.as_str(), &item.label)?;
            if !seen.insert(item.id.as_str()) {
                return Err(NavError::DuplicateId(item.id.to_string()));
            }
            match &item.kind {
                NavKind::Link { href } if href.trim().is_empty() => {
                    return Err(NavError::EmptyHref(item.id.to_string()));
                }
                NavKind::Link { .. } => {}
                NavKind::Dropdown { children } => {
                    if children.is_empty() {
                        return Err(NavError::EmptyDropdown(item.id.to_string()));
                    }
                    for child in children {
                        check_labelled(child.id.as_str(), &child.label)?;
                        if child.href.trim().is_empty() {
                            return Err(NavError::EmptyHref(child.id.to_string()));
                        }
                        if !seen.insert(child.id.as_str()) {
                            return Err(NavError::DuplicateId(child.id.to_string()));
                        }
                    }
                }
            }
        }
        Ok(Self { items })
    }

    /// Build from the loose wire form.
    pub fn from_specs(specs: Vec<NavItemSpec>) -> Result<Self, NavError> {
        let items = specs
            .into_iter()
            .map(NavItemSpec::into_item)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(items)
    }

    pub fn from_json(json: &str) -> Result<Self, NavError> {
        let specs: Vec<NavItemSpec> =
            serde_json::from_str(json).map_err(|e| NavError::Json(e.to_string()))?;
        Self::from_specs(specs)
    }

    pub fn to_specs(&self) -> Vec<NavItemSpec> {
        self.items.iter().map(NavItemSpec::from).collect()
    }

    /// Default Zypp navigation.
    pub fn zypp_default() -> Self {
        let about = ["who-we-are", "technologies", "esg", "press", "environment"]
            .iter()
            .zip(["Who We Are", "Technologies", "ESG", "Press", "Environment"])
            .map(|(id, label)| NavLink::new(*id, label, format!("/about/{id}")))
            .collect();

        Self {
            items: vec![
                NavItem::dropdown("about-zypp", "About Zypp", about),
                NavItem::link("delivery-partner", "Delivery Partner", "/delivery-partner"),
                NavItem::link("services", "Services", "/services"),
                NavItem::link("franchise", "Franchise", "/franchise"),
                NavItem::link("advertise", "Advertise", "/advertise"),
            ],
        }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NavItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Root item by id.
    pub fn get(&self, id: &str) -> Option<&NavItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Child link by id, together with its parent dropdown.
    pub fn find_child(&self, id: &str) -> Option<(&NavItem, &NavLink)> {
        self.items.iter().find_map(|item| {
            item.children()
                .iter()
                .find(|child| child.id == id)
                .map(|child| (item, child))
        })
    }
}

impl Serialize for NavTree {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_specs().serialize(serializer)
    }
}

impl<'a> IntoIterator for &'a NavTree {
    type Item = &'a NavItem;
    type IntoIter = std::slice::Iter<'a, NavItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
