//! Figma API response types.
//!
//! Only the fields the sync pipeline reads are modeled; everything else in
//! the (large) file document is ignored during deserialization.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// File metadata from `GET /files/{file_id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    /// File name.
    #[serde(default)]
    pub name: String,
    /// Published components, in document order.
    #[serde(default, deserialize_with = "keyed_by_node_id")]
    pub components: Vec<Component>,
    /// Component sets (variant groups), in document order.
    #[serde(default, deserialize_with = "keyed_by_node_id")]
    pub component_sets: Vec<ComponentSet>,
    /// Shared styles, in document order.
    #[serde(default, deserialize_with = "keyed_by_node_id")]
    pub styles: Vec<Style>,
}

impl FileMetadata {
    /// Flatten components and component sets into listing entries.
    #[must_use]
    pub fn component_metadata(&self) -> Vec<ComponentMetadata> {
        let components = self.components.iter().map(|c| ComponentMetadata {
            id: c.id.clone(),
            name: c.name.clone(),
            description: c.description.clone(),
            kind: ComponentKind::Component,
            documentation_links: c.documentation_links.iter().map(|l| l.uri.clone()).collect(),
        });
        let sets = self.component_sets.iter().map(|s| ComponentMetadata {
            id: s.id.clone(),
            name: s.name.clone(),
            description: s.description.clone(),
            kind: ComponentKind::ComponentSet,
            documentation_links: s.documentation_links.iter().map(|l| l.uri.clone()).collect(),
        });
        components.chain(sets).collect()
    }

    /// Derive design tokens from the file's shared styles.
    ///
    /// Fill styles become colors (the description holds the value, `#000000`
    /// when empty) and text styles become typography entries. Tokens are
    /// named by [`token_name`]; a later style overwrites an earlier one with
    /// the same name.
    #[must_use]
    pub fn design_tokens(&self) -> DesignTokens {
        let mut tokens = DesignTokens::default();
        for style in &self.styles {
            let name = token_name(&style.name);
            match style.style_type {
                StyleType::Fill => {
                    let value = if style.description.is_empty() {
                        DEFAULT_COLOR.to_owned()
                    } else {
                        style.description.clone()
                    };
                    tokens.colors.insert(name, value);
                }
                StyleType::Text => {
                    tokens.typography.insert(
                        name,
                        TypographyToken {
                            description: style.description.clone(),
                        },
                    );
                }
                StyleType::Effect | StyleType::Grid | StyleType::Other => {}
            }
        }
        tokens
    }
}

/// Color used for fill styles without a description.
const DEFAULT_COLOR: &str = "#000000";

/// Token name for a style: lowercased, each whitespace run replaced by `-`.
#[must_use]
pub fn token_name(style_name: &str) -> String {
    let mut name = String::with_capacity(style_name.len());
    let mut in_whitespace = false;
    for c in style_name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                name.push('-');
            }
            in_whitespace = true;
        } else {
            name.push(c);
            in_whitespace = false;
        }
    }
    name
}

/// A published component.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Node id (the key of the `components` map).
    #[serde(skip)]
    pub id: String,
    /// Component key (stable across files).
    #[serde(default)]
    pub key: String,
    /// Component name.
    pub name: String,
    /// Component description.
    #[serde(default)]
    pub description: String,
    /// Owning component set, for variants.
    #[serde(default)]
    pub component_set_id: Option<String>,
    /// Documentation links.
    #[serde(default)]
    pub documentation_links: Vec<DocumentationLink>,
}

/// A component set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSet {
    /// Node id (the key of the `componentSets` map).
    #[serde(skip)]
    pub id: String,
    /// Component set key.
    #[serde(default)]
    pub key: String,
    /// Component set name.
    pub name: String,
    /// Component set description.
    #[serde(default)]
    pub description: String,
    /// Documentation links.
    #[serde(default)]
    pub documentation_links: Vec<DocumentationLink>,
}

/// Kind of a shared style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StyleType {
    /// Color or gradient fill.
    Fill,
    /// Text style.
    Text,
    /// Shadow or blur.
    Effect,
    /// Layout grid.
    Grid,
    /// Anything newer than this client knows about.
    #[default]
    #[serde(other)]
    Other,
}

/// A shared style.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    /// Node id (the key of the `styles` map).
    #[serde(skip)]
    pub id: String,
    /// Style key.
    #[serde(default)]
    pub key: String,
    /// Style name, e.g. `Primary Blue`.
    pub name: String,
    /// Style description.
    #[serde(default)]
    pub description: String,
    /// Style kind.
    #[serde(default)]
    pub style_type: StyleType,
}

/// Design tokens derived from shared styles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DesignTokens {
    /// Color token name to value.
    pub colors: BTreeMap<String, String>,
    /// Typography token name to details.
    pub typography: BTreeMap<String, TypographyToken>,
    /// Spacing tokens. Figma styles carry no spacing, so this stays empty.
    pub spacing: BTreeMap<String, String>,
}

/// Typography token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypographyToken {
    /// Style description.
    pub description: String,
}

/// Documentation link attached to a component.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentationLink {
    /// Link target.
    pub uri: String,
}

/// Response of `GET /images/{file_id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImagesResponse {
    /// Error message reported by the renderer, if any.
    #[serde(default)]
    pub err: Option<String>,
    /// Rendered image URL per requested node id (`None` if rendering failed).
    #[serde(default)]
    pub images: HashMap<String, Option<String>>,
}

impl ImagesResponse {
    /// Non-empty image URL rendered for `node_id`.
    #[must_use]
    pub fn url_for(&self, node_id: &str) -> Option<&str> {
        self.images
            .get(node_id)
            .and_then(Option::as_deref)
            .filter(|url| !url.is_empty())
    }
}

/// Kind of a [`ComponentMetadata`] entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    /// Single component.
    Component,
    /// Component set (variants).
    ComponentSet,
}

/// Component listing entry for documentation pages.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    /// Node id.
    pub id: String,
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Component or component set.
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    /// Documentation link targets.
    pub documentation_links: Vec<String>,
}

/// Types stored in a map keyed by node id.
trait NodeKeyed {
    fn set_id(&mut self, id: String);
}

impl NodeKeyed for Component {
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl NodeKeyed for ComponentSet {
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl NodeKeyed for Style {
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Deserialize a `{node_id: value}` map into a `Vec`, keeping document order
/// and moving each key into the value.
fn keyed_by_node_id<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + NodeKeyed,
{
    struct KeyedVisitor<T>(PhantomData<T>);

    impl<'de, T> Visitor<'de> for KeyedVisitor<T>
    where
        T: Deserialize<'de> + NodeKeyed,
    {
        type Value = Vec<T>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map keyed by node id")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut items = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((id, mut item)) = map.next_entry::<String, T>()? {
                item.set_id(id);
                items.push(item);
            }
            Ok(items)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(KeyedVisitor(PhantomData))
}
