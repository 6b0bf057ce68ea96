use log::warn;
use roxmltree::{Document, Node};

use crate::ConfigError;

pub const ROOT_TAG: &str = "AlphaBlendingTool";
pub const LABEL_ATTR: &str = "description";
pub const ALPHA_ATTR: &str = "alphaValue";

/// One labelled blend coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct AlphaEntry {
    pub label: String,
    pub alpha: f64,
}

/// Parses an alpha table document.
///
/// Expected layout:
///
/// ```xml
/// <AlphaBlendingTool>
///   <Mode description="Mixed 0.3" alphaValue="0.3"/>
/// </AlphaBlendingTool>
/// ```
///
/// The child tag name is not checked. Children without both attributes, or
/// whose `alphaValue` is not a finite number, are logged and skipped; a
/// document in which every child is skipped is rejected with
/// [`ConfigError::NoValidEntries`]. Entries are returned in document order,
/// duplicates included.
pub fn parse_document(xml: &str) -> Result<Vec<AlphaEntry>, ConfigError> {
    let doc = Document::parse(xml).map_err(ConfigError::Xml)?;
    let root = doc.root_element();

    if root.tag_name().name() != ROOT_TAG {
        return Err(ConfigError::MissingRoot {
            found: root.tag_name().name().to_string(),
        });
    }

    let mut children = root.children().filter(Node::is_element).peekable();
    if children.peek().is_none() {
        return Err(ConfigError::EmptyRoot);
    }

    let mut skipped = 0;
    let entries: Vec<AlphaEntry> = children
        .enumerate()
        .filter_map(|(i, node)| {
            let entry = entry_from_node(i, node);
            if entry.is_none() {
                skipped += 1;
            }
            entry
        })
        .collect();

    if entries.is_empty() {
        return Err(ConfigError::NoValidEntries { skipped });
    }
    Ok(entries)
}

fn entry_from_node(index: usize, node: Node<'_, '_>) -> Option<AlphaEntry> {
    let tag = node.tag_name().name();

    let Some(label) = node.attribute(LABEL_ATTR) else {
        warn!("entry {index} <{tag}> has no `{LABEL_ATTR}` attribute, skipped");
        return None;
    };

    let Some(raw) = node.attribute(ALPHA_ATTR) else {
        warn!("entry {index} \"{label}\" has no `{ALPHA_ATTR}` attribute, skipped");
        return None;
    };

    match raw.trim().parse::<f64>() {
        Ok(alpha) if alpha.is_finite() => Some(AlphaEntry {
            label: label.to_string(),
            alpha,
        }),
        _ => {
            warn!("entry {index} \"{label}\" has invalid {ALPHA_ATTR}=\"{raw}\", skipped");
            None
        }
    }
}
