//! Config fragment merging into `customBlocks.xml`
//!
//! This module handles:
//! - Loading the destination document, or starting a fresh one
//! - Parsing the fragment shipped next to the scripts
//! - Appending fragment items whose key is not present yet
//! - Writing the merged document back in one atomic step
//!
//! The destination is only rewritten after the whole fragment has been merged
//! in memory. A fragment that fails to parse leaves it untouched.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::document::{self, Element};
use crate::error::Result;
use crate::error::config::{document_parse_failed, fragment_parse_failed};
use crate::error::fs::{read_failed, write_failed};
use crate::layout::{CONFIG_ITEM, CONFIG_KEY, CONFIG_ROOT};

use super::file_ops::write_atomic;

/// What one merge call changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeSummary {
    /// Fragment items appended to the document
    pub added: usize,
    /// Fragment items whose key was already present
    pub skipped: usize,
    /// The document did not exist before this merge
    pub created: bool,
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| read_failed(path, e))
}

fn load_document(path: &Path) -> Result<(Element, bool)> {
    if !path.exists() {
        return Ok((Element::new(CONFIG_ROOT), true));
    }
    let content = read_text(path)?;
    let root = document::parse(&content)
        .map_err(|e| document_parse_failed(path.display().to_string(), e.to_string()))?;
    Ok((root, false))
}

fn item_key(item: &Element) -> Option<String> {
    item.attribute(CONFIG_KEY).map(str::to_string)
}

/// Append the items of `fragment` missing from `root`, by key
///
/// Existing items keep their position, new ones follow in fragment order. A key
/// repeated inside the fragment is admitted once. Items without a key share
/// the absent key, so at most one of them is kept.
pub fn merge_items(root: &mut Element, fragment: &Element) -> MergeSummary {
    let mut keys: HashSet<Option<String>> =
        root.child_elements(CONFIG_ITEM).map(item_key).collect();
    let mut summary = MergeSummary::default();

    for item in fragment.child_elements(CONFIG_ITEM) {
        if keys.insert(item_key(item)) {
            root.push_child(item.clone());
            summary.added += 1;
        } else {
            summary.skipped += 1;
        }
    }

    summary
}

/// Merge the fragment file into the config document at `document_path`
///
/// The document is written back even when nothing was added, so a well-formed
/// document with a declaration exists afterward.
pub fn merge_config(fragment_path: &Path, document_path: &Path) -> Result<MergeSummary> {
    let (mut root, created) = load_document(document_path)?;

    let fragment_content = read_text(fragment_path)?;
    let fragment = document::parse(&fragment_content)
        .map_err(|e| fragment_parse_failed(fragment_path.display().to_string(), e.to_string()))?;

    let mut summary = merge_items(&mut root, &fragment);
    summary.created = created;

    let xml = document::to_xml(&root).map_err(|e| write_failed(document_path, e))?;
    write_atomic(document_path, xml.as_bytes())?;

    tracing::debug!(
        "merged {} into {}: {} added, {} already present",
        fragment_path.display(),
        document_path.display(),
        summary.added,
        summary.skipped
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InstallerError;
    use tempfile::TempDir;

    fn keys_of(path: &Path) -> Vec<String> {
        let root = document::parse(&fs::read_to_string(path).unwrap()).unwrap();
        root.child_elements(CONFIG_ITEM)
            .map(|i| i.attribute(CONFIG_KEY).unwrap_or_default().to_string())
            .collect()
    }

    fn blocks(items: &[&str]) -> String {
        let mut xml = String::from("<CustomBlocks>");
        for key in items {
            xml.push_str(&format!(r#"<Item key="{key}"><Name>{key}</Name></Item>"#));
        }
        xml.push_str("</CustomBlocks>");
        xml
    }

    #[test]
    fn test_creates_document_when_absent() {
        let temp = TempDir::new().unwrap();
        let fragment = temp.path().join("c.xml");
        fs::write(&fragment, blocks(&["k1"])).unwrap();
        let doc = temp.path().join("user/settings/customBlocks.xml");

        let summary = merge_config(&fragment, &doc).unwrap();

        assert!(summary.created);
        assert_eq!(summary.added, 1);
        assert_eq!(keys_of(&doc), vec!["k1"]);
        let content = fs::read_to_string(&doc).unwrap();
        assert!(content.starts_with("<?xml"));
        assert!(content.contains("<CustomBlocks>"));
    }

    #[test]
    fn test_dedup_keeps_existing_then_new_in_order() {
        let temp = TempDir::new().unwrap();
        let doc = temp.path().join("customBlocks.xml");
        fs::write(&doc, blocks(&["A", "B"])).unwrap();
        let fragment = temp.path().join("c.xml");
        fs::write(&fragment, blocks(&["B", "C"])).unwrap();

        let summary = merge_config(&fragment, &doc).unwrap();

        assert_eq!(keys_of(&doc), vec!["A", "B", "C"]);
        assert_eq!(summary.added, 1);
        assert_eq!(summary.skipped, 1);
        assert!(!summary.created);
    }

    #[test]
    fn test_duplicate_keys_inside_fragment_admitted_once() {
        let temp = TempDir::new().unwrap();
        let doc = temp.path().join("customBlocks.xml");
        let fragment = temp.path().join("c.xml");
        fs::write(&fragment, blocks(&["X", "Y", "X"])).unwrap();

        merge_config(&fragment, &doc).unwrap();

        assert_eq!(keys_of(&doc), vec!["X", "Y"]);
    }

    #[test]
    fn test_merging_twice_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let doc = temp.path().join("customBlocks.xml");
        let fragment = temp.path().join("c.xml");
        fs::write(&fragment, blocks(&["k1", "k2"])).unwrap();

        merge_config(&fragment, &doc).unwrap();
        let first = fs::read_to_string(&doc).unwrap();
        let summary = merge_config(&fragment, &doc).unwrap();
        let second = fs::read_to_string(&doc).unwrap();

        assert_eq!(first, second);
        assert_eq!(summary.added, 0);
        assert_eq!(summary.skipped, 2);
    }

    #[test]
    fn test_empty_fragment_leaves_items_unchanged() {
        let temp = TempDir::new().unwrap();
        let doc = temp.path().join("customBlocks.xml");
        fs::write(
            &doc,
            r#"<?xml version='1.0' encoding='utf-8'?><CustomBlocks><Item key="A" /></CustomBlocks>"#,
        )
        .unwrap();
        let before = document::parse(&fs::read_to_string(&doc).unwrap()).unwrap();
        let fragment = temp.path().join("c.xml");
        fs::write(&fragment, "<CustomBlocks/>").unwrap();

        let summary = merge_config(&fragment, &doc).unwrap();

        let after = document::parse(&fs::read_to_string(&doc).unwrap()).unwrap();
        assert_eq!(before, after);
        assert_eq!(summary, MergeSummary::default());
    }

    #[test]
    fn test_empty_fragment_leaves_document_text_unchanged() {
        let temp = TempDir::new().unwrap();
        let doc = temp.path().join("customBlocks.xml");
        let original = concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<CustomBlocks>\n",
            "  <Item key=\"A\">\n",
            "    <Code>  x = 1;  </Code>\n",
            "  </Item>\n",
            "</CustomBlocks>\n",
        );
        fs::write(&doc, original).unwrap();
        let fragment = temp.path().join("empty.xml");
        fs::write(&fragment, "<CustomBlocks/>").unwrap();

        merge_config(&fragment, &doc).unwrap();

        assert_eq!(fs::read_to_string(&doc).unwrap(), original);
    }

    #[test]
    fn test_empty_fragment_still_creates_document() {
        let temp = TempDir::new().unwrap();
        let doc = temp.path().join("settings/customBlocks.xml");
        let fragment = temp.path().join("c.xml");
        fs::write(&fragment, "<CustomBlocks/>").unwrap();

        merge_config(&fragment, &doc).unwrap();

        let root = document::parse(&fs::read_to_string(&doc).unwrap()).unwrap();
        assert_eq!(root.name, CONFIG_ROOT);
        assert_eq!(root.child_elements(CONFIG_ITEM).count(), 0);
    }

    #[test]
    fn test_malformed_fragment_leaves_document_untouched() {
        let temp = TempDir::new().unwrap();
        let doc = temp.path().join("customBlocks.xml");
        let original = blocks(&["A"]);
        fs::write(&doc, &original).unwrap();
        let fragment = temp.path().join("c.xml");
        fs::write(&fragment, r#"<CustomBlocks><Item key="B">"#).unwrap();

        let err = merge_config(&fragment, &doc).unwrap_err();

        assert!(matches!(err, InstallerError::FragmentParseFailed { .. }));
        assert_eq!(fs::read_to_string(&doc).unwrap(), original);
    }

    #[test]
    fn test_malformed_fragment_does_not_create_document() {
        let temp = TempDir::new().unwrap();
        let doc = temp.path().join("customBlocks.xml");
        let fragment = temp.path().join("c.xml");
        fs::write(&fragment, "<<<").unwrap();

        assert!(merge_config(&fragment, &doc).is_err());
        assert!(!doc.exists());
    }

    #[test]
    fn test_malformed_document_is_never_overwritten() {
        let temp = TempDir::new().unwrap();
        let doc = temp.path().join("customBlocks.xml");
        fs::write(&doc, "<CustomBlocks><Item").unwrap();
        let fragment = temp.path().join("c.xml");
        fs::write(&fragment, blocks(&["A"])).unwrap();

        let err = merge_config(&fragment, &doc).unwrap_err();

        assert!(matches!(err, InstallerError::DocumentParseFailed { .. }));
        assert_eq!(fs::read_to_string(&doc).unwrap(), "<CustomBlocks><Item");
    }

    #[test]
    fn test_existing_root_name_is_kept() {
        let mut root = Element::new("Blocks").with_attribute("version", "2");
        let fragment = document::parse(&blocks(&["A"])).unwrap();

        merge_items(&mut root, &fragment);

        assert_eq!(root.name, "Blocks");
        assert_eq!(root.attribute("version"), Some("2"));
        assert_eq!(root.child_elements(CONFIG_ITEM).count(), 1);
    }

    #[test]
    fn test_keyless_items_admitted_once() {
        let mut root = Element::new(CONFIG_ROOT);
        let fragment =
            document::parse("<CustomBlocks><Item/><Item/><Other/></CustomBlocks>").unwrap();

        let summary = merge_items(&mut root, &fragment);

        assert_eq!(summary.added, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn test_merged_item_keeps_its_subtree() {
        let mut root = Element::new(CONFIG_ROOT);
        let fragment = document::parse(
            r#"<CustomBlocks><Item key="k"><Params><P name="period">14</P></Params></Item></CustomBlocks>"#,
        )
        .unwrap();

        merge_items(&mut root, &fragment);

        let item = root.child_elements(CONFIG_ITEM).next().unwrap();
        let params = item.child_elements("Params").next().unwrap();
        let p = params.child_elements("P").next().unwrap();
        assert_eq!(p.attribute("name"), Some("period"));
    }
}
