use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A reference to another API resource, the way Omeka embeds them
/// (`{"id": 7, "url": "...", "name": "Document"}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// The `files` summary embedded in an item record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilesRef {
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// One metadata assertion on an item: an element within an element set,
/// with its text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementText {
    #[serde(default)]
    pub html: bool,
    pub text: String,
    pub element_set: ResourceRef,
    pub element: ResourceRef,
}

/// An item record as the `items` endpoints return it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub added: Option<String>,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub item_type: Option<ResourceRef>,
    #[serde(default)]
    pub collection: Option<ResourceRef>,
    #[serde(default)]
    pub files: Option<FilesRef>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub element_texts: Vec<ElementText>,
}

/// The analysis-relevant projection of an [`Item`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemSummary {
    pub id: i64,
    pub item_type_id: Option<i64>,
    pub item_type_name: Option<String>,
    pub files_count: Option<i64>,
    pub tags: Vec<Tag>,
    pub element_texts: Vec<ElementText>,
}

impl From<&Item> for ItemSummary {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            item_type_id: item.item_type.as_ref().map(|item_type| item_type.id),
            item_type_name: item
                .item_type
                .as_ref()
                .and_then(|item_type| item_type.name.clone()),
            files_count: item.files.as_ref().and_then(|files| files.count),
            tags: item.tags.clone(),
            element_texts: item.element_texts.clone(),
        }
    }
}

impl ItemSummary {
    /// Element-name → text view of the metadata, the shape the date
    /// standardizer consumes. Repeated elements concatenate their texts so
    /// every date-bearing fragment stays visible to extraction.
    pub fn element_text_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        for element_text in &self.element_texts {
            let Some(name) = element_text.element.name.as_deref() else {
                continue;
            };
            match fields.get_mut(name) {
                Some(Value::String(existing)) => {
                    existing.push('\n');
                    existing.push_str(&element_text.text);
                }
                _ => {
                    fields.insert(name.to_string(), Value::String(element_text.text.clone()));
                }
            }
        }
        fields
    }
}

/// An element definition, fetched from the `elements` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub element_set: Option<ResourceRef>,
}

/// An element-set definition, fetched from the `element_sets` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSet {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// The four derivative URLs Omeka stores per file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileUrls {
    #[serde(default)]
    pub original: Option<String>,
    #[serde(default)]
    pub fullsize: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub square_thumbnail: Option<String>,
}

/// A file record as the `files` endpoint returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: i64,
    #[serde(default)]
    pub original_filename: Option<String>,
    #[serde(default)]
    pub item: Option<ResourceRef>,
    #[serde(default)]
    pub file_urls: FileUrls,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExhibitPage {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub page_blocks: Vec<PageBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageBlock {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default)]
    pub item: Option<ResourceRef>,
    #[serde(default)]
    pub file: Option<ResourceRef>,
    #[serde(default)]
    pub caption: Option<String>,
}

/// The id of the first item attached anywhere in an exhibition's pages.
/// `None` for exhibits with no attachments at all.
pub fn first_exhibit_item(pages: &[ExhibitPage]) -> Option<i64> {
    pages
        .iter()
        .flat_map(|page| &page.page_blocks)
        .flat_map(|block| &block.attachments)
        .find_map(|attachment| attachment.item.as_ref().map(|item| item.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_suite::{sample_item, sample_item_json};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    fn test_item_deserializes_from_api_json() {
        let item: Item = serde_json::from_str(sample_item_json()).unwrap();

        assert_eq!(item.id, 12);
        assert!(item.public);
        assert_eq!(
            item.item_type.as_ref().and_then(|t| t.name.as_deref()),
            Some("Document")
        );
        assert_eq!(item.files.as_ref().and_then(|f| f.count), Some(2));
        assert_eq!(item.tags.len(), 2);
        assert_eq!(item.element_texts.len(), 3);
    }

    #[rstest]
    fn test_item_summary_projects_the_analysis_fields() {
        let summary = ItemSummary::from(&sample_item());

        assert_eq!(summary.id, 12);
        assert_eq!(summary.item_type_id, Some(7));
        assert_eq!(summary.item_type_name, Some("Document".to_string()));
        assert_eq!(summary.files_count, Some(2));
        assert_eq!(summary.tags[0].name, "letters");
    }

    #[rstest]
    fn test_summary_of_item_without_type_or_files_is_null_padded() {
        let item: Item = serde_json::from_value(json!({"id": 99})).unwrap();

        let summary = ItemSummary::from(&item);

        assert_eq!(summary.item_type_id, None);
        assert_eq!(summary.item_type_name, None);
        assert_eq!(summary.files_count, None);
        assert!(summary.tags.is_empty());
    }

    #[rstest]
    fn test_element_text_fields_concatenates_repeated_elements() {
        let summary = ItemSummary::from(&sample_item());

        let fields = summary.element_text_fields();

        assert_eq!(
            fields.get("Title"),
            Some(&Value::String("Letter from the front".to_string()))
        );
        // The sample item carries two Date assertions.
        assert_eq!(
            fields.get("Date"),
            Some(&Value::String("circa 1945\n[10.04.1945]".to_string()))
        );
    }

    #[rstest]
    fn test_first_exhibit_item_scans_past_empty_blocks() {
        let pages: Vec<ExhibitPage> = serde_json::from_value(json!([
            {"id": 1, "title": "Intro", "page_blocks": [{"id": 10, "attachments": []}]},
            {"id": 2, "page_blocks": [
                {"id": 11, "attachments": [{"caption": "map, no item"}]},
                {"id": 12, "attachments": [{"item": {"id": 77}}]}
            ]}
        ]))
        .unwrap();

        assert_eq!(first_exhibit_item(&pages), Some(77));
    }

    #[rstest]
    fn test_first_exhibit_item_of_bare_exhibit_is_none() {
        assert_eq!(first_exhibit_item(&[]), None);
    }
}
