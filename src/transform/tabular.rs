use crate::extract::records::ItemSummary;
use crate::transform::error::TransformError;
use polars::df;
use polars::prelude::DataFrame;

/// One row per (item, tag), with the item's projection repeated alongside.
/// Items without tags contribute no rows.
pub fn tags_frame(summaries: &[ItemSummary]) -> Result<DataFrame, TransformError> {
    let mut ids: Vec<i64> = Vec::new();
    let mut item_type_ids: Vec<Option<i64>> = Vec::new();
    let mut item_type_names: Vec<Option<String>> = Vec::new();
    let mut files_counts: Vec<Option<i64>> = Vec::new();
    let mut tag_ids: Vec<i64> = Vec::new();
    let mut tag_names: Vec<String> = Vec::new();

    for summary in summaries {
        for tag in &summary.tags {
            ids.push(summary.id);
            item_type_ids.push(summary.item_type_id);
            item_type_names.push(summary.item_type_name.clone());
            files_counts.push(summary.files_count);
            tag_ids.push(tag.id);
            tag_names.push(tag.name.clone());
        }
    }

    let frame = df! {
        "id" => ids,
        "item_type__id" => item_type_ids,
        "item_type__name" => item_type_names,
        "files__count" => files_counts,
        "tags__id" => tag_ids,
        "tags__name" => tag_names,
    }?;
    Ok(frame)
}

/// One row per (item, element text). Items without element texts
/// contribute no rows; absent item-type metadata yields nulls.
pub fn element_texts_frame(summaries: &[ItemSummary]) -> Result<DataFrame, TransformError> {
    let mut ids: Vec<i64> = Vec::new();
    let mut item_type_ids: Vec<Option<i64>> = Vec::new();
    let mut item_type_names: Vec<Option<String>> = Vec::new();
    let mut files_counts: Vec<Option<i64>> = Vec::new();
    let mut element_set_ids: Vec<i64> = Vec::new();
    let mut element_set_names: Vec<Option<String>> = Vec::new();
    let mut element_ids: Vec<i64> = Vec::new();
    let mut element_names: Vec<Option<String>> = Vec::new();
    let mut texts: Vec<String> = Vec::new();

    for summary in summaries {
        for element_text in &summary.element_texts {
            ids.push(summary.id);
            item_type_ids.push(summary.item_type_id);
            item_type_names.push(summary.item_type_name.clone());
            files_counts.push(summary.files_count);
            element_set_ids.push(element_text.element_set.id);
            element_set_names.push(element_text.element_set.name.clone());
            element_ids.push(element_text.element.id);
            element_names.push(element_text.element.name.clone());
            texts.push(element_text.text.clone());
        }
    }

    let frame = df! {
        "id" => ids,
        "item_type__id" => item_type_ids,
        "item_type__name" => item_type_names,
        "files__count" => files_counts,
        "element_set__id" => element_set_ids,
        "element_set__name" => element_set_names,
        "element__id" => element_ids,
        "element__name" => element_names,
        "text" => texts,
    }?;
    Ok(frame)
}
