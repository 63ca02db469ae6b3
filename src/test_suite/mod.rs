//! Shared fixtures for the crate's unit tests.

use crate::extract::records::Item;

pub(crate) fn sample_item_json() -> &'static str {
    r#"{
        "id": 12,
        "url": "https://archive.example.org/api/items/12",
        "public": true,
        "featured": false,
        "added": "2019-05-20T09:14:55+00:00",
        "modified": "2020-01-07T16:42:12+00:00",
        "item_type": {
            "id": 7,
            "url": "https://archive.example.org/api/item_types/7",
            "name": "Document"
        },
        "collection": {
            "id": 3,
            "url": "https://archive.example.org/api/collections/3"
        },
        "files": {
            "count": 2,
            "url": "https://archive.example.org/api/files?item=12"
        },
        "tags": [
            {"id": 41, "url": "https://archive.example.org/api/tags/41", "name": "letters"},
            {"id": 42, "url": "https://archive.example.org/api/tags/42", "name": "1945"}
        ],
        "element_texts": [
            {
                "html": false,
                "text": "Letter from the front",
                "element_set": {"id": 1, "url": "https://archive.example.org/api/element_sets/1", "name": "Dublin Core"},
                "element": {"id": 50, "url": "https://archive.example.org/api/elements/50", "name": "Title"}
            },
            {
                "html": false,
                "text": "circa 1945",
                "element_set": {"id": 1, "url": "https://archive.example.org/api/element_sets/1", "name": "Dublin Core"},
                "element": {"id": 40, "url": "https://archive.example.org/api/elements/40", "name": "Date"}
            },
            {
                "html": false,
                "text": "[10.04.1945]",
                "element_set": {"id": 1, "url": "https://archive.example.org/api/element_sets/1", "name": "Dublin Core"},
                "element": {"id": 40, "url": "https://archive.example.org/api/elements/40", "name": "Date"}
            }
        ]
    }"#
}

fn second_item_json() -> &'static str {
    r#"{
        "id": 15,
        "url": "https://archive.example.org/api/items/15",
        "public": true,
        "featured": false,
        "item_type": {
            "id": 7,
            "url": "https://archive.example.org/api/item_types/7",
            "name": "Document"
        },
        "files": {
            "count": 0,
            "url": "https://archive.example.org/api/files?item=15"
        },
        "tags": [],
        "element_texts": [
            {
                "html": false,
                "text": "Scrapbook of clippings",
                "element_set": {"id": 1, "url": "https://archive.example.org/api/element_sets/1", "name": "Dublin Core"},
                "element": {"id": 50, "url": "https://archive.example.org/api/elements/50", "name": "Title"}
            }
        ]
    }"#
}

pub(crate) fn sample_items_json() -> String {
    format!("[{},{}]", sample_item_json(), second_item_json())
}

pub(crate) fn sample_item() -> Item {
    serde_json::from_str(sample_item_json()).expect("sample item fixture must deserialize")
}

pub(crate) fn sample_items() -> Vec<Item> {
    serde_json::from_str(&sample_items_json()).expect("sample items fixture must deserialize")
}
