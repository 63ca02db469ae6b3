/// Public site URL for an item, for linking exports back to the archive.
pub fn public_item_url(site_base_url: &str, item_id: i64) -> String {
    format!(
        "{}/items/show/{item_id}",
        site_base_url.trim_end_matches('/')
    )
}
