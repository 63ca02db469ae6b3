use crate::config::{CategoryMap, HarvestConfig, LoaderConfig};
use crate::error::{ConstructionError, PipelineError};
use crate::extract::records::{Item, ItemSummary};
use crate::extract::OmekaClient;
use crate::load::FileSystemLoader;
use crate::load::traits::Loadable;
use crate::transform::dates::standardize;
use crate::transform::file_urls::{FileUrlKind, extract_file_urls};
use crate::transform::tabular::{element_texts_frame, tags_frame};
use crate::transform::HarvestExport;
use log::info;
use std::collections::BTreeMap;
use validator::Validate;

#[derive(Debug)]
pub struct Pipeline {
    pub(crate) client: OmekaClient,
    pub(crate) loader: Box<dyn Loadable>,
    pub(crate) field_categories: Option<BTreeMap<String, String>>,
}

impl Pipeline {
    pub fn new(
        client: OmekaClient,
        loader: Box<dyn Loadable>,
        field_categories: Option<BTreeMap<String, String>>,
    ) -> Pipeline {
        Pipeline {
            client,
            loader,
            field_categories,
        }
    }

    pub fn run(&self) -> Result<(), PipelineError> {
        let items = self.extract()?;
        let export = self.transform(&items)?;
        self.load(&export)?;
        Ok(())
    }

    pub fn extract(&self) -> Result<Vec<Item>, PipelineError> {
        info!("Starting extract from {}", self.client.base_url());
        let items = self.client.get_items()?;
        info!("Concluded extraction. Retrieved {} items", items.len());
        Ok(items)
    }

    pub fn transform(&self, items: &[Item]) -> Result<HarvestExport, PipelineError> {
        info!("Starting transformation");
        let summaries: Vec<ItemSummary> = items.iter().map(ItemSummary::from).collect();

        let tags = tags_frame(&summaries)?;
        let element_texts = element_texts_frame(&summaries)?;
        let dates: BTreeMap<_, _> = summaries
            .iter()
            .map(|summary| (summary.id, standardize(&summary.element_text_fields())))
            .filter(|(_, fields)| !fields.is_empty())
            .collect();

        info!(
            "Concluded transformation. {} tag rows, {} element-text rows, dates for {} items",
            tags.height(),
            element_texts.height(),
            dates.len()
        );
        Ok(HarvestExport {
            tags,
            element_texts,
            dates,
            field_categories: self.field_categories.clone(),
        })
    }

    pub fn load(&self, export: &HarvestExport) -> Result<(), PipelineError> {
        self.loader.load(export)?;

        info!("Concluded loading");
        Ok(())
    }

    /// One rendition's URLs for every file attached to an item.
    pub fn file_urls(
        &self,
        item_id: i64,
        kind: FileUrlKind,
    ) -> Result<Vec<String>, PipelineError> {
        let files = self.client.get_files_by_item(item_id)?;
        Ok(extract_file_urls(&files, kind))
    }
}

impl TryFrom<HarvestConfig> for Pipeline {
    type Error = ConstructionError;

    fn try_from(config: HarvestConfig) -> Result<Self, Self::Error> {
        config.validate()?;

        let field_categories = match &config.category_map {
            Some(path) => Some(CategoryMap::load(path)?.invert()),
            None => None,
        };

        let client = OmekaClient::new(config.api.base_url, config.api.api_key);
        let LoaderConfig::FileSystem {
            output_dir,
            create_dir,
        } = config.loader;
        let loader = Box::new(FileSystemLoader::new(output_dir, create_dir));

        Ok(Pipeline::new(client, loader, field_categories))
    }
}
