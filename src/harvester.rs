use crate::Pipeline;
use crate::config::{ConfigLoader, HarvestConfig};
use crate::error::{ConstructionError, PipelineError};
use std::path::Path;

/// Façade tying a config file to a runnable pipeline.
#[derive(Debug)]
pub struct Harvester {
    pipeline: Pipeline,
}

impl Harvester {
    pub fn from_config_file(path: &Path) -> Result<Self, ConstructionError> {
        if !path.exists() {
            return Err(ConstructionError::NoConfigFileFound(path.to_path_buf()));
        }
        let config: HarvestConfig = ConfigLoader::load(path)?;
        Harvester::try_from(config)
    }

    pub fn run(&self) -> Result<(), PipelineError> {
        self.pipeline.run()?;
        Ok(())
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }
}

impl TryFrom<HarvestConfig> for Harvester {
    type Error = ConstructionError;

    fn try_from(config: HarvestConfig) -> Result<Self, Self::Error> {
        let pipeline = Pipeline::try_from(config)?;
        Ok(Self { pipeline })
    }
}
