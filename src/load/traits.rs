use crate::load::error::LoadError;
use crate::transform::HarvestExport;
use std::fmt::Debug;

pub trait Loadable: Debug {
    fn load(&self, export: &HarvestExport) -> Result<(), LoadError>;
}
