//! Cloud partition selection

use crate::config::{REGION_HOLDER, RESTRICTED_REGION_PREFIX};

/// Isolated cloud deployment realm with its own domain and bucket naming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    /// Standard global partition, endpoint from a configurable template
    Aws,
    /// Restricted China partition (`amazonaws.com.cn`)
    AwsCn,
}

impl Partition {
    /// Select the partition for a region by its fixed prefix
    pub fn for_region(region: &str) -> Self {
        if region.starts_with(RESTRICTED_REGION_PREFIX) {
            Partition::AwsCn
        } else {
            Partition::Aws
        }
    }

    /// Base `Components` endpoint for the region
    ///
    /// `template` is only consulted for the standard partition; every
    /// `{Region}` placeholder in it is replaced.
    pub fn components_base(&self, region: &str, template: &str) -> String {
        match self {
            Partition::Aws => template.replace(REGION_HOLDER, region),
            Partition::AwsCn => format!(
                "https://s3.{region}.amazonaws.com.cn/amazon-ssm-{region}/Components"
            ),
        }
    }
}
