use crate::utils::error::Result;

/// Where rendered reports end up when they are not printed to stdout.
pub trait ReportStorage {
    fn write_report(&self, name: &str, data: &[u8]) -> Result<()>;
}
