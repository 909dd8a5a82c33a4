use super::tables::EventTable;

pub const DATABASE_FILE_NAME: &str = "data.db";

pub const MAX_DEVICES: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Database file name, resolved against the working directory.
    pub database_file: String,

    /// Tables to report, in order.
    pub tables: Vec<EventTable>,

    /// Upper bound of rows printed per table.
    pub max_devices: u64
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            database_file: String::from(DATABASE_FILE_NAME),
            tables: EventTable::ALL.to_vec(),
            max_devices: MAX_DEVICES
        }
    }
}

impl ReportConfig {
    /// Number of rows to print for a table holding `row_count` distinct devices.
    #[inline]
    pub fn limit(&self, row_count: u64) -> u64 {
        row_count.min(self.max_devices)
    }
}
