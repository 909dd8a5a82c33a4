#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTable {
    Event,
    Converted,
    D128,
    Dozor,
    Sia,
    Vbd4
}

impl EventTable {
    /// All event tables in report order.
    pub const ALL: [Self; 6] = [
        Self::Event,
        Self::Converted,
        Self::D128,
        Self::Dozor,
        Self::Sia,
        Self::Vbd4
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Event     => "event",
            Self::Converted => "event_converted",
            Self::D128      => "event_d128",
            Self::Dozor     => "event_dozor",
            Self::Sia       => "event_sia",
            Self::Vbd4      => "event_vbd4"
        }
    }
}

impl std::fmt::Display for EventTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceRecord {
    /// `None` when the event row has no matching device.
    pub number: Option<String>,
    pub messages: u64
}

#[derive(Debug)]
pub struct Report {
    pub table: EventTable,
    pub limit: u64,

    /// Devices in printed order, most messages first.
    pub devices: Vec<DeviceRecord>,

    /// Set when the result stream ended with an error instead of running out of rows.
    pub interrupted: Option<super::error::ReportError>
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_order() {
        let names = EventTable::ALL.iter()
            .map(EventTable::to_string)
            .collect::<Vec<_>>();

        assert_eq!(names, ["event", "event_converted", "event_d128", "event_dozor", "event_sia", "event_vbd4"]);
    }
}
