//! Report export configuration.

pub struct ExportConfig {
    /// Directory exports are written into, relative to the working directory.
    pub directory: &'static str,
    /// Heading printed at the top of every PDF page.
    pub report_title: &'static str,
}

pub const EXPORT: ExportConfig = ExportConfig {
    directory: "reports",
    report_title: "Tourist Arrivals Report",
};
