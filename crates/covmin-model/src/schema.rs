//! Column names and the published column order.

/// Canonical column names used after alias normalization and in output tables.
pub mod columns {
    /// Sample identifier column in the source sheet.
    pub const ALIAS: &str = "Alias";
    pub const BARCODE: &str = "barcode";
    pub const SEQ_RUN: &str = "seq_run";
    pub const DOWNLOAD_DATE: &str = "download_date";
    pub const TECH_PLATFORM: &str = "tech_platform";
    pub const READ_TYPE: &str = "read_type";
    pub const PRIMER_SET: &str = "primer_set";
    pub const PLATE_NAME: &str = "plate_name";
    pub const PLATE_SAMPLE_WELL: &str = "plate_sample_well";
    pub const OUT_DIR: &str = "out_dir";
    pub const FASTQ_DIR: &str = "fastq_dir";
}

/// Columns of a published data table, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublishedColumn {
    /// The entity column; its header depends on the run.
    Entity,
    Barcode,
    SeqRun,
    DownloadDate,
    TechPlatform,
    ReadType,
    PrimerSet,
    PlateName,
    PlateSampleWell,
    OutDir,
    FastqDir,
}

impl PublishedColumn {
    /// Every column in output order.
    pub const ALL: [PublishedColumn; 11] = [
        PublishedColumn::Entity,
        PublishedColumn::Barcode,
        PublishedColumn::SeqRun,
        PublishedColumn::DownloadDate,
        PublishedColumn::TechPlatform,
        PublishedColumn::ReadType,
        PublishedColumn::PrimerSet,
        PublishedColumn::PlateName,
        PublishedColumn::PlateSampleWell,
        PublishedColumn::OutDir,
        PublishedColumn::FastqDir,
    ];

    /// Fixed header, `None` for the entity column.
    pub const fn fixed_name(self) -> Option<&'static str> {
        match self {
            Self::Entity => None,
            Self::Barcode => Some(columns::BARCODE),
            Self::SeqRun => Some(columns::SEQ_RUN),
            Self::DownloadDate => Some(columns::DOWNLOAD_DATE),
            Self::TechPlatform => Some(columns::TECH_PLATFORM),
            Self::ReadType => Some(columns::READ_TYPE),
            Self::PrimerSet => Some(columns::PRIMER_SET),
            Self::PlateName => Some(columns::PLATE_NAME),
            Self::PlateSampleWell => Some(columns::PLATE_SAMPLE_WELL),
            Self::OutDir => Some(columns::OUT_DIR),
            Self::FastqDir => Some(columns::FASTQ_DIR),
        }
    }
}
