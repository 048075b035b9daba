//! Transformed per-run tables.

use covmin_model::{
    DerivedFields, EntityColumn, PRIMER_SET_NOT_SPECIFIED, PublishedColumn, RunName, SampleRecord,
};
use polars::prelude::{Column, DataFrame};

use crate::error::Result;

/// One output row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRow {
    pub record: SampleRecord,
    pub derived: DerivedFields,
}

impl RunRow {
    /// Value of `column` as written to the table.
    pub fn value(&self, column: PublishedColumn) -> &str {
        match column {
            PublishedColumn::Entity => &self.record.alias,
            PublishedColumn::Barcode => &self.record.barcode,
            PublishedColumn::SeqRun => &self.derived.seq_run,
            PublishedColumn::DownloadDate => &self.derived.download_date,
            PublishedColumn::TechPlatform => &self.derived.tech_platform,
            PublishedColumn::ReadType => &self.derived.read_type,
            PublishedColumn::PrimerSet => self
                .record
                .primer_set
                .as_deref()
                .unwrap_or(PRIMER_SET_NOT_SPECIFIED),
            PublishedColumn::PlateName => self.record.plate_name.as_deref().unwrap_or_default(),
            PublishedColumn::PlateSampleWell => {
                self.record.plate_well.as_deref().unwrap_or_default()
            }
            PublishedColumn::OutDir => &self.derived.output_directory,
            PublishedColumn::FastqDir => &self.derived.fastq_directory,
        }
    }
}

/// All rows of one run under that run's entity column.
#[derive(Debug, Clone)]
pub struct RunTable {
    run: RunName,
    entity: EntityColumn,
    rows: Vec<RunRow>,
    controls_renamed: usize,
}

impl RunTable {
    pub fn new(run: RunName, entity: EntityColumn, rows: Vec<RunRow>, controls_renamed: usize) -> Self {
        Self {
            run,
            entity,
            rows,
            controls_renamed,
        }
    }

    pub fn run(&self) -> &RunName {
        &self.run
    }

    pub fn entity(&self) -> &EntityColumn {
        &self.entity
    }

    pub fn rows(&self) -> &[RunRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of control samples whose alias was rewritten.
    pub fn controls_renamed(&self) -> usize {
        self.controls_renamed
    }

    /// Column headers in output order.
    pub fn column_names(&self) -> Vec<String> {
        PublishedColumn::ALL
            .iter()
            .map(|column| match column.fixed_name() {
                Some(name) => name.to_string(),
                None => self.entity.header(),
            })
            .collect()
    }

    /// Builds a string-typed DataFrame in output order.
    ///
    /// Empty values are stored as nulls so writers emit empty fields.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let mut columns = Vec::with_capacity(PublishedColumn::ALL.len());
        for (column, name) in PublishedColumn::ALL.iter().zip(self.column_names()) {
            let values: Vec<Option<&str>> = self
                .rows
                .iter()
                .map(|row| Some(row.value(*column)).filter(|value| !value.is_empty()))
                .collect();
            columns.push(Column::new(name.into(), values));
        }
        DataFrame::new(columns).map_err(Into::into)
    }
}
