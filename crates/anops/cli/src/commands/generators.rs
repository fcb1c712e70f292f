//! Generator listing

use anops_front::GeneratorKind;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliResult;
use crate::output::{print_output, OutputFormat};

/// Table row for generator display
#[derive(Debug, Serialize, Tabled)]
struct GeneratorRow {
    name: &'static str,
    source: &'static str,
    description: &'static str,
}

impl From<GeneratorKind> for GeneratorRow {
    fn from(kind: GeneratorKind) -> Self {
        Self {
            name: kind.name(),
            source: kind.source().tag(),
            description: kind.description(),
        }
    }
}

/// List every registered generator
pub fn execute(format: OutputFormat) -> CliResult<()> {
    let rows: Vec<GeneratorRow> = GeneratorKind::ALL.into_iter().map(Into::into).collect();
    print_output(rows, &GeneratorKind::ALL.map(GeneratorRow::from), format)
}
