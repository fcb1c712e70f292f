//! Command implementations

pub mod generators;
pub mod history;
pub mod memory;
pub mod run;

use anops_front::GeneratorKind;
use anops_runtime::PipelineError;

use crate::error::CliResult;

/// Resolve a generator name, reporting unknown names as pipeline errors.
pub(crate) fn parse_generator(name: &str) -> CliResult<GeneratorKind> {
    name.parse::<GeneratorKind>()
        .map_err(|e| PipelineError::from(e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn parse_generator_names() {
        assert_eq!(parse_generator("ecg-alarm").unwrap(), GeneratorKind::EcgAlarm);
        assert!(matches!(
            parse_generator("lab-results"),
            Err(CliError::Pipeline(PipelineError::UnknownGenerator(_)))
        ));
    }
}
