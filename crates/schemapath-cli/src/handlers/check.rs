//! Check command handler

use super::utils::resolve_schema_path;
use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use crate::report::{CheckReport, PathOutcome};
use schemapath_core::{FailurePolicy, PathType};
use schemapath_schemas::SchemaLoader;
use tracing::{debug, info, instrument, warn};

/// Handle the check command
#[instrument(skip(config, output), fields(schema = %args.schema.display(), paths = args.paths.len()))]
pub fn handle_check(args: CheckArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("check_command", &format!("schema: {}", args.schema.display()));

    let schema_path = resolve_schema_path(&args.schema, config)?;
    debug!(path = %schema_path.display(), "Resolved schema path");

    let document = {
        let _load_timer = Timer::new("schema_loading");
        SchemaLoader::new().load_file(&schema_path)?
    };

    let policy = args
        .policy
        .map(FailurePolicy::from)
        .unwrap_or(config.validation.failure_policy);
    let path_type = PathType::new(document).with_policy(policy);

    let mut report = CheckReport::new(schema_path.display().to_string(), policy);
    for input in &args.paths {
        let result = if args.json {
            path_type.from_json(input)
        } else {
            path_type.parse(input)
        };

        match result {
            Ok(path) => report.push(PathOutcome::valid(input.as_str(), &path)),
            Err(e) if e.is_path_error() => {
                warn!(path = %input, error = %e, "Path rejected");
                report.push(PathOutcome::invalid(input.as_str(), &e));
            }
            Err(e) => {
                output.error(&format!("Schema {} cannot be walked", schema_path.display()))?;
                return Err(e.into());
            }
        }
    }

    info!(
        total = report.total(),
        invalid = report.invalid_count(),
        "Check completed"
    );
    output.check_report(&report)?;

    match report.invalid_count() {
        0 => Ok(()),
        invalid => Err(Error::InvalidPaths {
            invalid,
            total: report.total(),
        }),
    }
}
