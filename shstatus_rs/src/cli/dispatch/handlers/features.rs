//! Feature-flag listing and lookup.

use crate::cli::dispatch::Streams;
use crate::error::{ExitStatus, Result};
use crate::session::StatusContext;

/// One line per flag: name padded to the longest name plus one, `on`/`off`
/// padded to three, then groups and description. Widths count characters,
/// matching how `{:<N}` pads.
pub(crate) fn list(ctx: &StatusContext<'_>, streams: &mut Streams<'_>) -> Result<ExitStatus> {
    let features = ctx.features.feature_metadata();
    let width = features
        .iter()
        .map(|f| f.name.chars().count())
        .max()
        .unwrap_or(0)
        + 1;
    for feature in &features {
        let state = if feature.enabled { "on" } else { "off" };
        writeln!(
            streams.out,
            "{:<width$}{:<3} {} {}",
            feature.name, state, feature.groups, feature.description
        )?;
    }
    Ok(ExitStatus::Success)
}

pub(crate) fn test(ctx: &StatusContext<'_>, name: &str) -> ExitStatus {
    match ctx.features.feature_test(name) {
        Some(true) => ExitStatus::Success,
        Some(false) => ExitStatus::Failure,
        None => ExitStatus::FeatureNotRecognized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::dispatch::testing::{FakeInterpreter, FakeLocator};
    use crate::job_control::JobControlCell;
    use crate::session::FeatureDescriptor;

    fn listing(features: Vec<FeatureDescriptor>) -> String {
        let interp = FakeInterpreter::default();
        let locator = FakeLocator::Fails;
        let cell = JobControlCell::default();
        let ctx = StatusContext::new(&interp, &features, &locator, &cell);
        let mut out = Vec::new();
        let mut err = Vec::new();
        list(&ctx, &mut Streams::new(&mut out, &mut err)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn non_ascii_names_stay_aligned() {
        let out = listing(vec![
            FeatureDescriptor::new("über-glob", true, "3.5", "wide"),
            FeatureDescriptor::new("ab", false, "3.0", "narrow"),
        ]);
        assert_eq!(out, "über-glob on  3.5 wide\nab        off 3.0 narrow\n");
    }

    #[test]
    fn empty_registry_prints_nothing() {
        assert_eq!(listing(Vec::new()), "");
    }
}
