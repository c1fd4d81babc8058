use anyhow::Result;
use kojo_rules::{scan_source, FactoryAssociationWithStrategy, Location, RubySource};
use rayon::prelude::*;

const FLAGGED: &str = "factory :user do\n  profile { create(:profile) }\nend\n";
const CLEAN: &str = "factory :user do\n  profile { association :profile }\nend\n";

#[test]
fn test_parallel_scans_are_independent() -> Result<()> {
    let rule = FactoryAssociationWithStrategy::new();
    let sources: Vec<&str> = (0..64)
        .map(|i| if i % 2 == 0 { FLAGGED } else { CLEAN })
        .collect();

    let counts: Vec<usize> = sources
        .par_iter()
        .map(|text| {
            let source = RubySource::parse(text)?;
            Ok::<usize, kojo_rules::ParseError>(scan_source(&rule, &source).len())
        })
        .collect::<Result<_, _>>()?;

    for (i, count) in counts.iter().enumerate() {
        let expected = if i % 2 == 0 { 1 } else { 0 };
        assert_eq!(*count, expected, "source {i}");
    }
    Ok(())
}

#[test]
fn test_repeated_scans_agree() -> Result<()> {
    let rule = FactoryAssociationWithStrategy::new();

    let runs: Vec<Vec<Location>> = (0..16)
        .into_par_iter()
        .map(|_| {
            let source = RubySource::parse(FLAGGED)?;
            let locations = scan_source(&rule, &source)
                .iter()
                .map(|offense| offense.location(&source))
                .collect();
            Ok::<Vec<Location>, kojo_rules::ParseError>(locations)
        })
        .collect::<Result<_, _>>()?;

    for pair in runs.windows(2) {
        assert_eq!(pair[0], pair[1]);
    }
    Ok(())
}
