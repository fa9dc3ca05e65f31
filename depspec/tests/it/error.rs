use color_eyre::{Result, eyre::Context};
use depspec::{Dependency, Requirement, version};
use pretty_assertions::assert_eq;

#[test]
fn error_wrappable_context() -> Result<()> {
    const INPUT: &str = "https://github.com/foo/bar@1.2.3";

    let parsed = Dependency::parse(INPUT).context("can wrap")?;
    assert_eq!(parsed.requirement(), &Requirement::Exact(version!(1, 2, 3)));

    Ok(())
}

#[test]
fn error_wrappable_withcontext() -> Result<()> {
    const INPUT: &str = "https://github.com/foo/bar@from:1.2.3";

    let parsed = Dependency::parse(INPUT).with_context(|| "can wrap")?;
    assert_eq!(
        parsed.requirement(),
        &Requirement::Range(version!(1, 2, 3)..version!(2, 0, 0))
    );

    Ok(())
}

#[test]
fn error_wrapped_names_input() {
    const INPUT: &str = "https://github.com/foo/bar@from:1.2.3junk";

    let err = Dependency::parse(INPUT)
        .context("parse dependency")
        .expect_err("must fail");
    let chain = format!("{err:?}");
    assert!(chain.contains(INPUT), "error chain must name '{INPUT}': {chain}");
}
