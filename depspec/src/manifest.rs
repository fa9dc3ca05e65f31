//! Render dependencies into a package manifest.
//!
//! The manifest itself is owned by the package toolchain;
//! this module only produces the text that assigns its dependency list.

use crate::Dependency;

/// Render the declaration assigning `dependencies` to a manifest's dependency list,
/// one [`package_clause`](Dependency::package_clause) per line.
///
/// ```
/// let deps = [
///     depspec::dependency!("https://github.com/foo/bar", "@1.2.3"),
///     depspec::dependency!("https://github.com/foo/baz", "@branch:develop"),
/// ];
/// assert_eq!(
///     depspec::manifest::dependencies_declaration(&deps),
///     [
///         r#"package.dependencies = ["#,
///         r#"    .package(url: "https://github.com/foo/bar", .exact("1.2.3")),"#,
///         r#"    .package(url: "https://github.com/foo/baz", .branch("develop"))"#,
///         r#"]"#,
///     ]
///     .join("\n"),
/// );
/// ```
pub fn dependencies_declaration<'a>(
    dependencies: impl IntoIterator<Item = &'a Dependency>,
) -> String {
    let clauses = dependencies
        .into_iter()
        .map(|dependency| format!("    {}", dependency.package_clause()))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("package.dependencies = [\n{clauses}\n]")
}

/// Append the [`dependencies_declaration`] to the text of an existing manifest.
pub fn append_dependencies<'a>(
    manifest: &str,
    dependencies: impl IntoIterator<Item = &'a Dependency>,
) -> String {
    let declaration = dependencies_declaration(dependencies);
    tracing::debug!(%declaration, "appending dependencies to manifest");
    format!("{manifest}\n{declaration}")
}
