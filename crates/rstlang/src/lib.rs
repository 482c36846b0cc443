pub mod languages;
pub mod parser;
pub mod registry;
pub mod types;

pub use registry::{
    Coverage, LanguageMapping, LanguageRegistry, LintWarning, LoadError, RegisterError,
    ResolveError, SharedRegistry, canonical_coverage, compute_suggestions, lint_mapping,
};
pub use rstlang_semantics::NameKind;
pub use types::LanguageTag;

/// Creates a [`LanguageMapping`] from literal tables.
///
/// Sections are optional but must appear in the order `directives`, `roles`,
/// `disabled_directives`, `disabled_roles`.
///
/// # Example
///
/// ```
/// use rstlang::{NameKind, language_mapping};
///
/// let mapping = language_mapping! {
///     directives {
///         "note" => "note",
///         "section-numbering" => "sectnum",
///     }
///     roles {
///         "ab" => "abbreviation",
///     }
///     disabled_directives {
///         "footnotes" => "footnotes",
///     }
/// };
///
/// assert_eq!(mapping.directive("section-numbering"), Some("sectnum"));
/// assert_eq!(mapping.role("ab"), Some("abbreviation"));
/// assert!(mapping.is_disabled(NameKind::Directive, "footnotes"));
/// assert_eq!(mapping.directive("footnotes"), None);
/// ```
#[macro_export]
macro_rules! language_mapping {
    {
        $(directives { $($dk:expr => $dv:expr),* $(,)? })?
        $(roles { $($rk:expr => $rv:expr),* $(,)? })?
        $(disabled_directives { $($ddk:expr => $ddv:expr),* $(,)? })?
        $(disabled_roles { $($drk:expr => $drv:expr),* $(,)? })?
    } => {
        {
            let mut mapping = $crate::LanguageMapping::new();
            $($(
                mapping.insert($crate::NameKind::Directive, $dk, $dv);
            )*)?
            $($(
                mapping.insert($crate::NameKind::Role, $rk, $rv);
            )*)?
            $($(
                mapping.insert_disabled($crate::NameKind::Directive, $ddk, $ddv);
            )*)?
            $($(
                mapping.insert_disabled($crate::NameKind::Role, $drk, $drv);
            )*)?
            mapping
        }
    };
}
