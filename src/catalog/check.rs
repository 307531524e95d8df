use serde::Serialize;

use super::notifications::{self, EntryLookup};
use super::template::ImageTemplate;
use super::{images, repos};
use crate::model::BridgeType;

type TemplateLookup = fn(BridgeType) -> &'static str;
type RepoLookup = fn(BridgeType) -> Option<&'static str>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "detail")]
pub enum ProblemKind {
    MalformedTemplate(String),
    TemplateWithoutCommit,
    UnreferencedPassThrough,
    Orphan,
    RepoSuffixWithoutSlash(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogProblem {
    pub bridge: BridgeType,
    #[serde(flatten)]
    pub kind: ProblemKind,
}

impl std::fmt::Display for CatalogProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bridge = self.bridge;
        match &self.kind {
            ProblemKind::MalformedTemplate(reason) => {
                write!(f, "{bridge}: malformed image template: {reason}")
            }
            ProblemKind::TemplateWithoutCommit => {
                write!(f, "{bridge}: image template has no {{commit}} placeholder")
            }
            ProblemKind::UnreferencedPassThrough => write!(
                f,
                "{bridge}: empty notification entry that no other bridge files under"
            ),
            ProblemKind::Orphan => write!(
                f,
                "{bridge}: no notification entry and no other bridge files under it"
            ),
            ProblemKind::RepoSuffixWithoutSlash(suffix) => write!(
                f,
                "{bridge}: repository suffix '{suffix}' does not start with '/'"
            ),
        }
    }
}

/// Walk the whole catalog and report every inconsistency found.
///
/// Unlike the per-bridge accessors this never halts, so a CI job can list all
/// problems at once.
pub fn check() -> Vec<CatalogProblem> {
    let problems = check_tables(notifications::entry, images::template_for, repos::repo_override);
    tracing::debug!(problems = problems.len(), "checked release catalog");
    problems
}

fn check_tables(
    entry: EntryLookup,
    template_for: TemplateLookup,
    repo_override: RepoLookup,
) -> Vec<CatalogProblem> {
    let mut problems = Vec::new();

    for bridge in BridgeType::ALL {
        let mut report = |kind| problems.push(CatalogProblem { bridge, kind });

        match ImageTemplate::parse(template_for(bridge)) {
            Ok(template) if !template.has_commit() => report(ProblemKind::TemplateWithoutCommit),
            Ok(_) => {}
            Err(err) => report(ProblemKind::MalformedTemplate(err.to_string())),
        }

        let targets = entry(bridge);
        if targets.is_none_or(|targets| targets.is_empty())
            && notifications::referenced_in(entry, bridge).is_empty()
        {
            report(match targets {
                Some(_) => ProblemKind::UnreferencedPassThrough,
                None => ProblemKind::Orphan,
            });
        }

        if let Some(suffix) = repo_override(bridge) {
            if !suffix.starts_with('/') {
                report(ProblemKind::RepoSuffixWithoutSlash(suffix));
            }
        }
    }

    problems
}
