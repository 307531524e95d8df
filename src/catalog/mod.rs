//! The compiled-in release catalog.
//!
//! Three tables keyed by [`BridgeType`]: who to notify when an image is
//! published, how the image tag is formatted, and which repository the image
//! is pushed to. The tables are `const` data and never change at runtime.
//!
//! A missing notification entry or a broken image template is a defect in
//! these tables, not a runtime condition. The plain accessors halt with a
//! panic in that case; the `try_` variants hand the same error back so a
//! front-end can report it before exiting.

pub mod check;
mod images;
mod notifications;
mod repos;
pub mod template;

pub use check::{CatalogProblem, ProblemKind, check};
pub use images::DEFAULT_IMAGE_TEMPLATE;
pub use template::{ImageTemplate, TemplateError};

use crate::error::BridgemapError;
use crate::model::{BridgeType, NotificationTarget};

/// How a bridge appears in the notification table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStatus {
    /// Looked up directly; notifies this many targets.
    Targets(usize),
    /// Empty entry, reached only through the listed bridges' overrides.
    PassThrough(Vec<BridgeType>),
    /// No entry, reached only through the listed bridges' overrides.
    OverrideOnly(Vec<BridgeType>),
    /// No usable entry and nothing files notifications under it.
    Unconfigured,
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Targets(n) => write!(f, "{n} targets"),
            Self::PassThrough(via) => write!(f, "pass-through (via {})", join(via)),
            Self::OverrideOnly(via) => write!(f, "override only (via {})", join(via)),
            Self::Unconfigured => write!(f, "unconfigured"),
        }
    }
}

fn join(bridges: &[BridgeType]) -> String {
    bridges
        .iter()
        .map(|bridge| bridge.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn entry_status(bridge: BridgeType) -> EntryStatus {
    match notifications::entry(bridge) {
        Some(targets) if !targets.is_empty() => EntryStatus::Targets(targets.len()),
        entry => {
            let via = notifications::referenced_by(bridge);
            match (entry, via.is_empty()) {
                (_, true) => EntryStatus::Unconfigured,
                (Some(_), false) => EntryStatus::PassThrough(via),
                (None, false) => EntryStatus::OverrideOnly(via),
            }
        }
    }
}

/// The repository suffix override for `bridge`, if it has one.
pub fn repo_override(bridge: BridgeType) -> Option<&'static str> {
    repos::repo_override(bridge)
}

/// The image template `bridge` formats its tags with.
pub fn image_template(bridge: BridgeType) -> &'static str {
    images::template_for(bridge)
}

impl BridgeType {
    /// Ordered notification targets for a published image of this bridge.
    ///
    /// Order is the rollout order (development before staging before
    /// production). Halts if the bridge has no targets configured.
    pub fn notification_targets(self) -> &'static [NotificationTarget] {
        self.try_notification_targets().unwrap_or_else(|err| fatal(err))
    }

    /// Same lookup as [`notification_targets`](Self::notification_targets),
    /// returning the misconfiguration instead of halting.
    ///
    /// The error is not recoverable: it means the table must be fixed. This
    /// exists only so a front-end can report it and exit non-zero; callers
    /// must never substitute an empty target list.
    pub fn try_notification_targets(self) -> Result<&'static [NotificationTarget], BridgemapError> {
        match notifications::entry(self) {
            Some(targets) if !targets.is_empty() => {
                tracing::debug!(
                    bridge = %self,
                    count = targets.len(),
                    "resolved notification targets"
                );
                Ok(targets)
            }
            _ => Err(BridgemapError::MissingNotificationConfig { bridge: self }),
        }
    }

    /// Format the image reference for `image` built at `commit`.
    ///
    /// Halts if this bridge's template is malformed.
    pub fn format_image(self, image: &str, commit: &str) -> String {
        self.try_format_image(image, commit).unwrap_or_else(|err| fatal(err))
    }

    /// Same as [`format_image`](Self::format_image), returning a malformed
    /// template instead of halting.
    ///
    /// As with [`try_notification_targets`](Self::try_notification_targets),
    /// the error marks a broken table entry. It is returned only so a
    /// front-end can report it and exit; it is never a condition to retry or
    /// paper over with a fallback tag.
    pub fn try_format_image(self, image: &str, commit: &str) -> Result<String, BridgemapError> {
        let source = images::template_for(self);
        let template =
            ImageTemplate::parse(source).map_err(|err| BridgemapError::MalformedTemplate {
                bridge: self,
                reason: err.to_string(),
            })?;
        let formatted = template.render(image, commit);
        tracing::debug!(bridge = %self, template = source, %formatted, "formatted image");
        Ok(formatted)
    }

    /// Repository path for this bridge's images under `registry`.
    pub fn target_repo(self, registry: &str) -> String {
        match repos::repo_override(self) {
            Some(suffix) => format!("{registry}{suffix}"),
            None => repos::default_repo(registry, self),
        }
    }
}

fn fatal(err: BridgemapError) -> ! {
    tracing::error!(error = %err, "release catalog is misconfigured");
    panic!("{err}");
}
