//! History traversal over parent links.
//!
//! Ancestry is emitted in reverse topological order: a version always comes
//! before every one of its ancestors. Among versions that are ready at the
//! same time, parents are queued in declared order, so the first parent of a
//! merge is explored before the others. Each version is emitted once no
//! matter how many paths reach it.
//!
//! The walk counts, for every ancestor, how many of its children are part of
//! the history being listed, and only emits a version once all of those
//! children have been emitted. Versions on a parent cycle never reach that
//! point, which is how cycles are detected without looping.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use serde::Serialize;

use super::{LinkKind, Versioning, VersioningError};
use crate::{
    Result,
    constants::DEFAULT_BRANCH,
    version::{Version, VersionName},
};

/// One line of a history report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionSummary {
    pub name: VersionName,
    pub author: String,
    pub date: String,
    pub message: String,
    pub parents: Vec<VersionName>,
    /// Branches currently pointing at this version
    pub branches: Vec<String>,
    /// Tags currently pointing at this version
    pub tags: Vec<String>,
}

impl Versioning {
    /// Ancestry of the version `reference` resolves to, starting with that version.
    ///
    /// Fails with the resolution error if `reference` does not resolve, with
    /// `DanglingReference` if an ancestor names a missing parent, and with
    /// `CorruptHistory` if the ancestry contains a cycle.
    pub fn history(&self, reference: &str) -> Result<Vec<&Version>> {
        let start = self.get_version_from_ref(reference)?;

        // Collect the ancestry, counting how many children each ancestor has in it
        let mut children: HashMap<&str, usize> = HashMap::new();
        let mut ancestry = vec![start];
        let mut seen = HashSet::from([start.name().as_str()]);
        let mut to_process = VecDeque::from([start]);

        while let Some(version) = to_process.pop_front() {
            for parent in self.parents(version)? {
                *children.entry(parent.name().as_str()).or_default() += 1;
                if seen.insert(parent.name().as_str()) {
                    ancestry.push(parent);
                    to_process.push_back(parent);
                }
            }
        }

        // Anything in the ancestry that has the start as a parent closes a loop
        if children.contains_key(start.name().as_str()) {
            return Err(VersioningError::CorruptHistory {
                version: start.name().clone(),
            }
            .into());
        }

        let ordered = self.drain(VecDeque::from([start]), &mut children);

        if ordered.len() < ancestry.len() {
            let stuck = stuck_versions(&children);
            let version = self
                .cycle_members(&stuck)
                .into_iter()
                .next()
                .unwrap_or_else(|| start.name().clone());
            tracing::warn!(%version, "parent cycle detected during history traversal");
            return Err(VersioningError::CorruptHistory { version }.into());
        }

        Ok(ordered)
    }

    /// History report for `reference`, or for the default branch when `None`.
    pub fn log(&self, reference: Option<&str>) -> Result<Vec<VersionSummary>> {
        let reference = reference.unwrap_or(DEFAULT_BRANCH);
        Ok(self
            .history(reference)?
            .into_iter()
            .map(|version| self.summarize(version))
            .collect())
    }

    /// Build the report line for one version, including its current labels.
    pub fn summarize(&self, version: &Version) -> VersionSummary {
        VersionSummary {
            name: version.name().clone(),
            author: version.author().to_string(),
            date: version.date().to_string(),
            message: version.message().to_string(),
            parents: version.parent_names().to_vec(),
            branches: owned(self.branches_of(version.name())),
            tags: owned(self.tags_of(version.name())),
        }
    }

    /// Check the whole store for consistency.
    ///
    /// Reports every branch, tag, and parent link pointing at a missing
    /// version, and one `CorruptHistory` per parent cycle found. An empty
    /// result means every operation on this store can succeed.
    pub fn validate(&self) -> Vec<VersioningError> {
        let mut problems = Vec::new();

        for (kind, labels) in [(LinkKind::Branch, &self.branches), (LinkKind::Tag, &self.tags)] {
            for (label, target) in labels {
                if !self.versions.contains_key(target) {
                    problems.push(VersioningError::DanglingReference {
                        kind,
                        name: label.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        let mut children: HashMap<&str, usize> = HashMap::new();
        for version in self.versions.values() {
            children.entry(version.name().as_str()).or_default();
            for parent in version.parent_names() {
                if self.versions.contains_key(parent) {
                    *children.entry(parent.as_str()).or_default() += 1;
                } else {
                    problems.push(VersioningError::DanglingReference {
                        kind: LinkKind::Parent,
                        name: version.name().to_string(),
                        target: parent.clone(),
                    });
                }
            }
        }

        let heads: VecDeque<&Version> = self
            .versions
            .values()
            .filter(|version| children.get(version.name().as_str()) == Some(&0))
            .collect();
        let ordered = self.drain(heads, &mut children);

        if ordered.len() < self.versions.len() {
            let stuck = stuck_versions(&children);
            for version in self.cycle_members(&stuck) {
                problems.push(VersioningError::CorruptHistory { version });
            }
        }

        for problem in &problems {
            tracing::warn!(%problem, "versioning inconsistency");
        }
        problems
    }

    /// Emit versions whose children have all been emitted, starting from `ready`.
    ///
    /// `children` is decremented as versions are emitted; entries left above
    /// zero afterwards belong to, or descend from, a cycle.
    fn drain<'a>(
        &'a self,
        mut ready: VecDeque<&'a Version>,
        children: &mut HashMap<&'a str, usize>,
    ) -> Vec<&'a Version> {
        let mut ordered = Vec::new();

        while let Some(version) = ready.pop_front() {
            tracing::trace!(version = %version.name(), "visiting version");
            ordered.push(version);

            for parent in version.parent_names() {
                let Some(count) = children.get_mut(parent.as_str()) else {
                    continue;
                };
                *count -= 1;
                if *count == 0 {
                    if let Some(parent) = self.versions.get(parent) {
                        ready.push_back(parent);
                    }
                }
            }
        }

        ordered
    }

    /// Pick one version on each cycle among the `stuck` versions.
    ///
    /// Every stuck version still has a stuck child, so following child links
    /// from any of them must eventually revisit a version; the first revisited
    /// version lies on a cycle.
    fn cycle_members(&self, stuck: &BTreeSet<&str>) -> Vec<VersionName> {
        let mut child_of: HashMap<&str, &str> = HashMap::new();
        for name in stuck {
            let Some(version) = self.versions.get(*name) else {
                continue;
            };
            for parent in version.parent_names() {
                if stuck.contains(parent.as_str()) {
                    child_of.entry(parent.as_str()).or_insert(version.name().as_str());
                }
            }
        }

        let mut members = Vec::new();
        let mut handled: HashSet<&str> = HashSet::new();
        for start in stuck {
            let mut walk = HashSet::new();
            let mut current = *start;
            loop {
                if handled.contains(current) {
                    break;
                }
                if !walk.insert(current) {
                    members.push(VersionName::from(current));
                    break;
                }
                match child_of.get(current) {
                    Some(child) => current = *child,
                    None => break,
                }
            }
            handled.extend(walk);
        }

        members
    }
}

fn stuck_versions<'a>(children: &HashMap<&'a str, usize>) -> BTreeSet<&'a str> {
    children
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(name, _)| *name)
        .collect()
}

fn owned(labels: Vec<&str>) -> Vec<String> {
    labels.into_iter().map(str::to_string).collect()
}
