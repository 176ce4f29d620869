// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stack arena: root presenters, sheets, and their presenting links.

use smallvec::SmallVec;

use crate::{SheetContext, SheetId, SheetInteractionDelegate, SheetNode, StackError};

pub(crate) enum EntryKind {
    Root(Option<Box<dyn SheetInteractionDelegate>>),
    Sheet(SheetNode),
}

pub(crate) struct Entry {
    pub(crate) generation: u32,
    pub(crate) presenting: Option<SheetId>,
    pub(crate) presented: Option<SheetId>,
    pub(crate) kind: EntryKind,
}

impl Entry {
    fn new(generation: u32, presenting: Option<SheetId>, kind: EntryKind) -> Self {
        Self {
            generation,
            presenting,
            presented: None,
            kind,
        }
    }

    pub(crate) fn sheet(&self) -> Option<&SheetNode> {
        match &self.kind {
            EntryKind::Sheet(node) => Some(node),
            EntryKind::Root(_) => None,
        }
    }
}

/// Arena of presentation stacks.
///
/// Each stack starts at a non-modal root presenter inserted with
/// [`SheetStack::insert_root`]. Sheets are presented one over another with
/// [`SheetStack::present`]; a presenter has at most one sheet over it. Links are plain ids,
/// so a dismissed sheet simply ends any later walk that would have reached it.
#[derive(Default)]
pub struct SheetStack {
    entries: Vec<Option<Entry>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl core::fmt::Debug for SheetStack {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.entries.len();
        let alive = self.entries.iter().filter(|e| e.is_some()).count();
        f.debug_struct("SheetStack")
            .field("entries_total", &total)
            .field("entries_alive", &alive)
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl SheetStack {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a root presenter, optionally able to receive forwarded events.
    pub fn insert_root(&mut self, delegate: Option<Box<dyn SheetInteractionDelegate>>) -> SheetId {
        self.allocate(None, EntryKind::Root(delegate))
    }

    /// Present `node` over `presenting`, which may be a root or a sheet.
    pub fn present(&mut self, presenting: SheetId, node: SheetNode) -> Result<SheetId, StackError> {
        let presenter = self.entry(presenting)?;
        if presenter.presented.is_some() {
            return Err(StackError::AlreadyPresenting(presenting));
        }
        let id = self.allocate(Some(presenting), EntryKind::Sheet(node));
        if let Some(presenter) = self.entry_opt_mut(presenting) {
            presenter.presented = Some(id);
        }
        tracing::debug!(?presenting, sheet = ?id, "sheet presented");
        Ok(id)
    }

    /// Remove `id` and everything presented over it.
    ///
    /// Dismissing a root removes its whole stack.
    pub fn dismiss(&mut self, id: SheetId) -> Result<(), StackError> {
        let entry = self.entry(id)?;
        if let Some(presenting) = entry.presenting
            && let Some(presenter) = self.entry_opt_mut(presenting)
        {
            presenter.presented = None;
        }
        let mut cur = Some(id);
        while let Some(sid) = cur {
            cur = self.entry_opt(sid).and_then(|e| e.presented);
            self.entries[sid.idx()] = None;
            self.free_list.push(sid.idx());
            tracing::debug!(sheet = ?sid, "sheet dismissed");
        }
        Ok(())
    }

    /// Returns `true` if `id` refers to a live root or sheet.
    pub fn is_alive(&self, id: SheetId) -> bool {
        self.entry_opt(id).is_some()
    }

    /// Returns `true` if `id` is a live root presenter.
    pub fn is_root(&self, id: SheetId) -> bool {
        self.entry_opt(id)
            .is_some_and(|e| matches!(e.kind, EntryKind::Root(_)))
    }

    /// The node `id` is presented over.
    pub fn presenting(&self, id: SheetId) -> Option<SheetId> {
        self.entry_opt(id).and_then(|e| e.presenting)
    }

    /// The sheet presented over `id`.
    pub fn presented(&self, id: SheetId) -> Option<SheetId> {
        self.entry_opt(id).and_then(|e| e.presented)
    }

    /// The topmost node of the stack containing `id`.
    pub fn top(&self, id: SheetId) -> Option<SheetId> {
        let mut cur = self.entry_opt(id).map(|_| id)?;
        while let Some(next) = self.presented(cur) {
            cur = next;
        }
        Some(cur)
    }

    /// The sheet behind `id`.
    pub fn node(&self, id: SheetId) -> Result<&SheetNode, StackError> {
        self.entry(id)?.sheet().ok_or(StackError::NotASheet(id))
    }

    /// The sheet behind `id`, mutably.
    pub fn node_mut(&mut self, id: SheetId) -> Result<&mut SheetNode, StackError> {
        match &mut self.entry_mut(id)?.kind {
            EntryKind::Sheet(node) => Ok(node),
            EntryKind::Root(_) => Err(StackError::NotASheet(id)),
        }
    }

    /// The delegate of the root presenter `id`, if it has one.
    pub fn root_delegate_mut(
        &mut self,
        id: SheetId,
    ) -> Result<Option<&mut (dyn SheetInteractionDelegate + 'static)>, StackError> {
        match &mut self.entry_mut(id)?.kind {
            EntryKind::Root(delegate) => Ok(delegate.as_deref_mut()),
            EntryKind::Sheet(_) => Err(StackError::NotASheet(id)),
        }
    }

    /// Number of presenting links below `id`. Roots are at level `0`.
    pub fn level(&self, id: SheetId) -> Result<usize, StackError> {
        let mut level = 0;
        let mut cur = self.entry(id)?.presenting;
        while let Some(p) = cur {
            level += 1;
            cur = self.entry_opt(p).and_then(|e| e.presenting);
        }
        Ok(level)
    }

    /// `id` has nothing presented over it.
    pub fn is_top_sheet(&self, id: SheetId) -> Result<bool, StackError> {
        Ok(self.entry(id)?.presented.is_none())
    }

    /// `id` is presented directly over a root.
    pub fn is_bottom_sheet(&self, id: SheetId) -> Result<bool, StackError> {
        Ok(self.level(id)? == 1)
    }

    /// `id` is the only sheet of its stack.
    pub fn is_single_sheet(&self, id: SheetId) -> Result<bool, StackError> {
        Ok(self.is_top_sheet(id)? && self.is_bottom_sheet(id)?)
    }

    /// Ids from the root up to `id`, inclusive.
    pub fn hierarchy(&self, id: SheetId) -> Result<SmallVec<[SheetId; 4]>, StackError> {
        let mut out = SmallVec::new();
        let mut cur = Some(id);
        self.entry(id)?;
        while let Some(sid) = cur {
            out.push(sid);
            cur = self.entry_opt(sid).and_then(|e| e.presenting);
        }
        out.reverse();
        Ok(out)
    }

    /// The context `sheet` is told about when an event originates at `origin`.
    pub fn context(&self, origin: SheetId, sheet: SheetId) -> Result<SheetContext, StackError> {
        let level = self.level(sheet)?;
        let is_top_sheet = self.is_top_sheet(sheet)?;
        let is_bottom_sheet = level == 1;
        Ok(SheetContext {
            origin,
            sheet,
            level,
            is_top_sheet,
            is_bottom_sheet,
            is_single_sheet: is_top_sheet && is_bottom_sheet,
            navigation_index: None,
            is_top_of_navigation: true,
        })
    }

    pub(crate) fn entry_opt(&self, id: SheetId) -> Option<&Entry> {
        self.entries
            .get(id.idx())
            .and_then(|e| e.as_ref())
            .filter(|e| e.generation == id.1)
    }

    pub(crate) fn entry_opt_mut(&mut self, id: SheetId) -> Option<&mut Entry> {
        self.entries
            .get_mut(id.idx())
            .and_then(|e| e.as_mut())
            .filter(|e| e.generation == id.1)
    }

    pub(crate) fn entry(&self, id: SheetId) -> Result<&Entry, StackError> {
        self.entry_opt(id).ok_or(StackError::Stale(id))
    }

    pub(crate) fn entry_mut(&mut self, id: SheetId) -> Result<&mut Entry, StackError> {
        self.entry_opt_mut(id).ok_or(StackError::Stale(id))
    }

    fn allocate(&mut self, presenting: Option<SheetId>, kind: EntryKind) -> SheetId {
        // A slot whose generation is exhausted is retired rather than reused, so ids handed
        // out for it can never become live again.
        let reusable = core::iter::from_fn(|| self.free_list.pop())
            .find_map(|idx| self.generations[idx].checked_add(1).map(|g| (idx, g)));
        let (idx, generation) = if let Some((idx, generation)) = reusable {
            self.generations[idx] = generation;
            self.entries[idx] = Some(Entry::new(generation, presenting, kind));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "SheetId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.entries
                .push(Some(Entry::new(generation, presenting, kind)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "SheetId uses 32-bit indices by design."
            )]
            ((self.entries.len() - 1) as u32, generation)
        };
        SheetId::new(idx, generation)
    }
}
