//! Derived view of the members table.
//!
//! `derive_view` is a pure function of [`MembersState`]; `MembersViewCompute`
//! re-runs it whenever the state is touched so the UI only renders cached rows.

use std::any::{Any, TypeId};
use std::ops::Range;

use members_states::{Compute, ComputeDeps, Dep, State, Updater, state_assign_impl};

use super::record::Member;
use super::state::MembersState;

/// Fixed number of rows per page.
pub const PAGE_SIZE: usize = 10;

/// Index range of `page` (1-based) within a sequence of `len` rows.
///
/// Page 0 and pages past the end yield an empty range.
pub fn page_bounds(len: usize, page: usize) -> Range<usize> {
    if page == 0 {
        return 0..0;
    }
    let start = (page - 1).saturating_mul(PAGE_SIZE).min(len);
    let end = page.saturating_mul(PAGE_SIZE).min(len);
    start..end
}

pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Everything the table needs for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembersView {
    pub rows: Vec<Member>,
    pub page: usize,
    pub total_pages: usize,
    /// Length of the sequence being paginated (filtered or full).
    pub effective_len: usize,
    pub all_page_rows_selected: bool,
    pub selected_count: usize,
}

pub fn derive_view(state: &MembersState) -> MembersView {
    let effective = state.effective_members();
    let rows = state.page_rows().to_vec();

    MembersView {
        all_page_rows_selected: state.all_page_rows_selected(),
        rows,
        page: state.page(),
        total_pages: total_pages(effective.len()),
        effective_len: effective.len(),
        selected_count: state.selected_count(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct MembersViewCompute {
    pub view: MembersView,
}

impl State for MembersViewCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

impl Compute for MembersViewCompute {
    fn deps(&self) -> ComputeDeps {
        (vec![TypeId::of::<MembersState>()], Vec::new())
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let view = derive_view(deps.state::<MembersState>());
        log::trace!(
            "members view: page {}/{} ({} rows)",
            view.page,
            view.total_pages,
            view.rows.len()
        );
        updater.set(Self { view });
    }
}
