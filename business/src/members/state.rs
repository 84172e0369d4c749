//! Controller state for the members table.
//!
//! Holds the working set, the search filter, the selection, the pagination
//! cursor and the row editor's buffer. Every user action is one method here;
//! the workflow commands only forward to them.

use std::any::Any;
use std::collections::HashSet;

use members_states::{State, state_assign_impl};

use super::record::{Member, MemberId};
use super::view::page_bounds;

/// Editable field of the row editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Email,
    Role,
}

#[derive(Debug, Clone)]
pub struct MembersState {
    /// Working set, in fetch order.
    members: Vec<Member>,

    /// Members matching `search`, meaningful only while a search is active.
    filtered: Vec<Member>,

    /// Lower-cased search term.
    search: String,

    selected: HashSet<MemberId>,

    /// 1-based page cursor.
    page: usize,

    editor_open: bool,

    edit_buffer: Option<Member>,
}

impl Default for MembersState {
    fn default() -> Self {
        Self {
            members: Vec::new(),
            filtered: Vec::new(),
            search: String::new(),
            selected: HashSet::new(),
            page: 1,
            editor_open: false,
            edit_buffer: None,
        }
    }
}

impl State for MembersState {
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

impl MembersState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the working set with a freshly loaded list.
    pub fn replace_members(&mut self, members: Vec<Member>) {
        self.members = members;
    }

    pub fn search(&mut self, term: &str) {
        let term = term.to_lowercase();
        if term.trim().is_empty() {
            self.filtered.clear();
        } else {
            self.filtered = self
                .members
                .iter()
                .filter(|member| member.matches(&term))
                .cloned()
                .collect();
        }
        self.search = term;
        self.page = 1;
    }

    /// Unknown ids are ignored.
    pub fn toggle_row_selection(&mut self, id: MemberId, checked: bool) {
        if !self.contains(id) {
            return;
        }
        if checked {
            self.selected.insert(id);
        } else {
            self.selected.remove(&id);
        }
    }

    /// Deselect the current page when it is fully selected, select it otherwise.
    pub fn toggle_all_on_page(&mut self) {
        let page_ids: Vec<MemberId> = self.page_rows().iter().map(|member| member.id).collect();

        if self.all_page_rows_selected() {
            for id in &page_ids {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(page_ids);
        }
    }

    /// Unknown ids leave the state untouched.
    pub fn delete_row(&mut self, id: MemberId) {
        if !self.contains(id) {
            return;
        }
        self.members.retain(|member| member.id != id);
        self.filtered.retain(|member| member.id != id);
        self.reset_after_delete();
    }

    pub fn delete_selected(&mut self) {
        let selected = &self.selected;
        self.members.retain(|member| !selected.contains(&member.id));
        self.filtered.retain(|member| !selected.contains(&member.id));
        self.reset_after_delete();
    }

    fn reset_after_delete(&mut self) {
        self.search.clear();
        self.filtered.clear();
        self.selected.clear();
        self.page = 1;
    }

    /// Callers clamp `page` to `1..=total_pages`; only page 0 is guarded here.
    pub fn change_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn begin_edit(&mut self, id: MemberId) {
        let Some(member) = self.members.iter().find(|member| member.id == id) else {
            return;
        };
        self.edit_buffer = Some(member.clone());
        self.editor_open = true;
    }

    pub fn edit_field(&mut self, field: EditField, value: impl Into<String>) {
        let Some(buffer) = self.edit_buffer.as_mut() else {
            return;
        };
        let value = value.into();
        match field {
            EditField::Name => buffer.name = value,
            EditField::Email => buffer.email = value,
            EditField::Role => buffer.role = value,
        }
    }

    /// Merge the buffer into the working set record with the same id.
    pub fn commit_edit(&mut self) {
        if let Some(buffer) = self.edit_buffer.take()
            && let Some(member) = self.members.iter_mut().find(|member| member.id == buffer.id)
        {
            member.name = buffer.name;
            member.email = buffer.email;
            member.role = buffer.role;
        }
        self.editor_open = false;
    }

    pub fn cancel_edit(&mut self) {
        self.edit_buffer = None;
        self.editor_open = false;
    }

    // =====================
    // Getters
    // =====================

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn is_search_active(&self) -> bool {
        !self.search.trim().is_empty()
    }

    /// The filtered sequence, `None` while no search is active.
    pub fn filtered(&self) -> Option<&[Member]> {
        self.is_search_active().then_some(self.filtered.as_slice())
    }

    /// The sequence being paginated: filtered while searching, the full set otherwise.
    pub fn effective_members(&self) -> &[Member] {
        self.filtered().unwrap_or(&self.members)
    }

    pub fn page_rows(&self) -> &[Member] {
        let effective = self.effective_members();
        &effective[page_bounds(effective.len(), self.page)]
    }

    pub fn all_page_rows_selected(&self) -> bool {
        let rows = self.page_rows();
        !rows.is_empty() && rows.iter().all(|member| self.selected.contains(&member.id))
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn is_selected(&self, id: MemberId) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected(&self) -> &HashSet<MemberId> {
        &self.selected
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_editor_open(&self) -> bool {
        self.editor_open
    }

    pub fn edit_buffer(&self) -> Option<&Member> {
        self.edit_buffer.as_ref()
    }

    fn contains(&self, id: MemberId) -> bool {
        self.members.iter().any(|member| member.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ustr::Ustr;

    fn id(raw: &str) -> MemberId {
        Ustr::from(raw)
    }

    fn john_and_jane() -> MembersState {
        let mut state = MembersState::new();
        state.replace_members(vec![
            Member::new("1", "John", "john@x.com", "User"),
            Member::new("2", "Jane", "jane@x.com", "Admin"),
        ]);
        state
    }

    fn numbered(count: usize) -> MembersState {
        let mut state = MembersState::new();
        state.replace_members(
            (1..=count)
                .map(|i| {
                    let role = if i % 3 == 0 { "admin" } else { "member" };
                    Member::new(
                        i.to_string(),
                        format!("Person {i}"),
                        format!("person{i}@mail.com"),
                        role,
                    )
                })
                .collect(),
        );
        state
    }

    #[test]
    fn test_initial_state() {
        let state = MembersState::new();
        assert!(state.members().is_empty());
        assert_eq!(state.page(), 1);
        assert!(!state.is_search_active());
        assert!(state.filtered().is_none());
        assert!(!state.is_editor_open());
        assert!(state.edit_buffer().is_none());
    }

    #[test]
    fn test_search_filters_every_field_case_insensitively() {
        let mut state = numbered(30);
        for term in ["ADMIN", "person1", "@MAIL", "7", "nobody"] {
            state.search(term);
            let needle = term.to_lowercase();
            let filtered = state.filtered().unwrap();

            for member in filtered {
                assert!(member.matches(&needle), "{member:?} should match {term}");
            }
            for member in state.members() {
                if !filtered.contains(member) {
                    assert!(!member.matches(&needle), "{member:?} should not match {term}");
                }
            }
        }
    }

    #[test]
    fn test_search_stores_lowercase_and_resets_page() {
        let mut state = numbered(30);
        state.change_page(3);
        state.search("ADM");

        assert_eq!(state.search_term(), "adm");
        assert_eq!(state.page(), 1);
        assert_eq!(state.filtered().map(<[Member]>::len), Some(10));
    }

    #[test]
    fn test_empty_or_blank_search_clears_filter() {
        let mut state = numbered(30);
        state.search("admin");
        assert!(state.filtered().is_some());

        state.search("");
        assert!(state.filtered().is_none());
        assert_eq!(state.effective_members().len(), 30);

        state.search("   ");
        assert!(state.filtered().is_none());
        assert_eq!(state.effective_members().len(), 30);
    }

    #[test]
    fn test_search_with_no_match_yields_empty_page() {
        let mut state = john_and_jane();
        state.search("zzz");
        assert_eq!(state.filtered().map(<[Member]>::len), Some(0));
        assert!(state.page_rows().is_empty());
        assert!(!state.all_page_rows_selected());
    }

    #[test]
    fn test_toggle_row_selection() {
        let mut state = john_and_jane();
        state.toggle_row_selection(id("1"), true);
        assert!(state.is_selected(id("1")));

        state.toggle_row_selection(id("1"), true);
        assert_eq!(state.selected_count(), 1);

        state.toggle_row_selection(id("1"), false);
        assert!(!state.is_selected(id("1")));
    }

    #[test]
    fn test_toggle_row_selection_ignores_unknown_id() {
        let mut state = john_and_jane();
        state.toggle_row_selection(id("99"), true);
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn test_toggle_all_on_page_selects_only_current_page() {
        let mut state = numbered(25);
        state.change_page(2);
        state.toggle_all_on_page();

        assert_eq!(state.selected_count(), 10);
        assert!(state.all_page_rows_selected());
        assert!(state.is_selected(id("11")));
        assert!(!state.is_selected(id("10")));
        assert!(!state.is_selected(id("21")));
    }

    #[test]
    fn test_toggle_all_on_page_twice_restores_selection() {
        let mut state = numbered(25);
        state.toggle_row_selection(id("21"), true);
        let before = state.selected().clone();

        state.toggle_all_on_page();
        state.toggle_all_on_page();
        assert_eq!(state.selected(), &before);

        state.toggle_all_on_page();
        let all_selected = state.selected().clone();
        state.toggle_all_on_page();
        state.toggle_all_on_page();
        assert_eq!(state.selected(), &all_selected);
    }

    #[test]
    fn test_toggle_all_on_page_uses_filtered_rows() {
        let mut state = john_and_jane();
        state.search("adm");
        state.toggle_all_on_page();

        assert!(state.is_selected(id("2")));
        assert!(!state.is_selected(id("1")));
    }

    #[test]
    fn test_toggle_all_on_empty_page_is_noop() {
        let mut state = MembersState::new();
        state.toggle_all_on_page();
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn test_delete_row() {
        let mut state = numbered(25);
        state.search("person 1");
        state.toggle_row_selection(id("2"), true);
        state.change_page(2);

        let target = state.members()[0].clone();
        state.delete_row(target.id);

        assert_eq!(state.members().len(), 24);
        assert_eq!(state.search_term(), "");
        assert_eq!(state.selected_count(), 0);
        assert_eq!(state.page(), 1);

        for term in [&target.name, &target.email] {
            state.search(term);
            assert!(
                state
                    .filtered()
                    .unwrap()
                    .iter()
                    .all(|member| member.id != target.id)
            );
        }
    }

    #[test]
    fn test_delete_row_removes_from_filtered_sequence() {
        let mut state = john_and_jane();
        state.search("j");
        state.delete_row(id("1"));

        assert_eq!(state.members(), &[Member::new("2", "Jane", "jane@x.com", "Admin")]);
        assert!(state.filtered().is_none());
    }

    #[test]
    fn test_delete_unknown_row_is_noop() {
        let mut state = numbered(12);
        state.search("person");
        state.toggle_row_selection(id("3"), true);
        state.change_page(2);

        state.delete_row(id("404"));

        assert_eq!(state.members().len(), 12);
        assert_eq!(state.search_term(), "person");
        assert!(state.is_selected(id("3")));
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn test_delete_selected_scenario() {
        let mut state = john_and_jane();
        state.search("adm");
        assert_eq!(
            state.filtered(),
            Some(&[Member::new("2", "Jane", "jane@x.com", "Admin")][..])
        );
        assert_eq!(super::super::view::derive_view(&state).total_pages, 1);

        state.search("");
        state.toggle_row_selection(id("1"), true);
        state.search("adm");
        state.delete_selected();

        assert_eq!(state.members(), &[Member::new("2", "Jane", "jane@x.com", "Admin")]);
        assert_eq!(state.selected_count(), 0);
        assert_eq!(state.search_term(), "");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_delete_selected_with_empty_selection_still_resets() {
        let mut state = numbered(25);
        state.search("person");
        state.change_page(2);
        state.delete_selected();

        assert_eq!(state.members().len(), 25);
        assert_eq!(state.search_term(), "");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_change_page() {
        let mut state = numbered(25);
        state.change_page(3);
        assert_eq!(state.page(), 3);
        assert_eq!(state.page_rows().len(), 5);

        state.change_page(0);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_cursor_is_not_clamped_after_shrink() {
        let mut state = numbered(11);
        state.change_page(2);
        assert_eq!(state.page_rows().len(), 1);

        // Only search/delete reset the cursor; a load that shrinks the set does not.
        state.replace_members(numbered(5).members().to_vec());
        assert_eq!(state.page(), 2);
        assert!(state.page_rows().is_empty());
    }

    #[test]
    fn test_commit_edit_changes_only_edited_field() {
        let mut state = john_and_jane();
        state.begin_edit(id("1"));
        assert!(state.is_editor_open());
        assert_eq!(state.edit_buffer().map(|m| m.name.as_str()), Some("John"));

        state.edit_field(EditField::Name, "X");
        state.commit_edit();

        assert_eq!(state.members()[0], Member::new("1", "X", "john@x.com", "User"));
        assert_eq!(state.members()[1], Member::new("2", "Jane", "jane@x.com", "Admin"));
        assert!(!state.is_editor_open());
        assert!(state.edit_buffer().is_none());
    }

    #[test]
    fn test_cancel_edit_leaves_record_untouched() {
        let mut state = john_and_jane();
        state.begin_edit(id("1"));
        state.edit_field(EditField::Name, "X");
        state.edit_field(EditField::Role, "Owner");
        state.cancel_edit();

        assert_eq!(state.members()[0], Member::new("1", "John", "john@x.com", "User"));
        assert!(!state.is_editor_open());
        assert!(state.edit_buffer().is_none());
    }

    #[test]
    fn test_commit_without_buffer_is_noop() {
        let mut state = john_and_jane();
        let before = state.members().to_vec();
        state.commit_edit();
        assert_eq!(state.members(), before.as_slice());
        assert!(!state.is_editor_open());
    }

    #[test]
    fn test_begin_edit_unknown_id_keeps_editor_closed() {
        let mut state = john_and_jane();
        state.begin_edit(id("42"));
        assert!(!state.is_editor_open());
        assert!(state.edit_buffer().is_none());
    }

    #[test]
    fn test_edits_accumulate_in_buffer() {
        let mut state = john_and_jane();
        state.begin_edit(id("2"));
        state.edit_field(EditField::Email, "jane@x.org");
        state.edit_field(EditField::Email, String::from("jane@y.org"));
        state.commit_edit();
        assert_eq!(state.members()[1], Member::new("2", "Jane", "jane@y.org", "Admin"));
    }

    #[test]
    fn test_commit_during_search_keeps_filtered_copy_until_next_search() {
        let mut state = john_and_jane();
        state.search("jo");
        state.begin_edit(id("1"));
        state.edit_field(EditField::Name, "Joseph");
        state.commit_edit();

        // The working set is updated, the filtered page still shows the old copy.
        assert_eq!(state.members()[0].name, "Joseph");
        assert_eq!(state.page_rows()[0].name, "John");

        state.search("jo");
        assert_eq!(state.page_rows()[0].name, "Joseph");
    }
}
